//! Aggregate module
//!
//! Aggregates are folded from the records the walker produces.

pub mod account;

pub use account::{AccountAggregate, EventReference};

/// Aggregate trait that all aggregates must implement
pub trait Aggregate: Sized {
    /// The type of events this aggregate handles
    type Event;

    /// Get the aggregate ID
    fn id(&self) -> &str;

    /// Apply an event to update the aggregate state
    fn apply(self, event: Self::Event) -> Self;
}
