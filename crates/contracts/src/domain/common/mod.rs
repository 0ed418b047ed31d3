//! Common types and traits for catalog aggregates

pub mod aggregate_id;
pub mod entity_metadata;

// Re-exports
pub use aggregate_id::AggregateId;
pub use entity_metadata::EntityMetadata;
