//! Domain module for the total order
//!
//! Contains the order entity, value objects, errors, and invariants.

pub mod entities;
pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use entities::TotalOrder;
pub use errors::*;
pub use value_objects::*;
