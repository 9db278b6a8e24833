//! # Ranked-Pairs Total Order
//!
//! Incrementally maintained strict total order over `n` items, driven by
//! pairwise precedence constraints. Applying a ranked-pairs tally's pairs
//! from weakest to strongest leaves the candidate ranking in the order.
//!
//! ## Architecture
//!
//! - **Domain**: `TotalOrder` (linked chain + descendant bitsets), value objects, errors, invariants
//! - **Algorithms**: relocation with descendant cache repair, head-first traversal
//! - **Ports**: Inbound (`RankingApi`)
//! - **Application**: `RankingService` orchestration
//!
//! ## Example
//!
//! ```
//! use rp_total_order::TotalOrder;
//!
//! let mut order = TotalOrder::new(3)?;
//! order.insert_constraints([(2usize, 0), (1, 2)])?;
//!
//! assert_eq!(order.to_vec(), vec![1, 2, 0]);
//! # Ok::<(), rp_total_order::OrderError>(())
//! ```
//!
//! There is no cycle rejection: a constraint that contradicts the current
//! order simply overrides it. Supply the weakest constraints first.

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

pub use algorithms::OrderIter;
pub use application::service::RankingService;
pub use config::OrderConfig;
pub use domain::entities::TotalOrder;
pub use domain::errors::{InvalidItemReason, OrderError};
pub use domain::value_objects::*;
pub use ports::inbound::RankingApi;
