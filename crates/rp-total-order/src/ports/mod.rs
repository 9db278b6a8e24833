//! Ports module for the total order
//!
//! Defines the inbound (API) port trait.

pub mod inbound;

pub use inbound::RankingApi;
