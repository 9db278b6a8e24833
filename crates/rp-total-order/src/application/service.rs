//! Ranking Service
//!
//! Main service implementing RankingApi.

use crate::config::OrderConfig;
use crate::domain::entities::TotalOrder;
use crate::domain::errors::OrderError;
use crate::domain::value_objects::{Constraint, ItemId};
use crate::ports::inbound::RankingApi;

use tracing::{debug, info};

/// Ranking Service
///
/// Orchestrates the ranking pipeline:
/// 1. Build an identity-ordered total order
/// 2. Apply constraints weakest to strongest
/// 3. Drain the final order
pub struct RankingService {
    config: OrderConfig,
}

impl RankingService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: OrderConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: OrderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OrderConfig {
        &self.config
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingApi for RankingService {
    fn rank(
        &self,
        item_count: usize,
        constraints: &[Constraint],
    ) -> Result<Vec<ItemId>, OrderError> {
        info!(
            item_count,
            constraint_count = constraints.len(),
            "Ranking items"
        );

        // 1. Build
        let mut order = self.build_order(item_count)?;

        // 2. Apply
        let relocated = self.apply_constraints(&mut order, constraints)?;

        // 3. Drain
        let ranking = order.to_vec();

        info!(
            item_count,
            relocated,
            winner = order.head(),
            "Ranking complete"
        );

        Ok(ranking)
    }

    fn build_order(&self, item_count: usize) -> Result<TotalOrder, OrderError> {
        TotalOrder::with_config(item_count, self.config.clone())
    }

    fn apply_constraints(
        &self,
        order: &mut TotalOrder,
        constraints: &[Constraint],
    ) -> Result<usize, OrderError> {
        let relocated = order.insert_constraints(constraints.iter().copied())?;
        debug!(
            constraint_count = constraints.len(),
            relocated, "Constraints applied"
        );
        Ok(relocated)
    }
}
