//! Registry of consumed edge weights.

use std::collections::BTreeMap;

use sl_core::Weight;
use sl_graph::EdgeKey;

use crate::error::{LabelingError, LabelingResult};

/// Two edges that ended up with the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightCollision {
    pub weight: Weight,
    /// Edge that claimed the weight first.
    pub first: EdgeKey,
    pub second: EdgeKey,
}

/// Which edge owns each consumed weight.
#[derive(Debug, Clone, Default)]
pub struct WeightRegistry {
    owners: BTreeMap<Weight, EdgeKey>,
    collisions: Vec<WeightCollision>,
}

impl WeightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `weight` for `edge`, refusing a weight that is already owned.
    pub fn commit(&mut self, edge: EdgeKey, weight: Weight) -> LabelingResult<()> {
        if let Some(&previous) = self.owners.get(&weight) {
            return Err(LabelingError::WeightCollision {
                edge,
                previous,
                weight,
            });
        }
        self.owners.insert(weight, edge);
        Ok(())
    }

    /// Claim `weight` for `edge`; a repeat is kept on the collision list
    /// instead of failing, and the first owner stays registered.
    pub fn record(&mut self, edge: EdgeKey, weight: Weight) -> Option<WeightCollision> {
        match self.owners.get(&weight) {
            Some(&first) => {
                let collision = WeightCollision {
                    weight,
                    first,
                    second: edge,
                };
                self.collisions.push(collision);
                Some(collision)
            }
            None => {
                self.owners.insert(weight, edge);
                None
            }
        }
    }

    pub fn contains(&self, weight: Weight) -> bool {
        self.owners.contains_key(&weight)
    }

    /// Edge owning `weight`, if consumed.
    pub fn owner(&self, weight: Weight) -> Option<EdgeKey> {
        self.owners.get(&weight).copied()
    }

    /// Number of distinct consumed weights.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }

    pub fn collisions(&self) -> &[WeightCollision] {
        &self.collisions
    }

    pub fn into_collisions(self) -> Vec<WeightCollision> {
        self.collisions
    }
}
