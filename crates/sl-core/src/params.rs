//! Immutable configuration record for a star-graph construction.
//!
//! `StarParams` fixes the family, branch count `n`, fan-out `m` and label bound
//! `k` once, up front. Builders and labelers receive it by reference and never
//! consult any other source of configuration.

use core::fmt;
use core::str::FromStr;

use crate::error::{SlError, SlResult};

/// Largest vertex count accepted; keeps every derived weight inside `u32`.
pub const MAX_ORDER: u64 = 1 << 28;

/// Largest label bound accepted, default or explicit.
pub const MAX_K: u64 = 2 * MAX_ORDER;

/// The three graph families the labeling schemes are defined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Family {
    /// Homogeneous amalgamated star `S_n,3`: two leaves per branch.
    #[cfg_attr(feature = "serde", serde(rename = "s_n_3", alias = "sn3"))]
    AmalgamatedThree,
    /// Amalgamated star `S_n,m`: `m - 1` leaves per branch.
    #[cfg_attr(feature = "serde", serde(rename = "s_n_m", alias = "snm"))]
    Amalgamated,
    /// Snowflake star: `S_n,3` plus a cycle through the branches.
    Snowflake,
}

impl Family {
    pub const ALL: [Family; 3] = [
        Family::AmalgamatedThree,
        Family::Amalgamated,
        Family::Snowflake,
    ];

    /// Smallest branch count the family's construction accepts.
    pub fn min_branches(self) -> u32 {
        match self {
            Family::AmalgamatedThree => 1,
            // branch step divides by n - 1
            Family::Amalgamated => 2,
            // a shorter branch cycle would repeat an edge
            Family::Snowflake => 3,
        }
    }

    /// Short stable name, also accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Family::AmalgamatedThree => "s_n_3",
            Family::Amalgamated => "s_n_m",
            Family::Snowflake => "snowflake",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s_n_3" | "sn3" | "s3" => Ok(Family::AmalgamatedThree),
            "s_n_m" | "snm" => Ok(Family::Amalgamated),
            "snowflake" | "flake" => Ok(Family::Snowflake),
            other => Err(format!(
                "unknown family `{other}` (expected s_n_3, s_n_m or snowflake)"
            )),
        }
    }
}

/// Validated, immutable shape and bound of one construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarParams {
    family: Family,
    n: u32,
    m: u32,
    k: u32,
}

impl StarParams {
    /// Validate a configuration.
    ///
    /// `m` is only read for [`Family::Amalgamated`]; the other families fix it
    /// at 3 (two leaves per branch). `k` falls back to the family default.
    pub fn new(family: Family, n: u32, m: Option<u32>, k: Option<u32>) -> SlResult<Self> {
        let min_n = family.min_branches();
        if n < min_n {
            return Err(SlError::InvalidArg {
                what: "branch count n",
                value: n.into(),
                min: min_n.into(),
            });
        }

        let m = match family {
            Family::Amalgamated => m.ok_or(SlError::InvalidArg {
                what: "fan-out m",
                value: 0,
                min: 1,
            })?,
            Family::AmalgamatedThree | Family::Snowflake => 3,
        };
        if m < 1 {
            return Err(SlError::InvalidArg {
                what: "fan-out m",
                value: m.into(),
                min: 1,
            });
        }

        let order = 1 + u64::from(n) * u64::from(m);
        if order > MAX_ORDER {
            return Err(SlError::Overflow {
                what: "vertex count",
                value: order,
            });
        }

        let k = match k {
            Some(0) => {
                return Err(SlError::InvalidArg {
                    what: "label bound k",
                    value: 0,
                    min: 1,
                });
            }
            Some(k) => k,
            None => default_k(family, n, m),
        };
        // the greedy pool holds 2k - 1 weights
        if u64::from(k) > MAX_K {
            return Err(SlError::Overflow {
                what: "label bound k",
                value: k.into(),
            });
        }

        Ok(Self { family, n, m, k })
    }

    /// `S_n,3` with its default bound.
    pub fn amalgamated_three(n: u32) -> SlResult<Self> {
        Self::new(Family::AmalgamatedThree, n, None, None)
    }

    /// `S_n,m` with its default bound.
    pub fn amalgamated(n: u32, m: u32) -> SlResult<Self> {
        Self::new(Family::Amalgamated, n, Some(m), None)
    }

    /// Snowflake star with its default bound.
    pub fn snowflake(n: u32) -> SlResult<Self> {
        Self::new(Family::Snowflake, n, None, None)
    }

    /// Same shape with an explicit label bound.
    pub fn with_k(self, k: u32) -> SlResult<Self> {
        Self::new(self.family, self.n, Some(self.m), Some(k))
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Number of branches.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Fan-out per branch, counting the branch itself.
    pub fn m(&self) -> u32 {
        self.m
    }

    /// Label bound.
    pub fn k(&self) -> u32 {
        self.k
    }

    pub fn leaves_per_branch(&self) -> u32 {
        self.m - 1
    }

    /// Total vertex count `1 + n + n * leaves`.
    pub fn order(&self) -> u32 {
        1 + self.n * self.m
    }

    /// Total edge count, including the snowflake's branch cycle.
    pub fn edge_count(&self) -> u32 {
        let tree_edges = self.n * self.m;
        match self.family {
            Family::Snowflake => tree_edges + self.n,
            Family::AmalgamatedThree | Family::Amalgamated => tree_edges,
        }
    }

    /// Identifier index of leaf `slot` (1-based) of branch `branch` (1-based).
    pub fn leaf_index(&self, branch: u32, slot: u32) -> u32 {
        self.n + (branch - 1) * self.leaves_per_branch() + slot
    }
}

impl fmt::Display for StarParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (n={}, m={}, k={})",
            self.family, self.n, self.m, self.k
        )
    }
}

/// Default label bound of each family's scheme.
pub fn default_k(family: Family, n: u32, m: u32) -> u32 {
    let n64 = u64::from(n);
    let bound = match family {
        Family::AmalgamatedThree | Family::Amalgamated => (u64::from(m) * n64 + 1).div_ceil(2),
        Family::Snowflake => {
            let edges = 4 * n64;
            let order = 3 * n64 + 1;
            (edges as f64 * (order as f64).log2()).ceil() as u64
        }
    };
    u32::try_from(bound).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amalgamated_three_shape() {
        let p = StarParams::amalgamated_three(3).unwrap();
        assert_eq!(p.m(), 3);
        assert_eq!(p.leaves_per_branch(), 2);
        assert_eq!(p.order(), 10);
        assert_eq!(p.edge_count(), 9);
        assert_eq!(p.k(), 5);
    }

    #[test]
    fn amalgamated_default_k() {
        let p = StarParams::amalgamated(3, 2).unwrap();
        assert_eq!(p.k(), 4);
        assert_eq!(p.order(), 7);
        assert_eq!(p.edge_count(), 6);

        let p = StarParams::amalgamated(4, 4).unwrap();
        assert_eq!(p.k(), 9);
        assert_eq!(p.order(), 17);
    }

    #[test]
    fn snowflake_shape_and_bound() {
        let p = StarParams::snowflake(5).unwrap();
        assert_eq!(p.order(), 16);
        assert_eq!(p.edge_count(), 20);
        // 20 * log2(16)
        assert_eq!(p.k(), 80);
    }

    #[test]
    fn rejects_small_n() {
        assert!(StarParams::amalgamated_three(0).is_err());
        assert!(StarParams::amalgamated(1, 3).is_err());
        assert!(StarParams::snowflake(2).is_err());
        assert!(matches!(
            StarParams::snowflake(2),
            Err(SlError::InvalidArg { min: 3, .. })
        ));
    }

    #[test]
    fn rejects_bad_m_and_k() {
        assert!(StarParams::amalgamated(3, 0).is_err());
        assert!(StarParams::new(Family::Amalgamated, 3, None, None).is_err());
        assert!(StarParams::new(Family::Amalgamated, 3, Some(2), Some(0)).is_err());
        assert!(StarParams::new(Family::AmalgamatedThree, 3, None, Some(u32::MAX)).is_err());
    }

    #[test]
    fn huge_k_is_rejected_for_any_shape() {
        let err = StarParams::new(Family::Amalgamated, 2, Some(1), Some(2_000_000_000)).unwrap_err();
        assert_eq!(
            err,
            SlError::Overflow {
                what: "label bound k",
                value: 2_000_000_000,
            }
        );
        let at_cap = MAX_K as u32;
        assert!(StarParams::amalgamated(2, 1).unwrap().with_k(at_cap).is_ok());
        assert!(StarParams::amalgamated(2, 1).unwrap().with_k(at_cap + 1).is_err());
    }

    #[test]
    fn explicit_k_overrides_default() {
        let p = StarParams::amalgamated(3, 3).unwrap().with_k(2).unwrap();
        assert_eq!(p.k(), 2);
        assert_eq!(p.m(), 3);
    }

    #[test]
    fn leaf_indices_follow_allocation_order() {
        let p = StarParams::amalgamated(4, 4).unwrap();
        assert_eq!(p.leaf_index(1, 1), 5);
        assert_eq!(p.leaf_index(1, 3), 7);
        assert_eq!(p.leaf_index(2, 1), 8);
        assert_eq!(p.leaf_index(4, 3), 16);
    }

    #[test]
    fn family_parses_names() {
        for family in Family::ALL {
            assert_eq!(family.name().parse::<Family>().unwrap(), family);
        }
        assert_eq!("SNM".parse::<Family>().unwrap(), Family::Amalgamated);
        assert!("wheel".parse::<Family>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn counts_match_topology(n in 2_u32..500, m in 1_u32..20) {
            let p = StarParams::amalgamated(n, m).unwrap();
            let leaves = n * (m - 1);
            prop_assert_eq!(p.order(), 1 + n + leaves);
            prop_assert_eq!(p.edge_count(), n + leaves);
            prop_assert_eq!(p.leaf_index(n, m - 1).max(n), p.order() - 1);
        }

        #[test]
        fn snowflake_adds_cycle_edges(n in 3_u32..500) {
            let p = StarParams::snowflake(n).unwrap();
            prop_assert_eq!(p.edge_count(), 4 * n);
            prop_assert_eq!(p.order(), 3 * n + 1);
            prop_assert!(p.k() >= p.edge_count());
        }
    }
}
