//! Strategic holding table.
//!
//! The built-in table's weights sum to 0.95 and the portfolio builder divides
//! by [`GROSS_UP_DIVISOR`], so the holdings consume the whole strategic
//! equity amount rather than leaving 5% unassigned. The apparent 5% reserve
//! in the table is therefore cancelled by the rescale.
//!
//! # Open question
//!
//! It is unclear whether the 5% reserve was meant to survive. If it was,
//! the divisor should go; if not, the weights could sum to 1.0 and the
//! divisor become 1.0. The current behavior keeps both.

use serde::Serialize;
use tandem_common::config::HoldingConfig;

use super::types::HoldingWeight;

/// Divisor applied to every holding's share of strategic equity.
pub const GROSS_UP_DIVISOR: f64 = 0.95;

/// Tolerance when comparing a table's weight sum with the divisor.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

/// Ordered list of strategic holdings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingTable {
    holdings: Vec<HoldingWeight>,
}

impl HoldingTable {
    pub fn new(holdings: Vec<HoldingWeight>) -> Self {
        Self { holdings }
    }

    /// Build from configured holdings, falling back to the built-in table.
    pub fn from_config(configured: Option<&[HoldingConfig]>) -> Self {
        let Some(configured) = configured else {
            return Self::default();
        };

        let table = Self::new(
            configured
                .iter()
                .map(|h| HoldingWeight::new(h.name.clone(), h.weight, h.rationale.clone()))
                .collect(),
        );

        if !table.matches_divisor() {
            tracing::warn!(
                weight_sum = table.weight_sum(),
                divisor = GROSS_UP_DIVISOR,
                "Holding weights do not sum to the gross-up divisor; strategic lines will not add up to strategic equity"
            );
        }

        table
    }

    pub fn as_slice(&self) -> &[HoldingWeight] {
        &self.holdings
    }

    pub fn len(&self) -> usize {
        self.holdings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Sum of all weights.
    pub fn weight_sum(&self) -> f64 {
        self.holdings.iter().map(|h| h.weight).sum()
    }

    /// Whether the rescale assigns exactly the whole strategic equity.
    pub fn matches_divisor(&self) -> bool {
        (self.weight_sum() - GROSS_UP_DIVISOR).abs() < WEIGHT_SUM_TOLERANCE
    }
}

impl Default for HoldingTable {
    fn default() -> Self {
        Self::new(default_holdings())
    }
}

/// The reference holding table.
pub fn default_holdings() -> Vec<HoldingWeight> {
    vec![
        HoldingWeight::new(
            "Tesla (TSLA)",
            0.30,
            "[Body] The only mass-production humanoid maker with a monopoly on autonomous driving data. The Apple of the robot era.",
        ),
        HoldingWeight::new(
            "NVIDIA (NVDA)",
            0.15,
            "[Brain] Owns simulation (Isaac) and compute (GPU) for physical AI. Irreplaceable infrastructure.",
        ),
        HoldingWeight::new(
            "Palantir (PLTR)",
            0.15,
            "[OS] Edge AI operating system for defense and industry, wiring hardware to software.",
        ),
        HoldingWeight::new(
            "Vertiv (VRT)",
            0.10,
            "[Power] Leader in data center power and liquid cooling for AI training and inference.",
        ),
        HoldingWeight::new(
            "Bitcoin (BTC)",
            0.10,
            "[Hedge] Digital gold against failure of centralized money and liquidity expansion.",
        ),
        HoldingWeight::new(
            "LS ELECTRIC",
            0.05,
            "[Infra] Beneficiary of surging North American AI data center demand for ultra-high-voltage transformers.",
        ),
        HoldingWeight::new(
            "Rainbow Robotics",
            0.05,
            "[Robot] Humanoid technology backed by Samsung; in-house bipedal platform and core components.",
        ),
        HoldingWeight::new(
            "ASTS (Space)",
            0.05,
            "[Net] Space-based network connecting robots anywhere on earth; an alternative to SpaceX connectivity.",
        ),
    ]
}
