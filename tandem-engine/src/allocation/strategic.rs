//! Track B: long-horizon strategic sleeve.
//!
//! Contrarian: the greedier the crowd and the more bullish the analysts,
//! the more cash the sleeve holds back.
//!
//! ```text
//! risk = sentiment × 0.7 + ((consensus - 1) × 25) × 0.3
//!
//! risk >= 80  │ 30% cash │ Overheated (Reduce)
//! risk >= 60  │ 15% cash │ Caution (Hold)
//! risk <= 20  │  0% cash │ Capitulation (Strong Buy)
//! otherwise   │  5% cash │ Neutral (Balanced)
//! ```

use serde::{Deserialize, Serialize};

use super::types::{SeverityTier, Track, TrackAllocation};

/// Weight of crowd sentiment in the risk score.
pub const SENTIMENT_WEIGHT: f64 = 0.7;

/// Weight of the rescaled analyst consensus in the risk score.
pub const ANALYST_WEIGHT: f64 = 0.3;

/// Points per consensus step when mapping 1..=5 onto 0..=100.
const ANALYST_STEP: f64 = 25.0;

/// Blend sentiment and analyst consensus into a 0-100 risk score.
pub fn risk_score(sentiment: u8, analyst_consensus: u8) -> f64 {
    let analyst_score = (f64::from(analyst_consensus) - 1.0) * ANALYST_STEP;
    f64::from(sentiment) * SENTIMENT_WEIGHT + analyst_score * ANALYST_WEIGHT
}

/// Strategic stance derived from the risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategicStance {
    Overheated,
    Caution,
    Neutral,
    Capitulation,
}

impl StrategicStance {
    /// Classify a risk score. Scores strictly between 20 and 21 are neutral.
    pub fn from_risk_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Overheated
        } else if score >= 60.0 {
            Self::Caution
        } else if score <= 20.0 {
            Self::Capitulation
        } else {
            Self::Neutral
        }
    }

    /// Share of the strategic sleeve held in cash.
    pub const fn target_cash_ratio(&self) -> f64 {
        match self {
            Self::Overheated => 0.30,
            Self::Caution => 0.15,
            Self::Neutral => 0.05,
            Self::Capitulation => 0.0,
        }
    }

    pub const fn tier(&self) -> SeverityTier {
        match self {
            Self::Overheated => SeverityTier::Extreme,
            Self::Caution => SeverityTier::High,
            Self::Neutral => SeverityTier::Medium,
            Self::Capitulation => SeverityTier::Low,
        }
    }
}

impl std::fmt::Display for StrategicStance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overheated => write!(f, "Overheated (Reduce)"),
            Self::Caution => write!(f, "Caution (Hold)"),
            Self::Neutral => write!(f, "Neutral (Balanced)"),
            Self::Capitulation => write!(f, "Capitulation (Strong Buy)"),
        }
    }
}

/// Split the strategic sleeve between equity and cash.
///
/// Returns the allocation together with the risk score that selected it.
pub fn evaluate_strategic_track(
    sentiment: u8,
    analyst_consensus: u8,
    total_capital: f64,
    strategic_ratio: f64,
) -> (TrackAllocation, f64) {
    let score = risk_score(sentiment, analyst_consensus);
    let stance = StrategicStance::from_risk_score(score);

    let allocated = total_capital * strategic_ratio;
    let cash_amount = allocated * stance.target_cash_ratio();
    let equity_amount = allocated - cash_amount;

    let allocation = TrackAllocation {
        track: Track::Strategic,
        allocated,
        equity_amount,
        cash_amount,
        label: stance.to_string(),
        severity_tier: stance.tier(),
    };

    (allocation, score)
}
