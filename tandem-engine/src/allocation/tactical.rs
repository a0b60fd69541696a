//! Track A: short-horizon tactical sleeve.
//!
//! Equity exposure follows a volatility breakout strength score:
//!
//! ```text
//! strength   >= 80  │ 100% equity │ Strong Breakout
//! strength   >= 60  │  60% equity │ Trend Following
//! strength   <= 20  │   0% equity │ Trend Collapse (Stop Loss)
//! otherwise         │  20% equity │ Watching
//! ```

use serde::{Deserialize, Serialize};

use super::types::{SeverityTier, Track, TrackAllocation};

/// Tactical signal derived from breakout strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TacticalSignal {
    StrongBreakout,
    TrendFollowing,
    Watching,
    StopLoss,
}

impl TacticalSignal {
    /// Classify a strength score.
    pub fn from_strength(strength: u8) -> Self {
        if strength >= 80 {
            Self::StrongBreakout
        } else if strength >= 60 {
            Self::TrendFollowing
        } else if strength <= 20 {
            Self::StopLoss
        } else {
            Self::Watching
        }
    }

    /// Share of the tactical sleeve held in equity.
    pub const fn equity_ratio(&self) -> f64 {
        match self {
            Self::StrongBreakout => 1.0,
            Self::TrendFollowing => 0.6,
            Self::Watching => 0.2,
            Self::StopLoss => 0.0,
        }
    }

    pub const fn tier(&self) -> SeverityTier {
        match self {
            Self::StrongBreakout => SeverityTier::Extreme,
            Self::TrendFollowing => SeverityTier::High,
            Self::Watching => SeverityTier::Medium,
            Self::StopLoss => SeverityTier::Low,
        }
    }
}

impl std::fmt::Display for TacticalSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrongBreakout => write!(f, "Strong Breakout"),
            Self::TrendFollowing => write!(f, "Trend Following"),
            Self::Watching => write!(f, "Watching"),
            Self::StopLoss => write!(f, "Trend Collapse (Stop Loss)"),
        }
    }
}

/// Split the tactical sleeve between equity and cash.
pub fn evaluate_tactical_track(
    strength: u8,
    total_capital: f64,
    tactical_ratio: f64,
) -> TrackAllocation {
    let signal = TacticalSignal::from_strength(strength);

    let allocated = total_capital * tactical_ratio;
    let equity_amount = allocated * signal.equity_ratio();
    let cash_amount = allocated - equity_amount;

    TrackAllocation {
        track: Track::Tactical,
        allocated,
        equity_amount,
        cash_amount,
        label: signal.to_string(),
        severity_tier: signal.tier(),
    }
}
