//! Allocation types.
//!
//! Every value here is rebuilt from scratch on each evaluation; nothing is
//! mutated after construction.

use serde::{Deserialize, Serialize};
use tandem_common::config::{InputDefaults, InputLimits};
use tandem_common::validation::{
    collect_errors, ensure_in_range, Validate, ValidationError, ValidationResult,
};

// ============================================================================
// Market Context
// ============================================================================

/// Inputs of one evaluation cycle.
///
/// The engine does not clamp these; callers validate first (see
/// [`MarketContext::validate_against`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketContext {
    /// Total capital under management
    pub total_capital: f64,
    /// Volatility breakout strength (0 = trend collapse, 100 = strong breakout)
    pub tactical_strength: u8,
    /// Fear & greed index (0 = extreme fear, 100 = extreme greed)
    pub sentiment_index: u8,
    /// Analyst consensus (1 = sell, 5 = strong buy)
    pub analyst_consensus: u8,
}

impl MarketContext {
    /// Build a context from configured defaults.
    pub fn from_defaults(defaults: &InputDefaults) -> Self {
        Self {
            total_capital: defaults.total_capital,
            tactical_strength: defaults.tactical_strength,
            sentiment_index: defaults.sentiment_index,
            analyst_consensus: defaults.analyst_consensus,
        }
    }

    /// Validate the score ranges and the configured minimum capital.
    pub fn validate_against(&self, limits: &InputLimits) -> ValidationResult<()> {
        let errors: Vec<_> = [
            ensure_in_range(
                "total_capital",
                self.total_capital,
                limits.min_total_capital,
                f64::MAX,
            ),
            self.validate_scores(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        collect_errors(errors)
    }

    fn validate_scores(&self) -> ValidationResult<()> {
        let errors: Vec<_> = [
            ensure_in_range(
                "tactical_strength",
                f64::from(self.tactical_strength),
                0.0,
                100.0,
            ),
            ensure_in_range(
                "sentiment_index",
                f64::from(self.sentiment_index),
                0.0,
                100.0,
            ),
            ensure_in_range(
                "analyst_consensus",
                f64::from(self.analyst_consensus),
                1.0,
                5.0,
            ),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        collect_errors(errors)
    }
}

impl Validate for MarketContext {
    /// Domain check only: positive finite capital and in-range scores.
    fn validate(&self) -> ValidationResult<()> {
        let errors: Vec<_> = [
            ensure_in_range("total_capital", self.total_capital, f64::MIN_POSITIVE, f64::MAX),
            self.validate_scores(),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect();

        collect_errors(errors)
    }
}

/// Partially specified inputs, as collected from flags, query strings, or
/// request bodies. Wider integer types let out-of-range values reach
/// validation instead of failing to parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketInput {
    #[serde(default)]
    pub total_capital: Option<f64>,
    #[serde(default)]
    pub tactical_strength: Option<i64>,
    #[serde(default)]
    pub sentiment_index: Option<i64>,
    #[serde(default)]
    pub analyst_consensus: Option<i64>,
}

impl MarketInput {
    /// Fill missing fields from `defaults` and validate against `limits`.
    pub fn resolve(
        &self,
        defaults: &InputDefaults,
        limits: &InputLimits,
    ) -> ValidationResult<MarketContext> {
        let mut errors = Vec::new();

        let tactical_strength = score_field(
            "tactical_strength",
            self.tactical_strength,
            defaults.tactical_strength,
            (0, 100),
            &mut errors,
        );
        let sentiment_index = score_field(
            "sentiment_index",
            self.sentiment_index,
            defaults.sentiment_index,
            (0, 100),
            &mut errors,
        );
        let analyst_consensus = score_field(
            "analyst_consensus",
            self.analyst_consensus,
            defaults.analyst_consensus,
            (1, 5),
            &mut errors,
        );
        collect_errors(errors)?;

        let context = MarketContext {
            total_capital: self.total_capital.unwrap_or(defaults.total_capital),
            tactical_strength,
            sentiment_index,
            analyst_consensus,
        };
        context.validate_against(limits)?;
        Ok(context)
    }
}

fn score_field(
    field: &str,
    value: Option<i64>,
    default: u8,
    (min, max): (i64, i64),
    errors: &mut Vec<ValidationError>,
) -> u8 {
    let Some(value) = value else {
        return default;
    };

    match u8::try_from(value) {
        Ok(v) if (min..=max).contains(&value) => v,
        _ => {
            errors.push(ValidationError::OutOfRange {
                field: field.into(),
                value: value as f64,
                min: min as f64,
                max: max as f64,
            });
            default
        }
    }
}

// ============================================================================
// Tracks & Tiers
// ============================================================================

/// Capital sleeve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    /// Short-horizon momentum sleeve
    Tactical,
    /// Long-horizon contrarian sleeve
    Strategic,
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tactical => write!(f, "Track A: Tactical"),
            Self::Strategic => write!(f, "Track B: Strategic"),
        }
    }
}

/// Signal severity, ordered from calmest to most extreme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
    Extreme,
}

impl SeverityTier {
    /// Status color used by the dashboard front-ends.
    pub const fn status_color(&self) -> &'static str {
        match self {
            Self::Low => "blue",
            Self::Medium => "gray",
            Self::High => "orange",
            Self::Extreme => "red",
        }
    }
}

impl std::fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

/// Equity/cash split of one track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackAllocation {
    /// Which sleeve this is
    pub track: Track,
    /// Capital assigned to the track
    pub allocated: f64,
    /// Amount held in equity
    pub equity_amount: f64,
    /// Amount held in cash
    pub cash_amount: f64,
    /// Human-readable signal
    pub label: String,
    /// Signal severity
    pub severity_tier: SeverityTier,
}

impl TrackAllocation {
    /// Equity share of the track's capital.
    pub fn equity_ratio(&self) -> f64 {
        if self.allocated == 0.0 {
            0.0
        } else {
            self.equity_amount / self.allocated
        }
    }

    /// Cash share of the track's capital.
    pub fn cash_ratio(&self) -> f64 {
        if self.allocated == 0.0 {
            0.0
        } else {
            self.cash_amount / self.allocated
        }
    }
}

// ============================================================================
// Holdings & Portfolio Lines
// ============================================================================

/// A named strategic position with a static weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingWeight {
    pub name: String,
    /// Relative weight in (0, 1]
    pub weight: f64,
    pub rationale: String,
}

impl HoldingWeight {
    pub fn new(name: impl Into<String>, weight: f64, rationale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weight,
            rationale: rationale.into(),
        }
    }
}

/// Bucket a portfolio line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineCategory {
    StrategicCore,
    TacticalSwing,
    CashBuffer,
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StrategicCore => write!(f, "Strategic (Core)"),
            Self::TacticalSwing => write!(f, "Tactical (Swing)"),
            Self::CashBuffer => write!(f, "Cash Buffer"),
        }
    }
}

/// One row of the combined portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLine {
    pub label: String,
    pub amount: f64,
    /// Share of total capital, 0-100 scale
    pub percent_of_total: f64,
    pub category: LineCategory,
    pub rationale: String,
}

// ============================================================================
// Evaluation
// ============================================================================

/// Complete result of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Inputs the evaluation was computed from
    pub context: MarketContext,
    pub tactical: TrackAllocation,
    pub strategic: TrackAllocation,
    /// Sentiment/consensus blend driving the strategic track
    pub risk_score: f64,
    /// Target cash share of the strategic track
    pub strategic_cash_ratio: f64,
    /// Portfolio lines sorted for display (largest first)
    pub lines: Vec<PortfolioLine>,
}

impl Evaluation {
    /// Equity across both tracks.
    pub fn total_equity(&self) -> f64 {
        self.tactical.equity_amount + self.strategic.equity_amount
    }

    /// Cash across both tracks.
    pub fn total_cash(&self) -> f64 {
        self.tactical.cash_amount + self.strategic.cash_amount
    }

    /// Strategic cash target as a whole percentage.
    pub fn strategic_cash_target_percent(&self) -> u32 {
        (self.strategic_cash_ratio * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits() -> InputLimits {
        InputLimits::default()
    }

    #[test]
    fn test_tier_ordering_and_colors() {
        assert!(SeverityTier::Low < SeverityTier::Medium);
        assert!(SeverityTier::High < SeverityTier::Extreme);
        assert_eq!(SeverityTier::Extreme.status_color(), "red");
        assert_eq!(SeverityTier::High.status_color(), "orange");
        assert_eq!(SeverityTier::Medium.status_color(), "gray");
        assert_eq!(SeverityTier::Low.status_color(), "blue");
    }

    #[test]
    fn test_context_validation_bounds() {
        let mut context = MarketContext::from_defaults(&InputDefaults::default());
        assert!(context.validate().is_ok());
        assert!(context.validate_against(&limits()).is_ok());

        context.analyst_consensus = 0;
        assert!(context.validate().is_err());

        context.analyst_consensus = 5;
        context.tactical_strength = 101;
        assert!(context.validate().is_err());

        context.tactical_strength = 100;
        context.total_capital = 10_000.0;
        assert!(context.validate().is_ok());
        assert!(context.validate_against(&limits()).is_err());

        context.total_capital = f64::INFINITY;
        assert!(context.validate().is_err());
    }

    #[test]
    fn test_input_resolution_uses_defaults() {
        let input = MarketInput {
            tactical_strength: Some(90),
            ..Default::default()
        };
        let context = input.resolve(&InputDefaults::default(), &limits()).unwrap();
        assert_eq!(context.tactical_strength, 90);
        assert_eq!(context.sentiment_index, 50);
        assert_eq!(context.analyst_consensus, 3);
        assert_eq!(context.total_capital, 100_000_000.0);
    }

    #[test]
    fn test_input_resolution_reports_every_bad_field() {
        let input = MarketInput {
            total_capital: Some(-5.0),
            tactical_strength: Some(300),
            sentiment_index: Some(-1),
            analyst_consensus: Some(6),
        };
        let err = input.resolve(&InputDefaults::default(), &limits()).unwrap_err();
        assert_eq!(
            err.fields(),
            vec!["tactical_strength", "sentiment_index", "analyst_consensus"]
        );

        let capital_only = MarketInput {
            total_capital: Some(-5.0),
            ..Default::default()
        };
        let err = capital_only
            .resolve(&InputDefaults::default(), &limits())
            .unwrap_err();
        assert_eq!(err.fields(), vec!["total_capital"]);
    }

    #[test]
    fn test_track_ratios_with_zero_allocation() {
        let empty = TrackAllocation {
            track: Track::Tactical,
            allocated: 0.0,
            equity_amount: 0.0,
            cash_amount: 0.0,
            label: String::new(),
            severity_tier: SeverityTier::Low,
        };
        assert_eq!(empty.equity_ratio(), 0.0);
        assert_eq!(empty.cash_ratio(), 0.0);
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(LineCategory::StrategicCore.to_string(), "Strategic (Core)");
        assert_eq!(LineCategory::TacticalSwing.to_string(), "Tactical (Swing)");
        assert_eq!(LineCategory::CashBuffer.to_string(), "Cash Buffer");
    }
}
