//! Behavioral tests for the allocation engine.
//!
//! Covers the numeric contract: the fixed split, tier boundaries, the
//! risk score blend, the holding rescale, and the reference scenarios.

use proptest::prelude::*;

use tandem_engine::allocation::{
    build_portfolio_lines, evaluate, evaluate_strategic_track, evaluate_tactical_track,
    HoldingTable, HoldingWeight, LineCategory, MarketContext, SeverityTier, StrategicStance,
    TacticalSignal, STRATEGIC_RATIO, TACTICAL_RATIO,
};

// ============================================================================
// Helpers
// ============================================================================

fn context(total_capital: f64, strength: u8, sentiment: u8, analyst: u8) -> MarketContext {
    MarketContext {
        total_capital,
        tactical_strength: strength,
        sentiment_index: sentiment,
        analyst_consensus: analyst,
    }
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = 1e-9 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} but got {}",
        expected,
        actual
    );
}

// ============================================================================
// Reference Scenarios
// ============================================================================

#[test]
fn test_scenario_a_neutral_market() {
    let evaluation = evaluate(&context(100_000_000.0, 50, 50, 3), &HoldingTable::default());

    let tactical = &evaluation.tactical;
    assert_eq!(tactical.severity_tier, SeverityTier::Medium);
    assert_eq!(tactical.allocated, 20_000_000.0);
    assert_eq!(tactical.equity_amount, 4_000_000.0);
    assert_eq!(tactical.cash_amount, 16_000_000.0);

    let strategic = &evaluation.strategic;
    assert_eq!(evaluation.risk_score, 50.0);
    assert_eq!(strategic.severity_tier, SeverityTier::Medium);
    assert_eq!(evaluation.strategic_cash_ratio, 0.05);
    assert_eq!(strategic.cash_amount, 4_000_000.0);
    assert_eq!(strategic.equity_amount, 76_000_000.0);

    assert_eq!(evaluation.total_cash(), 20_000_000.0);
    assert_eq!(evaluation.total_equity(), 80_000_000.0);
}

#[test]
fn test_scenario_b_extremes() {
    let evaluation = evaluate(&context(100_000_000.0, 90, 90, 5), &HoldingTable::default());

    assert_eq!(evaluation.tactical.equity_amount, 20_000_000.0);
    assert_eq!(evaluation.tactical.cash_amount, 0.0);
    assert_eq!(evaluation.tactical.severity_tier, SeverityTier::Extreme);

    assert_close(evaluation.risk_score, 93.0);
    assert_eq!(evaluation.strategic.severity_tier, SeverityTier::Extreme);
    assert_eq!(evaluation.strategic.label, "Overheated (Reduce)");
    assert_eq!(evaluation.strategic.cash_amount, 24_000_000.0);
    assert_eq!(evaluation.strategic.equity_amount, 56_000_000.0);
    assert_eq!(evaluation.strategic_cash_target_percent(), 30);
}

#[test]
fn test_scenario_lines_include_tactical_and_cash() {
    let evaluation = evaluate(&context(100_000_000.0, 50, 50, 3), &HoldingTable::default());

    assert_eq!(evaluation.lines.len(), 10);

    let cash = evaluation
        .lines
        .iter()
        .find(|l| l.category == LineCategory::CashBuffer)
        .unwrap();
    assert_eq!(cash.amount, 20_000_000.0);
    assert_close(cash.percent_of_total, 20.0);

    let tactical = evaluation
        .lines
        .iter()
        .find(|l| l.category == LineCategory::TacticalSwing)
        .unwrap();
    assert_eq!(tactical.amount, 4_000_000.0);
}

#[test]
fn test_stop_loss_drops_tactical_line() {
    let evaluation = evaluate(&context(100_000_000.0, 10, 50, 3), &HoldingTable::default());

    assert!(evaluation
        .lines
        .iter()
        .all(|l| l.category != LineCategory::TacticalSwing));
    assert_eq!(evaluation.lines.len(), 9);
}

// ============================================================================
// Boundaries
// ============================================================================

#[test]
fn test_strength_boundaries() {
    let ratio = |s: u8| evaluate_tactical_track(s, 1_000_000.0, TACTICAL_RATIO).equity_ratio();

    assert_eq!(ratio(80), 1.0);
    assert_eq!(ratio(79), 0.6);
    assert_eq!(ratio(60), 0.6);
    assert_close(ratio(59), 0.2);
    assert_close(ratio(21), 0.2);
    assert_eq!(ratio(20), 0.0);
}

#[test]
fn test_risk_score_boundaries() {
    assert_eq!(StrategicStance::from_risk_score(80.0).tier(), SeverityTier::Extreme);
    assert_eq!(StrategicStance::from_risk_score(60.0).tier(), SeverityTier::High);
    assert_eq!(StrategicStance::from_risk_score(21.0).tier(), SeverityTier::Medium);
    assert_eq!(StrategicStance::from_risk_score(20.0).tier(), SeverityTier::Low);
}

#[test]
fn test_risk_score_boundary_through_inputs() {
    // sentiment 0, consensus 5 → 0 × 0.7 + 100 × 0.3 = 30
    let (alloc, score) = evaluate_strategic_track(0, 5, 1_000_000.0, STRATEGIC_RATIO);
    assert_close(score, 30.0);
    assert_eq!(alloc.severity_tier, SeverityTier::Medium);

    // sentiment 20, consensus 1 → 14
    let (alloc, score) = evaluate_strategic_track(20, 1, 1_000_000.0, STRATEGIC_RATIO);
    assert_close(score, 14.0);
    assert_eq!(alloc.severity_tier, SeverityTier::Low);
}

// ============================================================================
// Rescale
// ============================================================================

#[test]
fn test_rescale_consumes_entire_strategic_equity() {
    let holdings = vec![HoldingWeight::new("Core", 0.95, "")];

    let lines = build_portfolio_lines(95.0, 0.0, 0.0, &holdings, 100.0);
    assert_close(lines[0].amount, 95.0);

    let lines = build_portfolio_lines(100.0, 0.0, 0.0, &holdings, 100.0);
    assert_close(lines[0].amount, 100.0);
}

#[test]
fn test_default_table_lines_sum_to_strategic_equity() {
    let table = HoldingTable::default();
    let lines = build_portfolio_lines(76_000_000.0, 0.0, 0.0, table.as_slice(), 100_000_000.0);

    let strategic: f64 = lines
        .iter()
        .filter(|l| l.category == LineCategory::StrategicCore)
        .map(|l| l.amount)
        .sum();
    assert_close(strategic, 76_000_000.0);
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_tracks_are_complementary(capital in 1_000_000.0f64..1e12, s in 0u8..=100) {
        let tactical = evaluate_tactical_track(s, capital, TACTICAL_RATIO);
        let (strategic, _) = evaluate_strategic_track(50, 3, capital, STRATEGIC_RATIO);
        let total = tactical.allocated + strategic.allocated;
        prop_assert!((total - capital).abs() <= capital * 1e-12);
    }

    #[test]
    fn prop_tracks_conserve_capital(
        capital in 1_000_000.0f64..1e12,
        strength in 0u8..=100,
        sentiment in 0u8..=100,
        analyst in 1u8..=5,
    ) {
        let evaluation = evaluate(&context(capital, strength, sentiment, analyst), &HoldingTable::default());

        for track in [&evaluation.tactical, &evaluation.strategic] {
            let sum = track.equity_amount + track.cash_amount;
            prop_assert!((sum - track.allocated).abs() <= track.allocated * 1e-12);
            prop_assert!(track.equity_amount >= 0.0);
            prop_assert!(track.cash_amount >= 0.0);
        }

        let lines_total: f64 = evaluation.lines.iter().map(|l| l.amount).sum();
        prop_assert!((lines_total - capital).abs() <= capital * 1e-9);
    }

    #[test]
    fn prop_tactical_ratio_monotonic(a in 0u8..=100, b in 0u8..=100) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            TacticalSignal::from_strength(lo).equity_ratio()
                <= TacticalSignal::from_strength(hi).equity_ratio()
        );
    }

    #[test]
    fn prop_evaluation_is_idempotent(
        capital in 1_000_000.0f64..1e12,
        strength in 0u8..=100,
        sentiment in 0u8..=100,
        analyst in 1u8..=5,
    ) {
        let ctx = context(capital, strength, sentiment, analyst);
        let table = HoldingTable::default();
        let first = evaluate(&ctx, &table);
        let second = evaluate(&ctx, &table);

        prop_assert_eq!(first.risk_score.to_bits(), second.risk_score.to_bits());
        prop_assert_eq!(&first.lines, &second.lines);
        prop_assert_eq!(first, second);
    }
}
