//! Combined portfolio construction.

use super::holdings::{HoldingTable, GROSS_UP_DIVISOR};
use super::split::{STRATEGIC_RATIO, TACTICAL_RATIO};
use super::strategic::{evaluate_strategic_track, StrategicStance};
use super::tactical::evaluate_tactical_track;
use super::types::{Evaluation, HoldingWeight, LineCategory, MarketContext, PortfolioLine};

/// Label of the synthetic tactical line.
pub const TACTICAL_LINE_LABEL: &str = "Short-term Trading (TQQQ etc.)";

/// Label of the combined cash line.
pub const CASH_LINE_LABEL: &str = "Combined Cash";

const TACTICAL_LINE_RATIONALE: &str =
    "[Momentum] Leveraged ETF sleeve running the short-term volatility breakout strategy.";

const CASH_LINE_RATIONALE: &str =
    "[Option] Cash-equivalent reserve for crashes and new opportunities (CMA / parking account).";

/// Distribute strategic equity over the holdings and append the tactical
/// and cash lines.
///
/// Lines are returned in table order: holdings, then the tactical line
/// (only when `tactical_equity > 0`), then exactly one cash line.
pub fn build_portfolio_lines(
    strategic_equity: f64,
    tactical_equity: f64,
    combined_cash: f64,
    holdings: &[HoldingWeight],
    total_capital: f64,
) -> Vec<PortfolioLine> {
    let percent = |amount: f64| amount / total_capital * 100.0;

    let mut lines: Vec<PortfolioLine> = holdings
        .iter()
        .map(|holding| {
            let amount = (strategic_equity * holding.weight) / GROSS_UP_DIVISOR;
            PortfolioLine {
                label: holding.name.clone(),
                amount,
                percent_of_total: percent(amount),
                category: LineCategory::StrategicCore,
                rationale: holding.rationale.clone(),
            }
        })
        .collect();

    if tactical_equity > 0.0 {
        lines.push(PortfolioLine {
            label: TACTICAL_LINE_LABEL.to_string(),
            amount: tactical_equity,
            percent_of_total: percent(tactical_equity),
            category: LineCategory::TacticalSwing,
            rationale: TACTICAL_LINE_RATIONALE.to_string(),
        });
    }

    lines.push(PortfolioLine {
        label: CASH_LINE_LABEL.to_string(),
        amount: combined_cash,
        percent_of_total: percent(combined_cash),
        category: LineCategory::CashBuffer,
        rationale: CASH_LINE_RATIONALE.to_string(),
    });

    lines
}

/// Sort lines largest first. Stable, so equal amounts keep table order.
pub fn sort_for_display(lines: &mut [PortfolioLine]) {
    lines.sort_by(|a, b| b.amount.total_cmp(&a.amount));
}

/// Run both tracks for `context` and assemble the display-ordered portfolio.
pub fn evaluate(context: &MarketContext, holdings: &HoldingTable) -> Evaluation {
    let tactical = evaluate_tactical_track(
        context.tactical_strength,
        context.total_capital,
        TACTICAL_RATIO,
    );
    let (strategic, risk_score) = evaluate_strategic_track(
        context.sentiment_index,
        context.analyst_consensus,
        context.total_capital,
        STRATEGIC_RATIO,
    );
    let strategic_cash_ratio = StrategicStance::from_risk_score(risk_score).target_cash_ratio();

    let mut lines = build_portfolio_lines(
        strategic.equity_amount,
        tactical.equity_amount,
        tactical.cash_amount + strategic.cash_amount,
        holdings.as_slice(),
        context.total_capital,
    );
    sort_for_display(&mut lines);

    tracing::debug!(
        total_capital = context.total_capital,
        tactical_tier = %tactical.severity_tier,
        strategic_tier = %strategic.severity_tier,
        risk_score,
        lines = lines.len(),
        "Allocation evaluated"
    );

    Evaluation {
        context: *context,
        tactical,
        strategic,
        risk_score,
        strategic_cash_ratio,
        lines,
    }
}
