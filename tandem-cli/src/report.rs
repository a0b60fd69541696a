//! Plain text rendering of allocation results.

use std::fmt::Write;

use tandem_engine::allocation::{
    Evaluation, HoldingTable, TrackAllocation, GROSS_UP_DIVISOR, STRATEGIC_RATIO, TACTICAL_RATIO,
};
use tandem_engine::format::{format_currency, format_percent};

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn track_share(ratio: f64) -> String {
    format!("{}%", (ratio * 100.0).round() as u32)
}

fn signal_line(out: &mut String, heading: &str, track: &TrackAllocation) {
    let _ = writeln!(
        out,
        "  {}: {} [{} / {}]",
        heading,
        track.label,
        track.severity_tier,
        track.severity_tier.status_color()
    );
}

/// Render an evaluation as a text report.
pub fn render_evaluation(evaluation: &Evaluation, symbol: &str, with_rationale: bool) -> String {
    let money = |v: f64| format_currency(v, symbol);
    let mut out = String::new();

    let context = &evaluation.context;
    heading(&mut out, "Integrated Allocation");
    let _ = writeln!(
        out,
        "Capital {}, strength {}, sentiment {}, consensus {}",
        money(context.total_capital),
        context.tactical_strength,
        context.sentiment_index,
        context.analyst_consensus
    );
    let _ = writeln!(out);

    let tactical = &evaluation.tactical;
    let _ = writeln!(out, "{} ({})", tactical.track, track_share(TACTICAL_RATIO));
    signal_line(&mut out, "Signal", tactical);
    let _ = writeln!(out, "  Attack assets (equity): {}", money(tactical.equity_amount));
    let _ = writeln!(out, "  Defense assets (cash):  {}", money(tactical.cash_amount));
    let _ = writeln!(out);

    let strategic = &evaluation.strategic;
    let _ = writeln!(out, "{} ({})", strategic.track, track_share(STRATEGIC_RATIO));
    signal_line(&mut out, "Stance", strategic);
    let _ = writeln!(out, "  Risk score:             {:.1}", evaluation.risk_score);
    let _ = writeln!(out, "  Core assets (equity):   {}", money(strategic.equity_amount));
    let _ = writeln!(
        out,
        "  Cash target:            {}%",
        evaluation.strategic_cash_target_percent()
    );
    let _ = writeln!(out);

    heading(&mut out, "Portfolio");
    for line in &evaluation.lines {
        let _ = writeln!(
            out,
            "  {:<32} {:<18} {:>6}  {:>16}",
            line.label,
            line.category.to_string(),
            format_percent(line.percent_of_total),
            money(line.amount)
        );
    }

    if with_rationale {
        let _ = writeln!(out);
        heading(&mut out, "Rationale Checklist");
        for line in &evaluation.lines {
            let _ = writeln!(
                out,
                "  {} ({}, {})",
                line.label,
                line.category,
                format_percent(line.percent_of_total)
            );
            let _ = writeln!(out, "    {}", line.rationale);
        }
    }

    out
}

/// Render the holding table.
pub fn render_holdings(table: &HoldingTable) -> String {
    let mut out = String::new();

    heading(&mut out, "Strategic Holdings");
    for holding in table.as_slice() {
        let _ = writeln!(
            out,
            "  {:<32} {:>6}  {}",
            holding.name,
            format_percent(holding.weight * 100.0),
            holding.rationale
        );
    }
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Weight sum:      {} (divided by {} when sizing lines)",
        format_percent(table.weight_sum() * 100.0),
        GROSS_UP_DIVISOR
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tandem_engine::allocation::{evaluate, MarketContext};

    fn neutral() -> Evaluation {
        let context = MarketContext {
            total_capital: 100_000_000.0,
            tactical_strength: 50,
            sentiment_index: 50,
            analyst_consensus: 3,
        };
        evaluate(&context, &HoldingTable::default())
    }

    #[test]
    fn test_report_contains_track_metrics() {
        let report = render_evaluation(&neutral(), "₩", false);

        assert!(report.contains("Track A: Tactical (20%)"));
        assert!(report.contains("Track B: Strategic (80%)"));
        assert!(report.contains("Signal: Watching [medium / gray]"));
        assert!(report.contains("Stance: Neutral (Balanced) [medium / gray]"));
        assert!(report.contains("₩4,000,000"));
        assert!(report.contains("₩16,000,000"));
        assert!(report.contains("₩76,000,000"));
        assert!(report.contains("Cash target:            5%"));
        assert!(report.contains("Risk score:             50.0"));
        assert!(!report.contains("Rationale Checklist"));
    }

    #[test]
    fn test_report_lists_lines_largest_first() {
        let report = render_evaluation(&neutral(), "₩", false);

        let tesla = report.find("Tesla (TSLA)").unwrap();
        let cash = report.find("Combined Cash").unwrap();
        let nvidia = report.find("NVIDIA (NVDA)").unwrap();
        assert!(tesla < cash && cash < nvidia);
        assert!(report.contains("24.0%"));
    }

    #[test]
    fn test_rationale_checklist() {
        let report = render_evaluation(&neutral(), "$", true);

        assert!(report.contains("Rationale Checklist"));
        assert!(report.contains("[Option]"));
        assert!(report.contains("[Momentum]"));
        assert!(report.contains("$20,000,000"));
    }

    #[test]
    fn test_holdings_table() {
        let report = render_holdings(&HoldingTable::default());

        assert!(report.contains("Tesla (TSLA)"));
        assert!(report.contains("30.0%"));
        assert!(report.contains("Weight sum:      95.0%"));
    }
}
