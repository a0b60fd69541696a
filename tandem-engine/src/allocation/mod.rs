//! Two-Track Allocation Engine.
//!
//! Splits capital into a tactical sleeve (20%) driven by breakout strength
//! and a strategic sleeve (80%) driven by a contrarian sentiment/consensus
//! blend, then breaks strategic equity down over a fixed holding table.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  MarketContext                                                   │
//! │    ├─ strength ────────────► Track A (20%)  equity / cash        │
//! │    └─ sentiment, consensus ─► risk score ─► Track B (80%)        │
//! │                                              cash / equity       │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  strategic equity ─► holdings (÷ 0.95)                           │
//! │  tactical equity  ─► swing line (if > 0)                         │
//! │  both cash        ─► one cash buffer line                        │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions are pure: no state, no I/O, nothing cached between calls.
//!
//! # Usage
//!
//! ```
//! use tandem_engine::allocation::{evaluate, HoldingTable, MarketContext};
//!
//! let context = MarketContext {
//!     total_capital: 100_000_000.0,
//!     tactical_strength: 50,
//!     sentiment_index: 50,
//!     analyst_consensus: 3,
//! };
//! let evaluation = evaluate(&context, &HoldingTable::default());
//! assert_eq!(evaluation.risk_score, 50.0);
//! ```

pub mod holdings;
pub mod portfolio;
pub mod split;
pub mod strategic;
pub mod tactical;
pub mod types;

pub use holdings::{default_holdings, HoldingTable, GROSS_UP_DIVISOR};
pub use portfolio::{build_portfolio_lines, evaluate, sort_for_display};
pub use split::{STRATEGIC_RATIO, TACTICAL_RATIO};
pub use strategic::{evaluate_strategic_track, risk_score, StrategicStance};
pub use tactical::{evaluate_tactical_track, TacticalSignal};
pub use types::{
    Evaluation, HoldingWeight, LineCategory, MarketContext, MarketInput, PortfolioLine,
    SeverityTier, Track, TrackAllocation,
};
