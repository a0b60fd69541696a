//! Fixed capital split between the two tracks.
//!
//! Shares are declared in basis points so their complementarity can be
//! checked by the compiler.

/// Basis points in one whole.
pub const BPS_PER_UNIT: u32 = 10_000;

/// Tactical share of total capital, in basis points.
pub const TACTICAL_SHARE_BPS: u32 = 2_000;

/// Strategic share of total capital, in basis points.
pub const STRATEGIC_SHARE_BPS: u32 = 8_000;

const _: () = assert!(
    TACTICAL_SHARE_BPS + STRATEGIC_SHARE_BPS == BPS_PER_UNIT,
    "track shares must sum to one"
);

/// Tactical share of total capital (0.20).
pub const TACTICAL_RATIO: f64 = TACTICAL_SHARE_BPS as f64 / BPS_PER_UNIT as f64;

/// Strategic share of total capital (0.80).
pub const STRATEGIC_RATIO: f64 = STRATEGIC_SHARE_BPS as f64 / BPS_PER_UNIT as f64;
