//! # PaySplit Engine - Exact Bill-Split Mathematics
//!
//! ## Purpose
//!
//! Pure calculation library deriving per-participant amounts from a bill
//! total, an ordered selection of participants, a split mode, and the
//! mode-specific inputs (percentage map or custom amount map). Implements
//! remainder absorption so independently rounded parts always reconstruct
//! the rounded total exactly, with zero precision loss via Decimal
//! arithmetic (no floating-point).
//!
//! ## Integration Points
//!
//! - **Input Sources**: Session state from `paysplit-session` (total,
//!   selection, per-mode maps), sanitized text input from a rendering layer
//! - **Output Destinations**: Derived amounts for review/success displays,
//!   residual ("remaining") figures for custom-mode gating
//! - **Precision**: All monetary values round to 2 decimal places, midpoint
//!   away from zero; percentages round to 2 decimal places
//! - **Purity**: Every function is a referentially transparent transform of
//!   its inputs; nothing here holds state
//!
//! ## Architecture Role
//!
//! The engine is the mathematical foundation of the split flow: the session
//! crate layers registry, field editing, and stage gating on top of these
//! derivations, and queries them on demand after every mutation.

pub mod allocation;
pub mod money;

pub use allocation::SplitCalculator;
pub use money::{
    format_currency, parse_amount_lenient, parse_amount_strict, round_currency, round_percent,
};

/// Common types for split calculations
pub use rust_decimal::Decimal;
pub use rust_decimal_macros::dec;
