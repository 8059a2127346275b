//! # PaySplit Session - Stateful Split Flow
//!
//! ## Purpose
//!
//! The stateful core of the bill-split flow: one [`SplitSession`] record
//! holds the participant roster, the ordered selection, the bill total, the
//! active split mode with its per-mode input maps, and the wizard stage.
//! Every mutation is an explicit reducer-style method; derived figures
//! (per-person amounts, the residual) are recomputed on demand through
//! `paysplit-engine` and never stored.
//!
//! ## Integration Points
//!
//! - **Input Sources**: User-input events sequenced by a rendering layer,
//!   seed state from [`SessionConfig`] (defaults or TOML)
//! - **Output Destinations**: Amount and residual queries for display,
//!   `can_advance` for enabling the continue control
//! - **Gating**: Forward stage transitions validate the current step's data;
//!   rejected transitions are reported, never thrown
//! - **Observability**: Stage transitions and clamped inputs emit `tracing`
//!   events; subscribers are the caller's concern
//!
//! ## Quick Start
//!
//! ```rust
//! use paysplit_session::{FlowStage, SplitSession};
//!
//! let mut session = SplitSession::with_defaults();
//! assert_eq!(session.stage(), FlowStage::Friends);
//!
//! assert!(session.advance()); // seed data is valid
//! assert_eq!(session.stage(), FlowStage::AdjustSplit);
//!
//! let amounts = session.amounts();
//! let owed: rust_decimal::Decimal = amounts.values().copied().sum();
//! assert_eq!(owed, session.total());
//! ```

pub mod config;
pub mod session;

pub use config::SessionConfig;
pub use session::{SplitSession, SETTLED_EPSILON};

// Re-export the shared types a consumer needs alongside the session
pub use paysplit_types::{FlowStage, Participant, ParticipantId, SplitMode};
