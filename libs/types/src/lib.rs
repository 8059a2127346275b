//! # PaySplit Shared Types
//!
//! Unified type system for the PaySplit bill-splitting core.
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Distinct wrapper types prevent mixing participant ids
//!   with other integer values at call sites
//! - **No Hidden State**: Every type here is plain data; derived figures
//!   (per-person amounts, residuals) live in `paysplit-engine` as pure
//!   functions over these types
//! - **Serialization Everywhere**: All public state types derive serde so a
//!   rendering layer can snapshot or transmit them
//! - **Coerce, Don't Fail**: Error types exist for the strict parsing
//!   boundary; the split core itself sanitizes input instead of rejecting it
//!
//! ## Quick Start
//!
//! ```rust
//! use paysplit_types::{FlowStage, Participant, ParticipantId, SplitMode};
//!
//! let id = ParticipantId::new(4);
//! let guest = Participant::guest(id);
//! assert_eq!(guest.name, "Guest 4");
//!
//! // Flow stages are strictly ordered
//! assert!(FlowStage::Friends < FlowStage::Review);
//! assert_eq!(FlowStage::Friends.next(), FlowStage::AdjustSplit);
//!
//! let mode = SplitMode::Percent;
//! assert_eq!(mode.to_string(), "percent");
//! ```

pub mod errors;
pub mod flow;
pub mod identifiers;
pub mod participant;

// Re-export common types for convenience
pub use errors::{AmountParseError, ValidationError};
pub use flow::{FlowStage, SplitMode};
pub use identifiers::ParticipantId;
pub use participant::Participant;
