//! Session configuration
//!
//! Seed state for a new split session: currency symbol, opening bill total,
//! opening mode, and the starting roster. Defaults reproduce the demo
//! session; deployments can override any field from TOML.

use anyhow::{bail, Context, Result};
use paysplit_types::{Participant, ParticipantId, SplitMode, ValidationError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Seed configuration for a [`crate::SplitSession`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Symbol prefixed to rendered amounts
    pub currency_symbol: String,
    /// Opening bill total
    pub initial_total: Decimal,
    /// Opening split mode
    pub initial_mode: SplitMode,
    /// Starting roster; everyone is selected at session start
    pub roster: Vec<Participant>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "£".to_string(),
            initial_total: dec!(64.50),
            initial_mode: SplitMode::Percent,
            roster: vec![
                Participant::new(ParticipantId::new(1), "Adam", "🜲"),
                Participant::new(ParticipantId::new(2), "Maya", "🌙"),
                Participant::new(ParticipantId::new(3), "Leo", "🦊"),
            ],
        }
    }
}

impl SessionConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self = toml::from_str(input).context("parsing session config")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate roster identifiers and the opening total
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for participant in &self.roster {
            if participant.id.is_null() {
                return Err(ValidationError::NullId.into());
            }
            if !seen.insert(participant.id) {
                return Err(ValidationError::DuplicateId {
                    id: participant.id.inner(),
                }
                .into());
            }
        }
        if self.initial_total < Decimal::ZERO {
            bail!(
                "initial_total must be non-negative, got {}",
                self.initial_total
            );
        }
        Ok(())
    }
}
