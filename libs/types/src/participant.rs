//! Participant records
//!
//! A participant is a person who can be included in a split: a typed id,
//! a display name, and a display glyph. Membership in the current split is
//! tracked separately by the session's selection, not on the record itself.

use crate::ParticipantId;
use serde::{Deserialize, Serialize};

/// A person who can be included in a split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier within the session
    pub id: ParticipantId,
    /// Display name
    pub name: String,
    /// Display glyph shown next to the name
    pub avatar: String,
}

impl Participant {
    /// Create a participant with an explicit name and avatar
    pub fn new(id: ParticipantId, name: impl Into<String>, avatar: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: avatar.into(),
        }
    }

    /// Default record produced by the "add" action: `Guest <id>`
    pub fn guest(id: ParticipantId) -> Self {
        Self {
            id,
            name: format!("Guest {}", id.inner()),
            avatar: "🙂".to_string(),
        }
    }
}
