//! Typed participant identifiers
//!
//! Zero-cost wrapper over `u64` with complete type safety: a function taking
//! a [`ParticipantId`] cannot accidentally receive a raw count or index.
//! Identifiers are assigned monotonically by the session (current maximum
//! plus one) and are never reused after removal.

use std::fmt;

/// Unique identifier for a split participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)] // Same memory layout as u64 for zero cost
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// Create a new typed ID
    #[inline(always)]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Extract the inner u64 value
    #[inline(always)]
    pub const fn inner(&self) -> u64 {
        self.0
    }

    /// Generate next sequential ID
    #[inline(always)]
    pub fn next(&self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Check if this is a null/zero ID
    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Create a null/zero ID
    #[inline(always)]
    pub const fn null() -> Self {
        Self(0)
    }
}

// Display for debugging and logging
impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParticipantId({})", self.0)
    }
}

// Conversions for interoperability
impl From<u64> for ParticipantId {
    #[inline(always)]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ParticipantId> for u64 {
    #[inline(always)]
    fn from(id: ParticipantId) -> u64 {
        id.0
    }
}

// Serialization support - serializes as raw u64
impl serde::Serialize for ParticipantId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ParticipantId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Self)
    }
}
