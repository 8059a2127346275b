//! Split modes and flow stages
//!
//! [`SplitMode`] selects how per-person amounts are derived. [`FlowStage`] is
//! the four-step wizard position; stages are strictly ordered and navigation
//! saturates at both ends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How per-participant amounts are derived from the bill total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitMode {
    /// Everyone pays the same share
    Equal,
    /// Shares assigned as percentages summing to 100
    Percent,
    /// Exact per-person amounts entered by hand
    Custom,
}

impl fmt::Display for SplitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SplitMode::Equal => "equal",
            SplitMode::Percent => "percent",
            SplitMode::Custom => "custom",
        };
        write!(f, "{label}")
    }
}

/// Position in the four-step split wizard
///
/// Forward navigation is gated by the session; backward navigation is always
/// allowed and is a no-op at [`FlowStage::Friends`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowStage {
    /// Pick who is in the split and enter the bill total
    Friends,
    /// Choose a split mode and adjust shares
    AdjustSplit,
    /// Confirm the derived amounts
    Review,
    /// Requests sent
    Success,
}

impl FlowStage {
    /// All stages in wizard order
    pub const ALL: [FlowStage; 4] = [
        FlowStage::Friends,
        FlowStage::AdjustSplit,
        FlowStage::Review,
        FlowStage::Success,
    ];

    /// Zero-based position in the wizard
    pub const fn index(self) -> u8 {
        match self {
            FlowStage::Friends => 0,
            FlowStage::AdjustSplit => 1,
            FlowStage::Review => 2,
            FlowStage::Success => 3,
        }
    }

    /// The following stage, saturating at [`FlowStage::Success`]
    pub const fn next(self) -> Self {
        match self {
            FlowStage::Friends => FlowStage::AdjustSplit,
            FlowStage::AdjustSplit => FlowStage::Review,
            FlowStage::Review => FlowStage::Success,
            FlowStage::Success => FlowStage::Success,
        }
    }

    /// The preceding stage, saturating at [`FlowStage::Friends`]
    pub const fn prev(self) -> Self {
        match self {
            FlowStage::Friends => FlowStage::Friends,
            FlowStage::AdjustSplit => FlowStage::Friends,
            FlowStage::Review => FlowStage::AdjustSplit,
            FlowStage::Success => FlowStage::Review,
        }
    }

    /// Screen title shown for this stage
    pub const fn title(self) -> &'static str {
        match self {
            FlowStage::Friends => "New split",
            FlowStage::AdjustSplit => "Adjust split",
            FlowStage::Review => "Review",
            FlowStage::Success => "All set",
        }
    }

    /// Short label for a step indicator
    pub const fn label(self) -> &'static str {
        match self {
            FlowStage::Friends => "Friends",
            FlowStage::AdjustSplit => "Split",
            FlowStage::Review => "Review",
            FlowStage::Success => "Done",
        }
    }
}

impl fmt::Display for FlowStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
