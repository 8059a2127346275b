//! Split session state and reducer-style transitions
//!
//! One [`SplitSession`] record carries everything a split flow needs: the
//! roster, the ordered selection, the bill total, the active mode with both
//! per-mode input maps, and the wizard stage. Mutations are explicit methods;
//! percent auto-balancing runs as a transition side-effect of the mutators
//! that change the selection, never as hidden reactivity. Amounts and the
//! residual are derived on demand and never stored.

use paysplit_engine::allocation::{AmountMap, PercentMap};
use paysplit_engine::{format_currency, SplitCalculator};
use paysplit_types::{FlowStage, Participant, ParticipantId, SplitMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SessionConfig;

/// Residual magnitude below which a custom split counts as settled
pub const SETTLED_EPSILON: Decimal = dec!(0.01);

/// State of one bill-split flow
///
/// Selection order is first-appearance order: toggling a member back in
/// appends them to the end, which moves the rounding-remainder absorption
/// onto them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitSession {
    roster: Vec<Participant>,
    selection: Vec<ParticipantId>,
    total: Decimal,
    mode: SplitMode,
    percents: PercentMap,
    customs: AmountMap,
    stage: FlowStage,
    currency_symbol: String,
}

impl SplitSession {
    /// Seed a session from configuration: everyone selected, percentages
    /// balanced, stage at the start of the wizard
    pub fn new(config: SessionConfig) -> Self {
        let selection: Vec<ParticipantId> = config.roster.iter().map(|p| p.id).collect();
        let percents = SplitCalculator::balanced_percentages(&selection);
        Self {
            roster: config.roster,
            selection,
            total: config.initial_total.max(Decimal::ZERO),
            mode: config.initial_mode,
            percents,
            customs: AmountMap::new(),
            stage: FlowStage::Friends,
            currency_symbol: config.currency_symbol,
        }
    }

    /// Seed a session with the demo defaults
    pub fn with_defaults() -> Self {
        Self::new(SessionConfig::default())
    }

    // ---- Read access -----------------------------------------------------

    pub fn roster(&self) -> &[Participant] {
        &self.roster
    }

    pub fn selection(&self) -> &[ParticipantId] {
        &self.selection
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn mode(&self) -> SplitMode {
        self.mode
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    pub fn percents(&self) -> &PercentMap {
        &self.percents
    }

    pub fn customs(&self) -> &AmountMap {
        &self.customs
    }

    pub fn currency_symbol(&self) -> &str {
        &self.currency_symbol
    }

    /// Look up a roster member by id
    pub fn participant(&self, id: ParticipantId) -> Option<&Participant> {
        self.roster.iter().find(|p| p.id == id)
    }

    /// Roster records for the current selection, in selection order
    pub fn selected_participants(&self) -> Vec<&Participant> {
        self.selection
            .iter()
            .filter_map(|id| self.participant(*id))
            .collect()
    }

    // ---- Registry and selection ------------------------------------------

    /// Add a guest participant with the next id (current maximum plus one)
    /// and include them in the selection
    pub fn add_participant(&mut self) -> ParticipantId {
        let id = ParticipantId::new(
            self.roster
                .iter()
                .map(|p| p.id.inner())
                .max()
                .unwrap_or(0)
                + 1,
        );
        debug!(%id, "adding participant");
        self.roster.push(Participant::guest(id));
        self.selection.push(id);
        self.rebalance_percents();
        id
    }

    /// Remove a participant from the roster and the selection; no-op when
    /// the id is unknown
    pub fn remove_participant(&mut self, id: ParticipantId) {
        let selected_before = self.selection.len();
        self.roster.retain(|p| p.id != id);
        self.selection.retain(|member| *member != id);
        if self.selection.len() != selected_before {
            debug!(%id, "removed selected participant");
            self.rebalance_percents();
        }
    }

    /// UI guard for the remove affordance: the final roster member stays
    ///
    /// The registry itself places no lower bound; see
    /// [`Self::remove_participant`].
    pub fn can_remove(&self, id: ParticipantId) -> bool {
        self.roster.len() > 1 && self.roster.iter().any(|p| p.id == id)
    }

    /// Toggle a participant in or out of the selection; re-added members
    /// join at the end and become the remainder absorber
    pub fn toggle_selection(&mut self, id: ParticipantId) {
        if let Some(position) = self.selection.iter().position(|member| *member == id) {
            self.selection.remove(position);
        } else {
            self.selection.push(id);
        }
        self.rebalance_percents();
    }

    /// Any selection change resets percentage allocation to equal shares;
    /// manually entered percentages are discarded
    fn rebalance_percents(&mut self) {
        self.percents = SplitCalculator::balanced_percentages(&self.selection);
    }

    // ---- Field editors ---------------------------------------------------

    /// Set the bill total, clamped non-negative
    pub fn set_total(&mut self, total: Decimal) {
        if total < Decimal::ZERO {
            warn!(%total, "negative bill total clamped to zero");
        }
        self.total = total.max(Decimal::ZERO);
    }

    /// Switch the split mode; the other modes' maps persist so flipping
    /// back and forth loses nothing
    pub fn set_mode(&mut self, mode: SplitMode) {
        self.mode = mode;
    }

    /// Edit one participant's percentage; the last selection member absorbs
    /// the residual so the map keeps summing to 100
    pub fn set_percent_for(&mut self, id: ParticipantId, value: Decimal) {
        SplitCalculator::rebalance_after_edit(&mut self.percents, &self.selection, id, value);
    }

    /// Edit one participant's custom amount, clamped non-negative; no
    /// cross-field recomputation
    pub fn set_custom_for(&mut self, id: ParticipantId, value: Decimal) {
        if value < Decimal::ZERO {
            warn!(%id, %value, "negative custom amount clamped to zero");
        }
        self.customs.insert(id, value.max(Decimal::ZERO));
    }

    // ---- Derived figures -------------------------------------------------

    /// Amount each selected participant owes under the active mode
    pub fn amounts(&self) -> AmountMap {
        SplitCalculator::compute_amounts(
            self.mode,
            self.total,
            &self.selection,
            &self.percents,
            &self.customs,
        )
    }

    /// Sum of the derived amounts (the review screen's grand total)
    pub fn amounts_total(&self) -> Decimal {
        self.amounts().values().copied().sum()
    }

    /// Residual between the bill total and the derived amounts
    pub fn remaining(&self) -> Decimal {
        SplitCalculator::remaining(self.total, &self.amounts())
    }

    /// Whether the residual is within the settled tolerance
    pub fn is_settled(&self) -> bool {
        self.remaining().abs() < SETTLED_EPSILON
    }

    /// Render an amount with the session's currency symbol
    pub fn format_amount(&self, value: Decimal) -> String {
        format_currency(value, &self.currency_symbol)
    }

    // ---- Flow control ----------------------------------------------------

    /// Whether the current stage's data permits moving forward
    pub fn can_advance(&self) -> bool {
        match self.stage {
            FlowStage::Friends => !self.selection.is_empty() && self.total > Decimal::ZERO,
            FlowStage::AdjustSplit => {
                !self.selection.is_empty()
                    && self.total > Decimal::ZERO
                    && (self.mode != SplitMode::Custom || self.is_settled())
            }
            // Review is only reachable through a validated transition
            FlowStage::Review => true,
            // Success exits through reset, not advance
            FlowStage::Success => false,
        }
    }

    /// Move to the next stage when the gate allows it
    ///
    /// Returns false and leaves the state untouched otherwise; a disallowed
    /// transition is a disabled affordance, never a failure.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            warn!(stage = %self.stage, "forward transition rejected");
            return false;
        }
        let from = self.stage;
        self.stage = self.stage.next();
        debug!(from = %from, to = %self.stage, "advanced");
        true
    }

    /// Step back one stage; no-op at the start of the wizard
    pub fn back(&mut self) {
        self.stage = self.stage.prev();
    }

    /// Start a new split: stage back to the start and everyone selected
    /// again; the roster, total, and entered maps persist across cycles
    pub fn reset(&mut self) {
        debug!(from = %self.stage, "resetting flow");
        self.stage = FlowStage::Friends;
        let everyone: Vec<ParticipantId> = self.roster.iter().map(|p| p.id).collect();
        if everyone != self.selection {
            self.selection = everyone;
            self.rebalance_percents();
        }
    }
}
