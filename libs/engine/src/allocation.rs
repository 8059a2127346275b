//! Split allocation with remainder absorption
//!
//! Dividing a total into rounded shares leaves a residual of a few pence.
//! Every multi-party allocation here assigns each selection member except
//! the last an independently rounded share, then gives the last member
//! `total - running_sum` so the parts reconstruct the rounded total exactly.
//! Custom mode is the deliberate exception: amounts are taken verbatim and
//! validity is judged by the residual instead.

use paysplit_types::{ParticipantId, SplitMode};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::money::{round_currency, round_percent};

/// Per-participant amounts keyed by id
pub type AmountMap = HashMap<ParticipantId, Decimal>;

/// Per-participant percentages keyed by id
pub type PercentMap = HashMap<ParticipantId, Decimal>;

/// Split math over an ordered selection of participants
///
/// Selection order matters: the final member absorbs the rounding remainder
/// in Equal and Percent modes and in percentage rebalancing.
pub struct SplitCalculator;

impl SplitCalculator {
    /// Derive the amount each selected participant owes
    ///
    /// An empty selection yields an empty map; the flow gates against empty
    /// selections upstream.
    pub fn compute_amounts(
        mode: SplitMode,
        total: Decimal,
        selection: &[ParticipantId],
        percents: &PercentMap,
        customs: &AmountMap,
    ) -> AmountMap {
        if selection.is_empty() {
            return AmountMap::new();
        }
        match mode {
            SplitMode::Equal => Self::equal_allocation(total, selection),
            SplitMode::Percent => Self::percent_allocation(total, selection, percents),
            SplitMode::Custom => Self::custom_allocation(selection, customs),
        }
    }

    /// Equal shares: everyone but the last member pays `round(total / n)`,
    /// the last member pays whatever reconstructs the total
    fn equal_allocation(total: Decimal, selection: &[ParticipantId]) -> AmountMap {
        let n = Decimal::from(selection.len());
        let base = round_currency(total / n);

        let mut amounts = AmountMap::with_capacity(selection.len());
        let mut running = Decimal::ZERO;
        for (i, id) in selection.iter().enumerate() {
            if i + 1 < selection.len() {
                amounts.insert(*id, base);
                running += base;
            } else {
                amounts.insert(*id, round_currency(total - running));
            }
        }
        amounts
    }

    /// Percentage shares with the same last-member remainder absorption
    ///
    /// Missing percentage entries count as zero. The absorption makes the
    /// amounts reconstruct the total even when the percentages do not sum
    /// to 100; keeping the percentage map balanced is the caller's concern.
    fn percent_allocation(
        total: Decimal,
        selection: &[ParticipantId],
        percents: &PercentMap,
    ) -> AmountMap {
        let mut amounts = AmountMap::with_capacity(selection.len());
        let mut running = Decimal::ZERO;
        for (i, id) in selection.iter().enumerate() {
            if i + 1 < selection.len() {
                let share = percents.get(id).copied().unwrap_or(Decimal::ZERO);
                let amount = round_currency(total * share / dec!(100));
                amounts.insert(*id, amount);
                running += amount;
            } else {
                amounts.insert(*id, round_currency(total - running));
            }
        }
        amounts
    }

    /// Custom amounts verbatim: no remainder correction
    fn custom_allocation(selection: &[ParticipantId], customs: &AmountMap) -> AmountMap {
        selection
            .iter()
            .map(|id| {
                let amount = customs.get(id).copied().unwrap_or(Decimal::ZERO);
                (*id, round_currency(amount.max(Decimal::ZERO)))
            })
            .collect()
    }

    /// Equal split of 100 across the selection, last member absorbing the
    /// remainder: `eq = round(100 / n)`, last gets `100 - eq * (n - 1)`
    pub fn balanced_percentages(selection: &[ParticipantId]) -> PercentMap {
        if selection.is_empty() {
            return PercentMap::new();
        }
        let n = selection.len();
        let eq = round_percent(dec!(100) / Decimal::from(n));

        let mut percents = PercentMap::with_capacity(n);
        for (i, id) in selection.iter().enumerate() {
            if i + 1 < n {
                percents.insert(*id, eq);
            } else {
                percents.insert(*id, round_percent(dec!(100) - eq * Decimal::from(n - 1)));
            }
        }
        percents
    }

    /// Apply a single percentage edit, keeping the map summing to 100
    ///
    /// The edited value is clamped to `[0, 100]` and written, then the LAST
    /// selection member is recomputed as `max(0, 100 - sum(earlier members))`.
    /// When the edited member is itself the last, its clamped value is
    /// immediately overwritten by the residual.
    pub fn rebalance_after_edit(
        percents: &mut PercentMap,
        selection: &[ParticipantId],
        id: ParticipantId,
        value: Decimal,
    ) {
        let clamped = value.clamp(Decimal::ZERO, dec!(100));
        percents.insert(id, clamped);

        if let Some((last, earlier)) = selection.split_last() {
            let sum_earlier: Decimal = earlier
                .iter()
                .map(|member| percents.get(member).copied().unwrap_or(Decimal::ZERO))
                .sum();
            percents.insert(
                *last,
                round_percent((dec!(100) - sum_earlier).max(Decimal::ZERO)),
            );
        }
    }

    /// Residual between the bill total and the allocated amounts
    ///
    /// Always zero for Equal and Percent allocations by construction; in
    /// Custom mode it is the user-visible imbalance that gates the flow.
    pub fn remaining(total: Decimal, amounts: &AmountMap) -> Decimal {
        let allocated: Decimal = amounts.values().copied().sum();
        round_currency(total - allocated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(range: std::ops::RangeInclusive<u64>) -> Vec<ParticipantId> {
        range.map(ParticipantId::new).collect()
    }

    #[test]
    fn equal_split_of_demo_total() {
        let selection = ids(1..=3);
        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Equal,
            dec!(64.50),
            &selection,
            &PercentMap::new(),
            &AmountMap::new(),
        );
        for id in &selection {
            assert_eq!(amounts[id], dec!(21.50));
        }
    }

    #[test]
    fn equal_split_last_member_absorbs_remainder() {
        let selection = ids(1..=3);
        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Equal,
            dec!(100),
            &selection,
            &PercentMap::new(),
            &AmountMap::new(),
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(33.33));
        assert_eq!(amounts[&ParticipantId::new(2)], dec!(33.33));
        assert_eq!(amounts[&ParticipantId::new(3)], dec!(33.34));
        let sum: Decimal = amounts.values().copied().sum();
        assert_eq!(sum, dec!(100));
    }

    #[test]
    fn equal_split_single_member_rounds_total() {
        let selection = ids(1..=1);
        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Equal,
            dec!(10.555),
            &selection,
            &PercentMap::new(),
            &AmountMap::new(),
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(10.56));
    }

    #[test]
    fn percent_split_uses_entries_and_absorbs() {
        let selection = ids(1..=3);
        let mut percents = PercentMap::new();
        percents.insert(ParticipantId::new(1), dec!(60));
        percents.insert(ParticipantId::new(2), dec!(25));
        percents.insert(ParticipantId::new(3), dec!(15));

        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Percent,
            dec!(64.50),
            &selection,
            &percents,
            &AmountMap::new(),
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(38.70));
        assert_eq!(amounts[&ParticipantId::new(2)], dec!(16.13));
        // 64.50 - 38.70 - 16.13, not an independent 15% rounding
        assert_eq!(amounts[&ParticipantId::new(3)], dec!(9.67));
    }

    #[test]
    fn percent_split_missing_entries_count_as_zero() {
        let selection = ids(1..=2);
        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Percent,
            dec!(50),
            &selection,
            &PercentMap::new(),
            &AmountMap::new(),
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(0));
        assert_eq!(amounts[&ParticipantId::new(2)], dec!(50));
    }

    #[test]
    fn custom_split_is_not_corrected() {
        let selection = ids(1..=2);
        let mut customs = AmountMap::new();
        customs.insert(ParticipantId::new(1), dec!(40));
        customs.insert(ParticipantId::new(2), dec!(40));

        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Custom,
            dec!(100),
            &selection,
            &PercentMap::new(),
            &customs,
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(40));
        assert_eq!(amounts[&ParticipantId::new(2)], dec!(40));
        assert_eq!(SplitCalculator::remaining(dec!(100), &amounts), dec!(20));
    }

    #[test]
    fn custom_split_clamps_negatives_to_zero() {
        let selection = ids(1..=1);
        let mut customs = AmountMap::new();
        customs.insert(ParticipantId::new(1), dec!(-5));

        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Custom,
            dec!(10),
            &selection,
            &PercentMap::new(),
            &customs,
        );
        assert_eq!(amounts[&ParticipantId::new(1)], dec!(0));
    }

    #[test]
    fn empty_selection_yields_empty_map() {
        let amounts = SplitCalculator::compute_amounts(
            SplitMode::Equal,
            dec!(100),
            &[],
            &PercentMap::new(),
            &AmountMap::new(),
        );
        assert!(amounts.is_empty());
    }

    #[test]
    fn balanced_percentages_three_way() {
        let selection = ids(1..=3);
        let percents = SplitCalculator::balanced_percentages(&selection);
        assert_eq!(percents[&ParticipantId::new(1)], dec!(33.33));
        assert_eq!(percents[&ParticipantId::new(2)], dec!(33.33));
        assert_eq!(percents[&ParticipantId::new(3)], dec!(33.34));
    }

    #[test]
    fn balanced_percentages_six_way_can_under_absorb() {
        // eq = 16.67, last = 100 - 16.67 * 5 = 16.65
        let selection = ids(1..=6);
        let percents = SplitCalculator::balanced_percentages(&selection);
        assert_eq!(percents[&ParticipantId::new(1)], dec!(16.67));
        assert_eq!(percents[&ParticipantId::new(6)], dec!(16.65));
        let sum: Decimal = percents.values().copied().sum();
        assert_eq!(sum, dec!(100));
    }

    #[test]
    fn balanced_percentages_empty_selection() {
        assert!(SplitCalculator::balanced_percentages(&[]).is_empty());
    }

    #[test]
    fn edit_rebalances_last_member() {
        let selection = ids(1..=3);
        let mut percents = SplitCalculator::balanced_percentages(&selection);

        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(1),
            dec!(50),
        );
        assert_eq!(percents[&ParticipantId::new(1)], dec!(50));
        assert_eq!(percents[&ParticipantId::new(2)], dec!(33.33));
        assert_eq!(percents[&ParticipantId::new(3)], dec!(16.67));
        let sum: Decimal = selection
            .iter()
            .map(|id| percents[id])
            .sum();
        assert_eq!(sum, dec!(100));
    }

    #[test]
    fn edit_clamps_out_of_range_values() {
        let selection = ids(1..=2);
        let mut percents = SplitCalculator::balanced_percentages(&selection);

        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(1),
            dec!(250),
        );
        assert_eq!(percents[&ParticipantId::new(1)], dec!(100));
        assert_eq!(percents[&ParticipantId::new(2)], dec!(0));

        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(1),
            dec!(-10),
        );
        assert_eq!(percents[&ParticipantId::new(1)], dec!(0));
        assert_eq!(percents[&ParticipantId::new(2)], dec!(100));
    }

    #[test]
    fn last_member_never_goes_negative() {
        let selection = ids(1..=3);
        let mut percents = SplitCalculator::balanced_percentages(&selection);

        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(1),
            dec!(80),
        );
        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(2),
            dec!(80),
        );
        // earlier members sum past 100; residual clamps at zero
        assert_eq!(percents[&ParticipantId::new(3)], dec!(0));
    }

    #[test]
    fn editing_last_member_is_overwritten_by_residual() {
        let selection = ids(1..=3);
        let mut percents = SplitCalculator::balanced_percentages(&selection);

        SplitCalculator::rebalance_after_edit(
            &mut percents,
            &selection,
            ParticipantId::new(3),
            dec!(90),
        );
        // the residual of the first two members wins, not the edit
        assert_eq!(percents[&ParticipantId::new(3)], dec!(33.34));
    }

    #[test]
    fn remaining_is_zero_for_balanced_modes() {
        let selection = ids(1..=7);
        let total = dec!(123.45);
        let percents = SplitCalculator::balanced_percentages(&selection);

        for mode in [SplitMode::Equal, SplitMode::Percent] {
            let amounts = SplitCalculator::compute_amounts(
                mode,
                total,
                &selection,
                &percents,
                &AmountMap::new(),
            );
            assert_eq!(SplitCalculator::remaining(total, &amounts), Decimal::ZERO);
        }
    }
}
