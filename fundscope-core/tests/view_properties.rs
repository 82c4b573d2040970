//! Property tests for the fund view engine and the color mapper

use fundscope_core::heatmap::{color_at, color_for};
use fundscope_core::view::{locale_cmp, matches_query};
use std::cmp::Ordering;
use fundscope_core::{
    compute_view, FundRecord, RiskLevel, SortDirection, SortDirective, SortField, SortState,
};
use proptest::prelude::*;

fn risk_level() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::VeryLow),
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
        Just(RiskLevel::VeryHigh),
    ]
}

fn sort_field() -> impl Strategy<Value = SortField> {
    prop_oneof![
        Just(SortField::Name),
        Just(SortField::Company),
        Just(SortField::Category),
        Just(SortField::OneYearReturn),
        Just(SortField::ThreeYearReturn),
        Just(SortField::RiskLevel),
    ]
}

fn directive() -> impl Strategy<Value = SortDirective> {
    prop_oneof![
        Just(SortDirective::unsorted()),
        sort_field().prop_map(SortDirective::ascending),
        sort_field().prop_map(SortDirective::descending),
    ]
}

// Small alphabets so that queries hit and keys collide often
fn fund() -> impl Strategy<Value = FundRecord> {
    (
        "[ab]{1,3}",
        "[AbC]{1,2}",
        prop_oneof![Just("Bond Funds"), Just("Equity Funds"), Just("Mixed Funds")],
        prop_oneof![Just(9.5), Just(10.0), Just(12.25)],
        -5.0f64..30.0,
        risk_level(),
    )
        .prop_map(|(name, company, category, one, three, risk)| {
            FundRecord::new(&name, &company, category, one, three, risk)
        })
}

fn funds() -> impl Strategy<Value = Vec<FundRecord>> {
    prop::collection::vec(fund(), 0..12)
}

proptest! {
    #[test]
    fn prop_filter_is_sound_and_complete(records in funds(), query in "[abcBF]{0,2}", sort in directive()) {
        let view = compute_view(&records, &query, &sort);
        prop_assert!(view.iter().all(|r| matches_query(r, &query)));
        let expected = records.iter().filter(|r| matches_query(r, &query)).count();
        prop_assert_eq!(view.len(), expected);
    }

    #[test]
    fn prop_empty_query_keeps_everything(records in funds(), sort in directive()) {
        prop_assert_eq!(compute_view(&records, "", &sort).len(), records.len());
    }

    #[test]
    fn prop_view_is_idempotent(records in funds(), query in "[abcBF]{0,2}", sort in directive()) {
        let once = compute_view(&records, &query, &sort);
        let twice = compute_view(&once, &query, &sort);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_unsorted_preserves_input_order(records in funds(), query in "[abcBF]{0,2}") {
        let view = compute_view(&records, &query, &SortDirective::unsorted());
        let expected: Vec<FundRecord> = records
            .iter()
            .filter(|r| matches_query(r, &query))
            .cloned()
            .collect();
        prop_assert_eq!(view, expected);
    }

    #[test]
    fn prop_sort_is_stable_for_equal_keys(records in funds()) {
        // Tag each record with its input position through the three-year return
        let tagged: Vec<FundRecord> = records
            .iter()
            .enumerate()
            .map(|(i, r)| FundRecord { three_year_return: i as f64, ..r.clone() })
            .collect();
        for directive in [
            SortDirective::ascending(SortField::OneYearReturn),
            SortDirective::descending(SortField::OneYearReturn),
        ] {
            let view = compute_view(&tagged, "", &directive);
            for pair in view.windows(2) {
                if pair[0].one_year_return == pair[1].one_year_return {
                    prop_assert!(pair[0].three_year_return < pair[1].three_year_return);
                }
            }
        }
    }

    #[test]
    fn prop_text_sort_orders_accented_names(names in prop::collection::vec("[aoOzÖöıİiÉe]{1,4}", 0..10)) {
        let records: Vec<FundRecord> = names
            .iter()
            .map(|n| FundRecord::new(n, "Co", "Bond Funds", 0.0, 0.0, RiskLevel::Low))
            .collect();
        let view = compute_view(&records, "", &SortDirective::ascending(SortField::Name));
        for pair in view.windows(2) {
            prop_assert_ne!(locale_cmp(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
        for name in &names {
            prop_assert_eq!(locale_cmp(name, name), Ordering::Equal);
        }
    }

    #[test]
    fn prop_numeric_sort_is_ordered(records in funds(), descending in any::<bool>()) {
        let directive = if descending {
            SortDirective::descending(SortField::ThreeYearReturn)
        } else {
            SortDirective::ascending(SortField::ThreeYearReturn)
        };
        let view = compute_view(&records, "", &directive);
        for pair in view.windows(2) {
            if descending {
                prop_assert!(pair[0].three_year_return >= pair[1].three_year_return);
            } else {
                prop_assert!(pair[0].three_year_return <= pair[1].three_year_return);
            }
        }
    }

    #[test]
    fn prop_three_selections_cycle_back(start in prop_oneof![
        Just(SortState::Unsorted),
        sort_field().prop_map(SortState::Ascending),
        sort_field().prop_map(SortState::Descending),
    ], field in sort_field()) {
        prop_assume!(start.field() != Some(field));
        let first = start.select(field);
        prop_assert_eq!(first, SortState::Ascending(field));
        let second = first.select(field);
        prop_assert_eq!(second.direction(), SortDirection::Descending);
        let third = second.select(field);
        prop_assert_eq!(third, SortState::Unsorted);
        prop_assert_eq!(third.directive(), SortDirective::unsorted());
    }

    #[test]
    fn prop_color_is_total(value in any::<f64>(), min in -100.0f64..100.0, span in 0.0f64..100.0) {
        let max = min + span;
        // Must not panic for any input, including NaN and infinities
        let _ = color_for(value, min, max);
    }

    #[test]
    fn prop_out_of_range_clamps_to_ends(min in -100.0f64..100.0, span in 0.1f64..100.0, excess in 0.0f64..1e6) {
        let max = min + span;
        prop_assert_eq!(color_for(min - excess, min, max), color_at(0.0));
        prop_assert_eq!(color_for(max + excess, min, max), color_at(1.0));
    }
}
