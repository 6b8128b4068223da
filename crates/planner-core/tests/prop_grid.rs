//! Property-based tests for grid page pairing using proptest.
//!
//! These verify invariants that should hold for *any* planner range, not
//! just the fixed span the shipped planner uses.

use chrono::{Duration, NaiveDate};
use planner_core::{build_pages, GridConfig, PlannerRange, ScheduleDataset, StyleTable};
use proptest::prelude::*;

fn empty_dataset() -> ScheduleDataset {
    ScheduleDataset::new(vec![]).unwrap()
}

/// Arbitrary range start within a few years of the shipped planner.
fn arb_start() -> impl Strategy<Value = NaiveDate> {
    (0i64..1500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    #[test]
    fn page_count_is_ceiling_of_half_the_dates(start in arb_start(), num_days in 1i64..=200) {
        let end = start + Duration::days(num_days - 1);
        let range = PlannerRange::new(start, end).unwrap();
        prop_assert_eq!(range.num_days(), num_days);

        let pages = build_pages(&empty_dataset(), &StyleTable::new(), range, GridConfig::default()).unwrap();

        let expected = (num_days as usize).div_ceil(2);
        prop_assert_eq!(pages.len(), expected);

        // The last page holds one date iff the range length is odd.
        let last_len = pages.last().unwrap().days.len();
        if num_days % 2 == 1 {
            prop_assert_eq!(last_len, 1);
        } else {
            prop_assert_eq!(last_len, 2);
        }
    }

    #[test]
    fn pages_cover_the_range_in_order(start in arb_start(), num_days in 1i64..=60) {
        let end = start + Duration::days(num_days - 1);
        let range = PlannerRange::new(start, end).unwrap();

        let pages = build_pages(&empty_dataset(), &StyleTable::new(), range, GridConfig::default()).unwrap();

        let dates: Vec<NaiveDate> = pages
            .iter()
            .flat_map(|p| p.days.iter().map(|d| d.date))
            .collect();
        let expected: Vec<NaiveDate> = (0..num_days).map(|i| start + Duration::days(i)).collect();
        prop_assert_eq!(dates, expected);
    }

    #[test]
    fn every_day_has_the_full_hour_window(start in arb_start(), num_days in 1i64..=30) {
        let end = start + Duration::days(num_days - 1);
        let range = PlannerRange::new(start, end).unwrap();

        let pages = build_pages(&empty_dataset(), &StyleTable::new(), range, GridConfig::default()).unwrap();

        for page in &pages {
            for day in &page.days {
                prop_assert_eq!(day.cells.len(), 17);
                let hours: Vec<u32> = day.cells.iter().map(|c| c.hour).collect();
                let expected: Vec<u32> = (7..=23).collect();
                prop_assert_eq!(hours, expected);
            }
        }
    }
}
