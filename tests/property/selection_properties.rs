// Property-based tests for grid building, navigation and range selection
// Exercises the picker engine with random dates and click sequences

use calendar_picker::models::calendar_date::CalendarDate;
use calendar_picker::models::picker::{Direction, Granularity, Selection, SelectionMode, ViewState};
use calendar_picker::models::settings::PickerSettings;
use calendar_picker::services::grid::{build_day_grid, build_year_grid, DAY_GRID_CELLS};
use calendar_picker::services::navigation::step_month;
use calendar_picker::services::picker::PickerEngine;
use calendar_picker::services::selection::select_candidate;
use proptest::prelude::*;

fn arb_date() -> impl Strategy<Value = CalendarDate> {
    (1900..2200i32, 1..=12u32, 1..=31u32).prop_map(|(year, month, day)| {
        let last = calendar_picker::utils::date::days_in_month(year, month);
        CalendarDate::from_ymd(year, month, day.min(last)).unwrap()
    })
}

fn arb_granularity() -> impl Strategy<Value = Granularity> {
    prop_oneof![
        Just(Granularity::Day),
        Just(Granularity::Month),
        Just(Granularity::Year),
    ]
}

proptest! {
    /// Property: the day grid always has 42 consecutive days starting on the week start
    #[test]
    fn prop_day_grid_is_complete(reference in arb_date(), week_start in 0..7u8) {
        let settings = PickerSettings::default().with_first_day_of_week(week_start);
        let grid = build_day_grid(reference, settings.week_start());

        prop_assert_eq!(grid.len(), DAY_GRID_CELLS);
        prop_assert_eq!(grid[0].weekday(), settings.week_start());
        for pair in grid.windows(2) {
            prop_assert_eq!(pair[0].succ(), pair[1]);
        }
        prop_assert!(grid.contains(&reference.first_of_month()));
        prop_assert!(grid.contains(&reference.last_of_month()));
    }

    /// Property: next then previous month lands on the first of the original month
    #[test]
    fn prop_step_month_round_trip(start in arb_date()) {
        let back = step_month(step_month(start, Direction::Next), Direction::Prev);
        prop_assert_eq!(back, start.first_of_month());
    }

    /// Property: the year block contains the reference year and is 12-aligned
    #[test]
    fn prop_year_grid_contains_reference(reference in arb_date()) {
        let years = build_year_grid(reference);
        prop_assert_eq!(years.len(), 12);
        prop_assert_eq!(years[0].rem_euclid(12), 0);
        prop_assert!(years.contains(&reference.year()));
    }

    /// Property: after any click sequence a range end never precedes its start
    #[test]
    fn prop_range_stays_ordered(
        clicks in prop::collection::vec(arb_date(), 1..20),
        granularity in arb_granularity(),
    ) {
        let mut selection = Selection::empty(SelectionMode::Range);
        for click in clicks {
            selection = select_candidate(selection, click, SelectionMode::Range, granularity);
            if let Selection::Range { start, end: Some(end) } = selection {
                let start = start.expect("end implies start");
                prop_assert!(start <= end);
            }
        }
    }

    /// Property: clicking anywhere after a complete range starts a new one
    #[test]
    fn prop_complete_range_restarts(a in arb_date(), b in arb_date(), c in arb_date()) {
        let complete = Selection::range(a.min(b), Some(a.max(b)));
        let next = select_candidate(complete, c, SelectionMode::Range, Granularity::Day);
        prop_assert_eq!(next, Selection::range(c, None));
    }

    /// Property: a click commits the same selection whatever was hovered before it
    #[test]
    fn prop_hover_never_mutates_selection(
        start in arb_date(),
        hovers in prop::collection::vec(arb_date(), 1..10),
        click in arb_date(),
        granularity in arb_granularity(),
    ) {
        let engine = PickerEngine::new(PickerSettings::new(granularity, SelectionMode::Range)).unwrap();
        let selection = Selection::range(start, None);
        let idle = engine.initial_view(&selection, start);

        let mut hovered = idle;
        for hover in &hovers {
            hovered = engine.hover_enter(hovered, &selection, *hover);
        }
        let last = hovers.last().map(|hover| hover.canonical(granularity));
        prop_assert_eq!(hovered.hover_candidate, last);

        let selected = |state: ViewState| -> Vec<bool> {
            engine.cells(&state, &selection, start).iter().map(|cell| cell.is_selected).collect()
        };
        prop_assert_eq!(selected(hovered), selected(idle));

        let after_hover = engine.activate(hovered, selection, click);
        let without_hover = engine.activate(idle, selection, click);
        prop_assert_eq!(after_hover.selection, without_hover.selection);
        prop_assert_eq!(after_hover.changed, without_hover.changed);
        prop_assert_eq!(after_hover.view_state, without_hover.view_state);
    }
}
