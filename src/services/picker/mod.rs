//! Picker engine.
//!
//! The in-process interface a rendering layer drives. The engine keeps only
//! its configuration; selection and view state belong to the host and are
//! passed in and returned by value on every call, so identical inputs always
//! give identical cells.

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{
    ActivateOutcome, Direction, Granularity, GridCell, Selection, SelectionChanged, SelectionMode,
    ViewState,
};
use crate::models::settings::PickerSettings;
use crate::services::format::header_label;
use crate::services::grid::{build_day_grid, month_dates, year_dates};
use crate::services::navigation::step_for_view;
use crate::services::selection::{cell_for, select_candidate};
use crate::services::view::{clamp_view, drill_down, drill_up, is_terminal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerEngine {
    settings: PickerSettings,
    granularity: Granularity,
    mode: SelectionMode,
}

impl Default for PickerEngine {
    fn default() -> Self {
        Self::from_valid(PickerSettings::default())
    }
}

impl PickerEngine {
    /// Build an engine, rejecting settings that fail validation.
    pub fn new(settings: PickerSettings) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self::from_valid(settings))
    }

    fn from_valid(settings: PickerSettings) -> Self {
        Self {
            granularity: settings.granularity,
            mode: settings.selection_mode,
            settings,
        }
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// An empty selection of the configured mode.
    pub fn empty_selection(&self) -> Selection {
        Selection::empty(self.mode)
    }

    pub fn initial_view(&self, selection: &Selection, today: CalendarDate) -> ViewState {
        ViewState::initial(&self.settings, selection, today)
    }

    /// Bring a previously saved view back under this configuration. The
    /// view is clamped to the configured granularity and any stale hover
    /// candidate is dropped.
    pub fn restore_view(&self, state: ViewState) -> ViewState {
        ViewState::new(state.reference_date, clamp_view(state.view, self.granularity))
    }

    /// Reduce a host-supplied selection to the configured mode and unit.
    pub fn coerce_selection(&self, selection: Selection) -> Selection {
        selection.coerce(self.mode).canonical(self.granularity)
    }

    /// Whether the cell holding `date` in `view` is outside the configured bounds.
    ///
    /// In the committing view the cell's representative date must be in
    /// bounds, since that is the value a click stores. Coarser views only
    /// drill down, so they stay enabled while any day of the unit is.
    pub fn is_disabled(&self, date: CalendarDate, view: Granularity) -> bool {
        let view = clamp_view(view, self.granularity);
        if is_terminal(view, self.granularity) {
            self.settings.is_out_of_bounds(date.canonical(view))
        } else {
            self.settings.is_unit_out_of_bounds(date, view)
        }
    }

    /// Pointer click on a cell.
    ///
    /// Disabled cells are ignored. In a view coarser than the configured
    /// granularity the click drills down; otherwise it runs the selection
    /// state machine. `changed` is set only when the selection differs.
    pub fn activate(&self, state: ViewState, selection: Selection, date: CalendarDate) -> ActivateOutcome {
        let view = clamp_view(state.view, self.granularity);
        let state = ViewState { view, ..state };
        let current = self.coerce_selection(selection);

        let unchanged = ActivateOutcome {
            selection: current,
            view_state: state,
            changed: None,
            close_hint: false,
        };

        if self.is_disabled(date, view) {
            log::debug!("Ignoring activation of disabled cell {}", date);
            return unchanged;
        }

        if !is_terminal(view, self.granularity) {
            return match drill_down(state, date, self.granularity) {
                Some(view_state) => ActivateOutcome {
                    view_state,
                    ..unchanged
                },
                None => unchanged,
            };
        }

        let next = select_candidate(current, date, self.mode, self.granularity);
        let changed = (next != current).then_some(SelectionChanged(next));

        ActivateOutcome {
            selection: next,
            view_state: ViewState {
                hover_candidate: None,
                ..state
            },
            changed,
            close_hint: self.mode == SelectionMode::Single,
        }
    }

    /// Pointer entered a cell. Only records a candidate while a range is
    /// waiting for its second endpoint; disabled cells clear the preview.
    pub fn hover_enter(&self, state: ViewState, selection: &Selection, date: CalendarDate) -> ViewState {
        let view = clamp_view(state.view, self.granularity);
        let previewing = self.mode == SelectionMode::Range
            && self.coerce_selection(*selection).is_open_range()
            && !self.is_disabled(date, view);

        ViewState {
            hover_candidate: previewing.then(|| date.canonical(view)),
            ..state
        }
    }

    /// Pointer left every cell.
    pub fn hover_leave(&self, state: ViewState) -> ViewState {
        ViewState {
            hover_candidate: None,
            ..state
        }
    }

    /// Previous/next arrows: month in the day grid, year in the month grid,
    /// 12-year block in the year grid.
    pub fn navigate(&self, state: ViewState, direction: Direction) -> ViewState {
        let view = clamp_view(state.view, self.granularity);
        ViewState {
            reference_date: step_for_view(state.reference_date, view, direction),
            view,
            hover_candidate: None,
        }
    }

    /// Header label click.
    pub fn drill_up(&self, state: ViewState) -> ViewState {
        drill_up(ViewState {
            view: clamp_view(state.view, self.granularity),
            ..state
        })
    }

    pub fn header_label(&self, state: &ViewState) -> String {
        header_label(state.reference_date, clamp_view(state.view, self.granularity))
    }

    /// Derived cells for the current view, in display order: 42 for the day
    /// grid, 12 for the month and year grids.
    pub fn cells(&self, state: &ViewState, selection: &Selection, today: CalendarDate) -> Vec<GridCell> {
        let view = clamp_view(state.view, self.granularity);
        let selection = self.coerce_selection(*selection);
        let reference = state.reference_date;

        let hover = state
            .hover_candidate
            .filter(|hovered| !self.is_disabled(*hovered, view));

        let dates = match view {
            Granularity::Day => build_day_grid(reference, self.settings.week_start()),
            Granularity::Month => month_dates(reference.year()),
            Granularity::Year => year_dates(reference),
        };

        dates
            .into_iter()
            .map(|date| {
                let in_current_period = match view {
                    Granularity::Day => {
                        date.year() == reference.year() && date.month() == reference.month()
                    }
                    Granularity::Month | Granularity::Year => true,
                };
                let marks = cell_for(date, view, &selection, hover);
                GridCell {
                    date,
                    in_current_period,
                    is_selected: marks.is_selected,
                    is_range_start: marks.is_range_start,
                    is_range_end: marks.is_range_end,
                    is_range_endpoint: marks.is_range_endpoint(),
                    is_in_range: marks.is_in_range,
                    is_disabled: self.is_disabled(date, view),
                    is_today: date.canonical(view) == today.canonical(view),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn range_engine() -> PickerEngine {
        PickerEngine::new(PickerSettings::new(Granularity::Day, SelectionMode::Range)).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = PickerSettings::default().with_first_day_of_week(9);
        assert!(PickerEngine::new(settings).is_err());
    }

    #[test]
    fn test_activate_emits_change_once() {
        let engine = range_engine();
        let state = ViewState::new(date(2024, 3, 1), Granularity::Day);

        let first = engine.activate(state, engine.empty_selection(), date(2024, 3, 10));
        assert_eq!(
            first.changed,
            Some(SelectionChanged(Selection::range(date(2024, 3, 10), None)))
        );
        assert!(!first.close_hint);

        let repeat = engine.activate(first.view_state, first.selection, date(2024, 3, 10));
        assert_eq!(repeat.changed, None);
        assert_eq!(repeat.selection, first.selection);
    }

    #[test]
    fn test_single_commit_hints_close() {
        let engine = PickerEngine::default();
        let state = ViewState::new(date(2024, 3, 1), Granularity::Day);
        let outcome = engine.activate(state, engine.empty_selection(), date(2024, 3, 4));
        assert!(outcome.close_hint);
        assert_eq!(outcome.selection, Selection::single(date(2024, 3, 4)));
    }

    #[test]
    fn test_disabled_activation_is_noop() {
        let settings = PickerSettings::new(Granularity::Day, SelectionMode::Single)
            .with_min_date(date(2024, 3, 5));
        let engine = PickerEngine::new(settings).unwrap();
        let state = ViewState::new(date(2024, 3, 1), Granularity::Day);

        let outcome = engine.activate(state, engine.empty_selection(), date(2024, 3, 4));
        assert_eq!(outcome.changed, None);
        assert!(!outcome.close_hint);
        assert_eq!(outcome.selection, Selection::empty(SelectionMode::Single));
    }

    #[test]
    fn test_month_picker_disables_month_starting_before_min() {
        let settings = PickerSettings::new(Granularity::Month, SelectionMode::Single)
            .with_min_date(date(2024, 3, 15));
        let engine = PickerEngine::new(settings).unwrap();
        let state = engine.initial_view(&engine.empty_selection(), date(2024, 3, 18));

        let outcome = engine.activate(state, engine.empty_selection(), date(2024, 3, 1));
        assert_eq!(outcome.changed, None);
        assert_eq!(outcome.selection, Selection::empty(SelectionMode::Single));

        let cells = engine.cells(&state, &engine.empty_selection(), date(2024, 3, 18));
        assert!(cells[2].is_disabled);
        assert!(!cells[3].is_disabled);

        let april = engine.activate(state, engine.empty_selection(), date(2024, 4, 1));
        assert_eq!(april.selection, Selection::single(date(2024, 4, 1)));
    }

    #[test]
    fn test_day_picker_can_drill_into_partially_covered_month() {
        let settings = PickerSettings::new(Granularity::Day, SelectionMode::Single)
            .with_min_date(date(2024, 3, 15));
        let engine = PickerEngine::new(settings).unwrap();
        let state = engine.drill_up(ViewState::new(date(2024, 5, 1), Granularity::Day));

        assert!(!engine.is_disabled(date(2024, 3, 1), Granularity::Month));
        assert!(engine.is_disabled(date(2024, 2, 1), Granularity::Month));

        let outcome = engine.activate(state, engine.empty_selection(), date(2024, 3, 1));
        assert_eq!(outcome.view_state.view, Granularity::Day);
        assert_eq!(outcome.view_state.reference_date, date(2024, 3, 1));
        assert!(engine.is_disabled(date(2024, 3, 14), Granularity::Day));
        assert!(!engine.is_disabled(date(2024, 3, 15), Granularity::Day));
    }

    #[test]
    fn test_mid_unit_start_is_noop_for_coarse_pickers() {
        let engine = PickerEngine::new(PickerSettings::new(Granularity::Month, SelectionMode::Range)).unwrap();
        let state = engine.initial_view(&engine.empty_selection(), date(2024, 3, 18));
        let open = Selection::range(date(2024, 3, 15), None);

        let outcome = engine.activate(state, open, date(2024, 3, 1));
        assert_eq!(outcome.changed, None);
        assert!(outcome.selection.is_open_range());
        assert_eq!(outcome.selection, Selection::range(date(2024, 3, 1), None));

        let engine = PickerEngine::new(PickerSettings::new(Granularity::Year, SelectionMode::Range)).unwrap();
        let state = engine.initial_view(&engine.empty_selection(), date(2024, 3, 18));
        let outcome = engine.activate(state, Selection::range(date(2024, 6, 10), None), date(2024, 1, 1));
        assert_eq!(outcome.changed, None);
        assert_eq!(outcome.selection, Selection::range(date(2024, 1, 1), None));
    }

    #[test]
    fn test_month_view_click_drills_down_for_day_picker() {
        let engine = PickerEngine::default();
        let state = engine.drill_up(ViewState::new(date(2024, 3, 1), Granularity::Day));
        assert_eq!(state.view, Granularity::Month);

        let selection = Selection::single(date(2024, 3, 10));
        let outcome = engine.activate(state, selection, date(2024, 7, 1));
        assert_eq!(outcome.changed, None);
        assert_eq!(outcome.selection, selection);
        assert_eq!(outcome.view_state.view, Granularity::Day);
        assert_eq!(outcome.view_state.reference_date, date(2024, 7, 1));
    }

    #[test]
    fn test_month_picker_commits_in_month_view() {
        let engine = PickerEngine::new(PickerSettings::new(Granularity::Month, SelectionMode::Single)).unwrap();
        let state = engine.initial_view(&engine.empty_selection(), date(2024, 3, 18));
        assert_eq!(state.view, Granularity::Month);

        let outcome = engine.activate(state, engine.empty_selection(), date(2024, 9, 1));
        assert_eq!(outcome.selection, Selection::single(date(2024, 9, 1)));
        assert_eq!(outcome.view_state.view, Granularity::Month);
        assert!(outcome.close_hint);
    }

    #[test]
    fn test_year_picker_stays_in_year_view() {
        let engine = PickerEngine::new(PickerSettings::new(Granularity::Year, SelectionMode::Range)).unwrap();
        let state = engine.initial_view(&engine.empty_selection(), date(2024, 3, 18));
        assert_eq!(engine.drill_up(state).view, Granularity::Year);
        let next = engine.navigate(state, Direction::Next);
        assert_eq!(next.view, Granularity::Year);
        assert_eq!(next.reference_date.year(), 2036);
    }

    #[test]
    fn test_restore_view_clamps_and_drops_hover() {
        let engine = PickerEngine::new(PickerSettings::new(Granularity::Month, SelectionMode::Range)).unwrap();
        let saved = ViewState {
            reference_date: date(2019, 7, 20),
            view: Granularity::Day,
            hover_candidate: Some(date(2019, 8, 1)),
        };
        assert_eq!(
            engine.restore_view(saved),
            ViewState::new(date(2019, 7, 1), Granularity::Month)
        );

        let year_view = ViewState::new(date(2019, 7, 1), Granularity::Year);
        assert_eq!(engine.restore_view(year_view), year_view);
    }

    #[test]
    fn test_hover_only_recorded_for_open_range() {
        let engine = range_engine();
        let state = ViewState::new(date(2024, 3, 1), Granularity::Day);

        let idle = engine.hover_enter(state, &engine.empty_selection(), date(2024, 3, 8));
        assert_eq!(idle.hover_candidate, None);

        let open = Selection::range(date(2024, 3, 10), None);
        let hovering = engine.hover_enter(state, &open, date(2024, 3, 8));
        assert_eq!(hovering.hover_candidate, Some(date(2024, 3, 8)));
        assert_eq!(engine.hover_leave(hovering).hover_candidate, None);
    }

    #[test]
    fn test_disabled_cell_cannot_start_preview() {
        let settings = PickerSettings::new(Granularity::Day, SelectionMode::Range)
            .with_max_date(date(2024, 3, 15));
        let engine = PickerEngine::new(settings).unwrap();
        let state = ViewState::new(date(2024, 3, 1), Granularity::Day);
        let open = Selection::range(date(2024, 3, 10), None);

        let hovering = engine.hover_enter(state, &open, date(2024, 3, 20));
        assert_eq!(hovering.hover_candidate, None);
    }

    #[test]
    fn test_cells_for_day_view() {
        let engine = range_engine();
        let mut state = ViewState::new(date(2024, 3, 1), Granularity::Day);
        let open = Selection::range(date(2024, 3, 10), None);
        state = engine.hover_enter(state, &open, date(2024, 3, 12));

        let cells = engine.cells(&state, &open, date(2024, 3, 11));
        assert_eq!(cells.len(), 42);
        assert!(!cells[0].in_current_period);

        let find = |d: CalendarDate| cells.iter().find(|c| c.date == d).copied().unwrap();
        let start = find(date(2024, 3, 10));
        assert!(start.is_selected && start.is_range_start && start.is_in_range);
        let today = find(date(2024, 3, 11));
        assert!(today.is_today && today.is_in_range && !today.is_range_endpoint);
        let preview_end = find(date(2024, 3, 12));
        assert!(preview_end.is_range_end && !preview_end.is_selected);
        assert!(!find(date(2024, 3, 13)).is_in_range);
    }

    #[test]
    fn test_cells_for_year_view() {
        let engine = PickerEngine::new(PickerSettings::new(Granularity::Year, SelectionMode::Single)).unwrap();
        let state = engine.initial_view(&Selection::single(date(2020, 1, 1)), date(2024, 5, 5));
        let cells = engine.cells(&state, &Selection::single(date(2020, 1, 1)), date(2024, 5, 5));

        let years: Vec<i32> = cells.iter().map(|c| c.date.year()).collect();
        assert_eq!(years, (2016..=2027).collect::<Vec<_>>());
        assert!(cells[4].is_selected);
        assert!(cells[8].is_today);
        assert_eq!(engine.header_label(&state), "2016 - 2027");
    }
}
