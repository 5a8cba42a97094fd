//! Selection state machine.
//!
//! Every transition is driven by a single event, selecting a candidate date,
//! and is a pure function of the previous selection. Month and year pickers
//! run the same table on the first day of the unit.
//!
//! Range mode:
//!
//! | current            | select `c`          | next                           |
//! |--------------------|---------------------|--------------------------------|
//! | `(empty, empty)`   | any                 | `(c, empty)`                   |
//! | `(start, empty)`   | `c != start`        | `(min(start, c), max(start, c))` |
//! | `(start, empty)`   | `c == start`        | unchanged                      |
//! | `(start, end)`     | any                 | `(c, empty)`, a fresh range    |

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Granularity, Selection, SelectionMode};

/// Apply one selection event.
///
/// `selection` may come from outside in any shape; it is coerced to `mode`,
/// reduced to `granularity` and normalized first.
pub fn select_candidate(
    selection: Selection,
    candidate: CalendarDate,
    mode: SelectionMode,
    granularity: Granularity,
) -> Selection {
    let candidate = candidate.canonical(granularity);
    let current = selection.coerce(mode).canonical(granularity);

    let next = match current {
        Selection::Single { .. } => Selection::single(candidate),
        Selection::Range {
            start: Some(start),
            end: None,
        } => {
            if candidate == start {
                current
            } else {
                Selection::range(start.min(candidate), Some(start.max(candidate)))
            }
        }
        // Empty, or a completed range: either way a new range begins.
        Selection::Range { .. } => Selection::range(candidate, None),
    };

    log::debug!("Selection {:?} + {} -> {:?}", current, candidate, next);
    next
}

/// Range currently drawn on the grid: the committed range, or while the end
/// is still open, the span between the start and the hovered cell.
///
/// Returned bounds are canonicalized to `unit` and ordered.
pub fn effective_range(
    selection: &Selection,
    hover: Option<CalendarDate>,
    unit: Granularity,
) -> Option<(CalendarDate, CalendarDate)> {
    match selection.normalized() {
        Selection::Range {
            start: Some(start),
            end: Some(end),
        } => Some((start.canonical(unit), end.canonical(unit))),
        Selection::Range {
            start: Some(start),
            end: None,
        } => {
            let start = start.canonical(unit);
            let other = hover.map(|h| h.canonical(unit)).unwrap_or(start);
            Some((start.min(other), start.max(other)))
        }
        _ => None,
    }
}

/// Selection-derived flags for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionMarks {
    pub is_selected: bool,
    pub is_in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
}

impl SelectionMarks {
    pub fn is_range_endpoint(&self) -> bool {
        self.is_range_start || self.is_range_end
    }
}

/// Derive selection flags for the cell whose unit contains `date`.
///
/// A cell counts as selected when its unit contains the single value or a
/// committed endpoint, so a day picker drilled up to the month grid still
/// highlights the month holding its value.
pub fn cell_for(
    date: CalendarDate,
    unit: Granularity,
    selection: &Selection,
    hover: Option<CalendarDate>,
) -> SelectionMarks {
    let cell = date.canonical(unit);
    let matches = |value: Option<CalendarDate>| value.map(|v| v.canonical(unit)) == Some(cell);

    let is_selected = match selection.normalized() {
        Selection::Single { value } => matches(value),
        Selection::Range { start, end } => matches(start) || matches(end),
    };

    let mut marks = SelectionMarks {
        is_selected,
        ..SelectionMarks::default()
    };

    if let Some((low, high)) = effective_range(selection, hover, unit) {
        marks.is_in_range = low <= cell && cell <= high;
        marks.is_range_start = cell == low;
        marks.is_range_end = cell == high;
    }

    marks
}
