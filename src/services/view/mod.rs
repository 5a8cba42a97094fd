// View controller
// Drill-up / drill-down between the day, month and year grids

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Granularity, ViewState};

/// A view can never be finer than the configured granularity; a year picker
/// has no month or day grid.
pub fn clamp_view(view: Granularity, configured: Granularity) -> Granularity {
    view.max(configured)
}

/// Whether activating a cell in `view` commits a selection rather than
/// drilling down.
pub fn is_terminal(view: Granularity, configured: Granularity) -> bool {
    clamp_view(view, configured) == configured
}

/// Header click: Day -> Month -> Year. Year stays put.
pub fn drill_up(state: ViewState) -> ViewState {
    match state.view.coarser() {
        Some(view) => {
            log::debug!("Drill up {:?} -> {:?}", state.view, view);
            ViewState {
                view,
                hover_candidate: None,
                ..state
            }
        }
        None => state,
    }
}

/// Activating `date` in a non-terminal view opens the next finer grid
/// anchored at that unit. Returns `None` when `view` is already terminal.
pub fn drill_down(state: ViewState, date: CalendarDate, configured: Granularity) -> Option<ViewState> {
    let view = clamp_view(state.view, configured);
    if view == configured {
        return None;
    }
    let finer = view.finer()?;

    let reference_date = match view {
        // Keep the month being browsed when picking a different year.
        Granularity::Year => CalendarDate::from_ymd(date.year(), state.reference_date.month(), 1)
            .unwrap_or_else(|_| date.first_of_year()),
        _ => date.first_of_month(),
    };

    log::debug!("Drill down {:?} -> {:?} at {}", view, finer, reference_date);
    Some(ViewState {
        reference_date,
        view: finer,
        hover_candidate: None,
    })
}
