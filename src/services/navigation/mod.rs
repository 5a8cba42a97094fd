// Navigation stepper
// Moves the reference date by month, year or 12-year block. Never touches the selection.

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Direction, Granularity};
use crate::services::grid::YEAR_BLOCK_SIZE;
use crate::utils::date::shift_month;

/// One month forward or back, normalized to day 1.
pub fn step_month(date: CalendarDate, direction: Direction) -> CalendarDate {
    shift_month(date.naive(), direction.sign()).into()
}

/// One year forward or back, keeping the month, normalized to day 1.
pub fn step_year(date: CalendarDate, direction: Direction) -> CalendarDate {
    shift_month(date.naive(), 12 * direction.sign()).into()
}

/// One 12-year block forward or back, keeping the month, normalized to day 1.
pub fn step_decade(date: CalendarDate, direction: Direction) -> CalendarDate {
    shift_month(date.naive(), 12 * YEAR_BLOCK_SIZE * direction.sign()).into()
}

/// The step that matches what a grid pages through: months in the day grid,
/// years in the month grid, blocks in the year grid.
pub fn step_for_view(date: CalendarDate, view: Granularity, direction: Direction) -> CalendarDate {
    match view {
        Granularity::Day => step_month(date, direction),
        Granularity::Month => step_year(date, direction),
        Granularity::Year => step_decade(date, direction),
    }
}
