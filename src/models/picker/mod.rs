// Picker models
// Value types shared by the grid builder, stepper, selection machine and view controller

use serde::{Deserialize, Serialize};

use crate::models::calendar_date::CalendarDate;
use crate::models::settings::PickerSettings;
use crate::utils::date::reference_month;

/// The calendar unit a picker operates on, and the grid currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Day,
    Month,
    Year,
}

impl Granularity {
    /// One level coarser, or `None` at the top (Year).
    pub fn coarser(self) -> Option<Self> {
        match self {
            Self::Day => Some(Self::Month),
            Self::Month => Some(Self::Year),
            Self::Year => None,
        }
    }

    /// One level finer, or `None` at the bottom (Day).
    pub fn finer(self) -> Option<Self> {
        match self {
            Self::Day => None,
            Self::Month => Some(Self::Day),
            Self::Year => Some(Self::Month),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    #[default]
    Single,
    Range,
}

/// The committed value of a picker.
///
/// In range mode, a present `end` implies a present `start` with
/// `start <= end`. Values supplied from outside may violate this; use
/// [`Selection::normalized`] before relying on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum Selection {
    Single {
        value: Option<CalendarDate>,
    },
    Range {
        start: Option<CalendarDate>,
        end: Option<CalendarDate>,
    },
}

impl Selection {
    /// An empty selection for the given mode.
    pub fn empty(mode: SelectionMode) -> Self {
        match mode {
            SelectionMode::Single => Self::Single { value: None },
            SelectionMode::Range => Self::Range {
                start: None,
                end: None,
            },
        }
    }

    pub fn single(value: CalendarDate) -> Self {
        Self::Single { value: Some(value) }
    }

    pub fn range(start: CalendarDate, end: Option<CalendarDate>) -> Self {
        Self::Range {
            start: Some(start),
            end,
        }
    }

    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Single { .. } => SelectionMode::Single,
            Self::Range { .. } => SelectionMode::Range,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single { value } => value.is_none(),
            Self::Range { start, end } => start.is_none() && end.is_none(),
        }
    }

    /// True for a range with a start but no end yet.
    pub fn is_open_range(&self) -> bool {
        matches!(self, Self::Range { start: Some(_), end: None })
    }

    /// The single value, or the range start.
    pub fn anchor(&self) -> Option<CalendarDate> {
        match self {
            Self::Single { value } => *value,
            Self::Range { start, end } => start.or(*end),
        }
    }

    /// Restore the range invariant: an end without a start becomes the start,
    /// and reversed endpoints are swapped.
    pub fn normalized(self) -> Self {
        match self {
            Self::Range {
                start: None,
                end: Some(end),
            } => Self::Range {
                start: Some(end),
                end: None,
            },
            Self::Range {
                start: Some(start),
                end: Some(end),
            } if end < start => Self::Range {
                start: Some(end),
                end: Some(start),
            },
            other => other,
        }
    }

    /// Convert into `mode`, keeping the anchor value when the shape differs.
    pub fn coerce(self, mode: SelectionMode) -> Self {
        if self.mode() == mode {
            return self.normalized();
        }
        let anchor = self.normalized().anchor();
        match mode {
            SelectionMode::Single => Self::Single { value: anchor },
            SelectionMode::Range => Self::Range {
                start: anchor,
                end: None,
            },
        }
    }

    /// Replace every value with the representative date of its unit, so a
    /// month picker holding a mid-month date compares equal to the month.
    pub fn canonical(self, granularity: Granularity) -> Self {
        let unit = |date: Option<CalendarDate>| date.map(|d| d.canonical(granularity));
        match self {
            Self::Single { value } => Self::Single { value: unit(value) },
            Self::Range { start, end } => Self::Range {
                start: unit(start),
                end: unit(end),
            },
        }
        .normalized()
    }
}

/// Which way the navigation stepper moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

/// Transient view state of an open picker. Independent of the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Anchors which month, year or 12-year block is rendered.
    pub reference_date: CalendarDate,
    /// The grid currently displayed.
    pub view: Granularity,
    /// Cell under the pointer, used only for the range preview.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover_candidate: Option<CalendarDate>,
}

impl ViewState {
    pub fn new(reference_date: CalendarDate, view: Granularity) -> Self {
        Self {
            reference_date: reference_month(reference_date.naive()).into(),
            view,
            hover_candidate: None,
        }
    }

    /// Starting view for a freshly opened picker: anchored at the current
    /// value (or range start), else at `today`, showing the configured grid.
    pub fn initial(settings: &PickerSettings, selection: &Selection, today: CalendarDate) -> Self {
        let anchor = selection.normalized().anchor().unwrap_or(today);
        Self::new(anchor, settings.granularity)
    }
}

/// Derived render data for one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Representative date of the cell's unit.
    pub date: CalendarDate,
    /// False for adjacent-month padding in the day grid.
    pub in_current_period: bool,
    pub is_selected: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_range_endpoint: bool,
    pub is_in_range: bool,
    pub is_disabled: bool,
    pub is_today: bool,
}

/// Emitted once for each activation that changes the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionChanged(pub Selection);

/// Result of [`crate::services::picker::PickerEngine::activate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivateOutcome {
    pub selection: Selection,
    pub view_state: ViewState,
    pub changed: Option<SelectionChanged>,
    /// The host may close the picker (single-mode commit).
    pub close_hint: bool,
}
