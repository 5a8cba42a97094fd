//! Date picker widget.
//!
//! Renders whichever grid the engine says is current and feeds pointer
//! events back into it: hover into the range preview, clicks into
//! activation, the header label into drill-up.

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Direction, Granularity, GridCell, Selection, SelectionChanged, ViewState};
use crate::services::grid::{month_short_name, weekday_labels, DAY_GRID_COLUMNS};
use crate::services::persistence::PickerSnapshot;
use crate::services::picker::PickerEngine;

const COARSE_GRID_COLUMNS: usize = 3;

/// What happened during one frame of [`DatePickerWidget::show`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatePickerResponse {
    pub changed: Option<SelectionChanged>,
    pub close_hint: bool,
}

/// Host-side container that stores the engine's output between frames.
pub struct DatePickerWidget {
    engine: PickerEngine,
    view_state: ViewState,
    selection: Selection,
}

impl DatePickerWidget {
    pub fn new(engine: PickerEngine, selection: Selection, today: CalendarDate) -> Self {
        let selection = engine.coerce_selection(selection);
        let view_state = engine.initial_view(&selection, today);
        Self {
            engine,
            view_state,
            selection,
        }
    }

    /// Reopen with the state saved by a previous session, or start fresh at
    /// `today` when there is none.
    pub fn from_snapshot(engine: PickerEngine, snapshot: Option<PickerSnapshot>, today: CalendarDate) -> Self {
        let Some(snapshot) = snapshot else {
            let selection = engine.empty_selection();
            return Self::new(engine, selection, today);
        };

        Self {
            selection: engine.coerce_selection(snapshot.selection),
            view_state: engine.restore_view(snapshot.view_state),
            engine,
        }
    }

    /// Current state in the shape the persistence layer stores.
    pub fn snapshot(&self) -> PickerSnapshot {
        PickerSnapshot {
            selection: self.selection,
            view_state: self.view_state,
        }
    }

    pub fn engine(&self) -> &PickerEngine {
        &self.engine
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    pub fn show(&mut self, ui: &mut egui::Ui, today: CalendarDate) -> DatePickerResponse {
        ui.set_max_width(240.0);
        self.render_header(ui);
        ui.separator();
        let mut response = self.render_grid(ui, today);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Today").clicked() {
                self.view_state = self.engine.initial_view(&self.engine.empty_selection(), today);
            }
            if !self.selection.is_empty() && ui.button("Clear").clicked() {
                self.selection = self.engine.empty_selection();
                self.view_state = self.engine.hover_leave(self.view_state);
                response.changed = Some(SelectionChanged(self.selection));
            }
        });

        response
    }

    /// Previous/next arrows around the drill-up label.
    fn render_header(&mut self, ui: &mut egui::Ui) {
        let (prev_hint, next_hint) = match self.view_state.view {
            Granularity::Day => ("Previous month", "Next month"),
            Granularity::Month => ("Previous year", "Next year"),
            Granularity::Year => ("Previous decade", "Next decade"),
        };
        let header = self.engine.header_label(&self.view_state);

        ui.horizontal(|ui| {
            if ui.small_button("◀").on_hover_text(prev_hint).clicked() {
                self.view_state = self.engine.navigate(self.view_state, Direction::Prev);
            }

            ui.with_layout(
                egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                |ui| {
                    if self.view_state.view.coarser().is_some() {
                        if ui
                            .selectable_label(false, header.as_str())
                            .on_hover_text("Zoom out")
                            .clicked()
                        {
                            self.view_state = self.engine.drill_up(self.view_state);
                        }
                    } else {
                        ui.label(egui::RichText::new(header.as_str()).strong());
                    }
                },
            );

            if ui.small_button("▶").on_hover_text(next_hint).clicked() {
                self.view_state = self.engine.navigate(self.view_state, Direction::Next);
            }
        });
    }

    fn render_grid(&mut self, ui: &mut egui::Ui, today: CalendarDate) -> DatePickerResponse {
        let view = self.view_state.view;
        let cells = self.engine.cells(&self.view_state, &self.selection, today);
        let columns = match view {
            Granularity::Day => DAY_GRID_COLUMNS,
            Granularity::Month | Granularity::Year => COARSE_GRID_COLUMNS,
        };

        let mut hovered = None;
        let mut clicked = None;

        egui::Grid::new("calendar_picker_grid")
            .num_columns(columns)
            .spacing([4.0, 2.0])
            .min_col_width(if columns == DAY_GRID_COLUMNS { 24.0 } else { 64.0 })
            .show(ui, |ui| {
                if view == Granularity::Day {
                    for name in weekday_labels(self.engine.settings().week_start()) {
                        ui.label(egui::RichText::new(name).small().strong());
                    }
                    ui.end_row();
                }

                for row in cells.chunks(columns) {
                    for cell in row {
                        let response = ui.add_enabled(
                            !cell.is_disabled,
                            egui::SelectableLabel::new(
                                cell.is_selected || cell.is_in_range,
                                cell_text(cell, view),
                            ),
                        );
                        if response.hovered() {
                            hovered = Some(cell.date);
                        }
                        if response.clicked() {
                            clicked = Some(cell.date);
                        }
                    }
                    ui.end_row();
                }
            });

        match hovered {
            Some(date) => {
                self.view_state = self.engine.hover_enter(self.view_state, &self.selection, date);
            }
            None if self.view_state.hover_candidate.is_some() => {
                self.view_state = self.engine.hover_leave(self.view_state);
            }
            None => {}
        }

        let Some(date) = clicked else {
            return DatePickerResponse::default();
        };

        let outcome = self.engine.activate(self.view_state, self.selection, date);
        self.selection = outcome.selection;
        self.view_state = outcome.view_state;
        DatePickerResponse {
            changed: outcome.changed,
            close_hint: outcome.close_hint,
        }
    }
}

fn cell_text(cell: &GridCell, view: Granularity) -> egui::RichText {
    let label = match view {
        Granularity::Day => cell.date.day().to_string(),
        Granularity::Month => month_short_name(cell.date.month()).to_string(),
        Granularity::Year => cell.date.year().to_string(),
    };

    let text = egui::RichText::new(label);
    if cell.is_today {
        text.strong().color(egui::Color32::from_rgb(50, 150, 50))
    } else if cell.is_range_endpoint || cell.is_selected {
        text.strong()
    } else if !cell.in_current_period {
        text.weak()
    } else {
        text
    }
}
