//! Demo host: an input-style button showing the formatted value, which opens
//! the picker beneath it. Stores the picker state as a JSON snapshot.

use std::path::PathBuf;

use crate::models::calendar_date::CalendarDate;
use crate::models::picker::{Granularity, SelectionMode};
use crate::models::settings::PickerSettings;
use crate::services::format::format_selection;
use crate::services::persistence::{load_snapshot, save_snapshot};
use crate::services::picker::PickerEngine;
use crate::ui_egui::date_picker::DatePickerWidget;

const PLACEHOLDER: &str = "Select date";

pub struct DatePickerDemoApp {
    picker: DatePickerWidget,
    is_open: bool,
    snapshot_path: Option<PathBuf>,
}

impl DatePickerDemoApp {
    pub fn new(settings: PickerSettings, snapshot_path: Option<PathBuf>) -> Self {
        let engine = PickerEngine::new(settings).unwrap_or_else(|e| {
            log::warn!("Invalid picker settings ({}), using defaults", e);
            PickerEngine::default()
        });

        let snapshot = snapshot_path.as_deref().and_then(|path| match load_snapshot(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("{:#}", e);
                None
            }
        });

        Self {
            picker: DatePickerWidget::from_snapshot(engine, snapshot, CalendarDate::today()),
            is_open: false,
            snapshot_path,
        }
    }

    fn field_label(&self) -> &'static str {
        let settings = self.picker.engine().settings();
        match (settings.granularity, settings.selection_mode) {
            (Granularity::Day, SelectionMode::Single) => "Date",
            (Granularity::Day, SelectionMode::Range) => "Date range",
            (Granularity::Month, SelectionMode::Single) => "Month",
            (Granularity::Month, SelectionMode::Range) => "Month range",
            (Granularity::Year, SelectionMode::Single) => "Year",
            (Granularity::Year, SelectionMode::Range) => "Year range",
        }
    }

    fn persist(&self) {
        let Some(path) = self.snapshot_path.as_deref() else {
            return;
        };
        if let Err(e) = save_snapshot(path, &self.picker.snapshot()) {
            log::warn!("Failed to save picker state: {:#}", e);
        }
    }
}

impl eframe::App for DatePickerDemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = CalendarDate::today();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(egui::RichText::new(self.field_label()).strong());

            let granularity = self.picker.engine().granularity();
            let display = format_selection(&self.picker.selection(), granularity);
            let text = if display.is_empty() {
                egui::RichText::new(PLACEHOLDER).weak()
            } else {
                egui::RichText::new(display)
            };

            if ui.add(egui::Button::new(text).min_size(egui::vec2(220.0, 0.0))).clicked() {
                self.is_open = !self.is_open;
                if !self.is_open {
                    self.persist();
                }
            }

            if !self.is_open {
                return;
            }

            ui.add_space(4.0);
            let response = ui.group(|ui| self.picker.show(ui, today)).inner;

            if let Some(change) = response.changed {
                log::debug!("Selection changed: {:?}", change.0);
                self.persist();
            }
            if response.close_hint {
                self.is_open = false;
                self.persist();
            }
        });
    }
}
