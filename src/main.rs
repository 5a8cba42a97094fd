// Calendar Picker demo
// Main entry point

use calendar_picker::models::settings::PickerSettings;
use calendar_picker::services::persistence::default_snapshot_path;
use calendar_picker::services::settings::SettingsService;
use calendar_picker::ui_egui::DatePickerDemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Calendar Picker");

    let settings = SettingsService::with_default_path()
        .map(|service| service.load_or_default())
        .unwrap_or_else(PickerSettings::default);
    let snapshot_path = default_snapshot_path();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([320.0, 420.0])
            .with_min_inner_size([280.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Calendar Picker",
        options,
        Box::new(move |_cc| Ok(Box::new(DatePickerDemoApp::new(settings, snapshot_path)))),
    )
}
