mod app;
pub mod date_picker;

pub use app::DatePickerDemoApp;
pub use date_picker::{DatePickerResponse, DatePickerWidget};
