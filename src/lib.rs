// Calendar Picker Library
// Calendar navigation and range-selection engine, plus an egui rendering layer

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
