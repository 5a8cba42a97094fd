// Module exports for models

pub mod calendar_date;
pub mod picker;
pub mod settings;
