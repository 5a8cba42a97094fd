// Module exports for services

pub mod format;
pub mod grid;
pub mod navigation;
pub mod persistence;
pub mod picker;
pub mod selection;
pub mod settings;
pub mod view;
