pub mod line_item_controller;

pub use line_item_controller::configure;
