pub mod batch;
pub mod color_service;
pub mod output;

pub use batch::{BatchEntry, BatchReport};
pub use color_service::ColorService;
pub use output::{render_output, render_report};
