//! Console and HTML renderings of a [`prodcat_core::Catalog`] and its
//! [`prodcat_core::SummaryStatistics`].

pub mod console;
pub mod error;
pub mod format;
pub mod html;

pub use console::render_console;
pub use error::ReportError;
pub use html::{render_html, write_html_report};
