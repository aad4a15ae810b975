//! ica-report: static HTML export of the ica dashboard.

pub mod html;

pub use html::{generate_html, write_html_report};
