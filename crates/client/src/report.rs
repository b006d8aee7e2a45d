//! Printable appointment report.
//!
//! Renders the already-filtered and sorted agenda into a standalone HTML
//! document. The document carries its own styles and a print-on-load
//! script, so opening it in a browser goes straight to the print dialog.

use agendo_core::agenda::AgendaItem;
use askama::Template;

use crate::error::Result;

/// Yearly report document.
#[derive(Template)]
#[template(path = "report.html")]
pub struct ReportTemplate<'a> {
    pub year: i32,
    pub items: &'a [AgendaItem],
}

/// Render the report for the given year's items.
pub fn render_report(items: &[AgendaItem], year: i32) -> Result<String> {
    let template = ReportTemplate { year, items };
    Ok(template.render()?)
}
