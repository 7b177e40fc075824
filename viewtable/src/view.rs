//! View host surface.

use crate::error::TemplateError;
use crate::table::TableBuilder;

/// Host for evaluating template functions.
///
/// A template is any closure producing markup; `render` runs it and passes
/// its result through unchanged. Rendering is synchronous and keeps no state
/// between calls, so one `View` can serve any number of renders.
///
/// # Example
///
/// ```
/// use viewtable::{table_for, View};
///
/// let view = View::new();
/// let html = view.render(|| Ok(table_for("users"))).unwrap();
/// assert!(html.starts_with("<table"));
/// ```
#[derive(Debug, Default)]
pub struct View;

impl View {
    /// Creates a view.
    pub fn new() -> Self {
        Self
    }

    /// Evaluates a template function.
    ///
    /// A failing template yields `Err` with no partial output.
    pub fn render<F>(&self, template: F) -> Result<String, TemplateError>
    where
        F: FnOnce() -> Result<String, TemplateError>,
    {
        log::debug!("[view] evaluating template");
        let result = template();
        if let Err(error) = &result {
            log::debug!("[view] template failed: {error}");
        }
        result
    }
}

/// Renders the empty table shell for a resource.
///
/// ```
/// use viewtable::table_for;
///
/// assert_eq!(
///     table_for("users"),
///     "<table summary=\"Table for Users\" role=\"grid\" class=\"table\">\n</table>\n"
/// );
/// ```
pub fn table_for(resource: &str) -> String {
    TableBuilder::new(resource).to_html()
}

/// Renders a table for a resource, with sections declared by the builder
/// closure.
///
/// ```
/// use viewtable::table_for_with;
///
/// let html = table_for_with("users", |t| {
///     t.body(|body| body.row(|row| row.cell("Cell A").cell("Cell B")))
/// });
/// assert!(html.contains("<td role=\"gridcell\">Cell A</td>"));
/// ```
pub fn table_for_with<F>(resource: &str, build: F) -> String
where
    F: FnOnce(TableBuilder) -> TableBuilder,
{
    build(TableBuilder::new(resource)).to_html()
}
