//! Table value types.

use super::html::table_to_html;

/// Declarative description of one table.
///
/// Built through [`TableBuilder`](super::TableBuilder), rendered with
/// [`to_html`](Table::to_html). A table with no sections renders as the
/// empty `<table>…</table>` shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub(crate) resource: String,
    pub(crate) head: Option<Vec<HeaderRow>>,
    pub(crate) body: Option<Vec<CellRow>>,
    pub(crate) foot: Option<Vec<CellRow>>,
}

impl Table {
    /// Creates an empty table description for the given resource.
    ///
    /// The resource name drives the summary text: `"users"` renders as
    /// `summary="Table for Users"`.
    pub fn for_resource(resource: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            head: None,
            body: None,
            foot: None,
        }
    }

    /// Returns the resource name this table was declared for.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    /// Renders the table to its HTML markup.
    pub fn to_html(&self) -> String {
        table_to_html(self)
    }
}

/// A head-section row, an ordered sequence of [`Header`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderRow {
    pub(crate) headers: Vec<Header>,
}

impl HeaderRow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a header with default options.
    pub fn header(mut self, label: impl Into<String>) -> Self {
        self.headers.push(Header::new(label));
        self
    }

    /// Appends a header configured through a closure.
    ///
    /// # Example
    ///
    /// ```
    /// use viewtable::table::HeaderRow;
    ///
    /// HeaderRow::default()
    ///     .header("Header A")
    ///     .header_with("Header B", |h| h.abbr("HB").sortable());
    /// ```
    pub fn header_with<F>(mut self, label: impl Into<String>, build: F) -> Self
    where
        F: FnOnce(Header) -> Header,
    {
        self.headers.push(build(Header::new(label)));
        self
    }

    /// Appends one default header per label.
    pub fn headers(mut self, labels: &[&str]) -> Self {
        self.headers.extend(labels.iter().map(|label| Header::new(*label)));
        self
    }
}

/// A body- or foot-section row, an ordered sequence of [`Cell`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellRow {
    pub(crate) cells: Vec<Cell>,
}

impl CellRow {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a cell.
    pub fn cell(mut self, label: impl Into<String>) -> Self {
        self.cells.push(Cell::new(label));
        self
    }

    /// Appends one cell per label.
    pub fn cells(mut self, labels: &[&str]) -> Self {
        self.cells.extend(labels.iter().map(|label| Cell::new(*label)));
        self
    }
}

/// A column header, rendered as `<th>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub(crate) label: String,
    pub(crate) abbr: Option<String>,
    pub(crate) sort: bool,
}

impl Header {
    /// Creates a header with the given label, no explicit abbreviation, and
    /// sorting disabled.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            abbr: None,
            sort: false,
        }
    }

    /// Sets the `abbr` attribute. Defaults to the label when not set.
    pub fn abbr(mut self, abbr: impl Into<String>) -> Self {
        self.abbr = Some(abbr.into());
        self
    }

    /// Marks the column sortable, adding the sort affordances
    /// (`class="sortable asc"`, `aria-sort="asc"`, an anchor around the
    /// label).
    pub fn sortable(mut self) -> Self {
        self.sort = true;
        self
    }
}

/// A data cell, rendered as `<td>` with the label as inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) label: String,
}

impl Cell {
    /// Creates a cell with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
