//! Table builder.

use super::model::CellRow;
use super::model::HeaderRow;
use super::model::Table;

/// Builder for constructing a [`Table`] description.
///
/// Sections are configured through closures; each of `head`, `body`, and
/// `foot` registers at most one section, and a second call to the same
/// section appends rows to it. Output order is always head, body, foot
/// regardless of declaration order.
///
/// # Example
///
/// ```
/// use viewtable::table::TableBuilder;
///
/// let table = TableBuilder::new("users")
///     .head(|head| head.row(|row| row.header("Name")))
///     .body(|body| body.row(|row| row.cell("Lance")))
///     .build();
/// ```
#[derive(Debug)]
pub struct TableBuilder {
    table: Table,
}

impl TableBuilder {
    /// Creates a builder for the given resource.
    pub fn new(resource: impl Into<String>) -> Self {
        Self {
            table: Table::for_resource(resource),
        }
    }

    /// Declares the head section.
    ///
    /// Head rows hold headers; declaring the section with an unchanged
    /// builder still emits an empty `<thead></thead>` pair.
    pub fn head<F>(mut self, build: F) -> Self
    where
        F: FnOnce(HeadBuilder) -> HeadBuilder,
    {
        let rows = self.table.head.get_or_insert_with(Vec::new);
        let built = build(HeadBuilder { rows: Vec::new() });
        rows.extend(built.rows);
        self
    }

    /// Declares the body section. Body rows hold cells.
    pub fn body<F>(mut self, build: F) -> Self
    where
        F: FnOnce(RowsBuilder) -> RowsBuilder,
    {
        let rows = self.table.body.get_or_insert_with(Vec::new);
        let built = build(RowsBuilder { rows: Vec::new() });
        rows.extend(built.rows);
        self
    }

    /// Declares the foot section. Foot rows hold cells, like body rows, but
    /// render without `role="row"`.
    pub fn foot<F>(mut self, build: F) -> Self
    where
        F: FnOnce(RowsBuilder) -> RowsBuilder,
    {
        let rows = self.table.foot.get_or_insert_with(Vec::new);
        let built = build(RowsBuilder { rows: Vec::new() });
        rows.extend(built.rows);
        self
    }

    /// Finishes the builder, returning the table description.
    pub fn build(self) -> Table {
        self.table
    }

    /// Shorthand for `build().to_html()`.
    pub fn to_html(self) -> String {
        self.build().to_html()
    }
}

/// Builder for the head section's rows.
#[derive(Debug)]
pub struct HeadBuilder {
    rows: Vec<HeaderRow>,
}

impl HeadBuilder {
    /// Appends a row of headers, configured through a closure.
    pub fn row<F>(mut self, build: F) -> Self
    where
        F: FnOnce(HeaderRow) -> HeaderRow,
    {
        self.rows.push(build(HeaderRow::new()));
        self
    }
}

/// Builder for a body or foot section's rows.
#[derive(Debug)]
pub struct RowsBuilder {
    rows: Vec<CellRow>,
}

impl RowsBuilder {
    /// Appends a row of cells, configured through a closure.
    pub fn row<F>(mut self, build: F) -> Self
    where
        F: FnOnce(CellRow) -> CellRow,
    {
        self.rows.push(build(CellRow::new()));
        self
    }
}
