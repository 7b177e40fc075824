//! Declarative table building and HTML generation.
//!
//! A table is described once through [`TableBuilder`] and rendered to markup
//! with [`Table::to_html`]. Sections are configured with closures, rows and
//! headers chain fluently:
//!
//! ```
//! use viewtable::table::TableBuilder;
//!
//! let html = TableBuilder::new("users")
//!     .head(|head| head.row(|row| row.header("Name").header("Email")))
//!     .body(|body| body.row(|row| row.cell("Lance").cell("lance@example.com")))
//!     .build()
//!     .to_html();
//!
//! assert!(html.starts_with("<table summary=\"Table for Users\""));
//! assert!(html.contains("<td role=\"gridcell\">Lance</td>"));
//! ```
//!
//! Output section order is always head, body, foot regardless of the order
//! the sections are declared in.

mod builder;
mod model;
pub(crate) mod html;

pub use builder::HeadBuilder;
pub use builder::RowsBuilder;
pub use builder::TableBuilder;
pub use html::escape_html;
pub use model::Cell;
pub use model::CellRow;
pub use model::Header;
pub use model::HeaderRow;
pub use model::Table;
