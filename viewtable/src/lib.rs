//! Declarative HTML table rendering for server-side views
//!
//! A template describes a table's head/body/foot sections through a small
//! nested builder API; the crate renders the description into indented,
//! attribute-annotated HTML markup (ARIA roles, sortable-column affordances).

pub mod error;
pub mod inflect;
pub mod table;

mod view;

pub use table::Table;
pub use table::TableBuilder;
pub use view::*;
