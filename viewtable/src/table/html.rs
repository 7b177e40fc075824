//! HTML generation for table descriptions.

use crate::inflect::capitalize;
use crate::inflect::pluralize;

use super::model::Cell;
use super::model::CellRow;
use super::model::Header;
use super::model::HeaderRow;
use super::model::Table;

const INDENT: &str = "  ";

/// Escapes a string for use in HTML text content and attribute values.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Appends a line at the given nesting depth (2-space indent per level).
fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}

/// Renders a table description to markup.
///
/// Sections are emitted in head, body, foot order. Every block-level tag is
/// on its own line and the result ends with a trailing newline.
pub(crate) fn table_to_html(table: &Table) -> String {
    let summary = capitalize(&pluralize(&table.resource));
    let mut out = String::new();

    push_line(
        &mut out,
        0,
        &format!(
            r#"<table summary="Table for {}" role="grid" class="table">"#,
            escape_html(&summary)
        ),
    );

    if let Some(rows) = &table.head {
        push_line(&mut out, 1, "<thead>");
        for row in rows {
            header_row_to_html(row, &mut out);
        }
        push_line(&mut out, 1, "</thead>");
    }

    if let Some(rows) = &table.body {
        push_line(&mut out, 1, "<tbody>");
        for row in rows {
            cell_row_to_html(row, true, &mut out);
        }
        push_line(&mut out, 1, "</tbody>");
    }

    if let Some(rows) = &table.foot {
        push_line(&mut out, 1, "<tfoot>");
        for row in rows {
            cell_row_to_html(row, false, &mut out);
        }
        push_line(&mut out, 1, "</tfoot>");
    }

    push_line(&mut out, 0, "</table>");

    log::trace!(
        "[table] rendered {} bytes for \"{}\"",
        out.len(),
        table.resource
    );
    out
}

fn header_row_to_html(row: &HeaderRow, out: &mut String) {
    push_line(out, 2, r#"<tr scope="row">"#);
    for header in &row.headers {
        header_to_html(header, out);
    }
    push_line(out, 2, "</tr>");
}

/// Renders one `<th>`.
///
/// The `abbr` attribute falls back to the label. Sortable columns gain the
/// sort classes and an anchor around the label; plain columns render the
/// label in a bare `<span>` with `aria-sort="none"`.
fn header_to_html(header: &Header, out: &mut String) {
    let abbr = escape_html(header.abbr.as_deref().unwrap_or(&header.label));
    let label = escape_html(&header.label);

    if header.sort {
        push_line(
            out,
            3,
            &format!(
                r#"<th abbr="{abbr}" role="columnheader" scope="col" class="sortable asc" aria-sort="asc" aria-selected="aria-selected">"#
            ),
        );
        push_line(out, 4, r#"<a href="?sort=+">"#);
        push_line(out, 5, &format!("<span>{label}</span>"));
        push_line(out, 4, "</a>");
    } else {
        push_line(
            out,
            3,
            &format!(r#"<th abbr="{abbr}" role="columnheader" scope="col" aria-sort="none">"#),
        );
        push_line(out, 4, &format!("<span>{label}</span>"));
    }

    push_line(out, 3, "</th>");
}

/// Renders one body or foot `<tr>`. Body rows carry `role="row"`, foot rows
/// do not.
fn cell_row_to_html(row: &CellRow, grid_row: bool, out: &mut String) {
    if grid_row {
        push_line(out, 2, r#"<tr scope="row" role="row">"#);
    } else {
        push_line(out, 2, r#"<tr scope="row">"#);
    }
    for cell in &row.cells {
        cell_to_html(cell, out);
    }
    push_line(out, 2, "</tr>");
}

fn cell_to_html(cell: &Cell, out: &mut String) {
    push_line(
        out,
        3,
        &format!(r#"<td role="gridcell">{}</td>"#, escape_html(&cell.label)),
    );
}
