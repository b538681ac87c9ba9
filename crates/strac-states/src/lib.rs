//! Built-in jurisdiction field-specification tables.
//!
//! Each table is pure data: an ordered list of output columns and how each
//! derives from the STRAC source record. The engine treats tables as
//! opaque; nothing here is special-cased.

use strac_model::FieldTable;

pub mod pa;
pub mod pa_philly;

/// Registered jurisdiction identifiers, as accepted by [`lookup`].
pub fn available() -> &'static [&'static str] {
    &["pa", "pa-philly"]
}

/// Resolve a jurisdiction identifier (case-insensitive) to its table.
pub fn lookup(state: &str) -> Option<FieldTable> {
    match state.to_lowercase().as_str() {
        "pa" => Some(pa::table()),
        "pa-philly" => Some(pa_philly::table()),
        _ => None,
    }
}
