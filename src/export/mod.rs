//! Tabular renderings of a result set for spreadsheets and the clipboard.

pub mod clipboard;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub use clipboard::{copy_prospects, copy_to_clipboard};

use crate::models::Prospect;

pub const HEADERS: [&str; 8] =
    ["Prospect Name", "Phone", "Email", "Address", "City", "State", "Zip", "Notes"];

fn columns(p: &Prospect) -> [&str; 8] {
    [
        p.name.as_str(),
        p.phone.as_str(),
        p.email.as_str(),
        p.address.as_str(),
        p.city.as_str(),
        p.state.as_str(),
        p.zip.as_str(),
        p.notes.as_str(),
    ]
}

fn csv_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// CSV with a header row; every field quoted, embedded quotes doubled
pub fn to_csv(prospects: &[Prospect]) -> String {
    let mut lines = vec![HEADERS.join(",")];
    lines.extend(prospects.iter().map(|p| columns(p).map(csv_field).join(",")));
    lines.join("\n")
}

/// Tab-separated rows with a header, for pasting into spreadsheets
pub fn to_tsv(prospects: &[Prospect]) -> String {
    let mut lines = vec![HEADERS.join("\t")];
    lines.extend(
        prospects.iter().map(|p| columns(p).map(|c| c.replace(['\t', '\n'], " ")).join("\t")),
    );
    lines.join("\n")
}

pub fn write_csv(path: &Path, prospects: &[Prospect]) -> Result<()> {
    fs::write(path, to_csv(prospects))
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))
}
