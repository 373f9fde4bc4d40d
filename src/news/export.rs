//! CSV export of matched articles.
//!
//! Output is UTF-8 prefixed with a byte order mark so spreadsheet programs
//! pick up the Korean text correctly.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::info;

use crate::news::types::MatchedNewsItem;
use crate::{NewsError, Result};

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// CSV header row.
const HEADER: [&str; 4] = ["date", "title", "link", "school"];

/// File name of the report exported on `today`.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("news_report_{}.csv", today.format("%Y-%m-%d"))
}

/// Serialize matched items as BOM-prefixed CSV.
pub fn to_csv(items: &[MatchedNewsItem]) -> Vec<u8> {
    let mut out = String::new();
    push_row(&mut out, &HEADER);

    for item in items {
        let date = item.published_on().format("%Y-%m-%d").to_string();
        push_row(
            &mut out,
            &[&date, item.title(), item.link(), &item.institution],
        );
    }

    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + out.len());
    bytes.extend_from_slice(UTF8_BOM);
    bytes.extend_from_slice(out.as_bytes());
    bytes
}

/// Write the report for `today` into `dir` and return its path.
pub fn write_export(dir: &Path, today: NaiveDate, items: &[MatchedNewsItem]) -> Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| {
            NewsError::Export(format!("failed to create {}: {}", dir.display(), e))
        })?;
    }

    let path = dir.join(export_file_name(today));
    fs::write(&path, to_csv(items))
        .map_err(|e| NewsError::Export(format!("failed to write {}: {}", path.display(), e)))?;

    info!("exported {} rows to {}", items.len(), path.display());
    Ok(path)
}

fn push_row(out: &mut String, fields: &[&str]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push('\n');
}

/// Quote a field when it contains a delimiter, a quote or a line break.
fn push_field(out: &mut String, field: &str) {
    if field.contains([',', '"', '\n', '\r']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}
