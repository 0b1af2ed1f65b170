//! CSV report sink
//!
//! Writes rows with the header `s.no,url,tag,rule,severe`. Fields holding a
//! comma, quote or line break are quoted with inner quotes doubled.

use crate::output::report::ReportRow;
use crate::output::ReportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Column header of the report
pub const CSV_HEADER: [&str; 5] = ["s.no", "url", "tag", "rule", "severe"];

/// Writes `rows` to `output_path` as UTF-8 CSV
///
/// An empty report produces a file with only the header line.
pub fn write_csv(rows: &[ReportRow], output_path: &Path) -> Result<(), ReportError> {
    let mut writer = BufWriter::new(File::create(output_path)?);
    write_rows(&mut writer, rows)?;
    writer.flush()?;
    Ok(())
}

/// Formats `rows` as a CSV string
pub fn format_csv(rows: &[ReportRow]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail
    write_rows(&mut buf, rows).ok();
    String::from_utf8_lossy(&buf).into_owned()
}

fn write_rows<W: Write>(w: &mut W, rows: &[ReportRow]) -> std::io::Result<()> {
    write_record(w, &CSV_HEADER)?;
    for row in rows {
        let serial = row.serial.to_string();
        write_record(
            w,
            &[
                serial.as_str(),
                row.url.as_str(),
                row.tag.as_str(),
                row.rule.as_str(),
                row.severity.as_str(),
            ],
        )?;
    }
    Ok(())
}

fn write_record<W: Write>(w: &mut W, fields: &[&str]) -> std::io::Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            w.write_all(b",")?;
        }
        write_field(w, field)?;
    }
    w.write_all(b"\n")
}

fn write_field<W: Write>(w: &mut W, field: &str) -> std::io::Result<()> {
    let needs_quotes = field.contains([',', '"', '\n', '\r']);
    if !needs_quotes {
        return w.write_all(field.as_bytes());
    }
    w.write_all(b"\"")?;
    w.write_all(field.replace('"', "\"\"").as_bytes())?;
    w.write_all(b"\"")
}
