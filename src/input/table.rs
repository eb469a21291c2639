use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::warn;

use crate::input::InputError;

/// Raw delimited export: one header row plus data rows, all cells as text.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Picks the cell delimiter from the file name: `.tsv` (optionally
/// gz-compressed) is tab-separated, everything else comma-separated.
pub fn detect_delimiter(path: &Path) -> char {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    if stem.ends_with(".tsv") { '\t' } else { ',' }
}

pub fn load_table(path: &Path) -> Result<RawTable, InputError> {
    let delim = detect_delimiter(path);
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("export file is empty".to_string()));
    }
    let columns: Vec<String> = split_record(buf.trim_end_matches(['\r', '\n']), delim)
        .into_iter()
        .map(|s| s.trim().to_string())
        .collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse("export header is empty".to_string()));
    }

    let mut rows = Vec::new();
    let mut line_no = 1usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            continue;
        }
        let mut cells = split_record(line, delim);
        if cells.len() > columns.len() {
            warn!(
                "row has {} cells but header has {}; extra cells dropped (line {})",
                cells.len(),
                columns.len(),
                line_no
            );
            cells.truncate(columns.len());
        }
        while cells.len() < columns.len() {
            cells.push(String::new());
        }
        rows.push(cells);
    }

    Ok(RawTable { columns, rows })
}

/// Splits one line on the delimiter, honoring double-quoted cells with `""`
/// escapes, which is how spreadsheet exports quote names containing commas.
pub fn split_record(line: &str, delim: char) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    cell.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                cell.push(ch);
            }
        } else if ch == '"' && cell.is_empty() {
            in_quotes = true;
        } else if ch == delim {
            cells.push(std::mem::take(&mut cell));
        } else {
            cell.push(ch);
        }
    }
    cells.push(cell);
    cells
}
