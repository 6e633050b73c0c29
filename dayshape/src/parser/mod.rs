//! CSV loading with encoding and delimiter auto-detection.
//!
//! Turns raw bytes into a typed [`Table`]. No weekday logic here.

use crate::error::{CsvError, CsvResult};
use crate::models::{Cell, Column, Table};

/// Cell texts treated as missing values.
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#NA", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed, typed table
    pub table: Table,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
    /// Column headers as read (before any normalization)
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A leading UTF-8 byte-order mark is dropped.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);

    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => match String::from_utf8(bytes.to_vec()) {
            Ok(s) => s,
            Err(_) => String::from_utf8_lossy(bytes).into_owned(),
        },
        "iso-8859-1" | "latin-1" | "latin1" => encoding_rs::ISO_8859_15.decode(bytes).0.into_owned(),
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => {
                let (text, _, had_errors) = enc.decode(bytes);
                if had_errors {
                    return Err(CsvError::new(0, format!("Cannot decode content as {}", other)));
                }
                text.into_owned()
            }
            None => String::from_utf8_lossy(bytes).into_owned(),
        },
    };

    Ok(decoded)
}

/// Detect the delimiter by counting occurrences in the first line.
///
/// Comma wins ties and is used when no candidate appears.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    let (headers, table) = parse_table(&content, delimiter)?;
    Ok(ParseResult {
        table,
        encoding,
        delimiter,
        headers,
    })
}

/// Parse CSV text with an explicit delimiter into a typed table.
///
/// # Example
/// ```
/// use dayshape::parser::csv_to_table;
/// use dayshape::models::Cell;
///
/// let table = csv_to_table("mon,description\n3,first_desc", ',').unwrap();
/// assert_eq!(table.column("mon").unwrap(), &[Cell::Int(3)]);
/// ```
pub fn csv_to_table(content: &str, delimiter: char) -> CsvResult<Table> {
    parse_table(content, delimiter).map(|(_, table)| table)
}

fn parse_table(content: &str, delimiter: char) -> CsvResult<(Vec<String>, Table)> {
    if content.trim().is_empty() {
        return Err(CsvError::new(1, "Empty CSV file"));
    }
    if !delimiter.is_ascii() {
        return Err(CsvError::new(0, format!("Unsupported delimiter '{}'", delimiter)));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(false)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| csv_error(&e, "Cannot read header"))?
        .iter()
        .map(|h| h.to_string())
        .collect();

    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::new(1, "No headers found"));
    }

    let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(&e, "Cannot read row"))?;
        for (i, field) in record.iter().enumerate() {
            raw[i].push(field.to_string());
        }
    }

    let names = dedupe_headers(&headers);
    let columns = names
        .into_iter()
        .zip(raw)
        .map(|(name, cells)| Column::new(name, type_column(cells)))
        .collect();

    let table = Table::from_columns(columns).map_err(|e| CsvError::new(0, e.to_string()))?;
    Ok((headers, table))
}

fn csv_error(err: &csv::Error, context: &str) -> CsvError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::UnequalLengths { expected_len, len, .. } => CsvError::new(
            line,
            format!("{}: expected {} fields, found {}", context, expected_len, len),
        ),
        _ => CsvError::new(line, format!("{}: {}", context, err)),
    }
}

/// Repeated header names get a `.N` suffix so every column stays
/// addressable (`a, a` becomes `a, a.1`).
pub(crate) fn dedupe_headers(headers: &[String]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut name = header.clone();
        let mut n = 1;
        while seen.contains(&name) {
            name = format!("{}.{}", header, n);
            n += 1;
        }
        seen.push(name);
    }
    seen
}

/// Blank cells and NA tokens, ignoring surrounding spaces.
fn is_na(text: &str) -> bool {
    NA_VALUES.contains(&text.trim())
}

/// Type a whole column at once.
///
/// - every cell an integer, none missing: integer column
/// - every present cell a number: float column, missing cells empty
/// - anything else: text column, missing cells empty
///
/// Numbers may be padded with spaces; text cells keep theirs.
fn type_column(raw: Vec<String>) -> Vec<Cell> {
    let present: Vec<&str> = raw.iter().map(String::as_str).filter(|s| !is_na(s)).collect();
    let has_missing = present.len() < raw.len();

    if !present.is_empty() && !has_missing && present.iter().all(|s| s.trim().parse::<i64>().is_ok()) {
        return raw
            .iter()
            .map(|s| s.trim().parse::<i64>().map(Cell::Int).unwrap_or(Cell::Empty))
            .collect();
    }

    if !present.is_empty() && present.iter().all(|s| s.trim().parse::<f64>().is_ok()) {
        return raw
            .iter()
            .map(|s| match s.trim().parse::<f64>() {
                Ok(f) if !is_na(s) => Cell::Float(f),
                _ => Cell::Empty,
            })
            .collect();
    }

    raw.into_iter()
        .map(|s| if is_na(&s) { Cell::Empty } else { Cell::Text(s) })
        .collect()
}
