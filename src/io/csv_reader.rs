use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::config::ColumnNames;
use crate::error::{SeriesError, SeriesResult};
use crate::io::open_maybe_gz;
use crate::series::{MINUTES_PER_DAY, Series, TimeSample};

/// Loads one cohort from a comma-separated file with a header row. The first
/// malformed row aborts the load.
pub fn read_series(path: &Path, columns: &ColumnNames) -> SeriesResult<Series> {
    let reader = open_maybe_gz(path)?;
    let series = read_series_from(reader, &path.display().to_string(), columns)?;
    debug!(path = %path.display(), rows = series.len(), "series_loaded");
    Ok(series)
}

pub fn read_series_from<R: Read>(
    mut reader: R,
    source_name: &str,
    columns: &ColumnNames,
) -> SeriesResult<Series> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let mut records = split_records(&text)
        .into_iter()
        .filter(|(_, record)| !record.trim().is_empty());

    let Some((_, header)) = records.next() else {
        return Err(SeriesError::Parse {
            source_name: source_name.to_string(),
            line: 1,
            column: columns.time.clone(),
            value: String::new(),
            reason: "empty file, header row expected".to_string(),
        });
    };

    let names = split_fields(header.trim_start_matches('\u{feff}'));
    let time_idx = column_index(&names, &columns.time, source_name)?;
    let value_idx = column_index(&names, &columns.value, source_name)?;

    let mut samples: Vec<TimeSample> = Vec::new();
    for (line_no, record) in records {
        let fields = split_fields(record);
        let minute_raw = field(&fields, time_idx);
        let value_raw = field(&fields, value_idx);

        let parse_err = |column: &str, value: &str, reason: &str| SeriesError::Parse {
            source_name: source_name.to_string(),
            line: line_no,
            column: column.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        let minute_num = parse_number(minute_raw)
            .ok_or_else(|| parse_err(&columns.time, minute_raw, "not a number"))?;
        let value = parse_number(value_raw)
            .ok_or_else(|| parse_err(&columns.value, value_raw, "not a number"))?;

        if minute_num.fract() != 0.0 || minute_num < 0.0 || minute_num >= MINUTES_PER_DAY as f64 {
            return Err(parse_err(
                &columns.time,
                minute_raw,
                "minute must be an integer in 0..=1439",
            ));
        }
        let minute = minute_num as u16;
        if let Some(prev) = samples.last() {
            if minute <= prev.minute {
                return Err(parse_err(
                    &columns.time,
                    minute_raw,
                    "minutes must be strictly increasing",
                ));
            }
        }

        samples.push(TimeSample::new(minute, value));
    }

    Series::new(samples)
}

fn column_index(names: &[String], wanted: &str, source_name: &str) -> SeriesResult<usize> {
    names
        .iter()
        .position(|n| n == wanted)
        .ok_or_else(|| SeriesError::MissingColumn {
            source_name: source_name.to_string(),
            column: wanted.to_string(),
        })
}

fn field(fields: &[String], idx: usize) -> &str {
    fields.get(idx).map(String::as_str).unwrap_or("")
}

fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn split_records(text: &str) -> Vec<(usize, &str)> {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;
    let mut start_line = 1;
    let mut line = 1;

    for (i, c) in text.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '\n' => {
                if !in_quotes {
                    records.push((start_line, &text[start..i]));
                    start = i + 1;
                    start_line = line + 1;
                }
                line += 1;
            }
            _ => {}
        }
    }
    if start < text.len() {
        records.push((start_line, &text[start..]));
    }
    records
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_handles_quotes() {
        let f = split_fields(r#"1,"a, b","say ""hi""""#);
        assert_eq!(f, vec!["1", "a, b", r#"say "hi""#]);
    }

    #[test]
    fn records_span_quoted_newlines() {
        let r = split_records("time,note\n1,\"two\nlines\"\n\n3,x");
        assert_eq!(
            r,
            vec![
                (1, "time,note"),
                (2, "1,\"two\nlines\""),
                (4, ""),
                (5, "3,x")
            ]
        );
    }

    #[test]
    fn parse_number_rejects_text() {
        assert_eq!(parse_number(" 12.5 "), Some(12.5));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
