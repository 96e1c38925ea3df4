//! Decoding whitespace delimited trajectory files.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::debug;

use super::Table;
use crate::{errors::YomahaErr, schema::Schema};

/// Read a YoMaHa'07 trajectory file.
pub fn parse<P: AsRef<Path>>(path: P) -> Result<Table, YomahaErr> {
    parse_with_schema(path, Schema::yomaha07())
}

/// Read a trajectory file with a custom column layout.
pub fn parse_with_schema<P: AsRef<Path>>(path: P, schema: Schema) -> Result<Table, YomahaErr> {
    let path = path.as_ref();
    debug!("Parsing {}", path.display());

    let file = File::open(path)?;
    parse_reader(BufReader::new(file), schema)
}

/// Read trajectory data from any buffered source.
///
/// Every non-blank line is one record with exactly one token per schema column. The first bad
/// line aborts the parse.
pub fn parse_reader<R: BufRead>(reader: R, schema: Schema) -> Result<Table, YomahaErr> {
    let width = schema.len();
    let mut values: Vec<Option<f64>> = vec![];

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = line_idx + 1;

        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.is_empty() {
            continue;
        }

        if tokens.len() != width {
            return Err(YomahaErr::FieldCount {
                line: line_num,
                expected: width,
                found: tokens.len(),
            });
        }

        for (spec, token) in schema.iter().zip(tokens.iter()) {
            let value: f64 = token.parse().map_err(|_| YomahaErr::InvalidToken {
                line: line_num,
                column: spec.column.name(),
                token: (*token).to_owned(),
            })?;

            if spec.is_sentinel(value) {
                values.push(None);
            } else {
                values.push(Some(value));
            }
        }
    }

    debug!("Parsed {} records", values.len() / width.max(1));

    Table::from_parts(schema, values)
}
