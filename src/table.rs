//! A parsed trajectory file.

use std::{collections::BTreeSet, io::Write, str::FromStr};

use chrono::NaiveDateTime;

use crate::{
    errors::YomahaErr,
    schema::{Column, Schema, Units},
    time::julian_to_datetime,
};

pub mod parse;

/// Rows of a trajectory file with named columns. Missing values are `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    schema: Schema,
    values: Vec<Option<f64>>, // Row major, schema.len() values per row.
}

/// A borrowed view of one row of a `Table`.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    schema: &'a Schema,
    values: &'a [Option<f64>],
}

impl Table {
    pub(crate) fn from_parts(schema: Schema, values: Vec<Option<f64>>) -> Result<Self, YomahaErr> {
        if schema.is_empty() || values.len() % schema.len() != 0 {
            return Err(YomahaErr::LogicError("row values don't line up with the schema"));
        }

        Ok(Table { schema, values })
    }

    /// The column layout.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len() / self.schema.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a row by its index in the file.
    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        let width = self.schema.len();
        let start = index.checked_mul(width)?;
        let end = start.checked_add(width)?;

        self.values.get(start..end).map(|values| Row {
            schema: &self.schema,
            values,
        })
    }

    /// Iterate over the rows in file order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        let schema = &self.schema;
        self.values
            .chunks(schema.len())
            .map(move |values| Row { schema, values })
    }

    /// All the values in one column, or `None` if the column isn't in the schema.
    pub fn column(&self, column: Column) -> Option<impl Iterator<Item = Option<f64>> + '_> {
        let position = self.schema.position(column)?;

        Some(
            self.values
                .chunks(self.schema.len())
                .map(move |row| row[position]),
        )
    }

    /// All the values in a column looked up by its name, e.g. `"lon_d"`.
    pub fn column_named(&self, name: &str) -> Result<Vec<Option<f64>>, YomahaErr> {
        let column = Column::from_str(name)?;

        self.column(column)
            .map(|values| values.collect())
            .ok_or(YomahaErr::LogicError("column is not part of the schema"))
    }

    /// The distinct float ids in the table, sorted.
    pub fn float_ids(&self) -> Vec<i64> {
        let ids: BTreeSet<i64> = self.rows().filter_map(|row| row.float_id()).collect();
        ids.into_iter().collect()
    }

    /// The rows belonging to a single float, in file order.
    pub fn trajectory(&self, float_id: i64) -> impl Iterator<Item = Row<'_>> {
        self.rows()
            .filter(move |row| row.float_id() == Some(float_id))
    }

    /// Write the table in the whitespace delimited format it was read from. Missing values are
    /// written as the column's sentinel.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), YomahaErr> {
        for row in self.rows() {
            let mut first = true;
            for (spec, value) in self.schema.iter().zip(row.values()) {
                let value = value
                    .or(spec.sentinel)
                    .ok_or(YomahaErr::LogicError("missing value without a sentinel"))?;

                if !first {
                    writer.write_all(b" ")?;
                }
                write!(writer, "{}", value)?;
                first = false;
            }
            writer.write_all(b"\n")?;
        }

        Ok(())
    }
}

impl<'a> Row<'a> {
    /// The value of a column, `None` if it is missing or not in the schema.
    pub fn get(&self, column: Column) -> Option<f64> {
        self.schema
            .position(column)
            .and_then(|position| self.values[position])
    }

    /// Values in schema order.
    pub fn values(&self) -> &'a [Option<f64>] {
        self.values
    }

    /// The calendar time of a Julian time column.
    pub fn time(&self, column: Column) -> Option<NaiveDateTime> {
        if column.units() != Units::JulianDays {
            return None;
        }

        self.get(column).and_then(julian_to_datetime)
    }

    /// The float id.
    pub fn float_id(&self) -> Option<i64> {
        self.get(Column::FloatId).map(|id| id as i64)
    }

    /// The cycle number.
    pub fn cycle(&self) -> Option<i64> {
        self.get(Column::Cycle).map(|cycle| cycle as i64)
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    use chrono::NaiveDate;

    // Two floats, the second row has a missing deep velocity.
    const DATA: &str = "\
10.5 -20.25 1000.0 100.5 1.25 -2.5 0.1 0.2 11.0 -21.0 101.0 3.0 4.0 0.5 0.5 10.0 -20.0 99.0 10.1 -20.1 100.0 10.9 -20.9 100.9 5 1900001 1 0
-999.9999 -99.9999 -999.9 -999.9999 -999.99 -999.99 -999.99 -999.99 12.0 -22.0 111.0 1.0 1.0 0.5 0.5 11.0 -21.0 109.0 11.1 -21.1 110.0 11.9 -21.9 110.9 4 2900002 7 1
12.5 -22.25 1000.0 120.5 -1.25 2.5 0.1 0.2 13.0 -23.0 121.0 3.0 4.0 0.5 0.5 12.0 -22.0 119.0 12.1 -22.1 120.0 12.9 -22.9 120.9 6 1900001 2 0
";

    fn sample_table() -> Table {
        parse::parse_reader(DATA.as_bytes(), Schema::yomaha07()).unwrap()
    }

    #[test]
    fn test_rows_and_columns() {
        let table = sample_table();

        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert!(table.row(3).is_none());

        let row = table.row(0).unwrap();
        assert_eq!(row.get(Column::LonD), Some(10.5));
        assert_eq!(row.get(Column::SurfaceFixes), Some(5.0));
        assert_eq!(row.cycle(), Some(1));

        let deep_u: Vec<Option<f64>> = table.column(Column::UD).unwrap().collect();
        assert_eq!(deep_u, vec![Some(1.25), None, Some(-1.25)]);
    }

    #[test]
    fn test_row_index_out_of_range() {
        let table = sample_table();

        assert!(table.row(usize::MAX / 28).is_none());
        assert!(table.row(usize::MAX).is_none());
    }

    #[test]
    fn test_column_named() {
        let table = sample_table();

        assert_eq!(
            table.column_named("u_d").unwrap(),
            vec![Some(1.25), None, Some(-1.25)]
        );

        match table.column_named("speed") {
            Err(YomahaErr::StrumError(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_float_ids_and_trajectory() {
        let table = sample_table();

        assert_eq!(table.float_ids(), vec![1_900_001, 2_900_002]);

        let cycles: Vec<i64> = table
            .trajectory(1_900_001)
            .filter_map(|row| row.cycle())
            .collect();
        assert_eq!(cycles, vec![1, 2]);
        assert_eq!(table.trajectory(42).count(), 0);
    }

    #[test]
    fn test_row_time() {
        let table = sample_table();
        let row = table.row(0).unwrap();

        let expected = NaiveDate::from_ymd_opt(2000, 4, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(row.time(Column::TimeD), Some(expected));
        assert_eq!(row.time(Column::LonD), None);
        assert_eq!(table.row(1).unwrap().time(Column::TimeD), None);
    }

    #[test]
    fn test_write_round_trip() {
        let table = sample_table();

        let mut buffer: Vec<u8> = vec![];
        table.write(&mut buffer).unwrap();

        let reparsed = parse::parse_reader(buffer.as_slice(), Schema::yomaha07()).unwrap();
        assert_eq!(reparsed, table);
    }

    #[test]
    fn test_from_parts_checks_width() {
        assert!(Table::from_parts(Schema::yomaha07(), vec![Some(1.0); 27]).is_err());
        assert!(Table::from_parts(Schema::yomaha07(), vec![]).is_ok());
    }
}
