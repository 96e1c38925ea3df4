//! The column layout of a trajectory file and the value each column uses for missing data.

use std::slice;

mod column;

pub use self::column::{Cluster, Column, Units};

/// A column and the sentinel value that marks it as missing, if it has one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColumnSpec {
    /// Which column this is.
    pub column: Column,
    /// Values exactly equal to this are missing data.
    pub sentinel: Option<f64>,
}

impl ColumnSpec {
    /// Create a column specification.
    pub const fn new(column: Column, sentinel: Option<f64>) -> Self {
        ColumnSpec { column, sentinel }
    }

    /// Test whether a decoded value is this column's missing value marker.
    ///
    /// This is an exact comparison, a value near the sentinel is real data.
    #[allow(clippy::float_cmp)]
    pub fn is_sentinel(&self, value: f64) -> bool {
        self.sentinel.map(|s| s == value).unwrap_or(false)
    }
}

/// The ordered list of columns in a file.
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    columns: Vec<ColumnSpec>,
}

const YOMAHA07: [ColumnSpec; 28] = {
    use Column::*;

    const LON: Option<f64> = Some(-999.99);
    const LAT: Option<f64> = Some(-99.99);
    const TIME: Option<f64> = Some(-999.99);
    const VEL: Option<f64> = Some(-999.99);

    [
        ColumnSpec::new(LonD, Some(-999.9999)),
        ColumnSpec::new(LatD, Some(-99.9999)),
        ColumnSpec::new(PressureD, Some(-999.9)),
        ColumnSpec::new(TimeD, Some(-999.9999)),
        ColumnSpec::new(UD, VEL),
        ColumnSpec::new(VD, VEL),
        ColumnSpec::new(ErrUD, VEL),
        ColumnSpec::new(ErrVD, VEL),
        ColumnSpec::new(LonS, LON),
        ColumnSpec::new(LatS, LAT),
        ColumnSpec::new(TimeS, TIME),
        ColumnSpec::new(US, VEL),
        ColumnSpec::new(VS, VEL),
        ColumnSpec::new(ErrUS, VEL),
        ColumnSpec::new(ErrVS, VEL),
        ColumnSpec::new(LonLp, LON),
        ColumnSpec::new(LatLp, LAT),
        ColumnSpec::new(TimeLp, TIME),
        ColumnSpec::new(LonFc, LON),
        ColumnSpec::new(LatFc, LAT),
        ColumnSpec::new(TimeFc, TIME),
        ColumnSpec::new(LonLc, LON),
        ColumnSpec::new(LatLc, LAT),
        ColumnSpec::new(TimeLc, TIME),
        ColumnSpec::new(SurfaceFixes, None),
        ColumnSpec::new(FloatId, None),
        ColumnSpec::new(Cycle, None),
        ColumnSpec::new(TimeInversion, None),
    ]
};

impl Schema {
    /// Build a schema from an ordered list of columns.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Schema { columns }
    }

    /// The layout of the YoMaHa'07 trajectory file.
    pub fn yomaha07() -> Self {
        Schema::new(YOMAHA07.to_vec())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// True if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of a column in a row, if it is part of this schema.
    pub fn position(&self, column: Column) -> Option<usize> {
        self.columns.iter().position(|spec| spec.column == column)
    }

    /// Look up the specification for a column.
    pub fn spec(&self, column: Column) -> Option<&ColumnSpec> {
        self.columns.iter().find(|spec| spec.column == column)
    }

    /// Iterate over the columns in file order.
    pub fn iter(&self) -> slice::Iter<'_, ColumnSpec> {
        self.columns.iter()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a ColumnSpec;
    type IntoIter = slice::Iter<'a, ColumnSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
