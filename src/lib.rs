#![deny(missing_docs)]
//! Download and read the YoMaHa'07 dataset of Argo float velocities.
//!
//! The dataset is published by APDRC as three small metadata files and one gzipped, whitespace
//! delimited table of 28 columns. [`fetch`] downloads all of them into a directory and unpacks the
//! table, [`parse`] reads the unpacked table into a [`Table`] with missing values translated to
//! `None`.

//
// Public API
//
pub use errors::YomahaErr;
pub use fetch::{decompress_file, expand_home, fetch, last_update, Fetcher};
pub use schema::{Cluster, Column, ColumnSpec, Schema, Units};
pub use source::{DatasetSource, RemoteResource, YOMAHA07_BASE_URL};
pub use table::{
    parse::{parse, parse_reader, parse_with_schema},
    Row, Table,
};
pub use time::julian_to_datetime;

//
// Implementation only
//
mod errors;
mod fetch;
mod schema;
mod source;
mod table;
mod time;

#[cfg(feature = "pylib")]
mod py_lib;
