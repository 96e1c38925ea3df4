use crate::{errors::YomahaErr, fetch::fetch, table::parse::parse};
use pyo3::{exceptions, prelude::*, types::PyDict, wrap_pyfunction};

/// Download the dataset into `savepath` and decompress it.
#[pyfunction]
fn download_update_yomaha(py: Python, savepath: &str) -> PyResult<()> {
    py.allow_threads(|| fetch(savepath)).map_err(Into::into)
}

/// Read a trajectory file into a dict of column name to values, `None` where data is missing.
#[pyfunction]
fn read_yomaha(py: Python, filename: &str) -> PyResult<PyObject> {
    let table = py.allow_threads(|| parse(filename))?;

    let columns = PyDict::new(py);
    for spec in table.schema() {
        if let Some(values) = table.column(spec.column) {
            let values: Vec<Option<f64>> = values.collect();
            columns.set_item(spec.column.name(), values)?;
        }
    }

    Ok(columns.to_object(py))
}

/// Read a single column of a trajectory file by name, e.g. `"lon_d"`.
#[pyfunction]
fn read_yomaha_column(py: Python, filename: &str, column: &str) -> PyResult<Vec<Option<f64>>> {
    let table = py.allow_threads(|| parse(filename))?;
    table.column_named(column).map_err(Into::into)
}

/// Download and read the YoMaHa'07 Argo float velocity dataset.
#[pymodule]
fn yomaha_data(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_wrapped(wrap_pyfunction!(download_update_yomaha))?;
    m.add_wrapped(wrap_pyfunction!(read_yomaha))?;
    m.add_wrapped(wrap_pyfunction!(read_yomaha_column))?;

    Ok(())
}

impl std::convert::From<YomahaErr> for PyErr {
    fn from(err: YomahaErr) -> PyErr {
        exceptions::PyIOError::new_err(err.to_string())
    }
}
