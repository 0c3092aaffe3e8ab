//! PyO3 wrapper for Cost
//!
//! This module provides the Python interface to the cost model.

use pyo3::prelude::*;

use super::types::{config_error, duration_from_py, interval_from_unix, shift_out_of_range};
use crate::config::CostConfig;
use crate::costs::{Cost as RustCost, CostModel};

/// Python wrapper for a Rust cost tree
///
/// # Example (from Python)
///
/// ```python
/// from cost_model_core_rs import Cost
///
/// rent = Cost.from_json('{"type": "constant_continuous", "name": "Rent", '
///                       '"amount": 900.0, "per": "month"}')
/// january = rent.cost_in_interval(1640995200, 1643673600)
/// doubled = rent * 2
/// ```
#[pyclass(name = "Cost")]
#[derive(Clone)]
pub struct PyCost {
    inner: RustCost,
}

#[pymethods]
impl PyCost {
    /// Build a cost from its JSON configuration
    ///
    /// # Errors
    ///
    /// Raises ValueError if the JSON is malformed or a cost is invalid
    /// (e.g. a non-positive repetition interval).
    #[staticmethod]
    fn from_json(config: &str) -> PyResult<Self> {
        let inner = CostConfig::from_json(config)
            .and_then(|config| config.build())
            .map_err(config_error)?;
        Ok(Self { inner })
    }

    /// Total amount in `[start, end)`, both given as unix seconds
    fn cost_in_interval(&self, start: i64, end: i64) -> PyResult<f64> {
        let interval = interval_from_unix(start, end)?;
        Ok(self.inner.cost_in_interval(&interval))
    }

    fn is_continuous(&self) -> bool {
        self.inner.is_continuous()
    }

    /// New cost moved by `seconds` (negative moves into the past)
    ///
    /// # Errors
    ///
    /// Raises ValueError if a shifted timestamp would leave the
    /// representable range.
    fn shift(&self, seconds: i64) -> PyResult<Self> {
        let duration = duration_from_py(seconds)?;
        let inner = self
            .inner
            .checked_shift(duration)
            .ok_or_else(|| shift_out_of_range(self.inner.name(), seconds))?;
        Ok(Self { inner })
    }

    fn copy(&self) -> Self {
        self.clone()
    }

    fn sub_costs(&self) -> Vec<PyCost> {
        self.inner
            .sub_costs()
            .iter()
            .map(|cost| PyCost {
                inner: cost.clone(),
            })
            .collect()
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner.to_config().to_json().map_err(config_error)
    }

    /// SHA-256 fingerprint of the cost's configuration
    fn fingerprint(&self) -> PyResult<String> {
        self.inner.to_config().fingerprint().map_err(config_error)
    }

    fn __mul__(&self, factor: f64) -> Self {
        Self {
            inner: self.inner.scaled(factor),
        }
    }

    fn __imul__(&mut self, factor: f64) {
        self.inner.scale_in_place(factor);
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("{:?}", self.inner)
    }
}
