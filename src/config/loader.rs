//! Rates configuration loading.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::PayrollRates;

/// Loads payroll rates from a YAML file.
///
/// # Arguments
///
/// * `path` - Path to the rates file (e.g., "./config/rates.yaml")
///
/// # Errors
///
/// Returns [`EngineError::ConfigNotFound`] if the file cannot be read, or
/// [`EngineError::ConfigParseError`] if it is not valid YAML for
/// [`PayrollRates`].
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::load_rates;
///
/// let rates = load_rates("./config/rates.yaml")?;
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
pub fn load_rates<P: AsRef<Path>>(path: P) -> EngineResult<PayrollRates> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
