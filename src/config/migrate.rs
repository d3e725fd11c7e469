use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys of the default configuration, in file order.
fn default_mapping() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(format!("cannot serialize defaults: {e}")))?;

    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("defaults are not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(Value::Null) => Ok(Mapping::new()),
        Ok(_) => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Keys known to this version that the file at `path` does not define.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let current = read_mapping(path)?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value, keeping the user's values.
/// Returns the keys that were added (empty when the file was already current).
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let defaults = default_mapping()?;
    let mut current = read_mapping(path)?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            current.insert(key, value);
        }
    }

    if added.is_empty() {
        return Ok(added);
    }

    let serialized =
        serde_yaml::to_string(&Value::Mapping(current)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;

    Ok(added)
}
