//! `key = value` properties format.
//!
//! ```text
//! # comment
//! logging.level = debug
//! logging.file  = /var/log/consumer.log
//! ```

use crate::error::{ConfigError, Result};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Parsed properties, ordered by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Parses properties text.
    ///
    /// Blank lines and lines starting with `#` are skipped. Keys and values are
    /// trimmed; a value may be empty, a key may not. A repeated key keeps the
    /// last value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] with the 1-based line number of the first
    /// malformed line.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = BTreeMap::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| ConfigError::Parse {
                line: index + 1,
                message: format!("expected 'key = value', got '{}'", line),
            })?;

            let key = key.trim();
            if key.is_empty() {
                return Err(ConfigError::Parse {
                    line: index + 1,
                    message: "empty key".to_string(),
                });
            }

            entries.insert(key.to_string(), value.trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Raw string value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Value for `key` parsed as `T`, `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the value does not parse.
    pub fn parse_value<T: FromStr>(&self, key: &str) -> Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .parse()
                .map(Some)
                .map_err(|_| ConfigError::InvalidValue {
                    key: key.to_string(),
                    value: value.to_string(),
                }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
