// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Access to the settings that drive mapping-model bootstrap.
//!
//! Settings are plain string key/value pairs. They usually come from the process environment
//! ([`SystemEnvironment`]), but tests and embedders can supply them through a
//! [`MapEnvironment`], optionally layered over another environment.

mod map;

use std::str::FromStr;

pub use map::MapEnvironment;

pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Interpret a setting as a boolean flag, falling back to `default_value` when unset.
    fn enabled(&self, key: &str, default_value: bool) -> Result<bool, EnvError> {
        match self.get(key) {
            Some(value) => match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(true),
                "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(false),
                _ => Err(EnvError::InvalidBoolean {
                    key: key.to_string(),
                    value,
                }),
            },
            None => Ok(default_value),
        }
    }

    fn get_or_else(&self, key: &str, default_value: &str) -> String {
        self.get(key).unwrap_or(default_value.to_string())
    }

    /// Parse a setting into an enum-like value. An unset (or blank) key yields `Ok(None)`.
    fn get_parsed<T>(&self, key: &'static str) -> Result<Option<T>, EnvError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
        Self: Sized,
    {
        match self.get(key) {
            Some(value) if !value.trim().is_empty() => value
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| EnvError::InvalidEnum {
                    env_key: key,
                    env_value: value.clone(),
                    message: e.to_string(),
                }),
            _ => Ok(None),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled, enable OR false, 0, no, off, disabled, disable"
    )]
    InvalidBoolean { key: String, value: String },

    #[error("Invalid env value {env_value} for {env_key}: {message}")]
    InvalidEnum {
        env_key: &'static str,
        env_value: String,
        message: String,
    },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Flavor {
        Plain,
        Fancy,
    }

    impl FromStr for Flavor {
        type Err = String;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s {
                "plain" => Ok(Flavor::Plain),
                "fancy" => Ok(Flavor::Fancy),
                other => Err(format!("unknown flavor '{other}'")),
            }
        }
    }

    #[test]
    fn enabled_parses_common_spellings() {
        let env = MapEnvironment::from([("A", "Yes"), ("B", "off"), ("C", "maybe")]);

        assert!(env.enabled("A", false).unwrap());
        assert!(!env.enabled("B", true).unwrap());
        assert!(env.enabled("MISSING", true).unwrap());
        assert!(matches!(
            env.enabled("C", false),
            Err(EnvError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn get_parsed_handles_unset_blank_and_invalid() {
        let env = MapEnvironment::from([("FLAVOR", " fancy "), ("BLANK", "  "), ("BAD", "sour")]);

        assert_eq!(env.get_parsed::<Flavor>("FLAVOR").unwrap(), Some(Flavor::Fancy));
        assert_eq!(env.get_parsed::<Flavor>("BLANK").unwrap(), None);
        assert_eq!(env.get_parsed::<Flavor>("UNSET").unwrap(), None);

        match env.get_parsed::<Flavor>("BAD") {
            Err(EnvError::InvalidEnum {
                env_key, message, ..
            }) => {
                assert_eq!(env_key, "BAD");
                assert_eq!(message, "unknown flavor 'sour'");
            }
            other => panic!("expected an enum error, got {other:?}"),
        }
        assert_ne!(Flavor::Plain, Flavor::Fancy);
    }
}
