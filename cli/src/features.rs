//! Feature flag sets.

use {
    crate::{Error, Result},
    serde::{Deserialize, Serialize},
    std::{collections::BTreeMap, str::FromStr},
};

/// Boolean switches keyed by feature name.
///
/// Names the chosen template does not declare are ignored, and any name not
/// present reads as off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureFlags(BTreeMap<String, bool>);

impl FeatureFlags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set with every listed feature turned on.
    pub fn enabled<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names.into_iter().map(|name| (name, true)).collect()
    }

    pub fn set(&mut self, name: impl Into<String>, value: bool) -> &mut Self {
        self.0.insert(name.into(), value);
        self
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Applies `other` on top of `self`; later values win.
    pub fn merge(&mut self, other: &FeatureFlags) {
        for (name, value) in &other.0 {
            self.0.insert(name.clone(), *value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, bool)> for FeatureFlags {
    fn from_iter<T: IntoIterator<Item = (S, bool)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

/// A single `NAME` or `NAME=BOOL` assignment from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureAssignment {
    pub name: String,
    pub value: bool,
}

impl FromStr for FeatureAssignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, value) = match s.split_once('=') {
            Some((name, raw)) => {
                let value = match raw.trim().to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(Error::InvalidFeature(s.to_string())),
                };
                (name.trim(), value)
            }
            None => (s.trim(), true),
        };

        if name.is_empty() {
            return Err(Error::InvalidFeature(s.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            value,
        })
    }
}
