use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawScaleDefinition {
    pub label: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Hex id (e.g. `"0x00"`) to scale definition.
pub type RawScaleGroup = BTreeMap<String, RawScaleDefinition>;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ScaleReference {
    /// Pointer to a shared group, e.g. `"$SCALES:temperature"`
    Named(String),
    Inline(RawScaleGroup),
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawSensorDefinition {
    pub label: String,
    pub scales: ScaleReference,
}

pub type RawSensorDocument = BTreeMap<String, RawSensorDefinition>;
pub type RawScaleDocument = BTreeMap<String, RawScaleGroup>;
