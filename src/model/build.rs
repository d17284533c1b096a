use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, HashMap};

use thiserror::Error;

use crate::constants::defaults::SCALES_REF_PREFIX;

use super::normalize::{self, SensorNameRules};
use super::raw::{RawScaleDocument, RawScaleGroup, RawSensorDocument, ScaleReference};

const SENSOR_TYPES_TABLE: &str = "sensor types";
const SCALE_GROUPS_TABLE: &str = "scale groups";

#[derive(Error, Debug, PartialEq)]
pub enum BuildError {
    #[error("invalid hex id {0:?}")]
    InvalidId(String),
    #[error("{table}: {first:?} and {second:?} both normalize to {token}")]
    NameCollision {
        table: String,
        token: String,
        first: String,
        second: String,
    },
    #[error("{table}: {label:?} normalizes to {token:?}, which is not a valid identifier")]
    InvalidIdentifier {
        table: String,
        label: String,
        token: String,
    },
    #[error("sensor type {sensor} refers to unknown scale group {reference:?}")]
    UnresolvedScaleReference { sensor: String, reference: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleEntry {
    pub id: u8,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScaleGroup {
    pub name: String,
    /// Raw group key or sensor label the group came from
    pub origin: String,
    /// Sorted by token
    pub entries: BTreeMap<String, ScaleEntry>,
}

impl ScaleGroup {
    pub fn class_name(&self) -> String {
        normalize::class_name(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SensorType {
    pub id: u8,
    pub label: String,
    pub scale_group: String,
}

/// Both tables are keyed, and therefore iterated, in lexicographic order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Model {
    pub scale_groups: BTreeMap<String, ScaleGroup>,
    pub sensor_types: BTreeMap<String, SensorType>,
}

pub fn parse_hex_id(raw: &str) -> Result<u8, BuildError> {
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u8::from_str_radix(digits, 16).map_err(|_| BuildError::InvalidId(raw.into()))
}

fn check_identifier(table: &str, label: &str, token: &str) -> Result<(), BuildError> {
    if normalize::is_valid_identifier(token) {
        Ok(())
    } else {
        Err(BuildError::InvalidIdentifier {
            table: table.into(),
            label: label.into(),
            token: token.into(),
        })
    }
}

fn collision(table: &str, token: &str, first: &str, second: &str) -> BuildError {
    BuildError::NameCollision {
        table: table.into(),
        token: token.into(),
        first: first.into(),
        second: second.into(),
    }
}

pub fn normalize_scale_group(
    name: String,
    origin: &str,
    raw: &RawScaleGroup,
) -> Result<ScaleGroup, BuildError> {
    let table = format!("scale group {name}");
    let mut entries: BTreeMap<String, ScaleEntry> = BTreeMap::new();
    for (raw_id, def) in raw {
        let id = parse_hex_id(raw_id)?;
        let token = normalize::enum_name_format(&def.label, true);
        check_identifier(&table, &def.label, &token)?;
        match entries.entry(token) {
            Entry::Occupied(e) => {
                return Err(collision(&table, e.key(), &e.get().label, &def.label));
            }
            Entry::Vacant(e) => {
                e.insert(ScaleEntry {
                    id,
                    label: def.label.clone(),
                });
            }
        }
    }
    Ok(ScaleGroup {
        name,
        origin: origin.into(),
        entries,
    })
}

fn insert_group(
    groups: &mut BTreeMap<String, ScaleGroup>,
    group: ScaleGroup,
) -> Result<(), BuildError> {
    match groups.entry(group.name.clone()) {
        Entry::Occupied(e) => Err(collision(
            SCALE_GROUPS_TABLE,
            e.key(),
            &e.get().origin,
            &group.origin,
        )),
        Entry::Vacant(e) => {
            e.insert(group);
            Ok(())
        }
    }
}

fn check_class_names(groups: &BTreeMap<String, ScaleGroup>) -> Result<(), BuildError> {
    let mut seen: HashMap<String, &ScaleGroup> = HashMap::new();
    for group in groups.values() {
        let class_name = group.class_name();
        if let Some(first) = seen.get(&class_name) {
            return Err(collision(
                SCALE_GROUPS_TABLE,
                &class_name,
                &first.origin,
                &group.origin,
            ));
        }
        seen.insert(class_name, group);
    }
    Ok(())
}

pub fn build(
    scales: &RawScaleDocument,
    sensors: &RawSensorDocument,
    rules: &SensorNameRules,
) -> Result<Model, BuildError> {
    let mut scale_groups = BTreeMap::new();
    for (key, raw_group) in scales {
        let group = normalize_scale_group(normalize::display_name(key), key, raw_group)?;
        insert_group(&mut scale_groups, group)?;
    }

    let mut sensor_types: BTreeMap<String, SensorType> = BTreeMap::new();
    let mut named_refs: Vec<(String, String)> = Vec::new();
    for (raw_id, def) in sensors {
        let id = parse_hex_id(raw_id)?;
        let token = rules.sensor_token(id, &def.label);
        check_identifier(SENSOR_TYPES_TABLE, &def.label, &token)?;

        let scale_group = match &def.scales {
            ScaleReference::Named(reference) => {
                named_refs.push((token.clone(), reference.clone()));
                let name = reference
                    .strip_prefix(SCALES_REF_PREFIX)
                    .unwrap_or(reference);
                normalize::display_name(name)
            }
            ScaleReference::Inline(raw_group) => {
                let group =
                    normalize_scale_group(normalize::display_name(&token), &def.label, raw_group)?;
                let name = group.name.clone();
                insert_group(&mut scale_groups, group)?;
                name
            }
        };

        match sensor_types.entry(token) {
            Entry::Occupied(e) => {
                return Err(collision(
                    SENSOR_TYPES_TABLE,
                    e.key(),
                    &e.get().label,
                    &def.label,
                ));
            }
            Entry::Vacant(e) => {
                e.insert(SensorType {
                    id,
                    label: def.label.clone(),
                    scale_group,
                });
            }
        }
    }

    // Resolved only once every inline group exists, so input order cannot matter
    for (token, reference) in named_refs {
        if !scale_groups.contains_key(&sensor_types[&token].scale_group) {
            return Err(BuildError::UnresolvedScaleReference {
                sensor: token,
                reference,
            });
        }
    }
    check_class_names(&scale_groups)?;

    log::debug!(
        "Built {} sensor types and {} scale groups",
        sensor_types.len(),
        scale_groups.len()
    );
    Ok(Model {
        scale_groups,
        sensor_types,
    })
}
