use std::collections::BTreeMap;
use std::fmt;

use super::build::ScaleGroup;

/// A single member of a generated scale type, e.g. `TemperatureScale.CELSIUS`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EnumerantRef {
    pub class_name: String,
    pub member: String,
}

impl fmt::Display for EnumerantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.class_name, self.member)
    }
}

/// Unit token to every scale member carrying that unit, each list sorted.
pub type UnitIndex = BTreeMap<String, Vec<EnumerantRef>>;

pub fn build_unit_index<'a>(groups: impl IntoIterator<Item = &'a ScaleGroup>) -> UnitIndex {
    let mut index = UnitIndex::new();
    for group in groups {
        let class_name = group.class_name();
        for unit_name in group.entries.keys() {
            index
                .entry(unit_name.clone())
                .or_default()
                .push(EnumerantRef {
                    class_name: class_name.clone(),
                    member: unit_name.clone(),
                });
        }
    }
    for enums in index.values_mut() {
        enums.sort();
        enums.dedup();
    }
    index
}
