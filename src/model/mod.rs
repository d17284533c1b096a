pub mod build;
pub mod normalize;
pub mod raw;
pub mod unit_index;

pub use build::{build, BuildError, Model, ScaleEntry, ScaleGroup, SensorType};
pub use normalize::SensorNameRules;
pub use unit_index::{build_unit_index, EnumerantRef, UnitIndex};
