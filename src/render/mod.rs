use itertools::Itertools;

use crate::config::SourceConfig;
use crate::constants::markers::{BEGIN_BLOCK, END_BLOCK};
use crate::model::{Model, UnitIndex};

pub const SENSOR_TYPE_NAME: &str = "MultilevelSensorType";
pub const SCALE_BASE_TYPE_NAME: &str = "MultilevelSensorScaleType";
pub const SCALE_KIND_NAME: &str = "MultilevelSensorScaleKind";
pub const SENSOR_TYPE_TO_SCALE_MAP_NAME: &str = "MULTILEVEL_SENSOR_TYPE_TO_SCALE_MAP";

const INDENT: &str = "    ";
const DERIVES: &str = "#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]";

fn string_literal(text: &str) -> String {
    format!("{text:?}")
}

fn header() -> Vec<String> {
    let mut lines = vec!["//! Constants for the Multilevel Sensor CC.".to_owned(), String::new()];
    lines.extend(BEGIN_BLOCK.iter().map(|l| l.to_string()));
    lines.extend([
        String::new(),
        format!("pub const CC_SPECIFIC_SCALE: &str = {};", string_literal("scale")),
        format!(
            "pub const CC_SPECIFIC_SENSOR_TYPE: &str = {};",
            string_literal("sensorType")
        ),
        String::new(),
    ]);
    lines
}

/// Newtype over the raw byte with one associated constant per member.
///
/// Members may share a value, which rules out a Rust enum with discriminants.
pub fn generate_constant_type_definition<'a>(
    type_name: &str,
    members: impl IntoIterator<Item = (&'a str, u8)>,
    ref_url: Option<&str>,
    docstring_info: &str,
) -> Vec<String> {
    let mut def = vec![
        format!("/// Enum for known {docstring_info} multilevel sensor types.").replace("  ", " "),
    ];
    if let Some(url) = ref_url {
        def.push(format!("// {url}"));
    }
    def.push(DERIVES.into());
    def.push(format!("pub struct {type_name}(pub u8);"));
    def.push(String::new());
    def.push(format!("impl {type_name} {{"));
    for (member, id) in members {
        def.push(format!("{INDENT}pub const {member}: Self = Self({id});"));
    }
    def.push("}".into());
    def.push(String::new());
    def
}

fn generate_scale_base_types(class_names: &[String]) -> Vec<String> {
    let mut def = vec![
        "/// Common base type for multilevel sensor scale enums.".to_owned(),
        DERIVES.into(),
        format!("pub enum {SCALE_BASE_TYPE_NAME} {{"),
    ];
    def.extend(
        class_names
            .iter()
            .map(|class| format!("{INDENT}{class}({class}),")),
    );
    def.extend(["}".to_owned(), String::new()]);

    def.extend([
        "/// Identifies one of the multilevel sensor scale enums.".to_owned(),
        DERIVES.into(),
        format!("pub enum {SCALE_KIND_NAME} {{"),
    ]);
    def.extend(class_names.iter().map(|class| format!("{INDENT}{class},")));
    def.extend(["}".to_owned(), String::new()]);

    def.push(format!("impl {SCALE_BASE_TYPE_NAME} {{"));
    def.push(format!("{INDENT}pub const fn kind(self) -> {SCALE_KIND_NAME} {{"));
    def.push(format!("{INDENT}{INDENT}match self {{"));
    def.extend(class_names.iter().map(|class| {
        format!("{INDENT}{INDENT}{INDENT}Self::{class}(_) => {SCALE_KIND_NAME}::{class},")
    }));
    def.push(format!("{INDENT}{INDENT}}}"));
    def.push(format!("{INDENT}}}"));
    def.push("}".into());
    def.push(String::new());

    for class in class_names {
        def.extend([
            format!("impl From<{class}> for {SCALE_BASE_TYPE_NAME} {{"),
            format!("{INDENT}fn from(scale: {class}) -> Self {{"),
            format!("{INDENT}{INDENT}Self::{class}(scale)"),
            format!("{INDENT}}}"),
            "}".into(),
            String::new(),
        ]);
    }
    def
}

fn generate_scale_map(model: &Model) -> Vec<String> {
    let mut def = vec![format!(
        "pub const {SENSOR_TYPE_TO_SCALE_MAP_NAME}: &[({SENSOR_TYPE_NAME}, {SCALE_KIND_NAME})] = &["
    )];
    // Every sensor's group exists once the model is built
    def.extend(model.sensor_types.iter().map(|(token, sensor)| {
        let class = model.scale_groups[&sensor.scale_group].class_name();
        format!("{INDENT}({SENSOR_TYPE_NAME}::{token}, {SCALE_KIND_NAME}::{class}),")
    }));
    def.extend(["];".to_owned(), String::new()]);
    def
}

fn generate_unit_lists(units: &UnitIndex) -> Vec<String> {
    let mut def = vec![];
    for (unit_name, unit_enums) in units {
        def.push(format!(
            "pub const UNIT_{unit_name}: &[{SCALE_BASE_TYPE_NAME}] = &["
        ));
        def.extend(unit_enums.iter().map(|e| {
            format!(
                "{INDENT}{SCALE_BASE_TYPE_NAME}::{class}({class}::{member}),",
                class = e.class_name,
                member = e.member
            )
        }));
        def.push("];".into());
    }
    def
}

/// Autogenerated part of the constants file, up to and including the end marker block.
pub fn render(model: &Model, units: &UnitIndex, source: &SourceConfig) -> Vec<String> {
    let sensor_type_url = source.blob_url(&source.sensor_types_path);
    let mut lines = header();

    lines.extend(model.sensor_types.iter().map(|(token, sensor)| {
        format!(
            "pub const {token}_PROPERTY: &str = {};",
            string_literal(&sensor.label)
        )
    }));
    lines.push(String::new());

    lines.extend(generate_constant_type_definition(
        SENSOR_TYPE_NAME,
        model
            .sensor_types
            .iter()
            .map(|(token, sensor)| (token.as_str(), sensor.id)),
        Some(sensor_type_url.as_str()),
        "",
    ));

    let class_names = model
        .scale_groups
        .values()
        .map(|g| g.class_name())
        .collect_vec();
    lines.extend(generate_scale_base_types(&class_names));

    for (group, class_name) in model.scale_groups.values().zip(&class_names) {
        lines.extend(generate_constant_type_definition(
            class_name,
            group
                .entries
                .iter()
                .map(|(token, entry)| (token.as_str(), entry.id)),
            Some(sensor_type_url.as_str()),
            &format!("scales for {}", group.name),
        ));
    }

    lines.extend(generate_scale_map(model));
    lines.extend(generate_unit_lists(units));

    lines.push(String::new());
    lines.extend(END_BLOCK.iter().map(|l| l.to_string()));
    lines
}
