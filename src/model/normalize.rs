use deunicode::deunicode;
use heck::{ToPascalCase, ToTitleCase};
use once_cell::sync::Lazy;
use regex::Regex;

const SEPARATOR: &str = "_";
const CLASS_NAME_SUFFIX: &str = "Scale";

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static DISALLOWED_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

pub fn remove_parenthesis(text: &str) -> String {
    PARENTHESIZED.replace_all(text, "").into_owned()
}

// "1,000" reads as one number, not two words
fn remove_digit_group_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            !(c == ','
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit))
        })
        .map(|(_, &c)| c)
        .collect()
}

pub fn slugify(text: &str) -> String {
    let text = deunicode(text).to_lowercase();
    let text = remove_digit_group_commas(&text);
    DISALLOWED_CHARS
        .replace_all(&text, SEPARATOR)
        .trim_matches('_')
        .to_owned()
}

/// Constant-style token for a label, e.g. `"Air temperature"` -> `AIR_TEMPERATURE`.
pub fn enum_name_format(label: &str, should_remove_parenthesis: bool) -> String {
    let label = if should_remove_parenthesis {
        remove_parenthesis(label)
    } else {
        label.to_owned()
    };
    slugify(&label).to_uppercase()
}

/// Readable name used to key scale groups, e.g. `"airPressure"` -> `"Airpressure"`.
pub fn display_name(label: &str) -> String {
    enum_name_format(label, true).to_title_case()
}

pub fn class_name(group_name: &str) -> String {
    format!(
        "{}{CLASS_NAME_SUFFIX}",
        enum_name_format(group_name, true).to_pascal_case()
    )
}

pub fn is_valid_identifier(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
}

/// Decides per sensor id whether parenthesized text is dropped from its label.
#[derive(Clone, Debug, Default)]
pub struct SensorNameRules {
    parenthesis_preserving_ids: Vec<u8>,
}

impl SensorNameRules {
    pub fn new(parenthesis_preserving_ids: impl Into<Vec<u8>>) -> Self {
        SensorNameRules {
            parenthesis_preserving_ids: parenthesis_preserving_ids.into(),
        }
    }

    pub fn strips_parenthesis(&self, sensor_id: u8) -> bool {
        !self.parenthesis_preserving_ids.contains(&sensor_id)
    }

    pub fn sensor_token(&self, sensor_id: u8, label: &str) -> String {
        enum_name_format(label, self.strips_parenthesis(sensor_id))
    }
}
