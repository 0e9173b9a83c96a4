//! Preset struct definition.

use serde::{Deserialize, Deserializer};

/// Pre-filled deployment fields, from a YAML file or from CLI flags.
///
/// `None` means "ask the operator". `Some("")` is a real (empty) answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub region: Option<String>,
    /// Account IDs are usually written unquoted, so integers are accepted.
    #[serde(deserialize_with = "string_or_integer")]
    pub account_id: Option<String>,
    pub function_name: Option<String>,
    pub repo_name: Option<String>,
    #[serde(deserialize_with = "string_or_integer")]
    pub image_tag: Option<String>,
    pub dockerfile_path: Option<String>,
    pub role_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

fn string_or_integer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
    }))
}
