use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PersonaTone {
    Warm,
    Direct,
    Playful,
    Analytical,
}

/// A named behavioral configuration for the assistant.
///
/// Presets are compiled into the binary and never change at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonaPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Base instructions placed at the top of every system prompt
    pub instructions: &'static str,
    pub strengths: &'static [&'static str],
    pub tone: PersonaTone,
    /// Presentation hint for the browser, opaque to the server
    #[serde(rename = "gradient")]
    pub accent: &'static str,
}
