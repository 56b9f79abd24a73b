//! Persona registry.
//!
//! Presets live in one file each and are registered here in display order.
//! The first entry is the default persona.

pub mod analyst;
pub mod companion;
pub mod spark;
pub mod strategist;

use crate::models::personas::PersonaPreset;

static PERSONAS: [PersonaPreset; 4] = [
    companion::PRESET,
    strategist::PRESET,
    spark::PRESET,
    analyst::PRESET,
];

/// All registered personas in registration order.
pub fn all() -> &'static [PersonaPreset] {
    &PERSONAS
}

/// The persona used when a request names none, or one we don't know.
pub fn default_persona() -> &'static PersonaPreset {
    &PERSONAS[0]
}

/// Strict lookup by exact identifier.
pub fn find(id: &str) -> Option<&'static PersonaPreset> {
    PERSONAS.iter().find(|persona| persona.id == id)
}

/// Central lookup for agent personas.
///
/// Returns the persona whose id equals `id`, falling back to the default
/// persona if the id is not recognized or not provided. Never fails.
pub fn get_persona(id: Option<&str>) -> &'static PersonaPreset {
    id.and_then(find).unwrap_or_else(default_persona)
}
