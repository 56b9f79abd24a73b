//! Persona handlers
//!
//! Read-only views of the persona registry for the persona picker.

use crate::agents;
use crate::error::{Error, Result};
use crate::models::personas::PersonaPreset;
use axum::extract::Path;
use axum::Json;

/// Lists every persona in registration order; the first one is the default.
pub async fn list_personas() -> Json<&'static [PersonaPreset]> {
    Json(agents::all())
}

/// Returns a single persona by exact id.
///
/// Unlike chat requests, an unknown id here is a 404 rather than a fallback.
pub async fn get_persona_by_id(Path(id): Path<String>) -> Result<Json<&'static PersonaPreset>> {
    agents::find(&id)
        .map(Json)
        .ok_or_else(|| Error::NotFound(format!("Persona '{}' not found", id)))
}
