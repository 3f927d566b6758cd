use crate::{entities::resume::ResumeDocument, errors::RenderError};

use super::ResumeRenderer;

/// Serializes the document tree as pretty-printed JSON for a client-side
/// PDF renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResumeRenderer;

impl ResumeRenderer for JsonResumeRenderer {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn extension(&self) -> &'static str {
        "json"
    }

    fn render(&self, document: &ResumeDocument) -> Result<Vec<u8>, RenderError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        tracing::debug!(bytes = bytes.len(), "Rendered resume document as JSON");
        Ok(bytes)
    }
}
