use crate::{entities::resume::ResumeDocument, errors::RenderError};

pub mod json;

/// Downstream backend that turns the résumé tree into downloadable bytes.
pub trait ResumeRenderer: Send + Sync {
    fn content_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn render(&self, document: &ResumeDocument) -> Result<Vec<u8>, RenderError>;

    /// `<Name>_Resume.<ext>`
    fn file_name(&self, document: &ResumeDocument) -> String {
        format!("{}.{}", document.file_stem, self.extension())
    }
}
