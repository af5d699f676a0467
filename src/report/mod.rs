pub mod json;
pub mod md;
pub mod text;

use crate::error::AtsError;
use crate::types::report::Analysis;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Md,
    Json,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String, AtsError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(analysis)),
        OutputFormat::Md => Ok(md::to_markdown(analysis)),
        OutputFormat::Json => json::to_json(analysis).map_err(AtsError::Json),
    }
}
