use crate::error::{AtsError, Result};
use clap::ValueEnum;
use std::path::Path;
use tracing::debug;

/// Declared media type of the input document. Scoring never sees this; it
/// only selects the extraction path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MediaType {
    Txt,
    Pdf,
}

impl MediaType {
    pub fn mime(self) -> &'static str {
        match self {
            MediaType::Txt => "text/plain",
            MediaType::Pdf => "application/pdf",
        }
    }

    /// Infers the media type from the file extension; anything that is not
    /// `.pdf` is treated as plain text.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => MediaType::Pdf,
            _ => MediaType::Txt,
        }
    }
}

/// Reads the document and yields lowercase-normalized text, the single
/// source of truth for all sub-scorers. Binary pdf extraction is an external
/// service, not part of this crate; declaring `pdf` is refused with a clear
/// error.
pub fn extract_text(path: &Path, media_type: MediaType) -> Result<String> {
    match media_type {
        MediaType::Txt => {
            let raw = std::fs::read_to_string(path)?;
            debug!(path = %path.display(), bytes = raw.len(), "extracted plain text");
            Ok(raw.to_lowercase())
        }
        MediaType::Pdf => Err(AtsError::UnsupportedMediaType(
            MediaType::Pdf.mime().to_string(),
        )),
    }
}
