use std::io::{Read as _, Write as _};
use std::path::Path;

use serde::Deserialize as _;

use crate::foundation::core::Document;
use crate::foundation::error::{GradsyncError, GradsyncResult};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// On-disk wrapping of an animation document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// Plain UTF-8 JSON (`.json`).
    Json,
    /// Gzip-compressed JSON (`.tgs`).
    Tgs,
}

impl Container {
    /// Pick the container for `bytes`. Gzip magic wins; otherwise a `.tgs`
    /// extension on `path_hint` selects [`Container::Tgs`].
    pub fn detect(bytes: &[u8], path_hint: Option<&Path>) -> Self {
        if bytes.starts_with(&GZIP_MAGIC) {
            return Self::Tgs;
        }
        match path_hint {
            Some(p) if Self::from_path(p) == Some(Self::Tgs) => Self::Tgs,
            _ => Self::Json,
        }
    }

    /// Container implied by a file extension, if recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "tgs" => Some(Self::Tgs),
            _ => None,
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Tgs => "tgs",
        }
    }
}

/// Decode container bytes into a document, auto-detecting gzip.
pub fn decode_document(bytes: &[u8]) -> GradsyncResult<Document> {
    decode_document_as(bytes, Container::detect(bytes, None))
}

/// Decode container bytes with an explicit container.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_document_as(bytes: &[u8], container: Container) -> GradsyncResult<Document> {
    match container {
        Container::Json => parse_json(bytes),
        Container::Tgs => {
            let mut json = Vec::new();
            flate2::read::GzDecoder::new(bytes)
                .read_to_end(&mut json)
                .map_err(|e| GradsyncError::decode(format!("gzip stream: {e}")))?;
            parse_json(&json)
        }
    }
}

// Animation trees nest far deeper than serde_json's default limit of 128 levels.
fn parse_json(bytes: &[u8]) -> GradsyncResult<Document> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let doc = Document::deserialize(&mut de)
        .and_then(|doc| de.end().map(|()| doc))
        .map_err(|e| GradsyncError::decode(format!("json: {e}")))?;
    Ok(doc)
}

/// Encode a document as compact JSON, gzip-compressed for [`Container::Tgs`].
#[tracing::instrument(skip(doc))]
pub fn encode_document(doc: &Document, container: Container) -> GradsyncResult<Vec<u8>> {
    let json = serde_json::to_vec(doc).map_err(|e| GradsyncError::serde(e.to_string()))?;
    match container {
        Container::Json => Ok(json),
        Container::Tgs => {
            let mut enc =
                flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
            enc.write_all(&json)
                .map_err(|e| GradsyncError::serde(format!("gzip encode: {e}")))?;
            enc.finish()
                .map_err(|e| GradsyncError::serde(format!("gzip encode: {e}")))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/container/codec.rs"]
mod tests;
