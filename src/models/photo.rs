use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::Path;

/// Largest picture accepted for the photo sheet.
pub const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// A client picture kept base64-encoded in the `fotos` side sheet.
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: i64,
    pub client_key: String,
    pub file_name: String,
    pub mime: String,
    pub data_b64: String,
    pub created_at: String,
}

impl Photo {
    pub fn from_bytes(client_key: &str, file_name: &str, mime: &str, bytes: &[u8]) -> Self {
        Self {
            id: 0,
            client_key: client_key.to_string(),
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            data_b64: STANDARD.encode(bytes),
            created_at: chrono::Local::now().to_rfc3339(),
        }
    }

    /// `data:` URI embeddable in an `<img>` tag.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.data_b64)
    }

    pub fn decoded(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.data_b64)
    }
}

/// MIME type from the file extension, `None` for unsupported formats.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}
