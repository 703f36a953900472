use std::fs;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::model::Attachment;

/// Error type for attachment encoding and extraction
#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("attachment is not a base64 data URI")]
    MalformedUri,
    #[error("could not decode attachment payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Read a file and embed it as a self-describing data URI.
pub fn encode_file(path: &Path) -> Result<Attachment, AttachmentError> {
    let bytes = fs::read(path).map_err(|e| AttachmentError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("attachment")
        .to_string();

    Ok(Attachment {
        file_name,
        data_uri: format!(
            "data:{};base64,{}",
            mime_for_extension(&ext),
            STANDARD.encode(&bytes)
        ),
    })
}

/// Decode a data URI's payload back into raw bytes.
pub fn decode_data_uri(uri: &str) -> Result<Vec<u8>, AttachmentError> {
    let payload = uri
        .split_once(";base64,")
        .map(|(_, p)| p)
        .ok_or(AttachmentError::MalformedUri)?;
    Ok(STANDARD.decode(payload)?)
}

/// Write an attachment's payload into `dir` under its original file name.
/// Returns the path written.
pub fn save_to_dir(attachment: &Attachment, dir: &Path) -> Result<PathBuf, AttachmentError> {
    let bytes = decode_data_uri(&attachment.data_uri)?;
    let path = dir.join(&attachment.file_name);
    fs::write(&path, bytes).map_err(|e| AttachmentError::Write {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" | "md" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MediaKind;
    use tempfile::TempDir;

    #[test]
    fn encode_detects_image_mime() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("shot.PNG");
        fs::write(&path, b"fake png bytes").unwrap();

        let attachment = encode_file(&path).unwrap();
        assert_eq!(attachment.file_name, "shot.PNG");
        assert!(attachment.data_uri.starts_with("data:image/png;base64,"));
        assert_eq!(attachment.media_kind(), MediaKind::Image);
    }

    #[test]
    fn unknown_extension_is_a_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("build.tar");
        fs::write(&path, b"tarball").unwrap();

        let attachment = encode_file(&path).unwrap();
        assert!(
            attachment
                .data_uri
                .starts_with("data:application/octet-stream;base64,")
        );
        assert_eq!(attachment.media_kind(), MediaKind::Document);
    }

    #[test]
    fn encode_then_extract_round_trips_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("spec.pdf");
        fs::write(&path, b"%PDF-1.4 content").unwrap();

        let attachment = encode_file(&path).unwrap();
        let out_dir = TempDir::new().unwrap();
        let written = save_to_dir(&attachment, out_dir.path()).unwrap();

        assert_eq!(written, out_dir.path().join("spec.pdf"));
        assert_eq!(fs::read(&written).unwrap(), b"%PDF-1.4 content");
    }

    #[test]
    fn decode_rejects_non_data_uri() {
        assert!(decode_data_uri("https://example.com/file.png").is_err());
    }

    #[test]
    fn encode_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(encode_file(&dir.path().join("absent.png")).is_err());
    }
}
