use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Metadata of the image picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Inline `data:` URI for an `<img src>`.
pub fn data_uri(mime_type: &str, bytes: &[u8]) -> String {
    let mime_type = if mime_type.is_empty() {
        "application/octet-stream"
    } else {
        mime_type
    };
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_png_header() {
        let uri = data_uri("image/png", &[0x89, b'P', b'N', b'G']);
        assert_eq!(uri, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn unknown_type_falls_back_to_octet_stream() {
        assert_eq!(data_uri("", b"hi"), "data:application/octet-stream;base64,aGk=");
    }

    #[test]
    fn empty_file() {
        assert_eq!(data_uri("image/jpeg", &[]), "data:image/jpeg;base64,");
    }
}
