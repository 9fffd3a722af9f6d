//! Data URL ユーティリティ
//!
//! ブラウザの `FileReader.readAsDataURL` と同じ形式
//! (`data:<media type>;base64,<payload>`) を扱う。

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";

/// バイト列をData URLに変換
pub fn encode(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

/// 拡張子からメディアタイプを推定（内容の検証はしない）
pub fn media_type_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "avif" => "image/avif",
        _ => FALLBACK_MEDIA_TYPE,
    }
}

/// Data URLからメディアタイプ部分を取り出す
pub fn media_type(data_url: &str) -> Option<&str> {
    let header = data_url.strip_prefix("data:")?.split(',').next()?;
    let media_type = header.split(';').next()?;
    if media_type.is_empty() {
        None
    } else {
        Some(media_type)
    }
}

/// ペイロードのおおよそのバイト数
pub fn payload_len(data_url: &str) -> Option<usize> {
    let (_, payload) = data_url.split_once(',')?;
    Some(payload.len() / 4 * 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("image/png", b"abc"), "data:image/png;base64,YWJj");
        assert_eq!(encode("image/png", b""), "data:image/png;base64,");
    }

    #[test]
    fn test_media_type_for_path() {
        assert_eq!(media_type_for_path(Path::new("hydra.JPG")), "image/jpeg");
        assert_eq!(media_type_for_path(Path::new("dir/volvox.png")), "image/png");
        assert_eq!(media_type_for_path(Path::new("notes.txt")), "application/octet-stream");
        assert_eq!(media_type_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("data:image/jpeg;base64,AAAA"), Some("image/jpeg"));
        assert_eq!(media_type("data:;base64,AAAA"), None);
        assert_eq!(media_type("https://via.placeholder.com/300x200"), None);
    }

    #[test]
    fn test_payload_len() {
        assert_eq!(payload_len("data:image/png;base64,YWJj"), Some(3));
        assert_eq!(payload_len("garbage"), None);
    }
}
