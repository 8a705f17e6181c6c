/// Root prefix for image tokens given as bare filenames.
pub const MEDIA_ROOT: &str = "/media/";

/// Resolve an image token to an asset path. Absolute paths pass through;
/// anything else resolves under the media root.
pub fn media_source(raw: &str) -> String {
    if raw.starts_with('/') {
        raw.to_string()
    } else {
        format!("{}{}", MEDIA_ROOT, raw)
    }
}
