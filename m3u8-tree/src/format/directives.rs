//! Tag and attribute names the parser treats specially.

/// Every tag line starts with this prefix, anything else is a URI line
pub const EXT_PREFIX: &str = "#EXT";

pub const EXTINF: &str = "EXTINF";
pub const EXT_X_BYTERANGE: &str = "EXT-X-BYTERANGE";
pub const EXT_X_MEDIA: &str = "EXT-X-MEDIA";
pub const EXT_X_STREAM_INF: &str = "EXT-X-STREAM-INF";
pub const EXT_X_I_FRAME_STREAM_INF: &str = "EXT-X-I-FRAME-STREAM-INF";

// attribute names with a positional grammar
pub const BYTERANGE: &str = "BYTERANGE";
pub const RESOLUTION: &str = "RESOLUTION";

/// Key holding the non-tag lines of a playlist
pub const URI_KEY: &str = "uri";

/// Tags which may legally repeat, so they are stored as arrays from
/// their first occurrence on.
pub const ARRAY_TAGS: [&str; 5] = [
    EXTINF,
    EXT_X_BYTERANGE, // Media playlist
    EXT_X_MEDIA,
    EXT_X_STREAM_INF,
    EXT_X_I_FRAME_STREAM_INF, // Master playlist
];

pub fn is_array_tag(tag: &str) -> bool {
    ARRAY_TAGS.contains(&tag)
}
