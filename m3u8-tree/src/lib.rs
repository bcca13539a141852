//! # m3u8-tree
//! A library for parsing m3u8 (HLS, RFC 8216) playlists into an ordered
//! key/value tree, ready to be decoded into typed records.
//!
//! Every `#EXT` tag becomes a key (folded by a [`KeyDecodingStrategy`]),
//! every other non-empty line is collected under `uri`.
//!
//! # Example
//! ```rust
//! use m3u8_tree::{KeyDecodingStrategy, Parser, format::Value};
//!
//! // 1. Parse
//! let document =
//!     m3u8_tree::parse("#EXTM3U\n#EXT-X-VERSION:3\n#EXTINF:10.5,Intro\nintro.ts").unwrap();
//! assert_eq!(document.get("ext_x_version"), Some(&Value::Number(3.0)));
//!
//! let segments = document.get("extinf").and_then(Value::as_array).unwrap();
//! assert_eq!(segments[0].get("title").and_then(Value::as_str), Some("Intro"));
//! assert_eq!(document.uris().collect::<Vec<_>>(), vec!["intro.ts"]);
//!
//! // 2. Custom keys
//! let parser = Parser::with_key_decoding_strategy(KeyDecodingStrategy::custom(|name| {
//!     name.to_owned()
//! }));
//! let document = parser.parse("#EXT-X-ENDLIST").unwrap();
//! assert_eq!(document.get("EXT-X-ENDLIST"), Some(&Value::Bool(true)));
//!
//! // 3. Generate
//! println!("{}", document);
//! ```

mod attributes;
mod builder;
pub mod format;
mod key;
mod parser;
#[cfg(feature = "tokio")]
mod task;
pub use key::*;
pub use parser::*;
#[cfg(feature = "tokio")]
pub use task::*;

use crate::format::Document;

/// Parses `text` with the default snake case keys. `None` for an empty text.
pub fn parse(text: &str) -> Option<Document> {
    Parser::default().parse(text)
}
