use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Regex;
use serde::Deserialize;

use crate::{
    KeyDecodingStrategy,
    attributes::parse_payload,
    format::{Document, directives},
};

lazy_static! {
    static ref TAG_REGEX: Regex = Regex::new("^#(EXT[^:]+):?(.*)$").expect("Regular expression error");
}

/// Options of a [`Parser`], deserializable from a host application's config
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParserConfig {
    pub key_decoding_strategy: KeyDecodingStrategy,
}

#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn with_key_decoding_strategy(key_decoding_strategy: KeyDecodingStrategy) -> Self {
        Self::new(ParserConfig {
            key_decoding_strategy,
        })
    }

    /// Parses a whole playlist in one forward pass.
    ///
    /// Returns `None` for an empty text. Malformed lines never fail the
    /// parse, they are skipped or kept in a less structured form.
    pub fn parse(&self, text: &str) -> Option<Document> {
        if text.is_empty() {
            return None;
        }

        let mut document = Document::new();
        let mut line_count = 0;
        for line in text.split(is_newline) {
            line_count += 1;
            match Line::classify(line) {
                Line::Blank => {}
                Line::Uri(uri) => document.push_uri(uri),
                Line::Tag(tag_line) => self.parse_tag_line(tag_line, &mut document),
            }
        }

        debug!("Parsed {} lines into {} keys", line_count, document.len());
        Some(document)
    }

    fn parse_tag_line(&self, line: &str, document: &mut Document) {
        let Some((tag, payload)) = extract_tag(line) else {
            trace!("Skipping malformed tag line {:?}", line);
            return;
        };

        let strategy = &self.config.key_decoding_strategy;
        let value = parse_payload(tag, payload, strategy);
        document.merge(strategy.key(tag), value, directives::is_array_tag(tag));
    }
}

enum Line<'a> {
    Blank,
    Tag(&'a str),
    Uri(&'a str),
}

impl<'a> Line<'a> {
    fn classify(line: &'a str) -> Self {
        if line.is_empty() {
            Self::Blank
        } else if line.starts_with(directives::EXT_PREFIX) {
            Self::Tag(line)
        } else {
            Self::Uri(line)
        }
    }
}

fn is_newline(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Splits `#<TAG>[:<payload>]` into tag name and payload
fn extract_tag(line: &str) -> Option<(&str, &str)> {
    let (_, [tag, payload]) = TAG_REGEX.captures(line)?.extract();
    Some((tag, payload))
}
