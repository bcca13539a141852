use std::collections::HashMap;

use lazy_static::lazy_static;
use log::trace;
use regex::Regex;

use crate::{
    KeyDecodingStrategy,
    format::{Object, Value, directives},
};

/// Parser for a payload with a positional grammar. `None` means the
/// payload does not follow the grammar.
pub(crate) type StructuredGrammar = fn(&str) -> Option<Object>;

/// Only shorter texts are considered for numbers and booleans, longer
/// ones (hashes, URLs, dates) stay strings.
pub(crate) const SCALAR_LEN_LIMIT: usize = 10;

const BOOL_VALUES: [&str; 2] = ["YES", "NO"];

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new(r#"([^=,]+)=(("([^"]+)")|([^,]+))"#).expect("Regular expression error");
    static ref EXTINF_REGEX: Regex = Regex::new("^([^,]+),(.*)$").expect("Regular expression error");
    static ref BYTERANGE_REGEX: Regex =
        Regex::new(r"^(\d+)@?(\d*)$").expect("Regular expression error");
    static ref RESOLUTION_REGEX: Regex =
        Regex::new(r"^(\d+)x(\d+)$").expect("Regular expression error");
    static ref STRUCTURED_GRAMMARS: HashMap<&'static str, StructuredGrammar> = HashMap::from([
        (directives::EXTINF, parse_extinf as StructuredGrammar),
        (directives::EXT_X_BYTERANGE, parse_byterange as StructuredGrammar),
        (directives::BYTERANGE, parse_byterange as StructuredGrammar),
        (directives::RESOLUTION, parse_resolution as StructuredGrammar),
    ]);
}

/// Turns the payload of `tag` into a value: `true` for an empty payload,
/// then the tag's positional grammar, then an attribute list, then a
/// single scalar.
pub(crate) fn parse_payload(tag: &str, payload: &str, keys: &KeyDecodingStrategy) -> Value {
    if payload.is_empty() {
        return Value::Bool(true);
    }

    if let Some(object) = parse_structured(tag, payload) {
        return Value::Object(object);
    }

    let attributes = parse_attribute_list(payload, keys);
    if attributes.is_empty() {
        coerce_scalar(payload)
    } else {
        Value::Object(attributes)
    }
}

pub(crate) fn parse_structured(name: &str, value: &str) -> Option<Object> {
    let grammar = STRUCTURED_GRAMMARS.get(name)?;
    let result = grammar(value);
    if result.is_none() {
        trace!("{:?} does not match the {} grammar", value, name);
    }

    result
}

/// `NAME=VALUE` pairs separated by commas; quoted values may contain commas.
/// Pairs that do not match are dropped.
fn parse_attribute_list(payload: &str, keys: &KeyDecodingStrategy) -> Object {
    let mut result = Object::new();
    for captures in ATTRIBUTE_REGEX.captures_iter(payload) {
        let (Some(name), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };

        let name = name.as_str();
        let value = value.as_str().trim_matches('"');
        let value = match parse_structured(name, value) {
            Some(object) => Value::Object(object),
            None => coerce_scalar(value),
        };

        result.insert(keys.key(name), value);
    }

    result
}

// #EXTINF:<duration>,[<title>]
// https://datatracker.ietf.org/doc/html/rfc8216#section-4.3.2.1
fn parse_extinf(value: &str) -> Option<Object> {
    let (_, [duration, title]) = EXTINF_REGEX.captures(value)?.extract();

    let mut result = Object::new();
    result.insert("duration", coerce_scalar(duration));
    if !title.is_empty() {
        result.insert("title", Value::String(title.into()));
    }

    Some(result)
}

// #EXT-X-BYTERANGE:<n>[@<o>]
// https://datatracker.ietf.org/doc/html/rfc8216#section-4.3.2.2
fn parse_byterange(value: &str) -> Option<Object> {
    let (_, [length, start]) = BYTERANGE_REGEX.captures(value)?.extract();

    let mut result = Object::new();
    result.insert("length", coerce_scalar(length));
    if !start.is_empty() {
        result.insert("start", coerce_scalar(start));
    }

    Some(result)
}

// RESOLUTION=<width>x<height>
fn parse_resolution(value: &str) -> Option<Object> {
    let (_, [width, height]) = RESOLUTION_REGEX.captures(value)?.extract();

    let mut result = Object::new();
    result.insert("width", coerce_scalar(width));
    result.insert("height", coerce_scalar(height));

    Some(result)
}

/// Short decimal literals become numbers, `YES`/`NO` become booleans,
/// everything else is kept as text.
pub(crate) fn coerce_scalar(text: &str) -> Value {
    if text.chars().count() >= SCALAR_LEN_LIMIT {
        return Value::String(text.into());
    }

    if let Some(number) = text.parse::<f64>().ok().filter(|x| x.is_finite()) {
        return Value::Number(number);
    }

    if BOOL_VALUES.contains(&text) {
        return Value::Bool(text == "YES");
    }

    Value::String(text.into())
}
