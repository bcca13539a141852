use std::{
    fmt::{Display, Formatter, Result},
    slice::from_ref,
};

use crate::{
    attributes::{SCALAR_LEN_LIMIT, parse_structured},
    format::{Document, Object, Value, directives},
};

/// Writes the document back as playlist text.
///
/// Keys are turned back into tag names by uppercasing them and replacing
/// `_` with `-`, which inverts the default key folding only. Tags are
/// grouped by key, so parsing the output yields an equal document rather
/// than the original text.
impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (key, value) in self.iter() {
            if key == directives::URI_KEY {
                for uri in items(value) {
                    writeln!(f, "{}", scalar_text(uri))?;
                }
                continue;
            }

            let tag = tag_name(key);
            for item in items(value) {
                write_tag(f, &tag, item)?;
            }
        }

        Ok(())
    }
}

fn items(value: &Value) -> &[Value] {
    match value {
        Value::Array(items) => items,
        other => from_ref(other),
    }
}

fn tag_name(key: &str) -> String {
    key.to_uppercase().replace('_', "-")
}

fn write_tag(f: &mut Formatter<'_>, tag: &str, value: &Value) -> Result {
    match value {
        Value::Bool(true) => writeln!(f, "#{}", tag),
        Value::Object(object) => match structured_text(tag, object) {
            Some(text) => writeln!(f, "#{}:{}", tag, text),
            None => {
                write!(f, "#{}:", tag)?;
                write_attribute_list(f, object)?;
                writeln!(f)
            }
        },
        other => writeln!(f, "#{}:{}", tag, scalar_text(other)),
    }
}

fn write_attribute_list(f: &mut Formatter<'_>, object: &Object) -> Result {
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }

        let name = tag_name(key);
        match value {
            Value::Object(nested) => write!(
                f,
                "{}={}",
                name,
                structured_text(&name, nested).unwrap_or_default()
            )?,
            // quotes keep commas inside the value
            Value::String(text) if !text.contains('"') => write!(f, "{}=\"{}\"", name, text)?,
            other => write!(f, "{}={}", name, scalar_text(other))?,
        }
    }

    Ok(())
}

/// Renders objects in the positional grammar of `name`. `None` unless the
/// text parses back to the same object.
fn structured_text(name: &str, object: &Object) -> Option<String> {
    let text = positional_text(name, object)?;
    parse_structured(name, &text)
        .filter(|parsed| parsed == object)
        .map(|_| text)
}

fn positional_text(name: &str, object: &Object) -> Option<String> {
    match name {
        directives::EXTINF if only_keys(object, &["duration", "title"]) => {
            let duration = object.get("duration")?;
            let title = object.get("title").map(scalar_text).unwrap_or_default();
            Some(format!("{},{}", scalar_text(duration), title))
        }
        directives::EXT_X_BYTERANGE | directives::BYTERANGE
            if only_keys(object, &["length", "start"]) =>
        {
            let length = scalar_text(object.get("length")?);
            match object.get("start") {
                Some(start) => Some(format!("{}@{}", length, scalar_text(start))),
                None => Some(length),
            }
        }
        directives::RESOLUTION if only_keys(object, &["width", "height"]) => Some(format!(
            "{}x{}",
            scalar_text(object.get("width")?),
            scalar_text(object.get("height")?)
        )),
        _ => None,
    }
}

fn only_keys(object: &Object, allowed: &[&str]) -> bool {
    object.keys().all(|key| allowed.contains(&key))
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Bool(true) => "YES".into(),
        Value::Bool(false) => "NO".into(),
        Value::Number(number) => number_text(*number),
        Value::String(text) => text.to_string(),
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

/// Long plain forms would be read back as strings, so those use exponent notation
fn number_text(number: f64) -> String {
    let text = number.to_string();
    if text.chars().count() < SCALAR_LEN_LIMIT {
        text
    } else {
        format!("{:e}", number)
    }
}
