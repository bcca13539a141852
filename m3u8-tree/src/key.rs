use std::sync::Arc;

use derivative::Derivative;
use serde::Deserialize;
use smol_str::SmolStr;

/// Maps a raw tag or attribute name to a document key
pub type KeyMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// How tag and attribute names become document keys.
///
/// `SnakeCase` and `CamelCase` fold identically here (`EXT-X-STREAM-INF`
/// becomes `ext_x_stream_inf`); turning the snake case into camel case is
/// left to whoever decodes the document into typed records.
#[derive(Derivative, Clone, Default, Deserialize)]
#[derivative(Debug)]
#[serde(rename_all = "camelCase")]
pub enum KeyDecodingStrategy {
    #[default]
    SnakeCase,
    CamelCase,
    #[serde(skip)]
    Custom(#[derivative(Debug = "ignore")] KeyMapper),
}

impl KeyDecodingStrategy {
    pub fn custom(mapper: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(mapper))
    }

    pub fn key(&self, text: &str) -> SmolStr {
        match self {
            Self::SnakeCase | Self::CamelCase => text.to_lowercase().replace('-', "_").into(),
            Self::Custom(mapper) => mapper(text).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::KeyDecodingStrategy;

    #[test]
    fn test_snake_case() {
        let strategy = KeyDecodingStrategy::default();
        assert_eq!(strategy.key("EXT-X-STREAM-INF"), "ext_x_stream_inf");
        assert_eq!(strategy.key("BANDWIDTH"), "bandwidth");
        assert_eq!(strategy.key("GROUP-ID"), "group_id");
    }

    #[test]
    fn test_camel_case_folds_like_snake_case() {
        let strategy = KeyDecodingStrategy::CamelCase;
        assert_eq!(strategy.key("EXT-X-I-FRAME-STREAM-INF"), "ext_x_i_frame_stream_inf");
    }

    #[test]
    fn test_custom() {
        let strategy = KeyDecodingStrategy::custom(|text| text.replace('-', ""));
        assert_eq!(strategy.key("EXT-X-VERSION"), "EXTXVERSION");
        assert!(format!("{:?}", strategy).starts_with("Custom"));
    }

    #[test]
    fn test_deserialize() {
        let strategy: KeyDecodingStrategy = serde_yaml::from_str("camelCase").unwrap();
        assert!(matches!(strategy, KeyDecodingStrategy::CamelCase));

        let strategy: KeyDecodingStrategy = serde_yaml::from_str("snakeCase").unwrap();
        assert!(matches!(strategy, KeyDecodingStrategy::SnakeCase));

        assert!(serde_yaml::from_str::<KeyDecodingStrategy>("custom").is_err());
    }
}
