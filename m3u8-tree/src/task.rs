use std::{error::Error, fmt::Display};

use tokio::task::JoinError;

use crate::{Parser, format::Document};

#[derive(Debug)]
pub enum ParseTaskError {
    JoinError(JoinError),
}

impl Display for ParseTaskError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::JoinError(e) => e.fmt(f),
        }
    }
}

impl Error for ParseTaskError {}

impl From<JoinError> for ParseTaskError {
    fn from(value: JoinError) -> Self {
        Self::JoinError(value)
    }
}

/// Runs [`Parser::parse`] on tokio's blocking pool, keeping large
/// playlists off the async workers.
pub async fn parse_async(
    text: impl Into<String>,
    parser: Parser,
) -> Result<Option<Document>, ParseTaskError> {
    let text = text.into();
    Ok(tokio::task::spawn_blocking(move || parser.parse(&text)).await?)
}
