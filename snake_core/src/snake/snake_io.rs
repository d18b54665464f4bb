use crate::snake::error::Result;
use std::path::Path;

/// Reads whitespace-separated hex messages from a file.
pub async fn read_messages(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let contents = tokio::fs::read_to_string(path).await?;
    Ok(split_messages(&contents))
}

pub fn split_messages(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_owned).collect()
}
