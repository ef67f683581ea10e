use std::path::Path;

use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Reads a newline-delimited word list into memory, in file order.
///
/// Trailing newlines and carriage returns are stripped and blank lines
/// are skipped. The returned vector grows with the file; there is no
/// capacity cap.
pub async fn read_dictionary(path: impl AsRef<Path>) -> anyhow::Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .await
        .with_context(|| format!("Open dictionary file {}", path.display()))?;

    let mut lines = BufReader::new(file).lines();
    let mut words = Vec::new();
    while let Some(line) = lines
        .next_line()
        .await
        .with_context(|| format!("Read line from {}", path.display()))?
    {
        let word = line.trim_end_matches('\r');
        if word.is_empty() {
            continue;
        }
        words.push(word.to_string());
    }

    Ok(words)
}
