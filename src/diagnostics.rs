use crate::tokenizer::Token;
use std::io::{self, Write};
use tracing::warn;

/// A token that breaks the output invariant. Never produced by a correct
/// tokenizer; test mode looks for them anyway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Anomaly {
    Empty { index: usize },
    Whitespace { index: usize, token: String },
}

/// Scan `tokens` for empty or whitespace-only entries.
pub fn inspect<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> Vec<Anomaly> {
    tokens
        .into_iter()
        .enumerate()
        .filter_map(|(index, token)| {
            let text = token.as_str();
            if text.is_empty() {
                Some(Anomaly::Empty { index })
            } else if text.chars().all(char::is_whitespace) {
                Some(Anomaly::Whitespace {
                    index,
                    token: text.to_string(),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Print the raw input followed by one line per anomaly.
pub fn report<W: Write>(out: &mut W, content: &str, anomalies: &[Anomaly]) -> io::Result<()> {
    writeln!(out, "Input content:\n{}", content)?;

    for anomaly in anomalies {
        match anomaly {
            Anomaly::Empty { index } => {
                warn!(index, "empty token");
                writeln!(out, "Empty string as word detected")?;
            }
            Anomaly::Whitespace { index, token } => {
                warn!(index, ?token, "whitespace token");
                writeln!(out, "Whitespace detected: {}", token)?;
            }
        }
    }

    Ok(())
}
