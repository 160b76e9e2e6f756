use crate::config::OutputTarget;
use crate::tokenizer::Token;
use std::borrow::Borrow;
use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

/// Writes tokens one per line, each terminated by `\n`.
pub struct TokenSink<W: Write> {
    writer: BufWriter<W>,
}

impl TokenSink<Box<dyn Write>> {
    /// Open the configured destination. Files are appended to, never
    /// truncated.
    pub fn open(target: &OutputTarget) -> io::Result<Self> {
        let writer: Box<dyn Write> = match target {
            OutputTarget::Stdout => Box::new(io::stdout().lock()),
            OutputTarget::File(path) => Box::new(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)?,
            ),
        };
        Ok(Self::new(writer))
    }
}

impl<W: Write> TokenSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    pub fn write_token(&mut self, token: &Token) -> io::Result<()> {
        self.writer.write_all(token.as_str().as_bytes())?;
        self.writer.write_all(b"\n")
    }

    /// Write every token, returning how many were written.
    pub fn write_all<T: Borrow<Token>>(
        &mut self,
        tokens: impl IntoIterator<Item = T>,
    ) -> io::Result<usize> {
        let mut count = 0;
        for token in tokens {
            self.write_token(token.borrow())?;
            count += 1;
        }
        Ok(count)
    }

    /// Flush buffered lines and hand back the underlying writer.
    pub fn finish(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
