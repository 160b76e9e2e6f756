use crate::config::{Config, OutputTarget};
use crate::diagnostics;
use crate::error::AppError;
use crate::input;
use crate::output::TokenSink;
use crate::tokenizer::{tokenize, Tokens};
use std::io::{self, Write};
use tracing::{debug, info};

/// Load the configured input, tokenize it and write the token lines.
///
/// Returns the number of tokens written. The output destination is only
/// opened once the input has been loaded, so a bad input never creates or
/// touches the output file.
pub fn run(config: &Config) -> Result<usize, AppError> {
    let doc = input::load(&config.input)?;
    info!(source = %doc.source, bytes = doc.content.len(), "input loaded");

    let mut sink = TokenSink::open(&config.output).map_err(|source| match &config.output {
        OutputTarget::File(path) => AppError::OutputOpen {
            path: path.clone(),
            source,
        },
        OutputTarget::Stdout => AppError::Write(source),
    })?;

    let count = process(&doc.content, config.test_mode, &mut sink, &mut io::stdout())?;
    sink.finish().map_err(AppError::Write)?;

    info!(count, "tokens written");
    Ok(count)
}

/// Tokenize `content` into `sink`.
///
/// In test mode the input and any anomalous tokens are reported to `diag`
/// before the first token line is written.
pub fn process<O: Write, D: Write>(
    content: &str,
    test_mode: bool,
    sink: &mut TokenSink<O>,
    diag: &mut D,
) -> Result<usize, AppError> {
    if !test_mode {
        return sink
            .write_all(Tokens::new(content.chars()))
            .map_err(AppError::Write);
    }

    let tokens = tokenize(content);
    let anomalies = diagnostics::inspect(&tokens);
    debug!(tokens = tokens.len(), anomalies = anomalies.len(), "test mode inspection");

    diagnostics::report(diag, content, &anomalies)
        .and_then(|()| diag.flush())
        .map_err(AppError::Write)?;

    sink.write_all(&tokens).map_err(AppError::Write)
}
