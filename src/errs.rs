use ir_lexer::TextLocation;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("could not read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read standard input: {0}")]
    ReadStdin(#[source] io::Error),
    #[error("could not write tokens: {0}")]
    Write(#[from] io::Error),
    #[error("invalid token at {0}")]
    InvalidToken(TextLocation),
}

pub type CliResult<T> = Result<T, CliError>;
