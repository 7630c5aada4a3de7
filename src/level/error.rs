use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LevelError {
    #[error("Invalid character '{character}' at line {line}, column {column}")]
    InvalidCharacter {
        character: char,
        line: usize,
        column: usize,
    },

    #[error("No player exists in this level")]
    NoPlayer,

    #[error("Second player at line {line}, column {column} (first player at line {first_line}, column {first_column})")]
    MultiplePlayers {
        first_line: usize,
        first_column: usize,
        line: usize,
        column: usize,
    },

    #[error("Level contains no rows")]
    Empty,

    #[error("Could not read level file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErrorKind {
    /// The text contains a symbol outside the level alphabet.
    Format,
    /// The symbols are valid but do not describe a playable level.
    Structural,
    Io,
}

impl LevelError {
    pub fn kind(&self) -> LevelErrorKind {
        match self {
            LevelError::InvalidCharacter { .. } => LevelErrorKind::Format,
            LevelError::NoPlayer | LevelError::MultiplePlayers { .. } | LevelError::Empty => {
                LevelErrorKind::Structural
            }
            LevelError::Io { .. } => LevelErrorKind::Io,
        }
    }
}
