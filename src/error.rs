// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between raw input and written fixtures.
///
/// All variants are local to one generation run; nothing is written to disk
/// once any of them has been raised.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// Fewer than two players in a box. No fixtures are produced.
    #[error("Not enough players ({found}) provided to create fixtures; at least 2 are required")]
    InsufficientPlayers { found: usize },

    /// A round, box or player token that is not an integer.
    #[error("Invalid {field} id: {token:?} is not an integer")]
    InvalidId { field: &'static str, token: String },

    /// A required id was left blank.
    #[error("Missing {0} id")]
    MissingValue(&'static str),

    /// Target table is not a plain or dotted SQL identifier.
    #[error("Invalid table name: {0:?}")]
    InvalidTable(String),

    /// The same box appears twice in one round plan.
    #[error("Box {0} appears more than once in the plan")]
    DuplicateBox(i64),

    /// A round plan has nothing to generate.
    #[error("Plan contains no boxes")]
    EmptyPlan,

    /// Error inside a round plan, tagged with the 1-based line it came from.
    #[error("Plan line {line}: {source}")]
    Plan {
        line: usize,
        #[source]
        source: Box<FixtureError>,
    },

    /// Output path field left blank.
    #[error("Missing output path")]
    EmptyPath,

    /// Output path exists but is a file where a directory is needed.
    #[error("Path exists but is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FixtureError>;
