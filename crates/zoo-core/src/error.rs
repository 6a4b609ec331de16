use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),

    #[error("Invalid arrival date: {0}")]
    InvalidDate(#[from] chrono::ParseError),
}
