// src/error.rs

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The GET did not complete: connect failure, bad status, or a broken body.
    #[error("fetching {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A matched table row whose MCC cell is not a decimal integer.
    #[error("line {line}: MCC cell {value:?} is not a decimal integer")]
    Parse {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: expected `<mcc>:<CC>`, got {content:?}")]
    Malformed { line: usize, content: String },
}

pub type Result<T> = std::result::Result<T, Error>;
