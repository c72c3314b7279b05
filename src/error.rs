use thiserror::Error;

use crate::graphs::Junction;

#[derive(Debug, Error)]
pub enum Error {
    #[error("source junction {junction} is out of range for a network of {junctions} junctions")]
    InvalidSource { junction: Junction, junctions: u32 },

    #[error("junction {junction} is out of range for a network of {junctions} junctions")]
    InvalidJunction { junction: Junction, junctions: u32 },

    #[error("road {from} -> {to} needs a positive cost")]
    ZeroCost { from: Junction, to: Junction },

    #[error("unable to read road list: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed road list: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
