use thiserror::Error;

use crate::model::{ImagePathError, ParseIdError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    ImagePath(#[from] ImagePathError),
    #[error(transparent)]
    ParseId(#[from] ParseIdError),
}
