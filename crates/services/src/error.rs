//! Shared error types for the services crate.

use thiserror::Error;

use storage::sqlite::SqliteInitError;
use truths_core::model::{ImagePathError, StoryId};

/// Errors emitted by `StoryService`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoryError {
    #[error("unknown story: {0}")]
    UnknownStory(StoryId),
}

/// Errors emitted by `SettingsService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error(transparent)]
    ImagePath(#[from] ImagePathError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
