//! Error types for tree building and rendering

use std::io;

use thiserror::Error;

/// A slot whose value could not be read.
///
/// Returned by introspection providers; the walker turns it into
/// [`DumpError::Inaccessible`] with the owning type and slot name attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct AccessError {
    pub reason: String,
}

impl AccessError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Everything that can abort a dump.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("root object is null")]
    NullRoot,

    #[error("root is a primitive scalar of type {0}, not an object")]
    ScalarRoot(String),

    #[error("cannot read slot `{slot}` of {owner}: {source}")]
    Inaccessible {
        owner: String,
        slot: String,
        #[source]
        source: AccessError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DumpError>;
