/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Errors that reach callers of the rendering layer.
///
/// Everything else on the render path degrades to empty output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize slider configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),
}

/// Failures reported by external collaborators.
///
/// These are caught where they are consumed, logged, and replaced with an
/// empty or cached-absent result.
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("repository lookup failed: {0}")]
    Repository(String),

    #[error("content filter failed: {0}")]
    Filter(String),

    #[error("image probe failed for {path}: {message}")]
    Probe { path: String, message: String },

    #[error("invalid video reference: {0}")]
    InvalidVideo(String),
}
