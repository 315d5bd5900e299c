/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Filesystem image dimension probe.

use crate::backend::DimensionProbe;
use crate::error::CollaboratorError;
use image::ImageError;
use slider_core::ImageDimensions;
use std::path::{Component, Path, PathBuf};

/// Reads image headers from files under a media root directory.
#[derive(Debug, Clone)]
pub struct FsDimensionProbe {
    root: PathBuf,
}

impl FsDimensionProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DimensionProbe for FsDimensionProbe {
    fn probe(&self, path: &str) -> Result<Option<ImageDimensions>, CollaboratorError> {
        let relative = Path::new(path.trim_start_matches('/'));
        // Only files below the root are probed.
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Ok(None);
        }

        let absolute = self.root.join(relative);
        if !absolute.is_file() {
            return Ok(None);
        }

        match image::image_dimensions(&absolute) {
            Ok((width, height)) => Ok(Some(ImageDimensions { width, height })),
            Err(ImageError::IoError(e)) => Err(CollaboratorError::Probe {
                path: path.to_string(),
                message: e.to_string(),
            }),
            // Unsupported or corrupt files are not images as far as layout is concerned.
            Err(_) => Ok(None),
        }
    }
}
