/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Media base URL resolution.

/// The store's media base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaUrl {
    base: String,
}

impl MediaUrl {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a media-relative path onto the base, collapsing the slashes at the seam.
    pub fn resolve(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for MediaUrl {
    fn default() -> Self {
        Self::new("/media/")
    }
}
