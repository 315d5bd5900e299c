/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid responsive items: {0}")]
    InvalidResponsiveItems(String),
}
