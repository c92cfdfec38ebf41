// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for the toolkit.

use thiserror::Error;

/// Top-level error type for all toolkit operations.
#[derive(Debug, Error)]
pub enum PrepError {
    // -- User input --
    #[error("{field} must be a number, got {input:?}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    // -- Image I/O and processing --
    #[error("could not read image from {path}: {reason}")]
    ImageRead { path: String, reason: String },

    #[error("image processing failed: {0}")]
    ImageProcessing(String),

    #[error("display failed: {0}")]
    Display(String),

    // -- Console --
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed")]
    InputClosed,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PrepError>;
