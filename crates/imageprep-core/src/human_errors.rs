// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the console menu.
//
// Every technical error is mapped to a one-line message plus a suggestion.
// The severity tells the menu loop which kind of failure it caught; the
// technical text only goes to the log.

use crate::error::PrepError;

/// Which side of the program a caught error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The user typed something we could not use.
    Input,
    /// The image file is missing, unreadable, or not an image.
    File,
    /// An image library or the viewer failed.
    Library,
}

/// A human-readable error with a plain message and an actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    pub message: String,
    pub suggestion: String,
    pub severity: Severity,
}

/// Convert a `PrepError` into a `HumanError` for the console.
pub fn humanize_error(err: &PrepError) -> HumanError {
    match err {
        PrepError::InvalidNumber { field, input } => HumanError {
            message: format!("'{input}' is not a number ({field})."),
            suggestion: "Enter digits only, or press Enter to use the default.".into(),
            severity: Severity::Input,
        },

        PrepError::InvalidParameter { field, reason } => HumanError {
            message: format!("Invalid {field}: {reason}."),
            suggestion: "Press Enter at the prompt to use the default value.".into(),
            severity: Severity::Input,
        },

        PrepError::ImageRead { path, .. } => HumanError {
            message: format!("Could not read image from '{path}'."),
            suggestion: "Check the path and that the file is a PNG, JPEG or other common format."
                .into(),
            severity: Severity::File,
        },

        PrepError::ImageProcessing(detail) => HumanError {
            message: format!("The image operation failed ({detail})."),
            suggestion: "Try different parameters or another image.".into(),
            severity: Severity::Library,
        },

        PrepError::Display(detail) => HumanError {
            message: format!("The result could not be displayed ({detail})."),
            suggestion: "A graphical session is needed to show images.".into(),
            severity: Severity::Library,
        },

        PrepError::Io(io_err) => HumanError {
            message: format!("Console error: {io_err}."),
            suggestion: "Restart the program.".into(),
            severity: Severity::Library,
        },

        PrepError::InputClosed => HumanError {
            message: "Input was closed.".into(),
            suggestion: "Run the program from an interactive terminal.".into(),
            severity: Severity::Input,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_parameter_is_input_error() {
        let err = PrepError::InvalidNumber {
            field: "kernel size",
            input: "abc".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::Input);
        assert!(human.message.contains("abc"));
    }

    #[test]
    fn unreadable_file_mentions_path() {
        let err = PrepError::ImageRead {
            path: "missing.png".into(),
            reason: "No such file or directory".into(),
        };
        let human = humanize_error(&err);
        assert_eq!(human.severity, Severity::File);
        assert_eq!(human.message, "Could not read image from 'missing.png'.");
    }

    #[test]
    fn library_failure_is_library_error() {
        let human = humanize_error(&PrepError::ImageProcessing("buffer too small".into()));
        assert_eq!(human.severity, Severity::Library);
    }

    #[test]
    fn viewer_failure_is_library_error() {
        let human = humanize_error(&PrepError::Display("no display server".into()));
        assert_eq!(human.severity, Severity::Library);
        assert!(human.message.contains("no display server"));
    }
}
