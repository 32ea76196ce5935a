//! Domain layer error types
//!
//! Every failure the preview pipeline can report. None of them are retried:
//! the process logs the failing step and exits non-zero.

use std::fmt;

use thiserror::Error;

use super::value_objects::HResult;

/// Step of the host binding sequence that failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindStep {
    /// Initialising the handler with the target file
    Initialize,
    /// Registering the window class
    RegisterClass,
    /// Creating the top-level window
    CreateTopLevel,
    /// Creating the child host window
    CreateHost,
    /// Binding the handler to the host rectangle
    SetWindow,
    /// Starting the preview render
    DoPreview,
}

impl fmt::Display for BindStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BindStep::Initialize => "InitializeWithFile",
            BindStep::RegisterClass => "RegisterClass",
            BindStep::CreateTopLevel => "CreateWindowEx(top)",
            BindStep::CreateHost => "CreateWindowEx(host)",
            BindStep::SetWindow => "SetWindow",
            BindStep::DoPreview => "DoPreview",
        };
        f.write_str(name)
    }
}

/// Main preview error type
#[derive(Error, Debug)]
pub enum PreviewError {
    /// Bad or missing process arguments
    #[error("{0}")]
    Usage(String),

    /// The component runtime could not be initialised
    #[error("CoInitializeEx failed: {code}")]
    Environment { code: HResult },

    /// No handler subtree exists for the file type or its alias
    #[error("no shell extension handlers registered for {file_type}")]
    NotRegistered { file_type: String },

    /// Every candidate was rejected or failed to instantiate
    #[error("{}", activation_message(.tried, .last_code))]
    ActivationFailed {
        tried: usize,
        last_code: Option<HResult>,
    },

    /// A binding step failed; all resources created so far were released
    #[error("{step} failed: {code}")]
    BindFailed { step: BindStep, code: HResult },
}

fn activation_message(tried: &usize, last_code: &Option<HResult>) -> String {
    match last_code {
        Some(code) => format!(
            "no usable preview handler among {tried} candidate(s), last failure {code}"
        ),
        None => format!("no usable preview handler among {tried} candidate(s)"),
    }
}

impl PreviewError {
    pub fn bind(step: BindStep, code: impl Into<HResult>) -> Self {
        PreviewError::BindFailed {
            step,
            code: code.into(),
        }
    }
}
