//! PreviewRequest entity - validated process arguments

use std::path::PathBuf;

use crate::domain::errors::PreviewError;

/// A validated request to preview one file in a titled window
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewRequest {
    /// Document to preview
    pub path: PathBuf,
    /// Title of the top-level window, used by the launcher to find it
    pub title: String,
}

impl PreviewRequest {
    /// Validate `argv` (program name first).
    ///
    /// The path must be non-empty and carry `required_extension`
    /// (case-insensitive, leading dot included). An empty title falls back
    /// to `default_title`.
    pub fn from_args(
        args: &[String],
        required_extension: &str,
        default_title: &str,
    ) -> Result<Self, PreviewError> {
        let program = args.first().map(String::as_str).unwrap_or("clipthumb");
        let (path, title) = match args {
            [_, path, title, ..] => (path, title),
            _ => {
                return Err(PreviewError::Usage(format!(
                    "Usage: {program} <file{required_extension}> <window_title_token>"
                )))
            }
        };

        if path.is_empty() || !has_extension(path, required_extension) {
            return Err(PreviewError::Usage(format!(
                "Error: file must have {required_extension} extension"
            )));
        }

        let title = if title.is_empty() {
            default_title.to_string()
        } else {
            title.clone()
        };

        Ok(Self {
            path: PathBuf::from(path),
            title,
        })
    }

    /// Registry key for the file type, e.g. `.clip`
    pub fn file_type_key(&self) -> String {
        extension_of(&self.path.to_string_lossy())
            .unwrap_or_default()
            .to_ascii_lowercase()
    }
}

/// Final extension of the last path component, leading dot included.
///
/// Follows the shell's rule rather than `Path::extension`: a name made only
/// of an extension (`.clip`) still has one.
fn extension_of(path: &str) -> Option<&str> {
    let name = path.rsplit(['\\', '/']).next().unwrap_or(path);
    name.rfind('.').map(|dot| &name[dot..])
}

fn has_extension(path: &str, required: &str) -> bool {
    extension_of(path).is_some_and(|ext| ext.eq_ignore_ascii_case(required))
}
