//! Request handlers.

use std::path::{Component, Path, PathBuf};

use axum::http::StatusCode;
use axum::{Extension, Form};
use serde::Deserialize;

use crate::auth::AuthUser;

/// Directory uploaded files are stored under, relative to the working
/// directory.
const OUTPUT_DIR: &str = "example_output";

/// Form payload for `POST /form`.
#[derive(Debug, Deserialize)]
pub(crate) struct UploadForm {
    /// Relative path to store the data under.
    filepath: String,
    /// File contents.
    data: String,
}

/// Basic hello at the index, greeting the authenticated user.
pub(crate) async fn index(Extension(user): Extension<AuthUser>) -> String {
    format!("Hello, {}!", user.0)
}

/// Accept the incoming data and save it to disk.
///
/// The submitted path is joined under [`OUTPUT_DIR`]; parent directories
/// are created as needed. Absolute paths and `..` components are rejected.
pub(crate) async fn form(Form(upload): Form<UploadForm>) -> StatusCode {
    let Some(relative) = sanitize(&upload.filepath) else {
        tracing::warn!(filepath = %upload.filepath, "rejected upload path");
        return StatusCode::BAD_REQUEST;
    };
    let full_path = Path::new(OUTPUT_DIR).join(relative);

    match store(&full_path, &upload.data).await {
        Ok(()) => {
            tracing::info!(path = %full_path.display(), "wrote upload");
            StatusCode::OK
        }
        Err(err) => {
            tracing::error!(%err, path = %full_path.display(), "failed to write upload");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

async fn store(path: &Path, data: &str) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir).await?;
    }
    tokio::fs::write(path, data).await
}

/// Accept only non-empty relative paths made of normal components.
fn sanitize(filepath: &str) -> Option<PathBuf> {
    if filepath.is_empty() {
        return None;
    }
    let path = Path::new(filepath);
    path.components()
        .all(|c| matches!(c, Component::Normal(_)))
        .then(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sanitize_accepts_nested_relative_path() {
        assert_eq!(
            sanitize("participant_1/session_1/trial_results.csv"),
            Some(PathBuf::from("participant_1/session_1/trial_results.csv"))
        );
    }

    #[test]
    fn test_sanitize_rejects_traversal() {
        assert_eq!(sanitize("../outside.txt"), None);
        assert_eq!(sanitize("a/../../b.txt"), None);
    }

    #[test]
    fn test_sanitize_rejects_absolute_path() {
        assert_eq!(sanitize("/etc/passwd"), None);
    }

    #[test]
    fn test_sanitize_rejects_empty_path() {
        assert_eq!(sanitize(""), None);
    }
}
