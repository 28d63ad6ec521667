//! HTTP Basic authentication against a static user table.

use axum::extract::Request;
use axum::http::StatusCode;
use axum::http::header::{self, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use sha2::{Digest, Sha256};

/// Authenticated user name, inserted as a request extension.
#[derive(Clone, Debug)]
pub(crate) struct AuthUser(pub(crate) String);

/// User table: name and hex-encoded SHA-256 password digest.
///
/// Demonstration credentials (`susan` / `hello`), mirroring what a real
/// deployment would replace with its own account list.
const USERS: &[(&str, &str)] = &[(
    "susan",
    "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
)];

/// Reject the request unless it carries valid Basic credentials; on
/// success the user name is attached as an [`AuthUser`] extension.
pub(crate) async fn require_basic_auth(mut req: Request, next: Next) -> Response {
    let Some(user) = authenticate(req.headers().get(header::AUTHORIZATION)) else {
        return unauthorized();
    };
    req.extensions_mut().insert(AuthUser(user));
    next.run(req).await
}

/// Decode and verify an `Authorization: Basic` header value.
fn authenticate(header: Option<&HeaderValue>) -> Option<String> {
    let value = header?.to_str().ok()?;
    let encoded = value.strip_prefix("Basic ")?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    verify_password(user, password).then(|| user.to_owned())
}

/// Check a name/password pair against the user table.
fn verify_password(user: &str, password: &str) -> bool {
    let digest = hex::encode(Sha256::digest(password.as_bytes()));
    USERS
        .iter()
        .any(|(name, expected)| *name == user && digest == *expected)
}

fn unauthorized() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(r#"Basic realm="upload""#),
        )],
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic_header(credentials: &str) -> HeaderValue {
        HeaderValue::from_str(&format!("Basic {}", BASE64.encode(credentials))).unwrap()
    }

    #[test]
    fn test_valid_credentials() {
        let header = basic_header("susan:hello");
        assert_eq!(authenticate(Some(&header)), Some("susan".to_owned()));
    }

    #[test]
    fn test_wrong_password() {
        let header = basic_header("susan:goodbye");
        assert_eq!(authenticate(Some(&header)), None);
    }

    #[test]
    fn test_unknown_user() {
        let header = basic_header("mallory:hello");
        assert_eq!(authenticate(Some(&header)), None);
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(authenticate(None), None);
    }

    #[test]
    fn test_non_basic_scheme() {
        let header = HeaderValue::from_static("Bearer token123");
        assert_eq!(authenticate(Some(&header)), None);
    }

    #[test]
    fn test_undecodable_payload() {
        let header = HeaderValue::from_static("Basic not-base64!!!");
        assert_eq!(authenticate(Some(&header)), None);
    }
}
