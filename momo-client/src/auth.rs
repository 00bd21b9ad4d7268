//! Basic-Auth header construction.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// `Basic <base64(username:password)>`.
pub fn basic_auth(username: &str, password: &str) -> String {
    let encoded = STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {encoded}")
}
