//! Session tokens and password hashing for the in-memory identity provider.

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::auth::models::Password;

/// Session token prefix.
pub const SESSION_TOKEN_PREFIX: &str = "ms";

/// Number of random bytes encoded in a session token.
pub const SESSION_SECRET_BYTES: usize = 32;

/// Number of random salt bytes per password.
pub const SALT_BYTES: usize = 16;

const SESSION_SECRET_HEX_CHARS: usize = SESSION_SECRET_BYTES * 2;

#[must_use]
pub fn generate_session_token() -> String {
    let mut secret = [0_u8; SESSION_SECRET_BYTES];

    OsRng.fill_bytes(&mut secret);

    let token = format!("{SESSION_TOKEN_PREFIX}_{}", encode_hex(&secret));

    secret.zeroize();

    token
}

/// Cheap shape check done before any lookup.
#[must_use]
pub fn is_session_token(token: &str) -> bool {
    token
        .strip_prefix(SESSION_TOKEN_PREFIX)
        .and_then(|rest| rest.strip_prefix('_'))
        .is_some_and(|secret| {
            secret.len() == SESSION_SECRET_HEX_CHARS
                && secret.bytes().all(|byte| byte.is_ascii_hexdigit())
        })
}

#[must_use]
pub fn generate_salt() -> [u8; SALT_BYTES] {
    let mut salt = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut salt);

    salt
}

/// Hex SHA-256 over `salt:password`.
#[must_use]
pub fn hash_password(salt: &[u8; SALT_BYTES], password: &Password) -> String {
    let mut hasher = Sha256::new();

    hasher.update(encode_hex(salt).as_bytes());
    hasher.update(b":");
    hasher.update(password.expose().as_bytes());

    encode_hex(&hasher.finalize())
}

fn encode_hex(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";

    let mut encoded = String::with_capacity(bytes.len() * 2);

    for byte in bytes {
        encoded.push(HEX[usize::from(byte >> 4)] as char);
        encoded.push(HEX[usize::from(byte & 0x0f)] as char);
    }

    encoded
}
