//! Salted password hashing with scrypt.
//!
//! Salts and derived keys are stored hex-encoded next to the email in the
//! credential record. Cost parameters are fixed: N = 2^14, r = 8, p = 1.

use rand::RngCore;

use crate::error::{NebulaError, Result};

/// Length of a freshly generated salt in bytes.
pub const SALT_LEN: usize = 16;

/// Length of the derived key in bytes.
pub const KEY_LEN: usize = 32;

const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Generate a fresh random salt from the OS-seeded CSPRNG.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    rand::rng().fill_bytes(&mut salt);
    salt
}

/// Hash `password` and return `(salt_hex, hash_hex)`.
///
/// When `salt_hex` is `None` a new salt is drawn; otherwise the given salt is
/// reused, which makes the result deterministic for a given password.
pub fn hash_password(password: &str, salt_hex: Option<&str>) -> Result<(String, String)> {
    let salt = match salt_hex {
        Some(encoded) => hex::decode(encoded)
            .map_err(|e| NebulaError::InvalidInput(format!("salt is not valid hex: {}", e)))?,
        None => generate_salt().to_vec(),
    };

    let key = derive_key(password.as_bytes(), &salt)?;
    Ok((hex::encode(&salt), hex::encode(key)))
}

fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let params = scrypt::Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .map_err(|e| NebulaError::KeyDerivation(e.to_string()))?;

    let mut output = [0u8; KEY_LEN];
    scrypt::scrypt(password, salt, &params, &mut output)
        .map_err(|e| NebulaError::KeyDerivation(e.to_string()))?;
    Ok(output)
}
