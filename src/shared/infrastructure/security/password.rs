// Argon2id password hashes stored as PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`).
//
// The cost parameters travel with every hash, so verification keeps working after the
// configured cost is raised. Hashing is CPU bound and runs on the blocking pool.

use argon2::password_hash::{
    self, PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

const SALT_LEN: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("stored password hash is malformed")]
    MalformedHash,

    #[error("password hashing failed: {0}")]
    Hashing(String),
}

#[derive(Debug, Clone)]
pub struct PasswordHasher {
    params: Params,
}

impl Default for PasswordHasher {
    /// Argon2id with the crate's recommended cost (19 MiB, 2 passes, 1 lane).
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl PasswordHasher {
    /// Argon2id with `memory_kib` KiB and `iterations` passes on one lane.
    /// Values under the algorithm minimums are raised to them.
    pub fn new(memory_kib: u32, iterations: u32) -> Self {
        let params = Params::new(
            memory_kib.max(Params::MIN_M_COST),
            iterations.max(Params::MIN_T_COST),
            1,
            None,
        )
        .unwrap_or_default();
        Self { params }
    }

    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let params = self.params.clone();
        let password = password.to_owned();
        tokio::task::spawn_blocking(move || hash_blocking(params, &password))
            .await
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
    }

    pub async fn verify(&self, password: &str, encoded: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let encoded = encoded.to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&password, &encoded))
            .await
            .map_err(|e| PasswordError::Hashing(e.to_string()))?
    }
}

fn hash_blocking(params: Params, password: &str) -> Result<String, PasswordError> {
    let salt_bytes: [u8; SALT_LEN] = rand::random();
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| PasswordError::Hashing(e.to_string()))?;
    Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PasswordError::Hashing(e.to_string()))
}

fn verify_blocking(password: &str, encoded: &str) -> Result<bool, PasswordError> {
    let parsed = PasswordHash::new(encoded).map_err(|_| PasswordError::MalformedHash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(_) => Err(PasswordError::MalformedHash),
    }
}
