use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Returns `(algorithm, phc_string)`.
pub fn hash_password(pwd: &str) -> Result<(String, String), String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    match argon2.hash_password(pwd.as_bytes(), &salt) {
        Ok(hash) => Ok((hash.algorithm.to_string(), hash.to_string())),
        Err(err) => Err(err.to_string()),
    }
}

pub fn verify_password(hash: &str, pwd: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(pwd.as_bytes(), &parsed_hash)
        .is_ok()
}
