use argon2::{
    Argon2, Params,
    password_hash::{
        Error, PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};
use std::sync::OnceLock;

pub struct PasswordManager;

static INSTANCE: OnceLock<Argon2> = OnceLock::new();
static DUMMY_HASH: OnceLock<String> = OnceLock::new();

impl PasswordManager {
    fn engine() -> &'static Argon2<'static> {
        INSTANCE.get_or_init(|| {
            let params = Params::new(
                19 * 1024, // 19 MiB memory (m)
                2,         // 2 iterations (t)
                1,         // 1 parallelism lane (p)
                None,      // default 32-byte hash
            )
            .expect("Invalid Argon2 parameters");

            Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params)
        })
    }

    pub fn hash_password(password: &str) -> Result<String, Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::engine().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    }

    pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, Error> {
        let parsed_hash = PasswordHash::new(stored_hash)?;

        match Self::engine().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// A hash of a throwaway password with the same parameters as real
    /// hashes. Verified against when the email is unknown so that login
    /// takes the same time whether or not the account exists.
    pub fn dummy_hash() -> &'static str {
        DUMMY_HASH.get_or_init(|| {
            Self::hash_password("wanderplan-timing-pad").unwrap_or_else(|_| {
                "$argon2id$v=19$m=19456,t=2,p=1$bm8tc3VjaC11c2Vy$\
                 H1nLg3RhY2tpbmdUaW1pbmdQYWRkaW5nMDAwMDA"
                    .to_string()
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hash = PasswordManager::hash_password("secret1").unwrap();
        assert!(PasswordManager::verify_password("secret1", &hash).unwrap());
        assert!(!PasswordManager::verify_password("secret2", &hash).unwrap());
    }

    #[test]
    fn test_dummy_hash_verifies_without_error() {
        let verdict =
            PasswordManager::verify_password("anything", PasswordManager::dummy_hash());
        assert_eq!(verdict.unwrap(), false);
    }
}
