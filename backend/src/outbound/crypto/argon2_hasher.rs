//! Argon2id implementation of the `PasswordHasher` port.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        PasswordHash, PasswordHasher as _, PasswordVerifier, SaltString, rand_core::OsRng,
    },
};

use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Hashes passwords into PHC strings with a random salt per call.
#[derive(Clone)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    /// Hasher with the crate's recommended Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hasher with explicit memory, iteration and parallelism costs.
    ///
    /// Low costs keep test suites fast; production wiring uses [`Self::new`].
    pub fn with_costs(m_cost: u32, t_cost: u32, p_cost: u32) -> Result<Self, PasswordHashError> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|err| PasswordHashError::hash(err.to_string()))?;
        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Cheapest parameters Argon2 accepts.
    pub fn minimal() -> Result<Self, PasswordHashError> {
        Self::with_costs(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST)
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError> {
        let parsed = PasswordHash::new(hash)
            .map_err(|err| PasswordHashError::malformed_hash(err.to_string()))?;
        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2Hasher {
        Argon2Hasher::minimal().expect("minimal params are valid")
    }

    #[rstest]
    fn hash_then_verify_accepts_the_same_password(hasher: Argon2Hasher) {
        let hash = hasher.hash("weakpassword").expect("hash");
        assert!(hash.starts_with("$argon2id$"));
        assert!(hasher.verify("weakpassword", &hash).expect("verify"));
        assert!(!hasher.verify("weakpassword2", &hash).expect("verify"));
    }

    #[rstest]
    fn salts_differ_between_calls(hasher: Argon2Hasher) {
        let first = hasher.hash("pw").expect("hash");
        let second = hasher.hash("pw").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn malformed_hash_is_reported(hasher: Argon2Hasher) {
        let err = hasher.verify("pw", "not-a-phc-string").expect_err("malformed");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }

    #[rstest]
    fn unknown_user_hash_is_well_formed_and_matches_nothing(hasher: Argon2Hasher) {
        use crate::domain::auth_service::UNKNOWN_USER_HASH;

        assert!(!hasher.verify("weakpassword", UNKNOWN_USER_HASH).expect("verify"));
        assert!(!hasher.verify("", UNKNOWN_USER_HASH).expect("verify"));
    }

    #[rstest]
    fn zero_iterations_are_rejected() {
        assert!(Argon2Hasher::with_costs(Params::MIN_M_COST, 0, 1).is_err());
    }
}
