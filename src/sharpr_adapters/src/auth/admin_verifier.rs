use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};
use sharpr_core::{AdminVerifier, Email};

/// Checks the administrator pair against a configured email and argon2 hash.
///
/// The hash is always verified, even when the email already differs, so both
/// kinds of mismatch cost the same.
#[derive(Clone)]
pub struct Argon2AdminVerifier {
    email: Email,
    password_hash: Secret<String>,
}

impl Argon2AdminVerifier {
    pub fn new(email: Email, password_hash: Secret<String>) -> Self {
        Self {
            email,
            password_hash,
        }
    }
}

#[async_trait::async_trait]
impl AdminVerifier for Argon2AdminVerifier {
    #[tracing::instrument(name = "Verifying admin credentials", skip_all)]
    async fn verify(
        &self,
        email: &Secret<String>,
        password: &Secret<String>,
    ) -> Result<bool, String> {
        let email_matches = email.expose_secret() == self.email.as_ref().expose_secret();
        let password_matches =
            verify_password_hash(self.password_hash.clone(), password.clone()).await?;

        Ok(email_matches && password_matches)
    }
}

fn hasher() -> Result<Argon2<'static>, String> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None).map_err(|e| e.to_string())?,
    ))
}

/// Returns `Ok(false)` on a mismatch and `Err` when the stored hash is unusable.
#[tracing::instrument(name = "Verify password hash", skip_all)]
pub async fn verify_password_hash(
    expected_password_hash: Secret<String>,
    password_candidate: Secret<String>,
) -> Result<bool, String> {
    let current_span: tracing::Span = tracing::Span::current();
    tokio::task::spawn_blocking(move || {
        current_span.in_scope(|| {
            let expected_password_hash: PasswordHash<'_> =
                PasswordHash::new(expected_password_hash.expose_secret())
                    .map_err(|e| e.to_string())?;

            match hasher()?.verify_password(
                password_candidate.expose_secret().as_bytes(),
                &expected_password_hash,
            ) {
                Ok(()) => Ok(true),
                Err(password_hash::Error::Password) => Ok(false),
                Err(e) => Err(e.to_string()),
            }
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

#[tracing::instrument(name = "Computing password hash", skip_all)]
pub async fn compute_password_hash(password: Secret<String>) -> Result<Secret<String>, String> {
    let current_span: tracing::Span = tracing::Span::current();

    tokio::task::spawn_blocking(move || {
        current_span.in_scope(move || {
            let salt: SaltString = SaltString::generate(rand_core::OsRng);
            hasher()?
                .hash_password(password.expose_secret().as_bytes(), &salt)
                .map(|h| Secret::from(h.to_string()))
                .map_err(|e| e.to_string())
        })
    })
    .await
    .map_err(|e| e.to_string())?
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN_EMAIL: &str = "admin@sharpr.org";
    const ADMIN_PASSWORD: &str = "Sharpr#2024";

    async fn verifier() -> Argon2AdminVerifier {
        let hash = compute_password_hash(Secret::from(ADMIN_PASSWORD.to_owned()))
            .await
            .unwrap();
        Argon2AdminVerifier::new(Email::parse(ADMIN_EMAIL).unwrap(), hash)
    }

    fn secret(value: &str) -> Secret<String> {
        Secret::from(value.to_owned())
    }

    #[tokio::test]
    async fn test_exact_pair_verifies() {
        let verifier = verifier().await;
        assert_eq!(
            verifier
                .verify(&secret(ADMIN_EMAIL), &secret(ADMIN_PASSWORD))
                .await,
            Ok(true)
        );
    }

    #[tokio::test]
    async fn test_single_character_deviation_fails() {
        let verifier = verifier().await;

        for (email, password) in [
            ("admin@sharpr.orh", ADMIN_PASSWORD),
            ("Admin@sharpr.org", ADMIN_PASSWORD),
            (ADMIN_EMAIL, "Sharpr#2023"),
            (ADMIN_EMAIL, "Sharpr#202"),
        ] {
            assert_eq!(
                verifier.verify(&secret(email), &secret(password)).await,
                Ok(false),
                "{email} / {password}"
            );
        }
    }

    #[tokio::test]
    async fn test_hash_is_not_the_plaintext() {
        let hash = compute_password_hash(secret(ADMIN_PASSWORD)).await.unwrap();
        assert!(hash.expose_secret().starts_with("$argon2id$"));
        assert!(!hash.expose_secret().contains(ADMIN_PASSWORD));
    }

    #[tokio::test]
    async fn test_corrupt_hash_is_an_error() {
        let verifier = Argon2AdminVerifier::new(
            Email::parse(ADMIN_EMAIL).unwrap(),
            secret("not-a-phc-string"),
        );
        assert!(
            verifier
                .verify(&secret(ADMIN_EMAIL), &secret(ADMIN_PASSWORD))
                .await
                .is_err()
        );
    }
}
