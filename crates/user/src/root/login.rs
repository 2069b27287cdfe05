use argon2::{Argon2, PasswordHash, PasswordVerifier};
use serde::Deserialize;
use validator::Validate;

use crate::repository::{self, FindType};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
}

impl super::Command {
    /// Checks credentials. Unknown email and wrong password fail with the
    /// same message.
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> wsid_shared::Result<super::User> {
        input.validate()?;

        let email = input.email.trim().to_lowercase();

        let Some(user_row) = repository::find(&self.read_db, FindType::Email(email)).await? else {
            tracing::warn!("Login with unknown email");
            wsid_shared::unauthorized!("Invalid email or password. Please try again.");
        };

        let parsed_hash = PasswordHash::new(&user_row.password)?;
        let argon2 = Argon2::default();

        if argon2
            .verify_password(input.password.as_bytes(), &parsed_hash)
            .is_err()
        {
            tracing::warn!(user_id = %user_row.id, "Login with wrong password");
            wsid_shared::unauthorized!("Invalid email or password. Please try again.");
        }

        Ok(user_row.into())
    }
}
