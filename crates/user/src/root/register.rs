use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use serde::Deserialize;
use ulid::Ulid;
use validator::Validate;

use crate::repository::{self, FindType};

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterInput {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, max = 64))]
    pub password: String,
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
}

impl super::Command {
    #[tracing::instrument(skip_all, fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> wsid_shared::Result<super::User> {
        input.validate()?;

        let email = input.email.trim().to_lowercase();

        if repository::find(&self.read_db, FindType::Email(email.to_owned()))
            .await?
            .is_some()
        {
            wsid_shared::user!("Email already exists");
        }

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2
            .hash_password(input.password.as_bytes(), &salt)?
            .to_string();

        let id = Ulid::new().to_string();
        let name = input
            .name
            .map(|n| n.trim().to_owned())
            .filter(|n| !n.is_empty());

        repository::create(&self.write_db, id.to_owned(), email, name, password_hash).await?;

        tracing::info!(user_id = %id, "User registered");

        let Some(user) = repository::find(&self.write_db, FindType::Id(id)).await? else {
            wsid_shared::bail!("User not found after register");
        };

        Ok(user.into())
    }
}
