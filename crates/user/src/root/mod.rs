use std::ops::Deref;

use serde::Serialize;

use crate::repository::{self, FindType, UserRow};

mod login;
mod register;

pub use login::LoginInput;
pub use register::RegisterInput;

#[derive(Clone)]
pub struct Command {
    state: wsid_shared::State,
}

impl Deref for Command {
    type Target = wsid_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.state
    }
}

/// Public view of an account; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub created_at: i64,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl Command {
    pub fn new(state: wsid_shared::State) -> Self {
        Self { state }
    }

    pub async fn find(&self, id: impl Into<String>) -> wsid_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Id(id.into())).await?;

        Ok(row.map(Into::into))
    }

    pub async fn find_by_email(
        &self,
        email: impl Into<String>,
    ) -> wsid_shared::Result<Option<User>> {
        let row = repository::find(&self.read_db, FindType::Email(email.into())).await?;

        Ok(row.map(Into::into))
    }
}
