use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use wsid_user::RegisterInput;

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<wsid_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    wsid_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    Ok(wsid_shared::State::single(pool))
}

#[allow(dead_code)]
pub async fn create_user(
    cmd: &wsid_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<wsid_user::User> {
    let name = name.into();
    let user = cmd
        .register(RegisterInput {
            email: format!("{name}@wsid.localhost"),
            password: "my_password".to_owned(),
            name: Some(name),
        })
        .await?;

    Ok(user)
}
