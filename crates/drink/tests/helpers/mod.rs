use std::{path::PathBuf, str::FromStr};

use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};
use wsid_drink::CreateDrinkInput;
use wsid_suggestion::Drink;
use wsid_user::RegisterInput;

pub struct TestState {
    pub state: wsid_shared::State,
    pub drink: wsid_drink::Command,
    pub user: wsid_user::Command,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<TestState> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    wsid_db::migrator()?
        .run(&mut *conn, &Plan::apply_all())
        .await?;

    let state = wsid_shared::State::single(pool);

    Ok(TestState {
        drink: wsid_drink::Command::new(state.clone()),
        user: wsid_user::Command::new(state.clone()),
        state,
    })
}

#[allow(dead_code)]
pub async fn create_user(state: &TestState, name: impl Into<String>) -> anyhow::Result<String> {
    let name = name.into();
    let user = state
        .user
        .register(RegisterInput {
            email: format!("{name}@wsid.localhost"),
            password: "my_password".to_owned(),
            name: Some(name),
        })
        .await?;

    Ok(user.id)
}

#[allow(dead_code)]
pub async fn create_drink(
    state: &TestState,
    name: impl Into<String>,
    ingredients: &[&str],
) -> anyhow::Result<Drink> {
    let drink = state
        .drink
        .create(CreateDrinkInput {
            name: name.into(),
            ingredients: ingredients.iter().map(|s| (*s).to_owned()).collect(),
            steps: vec!["Stir with ice.".to_owned()],
            ..Default::default()
        })
        .await?;

    Ok(drink)
}
