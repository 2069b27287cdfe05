use temp_dir::TempDir;
use wsid_user::RegisterInput;

mod helpers;

#[tokio::test]
async fn validate_unique_emails() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = wsid_user::Command::new(state);
    cmd.register(RegisterInput {
        email: "john.doe@wsid.localhost".to_owned(),
        password: "my_password".to_owned(),
        name: None,
    })
    .await?;
    let user_2 = cmd
        .register(RegisterInput {
            email: "John.Doe@wsid.localhost".to_owned(),
            password: "my_password_v2".to_owned(),
            name: None,
        })
        .await;

    assert_eq!(
        user_2.unwrap_err().to_string(),
        "Email already exists".to_owned()
    );

    Ok(())
}

#[tokio::test]
async fn validate_input() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = wsid_user::Command::new(state);

    let resp = cmd
        .register(RegisterInput {
            email: "not-an-email".to_owned(),
            password: "my_password".to_owned(),
            name: None,
        })
        .await;
    assert!(matches!(resp, Err(wsid_shared::Error::Validate(_))));

    let resp = cmd
        .register(RegisterInput {
            email: "jane@wsid.localhost".to_owned(),
            password: "short".to_owned(),
            name: None,
        })
        .await;
    assert!(matches!(resp, Err(wsid_shared::Error::Validate(_))));

    Ok(())
}

#[tokio::test]
async fn register_returns_public_user() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = wsid_user::Command::new(state);

    let user = cmd
        .register(RegisterInput {
            email: "Jane@WSID.localhost".to_owned(),
            password: "my_password".to_owned(),
            name: Some("  Jane ".to_owned()),
        })
        .await?;

    assert_eq!(user.email, "jane@wsid.localhost");
    assert_eq!(user.name.as_deref(), Some("Jane"));
    assert_eq!(user.id.len(), 26);

    let found = cmd.find(&user.id).await?;
    assert_eq!(found, Some(user.clone()));

    let found = cmd.find_by_email("jane@wsid.localhost").await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

#[tokio::test]
async fn concurrent_registrations_with_same_email() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("db.sqlite3");
    let state = helpers::setup_test_state(path).await?;
    let cmd = wsid_user::Command::new(state);
    let input = || RegisterInput {
        email: "race@wsid.localhost".to_owned(),
        password: "my_password".to_owned(),
        name: None,
    };

    let (first, second) = tokio::join!(cmd.register(input()), cmd.register(input()));

    let failures = [first, second]
        .into_iter()
        .filter_map(Result::err)
        .collect::<Vec<_>>();
    assert_eq!(failures.len(), 1);
    assert!(
        matches!(&failures[0], wsid_shared::Error::User(msg) if msg == "Email already exists"),
        "{:?}",
        failures[0]
    );

    Ok(())
}
