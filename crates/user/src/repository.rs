use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};
use time::OffsetDateTime;
use wsid_db::table::User;

#[derive(FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub password: String,
    pub created_at: i64,
}

pub enum FindType {
    Id(String),
    Email(String),
}

pub(crate) async fn find(
    pool: &SqlitePool,
    arg_type: FindType,
) -> wsid_shared::Result<Option<UserRow>> {
    let mut statement = Query::select()
        .columns([
            User::Id,
            User::Email,
            User::Name,
            User::Password,
            User::CreatedAt,
        ])
        .from(User::Table)
        .limit(1)
        .to_owned();

    match arg_type {
        FindType::Id(id) => statement.and_where(Expr::col(User::Id).eq(id)),
        FindType::Email(email) => statement.and_where(Expr::col(User::Email).eq(email)),
    };

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    Ok(sqlx::query_as_with::<_, UserRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?)
}

pub(crate) async fn create(
    pool: &SqlitePool,
    id: String,
    email: String,
    name: Option<String>,
    password: String,
) -> wsid_shared::Result<()> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(User::Table)
        .columns([
            User::Id,
            User::Email,
            User::Name,
            User::Password,
            User::CreatedAt,
        ])
        .values_panic([
            id.into(),
            email.into(),
            name.into(),
            password.into(),
            now.into(),
        ])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

    match sqlx::query_with(&sql, values).execute(pool).await {
        Ok(_) => Ok(()),
        // a concurrent registration can pass the lookup and lose the insert
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            wsid_shared::user!("Email already exists")
        }
        Err(e) => Err(e.into()),
    }
}
