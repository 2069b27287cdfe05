use std::collections::BTreeSet;

use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow, types::Json};
use time::OffsetDateTime;
use wsid_db::table::Drink as DrinkTable;
use wsid_suggestion::Drink;

#[derive(FromRow)]
pub struct DrinkRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub ingredients: Json<Vec<String>>,
    pub steps: Json<Vec<String>>,
    pub tags: Json<BTreeSet<String>>,
}

impl From<DrinkRow> for Drink {
    fn from(row: DrinkRow) -> Self {
        Drink {
            id: row.id,
            name: row.name,
            description: row.description,
            ingredients: row.ingredients.0,
            steps: row.steps.0,
            tags: row.tags.0,
        }
    }
}

pub(crate) const DRINK_COLUMNS: [DrinkTable; 6] = [
    DrinkTable::Id,
    DrinkTable::Name,
    DrinkTable::Description,
    DrinkTable::Ingredients,
    DrinkTable::Steps,
    DrinkTable::Tags,
];

pub(crate) async fn find(pool: &SqlitePool, id: &str) -> wsid_shared::Result<Option<Drink>> {
    let statement = Query::select()
        .columns(DRINK_COLUMNS)
        .from(DrinkTable::Table)
        .and_where(Expr::col(DrinkTable::Id).eq(id))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, DrinkRow, _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(Into::into))
}

pub(crate) async fn exists(pool: &SqlitePool, id: &str) -> wsid_shared::Result<bool> {
    let statement = Query::select()
        .column(DrinkTable::Id)
        .from(DrinkTable::Table)
        .and_where(Expr::col(DrinkTable::Id).eq(id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let row = sqlx::query_as_with::<_, (String,), _>(&sql, values)
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Inserts the drink unless a drink with the same id is already stored.
/// Returns whether a row was written.
pub(crate) async fn create(pool: &SqlitePool, drink: &Drink) -> wsid_shared::Result<bool> {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let statement = Query::insert()
        .into_table(DrinkTable::Table)
        .columns([
            DrinkTable::Id,
            DrinkTable::Name,
            DrinkTable::Description,
            DrinkTable::Ingredients,
            DrinkTable::Steps,
            DrinkTable::Tags,
            DrinkTable::CreatedAt,
        ])
        .values_panic([
            drink.id.to_owned().into(),
            drink.name.to_owned().into(),
            drink.description.to_owned().into(),
            serde_json::to_string(&drink.ingredients)?.into(),
            serde_json::to_string(&drink.steps)?.into(),
            serde_json::to_string(&drink.tags)?.into(),
            now.into(),
        ])
        .on_conflict(OnConflict::column(DrinkTable::Id).do_nothing().to_owned())
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let result = sqlx::query_with(&sql, values).execute(pool).await?;

    Ok(result.rows_affected() > 0)
}
