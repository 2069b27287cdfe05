use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use time::OffsetDateTime;
use ulid::Ulid;
use wsid_db::table::DrinkLog as DrinkLogTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkLog {
    pub id: String,
    pub user_id: String,
    pub drink_id: String,
    pub created_at: i64,
}

impl super::Command {
    /// Records that the user made the drink.
    #[tracing::instrument(skip(self))]
    pub async fn log(&self, user_id: &str, drink_id: &str) -> wsid_shared::Result<DrinkLog> {
        self.ensure_exists(drink_id).await?;

        let log = DrinkLog {
            id: Ulid::new().to_string(),
            user_id: user_id.to_owned(),
            drink_id: drink_id.to_owned(),
            created_at: OffsetDateTime::now_utc().unix_timestamp(),
        };

        let statement = Query::insert()
            .into_table(DrinkLogTable::Table)
            .columns([
                DrinkLogTable::Id,
                DrinkLogTable::UserId,
                DrinkLogTable::DrinkId,
                DrinkLogTable::CreatedAt,
            ])
            .values_panic([
                log.id.to_owned().into(),
                log.user_id.to_owned().into(),
                log.drink_id.to_owned().into(),
                log.created_at.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(log)
    }

    /// Timestamps of every drink the user logged, newest first.
    pub async fn log_timestamps(&self, user_id: &str) -> wsid_shared::Result<Vec<i64>> {
        let statement = Query::select()
            .column(DrinkLogTable::CreatedAt)
            .from(DrinkLogTable::Table)
            .and_where(Expr::col(DrinkLogTable::UserId).eq(user_id))
            .order_by(DrinkLogTable::CreatedAt, sea_query::Order::Desc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(rows.into_iter().map(|(ts,)| ts).collect())
    }
}
