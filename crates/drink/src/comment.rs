use sea_query::{Alias, Expr, ExprTrait, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;
use wsid_db::table::{DrinkComment, User};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentInput {
    #[validate(length(min = 1, max = 18))]
    pub drink_id: String,
    #[validate(length(max = 2000))]
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub drink_id: String,
    pub user_id: String,
    pub user_name: Option<String>,
    pub text: String,
    pub created_at: i64,
}

impl super::Command {
    #[tracing::instrument(skip(self, input), fields(drink_id = %input.drink_id))]
    pub async fn add_comment(
        &self,
        user_id: &str,
        input: AddCommentInput,
    ) -> wsid_shared::Result<Comment> {
        input.validate()?;

        let text = input.text.trim();
        if text.is_empty() {
            wsid_shared::user!("Comment cannot be empty");
        }

        self.ensure_exists(&input.drink_id).await?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = Query::insert()
            .into_table(DrinkComment::Table)
            .columns([
                DrinkComment::Id,
                DrinkComment::DrinkId,
                DrinkComment::UserId,
                DrinkComment::Body,
                DrinkComment::CreatedAt,
            ])
            .values_panic([
                id.to_owned().into(),
                input.drink_id.to_owned().into(),
                user_id.into(),
                text.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        let Some(comment) = self.find_comment(&id).await? else {
            wsid_shared::bail!("Comment {} not found after insert", id);
        };

        Ok(comment)
    }

    /// Comments on a drink, oldest first, with the author's name.
    pub async fn comments(&self, drink_id: &str) -> wsid_shared::Result<Vec<Comment>> {
        let statement = select_comments()
            .and_where(Expr::col((DrinkComment::Table, DrinkComment::DrinkId)).eq(drink_id))
            .order_by((DrinkComment::Table, DrinkComment::CreatedAt), Order::Asc)
            .order_by_expr(Expr::cust("drink_comment.rowid"), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Comment, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    async fn find_comment(&self, id: &str) -> wsid_shared::Result<Option<Comment>> {
        let statement = select_comments()
            .and_where(Expr::col((DrinkComment::Table, DrinkComment::Id)).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, Comment, _>(&sql, values)
            .fetch_optional(&self.write_db)
            .await?)
    }
}

fn select_comments() -> sea_query::SelectStatement {
    Query::select()
        .column((DrinkComment::Table, DrinkComment::Id))
        .column((DrinkComment::Table, DrinkComment::DrinkId))
        .column((DrinkComment::Table, DrinkComment::UserId))
        .expr_as(Expr::col((User::Table, User::Name)), Alias::new("user_name"))
        .expr_as(Expr::col((DrinkComment::Table, DrinkComment::Body)), Alias::new("text"))
        .column((DrinkComment::Table, DrinkComment::CreatedAt))
        .from(DrinkComment::Table)
        .left_join(
            User::Table,
            Expr::col((User::Table, User::Id)).equals((DrinkComment::Table, DrinkComment::UserId)),
        )
        .to_owned()
}
