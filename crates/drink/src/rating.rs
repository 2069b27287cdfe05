use std::collections::BTreeSet;

use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use time::OffsetDateTime;
use validator::Validate;
use wsid_db::table::{Drink, DrinkLike};
use wsid_suggestion::UserPreference;

/// A user's verdict on a drink. Stored and sent as `1` / `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum LikeValue {
    Like,
    Dislike,
}

impl TryFrom<i8> for LikeValue {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(LikeValue::Like),
            -1 => Ok(LikeValue::Dislike),
            other => Err(format!("invalid like value {other}, expected 1 or -1")),
        }
    }
}

impl From<LikeValue> for i8 {
    fn from(value: LikeValue) -> Self {
        match value {
            LikeValue::Like => 1,
            LikeValue::Dislike => -1,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RateInput {
    #[validate(length(min = 1, max = 18))]
    pub drink_id: String,
    pub value: LikeValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub user_id: String,
    pub drink_id: String,
    pub value: LikeValue,
    pub updated_at: i64,
}

impl super::Command {
    /// Records a like or dislike. A user holds at most one rating per drink;
    /// rating again replaces the previous value.
    #[tracing::instrument(skip(self, input), fields(drink_id = %input.drink_id))]
    pub async fn rate(
        &self,
        user_id: &str,
        input: RateInput,
    ) -> wsid_shared::Result<Rating> {
        input.validate()?;
        self.ensure_exists(&input.drink_id).await?;

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let value: i8 = input.value.into();

        let statement = Query::insert()
            .into_table(DrinkLike::Table)
            .columns([
                DrinkLike::UserId,
                DrinkLike::DrinkId,
                DrinkLike::Value,
                DrinkLike::CreatedAt,
                DrinkLike::UpdatedAt,
            ])
            .values_panic([
                user_id.into(),
                input.drink_id.to_owned().into(),
                value.into(),
                now.into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([DrinkLike::UserId, DrinkLike::DrinkId])
                    .update_columns([DrinkLike::Value, DrinkLike::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(Rating {
            user_id: user_id.to_owned(),
            drink_id: input.drink_id,
            value: input.value,
            updated_at: now,
        })
    }

    /// Removes the user's rating for a drink. Returns whether one existed.
    pub async fn clear_rating(&self, user_id: &str, drink_id: &str) -> wsid_shared::Result<bool> {
        let statement = Query::delete()
            .from_table(DrinkLike::Table)
            .and_where(Expr::col(DrinkLike::UserId).eq(user_id))
            .and_where(Expr::col(DrinkLike::DrinkId).eq(drink_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.write_db).await?;

        Ok(result.rows_affected() > 0)
    }

    /// Liked and disliked tags from the user's current ratings.
    pub async fn preference(&self, user_id: &str) -> wsid_shared::Result<UserPreference> {
        let statement = Query::select()
            .column((Drink::Table, Drink::Tags))
            .column((DrinkLike::Table, DrinkLike::Value))
            .from(DrinkLike::Table)
            .inner_join(
                Drink::Table,
                Expr::col((Drink::Table, Drink::Id)).equals((DrinkLike::Table, DrinkLike::DrinkId)),
            )
            .and_where(Expr::col((DrinkLike::Table, DrinkLike::UserId)).eq(user_id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, (Json<BTreeSet<String>>, i8), _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut preference = UserPreference::default();
        for (tags, value) in rows {
            match LikeValue::try_from(value) {
                Ok(LikeValue::Like) => preference.liked_tags.extend(tags.0),
                Ok(LikeValue::Dislike) => preference.disliked_tags.extend(tags.0),
                Err(err) => tracing::warn!("Ignoring stored rating: {err}"),
            }
        }

        Ok(preference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_value_wire_format() {
        assert_eq!(serde_json::to_string(&LikeValue::Like).unwrap(), "1");
        assert_eq!(serde_json::to_string(&LikeValue::Dislike).unwrap(), "-1");
        assert_eq!(
            serde_json::from_str::<LikeValue>("-1").unwrap(),
            LikeValue::Dislike
        );
        assert!(serde_json::from_str::<LikeValue>("0").is_err());
        assert!(serde_json::from_str::<LikeValue>("2").is_err());
    }
}
