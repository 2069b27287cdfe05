use serde::Serialize;
use sqlx::prelude::FromRow;
use time::OffsetDateTime;
use wsid_suggestion::Drink;

use crate::{repository::DrinkRow, streak::current_streak};

/// Entries per leaderboard list.
pub const LEADERBOARD_SIZE: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUser {
    pub id: String,
    pub name: Option<String>,
    pub drinks_made: i64,
    pub streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedDrink {
    #[serde(flatten)]
    pub drink: Drink,
    pub likes: i64,
    pub dislikes: i64,
    pub drank: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub top_users: Vec<TopUser>,
    pub most_liked: Vec<LikedDrink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub likes: i64,
    pub dislikes: i64,
    pub drinks_made: i64,
    pub streak: u32,
}

#[derive(FromRow)]
struct TopUserRow {
    id: String,
    name: Option<String>,
    drinks_made: i64,
}

#[derive(FromRow)]
struct LikedDrinkRow {
    #[sqlx(flatten)]
    drink: DrinkRow,
    likes: i64,
    dislikes: i64,
    drank: i64,
}

const TOP_USERS_SQL: &str = r#"
SELECT u."id", u."name", COUNT(l."id") AS "drinks_made"
FROM "user" u
LEFT JOIN "drink_log" l ON l."user_id" = u."id"
GROUP BY u."id", u."name"
ORDER BY "drinks_made" DESC, u."created_at" ASC
LIMIT ?
"#;

const MOST_LIKED_SQL: &str = r#"
SELECT d."id", d."name", d."description", d."ingredients", d."steps", d."tags",
    (SELECT COUNT(*) FROM "drink_like" k WHERE k."drink_id" = d."id" AND k."value" = 1) AS "likes",
    (SELECT COUNT(*) FROM "drink_like" k WHERE k."drink_id" = d."id" AND k."value" = -1) AS "dislikes",
    (SELECT COUNT(*) FROM "drink_log" g WHERE g."drink_id" = d."id") AS "drank"
FROM "drink" d
ORDER BY "likes" DESC, d."created_at" ASC
LIMIT ?
"#;

const USER_STATS_SQL: &str = r#"
SELECT
    (SELECT COUNT(*) FROM "drink_like" WHERE "user_id" = ? AND "value" = 1),
    (SELECT COUNT(*) FROM "drink_like" WHERE "user_id" = ? AND "value" = -1),
    (SELECT COUNT(*) FROM "drink_log" WHERE "user_id" = ?)
"#;

impl super::Command {
    /// Most active users by drinks logged and most liked drinks.
    pub async fn leaderboard(&self) -> wsid_shared::Result<Leaderboard> {
        let today = OffsetDateTime::now_utc().date();

        let rows = sqlx::query_as::<_, TopUserRow>(TOP_USERS_SQL)
            .bind(LEADERBOARD_SIZE)
            .fetch_all(&self.read_db)
            .await?;

        let mut top_users = Vec::with_capacity(rows.len());
        for row in rows {
            let streak = if row.drinks_made > 0 {
                current_streak(self.log_timestamps(&row.id).await?, today)
            } else {
                0
            };

            top_users.push(TopUser {
                id: row.id,
                name: row.name,
                drinks_made: row.drinks_made,
                streak,
            });
        }

        let most_liked = sqlx::query_as::<_, LikedDrinkRow>(MOST_LIKED_SQL)
            .bind(LEADERBOARD_SIZE)
            .fetch_all(&self.read_db)
            .await?
            .into_iter()
            .map(|row| LikedDrink {
                drink: row.drink.into(),
                likes: row.likes,
                dislikes: row.dislikes,
                drank: row.drank,
            })
            .collect();

        Ok(Leaderboard {
            top_users,
            most_liked,
        })
    }

    /// Rating counts, drinks made and current streak for one user.
    pub async fn user_stats(&self, user_id: &str) -> wsid_shared::Result<UserStats> {
        let (likes, dislikes, drinks_made) =
            sqlx::query_as::<_, (i64, i64, i64)>(USER_STATS_SQL)
                .bind(user_id)
                .bind(user_id)
                .bind(user_id)
                .fetch_one(&self.read_db)
                .await?;

        let streak = current_streak(
            self.log_timestamps(user_id).await?,
            OffsetDateTime::now_utc().date(),
        );

        Ok(UserStats {
            likes,
            dislikes,
            drinks_made,
            streak,
        })
    }
}
