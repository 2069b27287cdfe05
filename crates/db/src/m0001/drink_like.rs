use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::DrinkLike;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(DrinkLike::Table)
        .col(
            ColumnDef::new(DrinkLike::UserId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(DrinkLike::DrinkId)
                .string()
                .not_null()
                .string_len(18),
        )
        .col(ColumnDef::new(DrinkLike::Value).tiny_integer().not_null())
        .col(
            ColumnDef::new(DrinkLike::CreatedAt)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(DrinkLike::UpdatedAt)
                .big_integer()
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(DrinkLike::UserId)
                .col(DrinkLike::DrinkId),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(DrinkLike::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_drink_like_drink_value")
        .table(DrinkLike::Table)
        .col(DrinkLike::DrinkId)
        .col(DrinkLike::Value)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_drink_like_drink_value")
        .table(DrinkLike::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
