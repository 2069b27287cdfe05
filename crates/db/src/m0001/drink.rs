use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Drink;

pub struct CreateTable;

// ingredients, steps and tags hold JSON arrays of strings
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Drink::Table)
        .col(
            ColumnDef::new(Drink::Id)
                .string()
                .not_null()
                .string_len(18)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Drink::Name)
                .string()
                .not_null()
                .string_len(100),
        )
        .col(
            ColumnDef::new(Drink::Description)
                .string()
                .not_null()
                .default(""),
        )
        .col(ColumnDef::new(Drink::Ingredients).text().not_null())
        .col(ColumnDef::new(Drink::Steps).text().not_null())
        .col(ColumnDef::new(Drink::Tags).text().not_null())
        .col(ColumnDef::new(Drink::CreatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Drink::Table).to_owned()
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
