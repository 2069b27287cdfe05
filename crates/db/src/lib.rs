use sqlx::Sqlite;
use sqlx_migrator::{Info, Migrator};

mod m0001;
pub mod table;

pub fn migrator() -> Result<Migrator<Sqlite>, sqlx_migrator::Error> {
    let mut migrator = Migrator::<Sqlite>::default();
    migrator.add_migrations(vec![Box::new(m0001::Migration)])?;

    Ok(migrator)
}
