mod drink;
mod drink_comment;
mod drink_like;
mod drink_log;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "wsid",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        drink::CreateTable,
        drink_like::CreateTable,
        drink_like::CreateIdx1,
        drink_log::CreateTable,
        drink_log::CreateIdx1,
        drink_log::CreateIdx2,
        drink_comment::CreateTable,
        drink_comment::CreateIdx1
    ]
);
