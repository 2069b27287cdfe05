use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Name,
    Password,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum Drink {
    Table,
    Id,
    Name,
    Description,
    Ingredients,
    Steps,
    Tags,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum DrinkLike {
    Table,
    UserId,
    DrinkId,
    Value,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum DrinkLog {
    Table,
    Id,
    UserId,
    DrinkId,
    CreatedAt,
}

#[derive(Iden, Clone)]
pub enum DrinkComment {
    Table,
    Id,
    DrinkId,
    UserId,
    Body,
    CreatedAt,
}
