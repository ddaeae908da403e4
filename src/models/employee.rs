#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: i32,
    pub name: String,
    pub surname: String,
}
