use std::fmt;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub manager: Option<i32>,
}

/// A department joined with its manager. The manager columns are `None`
/// when the department has no manager or the reference dangles.
#[derive(sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct ManagedDepartment {
    pub id: i32,
    pub name: String,
    pub manager_name: Option<String>,
    pub manager_surname: Option<String>,
}

fn or_null(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

impl fmt::Display for ManagedDepartment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is managed by {} {}",
            self.id,
            self.name,
            or_null(&self.manager_name),
            or_null(&self.manager_surname)
        )
    }
}
