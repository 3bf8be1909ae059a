use serde::{Deserialize, Serialize};
use tabled::Tabled;
use validator::Validate;

#[derive(sqlx::FromRow, Tabled, Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub id: i32,
    pub name: String,
}

#[derive(Deserialize, Validate, Debug, Clone, PartialEq)]
pub struct NewDepartment {
    #[validate(length(min = 1, max = 30, message = "must be 1 to 30 characters"))]
    pub name: String,
}
