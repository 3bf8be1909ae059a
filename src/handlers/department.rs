use log::debug;
use rust_decimal::Decimal;

use super::deleted_message;
use crate::db::Store;
use crate::errors::Result;
use crate::models::department::{Department, NewDepartment};
use crate::utils::{table, to_json};

pub async fn view_departments(store: &Store) -> Result<()> {
    let departments = store.list_departments().await?;
    println!("{}", table::render(&departments, "No departments found."));
    Ok(())
}

pub async fn add_department(store: &Store, new_department: &NewDepartment) -> Result<()> {
    let department = store.add_department(new_department).await?;
    debug!("Inserted department {}", to_json(&department));
    println!("Department {} added.", department.name);
    Ok(())
}

pub async fn view_budget(store: &Store, department: &Department) -> Result<()> {
    let total = store.total_budget_by_department(department.id).await?;
    println!("{}", budget_message(department, total));
    Ok(())
}

pub async fn delete_department(store: &Store, department_id: i32) -> Result<()> {
    let deleted = store.delete_department(department_id).await?;
    if let Some(department) = &deleted {
        debug!("Deleted department {}", to_json(department));
    }
    let name = deleted.as_ref().map(|dept| dept.name.as_str());
    println!("{}", deleted_message("department", department_id, name));
    Ok(())
}

pub fn budget_message(department: &Department, total: Option<Decimal>) -> String {
    match total {
        Some(total) => format!("Total utilized budget of {}: {}", department.name, total),
        None => format!("No employees in {}; budget is undefined.", department.name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engineering() -> Department {
        Department {
            id: 1,
            name: "Engineering".into(),
        }
    }

    #[test]
    fn budget_message_shows_the_sum() {
        assert_eq!(
            budget_message(&engineering(), Some(dec!(125000.50))),
            "Total utilized budget of Engineering: 125000.50"
        );
    }

    #[test]
    fn budget_message_distinguishes_no_employees_from_zero() {
        assert_eq!(
            budget_message(&engineering(), None),
            "No employees in Engineering; budget is undefined."
        );
        assert_eq!(
            budget_message(&engineering(), Some(dec!(0))),
            "Total utilized budget of Engineering: 0"
        );
    }
}
