use log::debug;

use super::deleted_message;
use crate::db::Store;
use crate::errors::Result;
use crate::models::role::NewRole;
use crate::utils::{table, to_json};

pub async fn view_roles(store: &Store) -> Result<()> {
    let roles = store.list_roles().await?;
    println!("{}", table::render(&roles, "No roles found."));
    Ok(())
}

pub async fn add_role(store: &Store, new_role: &NewRole) -> Result<()> {
    let role = store.add_role(new_role).await?;
    debug!("Inserted role {}", to_json(&role));
    println!("Role {} added to department ID {}.", role.title, role.department_id);
    Ok(())
}

pub async fn delete_role(store: &Store, role_id: i32) -> Result<()> {
    let deleted = store.delete_role(role_id).await?;
    if let Some(role) = &deleted {
        debug!("Deleted role {}", to_json(role));
    }
    let title = deleted.as_ref().map(|role| role.title.as_str());
    println!("{}", deleted_message("role", role_id, title));
    Ok(())
}
