use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Renders rows as a table, or `empty` when there are none.
pub fn render<T: Tabled>(rows: &[T], empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }
    Table::new(rows).with(Style::psql()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::Department;

    #[test]
    fn empty_rows_render_the_placeholder() {
        let rows: Vec<Department> = Vec::new();
        assert_eq!(render(&rows, "No departments found."), "No departments found.");
    }

    #[test]
    fn rows_render_with_headers() {
        let rows = vec![
            Department { id: 1, name: "Engineering".into() },
            Department { id: 2, name: "Sales".into() },
        ];
        let table = render(&rows, "No departments found.");
        let header = table.lines().next().unwrap();
        assert!(header.contains("id"));
        assert!(header.contains("name"));
        assert!(table.contains("Engineering"));
        assert!(table.contains("Sales"));
    }
}
