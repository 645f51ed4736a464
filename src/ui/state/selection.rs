use crate::domain::entities::user::UserRow;

/// Rows currently selected in the grid. Every selection event replaces the
/// whole list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionStore {
    rows: Vec<UserRow>,
}

impl SelectionStore {
    pub fn set_selection(&mut self, rows: Vec<UserRow>) {
        self.rows = rows;
    }

    pub fn selection(&self) -> &[UserRow] {
        &self.rows
    }

    pub fn contains(&self, row: &UserRow) -> bool {
        self.rows.iter().any(|selected| selected.id == row.id)
    }
}

/// Selection after toggling `row`'s checkbox. The grid selects within the
/// visible page, so the result is in page order and rows from other pages are
/// dropped.
pub fn toggle_row(page_rows: &[UserRow], current: &[UserRow], row: &UserRow) -> Vec<UserRow> {
    page_rows
        .iter()
        .filter(|candidate| {
            let selected = current.iter().any(|s| s.id == candidate.id);
            if candidate.id == row.id {
                !selected
            } else {
                selected
            }
        })
        .cloned()
        .collect()
}

/// Header checkbox: all rows of the page, or none when they already are.
pub fn toggle_all(page_rows: &[UserRow], current: &[UserRow]) -> Vec<UserRow> {
    let all_selected =
        !page_rows.is_empty() && page_rows.iter().all(|row| current.iter().any(|s| s.id == row.id));
    if all_selected {
        Vec::new()
    } else {
        page_rows.to_vec()
    }
}
