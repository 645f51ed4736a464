use crate::domain::entities::user::{ColumnId, UserId};

/// The cell currently open for inline editing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CellKey {
    pub row_id: UserId,
    pub column: ColumnId,
}
