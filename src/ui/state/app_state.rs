use std::collections::BTreeMap;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::edit::CellKey;
use crate::domain::entities::grid::SortSpec;
use crate::domain::entities::user::{ColumnId, UserRow};

pub struct GridState {
    pub rows: Signal<Vec<UserRow>>,
    pub page: Signal<u64>,
    pub total_rows: Signal<u64>,
    pub filter_inputs: Signal<BTreeMap<ColumnId, String>>,
    pub sort: Signal<Option<SortSpec>>,
    /// Bumped to re-run the current query, e.g. after a successful update.
    pub reload_nonce: Signal<u64>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
    pub last_error: Signal<Option<String>>,
    pub editing_cell: Signal<Option<CellKey>>,
    pub editing_value: Signal<String>,
}

impl GridState {
    pub fn new() -> Self {
        Self {
            rows: use_signal(Vec::<UserRow>::new),
            page: use_signal(|| 0_u64),
            total_rows: use_signal(|| 0_u64),
            filter_inputs: use_signal(BTreeMap::<ColumnId, String>::new),
            sort: use_signal(|| None::<SortSpec>),
            reload_nonce: use_signal(|| 0_u64),
            busy: use_signal(|| false),
            status: use_signal(|| "Ready".to_string()),
            last_error: use_signal(|| None::<String>),
            editing_cell: use_signal(|| None::<CellKey>),
            editing_value: use_signal(String::new),
        }
    }
}
