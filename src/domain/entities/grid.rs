use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::{ColumnId, UserRow};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    pub id: ColumnId,
    pub title: &'static str,
    /// Label used by the read-only detail panel.
    pub detail_label: &'static str,
    pub filterable: bool,
    pub sortable: bool,
    pub editable: bool,
    pub resizable: bool,
}

pub const COLUMNS: [ColumnDescriptor; 4] = [
    ColumnDescriptor {
        id: ColumnId::FirstName,
        title: "First Name",
        detail_label: "First Name",
        filterable: true,
        sortable: true,
        editable: true,
        resizable: true,
    },
    ColumnDescriptor {
        id: ColumnId::LastName,
        title: "Last Name",
        detail_label: "Last Name",
        filterable: true,
        sortable: true,
        editable: true,
        resizable: true,
    },
    ColumnDescriptor {
        id: ColumnId::PhoneNumber,
        title: "Phone #",
        detail_label: "Phone",
        filterable: true,
        sortable: true,
        editable: true,
        resizable: true,
    },
    ColumnDescriptor {
        id: ColumnId::Country,
        title: "Country",
        detail_label: "Country",
        filterable: true,
        sortable: true,
        editable: true,
        resizable: true,
    },
];

pub fn column(id: ColumnId) -> &'static ColumnDescriptor {
    match id {
        ColumnId::FirstName => &COLUMNS[0],
        ColumnId::LastName => &COLUMNS[1],
        ColumnId::PhoneNumber => &COLUMNS[2],
        ColumnId::Country => &COLUMNS[3],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: ColumnId,
    pub direction: SortDirection,
}

/// Header click cycle: unsorted -> asc -> desc -> unsorted. Clicking another
/// column starts that column at asc.
pub fn next_sort(current: Option<SortSpec>, clicked: ColumnId) -> Option<SortSpec> {
    match current {
        Some(SortSpec { column, direction }) if column == clicked => match direction {
            SortDirection::Asc => Some(SortSpec {
                column,
                direction: SortDirection::Desc,
            }),
            SortDirection::Desc => None,
        },
        _ => Some(SortSpec {
            column: clicked,
            direction: SortDirection::Asc,
        }),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    pub filter: Option<BTreeMap<ColumnId, String>>,
    pub sort: Option<SortSpec>,
}

impl FetchOptions {
    /// Builds options from the grid's filter inputs; blank inputs are dropped.
    pub fn from_inputs(inputs: &BTreeMap<ColumnId, String>, sort: Option<SortSpec>) -> Self {
        let filter: BTreeMap<ColumnId, String> = inputs
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(column, value)| (*column, value.clone()))
            .collect();
        FetchOptions {
            filter: (!filter.is_empty()).then_some(filter),
            sort,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub options: FetchOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchMeta {
    pub total: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub data: Vec<UserRow>,
    pub meta: FetchMeta,
}

/// Number of pages for `total` rows; an empty result still has one page.
pub fn page_count(total: u64, size: u64) -> u64 {
    if size == 0 {
        return 1;
    }
    total.div_ceil(size).max(1)
}
