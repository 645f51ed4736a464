use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned row identifier. Only used to address updates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(f, "{id}"),
            UserId::Text(id) => write!(f, "{id}"),
        }
    }
}

/// The editable part of a row. This is exactly what an update request sends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub country: String,
}

impl UserFields {
    pub fn get(&self, column: ColumnId) -> &str {
        match column {
            ColumnId::FirstName => &self.first_name,
            ColumnId::LastName => &self.last_name,
            ColumnId::PhoneNumber => &self.phone_number,
            ColumnId::Country => &self.country,
        }
    }

    pub fn set(&mut self, column: ColumnId, value: String) {
        match column {
            ColumnId::FirstName => self.first_name = value,
            ColumnId::LastName => self.last_name = value,
            ColumnId::PhoneNumber => self.phone_number = value,
            ColumnId::Country => self.country = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRow {
    pub id: UserId,
    #[serde(flatten)]
    pub fields: UserFields,
}

impl UserRow {
    /// Copy of this row with one column replaced, as produced by an inline edit.
    pub fn with_value(&self, column: ColumnId, value: String) -> UserRow {
        let mut edited = self.clone();
        edited.fields.set(column, value);
        edited
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColumnId {
    FirstName,
    LastName,
    PhoneNumber,
    Country,
}

impl ColumnId {
    /// Wire name, used both as the filter key and the sort column.
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnId::FirstName => "firstName",
            ColumnId::LastName => "lastName",
            ColumnId::PhoneNumber => "phoneNumber",
            ColumnId::Country => "country",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
