use serde::{Deserialize, Serialize};

/// A named group of to-do items. One board row.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Title {
    pub id: i64,
    pub title: String,
}

/// One checkable entry belonging to a title.
///
/// `id` is `None` for rows staged in the edit dialog that were never
/// persisted; the backend assigns an id on first save.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListItem {
    pub id: Option<i64>,
    pub list_desc: String,

    /// `true` once the item has been checked off. Checking is one-way.
    #[serde(default)]
    pub status: bool,
}
