use crate::api::ApiClient;
use crate::models::{ListItem, Title};
use crate::storage::load_session;
use leptos::prelude::*;
use std::collections::HashMap;

/// Which board dialog is open. At most one at a time; Escape and the
/// close buttons reset to `None`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub(crate) enum BoardDialog {
    #[default]
    None,

    /// Inline rename editor on one title row.
    RenameTitle { title_id: i64 },

    /// Bulk item editor for one title.
    EditItems { title_id: i64 },

    /// New-task overlay.
    AddTask,
}

#[derive(Clone)]
pub(crate) struct AppState {
    pub api_client: RwSignal<ApiClient>,

    /// Logged-in username, mirrored in localStorage.
    pub session: RwSignal<Option<String>>,

    /// Board columns, replaced wholesale on every refresh.
    pub ongoing: RwSignal<Vec<Title>>,
    pub done: RwSignal<Vec<Title>>,

    /// Items keyed by title id; filled by expansion fetches and by the
    /// item editor on save.
    pub lists: RwSignal<HashMap<i64, Vec<ListItem>>>,

    pub board_loading: RwSignal<bool>,
    pub board_loaded_once: RwSignal<bool>,

    /// Refresh guards (ignore responses from superseded requests).
    pub board_request_id: RwSignal<u64>,
    pub lists_request_id: RwSignal<u64>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            api_client: RwSignal::new(ApiClient::from_env()),
            session: RwSignal::new(load_session()),
            ongoing: RwSignal::new(vec![]),
            done: RwSignal::new(vec![]),
            lists: RwSignal::new(HashMap::new()),
            board_loading: RwSignal::new(false),
            board_loaded_once: RwSignal::new(false),
            board_request_id: RwSignal::new(0),
            lists_request_id: RwSignal::new(0),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub(crate) struct AppContext(pub AppState);
