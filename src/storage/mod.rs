pub(crate) const SESSION_USERNAME_KEY: &str = "todo_username";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub(crate) fn save_session(username: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(SESSION_USERNAME_KEY, username);
    }
}

pub(crate) fn load_session() -> Option<String> {
    local_storage().and_then(|s| s.get_item(SESSION_USERNAME_KEY).ok().flatten())
}

pub(crate) fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_USERNAME_KEY);
    }
}
