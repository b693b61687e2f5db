mod api;
mod app;
mod components;
mod models;
mod pages;
mod state;
mod storage;
mod util;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::App;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use crate::api::EnvConfig;
    use crate::pages::LoginPage;
    use crate::state::{AppContext, AppState};
    use crate::storage::{clear_session, load_session, save_session};
    use leptos::prelude::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_session_storage_roundtrip() {
        clear_session();
        assert!(load_session().is_none());

        save_session("u1");
        assert_eq!(load_session().as_deref(), Some("u1"));

        clear_session();
        assert!(load_session().is_none());
    }

    // The test harness page defines no window.ENV, so the default applies.
    #[wasm_bindgen_test]
    fn test_env_config_defaults_without_window_env() {
        let cfg = EnvConfig::new();
        assert_eq!(cfg.api_url, "http://localhost:3000");
    }

    #[wasm_bindgen_test]
    fn test_login_fields_submit_without_native_validation() {
        clear_session();
        mount_to_body(|| {
            provide_context(AppContext(AppState::new()));
            view! { <LoginPage /> }
        });

        let document = window().document().expect("document should exist");
        assert!(document
            .query_selector("#username")
            .expect("selector should parse")
            .is_some());
        assert!(document
            .query_selector("#password")
            .expect("selector should parse")
            .is_some());

        // Nothing blocks an empty submit; the server decides whether the
        // credentials pass.
        assert!(document
            .query_selector("input[required]")
            .expect("selector should parse")
            .is_none());
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
