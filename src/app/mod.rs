use crate::pages::{LoginPage, RequireSession, RootPage, TodoBoardPage};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext(AppState::new()));

    // IMPORTANT:
    // - Leptos CSR requires the `csr` feature on `leptos`.
    // - router hooks require a <Router> context.
    view! {
        <Router>
            <Routes fallback=|| view! { <div class="px-4 py-8 text-xs text-muted-foreground">"Not found"</div> }>
                <Route path=path!("login") view=LoginPage />
                <Route path=path!("todo") view=move || view! {
                    <RequireSession>
                        <TodoBoardPage />
                    </RequireSession>
                } />
                <Route path=path!("") view=RootPage />
            </Routes>
        </Router>
    }
}
