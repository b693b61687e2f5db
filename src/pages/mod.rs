use crate::api::{ApiClient, ApiErrorKind, ApiResult};
use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, Checkbox, Input, Label, Spinner,
};
use crate::components::AddTaskModal;
use crate::models::{ListItem, Title};
use crate::state::{AppContext, BoardDialog};
use crate::storage::{clear_session, save_session};
use crate::util::{partition_titles, plan_item_saves, ItemSaveOp};
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use wasm_bindgen::JsCast;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username: RwSignal<String> = RwSignal::new(String::new());
    let password: RwSignal<String> = RwSignal::new(String::new());
    let show_error: RwSignal<bool> = RwSignal::new(false);
    let loading: RwSignal<bool> = RwSignal::new(false);

    let app_state = expect_context::<AppContext>();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get();
        let password_val = password.get();
        let api_client = app_state.0.api_client.get_untracked();

        loading.set(true);
        show_error.set(false);

        spawn_local(async move {
            match api_client.check_account(&username_val, &password_val).await {
                Ok(true) => {
                    save_session(&username_val);
                    app_state.0.session.set(Some(username_val));
                    let _ = window().location().set_href("/todo");
                }
                Ok(false) => {
                    show_error.set(true);
                }
                Err(e) => {
                    // Transport problems are logged, not shown; the banner is
                    // reserved for a definite credential rejection.
                    web_sys::console::error_1(&format!("Login error: {}", e).into());
                }
            }
            loading.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex items-center justify-center">
                    <a href="/" class="text-sm font-medium text-foreground">"To-Do Board"</a>
                </div>

                <Card>
                    <CardHeader>
                        <CardTitle class="text-lg">"Log in"</CardTitle>
                        <CardDescription class="text-xs">"Use your username and password to continue."</CardDescription>
                    </CardHeader>

                    <CardContent>
                        <form class="flex flex-col gap-3" on:submit=on_submit>
                        <div class="flex flex-col gap-1.5">
                            <Label html_for="username" class="text-xs">"Username"</Label>
                            <Input
                                id="username"
                                r#type="text"
                                placeholder="yourname"
                                bind_value=username
                                class="h-8 text-sm"
                            />
                        </div>

                        <div class="flex flex-col gap-1.5">
                            <Label html_for="password" class="text-xs">"Password"</Label>
                            <Input
                                id="password"
                                r#type="password"
                                placeholder="••••••••"
                                bind_value=password
                                class="h-8 text-sm"
                            />
                        </div>

                        <Show when=move || show_error.get() fallback=|| ().into_view()>
                            <Alert class="border-destructive/30">
                                <AlertDescription class="text-destructive text-xs">
                                    "Invalid username or password"
                                </AlertDescription>
                            </Alert>
                        </Show>

                        <Button
                            class="w-full"
                            size=ButtonSize::Sm
                            attr:disabled=move || loading.get()
                        >
                            <span class="inline-flex items-center gap-2">
                                <Show when=move || loading.get() fallback=|| ().into_view()>
                                    <Spinner />
                                </Show>
                                {move || if loading.get() { "Signing in..." } else { "Continue" }}
                            </span>
                        </Button>
                    </form>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}

const BANNER_CLEAR_MS: i32 = 3_000;

/// Show a success banner and schedule its removal. Timers are not
/// cancelled; an earlier one may clear a later banner sooner.
fn flash_banner(banner: RwSignal<Option<String>>, text: &str) {
    banner.set(Some(text.to_string()));

    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
        wasm_bindgen::closure::Closure::once_into_js(move || {
            banner.set(None);
        })
        .as_ref()
        .unchecked_ref(),
        BANNER_CLEAR_MS,
    );
}

/// Fetch every title plus its items, then split into columns. Any failed
/// fetch fails the whole refresh so the board never shows a half-classified
/// state.
async fn fetch_board(api_client: &ApiClient) -> ApiResult<(Vec<Title>, Vec<Title>)> {
    let titles = api_client.get_titles().await?;

    let fetches: Vec<_> = titles
        .iter()
        .map(|t| {
            let api_client = api_client.clone();
            let title_id = t.id;
            async move { api_client.get_lists(title_id).await }
        })
        .collect();
    let results = futures::future::join_all(fetches).await;

    let mut pairs = Vec::with_capacity(titles.len());
    for (title, items) in titles.into_iter().zip(results) {
        pairs.push((title, items?));
    }

    Ok(partition_titles(pairs))
}

/// One row in the item editor. The text lives in its own signal so typing
/// does not rebuild the row list (and lose focus).
#[derive(Clone)]
struct StagedItem {
    id: Option<i64>,
    desc: RwSignal<String>,
    status: bool,
}

impl StagedItem {
    fn from_item(item: &ListItem) -> Self {
        Self {
            id: item.id,
            desc: RwSignal::new(item.list_desc.clone()),
            status: item.status,
        }
    }

    fn to_item(&self) -> ListItem {
        ListItem {
            id: self.id,
            list_desc: self.desc.get_untracked(),
            status: self.status,
        }
    }
}

#[component]
pub fn TodoBoardPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let ongoing = app_state.0.ongoing;
    let done = app_state.0.done;
    let lists = app_state.0.lists;

    // Expanded title row, at most one across both columns.
    let expanded: RwSignal<Option<i64>> = RwSignal::new(None);
    let dialog: RwSignal<BoardDialog> = RwSignal::new(BoardDialog::None);
    let banner: RwSignal<Option<String>> = RwSignal::new(None);

    let rename_value: RwSignal<String> = RwSignal::new(String::new());
    let rename_loading: RwSignal<bool> = RwSignal::new(false);

    let staged_items: RwSignal<Vec<StagedItem>> = RwSignal::new(vec![]);
    let edit_saving: RwSignal<bool> = RwSignal::new(false);

    let load_board = move || {
        let req_id = app_state
            .0
            .board_request_id
            .get_untracked()
            .saturating_add(1);
        app_state.0.board_request_id.set(req_id);
        app_state.0.board_loading.set(true);

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            let result = fetch_board(&api_client).await;

            // Ignore stale responses.
            if app_state.0.board_request_id.get_untracked() != req_id {
                return;
            }

            match result {
                Ok((ongoing_titles, done_titles)) => {
                    app_state.0.ongoing.set(ongoing_titles);
                    app_state.0.done.set(done_titles);
                }
                Err(e) if e.kind == ApiErrorKind::Network => {
                    // Columns keep their last contents until a refresh succeeds.
                    web_sys::console::error_1(
                        &format!("Backend unreachable, board not refreshed: {}", e).into(),
                    );
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching titles: {}", e).into());
                }
            }

            app_state.0.board_loading.set(false);
            app_state.0.board_loaded_once.set(true);
        });
    };

    let bump_lists_req = move || {
        let req_id = app_state
            .0
            .lists_request_id
            .get_untracked()
            .saturating_add(1);
        app_state.0.lists_request_id.set(req_id);
        req_id
    };

    // The Done column only ever shows finished items.
    let load_lists_for = move |title_id: i64, checked_only: bool| {
        let req_id = bump_lists_req();
        let api_client = app_state.0.api_client.get_untracked();

        spawn_local(async move {
            let result = api_client.get_lists(title_id).await;

            // A later expand/collapse supersedes this response.
            if app_state.0.lists_request_id.get_untracked() != req_id {
                return;
            }

            match result {
                Ok(mut items) => {
                    if checked_only {
                        items.retain(|i| i.status);
                    }
                    app_state.0.lists.update(|m| {
                        m.insert(title_id, items);
                    });
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching lists: {}", e).into());
                }
            }
        });
    };

    let on_toggle_title = move |title_id: i64, checked_only: bool| {
        if expanded.get_untracked() == Some(title_id) {
            expanded.set(None);
            // Invalidate any in-flight item fetch for the row we just closed.
            bump_lists_req();
        } else {
            expanded.set(Some(title_id));
            load_lists_for(title_id, checked_only);
        }
    };

    let on_check_item = move |title_id: i64, list_id: i64| {
        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match api_client.update_status(title_id, list_id).await {
                Ok(()) => {
                    // The title may have switched columns; collapse and refetch.
                    expanded.set(None);
                    load_board();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error updating task status: {}", e).into(),
                    );
                }
            }
        });
    };

    let open_rename = move |title_id: i64, current: String| {
        rename_value.set(current);
        dialog.set(BoardDialog::RenameTitle { title_id });
    };

    let on_submit_rename = move |_: web_sys::MouseEvent| {
        if rename_loading.get_untracked() {
            return;
        }

        let BoardDialog::RenameTitle { title_id } = dialog.get_untracked() else {
            return;
        };

        // Empty text never overwrites a title; the editor stays open.
        let new_title = rename_value.get_untracked();
        if new_title.trim().is_empty() {
            return;
        }

        let api_client = app_state.0.api_client.get_untracked();
        rename_loading.set(true);

        spawn_local(async move {
            match api_client.update_title(title_id, &new_title).await {
                Ok(()) => {
                    dialog.set(BoardDialog::None);
                    flash_banner(banner, "Title updated successfully!");
                    load_board();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error updating title: {}", e).into());
                }
            }
            rename_loading.set(false);
        });
    };

    let on_delete_title = move |title_id: i64| {
        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match api_client.delete_todo(title_id).await {
                Ok(()) => {
                    if expanded.get_untracked() == Some(title_id) {
                        expanded.set(None);
                    }
                    app_state.0.lists.update(|m| {
                        m.remove(&title_id);
                    });
                    flash_banner(banner, "Deleted successfully!");
                    load_board();
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error deleting task: {}", e).into());
                }
            }
        });
    };

    let open_edit_items = move |title_id: i64| {
        let current = app_state
            .0
            .lists
            .get_untracked()
            .get(&title_id)
            .cloned()
            .unwrap_or_default();
        staged_items.set(current.iter().map(StagedItem::from_item).collect());
        dialog.set(BoardDialog::EditItems { title_id });
    };

    let on_add_staged_row = move || {
        staged_items.update(|rows| {
            rows.push(StagedItem {
                id: None,
                desc: RwSignal::new(String::new()),
                status: false,
            });
        });
    };

    // Persisted rows are deleted on the backend immediately; unsaved rows
    // just disappear from the stage.
    let on_delete_staged_row = move |index: usize| {
        let Some(row) = staged_items.get_untracked().get(index).cloned() else {
            return;
        };

        let Some(list_id) = row.id else {
            staged_items.update(|rows| {
                rows.remove(index);
            });
            return;
        };

        let BoardDialog::EditItems { title_id } = dialog.get_untracked() else {
            return;
        };

        let api_client = app_state.0.api_client.get_untracked();
        spawn_local(async move {
            match api_client.delete_list(list_id).await {
                Ok(()) => {
                    // Rows may have shifted while the request ran; drop by id.
                    staged_items.update(|rows| rows.retain(|r| r.id != Some(list_id)));
                    load_lists_for(title_id, false);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error deleting list item: {}", e).into(),
                    );
                }
            }
        });
    };

    let on_save_staged = move |_: web_sys::MouseEvent| {
        if edit_saving.get_untracked() {
            return;
        }

        let BoardDialog::EditItems { title_id } = dialog.get_untracked() else {
            return;
        };

        let staged: Vec<ListItem> = staged_items
            .get_untracked()
            .iter()
            .map(StagedItem::to_item)
            .collect();
        let api_client = app_state.0.api_client.get_untracked();
        edit_saving.set(true);

        spawn_local(async move {
            let mut saved = staged.clone();
            let mut failed = false;

            for (i, op) in plan_item_saves(&staged).into_iter().enumerate() {
                let result = match op {
                    ItemSaveOp::Update { list_id, desc } => {
                        api_client.update_list(list_id, &desc).await
                    }
                    ItemSaveOp::Add { desc } => match api_client.add_list(title_id, &desc).await {
                        Ok(new_id) => {
                            saved[i].id = Some(new_id);
                            Ok(())
                        }
                        Err(e) => Err(e),
                    },
                };

                if let Err(e) = result {
                    web_sys::console::error_1(&format!("Error saving list: {}", e).into());
                    failed = true;
                    break;
                }
            }

            if !failed {
                app_state.0.lists.update(|m| {
                    m.insert(title_id, saved);
                });
                dialog.set(BoardDialog::None);
                flash_banner(banner, "List updated successfully!");
                load_board();
            }

            edit_saving.set(false);
        });
    };

    let on_task_saved = move |new_title_id: i64| {
        load_board();
        expanded.set(Some(new_title_id));
        load_lists_for(new_title_id, false);
    };

    let on_logout = move |_| {
        clear_session();
        app_state.0.session.set(None);
        app_state.0.ongoing.set(vec![]);
        app_state.0.done.set(vec![]);
        app_state.0.lists.update(|m| m.clear());
        app_state.0.board_loaded_once.set(false);
        let _ = window().location().set_href("/login");
    };

    // Esc closes whichever dialog is open.
    let _key_handle = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if ev.key().to_lowercase() != "escape" {
            return;
        }
        if dialog.get_untracked() != BoardDialog::None {
            dialog.set(BoardDialog::None);
        }
    });

    // Initial load; every read inside is untracked, so this runs once per mount.
    Effect::new(move |_| {
        load_board();
    });

    view! {
        <div class="min-h-screen bg-background text-foreground">
            <div class="mx-auto flex min-h-screen w-full max-w-4xl flex-col gap-6 px-4 py-8">
                <div class="flex items-center justify-between">
                    <div class="flex items-baseline gap-3">
                        <h1 class="text-lg font-medium">"To-Do List"</h1>
                        <span class="text-xs text-muted-foreground">
                            {move || app_state.0.session.get().unwrap_or_default()}
                        </span>
                        // Refresh indicator; the first load gets the centered spinner below.
                        <Show
                            when=move || {
                                app_state.0.board_loading.get() && app_state.0.board_loaded_once.get()
                            }
                            fallback=|| ().into_view()
                        >
                            <Spinner class="size-3" />
                        </Show>
                    </div>

                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        on:click=on_logout
                    >
                        "Log out"
                    </Button>
                </div>

                <Show
                    when=move || app_state.0.board_loaded_once.get()
                    fallback=|| view! {
                        <div class="flex flex-1 items-center justify-center py-16">
                            <Spinner class="size-6" />
                        </div>
                    }
                >
                    <div class="flex w-full flex-col gap-4 sm:flex-row">
                        <Card class="flex-1 self-start">
                            <CardHeader>
                                <CardTitle class="text-sm">"Ongoing"</CardTitle>
                            </CardHeader>
                            <CardContent class="space-y-2">
                                <Show when=move || banner.get().is_some() fallback=|| ().into_view()>
                                    {move || banner.get().map(|text| view! {
                                        <Alert>
                                            <AlertDescription class="text-xs">{text}</AlertDescription>
                                        </Alert>
                                    })}
                                </Show>

                                <Show when=move || ongoing.get().is_empty() fallback=|| ().into_view()>
                                    <div class="text-xs text-muted-foreground">"No ongoing tasks."</div>
                                </Show>

                                {move || {
                                    let current_dialog = dialog.get();
                                    let expanded_id = expanded.get();
                                    let lists_map = lists.get();

                                    ongoing
                                        .get()
                                        .into_iter()
                                        .map(|t| {
                                            let title_id = t.id;
                                            let is_expanded = expanded_id == Some(title_id);
                                            let is_renaming =
                                                current_dialog == (BoardDialog::RenameTitle { title_id });

                                            let header = if is_renaming {
                                                view! {
                                                    <div class="flex flex-col gap-1.5 p-2">
                                                        <Input bind_value=rename_value class="h-8 text-sm" />
                                                        <div class="flex items-center justify-end gap-1">
                                                            <Button
                                                                size=ButtonSize::Sm
                                                                attr:disabled=move || rename_loading.get()
                                                                on:click=on_submit_rename
                                                            >
                                                                {move || if rename_loading.get() { "Saving..." } else { "Save" }}
                                                            </Button>
                                                            <Button
                                                                variant=ButtonVariant::Outline
                                                                size=ButtonSize::Sm
                                                                on:click=move |_| dialog.set(BoardDialog::None)
                                                            >
                                                                "Cancel"
                                                            </Button>
                                                        </div>
                                                    </div>
                                                }
                                                .into_any()
                                            } else {
                                                let title_text = t.title.clone();
                                                let title_for_rename = t.title.clone();
                                                let row_class = if is_expanded {
                                                    "flex items-center gap-1 bg-accent p-2"
                                                } else {
                                                    "flex items-center gap-1 p-2"
                                                };

                                                view! {
                                                    <div class=row_class>
                                                        <button
                                                            class="min-w-0 flex-1 truncate text-left text-sm hover:underline"
                                                            on:click=move |_| on_toggle_title(title_id, false)
                                                        >
                                                            {title_text}
                                                        </button>

                                                        <Button
                                                            variant=ButtonVariant::Ghost
                                                            size=ButtonSize::Icon
                                                            class="h-7 w-7"
                                                            attr:title="Rename"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                open_rename(title_id, title_for_rename.clone());
                                                            }
                                                        >
                                                            <svg
                                                                xmlns="http://www.w3.org/2000/svg"
                                                                width="16"
                                                                height="16"
                                                                viewBox="0 0 24 24"
                                                                fill="none"
                                                                stroke="currentColor"
                                                                stroke-width="2"
                                                                stroke-linecap="round"
                                                                stroke-linejoin="round"
                                                                class="text-muted-foreground"
                                                                aria-hidden="true"
                                                            >
                                                                <path d="M12 20h9" />
                                                                <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                                                            </svg>
                                                        </Button>

                                                        <Button
                                                            variant=ButtonVariant::Ghost
                                                            size=ButtonSize::Icon
                                                            class="h-7 w-7 text-destructive"
                                                            attr:title="Delete"
                                                            on:click=move |ev: web_sys::MouseEvent| {
                                                                ev.stop_propagation();
                                                                on_delete_title(title_id);
                                                            }
                                                        >
                                                            <svg
                                                                xmlns="http://www.w3.org/2000/svg"
                                                                width="16"
                                                                height="16"
                                                                viewBox="0 0 24 24"
                                                                fill="none"
                                                                stroke="currentColor"
                                                                stroke-width="2"
                                                                stroke-linecap="round"
                                                                stroke-linejoin="round"
                                                                aria-hidden="true"
                                                            >
                                                                <path d="M3 6h18" />
                                                                <path d="M8 6V4h8v2" />
                                                                <path d="M19 6l-1 14H6L5 6" />
                                                                <path d="M10 11v6" />
                                                                <path d="M14 11v6" />
                                                            </svg>
                                                        </Button>
                                                    </div>
                                                }
                                                .into_any()
                                            };

                                            let items_view = is_expanded
                                                .then(|| lists_map.get(&title_id).cloned())
                                                .flatten()
                                                .map(|items| {
                                                    let empty_note = items.is_empty().then(|| {
                                                        view! {
                                                            <div class="py-1 text-xs text-muted-foreground">"No items."</div>
                                                        }
                                                    });
                                                    view! {
                                                        <div class="border-t border-border px-2 py-1.5">
                                                            {empty_note}

                                                            {items
                                                                .into_iter()
                                                                .map(|item| {
                                                                    let item_id = item.id;
                                                                    let desc = item.list_desc.clone();
                                                                    let checked = item.status;

                                                                    view! {
                                                                        <div class="flex items-center gap-2 py-1">
                                                                            <Checkbox
                                                                                checked=checked
                                                                                disabled=checked
                                                                                on_change=Callback::new(move |_| {
                                                                                    if let Some(list_id) = item_id {
                                                                                        on_check_item(title_id, list_id);
                                                                                    }
                                                                                })
                                                                            />
                                                                            <span class="min-w-0 flex-1 truncate text-sm">{desc}</span>
                                                                            <Button
                                                                                variant=ButtonVariant::Ghost
                                                                                size=ButtonSize::Icon
                                                                                class="h-6 w-6"
                                                                                attr:title="Edit items"
                                                                                on:click=move |_| open_edit_items(title_id)
                                                                            >
                                                                                <svg
                                                                                    xmlns="http://www.w3.org/2000/svg"
                                                                                    width="14"
                                                                                    height="14"
                                                                                    viewBox="0 0 24 24"
                                                                                    fill="none"
                                                                                    stroke="currentColor"
                                                                                    stroke-width="2"
                                                                                    stroke-linecap="round"
                                                                                    stroke-linejoin="round"
                                                                                    class="text-muted-foreground"
                                                                                    aria-hidden="true"
                                                                                >
                                                                                    <path d="M12 20h9" />
                                                                                    <path d="M16.5 3.5a2.121 2.121 0 0 1 3 3L7 19l-4 1 1-4Z" />
                                                                                </svg>
                                                                            </Button>
                                                                        </div>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </div>
                                                    }
                                                });

                                            view! {
                                                <div class="overflow-hidden rounded-md border border-border">
                                                    {header}
                                                    {items_view}
                                                </div>
                                            }
                                            .into_any()
                                        })
                                        .collect_view()
                                }}
                            </CardContent>
                        </Card>

                        <Card class="flex-1 self-start">
                            <CardHeader>
                                <CardTitle class="text-sm">"Done"</CardTitle>
                            </CardHeader>
                            <CardContent class="space-y-2">
                                <Show when=move || done.get().is_empty() fallback=|| ().into_view()>
                                    <div class="text-xs text-muted-foreground">"Nothing finished yet."</div>
                                </Show>

                                {move || {
                                    let expanded_id = expanded.get();
                                    let lists_map = lists.get();

                                    done.get()
                                        .into_iter()
                                        .map(|t| {
                                            let title_id = t.id;
                                            let is_expanded = expanded_id == Some(title_id);
                                            let title_text = t.title.clone();
                                            let row_class = if is_expanded {
                                                "flex items-center bg-accent p-2"
                                            } else {
                                                "flex items-center p-2"
                                            };

                                            let items_view = is_expanded
                                                .then(|| lists_map.get(&title_id).cloned())
                                                .flatten()
                                                .map(|items| {
                                                    view! {
                                                        <div class="border-t border-border px-2 py-1.5">
                                                            {items
                                                                .into_iter()
                                                                .map(|item| {
                                                                    let desc = item.list_desc.clone();
                                                                    view! {
                                                                        <div class="flex items-center gap-2 py-1">
                                                                            <Checkbox checked=item.status disabled=true />
                                                                            <span class="min-w-0 flex-1 truncate text-sm text-muted-foreground">{desc}</span>
                                                                        </div>
                                                                    }
                                                                })
                                                                .collect_view()}
                                                        </div>
                                                    }
                                                });

                                            view! {
                                                <div class="overflow-hidden rounded-md border border-border">
                                                    <div class=row_class>
                                                        <button
                                                            class="min-w-0 flex-1 truncate text-left text-sm hover:underline"
                                                            on:click=move |_| on_toggle_title(title_id, true)
                                                        >
                                                            {title_text}
                                                        </button>
                                                    </div>
                                                    {items_view}
                                                </div>
                                            }
                                            .into_any()
                                        })
                                        .collect_view()
                                }}
                            </CardContent>
                        </Card>
                    </div>

                    <div class="fixed bottom-6 right-6">
                        <Button
                            size=ButtonSize::Icon
                            class="h-10 w-10 rounded-full text-lg shadow-lg"
                            attr:title="Add task"
                            on:click=move |_| dialog.set(BoardDialog::AddTask)
                        >
                            "+"
                        </Button>
                    </div>
                </Show>
            </div>

            <Show
                when=move || matches!(dialog.get(), BoardDialog::EditItems { .. })
                fallback=|| ().into_view()
            >
                <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
                    <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                        <div class="mb-3 space-y-1">
                            <div class="text-sm font-medium">"Edit list"</div>
                            <div class="text-xs text-muted-foreground">
                                "Deleting a row removes it right away; text changes apply on save."
                            </div>
                        </div>

                        <div class="space-y-2">
                            <div class="max-h-72 space-y-2 overflow-y-auto">
                                {move || {
                                    staged_items
                                        .get()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, row)| {
                                            view! {
                                                <div class="flex items-center gap-2">
                                                    <Input bind_value=row.desc class="h-8 flex-1 text-sm" />
                                                    <Button
                                                        variant=ButtonVariant::Ghost
                                                        size=ButtonSize::Icon
                                                        class="h-7 w-7 text-destructive"
                                                        attr:title="Delete item"
                                                        on:click=move |_| on_delete_staged_row(index)
                                                    >
                                                        <svg
                                                            xmlns="http://www.w3.org/2000/svg"
                                                            width="16"
                                                            height="16"
                                                            viewBox="0 0 24 24"
                                                            fill="none"
                                                            stroke="currentColor"
                                                            stroke-width="2"
                                                            stroke-linecap="round"
                                                            stroke-linejoin="round"
                                                            aria-hidden="true"
                                                        >
                                                            <path d="M3 6h18" />
                                                            <path d="M8 6V4h8v2" />
                                                            <path d="M19 6l-1 14H6L5 6" />
                                                            <path d="M10 11v6" />
                                                            <path d="M14 11v6" />
                                                        </svg>
                                                    </Button>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>

                            <Button
                                variant=ButtonVariant::Outline
                                size=ButtonSize::Sm
                                class="w-full"
                                on:click=move |_| on_add_staged_row()
                            >
                                "Add item"
                            </Button>

                            <div class="flex items-center justify-end gap-2 pt-2">
                                <Button
                                    variant=ButtonVariant::Outline
                                    size=ButtonSize::Sm
                                    attr:disabled=move || edit_saving.get()
                                    on:click=move |_| dialog.set(BoardDialog::None)
                                >
                                    "Cancel"
                                </Button>
                                <Button
                                    size=ButtonSize::Sm
                                    attr:disabled=move || edit_saving.get()
                                    on:click=on_save_staged
                                >
                                    <span class="inline-flex items-center gap-2">
                                        <Show when=move || edit_saving.get() fallback=|| ().into_view()>
                                            <Spinner />
                                        </Show>
                                        {move || if edit_saving.get() { "Saving..." } else { "Save" }}
                                    </span>
                                </Button>
                            </div>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || dialog.get() == BoardDialog::AddTask fallback=|| ().into_view()>
                <AddTaskModal
                    on_saved=Callback::new(move |new_title_id: i64| on_task_saved(new_title_id))
                    on_close=Callback::new(move |_: ()| dialog.set(BoardDialog::None))
                />
            </Show>
        </div>
    }
}

#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let app_state = expect_context::<AppContext>();
    let has_session = move || app_state.0.session.get().is_some();

    // Store children so the view macro sees an `Fn` (not an `FnOnce`).
    let children = StoredValue::new(children);

    view! {
        <Show when=has_session fallback=move || view! { <LoginPage /> }>
            {move || children.with_value(|c| c())}
        </Show>
    }
}

#[component]
pub fn RootPage() -> impl IntoView {
    view! {
        <RequireSession>
            <TodoBoardPage />
        </RequireSession>
    }
}
