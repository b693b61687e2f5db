use crate::components::ui::{
    Alert, AlertDescription, Button, ButtonSize, ButtonVariant, Input, Label, Spinner,
};
use crate::state::AppContext;
use crate::util::non_blank_descs;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

const CLOSE_DELAY_MS: i32 = 1_000;

/// Overlay for creating a title together with its first items.
///
/// `on_saved` fires with the new title id before the modal closes, so the
/// parent can refresh and auto-expand the new row.
#[component]
pub fn AddTaskModal(
    #[prop(into)] on_saved: Callback<i64>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let app_state = expect_context::<AppContext>();

    let title: RwSignal<String> = RwSignal::new(String::new());
    // One signal per draft slot so typing does not rebuild the slot list.
    let drafts: RwSignal<Vec<RwSignal<String>>> = RwSignal::new(vec![RwSignal::new(String::new())]);
    // (is_error, text)
    let message: RwSignal<Option<(bool, String)>> = RwSignal::new(None);
    let saving: RwSignal<bool> = RwSignal::new(false);

    let title_ref: NodeRef<html::Input> = NodeRef::new();

    // Focus the title input once the overlay is mounted.
    Effect::new(move |_| {
        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || {
                if let Some(el) = title_ref.get_untracked() {
                    let _ = el.focus();
                }
            })
            .as_ref()
            .unchecked_ref(),
            0,
        );
    });

    let on_add_slot = move || {
        drafts.update(|d| d.push(RwSignal::new(String::new())));
    };

    let on_remove_slot = move |index: usize| {
        drafts.update(|d| {
            if index < d.len() {
                d.remove(index);
            }
        });
    };

    let on_save = move |_: web_sys::MouseEvent| {
        if saving.get_untracked() {
            return;
        }

        // No network call without a logged-in user.
        let Some(username) = app_state.0.session.get_untracked() else {
            message.set(Some((true, "No logged-in user found!".to_string())));
            return;
        };

        let title_val = title.get_untracked();
        let draft_values: Vec<String> = drafts
            .get_untracked()
            .iter()
            .map(|d| d.get_untracked())
            .collect();
        let descs = non_blank_descs(&draft_values);

        let api_client = app_state.0.api_client.get_untracked();
        saving.set(true);

        spawn_local(async move {
            match api_client.add_todo(&username, &title_val, descs).await {
                Ok(res) if res.success => {
                    message.set(Some((false, "Successfully added!".to_string())));
                    on_saved.run(res.new_title_id);

                    // Leave the success message visible briefly, then close.
                    let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
                        wasm_bindgen::closure::Closure::once_into_js(move || {
                            on_close.run(());
                        })
                        .as_ref()
                        .unchecked_ref(),
                        CLOSE_DELAY_MS,
                    );
                }
                Ok(_) => {
                    message.set(Some((true, "Error saving task!".to_string())));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Error saving task: {}", e).into());
                    message.set(Some((true, "Error saving task!".to_string())));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/30 px-4">
            <div class="w-full max-w-sm rounded-md border border-border bg-background p-4 shadow-lg">
                <div class="mb-3 flex items-center justify-between">
                    <div class="text-sm font-medium">"Add Task"</div>
                    <Button
                        variant=ButtonVariant::Ghost
                        size=ButtonSize::Icon
                        class="h-7 w-7"
                        attr:title="Close"
                        on:click=move |_| on_close.run(())
                    >
                        <span class="text-muted-foreground">"✕"</span>
                    </Button>
                </div>

                <div class="space-y-2">
                    <Show when=move || message.get().is_some() fallback=|| ().into_view()>
                        {move || {
                            message.get().map(|(is_error, text)| {
                                if is_error {
                                    view! {
                                        <Alert class="border-destructive/30">
                                            <AlertDescription class="text-destructive text-xs">{text}</AlertDescription>
                                        </Alert>
                                    }
                                    .into_any()
                                } else {
                                    view! {
                                        <Alert>
                                            <AlertDescription class="text-xs">{text}</AlertDescription>
                                        </Alert>
                                    }
                                    .into_any()
                                }
                            })
                        }}
                    </Show>

                    <div class="space-y-1">
                        <Label html_for="task-title" class="text-xs">"Task Title"</Label>
                        <Input
                            id="task-title"
                            node_ref=title_ref
                            bind_value=title
                            placeholder="Title"
                            class="h-8 text-sm"
                        />
                    </div>

                    <div class="space-y-1">
                        <Label class="text-xs">"Task List"</Label>
                        <div class="max-h-72 space-y-2 overflow-y-auto">
                            {move || {
                                let count = drafts.get().len();

                                drafts
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, slot)| {
                                        let remove_btn = (count > 1).then(|| {
                                            view! {
                                                <Button
                                                    variant=ButtonVariant::Ghost
                                                    size=ButtonSize::Icon
                                                    class="h-7 w-7 text-destructive"
                                                    attr:title="Remove"
                                                    on:click=move |_| on_remove_slot(index)
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
                                            }
                                        });

                                        view! {
                                            <div class="flex items-center gap-2">
                                                <Input
                                                    bind_value=slot
                                                    placeholder=format!("Task {}", index + 1)
                                                    class="h-8 flex-1 text-sm"
                                                />
                                                {remove_btn}
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>

                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        class="w-full"
                        on:click=move |_| on_add_slot()
                    >
                        "Add task"
                    </Button>

                    <Button
                        size=ButtonSize::Sm
                        class="w-full"
                        attr:disabled=move || saving.get()
                        on:click=on_save
                    >
                        <span class="inline-flex items-center gap-2">
                            <Show when=move || saving.get() fallback=|| ().into_view()>
                                <Spinner />
                            </Show>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </span>
                    </Button>
                </div>
            </div>
        </div>
    }
}
