use leptos::prelude::*;
use tw_merge::tw_merge;

#[component]
pub fn Checkbox(
    // Styling
    #[prop(into, optional)] class: String,

    // Common HTML attributes
    #[prop(into, optional)] id: String,
    #[prop(optional)] checked: bool,
    #[prop(optional)] disabled: bool,

    // Fired with the new checked state. Omitted for read-only displays.
    #[prop(into, optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let merged_class = tw_merge!(
        "border-input size-4 shrink-0 rounded-[4px] border shadow-xs outline-none",
        "accent-primary focus-visible:border-ring focus-visible:ring-ring/50 focus-visible:ring-2",
        "disabled:cursor-not-allowed disabled:opacity-50",
        class
    );

    view! {
        <input
            data-name="Checkbox"
            type="checkbox"
            class=merged_class
            id=id
            disabled=disabled
            prop:checked=checked
            on:change=move |ev| {
                if let Some(cb) = on_change {
                    cb.run(event_target_checked(&ev));
                }
            }
        />
    }
    .into_any()
}
