#![allow(dead_code)]

use icons::Loader;
use leptos::prelude::*;
use leptos_ui::clx;
use tw_merge::tw_merge;

mod components {
    use super::*;
    clx! {Alert, div, "relative w-full rounded-lg border px-4 py-3 text-sm"}
    clx! {AlertDescription, p, "text-sm [&_p]:leading-relaxed"}
}

#[allow(unused_imports)]
pub use components::*;

#[component]
pub fn Spinner(#[prop(into, optional)] class: String) -> impl IntoView {
    let merged_class = tw_merge!("size-4 animate-spin", class);

    view! { <Loader class=merged_class attr:role="status" attr:aria-label="Loading" /> }
}

/// Inline form message; `success` switches the tone from destructive.
#[component]
pub fn InlineMessage(#[prop(into)] text: String, #[prop(optional)] success: bool) -> impl IntoView {
    let class = if success {
        "border-success/30"
    } else {
        "border-destructive/30"
    };
    let text_class = if success {
        "text-success"
    } else {
        "text-destructive"
    };

    view! {
        <Alert class=class>
            <AlertDescription class=text_class>{text}</AlertDescription>
        </Alert>
    }
}

/// Full-page busy overlay driven by the shared loading flag.
#[component]
pub fn LoadingOverlay(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get() fallback=|| ().into_view()>
            <div
                data-name="LoadingOverlay"
                class="fixed inset-0 z-50 flex items-center justify-center bg-background/40"
            >
                <Spinner class="size-8 text-primary" />
            </div>
        </Show>
    }
}
