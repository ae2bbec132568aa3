use crate::components::ui::LoadingOverlay;
use crate::pages::{AuthPage, Workspace};
use crate::state::{AppContext, AppState};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let app_state = AppState::new();
    provide_context(AppContext(app_state));

    let authenticated = app_state.authenticated;

    // A stored token goes straight to the workspace; the first 401 sends us back.
    if authenticated.get_untracked() {
        app_state.enter_workspace();
    }

    view! {
        <Show when=move || authenticated.get() fallback=|| view! { <AuthPage /> }>
            <Workspace />
        </Show>
        <LoadingOverlay visible=app_state.loading />
    }
}
