use crate::render::Badge;
use leptos::prelude::*;
use tw_merge::tw_merge;

/// Task status pill, e.g. `🔄 In Progress`.
#[component]
pub fn StatusBadge(badge: Badge) -> impl IntoView {
    let tone = match badge.class.as_str() {
        "status-completed" => "bg-success/15 text-success",
        "status-in_progress" => "bg-warning/15 text-warning",
        _ => "bg-muted text-muted-foreground",
    };
    let class = tw_merge!(
        "inline-flex shrink-0 items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-medium",
        tone,
        badge.class.clone()
    );

    view! {
        <span class=class data-name="StatusBadge">
            {badge.icon}
            " "
            {badge.label}
        </span>
    }
}
