use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Card, div, "bg-card text-card-foreground flex flex-col gap-3 rounded-xl border p-5 shadow-sm"}
    clx! {CardHeader, div, "flex items-start justify-between gap-3"}
    clx! {CardTitle, h4, "leading-snug font-semibold break-words"}
    clx! {CardBody, p, "text-muted-foreground text-sm whitespace-pre-wrap break-words"}
    clx! {CardMeta, div, "flex items-center justify-between gap-2 border-t pt-3 text-xs text-muted-foreground"}
    clx! {CardGrid, div, "grid gap-4 sm:grid-cols-2 lg:grid-cols-3"}
    clx! {FormPanel, div, "bg-card flex flex-col gap-4 rounded-xl border p-5 shadow-sm"}
}

#[allow(unused_imports)]
pub use components::*;
