use crate::components::ui::*;
use crate::controllers::Mutation;
use crate::models::{EventDraft, NoteDraft, Section, TaskDraft, TaskStatus};
use crate::render::{render_list, CardView, EmptyState, ListView, MetaIcon};
use crate::shell::{credentials, logout, AuthMessage, AuthView, KeyPress, ShortcutAction};
use crate::state::{AppContext, AppState};
use icons::{Calendar, CalendarDays, Clock, ListTodo, LogOut, Plus, StickyNote, Trash2, X};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dom::helpers::window_event_listener;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;

#[component]
pub fn AuthPage() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let auth = app_state.auth;

    let login_email: RwSignal<String> = RwSignal::new(String::new());
    let login_password: RwSignal<String> = RwSignal::new(String::new());
    let register_email: RwSignal<String> = RwSignal::new(String::new());
    let register_password: RwSignal<String> = RwSignal::new(String::new());

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (email, password) =
            match credentials(&login_email.get_untracked(), &login_password.get_untracked()) {
                Ok(c) => c,
                Err(message) => {
                    auth.update(|a| a.fail(message));
                    return;
                }
            };
        auth.update(|a| a.message = None);

        let api = app_state.client();
        spawn_local(async move {
            match api.login(&email, &password).await {
                Ok(()) => {
                    login_password.set(String::new());
                    app_state.enter().await;
                }
                Err(message) => auth.update(|a| a.fail(message)),
            }
        });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (email, password) = match credentials(
            &register_email.get_untracked(),
            &register_password.get_untracked(),
        ) {
            Ok(c) => c,
            Err(message) => {
                auth.update(|a| a.fail(message));
                return;
            }
        };
        auth.update(|a| a.message = None);

        let api = app_state.client();
        spawn_local(async move {
            match api.register(&email, &password).await {
                Ok(()) => {
                    register_email.set(String::new());
                    register_password.set(String::new());
                    auth.update(|a| a.registered());
                }
                Err(message) => auth.update(|a| a.fail(message)),
            }
        });
    };

    let is_login = move || auth.with(|a| a.view == AuthView::Login);

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex min-h-screen w-full max-w-sm flex-col justify-center px-4 py-10">
                <div class="mb-6 flex flex-col items-center gap-1">
                    <span class="text-sm font-medium text-foreground">"Planner"</span>
                    <span class="text-xs text-muted-foreground">"Notes, tasks and events in one place."</span>
                </div>

                <Card>
                    <Show
                        when=is_login
                        fallback=move || {
                            view! {
                                <CardTitle class="text-lg">"Create account"</CardTitle>
                                <form class="flex flex-col gap-3" on:submit=on_register>
                                    <CredentialFields prefix="register" email=register_email password=register_password />
                                    <Button class="w-full" size=ButtonSize::Sm>"Register"</Button>
                                    <div class="pt-1 text-xs text-muted-foreground">
                                        "Already have an account? "
                                        <button
                                            type="button"
                                            class="text-primary underline underline-offset-4"
                                            on:click=move |_| auth.update(|a| a.show_login())
                                        >
                                            "Log in"
                                        </button>
                                    </div>
                                </form>
                            }
                        }
                    >
                        <CardTitle class="text-lg">"Log in"</CardTitle>
                        <form class="flex flex-col gap-3" on:submit=on_login>
                            <CredentialFields prefix="login" email=login_email password=login_password />
                            <Button class="w-full" size=ButtonSize::Sm>"Continue"</Button>
                            <div class="pt-1 text-xs text-muted-foreground">
                                "No account? "
                                <button
                                    type="button"
                                    class="text-primary underline underline-offset-4"
                                    on:click=move |_| auth.update(|a| a.show_register())
                                >
                                    "Register"
                                </button>
                            </div>
                        </form>
                    </Show>

                    {move || {
                        auth.get().message.map(|message| match message {
                            AuthMessage::Error(text) => view! { <InlineMessage text=text /> }.into_any(),
                            AuthMessage::Success(text) => {
                                view! { <InlineMessage text=text success=true /> }.into_any()
                            }
                        })
                    }}
                </Card>
            </div>
        </div>
    }
}

#[component]
fn CredentialFields(
    prefix: &'static str,
    email: RwSignal<String>,
    password: RwSignal<String>,
) -> impl IntoView {
    let email_id = format!("{prefix}-email");
    let password_id = format!("{prefix}-password");

    view! {
        <div class="flex flex-col gap-1.5">
            <Label html_for=email_id.clone() class="text-xs">"Email"</Label>
            <Input
                id=email_id
                r#type="email"
                placeholder="you@example.com"
                bind_value=email
                class="h-8 text-sm"
            />
        </div>
        <div class="flex flex-col gap-1.5">
            <Label html_for=password_id.clone() class="text-xs">"Password"</Label>
            <Input
                id=password_id
                r#type="password"
                placeholder="••••••••"
                bind_value=password
                class="h-8 text-sm"
            />
        </div>
    }
}

#[derive(Clone, Copy)]
struct NoteForm {
    title: RwSignal<String>,
    content: RwSignal<String>,
    error: RwSignal<Option<String>>,
    title_ref: NodeRef<html::Input>,
}

impl NoteForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            content: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            title_ref: NodeRef::new(),
        }
    }

    fn draft(&self) -> NoteDraft {
        NoteDraft::new(&self.title.get_untracked(), &self.content.get_untracked())
    }

    fn clear(&self) {
        self.title.set(String::new());
        self.content.set(String::new());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
struct TaskForm {
    title: RwSignal<String>,
    description: RwSignal<String>,
    due_date: RwSignal<String>,
    /// Wire name of the selected status.
    status: RwSignal<String>,
    error: RwSignal<Option<String>>,
    title_ref: NodeRef<html::Input>,
}

impl TaskForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
            status: RwSignal::new(TaskStatus::default().key().to_string()),
            error: RwSignal::new(None),
            title_ref: NodeRef::new(),
        }
    }

    fn draft(&self) -> TaskDraft {
        let status = self
            .status
            .get_untracked()
            .parse::<TaskStatus>()
            .unwrap_or_default();
        TaskDraft::new(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.due_date.get_untracked(),
            status,
        )
    }

    fn clear(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.due_date.set(String::new());
        self.status.set(TaskStatus::default().key().to_string());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
struct EventForm {
    title: RwSignal<String>,
    description: RwSignal<String>,
    start_time: RwSignal<String>,
    end_time: RwSignal<String>,
    error: RwSignal<Option<String>>,
    title_ref: NodeRef<html::Input>,
}

impl EventForm {
    fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            title_ref: NodeRef::new(),
        }
    }

    fn draft(&self) -> EventDraft {
        EventDraft::new(
            &self.title.get_untracked(),
            &self.description.get_untracked(),
            &self.start_time.get_untracked(),
            &self.end_time.get_untracked(),
        )
    }

    fn clear(&self) {
        self.title.set(String::new());
        self.description.set(String::new());
        self.start_time.set(String::new());
        self.end_time.set(String::new());
        self.error.set(None);
    }
}

#[derive(Clone, Copy)]
struct Forms {
    note: NoteForm,
    task: TaskForm,
    event: EventForm,
}

impl Forms {
    fn new() -> Self {
        Self {
            note: NoteForm::new(),
            task: TaskForm::new(),
            event: EventForm::new(),
        }
    }

    fn focus(&self, section: Section) {
        let node_ref = match section {
            Section::Notes => self.note.title_ref,
            Section::Tasks => self.task.title_ref,
            Section::Calendar => self.event.title_ref,
        };
        if let Some(el) = node_ref.get_untracked() {
            let _ = el.focus();
        }
    }

    fn submit(&self, app_state: AppState, section: Section) {
        match section {
            Section::Notes => submit_note(app_state, self.note),
            Section::Tasks => submit_task(app_state, self.task),
            Section::Calendar => submit_event(app_state, self.event),
        }
    }
}

fn submit_note(app_state: AppState, form: NoteForm) {
    let draft = form.draft();
    let notes = app_state.notes_controller();
    spawn_local(async move {
        let outcome = notes.create(&draft).await;
        if let Some(list) = settle(app_state, form.error, outcome) {
            form.clear();
            app_state.show(app_state.notes, list).await;
        }
    });
}

fn submit_task(app_state: AppState, form: TaskForm) {
    let draft = form.draft();
    let tasks = app_state.tasks_controller();
    spawn_local(async move {
        let outcome = tasks.create(&draft).await;
        if let Some(list) = settle(app_state, form.error, outcome) {
            form.clear();
            app_state.show(app_state.tasks, list).await;
        }
    });
}

fn submit_event(app_state: AppState, form: EventForm) {
    let draft = form.draft();
    let events = app_state.events_controller();
    spawn_local(async move {
        let outcome = events.create(&draft).await;
        if let Some(list) = settle(app_state, form.error, outcome) {
            form.clear();
            app_state.show(app_state.events, list).await;
        }
    });
}

/// Applies the shell side of a finished create. Returns the reloaded list
/// when the item was saved.
fn settle<R>(
    app_state: AppState,
    error: RwSignal<Option<String>>,
    outcome: Mutation<R>,
) -> Option<Option<Vec<R>>> {
    match outcome {
        Mutation::Applied(list) => {
            app_state.shell.update(|s| s.close_forms());
            Some(list)
        }
        Mutation::Rejected(reason) => {
            error.set(Some(reason.to_string()));
            None
        }
        // Alerts were already raised by the client.
        Mutation::Cancelled | Mutation::Failed => None,
    }
}

fn delete_item(app_state: AppState, section: Section, id: i64) {
    spawn_local(app_state.delete(section, id));
}

fn section_icon(section: Section, class: &'static str) -> AnyView {
    match section {
        Section::Notes => view! { <StickyNote class=class /> }.into_any(),
        Section::Tasks => view! { <ListTodo class=class /> }.into_any(),
        Section::Calendar => view! { <CalendarDays class=class /> }.into_any(),
    }
}

#[component]
pub fn Workspace() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let shell = app_state.shell;
    let forms = Forms::new();

    let open_form = Memo::new(move |_| shell.with(|s| s.open_form()));

    // Focus the first field of a form once it is mounted.
    Effect::new(move |_| {
        let Some(section) = open_form.get() else {
            return;
        };

        let _ = window().set_timeout_with_callback_and_timeout_and_arguments_0(
            wasm_bindgen::closure::Closure::once_into_js(move || forms.focus(section))
                .as_ref()
                .unchecked_ref(),
            0,
        );
    });

    // Ctrl/Cmd+Enter submits the open form, Escape closes it.
    let keydown = window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        let key = KeyPress::from(&ev);
        let mut next = shell.get_untracked();
        match next.on_key(&key) {
            Some(ShortcutAction::Submit(section)) => {
                ev.prevent_default();
                forms.submit(app_state, section);
            }
            Some(ShortcutAction::CloseForms) => shell.set(next),
            None => {}
        }
    });
    on_cleanup(move || keydown.remove());

    let on_logout = move |_: web_sys::MouseEvent| {
        if logout(&app_state.client()) {
            app_state.leave_workspace();
        }
    };

    let panel_class = move |section: Section| {
        move || {
            if shell.with(|s| s.active() == section) {
                "flex flex-col gap-4"
            } else {
                "hidden"
            }
        }
    };

    view! {
        <div class="min-h-screen bg-background">
            <header class="border-b">
                <div class="mx-auto flex w-full max-w-5xl items-center justify-between px-4 py-3">
                    <span class="text-sm font-medium text-foreground">"Planner"</span>
                    <div class="flex items-center gap-3">
                        <span class="text-xs text-muted-foreground" data-name="UserEmail">
                            {move || app_state.user_email.get()}
                        </span>
                        <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on:click=on_logout>
                            <LogOut class="size-3.5" />
                            "Logout"
                        </Button>
                    </div>
                </div>
            </header>

            <main class="mx-auto flex w-full max-w-5xl flex-col gap-6 px-4 py-6">
                <SectionTabs />

                <section class=panel_class(Section::Notes) data-section="notes">
                    <PanelHeader section=Section::Notes />
                    <NoteFormPanel form=forms.note />
                    <CardList
                        list=Signal::derive(move || render_list(Section::Notes, app_state.notes.get().as_deref()))
                        on_delete=Callback::new(move |id| delete_item(app_state, Section::Notes, id))
                    />
                </section>

                <section class=panel_class(Section::Tasks) data-section="tasks">
                    <PanelHeader section=Section::Tasks />
                    <TaskFormPanel form=forms.task />
                    <CardList
                        list=Signal::derive(move || render_list(Section::Tasks, app_state.tasks.get().as_deref()))
                        on_delete=Callback::new(move |id| delete_item(app_state, Section::Tasks, id))
                    />
                </section>

                <section class=panel_class(Section::Calendar) data-section="calendar">
                    <PanelHeader section=Section::Calendar />
                    <EventFormPanel form=forms.event />
                    <CardList
                        list=Signal::derive(move || render_list(Section::Calendar, app_state.events.get().as_deref()))
                        on_delete=Callback::new(move |id| delete_item(app_state, Section::Calendar, id))
                    />
                </section>
            </main>
        </div>
    }
}

#[component]
fn SectionTabs() -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let shell = app_state.shell;

    view! {
        <nav class="flex gap-1 border-b" role="tablist">
            {Section::iter()
                .map(|section| {
                    let tab_class = move || {
                        if shell.with(|s| s.active() == section) {
                            "inline-flex items-center gap-2 border-b-2 border-primary px-3 py-2 text-sm font-medium text-foreground"
                        } else {
                            "inline-flex items-center gap-2 border-b-2 border-transparent px-3 py-2 text-sm text-muted-foreground hover:text-foreground"
                        }
                    };
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=tab_class
                            data-tab=section.key()
                            on:click=move |_| app_state.select_section(section)
                        >
                            {section_icon(section, "size-4")}
                            {section.title()}
                            <span class="rounded-full bg-muted px-2 text-xs text-muted-foreground">
                                {move || app_state.counts.get().get(section)}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn PanelHeader(section: Section) -> impl IntoView {
    let shell = expect_context::<AppContext>().0.shell;

    view! {
        <div class="flex items-center justify-between">
            <h2 class="text-lg font-semibold">{section.title()}</h2>
            <Button size=ButtonSize::Sm on:click=move |_| shell.update(|s| {
                s.toggle_form(section);
            })>
                <Plus class="size-3.5" />
                {section.new_label()}
            </Button>
        </div>
    }
}

#[component]
fn FormActions(section: Section, on_save: Callback<()>) -> impl IntoView {
    let shell = expect_context::<AppContext>().0.shell;

    view! {
        <div class="flex items-center justify-end gap-2">
            <span class="mr-auto text-xs text-muted-foreground">"Ctrl+Enter to save, Esc to close"</span>
            <Button
                variant=ButtonVariant::Outline
                size=ButtonSize::Sm
                on:click=move |_| shell.update(|s| {
                    s.toggle_form(section);
                })
            >
                <X class="size-3.5" />
                "Cancel"
            </Button>
            <Button size=ButtonSize::Sm on:click=move |_| on_save.run(())>
                "Save"
            </Button>
        </div>
    }
}

#[component]
fn FormError(error: RwSignal<Option<String>>) -> impl IntoView {
    view! { {move || error.get().map(|text| view! { <InlineMessage text=text /> })} }
}

#[component]
fn NoteFormPanel(form: NoteForm) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let shell = app_state.shell;
    let on_save = Callback::new(move |_: ()| submit_note(app_state, form));

    view! {
        <Show when=move || shell.with(|s| s.is_form_open(Section::Notes)) fallback=|| ().into_view()>
            <FormPanel attr:data-form="notes">
                <div class="flex flex-col gap-1.5">
                    <Label html_for="note-title" class="text-xs">"Title"</Label>
                    <Input id="note-title" placeholder="Note title" bind_value=form.title node_ref=form.title_ref />
                </div>
                <div class="flex flex-col gap-1.5">
                    <Label html_for="note-content" class="text-xs">"Content"</Label>
                    <TextArea id="note-content" placeholder="Write something..." rows=5 bind_value=form.content />
                </div>
                <FormError error=form.error />
                <FormActions section=Section::Notes on_save=on_save />
            </FormPanel>
        </Show>
    }
}

#[component]
fn TaskFormPanel(form: TaskForm) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let shell = app_state.shell;
    let on_save = Callback::new(move |_: ()| submit_task(app_state, form));
    let status_options: StoredValue<Vec<(&'static str, &'static str)>> =
        StoredValue::new(TaskStatus::iter().map(|s| (s.key(), s.label())).collect());

    view! {
        <Show when=move || shell.with(|s| s.is_form_open(Section::Tasks)) fallback=|| ().into_view()>
            <FormPanel attr:data-form="tasks">
                <div class="flex flex-col gap-1.5">
                    <Label html_for="task-title" class="text-xs">"Title"</Label>
                    <Input id="task-title" placeholder="Task title" bind_value=form.title node_ref=form.title_ref />
                </div>
                <div class="flex flex-col gap-1.5">
                    <Label html_for="task-description" class="text-xs">"Description"</Label>
                    <TextArea id="task-description" rows=3 bind_value=form.description />
                </div>
                <div class="grid gap-3 sm:grid-cols-2">
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="task-due" class="text-xs">"Due date"</Label>
                        <Input id="task-due" r#type="datetime-local" bind_value=form.due_date />
                    </div>
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="task-status" class="text-xs">"Status"</Label>
                        <Select
                            id="task-status"
                            options=status_options.get_value()
                            bind_value=form.status
                        />
                    </div>
                </div>
                <FormError error=form.error />
                <FormActions section=Section::Tasks on_save=on_save />
            </FormPanel>
        </Show>
    }
}

#[component]
fn EventFormPanel(form: EventForm) -> impl IntoView {
    let app_state = expect_context::<AppContext>().0;
    let shell = app_state.shell;
    let on_save = Callback::new(move |_: ()| submit_event(app_state, form));

    view! {
        <Show when=move || shell.with(|s| s.is_form_open(Section::Calendar)) fallback=|| ().into_view()>
            <FormPanel attr:data-form="calendar">
                <div class="flex flex-col gap-1.5">
                    <Label html_for="event-title" class="text-xs">"Title"</Label>
                    <Input id="event-title" placeholder="Event title" bind_value=form.title node_ref=form.title_ref />
                </div>
                <div class="flex flex-col gap-1.5">
                    <Label html_for="event-description" class="text-xs">"Description"</Label>
                    <TextArea id="event-description" rows=3 bind_value=form.description />
                </div>
                <div class="grid gap-3 sm:grid-cols-2">
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="event-start" class="text-xs">"Start"</Label>
                        <Input id="event-start" r#type="datetime-local" bind_value=form.start_time />
                    </div>
                    <div class="flex flex-col gap-1.5">
                        <Label html_for="event-end" class="text-xs">"End"</Label>
                        <Input id="event-end" r#type="datetime-local" bind_value=form.end_time />
                    </div>
                </div>
                <FormError error=form.error />
                <FormActions section=Section::Calendar on_save=on_save />
            </FormPanel>
        </Show>
    }
}

#[component]
fn CardList(#[prop(into)] list: Signal<ListView>, on_delete: Callback<i64>) -> impl IntoView {
    move || match list.get() {
        ListView::Empty(empty) => view! { <EmptyPlaceholder empty=empty /> }.into_any(),
        ListView::Cards(cards) => view! {
            <CardGrid>
                {cards
                    .into_iter()
                    .map(|card| view! { <ResourceCard card=card on_delete=on_delete /> })
                    .collect_view()}
            </CardGrid>
        }
        .into_any(),
    }
}

#[component]
fn EmptyPlaceholder(empty: EmptyState) -> impl IntoView {
    view! {
        <div
            class="flex flex-col items-center gap-2 rounded-xl border border-dashed px-6 py-12 text-center"
            data-name="EmptyState"
        >
            {section_icon(empty.section, "size-8 text-muted-foreground")}
            <h3 class="text-base font-semibold">{empty.heading}</h3>
            <p class="text-sm text-muted-foreground">{empty.hint}</p>
        </div>
    }
}

/// One resource card. All text goes in as text nodes.
#[component]
pub fn ResourceCard(card: CardView, on_delete: Callback<i64>) -> impl IntoView {
    let id = card.id;
    let meta_icon = match card.meta_icon {
        MetaIcon::Clock => view! { <Clock class="size-3" /> }.into_any(),
        MetaIcon::Calendar => view! { <Calendar class="size-3" /> }.into_any(),
    };

    view! {
        <Card attr:data-id=id.to_string()>
            <CardHeader>
                <CardTitle>{card.title}</CardTitle>
                {card.badge.map(|badge| view! { <StatusBadge badge=badge /> })}
            </CardHeader>
            <CardBody>{card.body}</CardBody>
            <CardMeta>
                <small class="inline-flex items-center gap-1">{meta_icon}{card.meta}</small>
                <Button
                    variant=ButtonVariant::Destructive
                    size=ButtonSize::Sm
                    on:click=move |_| on_delete.run(id)
                >
                    <Trash2 class="size-3.5" />
                    "Delete"
                </Button>
            </CardMeta>
        </Card>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::models::Note;
    use crate::render::Render;
    use crate::testing::harness;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_host() -> web_sys::Element {
        let document = window().document().expect("document");
        let host = document.create_element("div").expect("div");
        document.body().expect("body").append_child(&host).expect("append");
        host
    }

    #[wasm_bindgen_test]
    fn test_card_renders_markup_as_text() {
        let host = mount_host();

        let card = Note {
            id: 1,
            title: "<script>alert(1)</script>".to_string(),
            content: Some("<b>bold</b>".to_string()),
            created_at: "2025-01-05T14:30:00".to_string(),
        }
        .card();

        let handle = leptos::mount::mount_to(host.clone().unchecked_into(), move || {
            view! { <ResourceCard card=card on_delete=Callback::new(|_: i64| {}) /> }
        });

        let html = host.inner_html();
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
        assert!(host.query_selector("script").expect("query").is_none());
        drop(handle);
    }

    #[wasm_bindgen_test]
    fn test_task_form_offers_every_status() {
        let host = mount_host();
        let h = harness("t");

        let handle = leptos::mount::mount_to(host.clone().unchecked_into(), move || {
            let state = AppState::with_services(
                h.transport.clone(),
                h.session.clone(),
                h.dialogs.clone(),
            );
            state.shell.update(|s| {
                s.toggle_form(Section::Tasks);
            });
            provide_context(AppContext(state));
            view! { <TaskFormPanel form=TaskForm::new() /> }
        });

        let html = host.inner_html();
        for status in TaskStatus::iter() {
            assert!(html.contains(&format!("value=\"{}\"", status.key())));
            assert!(html.contains(status.label()));
        }
        drop(handle);
    }
}
