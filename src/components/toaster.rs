/// Minimal notification system: a context-held queue plus a host that renders it.
use gloo_timers::callback::Timeout;
use leptos::*;
use uuid::Uuid;

pub const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<Vec<Toast>>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: create_rw_signal(Vec::new()),
        }
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            kind,
            message: message.into(),
        };
        let id = toast.id;
        self.toasts.update(|toasts| toasts.push(toast));
        id
    }

    pub fn success(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> Uuid {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&self, id: Uuid) {
        self.toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }

    pub fn snapshot(&self) -> Vec<Toast> {
        self.toasts.get_untracked()
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| {
        let toaster = Toaster::new();
        provide_context(toaster);
        toaster
    })
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastView toast=toast toaster=toaster /> }
            />
        </div>
    }
}

#[component]
fn ToastView(toast: Toast, toaster: Toaster) -> impl IntoView {
    let id = toast.id;
    create_effect(move |_| Timeout::new(TOAST_DURATION_MS, move || toaster.dismiss(id)).forget());

    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };

    view! {
        <div class=class on:click=move |_| toaster.dismiss(id)>
            { toast.message }
        </div>
    }
}
