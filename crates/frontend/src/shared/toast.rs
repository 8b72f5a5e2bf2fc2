use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MS: u32 = 3_000;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq)]
pub struct ToastMessage {
    pub kind: ToastKind,
    pub text: String,
}

/// Fire-and-forget notifications shown bottom-right; each one dismisses
/// itself after a few seconds.
#[derive(Clone, Copy)]
pub struct ToastService {
    current: RwSignal<Option<ToastMessage>>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    pub fn success(&self, text: &str) {
        self.show(ToastKind::Success, text);
    }

    pub fn error(&self, text: &str) {
        self.show(ToastKind::Error, text);
    }

    fn show(&self, kind: ToastKind, text: &str) {
        let message = ToastMessage {
            kind,
            text: text.to_string(),
        };
        self.current.set(Some(message.clone()));
        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            // A newer toast may have replaced this one in the meantime.
            if current.get_untracked().as_ref() == Some(&message) {
                current.set(None);
            }
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided")
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toast();

    view! {
        {move || {
            toasts.current.get().map(|t| {
                let kind_class = match t.kind {
                    ToastKind::Success => "toast--success",
                    ToastKind::Error => "toast--error",
                };
                view! {
                    <div class=format!("toast {kind_class}")>{t.text}</div>
                }
            })
        }}
    }
}
