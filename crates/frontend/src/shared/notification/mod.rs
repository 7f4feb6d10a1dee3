use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a toast stays on screen unless clicked away
const DISMISS_AFTER_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Surfaces a short user-visible message.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Single-slot toast service provided through context.
///
/// A new notification replaces the one on screen.
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<(u64, Notification)>>,
    next_id: StoredValue<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(1),
        }
    }

    pub fn current(&self) -> Option<Notification> {
        self.current.get().map(|(_, n)| n)
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }
}

impl Notifier for NotificationService {
    fn notify(&self, notification: Notification) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some((id, notification)));

        let current = self.current;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            current.try_update(|slot| {
                if matches!(slot, Some((shown, _)) if *shown == id) {
                    *slot = None;
                }
            });
        });
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let service =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    view! {
        {move || service.current().map(|n| {
            let class = match n.kind {
                NotificationKind::Success => "notification notification--success",
                NotificationKind::Error => "notification notification--error",
            };
            view! {
                <div class=class role="status" on:click=move |_| service.dismiss()>
                    <strong class="notification__title">{n.title}</strong>
                    <span class="notification__message">{n.message}</span>
                </div>
            }
        })}
    }
}
