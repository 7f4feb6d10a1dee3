//! Yes/no confirmation step in front of navigation and destructive actions.
//!
//! `ConfirmService` is provided through context and rendered once by
//! `ConfirmHost`. Callers await `confirm()`; the dialog's buttons resolve it.

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::*;
use thaw::*;

/// Every prompt guards a navigation or a delete and is shown as a warning
const WARNING_ICON: &str = "⚠";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
}

impl ConfirmPrompt {
    pub fn warning(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: confirm_label.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    Declined,
}

impl ConfirmOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmOutcome::Confirmed)
    }
}

/// Suspends the caller until the user answers a prompt.
#[async_trait(?Send)]
pub trait ConfirmationGate {
    async fn confirm(&self, prompt: ConfirmPrompt) -> ConfirmOutcome;
}

#[derive(Clone, Copy)]
pub struct ConfirmService {
    prompt: RwSignal<Option<ConfirmPrompt>>,
    open: RwSignal<bool>,
    responder: StoredValue<Option<oneshot::Sender<ConfirmOutcome>>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            prompt: RwSignal::new(None),
            open: RwSignal::new(false),
            responder: StoredValue::new(None),
        }
    }

    /// Answer the open prompt and close the dialog
    pub fn resolve(&self, outcome: ConfirmOutcome) {
        self.settle(outcome);
        self.open.set(false);
    }

    /// Follow the dialog's open flag. Closing it any other way than through
    /// the buttons (mask click, Escape) declines the pending prompt.
    fn sync_with_dialog(&self, open: bool) {
        if !open {
            self.settle(ConfirmOutcome::Declined);
        }
    }

    /// Answer the open prompt, if any, leaving the dialog state alone
    fn settle(&self, outcome: ConfirmOutcome) {
        if let Some(tx) = self.responder.try_update_value(|r| r.take()).flatten() {
            let _ = tx.send(outcome);
        }
    }
}

#[async_trait(?Send)]
impl ConfirmationGate for ConfirmService {
    async fn confirm(&self, prompt: ConfirmPrompt) -> ConfirmOutcome {
        let (tx, rx) = oneshot::channel();

        // a prompt that is still open is superseded and counts as declined
        if let Some(previous) = self.responder.try_update_value(|r| r.replace(tx)).flatten() {
            let _ = previous.send(ConfirmOutcome::Declined);
        }

        self.prompt.set(Some(prompt));
        self.open.set(true);

        // a dropped sender means the host went away
        rx.await.unwrap_or(ConfirmOutcome::Declined)
    }
}

#[component]
pub fn ConfirmHost() -> impl IntoView {
    let service = use_context::<ConfirmService>().expect("ConfirmService not found in context");
    let open = service.open;

    Effect::new(move |_| service.sync_with_dialog(open.get()));

    view! {
        <Dialog open=open>
            <DialogSurface>
                {move || service.prompt.get().map(|prompt| view! {
                    <DialogBody>
                        <DialogTitle>
                            <span class="confirm__icon">{WARNING_ICON}</span>
                            {prompt.title}
                        </DialogTitle>
                        <DialogContent>{prompt.message}</DialogContent>
                        <DialogActions>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| service.resolve(ConfirmOutcome::Confirmed)
                            >
                                {prompt.confirm_label}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| service.resolve(ConfirmOutcome::Declined)
                            >
                                "Cancel"
                            </Button>
                        </DialogActions>
                    </DialogBody>
                })}
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::LocalPool;
    use futures::task::LocalSpawnExt;
    use leptos::reactive::owner::Owner;
    use std::cell::Cell;
    use std::rc::Rc;

    fn prompt(title: &str) -> ConfirmPrompt {
        ConfirmPrompt::warning(title, "You won't be able to revert this!", "Yes, delete it!")
    }

    /// Spawns `confirm` and records its outcome
    fn ask(
        pool: &LocalPool,
        service: ConfirmService,
        title: &str,
    ) -> Rc<Cell<Option<ConfirmOutcome>>> {
        let answer = Rc::new(Cell::new(None));
        let slot = answer.clone();
        let p = prompt(title);
        pool.spawner()
            .spawn_local(async move { slot.set(Some(service.confirm(p).await)) })
            .unwrap();
        answer
    }

    #[test]
    fn test_resolve_answers_and_closes() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let mut pool = LocalPool::new();

        let answer = ask(&pool, service, "Are you sure?");
        pool.run_until_stalled();
        assert!(service.open.get_untracked());
        assert_eq!(
            service.prompt.get_untracked().map(|p| p.title),
            Some("Are you sure?".to_string())
        );
        assert_eq!(answer.get(), None);

        service.resolve(ConfirmOutcome::Confirmed);
        pool.run_until_stalled();
        assert_eq!(answer.get(), Some(ConfirmOutcome::Confirmed));
        assert!(!service.open.get_untracked());
    }

    #[test]
    fn test_new_prompt_declines_the_open_one() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let mut pool = LocalPool::new();

        let first = ask(&pool, service, "first");
        pool.run_until_stalled();
        let second = ask(&pool, service, "second");
        pool.run_until_stalled();

        assert_eq!(first.get(), Some(ConfirmOutcome::Declined));
        assert_eq!(second.get(), None);

        service.resolve(ConfirmOutcome::Confirmed);
        pool.run_until_stalled();
        assert_eq!(second.get(), Some(ConfirmOutcome::Confirmed));
    }

    #[test]
    fn test_resolve_without_prompt_is_noop() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        service.resolve(ConfirmOutcome::Confirmed);
        assert!(!service.open.get_untracked());
    }

    #[test]
    fn test_closing_dialog_declines() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let mut pool = LocalPool::new();

        let answer = ask(&pool, service, "Are you sure?");
        pool.run_until_stalled();

        // thaw flips `open` on mask click
        service.open.set(false);
        service.sync_with_dialog(service.open.get_untracked());
        pool.run_until_stalled();
        assert_eq!(answer.get(), Some(ConfirmOutcome::Declined));
    }

    #[test]
    fn test_open_dialog_keeps_prompt_pending() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let mut pool = LocalPool::new();

        let answer = ask(&pool, service, "Are you sure?");
        pool.run_until_stalled();
        service.sync_with_dialog(true);
        pool.run_until_stalled();
        assert_eq!(answer.get(), None);
    }

    #[test]
    fn test_dropped_responder_declines() {
        let owner = Owner::new();
        owner.set();
        let service = ConfirmService::new();
        let mut pool = LocalPool::new();

        let answer = ask(&pool, service, "Are you sure?");
        pool.run_until_stalled();
        service.responder.set_value(None);
        pool.run_until_stalled();
        assert_eq!(answer.get(), Some(ConfirmOutcome::Declined));
    }
}
