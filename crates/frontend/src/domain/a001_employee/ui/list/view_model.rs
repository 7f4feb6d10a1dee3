use super::state::{create_state, EmployeeListState, ListFailure};
use crate::domain::a001_employee::api::EmployeeApi;
use crate::shared::confirm::{ConfirmPrompt, ConfirmationGate};
use crate::shared::lifecycle::CancellationToken;
use crate::shared::navigation::{AppRoute, Navigator};
use crate::shared::notification::{Notification, Notifier};
use contracts::enums::division::DivisionFilter;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the employee list page.
///
/// Owns the list state for the lifetime of the page. Every failure is turned
/// into state or a notification; nothing propagates to the caller.
#[derive(Clone)]
pub struct EmployeeListViewModel {
    pub state: RwSignal<EmployeeListState>,
    api: Rc<dyn EmployeeApi>,
    gate: Rc<dyn ConfirmationGate>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    lifecycle: CancellationToken,
}

impl EmployeeListViewModel {
    pub fn new(
        api: Rc<dyn EmployeeApi>,
        gate: Rc<dyn ConfirmationGate>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        lifecycle: CancellationToken,
    ) -> Self {
        Self {
            state: create_state(),
            api,
            gate,
            navigator,
            notifier,
            lifecycle,
        }
    }

    /// Fetch the whole collection. If another fetch starts before this one
    /// answers, this answer is discarded.
    pub async fn load_all(&self) {
        let Some(ticket) = self.state.try_update_untracked(|s| s.begin_load()) else {
            return;
        };

        let result = self.api.fetch_all().await;
        if self.lifecycle.is_cancelled() {
            log::debug!("employee list closed, dropping fetch #{}", ticket);
            return;
        }

        self.state.update(|s| {
            if !s.is_latest_load(ticket) {
                log::debug!("dropping stale employee fetch #{}", ticket);
                return;
            }
            match result {
                Ok(employees) => s.apply_fetched(employees),
                Err(e) => {
                    log::error!("Failed to fetch employees: {}", e);
                    s.mark_failed(ListFailure::Fetch);
                }
            }
        });
    }

    pub fn set_filter(&self, filter: DivisionFilter) {
        self.state.update(|s| s.set_filter(filter));
    }

    /// Apply a label coming from the filter menu
    pub fn set_filter_label(&self, label: &str) {
        match DivisionFilter::from_label(label) {
            Some(filter) => self.set_filter(filter),
            None => log::warn!("ignoring unknown division filter {:?}", label),
        }
    }

    /// "Add Employee" opens the create page without confirmation
    pub fn request_create(&self) {
        self.navigator.navigate(&AppRoute::Create);
    }

    pub async fn request_view(&self, id: String) {
        let prompt = ConfirmPrompt::warning(
            "Are you sure?",
            format!("You are about to see employee with NIP {} details", id),
            "Yes",
        );
        self.confirm_and_navigate(
            prompt,
            AppRoute::Details(id),
            "You are being redirected to the details page.",
        )
        .await;
    }

    pub async fn request_edit(&self, id: String) {
        let prompt = ConfirmPrompt::warning(
            "Are you sure?",
            format!("You are about to edit employee with NIP {} !", id),
            "Yes, edit it!",
        );
        self.confirm_and_navigate(
            prompt,
            AppRoute::Edit(id),
            "You are being redirected to the edit page.",
        )
        .await;
    }

    async fn confirm_and_navigate(&self, prompt: ConfirmPrompt, route: AppRoute, message: &str) {
        let outcome = self.gate.confirm(prompt).await;
        if !outcome.is_confirmed() || self.lifecycle.is_cancelled() {
            return;
        }
        self.navigator.navigate(&route);
        self.notifier
            .notify(Notification::success("Redirected!", message));
    }

    /// Confirm, delete remotely, drop the row locally, then re-fetch.
    pub async fn request_delete(&self, id: String) {
        let prompt = ConfirmPrompt::warning(
            "Are you sure?",
            "You won't be able to revert this!",
            "Yes, delete it!",
        );
        let outcome = self.gate.confirm(prompt).await;
        if !outcome.is_confirmed() || self.lifecycle.is_cancelled() {
            return;
        }

        log::info!("deleting employee {}", id);
        let result = self.api.delete(&id).await;
        if self.lifecycle.is_cancelled() {
            log::debug!("employee list closed, dropping delete result for {}", id);
            return;
        }

        match result {
            Ok(()) => {
                // applies to whatever collection is current after the await
                self.state.update(|s| {
                    s.remove_by_id(&id);
                });
                self.notifier.notify(Notification::success(
                    "Deleted!",
                    "The employee has been deleted.",
                ));
                self.load_all().await;
            }
            Err(e) => {
                log::error!("Failed to delete employee {}: {}", id, e);
                self.state.update(|s| s.mark_failed(ListFailure::Delete));
                self.notifier.notify(Notification::error(
                    "Error!",
                    "Failed to delete the employee.",
                ));
            }
        }
    }

    pub fn load_command(&self) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.load_all().await });
    }

    pub fn view_command(&self, id: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.request_view(id).await });
    }

    pub fn edit_command(&self, id: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.request_edit(id).await });
    }

    pub fn delete_command(&self, id: String) {
        let vm = self.clone();
        wasm_bindgen_futures::spawn_local(async move { vm.request_delete(id).await });
    }
}
