use crate::domain::a001_employee::api;
use contracts::domain::a001_employee::aggregate::{calendar_date, EmployeeDto, Salary};
use contracts::enums::division::Division;
use chrono::NaiveDate;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the create/edit employee form
#[derive(Clone, Copy)]
pub struct EmployeeFormViewModel {
    pub form: RwSignal<EmployeeDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    /// NIP from `/edit/:id`; `None` on `/create`
    edit_id: RwSignal<Option<String>>,
    /// The edited record has arrived and filled the form
    loaded: RwSignal<bool>,
}

impl EmployeeFormViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(EmployeeDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            edit_id: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_id.with(|id| id.is_some())
    }

    /// Save stays disabled until an edited record has loaded
    pub fn can_save(&self) -> bool {
        !self.saving.get() && (!self.is_edit_mode() || self.loaded.get())
    }

    pub fn validate_form(dto: &EmployeeDto) -> Result<(), &'static str> {
        if dto.first_name.trim().is_empty() {
            return Err("First name is required");
        }
        if dto.last_name.trim().is_empty() {
            return Err("Last name is required");
        }
        if dto.position.trim().is_empty() {
            return Err("Position is required");
        }
        if !Division::from_label(&dto.division).is_known() {
            return Err("Select a division");
        }
        if Salary::parse(&dto.salary).is_err() {
            return Err("Salary must be a number");
        }
        if !is_form_date(&dto.birth_date) {
            return Err("Birth date must be a valid date");
        }
        if !is_form_date(&dto.join_date) {
            return Err("Join date must be a valid date");
        }
        Ok(())
    }

    /// Reset the form for the route's id. Returns the id to fetch, if any.
    pub fn begin_load(&self, id: Option<String>) -> Option<String> {
        self.form.set(EmployeeDto::default());
        self.error.set(None);
        self.loaded.set(false);
        self.edit_id.set(id.clone());
        id
    }

    /// Fill the form with the edited record, unless the route moved on meanwhile
    pub fn apply_loaded(&self, id: &str, dto: EmployeeDto) {
        if self.edit_id.with_untracked(|current| current.as_deref() != Some(id)) {
            log::debug!("dropping stale employee load for {}", id);
            return;
        }
        self.form.set(dto);
        self.loaded.set(true);
    }

    /// Load form data from server if an id is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = self.begin_load(id) else {
            return;
        };
        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_employee(&existing_id).await {
                Ok(employee) => vm.apply_loaded(&existing_id, EmployeeDto::from(employee)),
                Err(e) => {
                    log::error!("Failed to load employee {}: {}", existing_id, e);
                    vm.error.set(Some(format!("Failed to load employee: {}", e)));
                }
            }
        });
    }

    /// Validated payload to send. The id always comes from the route, so an
    /// edit is never sent as a create.
    pub fn prepare_save(&self) -> Result<EmployeeDto, String> {
        if self.is_edit_mode() && !self.loaded.get_untracked() {
            return Err("The employee has not been loaded yet".to_string());
        }
        let mut current = self.form.get_untracked();
        Self::validate_form(&current).map_err(str::to_string)?;

        current.id = self.edit_id.get_untracked();
        current.working_status = current
            .working_status
            .take()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(current)
    }

    /// Save form data to server
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = match self.prepare_save() {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;
        error.set(None);
        saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            let result = api::save_employee(&current).await;
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => {
                    log::error!("Failed to save employee: {}", e);
                    error.set(Some(format!("Failed to save the employee: {}", e)));
                }
            }
        });
    }
}

/// Date inputs produce `YYYY-MM-DD`; nothing else is accepted from the form
fn is_form_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, calendar_date::WIRE_FORMAT).is_ok()
}
