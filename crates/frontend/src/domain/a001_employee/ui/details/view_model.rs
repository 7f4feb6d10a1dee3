use crate::domain::a001_employee::api;
use contracts::domain::a001_employee::aggregate::Employee;
use leptos::prelude::*;

/// ViewModel for the read-only employee page
#[derive(Clone, Copy)]
pub struct EmployeeDetailsViewModel {
    pub employee: RwSignal<Option<Employee>>,
    pub error: RwSignal<Option<String>>,
}

impl EmployeeDetailsViewModel {
    pub fn new() -> Self {
        Self {
            employee: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn load(&self, id: String) {
        let employee = self.employee;
        let error = self.error;
        error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_employee(&id).await {
                Ok(e) => employee.set(Some(e)),
                Err(e) => {
                    log::error!("Failed to load employee {}: {}", id, e);
                    error.set(Some(format!("Failed to load employee {}: {}", id, e)));
                }
            }
        });
    }
}
