use contracts::domain::a001_employee::aggregate::Employee;
use contracts::domain::a001_employee::filter::filter_by_division;
use contracts::enums::division::DivisionFilter;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// What the last failed operation on the list was
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFailure {
    Fetch,
    Delete,
}

impl ListFailure {
    pub fn message(&self) -> &'static str {
        match self {
            ListFailure::Fetch => "Failed to load employees.",
            ListFailure::Delete => "Failed to delete the employee.",
        }
    }
}

/// Employee list page state.
///
/// `visible_employees` is derived from `all_employees` and `filter`; every
/// mutator recomputes it in the same step, so readers never see a stale view.
#[derive(Clone, Debug, Default)]
pub struct EmployeeListState {
    all_employees: Vec<Employee>,
    visible_employees: Vec<Employee>,
    filter: DivisionFilter,
    load_state: LoadState,
    failure: Option<ListFailure>,
    load_generation: u64,
}

impl EmployeeListState {
    pub fn all_employees(&self) -> &[Employee] {
        &self.all_employees
    }

    pub fn visible_employees(&self) -> &[Employee] {
        &self.visible_employees
    }

    pub fn filter(&self) -> DivisionFilter {
        self.filter
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Cause of the `Failed` state; `None` in any other state
    pub fn failure(&self) -> Option<ListFailure> {
        self.failure
    }

    /// Replace the collection with a fresh fetch, keeping the current filter
    pub fn apply_fetched(&mut self, employees: Vec<Employee>) {
        self.all_employees = employees;
        self.refresh_visible();
        self.load_state = LoadState::Ready;
        self.failure = None;
    }

    pub fn set_filter(&mut self, filter: DivisionFilter) {
        self.filter = filter;
        self.refresh_visible();
    }

    /// Drop every record with `id`. Returns false when nothing matched.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        let before = self.all_employees.len();
        self.all_employees.retain(|e| e.id != id);
        if self.all_employees.len() == before {
            return false;
        }
        self.refresh_visible();
        true
    }

    pub fn mark_failed(&mut self, failure: ListFailure) {
        self.load_state = LoadState::Failed;
        self.failure = Some(failure);
    }

    /// Take a ticket for a new fetch; only the newest ticket may apply its result
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    pub fn is_latest_load(&self, ticket: u64) -> bool {
        self.load_generation == ticket
    }

    fn refresh_visible(&mut self) {
        self.visible_employees = filter_by_division(&self.all_employees, self.filter);
    }
}

pub fn create_state() -> RwSignal<EmployeeListState> {
    RwSignal::new(EmployeeListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::aggregate::Salary;
    use contracts::enums::division::Division;
    use chrono::NaiveDate;

    fn employee(id: &str, division: Division) -> Employee {
        Employee {
            id: id.to_string(),
            first_name: "Dewi".to_string(),
            last_name: "Lestari".to_string(),
            address: "Surabaya".to_string(),
            position: "Staff".to_string(),
            division,
            salary: Salary::parse("6000000").unwrap(),
            birth_date: NaiveDate::from_ymd_opt(1991, 4, 9).unwrap(),
            join_date: NaiveDate::from_ymd_opt(2018, 9, 3).unwrap(),
            working_status: None,
        }
    }

    #[test]
    fn test_initial_state_is_loading_and_empty() {
        let state = EmployeeListState::default();
        assert_eq!(state.load_state(), LoadState::Loading);
        assert_eq!(state.filter(), DivisionFilter::All);
        assert!(state.all_employees().is_empty());
    }

    #[test]
    fn test_fetched_data_goes_through_current_filter() {
        let mut state = EmployeeListState::default();
        state.set_filter(DivisionFilter::Finance);
        state.apply_fetched(vec![
            employee("A1", Division::Finance),
            employee("A2", Division::Hr),
        ]);
        assert_eq!(state.load_state(), LoadState::Ready);
        assert_eq!(state.all_employees().len(), 2);
        assert_eq!(state.visible_employees().len(), 1);
        assert_eq!(state.visible_employees()[0].id, "A1");
    }

    #[test]
    fn test_remove_absent_id_changes_nothing() {
        let mut state = EmployeeListState::default();
        state.apply_fetched(vec![employee("A1", Division::Hr)]);
        let before = state.clone();

        assert!(!state.remove_by_id("Z9"));
        assert_eq!(state.all_employees(), before.all_employees());
        assert_eq!(state.visible_employees(), before.visible_employees());
    }

    #[test]
    fn test_remove_updates_visible() {
        let mut state = EmployeeListState::default();
        state.set_filter(DivisionFilter::Hr);
        state.apply_fetched(vec![
            employee("A1", Division::Hr),
            employee("A2", Division::Hr),
        ]);
        assert!(state.remove_by_id("A1"));
        assert!(state.all_employees().iter().all(|e| e.id != "A1"));
        assert!(state.visible_employees().iter().all(|e| e.id != "A1"));
    }

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut state = EmployeeListState::default();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(!state.is_latest_load(first));
        assert!(state.is_latest_load(second));
    }

    #[test]
    fn test_failure_cause_is_kept_until_next_fetch() {
        let mut state = EmployeeListState::default();
        state.apply_fetched(vec![employee("A1", Division::Hr)]);
        assert_eq!(state.failure(), None);

        state.mark_failed(ListFailure::Delete);
        assert_eq!(state.load_state(), LoadState::Failed);
        assert_eq!(state.failure(), Some(ListFailure::Delete));
        assert_eq!(
            state.failure().map(|f| f.message()),
            Some("Failed to delete the employee.")
        );
        assert_eq!(state.all_employees().len(), 1);

        state.apply_fetched(vec![]);
        assert_eq!(state.failure(), None);
    }
}
