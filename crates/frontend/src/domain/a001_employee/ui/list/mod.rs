pub mod state;
pub mod view_model;

use self::state::{EmployeeListState, ListFailure, LoadState};
use self::view_model::EmployeeListViewModel;
use crate::domain::a001_employee::api::HttpEmployeeApi;
use crate::shared::components::ui::Select;
use crate::shared::confirm::ConfirmService;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::lifecycle::CancellationToken;
use crate::shared::money_utils::format_salary;
use crate::shared::navigation::RouterNavigator;
use crate::shared::notification::NotificationService;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_employee::aggregate::Employee;
use contracts::enums::division::DivisionFilter;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let confirm = use_context::<ConfirmService>().expect("ConfirmService not found in context");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");

    let lifecycle = CancellationToken::new();
    let vm = EmployeeListViewModel::new(
        Rc::new(HttpEmployeeApi),
        Rc::new(confirm),
        Rc::new(RouterNavigator::new()),
        Rc::new(notifications),
        lifecycle.clone(),
    );
    let state = vm.state;
    // Rc collaborators are not Send; keep the view model in local storage
    let vm = StoredValue::new_local(vm);

    on_cleanup(move || lifecycle.cancel());

    vm.with_value(|vm| vm.load_command());

    let filter_options = Signal::derive(|| {
        DivisionFilter::options()
            .iter()
            .map(|f| (f.label().to_string(), f.label().to_string()))
            .collect::<Vec<_>>()
    });
    let filter_value = Signal::derive(move || state.with(|s| s.filter().label().to_string()));
    let on_filter_change =
        Callback::new(move |label: String| vm.with_value(|vm| vm.set_filter_label(&label)));

    view! {
        <PageFrame page_id="a001_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="header__content">
                    <h1 class="header__title">{"List Employees"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| vm.with_value(|vm| vm.request_create())
                    >
                        {icon("plus")}
                        {"Add Employee"}
                    </button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <Select
                        label="Filter by Division:"
                        id="employee-division-filter"
                        value=filter_value
                        options=filter_options
                        on_change=on_filter_change
                    />
                </div>

                {move || match state.with(|s| s.load_state()) {
                    LoadState::Loading => view! {
                        <div class="page__placeholder">{"Loading..."}</div>
                    }.into_any(),
                    LoadState::Failed => view! {
                        <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                            <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                            <span class="warning-box__text" style="color: var(--color-error);">
                                {move || state.with(|s| s.failure().unwrap_or(ListFailure::Fetch).message())}
                            </span>
                        </div>
                    }.into_any(),
                    LoadState::Ready => view! { <EmployeeTable state=state vm=vm /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn EmployeeTable(
    state: RwSignal<EmployeeListState>,
    vm: StoredValue<EmployeeListViewModel, LocalStorage>,
) -> impl IntoView {
    let rows = move || state.with(|s| s.visible_employees().to_vec());

    view! {
        <div class="table">
            <table class="table__data table--striped">
                <thead class="table__head">
                    <tr>
                        <th class="table__header-cell">{"No"}</th>
                        <th class="table__header-cell">{"NIP"}</th>
                        <th class="table__header-cell">{"Name"}</th>
                        <th class="table__header-cell">{"Position"}</th>
                        <th class="table__header-cell">{"Division"}</th>
                        <th class="table__header-cell">{"Salary"}</th>
                        <th class="table__header-cell">{"Join Date"}</th>
                        <th class="table__header-cell">{"Action"}</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = rows();
                        if rows.is_empty() {
                            return view! {
                                <tr>
                                    <td class="table__cell table__cell--empty" colspan="8">
                                        {"No employees"}
                                    </td>
                                </tr>
                            }.into_any();
                        }
                        rows.into_iter()
                            .enumerate()
                            .map(|(index, employee)| view! { <EmployeeRow index=index employee=employee vm=vm /> })
                            .collect_view()
                            .into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn EmployeeRow(
    index: usize,
    employee: Employee,
    vm: StoredValue<EmployeeListViewModel, LocalStorage>,
) -> impl IntoView {
    let id_for_view = employee.id.clone();
    let id_for_edit = employee.id.clone();
    let id_for_delete = employee.id.clone();

    view! {
        <tr class="table__row">
            <td class="table__cell">{index + 1}</td>
            <td class="table__cell">{employee.id.clone()}</td>
            <td class="table__cell">{employee.full_name()}</td>
            <td class="table__cell">{employee.position.clone()}</td>
            <td class="table__cell">{employee.division.label().to_string()}</td>
            <td class="table__cell">{format_salary(&employee.salary)}</td>
            <td class="table__cell">{format_date(employee.join_date)}</td>
            <td class="table__cell table__cell--actions">
                <button
                    class="button button--icon button--info"
                    title="view"
                    on:click=move |_| vm.with_value(|vm| vm.view_command(id_for_view.clone()))
                >
                    {icon("eye")}
                </button>
                <button
                    class="button button--icon button--secondary"
                    title="edit"
                    on:click=move |_| vm.with_value(|vm| vm.edit_command(id_for_edit.clone()))
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="delete"
                    on:click=move |_| vm.with_value(|vm| vm.delete_command(id_for_delete.clone()))
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}
