pub mod view_model;

use self::view_model::EmployeeDetailsViewModel;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::money_utils::format_salary;
use crate::shared::navigation::{AppRoute, Navigator, RouterNavigator};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_employee::aggregate::Employee;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
#[allow(non_snake_case)]
pub fn EmployeeDetails() -> impl IntoView {
    let params = use_params_map();
    let vm = EmployeeDetailsViewModel::new();
    let navigator = StoredValue::new_local(RouterNavigator::new());

    Effect::new(move |_| {
        if let Some(id) = params.with(|p| p.get("id")) {
            vm.load(id);
        }
    });

    view! {
        <PageFrame page_id="a001_employee--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="header__content">
                    <h1 class="header__title">{"Employee Details"}</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigator.with_value(|n| n.navigate(&AppRoute::List))
                    >
                        {icon("arrow-left")}
                        {"Back"}
                    </button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}
                {move || match vm.employee.get() {
                    Some(employee) => view! { <EmployeeCard employee=employee /> }.into_any(),
                    None if vm.error.get().is_none() => view! {
                        <div class="page__placeholder">{"Loading..."}</div>
                    }.into_any(),
                    None => view! { <></> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
#[allow(non_snake_case)]
fn EmployeeCard(employee: Employee) -> impl IntoView {
    let fields: Vec<(&'static str, String)> = vec![
        ("NIP", employee.id.clone()),
        ("Name", employee.full_name()),
        ("Address", employee.address.clone()),
        ("Position", employee.position.clone()),
        ("Division", employee.division.label().to_string()),
        ("Salary", format_salary(&employee.salary)),
        ("Birth Date", format_date(employee.birth_date)),
        ("Join Date", format_date(employee.join_date)),
        (
            "Working Status",
            employee.working_status.clone().unwrap_or_else(|| "-".to_string()),
        ),
    ];

    view! {
        <dl class="details-list">
            {fields.into_iter().map(|(label, value)| view! {
                <div class="details-list__row">
                    <dt class="details-list__label">{label}</dt>
                    <dd class="details-list__value">{value}</dd>
                </div>
            }).collect_view()}
        </dl>
    }
}
