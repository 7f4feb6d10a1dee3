pub mod view_model;

use self::view_model::EmployeeFormViewModel;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use crate::shared::navigation::{AppRoute, Navigator, RouterNavigator};
use crate::shared::notification::{Notification, NotificationService, Notifier};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_employee::aggregate::EmployeeDto;
use contracts::enums::division::Division;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use std::rc::Rc;

/// Two-way binding between a text field of the form and an input
fn bind(
    form: RwSignal<EmployeeDto>,
    get: fn(&EmployeeDto) -> String,
    set: fn(&mut EmployeeDto, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(get)),
        Callback::new(move |value: String| form.update(|f| set(f, value))),
    )
}

/// Create page (`/create`) and edit page (`/edit/:id`)
#[component]
#[allow(non_snake_case)]
pub fn EmployeeForm() -> impl IntoView {
    let params = use_params_map();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not found in context");
    let navigator = StoredValue::new_local(RouterNavigator::new());
    let vm = EmployeeFormViewModel::new();

    Effect::new(move |_| {
        vm.load_if_needed(params.with(|p| p.get("id")));
    });

    let on_save = move |_| {
        let on_saved: Rc<dyn Fn(())> = Rc::new(move |_| {
            notifications.notify(Notification::success(
                "Saved!",
                "The employee has been saved.",
            ));
            navigator.with_value(|n| n.navigate(&AppRoute::List));
        });
        vm.save_command(on_saved);
    };

    let form = vm.form;
    let (first_name, set_first_name) =
        bind(form, |f| f.first_name.clone(), |f, v| f.first_name = v);
    let (last_name, set_last_name) = bind(form, |f| f.last_name.clone(), |f, v| f.last_name = v);
    let (address, set_address) = bind(form, |f| f.address.clone(), |f, v| f.address = v);
    let (position, set_position) = bind(form, |f| f.position.clone(), |f, v| f.position = v);
    let (division, set_division) = bind(form, |f| f.division.clone(), |f, v| f.division = v);
    let (salary, set_salary) = bind(form, |f| f.salary.clone(), |f, v| f.salary = v);
    let (birth_date, set_birth_date) =
        bind(form, |f| f.birth_date.clone(), |f, v| f.birth_date = v);
    let (join_date, set_join_date) = bind(form, |f| f.join_date.clone(), |f, v| f.join_date = v);
    let (working_status, set_working_status) = bind(
        form,
        |f| f.working_status.clone().unwrap_or_default(),
        |f, v| f.working_status = Some(v),
    );

    let division_options = Signal::derive(|| {
        let mut options = vec![(String::new(), "Select division".to_string())];
        options.extend(
            Division::known()
                .iter()
                .map(|d| (d.label().to_string(), d.label().to_string())),
        );
        options
    });

    view! {
        <PageFrame page_id="a001_employee--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="header__content">
                    <h1 class="header__title">
                        {move || if vm.is_edit_mode() { "Edit Employee" } else { "Add Employee" }}
                    </h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        disabled=move || !vm.can_save()
                        on:click=on_save
                    >
                        {icon("save")}
                        {"Save"}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| navigator.with_value(|n| n.navigate(&AppRoute::List))
                    >
                        {icon("arrow-left")}
                        {"Cancel"}
                    </button>
                </div>
            </div>

            <div class="page__content">
                {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

                <div class="details-form">
                    <Input label="First Name" id="first_name" value=first_name on_input=set_first_name required=true />
                    <Input label="Last Name" id="last_name" value=last_name on_input=set_last_name required=true />
                    <Input label="Address" id="address" value=address on_input=set_address />
                    <Input label="Position" id="position" value=position on_input=set_position required=true />
                    <Select
                        label="Division"
                        id="division"
                        value=division
                        options=division_options
                        on_change=set_division
                        required=true
                    />
                    <Input label="Salary (Rp)" id="salary" input_type="number" value=salary on_input=set_salary required=true />
                    <Input label="Birth Date" id="birth_date" input_type="date" value=birth_date on_input=set_birth_date required=true />
                    <Input label="Join Date" id="join_date" input_type="date" value=join_date on_input=set_join_date required=true />
                    <Input label="Working Status" id="working_status" value=working_status on_input=set_working_status />
                </div>
            </div>
        </PageFrame>
    }
}
