use crate::domain::a001_employee::ui::details::EmployeeDetails;
use crate::domain::a001_employee::ui::form::EmployeeForm;
use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::shared::confirm::ConfirmHost;
use crate::shared::icons::icon;
use crate::shared::notification::NotificationHost;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page__placeholder">
                {"Page not found. "}
                <A href="/">{"Back to employees"}</A>
            </div>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <header class="app__header">
                {icon("users")}
                <span class="app__title">{"Employee Management"}</span>
            </header>
            <main class="app__main">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=EmployeeList />
                    <Route path=path!("/create") view=EmployeeForm />
                    <Route path=path!("/details/:id") view=EmployeeDetails />
                    <Route path=path!("/edit/:id") view=EmployeeForm />
                </Routes>
            </main>
            <ConfirmHost />
            <NotificationHost />
        </Router>
    }
}
