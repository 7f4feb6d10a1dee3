use crate::routes::routes::AppRoutes;
use crate::shared::confirm::ConfirmService;
use crate::shared::notification::NotificationService;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Single confirmation dialog shared by every page
    provide_context(ConfirmService::new());

    provide_context(NotificationService::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
