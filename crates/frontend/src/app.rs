use crate::domain::a001_customer::ui::CustomersPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app-main">
            <CustomersPage />
        </main>
    }
}
