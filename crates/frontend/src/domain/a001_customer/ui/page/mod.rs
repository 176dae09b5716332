mod edit_card;

use self::edit_card::EditCard;
use super::list::CustomerTable;
use crate::shared::icons::icon;
use crate::shared::labels::Labels;
use contracts::domain::a001_customer::{decode_customers, Customer, CustomerId};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Список клиентов, поставляемый вместе с приложением
const CUSTOMERS_JSON: &str = include_str!("customers.json");

/// Short pause so the loading state is visible on reload
const RELOAD_DELAY_MS: u32 = 300;

/// Removes the customer with `id`, returns whether anything was removed.
pub fn remove_customer(customers: &mut Vec<Customer>, id: CustomerId) -> bool {
    let before = customers.len();
    customers.retain(|c| c.id != id);
    customers.len() != before
}

/// Loads the bundled customer list; errors are rendered as text.
pub fn load_bundled_customers() -> Result<Vec<Customer>, String> {
    decode_customers(CUSTOMERS_JSON).map_err(|e| format!("{:#}", e))
}

/// Host page: owns the customer list and handles the table's callbacks.
#[component]
pub fn CustomersPage() -> impl IntoView {
    let customers = RwSignal::new(Vec::<Customer>::new());
    let editing = RwSignal::new(None::<Customer>);
    let english = RwSignal::new(false);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    let load_customers = move || {
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            editing.set(None);

            gloo_timers::future::TimeoutFuture::new(RELOAD_DELAY_MS).await;

            match load_bundled_customers() {
                Ok(list) => {
                    log::info!("Loaded {} customers", list.len());
                    customers.set(list);
                }
                Err(e) => {
                    log::error!("Failed to load customers: {}", e);
                    customers.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Загрузка при монтировании
    Effect::new(move |_| load_customers());

    let on_edit = Callback::new(move |customer: Customer| {
        log::info!("Editing customer {}", customer.id);
        editing.set(Some(customer));
    });

    let on_delete = Callback::new(move |id: CustomerId| {
        let mut removed = false;
        customers.update(|list| removed = remove_customer(list, id));
        if removed {
            log::info!("Deleted customer {}", id);
        } else {
            log::warn!("Delete requested for unknown customer {}", id);
        }
        if editing.with_untracked(|e| e.as_ref().map(|c| c.id) == Some(id)) {
            editing.set(None);
        }
    });

    let on_close = Callback::new(move |_: ()| editing.set(None));

    view! {
        {move || {
            let labels = Labels::for_lang(english.get());

            view! {
                <div class="customers-page" dir=labels.direction.as_str() lang=labels.lang style="padding: 20px;">
                    <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center style="margin-bottom: 16px;">
                        <h2 style="margin: 0; font-size: 24px; font-weight: bold; display: inline-flex; align-items: center; gap: 8px;">
                            {icon("customers")}
                            {labels.page_title}
                        </h2>
                        <Space>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| english.update(|e| *e = !*e)>
                                {labels.switch_language}
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| load_customers() disabled=loading>
                                {icon("refresh")}
                                " "
                                {labels.reload}
                            </Button>
                        </Space>
                    </Flex>

                    {move || error.get().map(|err| view! {
                        <div style="padding: 12px; background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: 8px; display: flex; align-items: center; gap: 8px; margin-bottom: 16px;">
                            <span style="color: var(--color-error); font-size: 18px;">"⚠"</span>
                            <span style="color: var(--color-error);">{err}</span>
                        </div>
                    })}

                    {move || editing.get().map(|customer| view! {
                        <EditCard customer=customer labels=labels on_close=on_close />
                    })}

                    <CustomerTable
                        customers=customers
                        on_edit=on_edit
                        on_delete=on_delete
                        loading=loading
                        labels=labels
                    />
                </div>
            }
        }}
    }
}
