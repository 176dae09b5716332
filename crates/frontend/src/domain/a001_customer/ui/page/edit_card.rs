//! Read-only card of the customer picked with the table's edit button

use crate::domain::a001_customer::ui::list::cells::{
    charging_date_text, monthly_price_text, provider_text,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::labels::Labels;
use contracts::domain::a001_customer::Customer;
use leptos::prelude::*;
use thaw::*;

/// Label/value pairs shown on the card, in display order.
pub fn detail_rows(customer: &Customer, labels: &Labels) -> Vec<(&'static str, String)> {
    let optional = |value: &Option<String>| match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => labels.missing.to_string(),
    };

    vec![
        (labels.columns[0], customer.customer_name.clone()),
        (labels.columns[1], customer.mobile_number.clone()),
        (labels.columns[2], customer.line_type.clone()),
        (labels.columns[3], charging_date_text(customer, labels)),
        (labels.columns[4], customer.payment_status.clone()),
        (labels.columns[5], monthly_price_text(customer, labels)),
        (labels.columns[6], customer.renewal_status.clone()),
        (labels.columns[7], provider_text(customer, labels)),
        (labels.arrival_time, optional(&customer.arrival_time)),
        (labels.ownership, optional(&customer.ownership)),
        (labels.notes, optional(&customer.notes)),
        (labels.created_at, format_date(&customer.created_at)),
        (labels.updated_at, format_date(&customer.updated_at)),
    ]
}

#[component]
pub fn EditCard(customer: Customer, labels: Labels, on_close: Callback<()>) -> impl IntoView {
    let rows = detail_rows(&customer, &labels);
    let raw_json = serde_json::to_string_pretty(&customer)
        .unwrap_or_else(|e| format!("Failed to serialize customer: {}", e));

    view! {
        <Card attr:style="margin-bottom: 16px;">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <h4 class="details-section__title" style="margin: 0;">
                    {labels.edit_title}
                    " #"
                    {customer.id}
                </h4>
                <Button
                    appearance=ButtonAppearance::Transparent
                    attr:title=labels.close
                    on_click=move |_| on_close.run(())
                >
                    {icon("x")}
                </Button>
            </Flex>

            <div style="display: grid; grid-template-columns: max-content 1fr; gap: 6px 16px;">
                {rows.into_iter().map(|(label, value)| view! {
                    <span style="color: var(--colorNeutralForeground3);">{label}</span>
                    <span>{value}</span>
                }).collect_view()}
            </div>

            <pre dir="ltr" style="margin: 0; max-height: 40vh; overflow: auto; font-size: 12px; background: var(--colorNeutralBackground3); padding: 12px; border-radius: 4px;">
                {raw_json}
            </pre>
        </Card>
    }
}
