pub mod cells;
pub mod state;

use self::cells::{
    charging_date_text, monthly_price_text, payment_badge_variant, provider_text,
    renewal_badge_variant, RowAction,
};
use self::state::{create_search_state, table_view, TableView};
use crate::shared::components::ui::badge::Badge as UiBadge;
use crate::shared::icons::icon;
use crate::shared::labels::Labels;
use contracts::domain::a001_customer::{Customer, CustomerId};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Searchable table of customer billing records.
///
/// The table only reads `customers`; edits and deletions are handed to the
/// parent through `on_edit` / `on_delete`.
#[component]
pub fn CustomerTable(
    #[prop(into)]
    customers: Signal<Vec<Customer>>,
    /// Called with the full record of the row whose edit button was clicked
    #[prop(into)]
    on_edit: Callback<Customer>,
    /// Called with the id of the row whose delete button was clicked
    #[prop(into)]
    on_delete: Callback<CustomerId>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    /// Display strings, Arabic by default
    #[prop(optional)]
    labels: Option<Labels>,
) -> impl IntoView {
    let labels = labels.unwrap_or_default();
    let search_term = create_search_state();

    let view_state = Memo::new(move |_| {
        let is_loading = loading.get().unwrap_or(false);
        customers.with(|list| search_term.with(|term| table_view(is_loading, list, term)))
    });
    // Отдельный memo: ввод в поиске не должен пересоздавать поле ввода
    let shows_table = Memo::new(move |_| view_state.with(TableView::shows_table));

    view! {
        {move || {
            if !shows_table.get() {
                return view! {
                    <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small style="padding: 32px;">
                        <Spinner />
                        <span style="font-size: 18px;">{labels.loading}</span>
                    </Flex>
                }.into_any();
            }

            view! {
                <div class="customer-table">
                    <Flex align=FlexAlign::Center gap=FlexGap::Small style="margin-bottom: 16px;">
                        <span style="color: var(--colorNeutralForeground3); display: inline-flex;">
                            {icon("search")}
                        </span>
                        <div style="width: 350px;">
                            <Input value=search_term placeholder=labels.search_placeholder />
                        </div>
                    </Flex>

                    <div style="border: 1px solid var(--colorNeutralStroke2); border-radius: 6px;">
                        <Table>
                            <TableHeader>
                                <TableRow>
                                    {labels.columns.into_iter().map(|title| view! {
                                        <TableHeaderCell>{title}</TableHeaderCell>
                                    }).collect_view()}
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || view_state.with(|body| match body.placeholder_colspan() {
                                    Some(colspan) => view! {
                                        <TableRow>
                                            <TableCell attr:colspan=colspan.to_string() attr:style="padding: 32px; text-align: center;">
                                                {labels.no_customers}
                                            </TableCell>
                                        </TableRow>
                                    }.into_any(),
                                    None => body.rows().iter().cloned().map(|customer| view! {
                                        <CustomerRow customer=customer on_edit=on_edit on_delete=on_delete labels=labels />
                                    }).collect_view().into_any(),
                                })}
                            </TableBody>
                        </Table>
                    </div>
                </div>
            }.into_any()
        }}
    }
}

#[component]
fn CustomerRow(
    customer: Customer,
    on_edit: Callback<Customer>,
    on_delete: Callback<CustomerId>,
    labels: Labels,
) -> impl IntoView {
    let id = customer.id;
    let payment_variant = payment_badge_variant(&customer.payment_status);
    let renewal_variant = renewal_badge_variant(&customer.renewal_status);
    let charging_date = charging_date_text(&customer, &labels);
    let monthly_price = monthly_price_text(&customer, &labels);
    let provider = provider_text(&customer, &labels);
    let record = customer.clone();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>
                    <span style="font-weight: 500;">{customer.customer_name}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>{customer.mobile_number}</TableCell>
            <TableCell>{customer.line_type}</TableCell>
            <TableCell>{charging_date}</TableCell>
            <TableCell>
                <UiBadge variant=payment_variant>{customer.payment_status}</UiBadge>
            </TableCell>
            <TableCell>{monthly_price}</TableCell>
            <TableCell>
                <UiBadge variant=renewal_variant>{customer.renewal_status}</UiBadge>
            </TableCell>
            <TableCell>{provider}</TableCell>
            <TableCell>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        attr:title=labels.edit
                        on_click=move |e: ev::MouseEvent| {
                            e.stop_propagation();
                            RowAction::Edit(record.clone())
                                .dispatch(|c| on_edit.run(c), |row_id| on_delete.run(row_id));
                        }
                    >
                        {icon("edit")}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        attr:title=labels.delete
                        on_click=move |e: ev::MouseEvent| {
                            e.stop_propagation();
                            RowAction::Delete(id)
                                .dispatch(|c| on_edit.run(c), |row_id| on_delete.run(row_id));
                        }
                    >
                        {icon("delete")}
                    </Button>
                </Flex>
            </TableCell>
        </TableRow>
    }
}
