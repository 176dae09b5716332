//! Pure cell logic of the customer table: status badges, formatted values and
//! row actions.

use crate::shared::components::table::format_amount;
use crate::shared::components::ui::BadgeVariant;
use crate::shared::date_utils::format_day;
use crate::shared::labels::Labels;
use contracts::domain::a001_customer::{
    Customer, CustomerId, PAYMENT_STATUS_PAID, RENEWAL_STATUS_RENEWED,
};

/// Status value -> badge variant, with the variant for everything else.
pub struct StatusBadgeMap {
    pub known: &'static [(&'static str, BadgeVariant)],
    pub fallback: BadgeVariant,
}

impl StatusBadgeMap {
    pub fn variant(&self, status: &str) -> BadgeVariant {
        self.known
            .iter()
            .find(|(value, _)| *value == status)
            .map(|(_, variant)| *variant)
            .unwrap_or(self.fallback)
    }
}

pub const PAYMENT_BADGES: StatusBadgeMap = StatusBadgeMap {
    known: &[(PAYMENT_STATUS_PAID, BadgeVariant::Primary)],
    fallback: BadgeVariant::Destructive,
};

pub const RENEWAL_BADGES: StatusBadgeMap = StatusBadgeMap {
    known: &[(RENEWAL_STATUS_RENEWED, BadgeVariant::Primary)],
    fallback: BadgeVariant::Secondary,
};

pub fn payment_badge_variant(status: &str) -> BadgeVariant {
    PAYMENT_BADGES.variant(status)
}

pub fn renewal_badge_variant(status: &str) -> BadgeVariant {
    RENEWAL_BADGES.variant(status)
}

pub fn charging_date_text(customer: &Customer, labels: &Labels) -> String {
    if let Some(day) = customer.charging_day() {
        return format_day(day);
    }
    // Unparseable dates are shown as stored rather than hidden
    match customer.charging_date.as_deref().map(str::trim) {
        Some(raw) if !raw.is_empty() => raw.to_string(),
        _ => labels.missing.to_string(),
    }
}

pub fn monthly_price_text(customer: &Customer, labels: &Labels) -> String {
    format_amount(customer.monthly_price, labels.currency)
        .unwrap_or_else(|| labels.missing.to_string())
}

pub fn provider_text(customer: &Customer, labels: &Labels) -> String {
    match customer.provider.as_deref() {
        Some(provider) if !provider.is_empty() => provider.to_string(),
        _ => labels.missing.to_string(),
    }
}

/// Action requested from a row's actions cell.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    Edit(Customer),
    Delete(CustomerId),
}

impl RowAction {
    /// Hands the action to exactly one of the two handlers.
    pub fn dispatch(self, on_edit: impl FnOnce(Customer), on_delete: impl FnOnce(CustomerId)) {
        match self {
            RowAction::Edit(customer) => {
                log::debug!("customer table: edit {}", customer.id);
                on_edit(customer)
            }
            RowAction::Delete(id) => {
                log::debug!("customer table: delete {}", id);
                on_delete(id)
            }
        }
    }
}
