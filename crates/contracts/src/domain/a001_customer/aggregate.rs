use crate::shared::dates::parse_day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// Status markers
// ============================================================================

/// Значение `payment_status`, означающее «оплачено»
pub const PAYMENT_STATUS_PAID: &str = "مدفوع";

/// Значение `renewal_status`, означающее «продлено»
pub const RENEWAL_STATUS_RENEWED: &str = "تم";

// ============================================================================
// ID Type
// ============================================================================

pub type CustomerId = i64;

// ============================================================================
// Aggregate
// ============================================================================

/// Billing record of a single line subscriber.
///
/// Status fields stay plain strings: the source data is free-form localized
/// text and unknown values must survive a round trip untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: String,
    pub mobile_number: String,
    pub line_type: String,
    #[serde(default)]
    pub charging_date: Option<String>,
    pub payment_status: String,
    #[serde(default)]
    pub monthly_price: Option<f64>,
    pub renewal_status: String,
    #[serde(default)]
    pub arrival_time: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub ownership: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl Customer {
    /// Calendar date of `charging_date`, see [`parse_day`] for accepted forms.
    pub fn charging_day(&self) -> Option<NaiveDate> {
        self.charging_date.as_deref().and_then(parse_day)
    }
}
