pub mod list;
pub mod page;

pub use list::CustomerTable;
pub use page::CustomersPage;

#[cfg(test)]
pub(crate) mod test_support {
    use contracts::domain::a001_customer::{
        Customer, CustomerId, PAYMENT_STATUS_PAID, RENEWAL_STATUS_RENEWED,
    };

    pub fn customer(id: CustomerId, name: &str, mobile: &str) -> Customer {
        Customer {
            id,
            customer_name: name.to_string(),
            mobile_number: mobile.to_string(),
            line_type: "مفوتر".to_string(),
            charging_date: None,
            payment_status: PAYMENT_STATUS_PAID.to_string(),
            monthly_price: None,
            renewal_status: RENEWAL_STATUS_RENEWED.to_string(),
            arrival_time: None,
            provider: None,
            ownership: None,
            notes: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            updated_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }
}
