pub mod aggregate;
pub mod fixture;

pub use aggregate::{Customer, CustomerId, PAYMENT_STATUS_PAID, RENEWAL_STATUS_RENEWED};
pub use fixture::decode_customers;
