//! Decoding of customer lists shipped as JSON.

use super::aggregate::Customer;
use anyhow::{ensure, Context, Result};
use std::collections::HashSet;

/// Parses a JSON array of customers.
///
/// Ids must be unique: the table keys its rows by id.
pub fn decode_customers(json: &str) -> Result<Vec<Customer>> {
    let customers: Vec<Customer> =
        serde_json::from_str(json).context("customer list is not valid JSON")?;

    let mut seen = HashSet::with_capacity(customers.len());
    for customer in &customers {
        ensure!(
            seen.insert(customer.id),
            "duplicate customer id {}",
            customer.id
        );
    }

    Ok(customers)
}
