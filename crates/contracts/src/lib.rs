//! Shared data contracts between the customer UI and whatever feeds it.

pub mod domain;
pub mod shared;
