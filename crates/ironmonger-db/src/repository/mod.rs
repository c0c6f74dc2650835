//! # Repositories
//!
//! One repository per aggregate. Each owns a pool handle, exposes
//! `DbResult` methods, and implements the matching store trait from
//! `ironmonger_core::store`.

pub mod client;
pub mod product;
pub mod sale;
