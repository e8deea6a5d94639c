//! services/api/src/lib.rs
//!
//! HTTP façade over the SFDA drug catalog, the user medication list and the
//! drug-food interaction list.

pub mod adapters;
pub mod config;
pub mod error;
pub mod web;
