//! API Client
//!
//! HTTP access to the Jobwatch REST API.

pub mod client;

pub use client::*;
