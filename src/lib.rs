//! Admin Event Client SDK for Rust
//!
//! This crate provides a typed client for the admin event management REST API.
//! Every operation resolves to an [`ApiResponse`]: either `Success { data }` or
//! `Failure { message }`. Network errors, non-2xx statuses and undecodable
//! bodies never escape as `Err` or panics.
//!
//! # Example
//!
//! ```no_run
//! use admin_event_client::{ApiResponse, Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new(ClientConfig::new("https://api.example.com", "your-token"))?;
//!
//!     match client.list_events().await {
//!         ApiResponse::Success { data } => {
//!             for event in data {
//!                 println!("{}: {}", event.id, event.name);
//!             }
//!         }
//!         ApiResponse::Failure { message } => eprintln!("Error: {}", message),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod catalog;
mod client;
mod config;
mod error;
mod response;
mod types;

pub use catalog::{HttpMethod, MethodFilter, Operation, Parameter};
pub use client::Client;
pub use config::{ClientConfig, BASE_URL_ENV, TIMEOUT_ENV, TOKEN_ENV};
pub use error::{Error, Result};
pub use response::{ApiResponse, UNKNOWN_ERROR};
pub use types::*;
