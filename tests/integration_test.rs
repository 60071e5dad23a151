//! Integration tests for the admin event client
//!
//! These tests require a running admin event service.
//! Set the following environment variables to run:
//! - ADMIN_EVENT_BASE_URL
//! - ADMIN_EVENT_TOKEN
//!
//! Or run with: ADMIN_EVENT_INTEGRATION_TESTS=1 cargo test --test integration_test
//!
//! Only read-only operations are exercised.

use admin_event_client::{Client, ClientConfig};
use std::env;
use std::time::Duration;

fn should_run_integration_tests() -> bool {
    env::var("ADMIN_EVENT_INTEGRATION_TESTS").is_ok()
}

fn create_integration_client() -> Option<Client> {
    if !should_run_integration_tests() {
        return None;
    }

    let base_url =
        env::var("ADMIN_EVENT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
    let token = env::var("ADMIN_EVENT_TOKEN").unwrap_or_else(|_| "secret".to_string());

    Some(
        Client::new(ClientConfig::new(base_url, token).with_timeout(Duration::from_secs(30)))
            .unwrap(),
    )
}

#[tokio::test]
async fn test_integration_list_events() {
    let client = match create_integration_client() {
        Some(c) => c,
        None => {
            println!("Skipping integration test: ADMIN_EVENT_INTEGRATION_TESTS not set");
            return;
        }
    };

    let response = client.list_events().await;
    assert!(response.is_success(), "List failed: {:?}", response.error());
    println!("Listed {} events", response.data().map_or(0, Vec::len));
}

#[tokio::test]
async fn test_integration_event_detail_and_hosts() {
    let client = match create_integration_client() {
        Some(c) => c,
        None => {
            println!("Skipping integration test: ADMIN_EVENT_INTEGRATION_TESTS not set");
            return;
        }
    };

    let events = client.list_events().await.into_data().unwrap_or_default();
    let Some(first) = events.first() else {
        println!("No events on the server, nothing to fetch");
        return;
    };

    let detail = client.get_event(&first.id).await;
    assert!(detail.is_success(), "Get failed: {:?}", detail.error());
    assert_eq!(detail.data().unwrap().id, first.id);

    let hosts = client.get_available_hosts(&first.id).await;
    assert!(hosts.is_success(), "Available hosts failed: {:?}", hosts.error());
}

#[tokio::test]
async fn test_integration_bad_token_is_failure() {
    let client = match create_integration_client() {
        Some(c) => c,
        None => {
            println!("Skipping integration test: ADMIN_EVENT_INTEGRATION_TESTS not set");
            return;
        }
    };

    let mut config = client.config().clone();
    config.token = "definitely-not-a-valid-token".to_string();
    let client = client.with_config(config).unwrap();

    let response = client.list_events().await;
    assert!(response.is_failure());
    println!("Rejected as expected: {}", response.error().unwrap());
}
