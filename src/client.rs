//! Admin event service client implementation

use crate::catalog::{self, HttpMethod, Operation};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::response::ApiResponse;
use crate::types::*;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

const NO_BODY: Option<&()> = None;

/// Admin event service client
///
/// Every operation returns an [`ApiResponse`]; no method returns `Err` or
/// panics on a failed call. Cloning is cheap and clones share the underlying
/// connection stack.
#[derive(Debug, Clone)]
pub struct Client {
    config: ClientConfig,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        validate(&config)?;

        let http_client = reqwest::Client::builder().build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = ClientConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace the configuration used by subsequent calls
    pub fn set_config(&mut self, config: ClientConfig) -> Result<()> {
        validate(&config)?;
        self.config = config;
        Ok(())
    }

    /// A client with `config` that shares this client's connection stack
    pub fn with_config(&self, config: ClientConfig) -> Result<Self> {
        validate(&config)?;
        Ok(Self {
            config,
            http_client: self.http_client.clone(),
        })
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn default_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&self.config.auth_header())?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Perform one request against `path` and decode the JSON response
    ///
    /// `path` is appended to the base URL as given. Transport errors, non-2xx
    /// statuses and undecodable bodies all come back as
    /// [`ApiResponse::Failure`].
    pub async fn execute<T, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let result = self.send(method, path, body).await;
        if let Err(e) = &result {
            tracing::warn!(%method, path, error = %e, "admin event request failed");
        }
        ApiResponse::from(result)
    }

    /// Perform the operation described by `op`, filling its path placeholders from `params`
    pub async fn call<T, B>(&self, op: &Operation, params: &[(&str, &str)], body: Option<&B>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(op.method, &op.path(params), body).await
    }

    async fn send<T, B>(&self, method: HttpMethod, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.build_url(path);
        let headers = self.default_headers()?;

        let mut request = self
            .http_client
            .request(method.into(), &url)
            .headers(headers);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }
        if let Some(timeout) = self.config.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!(%method, %url, "sending admin event request");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(%method, %url, status = status.as_u16(), len = bytes.len(), "admin event response");
        decode(&bytes)
    }

    // Event management

    /// List all events
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use admin_event_client::{ApiResponse, Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = Client::new(ClientConfig::new("https://api.example.com", "token"))?;
    /// match client.list_events().await {
    ///     ApiResponse::Success { data } => println!("{} events", data.len()),
    ///     ApiResponse::Failure { message } => eprintln!("Error: {}", message),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn list_events(&self) -> ApiResponse<Vec<Event>> {
        self.call(&catalog::LIST_EVENTS, &[], NO_BODY).await
    }

    pub async fn get_event(&self, id: &str) -> ApiResponse<Event> {
        self.call(&catalog::GET_EVENT, &[("id", id)], NO_BODY).await
    }

    pub async fn create_event(&self, payload: &CreateEventPayload) -> ApiResponse<Event> {
        self.call(&catalog::CREATE_EVENT, &[], Some(payload)).await
    }

    pub async fn update_event(&self, id: &str, payload: &UpdateEventPayload) -> ApiResponse<Event> {
        self.call(&catalog::UPDATE_EVENT, &[("id", id)], Some(payload)).await
    }

    /// Cancel an event
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use admin_event_client::{CancelEventPayload, Client, ClientConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new(ClientConfig::new("https://api.example.com", "token"))?;
    /// let response = client
    ///     .cancel_event("e1", &CancelEventPayload { reason: "weather".to_string() })
    ///     .await;
    /// if let Some(message) = response.error() {
    ///     eprintln!("Cancel failed: {}", message);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn cancel_event(&self, id: &str, payload: &CancelEventPayload) -> ApiResponse<Value> {
        self.call(&catalog::CANCEL_EVENT, &[("id", id)], Some(payload)).await
    }

    // Host management

    pub async fn get_available_hosts(&self, event_id: &str) -> ApiResponse<Vec<Host>> {
        self.call(&catalog::GET_AVAILABLE_HOSTS, &[("id", event_id)], NO_BODY)
            .await
    }

    pub async fn add_host(&self, event_id: &str, host_id: &str) -> ApiResponse<Value> {
        self.call(
            &catalog::ADD_HOST,
            &[("id", event_id), ("host_id", host_id)],
            NO_BODY,
        )
        .await
    }

    pub async fn update_host(&self, event_id: &str, host_id: &str, payload: &Value) -> ApiResponse<Value> {
        self.call(
            &catalog::UPDATE_HOST,
            &[("id", event_id), ("host_id", host_id)],
            Some(payload),
        )
        .await
    }

    pub async fn remove_host(&self, event_id: &str, host_id: &str) -> ApiResponse<Value> {
        self.call(
            &catalog::REMOVE_HOST,
            &[("id", event_id), ("host_id", host_id)],
            NO_BODY,
        )
        .await
    }

    pub async fn add_multiple_hosts(&self, event_id: &str, payload: &Value) -> ApiResponse<Value> {
        self.call(&catalog::ADD_MULTIPLE_HOSTS, &[("id", event_id)], Some(payload))
            .await
    }

    /// Events that conflict with `event_id` for the given host
    pub async fn get_conflicting_events(&self, event_id: &str, host_id: &str) -> ApiResponse<Vec<Event>> {
        self.call(
            &catalog::GET_CONFLICTING_EVENTS,
            &[("id", event_id), ("host_id", host_id)],
            NO_BODY,
        )
        .await
    }

    // Showcase and approval

    pub async fn get_showcase_page_data(&self, event_id: &str) -> ApiResponse<Value> {
        self.call(&catalog::GET_SHOWCASE_PAGE_DATA, &[("id", event_id)], NO_BODY)
            .await
    }

    pub async fn get_approval_page_data(&self, event_id: &str) -> ApiResponse<Value> {
        self.call(&catalog::GET_APPROVAL_PAGE_DATA, &[("id", event_id)], NO_BODY)
            .await
    }

    // Calendar, templates and catalogue

    pub async fn get_calendar_actionables(&self, event_id: &str) -> ApiResponse<Vec<Value>> {
        self.call(&catalog::GET_CALENDAR_ACTIONABLES, &[("id", event_id)], NO_BODY)
            .await
    }

    pub async fn get_collateral_templates(&self, event_id: &str) -> ApiResponse<Vec<Value>> {
        self.call(&catalog::GET_COLLATERAL_TEMPLATES, &[("id", event_id)], NO_BODY)
            .await
    }

    pub async fn get_event_catalogue(&self, event_id: &str) -> ApiResponse<Value> {
        self.call(&catalog::GET_EVENT_CATALOGUE, &[("id", event_id)], NO_BODY)
            .await
    }

    // Validation

    pub async fn validate_old_event_id(&self, old_event_id: &str) -> ApiResponse<Value> {
        self.call(&catalog::VALIDATE_OLD_EVENT_ID, &[("id", old_event_id)], NO_BODY)
            .await
    }

    // Shipment addresses

    /// Create a shipment address for hosts or partners, selected by `shipment_role`
    pub async fn create_shipment_address(&self, shipment_role: &str, payload: &Value) -> ApiResponse<Value> {
        self.call(
            &catalog::CREATE_SHIPMENT_ADDRESS,
            &[("shipmentRole", shipment_role)],
            Some(payload),
        )
        .await
    }

    pub async fn update_shipment_address(
        &self,
        shipment_role: &str,
        address_id: &str,
        payload: &Value,
    ) -> ApiResponse<Value> {
        self.call(
            &catalog::UPDATE_SHIPMENT_ADDRESS,
            &[("shipmentRole", shipment_role), ("id", address_id)],
            Some(payload),
        )
        .await
    }

    // Partner testimonials

    pub async fn add_partner_testimonial(&self, event_id: &str, payload: &Value) -> ApiResponse<Value> {
        self.call(
            &catalog::ADD_PARTNER_TESTIMONIAL,
            &[("id", event_id)],
            Some(payload),
        )
        .await
    }

    pub async fn update_partner_testimonial(
        &self,
        event_id: &str,
        testimonial_id: &str,
        payload: &Value,
    ) -> ApiResponse<Value> {
        self.call(
            &catalog::UPDATE_PARTNER_TESTIMONIAL,
            &[("id", event_id), ("partner_testimonial_id", testimonial_id)],
            Some(payload),
        )
        .await
    }

    // Champions and checklists

    pub async fn upsert_meet_and_greet(
        &self,
        event_id: &str,
        host_id: &str,
        champion_id: &str,
        payload: &Value,
    ) -> ApiResponse<Value> {
        self.call(
            &catalog::UPSERT_MEET_AND_GREET,
            &[("id", event_id), ("host_id", host_id), ("champion_id", champion_id)],
            Some(payload),
        )
        .await
    }

    pub async fn attach_checklist(&self, event_id: &str) -> ApiResponse<Value> {
        self.call(&catalog::ATTACH_CHECKLIST, &[("eventId", event_id)], NO_BODY)
            .await
    }
}

fn validate(config: &ClientConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(Error::MissingConfig("base_url".to_string()));
    }
    Ok(())
}

/// Decode a success body; an empty body reads as JSON `null`
fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }
    Ok(serde_json::from_slice(body)?)
}
