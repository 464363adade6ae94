//! The resource capability interface and the single CRUD lifecycle shared by
//! every Graph-backed resource.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::graph::{ApiVersion, GraphClient, GraphClients, with_timeout};
use crate::mapping::{ConstructError, log_request_body};
use crate::provider::PROVIDER_TYPE_NAME;
use crate::terraform::{
    DEFAULT_TIMEOUT, Diagnostics, Schema, StringValue, Timeouts, UNKNOWN_VALUE, Value,
};

/// Outcome of one resource operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceResponse {
    /// New state for the instance; `None` removes it from state.
    pub state: Option<serde_json::Value>,
    pub diagnostics: Diagnostics,
}

impl ResourceResponse {
    fn with_state(state: serde_json::Value, diagnostics: Diagnostics) -> Self {
        Self {
            state: Some(state),
            diagnostics,
        }
    }

    fn removed(diagnostics: Diagnostics) -> Self {
        Self {
            state: None,
            diagnostics,
        }
    }

    /// Keeps `prior` (if any) as the state alongside the diagnostics.
    fn keep(prior: Option<&serde_json::Value>, diagnostics: Diagnostics) -> Self {
        Self {
            state: prior.cloned(),
            diagnostics,
        }
    }
}

/// Capabilities every resource type exposes to the host.
#[async_trait]
pub trait Resource: Send + Sync {
    fn type_name(&self, provider_type_name: &str) -> String;

    fn schema(&self) -> Schema;

    /// `None` means the provider has not been configured yet; that is not an error here.
    fn configure(&mut self, provider_data: Option<Arc<GraphClients>>) -> Diagnostics;

    async fn create(&self, plan: &serde_json::Value) -> ResourceResponse;

    async fn read(&self, state: &serde_json::Value) -> ResourceResponse;

    async fn update(
        &self,
        plan: &serde_json::Value,
        prior_state: &serde_json::Value,
    ) -> ResourceResponse;

    async fn delete(&self, state: &serde_json::Value) -> ResourceResponse;

    fn import_state(&self, id: &str) -> ResourceResponse;
}

/// The per-entity mapping contract: attribute model, wire model, construct and flatten.
pub trait GraphResource: Send + Sync + 'static {
    type Model: Serialize + DeserializeOwned + Default + Send + Sync;
    type Remote: Serialize + DeserializeOwned + Send + Sync;

    /// Type name without the provider prefix.
    const TYPE_NAME: &'static str;
    const API_VERSION: ApiVersion;
    /// Collection path relative to the service root, e.g. `deviceManagement/assignmentFilters`.
    const COLLECTION_PATH: &'static str;
    /// Human-readable name used in diagnostics.
    const DISPLAY_NAME: &'static str;

    fn schema() -> Schema;

    fn construct(model: &Self::Model) -> Result<Self::Remote, ConstructError>;

    /// Populates every attribute from the remote representation, computed ones included.
    fn flatten(model: &mut Self::Model, remote: &Self::Remote);

    fn id(model: &Self::Model) -> &StringValue;

    fn set_id(model: &mut Self::Model, id: String);

    fn remote_id(remote: &Self::Remote) -> Option<&str>;

    fn timeouts(model: &Self::Model) -> &Value<Timeouts>;
}

/// Replaces every unknown value with the prior state's value at the same
/// path, or null when the prior state has none.
fn settle_unknowns(value: &mut serde_json::Value, prior: Option<&serde_json::Value>) {
    let prior = prior.filter(|p| p.as_str() != Some(UNKNOWN_VALUE));
    if value.as_str() == Some(UNKNOWN_VALUE) {
        *value = prior.cloned().unwrap_or(serde_json::Value::Null);
        return;
    }
    match value {
        serde_json::Value::Object(fields) => {
            for (key, field) in fields.iter_mut() {
                settle_unknowns(field, prior.and_then(|p| p.get(key.as_str())));
            }
        }
        serde_json::Value::Array(items) => {
            for (index, item) in items.iter_mut().enumerate() {
                settle_unknowns(item, prior.and_then(|p| p.get(index)));
            }
        }
        _ => {}
    }
}

/// Create/Read/Update/Delete/Import for any [`GraphResource`].
pub struct Lifecycle<R: GraphResource> {
    clients: Option<Arc<GraphClients>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: GraphResource> Default for Lifecycle<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GraphResource> Lifecycle<R> {
    pub fn new() -> Self {
        Self {
            clients: None,
            _resource: PhantomData,
        }
    }

    pub fn configured(clients: Arc<GraphClients>) -> Self {
        Self {
            clients: Some(clients),
            _resource: PhantomData,
        }
    }

    fn resource_type() -> String {
        format!("{}_{}", PROVIDER_TYPE_NAME, R::TYPE_NAME)
    }

    fn client(&self, operation: &str, diags: &mut Diagnostics) -> Option<&GraphClient> {
        let client = self
            .clients
            .as_deref()
            .map(|clients| clients.for_version(R::API_VERSION));
        if client.is_none() {
            diags.add_error(
                "Client is not initialized",
                format!(
                    "Cannot {} {} because the provider has not been configured.",
                    operation,
                    R::DISPLAY_NAME
                ),
            );
        }
        client
    }

    fn decode(raw: &serde_json::Value, what: &str, diags: &mut Diagnostics) -> Option<R::Model> {
        match serde_json::from_value(raw.clone()) {
            Ok(model) => Some(model),
            Err(e) => {
                diags.add_error(
                    format!("Invalid {}", what),
                    format!("Could not decode {} for {}: {}", what, Self::resource_type(), e),
                );
                None
            }
        }
    }

    fn encode(model: &R::Model, diags: &mut Diagnostics) -> Option<serde_json::Value> {
        match serde_json::to_value(model) {
            Ok(value) => Some(value),
            Err(e) => {
                diags.add_error(
                    "Error encoding state",
                    format!("Could not encode state for {}: {}", Self::resource_type(), e),
                );
                None
            }
        }
    }

    fn item_path(id: &str) -> String {
        format!("{}/{}", R::COLLECTION_PATH, urlencoding::encode(id))
    }

    fn construct(model: &R::Model, diags: &mut Diagnostics) -> Option<R::Remote> {
        match R::construct(model) {
            Ok(body) => {
                log_request_body(&Self::resource_type(), &body);
                Some(body)
            }
            Err(e) => {
                diags.add_error(
                    format!("Error constructing {}", R::DISPLAY_NAME),
                    format!("Could not construct resource {}: {}", Self::resource_type(), e),
                );
                None
            }
        }
    }
}

#[async_trait]
impl<R: GraphResource> Resource for Lifecycle<R> {
    fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_{}", provider_type_name, R::TYPE_NAME)
    }

    fn schema(&self) -> Schema {
        R::schema()
    }

    fn configure(&mut self, provider_data: Option<Arc<GraphClients>>) -> Diagnostics {
        match provider_data {
            Some(clients) => {
                tracing::debug!(
                    resource_type = %Self::resource_type(),
                    api_version = %R::API_VERSION,
                    "resource configured"
                );
                self.clients = Some(clients);
            }
            None => {
                tracing::debug!(
                    resource_type = %Self::resource_type(),
                    "provider data not available yet, skipping resource configuration"
                );
            }
        }
        Diagnostics::new()
    }

    async fn create(&self, plan: &serde_json::Value) -> ResourceResponse {
        let resource_type = Self::resource_type();
        tracing::debug!(%resource_type, "starting create");

        let mut diags = Diagnostics::new();
        let Some(mut model) = Self::decode(plan, "plan", &mut diags) else {
            return ResourceResponse::removed(diags);
        };
        let Some(client) = self.client("create", &mut diags) else {
            return ResourceResponse::removed(diags);
        };
        let timeout = match R::timeouts(&model).create(DEFAULT_TIMEOUT) {
            Ok(timeout) => timeout,
            Err(e) => {
                diags.add_error("Invalid timeout", e.to_string());
                return ResourceResponse::removed(diags);
            }
        };
        let Some(body) = Self::construct(&model, &mut diags) else {
            return ResourceResponse::removed(diags);
        };
        tracing::debug!(%resource_type, timeout_ms = timeout.as_millis() as u64, "posting");

        let remote: R::Remote =
            match with_timeout(timeout, client.post(R::COLLECTION_PATH, &body)).await {
                Ok(remote) => remote,
                Err(e) => {
                    diags.add_error(
                        format!("Error creating {}", R::DISPLAY_NAME),
                        format!("Could not create {}: {}", R::DISPLAY_NAME, e),
                    );
                    return ResourceResponse::removed(diags);
                }
            };

        let Some(id) = R::remote_id(&remote).map(str::to_string) else {
            diags.add_error(
                format!("Error creating {}", R::DISPLAY_NAME),
                "Graph accepted the request but returned no identifier."
            );
            return ResourceResponse::removed(diags);
        };

        R::set_id(&mut model, id.clone());
        R::flatten(&mut model, &remote);

        tracing::info!(%resource_type, %id, "created");
        match Self::encode(&model, &mut diags) {
            Some(state) => ResourceResponse::with_state(state, diags),
            None => ResourceResponse::removed(diags),
        }
    }

    async fn read(&self, state: &serde_json::Value) -> ResourceResponse {
        let resource_type = Self::resource_type();
        let mut diags = Diagnostics::new();
        let Some(mut model) = Self::decode(state, "state", &mut diags) else {
            return ResourceResponse::keep(Some(state), diags);
        };

        let id = R::id(&model).value_string().to_string();
        if id.is_empty() {
            diags.add_warning(
                format!("Unable to read {}", R::DISPLAY_NAME),
                format!("{} ID is empty or null. Unable to read it.", R::DISPLAY_NAME),
            );
            return ResourceResponse::keep(Some(state), diags);
        }
        let Some(client) = self.client("read", &mut diags) else {
            return ResourceResponse::keep(Some(state), diags);
        };
        let timeout = match R::timeouts(&model).read(DEFAULT_TIMEOUT) {
            Ok(timeout) => timeout,
            Err(e) => {
                diags.add_error("Invalid timeout", e.to_string());
                return ResourceResponse::keep(Some(state), diags);
            }
        };
        tracing::debug!(
            %resource_type,
            %id,
            timeout_ms = timeout.as_millis() as u64,
            "starting read"
        );

        let path = Self::item_path(&id);
        let remote: R::Remote = match with_timeout(timeout, client.get(&path)).await {
            Ok(remote) => remote,
            Err(e) if e.is_not_found() => {
                tracing::info!(%resource_type, %id, "not found remotely, removing from state");
                diags.add_warning(
                    format!("{} not found", R::DISPLAY_NAME),
                    format!(
                        "{} with ID {} was not found. Removing from state.",
                        R::DISPLAY_NAME,
                        id
                    ),
                );
                return ResourceResponse::removed(diags);
            }
            Err(e) => {
                diags.add_error(
                    format!("Error reading {}", R::DISPLAY_NAME),
                    format!("Could not read {} with ID {}: {}", R::DISPLAY_NAME, id, e),
                );
                return ResourceResponse::keep(Some(state), diags);
            }
        };

        R::flatten(&mut model, &remote);

        tracing::debug!(%resource_type, %id, "finished read");
        match Self::encode(&model, &mut diags) {
            Some(new_state) => ResourceResponse::with_state(new_state, diags),
            None => ResourceResponse::keep(Some(state), diags),
        }
    }

    async fn update(
        &self,
        plan: &serde_json::Value,
        prior_state: &serde_json::Value,
    ) -> ResourceResponse {
        let resource_type = Self::resource_type();
        let mut diags = Diagnostics::new();
        let (Some(mut model), Some(prior)) = (
            Self::decode(plan, "plan", &mut diags),
            Self::decode(prior_state, "state", &mut diags),
        ) else {
            return ResourceResponse::keep(Some(prior_state), diags);
        };

        let id = [R::id(&prior), R::id(&model)]
            .into_iter()
            .find_map(|id| id.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string);
        let Some(id) = id else {
            diags.add_error(
                format!("Error updating {}", R::DISPLAY_NAME),
                format!("{} ID is empty or null. Unable to update it.", R::DISPLAY_NAME),
            );
            return ResourceResponse::keep(Some(prior_state), diags);
        };
        R::set_id(&mut model, id.clone());
        tracing::debug!(%resource_type, %id, "starting update");

        let Some(client) = self.client("update", &mut diags) else {
            return ResourceResponse::keep(Some(prior_state), diags);
        };
        let (update_timeout, read_timeout) = match (
            R::timeouts(&model).update(DEFAULT_TIMEOUT),
            R::timeouts(&model).read(DEFAULT_TIMEOUT),
        ) {
            (Ok(update), Ok(read)) => (update, read),
            (Err(e), _) | (_, Err(e)) => {
                diags.add_error("Invalid timeout", e.to_string());
                return ResourceResponse::keep(Some(prior_state), diags);
            }
        };
        let Some(body) = Self::construct(&model, &mut diags) else {
            return ResourceResponse::keep(Some(prior_state), diags);
        };

        let path = Self::item_path(&id);
        if let Err(e) = with_timeout(update_timeout, client.patch(&path, &body)).await {
            let detail = if e.is_not_found() {
                format!(
                    "{} with ID {} no longer exists. \
                     Refresh to remove it from state, then apply again to recreate it.",
                    R::DISPLAY_NAME,
                    id
                )
            } else {
                format!("Could not update {} with ID {}: {}", R::DISPLAY_NAME, id, e)
            };
            diags.add_error(format!("Error updating {}", R::DISPLAY_NAME), detail);
            return ResourceResponse::keep(Some(prior_state), diags);
        }

        let refreshed = match with_timeout(read_timeout, client.get::<R::Remote>(&path)).await {
            Ok(remote) => {
                R::flatten(&mut model, &remote);
                true
            }
            Err(e) => {
                diags.add_warning(
                    format!("Unable to refresh {} after update", R::DISPLAY_NAME),
                    format!(
                        "The update succeeded but reading it back failed: {}. \
                         Computed attributes will be refreshed on the next read.",
                        e
                    ),
                );
                false
            }
        };

        tracing::info!(%resource_type, %id, "updated");
        match Self::encode(&model, &mut diags) {
            Some(mut state) => {
                if !refreshed {
                    settle_unknowns(&mut state, Some(prior_state));
                }
                ResourceResponse::with_state(state, diags)
            }
            None => ResourceResponse::keep(Some(prior_state), diags),
        }
    }

    async fn delete(&self, state: &serde_json::Value) -> ResourceResponse {
        let resource_type = Self::resource_type();
        let mut diags = Diagnostics::new();
        let Some(model) = Self::decode(state, "state", &mut diags) else {
            return ResourceResponse::keep(Some(state), diags);
        };

        let id = R::id(&model).value_string().to_string();
        if id.is_empty() {
            tracing::debug!(%resource_type, "no identifier in state, nothing to delete");
            return ResourceResponse::removed(diags);
        }
        tracing::debug!(%resource_type, %id, "starting delete");

        let Some(client) = self.client("delete", &mut diags) else {
            return ResourceResponse::keep(Some(state), diags);
        };
        let timeout = match R::timeouts(&model).delete(DEFAULT_TIMEOUT) {
            Ok(timeout) => timeout,
            Err(e) => {
                diags.add_error("Invalid timeout", e.to_string());
                return ResourceResponse::keep(Some(state), diags);
            }
        };

        match with_timeout(timeout, client.delete(&Self::item_path(&id))).await {
            Ok(()) => tracing::info!(%resource_type, %id, "deleted"),
            Err(e) if e.is_not_found() => {
                tracing::info!(%resource_type, %id, "already absent remotely");
            }
            Err(e) => {
                diags.add_error(
                    format!("Client error when deleting {}", resource_type),
                    e.to_string(),
                );
                return ResourceResponse::keep(Some(state), diags);
            }
        }

        ResourceResponse::removed(diags)
    }

    fn import_state(&self, id: &str) -> ResourceResponse {
        let mut diags = Diagnostics::new();
        if id.trim().is_empty() {
            diags.add_error(
                "Invalid import identifier",
                format!("An ID is required to import {}.", Self::resource_type()),
            );
            return ResourceResponse::removed(diags);
        }

        let mut model = R::Model::default();
        R::set_id(&mut model, id.to_string());
        match Self::encode(&model, &mut diags) {
            Some(state) => ResourceResponse::with_state(state, diags),
            None => ResourceResponse::removed(diags),
        }
    }
}
