//! Client operations: validation in front of a [`ClientStore`].

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::store::ClientStore;
use crate::types::{Client, NewClient};
use crate::validation::{validate_client, validate_id};

#[derive(Debug, Clone)]
pub struct ClientService<S> {
    store: S,
}

impl<S: ClientStore> ClientService<S> {
    /// Creates a new ClientService.
    pub fn new(store: S) -> Self {
        ClientService { store }
    }

    /// Validates and stores a new client.
    ///
    /// Fails with `Conflict` if the national id is already registered.
    pub async fn create(&self, client: &NewClient) -> CoreResult<Client> {
        let client = validate_client(client)?;
        debug!(national_id = %client.national_id, "Creating client");
        self.store.create(&client).await
    }

    pub async fn list(&self) -> CoreResult<Vec<Client>> {
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> CoreResult<Client> {
        validate_id("id", id)?;
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Client", id))
    }

    /// Replaces every field of an existing client.
    pub async fn update(&self, id: i64, client: &NewClient) -> CoreResult<Client> {
        validate_id("id", id)?;
        let client = validate_client(client)?;
        self.store.update(id, &client).await
    }

    /// Fails with `Conflict` if the client has sales.
    pub async fn delete(&self, id: i64) -> CoreResult<()> {
        validate_id("id", id)?;
        self.store.delete(id).await
    }
}
