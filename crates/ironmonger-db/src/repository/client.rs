//! # Client Repository
//!
//! Database operations for clients. `national_id` carries a unique index;
//! a duplicate surfaces as [`DbError::UniqueViolation`].

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use ironmonger_core::store::ClientStore;
use ironmonger_core::{Client, CoreResult, NewClient};

/// Repository for client database operations.
#[derive(Debug, Clone)]
pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    /// Creates a new ClientRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ClientRepository { pool }
    }

    /// Inserts a new client and returns it with its assigned id.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - National id already registered
    pub async fn insert(&self, client: &NewClient) -> DbResult<Client> {
        debug!(national_id = %client.national_id, "Inserting client");

        let result =
            sqlx::query("INSERT INTO clients (name, national_id, email) VALUES (?1, ?2, ?3)")
                .bind(&client.name)
                .bind(&client.national_id)
                .bind(&client.email)
                .execute(&self.pool)
                .await?;

        Ok(Client {
            id: result.last_insert_rowid(),
            name: client.name.clone(),
            national_id: client.national_id.clone(),
            email: client.email.clone(),
        })
    }

    /// Lists all clients, newest first.
    pub async fn list_all(&self) -> DbResult<Vec<Client>> {
        let clients = sqlx::query_as::<_, Client>(
            "SELECT id, name, national_id, email FROM clients ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(clients)
    }

    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Client>> {
        let client = sqlx::query_as::<_, Client>(
            "SELECT id, name, national_id, email FROM clients WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(client)
    }

    /// Replaces every field of a client.
    pub async fn update(&self, id: i64, client: &NewClient) -> DbResult<Client> {
        debug!(id, "Updating client");

        let result = sqlx::query(
            "UPDATE clients SET name = ?2, national_id = ?3, email = ?4 WHERE id = ?1",
        )
        .bind(id)
        .bind(&client.name)
        .bind(&client.national_id)
        .bind(&client.email)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Client", id));
        }

        Ok(Client {
            id,
            name: client.name.clone(),
            national_id: client.national_id.clone(),
            email: client.email.clone(),
        })
    }

    /// Deletes a client. Fails with a foreign key violation if the client
    /// has sales.
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting client");

        let result = sqlx::query("DELETE FROM clients WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Client", id));
        }

        Ok(())
    }
}

impl ClientStore for ClientRepository {
    async fn create(&self, client: &NewClient) -> CoreResult<Client> {
        Ok(self.insert(client).await?)
    }

    async fn list(&self) -> CoreResult<Vec<Client>> {
        Ok(self.list_all().await?)
    }

    async fn get(&self, id: i64) -> CoreResult<Option<Client>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn update(&self, id: i64, client: &NewClient) -> CoreResult<Client> {
        Ok(ClientRepository::update(self, id, client).await?)
    }

    async fn delete(&self, id: i64) -> CoreResult<()> {
        Ok(ClientRepository::delete(self, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    fn ana() -> NewClient {
        NewClient {
            name: "Ana Torres".to_string(),
            national_id: "0912345678".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_national_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        repo.insert(&ana()).await.unwrap();
        let err = repo
            .insert(&NewClient {
                name: "Someone Else".to_string(),
                ..ana()
            })
            .await
            .unwrap_err();

        match err {
            DbError::UniqueViolation { field } => assert_eq!(field, "clients.national_id"),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.clients();

        let created = repo.insert(&ana()).await.unwrap();
        let updated = repo
            .update(
                created.id,
                &NewClient {
                    email: "ana.torres@example.com".to_string(),
                    ..ana()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.email, "ana.torres@example.com");
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(updated));

        repo.delete(created.id).await.unwrap();
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(created.id).await.unwrap_err(),
            DbError::NotFound { .. }
        ));
    }
}
