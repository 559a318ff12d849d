//! Tables service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::tables::{
        errors::TablesServiceError,
        models::{NewTable, Table, TableId, TableUpdate},
        records::{COLLECTION, TablePatch, TableRecord, parse_table},
    },
    store::{DocumentStore, Query, record},
};

#[derive(Clone)]
pub struct StoreTablesService {
    store: Arc<dyn DocumentStore>,
}

impl StoreTablesService {
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

fn validate_number(table_number: u32) -> Result<(), TablesServiceError> {
    if table_number == 0 {
        return Err(TablesServiceError::InvalidTableNumber);
    }

    Ok(())
}

#[async_trait]
impl TablesService for StoreTablesService {
    async fn list_tables(&self) -> Result<Vec<Table>, TablesServiceError> {
        let documents = self.store.query(COLLECTION, &Query::all()).await?;

        let mut tables = record::decode_all(documents, parse_table);

        tables.sort_by_key(|table| table.table_number);

        Ok(tables)
    }

    async fn create_table(&self, table: NewTable) -> Result<Table, TablesServiceError> {
        validate_number(table.table_number)?;

        let data = record::encode(&TableRecord {
            table_number: table.table_number,
            status: table.status,
        })?;

        Ok(parse_table(self.store.create(COLLECTION, data).await?)?)
    }

    async fn update_table(
        &self,
        table: &TableId,
        update: TableUpdate,
    ) -> Result<Table, TablesServiceError> {
        if let Some(number) = update.table_number {
            validate_number(number)?;
        }

        let patch = record::encode(&TablePatch {
            table_number: update.table_number,
            status: update.status,
        })?;

        let updated = self
            .store
            .update(COLLECTION, table.as_str(), patch)
            .await?
            .ok_or(TablesServiceError::NotFound)?;

        Ok(parse_table(updated)?)
    }

    async fn delete_table(&self, table: &TableId) -> Result<(), TablesServiceError> {
        if !self.store.delete(COLLECTION, table.as_str()).await? {
            return Err(TablesServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait TablesService: Send + Sync {
    /// Retrieves every table ordered by number.
    async fn list_tables(&self) -> Result<Vec<Table>, TablesServiceError>;

    async fn create_table(&self, table: NewTable) -> Result<Table, TablesServiceError>;

    async fn update_table(
        &self,
        table: &TableId,
        update: TableUpdate,
    ) -> Result<Table, TablesServiceError>;

    async fn delete_table(&self, table: &TableId) -> Result<(), TablesServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;
    use crate::{domain::tables::models::TableStatus, store::MemoryDocumentStore};

    fn service() -> StoreTablesService {
        StoreTablesService::new(Arc::new(MemoryDocumentStore::new()))
    }

    fn new_table(table_number: u32) -> NewTable {
        NewTable {
            table_number,
            status: TableStatus::Available,
        }
    }

    #[tokio::test]
    async fn list_tables_orders_by_number() -> TestResult {
        let tables = service();

        tables.create_table(new_table(3)).await?;
        tables.create_table(new_table(1)).await?;

        let numbers: Vec<u32> = tables
            .list_tables()
            .await?
            .into_iter()
            .map(|table| table.table_number)
            .collect();

        assert_eq!(numbers, vec![1, 3]);

        Ok(())
    }

    #[tokio::test]
    async fn table_number_zero_is_rejected() -> TestResult {
        let tables = service();

        let created = tables.create_table(new_table(0)).await;

        assert!(matches!(created, Err(TablesServiceError::InvalidTableNumber)));

        let table = tables.create_table(new_table(2)).await?;
        let updated = tables
            .update_table(
                &table.id,
                TableUpdate {
                    table_number: Some(0),
                    ..TableUpdate::default()
                },
            )
            .await;

        assert!(matches!(updated, Err(TablesServiceError::InvalidTableNumber)));

        Ok(())
    }

    #[tokio::test]
    async fn update_table_marks_it_occupied() -> TestResult {
        let tables = service();

        let table = tables.create_table(new_table(4)).await?;

        let updated = tables
            .update_table(
                &table.id,
                TableUpdate {
                    status: Some(TableStatus::Occupied),
                    ..TableUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.table_number, 4);
        assert_eq!(updated.status, TableStatus::Occupied);

        Ok(())
    }

    #[tokio::test]
    async fn delete_unknown_table_returns_not_found() {
        let result = service().delete_table(&TableId::new("nope")).await;

        assert!(matches!(result, Err(TablesServiceError::NotFound)));
    }
}
