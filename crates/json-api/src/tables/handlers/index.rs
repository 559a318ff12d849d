//! Table Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    state::State,
    tables::{errors::into_status_error, models::TableResponse},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TablesResponse {
    /// Tables ordered by number
    pub tables: Vec<TableResponse>,
}

/// Table Index Handler
#[endpoint(tags("admin"), summary = "List Tables", security(("bearer_auth" = [])))]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<TablesResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let tables = state
        .app
        .tables
        .list_tables()
        .await
        .map_err(into_status_error)?;

    Ok(Json(TablesResponse {
        tables: tables.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::tables::{
        MockTablesService,
        models::{Table, TableId, TableStatus},
    };
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, admin_principal};

    use super::*;

    #[tokio::test]
    async fn test_index_lists_tables() -> TestResult {
        let mut tables = MockTablesService::new();

        tables.expect_list_tables().once().return_once(|| {
            Ok(vec![
                Table {
                    id: TableId::new("t1"),
                    table_number: 1,
                    status: TableStatus::Occupied,
                },
                Table {
                    id: TableId::new("t2"),
                    table_number: 2,
                    status: TableStatus::Available,
                },
            ])
        });

        let response: TablesResponse = TestClient::get("http://example.com/admin/tables")
            .send(
                &TestServices {
                    tables,
                    ..TestServices::default()
                }
                .into_service(
                    Some(admin_principal()),
                    Router::with_path("admin/tables").get(handler),
                ),
            )
            .await
            .take_json()
            .await?;

        let numbers: Vec<(u32, &str)> = response
            .tables
            .iter()
            .map(|table| (table.table_number, table.status.as_str()))
            .collect();

        assert_eq!(numbers, vec![(1, "occupied"), (2, "available")]);

        Ok(())
    }
}
