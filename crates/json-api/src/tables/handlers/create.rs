//! Create Table Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use mesa_app::domain::tables::models::{NewTable, TableStatus};

use crate::{
    extensions::*,
    state::State,
    tables::{errors::into_status_error, models::TableResponse},
};

/// Create Table Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTableRequest {
    pub table_number: u32,

    /// `available` (default) or `occupied`
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<CreateTableRequest> for NewTable {
    type Error = StatusError;

    fn try_from(request: CreateTableRequest) -> Result<Self, Self::Error> {
        Ok(NewTable {
            table_number: request.table_number,
            status: request
                .status
                .as_deref()
                .map(str::parse::<TableStatus>)
                .transpose()
                .or_400()?
                .unwrap_or_default(),
        })
    }
}

/// Create Table Handler
#[endpoint(
    tags("admin"),
    summary = "Create Table",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Table created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTableRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TableResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let table = state
        .app
        .tables
        .create_table(json.into_inner().try_into()?)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(table.into()))
}

#[cfg(test)]
mod tests {
    use mesa_app::domain::tables::{
        MockTablesService, TablesServiceError,
        models::{Table, TableId},
    };
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use crate::test_helpers::{TestServices, admin_principal};

    use super::*;

    fn make_service(tables: MockTablesService) -> Service {
        TestServices {
            tables,
            ..TestServices::default()
        }
        .into_service(
            Some(admin_principal()),
            Router::with_path("admin/tables").post(handler),
        )
    }

    #[tokio::test]
    async fn test_create_table_defaults_to_available() -> TestResult {
        let mut tables = MockTablesService::new();

        tables
            .expect_create_table()
            .once()
            .withf(|new| new.table_number == 4 && new.status == TableStatus::Available)
            .return_once(|new| {
                Ok(Table {
                    id: TableId::new("t4"),
                    table_number: new.table_number,
                    status: new.status,
                })
            });

        let mut res = TestClient::post("http://example.com/admin/tables")
            .json(&json!({ "tableNumber": 4 }))
            .send(&make_service(tables))
            .await;

        let body: TableResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status, "available");

        Ok(())
    }

    #[tokio::test]
    async fn test_table_zero_returns_400() {
        let mut tables = MockTablesService::new();

        tables
            .expect_create_table()
            .once()
            .return_once(|_| Err(TablesServiceError::InvalidTableNumber));

        let res = TestClient::post("http://example.com/admin/tables")
            .json(&json!({ "tableNumber": 0 }))
            .send(&make_service(tables))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_unknown_status_returns_400() {
        let mut tables = MockTablesService::new();

        tables.expect_create_table().never();

        let res = TestClient::post("http://example.com/admin/tables")
            .json(&json!({ "tableNumber": 3, "status": "reserved" }))
            .send(&make_service(tables))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
