use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{CreateFieldAliasRequest, TableFields, UpdateFieldAliasRequest};
use crate::params::QueryParams;

impl ApiClient {
    /// Aliases of one table's columns, with the table's alias metadata.
    pub async fn table_fields(&self, table: &str) -> Result<TableFields, ApiError> {
        let url = self.org_url(&format!("tables/{table}/fields"))?;
        let mut fields: TableFields = self
            .get(&url, &QueryParams::new(), "Failed to fetch table fields")
            .await?;
        if fields.table_name.is_empty() {
            fields.table_name = table.to_string();
        }
        Ok(fields)
    }

    pub async fn create_field_alias(&self, req: &CreateFieldAliasRequest) -> Result<(), ApiError> {
        let url = self.org_url("field-aliases")?;
        self.send(Method::POST, &url, Some(req), "Failed to create field alias")
            .await?;
        tracing::info!("aliased {}.{} as {}", req.table_name, req.field_name, req.display_name);
        Ok(())
    }

    pub async fn update_field_alias(
        &self,
        id: &str,
        req: &UpdateFieldAliasRequest,
    ) -> Result<(), ApiError> {
        let url = self.org_url(&format!("field-aliases/{id}"))?;
        self.send(Method::PATCH, &url, Some(req), "Failed to update field alias")
            .await?;
        tracing::info!("updated field alias {id}");
        Ok(())
    }

    /// Seeds default aliases for every column of `table`.
    pub async fn initialize_table_fields(&self, table: &str) -> Result<(), ApiError> {
        let url = self.org_url(&format!("tables/{table}/fields/initialize"))?;
        self.send::<()>(Method::POST, &url, None, "Failed to initialize table fields")
            .await?;
        tracing::info!("initialized field aliases for {table}");
        Ok(())
    }
}
