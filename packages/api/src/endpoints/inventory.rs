use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{InventoryLine, InventoryListParams, ManualCostRequest};

impl ApiClient {
    pub async fn list_inventory(
        &self,
        params: &InventoryListParams,
    ) -> Result<Vec<InventoryLine>, ApiError> {
        let url = self.org_url("inventory")?;
        self.get_list(&url, &params.to_query(), "Failed to fetch inventory")
            .await
    }

    /// Overrides the weighted cost of a SKU's stock. The server flags the
    /// line as manually costed.
    pub async fn set_manual_cost(&self, sku_id: &str, weighted_cost: f64) -> Result<(), ApiError> {
        let url = self.org_url(&format!("inventory/sku/{sku_id}/cost"))?;
        let body = ManualCostRequest { weighted_cost };
        self.send(Method::PATCH, &url, Some(&body), "Failed to update manual cost")
            .await?;
        tracing::info!("manual cost of SKU {sku_id} set to {weighted_cost}");
        Ok(())
    }
}
