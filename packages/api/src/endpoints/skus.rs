use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CreateSkuRequest, Sku, SkuList, SkuListParams, SkuStatusRequest, UpdateSkuRequest,
};

impl ApiClient {
    pub async fn list_skus(&self, params: &SkuListParams) -> Result<Vec<Sku>, ApiError> {
        let url = self.org_url("skus")?;
        let list: SkuList = self
            .get(&url, &params.to_query(), "Failed to fetch SKUs")
            .await?;
        Ok(list.skus)
    }

    pub async fn create_sku(&self, req: &CreateSkuRequest) -> Result<(), ApiError> {
        let url = self.org_url("skus")?;
        self.send(Method::POST, &url, Some(req), "Failed to create SKU")
            .await?;
        tracing::info!("created SKU {}", req.sku_code);
        Ok(())
    }

    pub async fn update_sku(&self, id: &str, req: &UpdateSkuRequest) -> Result<(), ApiError> {
        let url = self.org_url(&format!("skus/{id}"))?;
        self.send(Method::PATCH, &url, Some(req), "Failed to update SKU")
            .await?;
        tracing::info!("updated SKU {id}");
        Ok(())
    }

    /// Activates or deactivates a SKU. SKUs are never deleted.
    pub async fn set_sku_status(&self, id: &str, is_active: bool) -> Result<(), ApiError> {
        let url = self.org_url(&format!("skus/{id}/status"))?;
        let body = SkuStatusRequest { is_active };
        self.send(Method::PATCH, &url, Some(&body), "Failed to update SKU status")
            .await?;
        tracing::info!("SKU {id} active={is_active}");
        Ok(())
    }
}
