use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{
    CreateTransactionRequest, Transaction, TransactionListParams, TransactionSummary,
};

impl ApiClient {
    pub async fn list_transactions(
        &self,
        params: &TransactionListParams,
    ) -> Result<Vec<Transaction>, ApiError> {
        let url = self.org_url("transactions")?;
        self.get_list(&url, &params.to_query(), "Failed to fetch transactions")
            .await
    }

    pub async fn create_transaction(&self, req: &CreateTransactionRequest) -> Result<(), ApiError> {
        let url = self.org_url("transactions")?;
        self.send(Method::POST, &url, Some(req), "Failed to create transaction")
            .await?;
        tracing::info!(
            "recorded {} {} of SKU {}",
            req.transaction_type,
            req.quantity,
            req.sku_id
        );
        Ok(())
    }

    /// Per-direction totals over the same SKU, category and date filters as the list.
    pub async fn transaction_summary(
        &self,
        params: &TransactionListParams,
    ) -> Result<Vec<TransactionSummary>, ApiError> {
        let url = self.org_url("transactions/summary")?;
        self.get_list(
            &url,
            &params.to_summary_query(),
            "Failed to fetch transaction summary",
        )
        .await
    }
}
