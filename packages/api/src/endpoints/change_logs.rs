use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ActivitySummary, ChangeLog, ChangeLogParams};
use crate::params::QueryParams;

impl ApiClient {
    pub async fn list_change_logs(&self, params: &ChangeLogParams) -> Result<Vec<ChangeLog>, ApiError> {
        let url = self.org_url("change-logs")?;
        self.get_list(&url, &params.to_query(), "Failed to fetch change logs")
            .await
    }

    pub async fn activity_summary(&self, last_days: u32) -> Result<ActivitySummary, ApiError> {
        let url = self.org_url("activity-summary")?;
        let query = QueryParams::new().positive("last_days", last_days);
        let summary: Option<ActivitySummary> = self
            .get(&url, &query, "Failed to fetch activity summary")
            .await?;
        Ok(summary.unwrap_or_default())
    }
}
