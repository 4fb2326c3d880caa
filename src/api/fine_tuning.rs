//! Fine-tuning job endpoints.

use crate::client::ChatGptClient;
use crate::error::ClientResult;
use crate::models::{
    FineTuningEventsList, FineTuningJob, FineTuningList, FineTuningRequest, FineTuningResponse,
    ListOptions,
};
use crate::transport::decode_json;

const FINE_TUNING: &str = "fine_tuning";
const JOBS: &str = "jobs";

impl ChatGptClient {
    pub async fn create_fine_tuning_job(
        &self,
        request: &FineTuningRequest,
    ) -> ClientResult<FineTuningResponse> {
        let response = self.transport.post_json(&[FINE_TUNING, JOBS], request).await?;
        decode_json(response).await
    }

    /// List jobs, newest first. `None` uses the service's default page.
    pub async fn list_fine_tuning_jobs(
        &self,
        options: Option<&ListOptions>,
    ) -> ClientResult<FineTuningList> {
        let response = self
            .transport
            .get_page(&[FINE_TUNING, JOBS], options)
            .await?;
        decode_json(response).await
    }

    pub async fn list_fine_tuning_events(
        &self,
        job_id: &str,
        options: Option<&ListOptions>,
    ) -> ClientResult<FineTuningEventsList> {
        let response = self
            .transport
            .get_page(&[FINE_TUNING, JOBS, job_id, "events"], options)
            .await?;
        decode_json(response).await
    }

    pub async fn retrieve_fine_tuning_job(&self, job_id: &str) -> ClientResult<FineTuningJob> {
        let response = self.transport.get(&[FINE_TUNING, JOBS, job_id]).await?;
        decode_json(response).await
    }

    /// Ask the service to cancel a job. The returned job reflects whatever
    /// status the service reports.
    pub async fn cancel_fine_tuning_job(&self, job_id: &str) -> ClientResult<FineTuningJob> {
        let response = self
            .transport
            .post(&[FINE_TUNING, JOBS, job_id, "cancel"])
            .await?;
        decode_json(response).await
    }
}
