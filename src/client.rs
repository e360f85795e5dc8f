use crate::core::{ContactResponse, ContactSubmission};
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::validate_url;
use reqwest::Client;
use std::time::Duration;

/// Posts contact submissions to a relay endpoint, the way the site's form does.
#[derive(Debug, Clone)]
pub struct ContactClient {
    client: Client,
    endpoint: String,
}

impl ContactClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        Self::with_timeout(endpoint, Duration::from_secs(30))
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let endpoint = endpoint.into();
        validate_url("endpoint", &endpoint)?;

        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 200 與 500 都會帶 `{ success }`，兩者都視為正常回應
    pub async fn submit(&self, submission: &ContactSubmission) -> Result<ContactResponse> {
        tracing::debug!("Submitting contact form to: {}", self.endpoint);
        let response = self.client.post(&self.endpoint).json(submission).send().await?;

        let status = response.status();
        tracing::debug!("Relay response status: {}", status);

        let body = response.text().await?;
        serde_json::from_str::<ContactResponse>(&body).map_err(|e| {
            tracing::warn!("Unexpected relay response ({}): {}", status, body);
            RelayError::SerializationError(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_endpoint() {
        assert!(ContactClient::new("localhost:3000/api/contact").is_err());
        assert!(ContactClient::new("").is_err());

        let client = ContactClient::new("http://localhost:3000/api/contact").unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/api/contact");
    }
}
