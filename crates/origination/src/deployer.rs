//! Deployment collaborator: JSON-over-HTTP client for the service that signs
//! and injects origination operations.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::ContractHandle,
    error::{ApiError, ApiException},
    protocol::{OriginationRequest, OriginationResponse},
};
use tracing::info;
use url::Url;

use crate::{CompiledCode, ContractDeployer};

pub struct HttpDeployer {
    http: Client,
    base_url: Url,
}

impl HttpDeployer {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    fn originations_endpoint(&self) -> Result<Url> {
        self.base_url
            .join("originations")
            .context("invalid deployment service base URL")
    }
}

#[async_trait]
impl ContractDeployer for HttpDeployer {
    async fn originate(
        &self,
        code: &CompiledCode,
        storage: &str,
        label: &str,
    ) -> Result<ContractHandle> {
        let request = OriginationRequest {
            code: code.as_str().to_string(),
            storage: storage.to_string(),
            label: label.to_string(),
        };

        let response = self
            .http
            .post(self.originations_endpoint()?)
            .json(&request)
            .send()
            .await
            .context("failed to reach deployment service")?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match response.json::<ApiError>().await {
                Ok(err) => ApiException::from(err).into(),
                Err(_) => anyhow!(
                    "deployment service rejected `{label}` origination with status {status}"
                ),
            });
        }

        let body: OriginationResponse = response
            .json()
            .await
            .context("invalid deployment service response")?;
        info!(label, address = %body.address, "deployment service accepted origination");
        Ok(ContractHandle {
            name: body.name,
            address: body.address,
        })
    }
}
