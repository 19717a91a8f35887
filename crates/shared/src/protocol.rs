use serde::{Deserialize, Serialize};

use crate::domain::ContractAddress;

/// One origination submitted to the deployment service: compiled contract
/// code, the initial storage expression, and a human-readable kind label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginationRequest {
    pub code: String,
    pub storage: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginationResponse {
    pub name: String,
    pub address: ContractAddress,
}
