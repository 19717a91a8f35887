//! Contract origination pipeline: compile a named source module, build the
//! kind-specific initial-storage expression, and submit the deployment to the
//! chain client, returning a handle to the originated contract.
//!
//! The compiler and the deployment client are collaborator seams; every
//! failure they raise propagates to the caller unchanged, with no retries and
//! no partial state committed here.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::domain::{Address, ContractHandle};
use tracing::info;

pub mod encoding;
pub mod kinds;
pub mod ligo;
pub mod micheline;

mod deployer;

pub use deployer::HttpDeployer;
pub use encoding::hex_encode;
pub use kinds::{ContractKind, StorageLayout};
pub use ligo::{LigoCompiler, LigoEnv};
pub use micheline::{build_storage, StorageError, METADATA_CONTENT_URI};

/// Compiled Michelson contract code, ready for origination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledCode(pub String);

impl CompiledCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[async_trait]
pub trait ContractCompiler: Send + Sync {
    async fn compile(
        &self,
        env: &LigoEnv,
        source_module: &str,
        entry_point: &str,
        artifact: &str,
    ) -> Result<CompiledCode>;
}

pub struct MissingCompiler;

#[async_trait]
impl ContractCompiler for MissingCompiler {
    async fn compile(
        &self,
        _env: &LigoEnv,
        source_module: &str,
        _entry_point: &str,
        _artifact: &str,
    ) -> Result<CompiledCode> {
        Err(anyhow!("contract compiler unavailable for {source_module}"))
    }
}

#[async_trait]
pub trait ContractDeployer: Send + Sync {
    async fn originate(
        &self,
        code: &CompiledCode,
        storage: &str,
        label: &str,
    ) -> Result<ContractHandle>;
}

pub struct MissingDeployer;

#[async_trait]
impl ContractDeployer for MissingDeployer {
    async fn originate(
        &self,
        _code: &CompiledCode,
        _storage: &str,
        label: &str,
    ) -> Result<ContractHandle> {
        Err(anyhow!("contract deployer unavailable for `{label}`"))
    }
}

/// Inputs that vary per origination rather than per kind.
#[derive(Debug, Clone, Default)]
pub struct OriginateParams {
    pub admin: Option<Address>,
}

/// Run the full pipeline for one contract kind: compile, build storage,
/// deploy.
pub async fn originate(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
    kind: &ContractKind,
    params: &OriginateParams,
) -> Result<ContractHandle> {
    info!(
        kind = kind.label,
        source = kind.source_module,
        "compiling contract"
    );
    let code = compiler
        .compile(env, kind.source_module, kind.entry_point, kind.artifact)
        .await?;

    let storage = micheline::build_storage(kind, params.admin.as_ref())?;

    info!(kind = kind.label, "originating contract");
    let handle = deployer.originate(&code, &storage, kind.label).await?;
    info!(
        kind = kind.label,
        address = %handle.address,
        "contract originated"
    );
    Ok(handle)
}

pub async fn originate_nft_asset(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
    admin: Address,
) -> Result<ContractHandle> {
    originate(
        compiler,
        deployer,
        env,
        &kinds::NFT_ASSET,
        &OriginateParams { admin: Some(admin) },
    )
    .await
}

pub async fn originate_nft_factory(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
) -> Result<ContractHandle> {
    originate(
        compiler,
        deployer,
        env,
        &kinds::NFT_FACTORY,
        &OriginateParams::default(),
    )
    .await
}

pub async fn originate_nft_faucet(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
) -> Result<ContractHandle> {
    originate(
        compiler,
        deployer,
        env,
        &kinds::NFT_FAUCET,
        &OriginateParams::default(),
    )
    .await
}

pub async fn originate_fixed_price_sale(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
) -> Result<ContractHandle> {
    originate(
        compiler,
        deployer,
        env,
        &kinds::FIXED_PRICE_SALE,
        &OriginateParams::default(),
    )
    .await
}

pub async fn originate_fixed_price_tez_sale(
    compiler: &dyn ContractCompiler,
    deployer: &dyn ContractDeployer,
    env: &LigoEnv,
) -> Result<ContractHandle> {
    originate(
        compiler,
        deployer,
        env,
        &kinds::FIXED_PRICE_TEZ_SALE,
        &OriginateParams::default(),
    )
    .await
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
