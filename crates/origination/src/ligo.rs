//! LIGO compiler collaborator: shells out to the `ligo` binary and loads the
//! compiled Michelson artifact.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use tokio::{fs, process::Command};
use tracing::{debug, info};

use crate::{CompiledCode, ContractCompiler};

/// Where contract sources live and where compiled artifacts are written.
#[derive(Debug, Clone)]
pub struct LigoEnv {
    pub src_dir: PathBuf,
    pub out_dir: PathBuf,
}

impl LigoEnv {
    pub fn new(src_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            src_dir: src_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Conventional layout relative to the working directory.
    pub fn default_env() -> Self {
        Self::new("ligo/src", "ligo/out")
    }

    pub fn source_path(&self, source_module: &str) -> PathBuf {
        self.src_dir.join(source_module)
    }

    pub fn artifact_path(&self, artifact: &str) -> PathBuf {
        self.out_dir.join(artifact)
    }
}

pub struct LigoCompiler {
    ligo_cmd: String,
}

impl LigoCompiler {
    pub fn new(ligo_cmd: impl Into<String>) -> Self {
        Self {
            ligo_cmd: ligo_cmd.into(),
        }
    }
}

impl Default for LigoCompiler {
    fn default() -> Self {
        Self::new("ligo")
    }
}

#[async_trait]
impl ContractCompiler for LigoCompiler {
    async fn compile(
        &self,
        env: &LigoEnv,
        source_module: &str,
        entry_point: &str,
        artifact: &str,
    ) -> Result<CompiledCode> {
        let source = env.source_path(source_module);
        let out = env.artifact_path(artifact);

        fs::create_dir_all(&env.out_dir).await.with_context(|| {
            format!("failed to create artifact dir {}", env.out_dir.display())
        })?;

        debug!(
            source = %source.display(),
            entry_point,
            out = %out.display(),
            "invoking ligo"
        );
        let output = Command::new(&self.ligo_cmd)
            .arg("compile")
            .arg("contract")
            .arg(&source)
            .arg("-e")
            .arg(entry_point)
            .arg("-o")
            .arg(&out)
            .output()
            .await
            .with_context(|| format!("failed to run `{}`", self.ligo_cmd))?;

        if !output.status.success() {
            bail!(
                "ligo compilation of {source_module} failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let code = fs::read_to_string(&out)
            .await
            .with_context(|| format!("failed to read compiled artifact {}", out.display()))?;
        info!(source = source_module, artifact, "compiled contract");
        Ok(CompiledCode(code))
    }
}
