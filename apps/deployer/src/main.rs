use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use origination::{
    build_storage, kinds, ContractCompiler, ContractKind, HttpDeployer, LigoCompiler, LigoEnv,
    OriginateParams,
};
use shared::domain::Address;

mod config;

#[derive(Parser, Debug)]
#[command(name = "deployer", about = "Compile and originate the marketplace contracts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    NftAsset,
    NftFactory,
    NftFaucet,
    FixedPriceSale,
    FixedPriceTezSale,
}

impl KindArg {
    fn descriptor(self) -> &'static ContractKind {
        match self {
            KindArg::NftAsset => &kinds::NFT_ASSET,
            KindArg::NftFactory => &kinds::NFT_FACTORY,
            KindArg::NftFaucet => &kinds::NFT_FAUCET,
            KindArg::FixedPriceSale => &kinds::FIXED_PRICE_SALE,
            KindArg::FixedPriceTezSale => &kinds::FIXED_PRICE_TEZ_SALE,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a contract kind and report where the artifact landed.
    Compile {
        #[arg(long, value_enum)]
        kind: KindArg,
    },
    /// Print the initial-storage expression for a contract kind.
    Storage {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        admin: Option<String>,
    },
    /// Compile and originate a contract kind through the deployment service.
    Originate {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        admin: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    let settings = config::load_settings();
    let env = LigoEnv::new(&settings.src_dir, &settings.out_dir);
    let compiler = LigoCompiler::new(settings.ligo_cmd.as_str());

    match cli.command {
        Command::Compile { kind } => {
            let kind = kind.descriptor();
            compiler
                .compile(&env, kind.source_module, kind.entry_point, kind.artifact)
                .await?;
            println!(
                "compiled {} -> {}",
                kind.source_module,
                env.artifact_path(kind.artifact).display()
            );
        }
        Command::Storage { kind, admin } => {
            let kind = kind.descriptor();
            let admin = admin.map(Address::new);
            println!("{}", build_storage(kind, admin.as_ref())?);
        }
        Command::Originate { kind, admin } => {
            let kind = kind.descriptor();
            let deployer_url = settings.deployer_url.ok_or_else(|| {
                anyhow!("no deployment service configured; set deployer_url in deployer.toml or DEPLOYER_URL")
            })?;
            let deployer = HttpDeployer::new(
                deployer_url
                    .parse()
                    .context("invalid deployment service URL")?,
            );
            let params = OriginateParams {
                admin: admin.map(Address::new),
            };
            let handle = origination::originate(&compiler, &deployer, &env, kind, &params).await?;
            println!("originated {} at {}", handle.name, handle.address);
        }
    }

    Ok(())
}
