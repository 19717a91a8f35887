//! The contract kinds this toolkit knows how to originate.

/// Which initial-storage grammar a contract kind requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageLayout {
    /// Stateless contracts start from an empty record.
    Empty,
    /// Admin record (address, paused flag, pending admin) plus metadata.
    NftAsset,
    /// Ledger record plus metadata, no admin.
    NftFaucet,
}

/// Descriptor tying a contract kind to its source module, entry point,
/// compiled-artifact name, deployment label, and storage grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractKind {
    pub source_module: &'static str,
    pub entry_point: &'static str,
    pub artifact: &'static str,
    pub label: &'static str,
    pub storage: StorageLayout,
}

pub const NFT_ASSET: ContractKind = ContractKind {
    source_module: "fa2_multi_nft_asset.mligo",
    entry_point: "nft_asset_main",
    artifact: "fa2_multi_nft_asset.tz",
    label: "nft",
    storage: StorageLayout::NftAsset,
};

pub const NFT_FACTORY: ContractKind = ContractKind {
    source_module: "fa2_nft_factory.mligo",
    entry_point: "factory_main",
    artifact: "fa2_nft_factory.tz",
    label: "nftFactory",
    storage: StorageLayout::Empty,
};

pub const NFT_FAUCET: ContractKind = ContractKind {
    source_module: "fa2_multi_nft_faucet.mligo",
    entry_point: "nft_faucet_main",
    artifact: "fa2_multi_nft_faucet.tz",
    label: "nftFaucet",
    storage: StorageLayout::NftFaucet,
};

pub const FIXED_PRICE_SALE: ContractKind = ContractKind {
    source_module: "fixed_price_sale_market.mligo",
    entry_point: "fixed_price_sale_main",
    artifact: "fixed_price_sale_market.tz",
    label: "fixed-price-sale-market",
    storage: StorageLayout::Empty,
};

pub const FIXED_PRICE_TEZ_SALE: ContractKind = ContractKind {
    source_module: "fixed_price_sale_market_tez.mligo",
    entry_point: "fixed_price_sale_tez_main",
    artifact: "fixed_price_sale_market_tez.tz",
    label: "fixed-price-sale-market-tez",
    storage: StorageLayout::Empty,
};

pub const ALL_KINDS: [&ContractKind; 5] = [
    &NFT_ASSET,
    &NFT_FACTORY,
    &NFT_FAUCET,
    &FIXED_PRICE_SALE,
    &FIXED_PRICE_TEZ_SALE,
];
