//! Initial-storage expressions in Michelson concrete syntax.
//!
//! The grammar is dictated verbatim by each contract's storage type; a
//! malformed expression is rejected at origination time, so builders here
//! reproduce the exact nesting and literal forms the contracts expect.

use shared::{domain::Address, metadata::TokenMetadata};
use thiserror::Error;

use crate::{
    encoding::hex_encode,
    kinds::{ContractKind, StorageLayout},
};

/// Storage key telling TZIP-016 resolvers that the metadata document lives in
/// the big map entry named `content`.
pub const METADATA_CONTENT_URI: &str = "tezos-storage:content";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("contract kind `{label}` requires an administrator address")]
    MissingAdmin { label: &'static str },
    #[error("failed to serialize token metadata: {0}")]
    Metadata(#[from] serde_json::Error),
}

/// Build the initial-storage expression for `kind`.
///
/// `admin` is required for layouts carrying an admin record and ignored for
/// the rest.
pub fn build_storage(kind: &ContractKind, admin: Option<&Address>) -> Result<String, StorageError> {
    match kind.storage {
        StorageLayout::Empty => Ok("{}".to_string()),
        StorageLayout::NftAsset => {
            let admin = admin.ok_or(StorageError::MissingAdmin { label: kind.label })?;
            let (meta_uri, meta_content) = metadata_entries()?;
            Ok(format!(
                "(Pair (Pair (Pair (Pair \"{admin}\" True) None)\n            \
                 (Pair (Pair {{}} 0) (Pair {{}} {{}})))\n      \
                 {{ Elt \"\" 0x{meta_uri} ; Elt \"contents\" 0x{meta_content} }})"
            ))
        }
        StorageLayout::NftFaucet => {
            let (meta_uri, meta_content) = metadata_entries()?;
            Ok(format!(
                "(Pair (Pair (Pair {{}} 0) (Pair {{}} {{}}))\n      \
                 {{ Elt \"\" 0x{meta_uri} ; Elt \"contents\" 0x{meta_content} }})"
            ))
        }
    }
}

/// The two byte-string metadata entries every stateful kind embeds: the
/// storage-location pointer under the empty key and the serialized metadata
/// under `"contents"`.
fn metadata_entries() -> Result<(String, String), StorageError> {
    let meta_uri = hex_encode(METADATA_CONTENT_URI);
    let meta_content = hex_encode(&TokenMetadata::sample().to_pretty_json()?);
    Ok((meta_uri, meta_content))
}
