//! MCP Tool Parameter Types
//!
//! This module defines the `searchAssets` parameter schema with JsonSchema support.
//!
//! Optional fields are serialized as `null` when unset; the request sanitizer
//! strips them (and empty lists or sort options) before the call is forwarded.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the searchAssets tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchAssetsParams {
    #[schemars(description = "The address of the owner whose assets to retrieve.")]
    pub owner_address: String,

    #[schemars(description = "The type of token being searched for.")]
    pub token_type: Option<TokenType>,

    #[schemars(description = "The page of results to return.")]
    pub page: Option<i64>,

    #[schemars(description = "The authority address criteria for the asset search.")]
    pub authority_address: Option<String>,

    #[schemars(description = "The maximum number of assets to return.")]
    pub limit: Option<i64>,

    #[schemars(description = "The sorting options for the response.")]
    pub sort_by: Option<SortOptions>,

    #[schemars(description = "Whether an asset is compressed.")]
    pub compressed: Option<bool>,

    #[schemars(description = "Whether an asset is compressible.")]
    pub compressible: Option<bool>,

    #[schemars(description = "Delegate criteria for the asset search.")]
    pub delegate: Option<i64>,

    #[schemars(description = "Creator address criteria for the asset search.")]
    pub creator_address: Option<String>,

    #[schemars(description = "Whether a creator is verified.")]
    pub creator_verified: Option<bool>,

    #[schemars(description = "A grouping array (e.g. ['collection', '']).")]
    pub grouping: Option<Vec<String>>,

    #[schemars(description = "Supply criteria for the asset search.")]
    pub supply: Option<i64>,

    #[schemars(description = "Supply mint criteria for the asset search.")]
    pub supply_mint: Option<String>,

    #[schemars(description = "Whether an asset is frozen.")]
    pub frozen: Option<bool>,

    #[schemars(description = "Whether an asset is burnt.")]
    pub burnt: Option<bool>,

    #[schemars(description = "The interface of the asset.")]
    pub interface: Option<AssetInterface>,

    #[schemars(description = "Royalty target type criteria.")]
    pub royalty_target_type: Option<String>,

    #[schemars(description = "Royalty target criteria.")]
    pub royalty_target: Option<i64>,

    #[schemars(description = "Royalty amount criteria.")]
    pub royalty_amount: Option<i64>,

    #[schemars(description = "Ownership model criteria.")]
    pub owner_type: Option<i64>,

    #[schemars(description = "A cursor for paginating backward.")]
    pub before: Option<String>,

    #[schemars(description = "A cursor for paginating forward.")]
    pub after: Option<String>,
}

impl SearchAssetsParams {
    /// Creates parameters with only the owner address set
    pub fn for_owner(owner_address: impl Into<String>) -> Self {
        Self {
            owner_address: owner_address.into(),
            ..Default::default()
        }
    }
}

/// Sorting options for searchAssets results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SortOptions {
    #[schemars(description = "The criteria by which the assets will be sorted.")]
    pub sort_by: Option<AssetSortBy>,

    #[schemars(description = "The sorting direction.")]
    pub sort_direction: Option<AssetSortDirection>,
}

/// Token type filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum TokenType {
    #[serde(rename = "fungible")]
    Fungible,
    #[serde(rename = "nonFungible")]
    NonFungible,
    #[serde(rename = "regularNFT")]
    RegularNft,
    #[serde(rename = "compressedNFT")]
    CompressedNft,
    #[serde(rename = "all")]
    All,
}

/// Asset interface (token standard) filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum AssetInterface {
    #[serde(rename = "V1_NFT")]
    V1Nft,
    #[serde(rename = "V1_PRINT")]
    V1Print,
    #[serde(rename = "LEGACY_NFT")]
    LegacyNft,
    #[serde(rename = "V2_NFT")]
    V2Nft,
    #[serde(rename = "FungibleAsset")]
    FungibleAsset,
    #[serde(rename = "FungibleToken")]
    FungibleToken,
    #[serde(rename = "Custom")]
    Custom,
    #[serde(rename = "Identity")]
    Identity,
    #[serde(rename = "Executable")]
    Executable,
    #[serde(rename = "ProgrammableNFT")]
    ProgrammableNft,
}

/// Sort criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetSortBy {
    Created,
    Updated,
    RecentAction,
    None,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AssetSortDirection {
    Asc,
    Desc,
}
