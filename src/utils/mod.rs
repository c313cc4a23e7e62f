//! 地址编解码与分类工具

pub mod address_classifier;
pub mod base58check;
pub mod bech32_address;

pub use address_classifier::{
    is_script_hash, output_script_type_from_address, CashaddrTranslator,
};
pub use base58check::DecodedBase58;
pub use bech32_address::{is_bech32_address, DecodedBech32};
