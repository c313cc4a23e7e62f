//! IronKey - 多币种硬件钱包客户端核心
//!
//! BIP32/44 派生路径与地址的编解码、分类逻辑。
//! 物理传输（USB-HID）由外部 [`service::DeviceLink`] 实现提供，
//! 核心只负责构造良构的请求参数并消费结构化响应

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod service;
pub mod utils;

pub use config::ClientConfig;
pub use error::WalletError;

/// 常用类型统一导出
pub mod prelude {
    pub use crate::{
        config::{ClientConfig, LoggingConfig},
        domain::{
            coin_params::{CoinParams, CoinRegistry},
            discovery::{generate_bip_paths, AddressModel, ScanOptions},
            path::{
                from_hardened, parse_path, serialize_path, to_hardened, validate_path, PathInput,
                HD_HARDENED,
            },
            script_type::{
                input_script_type, output_script_type_from_path, InputScriptType, OutputScriptType,
            },
        },
        error::WalletError,
        service::{CoinCommands, DeviceLink},
        utils::{
            address_classifier::{
                is_script_hash, output_script_type_from_address, CashaddrTranslator,
            },
            base58check,
            bech32_address::{self, is_bech32_address},
        },
    };
}
