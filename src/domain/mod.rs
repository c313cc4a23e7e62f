//! Domain 模块
//!
//! 路径编解码、脚本类型、币种参数与地址发现的核心逻辑；
//! 全部是纯函数，不做 I/O

pub mod coin_params;
pub mod discovery;
pub mod path;
pub mod script_type;

// 重新导出常用类型
pub use coin_params::{CoinParams, CoinRegistry};
pub use discovery::{generate_bip_paths, AddressModel, ScanOptions};
pub use path::{
    from_hardened, is_native_segwit_path, is_segwit_path, parse_path, serialize_path, to_hardened,
    validate_path, PathInput, HD_HARDENED,
};
pub use script_type::{
    input_script_type, output_script_type_from_path, InputScriptType, OutputScriptType,
};
