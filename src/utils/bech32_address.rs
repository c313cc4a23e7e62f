//! Bech32 (segwit) 地址编解码
//!
//! 解码委托给 bech32 crate 的 segwit 解码器（字符集、校验和、
//! 大小写混用、长度与 witness 版本规则），首个数据字为 witness 版本，
//! 其余 5-bit 字重组为字节序列

use bech32::{segwit, Fe32, Hrp};

use crate::error::WalletError;

/// 解码结果：人类可读前缀 + witness 版本 + witness program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBech32 {
    pub prefix: String,
    pub version: u8,
    pub program: Vec<u8>,
}

/// 解码 segwit 地址
///
/// 任何解码失败（校验和、字符集、大小写混用、长度越界、
/// witness 版本与校验变体不符）都归为 [`WalletError::Bech32Format`]
pub fn decode(address: &str) -> Result<DecodedBech32, WalletError> {
    let (hrp, version, program) =
        segwit::decode(address).map_err(|e| WalletError::Bech32Format(e.to_string()))?;

    Ok(DecodedBech32 {
        prefix: hrp.to_string().to_lowercase(),
        version: version.to_u8(),
        program,
    })
}

/// 编码 segwit 地址
///
/// 校验和变体由 witness 版本决定（v0 用 Bech32，v1+ 用 Bech32m）
pub fn encode(prefix: &str, version: u8, program: &[u8]) -> Result<String, WalletError> {
    let hrp = Hrp::parse(prefix).map_err(|e| WalletError::Bech32Format(e.to_string()))?;
    let witness_version =
        Fe32::try_from(version).map_err(|e| WalletError::Bech32Format(e.to_string()))?;
    segwit::encode(hrp, witness_version, program)
        .map_err(|e| WalletError::Bech32Format(e.to_string()))
}

/// 地址是否为 Bech32/segwit 格式
///
/// 定义为"解码成功"，而不是前缀猜测；永不 panic
pub fn is_bech32_address(address: &str) -> bool {
    decode(address).is_ok()
}
