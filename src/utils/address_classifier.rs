//! 地址分类
//!
//! 把外部地址串映射到脚本类型：native segwit -> witness，
//! 脚本哈希 -> P2SH，其余 -> legacy。构建签名请求前的标准判定

use crate::domain::coin_params::CoinParams;
use crate::domain::script_type::OutputScriptType;
use crate::error::WalletError;

use super::base58check;
use super::bech32_address;

/// cashaddr 等替代校验格式到 legacy Base58 形式的转换边界
///
/// 转换本身由外部库实现；本模块只在币种带 `cashaddr_prefix` 时调用它
pub trait CashaddrTranslator: Send + Sync {
    fn to_legacy(&self, address: &str) -> Result<String, WalletError>;
}

/// 地址是否为脚本哈希（P2SH / P2WSH）
///
/// Bech32 地址按 witness program 长度判定：32 字节是脚本哈希，
/// 20 字节是公钥哈希，其余长度是未知类型。
/// 其他地址按 Base58Check 版本字节与币种参数比对。
pub fn is_script_hash(
    address: &str,
    coin: &CoinParams,
    translator: Option<&dyn CashaddrTranslator>,
) -> Result<bool, WalletError> {
    if let Ok(decoded) = bech32_address::decode(address) {
        return match decoded.program.len() {
            20 => Ok(false),
            32 => Ok(true),
            _ => Err(WalletError::UnknownAddressType),
        };
    }

    // cashaddr 格式既不是 base58 也不是 bech32，直接解码必然失败，
    // 所以这里先转换成 legacy 形式
    let legacy;
    let address = if coin.cashaddr_prefix.is_some() {
        let translator = translator.ok_or(WalletError::CashaddrTranslatorMissing)?;
        legacy = translator.to_legacy(address)?;
        legacy.as_str()
    } else {
        address
    };

    let decoded = base58check::decode(address)?;
    if decoded.version == coin.p2pkh_address_version {
        Ok(false)
    } else if decoded.version == coin.p2sh_address_version {
        Ok(true)
    } else {
        Err(WalletError::UnknownAddressType)
    }
}

/// 由目的地址推断输出脚本类型
///
/// Native segwit (Bech32) 地址输出 PAYTOWITNESS，
/// 脚本哈希输出 PAYTOSCRIPTHASH，其余输出 PAYTOADDRESS
pub fn output_script_type_from_address(
    address: &str,
    coin: &CoinParams,
    translator: Option<&dyn CashaddrTranslator>,
) -> Result<OutputScriptType, WalletError> {
    if bech32_address::is_bech32_address(address) {
        return Ok(OutputScriptType::PayToWitness);
    }

    if is_script_hash(address, coin, translator)? {
        Ok(OutputScriptType::PayToScriptHash)
    } else {
        Ok(OutputScriptType::PayToAddress)
    }
}
