//! 脚本类型映射
//!
//! 输入/输出脚本类型由派生路径的 purpose 字段（44/48/49/84）决定；
//! 输出侧另有一条从目的地址推断的通道，见 `utils::address_classifier`

use serde::{Deserialize, Serialize};

use super::path::from_hardened;

/// 输入脚本类型（花费侧），序列化为设备线格式名称
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputScriptType {
    #[serde(rename = "SPENDADDRESS")]
    SpendAddress,
    #[serde(rename = "SPENDMULTISIG")]
    SpendMultisig,
    #[serde(rename = "SPENDP2SHWITNESS")]
    SpendP2shWitness,
    #[serde(rename = "SPENDWITNESS")]
    SpendWitness,
}

impl InputScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputScriptType::SpendAddress => "SPENDADDRESS",
            InputScriptType::SpendMultisig => "SPENDMULTISIG",
            InputScriptType::SpendP2shWitness => "SPENDP2SHWITNESS",
            InputScriptType::SpendWitness => "SPENDWITNESS",
        }
    }
}

/// 输出脚本类型（收款侧）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputScriptType {
    #[serde(rename = "PAYTOADDRESS")]
    PayToAddress,
    #[serde(rename = "PAYTOSCRIPTHASH")]
    PayToScriptHash,
    #[serde(rename = "PAYTOMULTISIG")]
    PayToMultisig,
    #[serde(rename = "PAYTOP2SHWITNESS")]
    PayToP2shWitness,
    #[serde(rename = "PAYTOWITNESS")]
    PayToWitness,
}

impl OutputScriptType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputScriptType::PayToAddress => "PAYTOADDRESS",
            OutputScriptType::PayToScriptHash => "PAYTOSCRIPTHASH",
            OutputScriptType::PayToMultisig => "PAYTOMULTISIG",
            OutputScriptType::PayToP2shWitness => "PAYTOP2SHWITNESS",
            OutputScriptType::PayToWitness => "PAYTOWITNESS",
        }
    }
}

/// 由路径 purpose 决定输入脚本类型
///
/// 对所有输入都有定义：空路径或未知 purpose 回退到 legacy
pub fn input_script_type(path: &[u32]) -> InputScriptType {
    match path.first().map(|&p| from_hardened(p)) {
        Some(48) => InputScriptType::SpendMultisig,
        Some(49) => InputScriptType::SpendP2shWitness,
        Some(84) => InputScriptType::SpendWitness,
        _ => InputScriptType::SpendAddress,
    }
}

/// 由路径 purpose 决定输出脚本类型（映射关系同输入侧）
pub fn output_script_type_from_path(path: &[u32]) -> OutputScriptType {
    match path.first().map(|&p| from_hardened(p)) {
        Some(48) => OutputScriptType::PayToMultisig,
        Some(49) => OutputScriptType::PayToP2shWitness,
        Some(84) => OutputScriptType::PayToWitness,
        _ => OutputScriptType::PayToAddress,
    }
}
