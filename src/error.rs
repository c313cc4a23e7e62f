//! 统一错误类型
//!
//! 所有编解码/分类函数要么返回有效结果，要么返回下列错误之一；
//! 失败前不会部分修改调用方状态

use thiserror::Error;

/// 客户端核心错误
#[derive(Debug, Error)]
pub enum WalletError {
    /// 路径缺少开头的 `m` 或包含非整数段
    #[error("not a valid path: {0}")]
    PathSyntax(String),

    /// 路径段为负数
    #[error("path cannot contain negative values: {0}")]
    NegativeIndex(i64),

    /// 路径长度不足调用方要求的最小值
    #[error("path too short: {actual} elements, expected at least {min}")]
    PathTooShort { min: usize, actual: usize },

    /// Base58 字符集/格式错误（校验和之前就已失败）
    #[error("base58 decoding failed: {0}")]
    Base58Format(String),

    /// Base58Check 校验和不匹配
    #[error("base58check checksum mismatch")]
    ChecksumMismatch,

    /// Base58Check 负载（不含校验和）超出 21..=22 字节范围
    #[error("base58check payload length {0} out of range 21..=22")]
    PayloadLength(usize),

    /// Bech32 解码失败（字符集、校验和、大小写混用、长度）
    #[error("bech32 decoding failed: {0}")]
    Bech32Format(String),

    /// 地址版本/witness program 长度与该币种的已知模式都不匹配
    #[error("unknown address type")]
    UnknownAddressType,

    /// 币种要求 cashaddr 转换但未配置转换器
    #[error("coin requires cashaddr translation but no translator is configured")]
    CashaddrTranslatorMissing,

    /// 设备传输层错误（由 DeviceLink 实现上报）
    #[error("device transport error: {0}")]
    Device(String),

    /// 设备响应缺少字段或类型不符
    #[error("unexpected device response: {0}")]
    UnexpectedResponse(String),
}

impl WalletError {
    /// 稳定的错误码字符串，供上层日志/上报使用
    pub fn code(&self) -> &'static str {
        match self {
            WalletError::PathSyntax(_) => "path_syntax",
            WalletError::NegativeIndex(_) => "negative_index",
            WalletError::PathTooShort { .. } => "path_too_short",
            WalletError::Base58Format(_) => "base58_format",
            WalletError::ChecksumMismatch => "checksum_mismatch",
            WalletError::PayloadLength(_) => "payload_length",
            WalletError::Bech32Format(_) => "bech32_format",
            WalletError::UnknownAddressType => "unknown_address_type",
            WalletError::CashaddrTranslatorMissing => "cashaddr_translator_missing",
            WalletError::Device(_) => "device",
            WalletError::UnexpectedResponse(_) => "unexpected_response",
        }
    }
}
