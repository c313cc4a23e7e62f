//! 设备传输边界
//!
//! 物理传输（USB-HID 帧、设备命令协议）由外部实现；
//! 本 crate 只构造请求参数并消费结构化响应，对传输细节一无所知。
//! 超时/取消语义由传输实现方负责，核心本身不等待任何东西

use async_trait::async_trait;
use serde_json::Value;

use crate::error::WalletError;

/// "发送结构化命令、等待结构化响应"原语
#[async_trait]
pub trait DeviceLink: Send + Sync {
    /// 发送命令并等待指定类型的响应
    ///
    /// # Arguments
    /// * `command` - 命令名 (GetAddress, GetPublicKey, SignMessage, ...)
    /// * `params` - 命令参数 (address_n, show_display, coin_name, script_type, ...)
    /// * `expected_response` - 期望的响应消息类型名
    async fn send_command(
        &self,
        command: &str,
        params: Value,
        expected_response: &str,
    ) -> Result<Value, WalletError>;
}
