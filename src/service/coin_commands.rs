//! 面向设备的币种命令流程
//!
//! 把规范化路径、脚本类型、币种参数组装成设备命令，
//! 并把设备响应映射回模型。批量请求等待全部子请求完成，
//! 任何一个失败整体即失败

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::ClientConfig;
use crate::domain::coin_params::CoinParams;
use crate::domain::discovery::{generate_bip_paths, AddressModel, ScanOptions};
use crate::domain::path::{serialize_path, validate_path, PathInput};
use crate::domain::script_type::input_script_type;
use crate::error::WalletError;

use super::device_link::DeviceLink;

/// 设备返回的 HD 公钥节点
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HdPubNode {
    pub depth: u32,
    pub fingerprint: u32,
    pub child_num: u32,
    pub chain_code: String,
    pub public_key: String,
}

/// GetPublicKey 响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKeyModel {
    pub node: HdPubNode,
    pub xpub: String,
}

/// SignMessage 响应，签名统一为 hex 字符串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSignatureModel {
    pub address: String,
    pub signature: String,
}

/// 币种命令执行器
pub struct CoinCommands<L: DeviceLink> {
    link: L,
    config: ClientConfig,
}

impl<L: DeviceLink> CoinCommands<L> {
    pub fn new(link: L, config: ClientConfig) -> Self {
        Self { link, config }
    }

    /// 获取单个地址
    ///
    /// `show_on_device` 为 None 时使用配置默认值；
    /// `script_type` 由路径 purpose 决定
    pub async fn get_address(
        &self,
        coin: &CoinParams,
        path: PathInput<'_>,
        show_on_device: Option<bool>,
    ) -> Result<AddressModel, WalletError> {
        let address_n = validate_path(path, 0, false)?;
        let show_display = show_on_device.unwrap_or(self.config.show_on_device);
        let script_type = input_script_type(&address_n);

        debug!(
            coin = %coin.name,
            path = %serialize_path(&address_n),
            script_type = script_type.as_str(),
            "GetAddress"
        );

        let response = self
            .link
            .send_command(
                "GetAddress",
                json!({
                    "address_n": address_n,
                    "show_display": show_display,
                    "coin_name": coin.name,
                    "script_type": script_type,
                }),
                "Address",
            )
            .await?;

        let address = required_str(&response, "address")?.to_string();
        Ok(AddressModel {
            serialized_path: serialize_path(&address_n),
            path: address_n,
            address,
        })
    }

    /// 批量获取地址
    ///
    /// 等待所有子请求完成并传播第一个失败；扫描场景不逐个上屏
    pub async fn get_addresses(
        &self,
        coin: &CoinParams,
        paths: &[Vec<u32>],
    ) -> Result<Vec<AddressModel>, WalletError> {
        try_join_all(
            paths
                .iter()
                .map(|p| self.get_address(coin, PathInput::Indices(p.as_slice()), Some(false))),
        )
        .await
    }

    /// 地址发现扫描
    ///
    /// 生成兄弟路径并用设备返回的地址填充每个模型
    pub async fn scan_addresses(
        &self,
        coin: &CoinParams,
        account: u32,
        count: u32,
        opts: &ScanOptions,
    ) -> Result<Vec<AddressModel>, WalletError> {
        let mut models = generate_bip_paths(coin.slip44, account, count, opts);
        let paths: Vec<Vec<u32>> = models.iter().map(|m| m.path.clone()).collect();

        let fetched = self.get_addresses(coin, &paths).await?;
        for (model, fetched) in models.iter_mut().zip(fetched) {
            model.address = fetched.address;
        }
        Ok(models)
    }

    /// 获取 HD 公钥
    pub async fn get_public_key(
        &self,
        path: PathInput<'_>,
        show_on_device: Option<bool>,
    ) -> Result<PublicKeyModel, WalletError> {
        let address_n = validate_path(path, 0, false)?;
        let show_display = show_on_device.unwrap_or(self.config.show_on_device);

        let response = self
            .link
            .send_command(
                "GetPublicKey",
                json!({
                    "address_n": address_n,
                    "show_display": show_display,
                }),
                "PublicKey",
            )
            .await?;

        serde_json::from_value(response)
            .map_err(|e| WalletError::UnexpectedResponse(e.to_string()))
    }

    /// 消息签名
    ///
    /// 设备可能以字节数组或 hex 字符串返回签名，统一转成 hex
    pub async fn sign_message(
        &self,
        coin: &CoinParams,
        path: PathInput<'_>,
        message: &[u8],
    ) -> Result<MessageSignatureModel, WalletError> {
        let address_n = validate_path(path, 0, false)?;
        let script_type = input_script_type(&address_n);

        let response = self
            .link
            .send_command(
                "SignMessage",
                json!({
                    "address_n": address_n,
                    "message": hex::encode(message),
                    "coin_name": coin.name,
                    "script_type": script_type,
                }),
                "MessageSignature",
            )
            .await?;

        let address = required_str(&response, "address")?.to_string();
        let signature = match response.get("signature") {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Array(items)) => {
                let bytes = items
                    .iter()
                    .map(|v| v.as_u64().and_then(|b| u8::try_from(b).ok()))
                    .collect::<Option<Vec<u8>>>()
                    .ok_or_else(|| {
                        WalletError::UnexpectedResponse(
                            "MessageSignature.signature contains non-byte values".to_string(),
                        )
                    })?;
                hex::encode(bytes)
            }
            _ => {
                return Err(WalletError::UnexpectedResponse(
                    "MessageSignature.signature missing".to_string(),
                ))
            }
        };

        Ok(MessageSignatureModel { address, signature })
    }

    /// 在设备上校验消息签名；设备返回 Success 即通过
    pub async fn verify_message(
        &self,
        coin: &CoinParams,
        address: &str,
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), WalletError> {
        self.link
            .send_command(
                "VerifyMessage",
                json!({
                    "address": address,
                    "signature": hex::encode(signature),
                    "message": hex::encode(message),
                    "coin_name": coin.name,
                }),
                "Success",
            )
            .await?;
        Ok(())
    }
}

fn required_str<'a>(response: &'a Value, field: &str) -> Result<&'a str, WalletError> {
    response
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| WalletError::UnexpectedResponse(format!("{field} missing")))
}
