//! 设备命令流程
//!
//! 传输本体在外部；这里只有"构造参数 -> 发送 -> 解析响应"的消费侧

pub mod coin_commands;
pub mod device_link;

pub use coin_commands::{CoinCommands, HdPubNode, MessageSignatureModel, PublicKeyModel};
pub use device_link::DeviceLink;
