//! 币种地址参数注册表
//!
//! 每个比特币系币种的地址版本常量与 SLIP-44 编号；
//! 地址分类只依赖这里的版本字节，不做任何网络请求

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// 单个币种的地址参数
///
/// 版本用 u16 存储：大多数币种是单字节版本，
/// Zcash 透明地址等使用两字节大端版本前缀
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinParams {
    /// 展示名，同时作为设备命令里的 `coin_name`
    pub name: String,
    /// 币种符号 (BTC, LTC, ...)
    pub symbol: String,
    /// SLIP-44 coin type
    pub slip44: u32,
    /// P2PKH 地址版本
    pub p2pkh_address_version: u16,
    /// P2SH 地址版本
    pub p2sh_address_version: u16,
    /// cashaddr 前缀；设置时分类前需先转换为 legacy Base58 形式
    pub cashaddr_prefix: Option<String>,
    /// 是否支持 segwit（BIP49/84 路径）
    pub segwit: bool,
}

/// 币种参数注册表
pub struct CoinRegistry {
    by_symbol: HashMap<String, usize>,
    by_slip44: HashMap<u32, usize>,
    coins: Vec<CoinParams>,
}

impl CoinRegistry {
    /// 创建预装默认币种的注册表
    pub fn new() -> Self {
        let mut registry = Self {
            by_symbol: HashMap::new(),
            by_slip44: HashMap::new(),
            coins: Vec::new(),
        };
        registry.register_default_coins();
        registry
    }

    fn register_default_coins(&mut self) {
        self.register(CoinParams {
            name: "Bitcoin".to_string(),
            symbol: "BTC".to_string(),
            slip44: 0,
            p2pkh_address_version: 0x00,
            p2sh_address_version: 0x05,
            cashaddr_prefix: None,
            segwit: true,
        });

        self.register(CoinParams {
            name: "Testnet".to_string(),
            symbol: "TEST".to_string(),
            slip44: 1,
            p2pkh_address_version: 0x6f,
            p2sh_address_version: 0xc4,
            cashaddr_prefix: None,
            segwit: true,
        });

        self.register(CoinParams {
            name: "Litecoin".to_string(),
            symbol: "LTC".to_string(),
            slip44: 2,
            p2pkh_address_version: 0x30,
            p2sh_address_version: 0x32,
            cashaddr_prefix: None,
            segwit: true,
        });

        self.register(CoinParams {
            name: "Dogecoin".to_string(),
            symbol: "DOGE".to_string(),
            slip44: 3,
            p2pkh_address_version: 0x1e,
            p2sh_address_version: 0x16,
            cashaddr_prefix: None,
            segwit: false,
        });

        // Bitcoin Cash 的 cashaddr 格式既不是 base58 也不是 bech32，
        // 分类前必须先转换成 legacy 形式
        self.register(CoinParams {
            name: "Bcash".to_string(),
            symbol: "BCH".to_string(),
            slip44: 145,
            p2pkh_address_version: 0x00,
            p2sh_address_version: 0x05,
            cashaddr_prefix: Some("bitcoincash".to_string()),
            segwit: false,
        });

        // 两字节版本前缀 (t1../t3.. 透明地址)
        self.register(CoinParams {
            name: "Zcash".to_string(),
            symbol: "ZEC".to_string(),
            slip44: 133,
            p2pkh_address_version: 0x1cb8,
            p2sh_address_version: 0x1cbd,
            cashaddr_prefix: None,
            segwit: false,
        });
    }

    /// 注册币种；符号重复时覆盖旧记录
    pub fn register(&mut self, params: CoinParams) {
        let idx = self.coins.len();
        self.by_symbol.insert(params.symbol.to_lowercase(), idx);
        self.by_slip44.insert(params.slip44, idx);
        self.coins.push(params);
    }

    /// 按符号查找（大小写不敏感）
    pub fn get_by_symbol(&self, symbol: &str) -> Option<&CoinParams> {
        self.by_symbol
            .get(&symbol.to_lowercase())
            .map(|&idx| &self.coins[idx])
    }

    /// 按 SLIP-44 编号查找
    pub fn get_by_slip44(&self, slip44: u32) -> Option<&CoinParams> {
        self.by_slip44.get(&slip44).map(|&idx| &self.coins[idx])
    }

    /// 列出全部币种
    pub fn list_all(&self) -> &[CoinParams] {
        &self.coins
    }

    /// 校验注册表完整性
    pub fn validate_configs(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for coin in &self.coins {
            if coin.name.is_empty() {
                errors.push(format!("coin {} has empty name", coin.symbol));
            }
            if coin.symbol.is_empty() {
                errors.push(format!("coin {} has empty symbol", coin.name));
            }
            if coin.p2pkh_address_version == coin.p2sh_address_version {
                errors.push(format!(
                    "coin {} has identical p2pkh/p2sh versions: {:#x}",
                    coin.name, coin.p2pkh_address_version
                ));
            }
            if let Some(prefix) = &coin.cashaddr_prefix {
                if prefix.is_empty() {
                    errors.push(format!("coin {} has empty cashaddr prefix", coin.name));
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Default for CoinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
