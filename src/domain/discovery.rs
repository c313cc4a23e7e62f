//! 地址发现的路径批量生成
//!
//! 为账户扫描生成一段连续的兄弟路径：purpose/coin/account/change 固定，
//! 只有地址索引递增。地址字段留空，由设备命令流程填充

use serde::{Deserialize, Serialize};

use super::path::{serialize_path, to_hardened};

/// 路径 + 地址模型
///
/// `address` 在生成时为空字符串，设备返回后填充
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressModel {
    pub path: Vec<u32>,
    pub serialized_path: String,
    pub address: String,
}

/// 扫描选项
///
/// 默认值：非 segwit、收款链（change=0）、从索引 0 开始。
/// purpose 的优先级为 native segwit (84') > segwit (49') > legacy (44')
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// BIP49 路径（P2SH-wrapped segwit），默认 false
    pub is_segwit: bool,
    /// BIP84 路径（native segwit），优先于 `is_segwit`，默认 false
    pub is_native_segwit: bool,
    /// 找零链（change=1），默认 false
    pub is_change: bool,
    /// 起始地址索引，默认 0
    pub start_index: u32,
}

/// 生成 `count` 条兄弟路径
///
/// 输出确定且完全物化：相同输入总是产生相同序列。
/// `serialized_path` 为规范线格式（无开头 `m`）。
pub fn generate_bip_paths(
    slip44: u32,
    account: u32,
    count: u32,
    opts: &ScanOptions,
) -> Vec<AddressModel> {
    let purpose: u32 = if opts.is_native_segwit {
        84
    } else if opts.is_segwit {
        49
    } else {
        44
    };
    let change: u32 = if opts.is_change { 1 } else { 0 };

    let mut models = Vec::with_capacity(count as usize);
    for i in 0..count {
        // m / purpose' / coin_type' / account' / change / address_index
        let path = vec![
            to_hardened(purpose),
            to_hardened(slip44),
            to_hardened(account),
            change,
            opts.start_index + i,
        ];
        models.push(AddressModel {
            serialized_path: serialize_path(&path),
            path,
            address: String::new(),
        });
    }
    models
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_with_start_index() {
        let models = generate_bip_paths(
            0,
            0,
            3,
            &ScanOptions {
                start_index: 5,
                ..ScanOptions::default()
            },
        );

        assert_eq!(models.len(), 3);
        assert_eq!(models[0].serialized_path, "44'/0'/0'/0/5");
        assert_eq!(models[1].serialized_path, "44'/0'/0'/0/6");
        assert_eq!(models[2].serialized_path, "44'/0'/0'/0/7");
        for (i, model) in models.iter().enumerate() {
            assert_eq!(model.path[4], 5 + i as u32);
            assert!(model.address.is_empty());
        }
    }

    #[test]
    fn test_purpose_priority() {
        let legacy = generate_bip_paths(0, 0, 1, &ScanOptions::default());
        assert_eq!(legacy[0].path[0], to_hardened(44));

        let segwit = generate_bip_paths(
            0,
            0,
            1,
            &ScanOptions {
                is_segwit: true,
                ..ScanOptions::default()
            },
        );
        assert_eq!(segwit[0].path[0], to_hardened(49));

        // native segwit 优先于 segwit
        let native = generate_bip_paths(
            0,
            0,
            1,
            &ScanOptions {
                is_segwit: true,
                is_native_segwit: true,
                ..ScanOptions::default()
            },
        );
        assert_eq!(native[0].path[0], to_hardened(84));
        assert_eq!(native[0].serialized_path, "84'/0'/0'/0/0");
    }

    #[test]
    fn test_change_chain() {
        let models = generate_bip_paths(
            60,
            2,
            1,
            &ScanOptions {
                is_change: true,
                ..ScanOptions::default()
            },
        );
        assert_eq!(models[0].serialized_path, "44'/60'/2'/1/0");
        assert_eq!(models[0].path[3], 1);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let opts = ScanOptions {
            is_native_segwit: true,
            start_index: 100,
            ..ScanOptions::default()
        };
        assert_eq!(
            generate_bip_paths(2, 1, 10, &opts),
            generate_bip_paths(2, 1, 10, &opts)
        );
    }

    #[test]
    fn test_zero_count_yields_empty() {
        assert!(generate_bip_paths(0, 0, 0, &ScanOptions::default()).is_empty());
    }
}
