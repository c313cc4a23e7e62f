//! BIP32/44 派生路径编解码
//!
//! 文本格式: `m/44'/0'/0'/0/0`，`'` 表示硬化索引；
//! 序列化（线格式）不带开头的 `m`，两者互为逆变换

use crate::error::WalletError;

/// 硬化索引标志位
pub const HD_HARDENED: u32 = 0x8000_0000;

/// 给索引打上硬化标志
#[inline]
pub const fn to_hardened(n: u32) -> u32 {
    n | HD_HARDENED
}

/// 去掉硬化标志
#[inline]
pub const fn from_hardened(n: u32) -> u32 {
    n & !HD_HARDENED
}

/// 路径输入：文本或已解析的索引序列
///
/// 两种调用形态都支持，通过显式变体区分而不是运行时类型判断
#[derive(Debug, Clone, Copy)]
pub enum PathInput<'a> {
    Text(&'a str),
    Indices(&'a [u32]),
}

impl<'a> From<&'a str> for PathInput<'a> {
    fn from(text: &'a str) -> Self {
        PathInput::Text(text)
    }
}

impl<'a> From<&'a [u32]> for PathInput<'a> {
    fn from(indices: &'a [u32]) -> Self {
        PathInput::Indices(indices)
    }
}

impl<'a> From<&'a Vec<u32>> for PathInput<'a> {
    fn from(indices: &'a Vec<u32>) -> Self {
        PathInput::Indices(indices.as_slice())
    }
}

/// 解析路径文本为索引序列
///
/// 首段必须是 `m`（大小写不敏感），空段和 `m` 段被跳过。
/// 非硬化值必须在 31 位以内，硬化标志通过最高位编码。
///
/// # Errors
/// - 首段不是 `m` 或段不是整数: [`WalletError::PathSyntax`]
/// - 段为负数: [`WalletError::NegativeIndex`]
pub fn parse_path(text: &str) -> Result<Vec<u32>, WalletError> {
    let lowered = text.to_lowercase();
    let mut parts = lowered.split('/');

    if parts.next() != Some("m") {
        return Err(WalletError::PathSyntax(text.to_string()));
    }

    let mut path = Vec::new();
    for part in parts {
        if part.is_empty() || part == "m" {
            continue;
        }

        let (digits, hardened) = match part.strip_suffix('\'') {
            Some(digits) => (digits, true),
            None => (part, false),
        };

        let n: i64 = digits
            .parse()
            .map_err(|_| WalletError::PathSyntax(text.to_string()))?;
        if n < 0 {
            return Err(WalletError::NegativeIndex(n));
        }
        // 非硬化值必须放得进 31 位，否则会与硬化标志位冲突
        if n >= HD_HARDENED as i64 {
            return Err(WalletError::PathSyntax(text.to_string()));
        }

        let n = n as u32;
        path.push(if hardened { to_hardened(n) } else { n });
    }

    Ok(path)
}

/// 序列化为线格式（无开头 `m`）
///
/// 每个元素输出其非硬化十进制值，硬化元素追加 `'`，以 `/` 连接。
/// 依赖往返转换的调用方需自行补/去开头的 `m`。
pub fn serialize_path(path: &[u32]) -> String {
    path.iter()
        .map(|&i| {
            let s = from_hardened(i).to_string();
            if i & HD_HARDENED != 0 {
                format!("{s}'")
            } else {
                s
            }
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// 校验并规整路径
///
/// `min_len > 0` 时要求至少 `min_len` 个元素；
/// `truncate_to_account` 只保留前 3 个元素（purpose/coin/account），
/// 用于只有账户级路径有意义的场合。
pub fn validate_path(
    input: PathInput<'_>,
    min_len: usize,
    truncate_to_account: bool,
) -> Result<Vec<u32>, WalletError> {
    let mut path = match input {
        PathInput::Text(text) => parse_path(text)?,
        PathInput::Indices(indices) => indices.to_vec(),
    };

    if min_len > 0 && path.len() < min_len {
        return Err(WalletError::PathTooShort {
            min: min_len,
            actual: path.len(),
        });
    }

    if truncate_to_account {
        path.truncate(3);
    }
    Ok(path)
}

/// BIP49 (P2SH-wrapped segwit) 路径？
pub fn is_segwit_path(path: &[u32]) -> bool {
    path.first() == Some(&to_hardened(49))
}

/// BIP84 (native segwit) 路径？
pub fn is_native_segwit_path(path: &[u32]) -> bool {
    path.first() == Some(&to_hardened(84))
}

/// 账户级路径 `[purpose', coin_type', account']`
pub fn account_path(purpose: u32, coin_type: u32, account: u32) -> Vec<u32> {
    vec![
        to_hardened(purpose),
        to_hardened(coin_type),
        to_hardened(account),
    ]
}

/// 从路径中取账户索引（第 3 个元素的非硬化值）
pub fn account_index_from_path(path: &[u32]) -> Result<u32, WalletError> {
    if path.len() < 3 {
        return Err(WalletError::PathTooShort {
            min: 3,
            actual: path.len(),
        });
    }
    Ok(from_hardened(path[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_bip44_path() {
        let path = parse_path("m/44'/0'/0'/0/0").unwrap();
        assert_eq!(path, vec![0x8000_002C, 0x8000_0000, 0x8000_0000, 0, 0]);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            parse_path("M/49'/2'/1'").unwrap(),
            vec![to_hardened(49), to_hardened(2), to_hardened(1)]
        );
    }

    #[test]
    fn test_parse_skips_empty_segments() {
        assert_eq!(parse_path("m//44'//0").unwrap(), vec![to_hardened(44), 0]);
        // 只有 m 也是合法路径（空序列）
        assert_eq!(parse_path("m").unwrap(), Vec::<u32>::new());
    }

    #[test]
    fn test_parse_rejects_missing_m() {
        assert!(matches!(
            parse_path("44'/0'/0'"),
            Err(WalletError::PathSyntax(_))
        ));
        assert!(matches!(parse_path(""), Err(WalletError::PathSyntax(_))));
    }

    #[test]
    fn test_parse_rejects_non_integer_segment() {
        assert!(matches!(
            parse_path("m/abc"),
            Err(WalletError::PathSyntax(_))
        ));
        // 不允许 JS parseInt 那种前缀截断
        assert!(matches!(
            parse_path("m/44x'"),
            Err(WalletError::PathSyntax(_))
        ));
    }

    #[test]
    fn test_parse_rejects_negative_segment() {
        assert!(matches!(
            parse_path("m/44'/-1'"),
            Err(WalletError::NegativeIndex(-1))
        ));
        assert!(matches!(
            parse_path("m/-5"),
            Err(WalletError::NegativeIndex(-5))
        ));
    }

    #[test]
    fn test_parse_rejects_value_over_31_bits() {
        // 0x80000000 与硬化标志位冲突
        assert!(matches!(
            parse_path("m/2147483648"),
            Err(WalletError::PathSyntax(_))
        ));
        // 最大合法值
        assert_eq!(parse_path("m/2147483647").unwrap(), vec![0x7FFF_FFFF]);
    }

    #[test]
    fn test_hardened_roundtrip() {
        for n in [0u32, 1, 44, 49, 84, 0x7FFF_FFFF] {
            let h = to_hardened(n);
            assert_ne!(h & HD_HARDENED, 0);
            assert_eq!(from_hardened(h), n);
        }
    }

    #[test]
    fn test_serialize_is_inverse_of_parse() {
        for text in ["44'/0'/0'/0/0", "84'/60'/0'", "0/1/2", "49'/1'/0'/1/19"] {
            let parsed = parse_path(&format!("m/{text}")).unwrap();
            assert_eq!(serialize_path(&parsed), text);
        }
        assert_eq!(serialize_path(&[]), "");
    }

    #[test]
    fn test_validate_min_length() {
        let err = validate_path(PathInput::Text("m/44'/0'"), 5, false).unwrap_err();
        assert!(matches!(
            err,
            WalletError::PathTooShort { min: 5, actual: 2 }
        ));

        // min_len = 0 不限制长度
        assert!(validate_path(PathInput::Text("m"), 0, false).is_ok());
    }

    #[test]
    fn test_validate_truncates_to_account_level() {
        let full = [
            to_hardened(44),
            to_hardened(0),
            to_hardened(0),
            0u32,
            7u32,
        ];
        let base = validate_path(PathInput::Indices(&full), 3, true).unwrap();
        assert_eq!(base, &full[..3]);
    }

    #[test]
    fn test_validate_accepts_both_input_forms() {
        let from_text = validate_path(PathInput::from("m/49'/0'/0'"), 0, false).unwrap();
        let indices = [to_hardened(49), to_hardened(0), to_hardened(0)];
        let from_indices = validate_path(PathInput::from(&indices[..]), 0, false).unwrap();
        assert_eq!(from_text, from_indices);
    }

    #[test]
    fn test_segwit_predicates() {
        assert!(is_segwit_path(&[to_hardened(49), to_hardened(0)]));
        assert!(!is_segwit_path(&[to_hardened(84), to_hardened(0)]));
        assert!(is_native_segwit_path(&[to_hardened(84)]));
        assert!(!is_native_segwit_path(&[]));
        // 非硬化的 49 不算
        assert!(!is_segwit_path(&[49]));
    }

    #[test]
    fn test_account_path_helpers() {
        let path = account_path(44, 0, 5);
        assert_eq!(serialize_path(&path), "44'/0'/5'");
        assert_eq!(account_index_from_path(&path).unwrap(), 5);

        assert!(matches!(
            account_index_from_path(&[to_hardened(44)]),
            Err(WalletError::PathTooShort { min: 3, actual: 1 })
        ));
    }
}
