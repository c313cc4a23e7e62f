//! Base58Check 编解码
//!
//! 负载（版本 + hash160，不含校验和）必须是 21 或 22 字节：
//! 21 字节时版本为单字节，22 字节时为大端 u16（Zcash 透明地址等）

use sha2::{Digest, Sha256};

use crate::error::WalletError;

const MIN_PAYLOAD_LEN: usize = 21;
const MAX_PAYLOAD_LEN: usize = 22;
const CHECKSUM_LEN: usize = 4;

/// 解码结果：版本前缀 + 哈希
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBase58 {
    pub version: u16,
    pub hash: Vec<u8>,
}

/// 双重 SHA256 的前 4 字节
fn checksum(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(data));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

/// 解码 Base58Check 地址
///
/// # Errors
/// - 非法 base58 字符: [`WalletError::Base58Format`]
/// - 校验和不匹配: [`WalletError::ChecksumMismatch`]
/// - 负载长度超出 21..=22: [`WalletError::PayloadLength`]
pub fn decode(address: &str) -> Result<DecodedBase58, WalletError> {
    let raw = bs58::decode(address)
        .into_vec()
        .map_err(|e| WalletError::Base58Format(e.to_string()))?;

    if raw.len() < CHECKSUM_LEN {
        return Err(WalletError::ChecksumMismatch);
    }
    let (payload, check) = raw.split_at(raw.len() - CHECKSUM_LEN);
    let expected = checksum(payload);
    if check != expected {
        return Err(WalletError::ChecksumMismatch);
    }

    if !(MIN_PAYLOAD_LEN..=MAX_PAYLOAD_LEN).contains(&payload.len()) {
        return Err(WalletError::PayloadLength(payload.len()));
    }

    let multibyte = payload.len() == MAX_PAYLOAD_LEN;
    let (version, hash) = if multibyte {
        (
            u16::from_be_bytes([payload[0], payload[1]]),
            payload[2..].to_vec(),
        )
    } else {
        (payload[0] as u16, payload[1..].to_vec())
    };

    Ok(DecodedBase58 { version, hash })
}

/// 编码为 Base58Check 地址
///
/// 版本按最小宽度输出：`version <= 0xff` 时单字节，否则大端两字节
pub fn encode(version: u16, hash: &[u8]) -> String {
    let mut payload = Vec::with_capacity(2 + hash.len() + CHECKSUM_LEN);
    if version > 0xff {
        payload.extend_from_slice(&version.to_be_bytes());
    } else {
        payload.push(version as u8);
    }
    payload.extend_from_slice(hash);

    let check = checksum(&payload);
    payload.extend_from_slice(&check);
    bs58::encode(payload).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 创世块 coinbase 地址，hash160 固定且公开
    const GENESIS_P2PKH: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";
    const GENESIS_HASH160: [u8; 20] = [
        0x62, 0xe9, 0x07, 0xb1, 0x5c, 0xbf, 0x27, 0xd5, 0x42, 0x53, 0x99, 0xeb, 0xf6, 0xf0, 0xfb,
        0x50, 0xeb, 0xb8, 0x8f, 0x18,
    ];

    #[test]
    fn test_decode_mainnet_p2pkh() {
        let decoded = decode(GENESIS_P2PKH).unwrap();
        assert_eq!(decoded.version, 0x00);
        assert_eq!(decoded.hash, GENESIS_HASH160);
    }

    #[test]
    fn test_decode_mainnet_p2sh_version() {
        let decoded = decode("3J98t1WpEZ73CNmYviecrnyiWrnqRhWNLy").unwrap();
        assert_eq!(decoded.version, 0x05);
        assert_eq!(decoded.hash.len(), 20);
    }

    #[test]
    fn test_encode_roundtrip_single_byte_version() {
        let address = encode(0x00, &GENESIS_HASH160);
        assert_eq!(address, GENESIS_P2PKH);
    }

    #[test]
    fn test_encode_roundtrip_two_byte_version() {
        // Zcash 透明 P2PKH 版本 0x1cb8
        let hash = [0xabu8; 20];
        let address = encode(0x1cb8, &hash);
        let decoded = decode(&address).unwrap();
        assert_eq!(decoded.version, 0x1cb8);
        assert_eq!(decoded.hash, hash);
        // 两字节版本 + 20 字节 hash = 22 字节负载
        assert!(address.starts_with('t'));
    }

    #[test]
    fn test_flipped_checksum_byte_is_rejected() {
        // 末位 a -> b 仍是合法 base58，但校验和必然不匹配
        let mut corrupted = String::from(&GENESIS_P2PKH[..GENESIS_P2PKH.len() - 1]);
        corrupted.push('b');
        assert!(matches!(
            decode(&corrupted),
            Err(WalletError::ChecksumMismatch)
        ));
    }

    #[test]
    fn test_invalid_base58_character() {
        // 0 和 l 不在 base58 字符集里
        assert!(matches!(
            decode("0A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            Err(WalletError::Base58Format(_))
        ));
    }

    #[test]
    fn test_payload_length_bounds() {
        // 19 字节 hash -> 20 字节负载，太短
        let short = encode(0x00, &[0u8; 19]);
        assert!(matches!(
            decode(&short),
            Err(WalletError::PayloadLength(20))
        ));

        // 22 字节 hash + 单字节版本 -> 23 字节负载，太长
        let long = encode(0x00, &[0u8; 22]);
        assert!(matches!(decode(&long), Err(WalletError::PayloadLength(23))));
    }

    #[test]
    fn test_version_boundary_widths() {
        // 0xff 仍是单字节，0x100 起两字节
        let hash = [0x11u8; 20];
        assert_eq!(decode(&encode(0xff, &hash)).unwrap().version, 0xff);
        assert_eq!(decode(&encode(0x0100, &hash)).unwrap().version, 0x0100);
    }
}
