use arc19_common::DecodeError;
use data_encoding::BASE32_NOPAD;
use sha2::{Digest, Sha512_256};

/// Length of a textual Algorand address.
const ADDRESS_LEN: usize = 58;

/// Length of the raw Ed25519 public key carried by an address.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Length of the trailing address checksum.
const CHECKSUM_LEN: usize = 4;

/// Decodes an Algorand address into its raw 32-byte public key.
///
/// Addresses are RFC 4648 base32 (no padding) over 36 bytes: the public key
/// followed by a 4-byte checksum, which is the last 4 bytes of the key's
/// SHA-512/256 digest. Fails with [`DecodeError::AddressDecode`] on invalid
/// length, alphabet, or checksum.
pub fn decode_reserve_address(address: &str) -> Result<[u8; PUBLIC_KEY_LEN], DecodeError> {
    let fail = |reason: &str| DecodeError::AddressDecode {
        address: address.to_string(),
        reason: reason.to_string(),
    };

    if address.len() != ADDRESS_LEN {
        return Err(fail("address must be 58 characters"));
    }

    let decoded = BASE32_NOPAD
        .decode(address.as_bytes())
        .map_err(|_| fail("address is not valid base32"))?;
    if decoded.len() != PUBLIC_KEY_LEN + CHECKSUM_LEN {
        return Err(fail("address must decode to 36 bytes"));
    }

    let (public_key, checksum) = decoded.split_at(PUBLIC_KEY_LEN);
    let digest = Sha512_256::digest(public_key);
    if &digest[digest.len() - CHECKSUM_LEN..] != checksum {
        return Err(fail("checksum mismatch"));
    }

    let mut key = [0u8; PUBLIC_KEY_LEN];
    key.copy_from_slice(public_key);
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // the ARC-19 specification's documented example reserve address
    const RESERVE: &str = "EEQYWGGBHRDAMTEVDPVOSDVX3HJQIG6K6IVNR3RXHYOHV64ZWAEISS4CTI";

    const RESERVE_PUBLIC_KEY: [u8; PUBLIC_KEY_LEN] = [
        0x21, 0x21, 0x8b, 0x18, 0xc1, 0x3c, 0x46, 0x06, 0x4c, 0x95, 0x1b, 0xea, 0xe9, 0x0e, 0xb7,
        0xd9, 0xd3, 0x04, 0x1b, 0xca, 0xf2, 0x2a, 0xd8, 0xee, 0x37, 0x3e, 0x1c, 0x7a, 0xfb, 0x99,
        0xb0, 0x08,
    ];

    #[test]
    fn decodes_documented_reserve_address() {
        assert_eq!(decode_reserve_address(RESERVE).unwrap(), RESERVE_PUBLIC_KEY);
    }

    #[test]
    fn rejects_corrupted_address() {
        // flip one character in the key portion, invalidating the checksum
        let mut corrupted = RESERVE.to_string();
        corrupted.replace_range(10..11, if &RESERVE[10..11] == "A" { "B" } else { "A" });
        assert!(matches!(
            decode_reserve_address(&corrupted),
            Err(DecodeError::AddressDecode { .. })
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            decode_reserve_address(&RESERVE[..57]),
            Err(DecodeError::AddressDecode { .. })
        ));
        assert!(matches!(decode_reserve_address(""), Err(DecodeError::AddressDecode { .. })));
    }

    #[test]
    fn rejects_invalid_alphabet() {
        // "1" is not in the RFC 4648 base32 alphabet
        let invalid = format!("1{}", &RESERVE[1..]);
        assert!(matches!(
            decode_reserve_address(&invalid),
            Err(DecodeError::AddressDecode { .. })
        ));
    }
}
