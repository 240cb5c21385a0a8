//! Visitor fingerprint.
//!
//! Not a unique identifier: it is recomputed on every page load from coarse
//! device characteristics and collides across identical setups.

use glimpse_core::encoding::to_base36;
use glimpse_core::models::DeviceProfile;

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// 32-bit FNV-1a over UTF-16 code units.
///
/// The prime multiply is expressed as shift-adds (`1 + 2 + 16 + 128 + 256 + 2^24
/// = 16777619`), all wrapping at 32 bits.
pub fn fnv1a_32(input: &str) -> u32 {
    let mut hash = FNV_OFFSET_BASIS;
    for unit in input.encode_utf16() {
        hash ^= u32::from(unit);
        hash = hash
            .wrapping_add(hash << 1)
            .wrapping_add(hash << 4)
            .wrapping_add(hash << 7)
            .wrapping_add(hash << 8)
            .wrapping_add(hash << 24);
    }
    hash
}

/// `v_` + base-36 hash of the `|`-joined device characteristics.
pub fn visitor_id(profile: &DeviceProfile) -> String {
    let joined = profile.characteristics().join("|");
    format!("v_{}", to_base36(u128::from(fnv1a_32(&joined))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_adds_equal_fnv_prime() {
        for input in ["", "a", "foobar", "Mozilla/5.0|en-US"] {
            let mut expected = FNV_OFFSET_BASIS;
            for unit in input.encode_utf16() {
                expected ^= u32::from(unit);
                expected = expected.wrapping_mul(16_777_619);
            }
            assert_eq!(fnv1a_32(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn known_fnv1a_vectors() {
        assert_eq!(fnv1a_32(""), 0x811c_9dc5);
        assert_eq!(fnv1a_32("a"), 0xe40c_292c);
        assert_eq!(fnv1a_32("foobar"), 0xbf9c_f968);
    }
}
