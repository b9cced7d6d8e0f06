//! KeyHash: the hashing capability map keys supply.
//!
//! Hashes are 32 bits wide and bucket selection masks them with
//! `capacity - 1`, so the defaults aim for cheap, representation-based
//! hashing rather than avalanche quality:
//!
//! - narrow integrals, `bool` and `char` hash to their own bit pattern;
//! - wide integrals and `f64` fold the 32-bit halves of their
//!   representation with XOR (128-bit types fold pairwise down to 32);
//! - strings use a multiplicative polynomial accumulator over their UTF-8
//!   bytes, `h = h * 31 + byte`, seeded at zero with wrapping arithmetic.
//!
//! Structured key types implement [`KeyHash`] themselves; together with
//! `PartialEq` for key equality this is the whole per-key behavior
//! contract. Hash and equality must agree: keys that compare equal must
//! hash equally, and a borrowed lookup type (`str` for `String` keys)
//! must hash exactly like the owned key.

/// Per-type key hashing strategy.
pub trait KeyHash {
    fn key_hash(&self) -> u32;
}

#[inline]
fn fold64(bits: u64) -> u32 {
    (bits as u32) ^ ((bits >> 32) as u32)
}

#[inline]
fn fold128(bits: u128) -> u32 {
    fold64(bits as u64) ^ fold64((bits >> 64) as u64)
}

impl<T: KeyHash + ?Sized> KeyHash for &T {
    fn key_hash(&self) -> u32 {
        (**self).key_hash()
    }
}

impl KeyHash for bool {
    fn key_hash(&self) -> u32 {
        *self as u32
    }
}

impl KeyHash for char {
    fn key_hash(&self) -> u32 {
        *self as u32
    }
}

macro_rules! hash_as_bit_pattern {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl KeyHash for $t {
            fn key_hash(&self) -> u32 {
                // Widen through the unsigned type of the same width so the
                // hash is the bit pattern, not a sign extension.
                (*self as $u) as u32
            }
        }
    )*};
}

hash_as_bit_pattern!(i8 => u8, i16 => u16, i32 => u32, u8 => u8, u16 => u16, u32 => u32);

macro_rules! hash_folded_64 {
    ($($t:ty),* $(,)?) => {$(
        impl KeyHash for $t {
            fn key_hash(&self) -> u32 {
                fold64(*self as u64)
            }
        }
    )*};
}

hash_folded_64!(i64, u64, isize, usize);

impl KeyHash for i128 {
    fn key_hash(&self) -> u32 {
        fold128(*self as u128)
    }
}

impl KeyHash for u128 {
    fn key_hash(&self) -> u32 {
        fold128(*self)
    }
}

impl KeyHash for f32 {
    fn key_hash(&self) -> u32 {
        self.to_bits()
    }
}

impl KeyHash for f64 {
    fn key_hash(&self) -> u32 {
        fold64(self.to_bits())
    }
}

impl KeyHash for str {
    fn key_hash(&self) -> u32 {
        self.bytes()
            .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(b as u32))
    }
}

impl KeyHash for String {
    fn key_hash(&self) -> u32 {
        self.as_str().key_hash()
    }
}
