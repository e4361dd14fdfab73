//! # 15-bit 1's-Complement Words
//!
//! The machine word is 15 bits wide, held in a `u16`:
//!
//! ```text
//!  14 | 13 ............ 0
//! ----|-----------------
//! sign|    magnitude
//! ```
//!
//! Negative values are the bitwise complement of their positive
//! counterparts, so there are two zeros: `+0 = 00000` and `-0 = 77777`.
//! They are distinct bit patterns but both count as zero arithmetically.

/// Machine word (15-bit value stored in 16 bits)
pub type Word = u16;

/// Mask for the 15 significant bits
pub const WORD_MASK: Word = 0o77777;

/// Sign bit (bit 14)
pub const SIGN_BIT: Word = 0o40000;

/// Positive zero
pub const POSITIVE_ZERO: Word = 0o00000;

/// Negative zero (all 15 bits set)
pub const NEGATIVE_ZERO: Word = 0o77777;

/// Sign of a word, with both zero patterns folded into `Zero`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// Mask to 15 bits
#[inline]
pub const fn normalize(w: Word) -> Word {
    w & WORD_MASK
}

/// True iff bit 14 is set. Note that `-0` is negative by this test.
#[inline]
pub const fn is_negative(w: Word) -> bool {
    w & SIGN_BIT != 0
}

/// True for either representation of zero
#[inline]
pub const fn is_zero(w: Word) -> bool {
    let w = normalize(w);
    w == POSITIVE_ZERO || w == NEGATIVE_ZERO
}

/// 1's-complement negation
#[inline]
pub const fn negate(w: Word) -> Word {
    normalize(!w)
}

/// 1's-complement addition with end-around carry.
///
/// The carry out of bit 14 is fed back into bit 0. Re-adding the carry can
/// in principle set bit 15 again, so the result is normalized a second time.
#[inline]
pub const fn add(a: Word, b: Word) -> Word {
    let sum = normalize(a) as u32 + normalize(b) as u32;
    let carry = ((sum >> 15) & 1) as Word;
    normalize(normalize(sum as Word) + carry)
}

/// Classify a word as negative, zero (either pattern) or positive
#[inline]
pub const fn sign(w: Word) -> Sign {
    if is_zero(w) {
        Sign::Zero
    } else if is_negative(w) {
        Sign::Negative
    } else {
        Sign::Positive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_high_bit() {
        assert_eq!(normalize(0o177777), 0o77777);
        assert_eq!(normalize(0o100000), 0);
        assert_eq!(normalize(0o12345), 0o12345);
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(0o00005), 0o77772);
        assert_eq!(negate(0o77772), 0o00005);
        assert_eq!(negate(POSITIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(negate(NEGATIVE_ZERO), POSITIVE_ZERO);
    }

    #[test]
    fn test_is_negative() {
        assert!(is_negative(0o40000));
        assert!(is_negative(NEGATIVE_ZERO));
        assert!(!is_negative(0o37777));
        assert!(!is_negative(POSITIVE_ZERO));
    }

    #[test]
    fn test_add_simple() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(add(0o100, 0o2), 0o102);
    }

    #[test]
    fn test_add_end_around_carry() {
        // 0100 + (-1) = 077
        assert_eq!(add(0o100, negate(1)), 0o77);
        // -1 + -1 = -2
        assert_eq!(add(negate(1), negate(1)), negate(2));
        // 5 + (-3) = 2
        assert_eq!(add(5, negate(3)), 2);
    }

    #[test]
    fn test_add_opposites_is_negative_zero() {
        assert_eq!(add(0o1234, negate(0o1234)), NEGATIVE_ZERO);
    }

    #[test]
    fn test_add_negative_zeros() {
        assert_eq!(add(NEGATIVE_ZERO, NEGATIVE_ZERO), NEGATIVE_ZERO);
        assert_eq!(add(NEGATIVE_ZERO, 1), 1);
    }

    #[test]
    fn test_sign() {
        assert_eq!(sign(POSITIVE_ZERO), Sign::Zero);
        assert_eq!(sign(NEGATIVE_ZERO), Sign::Zero);
        assert_eq!(sign(1), Sign::Positive);
        assert_eq!(sign(0o37777), Sign::Positive);
        assert_eq!(sign(0o40000), Sign::Negative);
        assert_eq!(sign(negate(5)), Sign::Negative);
    }
}
