use std::ops::RangeInclusive;

/// Helper methods to inspect bits of an instruction word,
/// the index (`bit_idx`) is supposed to be from lsb to msb (right to left).
pub trait Bits: Copy + Sized {
    const WIDTH: u8;

    fn is_bit_on(self, bit_idx: u8) -> bool;

    /// Returns the bits in `bits_range` moved down to position 0.
    fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self;

    /// Returns a sign-extended copy of the low `number_of_bits` bits.
    fn sign_extended(self, number_of_bits: u8) -> Self;
}

macro_rules! impl_bits {
    ($ty:ty, $signed:ty) => {
        impl Bits for $ty {
            const WIDTH: u8 = <$ty>::BITS as u8;

            #[inline]
            fn is_bit_on(self, bit_idx: u8) -> bool {
                debug_assert!(bit_idx < Self::WIDTH);
                (self >> bit_idx) & 1 != 0
            }

            #[inline]
            fn get_bits(self, bits_range: RangeInclusive<u8>) -> Self {
                let start = *bits_range.start();
                let end = *bits_range.end();
                debug_assert!(start <= end && end < Self::WIDTH);

                // Moves the wanted range to the top and then back down to 0
                // so that no mask has to be computed for a full-width range.
                let unused_top = Self::WIDTH - 1 - end;
                (self << unused_top) >> (unused_top + start)
            }

            #[inline]
            fn sign_extended(self, number_of_bits: u8) -> Self {
                debug_assert!(number_of_bits > 0 && number_of_bits <= Self::WIDTH);
                let shift = Self::WIDTH - number_of_bits;
                (((self << shift) as $signed) >> shift) as $ty
            }
        }
    };
}

impl_bits!(u32, i32);
impl_bits!(u64, i64);

/// A mask with `width` ones starting at `low`.
pub const fn field_mask(low: u8, width: u8) -> u32 {
    if width == 0 {
        return 0;
    }
    (u32::MAX >> (32 - width as u32)) << low
}
