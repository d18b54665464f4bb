use snake_core::snake::bit_ops::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_left() {
        assert_eq!(rotate_left(0x1234, 4), 0x2341);
        assert_eq!(rotate_left(0x1234, 3), 0x91A0);
        assert_eq!(rotate_left(0x8000, 1), 0x0001);
        assert_eq!(rotate_left(0x0001, 15), 0x8000);
        assert_eq!(rotate_left(0xFFFF, 7), 0xFFFF);
    }

    #[test]
    fn test_rotate_right() {
        assert_eq!(rotate_right(0x1234, 4), 0x4123);
        assert_eq!(rotate_right(0x0001, 1), 0x8000);
        assert_eq!(rotate_right(0x0002, 1), 0x0001);
        assert_eq!(rotate_right(0x6D6C, 2), 0x1B5B);
    }

    #[test]
    fn test_rotate_identity() {
        let value = 0xABCD;
        assert_eq!(rotate_left(value, 0), value);
        assert_eq!(rotate_right(value, 0), value);
        assert_eq!(rotate_left(value, 16), value);
        assert_eq!(rotate_right(value, 32), value);
    }

    #[test]
    fn test_rotate_equivalence() {
        let value = 0xABCD;
        let shift = 5;
        assert_eq!(rotate_left(value, shift), rotate_right(value, 16 - shift));
        assert_eq!(rotate_left(value, 17), rotate_left(value, 1));
    }

    #[test]
    fn test_xor_and_invert() {
        assert_eq!(xor_with_key(0x91A0, KEY_333), 0x9293);
        assert_eq!(invert_bits(0x9293), 0x6D6C);
        assert_eq!(invert_bits(0x0000), 0xFFFF);
    }

    #[test]
    fn test_reflectors() {
        assert_eq!(Reflector::Zero.mask(), REFLECTOR_000);
        assert_eq!(Reflector::Full.mask(), REFLECTOR_FFF);
        assert_eq!(reflect(0x1B5B, Reflector::Full), 0xE4A4);
        assert_eq!(reflect(0x1B5B, Reflector::Zero), 0x1B5B);
    }
}

use quickcheck::quickcheck;

quickcheck! {
    fn prop_rotations_cancel(word: u16, bits: u32) -> bool {
        rotate_left(rotate_right(word, bits), bits) == word
            && rotate_right(rotate_left(word, bits), bits) == word
    }

    fn prop_rotation_keeps_popcount(word: u16, bits: u32) -> bool {
        rotate_left(word, bits).count_ones() == word.count_ones()
    }

    fn prop_xor_is_involution(word: u16, key: u16) -> bool {
        xor_with_key(xor_with_key(word, key), key) == word
    }

    fn prop_full_reflection_is_inversion(word: u16) -> bool {
        reflect(word, Reflector::Full) == invert_bits(word)
            && invert_bits(invert_bits(word)) == word
    }
}
