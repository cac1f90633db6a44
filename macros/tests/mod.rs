#[cfg(test)]
mod tests {
    const NON: u64 = 0b00;
    const OUTER: u64 = 0b10;
    const INNER: u64 = 0b11;

    #[derive(macros::AsBits, PartialEq, Eq, Debug, Clone, Copy)]
    #[repr(u64)]
    enum Shareability {
        Non = NON,
        Outer = OUTER,
        Inner = INNER,
    }

    #[derive(macros::AsBits, PartialEq, Eq, Debug, Clone, Copy)]
    #[repr(u8)]
    enum Pull {
        Off = 0,
        Down = 1,
        Up = 3,
    }

    #[test]
    fn into_bits() {
        assert_eq!(Shareability::Non.into_bits(), NON);
        assert_eq!(Shareability::Outer.into_bits(), OUTER);
        assert_eq!(Shareability::Inner.into_bits(), INNER);
        assert_eq!(Pull::Up.into_bits(), 3_u8);
    }

    #[test]
    fn from_bits_valid() {
        assert_eq!(Shareability::from_bits(NON), Shareability::Non);
        assert_eq!(Shareability::from_bits(OUTER), Shareability::Outer);
        assert_eq!(Shareability::from_bits(INNER), Shareability::Inner);
        assert_eq!(Pull::from_bits(1), Pull::Down);
    }

    #[test]
    fn try_from_bits_rejects_reserved_encodings() {
        assert_eq!(Shareability::try_from_bits(0b01), None);
        assert_eq!(Pull::try_from_bits(2), None);
        assert_eq!(Pull::try_from_bits(0), Some(Pull::Off));
    }

    #[test]
    fn usable_in_const_context() {
        const DECODED: Shareability = Shareability::from_bits(INNER);
        const ENCODED: u64 = Shareability::Outer.into_bits();
        assert_eq!(DECODED, Shareability::Inner);
        assert_eq!(ENCODED, OUTER);
    }

    #[test]
    #[should_panic]
    fn from_bits_invalid() {
        Shareability::from_bits(0b01);
    }
}
