//! 32-bit register access primitives

/// Performs the raw 32-bit register accesses of a pin controller. Every call is one bus
/// transaction, issued in program order.
pub trait Bus {
    /// Reads the 32-bit register at `address`
    fn read32(&mut self, address: usize) -> u32;

    /// Writes `value` to the 32-bit register at `address`
    fn write32(&mut self, address: usize, value: u32);
}

impl<B: Bus + ?Sized> Bus for &mut B {
    #[inline]
    fn read32(&mut self, address: usize) -> u32 {
        (**self).read32(address)
    }

    #[inline]
    fn write32(&mut self, address: usize, value: u32) {
        (**self).write32(address, value);
    }
}

/// Memory-mapped register access through volatile loads and stores at physical addresses
#[derive(Debug)]
pub struct Mmio {
    /// Only constructible through [`Mmio::new`]
    _private: (),
}

impl Mmio {
    /// Creates a bus that dereferences the addresses it is given
    ///
    /// # Safety
    /// * Every address later passed to this bus must be a valid, 4-byte aligned, identity-mapped
    ///   device register
    /// * Those registers must not be accessed in any other way while this bus exists
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl Bus for Mmio {
    #[inline]
    fn read32(&mut self, address: usize) -> u32 {
        #[expect(
            clippy::as_conversions,
            reason = "Device registers are addressed by their physical address"
        )]
        let register = address as *const u32;
        // SAFETY: The creator of this bus guarantees that the address is a valid device register
        unsafe { register.read_volatile() }
    }

    #[inline]
    fn write32(&mut self, address: usize, value: u32) {
        #[expect(
            clippy::as_conversions,
            reason = "Device registers are addressed by their physical address"
        )]
        let register = address as *mut u32;
        // SAFETY: The creator of this bus guarantees that the address is a valid device register
        unsafe { register.write_volatile(value) }
    }
}
