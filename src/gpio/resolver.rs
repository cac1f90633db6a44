//! Routing of pins to the base address of the tile that controls them

use super::controller::last_register_byte;
use super::{Error, Tile, Variant};
use crate::config::ConfigSource;

/// Address value hosts use to report "no address"
pub const NO_ADDRESS: u64 = u64::MAX;

/// Host-supplied base addresses, one slot per tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TileAddresses([Option<u64>; Tile::COUNT]);

impl TileAddresses {
    /// No addresses known
    #[must_use]
    pub const fn new() -> Self {
        Self([None; Tile::COUNT])
    }

    /// Records the base address of `tile`
    #[must_use]
    pub fn with(mut self, tile: Tile, address: u64) -> Self {
        self.0[tile.index()] = Some(address);
        self
    }

    /// The address recorded for `tile`, if any
    #[must_use]
    pub const fn get(&self, tile: Tile) -> Option<u64> {
        self.0[tile.index()]
    }

    /// Reads a variant's tile addresses from a host configuration node, which lists them in the
    /// order of [`Layout::tiles`](super::Layout::tiles)
    pub fn from_source<S: ConfigSource + ?Sized>(variant: Variant, source: &S) -> Self {
        variant
            .layout()
            .tiles
            .iter()
            .enumerate()
            .fold(Self::new(), |addresses, (index, &tile)| {
                match source.address(index) {
                    Some(address) => addresses.with(tile, address),
                    None => addresses,
                }
            })
    }
}

/// Resolves pins of one controller to the base address of their tile. Built once, when the
/// controller is brought up; a resolver only exists if every tile of its variant has a valid
/// address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinResolver {
    /// Controller variant whose routing table applies
    variant: Variant,
    /// Base address per tile; zero for tiles the variant does not have
    bases: [usize; Tile::COUNT],
}

impl PinResolver {
    /// Validates the addresses of every tile `variant` declares and captures them
    ///
    /// # Errors
    ///
    /// * [`Error::MissingBaseAddress`] if a declared tile has no address, or a zero or
    ///   [`NO_ADDRESS`] one
    /// * [`Error::InvalidBaseAddress`] if an address is not 4-byte aligned, or if the registers of
    ///   the variant's last pin would lie past the end of the host address space
    pub fn new(variant: Variant, addresses: &TileAddresses) -> Result<Self, Error> {
        let layout = variant.layout();
        // Every tile is checked against the full pin range, whichever pins it actually governs
        let window = layout.gpio_count.checked_sub(1).map_or(Some(0), last_register_byte);
        let mut bases = [0; Tile::COUNT];
        for &tile in layout.tiles {
            let address = addresses
                .get(tile)
                .filter(|&address| address != 0 && address != NO_ADDRESS)
                .ok_or(Error::MissingBaseAddress(tile))?;
            let base = usize::try_from(address).map_err(|_| Error::InvalidBaseAddress(tile))?;
            if base % core::mem::align_of::<u32>() != 0
                || window.and_then(|window| base.checked_add(window)).is_none()
            {
                return Err(Error::InvalidBaseAddress(tile));
            }
            bases[tile.index()] = base;
        }
        Ok(Self { variant, bases })
    }

    /// The variant this resolver routes for
    #[must_use]
    pub const fn variant(&self) -> Variant {
        self.variant
    }

    /// Base address of `tile`, or `None` if the variant has no such tile
    #[must_use]
    pub const fn base(&self, tile: Tile) -> Option<usize> {
        match self.bases[tile.index()] {
            0 => None,
            base => Some(base),
        }
    }

    /// The tile whose registers control `pin`
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn tile(&self, pin: u32) -> Result<Tile, Error> {
        let layout = self.variant.layout();
        if !layout.has_gpio(pin) {
            return Err(Error::PinOutOfRange(pin));
        }
        Ok(layout.tile_for(pin))
    }

    /// Base address of the tile whose registers control `pin`
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn resolve(&self, pin: u32) -> Result<usize, Error> {
        let tile = self.tile(pin)?;
        let base = self.bases[tile.index()];
        debug_assert_ne!(base, 0, "Routing tables only name declared tiles");
        Ok(base)
    }
}
