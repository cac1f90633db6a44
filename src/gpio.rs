//! Driver for the GPIOs of the Snapdragon TLMM pin controller.
//!
//! The TLMM splits its registers across up to four physically separate tiles. Which tile governs a
//! pin depends on the SoC, so pins are first routed to a tile by the [`PinResolver`] and only then
//! accessed through the [`PinController`].

use derive_more::Display;

mod bus;
mod controller;
mod resolver;
mod variant;

pub use bus::{Bus, Mmio};
pub use controller::{PinController, IN_OUT_OFFSET, REGISTER_STRIDE};
pub use resolver::{PinResolver, TileAddresses, NO_ADDRESS};
pub use variant::{Layout, Variant};

/// A register tile of the pin controller, named after its position on the die
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tile {
    /// West tile
    #[display(fmt = "west")]
    West,
    /// South tile
    #[display(fmt = "south")]
    South,
    /// East tile
    #[display(fmt = "east")]
    East,
    /// North tile
    #[display(fmt = "north")]
    North,
}

impl Tile {
    /// Number of distinct tiles
    pub const COUNT: usize = 4;

    /// Every tile, in index order
    pub const ALL: [Self; Self::COUNT] = [Self::West, Self::South, Self::East, Self::North];

    /// Position of this tile in per-tile arrays
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::West => 0,
            Self::South => 1,
            Self::East => 2,
            Self::North => 3,
        }
    }
}

/// Whether a pin drives its output buffer
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Direction {
    /// Output buffer disabled; the pad is only sampled
    #[display(fmt = "input")]
    Input,
    /// Output buffer enabled
    #[display(fmt = "output")]
    Output,
}

/// Errors raised while bringing up a pin controller or addressing one of its pins
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// The compatible string names no supported pin controller
    #[display(fmt = "unsupported pin controller variant")]
    UnsupportedVariant,
    /// The host did not supply a usable base address for a tile the variant needs
    #[display(fmt = "missing base address for the {} tile", _0)]
    MissingBaseAddress(Tile),
    /// The base address for a tile is misaligned or not addressable on this host
    #[display(fmt = "invalid base address for the {} tile", _0)]
    InvalidBaseAddress(Tile),
    /// The pin does not exist on this controller
    #[display(fmt = "pin {} is out of range", _0)]
    PinOutOfRange(u32),
}

/// The integer-valued operations a host GPIO framework drives a controller through. Values follow
/// the C convention: any non-zero value is high.
pub trait GpioOps {
    /// Disables the pin's output buffer
    ///
    /// # Errors
    ///
    /// Fails if the pin does not exist
    fn direction_input(&mut self, pin: u32) -> Result<(), Error>;

    /// Drives `value` on the pin and enables its output buffer
    ///
    /// # Errors
    ///
    /// Fails if the pin does not exist
    fn direction_output(&mut self, pin: u32, value: i32) -> Result<(), Error>;

    /// Samples the pin, returning 0 or 1
    ///
    /// # Errors
    ///
    /// Fails if the pin does not exist
    fn get_value(&mut self, pin: u32) -> Result<i32, Error>;

    /// Sets the level the pin drives when its output buffer is enabled
    ///
    /// # Errors
    ///
    /// Fails if the pin does not exist
    fn set_value(&mut self, pin: u32, value: i32) -> Result<(), Error>;

    /// Reports whether the pin is configured as an input or an output
    ///
    /// # Errors
    ///
    /// Fails if the pin does not exist
    fn get_function(&mut self, pin: u32) -> Result<Direction, Error>;
}
