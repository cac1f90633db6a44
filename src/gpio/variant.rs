//! Supported pin controller variants and their pin routing

use super::{Error, Tile};
use crate::board::{sm6115, sm8250};
use crate::config::ConfigSource;
use derive_more::Display;

/// Everything that differs between pin controller variants, kept as data so that routing a pin is
/// a table lookup rather than a chain of variant checks
#[derive(Debug)]
pub struct Layout {
    /// Compatible string identifying this controller
    pub compatible: &'static str,
    /// Tiles the controller is built from, in the order the host lists their addresses
    pub tiles: &'static [Tile],
    /// Tile governing every pin without an override
    pub default_tile: Tile,
    /// Pins wired to a tile other than the default
    pub overrides: &'static [(u32, Tile)],
    /// Number of general purpose pins
    pub gpio_count: u32,
    /// Names of the dedicated pads numbered after the general purpose pins
    pub special_pins: &'static [&'static str],
    /// Mux functions, by name, with their function-select value
    pub functions: &'static [(&'static str, u32)],
    /// Pins the board drives at bring-up, with the level driven
    pub boot_outputs: &'static [(u32, bool)],
}

impl Layout {
    /// Tile whose registers control `pin`. Does not check that the pin exists.
    #[must_use]
    pub fn tile_for(&self, pin: u32) -> Tile {
        self.overrides
            .iter()
            .find(|&&(overridden, _)| overridden == pin)
            .map_or(self.default_tile, |&(_, tile)| tile)
    }

    /// Whether the controller has the given tile
    #[must_use]
    pub fn declares(&self, tile: Tile) -> bool {
        self.tiles.contains(&tile)
    }

    /// Whether `pin` is a general purpose pin of this controller
    #[must_use]
    pub const fn has_gpio(&self, pin: u32) -> bool {
        pin < self.gpio_count
    }
}

/// A supported pin controller, identified by its SoC
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Variant {
    /// SM6115 (QRB4210), as found on the RB2
    #[display(fmt = "SM6115")]
    Sm6115,
    /// SM8250 (QRB5165), as found on the RB5
    #[display(fmt = "SM8250")]
    Sm8250,
}

impl Variant {
    /// Every supported variant
    pub const ALL: [Self; 2] = [Self::Sm6115, Self::Sm8250];

    /// The routing and pin data of this variant
    #[must_use]
    pub fn layout(self) -> &'static Layout {
        match self {
            Self::Sm6115 => &sm6115::PINCTRL,
            Self::Sm8250 => &sm8250::PINCTRL,
        }
    }

    /// Looks up the variant with exactly this compatible string
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVariant`] if no variant matches
    pub fn from_compatible(compatible: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.layout().compatible == compatible)
            .ok_or(Error::UnsupportedVariant)
    }

    /// Identifies the variant a host configuration node describes
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedVariant`] if the node is compatible with no supported variant
    pub fn detect<S: ConfigSource + ?Sized>(source: &S) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|variant| source.is_compatible(variant.layout().compatible))
            .ok_or(Error::UnsupportedVariant)
    }
}
