//! Pin naming and mux function lookup for the TLMM.
//!
//! Selectors below the GPIO count name general purpose pins; the dedicated pads (SD card, UFS
//! reset, ...) follow them.

use crate::gpio::Layout;
use core::fmt;

/// Name of a pin controller pad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinName {
    /// General purpose pin, shown as `GPIO_<n>`
    Gpio(u32),
    /// Dedicated pad
    Special(&'static str),
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpio(pin) => write!(f, "GPIO_{pin}"),
            Self::Special(name) => f.write_str(name),
        }
    }
}

/// A selectable mux function
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Function {
    /// Function name
    pub name: &'static str,
    /// Value programmed into the pin's function select field
    pub mux: u32,
}

impl Layout {
    /// Total number of pads: general purpose pins and dedicated pads
    #[must_use]
    pub fn pin_count(&self) -> u32 {
        let special = u32::try_from(self.special_pins.len()).unwrap_or(u32::MAX);
        self.gpio_count.saturating_add(special)
    }

    /// Name of the pad at `selector`
    #[must_use]
    pub fn pin_name(&self, selector: u32) -> Option<PinName> {
        if self.has_gpio(selector) {
            return Some(PinName::Gpio(selector));
        }
        let index = usize::try_from(selector - self.gpio_count).ok()?;
        self.special_pins
            .get(index)
            .map(|&name| PinName::Special(name))
    }

    /// The mux function at `selector`
    #[must_use]
    pub fn function(&self, selector: usize) -> Option<Function> {
        self.functions
            .get(selector)
            .map(|&(name, mux)| Function { name, mux })
    }

    /// Function select value of the function called `name`
    #[must_use]
    pub fn function_mux(&self, name: &str) -> Option<u32> {
        self.functions
            .iter()
            .find(|&&(function, _)| function == name)
            .map(|&(_, mux)| mux)
    }
}
