//! Supported boards and the SoC data they are built from

use crate::config::StaticNode;
use crate::gpio::Variant;
use crate::memory::MemoryMap;
use derive_more::Display;

pub mod sm6115;
pub mod sm8250;

/// A supported board
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Board {
    /// Qualcomm Robotics RB2, built on the QRB4210 (SM6115)
    #[display(fmt = "QRB4210-RB2")]
    Qrb4210Rb2,
    /// Qualcomm Robotics RB5, built on the QRB5165 (SM8250)
    #[display(fmt = "QRB5165-RB5")]
    Qrb5165Rb5,
}

impl Board {
    /// Every supported board
    pub const ALL: [Self; 2] = [Self::Qrb4210Rb2, Self::Qrb5165Rb5];

    /// Root compatible string of the board's device tree
    #[must_use]
    pub const fn compatible(self) -> &'static str {
        match self {
            Self::Qrb4210Rb2 => "qcom,qrb4210-rb2",
            Self::Qrb5165Rb5 => "qcom,qrb5165-rb5",
        }
    }

    /// Identifies a board from its root compatible string
    #[must_use]
    pub fn from_compatible(compatible: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|board| board.compatible() == compatible)
    }

    /// The pin controller variant of the board's SoC
    #[must_use]
    pub const fn pin_controller(self) -> Variant {
        match self {
            Self::Qrb4210Rb2 => Variant::Sm6115,
            Self::Qrb5165Rb5 => Variant::Sm8250,
        }
    }

    /// The memory map to install at boot
    #[must_use]
    pub fn memory_map(self) -> MemoryMap {
        match self {
            Self::Qrb4210Rb2 => MemoryMap::new(&sm6115::MEMORY_MAP),
            Self::Qrb5165Rb5 => MemoryMap::new(&sm8250::MEMORY_MAP),
        }
    }

    /// Description of the SoC's pin controller, for hosts booting without a device tree
    #[must_use]
    pub fn pin_controller_node(self) -> &'static StaticNode<'static> {
        match self {
            Self::Qrb4210Rb2 => &sm6115::PINCTRL_NODE,
            Self::Qrb5165Rb5 => &sm8250::PINCTRL_NODE,
        }
    }
}
