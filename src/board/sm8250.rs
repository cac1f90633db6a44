//! Qualcomm SM8250, as the QRB5165 on the RB5 board

use crate::config::{Property, StaticNode};
use crate::gpio::{Layout, Tile};
use crate::memory::{Attributes, Region};

/// Physical memory map: the peripheral block, then up to 8 GiB of DDR
pub static MEMORY_MAP: [Region; 3] = [
    Region::identity(0x0, 0x8000_0000, Attributes::DEVICE),
    Region::identity(0x8000_0000, 0x2_0000_0000, Attributes::NORMAL),
    Region::SENTINEL,
];

/// TLMM routing and pad data
pub static PINCTRL: Layout = Layout {
    compatible: "qcom,sm8250-pinctrl",
    tiles: &[Tile::West, Tile::South, Tile::North],
    // The SM8250 TLMM has no east tile
    default_tile: Tile::South,
    overrides: &[(77, Tile::North)],
    gpio_count: 180,
    special_pins: &["SDC2_CLK", "SDC2_CMD", "SDC2_DATA", "UFS_RESET"],
    functions: &[("qup2", 1), ("gpio", 0)],
    boot_outputs: &[],
};

/// The TLMM as the SoC documentation places it
pub static PINCTRL_NODE: StaticNode<'static> = StaticNode {
    compatible: &["qcom,sm8250-pinctrl"],
    reg: &[0x0f10_0000, 0x0f50_0000, 0x0f90_0000],
    properties: &[("gpio-count", Property::U32(180))],
};
