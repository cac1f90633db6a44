//! Qualcomm SM6115, as the QRB4210 on the RB2 board

use crate::config::{Property, StaticNode};
use crate::gpio::{Layout, Tile};
use crate::memory::{Attributes, Region};

/// Physical memory map: the peripheral block, then DDR
pub static MEMORY_MAP: [Region; 3] = [
    Region::identity(0x0, 0x4000_0000, Attributes::DEVICE),
    Region::identity(0x4000_0000, 0x8000_0000, Attributes::NORMAL),
    Region::SENTINEL,
];

/// TLMM routing and pad data
pub static PINCTRL: Layout = Layout {
    compatible: "qcom,sm6115-pinctrl",
    tiles: &[Tile::West, Tile::South, Tile::East],
    default_tile: Tile::East,
    overrides: &[(89, Tile::West)],
    gpio_count: 113,
    special_pins: &[
        "UFS_RESET",
        "SDC1_RCLK",
        "SDC1_CLK",
        "SDC1_CMD",
        "SDC1_DATA",
        "SDC2_CLK",
        "SDC2_CMD",
        "SDC2_DATA",
    ],
    functions: &[("qup4", 1), ("gpio", 0)],
    boot_outputs: &[(89, true), (37, true)],
};

/// The TLMM as the SoC documentation places it
pub static PINCTRL_NODE: StaticNode<'static> = StaticNode {
    compatible: &["qcom,sm6115-pinctrl"],
    reg: &[0x0050_0000, 0x0090_0000, 0x00d0_0000],
    properties: &[("gpio-count", Property::U32(113))],
};
