mod common;

use common::{config_address, in_out_address, Access, FakeTlmm, OE, OUT};
use snapdragon::board::Board;
use snapdragon::config::{Property, StaticNode};
use snapdragon::gpio::{
    Direction, Error, GpioOps, PinController, PinResolver, Tile, TileAddresses, Variant,
    NO_ADDRESS,
};

fn bring_up(board: Board) -> PinController<'static, FakeTlmm> {
    PinController::probe(board.pin_controller_node(), FakeTlmm::new()).unwrap()
}

#[test]
fn sm6115_routes_pin_89_to_the_west_tile() {
    let addresses = TileAddresses::new()
        .with(Tile::West, 0x0050_0000)
        .with(Tile::South, 0x0090_0000)
        .with(Tile::East, 0x00d0_0000);
    let resolver = PinResolver::new(Variant::Sm6115, &addresses).unwrap();
    assert_eq!(resolver.resolve(89), Ok(0x0050_0000));
    assert_eq!(resolver.resolve(37), Ok(0x00d0_0000));
}

#[test]
fn sm8250_routes_pin_77_to_the_north_tile() {
    let addresses = TileAddresses::new()
        .with(Tile::West, 0x0f10_0000)
        .with(Tile::South, 0x0f50_0000)
        .with(Tile::North, 0x0f90_0000);
    let resolver = PinResolver::new(Variant::Sm8250, &addresses).unwrap();
    assert_eq!(resolver.resolve(77), Ok(0x0f90_0000));
    assert_eq!(resolver.resolve(5), Ok(0x0f50_0000));
    for pin in (0..180).filter(|&pin| pin != 77) {
        assert_eq!(resolver.tile(pin), Ok(Tile::South), "pin {pin}");
    }
}

#[test]
fn direction_changes_only_touch_output_enable() {
    const POWER_ON: [u32; 2] = [0x0000_01c5, 0xffff_fdff];

    for board in Board::ALL {
        let mut controller = bring_up(board);
        for pin in 0..board.pin_controller().layout().gpio_count {
            let base = controller.resolver().resolve(pin).unwrap();
            let config = config_address(base, pin);
            for power_on in POWER_ON {
                controller.bus_mut().preload(config, power_on);

                controller.set_direction(pin, Direction::Output).unwrap();
                let snapshot = controller.bus().register(config);
                assert_eq!(snapshot ^ power_on, OE, "{board} pin {pin}");
                assert_eq!(controller.get_direction(pin), Ok(Direction::Output));

                controller.set_direction(pin, Direction::Input).unwrap();
                assert_eq!(controller.bus().register(config), power_on & !OE);
                assert_eq!(controller.get_direction(pin), Ok(Direction::Input));
            }
        }
    }
}

#[test]
fn set_direction_reads_before_writing() {
    let mut controller = bring_up(Board::Qrb5165Rb5);
    controller.set_direction(77, Direction::Output).unwrap();
    let config = config_address(0x0f90_0000, 77);
    assert_eq!(
        controller.bus().accesses,
        [Access::Read(config), Access::Write(config, OE)]
    );
}

#[test]
fn written_values_read_back_normalized() {
    for board in Board::ALL {
        let mut controller = bring_up(board);
        for pin in [0, 37, 77, 89, 112] {
            controller.direction_output(pin, 0).unwrap();
            for value in [0, 1, 2, -1] {
                controller.set_value(pin, value).unwrap();
                assert_eq!(
                    controller.get_value(pin),
                    Ok(i32::from(value != 0)),
                    "{board} pin {pin} value {value}"
                );
                assert_eq!(controller.read_value(pin), Ok(value != 0));
            }
        }
    }
}

#[test]
fn write_value_sets_the_output_bit_of_the_routed_tile() {
    let mut controller = bring_up(Board::Qrb4210Rb2);
    controller.write_value(89, true).unwrap();
    controller.write_value(88, true).unwrap();
    controller.write_value(88, false).unwrap();
    assert_eq!(
        controller.bus().accesses,
        [
            Access::Write(in_out_address(0x0050_0000, 89), OUT),
            Access::Write(in_out_address(0x00d0_0000, 88), OUT),
            Access::Write(in_out_address(0x00d0_0000, 88), 0),
        ]
    );
}

#[test]
fn inputs_sample_the_pad() {
    let mut controller = bring_up(Board::Qrb5165Rb5);
    let in_out = in_out_address(0x0f50_0000, 12);

    controller.direction_input(12).unwrap();
    assert_eq!(controller.read_value(12), Ok(false));
    controller.bus_mut().apply_input(in_out, true);
    assert_eq!(controller.read_value(12), Ok(true));

    // Latching a low level does not reach the pad while the output is disabled
    controller.write_value(12, false).unwrap();
    assert_eq!(controller.read_value(12), Ok(true));
    assert_eq!(controller.get_function(12), Ok(Direction::Input));
}

#[test]
fn set_output_latches_the_level_before_enabling_the_buffer() {
    let mut controller = bring_up(Board::Qrb4210Rb2);
    controller.set_output(37, true).unwrap();
    let config = config_address(0x00d0_0000, 37);
    assert_eq!(
        controller.bus().accesses,
        [
            Access::Write(in_out_address(0x00d0_0000, 37), OUT),
            Access::Read(config),
            Access::Write(config, OE),
        ]
    );
    assert_eq!(controller.get_direction(37), Ok(Direction::Output));
    assert_eq!(controller.read_value(37), Ok(true));
}

#[test]
fn rb2_boot_outputs_drive_pins_89_and_37_high() {
    let mut controller = bring_up(Board::Qrb4210Rb2);
    controller.apply_boot_outputs().unwrap();
    for (base, pin) in [(0x0050_0000, 89), (0x00d0_0000, 37)] {
        assert_eq!(controller.bus().register(config_address(base, pin)), OE);
        assert_eq!(controller.bus().register(in_out_address(base, pin)), OUT);
    }
    assert_eq!(controller.bus().accesses.len(), 6);
}

#[test]
fn rb5_has_no_boot_outputs() {
    let mut controller = bring_up(Board::Qrb5165Rb5);
    controller.apply_boot_outputs().unwrap();
    assert!(controller.bus().accesses.is_empty());
}

#[test]
fn host_addresses_are_used_as_supplied() {
    let node = StaticNode {
        compatible: &["qcom,sm6115-pinctrl"],
        reg: &[0x1000_0000, 0x2000_0000, 0x3000_0000],
        properties: &[],
    };
    let mut controller = PinController::probe(&node, FakeTlmm::new()).unwrap();
    assert_eq!(controller.resolver().resolve(89), Ok(0x1000_0000));
    assert_eq!(controller.resolver().base(Tile::South), Some(0x2000_0000));
    assert_eq!(controller.resolver().resolve(0), Ok(0x3000_0000));

    controller.set_direction(3, Direction::Output).unwrap();
    assert_eq!(
        controller.bus().register(config_address(0x3000_0000, 3)),
        OE
    );
}

#[test]
fn probe_reads_the_controller_description() {
    let controller = bring_up(Board::Qrb5165Rb5);
    assert_eq!(controller.info().pin_count, 180);
    assert_eq!(controller.info().bank_label, "soc");
    assert_eq!(controller.resolver().variant(), Variant::Sm8250);

    let node = StaticNode {
        compatible: &["qcom,sm8250-pinctrl"],
        reg: &[0x0f10_0000, 0x0f50_0000, 0x0f90_0000],
        properties: &[("gpio-bank-name", Property::Str("tlmm"))],
    };
    let controller = PinController::probe(&node, FakeTlmm::new()).unwrap();
    assert_eq!(controller.info().pin_count, 0);
    assert_eq!(controller.info().bank_label, "tlmm");
}

#[test]
fn unsupported_variants_are_rejected() {
    let node = StaticNode {
        compatible: &["qcom,sm8350-pinctrl"],
        reg: &[0x0f10_0000, 0x0f50_0000, 0x0f90_0000],
        properties: &[],
    };
    assert_eq!(
        PinController::probe(&node, FakeTlmm::new()).err(),
        Some(Error::UnsupportedVariant)
    );
}

#[test]
fn missing_tile_addresses_are_rejected() {
    let short = StaticNode {
        compatible: &["qcom,sm8250-pinctrl"],
        reg: &[0x0f10_0000, 0x0f50_0000],
        properties: &[],
    };
    assert_eq!(
        PinController::probe(&short, FakeTlmm::new()).err(),
        Some(Error::MissingBaseAddress(Tile::North))
    );

    let sentinel = StaticNode {
        compatible: &["qcom,sm6115-pinctrl"],
        reg: &[0x0050_0000, NO_ADDRESS, 0x00d0_0000],
        properties: &[],
    };
    assert_eq!(
        PinController::probe(&sentinel, FakeTlmm::new()).err(),
        Some(Error::MissingBaseAddress(Tile::South))
    );
}

#[test]
fn pins_past_the_last_gpio_are_never_accessed() {
    let mut controller = bring_up(Board::Qrb4210Rb2);
    assert_eq!(
        controller.set_direction(113, Direction::Output),
        Err(Error::PinOutOfRange(113))
    );
    assert_eq!(controller.read_value(200), Err(Error::PinOutOfRange(200)));
    assert_eq!(controller.set_value(u32::MAX, 1), Err(Error::PinOutOfRange(u32::MAX)));
    assert!(controller.bus().accesses.is_empty());
}

#[test]
fn register_windows_past_the_address_space_are_rejected_at_probe() {
    let node = StaticNode {
        compatible: &["qcom,sm6115-pinctrl"],
        reg: &[0x0050_0000, 0x0090_0000, 0xffff_ffff_ffff_f000],
        properties: &[],
    };
    assert_eq!(
        PinController::probe(&node, FakeTlmm::new()).err(),
        Some(Error::InvalidBaseAddress(Tile::East))
    );
}

#[test]
fn the_bus_outlives_the_controller() {
    let mut controller = bring_up(Board::Qrb5165Rb5);
    controller.set_output(5, true).unwrap();
    let bus = controller.into_bus();
    let base = 0x0f50_0000;
    assert_eq!(bus.register(config_address(base, 5)), OE);
    assert_eq!(bus.register(in_out_address(base, 5)), OUT);
    assert_eq!(bus.accesses.len(), 3);
}
