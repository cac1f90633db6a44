//! Register-level access to the pins of a TLMM controller

use super::{Bus, Direction, Error, GpioOps, PinResolver, TileAddresses, Variant};
use crate::config::{ConfigSource, ControllerInfo};
use tock_registers::{register_bitfields, LocalRegisterCopy};

/// Distance between the register blocks of consecutive pins
pub const REGISTER_STRIDE: usize = 0x1000;
/// Offset of the input/output register within a pin's register block. The configuration register
/// sits at offset 0.
pub const IN_OUT_OFFSET: usize = 0x4;

/// Offset of a pin's configuration register from its tile base
fn config_offset(pin: u32) -> Option<usize> {
    usize::try_from(pin).ok()?.checked_mul(REGISTER_STRIDE)
}

/// Offset of the last byte of a pin's registers from its tile base
pub(super) fn last_register_byte(pin: u32) -> Option<usize> {
    config_offset(pin)?.checked_add(IN_OUT_OFFSET + core::mem::size_of::<u32>() - 1)
}

register_bitfields! {
    u32,
    /// Pin configuration register. Besides the output enable it holds the pull, function select
    /// and drive strength fields, which must survive direction changes.
    CFG [
        /// Output enable
        OE OFFSET(9) NUMBITS(1) [
            Input = 0,
            Output = 1,
        ],
    ],
    /// Pin input/output register
    IN_OUT [
        /// Level sampled on the pad
        IN OFFSET(0) NUMBITS(1) [],
        /// Level driven when the output is enabled
        OUT OFFSET(1) NUMBITS(1) [],
    ],
}

/// A brought-up pin controller. Owns the bus its registers are reached through; every tile
/// address was validated when the controller was created, so operations only fail for pins the
/// controller does not have.
#[derive(Debug)]
pub struct PinController<'cfg, B> {
    /// Routes pins to their tile
    resolver: PinResolver,
    /// Host-facing description of the controller
    info: ControllerInfo<'cfg>,
    /// Register access
    bus: B,
}

impl<'cfg, B: Bus> PinController<'cfg, B> {
    /// Wraps an already-validated resolver
    pub const fn new(resolver: PinResolver, info: ControllerInfo<'cfg>, bus: B) -> Self {
        Self {
            resolver,
            info,
            bus,
        }
    }

    /// Brings up the controller a host configuration node describes: identifies the variant,
    /// resolves every tile address once, and reads the controller's description
    ///
    /// # Errors
    ///
    /// * [`Error::UnsupportedVariant`] if the node names no supported controller
    /// * [`Error::MissingBaseAddress`] or [`Error::InvalidBaseAddress`] if a tile address is
    ///   unusable
    pub fn probe<S: ConfigSource + ?Sized>(source: &'cfg S, bus: B) -> Result<Self, Error> {
        let variant = Variant::detect(source).inspect_err(|error| {
            log::error!("gpio: {error}");
        })?;
        let addresses = TileAddresses::from_source(variant, source);
        let resolver = PinResolver::new(variant, &addresses).inspect_err(|error| {
            log::error!("gpio: {variant}: {error}");
        })?;
        for &tile in variant.layout().tiles {
            if let Some(base) = resolver.base(tile) {
                log::debug!("gpio: {variant} {tile} tile at {base:#x}");
            }
        }
        let info = ControllerInfo::from_source(source);
        log::debug!(
            "gpio: bank {:?} with {} pins",
            info.bank_label,
            info.pin_count
        );
        Ok(Self::new(resolver, info, bus))
    }

    /// The resolver routing this controller's pins
    pub const fn resolver(&self) -> &PinResolver {
        &self.resolver
    }

    /// The host-facing description of this controller
    pub const fn info(&self) -> &ControllerInfo<'cfg> {
        &self.info
    }

    /// The bus the registers are reached through
    pub const fn bus(&self) -> &B {
        &self.bus
    }

    /// Mutable access to the bus for diagnostics and test harnesses, such as preloading register
    /// contents. Accesses made through it are not routed or range checked.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Tears the controller down, handing back its bus
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Address of the configuration register of `pin`
    fn config_register(&self, pin: u32) -> Result<usize, Error> {
        let base = self.resolver.resolve(pin)?;
        config_offset(pin)
            .and_then(|offset| base.checked_add(offset))
            .ok_or(Error::PinOutOfRange(pin))
    }

    /// Address of the input/output register of `pin`
    fn in_out_register(&self, pin: u32) -> Result<usize, Error> {
        self.config_register(pin)?
            .checked_add(IN_OUT_OFFSET)
            .ok_or(Error::PinOutOfRange(pin))
    }

    /// Enables or disables the output buffer of `pin`, leaving the rest of its configuration as is
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn set_direction(&mut self, pin: u32, direction: Direction) -> Result<(), Error> {
        let address = self.config_register(pin)?;
        let mut cfg = LocalRegisterCopy::<u32, CFG::Register>::new(self.bus.read32(address));
        cfg.modify(match direction {
            Direction::Input => CFG::OE::Input,
            Direction::Output => CFG::OE::Output,
        });
        log::trace!("gpio: pin {pin} {direction}, cfg {address:#x} <- {:#x}", cfg.get());
        self.bus.write32(address, cfg.get());
        Ok(())
    }

    /// Reports whether the output buffer of `pin` is enabled
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn get_direction(&mut self, pin: u32) -> Result<Direction, Error> {
        let address = self.config_register(pin)?;
        let cfg = LocalRegisterCopy::<u32, CFG::Register>::new(self.bus.read32(address));
        Ok(if cfg.is_set(CFG::OE) {
            Direction::Output
        } else {
            Direction::Input
        })
    }

    /// Sets the level `pin` drives while its output buffer is enabled
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn write_value(&mut self, pin: u32, value: bool) -> Result<(), Error> {
        let address = self.in_out_register(pin)?;
        let mut in_out = LocalRegisterCopy::<u32, IN_OUT::Register>::new(0);
        in_out.write(IN_OUT::OUT.val(u32::from(value)));
        log::trace!("gpio: pin {pin} out {address:#x} <- {:#x}", in_out.get());
        self.bus.write32(address, in_out.get());
        Ok(())
    }

    /// Samples the level on `pin`
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn read_value(&mut self, pin: u32) -> Result<bool, Error> {
        let address = self.in_out_register(pin)?;
        let in_out = LocalRegisterCopy::<u32, IN_OUT::Register>::new(self.bus.read32(address));
        Ok(in_out.is_set(IN_OUT::IN))
    }

    /// Turns `pin` into an output driving `value`. The level is latched before the output buffer
    /// is enabled so the pad never drives a stale level.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if the controller has no such pin
    pub fn set_output(&mut self, pin: u32, value: bool) -> Result<(), Error> {
        self.write_value(pin, value)?;
        self.set_direction(pin, Direction::Output)
    }

    /// Drives the pins the board needs driven at bring-up
    ///
    /// # Errors
    ///
    /// Returns [`Error::PinOutOfRange`] if a listed pin does not exist on this controller
    pub fn apply_boot_outputs(&mut self) -> Result<(), Error> {
        let variant = self.resolver.variant();
        for &(pin, value) in variant.layout().boot_outputs {
            log::debug!("gpio: {variant}: driving pin {pin} {}", u8::from(value));
            self.set_output(pin, value)?;
        }
        Ok(())
    }
}

impl<B: Bus> GpioOps for PinController<'_, B> {
    fn direction_input(&mut self, pin: u32) -> Result<(), Error> {
        self.set_direction(pin, Direction::Input)
    }

    fn direction_output(&mut self, pin: u32, value: i32) -> Result<(), Error> {
        self.set_output(pin, value != 0)
    }

    fn get_value(&mut self, pin: u32) -> Result<i32, Error> {
        self.read_value(pin).map(i32::from)
    }

    fn set_value(&mut self, pin: u32, value: i32) -> Result<(), Error> {
        self.write_value(pin, value != 0)
    }

    fn get_function(&mut self, pin: u32) -> Result<Direction, Error> {
        self.get_direction(pin)
    }
}
