//! A register-level model of the TLMM used in place of real MMIO

#![allow(dead_code)]

use snapdragon::gpio::{Bus, IN_OUT_OFFSET, REGISTER_STRIDE};
use std::collections::BTreeMap;

/// Output enable bit of the configuration register
pub const OE: u32 = 1 << 9;
/// Input bit of the in/out register
pub const IN: u32 = 1 << 0;
/// Output bit of the in/out register
pub const OUT: u32 = 1 << 1;

/// One bus transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Read(usize),
    Write(usize, u32),
}

/// Behaves like the pads behind a TLMM: the input bit of an in/out register follows the output
/// bit while the pin's output is enabled, and the externally applied level otherwise. Writes to
/// the input bit are ignored. Assumes tile bases are aligned to the register stride.
#[derive(Debug, Default)]
pub struct FakeTlmm {
    registers: BTreeMap<usize, u32>,
    external: BTreeMap<usize, bool>,
    pub accesses: Vec<Access>,
}

impl FakeTlmm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a register's power-on value without logging an access
    pub fn preload(&mut self, address: usize, value: u32) {
        self.registers.insert(address, value);
    }

    /// The stored value of a register
    pub fn register(&self, address: usize) -> u32 {
        self.registers.get(&address).copied().unwrap_or(0)
    }

    /// Drives a level onto the pad behind an in/out register from outside the chip
    pub fn apply_input(&mut self, in_out: usize, level: bool) {
        self.external.insert(in_out, level);
    }
}

fn is_in_out(address: usize) -> bool {
    address % REGISTER_STRIDE == IN_OUT_OFFSET
}

impl Bus for FakeTlmm {
    fn read32(&mut self, address: usize) -> u32 {
        self.accesses.push(Access::Read(address));
        let stored = self.register(address);
        if !is_in_out(address) {
            return stored;
        }
        let level = if self.register(address - IN_OUT_OFFSET) & OE != 0 {
            stored & OUT != 0
        } else {
            self.external.get(&address).copied().unwrap_or(false)
        };
        (stored & !IN) | u32::from(level)
    }

    fn write32(&mut self, address: usize, value: u32) {
        self.accesses.push(Access::Write(address, value));
        let value = if is_in_out(address) { value & !IN } else { value };
        self.registers.insert(address, value);
    }
}

/// Address of a pin's configuration register
pub fn config_address(base: usize, pin: u32) -> usize {
    base + usize::try_from(pin).unwrap() * REGISTER_STRIDE
}

/// Address of a pin's in/out register
pub fn in_out_address(base: usize, pin: u32) -> usize {
    config_address(base, pin) + IN_OUT_OFFSET
}
