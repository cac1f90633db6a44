//! Board support for Qualcomm Snapdragon boards during early boot: the static memory map handed
//! to the translation-table installer, and a driver for the TLMM pin controller's GPIOs.
//!
//! The GPIO driver is split into a [`gpio::PinResolver`], which decides once per controller which
//! register tile governs each pin, and a [`gpio::PinController`], which performs the 32-bit
//! register accesses through a [`gpio::Bus`].

#![cfg_attr(not(test), no_std)]
#![warn(clippy::complexity)]
#![deny(clippy::correctness)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]
#![warn(clippy::style)]
#![deny(clippy::suspicious)]
#![warn(clippy::as_conversions)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![deny(unsafe_op_in_unsafe_fn)]
#![expect(clippy::module_name_repetitions, reason = "Desired format")]

pub mod board;
pub mod config;
pub mod gpio;
pub mod memory;
pub mod pinctrl;
