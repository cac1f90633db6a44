//! Flattened device tree nodes as a configuration source

use super::ConfigSource;
use crate::gpio::Variant;
use fdt::{node::FdtNode, Fdt};

impl ConfigSource for FdtNode<'_, '_> {
    fn is_compatible(&self, compatible: &str) -> bool {
        self.compatible()
            .is_some_and(|list| list.all().any(|entry| entry == compatible))
    }

    fn address(&self, index: usize) -> Option<u64> {
        let region = self.reg()?.nth(index)?;
        #[expect(
            clippy::as_conversions,
            reason = "The parser hands out addresses as pointers"
        )]
        let address = region.starting_address as usize;
        u64::try_from(address).ok()
    }

    fn u32_property(&self, name: &str) -> Option<u32> {
        u32::try_from(self.property(name)?.as_usize()?).ok()
    }

    fn str_property(&self, name: &str) -> Option<&str> {
        self.property(name)?.as_str()
    }
}

/// Finds the first node in the tree compatible with a supported pin controller
pub fn pin_controller<'b, 'a>(tree: &'b Fdt<'a>) -> Option<FdtNode<'b, 'a>> {
    let compatibles = Variant::ALL.map(|variant| variant.layout().compatible);
    tree.find_compatible(&compatibles)
}
