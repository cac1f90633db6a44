//! Host-supplied configuration of a controller. Hosts describe devices through a key/value source,
//! normally a device tree node; [`StaticNode`] covers boards that describe them in code.

mod device_tree;
pub use device_tree::pin_controller;

/// Read-only view of a host's description of one device
pub trait ConfigSource {
    /// Whether the device lists `compatible` among its compatible strings
    fn is_compatible(&self, compatible: &str) -> bool;

    /// Base address of the device's register region at `index`
    fn address(&self, index: usize) -> Option<u64>;

    /// A 32-bit integer property
    fn u32_property(&self, name: &str) -> Option<u32>;

    /// A string property
    fn str_property(&self, name: &str) -> Option<&str>;
}

/// A property value of a [`StaticNode`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Property<'a> {
    /// 32-bit integer
    U32(u32),
    /// String
    Str(&'a str),
}

/// A device description written out in code
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticNode<'a> {
    /// Compatible strings, most specific first
    pub compatible: &'a [&'a str],
    /// Base addresses of the register regions, by index
    pub reg: &'a [u64],
    /// Named properties
    pub properties: &'a [(&'a str, Property<'a>)],
}

impl StaticNode<'_> {
    /// Looks up a property by name
    fn property(&self, name: &str) -> Option<Property<'_>> {
        self.properties
            .iter()
            .find(|&&(key, _)| key == name)
            .map(|&(_, value)| value)
    }
}

impl ConfigSource for StaticNode<'_> {
    fn is_compatible(&self, compatible: &str) -> bool {
        self.compatible.contains(&compatible)
    }

    fn address(&self, index: usize) -> Option<u64> {
        self.reg.get(index).copied()
    }

    fn u32_property(&self, name: &str) -> Option<u32> {
        match self.property(name)? {
            Property::U32(value) => Some(value),
            Property::Str(_) => None,
        }
    }

    fn str_property(&self, name: &str) -> Option<&str> {
        match self.property(name)? {
            Property::Str(value) => Some(value),
            Property::U32(_) => None,
        }
    }
}

/// What the host's GPIO framework is told about a controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerInfo<'cfg> {
    /// Number of pins advertised to the framework; 0 lets the framework decide
    pub pin_count: u32,
    /// Prefix shown for the controller's pins
    pub bank_label: &'cfg str,
}

impl<'cfg> ControllerInfo<'cfg> {
    /// Property holding the advertised pin count
    pub const PIN_COUNT_PROPERTY: &'static str = "gpio-count";
    /// Property holding the bank label
    pub const BANK_LABEL_PROPERTY: &'static str = "gpio-bank-name";
    /// Label used when the host does not provide one
    pub const DEFAULT_BANK_LABEL: &'static str = "soc";

    /// Reads the description from a host node, defaulting absent values
    pub fn from_source<S: ConfigSource + ?Sized>(source: &'cfg S) -> Self {
        Self {
            pin_count: source.u32_property(Self::PIN_COUNT_PROPERTY).unwrap_or(0),
            bank_label: source
                .str_property(Self::BANK_LABEL_PROPERTY)
                .unwrap_or(Self::DEFAULT_BANK_LABEL),
        }
    }
}
