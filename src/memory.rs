//! Static memory maps handed to the translation-table installer at boot.
//!
//! A map is an ordered, sentinel-terminated array of [`Region`]s. Each region is mapped with a
//! single set of block attributes, encoded the way a stage 1 block descriptor carries them so the
//! installer can OR the attribute word straight into its descriptors.

use bitfield_struct::bitfield;
use derive_more::Display;
use macros::AsBits;

/// Smallest translation granule; every region must be aligned to it
pub const GRANULE_SIZE: u64 = 0x1000;

/// Memory attribute index into `MAIR_EL*`, using the firmware's fixed MAIR layout
#[derive(AsBits, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum MemoryType {
    /// Device memory, non-gathering, non-reordering, no early write acknowledgement
    DeviceNgnrne = 0,
    /// Device memory, non-gathering, non-reordering, early write acknowledgement
    DeviceNgnre = 1,
    /// Device memory, gathering, reordering, early write acknowledgement
    DeviceGre = 2,
    /// Normal memory, non-cacheable
    NormalNc = 3,
    /// Normal memory, write-back cacheable
    Normal = 4,
}

/// Shareability domain of a region
#[derive(AsBits, Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum Shareability {
    /// Non-shareable
    Non = 0b00,
    /// Outer shareable
    Outer = 0b10,
    /// Inner shareable
    Inner = 0b11,
}

/// Block attributes of a region, laid out as in a stage 1 block descriptor. The descriptor type
/// and output address are left clear; the installer fills those in.
#[bitfield(u64)]
#[derive(PartialEq, Eq)]
pub struct Attributes {
    #[bits(2)]
    _descriptor_type: u8,
    /// Index into the memory attribute indirection register
    #[bits(3)]
    pub memory_type: MemoryType,
    /// Non-secure output address
    pub non_secure: bool,
    /// Data access permissions
    #[bits(2)]
    pub access_permissions: u8,
    /// Shareability domain
    #[bits(2)]
    pub shareability: Shareability,
    /// Access flag
    pub access_flag: bool,
    /// Whether TLB entries are tied to the current ASID
    pub not_global: bool,
    #[bits(41)]
    _output_address: u64,
    /// Privileged execute-never
    pub privileged_execute_never: bool,
    /// Unprivileged execute-never
    pub execute_never: bool,
    #[bits(9)]
    _software: u16,
}

impl Attributes {
    /// Strongly-ordered device memory that can never be executed
    pub const DEVICE: Self = Self::new()
        .with_memory_type(MemoryType::DeviceNgnrne)
        .with_shareability(Shareability::Non)
        .with_privileged_execute_never(true)
        .with_execute_never(true);

    /// Cacheable RAM shared across the inner domain
    pub const NORMAL: Self = Self::new()
        .with_memory_type(MemoryType::Normal)
        .with_shareability(Shareability::Inner);
}

/// An address range descriptor: a contiguous virtual range mapped onto a contiguous physical
/// range with one set of attributes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    /// Start of the range in the virtual address space
    pub virtual_base: u64,
    /// Start of the range in the physical address space
    pub physical_base: u64,
    /// Length of the range in bytes
    pub size: u64,
    /// Attributes applied to the whole range
    pub attributes: Attributes,
}

impl Region {
    /// All-zero entry marking the end of a map
    pub const SENTINEL: Self = Self {
        virtual_base: 0,
        physical_base: 0,
        size: 0,
        attributes: Attributes::new(),
    };

    /// Creates a region whose virtual addresses equal its physical addresses
    #[must_use]
    pub const fn identity(base: u64, size: u64, attributes: Attributes) -> Self {
        Self {
            virtual_base: base,
            physical_base: base,
            size,
            attributes,
        }
    }

    /// Whether this is the terminating entry
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.virtual_base == 0
            && self.physical_base == 0
            && self.size == 0
            && self.attributes.into_bits() == 0
    }

    /// Exclusive end of the physical range, or `None` if it would wrap
    #[must_use]
    pub const fn physical_end(&self) -> Option<u64> {
        self.physical_base.checked_add(self.size)
    }

    /// Exclusive end of the virtual range, or `None` if it would wrap
    #[must_use]
    pub const fn virtual_end(&self) -> Option<u64> {
        self.virtual_base.checked_add(self.size)
    }

    /// Whether the physical address falls inside this region
    #[must_use]
    pub const fn contains(&self, physical: u64) -> bool {
        physical >= self.physical_base && physical - self.physical_base < self.size
    }
}

/// Ways a memory map can be malformed. Indices refer to positions in the backing array.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq)]
pub enum MapError {
    /// The array does not end with [`Region::SENTINEL`]
    #[display(fmt = "memory map is not terminated by a sentinel")]
    MissingSentinel,
    /// A region before the sentinel has zero size
    #[display(fmt = "region {} is empty", _0)]
    EmptyRegion(usize),
    /// A region's bases or size are not granule aligned
    #[display(fmt = "region {} is not aligned to the translation granule", _0)]
    Misaligned(usize),
    /// A region extends past the end of the address space
    #[display(fmt = "region {} wraps around the address space", _0)]
    Overflow(usize),
    /// Two regions share virtual or physical addresses
    #[display(fmt = "regions {} and {} overlap", _0, _1)]
    Overlap(usize, usize),
}

/// A sentinel-terminated memory map
#[derive(Clone, Copy, Debug)]
pub struct MemoryMap {
    /// Descriptors, including the sentinel
    entries: &'static [Region],
}

impl MemoryMap {
    /// Wraps a sentinel-terminated array of descriptors
    #[must_use]
    pub const fn new(entries: &'static [Region]) -> Self {
        Self { entries }
    }

    /// The raw descriptor array, sentinel included, in the shape the installer walks it
    #[must_use]
    pub const fn entries(&self) -> &'static [Region] {
        self.entries
    }

    /// Iterates the regions in order, stopping at the sentinel
    pub fn regions(&self) -> impl Iterator<Item = &'static Region> {
        self.entries
            .iter()
            .take_while(|region| !region.is_sentinel())
    }

    /// Finds the region that maps the given physical address
    #[must_use]
    pub fn find(&self, physical: u64) -> Option<&'static Region> {
        self.regions().find(|region| region.contains(physical))
    }

    /// Checks that the map is well formed: terminated by a sentinel, with non-empty,
    /// granule-aligned regions that overlap neither virtually nor physically
    ///
    /// # Errors
    ///
    /// Returns the first problem found
    pub fn validate(&self) -> Result<(), MapError> {
        let Some((last, regions)) = self.entries.split_last() else {
            return Err(MapError::MissingSentinel);
        };
        if !last.is_sentinel() {
            return Err(MapError::MissingSentinel);
        }

        for (index, region) in regions.iter().enumerate() {
            if region.size == 0 {
                return Err(MapError::EmptyRegion(index));
            }
            if region.virtual_base % GRANULE_SIZE != 0
                || region.physical_base % GRANULE_SIZE != 0
                || region.size % GRANULE_SIZE != 0
            {
                return Err(MapError::Misaligned(index));
            }
            let (Some(virtual_end), Some(physical_end)) =
                (region.virtual_end(), region.physical_end())
            else {
                return Err(MapError::Overflow(index));
            };

            for (other_index, other) in regions.iter().enumerate().skip(index + 1) {
                let disjoint = |start: u64, end: u64, other_start: u64, other_end: Option<u64>| {
                    other_end.map_or(other_start >= end, |other_end| {
                        end <= other_start || other_end <= start
                    })
                };
                if !disjoint(
                    region.virtual_base,
                    virtual_end,
                    other.virtual_base,
                    other.virtual_end(),
                ) || !disjoint(
                    region.physical_base,
                    physical_end,
                    other.physical_base,
                    other.physical_end(),
                ) {
                    return Err(MapError::Overlap(index, other_index));
                }
            }
        }
        Ok(())
    }
}
