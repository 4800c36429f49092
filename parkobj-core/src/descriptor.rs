//! Identity of objects.

use std::fmt;

use store::{ObjectType, OriginalId, SourceGame, Version};

use crate::stream::{self, Stream};

#[cfg(test)]
mod tests;

/// Length of the space-padded legacy name.
pub const LEGACY_NAME_LEN: usize = 8;

const CHECKSUM_SEED: u32 = 0xF369_A75B;

/// The 16-byte header of a legacy object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegacyEntry {
    /// Type code in the low nibble, source game code in the next nibble.
    pub flags:    u32,
    pub name:     [u8; LEGACY_NAME_LEN],
    pub checksum: u32,
}

impl LegacyEntry {
    pub const LEN: usize = 16;

    /// Creates an entry with the name padded with spaces (or truncated) to 8 bytes.
    #[must_use]
    pub fn new(object_type: ObjectType, source_game: SourceGame, name: &str, checksum: u32) -> Self {
        let type_code = object_type.legacy_code().unwrap_or(0x0F);
        let flags = u32::from(type_code) | (u32::from(source_game.legacy_code()) << 4);
        let mut entry = Self { flags, name: [b' '; LEGACY_NAME_LEN], checksum };
        entry.set_name(name);
        entry
    }

    pub fn read(stream: &mut Stream<'_>) -> stream::Result<Self> {
        Ok(Self {
            flags:    stream.read_u32()?,
            name:     stream.read_array()?,
            checksum: stream.read_u32()?,
        })
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut out = [0; Self::LEN];
        out[..4].copy_from_slice(&self.flags.to_le_bytes());
        out[4..12].copy_from_slice(&self.name);
        out[12..].copy_from_slice(&self.checksum.to_le_bytes());
        out
    }

    #[must_use]
    pub fn type_code(&self) -> u8 { (self.flags & 0x0F) as u8 }

    /// Returns `None` for the unused type codes 11 to 15.
    #[must_use]
    pub fn object_type(&self) -> Option<ObjectType> { ObjectType::from_legacy_code(self.type_code()) }

    #[must_use]
    pub fn source_game(&self) -> SourceGame {
        SourceGame::from_legacy_code(((self.flags & 0xF0) >> 4) as u8)
    }

    /// The name with the trailing padding removed.
    #[must_use]
    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.name).trim_end_matches([' ', '\0']).to_string()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = [b' '; LEGACY_NAME_LEN];
        for (dest, &src) in self.name.iter_mut().zip(name.as_bytes()) {
            *dest = src;
        }
    }

    /// An unused slot in a legacy entry list is filled with `0xFF`.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.to_bytes().iter().all(|&b| b == 0xFF) }

    /// Compares two entries by type and name, ignoring source game and checksum.
    #[must_use]
    pub fn same_object(&self, other: &Self) -> bool {
        self.type_code() == other.type_code() && self.name == other.name
    }

    #[must_use]
    pub fn to_record(&self) -> store::LegacyEntryRecord {
        store::LegacyEntryRecord { flags: self.flags, name: self.name, checksum: self.checksum }
    }

    #[must_use]
    pub fn from_record(record: &store::LegacyEntryRecord) -> Self {
        Self { flags: record.flags, name: record.name, checksum: record.checksum }
    }

    #[must_use]
    pub fn from_original_id(id: &OriginalId) -> Self {
        Self { flags: id.flags, name: id.name, checksum: id.checksum }
    }

    #[must_use]
    pub fn to_original_id(&self) -> OriginalId {
        OriginalId { flags: self.flags, name: self.name, checksum: self.checksum }
    }
}

impl fmt::Display for LegacyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_original_id())
    }
}

/// Computes the checksum of a legacy object from its entry and decoded chunk.
#[must_use]
pub fn checksum(entry: &LegacyEntry, data: &[u8]) -> u32 {
    let step = |sum: u32, byte: u8| (sum ^ u32::from(byte)).rotate_left(11);
    let sum = step(CHECKSUM_SEED, entry.flags as u8);
    let sum = entry.name.iter().fold(sum, |sum, &byte| step(sum, byte));
    data.iter().fold(sum, |sum, &byte| step(sum, byte))
}

/// Number of bytes [`checksum_salt`] appends. Fewer bytes cannot reach every checksum bit.
pub const CHECKSUM_SALT_LEN: usize = 11;

/// Returns bytes that, appended to `data`, make its checksum equal `entry.checksum`.
///
/// Each data byte is rotated by a multiple of 11 bits before it reaches the final sum,
/// so every checksum bit can be flipped by exactly one bit of the salt.
#[must_use]
pub fn checksum_salt(entry: &LegacyEntry, data: &[u8]) -> [u8; CHECKSUM_SALT_LEN] {
    let rotation = |index: usize| (11 * (CHECKSUM_SALT_LEN - index) % 32) as u32;

    let unsalted = checksum(entry, data).rotate_left(rotation(0));
    let flip = unsalted ^ entry.checksum;

    let mut salt = [0; CHECKSUM_SALT_LEN];
    for bit in (0..32).filter(|bit| flip & (1 << bit) != 0) {
        let slot = (0..CHECKSUM_SALT_LEN)
            .flat_map(|index| (0..8).map(move |shift| (index, shift)))
            .find(|&(index, shift)| (rotation(index) + shift) % 32 == bit);
        if let Some((index, shift)) = slot {
            salt[index] |= 1 << shift;
        }
    }
    salt
}

/// How an object is identified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identity {
    /// The 16-byte entry of a legacy object.
    Legacy(LegacyEntry),
    /// A dotted textual identifier, e.g. `rct2.scenery_small.tl0`.
    Textual(String),
}

impl Identity {
    /// Whether this identity refers to the same object as `other`.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Legacy(a), Self::Legacy(b)) => a.same_object(b),
            (Self::Textual(a), Self::Textual(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy(entry) => write!(f, "{}", entry.name()),
            Self::Textual(id) => f.write_str(id),
        }
    }
}

/// Type, identity and version of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectDescriptor {
    pub object_type: ObjectType,
    pub identity:    Identity,
    pub version:     Version,
}

impl ObjectDescriptor {
    /// Returns `None` if the entry has an unused type code.
    #[must_use]
    pub fn from_legacy(entry: LegacyEntry) -> Option<Self> {
        Some(Self {
            object_type: entry.object_type()?,
            identity:    Identity::Legacy(entry),
            version:     Version::default(),
        })
    }

    #[must_use]
    pub fn from_identifier(object_type: ObjectType, identifier: impl Into<String>) -> Self {
        Self {
            object_type,
            identity: Identity::Textual(identifier.into()),
            version: Version::default(),
        }
    }

    #[must_use]
    pub fn legacy_entry(&self) -> Option<&LegacyEntry> {
        match &self.identity {
            Identity::Legacy(entry) => Some(entry),
            Identity::Textual(_) => None,
        }
    }

    /// The textual identifier, or the trimmed legacy name.
    #[must_use]
    pub fn name(&self) -> String { self.identity.to_string() }
}

impl fmt::Display for ObjectDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identity, self.object_type.name())
    }
}
