use serde::{Deserialize, Serialize};

use crate::{ObjectType, SourceGame, Version};

/// Format version of the repository index.
/// An index with another version is discarded and rebuilt.
pub const INDEX_VERSION: u16 = 1;

/// Root structure of a repository index file.
#[derive(Clone, Serialize, Deserialize)]
pub struct IndexFile {
    /// Snapshot of the scanned directories, used to detect a stale index.
    pub header: IndexHeader,
    /// Objects found in the scanned directories.
    pub items:  Vec<IndexItem>,
}

/// Summary of the object directories at the time the index was written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexHeader {
    /// Must equal [`INDEX_VERSION`].
    pub version:           u16,
    /// Locale that object names were resolved in.
    pub language:          String,
    /// Number of object files found.
    pub file_count:        u32,
    /// Sum of the sizes of all object files.
    pub total_size:        u64,
    /// Checksum over the modification times of all object files.
    pub modified_checksum: u32,
    /// Checksum over the paths of all object files.
    pub path_checksum:     u32,
}

/// An object known to the repository.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexItem {
    /// Type of the object.
    pub object_type:  ObjectType,
    /// Textual identifier, or the trimmed legacy name for legacy objects.
    pub identifier:   String,
    /// Legacy entry, if the object has a legacy identity.
    pub legacy_entry: Option<LegacyEntryRecord>,
    /// Version of the object.
    pub version:      Version,
    /// Path of the object file.
    pub path:         String,
    /// Display name in the index language.
    pub name:         String,
    /// Source games of the object.
    pub source_games: Vec<SourceGame>,
    /// Authors of the object.
    pub authors:      Vec<String>,
}

/// Serialized form of a legacy object entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyEntryRecord {
    /// Type and source game nibbles.
    pub flags:    u32,
    /// Space-padded legacy name.
    pub name:     [u8; 8],
    /// Legacy checksum.
    pub checksum: u32,
}
