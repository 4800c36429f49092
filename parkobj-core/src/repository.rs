//! Index of the object files found in the configured directories.
//!
//! Scanning reads every object without images, which is slow for large collections,
//! so the index is cached on disk and reused while the directories are unchanged.

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;
use std::{fs, io};

use bevy::ecs::resource::Resource;
use store::{INDEX_VERSION, IndexFile, IndexHeader, IndexItem, SourceGame};

use crate::chunk::{self, Encoding};
use crate::config::LoaderConfig;
use crate::context::ObjectLookup;
use crate::descriptor::{self, Identity, LEGACY_NAME_LEN, LegacyEntry, ObjectDescriptor};
use crate::factory::{self, Factory};
use crate::object::Object;
use crate::stream::Stream;
use crate::util::{has_extension, try_log};


/// File extensions recognized as object files.
pub const OBJECT_EXTENSIONS: [&str; 3] = ["dat", "json", "parkobj"];

const ZSTD_LEVEL: i32 = 3;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Object files found by a directory query, with a summary used to detect a stale index.
#[derive(Debug, Default)]
pub struct Query {
    pub files:  Vec<PathBuf>,
    pub header: IndexHeader,
}

impl Query {
    /// Lists the object files under `directories`, recursing into subdirectories.
    ///
    /// A directory that cannot be read is skipped.
    #[must_use]
    pub fn run(directories: &[PathBuf], language: &str) -> Self {
        let mut query = Self {
            files:  Vec::new(),
            header: IndexHeader {
                version: INDEX_VERSION,
                language: language.to_string(),
                ..IndexHeader::default()
            },
        };
        for dir in directories {
            if let Err(err) = query.visit(dir) {
                bevy::log::debug!("Cannot read object directory {}: {err}", dir.display());
            }
        }
        query
    }

    fn visit(&mut self, dir: &Path) -> io::Result<()> {
        let mut entries =
            fs::read_dir(dir)?.map(|entry| entry.map(|e| e.path())).collect::<io::Result<Vec<_>>>()?;
        entries.sort();

        for path in entries {
            if path.is_dir() {
                if let Err(err) = self.visit(&path) {
                    bevy::log::debug!("Cannot read object directory {}: {err}", path.display());
                }
            } else if OBJECT_EXTENSIONS.iter().any(|ext| has_extension(&path, ext)) {
                self.add_file(path);
            }
        }
        Ok(())
    }

    fn add_file(&mut self, path: PathBuf) {
        self.header.file_count += 1;
        self.header.path_checksum =
            self.header.path_checksum.wrapping_add(path_checksum(&path.to_string_lossy()));

        let metadata = try_log!(fs::metadata(&path), expect "Cannot stat {}" (path.display()) or {
            self.files.push(path);
            return;
        });
        self.header.total_size += metadata.len();
        let modified = metadata
            .modified()
            .ok()
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map_or(0, |duration| duration.as_secs());
        let folded = (modified as u32) ^ ((modified >> 32) as u32);
        self.header.modified_checksum = self.header.modified_checksum.wrapping_add(folded);

        self.files.push(path);
    }
}

/// One-at-a-time hash of a path.
fn path_checksum(path: &str) -> u32 {
    let mut hash = 0xD843_0DEDu32;
    for byte in path.bytes() {
        hash = hash.wrapping_add(u32::from(byte));
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash.wrapping_add(hash << 15)
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Key {
    Legacy([u8; LEGACY_NAME_LEN]),
    Textual(String),
}

impl Key {
    fn of(item: &IndexItem) -> Self {
        match &item.legacy_entry {
            Some(record) => Self::Legacy(record.name),
            None => Self::Textual(item.identifier.clone()),
        }
    }

    fn of_identity(identity: &Identity) -> Self {
        match identity {
            Identity::Legacy(entry) => Self::Legacy(entry.name),
            Identity::Textual(id) => Self::Textual(id.clone()),
        }
    }
}

/// The objects available on disk.
#[derive(Debug, Default, Resource)]
pub struct Repository {
    language:      String,
    header:        IndexHeader,
    items:         Vec<IndexItem>,
    by_key:        HashMap<Key, usize>,
    by_identifier: HashMap<String, usize>,
    conflicts:     usize,
}

impl Repository {
    /// Reuses the index cache if it matches the directories, otherwise scans them
    /// and rewrites the cache.
    #[must_use]
    pub fn load_or_construct(config: &LoaderConfig) -> Self {
        let query = Query::run(&config.object_directories, &config.language);

        if let Some(index_path) = &config.index_path {
            match read_index(index_path, &query.header) {
                Ok(Some(index)) => {
                    bevy::log::debug!(
                        "Loaded {} objects from index {}",
                        index.items.len(),
                        index_path.display()
                    );
                    return Self::from_index(&config.language, index);
                }
                Ok(None) => bevy::log::info!("Object repository is out of date."),
                Err(err) => {
                    bevy::log::debug!("Cannot read index {}: {err}", index_path.display());
                }
            }
        }

        let repo = Self::scan(config, query);
        repo.save(config);
        repo
    }

    /// Scans the directories and rewrites the cache, ignoring any existing index.
    #[must_use]
    pub fn construct(config: &LoaderConfig) -> Self {
        let query = Query::run(&config.object_directories, &config.language);
        let repo = Self::scan(config, query);
        repo.save(config);
        repo
    }

    /// Reads every file of `query` without images and indexes the valid objects.
    #[must_use]
    pub fn scan(config: &LoaderConfig, query: Query) -> Self {
        bevy::log::info!("Scanning {} objects...", query.files.len());
        let factory = Factory::new(config);

        let mut repo =
            Self { language: config.language.clone(), header: query.header, ..Self::default() };
        for path in &query.files {
            if let Some(object) = factory.create_object_from_file(path, false) {
                let item = index_item(&object, path, &config.language);
                repo.add_item(item);
            }
        }
        repo.sort_items();

        if repo.conflicts > 0 {
            bevy::log::warn!("{} object conflicts found.", repo.conflicts);
        }
        repo
    }

    fn from_index(language: &str, index: IndexFile) -> Self {
        let mut repo =
            Self { language: language.to_string(), header: index.header, ..Self::default() };
        for item in index.items {
            repo.add_item(item);
        }
        repo.sort_items();
        repo
    }

    fn save(&self, config: &LoaderConfig) {
        let Some(index_path) = &config.index_path else { return };
        try_log!(
            self.write_index(index_path),
            expect "Unable to write object repository index to {}" (index_path.display())
            or return
        );
    }

    /// Adds an item unless an object with the same identity is already known.
    ///
    /// Returns whether the item was added.
    pub fn add_item(&mut self, item: IndexItem) -> bool {
        let key = Key::of(&item);
        if let Some(&existing) = self.by_key.get(&key) {
            self.conflicts += 1;
            bevy::log::warn!("Object conflict: '{}'", self.items[existing].path);
            bevy::log::warn!("               : '{}'", item.path);
            return false;
        }

        let index = self.items.len();
        self.by_key.insert(key, index);
        self.by_identifier.entry(item.identifier.clone()).or_insert(index);
        self.items.push(item);
        true
    }

    fn sort_items(&mut self) {
        self.items.sort_by(|a, b| a.name.cmp(&b.name));
        self.by_key.clear();
        self.by_identifier.clear();
        for (index, item) in self.items.iter().enumerate() {
            self.by_key.insert(Key::of(item), index);
            self.by_identifier.entry(item.identifier.clone()).or_insert(index);
        }
    }

    /// All known objects, sorted by name.
    #[must_use]
    pub fn items(&self) -> &[IndexItem] { &self.items }

    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    /// Number of files skipped because another file had the same identity.
    #[must_use]
    pub fn conflicts(&self) -> usize { self.conflicts }

    #[must_use]
    pub fn language(&self) -> &str { &self.language }

    /// Summary of the directories this repository was built from.
    #[must_use]
    pub fn header(&self) -> &IndexHeader { &self.header }

    /// Finds an object by identity. Legacy identities match by name regardless of
    /// checksum and source game. Textual identities also match objects that carry
    /// a legacy identity, such as manifests with an `originalId`.
    #[must_use]
    pub fn find(&self, descriptor: &ObjectDescriptor) -> Option<&IndexItem> {
        let key = Key::of_identity(&descriptor.identity);
        let index = match (self.by_key.get(&key), &descriptor.identity) {
            (Some(&index), _) => index,
            (None, Identity::Textual(id)) => *self.by_identifier.get(id)?,
            (None, Identity::Legacy(_)) => return None,
        };
        let item = &self.items[index];
        (item.object_type == descriptor.object_type).then_some(item)
    }

    /// Finds a legacy object by name, padded with spaces to 8 bytes.
    #[must_use]
    pub fn find_legacy(&self, name: &str) -> Option<&IndexItem> {
        let mut entry = LegacyEntry { flags: 0, name: [b' '; LEGACY_NAME_LEN], checksum: 0 };
        entry.set_name(name);
        let &index = self.by_key.get(&Key::Legacy(entry.name))?;
        Some(&self.items[index])
    }

    /// Finds an object by textual identifier or trimmed legacy name.
    #[must_use]
    pub fn find_identifier(&self, identifier: &str) -> Option<&IndexItem> {
        let &index = self.by_identifier.get(identifier)?;
        Some(&self.items[index])
    }

    /// Installs a legacy record, such as one packed into a saved park, as a new `.DAT` file
    /// in `dir` and indexes it.
    ///
    /// Returns `None` if an object with the same name is already known.
    /// A record whose checksum does not match its entry is salted until it does.
    pub fn add_object(
        &mut self,
        config: &LoaderConfig,
        dir: &Path,
        entry: LegacyEntry,
        data: &[u8],
    ) -> Result<Option<PathBuf>> {
        let name = entry.name();
        if self.by_key.contains_key(&Key::Legacy(entry.name)) {
            bevy::log::debug!("[{name}] Object is already installed.");
            return Ok(None);
        }

        let mut data = data.to_vec();
        if descriptor::checksum(&entry, &data) != entry.checksum {
            bevy::log::debug!("[{name}] Incorrect checksum, adding salt bytes...");
            let salt = descriptor::checksum_salt(&entry, &data);
            data.extend_from_slice(&salt);
        }

        let object = Factory::new(config)
            .try_create_object_from_legacy_data(entry, &data, false)
            .map_err(Error::Object)?;

        fs::create_dir_all(dir).map_err(Error::Io)?;
        let path = new_object_path(dir, &name);
        let mut bytes = entry.to_bytes().to_vec();
        bytes.extend(chunk::write(Encoding::RleCompressed, &data));
        fs::write(&path, bytes).map_err(Error::Io)?;
        bevy::log::debug!("Adding object: [{name}] as {}", path.display());

        let item = index_item(&object, &path, &self.language);
        self.add_item(item);
        self.sort_items();
        Ok(Some(path))
    }

    /// Writes the entry and chunk of each custom legacy object in `entries`,
    /// the layout in which saved parks carry their objects.
    ///
    /// Objects of the original games and their expansions are skipped.
    /// Returns the number of objects written.
    pub fn write_packed_objects(
        &self,
        writer: &mut impl Write,
        entries: &[LegacyEntry],
    ) -> Result<usize> {
        bevy::log::debug!("Packing {} objects", entries.len());
        let mut written = 0;
        for entry in entries {
            if entry.source_game() != SourceGame::Custom {
                bevy::log::warn!("Refusing to pack original object \"{}\"", entry.name());
                continue;
            }

            let &index = self
                .by_key
                .get(&Key::Legacy(entry.name))
                .ok_or_else(|| Error::NotFound(entry.name()))?;
            let path = PathBuf::from(&self.items[index].path);
            let bytes = fs::read(&path).map_err(Error::Io)?;

            let mut stream = Stream::new(&bytes);
            let file_entry =
                LegacyEntry::read(&mut stream).map_err(|err| Error::Chunk(err.into()))?;
            if !file_entry.same_object(entry) {
                return Err(Error::EntryMismatch(path));
            }
            let chunk = chunk::read(&mut stream).map_err(Error::Chunk)?;

            writer.write_all(&entry.to_bytes()).map_err(Error::Io)?;
            writer.write_all(&chunk::write(chunk.encoding, &chunk.data)).map_err(Error::Io)?;
            written += 1;
        }
        Ok(written)
    }

    /// Writes the index to `path`, replacing any existing file.
    pub fn write_index(&self, path: &Path) -> Result<()> {
        let index = IndexFile { header: self.header.clone(), items: self.items.clone() };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(Error::Io)?;
        }
        let file = fs::File::create(path).map_err(Error::Io)?;
        let mut encoder = zstd::Encoder::new(file, ZSTD_LEVEL).map_err(Error::Io)?.auto_finish();
        ciborium::into_writer(&index, &mut encoder).map_err(Error::Encode)
    }
}

impl ObjectLookup for Repository {
    fn contains(&self, descriptor: &ObjectDescriptor) -> bool { self.find(descriptor).is_some() }
}

/// A file name in `dir` for an object called `name` that does not exist yet.
fn new_object_path(dir: &Path, name: &str) -> PathBuf {
    let stem: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c.to_ascii_uppercase() } else { '_' })
        .collect();
    let mut path = dir.join(format!("{stem}.DAT"));
    let mut counter = 2u32;
    while path.exists() {
        path = dir.join(format!("{stem}-{counter:02X}.DAT"));
        counter += 1;
    }
    path
}

/// Builds the index record of a scanned object.
#[must_use]
pub fn index_item(object: &Object, path: &Path, language: &str) -> IndexItem {
    IndexItem {
        object_type:  object.object_type(),
        identifier:   object.identifier().to_string(),
        legacy_entry: object.descriptor().legacy_entry().map(LegacyEntry::to_record),
        version:      object.version(),
        path:         path.to_string_lossy().into_owned(),
        name:         object.name(language).unwrap_or_else(|| object.identifier()).to_string(),
        source_games: object.source_games().to_vec(),
        authors:      object.authors().to_vec(),
    }
}

/// Reads the index at `path`.
///
/// Returns `None` if the index was written for other directory contents,
/// another language or another index version.
pub fn read_index(path: &Path, expected: &IndexHeader) -> Result<Option<IndexFile>> {
    let file = fs::File::open(path).map_err(Error::Io)?;
    let decoder = zstd::Decoder::new(file).map_err(Error::Io)?;
    let index: IndexFile = ciborium::from_reader(decoder).map_err(Error::Decode)?;
    Ok((index.header == *expected).then_some(index))
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Io(io::Error),
    #[error("malformed index: {0}")]
    Decode(ciborium::de::Error<io::Error>),
    #[error("cannot encode index: {0}")]
    Encode(ciborium::ser::Error<io::Error>),
    #[error("invalid object: {0}")]
    Object(factory::Error),
    #[error("invalid object file: {0}")]
    Chunk(chunk::Error),
    #[error("object {0} is not installed")]
    NotFound(String),
    #[error("entry of {} does not match the object to pack", .0.display())]
    EntryMismatch(PathBuf),
}
