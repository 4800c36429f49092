//! Resolves object files and manifests into populated [`Object`]s.
//!
//! The `try_*` functions report why an object could not be created.
//! The other `create_object_from_*` functions log the reason and return `None`,
//! so that one bad file never aborts a batch of loads.

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde_json::Value;
use store::{Manifest, ObjectType, OriginalId, SourceGame, Version};

use crate::chunk;
use crate::config::LoaderConfig;
use crate::context::{ObjectError, ObjectLookup, ReadContext};
use crate::descriptor::{self, Identity, LegacyEntry, ObjectDescriptor};
use crate::images::ImageSource;
use crate::json;
use crate::object::{Object, audio};
use crate::retriever::{self, ArchiveRetriever, DirectoryRetriever, Retriever};
use crate::stream::Stream;
use crate::util::{has_extension, log_object_error};


/// Name of the manifest inside a `.parkobj` archive.
pub const MANIFEST_ENTRY: &str = "object.json";

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Creates objects from files, legacy records and manifests.
#[derive(Clone, Copy)]
pub struct Factory<'a> {
    allow_incorrect_checksum: bool,
    lookup:                   Option<&'a dyn ObjectLookup>,
    image_source:             Option<&'a dyn ImageSource>,
}

impl<'a> Factory<'a> {
    #[must_use]
    pub fn new(config: &LoaderConfig) -> Self {
        Self {
            allow_incorrect_checksum: config.allow_incorrect_checksum,
            lookup:                   None,
            image_source:             None,
        }
    }

    /// Installed objects consulted by fix-ups.
    #[must_use]
    pub fn with_lookup(mut self, lookup: Option<&'a dyn ObjectLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    /// Source of `$NAME[a..b]` image references.
    #[must_use]
    pub fn with_image_source(mut self, image_source: Option<&'a dyn ImageSource>) -> Self {
        self.image_source = image_source;
        self
    }

    fn context(&self, identifier: &str, load_images: bool) -> ReadContext<'a> {
        ReadContext::new(identifier, load_images)
            .with_image_source(self.image_source)
            .with_lookup(self.lookup)
    }

    /// An empty object of the given type.
    #[must_use]
    pub fn create_object(&self, object_type: ObjectType) -> Object {
        Object::new(ObjectDescriptor::from_identifier(object_type, ""))
    }

    /// An empty object of the given legacy type code.
    pub fn create_object_from_legacy_code(&self, code: u8) -> Result<Object> {
        let object_type = ObjectType::from_legacy_code(code).ok_or(Error::UnknownType(code))?;
        Ok(self.create_object(object_type))
    }

    /// Loads an object file, choosing the format by extension.
    ///
    /// Returns `None` if the file is not a valid object or has a type this loader does not know.
    #[must_use]
    pub fn create_object_from_file(&self, path: &Path, load_images: bool) -> Option<Object> {
        log_object_error(self.try_create_object_from_file(path, load_images), path.display())
            .flatten()
    }

    pub fn try_create_object_from_file(
        &self,
        path: &Path,
        load_images: bool,
    ) -> Result<Option<Object>> {
        if has_extension(path, "json") {
            self.try_create_object_from_json_file(path, load_images)
        } else if has_extension(path, "parkobj") {
            self.try_create_object_from_zip_file(path, load_images)
        } else {
            self.try_create_object_from_legacy_file(path, load_images).map(Some)
        }
    }

    #[must_use]
    pub fn create_object_from_legacy_file(&self, path: &Path, load_images: bool) -> Option<Object> {
        log_object_error(self.try_create_object_from_legacy_file(path, load_images), path.display())
    }

    /// Loads a legacy object file: a 16-byte entry followed by one chunk.
    pub fn try_create_object_from_legacy_file(
        &self,
        path: &Path,
        load_images: bool,
    ) -> Result<Object> {
        let bytes = fs::read(path).map_err(|err| Error::Io(path.to_path_buf(), err))?;
        let mut stream = Stream::new(&bytes);
        let entry = LegacyEntry::read(&mut stream).map_err(|_| Error::UnexpectedEof)?;

        match entry.object_type() {
            None => return Err(Error::UnknownType(entry.type_code())),
            Some(ObjectType::ScenarioMeta) => return Err(Error::ScenarioMeta),
            Some(_) => {}
        }

        let chunk = chunk::read(&mut stream)?;
        let mut object = self.read_legacy_object(entry, &chunk.data, load_images)?;
        object.set_path(Some(path.to_path_buf()));
        Ok(object)
    }

    /// Reads an already decoded legacy record, such as an object packed into a saved park.
    #[must_use]
    pub fn create_object_from_legacy_data(
        &self,
        entry: LegacyEntry,
        data: &[u8],
        load_images: bool,
    ) -> Option<Object> {
        log_object_error(self.try_create_object_from_legacy_data(entry, data, load_images), entry)
    }

    pub fn try_create_object_from_legacy_data(
        &self,
        entry: LegacyEntry,
        data: &[u8],
        load_images: bool,
    ) -> Result<Object> {
        if entry.object_type().is_none() {
            return Err(Error::UnknownType(entry.type_code()));
        }
        self.read_legacy_object(entry, data, load_images)
    }

    fn read_legacy_object(
        &self,
        entry: LegacyEntry,
        data: &[u8],
        load_images: bool,
    ) -> Result<Object> {
        let mut object = Object::new(
            ObjectDescriptor::from_legacy(entry).ok_or(Error::UnknownType(entry.type_code()))?,
        );
        let mut ctx = self.context(&entry.name(), load_images);

        let computed = descriptor::checksum(&entry, data);
        if computed != entry.checksum {
            let message = format!(
                "Checksum mismatch: stored {:08X}, computed {computed:08X}.",
                entry.checksum
            );
            if self.allow_incorrect_checksum {
                ctx.log_warning(ObjectError::BadEncoding, message);
            } else {
                ctx.log_error(ObjectError::BadEncoding, message);
            }
        }

        let mut stream = Stream::new(data);
        object.read_legacy(&mut ctx, &mut stream).map_err(|_| Error::UnexpectedEof)?;
        if ctx.was_error() {
            return Err(Error::HasErrors);
        }

        object.set_source_games(vec![entry.source_game()]);
        object.extend_diagnostics(ctx.into_diagnostics());
        Ok(object)
    }

    #[must_use]
    pub fn create_object_from_zip_file(&self, path: &Path, load_images: bool) -> Option<Object> {
        log_object_error(self.try_create_object_from_zip_file(path, load_images), path.display())
            .flatten()
    }

    /// Loads a `.parkobj` archive. Assets are resolved against the archive entries.
    pub fn try_create_object_from_zip_file(
        &self,
        path: &Path,
        load_images: bool,
    ) -> Result<Option<Object>> {
        let retriever = ArchiveRetriever::open(path)?;
        let bytes = retriever.get_data(MANIFEST_ENTRY)?;
        let manifest: Manifest = serde_json::from_slice(&bytes)?;
        self.try_create_object_from_json(&manifest, Some(&retriever), load_images, Some(path))
    }

    #[must_use]
    pub fn create_object_from_json_file(&self, path: &Path, load_images: bool) -> Option<Object> {
        log_object_error(self.try_create_object_from_json_file(path, load_images), path.display())
            .flatten()
    }

    /// Loads a bare manifest. Assets are resolved against the directory of the manifest.
    pub fn try_create_object_from_json_file(
        &self,
        path: &Path,
        load_images: bool,
    ) -> Result<Option<Object>> {
        let bytes = fs::read(path).map_err(|err| Error::Io(path.to_path_buf(), err))?;
        let manifest: Manifest = serde_json::from_slice(&bytes)?;
        let retriever = DirectoryRetriever::new(path.parent().unwrap_or(Path::new(".")));
        self.try_create_object_from_json(&manifest, Some(&retriever), load_images, Some(path))
    }

    #[must_use]
    pub fn create_object_from_json(
        &self,
        manifest: &Manifest,
        retriever: Option<&dyn Retriever>,
        load_images: bool,
        path: Option<&Path>,
    ) -> Option<Object> {
        let name = path.map_or_else(|| manifest.id.clone(), |path| path.display().to_string());
        log_object_error(self.try_create_object_from_json(manifest, retriever, load_images, path), name)
            .flatten()
    }

    /// Builds an object from a parsed manifest.
    ///
    /// Returns `Ok(None)` for object types this loader does not know.
    pub fn try_create_object_from_json(
        &self,
        manifest: &Manifest,
        retriever: Option<&dyn Retriever>,
        load_images: bool,
        path: Option<&Path>,
    ) -> Result<Option<Object>> {
        let Some(object_type) = ObjectType::from_name(&manifest.object_type) else {
            bevy::log::debug!(
                "Skipping {} with unknown object type {:?}",
                manifest.id,
                manifest.object_type
            );
            return Ok(None);
        };

        let identifier = if object_type == ObjectType::Audio {
            audio::canonical_identifier(&manifest.id)
        } else {
            &manifest.id
        };

        // Problems with the identity or provenance are reported but do not discard the object.
        let mut meta_ctx = ReadContext::new(identifier, false);
        let descriptor = json_descriptor(&mut meta_ctx, manifest, object_type, identifier);

        let mut object = Object::new(descriptor);
        object.set_identifier(identifier.to_string());
        object.set_path(path.map(Path::to_path_buf));
        object.set_json_object(true);

        let mut ctx = self.context(identifier, load_images).with_retriever(retriever);
        object.read_json(&mut ctx, manifest);
        if ctx.was_error() {
            return Err(Error::HasErrors);
        }

        object.set_authors(json::string_list(Some(&manifest.authors)));
        object.set_source_games(source_games(&mut meta_ctx, manifest.source_game.as_ref()));
        object.set_compatibility_object(manifest.is_compatibility_object);

        object.extend_diagnostics(meta_ctx.into_diagnostics());
        object.extend_diagnostics(ctx.into_diagnostics());
        Ok(Some(object))
    }
}

/// The descriptor of a manifest, which takes the legacy identity of a valid `originalId`.
fn json_descriptor(
    ctx: &mut ReadContext<'_>,
    manifest: &Manifest,
    object_type: ObjectType,
    identifier: &str,
) -> ObjectDescriptor {
    let version = match manifest.version.as_deref() {
        None => Version::default(),
        Some(text) => text.parse().unwrap_or_else(|err| {
            ctx.log_warning(ObjectError::InvalidProperty, format!("Invalid version {text:?}: {err}"));
            Version::default()
        }),
    };

    let mut descriptor = ObjectDescriptor::from_identifier(object_type, identifier);
    descriptor.version = version;

    let Some(original_id) = manifest.original_id.as_deref() else { return descriptor };
    let Some(original) = OriginalId::parse(original_id) else {
        ctx.log_error(ObjectError::InvalidProperty, format!("Invalid originalId {original_id:?}."));
        return descriptor;
    };
    let entry = LegacyEntry::from_original_id(&original);
    if entry.object_type() == Some(object_type) {
        descriptor.identity = Identity::Legacy(entry);
    } else {
        ctx.log_error(
            ObjectError::InvalidProperty,
            format!("originalId {original_id} does not match object type {}.", object_type.name()),
        );
    }
    descriptor
}

/// Reads `sourceGame`, which is a tag or an array of tags.
///
/// An absent tag means custom content. Anything present but unusable is reported
/// and also treated as custom content.
fn source_games(ctx: &mut ReadContext<'_>, value: Option<&Value>) -> Vec<SourceGame> {
    let names = match value {
        None | Some(Value::Null) => return vec![SourceGame::Custom],
        Some(value @ (Value::String(_) | Value::Array(_))) => json::string_list(Some(value)),
        Some(_) => Vec::new(),
    };

    let mut games = Vec::new();
    for name in names {
        match SourceGame::from_name(&name) {
            Some(game) if !games.contains(&game) => games.push(game),
            Some(_) => {}
            None => ctx.log_warning(
                ObjectError::InvalidProperty,
                format!("Unknown sourceGame {name:?}."),
            ),
        }
    }
    if games.is_empty() {
        ctx.log_error(ObjectError::InvalidProperty, "Object has no valid sourceGame.");
        games.push(SourceGame::Custom);
    }
    games
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
    #[error("{0}")]
    Retriever(#[from] retriever::Error),
    #[error("invalid manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Chunk(chunk::Error),
    #[error("Unexpectedly reached end of file.")]
    UnexpectedEof,
    #[error("unknown legacy object type {0}")]
    UnknownType(u8),
    #[error("scenario meta objects can only be loaded from .parkobj archives")]
    ScenarioMeta,
    #[error("Object has errors")]
    HasErrors,
}

impl From<chunk::Error> for Error {
    fn from(err: chunk::Error) -> Self {
        match err {
            chunk::Error::Stream(_) => Self::UnexpectedEof,
            err => Self::Chunk(err),
        }
    }
}
