//! Access to files referenced by a JSON object.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use zip::ZipArchive;

#[cfg(test)]
mod tests;

/// Resolves relative paths of an object's dependent files.
pub trait Retriever {
    /// Reads the whole file at `path`.
    fn get_data(&self, path: &str) -> Result<Vec<u8>, Error>;

    /// Returns a handle to `path` without reading it.
    fn get_asset(&self, path: &str) -> Asset;
}

/// Handle to a file that is read lazily, e.g. music tracks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Asset {
    #[default]
    Missing,
    File(PathBuf),
    ArchiveEntry {
        archive: PathBuf,
        entry:   String,
    },
}

impl Asset {
    #[must_use]
    pub fn is_available(&self) -> bool { !matches!(self, Self::Missing) }

    pub fn read(&self) -> Result<Vec<u8>, Error> {
        match self {
            Self::Missing => Err(Error::NotFound("missing asset".into())),
            Self::File(path) => read_file(path),
            Self::ArchiveEntry { archive, entry } => ArchiveRetriever::open(archive)?.get_data(entry),
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>, Error> {
    fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.display().to_string()),
        _ => Error::Io(path.to_path_buf(), err),
    })
}

/// Resolves paths relative to the directory of a `.json` object file.
pub struct DirectoryRetriever {
    base: PathBuf,
}

impl DirectoryRetriever {
    pub fn new(base: impl Into<PathBuf>) -> Self { Self { base: base.into() } }

    fn resolve(&self, path: &str) -> PathBuf { self.base.join(path) }
}

impl Retriever for DirectoryRetriever {
    fn get_data(&self, path: &str) -> Result<Vec<u8>, Error> { read_file(&self.resolve(path)) }

    fn get_asset(&self, path: &str) -> Asset {
        let path = self.resolve(path);
        if path.is_file() { Asset::File(path) } else { Asset::Missing }
    }
}

/// Resolves paths against the entries of a `.parkobj` archive.
pub struct ArchiveRetriever {
    path:    PathBuf,
    archive: RefCell<ZipArchive<BufReader<File>>>,
}

impl ArchiveRetriever {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path).map_err(|err| Error::Io(path.to_path_buf(), err))?;
        let archive = ZipArchive::new(BufReader::new(file)).map_err(Error::Zip)?;
        Ok(Self { path: path.to_path_buf(), archive: RefCell::new(archive) })
    }

    /// Archive entries always use `/`, but manifests written on Windows may use `\`.
    fn entry_name(&self, path: &str) -> Option<String> {
        let archive = self.archive.borrow();
        [path.to_string(), path.replace('\\', "/")]
            .into_iter()
            .find(|name| archive.index_for_name(name).is_some())
    }
}

impl Retriever for ArchiveRetriever {
    fn get_data(&self, path: &str) -> Result<Vec<u8>, Error> {
        let name = self.entry_name(path).ok_or_else(|| Error::NotFound(path.to_string()))?;
        let mut archive = self.archive.borrow_mut();
        let mut entry = archive.by_name(&name).map_err(Error::Zip)?;
        let mut data = Vec::new();
        entry.read_to_end(&mut data).map_err(|err| Error::Io(self.path.clone(), err))?;
        Ok(data)
    }

    fn get_asset(&self, path: &str) -> Asset {
        match self.entry_name(path) {
            Some(entry) => Asset::ArchiveEntry { archive: self.path.clone(), entry },
            None => Asset::Missing,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] io::Error),
    #[error("read archive: {0}")]
    Zip(#[source] zip::result::ZipError),
}
