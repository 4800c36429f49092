//! Per-read diagnostics and collaborators.

use std::fmt;

use crate::descriptor::ObjectDescriptor;
use crate::images::ImageSource;
use crate::retriever::{self, Asset, Retriever};

#[cfg(test)]
mod tests;

/// Category of a diagnostic raised while reading an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[repr(u8)]
pub enum ObjectError {
    Ok              = 0,
    Unknown         = 1,
    BadEncoding     = 2,
    InvalidProperty = 3,
    BadStringTable  = 4,
    BadImageTable   = 5,
    UnexpectedEof   = 6,
}

impl ObjectError {
    #[must_use]
    pub fn code(self) -> u8 { self as u8 }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Verbose,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code:     ObjectError,
    pub message:  String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Verbose => "Verbose",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        };
        write!(f, "{severity} ({}): {}", self.code.code(), self.message)
    }
}

/// Answers whether an object is installed, for fix-ups that depend on other objects.
pub trait ObjectLookup {
    fn contains(&self, descriptor: &ObjectDescriptor) -> bool;
}

/// State carried through a single read of an object.
///
/// Warnings and errors are sticky: once raised they stay raised for the rest of the read,
/// and the resolver discards the object if any error was raised.
pub struct ReadContext<'a> {
    identifier:   String,
    load_images:  bool,
    retriever:    Option<&'a dyn Retriever>,
    image_source: Option<&'a dyn ImageSource>,
    lookup:       Option<&'a dyn ObjectLookup>,
    diagnostics:  Vec<Diagnostic>,
    was_verbose:  bool,
    was_warning:  bool,
    was_error:    bool,
}

impl<'a> ReadContext<'a> {
    pub fn new(identifier: impl Into<String>, load_images: bool) -> Self {
        Self {
            identifier: identifier.into(),
            load_images,
            retriever: None,
            image_source: None,
            lookup: None,
            diagnostics: Vec::new(),
            was_verbose: false,
            was_warning: false,
            was_error: false,
        }
    }

    #[must_use]
    pub fn with_retriever(mut self, retriever: Option<&'a dyn Retriever>) -> Self {
        self.retriever = retriever;
        self
    }

    #[must_use]
    pub fn with_image_source(mut self, image_source: Option<&'a dyn ImageSource>) -> Self {
        self.image_source = image_source;
        self
    }

    #[must_use]
    pub fn with_lookup(mut self, lookup: Option<&'a dyn ObjectLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    #[must_use]
    pub fn identifier(&self) -> &str { &self.identifier }

    #[must_use]
    pub fn should_load_images(&self) -> bool { self.load_images }

    #[must_use]
    pub fn image_source(&self) -> Option<&'a dyn ImageSource> { self.image_source }

    #[must_use]
    pub fn lookup(&self) -> Option<&'a dyn ObjectLookup> { self.lookup }

    /// Reads a file through the retriever.
    /// Without a retriever every file reads as empty.
    pub fn get_data(&self, path: &str) -> Result<Vec<u8>, retriever::Error> {
        match self.retriever {
            Some(retriever) => retriever.get_data(path),
            None => Ok(Vec::new()),
        }
    }

    #[must_use]
    pub fn get_asset(&self, path: &str) -> Asset {
        self.retriever.map(|retriever| retriever.get_asset(path)).unwrap_or_default()
    }

    pub fn log_verbose(&mut self, code: ObjectError, message: impl Into<String>) {
        let message = message.into();
        bevy::log::debug!("[{}] Info ({}): {message}", self.identifier, code.code());
        self.was_verbose = true;
        self.push(Severity::Verbose, code, message);
    }

    pub fn log_warning(&mut self, code: ObjectError, message: impl Into<String>) {
        let message = message.into();
        bevy::log::warn!("[{}] Warning ({}): {message}", self.identifier, code.code());
        self.was_warning = true;
        self.push(Severity::Warning, code, message);
    }

    pub fn log_error(&mut self, code: ObjectError, message: impl Into<String>) {
        let message = message.into();
        bevy::log::error!("[{}] Error ({}): {message}", self.identifier, code.code());
        self.was_error = true;
        self.push(Severity::Error, code, message);
    }

    fn push(&mut self, severity: Severity, code: ObjectError, message: String) {
        self.diagnostics.push(Diagnostic { severity, code, message });
    }

    #[must_use]
    pub fn was_verbose(&self) -> bool { self.was_verbose }

    #[must_use]
    pub fn was_warning(&self) -> bool { self.was_warning }

    #[must_use]
    pub fn was_error(&self) -> bool { self.was_error }

    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    #[must_use]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> { self.diagnostics }
}
