#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]

pub mod alloc;
pub mod chunk;
pub mod config;
pub use config::LoaderConfig;
pub mod context;
pub use context::{Diagnostic, ObjectError, ReadContext, Severity};
pub mod descriptor;
pub use descriptor::{Identity, LegacyEntry, ObjectDescriptor};
pub mod factory;
pub use factory::Factory;
pub mod images;
pub mod json;
pub mod load;
pub mod lookup;
pub mod object;
pub use object::{Object, ObjectData};
pub mod repository;
pub use repository::Repository;
pub mod retriever;
pub mod stream;
pub use stream::Stream;
pub mod strings;
pub mod util;

#[cfg(test)]
mod fixture;
