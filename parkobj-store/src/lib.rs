//! Schema for object manifests and repository index files.

#![warn(clippy::pedantic)]
#![cfg_attr(feature = "precommit-checks", deny(warnings, clippy::pedantic, clippy::dbg_macro))]
#![forbid(missing_docs)]

mod object_type;
pub use object_type::*;

mod source_game;
pub use source_game::*;

mod version;
pub use version::*;

mod manifest;
pub use manifest::*;

mod image;
pub use image::*;

mod climate;
pub use climate::*;

mod index;
pub use index::*;
