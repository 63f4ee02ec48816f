//! Loading of the three menu documents.
//!
//! [`MenuDataStore`] fetches `menu1`, `menu2` and `menu3` concurrently from a
//! [`DocumentSource`] and produces a [`MenuCollection`] only when all three
//! arrive and parse. Any failure fails the whole load with a [`LoadError`];
//! partial collections are never surfaced.
//!
//! Two sources ship with the crate: [`FileSource`] reads from a directory,
//! [`HttpSource`] fetches from a base URL. [`source_for_root`] picks one from a
//! resolved [`DocumentRoot`].
//!
//! [`MenuCollection`]: menubar_types::MenuCollection
//! [`DocumentRoot`]: menubar_util::DocumentRoot

mod error;
mod source;
mod store;

pub use error::{LOAD_FAILURE_MESSAGE, LoadError};
pub use source::{DocumentSource, FileSource, HttpSource, source_for_root};
pub use store::MenuDataStore;
