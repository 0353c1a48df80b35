//! Ascending marker search.
//!
//! Walks from a start directory toward the filesystem root looking for
//! marker files or directories (`.git`, `go.mod`, `Cargo.toml`, ...), the
//! way build tools locate a project root. Independent of directory
//! resolution.

pub mod search;

pub use search::{walk_up, AscendingSearch, FsSearch, Match, Query};
