//! Shared utilities for basedir.
//!
//! This crate provides the cross-cutting pieces used by the resolver and the
//! ancestor search: the unified error type and a handful of filesystem
//! helpers that both sides need to agree on (what "exists" means, how
//! directories get created, how a start path is made absolute).

pub mod errors;
pub mod fs;
