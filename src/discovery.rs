//! Module discovery.
//!
//! Walks a directory tree top-down, loads eligible files as modules through a
//! [`ModuleLoader`]( crate::ModuleLoader ) and resolves cross-module
//! load-order dependencies with a bounded fixpoint retry loop: every failed
//! load in a directory is re-attempted in a fresh pass for as long as a full
//! pass strictly reduces the failure count.

mod options ;
mod module_record ;
mod discovery_error ;
mod import_modules ;

pub use options::{ DiscoveryOptions, DEFAULT_IGNORED_STEMS };
pub use module_record::ModuleRecord ;
pub use discovery_error::{ DiscoveryError, FailedLoad };
pub use import_modules::import_modules ;
