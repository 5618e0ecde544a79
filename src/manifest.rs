//! The manifest-based module loader.
//!
//! The concrete [`ModuleLoader`]( crate::ModuleLoader ) shipped with the
//! crate: a module is a TOML plugin manifest declaring the symbols the module
//! provides, the symbols it requires from sibling modules, and the
//! registrable classes it exports. Loading a manifest runs an explicit
//! registration pass against a host-supplied registry - no import-time side
//! effects, no dynamic code.

mod plugin_manifest ;
mod plugin_spec ;
mod manifest_loader ;

pub use plugin_manifest::{ PluginManifest, ClassDecl };
pub use plugin_spec::PluginSpec ;
pub use manifest_loader::ManifestLoader ;
