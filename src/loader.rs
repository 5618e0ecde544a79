//! The loading seam between discovery and module semantics.
//!
//! Discovery decides *which* files become modules; a [`ModuleLoader`] decides
//! *what loading one means*. The crate ships a manifest-based implementation
//! ([`ManifestLoader`]( crate::ManifestLoader )), but the walker and the
//! importer are generic over this trait, so hosts can load anything that can
//! be resolved from a file on disk.

use std::path::{ Path, PathBuf };
use thiserror::Error ;

use crate::registration::RegistryError ;



/// A single load attempt handed to a [`ModuleLoader`].
///
/// Built by discovery from the walk position: the dotted module name (already
/// resolved against the anchor package when one was supplied), the file name
/// as found on disk, the full source path and the containing directory.
#[derive( Debug, Clone )]
pub struct LoadRequest {
    module_name: String,
    file_name: String,
    path: PathBuf,
    directory: PathBuf,
}

impl LoadRequest {

    pub(crate) fn new( module_name: String, file_name: String, path: PathBuf, directory: PathBuf ) -> Self {
        Self { module_name, file_name, path, directory }
    }

    /// The constructed dotted module name.
    #[inline] pub fn module_name( &self ) -> &str { &self.module_name }

    /// The file name the module was discovered under.
    #[inline] pub fn file_name( &self ) -> &str { &self.file_name }

    /// Full path of the source file.
    #[inline] pub fn path( &self ) -> &Path { &self.path }

    /// Directory the source file was discovered in.
    #[inline] pub fn directory( &self ) -> &Path { &self.directory }

}

/// Why a single module failed to load.
///
/// Discovery treats every variant the same way: the attempt is recorded and
/// retried by the fixpoint loop until a full pass stops making progress.
#[derive( Error, Debug )]
pub enum LoadError {

    #[error( "Unresolved dependency on symbol '{symbol}'" )]
    MissingDependency { symbol: String },

    #[error( "Failed to parse module: {0}" )]
    Parse( String ),

    #[error( "Registration failed: {0}" )]
    Registration( #[from] RegistryError ),

    #[error( "IO Error: {0}" )]
    IOError( #[from] std::io::Error ),

}

/// Trait for loading discovered files as modules.
///
/// Implement this trait to define what a module *is*. The loader is handed
/// every eligible file in discovery order and again on each fixpoint retry
/// pass, so `load` must be safe to call repeatedly for the same request.
pub trait ModuleLoader {

    /// The module handle produced by a successful load.
    type Module ;

    /// Attempts to load one module.
    ///
    /// # Errors
    /// Returns a [`LoadError`] describing why the attempt failed; discovery
    /// will retry it in later passes.
    fn load( &mut self, request: &LoadRequest ) -> Result<Self::Module, LoadError> ;

    /// The file extensions (without leading dot) this loader understands.
    ///
    /// Used as the default extension set by
    /// [`PluginImporter`]( crate::PluginImporter ).
    fn extensions( &self ) -> &'static [&'static str] ;

    /// Invoked by discovery after a call that loaded at least one module, so
    /// loaders holding caches can drop state that may have gone stale.
    fn invalidate_caches( &mut self ) {}

}
