//! The plugin importer façade.
//!
//! A [`PluginImporter`] binds module discovery to one anchor package and its
//! directory, enforces load-once semantics and exposes an explicit reload.

use thiserror::Error ;

use crate::anchor::{ AnchorError, PackageAnchor };
use crate::discovery::{ import_modules, DiscoveryError, DiscoveryOptions, ModuleRecord };
use crate::loader::{ LoadError, ModuleLoader };



#[derive( Error, Debug )]
pub enum ImporterError {

    #[error( transparent )]
    InvalidAnchor( #[from] AnchorError ),

    #[error( "Cannot load modules; modules were already loaded" )]
    AlreadyLoaded,

    #[error( "Cannot reload modules; no modules have been loaded yet" )]
    NotYetLoaded,

    #[error( "Discovery failed: {0}" )]
    Discovery( #[from] DiscoveryError ),

    #[error( "Reload failed: {0}" )]
    Reload( #[from] LoadError ),

}

/// Options for [`PluginImporter::import_modules`].
///
/// Mirrors [`DiscoveryOptions`] minus the anchor, which the importer
/// supplies itself.
#[derive( Debug, Default, Clone )]
pub struct ImportOptions {
    recursive: bool,
    ignored_stems: Option<Vec<String>>,
    extensions: Option<Vec<String>>,
}

impl ImportOptions {

    /// Creates the default option set: not recursive, built-in ignored
    /// stems, the loader's own extension set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Descends into subdirectories of the package directory.
    pub fn with_recursive( mut self, recursive: bool ) -> Self {
        self.recursive = recursive ;
        self
    }

    /// Replaces the built-in ignored file stems.
    pub fn with_ignored_stems( mut self, stems: impl IntoIterator<Item = impl Into<String>> ) -> Self {
        self.ignored_stems = Some( stems.into_iter().map( Into::into ).collect() );
        self
    }

    /// Overrides the loader's default file-extension set (no leading dots).
    pub fn with_extensions( mut self, extensions: impl IntoIterator<Item = impl Into<String>> ) -> Self {
        self.extensions = Some( extensions.into_iter().map( Into::into ).collect() );
        self
    }

}

/// Imports plugin modules relative to one anchor package.
///
/// The importer starts unloaded; the first successful
/// [`import_modules`]( PluginImporter::import_modules ) transitions it to
/// loaded and a second call fails with [`ImporterError::AlreadyLoaded`] -
/// deliberately not idempotent, so a host triggering plugin loading twice
/// hears about it. Concurrent use of one importer instance is the caller's
/// responsibility to serialise.
pub struct PluginImporter<L: ModuleLoader> {
    anchor: PackageAnchor,
    loader: L,
    loaded: Option<Vec<ModuleRecord<L::Module>>>,
}

impl<L: ModuleLoader> PluginImporter<L> {

    /// Creates an importer bound to a validated anchor and a loader.
    pub fn new( anchor: PackageAnchor, loader: L ) -> Self {
        Self { anchor, loader, loaded: None }
    }

    /// The anchor package modules are imported relative to.
    #[inline] pub fn anchor( &self ) -> &PackageAnchor { &self.anchor }

    /// The modules loaded so far, if any.
    pub fn loaded_modules( &self ) -> Option<&[ModuleRecord<L::Module>]> {
        self.loaded.as_deref()
    }

    /// Whether modules have been loaded on this importer yet.
    #[inline] pub fn has_loaded_modules( &self ) -> bool { self.loaded.is_some() }

    /// Consumes the importer, returning the loader.
    pub fn into_loader( self ) -> L { self.loader }

    /// Discovers and loads modules from the anchor's package directory.
    ///
    /// Uses the loader's [`extensions`]( ModuleLoader::extensions ) unless
    /// overridden through `options`.
    ///
    /// # Errors
    /// Fails with [`ImporterError::AlreadyLoaded`] when modules were already
    /// loaded, or with the underlying [`DiscoveryError`].
    pub fn import_modules( &mut self, options: &ImportOptions ) -> Result<&[ModuleRecord<L::Module>], ImporterError> {

        if self.loaded.is_some() {
            return Err( ImporterError::AlreadyLoaded );
        }

        let extensions = match &options.extensions {
            Some( extensions ) => extensions.iter().map( String::as_str ).collect::<Vec<_>>(),
            None => self.loader.extensions().to_vec(),
        };

        let discovery_options = DiscoveryOptions::new()
            .with_anchor( &self.anchor )
            .with_recursive( options.recursive );
        let discovery_options = match &options.ignored_stems {
            Some( stems ) => discovery_options.with_ignored_stems( stems.iter().cloned() ),
            None => discovery_options,
        };

        let records = import_modules(
            self.anchor.package_directory(),
            &extensions,
            &mut self.loader,
            &discovery_options,
        )?;

        Ok( self.loaded.insert( records ).as_slice() )

    }

    /// Re-executes the load of every previously loaded module, forcing
    /// registration side effects to run again, and returns the refreshed
    /// records.
    ///
    /// # Errors
    /// Fails with [`ImporterError::NotYetLoaded`] before the first successful
    /// import, or with the first [`LoadError`] hit while reloading.
    pub fn reload_modules( &mut self ) -> Result<&[ModuleRecord<L::Module>], ImporterError> {

        let records = self.loaded.as_mut().ok_or( ImporterError::NotYetLoaded )?;

        for record in records.iter_mut() {
            let refreshed = self.loader.load( record.request() )?;
            record.set_module( refreshed );
        }

        Ok( records.as_slice() )

    }

}
