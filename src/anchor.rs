//! Anchor packages for relative module addressing.

use std::path::{ Path, PathBuf };
use thiserror::Error ;



#[derive( Error, Debug )]
#[error( "Invalid anchor package: {0}" )]
pub struct AnchorError( String );

/// The package reference point for relative module names.
///
/// An anchor pairs a dotted package name with the package's declared source
/// file; the directory searched for plugin modules is the parent of that
/// source file, and discovered modules are addressed relative to the package
/// name (`anchor.sub.module`). Omitting the anchor during discovery means
/// constructed names are absolute instead.
#[derive( Debug, Clone )]
pub struct PackageAnchor {
    name: String,
    source: PathBuf,
}

impl PackageAnchor {

    /// Creates a validated anchor from a dotted package name and the package's
    /// source file path.
    ///
    /// # Errors
    /// Fails when the name is empty or contains an empty dotted segment, or
    /// when the source path has no parent directory to search in.
    pub fn new( name: impl Into<String>, source: impl Into<PathBuf> ) -> Result<Self, AnchorError> {

        let name = name.into();
        let source = source.into();

        if name.is_empty() || name.split( '.' ).any( str::is_empty ) {
            return Err( AnchorError( format!( "'{name}' is not a valid dotted package name" )));
        }

        match source.parent() {
            Some( parent ) if !parent.as_os_str().is_empty() => Ok( Self { name, source }),
            _ => Err( AnchorError( format!(
                "Source path '{}' has no parent directory to search for modules",
                source.display(),
            ))),
        }

    }

    /// The dotted package name.
    #[inline] pub fn name( &self ) -> &str { &self.name }

    /// The package's declared source file.
    #[inline] pub fn source( &self ) -> &Path { &self.source }

    /// The directory searched for plugin modules.
    pub fn package_directory( &self ) -> &Path {
        // Parent presence is validated at construction.
        self.source.parent().unwrap_or_else(|| Path::new( "" ))
    }

    /// Resolves a relative dotted name (leading dot) against this package.
    pub(crate) fn resolve( &self, relative: &str ) -> String {
        format!( "{}{relative}", self.name )
    }

}
