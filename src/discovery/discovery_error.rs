use std::path::PathBuf ;

use itertools::Itertools ;
use thiserror::Error ;

use crate::loader::{ LoadError, LoadRequest };



/// A module that never loaded, left over when the fixpoint retry loop
/// stopped making progress.
#[derive( Debug )]
pub struct FailedLoad {
    module_name: String,
    file_name: String,
    error: LoadError,
}

impl FailedLoad {

    pub(crate) fn new( request: LoadRequest, error: LoadError ) -> Self {
        Self {
            module_name: request.module_name().to_string(),
            file_name: request.file_name().to_string(),
            error,
        }
    }

    /// The constructed dotted module name.
    #[inline] pub fn module_name( &self ) -> &str { &self.module_name }

    /// The file name the module was discovered under.
    #[inline] pub fn file_name( &self ) -> &str { &self.file_name }

    /// The error from the final load attempt.
    #[inline] pub fn error( &self ) -> &LoadError { &self.error }

    fn summary( failures: &[FailedLoad] ) -> String {
        failures.iter().map( FailedLoad::module_name ).join( ", " )
    }

}

#[derive( Error, Debug )]
pub enum DiscoveryError {

    #[error( "Directory path is not a valid directory: {}", .0.display() )]
    InvalidDirectory( PathBuf ),

    #[error( "IO Error: {0}" )]
    IOError( #[from] std::io::Error ),

    #[error( "Unable to load the following modules from the '{}' directory: {}", directory.display(), FailedLoad::summary( failures ))]
    ModuleLoad {
        directory: PathBuf,
        failures: Vec<FailedLoad>,
    },

}
