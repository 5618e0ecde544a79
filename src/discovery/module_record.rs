use std::path::Path ;

use crate::loader::LoadRequest ;

/// A successfully loaded module: the request it was loaded from plus the
/// loader's output.
///
/// Records keep their request so an importer can re-execute the load on
/// [`reload_modules`]( crate::PluginImporter::reload_modules ).
#[derive( Debug )]
pub struct ModuleRecord<M> {
    request: LoadRequest,
    module: M,
}

impl<M> ModuleRecord<M> {

    pub(crate) fn new( request: LoadRequest, module: M ) -> Self {
        Self { request, module }
    }

    /// The constructed dotted module name.
    #[inline] pub fn module_name( &self ) -> &str { self.request.module_name() }

    /// Full path of the source file the module was loaded from.
    #[inline] pub fn path( &self ) -> &Path { self.request.path() }

    /// The request this module was loaded from.
    #[inline] pub fn request( &self ) -> &LoadRequest { &self.request }

    /// The loader's output for this module.
    #[inline] pub fn module( &self ) -> &M { &self.module }

    /// Consumes the record, returning the loader's output.
    pub fn into_module( self ) -> M { self.module }

    pub(crate) fn set_module( &mut self, module: M ) {
        self.module = module ;
    }

}
