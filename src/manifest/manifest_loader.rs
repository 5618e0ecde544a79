use std::collections::{ HashMap, HashSet };
use std::sync::Mutex ;

use crate::loader::{ LoadError, LoadRequest, ModuleLoader };
use crate::registration::{ register, RegisterOptions };
use crate::registry::{ Capability, Registrable, Registry };
use super::{ PluginManifest, PluginSpec };



/// Loads TOML plugin manifests and registers their classes into a
/// host-supplied registry.
///
/// The loader keeps a per-instance symbol table of every `provides`
/// declaration it has parsed. A manifest's exports are declared statically,
/// so they are recorded before its own `requires` are resolved; this is what
/// lets mutually referencing sibling modules converge under the discovery
/// fixpoint instead of deadlocking.
///
/// On a repeated load of the same module (an importer reload), entries this
/// loader previously inserted for that module are replaced rather than
/// reported as duplicates. A collision with a *different* module still fails.
pub struct ManifestLoader<'r> {
    registry: &'r mut Registry<PluginSpec>,
    required: Vec<Capability>,
    lock: Option<&'r Mutex<()>>,
    symbols: HashSet<String>,
    registered: HashMap<String, Vec<String>>,
}

impl<'r> ManifestLoader<'r> {

    /// Creates a loader registering into `registry` with no capability
    /// requirement.
    pub fn new( registry: &'r mut Registry<PluginSpec> ) -> Self {
        Self {
            registry,
            required: Vec::new(),
            lock: None,
            symbols: HashSet::new(),
            registered: HashMap::new(),
        }
    }

    /// Requires every registered class to declare at least one of the given
    /// capabilities.
    pub fn with_required_capabilities( mut self, capabilities: impl IntoIterator<Item = impl Into<Capability>> ) -> Self {
        self.required = capabilities.into_iter().map( Into::into ).collect();
        self
    }

    /// Supplies the caller-owned lock passed through to every
    /// [`register`] call.
    pub fn with_registration_lock( mut self, lock: &'r Mutex<()> ) -> Self {
        self.lock = Some( lock );
        self
    }

}

impl ModuleLoader for ManifestLoader<'_> {

    /// Registration identifiers inserted by the module.
    type Module = Vec<String> ;

    fn extensions( &self ) -> &'static [&'static str] { &[ "toml" ] }

    fn load( &mut self, request: &LoadRequest ) -> Result<Self::Module, LoadError> {

        let text = std::fs::read_to_string( request.path() )?;
        let manifest = PluginManifest::parse( &text ).map_err(| err | LoadError::Parse( err.to_string() ))?;

        // Exports are visible to siblings as soon as the manifest parses,
        // even when this module's own requirements are still unresolved.
        manifest.provides.iter().for_each(| symbol | { self.symbols.insert( symbol.clone() ); });

        if let Some( missing ) = manifest.requires.iter().find(| symbol | !self.symbols.contains( *symbol )) {
            return Err( LoadError::MissingDependency { symbol: missing.clone() });
        }

        // A reload of this module replaces what it registered last time.
        if let Some( previous ) = self.registered.remove( request.module_name() ) {
            previous.iter().for_each(| id | { self.registry.remove( id ); });
        }

        let mut registered = Vec::with_capacity( manifest.classes.len() );
        for decl in &manifest.classes {

            let spec = PluginSpec::from_decl( decl, request.module_name() );
            let id = spec.qualified_name().to_string();

            let options = RegisterOptions::new()
                .with_enabled( decl.enabled )
                .with_quiet_ancestry_mismatch( decl.quiet_ancestry_mismatch );
            let options = match self.lock {
                Some( lock ) => options.with_lock( lock ),
                None => options,
            };

            if register( spec, self.registry, &self.required, options )? {
                registered.push( id );
            }

        }

        self.registered.insert( request.module_name().to_string(), registered.clone() );
        Ok( registered )

    }

}
