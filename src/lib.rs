//! A plugin discovery and registration engine for building modular applications.
//!
//! Plugins are small, single-purpose modules discovered from a directory tree.
//! Adding an implementation means adding a file, not editing a central list:
//! the host points the engine at a plugin directory, the engine loads every
//! eligible file as a module, and each loaded module registers the types it
//! exports into a registry the host owns.
//!
//! # Core Concepts
//!
//! - [`Registry`]: A host-owned mapping from registration identifier to
//! 	registrable value. The engine mutates it through [`register`] but never
//! 	owns its lifecycle; several registries may share one caller-supplied lock.
//!
//! - [`Registrable`]: A type that can be registered. It carries a qualified
//! 	name (the default registration identifier) and a set of declared
//! 	[`Capability`] tags; a candidate is accepted when at least one required
//! 	capability appears in its declared set.
//!
//! - [`ModuleLoader`]: The seam between discovery and module semantics.
//! 	Discovery decides which files become modules; the loader decides what
//! 	loading one means. The crate ships [`ManifestLoader`], which reads TOML
//! 	plugin manifests and runs an explicit registration pass per module.
//!
//! - [`import_modules`]: Walks a directory (optionally recursively), maps
//! 	nesting to dotted module-name segments, skips hidden and ignored files,
//! 	and resolves cross-module load-order dependencies with a fixpoint retry
//! 	loop: failed loads are re-attempted in fresh passes for as long as a full
//! 	pass strictly reduces the failure count. Forward references between
//! 	sibling modules resolve without the caller pre-sorting files.
//!
//! - [`PluginImporter`]: A stateful façade binding discovery to one
//! 	[`PackageAnchor`]. The first `import_modules` call transitions it from
//! 	unloaded to loaded; a second call is an error by design, and
//! 	[`reload_modules`]( PluginImporter::reload_modules ) re-executes every
//! 	previously loaded module explicitly.
//!
//! # Registering directly
//!
//! ```
//! use plugin_link::{ register, Capability, RegisterOptions, Registrable, Registry };
//!
//! struct EchoCommand { capabilities: Vec<Capability> }
//!
//! impl Registrable for EchoCommand {
//! 	fn qualified_name( &self ) -> &str { "commands.Echo" }
//! 	fn capabilities( &self ) -> &[Capability] { &self.capabilities }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = Registry::new();
//!
//! let registered = register(
//! 	EchoCommand { capabilities: vec![ Capability::from( "command" )] },
//! 	&mut registry,
//! 	&[ Capability::from( "command" )],
//! 	RegisterOptions::new(),
//! )?;
//!
//! assert!( registered );
//! assert!( registry.contains( "commands.Echo" ));
//! # Ok(())
//! # }
//! ```
//!
//! # Discovering plugin manifests
//!
//! A plugin module is a TOML manifest. It may declare symbols it `provides`
//! to siblings and symbols it `requires` from them; the fixpoint retry makes
//! declaration order irrelevant.
//!
//! ```toml
//! provides = [ "math.sum" ]
//!
//! [[class]]
//! name = "SumCommand"
//! capabilities = [ "command" ]
//! ```
//!
//! ```no_run
//! use plugin_link::{ ImportOptions, ManifestLoader, PackageAnchor, PluginImporter, Registry };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut registry = Registry::new();
//!
//! // The anchor's source file pins the package; its parent directory is
//! // searched for plugin manifests.
//! let anchor = PackageAnchor::new( "app.plugins", "./plugins/package.toml" )?;
//! let loader = ManifestLoader::new( &mut registry )
//! 	.with_required_capabilities([ "command" ]);
//!
//! let mut importer = PluginImporter::new( anchor, loader );
//! let modules = importer.import_modules( &ImportOptions::new() )?;
//! println!( "loaded {} plugin modules", modules.len() );
//!
//! // The loader borrows the registry; drop the importer to get it back.
//! drop( importer );
//! for ( id, spec ) in registry.iter() {
//! 	println!( "{id} -> entry '{}'", spec.entry() );
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! The engine has no internal scheduler: discovery and import are synchronous
//! calls on the caller's thread. The only concurrency-sensitive region is
//! registry mutation - supply a lock through
//! [`RegisterOptions::with_lock`] when multiple threads can register into the
//! same registry, and serialise access to any single [`PluginImporter`]
//! instance yourself.

mod registry ;
mod registration ;
mod loader ;
mod anchor ;
mod discovery ;
mod manifest ;
mod importer ;

pub use registry::{ Capability, Registrable, Registry };
pub use registration::{ register, RegisterOptions, RegistryError };
pub use loader::{ LoadError, LoadRequest, ModuleLoader };
pub use anchor::{ AnchorError, PackageAnchor };
pub use discovery::{ import_modules, DiscoveryError, DiscoveryOptions, FailedLoad, ModuleRecord, DEFAULT_IGNORED_STEMS };
pub use manifest::{ ClassDecl, ManifestLoader, PluginManifest, PluginSpec };
pub use importer::{ ImportOptions, ImporterError, PluginImporter };
