use crate::registry::{ Capability, Registrable };
use super::ClassDecl ;

/// A registrable type described by a manifest `[[class]]` stanza.
///
/// Immutable once built. The host instantiates registered specs through its
/// own factory table, keyed by [`entry`]( PluginSpec::entry ).
#[derive( Debug, Clone )]
pub struct PluginSpec {
    qualified_name: String,
    capabilities: Vec<Capability>,
    entry: String,
    module_name: String,
}

impl PluginSpec {

    pub(crate) fn from_decl( decl: &ClassDecl, module_name: &str ) -> Self {
        Self {
            qualified_name: decl.name.clone(),
            capabilities: decl.capabilities.iter().map(| tag | Capability::new( tag )).collect(),
            entry: decl.entry.clone().unwrap_or_else(|| decl.name.clone() ),
            module_name: module_name.to_string(),
        }
    }

    /// Host factory key for instantiating this plugin.
    #[inline] pub fn entry( &self ) -> &str { &self.entry }

    /// Dotted name of the module that declared this spec.
    #[inline] pub fn module_name( &self ) -> &str { &self.module_name }

}

impl Registrable for PluginSpec {

    fn qualified_name( &self ) -> &str { &self.qualified_name }

    fn capabilities( &self ) -> &[Capability] { &self.capabilities }

}
