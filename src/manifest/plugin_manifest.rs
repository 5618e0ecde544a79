use serde::Deserialize ;

/// A plugin manifest file.
///
/// ```toml
/// provides = [ "math.sum" ]
/// requires = [ "math.format" ]
///
/// [[class]]
/// name = "SumCommand"
/// capabilities = [ "command" ]
/// entry = "sum"
/// ```
#[derive( Debug, Clone, Deserialize )]
#[serde( deny_unknown_fields )]
pub struct PluginManifest {

    /// Symbols this module exports to sibling modules.
    #[serde( default )]
    pub provides: Vec<String>,

    /// Symbols that must already be declared by previously parsed modules.
    #[serde( default )]
    pub requires: Vec<String>,

    /// Registrable classes exported by this module.
    #[serde( default, rename = "class" )]
    pub classes: Vec<ClassDecl>,

}

impl PluginManifest {

    /// Parses manifest text.
    ///
    /// # Errors
    /// Returns the underlying TOML error on malformed or unknown fields.
    pub fn parse( text: &str ) -> Result<Self, toml::de::Error> {
        toml::from_str( text )
    }

}

/// One `[[class]]` stanza of a [`PluginManifest`].
#[derive( Debug, Clone, Deserialize )]
#[serde( deny_unknown_fields )]
pub struct ClassDecl {

    /// Qualified name; doubles as the default registration identifier.
    pub name: String,

    /// Declared capability tags.
    #[serde( default )]
    pub capabilities: Vec<String>,

    /// Whether registration is attempted at all.
    #[serde( default = "default_enabled" )]
    pub enabled: bool,

    /// Reports a capability mismatch silently instead of failing the load.
    #[serde( default )]
    pub quiet_ancestry_mismatch: bool,

    /// Host factory key; defaults to `name`.
    #[serde( default )]
    pub entry: Option<String>,

}

fn default_enabled() -> bool { true }
