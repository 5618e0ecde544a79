//! Registry and registrable-type metadata.
//!
//! A [`Registry`] is a host-owned mapping from registration identifier to
//! registrable value. The registry never decides what gets inserted - that is
//! the job of [`register`]( crate::register ) - and it never outlives the host
//! that constructed it. Several registries may be guarded by one caller-supplied
//! lock; see [`RegisterOptions`]( crate::RegisterOptions ).

use std::collections::HashMap ;

/// A capability tag declared by a registrable type.
///
/// Capabilities replace runtime type-hierarchy walks: a candidate is accepted
/// for registration when at least one of the required capabilities appears in
/// its declared set.
#[derive( Debug, Clone, PartialEq, Eq, Hash )]
pub struct Capability( String );

impl Capability {
    /// Creates a capability tag.
    pub fn new( tag: impl Into<String> ) -> Self { Self( tag.into() )}

    /// The tag as a string slice.
    #[inline] pub fn as_str( &self ) -> &str { &self.0 }
}

impl From<&str> for Capability {
    fn from( tag: &str ) -> Self { Self( tag.to_string() )}
}

impl From<String> for Capability {
    fn from( tag: String ) -> Self { Self( tag )}
}

impl std::fmt::Display for Capability {
    fn fmt( &self, f: &mut std::fmt::Formatter ) -> std::fmt::Result {
        std::fmt::Display::fmt( &self.0, f )
    }
}

/// Trait for values that can be inserted into a [`Registry`].
///
/// Implementors carry a qualified name (the default registration identifier)
/// and a set of declared [`Capability`] tags checked against the required
/// capabilities at registration time.
pub trait Registrable {

    /// The qualified name identifying this type (e.g. `"commands.Echo"`).
    fn qualified_name( &self ) -> &str ;

    /// The capability tags this type declares.
    fn capabilities( &self ) -> &[Capability] ;

    /// Whether this type satisfies at least one of the required capabilities.
    ///
    /// An empty requirement always accepts.
    fn satisfies_any( &self, required: &[Capability] ) -> bool {
        required.is_empty() || self.capabilities().iter().any(| capability | required.contains( capability ))
    }

}

/// A mapping from registration identifier to registrable value.
///
/// Keys are unique within one registry instance; insertion order carries no
/// meaning. The registry is mutated exclusively through
/// [`register`]( crate::register ) and (for loaders that support reload)
/// through removal of entries a loader previously inserted itself.
#[derive( Debug )]
pub struct Registry<T> {
    entries: HashMap<String, T>,
}

impl<T> Registry<T> {

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Returns the value registered under `id`, if any.
    #[inline] pub fn get( &self, id: &str ) -> Option<&T> { self.entries.get( id )}

    /// Whether an entry exists under `id`.
    #[inline] pub fn contains( &self, id: &str ) -> bool { self.entries.contains_key( id )}

    /// Iterates over `(id, value)` pairs in arbitrary order.
    pub fn iter( &self ) -> impl Iterator<Item = ( &str, &T )> {
        self.entries.iter().map(|( id, value )| ( id.as_str(), value ))
    }

    /// Number of registered entries.
    #[inline] pub fn len( &self ) -> usize { self.entries.len() }

    /// Whether the registry holds no entries.
    #[inline] pub fn is_empty( &self ) -> bool { self.entries.is_empty() }

    pub(crate) fn insert( &mut self, id: String, value: T ) {
        self.entries.insert( id, value );
    }

    pub(crate) fn remove( &mut self, id: &str ) -> Option<T> {
        self.entries.remove( id )
    }

}

impl<T> Default for Registry<T> {
    fn default() -> Self { Self::new() }
}
