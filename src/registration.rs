//! The register operation.
//!
//! [`register`] validates a candidate against the required capabilities and
//! inserts it into a host-owned [`Registry`] under a unique identifier. The
//! check-then-insert sequence can be made atomic across several registries by
//! supplying a shared lock through [`RegisterOptions::with_lock`].

use std::sync::Mutex ;
use thiserror::Error ;

use crate::registry::{ Capability, Registrable, Registry };



#[derive( Error, Debug )]
pub enum RegistryError {

    #[error( "Invalid argument: {0}" )]
    InvalidArgument( String ),

    #[error( "'{qualified_name}' does not declare any acceptable capability" )]
    AncestryMismatch { qualified_name: String },

    #[error( "A type with id ('{id}') already exists in the registration target" )]
    DuplicateRegistration { id: String },

    #[error( "Registration lock was poisoned by another thread" )]
    LockPoisoned,

}

/// Options for a single [`register`] call.
///
/// Defaults: enabled, loud on capability mismatch, qualified name as
/// registration identifier, no lock.
pub struct RegisterOptions<'a, T> {
    enabled: bool,
    quiet_ancestry_mismatch: bool,
    id_extractor: Option<Box<dyn Fn( &T ) -> String + 'a>>,
    lock: Option<&'a Mutex<()>>,
}

impl<'a, T> RegisterOptions<'a, T> {

    /// Creates the default option set.
    pub fn new() -> Self {
        Self {
            enabled: true,
            quiet_ancestry_mismatch: false,
            id_extractor: None,
            lock: None,
        }
    }

    /// Controls whether registration is attempted at all.
    ///
    /// A disabled registration short-circuits before any validation or
    /// registry access and reports `false`.
    pub fn with_enabled( mut self, enabled: bool ) -> Self {
        self.enabled = enabled ;
        self
    }

    /// Reports a capability mismatch as `Ok(false)` instead of an error.
    pub fn with_quiet_ancestry_mismatch( mut self, quiet: bool ) -> Self {
        self.quiet_ancestry_mismatch = quiet ;
        self
    }

    /// Overrides how the registration identifier is derived from the
    /// candidate. Defaults to the candidate's qualified name.
    pub fn with_id_extractor( mut self, extractor: impl Fn( &T ) -> String + 'a ) -> Self {
        self.id_extractor = Some( Box::new( extractor ));
        self
    }

    /// Supplies a caller-owned lock guarding the registry.
    ///
    /// The lock is acquired before the identifier is computed and held across
    /// the duplicate check and the insert, so callers sharing one lock across
    /// one or more registries get an atomic check-then-insert. The engine
    /// never creates a lock of its own.
    pub fn with_lock( mut self, lock: &'a Mutex<()> ) -> Self {
        self.lock = Some( lock );
        self
    }

}

impl<T> Default for RegisterOptions<'_, T> {
    fn default() -> Self { Self::new() }
}

impl<T> std::fmt::Debug for RegisterOptions<'_, T> {
    fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
        f.debug_struct( "RegisterOptions" )
            .field( "enabled", &self.enabled )
            .field( "quiet_ancestry_mismatch", &self.quiet_ancestry_mismatch )
            .field( "id_extractor", &self.id_extractor.as_ref().map(| _ | "<extractor>" ))
            .field( "lock", &self.lock.map(| _ | "<lock>" ))
            .finish()
    }
}

/// Registers `candidate` into `registry` if it satisfies at least one of the
/// `required` capabilities.
///
/// Returns `Ok(true)` when the candidate was inserted, `Ok(false)` when
/// registration was disabled or a capability mismatch was silenced via
/// [`RegisterOptions::with_quiet_ancestry_mismatch`].
///
/// # Errors
///
/// - [`RegistryError::AncestryMismatch`] when no required capability is
///   declared by the candidate and quiet mode is off.
/// - [`RegistryError::DuplicateRegistration`] when the computed identifier is
///   already present; the registry is left unchanged.
/// - [`RegistryError::InvalidArgument`] when the identifier extractor
///   produces an empty identifier.
/// - [`RegistryError::LockPoisoned`] when the supplied lock was poisoned.
pub fn register<T: Registrable>(
    candidate: T,
    registry: &mut Registry<T>,
    required: &[Capability],
    options: RegisterOptions<'_, T>,
) -> Result<bool, RegistryError> {

    if !options.enabled {
        return Ok( false );
    }

    if !candidate.satisfies_any( required ) {
        return match options.quiet_ancestry_mismatch {
            true => Ok( false ),
            false => Err( RegistryError::AncestryMismatch {
                qualified_name: candidate.qualified_name().to_string(),
            }),
        };
    }

    // Held across identifier computation, duplicate check and insert; released
    // on every exit path when the guard drops.
    let _guard = match options.lock {
        Some( lock ) => Some( lock.lock().map_err(| _ | RegistryError::LockPoisoned )? ),
        None => None,
    };

    let id = match &options.id_extractor {
        Some( extractor ) => extractor( &candidate ),
        None => candidate.qualified_name().to_string(),
    };

    if id.is_empty() {
        return Err( RegistryError::InvalidArgument( "Registration id must not be empty".to_string() ));
    }

    if registry.contains( &id ) {
        return Err( RegistryError::DuplicateRegistration { id });
    }

    registry.insert( id, candidate );
    Ok( true )

}
