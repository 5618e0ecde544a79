use plugin_link::{ register, RegisterOptions, Registry, RegistryError };

use crate::TestClass ;

#[test]
fn second_registration_under_same_id_fails() {

    let mut registry = Registry::new();

    let first = register(
        TestClass::new( "commands.Echo", &[] ),
        &mut registry,
        &[],
        RegisterOptions::new(),
    ).unwrap();
    assert!( first );
    assert_eq!( registry.len(), 1 );

    let second = register(
        TestClass::new( "commands.Echo", &[] ),
        &mut registry,
        &[],
        RegisterOptions::new(),
    );

    match second {
        Err( RegistryError::DuplicateRegistration { id }) => assert_eq!( id, "commands.Echo" ),
        other => panic!( "expected DuplicateRegistration, got {other:?}" ),
    }

    // The registry is unchanged from after the first call.
    assert_eq!( registry.len(), 1 );

}
