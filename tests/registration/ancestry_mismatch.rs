use plugin_link::{ register, Capability, RegisterOptions, Registry, RegistryError };

use crate::TestClass ;

#[test]
fn mismatch_raises_by_default() {

    let mut registry = Registry::new();

    let result = register(
        TestClass::new( "widgets.Button", &[ "widget" ]),
        &mut registry,
        &[ Capability::from( "command" )],
        RegisterOptions::new(),
    );

    match result {
        Err( RegistryError::AncestryMismatch { qualified_name }) => {
            assert_eq!( qualified_name, "widgets.Button" );
        }
        other => panic!( "expected AncestryMismatch, got {other:?}" ),
    }
    assert!( registry.is_empty() );

}

#[test]
fn quiet_mismatch_returns_false() {

    let mut registry = Registry::new();

    let registered = register(
        TestClass::new( "widgets.Button", &[ "widget" ]),
        &mut registry,
        &[ Capability::from( "command" )],
        RegisterOptions::new().with_quiet_ancestry_mismatch( true ),
    ).unwrap();

    assert!( !registered );
    assert!( registry.is_empty() );

}

#[test]
fn one_matching_capability_suffices() {

    let mut registry = Registry::new();

    let registered = register(
        TestClass::new( "commands.Paste", &[ "widget", "command" ]),
        &mut registry,
        &[ Capability::from( "command" ), Capability::from( "view" )],
        RegisterOptions::new(),
    ).unwrap();

    assert!( registered );
    assert!( registry.contains( "commands.Paste" ));

}
