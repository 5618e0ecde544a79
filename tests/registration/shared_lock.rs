use std::sync::{ Arc, Mutex };

use plugin_link::{ register, RegisterOptions, Registry, RegistryError };

use crate::TestClass ;

#[test]
fn one_lock_guards_two_registries() {

    let lock = Mutex::new( () );
    let mut commands = Registry::new();
    let mut views = Registry::new();

    std::thread::scope(| scope | {
        let lock = &lock ;
        let commands = &mut commands ;
        let views = &mut views ;

        scope.spawn( move || {
            for index in 0..50 {
                register(
                    TestClass::new( &format!( "commands.C{index}" ), &[] ),
                    commands,
                    &[],
                    RegisterOptions::new().with_lock( lock ),
                ).unwrap();
            }
        });

        scope.spawn( move || {
            for index in 0..50 {
                register(
                    TestClass::new( &format!( "views.V{index}" ), &[] ),
                    views,
                    &[],
                    RegisterOptions::new().with_lock( lock ),
                ).unwrap();
            }
        });
    });

    assert_eq!( commands.len(), 50 );
    assert_eq!( views.len(), 50 );

}

#[test]
fn poisoned_lock_is_reported() {

    let lock = Arc::new( Mutex::new( () ));
    let mut registry = Registry::new();

    let poisoner = Arc::clone( &lock );
    std::thread::spawn( move || {
        let _guard = poisoner.lock().unwrap();
        panic!( "poison the registration lock" );
    }).join().unwrap_err();

    let result = register(
        TestClass::new( "commands.Echo", &[] ),
        &mut registry,
        &[],
        RegisterOptions::new().with_lock( &lock ),
    );

    assert!( matches!( result, Err( RegistryError::LockPoisoned )));
    assert!( registry.is_empty() );

}
