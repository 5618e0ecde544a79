use plugin_link::{ import_modules, DiscoveryOptions, ManifestLoader, Registrable, Registry };

use crate::{ plugin_dir, write_module };

#[test]
fn loaded_manifests_register_their_classes() {

    let directory = plugin_dir();
    write_module( directory.path(), "echo.toml", r#"
        [[class]]
        name = "Echo"
        capabilities = [ "command" ]
        entry = "echo"
    "# );

    let mut registry = Registry::new();
    let mut loader = ManifestLoader::new( &mut registry ).with_required_capabilities([ "command" ]);
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() ).unwrap();

    assert_eq!( records.len(), 1 );
    assert_eq!( records[ 0 ].module(), &vec![ "Echo".to_string() ]);

    let spec = registry.get( "Echo" ).unwrap();
    assert_eq!( spec.qualified_name(), "Echo" );
    assert_eq!( spec.entry(), "echo" );
    assert_eq!( spec.module_name(), "echo" );

}

#[test]
fn capability_mismatch_aborts_the_module() {

    let directory = plugin_dir();
    write_module( directory.path(), "widget.toml", r#"
        [[class]]
        name = "Button"
        capabilities = [ "widget" ]
    "# );

    let mut registry = Registry::new();
    let mut loader = ManifestLoader::new( &mut registry ).with_required_capabilities([ "command" ]);
    let error = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() );

    assert!( error.is_err() );
    assert!( registry.is_empty() );

}

#[test]
fn quiet_mismatch_skips_the_class_but_loads_the_module() {

    let directory = plugin_dir();
    write_module( directory.path(), "widget.toml", r#"
        [[class]]
        name = "Button"
        capabilities = [ "widget" ]
        quiet_ancestry_mismatch = true
    "# );

    let mut registry = Registry::new();
    let mut loader = ManifestLoader::new( &mut registry ).with_required_capabilities([ "command" ]);
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() ).unwrap();

    assert_eq!( records.len(), 1 );
    assert!( records[ 0 ].module().is_empty() );
    assert!( registry.is_empty() );

}

#[test]
fn malformed_manifest_fails_discovery() {

    let directory = plugin_dir();
    write_module( directory.path(), "broken.toml", "not toml = = =" );

    let mut registry = Registry::new();
    let mut loader = ManifestLoader::new( &mut registry );
    let error = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() );

    assert!( error.is_err() );

}
