use plugin_link::{ import_modules, DiscoveryOptions, PackageAnchor };

use crate::{ plugin_dir, write_module, ScriptLoader };

#[test]
fn nesting_maps_to_dotted_segments_in_preorder() {

    let directory = plugin_dir();
    write_module( directory.path(), "alpha.toml", "" );
    write_module( directory.path(), "nested/beta.toml", "" );
    write_module( directory.path(), "nested/inner/gamma.toml", "" );

    let mut loader = ScriptLoader::new();
    let options = DiscoveryOptions::new().with_recursive( true );
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &options ).unwrap();

    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "alpha", "nested.beta", "nested.inner.gamma" ]);

}

#[test]
fn anchored_names_resolve_relative_to_the_package() {

    let directory = plugin_dir();
    write_module( directory.path(), "alpha.toml", "" );
    write_module( directory.path(), "nested/beta.toml", "" );

    let anchor = PackageAnchor::new( "app.plugins", directory.path().join( "package.toml" )).unwrap();

    let mut loader = ScriptLoader::new();
    let options = DiscoveryOptions::new().with_recursive( true ).with_anchor( &anchor );
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &options ).unwrap();

    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "app.plugins.alpha", "app.plugins.nested.beta" ]);

}
