use plugin_link::{ import_modules, DiscoveryOptions, ManifestLoader, Registry };

use crate::{ plugin_dir, write_module };

#[test]
fn mutually_referencing_siblings_both_load() {

    let directory = plugin_dir();
    write_module( directory.path(), "alpha.toml", r#"
        provides = [ "alpha.sym" ]
        requires = [ "beta.sym" ]

        [[class]]
        name = "Alpha"
    "# );
    write_module( directory.path(), "beta.toml", r#"
        provides = [ "beta.sym" ]
        requires = [ "alpha.sym" ]

        [[class]]
        name = "Beta"
    "# );

    let mut registry = Registry::new();
    let mut loader = ManifestLoader::new( &mut registry );
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() ).unwrap();

    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "alpha", "beta" ]);

    assert!( registry.contains( "Alpha" ));
    assert!( registry.contains( "Beta" ));

}
