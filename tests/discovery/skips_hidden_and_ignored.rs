use plugin_link::{ import_modules, DiscoveryOptions };

use crate::{ plugin_dir, write_module, ScriptLoader };

#[test]
fn hidden_ignored_and_foreign_files_are_skipped() {

    let directory = plugin_dir();
    write_module( directory.path(), "foo.toml", "" );
    write_module( directory.path(), ".hidden.toml", "" );
    write_module( directory.path(), "package.toml", "" );
    write_module( directory.path(), "main.toml", "" );
    write_module( directory.path(), "notes.txt", "" );

    let mut loader = ScriptLoader::new();
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() ).unwrap();

    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "foo" ]);
    assert_eq!( loader.invalidations, 1 );

}

#[test]
fn custom_ignored_stems_replace_the_default_set() {

    let directory = plugin_dir();
    write_module( directory.path(), "foo.toml", "" );
    write_module( directory.path(), "main.toml", "" );

    let mut loader = ScriptLoader::new();
    let options = DiscoveryOptions::new().with_ignored_stems([ "foo" ]);
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &options ).unwrap();

    // "main" is no longer ignored once the set is replaced.
    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "main" ]);

}
