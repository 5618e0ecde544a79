use plugin_link::{ import_modules, DiscoveryOptions };

use crate::{ plugin_dir, write_module, ScriptLoader };

#[test]
fn nested_files_are_not_loaded_without_recursion() {

    let directory = plugin_dir();
    write_module( directory.path(), "top.toml", "" );
    write_module( directory.path(), "nested/deep.toml", "" );

    let mut loader = ScriptLoader::new();
    let records = import_modules( directory.path(), &[ "toml" ], &mut loader, &DiscoveryOptions::new() ).unwrap();

    let names = records.iter().map(| record | record.module_name() ).collect::<Vec<_>>();
    assert_eq!( names, vec![ "top" ]);

}
