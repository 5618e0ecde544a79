use std::collections::HashSet ;
use std::path::Path ;

use itertools::Itertools ;
use pipe_trait::Pipe ;

use crate::anchor::PackageAnchor ;
use crate::loader::{ LoadError, LoadRequest, ModuleLoader };
use super::{ DiscoveryError, DiscoveryOptions, FailedLoad, ModuleRecord };



/// Imports modules from files under `directory_path` whose extension is in
/// `extensions` (without leading dot).
///
/// Files whose stem starts with a period or is in the ignored-stem set are
/// skipped. With [`DiscoveryOptions::with_recursive`] the walk descends
/// top-down and nesting maps to dotted name segments (`a/b/mod.toml` becomes
/// `a.b.mod`); otherwise only the first level is visited. Failed loads are
/// retried per directory until a full pass resolves nothing new.
///
/// Returns the loaded modules in discovery order: directory pre-order, then
/// file-name order within a directory - not necessarily the order in which
/// load dependencies were resolved.
///
/// # Errors
///
/// - [`DiscoveryError::InvalidDirectory`] when the path does not resolve to a
///   directory. Relative paths are resolved against the current working
///   directory.
/// - [`DiscoveryError::ModuleLoad`] when failures remain for a directory
///   after the retry loop converges. Modules already loaded from earlier
///   directories in the same call are not rolled back.
/// - [`DiscoveryError::IOError`] when the walk itself fails.
pub fn import_modules<L: ModuleLoader>(
    directory_path: impl AsRef<Path>,
    extensions: &[&str],
    loader: &mut L,
    options: &DiscoveryOptions<'_>,
) -> Result<Vec<ModuleRecord<L::Module>>, DiscoveryError> {

    let directory_path = directory_path.as_ref();
    let root = match directory_path.is_absolute() {
        true => directory_path.to_path_buf(),
        false => std::env::current_dir()?.join( directory_path ),
    };

    if !root.is_dir() {
        return Err( DiscoveryError::InvalidDirectory( root ));
    }

    let ignored_stems = options.ignored_stems().into_iter().collect::<HashSet<_>>();

    let mut records = Vec::new();
    visit_directory( &root, &root, extensions, &ignored_stems, loader, options, &mut records )?;

    if !records.is_empty() {
        loader.invalidate_caches();
    }

    Ok( records )

}

fn visit_directory<L: ModuleLoader>(
    directory: &Path,
    root: &Path,
    extensions: &[&str],
    ignored_stems: &HashSet<String>,
    loader: &mut L,
    options: &DiscoveryOptions<'_>,
    records: &mut Vec<ModuleRecord<L::Module>>,
) -> Result<(), DiscoveryError> {

    let entries = std::fs::read_dir( directory )?
        .filter_map(| entry | match entry {
            Ok( entry ) => Some( entry.path() ),
            Err( err ) => {
                log::warn!( "Skipping unreadable entry in '{}': {err}", directory.display() );
                None
            }
        })
        .collect::<Vec<_>>()
        .pipe(| mut paths | { paths.sort(); paths });

    let prefix = dotted_prefix( directory, root );

    // Slots keep the results in file order; the fixpoint below may resolve
    // them in a different order.
    let mut slots: Vec<Option<ModuleRecord<L::Module>>> = Vec::new();
    let mut failures: Vec<( usize, LoadRequest, LoadError )> = Vec::new();

    for path in entries.iter().filter(| path | path.is_file() ) {

        let Some( request ) = eligible_request( path, directory, &prefix, extensions, ignored_stems, options.anchor() ) else {
            continue ;
        };

        slots.push( None );
        let index = slots.len() - 1;

        match loader.load( &request ) {
            Ok( module ) => slots[ index ] = Some( ModuleRecord::new( request, module )),
            Err( error ) => failures.push(( index, request, error )),
        }

    }

    // Retry every failed load in fresh passes while the previous pass strictly
    // reduced the failure count. Terminates: the count is non-increasing and
    // the pass count is bounded by the initial failure count.
    let mut last_failure_count: Option<usize> = None;
    while !failures.is_empty() && last_failure_count.map_or( true, | last | failures.len() < last ) {

        last_failure_count = Some( failures.len() );
        log::debug!( "Retrying {} failed module load(s) in '{}'", failures.len(), directory.display() );

        let ( resolved, unresolved ): ( Vec<_>, Vec<_> ) = failures.into_iter()
            .map(|( index, request, _ )| match loader.load( &request ) {
                Ok( module ) => Ok(( index, ModuleRecord::new( request, module ))),
                Err( error ) => Err(( index, request, error )),
            })
            .partition_result();

        resolved.into_iter().for_each(|( index, record )| slots[ index ] = Some( record ));
        failures = unresolved ;

    }

    if !failures.is_empty() {
        return Err( DiscoveryError::ModuleLoad {
            directory: directory.to_path_buf(),
            failures: failures.into_iter()
                .map(|( _, request, error )| FailedLoad::new( request, error ))
                .collect(),
        });
    }

    records.extend( slots.into_iter().flatten() );

    if options.recursive() {
        for subdirectory in entries.iter().filter(| path | path.is_dir() ) {
            visit_directory( subdirectory, root, extensions, ignored_stems, loader, options, records )?;
        }
    }

    Ok(())

}

/// Builds the load request for a file, or `None` when the file is not an
/// eligible module source.
fn eligible_request(
    path: &Path,
    directory: &Path,
    prefix: &str,
    extensions: &[&str],
    ignored_stems: &HashSet<String>,
    anchor: Option<&PackageAnchor>,
) -> Option<LoadRequest> {

    let extension = path.extension()?.to_str()?;
    if !extensions.contains( &extension ) {
        return None ;
    }

    let stem = path.file_stem()?.to_str()?;
    if stem.starts_with( '.' ) || ignored_stems.contains( stem ) {
        return None ;
    }

    let file_name = path.file_name()?.to_str()?.to_string();
    let module_name = match anchor {
        Some( package ) => package.resolve( &format!( ".{prefix}{stem}" )),
        None => format!( "{prefix}{stem}" ),
    };

    Some( LoadRequest::new( module_name, file_name, path.to_path_buf(), directory.to_path_buf() ))

}

/// Dotted path prefix for a visited directory: empty at the root, `"a.b."`
/// for the nested directory `a/b`.
fn dotted_prefix( directory: &Path, root: &Path ) -> String {
    match directory.strip_prefix( root ) {
        Ok( relative ) if relative.as_os_str().is_empty() => String::new(),
        Ok( relative ) => relative.components()
            .map(| component | component.as_os_str().to_string_lossy().into_owned() )
            .fold( String::new(), | mut prefix, segment | {
                prefix.push_str( &segment );
                prefix.push( '.' );
                prefix
            }),
        // The walk only ever visits descendants of the root.
        Err( _ ) => String::new(),
    }
}
