use crate::anchor::PackageAnchor ;

/// File stems ignored by default during discovery: the package-level manifest
/// and the host entry-point manifest are lifecycle files, not plugin modules.
pub const DEFAULT_IGNORED_STEMS: [&str; 2] = [ "package", "main" ];

/// Options for one [`import_modules`]( crate::import_modules ) call.
#[derive( Debug, Default, Clone )]
pub struct DiscoveryOptions<'a> {
    anchor: Option<&'a PackageAnchor>,
    recursive: bool,
    ignored_stems: Option<Vec<String>>,
}

impl<'a> DiscoveryOptions<'a> {

    /// Creates the default option set: no anchor (absolute module names), not
    /// recursive, built-in ignored stems.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves constructed module names relative to `anchor` instead of
    /// absolutely.
    pub fn with_anchor( mut self, anchor: &'a PackageAnchor ) -> Self {
        self.anchor = Some( anchor );
        self
    }

    /// Descends into subdirectories, mapping nesting to dotted name segments.
    pub fn with_recursive( mut self, recursive: bool ) -> Self {
        self.recursive = recursive ;
        self
    }

    /// Replaces the built-in ignored file stems
    /// ([`DEFAULT_IGNORED_STEMS`]).
    pub fn with_ignored_stems( mut self, stems: impl IntoIterator<Item = impl Into<String>> ) -> Self {
        self.ignored_stems = Some( stems.into_iter().map( Into::into ).collect() );
        self
    }

    #[inline] pub fn anchor( &self ) -> Option<&'a PackageAnchor> { self.anchor }

    #[inline] pub fn recursive( &self ) -> bool { self.recursive }

    /// The ignored stems in effect for this call.
    pub fn ignored_stems( &self ) -> Vec<String> {
        match &self.ignored_stems {
            Some( stems ) => stems.clone(),
            None => DEFAULT_IGNORED_STEMS.iter().map(| stem | ( *stem ).to_string() ).collect(),
        }
    }

}
