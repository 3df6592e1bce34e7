//! URL path derivation for docs pages.
//!
//! A page's URL is composed from the configured base path, the source file's
//! directory relative to the content root, and the file name — except that a
//! file named `index` contributes no trailing segment, so `guides/index.mdx`
//! lands on `/guides` rather than `/guides/index`. Mirrors the convention
//! every static-site host uses for directory indexes.

/// The file stem that maps to its containing directory's URL.
const INDEX_STEM: &str = "index";

/// The URL segment a file contributes: its stem, or nothing for `index`.
pub fn page_name(file_stem: &str) -> &str {
    if file_stem == INDEX_STEM { "" } else { file_stem }
}

/// Compose a clean absolute URL path from base path, relative directory,
/// and page name.
///
/// Empty segments are skipped and stray slashes trimmed, so callers can pass
/// values verbatim from config and file nodes:
///
/// - `("", "guides", "setup")` → `/guides/setup`
/// - `("docs", "guides", "")` → `/docs/guides`
/// - `("", "", "")` → `/`
pub fn page_path(base_path: &str, relative_dir: &str, page_name: &str) -> String {
    let mut path = String::from("/");
    for segment in [base_path, relative_dir, page_name] {
        for part in segment.split('/').filter(|p| !p.is_empty()) {
            if !path.ends_with('/') {
                path.push('/');
            }
            path.push_str(part);
        }
    }
    path
}
