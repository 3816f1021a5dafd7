//! Fragment-identifier view router.
//!
//! The site is hash-routed: the portion of the URL after `#` selects which
//! page to render. The set of views is closed so the match below is checked
//! for exhaustiveness by the compiler.

use std::fmt;

/// A page the site can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Install,
}

impl View {
    /// Resolve a URL fragment to a view.
    ///
    /// Total over all strings: a leading `#` is stripped if present, then
    /// `"/install"` selects the install page and everything else, including
    /// the empty fragment, `"/"`, and unrecognized paths, falls back to the
    /// home page.
    pub fn resolve(fragment: &str) -> Self {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);

        match path {
            "/install" => View::Install,
            _ => View::Home,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Home => "home",
            View::Install => "install",
        };
        write!(f, "{}", name)
    }
}
