//! Top-level site controller.
//!
//! The shell owns the current view and is the only place navigation state
//! lives; presentation layers read from it instead of observing ambient
//! globals. Environment access (current fragment, user-agent string, scroll
//! position) goes through the [`Host`] trait so the controller can be driven
//! by a browser binding in production and by mock expectations in tests.

use crate::catalog::{Catalog, DownloadLink};
use crate::platform::{DownloadRanker, Platform};
use crate::route::View;

/// Environment the shell runs in
#[cfg_attr(test, mockall::automock)]
pub trait Host: Send + Sync {
    /// The current URL fragment (everything after `#`), possibly empty
    fn fragment(&self) -> String;

    /// The client's self-reported identification string
    fn user_agent(&self) -> String;

    /// Reset the scroll position to the top of the document
    fn scroll_to_top(&self);
}

pub struct Shell<H: Host> {
    host: H,
    catalog: Catalog,
    view: View,
    /// Detected when the install view mounts, dropped when it unmounts.
    /// Not re-detected on navigations that stay within a view's lifetime.
    platform: Option<Platform>,
}

impl<H: Host> Shell<H> {
    /// Resolve the initial view from the host's current fragment.
    ///
    /// The initial resolution happens before first render and does not
    /// touch the scroll position.
    pub fn new(host: H, catalog: Catalog) -> Self {
        let view = View::resolve(&host.fragment());
        let mut shell = Self {
            host,
            catalog,
            view,
            platform: None,
        };
        shell.mount();
        shell
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    /// Handle a navigation event.
    ///
    /// Scroll is reset before the new view renders, on every event, even
    /// when the fragment resolves to the view already shown. Returns the
    /// view to render.
    pub fn on_hash_change(&mut self) -> View {
        self.host.scroll_to_top();

        let next = View::resolve(&self.host.fragment());
        if next != self.view {
            self.view = next;
            self.mount();
        }

        self.view
    }

    /// The catalog ordered for the current visitor.
    ///
    /// Outside the install view no platform is cached and the catalog comes
    /// back in authored order.
    pub fn downloads(&self) -> Vec<DownloadLink> {
        let platform = self.platform.unwrap_or(Platform::Unknown);
        DownloadRanker::with_platform(platform).rank(&self.catalog.links)
    }

    fn mount(&mut self) {
        self.platform = match self.view {
            View::Install => Some(Platform::from_user_agent(&self.host.user_agent())),
            View::Home => None,
        };
    }
}
