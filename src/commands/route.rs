use anyhow::Result;
use log::debug;

use crate::route::View;

/// Resolve a URL fragment and print the view it selects
#[tracing::instrument]
pub fn route(fragment: &str) -> Result<()> {
    let view = View::resolve(fragment);
    debug!("Fragment {:?} resolved to {:?}", fragment, view);

    println!("{}", view);
    Ok(())
}
