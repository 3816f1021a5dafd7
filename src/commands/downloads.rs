use anyhow::Result;
use log::debug;
use std::path::PathBuf;

use crate::{catalog::Catalog, platform::DownloadRanker, runtime::Runtime};

/// Print the download catalog in the order a visitor with the given
/// user-agent string would see it
#[tracing::instrument(skip(runtime, catalog_path))]
pub fn downloads<R: Runtime>(
    runtime: R,
    user_agent: &str,
    catalog_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::load(&runtime, &path)?,
        None => Catalog::builtin(),
    };

    if catalog.is_empty() {
        debug!("Catalog is empty");
    }

    let ranker = DownloadRanker::new(user_agent);
    debug!("Detected platform: {:?}", ranker.platform());

    let ranked = ranker.rank(&catalog.links);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else {
        for link in &ranked {
            println!("{}\t{}", link.label, link.url);
        }
    }

    Ok(())
}
