//! Platform detection and download ordering module
//!
//! This module provides abstractions for detecting the visitor's platform
//! from a user-agent string and ordering the download catalog so that
//! artifacts for the detected platform come first.

mod detection;
mod ranker;

pub use detection::Platform;
pub use ranker::DownloadRanker;
