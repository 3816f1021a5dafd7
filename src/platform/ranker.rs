use std::cmp::Reverse;

use super::Platform;
use crate::catalog::{DownloadLink, Os};

/// Orders download links so that artifacts for the detected platform come
/// first.
pub struct DownloadRanker {
    platform: Platform,
}

impl DownloadRanker {
    pub fn new(user_agent: &str) -> Self {
        Self {
            platform: Platform::from_user_agent(user_agent),
        }
    }

    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Return the catalog reordered by descending score.
    ///
    /// The sort is stable, so links with equal scores keep their catalog
    /// order. With an unknown platform every link scores 0 and the output
    /// equals the input. The input slice is never mutated.
    pub fn rank(&self, catalog: &[DownloadLink]) -> Vec<DownloadLink> {
        let mut ranked = catalog.to_vec();
        ranked.sort_by_key(|link| Reverse(self.score(link)));
        ranked
    }

    /// Score a link for ranking (higher sorts first)
    ///
    /// macOS links differentiate by priority (1 -> 99, 2 -> 98, ...), while
    /// Windows and Linux links matching the platform all score a flat 100
    /// and are left in catalog order relative to each other. Only the mac
    /// entries carry distinct priorities in the shipped catalog; the
    /// asymmetry is deliberate and must not be normalized.
    ///
    /// Scores are i64 so the subtraction cannot overflow for any u32
    /// priority; catalogs are user-suppliable and must never panic here.
    fn score(&self, link: &DownloadLink) -> i64 {
        match (self.platform, link.os) {
            (Platform::Mac, Os::Mac) => 100 - i64::from(link.priority),
            (Platform::Windows, Os::Windows) => 100,
            (Platform::Linux, Os::Linux) => 100,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to build a catalog from (os, priority) pairs
    fn make_links(entries: &[(Os, u32)]) -> Vec<DownloadLink> {
        entries
            .iter()
            .enumerate()
            .map(|(i, (os, priority))| DownloadLink {
                os: *os,
                label: format!("link-{}", i),
                url: format!("https://example.com/artifact-{}", i),
                priority: *priority,
            })
            .collect()
    }

    fn labels(links: &[DownloadLink]) -> Vec<&str> {
        links.iter().map(|l| l.label.as_str()).collect()
    }

    #[test]
    fn test_mac_orders_by_priority_then_catalog_order() {
        let ranker = DownloadRanker::with_platform(Platform::Mac);

        // Catalog order: windows, mac p1, mac p2, linux
        let catalog = make_links(&[
            (Os::Windows, 1),
            (Os::Mac, 1),
            (Os::Mac, 2),
            (Os::Linux, 1),
        ]);

        let ranked = ranker.rank(&catalog);

        // mac p1 (99), mac p2 (98), then the score-0 links in catalog order
        assert_eq!(labels(&ranked), vec!["link-1", "link-2", "link-0", "link-3"]);
    }

    #[test]
    fn test_windows_link_first_for_windows_ua() {
        let ranker = DownloadRanker::new("Mozilla/5.0 (Windows NT 10.0; Win64; x64)");

        let catalog = make_links(&[(Os::Mac, 1), (Os::Windows, 1)]);
        let ranked = ranker.rank(&catalog);

        assert_eq!(labels(&ranked), vec!["link-1", "link-0"]);
    }

    #[test]
    fn test_flat_score_keeps_catalog_order_within_platform() {
        // Two linux entries with different priorities both score 100; the
        // stable sort must keep them in catalog order.
        let ranker = DownloadRanker::with_platform(Platform::Linux);

        let catalog = make_links(&[(Os::Linux, 2), (Os::Linux, 1), (Os::Mac, 1)]);
        let ranked = ranker.rank(&catalog);

        assert_eq!(labels(&ranked), vec!["link-0", "link-1", "link-2"]);
    }

    #[test]
    fn test_unknown_platform_keeps_catalog_order() {
        let ranker = DownloadRanker::new("Mozilla/5.0 (Linux; Android 14; Pixel 8)");
        assert_eq!(ranker.platform(), Platform::Unknown);

        let catalog = make_links(&[
            (Os::Windows, 1),
            (Os::Mac, 1),
            (Os::Mac, 2),
            (Os::Linux, 1),
        ]);
        let ranked = ranker.rank(&catalog);

        assert_eq!(ranked, catalog);
    }

    #[test]
    fn test_rank_is_a_permutation() {
        let ranker = DownloadRanker::with_platform(Platform::Mac);

        let catalog = make_links(&[
            (Os::Linux, 1),
            (Os::Mac, 2),
            (Os::Windows, 1),
            (Os::Mac, 1),
        ]);
        let ranked = ranker.rank(&catalog);

        assert_eq!(ranked.len(), catalog.len());
        for link in &catalog {
            assert!(ranked.contains(link));
        }
        // Input is untouched.
        assert_eq!(labels(&catalog), vec!["link-0", "link-1", "link-2", "link-3"]);
    }

    #[test]
    fn test_empty_catalog() {
        let ranker = DownloadRanker::new("Macintosh");
        assert!(ranker.rank(&[]).is_empty());
    }

    #[test]
    fn test_huge_priority_does_not_overflow() {
        // Priorities above i32::MAX come straight from a catalog file; they
        // must score (deeply negative) rather than panic. Two links so the
        // sort actually evaluates the key.
        let ranker = DownloadRanker::with_platform(Platform::Mac);

        let catalog = make_links(&[(Os::Mac, 2_147_483_648), (Os::Windows, 1)]);
        let ranked = ranker.rank(&catalog);

        // The absurd mac priority sorts below the score-0 windows link.
        assert_eq!(labels(&ranked), vec!["link-1", "link-0"]);
    }

    #[test]
    fn test_duplicate_priorities_tie_silently() {
        // Two mac entries sharing priority 1 score 99 each and keep order.
        let ranker = DownloadRanker::with_platform(Platform::Mac);

        let catalog = make_links(&[(Os::Mac, 1), (Os::Mac, 1)]);
        let ranked = ranker.rank(&catalog);

        assert_eq!(labels(&ranked), vec!["link-0", "link-1"]);
    }
}
