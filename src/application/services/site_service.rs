//! Curated ranking-site catalogue.

use crate::domain::content::ranking_sites;
use crate::domain::entities::SiteRecord;

/// Number of sites shown when no limit is given.
pub const DEFAULT_SITE_LIMIT: usize = 10;

/// Serves the static ranking-site list shown on the home page.
#[derive(Debug, Clone)]
pub struct SiteService {
    sites: Vec<SiteRecord>,
}

impl SiteService {
    pub fn new() -> Self {
        Self::with_sites(ranking_sites())
    }

    pub fn with_sites(mut sites: Vec<SiteRecord>) -> Self {
        sites.sort_by_key(|s| (s.rank, s.id));
        Self { sites }
    }

    /// Returns up to `limit` sites ordered by rank.
    pub fn top_sites(&self, limit: Option<usize>) -> Vec<SiteRecord> {
        let limit = limit.unwrap_or(DEFAULT_SITE_LIMIT);
        self.sites.iter().take(limit).cloned().collect()
    }
}

impl Default for SiteService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: i64, rank: u32) -> SiteRecord {
        SiteRecord {
            id,
            rank,
            url: format!("https://site{id}.example"),
            title: format!("site {id}"),
            description: String::new(),
            realtime_url: None,
            notice: None,
            highlights: [String::new(), String::new()],
        }
    }

    #[test]
    fn test_default_catalogue() {
        let sites = SiteService::new().top_sites(None);
        assert_eq!(sites.len(), 6);
        assert_eq!(sites[0].title, "TWIVIDEO");
    }

    #[test]
    fn test_sites_sorted_by_rank_and_limited() {
        let service = SiteService::with_sites(vec![site(1, 5), site(2, 1), site(3, 3)]);

        let ranks: Vec<u32> = service.top_sites(Some(2)).iter().map(|s| s.rank).collect();
        assert_eq!(ranks, vec![1, 3]);
    }
}
