use pages_prune_api::Deployment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionFilter {
    /// Only deployments whose build was skipped.
    Skipped,
    /// Everything except the live deployment.
    ExcludeProduction { production_id: String },
}

impl DeletionFilter {
    pub fn is_eligible(&self, deployment: &Deployment) -> bool {
        match self {
            DeletionFilter::Skipped => deployment.is_skipped,
            DeletionFilter::ExcludeProduction { production_id } => {
                deployment.id != *production_id
            }
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            DeletionFilter::Skipped => "skipped",
            DeletionFilter::ExcludeProduction { .. } => "non-production",
        }
    }
}

/// Order in which records within a single page are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOrder {
    /// As returned by the API (newest first).
    Natural,
    /// Oldest first.
    Reversed,
}

impl PageOrder {
    pub fn arrange(self, mut deployments: Vec<Deployment>) -> Vec<Deployment> {
        if self == PageOrder::Reversed {
            deployments.reverse();
        }
        deployments
    }
}

/// How a run walks the deployment list and what it removes. Pages are
/// always visited from the oldest (highest number) down to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrunePolicy {
    pub filter: DeletionFilter,
    pub order: PageOrder,
    /// Pages `1..=protected_pages` are never listed for deletion.
    pub protected_pages: u32,
}

impl PrunePolicy {
    pub fn skipped() -> Self {
        Self {
            filter: DeletionFilter::Skipped,
            order: PageOrder::Reversed,
            protected_pages: 0,
        }
    }

    pub fn non_production(production_id: String, keep_first_n_pages: u32) -> Self {
        Self {
            filter: DeletionFilter::ExcludeProduction { production_id },
            order: PageOrder::Natural,
            protected_pages: keep_first_n_pages,
        }
    }

    pub fn is_protected(&self, page: u32) -> bool {
        page <= self.protected_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deployment(id: &str, is_skipped: bool) -> Deployment {
        Deployment {
            id: id.to_string(),
            short_id: id.chars().take(8).collect(),
            project_name: "site".to_string(),
            environment: "preview".to_string(),
            url: None,
            created_on: "2024-01-01T00:00:00Z".to_string(),
            is_skipped,
        }
    }

    #[test]
    fn test_skip_filter() {
        let filter = DeletionFilter::Skipped;
        assert!(filter.is_eligible(&deployment("a", true)));
        assert!(!filter.is_eligible(&deployment("b", false)));
    }

    #[test]
    fn test_production_filter_ignores_skip_flag() {
        let filter = DeletionFilter::ExcludeProduction {
            production_id: "live".to_string(),
        };
        assert!(!filter.is_eligible(&deployment("live", false)));
        assert!(!filter.is_eligible(&deployment("live", true)));
        assert!(filter.is_eligible(&deployment("old", false)));
        assert!(filter.is_eligible(&deployment("older", true)));
    }

    #[test]
    fn test_page_order() {
        let page = vec![deployment("new", false), deployment("old", false)];

        let natural = PageOrder::Natural.arrange(page.clone());
        assert_eq!(natural[0].id, "new");

        let reversed = PageOrder::Reversed.arrange(page);
        assert_eq!(reversed[0].id, "old");
        assert_eq!(reversed[1].id, "new");
    }

    #[test]
    fn test_skipped_policy_protects_nothing() {
        let policy = PrunePolicy::skipped();
        assert_eq!(policy.order, PageOrder::Reversed);
        assert!(!policy.is_protected(1));
    }

    #[test]
    fn test_non_production_policy_protects_first_pages() {
        let policy = PrunePolicy::non_production("live".to_string(), 2);
        assert_eq!(policy.order, PageOrder::Natural);
        assert!(policy.is_protected(1));
        assert!(policy.is_protected(2));
        assert!(!policy.is_protected(3));
    }
}
