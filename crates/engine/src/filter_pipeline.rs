//! The RankingPipeline shared by every list-producing query.
//!
//! Four stages, always in this order:
//! 1. Filter: keep candidates matching every filter
//! 2. Sort: ascending by primary key, ties by ascending name
//! 3. Reverse: only for descending queries
//! 4. Truncate: keep the first N, after the reverse

use crate::action::SortOrder;
use crate::traits::{Filter, Ranked};

/// Chains filters, then sorts, reverses and truncates.
///
/// ## Usage
/// ```ignore
/// let ranked = RankingPipeline::new()
///     .add_filter(KindFilter::new(VideoClass::Movies))
///     .add_filter(ViewedFilter)
///     .order(SortOrder::Descending)
///     .limit(Some(3))
///     .rank(catalog.videos.iter(), |video| video.views as f64);
/// ```
pub struct RankingPipeline<T> {
    filters: Vec<Box<dyn Filter<T>>>,
    order: SortOrder,
    limit: Option<usize>,
}

impl<T: Ranked> RankingPipeline<T> {
    /// Create a new pipeline: no filters, ascending, no limit.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            order: SortOrder::Ascending,
            limit: None,
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter<T> + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// `None` and `Some(0)` both mean "no limit"
    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Run all four stages over `items`, ranking by `key`.
    pub fn rank<'a, K>(&self, items: impl IntoIterator<Item = &'a T>, key: K) -> Vec<&'a T>
    where
        T: 'a,
        K: Fn(&T) -> f64,
    {
        let mut current: Vec<&'a T> = items.into_iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current.retain(|item| filter.matches(*item));
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }

        current.sort_by(|a, b| {
            key(*a)
                .total_cmp(&key(*b))
                .then_with(|| a.rank_name().cmp(b.rank_name()))
        });

        if self.order == SortOrder::Descending {
            current.reverse();
        }

        if let Some(limit) = self.limit.filter(|&n| n > 0) {
            current.truncate(limit);
        }
        current
    }
}

impl<T: Ranked> Default for RankingPipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Names of ranked entities, in ranked order
pub fn names<T: Ranked>(ranked: &[&T]) -> Vec<String> {
    ranked.iter().map(|item| item.rank_name().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::ViewedFilter;
    use catalog::{Genre, Video};

    fn video(title: &str, views: u32) -> Video {
        let mut video = Video::movie(title, 2000, [Genre::Drama], Vec::new(), 100);
        video.views = views;
        video
    }

    fn titles(ranked: &[&Video]) -> Vec<String> {
        names(ranked)
    }

    #[test]
    fn test_empty_pipeline_sorts_ascending() {
        let videos = vec![video("A", 3), video("B", 5), video("C", 1)];
        let ranked = RankingPipeline::new().rank(&videos, |v: &Video| v.views as f64);
        assert_eq!(titles(&ranked), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reverse_happens_before_truncate() {
        let videos = vec![video("A", 3), video("B", 5), video("C", 1)];

        let ranked = RankingPipeline::new()
            .order(SortOrder::Descending)
            .limit(Some(2))
            .rank(&videos, |v: &Video| v.views as f64);

        assert_eq!(titles(&ranked), vec!["B", "A"]);
    }

    #[test]
    fn test_ties_break_by_name_then_reverse() {
        let videos = vec![video("Beta", 2), video("Alpha", 2), video("Gamma", 1)];

        let ascending = RankingPipeline::new().rank(&videos, |v: &Video| v.views as f64);
        assert_eq!(titles(&ascending), vec!["Gamma", "Alpha", "Beta"]);

        let descending = RankingPipeline::new()
            .order(SortOrder::Descending)
            .rank(&videos, |v: &Video| v.views as f64);
        assert_eq!(titles(&descending), vec!["Beta", "Alpha", "Gamma"]);
    }

    #[test]
    fn test_zero_limit_means_unlimited() {
        let videos = vec![video("A", 3), video("B", 5), video("C", 1)];

        let ranked = RankingPipeline::new()
            .limit(Some(0))
            .rank(&videos, |v: &Video| v.views as f64);
        assert_eq!(ranked.len(), 3);

        let ranked = RankingPipeline::new()
            .limit(Some(10))
            .rank(&videos, |v: &Video| v.views as f64);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn test_filters_run_before_sorting() {
        let videos = vec![video("A", 0), video("B", 5), video("C", 1)];

        let ranked = RankingPipeline::new()
            .add_filter(ViewedFilter)
            .rank(&videos, |v: &Video| v.views as f64);

        assert_eq!(titles(&ranked), vec!["C", "B"]);
    }
}
