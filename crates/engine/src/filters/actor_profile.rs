//! Filters on an actor's awards and career description.

use crate::traits::Filter;
use catalog::{Actor, Award};

/// Keeps actors holding every required award
pub struct AwardsFilter {
    required: Vec<Award>,
}

impl AwardsFilter {
    pub fn new(required: Vec<Award>) -> Self {
        Self { required }
    }
}

impl Filter<Actor> for AwardsFilter {
    fn name(&self) -> &str {
        "AwardsFilter"
    }

    fn matches(&self, actor: &Actor) -> bool {
        actor.has_all_awards(&self.required)
    }
}

/// Keeps actors whose description contains every keyword.
///
/// Keywords must already be lowercase; description words are lowercased
/// with punctuation stripped, so "Director," matches "director".
pub struct DescriptionFilter {
    keywords: Vec<String>,
}

impl DescriptionFilter {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Filter<Actor> for DescriptionFilter {
    fn name(&self) -> &str {
        "DescriptionFilter"
    }

    fn matches(&self, actor: &Actor) -> bool {
        let words = actor.description_words();
        self.keywords.iter().all(|keyword| words.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn actor(description: &str, awards: &[(Award, u32)]) -> Actor {
        Actor::new(
            "A",
            description,
            Vec::new(),
            awards.iter().copied().collect::<HashMap<_, _>>(),
        )
    }

    #[test]
    fn test_awards_filter_requires_all() {
        let actor = actor("", &[(Award::BestDirector, 1), (Award::BestPerformance, 3)]);

        assert!(AwardsFilter::new(vec![Award::BestDirector]).matches(&actor));
        assert!(
            AwardsFilter::new(vec![Award::BestDirector, Award::BestPerformance]).matches(&actor)
        );
        assert!(
            !AwardsFilter::new(vec![Award::BestDirector, Award::BestScreenplay]).matches(&actor)
        );
    }

    #[test]
    fn test_description_filter_is_superset_test() {
        let actor = actor("An American actor, Director and producer.", &[]);

        let filter = DescriptionFilter::new(vec!["director".to_string(), "actor".to_string()]);
        assert!(filter.matches(&actor));

        let filter = DescriptionFilter::new(vec!["director".to_string(), "singer".to_string()]);
        assert!(!filter.matches(&actor));
    }

    #[test]
    fn test_description_filter_matches_whole_words_only() {
        let actor = actor("Actress and screenwriter", &[]);
        let filter = DescriptionFilter::new(vec!["actor".to_string()]);
        assert!(!filter.matches(&actor));
    }
}
