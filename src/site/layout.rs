use crate::config::Config;
use crate::site::catalog::{
    alternative_categories, alternatives, calculators, Alternative, CalculatorEntry,
};
use crate::site::routes::{mobile_nav_items, nav_items, NavItem, Route};
use serde::Serialize;

pub const SITE_TITLE: &str = "Tools 2025";
pub const SITE_DESCRIPTION: &str =
    "A collection of useful calculators and utilities to help with everyday tasks";

pub const FEEDBACK_PROMPT: &str = "Have suggestions or feedback?";
pub const FEEDBACK_LINK_TEXT: &str = "I'd love to hear from you!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackLink {
    pub url: String,
    pub text: &'static str,
}

/// Footer link, present only when a feedback URL is configured
pub fn feedback_link(config: &Config) -> Option<FeedbackLink> {
    config.feedback_url().map(|url| FeedbackLink {
        url: url.to_string(),
        text: FEEDBACK_LINK_TEXT,
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteEntry {
    pub path: &'static str,
    pub title: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternativeGroup {
    pub category: &'static str,
    pub alternatives: Vec<Alternative>,
}

/// Everything the layout renders around a page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteMap {
    pub title: &'static str,
    pub description: &'static str,
    pub routes: Vec<RouteEntry>,
    pub nav: Vec<NavItem>,
    pub mobile_nav: Vec<NavItem>,
    pub calculators: Vec<CalculatorEntry>,
    pub alternatives: Vec<AlternativeGroup>,
    pub feedback: Option<FeedbackLink>,
}

pub fn site_map(config: &Config) -> SiteMap {
    let all_alternatives = alternatives();
    let grouped = alternative_categories()
        .into_iter()
        .map(|category| AlternativeGroup {
            category,
            alternatives: all_alternatives
                .iter()
                .filter(|alt| alt.category == category)
                .cloned()
                .collect(),
        })
        .collect();

    SiteMap {
        title: SITE_TITLE,
        description: SITE_DESCRIPTION,
        routes: Route::ALL
            .iter()
            .map(|route| RouteEntry {
                path: route.path(),
                title: route.title(),
            })
            .collect(),
        nav: nav_items().to_vec(),
        mobile_nav: mobile_nav_items(),
        calculators: calculators(),
        alternatives: grouped,
        feedback: feedback_link(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_map() {
        let mut config = Config::empty();
        let map = site_map(&config);
        assert_eq!(map.title, "Tools 2025");
        assert_eq!(map.routes.len(), 8);
        assert_eq!(map.routes[5].path, "/calculator/download-speed");
        assert_eq!(map.nav.len(), 3);
        assert_eq!(map.mobile_nav.len(), 2);
        assert_eq!(map.alternatives.len(), 1);
        assert_eq!(map.alternatives[0].category, "Online Tools");
        assert_eq!(map.alternatives[0].alternatives.len(), 2);
        assert_eq!(map.feedback, None);

        config.override_feedback_url(Some("https://forms.example/f".to_string()));
        assert!(site_map(&config).feedback.is_some());
    }

    #[test]
    fn test_feedback_link_hidden_without_url() {
        assert_eq!(feedback_link(&Config::empty()), None);
    }

    #[test]
    fn test_feedback_link_from_config() {
        let mut config = Config::empty();
        config.override_feedback_url(Some("https://forms.example/f".to_string()));
        let link = feedback_link(&config).unwrap();
        assert_eq!(link.url, "https://forms.example/f");
        assert_eq!(link.text, "I'd love to hear from you!");
    }
}
