//! # Navigation Entries
//!
//! The sidebar's data: one entry per topic, grouped, in reading order.
//! Built once as a static table and never mutated.
//!
//! Which entry is active is never stored. It is derived on demand by
//! comparing each entry's route with the current route.

/// Icon identifiers. Rendering resolves them to glyphs (see the sidebar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Home,
    Server,
    Terminal,
    Key,
    Shield,
    Dollar,
    Skull,
    Message,
    Refresh,
    Book,
    Github,
    External,
}

#[derive(Debug, PartialEq, Eq)]
pub struct NavigationEntry {
    pub title: &'static str,
    pub route: &'static str,
    pub icon: Icon,
    pub group: Option<&'static str>,
}

/// A link shown under "Resources". Displayed, not navigable.
#[derive(Debug)]
pub struct ExternalLink {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

pub static NAV_ENTRIES: &[NavigationEntry] = &[
    NavigationEntry {
        title: "Introduction",
        route: "/",
        icon: Icon::Home,
        group: Some("Getting Started"),
    },
    NavigationEntry {
        title: "Configuration",
        route: "/configuration",
        icon: Icon::Server,
        group: Some("Getting Started"),
    },
    NavigationEntry {
        title: "Commands",
        route: "/commands",
        icon: Icon::Terminal,
        group: Some("Features"),
    },
    NavigationEntry {
        title: "Permissions",
        route: "/permissions",
        icon: Icon::Key,
        group: Some("Features"),
    },
    NavigationEntry {
        title: "Protection",
        route: "/protection",
        icon: Icon::Shield,
        group: Some("Features"),
    },
    NavigationEntry {
        title: "Economy",
        route: "/economy",
        icon: Icon::Dollar,
        group: Some("Features"),
    },
    NavigationEntry {
        title: "Graves",
        route: "/graves",
        icon: Icon::Skull,
        group: Some("Features"),
    },
    NavigationEntry {
        title: "Discord",
        route: "/discord",
        icon: Icon::Message,
        group: Some("Integrations"),
    },
    NavigationEntry {
        title: "Authentication",
        route: "/authentication",
        icon: Icon::Shield,
        group: Some("Integrations"),
    },
    NavigationEntry {
        title: "XP Sync",
        route: "/xpsync",
        icon: Icon::Refresh,
        group: Some("Integrations"),
    },
];

pub static EXTERNAL_LINKS: &[ExternalLink] = &[
    ExternalLink {
        title: "GitHub",
        url: "https://github.com/Vonix-Network/VonixCore",
        icon: Icon::Github,
    },
    ExternalLink {
        title: "Vonix Network",
        url: "https://vonix.network",
        icon: Icon::Book,
    },
];

pub fn is_active(entry: &NavigationEntry, current_route: &str) -> bool {
    entry.route == current_route
}

/// Index of the entry matching `current_route`, if any.
pub fn active_index(current_route: &str) -> Option<usize> {
    NAV_ENTRIES.iter().position(|e| is_active(e, current_route))
}

/// Previous and next entries in sidebar order.
pub fn neighbors(
    current_route: &str,
) -> (Option<&'static NavigationEntry>, Option<&'static NavigationEntry>) {
    match active_index(current_route) {
        Some(i) => (
            i.checked_sub(1).and_then(|p| NAV_ENTRIES.get(p)),
            NAV_ENTRIES.get(i + 1),
        ),
        None => (None, None),
    }
}

/// Entries bucketed by group label, preserving first-appearance order.
pub fn grouped() -> Vec<(Option<&'static str>, Vec<(usize, &'static NavigationEntry)>)> {
    let mut groups: Vec<(Option<&'static str>, Vec<(usize, &'static NavigationEntry)>)> = vec![];
    for (i, entry) in NAV_ENTRIES.iter().enumerate() {
        match groups.iter_mut().find(|(label, _)| *label == entry.group) {
            Some((_, items)) => items.push((i, entry)),
            None => groups.push((entry.group, vec![(i, entry)])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::topics::{TOPICS, resolve};

    #[test]
    fn entries_match_topics_one_to_one() {
        assert_eq!(NAV_ENTRIES.len(), TOPICS.len());
        for topic in TOPICS {
            let count = NAV_ENTRIES.iter().filter(|e| e.route == topic.route).count();
            assert_eq!(count, 1, "route {}", topic.route);
        }
    }

    #[test]
    fn every_route_has_exactly_one_active_entry() {
        for topic in TOPICS {
            let current = resolve(topic.route).topic.route;
            let active = NAV_ENTRIES.iter().filter(|e| is_active(e, current)).count();
            assert_eq!(active, 1, "route {}", topic.route);
        }
    }

    #[test]
    fn active_match_is_exact() {
        let economy = &NAV_ENTRIES[5];
        assert!(is_active(economy, "/economy"));
        assert!(!is_active(economy, "/economy/"));
        assert!(!is_active(economy, "/eco"));
    }

    #[test]
    fn neighbors_follow_sidebar_order() {
        let (prev, next) = neighbors("/");
        assert!(prev.is_none());
        assert_eq!(next.map(|e| e.route), Some("/configuration"));

        let (prev, next) = neighbors("/economy");
        assert_eq!(prev.map(|e| e.route), Some("/protection"));
        assert_eq!(next.map(|e| e.route), Some("/graves"));

        let (prev, next) = neighbors("/xpsync");
        assert_eq!(prev.map(|e| e.route), Some("/authentication"));
        assert!(next.is_none());
    }

    #[test]
    fn groups_preserve_order() {
        let groups = grouped();
        let labels: Vec<_> = groups.iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec![Some("Getting Started"), Some("Features"), Some("Integrations")]
        );
        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, NAV_ENTRIES.len());
    }
}
