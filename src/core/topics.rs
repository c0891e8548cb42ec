//! # Topic Table
//!
//! Every documentation page the app can show, keyed by route. The table is a
//! static slice: topics are enumerated here, never discovered at runtime.

/// Route of the default topic. Unmatched paths land here.
pub const ROOT_ROUTE: &str = "/";

/// Prefix used by the published site (`/docs/economy`). Accepted as an alias.
const DOCS_PREFIX: &str = "/docs";

/// A single documentation subject bound to one route.
#[derive(Debug, PartialEq, Eq)]
pub struct DocumentTopic {
    /// Canonical route, e.g. `/economy`.
    pub route: &'static str,
    /// Markdown resource name, fetched from `docs/<resource>`.
    pub resource: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub static TOPICS: &[DocumentTopic] = &[
    DocumentTopic {
        route: "/",
        resource: "introduction.md",
        title: "Introduction",
        description: "All-in-one server essentials: what VonixCore is and how to install it.",
    },
    DocumentTopic {
        route: "/configuration",
        resource: "configuration.md",
        title: "Configuration",
        description: "Every configuration file and its options, starting with the database.",
    },
    DocumentTopic {
        route: "/commands",
        resource: "commands.md",
        title: "Commands",
        description: "Complete reference of all commands, organized by category.",
    },
    DocumentTopic {
        route: "/permissions",
        resource: "permissions.md",
        title: "Permissions",
        description: "Built-in permission system and LuckPerms integration.",
    },
    DocumentTopic {
        route: "/protection",
        resource: "protection.md",
        title: "Protection",
        description: "Block logging, lookups, and rollbacks.",
    },
    DocumentTopic {
        route: "/economy",
        resource: "economy.md",
        title: "Economy",
        description: "Persistent balances, payments, and admin controls.",
    },
    DocumentTopic {
        route: "/graves",
        resource: "graves.md",
        title: "Graves",
        description: "Death graves that keep items and experience safe.",
    },
    DocumentTopic {
        route: "/authentication",
        resource: "authentication.md",
        title: "Authentication",
        description: "Login and registration for offline-mode servers.",
    },
    DocumentTopic {
        route: "/discord",
        resource: "discord.md",
        title: "Discord",
        description: "Chat relay, event notifications, and account linking.",
    },
    DocumentTopic {
        route: "/xpsync",
        resource: "xpsync.md",
        title: "XP Sync",
        description: "Push player XP, playtime, and statistics to a web API.",
    },
];

/// Outcome of resolving a requested path against the topic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub topic: &'static DocumentTopic,
    /// True when nothing matched and the root topic was substituted.
    pub redirected: bool,
}

/// Look up a topic by its canonical route.
pub fn find(route: &str) -> Option<&'static DocumentTopic> {
    TOPICS.iter().find(|t| t.route == route)
}

/// The root topic.
pub fn root() -> &'static DocumentTopic {
    &TOPICS[0]
}

/// Map a requested path onto a topic. Unmatched paths resolve to the root.
pub fn resolve(path: &str) -> Resolved {
    let normalized = normalize(path);
    match find(&normalized) {
        Some(topic) => Resolved {
            topic,
            redirected: false,
        },
        None => Resolved {
            topic: root(),
            redirected: true,
        },
    }
}

/// `docs/economy/` → `/economy`. Leading slash added, trailing slash and the
/// `/docs` alias prefix removed.
fn normalize(path: &str) -> String {
    let trimmed = path.trim();
    let mut route = if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    };
    while route.len() > 1 && route.ends_with('/') {
        route.pop();
    }
    if let Some(rest) = route.strip_prefix(DOCS_PREFIX)
        && rest.starts_with('/')
        && rest.len() > 1
    {
        route = rest.to_string();
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn routes_and_resources_are_unique() {
        let routes: HashSet<_> = TOPICS.iter().map(|t| t.route).collect();
        let resources: HashSet<_> = TOPICS.iter().map(|t| t.resource).collect();
        assert_eq!(routes.len(), TOPICS.len());
        assert_eq!(resources.len(), TOPICS.len());
    }

    #[test]
    fn root_is_introduction() {
        assert_eq!(root().route, ROOT_ROUTE);
        assert_eq!(root().resource, "introduction.md");
    }

    #[test]
    fn every_route_resolves_to_itself() {
        for topic in TOPICS {
            let resolved = resolve(topic.route);
            assert_eq!(resolved.topic, topic);
            assert!(!resolved.redirected);
        }
    }

    #[test]
    fn docs_prefix_and_trailing_slash_are_aliases() {
        assert_eq!(resolve("/docs/economy").topic.route, "/economy");
        assert_eq!(resolve("/docs/economy/").topic.route, "/economy");
        assert_eq!(resolve("economy").topic.route, "/economy");
        assert!(!resolve("/docs/xpsync").redirected);
    }

    #[test]
    fn unmatched_path_redirects_to_root() {
        for path in ["/nope", "/docs", "/docs/", "/economy/extra", "/ECONOMY"] {
            let resolved = resolve(path);
            assert_eq!(resolved.topic.route, ROOT_ROUTE, "path {path:?}");
            assert!(resolved.redirected, "path {path:?}");
        }
    }

    #[test]
    fn empty_path_is_root_without_redirect() {
        let resolved = resolve("");
        assert_eq!(resolved.topic.route, ROOT_ROUTE);
        assert!(!resolved.redirected);
    }
}
