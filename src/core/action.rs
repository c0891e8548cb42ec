//! # Actions
//!
//! Everything that can happen in the docs browser becomes an `Action`.
//! User picks a sidebar entry? That's `Action::Navigate(route)`.
//! A fetch finishes? That's `Action::ContentLoaded { ticket, body }`.
//!
//! `update()` applies an action to the state and returns an [`Effect`] for
//! the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::content::LoadTicket;
use crate::core::navigation;
use crate::core::state::{App, Page, PageStatus};
use crate::core::topics;

#[derive(Debug)]
pub enum Action {
    /// Show the topic for this path (unmatched paths go to the root topic).
    Navigate(String),
    /// Fetch the current topic again.
    Reload,
    /// A fetch settled. `body` is either the document or its placeholder.
    ContentLoaded { ticket: LoadTicket, body: String },
    NextPage,
    PrevPage,
    Quit,
}

/// Work the adapter must perform after an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    Fetch {
        ticket: LoadTicket,
        resource: &'static str,
    },
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Navigate(path) => navigate(app, &path, false),
        Action::Reload => {
            let route = app.current_route();
            navigate(app, route, true)
        }
        Action::ContentLoaded { ticket, body } => {
            match app.page.as_mut() {
                Some(page) if page.ticket == ticket => {
                    debug!(
                        "Content ready for {} (ticket {}, {} bytes)",
                        page.topic.route,
                        ticket.id(),
                        body.len()
                    );
                    page.status = PageStatus::Ready(body);
                }
                _ => debug!("Dropping stale content for ticket {}", ticket.id()),
            }
            Effect::None
        }
        Action::NextPage => step(app, 1),
        Action::PrevPage => step(app, -1),
        Action::Quit => Effect::Quit,
    }
}

/// Move one entry forward (`1`) or back (`-1`) in sidebar order.
fn step(app: &mut App, direction: i8) -> Effect {
    let (prev, next) = navigation::neighbors(app.current_route());
    let target = if direction > 0 { next } else { prev };
    match target {
        Some(entry) => navigate(app, entry.route, false),
        None => Effect::None,
    }
}

fn navigate(app: &mut App, path: &str, force: bool) -> Effect {
    let resolved = topics::resolve(path);
    let topic = resolved.topic;

    app.status_message = if resolved.redirected {
        info!("No topic at {:?}, redirecting to {}", path, topic.route);
        format!("No page at {path}, showing {}", topic.title)
    } else {
        String::new()
    };

    if !force
        && let Some(page) = &app.page
        && page.topic == topic
    {
        return Effect::None;
    }

    let ticket = app.tickets.issue();
    info!(
        "Navigating to {} ({}), ticket {}",
        topic.route,
        topic.resource,
        ticket.id()
    );
    app.page = Some(Page {
        topic,
        ticket,
        status: PageStatus::Loading,
    });
    Effect::Fetch {
        ticket,
        resource: topic.resource,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentSource, load_document};
    use crate::test_support::{DelayedSource, test_app};
    use std::sync::Arc;
    use std::time::Duration;

    fn fetch_ticket(effect: Effect) -> (LoadTicket, &'static str) {
        match effect {
            Effect::Fetch { ticket, resource } => (ticket, resource),
            other => panic!("expected fetch, got {other:?}"),
        }
    }

    #[test]
    fn navigate_starts_loading() {
        let mut app = test_app();
        let (_, resource) = fetch_ticket(update(&mut app, Action::Navigate("/economy".into())));
        assert_eq!(resource, "economy.md");
        assert_eq!(app.current_route(), "/economy");
        assert!(app.is_loading());
    }

    #[test]
    fn loaded_content_marks_page_ready() {
        let mut app = test_app();
        let (ticket, _) = fetch_ticket(update(&mut app, Action::Navigate("/economy".into())));
        update(
            &mut app,
            Action::ContentLoaded {
                ticket,
                body: "# Economy".into(),
            },
        );
        assert!(!app.is_loading());
        assert_eq!(app.page.as_ref().and_then(Page::text), Some("# Economy"));
    }

    #[test]
    fn late_result_for_previous_topic_is_discarded() {
        let mut app = test_app();
        let (a, _) = fetch_ticket(update(&mut app, Action::Navigate("/economy".into())));
        let (b, _) = fetch_ticket(update(&mut app, Action::Navigate("/discord".into())));

        update(&mut app, Action::ContentLoaded { ticket: b, body: "discord".into() });
        update(&mut app, Action::ContentLoaded { ticket: a, body: "economy".into() });

        let page = app.page.as_ref().unwrap();
        assert_eq!(page.topic.route, "/discord");
        assert_eq!(page.text(), Some("discord"));
    }

    #[test]
    fn stale_result_does_not_resolve_pending_page() {
        let mut app = test_app();
        let (a, _) = fetch_ticket(update(&mut app, Action::Navigate("/economy".into())));
        update(&mut app, Action::Navigate("/discord".into()));
        update(&mut app, Action::ContentLoaded { ticket: a, body: "economy".into() });
        assert!(app.is_loading());
        assert_eq!(app.current_route(), "/discord");
    }

    #[test]
    fn renavigating_to_current_topic_does_not_refetch() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/economy".into()));
        assert_eq!(update(&mut app, Action::Navigate("/docs/economy".into())), Effect::None);
    }

    #[test]
    fn reload_issues_new_ticket() {
        let mut app = test_app();
        let (a, _) = fetch_ticket(update(&mut app, Action::Navigate("/economy".into())));
        let (b, resource) = fetch_ticket(update(&mut app, Action::Reload));
        assert!(b > a);
        assert_eq!(resource, "economy.md");
    }

    #[test]
    fn unmatched_route_redirects_with_notice() {
        let mut app = test_app();
        let (_, resource) = fetch_ticket(update(&mut app, Action::Navigate("/shops".into())));
        assert_eq!(resource, "introduction.md");
        assert_eq!(app.current_route(), "/");
        assert!(app.status_message.contains("/shops"));

        update(&mut app, Action::Navigate("/economy".into()));
        assert!(app.status_message.is_empty());
    }

    #[test]
    fn next_and_prev_follow_sidebar() {
        let mut app = test_app();
        update(&mut app, Action::Navigate("/".into()));
        assert_eq!(update(&mut app, Action::PrevPage), Effect::None);

        update(&mut app, Action::NextPage);
        assert_eq!(app.current_route(), "/configuration");
        update(&mut app, Action::PrevPage);
        assert_eq!(app.current_route(), "/");
    }

    #[test]
    fn quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    /// A fetches slowly, B quickly; both results arrive, only B is shown.
    #[tokio::test(start_paused = true)]
    async fn slow_fetch_for_abandoned_topic_never_wins() {
        let source: Arc<dyn ContentSource> = Arc::new(DelayedSource::new(&[
            ("economy.md", "economy text", Duration::from_millis(500)),
            ("discord.md", "discord text", Duration::from_millis(10)),
        ]));
        let mut app = test_app();
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

        for route in ["/economy", "/discord"] {
            let (ticket, resource) =
                fetch_ticket(update(&mut app, Action::Navigate(route.into())));
            let source = source.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                let body = load_document(source.as_ref(), resource).await;
                let _ = tx.send(Action::ContentLoaded { ticket, body });
            });
        }
        drop(tx);

        let mut arrivals = vec![];
        while let Some(action) = rx.recv().await {
            if let Action::ContentLoaded { body, .. } = &action {
                arrivals.push(body.clone());
            }
            update(&mut app, action);
        }

        assert_eq!(arrivals, vec!["discord text", "economy text"]);
        let page = app.page.as_ref().unwrap();
        assert_eq!(page.topic.route, "/discord");
        assert_eq!(page.text(), Some("discord text"));
    }
}
