//! Human-readable event summaries.
use crate::{Creation, Event, EventPayload, Push, PullRequestAction, RefType};

/// Render `event` as a one-line message.
///
/// If `viewer` is non-empty and equals the actor's login, the actor is rendered as `"you"`.
/// A missing actor or repository renders as an empty string.
///
/// ```
/// # use github_client::{summarize, Event, SimpleRepo, SimpleUser};
/// let event = Event {
///     event_type: "PublicEvent".to_owned(),
///     actor: Some(SimpleUser { login: "plouc".to_owned(), ..Default::default() }),
///     repo: Some(SimpleRepo { name: "plouc/go-github-client".to_owned(), ..Default::default() }),
///     ..Default::default()
/// };
/// assert_eq!(summarize(&event, ""), "plouc open sourced repository plouc/go-github-client");
/// assert_eq!(summarize(&event, "plouc"), "you open sourced repository plouc/go-github-client");
/// ```
pub fn summarize(event: &Event, viewer: &str) -> String {
    let login = event.actor.as_ref().map_or("", |actor| actor.login.as_str());
    let actor = if !viewer.is_empty() && viewer == login {
        "you"
    } else {
        login
    };
    let repo = event.repo.as_ref().map_or("", |repo| repo.name.as_str());

    match &event.variant {
        EventPayload::Push(push) => push_summary(actor, repo, push),
        EventPayload::Creation(creation) => creation_summary(actor, repo, creation),
        EventPayload::PullRequest(pull_request) => {
            pull_request_summary(actor, repo, pull_request)
        }
        EventPayload::None if event.event_type == "PublicEvent" => {
            format!("{actor} open sourced repository {repo}")
        }
        EventPayload::None => format!("{actor} - {} - {repo}", event.event_type),
    }
}

fn push_summary(actor: &str, repo: &str, push: &Push) -> String {
    let messages = if push.size == 0 {
        String::new()
    } else {
        push.commits
            .iter()
            .map(|commit| commit.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!(
        "{actor} pushed {} commit(s) to repository {repo} ({messages})",
        push.size
    )
}

fn creation_summary(actor: &str, repo: &str, creation: &Creation) -> String {
    match &creation.ref_type {
        RefType::Repository => format!("{actor} created repository {repo}"),
        RefType::Branch => format!(
            "{actor} created {} on repository {repo}",
            creation.git_ref.as_deref().unwrap_or_default()
        ),
        ref_type => format!("{actor} created {ref_type} on repository {repo}"),
    }
}

fn pull_request_summary(actor: &str, repo: &str, pull_request: &PullRequestAction) -> String {
    format!(
        "{actor} {} pull request #{} on repository {repo}",
        pull_request.action, pull_request.number
    )
}
