use github_client::{Client, ClientConfig, Error, EventPayload, RateLimit};
use mockito::{Mock, Server, ServerGuard};

const EVENTS: &str = include_str!("data/events.json");

fn client(server: &ServerGuard) -> Client {
    ClientConfig::new().base_url(server.url()).to_client()
}

fn mock_json(server: &mut ServerGuard, path: &str, body: &str) -> Mock {
    server
        .mock("GET", path)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create()
}

#[test]
fn public_events_are_decoded_and_summarized() {
    let mut server = Server::new();
    let mock = mock_json(&mut server, "/events", EVENTS);

    let events = client(&server).events().unwrap();

    mock.assert();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0].id, "0123456789");
    assert!(matches!(events[0].variant, EventPayload::Push(_)));

    let summaries: Vec<_> = events.iter().map(|event| event.summary("plouc")).collect();
    assert_eq!(
        summaries,
        [
            "you pushed 1 commit(s) to repository plouc/go-github-client (Add commit messages for PushEvent)",
            "you created repository plouc/go-github-client",
            "you created feature-x on repository plouc/go-github-client",
            "octocat opened pull request #12 on repository plouc/go-github-client",
            "you open sourced repository plouc/go-github-client",
            "octocat - GollumEvent - ekino/docs",
        ]
    );
}

#[test]
fn event_listings_hit_their_endpoints() {
    let mut server = Server::new();
    let mocks = [
        mock_json(&mut server, "/repos/plouc/go-github-client/events", "[]"),
        mock_json(&mut server, "/repos/plouc/go-github-client/issues/events", "[]"),
        mock_json(&mut server, "/networks/plouc/go-github-client/events", "[]"),
        mock_json(&mut server, "/users/plouc/received_events", "[]"),
        mock_json(&mut server, "/users/plouc/received_events/public", "[]"),
        mock_json(&mut server, "/users/plouc/events", "[]"),
        mock_json(&mut server, "/users/plouc/events/public", "[]"),
        mock_json(&mut server, "/users/plouc/events/orgs/ekino", "[]"),
        mock_json(&mut server, "/orgs/ekino/events", "[]"),
    ];
    let client = client(&server);

    let results = [
        client.repo_events("plouc", "go-github-client"),
        client.repo_issue_events("plouc", "go-github-client"),
        client.network_events("plouc", "go-github-client"),
        client.user_received_events("plouc"),
        client.user_received_public_events("plouc"),
        client.user_performed_events("plouc"),
        client.user_performed_public_events("plouc"),
        client.org_events("plouc", "ekino"),
        client.org_public_events("ekino"),
    ];

    for mock in &mocks {
        mock.assert();
    }
    for result in results {
        assert!(result.unwrap().is_empty());
    }
}

#[test]
fn non_array_body_is_a_decode_error() {
    let mut server = Server::new();
    let _mock = mock_json(&mut server, "/events", r#"{"message": "Not Found"}"#);

    assert!(matches!(client(&server).events(), Err(Error::Decode(_))));
}

#[test]
fn error_status_is_a_network_error() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/users/nobody/events")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .create();

    let err = client(&server).user_performed_events("nobody").unwrap_err();

    match err {
        Error::Network(err) => assert_eq!(err.status().map(|s| s.as_u16()), Some(404)),
        other => panic!("expected a network error, got {:?}", other),
    }
}

#[test]
fn rate_limit_headers_are_captured() {
    let mut server = Server::new();
    let _first = server
        .mock("GET", "/events")
        .with_status(200)
        .with_header("x-ratelimit-limit", "60")
        .with_header("x-ratelimit-remaining", "59")
        .with_header("x-ratelimit-reset", "1371347219")
        .with_body("[]")
        .create();
    let _second = server
        .mock("GET", "/orgs/ekino/events")
        .with_status(403)
        .with_header("x-ratelimit-limit", "60")
        .with_header("x-ratelimit-remaining", "0")
        .with_header("x-ratelimit-reset", "soon")
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .create();
    let client = client(&server);

    client.events().unwrap();
    assert_eq!(
        client.rate_limit(),
        RateLimit {
            limit: 60,
            remaining: 59,
            reset: 1371347219,
        }
    );

    // Rejected requests still report their rate limit.
    assert!(client.org_public_events("ekino").is_err());
    assert_eq!(
        client.rate_limit(),
        RateLimit {
            limit: 60,
            remaining: 0,
            reset: 1371347219,
        }
    );
}

#[test]
fn requests_carry_user_agent() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/events")
        .match_header("user-agent", "my-agent")
        .with_body("[]")
        .create();

    let client = ClientConfig::new()
        .base_url(server.url())
        .user_agent("my-agent")
        .to_client();
    client.events().unwrap();

    mock.assert();
}

#[test]
fn fetches_user() {
    let mut server = Server::new();
    let _mock = mock_json(
        &mut server,
        "/users/plouc",
        r#"{"login": "plouc", "id": 501642, "name": "Raphaël Benitte", "public_repos": 42, "type": "User"}"#,
    );

    let user = client(&server).user("plouc").unwrap();

    assert_eq!(user.user.login, "plouc");
    assert_eq!(user.user.id, 501642);
    assert_eq!(user.public_repos, 42);
}

#[test]
fn fetches_users() {
    let mut server = Server::new();
    let _mock = mock_json(
        &mut server,
        "/users",
        r#"[{"login": "mojombo", "id": 1}, {"login": "defunkt", "id": 2}]"#,
    );

    let users = client(&server).users().unwrap();

    let logins: Vec<_> = users.iter().map(|user| user.login.as_str()).collect();
    assert_eq!(logins, ["mojombo", "defunkt"]);
}

#[test]
fn fetches_repositories() {
    let mut server = Server::new();
    let repo = r#"{"id": 10675738, "name": "go-github-client", "full_name": "plouc/go-github-client"}"#;
    let list = format!("[{}]", repo);
    let mocks = [
        mock_json(&mut server, "/repos/plouc/go-github-client", repo),
        mock_json(&mut server, "/repositories", &list),
        mock_json(&mut server, "/users/plouc/repos", &list),
        mock_json(&mut server, "/orgs/ekino/repos", &list),
    ];
    let client = client(&server);

    assert_eq!(
        client.repo("plouc", "go-github-client").unwrap().full_name,
        "plouc/go-github-client"
    );
    assert_eq!(client.repos().unwrap()[0].repo.id, 10675738);
    assert_eq!(client.user_repos("plouc").unwrap().len(), 1);
    assert_eq!(client.org_repos("ekino").unwrap().len(), 1);

    for mock in &mocks {
        mock.assert();
    }
}
