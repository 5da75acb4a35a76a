use mockito::{Matcher, Mock, ServerGuard};
use projects_site::{
    config::Credential,
    endpoints::{api_router, github::gh_proxy::index::ProxyState, GH_PROXY_PATH},
    feed::{render_feed, FeedClient, FeedList, FeedPage},
};
use serde_json::json;

const PROXY_PATH: &str = "/gh-proxy";

fn client(server: &ServerGuard) -> FeedClient {
    FeedClient::new(
        reqwest::Client::new(),
        format!("{}{PROXY_PATH}", server.url()),
        "foo/bar",
    )
}

async fn mock_resource(server: &mut ServerGuard, resource: &str, status: usize, body: String) -> Mock {
    let mut query = vec![
        Matcher::UrlEncoded("repo".into(), "foo/bar".into()),
        Matcher::UrlEncoded("resource".into(), resource.into()),
        Matcher::UrlEncoded("per_page".into(), "5".into()),
    ];
    if resource != "commits" {
        query.push(Matcher::UrlEncoded("state".into(), "open".into()));
    }

    server
        .mock("GET", PROXY_PATH)
        .match_query(Matcher::AllOf(query))
        .with_status(status)
        .with_body(body)
        .create_async()
        .await
}

fn commits_body() -> String {
    json!([{
        "sha": "f00dfeedbeef1234",
        "html_url": "https://github.com/foo/bar/commit/f00dfeedbeef1234",
        "commit": {"message": "Document UART pins"}
    }])
    .to_string()
}

fn issues_body() -> String {
    json!([
        {
            "number": 41,
            "title": "Camera stream drops",
            "html_url": "https://github.com/foo/bar/issues/41"
        },
        {
            "number": 42,
            "title": "Fix camera stream",
            "html_url": "https://github.com/foo/bar/pull/42",
            "pull_request": {"html_url": "https://github.com/foo/bar/pull/42"}
        }
    ])
    .to_string()
}

fn pulls_body() -> String {
    json!([{
        "number": 42,
        "title": "Fix camera stream",
        "html_url": "https://github.com/foo/bar/pull/42"
    }])
    .to_string()
}

fn items(list: &Option<FeedList>) -> Vec<String> {
    list.as_ref().map(|list| list.items().to_vec()).unwrap_or_default()
}

#[tokio::test]
async fn renders_all_three_lists() {
    let mut proxy = mockito::Server::new_async().await;
    let commits = mock_resource(&mut proxy, "commits", 200, commits_body()).await;
    let issues = mock_resource(&mut proxy, "issues", 200, issues_body()).await;
    let pulls = mock_resource(&mut proxy, "pulls", 200, pulls_body()).await;

    let mut page = FeedPage::with_all_lists();
    render_feed(&client(&proxy), &mut page).await;

    commits.assert_async().await;
    issues.assert_async().await;
    pulls.assert_async().await;

    assert_eq!(
        items(&page.commits),
        vec![
            "<li><a href=\"https://github.com/foo/bar/commit/f00dfeedbeef1234\" target=\"_blank\" \
             rel=\"noopener noreferrer\">Document UART pins</a> <code>#f00dfee</code></li>"
                .to_string()
        ]
    );
    assert_eq!(
        items(&page.pulls),
        vec![
            "<li><a href=\"https://github.com/foo/bar/pull/42\" target=\"_blank\" \
             rel=\"noopener noreferrer\">#42 Fix camera stream</a></li>"
                .to_string()
        ]
    );
}

#[tokio::test]
async fn issues_exclude_pull_requests() {
    let mut proxy = mockito::Server::new_async().await;
    let _commits = mock_resource(&mut proxy, "commits", 200, "[]".to_string()).await;
    let _issues = mock_resource(&mut proxy, "issues", 200, issues_body()).await;
    let _pulls = mock_resource(&mut proxy, "pulls", 200, "[]".to_string()).await;

    let mut page = FeedPage::with_all_lists();
    render_feed(&client(&proxy), &mut page).await;

    let issues = items(&page.issues);
    assert_eq!(issues.len(), 1);
    assert!(issues[0].contains("#41 Camera stream drops"));
    assert!(!issues[0].contains("#42"));
}

#[tokio::test]
async fn one_failing_resource_leaves_the_others_intact() {
    let mut proxy = mockito::Server::new_async().await;
    let _commits = mock_resource(&mut proxy, "commits", 200, commits_body()).await;
    let _issues = mock_resource(&mut proxy, "issues", 502, r#"{"error":"Upstream error"}"#.to_string()).await;
    let _pulls = mock_resource(&mut proxy, "pulls", 200, pulls_body()).await;

    let mut page = FeedPage::with_all_lists();
    render_feed(&client(&proxy), &mut page).await;

    assert_eq!(items(&page.commits).len(), 1);
    assert!(items(&page.issues).is_empty());
    assert_eq!(items(&page.pulls).len(), 1);
}

#[tokio::test]
async fn non_array_and_invalid_bodies_render_nothing() {
    let mut proxy = mockito::Server::new_async().await;
    let _commits = mock_resource(&mut proxy, "commits", 200, r#"{"message":"Not Found"}"#.to_string()).await;
    let _issues = mock_resource(&mut proxy, "issues", 200, "not json".to_string()).await;
    let _pulls = mock_resource(&mut proxy, "pulls", 200, "null".to_string()).await;

    let mut page = FeedPage::with_all_lists();
    render_feed(&client(&proxy), &mut page).await;

    assert!(page.lists().all(|list| list.items().is_empty()));
}

#[tokio::test]
async fn page_without_containers_issues_no_requests() {
    let mut proxy = mockito::Server::new_async().await;
    let any = proxy
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut page = FeedPage::default();
    render_feed(&client(&proxy), &mut page).await;

    any.assert_async().await;
    assert_eq!(page, FeedPage::default());
}

#[tokio::test]
async fn unreachable_proxy_renders_empty_lists() {
    let client = FeedClient::new(reqwest::Client::new(), "http://127.0.0.1:1/gh-proxy", "foo/bar");
    let mut page = FeedPage::with_all_lists();

    render_feed(&client, &mut page).await;

    assert_eq!(page.lists().count(), 3);
    assert!(page.lists().all(|list| list.items().is_empty()));
}

#[tokio::test]
async fn renders_through_the_real_proxy() {
    let mut github = mockito::Server::new_async().await;
    let _commits = github
        .mock("GET", "/repos/foo/bar/commits")
        .match_query(Matcher::Exact("per_page=5".to_string()))
        .with_status(200)
        .with_body(commits_body())
        .create_async()
        .await;
    let _issues = github
        .mock("GET", "/repos/foo/bar/issues")
        .match_query(Matcher::Exact("state=open&per_page=5".to_string()))
        .with_status(200)
        .with_body(issues_body())
        .create_async()
        .await;
    let _pulls = github
        .mock("GET", "/repos/foo/bar/pulls")
        .match_query(Matcher::Exact("state=open&per_page=5".to_string()))
        .with_status(500)
        .create_async()
        .await;

    let app = api_router(ProxyState {
        http: reqwest::Client::new(),
        github_api_url: github.url(),
        user_agent: "freethecode-site".to_string(),
        credential: Credential::Fixed(None),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    let client = FeedClient::new(
        reqwest::Client::new(),
        format!("http://{addr}{GH_PROXY_PATH}"),
        "foo/bar",
    );
    let mut page = FeedPage::with_all_lists();
    render_feed(&client, &mut page).await;

    assert_eq!(items(&page.commits).len(), 1);
    assert_eq!(items(&page.issues).len(), 1);
    assert!(items(&page.pulls).is_empty());
}
