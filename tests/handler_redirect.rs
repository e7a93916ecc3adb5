mod common;

use common::TestApp;
use webcut::domain::entities::NewLink;
use webcut::domain::repositories::LinkRepository;

async fn seeded(links: &[(&str, &str, &str)]) -> axum_test::TestServer {
    let app = TestApp::default();
    for (prefix, slug, url) in links {
        app.links
            .create(NewLink {
                prefix: prefix.to_string(),
                slug: slug.to_string(),
                long_url: url.to_string(),
            })
            .await
            .unwrap();
    }
    app.server()
}

#[tokio::test]
async fn test_redirect_success() {
    let server = seeded(&[("go", "docs", "https://example.com/docs?page=2")]).await;

    let response = server.get("/go/docs").await;

    assert_eq!(response.status_code(), 301);
    assert_eq!(response.header("location"), "https://example.com/docs?page=2");
}

#[tokio::test]
async fn test_redirect_head_request() {
    let server = seeded(&[("go", "docs", "https://example.com/")]).await;

    let response = server.method(axum::http::Method::HEAD, "/go/docs").await;

    assert_eq!(response.status_code(), 301);
}

#[tokio::test]
async fn test_redirect_normalizes_path() {
    let server = seeded(&[("go", "my-slug", "https://example.com/page")]).await;

    for path in ["/GO/My%20Slug", "/go/my-slug/", "/go/my-slug/ignored/tail"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 301, "no redirect for {path}");
        assert_eq!(response.header("location"), "https://example.com/page");
    }
}

#[tokio::test]
async fn test_redirect_any_stored_prefix() {
    let server = seeded(&[("to", "docs", "https://example.com/other")]).await;

    let response = server.get("/to/docs").await;

    assert_eq!(response.status_code(), 301);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = seeded(&[("go", "docs", "https://example.com/")]).await;

    server.get("/go/unknown").await.assert_status_not_found();
    server.get("/docs").await.assert_status_not_found();
    server.get("/go/!!!").await.assert_status_not_found();
}

#[tokio::test]
async fn test_redirect_ignores_other_methods() {
    let server = seeded(&[("go", "docs", "https://example.com/")]).await;

    let response = server.post("/go/docs").await;

    assert_ne!(response.status_code(), 301);
}

#[tokio::test]
async fn test_reserved_paths_are_not_redirected() {
    let server = seeded(&[("api", "links", "https://example.com/hijack")]).await;

    let response = server.get("/api/links").await;

    assert_eq!(response.status_code(), 403);
}
