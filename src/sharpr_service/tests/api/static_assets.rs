use crate::helpers::TestApp;

#[tokio::test]
async fn should_serve_site_pages_from_assets() {
    let app = TestApp::new().await;

    for path in ["/", "/about", "/parent_dashboard"] {
        let response = app.get(path).await;
        assert_eq!(response.status().as_u16(), 200, "Failed for {path}");
        assert!(response.text().await.unwrap().contains("<h1>Sharpr</h1>"));
    }
}
