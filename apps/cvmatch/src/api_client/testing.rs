//! In-process fake backend for client tests.

use axum::Router;

use crate::api_client::ApiClient;
use crate::config::Config;

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A client whose default endpoints all live under `base`.
pub fn client_for(base: &str) -> ApiClient {
    let base = base.to_string();
    let config = Config::from_lookup(|key| (key == "CVMATCH_API_URL").then(|| base.clone())).unwrap();
    ApiClient::new(&config)
}
