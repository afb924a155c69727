
use axum::Router;
use tokio::net::TcpListener;

use crate::Settings;

/// Binds an in-process backend on an ephemeral port and returns its base
/// URL.
pub(crate) async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

pub(crate) fn settings_for(base_url: &str) -> Settings {
    Settings {
        api_base_url: base_url.to_string(),
    }
}
