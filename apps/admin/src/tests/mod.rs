mod controller_tests;

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use axum::Router;
use client_core::Settings;
use tokio::net::TcpListener;

use crate::ui::modal::{ErrorModal, ModalService};
use crate::ui::navigation::Navigator;

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

/// Captures every modal the controller opens instead of rendering it.
#[derive(Default)]
pub(crate) struct RecordingModal {
    pub messages: Mutex<Vec<String>>,
}

impl ModalService for RecordingModal {
    fn open_error(&self, modal: ErrorModal) {
        self.messages.lock().unwrap().push(modal.message().to_string());
    }
}

/// Counts back-navigations instead of performing them.
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub backs: AtomicUsize,
}

impl RecordingNavigator {
    pub(crate) fn back_count(&self) -> usize {
        self.backs.load(Ordering::SeqCst)
    }
}

impl Navigator for RecordingNavigator {
    fn back(&self) {
        self.backs.fetch_add(1, Ordering::SeqCst);
    }
}
