use merkaz::view::{Navigator, Route, Window};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::{Arc, Mutex};

pub fn init() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

pub fn random_name() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Routes shared between the navigators of both screens
#[derive(Clone, Default)]
pub struct History(pub Arc<Mutex<Vec<Route>>>);

impl History {
    pub fn last(&self) -> Option<Route> {
        self.0.lock().unwrap().last().copied()
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        self.0.lock().unwrap().push(route);
    }
}

pub struct AlwaysYes;

#[async_trait::async_trait]
impl Window for AlwaysYes {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    async fn open(&self, _url: merkaz::reqwest::Url) {}
}
