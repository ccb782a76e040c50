use std::sync::Arc;

use tempfile::TempDir;

use cf_companion::bot::{CommandRouter, InboundMessage};
use cf_companion::store::Store;
use cf_companion::tiers::TierTable;

use super::fakes::{FailingWrites, FakeJudge, WriteFailures};

pub struct TestApp {
    pub router: CommandRouter,
    pub store: Arc<Store>,
    pub judge: Arc<FakeJudge>,
    _temp_dir: TempDir,
}

pub fn spawn_test_app(judge: FakeJudge) -> TestApp {
    spawn_test_app_with_failing_writes(judge, WriteFailures::default())
}

/// The router writes through `FailingWrites`; `TestApp::store` is the
/// underlying store, so tests can seed and inspect records directly.
pub fn spawn_test_app_with_failing_writes(judge: FakeJudge, failures: WriteFailures) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("tempdir");
    let store_path = temp_dir.path().join("cf-companion-test.sled");

    let store = Arc::new(Store::open(store_path.to_str().unwrap()).expect("open store"));

    let judge = Arc::new(judge);
    let tiers = Arc::new(TierTable::codeforces().expect("tiers"));
    let records = Arc::new(FailingWrites {
        inner: store.clone(),
        failures,
    });
    let router = CommandRouter::new(records, judge.clone(), tiers);

    TestApp {
        router,
        store,
        judge,
        _temp_dir: temp_dir,
    }
}

pub fn message(author_id: &str, content: &str) -> InboundMessage {
    InboundMessage {
        author_id: author_id.to_string(),
        author_name: format!("user-{author_id}"),
        content: content.to_string(),
        from_self: false,
    }
}
