//! Snapshot source to card tests
//!
//! Files on disk (snapshot maps and raw throw payloads) flowing through the
//! provider, the watcher and the app.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::utc_binder;
use tempfile::TempDir;
use throwcard::adapters::{FileSnapshotProvider, StaticSnapshotProvider};
use throwcard::app::{CardApp, CardState};
use throwcard::binder::{Reading, ThrowTime};
use throwcard::config::CardConfig;
use throwcard::models::{SensorId, Snapshot};
use throwcard::traits::SnapshotProvider;
use throwcard::ui::render_to_text;
use throwcard::watcher::spawn_snapshot_watcher;
use tokio::sync::mpsc;

const THROW_PAYLOAD: &str = r#"{
    "id": "abc123",
    "speedMph": 55.24,
    "estimatedFeet": 310.94,
    "correctedHyzerAngle": -4.26,
    "correctedNoseAngle": 1.04,
    "rotPerSec": -30.34,
    "uphillAngle": 8.96,
    "offAxisDegrees": 3.47,
    "primaryType": "Backhand",
    "secondaryType": "Hyzer",
    "throwTime": { "_seconds": 1700000000, "_nanoseconds": 0 },
    "bearing": 0
}"#;

#[test]
fn test_throw_payload_file_to_card() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("throw.json");
    std::fs::write(&path, THROW_PAYLOAD).unwrap();

    let snapshot = FileSnapshotProvider::new(&path).snapshot().unwrap();
    let view = utc_binder().bind(&snapshot).view().cloned().unwrap();

    assert_eq!(view.speed, "55.2");
    assert_eq!(view.spin, Reading::Value(1820));
    assert_eq!(view.wobble, Reading::Value("3.5".to_string()));
    assert_eq!(view.throw_type, "Backhand - Hyzer");
    assert_eq!(view.bearing.as_deref(), Some("0°"));
    assert_eq!(view.distance.to_string(), "311 ft");
    assert!(matches!(view.throw_time, ThrowTime::Formatted(_)));
}

#[test]
fn test_snapshot_map_file_with_numeric_states() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(
        &path,
        r#"{
            "speed": { "state": 48.1 },
            "spin": { "state": "unknown" },
            "throw_type": { "state": "Forehand", "attributes": { "throw_time": null } },
            "distance": { "state": "250.5" },
            "unrelated_sensor": { "state": "on" }
        }"#,
    )
    .unwrap();

    let snapshot = FileSnapshotProvider::new(&path).snapshot().unwrap();
    let view = utc_binder().bind(&snapshot).view().cloned().unwrap();

    assert_eq!(view.speed, "48.1");
    assert_eq!(view.spin, Reading::NotAvailable);
    assert_eq!(view.throw_time, ThrowTime::Missing);
    assert_eq!(view.distance.to_string(), "251 ft");
}

#[test]
fn test_print_path_renders_placeholder_for_idle_payload() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("throw.json");
    std::fs::write(&path, r#"{ "speedMph": null, "throwTime": null }"#).unwrap();

    let mut app = CardApp::new(&CardConfig::default().with_snapshot_path(&path));
    let snapshot = FileSnapshotProvider::new(&path).snapshot().unwrap();
    assert_eq!(app.apply_snapshot(&snapshot), CardState::NoData);

    let text = render_to_text(app.card(), 60);
    assert!(text.contains("Latest Throw"));
    assert!(text.contains("No throw data available"));
}

#[tokio::test(start_paused = true)]
async fn test_watcher_drives_app_state() {
    let provider = StaticSnapshotProvider::new(Snapshot::all_unavailable());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_snapshot_watcher(
        Arc::new(provider.clone()),
        Duration::from_millis(50),
        tx,
    );

    let mut app = CardApp::new(&CardConfig::default());

    let first = rx.recv().await.unwrap();
    assert_eq!(app.apply_snapshot(&first), CardState::NoData);

    provider.set(common::forehand_snapshot());
    let second = rx.recv().await.unwrap();
    assert_eq!(app.apply_snapshot(&second), CardState::HasThrow);

    // A blip keeps the throw on screen
    provider.set_fail_with(Some("source offline".to_string()));
    tokio::time::sleep(Duration::from_millis(250)).await;
    assert!(rx.try_recv().is_err());
    assert_eq!(app.state(), CardState::HasThrow);

    provider.set_fail_permanently(Some("source removed".to_string()));
    let third = rx.recv().await.unwrap();
    assert!(third.is_empty());
    assert_eq!(app.apply_snapshot(&third), CardState::NoData);

    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_file_watcher_picks_up_new_throw() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("throw.json");
    let provider = FileSnapshotProvider::new(&path);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = spawn_snapshot_watcher(Arc::new(provider), Duration::from_millis(50), tx);

    // Nothing written yet
    assert!(rx.recv().await.unwrap().is_empty());

    std::fs::write(&path, THROW_PAYLOAD).unwrap();
    let snapshot = rx.recv().await.unwrap();
    assert_eq!(snapshot.get(SensorId::Speed).unwrap().value, "55.2");

    // Half-written file: the throw stays on screen
    std::fs::write(&path, &THROW_PAYLOAD[..THROW_PAYLOAD.len() / 2]).unwrap();
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(rx.try_recv().is_err());

    handle.abort();
}
