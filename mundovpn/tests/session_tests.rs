use chrono::{Duration, Local, TimeZone};
use mundovpn::clock::ManualClock;
use mundovpn::session::SessionController;
use mundovpn::simulator::{ConstantTraffic, RandomTraffic};
use mundovpn::storage::{KeyValueStore, MemoryStore, LOGS_KEY};
use mundovpn_common::{ConnectionStatus, SessionLogEntry, SessionOutcome};
use std::sync::Arc;

fn setup() -> (SessionController, Arc<MemoryStore>, Arc<ManualClock>) {
    let store = Arc::new(MemoryStore::new());
    let clock = Arc::new(ManualClock::new(
        Local.with_ymd_and_hms(2024, 11, 2, 9, 0, 0).unwrap(),
    ));
    let ctrl = SessionController::load(store.clone(), clock.clone());
    (ctrl, store, clock)
}

fn persisted_logs(store: &MemoryStore) -> Vec<SessionLogEntry> {
    let raw = store.get(LOGS_KEY).unwrap().expect("logs persisted");
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_each_cycle_adds_one_entry_newest_first() {
    let (mut ctrl, store, clock) = setup();
    let mut source = RandomTraffic::seeded(7);
    let mut last_total = ctrl.account().total_data_used;

    for cycle in 1..=5 {
        let ticket = ctrl.begin_connect().unwrap();
        clock.advance(Duration::seconds(2));
        ctrl.complete_handshake(ticket);
        for _ in 0..(cycle * 30) {
            clock.advance(Duration::seconds(1));
            ctrl.tick(&mut source);
        }
        let entry = ctrl.disconnect().unwrap();

        let logs = persisted_logs(&store);
        assert_eq!(logs.len(), 8 + cycle);
        assert_eq!(logs[0], entry);

        let total = ctrl.account().total_data_used;
        assert!(total.megabytes() >= last_total.megabytes());
        last_total = total;
    }
}

#[test]
fn test_connect_wait_disconnect_scenario() {
    let (mut ctrl, _, clock) = setup();
    assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);

    let ticket = ctrl.begin_connect().unwrap();
    assert_eq!(ctrl.status(), ConnectionStatus::Connecting);

    clock.advance(Duration::seconds(2));
    ctrl.complete_handshake(ticket);
    assert_eq!(ctrl.status(), ConnectionStatus::Connected);
    assert!(ctrl.session_started_at().is_some());

    let before = ctrl.history().len();
    let entry = ctrl.disconnect().unwrap();
    assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
    assert_eq!(ctrl.history().len(), before + 1);
    assert_eq!(entry.status, SessionOutcome::Success);
}

#[test]
fn test_usage_scenario_from_seed_account() {
    let (mut ctrl, _, clock) = setup();
    let mut source = ConstantTraffic {
        download: 12.0,
        upload: 4.0,
    };

    let ticket = ctrl.begin_connect().unwrap();
    ctrl.complete_handshake(ticket);
    for _ in 0..300 {
        clock.advance(Duration::seconds(1));
        ctrl.tick(&mut source);
    }
    ctrl.disconnect().unwrap();

    assert_eq!(ctrl.account().total_data_used.total_label(), "13.0 GB");
    assert!((ctrl.usage_percent() - 26.0).abs() < 0.1);
}

#[test]
fn test_traffic_window_never_exceeds_capacity() {
    let (mut ctrl, _, _) = setup();
    let mut source = RandomTraffic::seeded(1);
    for i in 0..200 {
        if i == 50 {
            let ticket = ctrl.begin_connect().unwrap();
            ctrl.complete_handshake(ticket);
        }
        ctrl.tick(&mut source);
        assert!(ctrl.traffic().len() <= 21);
    }
}
