use chrono::{Duration, Local, TimeZone};
use mundovpn::clock::ManualClock;
use mundovpn::session::SessionController;
use mundovpn::simulator::ConstantTraffic;
use mundovpn::storage::{FileStore, KeyValueStore, LOGS_KEY, USER_KEY};
use mundovpn_common::DataAmount;
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn scratch_dir() -> PathBuf {
    std::env::temp_dir().join(format!("mundovpn-test-{}", uuid::Uuid::new_v4()))
}

fn cleanup(dir: &PathBuf) {
    let _ = fs::remove_dir_all(dir);
}

fn clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(
        Local.with_ymd_and_hms(2024, 3, 9, 14, 20, 0).unwrap(),
    ))
}

fn run_session(ctrl: &mut SessionController, clock: &ManualClock, ticks: usize) {
    let mut source = ConstantTraffic {
        download: 12.0,
        upload: 4.0,
    };
    let ticket = ctrl.begin_connect().expect("connect");
    assert!(ctrl.complete_handshake(ticket));
    for _ in 0..ticks {
        clock.advance(Duration::seconds(1));
        ctrl.tick(&mut source);
    }
    ctrl.disconnect().expect("disconnect");
}

#[test]
#[serial]
fn test_records_survive_restart() {
    let dir = scratch_dir();
    let clock = clock();

    {
        let store = Arc::new(FileStore::new(&dir));
        let mut ctrl = SessionController::load(store, clock.clone());
        run_session(&mut ctrl, &clock, 300);
    }

    let store = Arc::new(FileStore::new(&dir));
    assert!(store.path_for(LOGS_KEY).exists());
    assert!(store.path_for(USER_KEY).exists());

    let ctrl = SessionController::load(store, clock.clone());
    assert_eq!(ctrl.history().len(), 9);
    assert_eq!(ctrl.history()[0].data_used.session_label(), "600.0 MB");
    assert_eq!(ctrl.account().total_data_used.total_label(), "13.0 GB");

    cleanup(&dir);
}

#[test]
#[serial]
fn test_reads_records_written_by_the_browser_build() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();

    let legacy_user = r#"{
        "name": "Alex Silva",
        "email": "alex.silva@mundo.io",
        "plan": "Pro",
        "expiryDate": "Dec 12, 2024",
        "totalDataUsed": "12.4 GB",
        "monthlyLimit": "50 GB"
    }"#;
    let legacy_logs = r#"[{
        "id": "1700000000000",
        "serverName": "Tokyo",
        "flag": "🇯🇵",
        "date": "10 Nov 2024",
        "startTime": "08:00",
        "endTime": "08:12",
        "duration": "12m",
        "dataUsed": "450 MB",
        "status": "interrupted"
    }]"#;
    fs::write(dir.join("mundo_vpn_user.json"), legacy_user).unwrap();
    fs::write(dir.join("mundo_vpn_logs.json"), legacy_logs).unwrap();

    let ctrl = SessionController::load(Arc::new(FileStore::new(&dir)), clock());
    assert_eq!(ctrl.history().len(), 1);
    assert_eq!(ctrl.history()[0].data_used, DataAmount::from_mb(450.0));
    assert_eq!(ctrl.account().monthly_limit, DataAmount::from_gb(50.0));

    cleanup(&dir);
}

#[test]
#[serial]
fn test_corrupt_file_falls_back_to_seed() {
    let dir = scratch_dir();
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("mundo_vpn_logs.json"), "[{ truncated").unwrap();

    let ctrl = SessionController::load(Arc::new(FileStore::new(&dir)), clock());
    assert_eq!(ctrl.history().len(), 8);

    cleanup(&dir);
}

#[test]
#[serial]
fn test_clear_data_removes_only_records() {
    let dir = scratch_dir();
    let clock = clock();
    let store = Arc::new(FileStore::new(&dir));
    let mut ctrl = SessionController::load(store.clone(), clock.clone());
    run_session(&mut ctrl, &clock, 10);

    let unrelated = dir.join("notes.txt");
    fs::write(&unrelated, "keep me").unwrap();
    let foreign_json = dir.join("settings.json");
    fs::write(&foreign_json, r#"{"theme":"dark"}"#).unwrap();

    ctrl.clear_data().unwrap();

    assert_eq!(store.get(LOGS_KEY).unwrap(), None);
    assert_eq!(store.get(USER_KEY).unwrap(), None);
    assert!(unrelated.exists());
    assert_eq!(
        fs::read_to_string(&foreign_json).unwrap(),
        r#"{"theme":"dark"}"#
    );
    assert!(!store.path_for(LOGS_KEY).exists());
    assert_eq!(ctrl.history().len(), 8);

    cleanup(&dir);
}
