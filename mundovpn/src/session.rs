//! Connection lifecycle for the simulated tunnel.
//!
//! `SessionController` owns every piece of session state. The UI reads it
//! through accessors and mutates it only through the transition methods
//! below; timers live outside and feed it (`complete_handshake`, `tick`).

use crate::clock::Clock;
use crate::data;
use crate::error::AppError;
use crate::simulator::TrafficSource;
use crate::storage::{self, KeyValueStore, LOGS_KEY, USER_KEY};
use chrono::{DateTime, Local};
use mundovpn_common::{
    AccountRecord, ConnectionStatus, DataAmount, SecurityFeature, SecurityToggles, Server,
    SessionLogEntry, SessionOutcome, TrafficSample, TrafficWindow,
};
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::{error, info};

const ACTIVITY_CAPACITY: usize = 11;
const INITIAL_ACTIVITY: [&str; 2] = [
    "[System] Mundo VPN Initialized",
    "[System] Awaiting connection...",
];

/// Proof that a handshake was started. Only the most recent ticket can
/// complete it; anything issued before a reset is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandshakeTicket {
    epoch: u64,
}

/// What the assistant is told about the tunnel.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionContext {
    pub status: ConnectionStatus,
    pub server_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    lines: VecDeque<String>,
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self {
            lines: INITIAL_ACTIVITY.iter().map(|l| l.to_string()).collect(),
        }
    }
}

impl ActivityLog {
    pub fn push(&mut self, at: DateTime<Local>, message: &str) {
        if self.lines.len() >= ACTIVITY_CAPACITY {
            self.lines.pop_front();
        }
        self.lines
            .push_back(format!("[{}] {}", at.format("%H:%M:%S"), message));
    }

    pub fn lines(&self) -> impl Iterator<Item = &String> {
        self.lines.iter()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn format_duration(duration: chrono::Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    let hours = minutes / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes % 60)
    } else {
        format!("{}m", minutes)
    }
}

pub struct SessionController {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
    status: ConnectionStatus,
    selected_server: Server,
    active_server: Option<Server>,
    traffic: TrafficWindow,
    session_started_at: Option<DateTime<Local>>,
    session_data: DataAmount,
    handshake_epoch: u64,
    history: Vec<SessionLogEntry>,
    account: AccountRecord,
    toggles: SecurityToggles,
    activity: ActivityLog,
}

impl SessionController {
    /// Restores the persisted records (or seeds) and starts disconnected.
    pub fn load(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        let history = storage::load_or(store.as_ref(), LOGS_KEY, data::seed_history);
        let account = storage::load_or(store.as_ref(), USER_KEY, data::seed_account);
        info!(
            "Loaded {} session log entries for {}",
            history.len(),
            account.email
        );

        Self {
            store,
            clock,
            status: ConnectionStatus::Disconnected,
            selected_server: data::default_server(),
            active_server: None,
            traffic: TrafficWindow::default(),
            session_started_at: None,
            session_data: DataAmount::ZERO,
            handshake_epoch: 0,
            history,
            account,
            toggles: SecurityToggles::default(),
            activity: ActivityLog::default(),
        }
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    pub fn selected_server(&self) -> &Server {
        &self.selected_server
    }

    pub fn traffic(&self) -> &TrafficWindow {
        &self.traffic
    }

    pub fn session_started_at(&self) -> Option<DateTime<Local>> {
        self.session_started_at
    }

    pub fn session_data(&self) -> DataAmount {
        self.session_data
    }

    pub fn history(&self) -> &[SessionLogEntry] {
        &self.history
    }

    pub fn account(&self) -> &AccountRecord {
        &self.account
    }

    pub fn usage_percent(&self) -> f64 {
        self.account.usage_percent()
    }

    pub fn toggles(&self) -> SecurityToggles {
        self.toggles
    }

    pub fn activity(&self) -> &ActivityLog {
        &self.activity
    }

    pub fn context(&self) -> ConnectionContext {
        ConnectionContext {
            status: self.status,
            server_name: Some(self.selected_server.name.clone()),
        }
    }

    /// disconnected → connecting.
    pub fn begin_connect(&mut self) -> Result<HandshakeTicket, AppError> {
        if self.status != ConnectionStatus::Disconnected {
            return Err(AppError::InvalidTransition {
                from: self.status,
                action: "connect",
            });
        }

        self.handshake_epoch += 1;
        self.status = ConnectionStatus::Connecting;
        self.active_server = Some(self.selected_server.clone());
        let message = format!("Handshaking with {}", self.selected_server.ip);
        self.log_activity(&message);
        info!("{}", message);

        Ok(HandshakeTicket {
            epoch: self.handshake_epoch,
        })
    }

    /// connecting → connected, if `ticket` is still the current one.
    pub fn complete_handshake(&mut self, ticket: HandshakeTicket) -> bool {
        if ticket.epoch != self.handshake_epoch || self.status != ConnectionStatus::Connecting {
            info!("Ignoring stale handshake (epoch {})", ticket.epoch);
            return false;
        }

        self.session_started_at = Some(self.clock.now());
        self.session_data = DataAmount::ZERO;
        self.status = ConnectionStatus::Connected;
        let name = self.session_server().name.clone();
        self.log_activity(&format!("Successfully connected to {}", name));
        info!("Connected to {}", name);
        true
    }

    /// Power-button semantics. Returns a ticket when a handshake was started.
    pub fn toggle(&mut self) -> Result<Option<HandshakeTicket>, AppError> {
        match self.status {
            ConnectionStatus::Connected => self.disconnect().map(|_| None),
            ConnectionStatus::Disconnected => self.begin_connect().map(Some),
            _ => Ok(None),
        }
    }

    /// Appends one sample; volume only accrues while connected.
    pub fn tick(&mut self, source: &mut dyn TrafficSource) -> TrafficSample {
        let timestamp = self.clock.now().timestamp_millis();
        let sample = if self.status == ConnectionStatus::Connected {
            let (download, upload) = source.next_rates();
            let sample = TrafficSample {
                download,
                upload,
                timestamp,
            };
            self.session_data = self.session_data + sample.volume();
            sample
        } else {
            TrafficSample::idle(timestamp)
        };

        self.traffic.push(sample);
        sample
    }

    /// connected → disconnected. Records the session and bills the account.
    pub fn disconnect(&mut self) -> Result<SessionLogEntry, AppError> {
        if self.status != ConnectionStatus::Connected {
            return Err(AppError::InvalidTransition {
                from: self.status,
                action: "disconnect",
            });
        }

        let end = self.clock.now();
        let start = self.session_started_at.unwrap_or(end);
        let server = self.session_server().clone();
        let used = self.session_data;

        self.log_activity(&format!("Disconnecting from {}", server.name));

        let entry = SessionLogEntry {
            id: uuid::Uuid::new_v4().to_string(),
            server_name: server.name.clone(),
            flag: server.flag.clone(),
            date: end.format("%d %b %Y").to_string(),
            start_time: start.format("%H:%M").to_string(),
            end_time: end.format("%H:%M").to_string(),
            duration: format_duration(end - start),
            data_used: used,
            status: SessionOutcome::Success,
        };

        self.history.insert(0, entry.clone());
        self.persist_history();

        self.account.record_usage(used);
        self.persist_account();

        info!(
            "Session on {} closed: {} over {}",
            server.name,
            used.session_label(),
            entry.duration
        );

        self.session_started_at = None;
        self.session_data = DataAmount::ZERO;
        self.active_server = None;
        self.status = ConnectionStatus::Disconnected;

        Ok(entry)
    }

    /// Retargets the next session. A running session keeps its server.
    pub fn select_server(&mut self, server: Server) {
        if server.id == self.selected_server.id {
            return;
        }
        self.log_activity(&format!("Changed server to {}", server.name));
        self.selected_server = server;
    }

    pub fn toggle_security(&mut self, feature: SecurityFeature) -> bool {
        let enabled = self.toggles.toggle(feature);
        self.log_activity(&format!(
            "Setting updated: {} is now {}",
            feature.key(),
            if enabled { "Enabled" } else { "Disabled" }
        ));
        enabled
    }

    /// Wipes persisted data and returns every field to its startup value.
    pub fn clear_data(&mut self) -> Result<(), AppError> {
        storage::clear_all(self.store.as_ref())?;

        self.invalidate_pending();
        self.status = ConnectionStatus::Disconnected;
        self.selected_server = data::default_server();
        self.active_server = None;
        self.traffic.clear();
        self.session_started_at = None;
        self.session_data = DataAmount::ZERO;
        self.history = data::seed_history();
        self.account = data::seed_account();
        self.toggles = SecurityToggles::default();
        self.activity = ActivityLog::default();
        info!("Local data cleared, state reset to defaults");
        Ok(())
    }

    /// Voids any handshake still in flight (teardown, reset).
    pub fn invalidate_pending(&mut self) {
        self.handshake_epoch += 1;
        if self.status == ConnectionStatus::Connecting {
            self.status = ConnectionStatus::Disconnected;
            self.active_server = None;
        }
    }

    fn session_server(&self) -> &Server {
        self.active_server.as_ref().unwrap_or(&self.selected_server)
    }

    fn log_activity(&mut self, message: &str) {
        let now = self.clock.now();
        self.activity.push(now, message);
    }

    fn persist_history(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), LOGS_KEY, &self.history) {
            error!("Failed to persist session log: {}", e);
        }
    }

    fn persist_account(&self) {
        if let Err(e) = storage::save(self.store.as_ref(), USER_KEY, &self.account) {
            error!("Failed to persist account: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::simulator::ConstantTraffic;
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn controller() -> (SessionController, Arc<MemoryStore>, Arc<ManualClock>) {
        let store = Arc::new(MemoryStore::new());
        let start = Local.with_ymd_and_hms(2024, 3, 9, 14, 20, 0).unwrap();
        let clock = Arc::new(ManualClock::new(start));
        let ctrl = SessionController::load(store.clone(), clock.clone());
        (ctrl, store, clock)
    }

    fn traffic() -> ConstantTraffic {
        ConstantTraffic {
            download: 12.0,
            upload: 4.0,
        }
    }

    #[test]
    fn test_starts_from_seed_data() {
        let (ctrl, store, _) = controller();
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
        assert_eq!(ctrl.history().len(), 8);
        assert_eq!(ctrl.account().email, "alex.silva@mundo.io");
        assert_eq!(ctrl.selected_server().id, "br-sp");
        assert_eq!(ctrl.activity().len(), 2);
        assert!(store.is_empty());
    }

    #[test]
    fn test_full_cycle() {
        let (mut ctrl, _, clock) = controller();
        let mut source = traffic();

        let ticket = ctrl.begin_connect().unwrap();
        assert_eq!(ctrl.status(), ConnectionStatus::Connecting);
        assert!(ctrl.session_started_at().is_none());

        clock.advance(Duration::seconds(2));
        assert!(ctrl.complete_handshake(ticket));
        assert_eq!(ctrl.status(), ConnectionStatus::Connected);
        assert!(ctrl.session_started_at().is_some());

        for _ in 0..300 {
            clock.advance(Duration::seconds(1));
            ctrl.tick(&mut source);
        }
        clock.advance(Duration::minutes(70));

        let entry = ctrl.disconnect().unwrap();
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
        assert_eq!(entry.status, SessionOutcome::Success);
        assert_eq!(entry.server_name, "São Paulo");
        assert_eq!(entry.start_time, "14:20");
        assert_eq!(entry.end_time, "15:35");
        assert_eq!(entry.duration, "1h 15m");
        assert_eq!(entry.data_used.session_label(), "600.0 MB");
        assert_eq!(ctrl.history()[0], entry);
        assert_eq!(ctrl.history().len(), 9);
        assert_eq!(ctrl.account().total_data_used.total_label(), "13.0 GB");
        assert!(ctrl.session_data().is_zero());
    }

    #[test]
    fn test_no_direct_jump_to_connected() {
        let (mut ctrl, _, _) = controller();
        assert!(matches!(
            ctrl.disconnect(),
            Err(AppError::InvalidTransition { action: "disconnect", .. })
        ));
        let _ticket = ctrl.begin_connect().unwrap();
        assert!(matches!(
            ctrl.begin_connect(),
            Err(AppError::InvalidTransition {
                from: ConnectionStatus::Connecting,
                ..
            })
        ));
    }

    #[test]
    fn test_toggle_ignores_presses_while_connecting() {
        let (mut ctrl, _, _) = controller();
        let ticket = ctrl.toggle().unwrap().expect("handshake ticket");
        assert_eq!(ctrl.toggle().unwrap(), None);
        assert_eq!(ctrl.status(), ConnectionStatus::Connecting);
        ctrl.complete_handshake(ticket);
        assert_eq!(ctrl.toggle().unwrap(), None);
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut ctrl, _, _) = controller();
        let ticket = ctrl.begin_connect().unwrap();
        ctrl.invalidate_pending();
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
        assert!(!ctrl.complete_handshake(ticket));
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);

        let fresh = ctrl.begin_connect().unwrap();
        assert!(!ctrl.complete_handshake(ticket));
        assert!(ctrl.complete_handshake(fresh));
    }

    #[test]
    fn test_idle_ticks_are_flat() {
        let (mut ctrl, _, _) = controller();
        let mut source = traffic();
        for _ in 0..5 {
            let sample = ctrl.tick(&mut source);
            assert_eq!(sample.download, 0.0);
            assert_eq!(sample.upload, 0.0);
        }
        assert_eq!(ctrl.traffic().len(), 5);
        assert!(ctrl.session_data().is_zero());
    }

    #[test]
    fn test_window_is_capped() {
        let (mut ctrl, _, _) = controller();
        let mut source = traffic();
        let ticket = ctrl.begin_connect().unwrap();
        ctrl.complete_handshake(ticket);
        for _ in 0..500 {
            ctrl.tick(&mut source);
            assert!(ctrl.traffic().len() <= 21);
        }
    }

    #[test]
    fn test_selection_mid_session_applies_to_next_session() {
        let (mut ctrl, _, _) = controller();
        let ticket = ctrl.begin_connect().unwrap();
        ctrl.complete_handshake(ticket);

        let tokyo = data::find_server("jp-tok").unwrap();
        ctrl.select_server(tokyo);
        let entry = ctrl.disconnect().unwrap();
        assert_eq!(entry.server_name, "São Paulo");
        assert_eq!(ctrl.selected_server().name, "Tokyo");
        assert_eq!(ctrl.context().server_name.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_selection_while_disconnected_leaves_history() {
        let (mut ctrl, _, _) = controller();
        let before = ctrl.history().to_vec();
        ctrl.select_server(data::find_server("fr-par").unwrap());
        assert_eq!(ctrl.history(), before.as_slice());
        assert_eq!(ctrl.selected_server().id, "fr-par");
    }

    #[test]
    fn test_activity_log_is_bounded() {
        let (mut ctrl, _, _) = controller();
        for _ in 0..20 {
            ctrl.toggle_security(SecurityFeature::AdBlocker);
        }
        assert_eq!(ctrl.activity().len(), 11);
        let last = ctrl.activity().lines().last().unwrap();
        assert!(last.ends_with("Setting updated: adBlocker is now Enabled"));
    }

    #[test]
    fn test_clear_data_resets_everything() {
        let (mut ctrl, store, _) = controller();
        let ticket = ctrl.begin_connect().unwrap();
        ctrl.complete_handshake(ticket);
        ctrl.tick(&mut traffic());
        ctrl.disconnect().unwrap();
        ctrl.toggle_security(SecurityFeature::DoubleVpn);
        let pending = ctrl.begin_connect().unwrap();
        assert!(!store.is_empty());

        ctrl.clear_data().unwrap();

        assert!(store.is_empty());
        assert_eq!(ctrl.status(), ConnectionStatus::Disconnected);
        assert_eq!(ctrl.history(), data::seed_history().as_slice());
        assert_eq!(ctrl.account(), &data::seed_account());
        assert_eq!(ctrl.toggles(), SecurityToggles::default());
        assert!(ctrl.traffic().is_empty());
        assert!(!ctrl.complete_handshake(pending));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::seconds(59)), "0m");
        assert_eq!(format_duration(Duration::minutes(45)), "45m");
        assert_eq!(format_duration(Duration::minutes(135)), "2h 15m");
    }
}
