use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt;

mod units;

pub use units::{DataAmount, DataAmountParseError};

/// Number of traffic samples kept for the dashboard chart.
pub const TRAFFIC_WINDOW_CAPACITY: usize = 21;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub country: String,
    pub flag: String,
    pub latency_ms: u32,
    pub load: u8,
    pub ip: String,
}

impl Server {
    pub fn is_low_latency(&self) -> bool {
        self.latency_ms < 100
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrafficSample {
    /// Mb/s
    pub download: f64,
    /// Mb/s
    pub upload: f64,
    /// Unix milliseconds
    pub timestamp: i64,
}

impl TrafficSample {
    pub fn idle(timestamp: i64) -> Self {
        Self {
            download: 0.0,
            upload: 0.0,
            timestamp,
        }
    }

    /// Volume moved during a one second tick at these rates.
    pub fn volume(&self) -> DataAmount {
        DataAmount::from_mb((self.download + self.upload) / 8.0)
    }
}

/// Fixed-capacity ring of the most recent traffic samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficWindow {
    samples: VecDeque<TrafficSample>,
}

impl Default for TrafficWindow {
    fn default() -> Self {
        Self {
            samples: VecDeque::with_capacity(TRAFFIC_WINDOW_CAPACITY),
        }
    }
}

impl TrafficWindow {
    pub fn push(&mut self, sample: TrafficSample) {
        if self.samples.len() >= TRAFFIC_WINDOW_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn latest(&self) -> Option<&TrafficSample> {
        self.samples.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrafficSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Highest download rate in the window, never below 1 Mb/s so charts keep a scale.
    pub fn peak_download(&self) -> f64 {
        self.samples
            .iter()
            .map(|s| s.download)
            .fold(0.0_f64, f64::max)
            .max(1.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionOutcome {
    Success,
    Interrupted,
}

/// One completed connect → disconnect cycle. Never mutated once recorded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionLogEntry {
    pub id: String,
    pub server_name: String,
    pub flag: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub data_used: DataAmount,
    pub status: SessionOutcome,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
pub enum PlanTier {
    Free,
    #[default]
    Pro,
    Lifetime,
}

impl PlanTier {
    pub fn label(&self) -> &'static str {
        match self {
            PlanTier::Free => "Free",
            PlanTier::Pro => "Pro",
            PlanTier::Lifetime => "Lifetime",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub name: String,
    pub email: String,
    pub plan: PlanTier,
    pub expiry_date: String,
    pub total_data_used: DataAmount,
    pub monthly_limit: DataAmount,
}

impl AccountRecord {
    /// Adds a finished session's volume. The total never decreases.
    pub fn record_usage(&mut self, amount: DataAmount) {
        self.total_data_used = self.total_data_used + amount;
    }

    pub fn usage_percent(&self) -> f64 {
        self.total_data_used.percent_of(self.monthly_limit)
    }

    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    /// Unix milliseconds
    pub timestamp: i64,
    pub latency_ms: Option<u64>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>, timestamp: i64) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp,
            latency_ms: None,
        }
    }

    pub fn assistant(content: impl Into<String>, timestamp: i64, latency_ms: u64) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp,
            latency_ms: Some(latency_ms),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SecurityFeature {
    KillSwitch,
    DoubleVpn,
    StealthMode,
    AdBlocker,
}

impl SecurityFeature {
    pub fn all() -> &'static [SecurityFeature] {
        &[
            SecurityFeature::KillSwitch,
            SecurityFeature::DoubleVpn,
            SecurityFeature::StealthMode,
            SecurityFeature::AdBlocker,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            SecurityFeature::KillSwitch => "killSwitch",
            SecurityFeature::DoubleVpn => "doubleVpn",
            SecurityFeature::StealthMode => "stealthMode",
            SecurityFeature::AdBlocker => "adBlocker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SecurityFeature::KillSwitch => "Kill Switch",
            SecurityFeature::DoubleVpn => "Double VPN",
            SecurityFeature::StealthMode => "Modo Stealth",
            SecurityFeature::AdBlocker => "Mundo Shield",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SecurityFeature::KillSwitch => "Interrupt connection if VPN drops",
            SecurityFeature::DoubleVpn => "Chain through two servers",
            SecurityFeature::StealthMode => "Bypass deep packet inspection",
            SecurityFeature::AdBlocker => "Block ads and tracking",
        }
    }
}

/// Cosmetic switches. Flipping them has no effect on the simulated tunnel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityToggles {
    pub kill_switch: bool,
    pub double_vpn: bool,
    pub stealth_mode: bool,
    pub ad_blocker: bool,
}

impl Default for SecurityToggles {
    fn default() -> Self {
        Self {
            kill_switch: true,
            double_vpn: false,
            stealth_mode: true,
            ad_blocker: true,
        }
    }
}

impl SecurityToggles {
    pub fn get(&self, feature: SecurityFeature) -> bool {
        match feature {
            SecurityFeature::KillSwitch => self.kill_switch,
            SecurityFeature::DoubleVpn => self.double_vpn,
            SecurityFeature::StealthMode => self.stealth_mode,
            SecurityFeature::AdBlocker => self.ad_blocker,
        }
    }

    /// Flips `feature` and returns its new value.
    pub fn toggle(&mut self, feature: SecurityFeature) -> bool {
        let slot = match feature {
            SecurityFeature::KillSwitch => &mut self.kill_switch,
            SecurityFeature::DoubleVpn => &mut self.double_vpn,
            SecurityFeature::StealthMode => &mut self.stealth_mode,
            SecurityFeature::AdBlocker => &mut self.ad_blocker,
        };
        *slot = !*slot;
        *slot
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    /// Declared for a future failure path; no transition produces it.
    Error,
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionStatus::Disconnected => "disconnected",
            ConnectionStatus::Connecting => "connecting",
            ConnectionStatus::Connected => "connected",
            ConnectionStatus::Error => "error",
        }
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
