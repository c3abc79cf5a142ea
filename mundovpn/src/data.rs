use mundovpn_common::{
    AccountRecord, DataAmount, PlanTier, Server, SessionLogEntry, SessionOutcome,
};

const DEFAULT_SERVER_INDEX: usize = 3;

fn server(
    id: &str,
    name: &str,
    country: &str,
    flag: &str,
    latency_ms: u32,
    load: u8,
    ip: &str,
) -> Server {
    Server {
        id: id.to_string(),
        name: name.to_string(),
        country: country.to_string(),
        flag: flag.to_string(),
        latency_ms,
        load,
        ip: ip.to_string(),
    }
}

pub fn get_default_servers() -> Vec<Server> {
    vec![
        server("us-east", "New York", "United States", "🇺🇸", 42, 35, "142.250.190.46"),
        server("uk-lon", "London", "United Kingdom", "🇬🇧", 110, 62, "172.217.169.174"),
        server("jp-tok", "Tokyo", "Japan", "🇯🇵", 215, 15, "172.217.161.68"),
        server("br-sp", "São Paulo", "Brazil", "🇧🇷", 15, 45, "201.10.12.1"),
        server("de-fra", "Frankfurt", "Germany", "🇩🇪", 95, 88, "142.250.74.206"),
        server("sg-sin", "Singapore", "Singapore", "🇸🇬", 180, 22, "108.177.126.101"),
        server("au-syd", "Sydney", "Australia", "🇦🇺", 280, 40, "13.236.0.0"),
        server("ca-tor", "Toronto", "Canada", "🇨🇦", 55, 28, "35.203.32.0"),
        server("za-jhb", "Johannesburg", "South Africa", "🇿🇦", 310, 12, "160.119.0.0"),
        server("fr-par", "Paris", "France", "🇫🇷", 88, 55, "15.236.0.0"),
        server("in-mum", "Mumbai", "India", "🇮🇳", 195, 72, "13.126.0.0"),
    ]
}

pub fn default_server() -> Server {
    get_default_servers().swap_remove(DEFAULT_SERVER_INDEX)
}

pub fn find_server(id: &str) -> Option<Server> {
    get_default_servers().into_iter().find(|s| s.id == id)
}

#[allow(clippy::too_many_arguments)]
fn history_entry(
    id: &str,
    server_name: &str,
    flag: &str,
    date: &str,
    start_time: &str,
    end_time: &str,
    duration: &str,
    data_used: DataAmount,
    status: SessionOutcome,
) -> SessionLogEntry {
    SessionLogEntry {
        id: id.to_string(),
        server_name: server_name.to_string(),
        flag: flag.to_string(),
        date: date.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        duration: duration.to_string(),
        data_used,
        status,
    }
}

pub fn seed_history() -> Vec<SessionLogEntry> {
    use SessionOutcome::{Interrupted, Success};
    let mb = DataAmount::from_mb;

    vec![
        history_entry("1", "São Paulo", "🇧🇷", "25 Oct 2023", "14:20", "16:35", "2h 15m", mb(450.0), Success),
        history_entry("2", "New York", "🇺🇸", "24 Oct 2023", "09:10", "09:55", "45m", mb(120.0), Success),
        history_entry("3", "London", "🇬🇧", "24 Oct 2023", "22:00", "23:10", "1h 10m", mb(230.0), Success),
        history_entry("4", "Frankfurt", "🇩🇪", "23 Oct 2023", "08:00", "13:20", "5h 20m", DataAmount::from_gb(1.2), Success),
        history_entry("5", "Tokyo", "🇯🇵", "22 Oct 2023", "18:15", "18:45", "30m", mb(85.0), Interrupted),
        history_entry("6", "Paris", "🇫🇷", "21 Oct 2023", "11:30", "14:00", "2h 30m", mb(512.0), Success),
        history_entry("7", "Sydney", "🇦🇺", "20 Oct 2023", "03:10", "04:40", "1h 30m", mb(210.0), Success),
        history_entry("8", "Toronto", "🇨🇦", "19 Oct 2023", "20:00", "21:15", "1h 15m", mb(190.0), Success),
    ]
}

pub fn seed_account() -> AccountRecord {
    AccountRecord {
        name: "Alex Silva".to_string(),
        email: "alex.silva@mundo.io".to_string(),
        plan: PlanTier::Pro,
        expiry_date: "Dec 12, 2024".to_string(),
        total_data_used: DataAmount::from_gb(12.4),
        monthly_limit: DataAmount::from_gb(50.0),
    }
}
