pub mod assistant;
pub mod dashboard;
pub mod panel;
pub mod servers;
pub mod session_logs;
