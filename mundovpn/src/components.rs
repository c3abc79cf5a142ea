pub mod toast;
pub mod traffic_chart;
pub mod ui;

pub use traffic_chart::TrafficChart;
pub use ui::*;
