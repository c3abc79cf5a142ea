#[cfg(feature = "desktop")]
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

pub const WINDOW_WIDTH: f64 = 420.0;
pub const WINDOW_HEIGHT: f64 = 860.0;

#[cfg(feature = "desktop")]
pub fn desktop_config() -> Config {
    Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Mundo VPN")
                .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(false),
        )
        .with_menu(None)
        .with_resource_directory(".")
}
