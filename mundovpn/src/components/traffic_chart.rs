use dioxus::prelude::*;
use mundovpn_common::{TrafficSample, TrafficWindow, TRAFFIC_WINDOW_CAPACITY};

const CHART_WIDTH: f64 = 300.0;
const CHART_HEIGHT: f64 = 100.0;
const COLOR_DOWNLOAD: &str = "#10b981";

/// Builds the stroke and fill paths for the download series.
///
/// Points are laid out right-aligned over the full window capacity so the
/// chart scrolls left as samples arrive.
pub fn sparkline_paths(samples: &[TrafficSample], peak: f64) -> Option<(String, String)> {
    if samples.is_empty() {
        return None;
    }

    let step = CHART_WIDTH / (TRAFFIC_WINDOW_CAPACITY - 1) as f64;
    let offset = TRAFFIC_WINDOW_CAPACITY.saturating_sub(samples.len()) as f64 * step;
    let peak = peak.max(1.0);

    let points: Vec<(f64, f64)> = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let x = offset + i as f64 * step;
            let y = CHART_HEIGHT - (s.download / peak).clamp(0.0, 1.0) * CHART_HEIGHT;
            (x, y)
        })
        .collect();

    let mut line = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        line.push_str(&format!("{}{:.1},{:.1} ", cmd, x, y));
    }
    let line = line.trim_end().to_string();

    let first_x = points.first().map(|p| p.0).unwrap_or(0.0);
    let last_x = points.last().map(|p| p.0).unwrap_or(0.0);
    let area = format!(
        "{} L{:.1},{:.1} L{:.1},{:.1} Z",
        line, last_x, CHART_HEIGHT, first_x, CHART_HEIGHT
    );

    Some((line, area))
}

#[component]
pub fn TrafficChart(window: TrafficWindow) -> Element {
    let samples: Vec<TrafficSample> = window.iter().copied().collect();
    let paths = sparkline_paths(&samples, window.peak_download());

    rsx! {
        svg {
            class: "w-full h-full",
            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
            preserve_aspect_ratio: "none",
            defs {
                linearGradient { id: "colorDl", x1: "0", y1: "0", x2: "0", y2: "1",
                    stop { offset: "5%", stop_color: "{COLOR_DOWNLOAD}", stop_opacity: "0.3" }
                    stop { offset: "95%", stop_color: "{COLOR_DOWNLOAD}", stop_opacity: "0" }
                }
            }
            if let Some((line, area)) = paths {
                path { d: "{area}", fill: "url(#colorDl)", stroke: "none" }
                path {
                    d: "{line}",
                    fill: "none",
                    stroke: "{COLOR_DOWNLOAD}",
                    stroke_width: "2",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(download: f64) -> TrafficSample {
        TrafficSample {
            download,
            upload: 1.0,
            timestamp: 0,
        }
    }

    #[test]
    fn test_empty_window_draws_nothing() {
        assert!(sparkline_paths(&[], 1.0).is_none());
    }

    #[test]
    fn test_single_sample_is_right_aligned() {
        let (line, area) = sparkline_paths(&[sample(10.0)], 10.0).unwrap();
        assert_eq!(line, "M300.0,0.0");
        assert!(area.ends_with("L300.0,100.0 L300.0,100.0 Z"));
    }

    #[test]
    fn test_full_window_spans_the_width() {
        let samples: Vec<_> = (0..TRAFFIC_WINDOW_CAPACITY).map(|_| sample(0.0)).collect();
        let (line, _) = sparkline_paths(&samples, 1.0).unwrap();
        assert!(line.starts_with("M0.0,100.0"));
        assert!(line.ends_with("L300.0,100.0"));
    }
}
