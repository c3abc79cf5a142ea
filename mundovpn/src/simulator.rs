use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::Range;

const DOWNLOAD_RANGE: Range<f64> = 5.0..20.0;
const UPLOAD_RANGE: Range<f64> = 1.0..6.0;

/// Produces the synthetic (download, upload) rates in Mb/s for one tick.
pub trait TrafficSource {
    fn next_rates(&mut self) -> (f64, f64);
}

pub struct RandomTraffic<R: Rng = StdRng> {
    rng: R,
}

impl RandomTraffic<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomTraffic<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TrafficSource for RandomTraffic<R> {
    fn next_rates(&mut self) -> (f64, f64) {
        (
            self.rng.gen_range(DOWNLOAD_RANGE),
            self.rng.gen_range(UPLOAD_RANGE),
        )
    }
}

/// Always reports the same rates.
#[derive(Debug, Clone, Copy)]
pub struct ConstantTraffic {
    pub download: f64,
    pub upload: f64,
}

impl TrafficSource for ConstantTraffic {
    fn next_rates(&mut self) -> (f64, f64) {
        (self.download, self.upload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_rates_stay_in_bounds() {
        let mut source = RandomTraffic::seeded(7);
        for _ in 0..1000 {
            let (dl, ul) = source.next_rates();
            assert!(DOWNLOAD_RANGE.contains(&dl), "download {dl} out of range");
            assert!(UPLOAD_RANGE.contains(&ul), "upload {ul} out of range");
        }
    }

    #[test]
    fn test_seeded_sources_repeat() {
        let mut a = RandomTraffic::seeded(42);
        let mut b = RandomTraffic::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.next_rates(), b.next_rates());
        }
    }
}
