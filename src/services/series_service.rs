use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{Cadence, Instrument, PricePoint, PriceSeries, SeriesPair};

/// Regularly spaced timestamps for a cadence, the first one being `start`
pub fn timestamps(cadence: Cadence, start: DateTime<Utc>) -> Vec<DateTime<Utc>> {
    let spec = cadence.spec();
    let interval = spec.interval();
    (0..spec.points)
        .map(|i| start + interval * i as i32)
        .collect()
}

fn random_series<R: Rng + ?Sized>(
    instrument: Instrument,
    times: &[DateTime<Utc>],
    rng: &mut R,
) -> PriceSeries {
    let bounds = instrument.chart_bounds();
    let points = times
        .iter()
        .map(|&timestamp| PricePoint {
            timestamp,
            price: rng.gen_range(bounds.clone()),
        })
        .collect();

    PriceSeries { instrument, points }
}

/// Generate synthetic chart series for gold and silver.
/// Every point is an independent draw; gold is drawn in full before silver.
pub fn generate<R: Rng + ?Sized>(
    cadence: Cadence,
    start: DateTime<Utc>,
    rng: &mut R,
) -> SeriesPair {
    let times = timestamps(cadence, start);
    let gold = random_series(Instrument::Gold, &times, rng);
    let silver = random_series(Instrument::Silver, &times, rng);
    tracing::debug!(
        "Generated {} series: {} points from {}",
        cadence.label(),
        times.len(),
        start
    );

    SeriesPair { cadence, gold, silver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn assert_spacing(series: &PriceSeries, count: usize, interval: Duration) {
        assert_eq!(series.len(), count);
        assert_eq!(series.points[0].timestamp, start());
        for pair in series.points.windows(2) {
            assert!(pair[1].timestamp > pair[0].timestamp);
            assert_eq!(pair[1].timestamp - pair[0].timestamp, interval);
        }
    }

    #[test]
    fn test_hourly_series() {
        let pair = generate(Cadence::Hourly, start(), &mut StdRng::seed_from_u64(1));
        assert_spacing(&pair.gold, 10, Duration::hours(1));
        assert_spacing(&pair.silver, 10, Duration::hours(1));
    }

    #[test]
    fn test_daily_series() {
        let pair = generate(Cadence::Daily, start(), &mut StdRng::seed_from_u64(2));
        assert_spacing(&pair.gold, 7, Duration::days(1));
        assert_spacing(&pair.silver, 7, Duration::days(1));
    }

    #[test]
    fn test_weekly_series() {
        let pair = generate(Cadence::Weekly, start(), &mut StdRng::seed_from_u64(3));
        assert_spacing(&pair.gold, 4, Duration::weeks(1));
        assert_spacing(&pair.silver, 4, Duration::weeks(1));
    }

    #[test]
    fn test_prices_stay_in_chart_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..500 {
            for cadence in [Cadence::Hourly, Cadence::Daily, Cadence::Weekly] {
                let pair = generate(cadence, start(), &mut rng);
                assert!(pair.gold.prices().all(|p| (1800.0..=1850.0).contains(&p)));
                assert!(pair.silver.prices().all(|p| (24.5..=25.5).contains(&p)));
            }
        }
    }

    #[test]
    fn test_both_series_share_timestamps() {
        let pair = generate(Cadence::Daily, start(), &mut rand::thread_rng());
        let gold_times: Vec<_> = pair.gold.points.iter().map(|p| p.timestamp).collect();
        let silver_times: Vec<_> = pair.silver.points.iter().map(|p| p.timestamp).collect();
        assert_eq!(gold_times, silver_times);
        assert_eq!(pair.cadence, Cadence::Daily);
        assert_eq!(pair.gold.instrument, Instrument::Gold);
        assert_eq!(pair.silver.instrument, Instrument::Silver);
    }
}
