use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

use crate::graphs::{edge::Road, Cost};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    if let Ok(style) =
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
    {
        bar.set_style(style);
    }
    bar
}

/// Mean of `total` over `count` runs, `None` for zero runs.
pub fn average_duration(total: Duration, count: u64) -> Option<Duration> {
    if count == 0 {
        return None;
    }
    let nanos = total.as_nanos() / u128::from(count);
    Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
}

/// Draws a random road list over `n` junctions. Every ordered pair of distinct
/// junctions gets a road with probability `density` and a cost in
/// `1..=max_cost`.
pub fn random_roads<R: Rng>(
    rng: &mut R,
    number_of_junctions: u32,
    density: f64,
    max_cost: Cost,
) -> Vec<Road> {
    let density = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let max_cost = max_cost.max(1);
    let mut roads = Vec::new();
    for from in 0..number_of_junctions {
        for to in 0..number_of_junctions {
            if from != to && rng.gen_bool(density) {
                roads.push(Road {
                    from,
                    to,
                    cost: rng.gen_range(1..=max_cost),
                });
            }
        }
    }
    roads
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use std::time::Duration;

    use super::{average_duration, random_roads};

    #[test]
    fn random_roads_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);
        let roads = random_roads(&mut rng, 10, 0.5, 20);
        assert!(!roads.is_empty());
        assert!(roads
            .iter()
            .all(|road| road.fits(10) && road.from != road.to && (1..=20).contains(&road.cost)));
    }

    #[test]
    fn average_over_many_searches() {
        assert_eq!(average_duration(Duration::from_secs(1), 0), None);
        assert_eq!(
            average_duration(Duration::from_secs(6), 3),
            Some(Duration::from_secs(2))
        );

        // more searches than fit into a u32
        let searches = 2 * 100_000 * 50_000_u64;
        assert_eq!(
            average_duration(Duration::from_secs(searches), searches),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn density_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(random_roads(&mut rng, 6, 0.0, 5).is_empty());
        assert_eq!(random_roads(&mut rng, 6, 1.0, 5).len(), 30);
    }
}
