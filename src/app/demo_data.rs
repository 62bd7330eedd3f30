//! Synthetic Monte Carlo runs for the demo window.
//!
//! Stands in for the simulation back end and the statistics provider: it
//! rolls out random-walk trajectories and summarizes them into percentile
//! records the way the provider would deliver them.

use crate::data::percentiles::{Percentile, PercentileRecord, PercentileSeries, Statistics};
use crate::data::trajectories::{StateSnapshot, Trajectory};

/// Variables produced by the demo simulation.
pub const DEMO_VARIABLES: [&str; 3] = ["Timber Harvest", "Fire Size", "Precipitation"];

/// Parameters of one simulated run.
#[derive(Debug, Clone, Copy)]
pub struct RunParams {
    pub seed: u64,
    pub trajectories: usize,
    pub max_steps: usize,
    /// Drift added per step to every variable.
    pub drift: f64,
    /// Number of pathways (the first ones) that end before `max_steps`.
    /// Each stops somewhere in the last fifth of the run.
    pub early_stops: usize,
}

impl Default for RunParams {
    fn default() -> Self {
        Self {
            seed: 7,
            trajectories: 40,
            max_steps: 30,
            drift: 0.3,
            early_stops: 3,
        }
    }
}

/// Roll out `params.trajectories` random walks over [`DEMO_VARIABLES`].
pub fn rollouts(params: RunParams) -> Vec<Trajectory> {
    let mut rng = fastrand::Rng::with_seed(params.seed);
    (0..params.trajectories)
        .map(|pathway| {
            let mut values = [50.0, 10.0, 30.0];
            let len = if pathway < params.early_stops {
                let first = (params.max_steps * 4 / 5).max(1);
                rng.usize(first.min(params.max_steps)..=params.max_steps)
            } else {
                params.max_steps
            };
            let mut steps = Vec::with_capacity(len);
            for event in 0..len {
                let mut snapshot = StateSnapshot::new(pathway as i64, event as u32);
                for (name, v) in DEMO_VARIABLES.iter().zip(values.iter_mut()) {
                    *v += params.drift + (rng.f64() - 0.5) * 4.0;
                    snapshot.values.insert((*name).to_string(), *v);
                }
                steps.push(snapshot);
            }
            Trajectory::new(steps)
        })
        .collect()
}

/// Nearest-rank percentiles of every variable at every step reached by at
/// least one trajectory. Steps past the shortest trajectory carry no values.
pub fn statistics(trajectories: &[Trajectory]) -> Statistics {
    let longest = trajectories.iter().map(Trajectory::len).max().unwrap_or(0);
    let shortest = trajectories.iter().map(Trajectory::len).min().unwrap_or(0);
    let mut stats = Statistics::default();
    for name in DEMO_VARIABLES {
        let series: PercentileSeries = (0..longest)
            .map(|step| {
                let mut record = PercentileRecord::new(step as u32);
                if step < shortest {
                    let mut values: Vec<f64> = trajectories
                        .iter()
                        .filter_map(|t| t.value_at(name, step))
                        .collect();
                    values.sort_by(f64::total_cmp);
                    for p in Percentile::ALL {
                        record.set(p, nearest_rank(&values, p));
                    }
                }
                record
            })
            .collect();
        stats.insert(name, series);
    }
    stats
}

fn nearest_rank(sorted: &[f64], p: Percentile) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let idx = (f64::from(p.value()) / 100.0 * last as f64).round() as usize;
    sorted.get(idx.min(last)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentiles_are_ordered_and_stop_at_the_shortest_run() {
        let runs = rollouts(RunParams {
            early_stops: 10,
            ..RunParams::default()
        });
        let shortest = runs.iter().map(Trajectory::len).min().unwrap();
        let stats = statistics(&runs);
        let series = stats.series(DEMO_VARIABLES[0]).unwrap();
        for record in &series[..shortest] {
            let values: Vec<f64> = Percentile::ALL
                .iter()
                .map(|p| record.get(*p).unwrap())
                .collect();
            assert!(values.windows(2).all(|w| w[0] <= w[1]));
        }
        assert!(series[shortest..]
            .iter()
            .all(|r| r.get(Percentile::P100).is_none()));
    }

    #[test]
    fn default_runs_populate_most_steps() {
        let params = RunParams::default();
        let runs = rollouts(params);
        let shortest = runs.iter().map(Trajectory::len).min().unwrap();
        assert!(shortest >= params.max_steps * 4 / 5, "shortest run {shortest}");
        assert!(runs[params.early_stops..]
            .iter()
            .all(|t| t.len() == params.max_steps));
    }

    #[test]
    fn same_seed_gives_same_runs() {
        let a = rollouts(RunParams::default());
        let b = rollouts(RunParams::default());
        assert_eq!(a, b);
    }
}
