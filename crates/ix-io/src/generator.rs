//! Random vehicle streams for testing and benchmarking.
//!
//! # Shape of a stream
//!
//! - Ids are `0, 1, 2, …` in stream order.
//! - Vehicles arrive in *groups* sharing one arrival tick.  A group has
//!   `1 + extra` vehicles with `extra` uniform in `0..=max_group`, and no two
//!   vehicles of a group enter at the same zone.
//! - Consecutive groups are `1..=max_gap` ticks apart; the first starts at
//!   tick 0.
//! - Each vehicle pays nothing, or with probability `pay_prob` a toll
//!   uniform in `1..=pay_max`.
//!
//! All randomness comes from the caller's [`SolverRng`], so a seed
//! reproduces a stream exactly.

use std::io::Write;
use std::path::{Path, PathBuf};

use ix_core::{SolverRng, Tick, VehicleId, VehicleSpec, ZONE_COUNT, ZoneId};

use crate::{HeaderMode, IoResult};

/// Generator parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Vehicles per stream.  `None` draws a count in `1..=MAX_RANDOM_VEHICLES`.
    pub vehicles:  Option<usize>,
    pub pay_prob:  f64,
    pub pay_max:   u64,
    /// Largest tick gap between groups (at least 1).
    pub max_gap:   u64,
    /// Largest number of vehicles joining a group's first vehicle.  Capped
    /// at three, since a group cannot use more entry zones than exist.
    pub max_group: usize,
}

impl GeneratorConfig {
    pub const MAX_RANDOM_VEHICLES: usize = 1000;
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vehicles:  None,
            pay_prob:  0.25,
            pay_max:   10_000,
            max_gap:   5,
            max_group: 3,
        }
    }
}

/// Draw one vehicle stream.
pub fn generate(config: &GeneratorConfig, rng: &mut SolverRng) -> Vec<VehicleSpec> {
    let count = config
        .vehicles
        .unwrap_or_else(|| rng.gen_range(1..=GeneratorConfig::MAX_RANDOM_VEHICLES));
    let max_extra = config.max_group.min(ZONE_COUNT - 1);
    let max_gap = config.max_gap.max(1);

    let mut specs = Vec::with_capacity(count);
    let mut arrival = Tick(0);
    let mut used = [false; ZONE_COUNT];
    let mut left_in_group = rng.gen_range(0..=max_extra);

    for i in 0..count {
        let free: Vec<ZoneId> = ZoneId::ALL.into_iter().filter(|z| !used[z.index()]).collect();
        let start = free[rng.gen_range(0..free.len())];
        used[start.index()] = true;

        let exits: Vec<ZoneId> = ZoneId::ALL.into_iter().filter(|&z| z != start).collect();
        let end = exits[rng.gen_range(0..exits.len())];

        let payment = if config.pay_max > 0 && rng.gen_bool(config.pay_prob) {
            rng.gen_range(1..=config.pay_max)
        } else {
            0
        };

        specs.push(VehicleSpec { id: VehicleId(i as u32), arrival, start, end, payment });

        if left_in_group == 0 {
            arrival = Tick(arrival.0 + rng.gen_range(1..=max_gap));
            used = [false; ZONE_COUNT];
            left_in_group = rng.gen_range(0..=max_extra);
        } else {
            left_in_group -= 1;
        }
    }
    specs
}

/// Write `specs` in the text stream format, optionally behind a count
/// header.
pub fn write_vehicles<W: Write>(mut writer: W, specs: &[VehicleSpec], header: HeaderMode) -> IoResult<()> {
    if header == HeaderMode::Count {
        writeln!(writer, "{}", specs.len())?;
    }
    for s in specs {
        writeln!(writer, "{} {} {} {} {}", s.id.0, s.arrival.0, s.start, s.end, s.payment)?;
    }
    writer.flush()?;
    Ok(())
}

/// `dir/testcase{index}.txt`.
pub fn case_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("testcase{index}.txt"))
}
