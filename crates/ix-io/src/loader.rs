//! Vehicle stream loader.
//!
//! Records are returned in stream order, which is the arrival order the
//! temporal graph uses; they are never sorted.
//!
//! # Text format
//!
//! One record per line, five whitespace-separated integers:
//!
//! ```text
//! id arrival_time start_zone end_zone payment
//! ```
//!
//! Blank lines are skipped.  With [`HeaderMode::Count`] the first non-blank
//! line is a single integer that must equal the number of records.
//!
//! # CSV format
//!
//! ```csv
//! id,arrival_time,start_zone,end_zone,payment
//! 0,0,0,1,0
//! 1,0,2,3,250
//! ```
//!
//! # Rejected records
//!
//! Wrong field count, a non-integer or negative field, a zone outside
//! `0..=3`, `start_zone == end_zone`, a repeated id, or a path the planner
//! cannot produce.  The first bad record aborts the load with
//! [`IoError::Malformed`] naming its line; nothing is returned partially.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashSet;
use serde::Deserialize;
use tracing::debug;

use ix_core::{PathPlanner, Tick, Vehicle, VehicleId, VehicleSpec, ZoneId};

use crate::{HeaderMode, InputFormat, IoError, IoResult, LoadOptions};

// ── Record ────────────────────────────────────────────────────────────────────

/// One raw record, before zone and path validation.
#[derive(Deserialize)]
struct VehicleRecord {
    id:           u32,
    arrival_time: u64,
    start_zone:   u64,
    end_zone:     u64,
    payment:      u64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load and plan every vehicle of the file at `path`.
pub fn load_vehicles<P: PathPlanner + ?Sized>(
    path:    &Path,
    options: &LoadOptions,
    planner: &P,
) -> IoResult<Vec<Vehicle>> {
    let file = File::open(path)?;
    read_vehicles(BufReader::new(file), options, planner)
}

/// Like [`load_vehicles`] but accepts any `BufRead` source (stdin, a
/// `Cursor` in tests).
pub fn read_vehicles<R: BufRead, P: PathPlanner + ?Sized>(
    reader:  R,
    options: &LoadOptions,
    planner: &P,
) -> IoResult<Vec<Vehicle>> {
    let vehicles = match options.format {
        InputFormat::Text => read_text(reader, options.header, planner)?,
        InputFormat::Csv  => read_csv(reader, planner)?,
    };
    debug!(vehicles = vehicles.len(), format = %options.format, "vehicle stream loaded");
    Ok(vehicles)
}

// ── Text ──────────────────────────────────────────────────────────────────────

fn read_text<R: BufRead, P: PathPlanner + ?Sized>(
    reader: R,
    header: HeaderMode,
    planner: &P,
) -> IoResult<Vec<Vehicle>> {
    let mut acc = Accumulator::new(planner);
    let mut declared: Option<u64> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let number = i as u64 + 1;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if header == HeaderMode::Count && declared.is_none() {
            let count = text.parse::<u64>().map_err(|_| IoError::Malformed {
                line:   number,
                text:   line.clone(),
                reason: "expected a vehicle count header".into(),
            })?;
            declared = Some(count);
            continue;
        }

        let fields: Vec<&str> = text.split_whitespace().collect();
        if fields.len() != 5 {
            return Err(IoError::Malformed {
                line:   number,
                text:   line.clone(),
                reason: format!("expected 5 fields, found {}", fields.len()),
            });
        }
        let mut values = [0u64; 5];
        for (slot, (field, name)) in values.iter_mut().zip(fields.iter().zip(FIELD_NAMES)) {
            *slot = field.parse::<u64>().map_err(|_| IoError::Malformed {
                line:   number,
                text:   line.clone(),
                reason: format!("{name} {field:?} is not a non-negative integer"),
            })?;
        }
        let [id, arrival, start, end, payment] = values;
        let id = u32::try_from(id).map_err(|_| IoError::Malformed {
            line:   number,
            text:   line.clone(),
            reason: format!("id {id} does not fit in 32 bits"),
        })?;

        let record = VehicleRecord { id, arrival_time: arrival, start_zone: start, end_zone: end, payment };
        acc.push(number, &line, record)?;
    }

    let vehicles = acc.finish();
    if header == HeaderMode::Count {
        // An empty stream with no header at all declares nothing; accept it
        // as zero vehicles.
        let declared = declared.unwrap_or(0);
        if declared != vehicles.len() as u64 {
            return Err(IoError::HeaderMismatch { declared, found: vehicles.len() });
        }
    }
    Ok(vehicles)
}

const FIELD_NAMES: [&str; 5] = ["id", "arrival_time", "start_zone", "end_zone", "payment"];

// ── CSV ───────────────────────────────────────────────────────────────────────

fn read_csv<R: BufRead, P: PathPlanner + ?Sized>(reader: R, planner: &P) -> IoResult<Vec<Vehicle>> {
    // Flexible so a short or long row is reported as a malformed record.
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut acc = Accumulator::new(planner);

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let text = record.iter().collect::<Vec<_>>().join(",");
        if record.len() != headers.len() {
            return Err(IoError::Malformed {
                line,
                text,
                reason: format!("expected {} fields, found {}", headers.len(), record.len()),
            });
        }
        let row: VehicleRecord = record.deserialize(Some(&headers)).map_err(|e| IoError::Malformed {
            line,
            text:   text.clone(),
            reason: e.to_string(),
        })?;
        acc.push(line, &text, row)?;
    }
    Ok(acc.finish())
}

// ── Shared validation ─────────────────────────────────────────────────────────

/// Validates parsed records and plans their paths.
struct Accumulator<'p, P: ?Sized> {
    planner:  &'p P,
    seen:     FxHashSet<VehicleId>,
    vehicles: Vec<Vehicle>,
}

impl<'p, P: PathPlanner + ?Sized> Accumulator<'p, P> {
    fn new(planner: &'p P) -> Self {
        Self { planner, seen: FxHashSet::default(), vehicles: Vec::new() }
    }

    fn push(&mut self, line: u64, text: &str, record: VehicleRecord) -> IoResult<()> {
        let malformed = |reason: String| IoError::Malformed { line, text: text.to_owned(), reason };

        let id = VehicleId(record.id);
        let start = ZoneId::try_from(record.start_zone)
            .map_err(|e| malformed(format!("start_zone: {e}")))?;
        let end = ZoneId::try_from(record.end_zone)
            .map_err(|e| malformed(format!("end_zone: {e}")))?;
        if !self.seen.insert(id) {
            return Err(malformed(format!("duplicate vehicle id {}", id.0)));
        }

        let spec = VehicleSpec::new(id, Tick(record.arrival_time), start, end, record.payment)
            .map_err(|e| malformed(e.to_string()))?;
        let vehicle = Vehicle::plan(spec, self.planner).map_err(|e| malformed(e.to_string()))?;
        self.vehicles.push(vehicle);
        Ok(())
    }

    fn finish(self) -> Vec<Vehicle> {
        self.vehicles
    }
}
