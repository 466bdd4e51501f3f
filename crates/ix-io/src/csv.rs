//! CSV export of a computed schedule.
//!
//! One row per scheduled visit:
//!
//! ```csv
//! zone,position,vehicle_id,ready_time
//! 0,0,0,1.40
//! 0,1,1,1.60
//! ```
//!
//! `position` is 0-based within the zone.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use ix_core::ZoneId;
use ix_schedule::ZoneSchedule;

use crate::IoResult;

const HEADER: [&str; 4] = ["zone", "position", "vehicle_id", "ready_time"];

/// Writes schedules as CSV rows.
pub struct ScheduleCsvWriter<W: Write> {
    writer:   Writer<W>,
    finished: bool,
}

impl ScheduleCsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> IoResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> ScheduleCsvWriter<W> {
    /// Wrap `inner` and write the header row.
    pub fn new(inner: W) -> IoResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(HEADER)?;
        Ok(Self { writer, finished: false })
    }

    /// Append one row per visit of `schedule`, zone by zone.
    pub fn write_schedule(&mut self, schedule: &ZoneSchedule) -> IoResult<()> {
        for zone in ZoneId::ALL {
            for (position, visit) in schedule.zone(zone).iter().enumerate() {
                self.writer.write_record(&[
                    zone.to_string(),
                    position.to_string(),
                    visit.vehicle.0.to_string(),
                    format!("{:.2}", visit.ready_time),
                ])?;
            }
        }
        Ok(())
    }

    /// Flush buffered rows.  Idempotent.
    pub fn finish(&mut self) -> IoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the wrapped writer.
    pub fn into_inner(mut self) -> IoResult<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| crate::IoError::Io(e.into_error()))
    }
}
