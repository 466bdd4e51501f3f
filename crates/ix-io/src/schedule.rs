//! The four-line schedule format.

use std::io::{BufRead, Write};

use ix_core::{VehicleId, ZONE_COUNT};
use ix_schedule::ZoneSchedule;

use crate::{IoError, IoResult};

/// Write `schedule` as four lines, zone 0 first.
pub fn write_schedule<W: Write>(writer: W, schedule: &ZoneSchedule) -> IoResult<()> {
    write_orders(writer, &schedule.orders())
}

/// Write one line of space-separated vehicle ids per zone.
pub fn write_orders<W: Write>(mut writer: W, orders: &[Vec<VehicleId>; ZONE_COUNT]) -> IoResult<()> {
    for order in orders {
        let line: Vec<String> = order.iter().map(|v| v.0.to_string()).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Parse the four-line format back into per-zone orders.
///
/// Lines past the fourth must be blank.  A missing line is an error, so an
/// unused zone must still be written as an empty line.
pub fn read_schedule<R: BufRead>(reader: R) -> IoResult<[Vec<VehicleId>; ZONE_COUNT]> {
    let mut orders: [Vec<VehicleId>; ZONE_COUNT] = Default::default();
    let mut seen = 0usize;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if i >= ZONE_COUNT {
            if !line.trim().is_empty() {
                return Err(IoError::BadSchedule {
                    line:   i + 1,
                    reason: format!("expected {ZONE_COUNT} zone lines, found more"),
                });
            }
            continue;
        }
        for token in line.split_whitespace() {
            let id = token.parse::<u32>().map_err(|_| IoError::BadSchedule {
                line:   i + 1,
                reason: format!("{token:?} is not a vehicle id"),
            })?;
            orders[i].push(VehicleId(id));
        }
        seen += 1;
    }

    if seen < ZONE_COUNT {
        return Err(IoError::BadSchedule {
            line:   seen + 1,
            reason: format!("expected {ZONE_COUNT} zone lines, found {seen}"),
        });
    }
    Ok(orders)
}
