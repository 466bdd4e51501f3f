//! Unit tests for ix-io.

use std::io::Cursor;

use ix_core::{RingPlanner, Vehicle, VehicleId, ZoneId};

use crate::{HeaderMode, IoError, LoadOptions, read_vehicles};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn z(n: u8) -> ZoneId {
    ZoneId::new(n).unwrap()
}

fn load(input: &str, options: LoadOptions) -> Result<Vec<Vehicle>, IoError> {
    read_vehicles(Cursor::new(input), &options, &RingPlanner)
}

fn text(input: &str) -> Result<Vec<Vehicle>, IoError> {
    load(input, LoadOptions::default())
}

fn malformed_line(err: IoError) -> u64 {
    match err {
        IoError::Malformed { line, .. } => line,
        other => panic!("expected Malformed, got {other:?}"),
    }
}

// ── Text loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod text_loader {
    use ix_core::Tick;

    use super::*;

    #[test]
    fn reads_records_in_stream_order() {
        let vs = text("5 0 0 1 0\n3 2 2 0 150\n").unwrap();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs[0].id(), VehicleId(5));
        assert_eq!(vs[1].id(), VehicleId(3));
        assert_eq!(vs[1].arrival(), Tick(2));
        assert_eq!(vs[1].payment(), 150);
        assert_eq!(vs[1].path(), &[z(2), z(3), z(0)]);
    }

    #[test]
    fn blank_lines_and_extra_spaces_are_ignored() {
        let vs = text("\n  0   0 0 1 0  \n\n\t1 0 2 3 0\n\n").unwrap();
        assert_eq!(vs.len(), 2);
    }

    #[test]
    fn empty_stream_is_not_an_error() {
        assert!(text("").unwrap().is_empty());
        assert!(text("\n\n").unwrap().is_empty());
    }

    #[test]
    fn wrong_field_count() {
        let err = text("0 0 0 1 0\n1 0 2 3\n").unwrap_err();
        match err {
            IoError::Malformed { line, text, reason } => {
                assert_eq!(line, 2);
                assert_eq!(text, "1 0 2 3");
                assert!(reason.contains("5 fields"), "{reason}");
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn non_integer_field() {
        assert_eq!(malformed_line(text("0 0 zero 1 0").unwrap_err()), 1);
        assert_eq!(malformed_line(text("0 -1 0 1 0").unwrap_err()), 1);
        assert_eq!(malformed_line(text("0 0 0 1 0.5").unwrap_err()), 1);
    }

    #[test]
    fn zone_out_of_range() {
        let err = text("0 0 0 1 0\n\n1 0 4 1 0").unwrap_err();
        assert_eq!(malformed_line(err), 3);
    }

    #[test]
    fn same_start_and_end() {
        let err = text("0 0 2 2 0").unwrap_err();
        assert!(matches!(err, IoError::Malformed { line: 1, .. }));
    }

    #[test]
    fn duplicate_id() {
        let err = text("7 0 0 1 0\n7 1 2 3 0").unwrap_err();
        match err {
            IoError::Malformed { line, reason, .. } => {
                assert_eq!(line, 2);
                assert!(reason.contains("duplicate"));
            }
            other => panic!("{other:?}"),
        }
    }

    #[test]
    fn planner_failure_is_reported_per_line() {
        let broken = |start: ZoneId, _end: ZoneId| vec![start];
        let err = read_vehicles(Cursor::new("0 0 0 1 0"), &LoadOptions::default(), &broken).unwrap_err();
        assert_eq!(malformed_line(err), 1);
    }

    #[test]
    fn count_line_without_header_mode_is_malformed() {
        let err = text("2\n0 0 0 1 0\n1 0 2 3 0").unwrap_err();
        assert_eq!(malformed_line(err), 1);
    }
}

// ── Header modes ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod header {
    use super::*;

    fn counted(input: &str) -> Result<Vec<Vehicle>, IoError> {
        load(input, LoadOptions::text(HeaderMode::Count))
    }

    #[test]
    fn count_header_is_consumed() {
        let vs = counted("\n2\n0 0 0 1 0\n1 0 2 3 0\n").unwrap();
        assert_eq!(vs.len(), 2);
    }

    #[test]
    fn count_mismatch() {
        let err = counted("3\n0 0 0 1 0\n1 0 2 3 0\n").unwrap_err();
        assert!(matches!(err, IoError::HeaderMismatch { declared: 3, found: 2 }));
    }

    #[test]
    fn header_must_be_a_single_integer() {
        let err = counted("0 0 0 1 0\n").unwrap_err();
        assert_eq!(malformed_line(err), 1);
    }

    #[test]
    fn zero_count() {
        assert!(counted("0\n").unwrap().is_empty());
        assert!(counted("").unwrap().is_empty());
    }

    #[test]
    fn modes_parse() {
        assert_eq!("count".parse::<HeaderMode>().unwrap(), HeaderMode::Count);
        assert_eq!("Absent".parse::<HeaderMode>().unwrap(), HeaderMode::Absent);
        assert!("first".parse::<HeaderMode>().is_err());
        assert_eq!("csv".parse::<crate::InputFormat>().unwrap(), crate::InputFormat::Csv);
        assert_eq!(HeaderMode::default().to_string(), "absent");
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use super::*;

    fn csv(input: &str) -> Result<Vec<Vehicle>, IoError> {
        load(input, LoadOptions::csv())
    }

    #[test]
    fn reads_rows_by_column_name() {
        let vs = csv("id,arrival_time,start_zone,end_zone,payment\n0,0,0,1,0\n1, 3, 2, 3, 99\n").unwrap();
        assert_eq!(vs.len(), 2);
        assert_eq!(vs[1].id(), VehicleId(1));
        assert_eq!(vs[1].payment(), 99);
        assert_eq!(vs[1].path(), &[z(2), z(3)]);
    }

    #[test]
    fn column_order_is_free() {
        let vs = csv("payment,end_zone,start_zone,arrival_time,id\n5,1,0,0,9\n").unwrap();
        assert_eq!(vs[0].id(), VehicleId(9));
        assert_eq!(vs[0].end(), z(1));
        assert_eq!(vs[0].payment(), 5);
    }

    #[test]
    fn bad_value_names_its_line() {
        let err = csv("id,arrival_time,start_zone,end_zone,payment\n0,0,0,1,0\n1,x,2,3,0\n").unwrap_err();
        assert_eq!(malformed_line(err), 3);
    }

    #[test]
    fn short_row_is_malformed() {
        let err = csv("id,arrival_time,start_zone,end_zone,payment\n0,0,0,1,0\n1,0,2\n").unwrap_err();
        match err {
            IoError::Malformed { line, text, reason } => {
                assert_eq!(line, 3);
                assert_eq!(text, "1,0,2");
                assert_eq!(reason, "expected 5 fields, found 3");
            }
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn csv_error_message_is_not_prefixed_twice() {
        let input: &[u8] = b"id,arrival\xff_time\n";
        let err = read_vehicles(Cursor::new(input), &LoadOptions::csv(), &RingPlanner).unwrap_err();
        match &err {
            IoError::Csv(inner) => assert_eq!(err.to_string(), inner.to_string()),
            other => panic!("expected Csv, got {other:?}"),
        }
    }

    #[test]
    fn long_row_is_malformed() {
        let err = csv("id,arrival_time,start_zone,end_zone,payment\n0,0,0,1,0,7\n").unwrap_err();
        assert_eq!(malformed_line(err), 2);
    }

    #[test]
    fn zone_and_duplicate_checks_apply() {
        let header = "id,arrival_time,start_zone,end_zone,payment\n";
        assert_eq!(malformed_line(csv(&format!("{header}0,0,0,9,0\n")).unwrap_err()), 2);
        assert_eq!(malformed_line(csv(&format!("{header}0,0,0,1,0\n0,1,1,2,0\n")).unwrap_err()), 3);
    }

    #[test]
    fn header_only() {
        assert!(csv("id,arrival_time,start_zone,end_zone,payment\n").unwrap().is_empty());
    }
}

// ── Files ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod files {
    use std::io::Write;

    use super::*;
    use crate::load_vehicles;

    #[test]
    fn load_from_path() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "0 0 0 1 0").unwrap();
        writeln!(file, "1 0 2 3 0").unwrap();
        file.flush().unwrap();

        let vs = load_vehicles(file.path(), &LoadOptions::default(), &RingPlanner).unwrap();
        assert_eq!(vs.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_vehicles(&dir.path().join("nope.txt"), &LoadOptions::default(), &RingPlanner)
            .unwrap_err();
        assert!(matches!(err, IoError::Io(_)));
    }
}

// ── Schedule format ───────────────────────────────────────────────────────────

#[cfg(test)]
mod schedule_format {
    use ix_core::{SolverRng, Timing};
    use ix_graph::{Strategy, TemporalGraph, resolve};
    use ix_schedule::{ZoneSchedule, schedule, verify_orders};

    use super::*;
    use crate::{read_schedule, write_orders, write_schedule};

    fn solved(input: &str) -> (TemporalGraph, ZoneSchedule) {
        let vs = text(input).unwrap();
        let mut g = TemporalGraph::build(&vs, &Timing::default()).unwrap();
        resolve(&mut g, Strategy::Fcfs, &mut SolverRng::new(0));
        let s = schedule(&g, &Timing::default()).unwrap();
        (g, s)
    }

    fn render(s: &ZoneSchedule) -> String {
        let mut out = Vec::new();
        write_schedule(&mut out, s).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn four_lines_in_zone_order() {
        let (_, s) = solved("0 0 0 1 0\n1 0 0 2 0\n2 0 0 3 0\n");
        assert_eq!(render(&s), "0 1 2\n0 1 2\n1 2\n2\n");
    }

    #[test]
    fn unused_zones_are_empty_lines() {
        let (_, s) = solved("0 0 0 1 0\n");
        assert_eq!(render(&s), "0\n0\n\n\n");
        assert_eq!(render(&ZoneSchedule::empty()), "\n\n\n\n");
    }

    #[test]
    fn written_schedule_reads_back_and_verifies() {
        for input in ["0 0 0 1 0\n1 0 2 3 0\n", "0 0 0 1 0\n1 0 0 2 0\n2 0 0 3 0\n"] {
            let (g, s) = solved(input);
            let orders = read_schedule(Cursor::new(render(&s))).unwrap();
            assert_eq!(orders, s.orders());
            verify_orders(&g, &orders).unwrap();
        }
    }

    #[test]
    fn write_orders_matches_write_schedule() {
        let (_, s) = solved("4 0 1 3 0\n");
        let mut out = Vec::new();
        write_orders(&mut out, &s.orders()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), render(&s));
    }

    #[test]
    fn too_few_lines() {
        let err = read_schedule(Cursor::new("0\n1\n")).unwrap_err();
        assert!(matches!(err, IoError::BadSchedule { line: 3, .. }));
    }

    #[test]
    fn extra_content_lines() {
        let err = read_schedule(Cursor::new("0\n\n\n\n5\n")).unwrap_err();
        assert!(matches!(err, IoError::BadSchedule { line: 5, .. }));
        assert!(read_schedule(Cursor::new("0\n\n\n\n\n")).is_ok());
    }

    #[test]
    fn non_numeric_id() {
        let err = read_schedule(Cursor::new("0 x\n\n\n\n")).unwrap_err();
        assert!(matches!(err, IoError::BadSchedule { line: 1, .. }));
    }
}

// ── CSV export ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_export {
    use ix_core::{SolverRng, Timing};
    use ix_graph::{Strategy, TemporalGraph, resolve};
    use ix_schedule::schedule;

    use super::*;
    use crate::ScheduleCsvWriter;

    fn queued_schedule() -> ix_schedule::ZoneSchedule {
        let vs = text("0 0 0 1 0\n1 0 0 2 0\n").unwrap();
        let mut g = TemporalGraph::build(&vs, &Timing::default()).unwrap();
        resolve(&mut g, Strategy::Fcfs, &mut SolverRng::new(0));
        schedule(&g, &Timing::default()).unwrap()
    }

    #[test]
    fn header_and_rows() {
        let mut w = ScheduleCsvWriter::new(Vec::new()).unwrap();
        w.write_schedule(&queued_schedule()).unwrap();
        let out = String::from_utf8(w.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "zone,position,vehicle_id,ready_time");
        assert_eq!(lines[1], "0,0,0,1.40");
        assert_eq!(lines[2], "0,1,1,1.60");
        // zone 0: 2 visits, zone 1: 2, zone 2: 1.
        assert_eq!(lines.len(), 1 + 5);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("schedule.csv");
        let mut w = ScheduleCsvWriter::create(&path).unwrap();
        w.write_schedule(&queued_schedule()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(&rows[4][0], "2"); // zone
        assert_eq!(&rows[4][2], "1"); // vehicle_id
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use ix_core::{SolverRng, VehicleSpec};

    use super::*;
    use crate::{GeneratorConfig, case_path, generate, write_vehicles};

    fn config(n: usize) -> GeneratorConfig {
        GeneratorConfig { vehicles: Some(n), ..GeneratorConfig::default() }
    }

    fn stream(n: usize, seed: u64) -> Vec<VehicleSpec> {
        generate(&config(n), &mut SolverRng::new(seed))
    }

    #[test]
    fn same_seed_same_stream() {
        assert_eq!(stream(200, 9), stream(200, 9));
        assert_ne!(stream(200, 9), stream(200, 10));
    }

    #[test]
    fn sequential_ids_and_valid_zones() {
        let specs = stream(300, 1);
        assert_eq!(specs.len(), 300);
        for (i, s) in specs.iter().enumerate() {
            assert_eq!(s.id, VehicleId(i as u32));
            assert_ne!(s.start, s.end);
        }
    }

    #[test]
    fn groups_use_distinct_entry_zones() {
        let specs = stream(500, 2);
        for w in specs.windows(2) {
            let gap = w[1].arrival.0 - w[0].arrival.0;
            assert!(gap <= 5, "gap {gap}");
        }
        let mut i = 0;
        while i < specs.len() {
            let tick = specs[i].arrival;
            let group: Vec<&VehicleSpec> = specs[i..].iter().take_while(|s| s.arrival == tick).collect();
            assert!(group.len() <= 4);
            let mut starts: Vec<ZoneId> = group.iter().map(|s| s.start).collect();
            starts.sort();
            starts.dedup();
            assert_eq!(starts.len(), group.len());
            i += group.len();
        }
        assert_eq!(specs[0].arrival.0, 0);
    }

    #[test]
    fn payments_respect_bounds() {
        let specs = stream(1000, 3);
        assert!(specs.iter().all(|s| s.payment <= 10_000));
        let paying = specs.iter().filter(|s| s.payment > 0).count();
        assert!((150..350).contains(&paying), "{paying} paying vehicles");

        let free = GeneratorConfig { pay_prob: 0.0, ..config(100) };
        assert!(generate(&free, &mut SolverRng::new(3)).iter().all(|s| s.payment == 0));
    }

    #[test]
    fn random_count_within_limit() {
        let specs = generate(&GeneratorConfig::default(), &mut SolverRng::new(4));
        assert!((1..=GeneratorConfig::MAX_RANDOM_VEHICLES).contains(&specs.len()));
    }

    #[test]
    fn written_stream_loads_back() {
        let specs = stream(50, 5);
        for header in [HeaderMode::Absent, HeaderMode::Count] {
            let mut out = Vec::new();
            write_vehicles(&mut out, &specs, header).unwrap();
            let text = String::from_utf8(out).unwrap();
            let vs = load(&text, LoadOptions::text(header)).unwrap();
            let back: Vec<VehicleSpec> = vs.iter().map(|v| *v.spec()).collect();
            assert_eq!(back, specs);
        }
    }

    #[test]
    fn header_line_is_the_count() {
        let mut out = Vec::new();
        write_vehicles(&mut out, &stream(3, 6), HeaderMode::Count).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().next(), Some("3"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn case_paths() {
        let p = case_path(std::path::Path::new("cases"), 7);
        assert_eq!(p, std::path::Path::new("cases").join("testcase7.txt"));
    }
}
