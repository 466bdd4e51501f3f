//! Unit tests for ix-cli.

use std::io::Cursor;

use clap::Parser;
use clap::error::ErrorKind;

use ix_graph::Strategy;
use ix_io::{HeaderMode, InputFormat};

use crate::{GenArgs, SchedArgs};

fn sched(args: &[&str]) -> Result<SchedArgs, clap::Error> {
    SchedArgs::try_parse_from(std::iter::once("ixsched").chain(args.iter().copied()))
}

fn gen_args(args: &[&str]) -> Result<GenArgs, clap::Error> {
    GenArgs::try_parse_from(std::iter::once("ixgen").chain(args.iter().copied()))
}

// ── ixsched arguments ─────────────────────────────────────────────────────────

#[cfg(test)]
mod sched_args {
    use super::*;

    #[test]
    fn defaults() {
        let a = sched(&[]).unwrap();
        assert!(a.input.is_none());
        assert!(a.output.is_none());
        assert_eq!(a.strategy, Strategy::Fcfs);
        assert_eq!(a.seed, 42);
        assert_eq!(a.max_attempts, 10_000);
        assert!(!a.unbounded);
        assert_eq!(a.header, HeaderMode::Absent);
        assert_eq!(a.format, InputFormat::Text);
        assert!(a.csv_export.is_none());
        assert_eq!(a.verbose, 0);
    }

    #[test]
    fn positionals_and_options() {
        let a = sched(&[
            "in.txt", "out.txt", "-s", "random", "--seed", "9", "--header", "count",
            "--format", "csv", "--csv-export", "s.csv", "-vv",
        ])
        .unwrap();
        assert_eq!(a.input.as_deref(), Some(std::path::Path::new("in.txt")));
        assert_eq!(a.output.as_deref(), Some(std::path::Path::new("out.txt")));
        assert_eq!(a.strategy, Strategy::Random);
        assert_eq!(a.seed, 9);
        assert_eq!(a.header, HeaderMode::Count);
        assert_eq!(a.format, InputFormat::Csv);
        assert!(a.csv_export.is_some());
        assert_eq!(a.verbose, 2);
    }

    #[test]
    fn third_positional_is_a_usage_error() {
        let err = sched(&["a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn unknown_strategy_rejected() {
        let err = sched(&["--strategy", "lifo"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn unbounded_conflicts_with_explicit_limit() {
        assert!(sched(&["--unbounded"]).unwrap().unbounded);
        let err = sched(&["--unbounded", "--max-attempts", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn builder_follows_flags() {
        let solver = sched(&["--unbounded", "-s", "random"]).unwrap().solver_builder().build().unwrap();
        assert_eq!(solver.config().max_attempts, None);
        assert_eq!(solver.config().initial_strategy, Strategy::Random);

        let solver = sched(&["--max-attempts", "7"]).unwrap().solver_builder().build().unwrap();
        assert_eq!(solver.config().max_attempts, Some(7));
    }
}

// ── ixgen arguments ───────────────────────────────────────────────────────────

#[cfg(test)]
mod gen_args {
    use super::*;

    #[test]
    fn defaults() {
        let a = gen_args(&[]).unwrap();
        assert_eq!(a.cases, 1);
        assert_eq!(a.vehicles, None);
        assert_eq!(a.seed, 123);
        assert_eq!(a.pay_prob, 0.25);
        assert_eq!(a.pay_max, 10_000);
        assert!(!a.header);
        assert!(a.out.is_none());
    }

    #[test]
    fn options_reach_generator_config() {
        let a = gen_args(&["--vehicles", "12", "--pay-prob", "0.5", "--pay-max", "9"]).unwrap();
        let c = a.generator_config();
        assert_eq!(c.vehicles, Some(12));
        assert_eq!(c.pay_prob, 0.5);
        assert_eq!(c.pay_max, 9);
        assert_eq!(c.max_gap, 5);
    }

    #[test]
    fn several_cases_need_a_directory() {
        let a = gen_args(&["--cases", "3"]).unwrap();
        assert!(crate::casegen::run(&a).is_err());
    }

    #[test]
    fn probability_out_of_range() {
        let a = gen_args(&["--pay-prob", "1.5", "--out", "unused"]).unwrap();
        assert!(crate::casegen::run(&a).is_err());
    }
}

// ── End to end ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod end_to_end {
    use ix_core::{VehicleId, ZoneId};
    use ix_io::{LoadOptions, load_vehicles, read_schedule};

    use super::*;
    use crate::{casegen, sched};

    #[test]
    fn stream_to_schedule() {
        let args = sched(&[]).unwrap();
        let input = "0 0 0 1 0\n1 0 0 2 0\n2 0 0 3 0\n";
        let solution = sched::solve_stream(&args, Cursor::new(input)).unwrap();
        let zone0: Vec<VehicleId> = solution.schedule.order(ZoneId::ALL[0]);
        assert_eq!(zone0, vec![VehicleId(0), VehicleId(1), VehicleId(2)]);
    }

    #[test]
    fn zone_estimates_cover_every_zone() {
        let args = sched(&[]).unwrap();
        let input = "0 0 0 1 0\n1 0 0 2 0\n2 0 0 3 0\n";
        let solution = sched::solve_stream(&args, Cursor::new(input)).unwrap();
        let estimates = sched::zone_estimates(&solution);
        let visits: Vec<usize> = estimates.iter().map(|&(_, n, _)| n).collect();
        assert_eq!(visits, vec![3, 3, 2, 1]);
        assert_eq!(estimates[0].0, ZoneId::ALL[0]);
        // Third vehicle at zone 0 waits twice behind the first: 1.4 + 2 * 0.2.
        assert!((estimates[0].2 - 1.8).abs() < 1e-9);
        assert!(estimates.iter().all(|&(_, _, t)| t > 0.0));
    }

    #[test]
    fn malformed_stream_is_an_error() {
        let args = sched(&[]).unwrap();
        let err = sched::solve_stream(&args, Cursor::new("0 0 0 0 0\n")).unwrap_err();
        assert!(format!("{err:#}").contains("line 1"));
    }

    #[test]
    fn generated_cases_schedule_from_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let cases = dir.path().join("cases");
        let out_dir = cases.to_string_lossy().into_owned();
        let g = gen_args(&["--cases", "3", "--vehicles", "40", "--header", "--out", out_dir.as_str()]).unwrap();
        casegen::run(&g).unwrap();

        for index in 0..3 {
            let input = ix_io::case_path(&cases, index);
            let output = dir.path().join(format!("schedule{index}.txt"));
            let export = dir.path().join(format!("schedule{index}.csv"));
            let (input_arg, output_arg, export_arg) = (
                input.to_string_lossy().into_owned(),
                output.to_string_lossy().into_owned(),
                export.to_string_lossy().into_owned(),
            );
            let a = sched(&[
                input_arg.as_str(),
                output_arg.as_str(),
                "--header",
                "count",
                "--csv-export",
                export_arg.as_str(),
            ])
            .unwrap();
            sched::run(&a).unwrap();

            let vehicles = load_vehicles(&input, &LoadOptions::text(HeaderMode::Count), &ix_core::RingPlanner).unwrap();
            let visits: usize = vehicles.iter().map(|v| v.path().len()).sum();
            let file = std::fs::File::open(&output).unwrap();
            let orders = read_schedule(std::io::BufReader::new(file)).unwrap();
            assert_eq!(orders.iter().map(Vec::len).sum::<usize>(), visits);
            assert!(export.exists());
        }
    }
}
