mod global_configuration;
mod text_helpers;

use std::io;
use std::process::ExitCode;

use suite_reporter::{Outcome, TestReporter};

use crate::global_configuration::global_config;

pub const DEMO_TEST_COUNT: usize = 7;

fn run_suite<W: io::Write>(reporter: &mut TestReporter<W>) -> io::Result<()> {
    reporter.start()?;

    reporter.record_result(
        "parse_int",
        Outcome::from_result(Some(42), text_helpers::parse_int(" 42 ")),
    )?;
    reporter.record_result("add", Outcome::equal(5, text_helpers::add(2, 3)))?;
    reporter.record_result(
        "first_word",
        Outcome::values(Some("hello"), text_helpers::first_word("hello world")),
    )?;
    reporter.record_result(
        "first_word_blank",
        Outcome::values(None, text_helpers::first_word("   ")),
    )?;
    reporter.record_result(
        "word_count",
        Outcome::equal(3, text_helpers::word_count("one two  three")),
    )?;
    // the last two checks fail: a wrong expectation, then input parse_int rejects
    reporter.record_result(
        "word_count_hyphenated",
        Outcome::equal(3, text_helpers::word_count("state-of-the-art parser")),
    )?;
    reporter.record_result(
        "parse_int_spelled",
        Outcome::from_result(Some(42), text_helpers::parse_int("forty-two")),
    )?;

    reporter.finish()
}

fn main() -> ExitCode {
    env_logger::init();

    let mut reporter = global_config().suite.reporter();

    if let Err(error) = run_suite(&mut reporter) {
        eprintln!("Failed to write the test report");
        eprintln!("Cause: {}", error);
        return ExitCode::FAILURE;
    }

    if reporter.summary().is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
