use crate::diff;
use crate::outcome::Outcome;
use crate::style;
use colored::Color;
use std::fmt::{Debug, Display};
use std::io::{self, stdout, Stdout, Write};

const SECTION_SEPARATOR: &str = "****************";
const TEST_SEPARATOR: &str = "--------";

/// Counts and prints the results of a fixed-size suite of manually invoked
/// tests.
///
/// The driver calls [`start`](Self::start) once, then
/// [`record_result`](Self::record_result) after each test, then
/// [`finish`](Self::finish). Results past the declared count only advance the
/// test index; they are otherwise dropped without output and show up as a
/// count mismatch in `finish`.
pub struct TestReporter<W: Write = Stdout> {
    suite_name: String,
    expected_count: usize,
    test_index: usize,
    passed_count: usize,
    failed_count: usize,
    debug: bool,
    color: bool,
    out: W,
}

/// Snapshot of a reporter's counters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Summary {
    pub expected: usize,
    pub recorded: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.recorded == self.expected
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.is_complete() && self.failed == 0
    }
}

struct Shown<'a, T>(Option<&'a T>);

impl<T: Debug> Display for Shown<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{:?}", value),
            None => write!(f, "none"),
        }
    }
}

impl TestReporter<Stdout> {
    pub fn new(suite_name: impl Into<String>, expected_count: usize) -> Self {
        Self::with_writer(suite_name, expected_count, stdout())
    }
}

impl<W: Write> TestReporter<W> {
    pub fn with_writer(suite_name: impl Into<String>, expected_count: usize, out: W) -> Self {
        Self {
            suite_name: suite_name.into(),
            expected_count,
            test_index: 0,
            passed_count: 0,
            failed_count: 0,
            debug: false,
            color: false,
            out,
        }
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Only affects the printed expectation when called before `start`.
    pub fn set_expected_count(&mut self, expected_count: usize) {
        self.expected_count = expected_count;
    }

    pub fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn suite_name(&self) -> &str {
        &self.suite_name
    }

    pub fn expected_count(&self) -> usize {
        self.expected_count
    }

    pub fn test_index(&self) -> usize {
        self.test_index
    }

    pub fn passed_count(&self) -> usize {
        self.passed_count
    }

    pub fn failed_count(&self) -> usize {
        self.failed_count
    }

    pub fn summary(&self) -> Summary {
        Summary {
            expected: self.expected_count,
            recorded: self.test_index,
            passed: self.passed_count,
            failed: self.failed_count,
        }
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn paint(&self, word: &str, color: Color) -> String {
        if self.color {
            style::paint(word, color, true)
        } else {
            word.to_owned()
        }
    }

    pub fn start(&mut self) -> io::Result<()> {
        log::debug!(
            "starting suite {:?} with {} tests",
            self.suite_name,
            self.expected_count
        );
        writeln!(
            self.out,
            "\n{SECTION_SEPARATOR}  STARTING {}  {SECTION_SEPARATOR}",
            self.suite_name
        )?;
        writeln!(self.out, "NUMBER OF TESTS: {}\n", self.expected_count)
    }

    pub fn finish(&mut self) -> io::Result<()> {
        if self.test_index != self.expected_count {
            let warning = self.paint("WARNING", Color::Yellow);
            writeln!(
                self.out,
                "{}: Expected {} tests, found {}!",
                warning, self.expected_count, self.test_index
            )?;
        } else {
            writeln!(
                self.out,
                "{} tests PASSED, {} tests FAILED out of {} tests!",
                self.passed_count, self.failed_count, self.expected_count
            )?;
        }
        writeln!(
            self.out,
            "{SECTION_SEPARATOR}  ENDING {}  {SECTION_SEPARATOR}\n",
            self.suite_name
        )?;
        self.out.flush()
    }

    pub fn record_result<T>(&mut self, test_name: &str, outcome: Outcome<T>) -> io::Result<()>
    where
        T: Debug + PartialEq,
    {
        self.test_index += 1;
        if self.test_index > self.expected_count {
            log::debug!(
                "dropping result of {:?}: test {} exceeds the {} declared for {:?}",
                test_name,
                self.test_index,
                self.expected_count,
                self.suite_name
            );
            return Ok(());
        }

        // counters move before any output so a failed write cannot desync them
        let passed = outcome.passed();
        if passed {
            self.passed_count += 1;
        } else {
            self.failed_count += 1;
        }

        if self.test_index > 1 {
            writeln!(self.out, "{TEST_SEPARATOR}\n")?;
        }
        writeln!(
            self.out,
            "Starting test {}... {} / {}",
            test_name, self.test_index, self.expected_count
        )?;

        match outcome {
            Outcome::Values { .. } if passed => {
                let verdict = self.paint("PASSED", Color::Green);
                writeln!(self.out, "Test {} {}!", test_name, verdict)?;
            }
            Outcome::Values { expected, actual } => {
                let verdict = self.paint("FAILED", Color::Red);
                writeln!(self.out, "Test {} {}!", test_name, verdict)?;
                if self.debug {
                    self.write_mismatch(expected.as_ref(), actual.as_ref())?;
                }
            }
            Outcome::Error(error) => {
                let verdict = self.paint("FAILED", Color::Red);
                writeln!(self.out, "Test {} {}: exception found!", test_name, verdict)?;
                if self.debug {
                    writeln!(self.out, "{}", error)?;
                }
            }
        }

        writeln!(self.out)
    }

    fn write_mismatch<T: Debug>(&mut self, expected: Option<&T>, actual: Option<&T>) -> io::Result<()> {
        writeln!(
            self.out,
            "Found {}, expected {}",
            Shown(actual),
            Shown(expected)
        )?;

        if let (Some(expected), Some(actual)) = (expected, actual) {
            let expected = format!("{:#?}", expected);
            let actual = format!("{:#?}", actual);
            if diff::is_multiline(&expected) || diff::is_multiline(&actual) {
                diff::write_diff(&mut self.out, &expected, &actual, self.color)?;
            }
        }

        Ok(())
    }
}
