use clap::Parser;
use std::path::PathBuf;
use std::process::exit;
use std::sync::OnceLock;
use suite_reporter::ReporterConfig;

use crate::DEMO_TEST_COUNT;

pub struct DemoConfig {
    pub suite: ReporterConfig,
}

pub fn global_config() -> &'static DemoConfig {
    static CONFIG: OnceLock<DemoConfig> = OnceLock::new();
    CONFIG.get_or_init(|| {
        let args = Args::parse();

        let mut suite = match &args.config {
            Some(path) => ReporterConfig::load(path).unwrap_or_else(|error| {
                eprintln!("{}", error);
                exit(2);
            }),
            None => ReporterConfig::new("string helpers", DEMO_TEST_COUNT),
        };

        if let Some(expected) = args.expected {
            suite.expected_count = expected;
        }
        suite.debug |= args.debug;
        suite.color |= args.color;

        log::debug!("demo suite configuration: {:?}", suite);

        DemoConfig { suite }
    })
}

#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Path to a TOML file with the suite settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the declared number of tests
    #[arg(long)]
    expected: Option<usize>,

    /// Print actual and expected values of failed tests.
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Highlight verdicts with terminal colors.
    #[arg(long, default_value_t = false)]
    color: bool,
}
