use clap::Parser;
use latency_stats_core::cli::{self, ReportArgs};
use latency_stats_core::logging::init_logging;

#[derive(Parser, Debug)]
#[command(
    name = "latency-stats",
    version,
    about = "Percentiles and histograms for latency measurements in microseconds"
)]
struct Cli {
    #[command(flatten)]
    report: ReportArgs,
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    if let Err(e) = cli::run(cli.report) {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
