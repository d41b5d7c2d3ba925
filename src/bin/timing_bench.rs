use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;
use timing_bench::harness::{run_sweep, SweepConfig, DEFAULT_ITERATIONS};

#[derive(Parser, Debug)]
#[command(name = "timing-bench")]
#[command(about = "Run two program variants on one input and compare their TIMING_ lines")]
struct Args {
    /// Input handed to both executables (the configured suffix is stripped first).
    #[arg(value_name = "INPUT")]
    input: String,

    /// Executable under test.
    #[arg(long, value_name = "PATH", default_value = "../mcvm")]
    new_exe: PathBuf,

    /// Reference executable the new one is compared against.
    #[arg(long, value_name = "PATH", default_value = "../mcvmstock")]
    baseline_exe: PathBuf,

    /// Runs per variant.
    #[arg(long, short = 'n', default_value_t = DEFAULT_ITERATIONS as u64,
          value_parser = clap::value_parser!(u64).range(1..))]
    iterations: u64,

    /// Suffix removed from INPUT; pass an empty string to keep INPUT verbatim.
    #[arg(long, default_value = ".m")]
    strip_suffix: String,

    /// Also print the per-iteration deltas under each measurement.
    #[arg(long, default_value_t = false)]
    per_iteration: bool,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let cfg = SweepConfig {
        new_exe: args.new_exe,
        baseline_exe: args.baseline_exe,
        input: args.input,
        strip_suffix: Some(args.strip_suffix),
        iterations: args.iterations as usize,
    };

    let report = match run_sweep(&cfg).and_then(|results| results.report()) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    print!("{}", report.with_iterations(args.per_iteration));
    ExitCode::SUCCESS
}
