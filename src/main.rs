use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;
use vecdist::{
    inputs::{gaussian_pair, ramp_pair},
    numerics::{Kernel, l2_scalar_precise},
    statistics::KernelReport,
    trials::{DEFAULT_OFFSET, run_trials},
};

/// Times competing Euclidean distance kernels on two synthetic vectors
#[derive(Parser, Debug)]
#[command(name = "vecdist")]
#[command(about = "Compare scalar and SIMD Euclidean distance kernels", long_about = None)]
struct Args {
    /// Number of elements per vector
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    vector_size: u32,

    /// Number of timed repetitions per kernel
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    rounds: u32,

    /// Kernels to run, in order (comma-separated list, e.g., "scalar,simd8")
    #[arg(short, long, value_delimiter = ',', default_values_t = Kernel::ALL)]
    kernels: Vec<Kernel>,

    /// Constant added to every element of the first vector before each trial
    #[arg(long, default_value_t = DEFAULT_OFFSET, allow_negative_numbers = true)]
    offset: f32,

    /// Use seeded standard normal vectors instead of the deterministic ramp
    #[arg(long)]
    seed: Option<u64>,

    /// Also print the per-kernel reports as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vecdist=warn")),
        )
        .init();

    let args = Args::parse();
    let vector_size = args.vector_size as usize;
    let rounds = args.rounds as usize;

    let (v1, v2) = match args.seed {
        Some(seed) => gaussian_pair(vector_size, seed),
        None => ramp_pair(vector_size),
    };
    info!(
        vector_size,
        rounds,
        seed = ?args.seed,
        kernels = ?args.kernels,
        "inputs ready"
    );

    // precise distance of the first trial's inputs, to check every kernel against
    let perturbed: Vec<f32> = v1.iter().map(|x| x + args.offset).collect();
    let reference = l2_scalar_precise(&perturbed, &v2);

    let mut reports = Vec::with_capacity(args.kernels.len());
    for kernel in args.kernels {
        debug!(%kernel, "starting trials");
        let record = run_trials(rounds, kernel.as_fn(), &v1, &v2, args.offset);
        println!(
            "{:<14}: elapsed time (sec): {:.6}",
            kernel.label(),
            record.elapsed_secs()
        );

        let report = KernelReport::new(kernel, vector_size, &record, Some(reference));
        if !report.within_tolerance() {
            warn!(
                %kernel,
                deviation = ?report.relative_deviation,
                tolerance = kernel.precision().tolerance(),
                "kernel strays from the precise reference"
            );
        }
        reports.push(report);
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).expect("reports serialize to JSON")
        );
    }
}
