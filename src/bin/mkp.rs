use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use u_mkp::eval::EvalBackend;
use u_mkp::local::LsMode;
use u_mkp::problem::ProblemLoader;
use u_mkp::solver::{Method, Solver, SolverConfig, Verbosity};

/// Heuristic solver for the multidimensional knapsack problem.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Instance file (`n m`, profits, capacities, weight rows)
    instance: PathBuf,

    /// Solution file; defaults to the instance path with a `.sol` extension
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// LS-FLIP, LS-SWAP, VND, VNS, GD, GA or MULTI-GD-VNS
    #[arg(short, long, default_value = "VNS")]
    method: Method,

    /// Wall-clock limit in seconds
    #[arg(short, long, default_value_t = 60.0)]
    time: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Restarts of MULTI-GD-VNS
    #[arg(long)]
    starts: Option<usize>,

    /// Penalty coefficient of the gradient solver
    #[arg(long)]
    lambda: Option<f64>,

    #[arg(long)]
    learning_rate: Option<f64>,

    /// Candidates examined per local search scan
    #[arg(long)]
    k: Option<usize>,

    /// Stagnation limit of VND, VNS and the gradient solver
    #[arg(long)]
    max_no_improvement: Option<usize>,

    /// Largest VNS shake radius
    #[arg(long)]
    k_max: Option<usize>,

    /// first or best
    #[arg(long)]
    ls_mode: Option<LsMode>,

    #[arg(long)]
    population: Option<usize>,

    #[arg(long)]
    generations: Option<usize>,

    #[arg(long)]
    mutation_rate: Option<f64>,

    /// Request device evaluation (falls back to the CPU path)
    #[arg(long)]
    gpu: bool,

    /// none, info or debug; RUST_LOG takes precedence
    #[arg(short, long, default_value = "info")]
    verbosity: Verbosity,
}

impl Args {
    fn solver_config(&self) -> SolverConfig {
        let mut config = SolverConfig::new(self.method)
            .with_time_limit_secs(self.time)
            .with_seed(self.seed);
        if self.gpu {
            config = config.with_backend(EvalBackend::Gpu);
        }
        if let Some(n) = self.starts {
            config.starts = n;
        }
        if let Some(lambda) = self.lambda {
            config.gradient.lambda = lambda;
        }
        if let Some(lr) = self.learning_rate {
            config.gradient.learning_rate = lr;
        }

        let mut local = config.local;
        if let Some(k) = self.k {
            local.k = k;
        }
        if let Some(mode) = self.ls_mode {
            local.mode = mode;
        }
        config = config.with_local(local);

        if let Some(n) = self.max_no_improvement {
            config.vnd.max_no_improvement = n;
            config.vns.max_no_improvement = n;
            config.gradient.max_no_improvement = n;
        }
        if let Some(k) = self.k_max {
            config.vns.k_max = k;
        }
        if let Some(n) = self.population {
            config.ga.population_size = n;
        }
        if let Some(n) = self.generations {
            config.ga.max_generations = n;
        }
        if let Some(rate) = self.mutation_rate {
            config.ga.mutation_rate = rate;
        }
        config
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output(&self.instance))
    }
}

fn default_output(instance: &Path) -> PathBuf {
    instance.with_extension("sol")
}

fn enable_tracing(verbosity: Verbosity) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(verbosity.filter_directive())),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.solver_config();
    config.validate()?;

    let problem = ProblemLoader.from_path(&args.instance)?;
    tracing::info!(
        "Loaded {} with {} items and {} constraints",
        args.instance.display(),
        problem.n(),
        problem.m()
    );

    let report = Solver::new(config).solve(&problem);
    let sol = &report.solution;
    if !sol.feasible {
        tracing::warn!("no feasible solution found");
    }

    let out = args.output_path();
    sol.save(&out)?;
    tracing::info!(
        "{}: value {} with {} items in {:.3}s, written to {}",
        report.method,
        sol.value,
        sol.count_selected(),
        report.elapsed.as_secs_f64(),
        out.display()
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    enable_tracing(args.verbosity);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
