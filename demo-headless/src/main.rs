use clap::Parser;
use lidar_fog_core::{
    Curve, CurveEvaluator, CurveKind, FogSimulation, Param, ParameterSet, XsiMode,
};
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Headless LIDAR-in-fog return power model
#[derive(Parser, Debug)]
#[command(name = "lidar-fog-demo")]
#[command(about = "Received LIDAR power from a hard target and fog backscatter", long_about = None)]
struct Args {
    /// Sweep range in m
    #[arg(short, long)]
    range: Option<f64>,

    /// Number of range samples (also the quadrature resolution)
    #[arg(short, long)]
    n: Option<usize>,

    /// Attenuation coefficient in 1/m
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Backscatter coefficient as a multiple of 1/MOR (e.g. 0.046)
    #[arg(short, long)]
    beta_mor: Option<f64>,

    /// Pulse peak power in W
    #[arg(long)]
    p0: Option<f64>,

    /// Half-power pulse width in ns
    #[arg(short, long)]
    tau_ns: Option<f64>,

    /// Receiver aperture area in m²
    #[arg(long)]
    aperture: Option<f64>,

    /// Receiver optics loss in %
    #[arg(long)]
    loss_pct: Option<f64>,

    /// Start of the overlap transition in m
    #[arg(long)]
    r1: Option<f64>,

    /// End of the overlap transition in m
    #[arg(long)]
    r2: Option<f64>,

    /// Hard-target range in m
    #[arg(long)]
    r0: Option<f64>,

    /// Hard-target reflectivity
    #[arg(short, long)]
    gamma: Option<f64>,

    /// Use the geometric overlap formula instead of the linear ramp
    #[arg(long)]
    geometric: bool,

    /// Worker threads (0 = one per CPU core)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Print every sample instead of a summary
    #[arg(long)]
    table: bool,

    /// Add the combined (soft + hard) response to the table
    #[arg(long)]
    total: bool,

    /// Verbosity: -v for info, -vv for debug, -vvv for trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    /// Requested overrides as (parameter, physical value) pairs
    fn overrides(&self, params: &ParameterSet) -> Vec<(Param, f64)> {
        let mut out = Vec::new();
        let mut push = |param: Param, value: Option<f64>| {
            if let Some(v) = value {
                out.push((param, v));
            }
        };

        push(Param::RRange, self.range);
        push(Param::N, self.n.map(|n| n as f64));
        push(Param::Alpha, self.alpha);
        push(Param::P0, self.p0);
        push(Param::TauH, self.tau_ns.map(|ns| ns * 1e-9));
        push(Param::Ar, self.aperture);
        push(Param::Lr, self.loss_pct.map(|pct| pct / 100.0));
        push(Param::R1, self.r1);
        push(Param::R2, self.r2);
        push(Param::R0, self.r0);
        push(Param::Gamma, self.gamma);
        // β is given relative to MOR, so it has to follow any α override
        if let Some(beta_mor) = self.beta_mor {
            let alpha = self.alpha.unwrap_or(params.alpha);
            let mor = lidar_fog_core::core_types::meteorological_optical_range(alpha);
            push(Param::Beta, Some(beta_mor / mor));
        }
        out
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn print_parameters(p: &ParameterSet) {
    println!("Overlap: {}", p.xsi_mode);
    println!("r = {} m, n = {}", p.r_range, p.n);
    println!("α = {}", p.alpha);
    println!("meteorological optical range (MOR) = {:.2} m", p.mor());
    println!("β = {:.3} / MOR", p.beta * p.mor());
    println!("P₀ = {} W", p.p_0);
    println!("τₕ = {:.0} ns", p.tau_h * 1e9);
    println!("total pulse energy (Eₚ) = {:.1} μJ", p.e_p() * 1e6);
    println!("Aᵣ = {} m²", p.a_r);
    println!("Lᵣ = {:.0} %", p.l_r * 100.0);
    println!("system constant (Cₐ) = {:.0}", p.c_a());
    println!("R₁ = {} m, R₂ = {} m", p.r_1, p.r_2);
    println!("R₀ = {} m", p.r_0);
    println!("Γ = {}", p.gamma);
    println!(
        "differential reflectivity of the hard target (β₀) = {:.5e}",
        p.beta_0()
    );
}

fn print_curve_summary(label: &str, curve: &Curve) {
    match (curve.peak(), curve.support()) {
        (Some((x, y)), Some((first, last))) => println!(
            "{label:<5} | peak {y:.4e} W at {x:8.3} m | non-zero over [{first:.3}, {last:.3}] m"
        ),
        _ => println!("{label:<5} | identically zero"),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut params = ParameterSet::default();
    if args.geometric {
        params.xsi_mode = XsiMode::Geometric;
    }
    for (param, requested) in args.overrides(&params) {
        let stored = params.set(param, requested);
        if (stored - requested).abs() > f64::EPSILON * requested.abs().max(1.0) {
            let bounds = params.bounds(param);
            warn!(
                "{} = {} is outside [{}, {}], using {}",
                param, requested, bounds.min, bounds.max, stored
            );
        }
    }

    if let Err(e) = params.validate() {
        error!("Invalid parameters: {e}");
        return ExitCode::FAILURE;
    }

    let evaluator = match CurveEvaluator::with_threads(args.threads) {
        Ok(evaluator) => evaluator,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let sim = FogSimulation::with_evaluator(params, evaluator);
    let p = sim.params();
    let curves = sim.curves();

    if args.table {
        let total = args.total.then(|| sim.evaluate(CurveKind::Fog));
        match &total {
            Some(_) => println!("x_m,hard_w,soft_w,total_w"),
            None => println!("x_m,hard_w,soft_w"),
        }
        for i in 0..curves.hard.len() {
            let (x, hard, soft) = (curves.hard.x[i], curves.hard.y[i], curves.soft.y[i]);
            match &total {
                Some(t) => println!("{x:.6},{hard:.6e},{soft:.6e},{:.6e}", t.y[i]),
                None => println!("{x:.6},{hard:.6e},{soft:.6e}"),
            }
        }
        return ExitCode::SUCCESS;
    }

    println!("=== LIDAR Fog Simulation ===\n");
    print_parameters(p);
    println!(
        "\nSweep: {} samples over [0, {}] m, plotted shifted by -{:.3} m ({} worker threads)\n",
        p.n,
        p.r_range,
        p.pulse_half_length(),
        sim.evaluator().num_threads()
    );
    print_curve_summary("hard", &curves.hard);
    print_curve_summary("soft", &curves.soft);
    if args.total {
        print_curve_summary("total", &sim.evaluate(CurveKind::Fog));
    }

    ExitCode::SUCCESS
}
