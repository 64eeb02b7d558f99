use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use advisor_core::{
    build_prompt, reynolds_text, AdvisorSession, Assessment, Config, Likelihood, SimulationSetup,
    TurbulenceModel,
};
use advisor_llm::{AssessmentProvider, GeminiClient};

#[derive(Parser)]
#[command(name = "advisor-cli")]
#[command(about = "CFD convergence advisor powered by Gemini")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the setup for a convergence assessment
    Assess(SetupArgs),
    /// Print the assembled prompt without contacting the service
    Prompt(SetupArgs),
    /// Compute the Reynolds number for the given inputs
    Reynolds {
        /// Fluid density in kg/m^3
        #[arg(long)]
        density: String,
        /// Characteristic velocity in m/s
        #[arg(long)]
        velocity: String,
        /// Characteristic length in m
        #[arg(long)]
        length: String,
        /// Dynamic viscosity in Pa.s
        #[arg(long)]
        viscosity: String,
    },
}

#[derive(Args)]
struct SetupArgs {
    /// Geometry description, e.g. "Flow over a cylinder"
    #[arg(long)]
    geometry: String,

    /// Characteristic velocity in m/s
    #[arg(long)]
    velocity: String,

    /// Characteristic length in m
    #[arg(long)]
    length: String,

    /// Fluid density in kg/m^3 (water by default)
    #[arg(long, default_value = "998.2")]
    density: String,

    /// Dynamic viscosity in Pa.s, e.g. 0.001002 for water
    #[arg(long, default_value = "")]
    viscosity: String,

    /// Turbulence model: k-epsilon, k-omega-sst, spalart-allmaras, les, des,
    /// dns, or other
    #[arg(long, default_value = "k-omega-sst")]
    turbulence_model: String,

    /// Custom model name, required with --turbulence-model other
    #[arg(long, default_value = "")]
    custom_model: String,

    /// Mesh type, cell count, skewness, ...
    #[arg(long, default_value = "")]
    mesh: String,

    /// Target y+ range, e.g. "<1" or "30-300"
    #[arg(long = "y-plus", default_value = "")]
    y_plus: String,

    /// Numerical schemes and Courant target, e.g. "SIMPLE, Upwind, Co < 1"
    #[arg(long, default_value = "")]
    numerics: String,

    /// Domain extents, e.g. "5D upstream, 10D downstream"
    #[arg(long, default_value = "")]
    domain_extents: String,
}

impl SetupArgs {
    fn into_setup(self) -> anyhow::Result<SimulationSetup> {
        let turbulence_model: TurbulenceModel = self.turbulence_model.parse()?;
        Ok(SimulationSetup {
            geometry: self.geometry,
            velocity: self.velocity,
            characteristic_length: self.length,
            density: self.density,
            viscosity: self.viscosity,
            turbulence_model,
            custom_turbulence_model: self.custom_model,
            mesh_details: self.mesh,
            y_plus: self.y_plus,
            numerics: self.numerics,
            domain_extents: self.domain_extents,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    match cli.command {
        Commands::Reynolds {
            density,
            velocity,
            length,
            viscosity,
        } => {
            println!("{}", reynolds_text(&density, &velocity, &length, &viscosity));
        }
        Commands::Prompt(args) => {
            let setup = args.into_setup()?;
            setup.validate()?;
            println!("{}", assemble_prompt(&setup));
        }
        Commands::Assess(args) => {
            run_assess(args.into_setup()?).await?;
        }
    }

    Ok(())
}

fn assemble_prompt(setup: &SimulationSetup) -> String {
    let reynolds = reynolds_text(
        &setup.density,
        &setup.velocity,
        &setup.characteristic_length,
        &setup.viscosity,
    );
    build_prompt(setup, &reynolds)
}

async fn run_assess(setup: SimulationSetup) -> anyhow::Result<()> {
    // a missing API key is fatal before anything else happens
    let config = Config::new();
    let client = GeminiClient::from_config(&config)?;

    let mut session = AdvisorSession::new(setup);
    session.begin_submission()?;

    let prompt = assemble_prompt(&session.setup);
    log::debug!("assembled prompt:\n{}", prompt);

    println!("{}", "Analyzing convergence...".dimmed());
    match client.assess(&prompt).await {
        Ok(assessment) => {
            render_assessment(&assessment);
            session.resolve(Ok(assessment));
            Ok(())
        }
        Err(err) => {
            let message = err.to_string();
            session.resolve(Err(message.clone()));
            anyhow::bail!(message)
        }
    }
}

fn render_assessment(assessment: &Assessment) {
    let level = assessment.overall_likelihood.level;
    let label = match level {
        Likelihood::High => level.to_string().green().bold(),
        Likelihood::Medium => level.to_string().yellow().bold(),
        Likelihood::Low => level.to_string().red().bold(),
    };

    println!();
    println!("{} {}", "Convergence likelihood:".bold(), label);
    println!("{}", assessment.overall_likelihood.reason);

    print_section("Potential issues", &assessment.potential_issues, "-");
    print_section("Recommendations", &assessment.recommendations, "-");
    print_section("Quick checklist", &assessment.quick_checklist, "[ ]");
}

fn print_section(title: &str, items: &[String], bullet: &str) {
    println!();
    println!("{}", title.bold());
    for item in items {
        println!("  {bullet} {item}");
    }
}
