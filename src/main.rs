use ljsim::{run_scenario, Scenario, ScenarioConfig};
use ljsim::{bench_forces, bench_step};

use anyhow::Result;
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario YAML file name, looked up under scenarios/
    #[arg(short, long, default_value = "two_body.yaml")]
    scenario: String,

    /// Run the built-in micro-benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.scenario)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;
    run_scenario(&mut scenario)?;

    Ok(())
}
