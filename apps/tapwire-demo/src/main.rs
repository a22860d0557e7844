use anyhow::{bail, Result};
use clap::Parser;
use tapwire_demo::scenarios;

#[derive(Parser)]
#[command(name = "tapwire-demo", about = "Replay scripted touch sequences through the tap detector")]
struct Cli {
    /// Scenarios to run; all of them when omitted
    names: Vec<String>,

    /// List the available scenarios and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    if cli.list {
        for scenario in scenarios::all() {
            println!("{:<16} {}", scenario.name, scenario.about);
        }
        return Ok(());
    }

    let selected = if cli.names.is_empty() {
        scenarios::all()
    } else {
        let mut selected = Vec::with_capacity(cli.names.len());
        for name in &cli.names {
            match scenarios::find(name) {
                Some(scenario) => selected.push(scenario),
                None => bail!("unknown scenario {name:?}; try --list"),
            }
        }
        selected
    };

    for scenario in selected {
        println!("=== {} ===", scenario.name);
        for line in scenario.run() {
            println!("  {line}");
        }
        println!();
    }
    Ok(())
}
