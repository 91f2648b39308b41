mod error;

use clap::{Parser, Subcommand};
use pf_core::{Tolerances, ensure_finite, nearly_equal};
use pf_network::{Device, FlowDevice, Stream, StreamTable};

use crate::error::CliResult;

#[derive(Parser)]
#[command(name = "pf-cli")]
#[command(about = "ProcFlow CLI - mix and split material streams", long_about = None)]
struct Cli {
    /// Print the streams as JSON instead of diagnostic lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mix input streams into a single output
    Mix {
        /// Mass flow of each input stream (kg/s), in order
        #[arg(long = "flow", required = true, allow_negative_numbers = true)]
        flows: Vec<f64>,
        /// Maximum number of inputs (defaults to the number of flows)
        #[arg(long)]
        capacity: Option<usize>,
    },
    /// Split one stream through a reactor
    React {
        /// Mass flow of the input stream (kg/s)
        #[arg(long, allow_negative_numbers = true)]
        flow: f64,
        /// Use two outputs instead of one
        #[arg(long)]
        double: bool,
    },
    /// Mix s1 = 10 and s2 = 5 into s3
    Demo,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let streams = match cli.command {
        Commands::Mix { flows, capacity } => cmd_mix(&flows, capacity)?,
        Commands::React { flow, double } => cmd_react(flow, double)?,
        Commands::Demo => cmd_mix(&[10.0, 5.0], None)?,
    };

    if cli.json {
        println!("{}", streams_json(&streams)?);
    } else {
        for (_, stream) in streams.iter() {
            stream.print();
        }
    }
    Ok(())
}

fn streams_json(streams: &StreamTable) -> CliResult<String> {
    let list: Vec<&Stream> = streams.iter().map(|(_, s)| s).collect();
    Ok(serde_json::to_string_pretty(&list)?)
}

fn cmd_mix(flows: &[f64], capacity: Option<usize>) -> CliResult<StreamTable> {
    let mut streams = StreamTable::new();
    let mut mixer = Device::mixer(capacity.unwrap_or(flows.len()));

    for &flow in flows {
        let id = streams.add_next();
        streams.set_mass_flow(id, ensure_finite(flow, "input mass flow")?)?;
        mixer.add_input(id)?;
    }
    let out = streams.add_next();
    mixer.add_output(out)?;

    run(&mixer, &mut streams)?;
    Ok(streams)
}

fn cmd_react(flow: f64, double: bool) -> CliResult<StreamTable> {
    let mut streams = StreamTable::new();
    let mut reactor = Device::reactor(double);

    let feed = streams.add_next();
    streams.set_mass_flow(feed, ensure_finite(flow, "input mass flow")?)?;
    reactor.add_input(feed)?;
    for _ in 0..reactor.output_capacity() {
        let out = streams.add_next();
        reactor.add_output(out)?;
    }

    run(&reactor, &mut streams)?;
    Ok(streams)
}

fn run(device: &Device, streams: &mut StreamTable) -> CliResult<()> {
    device.update_outputs(streams)?;

    let balance = device.mass_balance(streams)?;
    if nearly_equal(balance, 0.0, Tolerances::default()) {
        tracing::info!(device = device.label(), "outputs updated");
    } else {
        tracing::warn!(device = device.label(), balance, "mass balance not closed");
    }
    Ok(())
}
