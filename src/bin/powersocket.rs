use std::error::Error;
use std::io::Write;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::info;
use powersocket_client::{
    ApiResponse, EnergyResponse, Panel, RelayState, SocketClient, SocketView, StatusResponse,
    DEFAULT_BASE_URL,
};
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Parser)]
#[command(author, version, about = "Control a smart power socket", long_about = None)]
struct Cli {
    /// Base URL of the socket firmware.
    #[arg(short = 'u', long, env = "POWERSOCKET_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// API key, when the firmware has authentication enabled.
    #[arg(short = 'k', long, env = "POWERSOCKET_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(short = 't', long, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Turn the relay on.
    On,
    /// Turn the relay off.
    Off,
    /// Toggle the relay.
    Toggle,
    /// Show the relay state.
    Status,
    /// Show the current power reading.
    Power,
    /// Show the latest energy record.
    Energy,
    /// Show the energy record for a period (today, yesterday, week, month).
    Stats { period: String },
    /// Check that the firmware is alive.
    Health,
    /// Interactive two-button panel.
    Panel,
}

struct TerminalView;

impl SocketView for TerminalView {
    fn show_voltage(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_relay_state(&mut self, state: RelayState) {
        let light = if state.is_on() { "[green]" } else { "[red]" };
        println!("{light} relay {state}");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let mut builder = SocketClient::builder()
        .base_url(&cli.url)
        .timeout(Duration::from_secs(cli.timeout));
    if let Some(key) = cli.api_key {
        builder = builder.api_key(key);
    }
    let client = builder.build()?;

    match cli.command.unwrap_or(Commands::Panel) {
        Commands::On => print_status(client.relay().turn_on().await?),
        Commands::Off => print_status(client.relay().turn_off().await?),
        Commands::Toggle => print_status(client.relay().toggle().await?),
        Commands::Status => print_status(client.relay().status().await?),
        Commands::Power => {
            let response = client.meter().power().await?;
            match &response.data {
                Some(reading) => println!("{reading}"),
                None => print_failure(&response),
            }
        }
        Commands::Energy => print_energy(client.meter().energy().await?),
        Commands::Stats { period } => print_energy(client.meter().stats(&period).await?),
        Commands::Health => {
            let health = client.health().await?;
            println!("{} at {}", health.status, health.timestamp);
        }
        Commands::Panel => run_panel(client).await?,
    }

    Ok(())
}

fn print_status(response: StatusResponse) {
    println!("{response}");
}

fn print_energy(response: EnergyResponse) {
    match &response.data {
        Some(reading) if reading.energy_total.is_some() => {
            let period = response.period.as_deref().unwrap_or("period");
            print!("{period}: {} kWh", reading.energy_total.unwrap_or_default());
            if let (Some(peak), Some(offpeak)) = (reading.energy_peak, reading.energy_offpeak) {
                print!(" (peak {peak}, off-peak {offpeak})");
            }
            if let Some(cost) = reading.cost_total {
                print!(", cost {cost}");
            }
            if let Some(avg) = reading.avg_power {
                print!(", avg {avg} W");
            }
            println!();
        }
        Some(reading) => {
            let when = reading
                .recorded_at()
                .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
                .unwrap_or_else(|| "never".to_string());
            print!("{} kWh recorded {when}", reading.energy);
            match reading.cost {
                Some(cost) => println!(", cost {cost}"),
                None => println!(),
            }
        }
        None => print_failure(&response),
    }
}

fn print_failure(response: &impl ApiResponse) {
    match response.message() {
        Some(msg) => println!("{}: {msg}", response.status()),
        None => println!("{}: no data", response.status()),
    }
}

async fn run_panel(client: SocketClient) -> Result<(), Box<dyn Error>> {
    info!("Connected panel to {}", client.base_url());
    println!("p = power, s = stats, q = quit");

    let mut panel = Panel::new(client, TerminalView);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match line.trim() {
                    "p" => { panel.press_power(); }
                    "s" => { panel.press_stats(); }
                    "q" => break,
                    "" => {}
                    other => println!("unknown button '{other}'"),
                }
            }
            Some(_) = panel.next_event() => {}
        }
    }

    Ok(())
}
