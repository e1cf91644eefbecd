use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use hashslide::constants::FRAME_TIME;
use hashslide::{Navigator, SliderConfig, codec, layout_frame};

#[derive(Parser, Debug)]
#[command(name = "hashslide", version, about = "Inspect and preview URL-fragment carousels")]
struct Cli {
    /// Log debug output (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a configuration JSON into a fragment.
    Encode {
        /// Input JSON file; stdin when omitted.
        #[arg(long = "in")]
        in_path: Option<PathBuf>,
    },
    /// Decode a fragment and print its configuration.
    Decode { fragment: String },
    /// Print the fragment of the default configuration.
    Default,
    /// Print the render descriptors of one frame.
    Layout {
        fragment: String,
        /// Current slide index.
        #[arg(long, default_value_t = 0)]
        index: usize,
        /// Treat the frame as mid-transition.
        #[arg(long)]
        animating: bool,
    },
    /// Run the autoplay timer against a fragment and print index changes.
    Play {
        fragment: String,
        #[arg(long, default_value_t = 10.0)]
        seconds: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match cli.cmd {
        Command::Encode { in_path } => {
            let json = match in_path {
                Some(path) => fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
                    buf
                }
            };
            let config: SliderConfig =
                serde_json::from_str(&json).context("Input is not a slider configuration")?;
            println!("#{}", codec::try_encode(&config)?);
        }
        Command::Decode { fragment } => {
            let config = codec::decode(&fragment);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Command::Default => {
            println!("#{}", codec::encode(&SliderConfig::default()));
        }
        Command::Layout {
            fragment,
            index,
            animating,
        } => {
            let config = codec::decode(&fragment);
            let index = if config.images.is_empty() {
                0
            } else {
                index % config.images.len()
            };
            let frame = layout_frame(&config, index, animating);
            if frame.is_empty() {
                info!("No images added yet.");
            }
            println!("{}", serde_json::to_string_pretty(&frame)?);
        }
        Command::Play { fragment, seconds } => play(&codec::decode(&fragment), seconds)?,
    }

    Ok(())
}

// Fixed-step loop, one tick per simulated frame.
fn play(config: &SliderConfig, seconds: f64) -> Result<()> {
    let total = Duration::try_from_secs_f64(seconds).context("Invalid duration")?;
    let mut navigator = Navigator::new(config);
    if !navigator.autoplay_armed() {
        info!("Autoplay is off for this configuration, nothing will move");
    }

    let mut clock = Duration::ZERO;
    println!("{:>8.3}s  slide {}", 0.0, navigator.current_index());
    while clock < total {
        clock += FRAME_TIME;
        if navigator.tick(FRAME_TIME) {
            println!("{:>8.3}s  slide {}", clock.as_secs_f64(), navigator.current_index());
        }
    }
    navigator.teardown();

    Ok(())
}
