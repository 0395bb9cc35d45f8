use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use greenhouse_core::export::{render_board, render_json, render_text, write_preset};
use greenhouse_core::{
    all_plants, all_possible_levels, describe, generate, generate_random, random_seed,
    PatternCategory, PresetSettings,
};

#[derive(Debug, Parser)]
#[command(name = "greenhouse", version, about = "Roguelike preset generator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a preset and print it.
    Generate(GenerateArgs),
    /// List every level that can be drawn.
    Levels,
    /// List pattern names grouped by category.
    Patterns {
        #[arg(long, default_value_t = false)]
        describe: bool,
    },
    /// Print the description of one pattern.
    Describe { name: String },
    /// List the seed slot catalog.
    Plants,
}

#[derive(Debug, clap::Args)]
struct GenerateArgs {
    /// JSON settings file. Flags given on the command line take precedence.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    levels: Option<usize>,

    #[arg(long, default_value_t = false)]
    endless: bool,

    #[arg(long)]
    slots: Option<usize>,

    /// Draw one pattern for the whole run instead of one per level.
    #[arg(long, default_value_t = false)]
    shared_pattern: bool,

    /// Pick the level count, endless flag, slot count and pattern mode at random.
    #[arg(long, default_value_t = false, conflicts_with_all = ["levels", "endless", "slots", "shared_pattern"])]
    random: bool,

    #[arg(long, default_value_t = false, conflicts_with = "board")]
    json: bool,

    /// Print the twelve-level, ten-slot grid instead of the flat listing.
    #[arg(long, default_value_t = false)]
    board: bool,

    /// Also write the preset under <OUTPUT>/Preset_<seed>/.
    #[arg(long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default_level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();
}

fn load_settings(args: &GenerateArgs) -> greenhouse_core::Result<PresetSettings> {
    let mut settings = match &args.settings {
        Some(path) => PresetSettings::from_json(&fs::read_to_string(path)?)?,
        None => PresetSettings {
            seed: random_seed(),
            ..PresetSettings::default()
        },
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(levels) = args.levels {
        settings.level_count = levels;
    }
    if args.endless {
        settings.endless = true;
    }
    if let Some(slots) = args.slots {
        settings.slot_count = slots;
    }
    if args.shared_pattern {
        settings.pattern_per_level = false;
    }
    if args.debug {
        settings.debug = true;
    }

    Ok(settings)
}

fn run_generate(args: &GenerateArgs) -> greenhouse_core::Result<()> {
    let requested = load_settings(args)?;
    tracing::info!(seed = requested.seed, "generating preset");

    let (settings, preset) = if args.random {
        let (drawn, preset) = generate_random(requested.seed)?;
        let settings = PresetSettings {
            debug: requested.debug,
            ..drawn
        };
        (settings, preset)
    } else {
        let preset = generate(&requested)?;
        (requested, preset)
    };

    if args.json {
        println!("{}", render_json(&preset)?);
    } else {
        println!("Seed: {}", settings.seed);
        println!();
        if args.board {
            print!("{}", render_board(&preset));
        } else {
            print!("{}", render_text(&preset));
        }
    }

    if let Some(output) = &args.output {
        let dir = write_preset(output, &settings, &preset)?;
        eprintln!("Preset written to {}", dir.display());
    }

    Ok(())
}

fn main() {
    let args = Args::parse();

    let debug = matches!(&args.command, Command::Generate(g) if g.debug);
    init_tracing(debug);

    match args.command {
        Command::Generate(generate_args) => {
            if let Err(err) = run_generate(&generate_args) {
                eprintln!("Error: {err}");
                std::process::exit(1);
            }
        }
        Command::Levels => {
            for level in all_possible_levels() {
                println!("{level}");
            }
        }
        Command::Patterns { describe: with_descriptions } => {
            for category in PatternCategory::ALL {
                println!("{}:", category.label());
                for name in category.names() {
                    if with_descriptions {
                        println!("  {name}: {}", describe(name));
                    } else {
                        println!("  {name}");
                    }
                }
            }
        }
        Command::Describe { name } => println!("{}", describe(&name)),
        Command::Plants => {
            for plant in all_plants() {
                println!("{plant}");
            }
        }
    }
}
