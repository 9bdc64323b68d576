use std::env::args;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::exit;

use config_traits::{StdConfig, StdConfigLoad};
use gumdrop::Options;
use log::{error, info, LevelFilter};
use razer_matrix::error::Error;
use razer_matrix::{
    Colour, ColourFrame, GridPosition, MatrixLayout, MatrixSink, GREEN, GRID_COLS, GRID_ROWS,
};
use razer_platform::matrix_device::MatrixDevice;

use crate::cli_opts::*;
use crate::config::Config;
use crate::labels::LabelWatcher;

mod cli_opts;
mod config;
mod labels;

fn main() {
    let mut logger = env_logger::Builder::new();
    logger
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    let args: Vec<String> = args().skip(1).collect();
    let parsed = match CliStart::parse_args_default(&args) {
        Ok(p) => p,
        Err(err) => {
            println!("Error: {}", err);
            exit(2);
        }
    };

    if parsed.version {
        println!("razerctl v{}", env!("CARGO_PKG_VERSION"));
        println!("  razer-matrix v{}", razer_matrix::VERSION);
        println!("razer-platform v{}", razer_platform::VERSION);
        return;
    }

    if let Err(err) = do_parsed(&parsed) {
        error!("{err}");
        exit(1);
    }
}

fn do_parsed(parsed: &CliStart) -> Result<(), Box<dyn std::error::Error>> {
    if parsed.help_requested() {
        match &parsed.command {
            Some(cmd) => println!("{}", cmd.self_usage()),
            None => print_usage(),
        }
        return Ok(());
    }

    let mut config = Config::new();
    if let Some(dir) = &parsed.config_dir {
        config.dir = Some(PathBuf::from(dir));
    }
    let mut config = config.load()?;
    if let Some(layout) = &parsed.layout {
        config.layout = Some(PathBuf::from(layout));
    }
    if let Some(device) = &parsed.device {
        config.device = Some(PathBuf::from(device));
    }
    let layout = config.matrix_layout()?;
    info!("Using the {} grid", layout.grid().name());

    match &parsed.command {
        None => print_usage(),
        Some(CliCommand::Keys(_)) => print_keys(&layout),
        Some(CliCommand::Zones(_)) => print_zones(&layout),
        Some(CliCommand::Static(cmd)) => {
            let colour = cmd.colour.ok_or(Error::ParseColour)?;
            open_device(&config)?.write_static_colour(colour)?;
        }
        Some(CliCommand::Fill(cmd)) => {
            let colour = cmd.colour.ok_or(Error::ParseColour)?;
            open_device(&config)?.show(&ColourFrame::new(colour, &layout))?;
        }
        Some(CliCommand::Preset(cmd)) => {
            let preset = cmd.preset.ok_or(Error::ParsePreset)?;
            open_device(&config)?.show(&preset.frame(&layout))?;
        }
        Some(CliCommand::Set(cmd)) => {
            let frame = build_frame(&layout, cmd.default.unwrap_or(GREEN), &cmd.assignments)?;
            open_device(&config)?.show(&frame)?;
        }
        Some(CliCommand::Labels(cmd)) => {
            let device = open_device(&config)?;
            let stdin = std::io::stdin();
            LabelWatcher::new(&device, &layout, &config.label_colours, config.idle_colour)
                .use_static_effect(cmd.static_effect || config.use_static_effect)
                .run(stdin.lock())?;
        }
    }
    Ok(())
}

fn print_usage() {
    println!("{}", CliStart::usage());
    println!();
    if let Some(cmdlist) = CliStart::command_list() {
        println!("Commands:");
        println!("{}", cmdlist);
    }
}

fn open_device(config: &Config) -> Result<MatrixDevice, Box<dyn std::error::Error>> {
    let device = match &config.device {
        Some(path) => MatrixDevice::from_path(Path::new(path))?,
        None => MatrixDevice::new()?,
    };
    if let Ok(kind) = device.get_device_type() {
        info!("Keyboard: {kind}");
    }
    Ok(device)
}

/// `target=rrggbb`, split on the last `=` so the `=` key can be named too
fn parse_assignment(arg: &str) -> Result<(Colour, String), Error> {
    let (target, colour) = arg.rsplit_once('=').ok_or(Error::ParseColour)?;
    if target.is_empty() {
        return Err(Error::UnknownKey(String::new()));
    }
    Ok((colour.parse()?, target.to_owned()))
}

fn build_frame<'a>(
    layout: &'a MatrixLayout,
    default: Colour,
    assignments: &[String],
) -> Result<ColourFrame<'a>, Error> {
    let colouring = assignments
        .iter()
        .map(|a| parse_assignment(a).map(|(colour, target)| (colour, [target])))
        .collect::<Result<Vec<_>, _>>()?;
    let mut frame = ColourFrame::new(default, layout);
    frame.apply_colouring(colouring)?;
    Ok(frame)
}

fn print_keys(layout: &MatrixLayout) {
    let grid = layout.grid();
    for row in 0..GRID_ROWS {
        let keys: Vec<String> = (0..GRID_COLS)
            .filter_map(|col| grid.key_at(GridPosition::new(row, col)))
            .map(|k| format!("{k:?}"))
            .collect();
        println!("{row}: {}", keys.join(" "));
    }
}

fn print_zones(layout: &MatrixLayout) {
    for (name, keys) in layout.zones().iter() {
        let keys: Vec<String> = keys.iter().map(|k| format!("{k:?}")).collect();
        println!("{name}: {}", keys.join(" "));
    }
}
