use gumdrop::Options;
use razer_matrix::{Colour, Preset};

#[derive(Default, Options)]
pub struct CliStart {
    #[options(help_flag, help = "print help message")]
    pub help: bool,
    #[options(help = "show program version number")]
    pub version: bool,
    #[options(meta = "", help = "sysfs path of the keyboard, skips the udev search")]
    pub device: Option<String>,
    #[options(meta = "", help = "grid layout file to use instead of the built-in QWERTZ")]
    pub layout: Option<String>,
    #[options(no_short, meta = "", help = "directory holding razerctl.ron")]
    pub config_dir: Option<String>,
    #[options(command)]
    pub command: Option<CliCommand>,
}

#[derive(Options)]
pub enum CliCommand {
    #[options(help = "Set every key to one colour with the static effect")]
    Static(ColourCommand),
    #[options(help = "Set every key to one colour with a custom frame")]
    Fill(ColourCommand),
    #[options(help = "Show a built-in pattern <horizontal, vertical>")]
    Preset(PresetCommand),
    #[options(help = "Colour keys and zones, e.g `set fx=ff0000 arrows=0000ff`")]
    Set(SetCommand),
    #[options(help = "List the keys of the layout, row by row")]
    Keys(ListCommand),
    #[options(help = "List the zones and their keys")]
    Zones(ListCommand),
    #[options(help = "Follow Qubes window labels read from stdin")]
    Labels(LabelsCommand),
}

#[derive(Debug, Clone, Options)]
pub struct ColourCommand {
    #[options(help = "print help message")]
    pub help: bool,
    #[options(free, help = "<rrggbb>")]
    pub colour: Option<Colour>,
}

#[derive(Debug, Clone, Options)]
pub struct PresetCommand {
    #[options(help = "print help message")]
    pub help: bool,
    #[options(free, help = "<horizontal, vertical>")]
    pub preset: Option<Preset>,
}

#[derive(Debug, Clone, Options)]
pub struct SetCommand {
    #[options(help = "print help message")]
    pub help: bool,
    #[options(meta = "", help = "colour for keys not named <rrggbb>, default 00ff00")]
    pub default: Option<Colour>,
    #[options(
        free,
        help = "<target>=<rrggbb> pairs, where target is a key or zone. Later pairs win"
    )]
    pub assignments: Vec<String>,
}

#[derive(Debug, Clone, Options)]
pub struct ListCommand {
    #[options(help = "print help message")]
    pub help: bool,
}

#[derive(Debug, Clone, Options)]
pub struct LabelsCommand {
    #[options(help = "print help message")]
    pub help: bool,
    #[options(help = "use the static effect instead of a custom frame")]
    pub static_effect: bool,
}
