//! Command-line options for the `gallery` runner.
//!
//! Usage:
//!   gallery --preset chase --auto-aim --seconds 30 --json
//!   gallery --config session.toml --script demo.json --realtime

use std::path::PathBuf;

use gallery_core::config::SessionConfig;

use crate::aim::AutoAim;
use crate::error::AppError;
use crate::game_loop::DEFAULT_FRAME_RATE;
use crate::runner::Driver;
use crate::script::DemoScript;

/// Seconds between auto-aim shots.
const AUTO_AIM_INTERVAL_SECS: f32 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Gallery,
    Arena,
    Ballistic,
    Chase,
}

impl Preset {
    pub fn parse(name: &str) -> Result<Self, AppError> {
        match name {
            "gallery" => Ok(Preset::Gallery),
            "arena" => Ok(Preset::Arena),
            "ballistic" => Ok(Preset::Ballistic),
            "chase" => Ok(Preset::Chase),
            other => Err(AppError::Usage(format!("unknown preset `{other}`"))),
        }
    }

    pub fn config(self) -> SessionConfig {
        match self {
            Preset::Gallery => SessionConfig::gallery(),
            Preset::Arena => SessionConfig::arena(),
            Preset::Ballistic => SessionConfig::ballistic(),
            Preset::Chase => SessionConfig::chase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub preset: Preset,
    /// TOML session config; replaces the preset when given.
    pub config: Option<PathBuf>,
    /// JSON input script; the built-in sweep is used otherwise.
    pub script: Option<PathBuf>,
    pub auto_aim: bool,
    pub seed: Option<u64>,
    pub seconds: f32,
    pub fps: u32,
    pub realtime: bool,
    pub json: bool,
    pub dump_config: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            config: None,
            script: None,
            auto_aim: false,
            seed: None,
            seconds: 10.0,
            fps: DEFAULT_FRAME_RATE,
            realtime: false,
            json: false,
            dump_config: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Options),
    Help,
}

impl Options {
    /// Resolve the session config: file or preset, then the seed override.
    pub fn session_config(&self) -> Result<SessionConfig, AppError> {
        let mut config = match &self.config {
            Some(path) => SessionConfig::load(path)?,
            None => self.preset.config(),
        };
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn driver(&self) -> Result<Driver, AppError> {
        if self.auto_aim {
            return Ok(Driver::AutoAim(AutoAim::new(AUTO_AIM_INTERVAL_SECS)));
        }
        let script = match &self.script {
            Some(path) => DemoScript::load(path)?,
            None => DemoScript::sweep(),
        };
        Ok(Driver::Script(script))
    }
}

pub fn print_usage() {
    eprintln!(
        "gallery: headless shooting-gallery session runner\n\
         \n\
         Options:\n\
         \n\
           --preset <name>    gallery | arena | ballistic | chase (default: gallery)\n\
           --config <path>    TOML session config (replaces --preset)\n\
           --seed <N>         Override the RNG seed\n\
           --script <path>    JSON input script (default: built-in sweep)\n\
           --auto-aim         Aim and fire at targets automatically\n\
           --seconds <S>      Run length (default: 10)\n\
           --fps <N>          Frame rate (default: 60)\n\
           --realtime         Run on the game loop thread with wall-clock timing\n\
           --json             Print the run report as JSON\n\
           --dump-config      Print the resolved config as TOML and exit\n\
         \n\
         Examples:\n\
         \n\
           gallery --preset chase --auto-aim --seconds 30 --json\n\
           gallery --config session.toml --script demo.json --realtime\n"
    );
}

/// Parse arguments (program name excluded).
pub fn parse_args(args: &[String]) -> Result<Command, AppError> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| AppError::Usage(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "--preset" => options.preset = Preset::parse(&value("--preset")?)?,
            "--config" => options.config = Some(PathBuf::from(value("--config")?)),
            "--script" => options.script = Some(PathBuf::from(value("--script")?)),
            "--seed" => options.seed = Some(parse_number("--seed", &value("--seed")?)?),
            "--seconds" => options.seconds = parse_number("--seconds", &value("--seconds")?)?,
            "--fps" => options.fps = parse_number("--fps", &value("--fps")?)?,
            "--auto-aim" => options.auto_aim = true,
            "--realtime" => options.realtime = true,
            "--json" => options.json = true,
            "--dump-config" => options.dump_config = true,
            other => return Err(AppError::Usage(format!("unknown argument `{other}`"))),
        }
    }

    if options.fps == 0 {
        return Err(AppError::Usage("--fps must be positive".into()));
    }
    if !(options.seconds.is_finite() && options.seconds >= 0.0) {
        return Err(AppError::Usage("--seconds must be a non-negative number".into()));
    }
    Ok(Command::Run(options))
}

fn parse_number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, AppError> {
    raw.parse()
        .map_err(|_| AppError::Usage(format!("{flag}: cannot parse `{raw}`")))
}
