use std::process;

use tracing::{error, info};

use gallery_app::cli::{self, Command, Options};
use gallery_app::{logging, runner, AppError};
use gallery_scene::CollisionScene;
use gallery_sim::Simulator;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let options = match cli::parse_args(&args) {
        Ok(Command::Run(options)) => options,
        Ok(Command::Help) => {
            cli::print_usage();
            return;
        }
        Err(err) => {
            eprintln!("{err}");
            cli::print_usage();
            process::exit(2);
        }
    };

    logging::init();

    if let Err(err) = run(&options) {
        error!(%err, "run failed");
        process::exit(1);
    }
}

fn run(options: &Options) -> Result<(), AppError> {
    let config = options.session_config()?;
    if options.dump_config {
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let mut driver = options.driver()?;
    let mut sim = Simulator::new(config, CollisionScene::new())?;

    let report = if options.realtime {
        runner::run_realtime(sim, &mut driver, options.seconds, options.fps)?
    } else {
        runner::run_fixed(&mut sim, &mut driver, options.seconds, options.fps)
    };

    info!(
        frames = report.frames,
        sim_secs = report.sim_secs,
        shots = report.score.shots_fired,
        destroyed = report.score.targets_destroyed,
        kills = report.score.enemy_kills,
        phase = ?report.phase,
        "run finished"
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} frames, {:.2}s simulated, {}/{} targets, {} shots, {} enemy kills, phase {:?}",
            report.frames,
            report.sim_secs,
            report.score.targets_destroyed,
            report.score.targets_total,
            report.score.shots_fired,
            report.score.enemy_kills,
            report.phase
        );
    }
    Ok(())
}
