use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use argh::FromArgs;

use common::*;
use simulation::{World, WorldState};

/// Headless pursuit-evasion runner.
#[derive(FromArgs)]
struct Args {
    /// path to the episode config
    #[argh(option, short = 'c', default = "PathBuf::from(\"resources/chase.ron\")")]
    config: PathBuf,

    /// maximum number of steps, overriding the config
    #[argh(option, short = 's')]
    steps: Option<u64>,

    /// number of isotropic scan rays to log before the first step, overriding the config
    #[argh(option)]
    scan: Option<u32>,

    /// sleep for a timestep between steps
    #[argh(switch, short = 'r')]
    realtime: bool,
}

fn do_main(args: Args) -> BoxedResult<()> {
    // load config
    info!("loading config"; "path" => %args.config.display());
    config::init(config::ConfigType::File(&args.config))?;
    let config = config::get()?;

    let max_steps = args.steps.unwrap_or(config.driver.max_steps);
    let scan_rays = args.scan.unwrap_or(config.driver.scan_rays);
    let realtime = args.realtime || config.driver.realtime;
    let log_every = config.driver.log_every;

    let mut world = World::from_config(&config)?;
    info!("starting episode";
        "arena" => ?world.arena().half_extents(), "timestep" => world.timestep(),
        "max_steps" => max_steps
    );

    if scan_rays > 0 {
        log_scan(&world, scan_rays as usize);
    }

    let pause = Duration::from_secs_f64(world.timestep());
    while world.tick() < max_steps {
        let state = world.step();

        if should_log_patches(state, world.tick(), log_every) {
            log_patches(&world);
        }

        if let WorldState::Terminated(reason) = state {
            info!("{}!", reason; "tick" => world.tick(), "elapsed" => world.elapsed());
            return Ok(());
        }

        if realtime {
            std::thread::sleep(pause);
        }
    }

    info!("step limit reached, still running"; "tick" => world.tick(), "elapsed" => world.elapsed());
    Ok(())
}

/// Every `log_every` ticks, and always after the terminating step
fn should_log_patches(state: WorldState, tick: u64, log_every: u64) -> bool {
    match state {
        WorldState::Terminated(_) => true,
        WorldState::Running => log_every > 0 && tick % log_every == 0,
    }
}

fn log_patches(world: &World) {
    for (role, patch) in world.patches() {
        info!("agent"; "tick" => world.tick(), "role" => role, "patch" => patch);
    }
}

fn log_scan(world: &World, rays: usize) {
    let scan = some_or_return!(world.scan(rays));

    let (start, end) = match (scan.trackback.first(), scan.trackback.last()) {
        (Some(start), Some(end)) => (start, end),
        _ => return,
    };
    info!("trackback"; "from" => ?start, "to" => ?end, "points" => scan.trackback.len());

    for (i, ray) in scan.rays.iter().enumerate() {
        info!("scan ray"; "index" => i, "end" => ?ray.end, "length" => ray.length());
    }
}

fn causes<'a>(e: &'a (dyn Error + 'static)) -> impl Iterator<Item = &'a (dyn Error + 'static)> {
    std::iter::successors(e.source(), |&e: &&'a (dyn Error + 'static)| e.source())
}

fn main() {
    let args: Args = argh::from_env();

    let logger = match logging::LoggerBuilder::with_env().and_then(logging::LoggerBuilder::init) {
        Ok(logger) => logger,
        Err(e) => {
            // nowhere else to report it
            eprintln!("error: failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    let exit = match do_main(args) {
        Ok(_) => 0,
        Err(e) => {
            error!("error: {}", e);
            for cause in causes(e.as_ref()) {
                error!(" caused by: {}", cause);
            }
            1
        }
    };

    info!("exiting with code {}", exit);

    // exit skips destructors, drop the guard to flush the async drain
    drop(logger);
    std::process::exit(exit);
}
