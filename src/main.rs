use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use winit::event_loop::{ControlFlow, EventLoop};

use pyramid_walk::app::App;
use pyramid_walk::cli::Cli;
use pyramid_walk::textures::TextureSet;
use pyramid_walk::world::World;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    // Log the seed even when random so a layout can be reproduced
    let seed = config.layout.seed.unwrap_or_else(rand::random);
    log::info!("Tree layout seed: {seed}");
    let world = World::new(&config, &mut StdRng::seed_from_u64(seed))
        .context("Failed to generate scene layout")?;
    log::info!("Placed {} trees", world.trees().len());

    let textures = TextureSet::load(&config.textures);
    if textures.placeholder_count() > 0 {
        log::warn!(
            "{} texture(s) missing from {}",
            textures.placeholder_count(),
            config.textures.directory.display()
        );
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config, world, textures);

    log::info!("Controls: WASD to move, mouse to look, Escape to quit");
    event_loop.run_app(&mut app)?;

    app.finish()
}
