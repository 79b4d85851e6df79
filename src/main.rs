//! Monomon main entry point.
//!
//! A small 2D tile game written in Rust using:
//! - **raylib** for windowing, input and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The player walks over a tilemap loaded from CSV, blocked by a second
//! collision layer, with a sprite animation picked from its movement.
//!
//! # Main Loop
//!
//! 1. Read `config.ini` (or `--config`), open the window and create the
//!    virtual framebuffer
//! 2. Register observers and run the setup system to load assets
//! 3. Each frame: apply config changes, poll input, move the player, tick
//!    animations, render into the framebuffer and blit it letterboxed
//! 4. Exit on window close or Escape / gamepad back
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scale 4
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::events::switchdebug::switch_debug_observer;
use crate::events::switchfullscreen::switch_fullscreen_observer;
use crate::events::windowscale::window_scale_observer;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::systems::animation::animation;
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::input::update_input_state;
use crate::systems::playercontroller::player_controller;
use crate::systems::render::render_system;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

/// Monomon: a small tile game
#[derive(Parser)]
#[command(version, about = "Walk around a tilemap. F1 debug, F11 fullscreen, =/- window scale.")]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Window scale factor, overriding the config file (1-8).
    #[arg(long, value_name = "N")]
    scale: Option<u32>,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    write_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(scale) = cli.scale {
        config.set_scale_factor(scale);
    }

    // Early-exit: write config and quit (no window needed)
    if cli.write_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Config written to {}", config.config_path.display());
        return;
    }

    info!("Starting Monomon");
    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Monomon")
        .build();
    // Escape is read as an action, not raylib's exit key
    rl.set_exit_key(None);

    // --------------- Render target for fixed-resolution rendering ---------------
    let render_target =
        match RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height) {
            Ok(target) => target,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_resource(InputState::default());
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(switch_debug_observer);
    world.add_observer(switch_fullscreen_observer);
    world.add_observer(window_scale_observer);
    // Ensure the observers are registered before we run any systems that may trigger events.
    world.flush();

    let setup_system_id = world.register_system(game::setup);
    match world.run_system(setup_system_id) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            error!("Setup failed: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Setup system could not run: {}", e);
            std::process::exit(1);
        }
    }
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(apply_gameconfig_changes); // Must run early to apply config before other systems
    update.add_systems(update_input_state.after(apply_gameconfig_changes));
    update.add_systems(player_controller.after(update_input_state));
    update.add_systems(animation.after(player_controller));
    update.add_systems(render_system.after(animation));

    if let Err(e) = update.initialize(&mut world) {
        error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<InputState>().action_back.active
    {
        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    info!("Bye!");
}
