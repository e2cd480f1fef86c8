//! Stage select entry point.
//!
//! A 3D stage selection carousel written in Rust using:
//! - **raylib** for windowing, 3D rendering, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! # Main Loop
//!
//! 1. Load configuration, the stage database and save data
//! 2. Initialize the raylib window, the ECS world and the audio thread
//! 3. Register state hooks and observers, then enter `Setup`
//! 4. Run the main loop:
//!    - Poll input and apply pending state changes
//!    - Shift, move and scale the carousel
//!    - Render stages and labels
//! 5. Clean up the audio thread and report the confirmed stage
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --stages ./assets/stages.json
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use stageselect::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use stageselect::events::switchdebug::switch_debug_observer;
use stageselect::game;
use stageselect::resources::audio::{setup_audio, shutdown_audio};
use stageselect::resources::gameconfig::GameConfig;
use stageselect::resources::gamestate::{GameState, GameStates, NextGameState};
use stageselect::resources::input::InputState;
use stageselect::resources::modelstore::ModelStore;
use stageselect::resources::savedata::SaveData;
use stageselect::resources::session::GameSession;
use stageselect::resources::stagedatabase::StageDatabase;
use stageselect::resources::statehooks::StateHooks;
use stageselect::resources::worldtime::WorldTime;
use stageselect::systems::audio::{
    forward_audio_cmds, log_audio_messages, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use stageselect::systems::carousel::{
    carousel_confirm_observer, carousel_input_system, carousel_motion_system,
    carousel_scale_system, carousel_spawn_system,
};
use stageselect::systems::dynamictext_size::dynamictext_size_system;
use stageselect::systems::gameconfig::{apply_carousel_tuning, apply_gameconfig_changes};
use stageselect::systems::gamestate::{check_pending_state, state_is_stage_select};
use stageselect::systems::input::update_input_state;
use stageselect::systems::render::render_system;
use stageselect::systems::spin::{SpinSpeed, stage_spin_system};
use stageselect::systems::time::update_world_time;

/// 3D stage select carousel
#[derive(Parser)]
#[command(version, about = "Pick a stage from a rotating 3D carousel.")]
struct Cli {
    /// Configuration file (INI).
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Stage database (JSON). Overrides `[assets] stages` from the config.
    #[arg(long, value_name = "PATH")]
    stages: Option<PathBuf>,

    /// Save data (JSON). Overrides `[assets] save` from the config.
    #[arg(long, value_name = "PATH")]
    save: Option<PathBuf>,

    /// Load and check config, stages and save data, then exit without opening a window.
    #[arg(long)]
    validate: bool,
}

fn load_assets(config: &GameConfig) -> anyhow::Result<(StageDatabase, SaveData)> {
    let db = StageDatabase::load_from_file(&config.stages_path)?;
    let save = SaveData::load_from_file(&config.save_path)?;
    Ok((db, save))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{}; using defaults", e);
    }
    if let Some(path) = cli.stages {
        config.stages_path = path;
    }
    if let Some(path) = cli.save {
        config.save_path = path;
    }

    let (db, save) = match load_assets(&config) {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    };

    if cli.validate {
        for (stage_id, entry) in db.stages.iter().enumerate() {
            println!(
                "{:>3}  {:<24} {}  {}",
                stage_id,
                entry.name,
                save.clear_time(stage_id),
                entry.model.as_deref().unwrap_or("-")
            );
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .msaa_4x()
        .title("Stage Select")
        .build();
    // ESC is the back action, not a window close request
    rl.set_exit_key(None);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(SpinSpeed(config.spin_speed));
    world.insert_resource(config);
    world.insert_resource(db);
    world.insert_resource(save);
    world.insert_resource(GameSession::new());
    world.insert_resource(InputState::default());

    // Init audio; it must go before the game setup
    setup_audio(&mut world);

    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(ModelStore::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);
    world.spawn(Observer::new(observe_gamestate_change_event));

    let mut hooks = StateHooks::new();
    hooks.on_enter(GameStates::Setup, world.register_system(game::setup));
    hooks.on_enter(
        GameStates::StageSelect,
        world.register_system(game::enter_stage_select),
    );
    hooks.on_exit(
        GameStates::StageSelect,
        world.register_system(game::exit_stage_select),
    );
    hooks.on_enter(GameStates::Quitting, world.register_system(game::quit_game));
    world.insert_resource(hooks);

    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup right away

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(carousel_confirm_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems((apply_gameconfig_changes, apply_carousel_tuning));
    update.add_systems(update_input_state);
    update.add_systems(check_pending_state.after(update_input_state));
    update.add_systems(carousel_spawn_system.after(check_pending_state));
    update.add_systems(
        (
            carousel_input_system,
            carousel_motion_system,
            carousel_scale_system,
        )
            .chain()
            .after(carousel_spawn_system)
            .run_if(state_is_stage_select),
    );
    update.add_systems(
        // audio systems must be together
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
            log_audio_messages,
        )
            .chain()
            .after(carousel_input_system),
    );
    update.add_systems(stage_spin_system.after(carousel_scale_system));
    update.add_systems(dynamictext_size_system.after(carousel_motion_system));
    update.add_systems(
        render_system
            .after(stage_spin_system)
            .after(dynamictext_size_system),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        shutdown_audio(&mut world);
        std::process::exit(1);
    }

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && !world.resource::<GameSession>().quit_requested
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
    shutdown_audio(&mut world);

    let session = world.resource::<GameSession>();
    if let Some(stage_id) = session.confirmed {
        let name = world.resource::<StageDatabase>().name(stage_id);
        println!("{} {}", stage_id, name);
    }
}
