//! Game state hooks.
//!
//! These systems are registered with [`StateHooks`](crate::resources::statehooks::StateHooks)
//! and run by the game state observer on transitions:
//!
//! - [`setup`] – on entering `Setup`: loads models and audio, then requests `StageSelect`
//! - [`enter_stage_select`] – spawns the camera, labels and the carousel
//! - [`exit_stage_select`] – despawns them again
//! - [`quit_game`] – on entering `Quitting`: asks the main loop to stop

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::carousel::{CarouselLayout, StageCarousel};
use crate::components::dynamictext::DynamicText;
use crate::components::screenposition::ScreenPosition;
use crate::events::audio::AudioCmd;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameStates, NextGameState};
use crate::resources::modelstore::ModelStore;
use crate::resources::session::GameSession;
use crate::resources::stagedatabase::StageDatabase;
use crate::systems::carousel::carousel_despawn;

/// Sound effect id played when the carousel shifts.
pub const CURSOR_FX_ID: &str = "cursor_move";
/// Music id of the stage select background track.
pub const MENU_MUSIC_ID: &str = "menu_music";

const NAME_FONT_SIZE: f32 = 40.0;
const CLEAR_TIME_FONT_SIZE: f32 = 30.0;

/// Loads every stage model into the [`ModelStore`].
///
/// A model that fails to load is skipped with a warning; the render system
/// draws a placeholder for it.
fn load_stage_models(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    db: &StageDatabase,
    models: &mut ModelStore,
) {
    for (stage_id, entry) in db.stages.iter().enumerate() {
        let Some(path) = entry.model.as_deref() else {
            continue;
        };
        match rl.load_model(th, path) {
            Ok(model) => models.insert(StageDatabase::model_key(stage_id), model),
            Err(e) => warn!(
                "Failed to load model '{}' for stage {} '{}': {}",
                path, stage_id, entry.name, e
            ),
        }
    }
    info!("Loaded {}/{} stage models", models.len(), db.len());
}

pub fn setup(
    mut next_state: ResMut<NextGameState>,
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut models: NonSendMut<ModelStore>,
    db: Res<StageDatabase>,
    config: Res<GameConfig>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    load_stage_models(&mut rl, &th, &db, &mut models);

    // The audio thread answers asynchronously; failures only show up as warnings.
    if let Some(path) = &config.cursor_fx_path {
        audio_cmd_writer.write(AudioCmd::LoadFx {
            id: CURSOR_FX_ID.into(),
            path: path.to_string_lossy().into_owned(),
        });
    }
    if let Some(path) = &config.music_path {
        audio_cmd_writer.write(AudioCmd::LoadMusic {
            id: MENU_MUSIC_ID.into(),
            path: path.to_string_lossy().into_owned(),
        });
    }

    next_state.set(GameStates::StageSelect);
    info!("Game setup done, next state set to StageSelect");
}

/// Builds the stage select screen.
///
/// The carousel entity carries the tuning from [`GameConfig`]; its stage
/// instances are spawned by `carousel_spawn_system` on the next frame.
pub fn enter_stage_select(
    mut commands: Commands,
    config: Option<Res<GameConfig>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    let config = config.map(|c| (*c).clone()).unwrap_or_default();
    let (w, h) = config.window_size();
    let center_x = w as f32 * 0.5;

    commands.insert_resource(Camera3DRes::looking_at_carousel());

    let name_label = commands
        .spawn((
            DynamicText::new("", NAME_FONT_SIZE, Color::RAYWHITE),
            ScreenPosition::new(center_x, 40.0),
        ))
        .id();
    let clear_time_label = commands
        .spawn((
            DynamicText::new("", CLEAR_TIME_FONT_SIZE, Color::GOLD),
            ScreenPosition::new(center_x, h as f32 - 80.0),
        ))
        .id();

    let mut carousel = StageCarousel::new(CarouselLayout::default(), config.carousel_tuning())
        .with_labels(name_label, clear_time_label);
    if config.cursor_fx_path.is_some() {
        carousel = carousel.with_cursor_sound(CURSOR_FX_ID);
    }
    commands.spawn(carousel);

    if config.music_path.is_some() {
        audio_cmd_writer.write(AudioCmd::PlayMusic {
            id: MENU_MUSIC_ID.into(),
            looped: true,
        });
    }
}

/// Tears down the stage select screen, stops its music and releases the
/// sounds loaded by [`setup`].
pub fn exit_stage_select(
    commands: Commands,
    carousels: Query<(Entity, &StageCarousel)>,
    config: Option<Res<GameConfig>>,
    mut audio_cmd_writer: MessageWriter<AudioCmd>,
) {
    carousel_despawn(commands, carousels);
    if config.is_some_and(|c| c.music_path.is_some()) {
        audio_cmd_writer.write(AudioCmd::StopMusic {
            id: MENU_MUSIC_ID.into(),
        });
    }
    audio_cmd_writer.write(AudioCmd::UnloadAllMusic);
    audio_cmd_writer.write(AudioCmd::UnloadAllFx);
}

pub fn quit_game(mut session: ResMut<GameSession>) {
    session.quit_requested = true;
    match session.confirmed {
        Some(stage_id) => info!("Quitting with stage {} selected", stage_id),
        None => info!("Quitting without a selection"),
    }
}
