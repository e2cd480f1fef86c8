//! Stage carousel systems.
//!
//! - [`carousel_spawn_system`] – builds the slot table and spawns one stage
//!   instance per database entry when a [`StageCarousel`] is added
//! - [`carousel_input_system`] – polls [`InputState`] between transitions and
//!   rotates the carousel
//! - [`carousel_motion_system`] – eases instances toward their slots and
//!   settles the transition
//! - [`carousel_scale_system`] – eases the selected instance up and the
//!   others down
//! - [`carousel_confirm_observer`] – confirm/back handling
//! - [`carousel_despawn`] – removes the carousel, its instances and labels
//!
//! Run the per-frame systems in the order input, motion, scale.

use crate::components::carousel::{ShiftDirection, StageCarousel};
use crate::components::dynamictext::DynamicText;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale3;
use crate::components::stagemodel::StageModel;
use crate::components::worldposition::WorldPosition;
use crate::events::audio::AudioCmd;
use crate::events::input::{InputAction, InputEvent};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::input::InputState;
use crate::resources::savedata::SaveData;
use crate::resources::session::GameSession;
use crate::resources::stagedatabase::StageDatabase;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};
use raylib::prelude::Vector3;

/// What the player asked the carousel to do this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShiftRequest {
    Shift(ShiftDirection),
    /// No directional input; the frame runs a settle pass only.
    Idle,
}

/// Decide the shift request from this frame's input.
///
/// Keyboard right is checked first, then keyboard left. Without a connected
/// gamepad the frame is idle; otherwise d-pad right, then d-pad left.
pub fn read_shift_request(input: &InputState) -> ShiftRequest {
    if input.shift_right.just_pressed {
        return ShiftRequest::Shift(ShiftDirection::Right);
    }
    if input.shift_left.just_pressed {
        return ShiftRequest::Shift(ShiftDirection::Left);
    }
    let Some(pad) = input.gamepad else {
        return ShiftRequest::Idle;
    };
    if pad.dpad_right.just_pressed {
        return ShiftRequest::Shift(ShiftDirection::Right);
    }
    if pad.dpad_left.just_pressed {
        return ShiftRequest::Shift(ShiftDirection::Left);
    }
    ShiftRequest::Idle
}

/// Linearly interpolate between two 3D vectors.
pub(crate) fn lerp_v3(a: Vector3, b: Vector3, t: f32) -> Vector3 {
    Vector3::new(
        a.x + (b.x - a.x) * t,
        a.y + (b.y - a.y) * t,
        a.z + (b.z - a.z) * t,
    )
}

fn set_label(labels: &mut Query<&mut DynamicText>, label: Option<Entity>, text: impl Into<String>) {
    let Some(label) = label else {
        return;
    };
    match labels.get_mut(label) {
        Ok(mut dt) => dt.set_content(text),
        Err(_) => warn!("carousel label {:?} has no DynamicText", label),
    }
}

/// Spawns stage instances for newly added [`StageCarousel`] components.
///
/// Stage `i` is spawned at slot `i` with the default scale. The selected
/// stage's name and clear time are written to the carousel labels and its id
/// to [`GameSession`].
pub fn carousel_spawn_system(
    mut commands: Commands,
    mut carousels: Query<(Entity, &mut StageCarousel), Added<StageCarousel>>,
    db: Res<StageDatabase>,
    save: Res<SaveData>,
    mut session: ResMut<GameSession>,
    mut labels: Query<&mut DynamicText>,
) {
    for (entity, mut carousel) in carousels.iter_mut() {
        if db.is_empty() {
            warn!("carousel {:?}: stage database is empty", entity);
            continue;
        }
        let slots = carousel.layout.build_slots(db.len());
        let scale = carousel.tuning.default_scale;
        carousel.items = slots
            .iter()
            .enumerate()
            .map(|(stage_id, &slot)| {
                commands
                    .spawn((
                        StageModel::new(stage_id, StageDatabase::model_key(stage_id)).with_spin(true),
                        WorldPosition::from_vec(slot),
                        Scale3::uniform(scale),
                        Rotation::default(),
                    ))
                    .id()
            })
            .collect();
        carousel.slots = slots;
        carousel.current_index = 0;
        carousel.shift = ShiftDirection::Stop;
        carousel.moving = false;

        session.stage_id = 0;
        set_label(&mut labels, carousel.name_label, db.name(0));
        set_label(
            &mut labels,
            carousel.clear_time_label,
            save.clear_time(0).to_string(),
        );
        info!("carousel {:?}: spawned {} stages", entity, carousel.len());
    }
}

/// Polls directional input while the carousel is at rest.
///
/// A shift rotates the instance array, publishes the new selected stage id
/// and clear time, and plays the cursor sound once. An idle frame marks the
/// carousel as moving without rotating so the motion system settles it.
pub fn carousel_input_system(
    input: Res<InputState>,
    mut carousels: Query<&mut StageCarousel>,
    stages: Query<&StageModel>,
    save: Res<SaveData>,
    mut session: ResMut<GameSession>,
    mut labels: Query<&mut DynamicText>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    let request = read_shift_request(&input);
    for mut carousel in carousels.iter_mut() {
        if carousel.moving || carousel.is_empty() {
            continue;
        }
        let direction = match request {
            ShiftRequest::Idle => {
                carousel.shift(ShiftDirection::Stop);
                continue;
            }
            ShiftRequest::Shift(direction) => direction,
        };

        carousel.shift(direction);
        let selected = carousel
            .selected_item()
            .and_then(|e| stages.get(e).ok())
            .map(|m| m.stage_id);
        if let Some(stage_id) = selected {
            session.stage_id = stage_id;
            set_label(
                &mut labels,
                carousel.clear_time_label,
                save.clear_time(stage_id).to_string(),
            );
        }
        if let Some(id) = &carousel.cursor_sound {
            audio_cmds.write(AudioCmd::PlayFx { id: id.clone() });
        }
        debug!("carousel shift {:?}, selected stage {:?}", direction, selected);
    }
}

/// Eases every instance toward its slot while the carousel is moving.
///
/// Once all instances are within the settle distance, the current index
/// advances by the shift direction and the name label is refreshed.
pub fn carousel_motion_system(
    time: Res<WorldTime>,
    db: Res<StageDatabase>,
    mut carousels: Query<&mut StageCarousel>,
    mut positions: Query<&mut WorldPosition, With<StageModel>>,
    mut labels: Query<&mut DynamicText>,
) {
    let dt = time.delta.max(0.0);
    for mut carousel in carousels.iter_mut() {
        if !carousel.moving {
            continue;
        }
        let t = (dt * carousel.tuning.shift_speed).clamp(0.0, 1.0);
        let settle_distance = carousel.tuning.settle_distance;
        let mut all_settled = true;
        for (item, &target) in carousel.items.iter().zip(carousel.slots.iter()) {
            let Ok(mut position) = positions.get_mut(*item) else {
                continue;
            };
            position.pos = lerp_v3(position.pos, target, t);
            if position.distance_to(target) >= settle_distance {
                all_settled = false;
            }
        }
        if all_settled {
            let direction = carousel.shift;
            carousel.settle();
            set_label(&mut labels, carousel.name_label, db.name(carousel.current_index));
            if direction != ShiftDirection::Stop {
                debug!("carousel settled on index {}", carousel.current_index);
            }
        }
    }
}

/// Eases the selected instance toward the selected scale and every other
/// instance toward the default scale.
pub fn carousel_scale_system(
    time: Res<WorldTime>,
    carousels: Query<&StageCarousel>,
    mut scales: Query<&mut Scale3>,
) {
    let dt = time.delta.max(0.0);
    for carousel in carousels.iter() {
        let t = (dt * carousel.tuning.shift_speed).clamp(0.0, 1.0);
        for (i, item) in carousel.items.iter().enumerate() {
            let target = carousel.scale_target(i);
            let Ok(mut scale) = scales.get_mut(*item) else {
                continue;
            };
            if scale.is_uniform(target) {
                continue;
            }
            scale.scale = lerp_v3(scale.scale, Vector3::new(target, target, target), t);
        }
    }
}

/// Confirms the selected stage or leaves the screen.
///
/// Confirm is ignored mid-transition. Both actions request
/// [`GameStates::Quitting`]; only confirm records the stage in
/// [`GameSession::confirmed`].
pub fn carousel_confirm_observer(
    trigger: On<InputEvent>,
    carousels: Query<&StageCarousel>,
    stages: Query<&StageModel>,
    db: Res<StageDatabase>,
    state: Res<GameState>,
    mut session: ResMut<GameSession>,
    mut next_state: ResMut<NextGameState>,
) {
    let event = trigger.event();
    if state.get() != GameStates::StageSelect {
        return;
    }
    match event.action {
        InputAction::Confirm => {
            let Some(carousel) = carousels.iter().next() else {
                return;
            };
            if carousel.moving && carousel.shift != ShiftDirection::Stop {
                return;
            }
            let Some(model) = carousel.selected_item().and_then(|e| stages.get(e).ok()) else {
                return;
            };
            info!(
                "Stage {} '{}' confirmed",
                model.stage_id,
                db.name(model.stage_id)
            );
            session.stage_id = model.stage_id;
            session.confirmed = Some(model.stage_id);
            next_state.set(GameStates::Quitting);
        }
        InputAction::Back => {
            info!("Stage select cancelled");
            next_state.set(GameStates::Quitting);
        }
    }
}

/// Despawns every carousel together with its stage instances and labels.
pub fn carousel_despawn(mut commands: Commands, query: Query<(Entity, &StageCarousel)>) {
    for (entity, carousel) in query.iter() {
        for item in carousel.items.iter() {
            commands.entity(*item).despawn();
        }
        for label in [carousel.name_label, carousel.clear_time_label]
            .into_iter()
            .flatten()
        {
            commands.entity(label).despawn();
        }
        commands.entity(entity).despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::input::GamepadState;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_lerp_v3_endpoints_and_middle() {
        let a = Vector3::new(0.0, 10.0, -4.0);
        let b = Vector3::new(10.0, 20.0, 4.0);
        let start = lerp_v3(a, b, 0.0);
        let end = lerp_v3(a, b, 1.0);
        let mid = lerp_v3(a, b, 0.5);
        assert!(approx_eq(start.x, 0.0) && approx_eq(start.y, 10.0) && approx_eq(start.z, -4.0));
        assert!(approx_eq(end.x, 10.0) && approx_eq(end.y, 20.0) && approx_eq(end.z, 4.0));
        assert!(approx_eq(mid.x, 5.0) && approx_eq(mid.y, 15.0) && approx_eq(mid.z, 0.0));
    }

    #[test]
    fn test_no_input_without_gamepad_is_idle() {
        let input = InputState::default();
        assert_eq!(read_shift_request(&input), ShiftRequest::Idle);
    }

    #[test]
    fn test_keyboard_right_wins_over_left() {
        let mut input = InputState::default();
        input.shift_right.just_pressed = true;
        input.shift_left.just_pressed = true;
        assert_eq!(
            read_shift_request(&input),
            ShiftRequest::Shift(ShiftDirection::Right)
        );
    }

    #[test]
    fn test_keyboard_left() {
        let mut input = InputState::default();
        input.shift_left.just_pressed = true;
        assert_eq!(
            read_shift_request(&input),
            ShiftRequest::Shift(ShiftDirection::Left)
        );
    }

    #[test]
    fn test_held_key_without_edge_is_idle() {
        let mut input = InputState::default();
        input.shift_right.active = true;
        assert_eq!(read_shift_request(&input), ShiftRequest::Idle);
    }

    #[test]
    fn test_gamepad_dpad() {
        let mut input = InputState::default();
        let mut pad = GamepadState::new(0);
        pad.dpad_left.just_pressed = true;
        input.gamepad = Some(pad);
        assert_eq!(
            read_shift_request(&input),
            ShiftRequest::Shift(ShiftDirection::Left)
        );

        pad.dpad_right.just_pressed = true;
        input.gamepad = Some(pad);
        assert_eq!(
            read_shift_request(&input),
            ShiftRequest::Shift(ShiftDirection::Right)
        );
    }

    #[test]
    fn test_keyboard_checked_before_gamepad() {
        let mut input = InputState::default();
        let mut pad = GamepadState::new(0);
        pad.dpad_right.just_pressed = true;
        input.gamepad = Some(pad);
        input.shift_left.just_pressed = true;
        assert_eq!(
            read_shift_request(&input),
            ShiftRequest::Shift(ShiftDirection::Left)
        );
    }

    #[test]
    fn test_connected_gamepad_without_press_is_idle() {
        let mut input = InputState::default();
        input.gamepad = Some(GamepadState::new(0));
        assert_eq!(read_shift_request(&input), ShiftRequest::Idle);
    }
}
