//! Carousel integration tests: spawning, shifting, settling, scaling,
//! confirmation and the stage select state hooks.

use bevy_ecs::prelude::*;
use raylib::prelude::Color;

use stageselect::components::carousel::{
    CarouselLayout, CarouselTuning, ShiftDirection, StageCarousel,
};
use stageselect::components::dynamictext::DynamicText;
use stageselect::components::scale::Scale3;
use stageselect::components::stagemodel::StageModel;
use stageselect::components::worldposition::WorldPosition;
use stageselect::events::audio::AudioCmd;
use stageselect::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use stageselect::events::input::{InputAction, InputEvent};
use stageselect::game::{enter_stage_select, exit_stage_select, quit_game, CURSOR_FX_ID};
use stageselect::resources::gamestate::{GameState, GameStates, NextGameState, NextGameStates};
use stageselect::resources::input::{GamepadState, InputState};
use stageselect::resources::savedata::SaveData;
use stageselect::resources::session::GameSession;
use stageselect::resources::stagedatabase::StageDatabase;
use stageselect::resources::statehooks::StateHooks;
use stageselect::resources::worldtime::WorldTime;
use stageselect::systems::carousel::{
    carousel_confirm_observer, carousel_input_system, carousel_motion_system,
    carousel_scale_system, carousel_spawn_system,
};

const DELTA: f32 = 0.1;
const MAX_FRAMES: usize = 500;

fn stage_db(n: usize) -> StageDatabase {
    let stages: Vec<String> = (0..n)
        .map(|i| format!("{{\"name\": \"Stage {}\"}}", i))
        .collect();
    StageDatabase::from_json(&format!("{{\"stages\": [{}]}}", stages.join(","))).unwrap()
}

fn save_data() -> SaveData {
    SaveData::from_json(
        r#"{ "stages": [
            { "clear_time": { "hour": 0, "minute": 1, "seconds": 5 } },
            { "clear_time": { "hour": 0, "minute": 2, "seconds": 10 } },
            { "clear_time": { "hour": 1, "minute": 0, "seconds": 0 } }
        ] }"#,
    )
    .unwrap()
}

fn make_world(stage_count: usize) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: DELTA,
        time_scale: 1.0,
        frame_count: 0,
    });
    world.insert_resource(stage_db(stage_count));
    world.insert_resource(save_data());
    world.insert_resource(GameSession::new());
    world.insert_resource(InputState::default());
    world.insert_resource(NextGameState::new());
    let mut state = GameState::new();
    state.set(GameStates::StageSelect);
    world.insert_resource(state);
    world.init_resource::<Messages<AudioCmd>>();
    world
}

/// Spawns labels and a carousel with a cursor sound; returns the carousel entity.
fn spawn_carousel(world: &mut World) -> Entity {
    let name = world
        .spawn(DynamicText::new("", 40.0, Color::WHITE))
        .id();
    let clear_time = world
        .spawn(DynamicText::new("", 30.0, Color::WHITE))
        .id();
    world
        .spawn(
            StageCarousel::new(CarouselLayout::default(), CarouselTuning::default())
                .with_labels(name, clear_time)
                .with_cursor_sound(CURSOR_FX_ID),
        )
        .id()
}

fn tick(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            carousel_spawn_system,
            carousel_input_system,
            carousel_motion_system,
            carousel_scale_system,
        )
            .chain(),
    );
    schedule.run(world);
}

fn carousel(world: &World, entity: Entity) -> &StageCarousel {
    world.get::<StageCarousel>(entity).unwrap()
}

fn clear_input(world: &mut World) {
    let mut input = world.resource_mut::<InputState>();
    input.shift_left.just_pressed = false;
    input.shift_right.just_pressed = false;
    if let Some(pad) = input.gamepad.as_mut() {
        pad.dpad_left.just_pressed = false;
        pad.dpad_right.just_pressed = false;
    }
}

/// One frame with the given key edge, then frames without input until the
/// transition settles.
fn press_and_settle(world: &mut World, entity: Entity, direction: ShiftDirection) {
    {
        let mut input = world.resource_mut::<InputState>();
        match direction {
            ShiftDirection::Right => input.shift_right.just_pressed = true,
            ShiftDirection::Left => input.shift_left.just_pressed = true,
            ShiftDirection::Stop => {}
        }
    }
    tick(world);
    clear_input(world);
    for _ in 0..MAX_FRAMES {
        if !carousel(world, entity).moving {
            return;
        }
        tick(world);
    }
    panic!("carousel did not settle within {} frames", MAX_FRAMES);
}

fn selected_stage(world: &World, entity: Entity) -> usize {
    let item = carousel(world, entity).selected_item().unwrap();
    world.get::<StageModel>(item).unwrap().stage_id
}

fn label_text(world: &World, label: Option<Entity>) -> String {
    world.get::<DynamicText>(label.unwrap()).unwrap().content.clone()
}

fn drain_audio(world: &mut World) -> Vec<AudioCmd> {
    world
        .resource_mut::<Messages<AudioCmd>>()
        .drain()
        .collect()
}

#[test]
fn spawn_places_each_stage_on_its_slot() {
    let mut world = make_world(5);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    let c = carousel(&world, entity).clone();
    assert_eq!(c.len(), 5);
    assert_eq!(c.slots.len(), c.items.len());
    assert_eq!(c.current_index, 0);
    for (i, item) in c.items.iter().enumerate() {
        assert_eq!(world.get::<StageModel>(*item).unwrap().stage_id, i);
        let pos = world.get::<WorldPosition>(*item).unwrap();
        assert!(pos.distance_to(c.slots[i]) < c.tuning.settle_distance);
    }
    assert_eq!(label_text(&world, c.name_label), "Stage 0");
    assert_eq!(label_text(&world, c.clear_time_label), "00:01:05");
    assert_eq!(world.resource::<GameSession>().stage_id, 0);
}

#[test]
fn shifting_right_twice_selects_third_stage() {
    let mut world = make_world(5);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    press_and_settle(&mut world, entity, ShiftDirection::Right);
    press_and_settle(&mut world, entity, ShiftDirection::Right);

    let c = carousel(&world, entity).clone();
    assert_eq!(c.current_index, 2);
    assert_eq!(selected_stage(&world, entity), 2);
    assert_eq!(label_text(&world, c.name_label), "Stage 2");
    assert_eq!(label_text(&world, c.clear_time_label), "01:00:00");
    assert_eq!(world.resource::<GameSession>().stage_id, 2);
}

#[test]
fn shifting_left_from_start_wraps_to_last_stage() {
    let mut world = make_world(5);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    press_and_settle(&mut world, entity, ShiftDirection::Left);

    let c = carousel(&world, entity).clone();
    assert_eq!(c.current_index, 4);
    assert_eq!(selected_stage(&world, entity), 4);
    // stage 4 has no save record
    assert_eq!(label_text(&world, c.clear_time_label), "00:00:00");
}

#[test]
fn right_then_left_restores_order() {
    let mut world = make_world(4);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    let before = carousel(&world, entity).items.clone();

    press_and_settle(&mut world, entity, ShiftDirection::Right);
    press_and_settle(&mut world, entity, ShiftDirection::Left);

    let c = carousel(&world, entity);
    assert_eq!(c.items, before);
    assert_eq!(c.current_index, 0);
}

#[test]
fn index_tracks_net_shift_over_sequences() {
    let sequence = [
        ShiftDirection::Right,
        ShiftDirection::Right,
        ShiftDirection::Left,
        ShiftDirection::Right,
        ShiftDirection::Left,
        ShiftDirection::Left,
        ShiftDirection::Left,
        ShiftDirection::Right,
        ShiftDirection::Left,
    ];
    for n in [1usize, 2, 3, 7] {
        let mut world = make_world(n);
        let entity = spawn_carousel(&mut world);
        tick(&mut world);
        let mut net: isize = 0;
        for direction in sequence {
            press_and_settle(&mut world, entity, direction);
            net += direction.step();
            let expected = net.rem_euclid(n as isize) as usize;
            assert_eq!(carousel(&world, entity).current_index, expected, "n={}", n);
            assert_eq!(selected_stage(&world, entity), expected, "n={}", n);
            assert_eq!(carousel(&world, entity).len(), n);
        }
    }
}

#[test]
fn single_stage_never_changes_selection() {
    let mut world = make_world(1);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    press_and_settle(&mut world, entity, ShiftDirection::Right);
    press_and_settle(&mut world, entity, ShiftDirection::Left);

    assert_eq!(carousel(&world, entity).current_index, 0);
    assert_eq!(selected_stage(&world, entity), 0);
}

#[test]
fn two_stages_have_finite_slots_and_swap() {
    let mut world = make_world(2);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    let c = carousel(&world, entity).clone();
    for slot in c.slots.iter() {
        assert!(slot.x.is_finite() && slot.y.is_finite() && slot.z.is_finite());
    }

    press_and_settle(&mut world, entity, ShiftDirection::Right);
    assert_eq!(selected_stage(&world, entity), 1);
}

#[test]
fn idle_frame_without_gamepad_settles_without_rotating() {
    let mut world = make_world(3);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    let before = carousel(&world, entity).items.clone();

    let mut schedule = Schedule::default();
    schedule.add_systems(carousel_input_system);
    schedule.run(&mut world);

    let c = carousel(&world, entity);
    assert!(c.moving);
    assert_eq!(c.shift, ShiftDirection::Stop);
    assert_eq!(c.items, before);

    tick(&mut world);
    let c = carousel(&world, entity);
    assert!(!c.moving);
    assert_eq!(c.current_index, 0);
}

#[test]
fn gamepad_dpad_shifts_carousel() {
    let mut world = make_world(3);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    {
        let mut input = world.resource_mut::<InputState>();
        let mut pad = GamepadState::new(0);
        pad.dpad_right.just_pressed = true;
        input.gamepad = Some(pad);
    }
    tick(&mut world);
    clear_input(&mut world);
    assert_eq!(carousel(&world, entity).shift, ShiftDirection::Right);
    for _ in 0..MAX_FRAMES {
        if !carousel(&world, entity).moving {
            break;
        }
        tick(&mut world);
    }
    assert_eq!(carousel(&world, entity).current_index, 1);
}

#[test]
fn input_is_ignored_while_moving() {
    let mut world = make_world(5);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);

    world.resource_mut::<InputState>().shift_right.just_pressed = true;
    tick(&mut world);
    let after_first = carousel(&world, entity).items.clone();
    assert!(carousel(&world, entity).moving);

    // key still reported as pressed on the next frame
    tick(&mut world);
    assert_eq!(carousel(&world, entity).items, after_first);
}

#[test]
fn cursor_sound_plays_once_per_shift() {
    let mut world = make_world(4);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    drain_audio(&mut world);

    press_and_settle(&mut world, entity, ShiftDirection::Right);
    let cmds = drain_audio(&mut world);
    assert_eq!(
        cmds,
        vec![AudioCmd::PlayFx {
            id: CURSOR_FX_ID.into()
        }]
    );

    // idle frames stay silent
    tick(&mut world);
    tick(&mut world);
    assert!(drain_audio(&mut world).is_empty());
}

#[test]
fn selected_stage_scales_up_and_others_down() {
    let mut world = make_world(3);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    press_and_settle(&mut world, entity, ShiftDirection::Right);
    for _ in 0..200 {
        tick(&mut world);
    }

    let c = carousel(&world, entity).clone();
    for (i, item) in c.items.iter().enumerate() {
        let scale = world.get::<Scale3>(*item).unwrap();
        let target = c.scale_target(i);
        assert!(
            (scale.scale.x - target).abs() < 1e-3,
            "item {} scale {} target {}",
            i,
            scale.scale.x,
            target
        );
    }
    assert_eq!(c.scale_target(0), c.tuning.selected_scale);
}

#[test]
fn confirm_records_selected_stage_and_quits() {
    let mut world = make_world(5);
    world.add_observer(carousel_confirm_observer);
    let entity = spawn_carousel(&mut world);
    tick(&mut world);
    press_and_settle(&mut world, entity, ShiftDirection::Right);

    world.trigger(InputEvent {
        action: InputAction::Confirm,
    });

    assert_eq!(world.resource::<GameSession>().confirmed, Some(1));
    assert_eq!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Quitting)
    );
}

#[test]
fn confirm_is_ignored_mid_transition() {
    let mut world = make_world(5);
    world.add_observer(carousel_confirm_observer);
    spawn_carousel(&mut world);
    tick(&mut world);

    world.resource_mut::<InputState>().shift_right.just_pressed = true;
    tick(&mut world);

    world.trigger(InputEvent {
        action: InputAction::Confirm,
    });
    assert_eq!(world.resource::<GameSession>().confirmed, None);
    assert_eq!(world.resource::<NextGameState>().get(), NextGameStates::Unchanged);
}

#[test]
fn back_quits_without_confirming() {
    let mut world = make_world(3);
    world.add_observer(carousel_confirm_observer);
    spawn_carousel(&mut world);
    tick(&mut world);

    world.trigger(InputEvent {
        action: InputAction::Back,
    });

    assert_eq!(world.resource::<GameSession>().confirmed, None);
    assert_eq!(
        world.resource::<NextGameState>().get(),
        NextGameStates::Pending(GameStates::Quitting)
    );
}

#[test]
fn state_hooks_build_and_tear_down_stage_select() {
    let mut world = make_world(3);
    world.insert_resource(GameState::new());
    world.add_observer(observe_gamestate_change_event);

    let mut hooks = StateHooks::new();
    hooks.on_enter(
        GameStates::StageSelect,
        world.register_system(enter_stage_select),
    );
    hooks.on_exit(
        GameStates::StageSelect,
        world.register_system(exit_stage_select),
    );
    hooks.on_enter(GameStates::Quitting, world.register_system(quit_game));
    world.insert_resource(hooks);

    world.resource_mut::<NextGameState>().set(GameStates::StageSelect);
    world.trigger(GameStateChangedEvent {});
    world.flush();
    assert_eq!(world.resource::<GameState>().get(), GameStates::StageSelect);

    tick(&mut world);
    let mut query = world.query::<(Entity, &StageCarousel)>();
    let (entity, c) = query.single(&world).unwrap();
    assert_eq!(c.len(), 3);
    assert_eq!(c.cursor_sound.as_deref(), Some(CURSOR_FX_ID));
    let name_label = c.name_label;
    assert_eq!(label_text(&world, name_label), "Stage 0");

    drain_audio(&mut world);
    world.resource_mut::<NextGameState>().set(GameStates::Quitting);
    world.trigger(GameStateChangedEvent {});
    world.flush();

    // no music configured: nothing to stop, but loaded audio is released
    assert_eq!(
        drain_audio(&mut world),
        vec![AudioCmd::UnloadAllMusic, AudioCmd::UnloadAllFx]
    );

    assert!(world.get_entity(entity).is_err());
    assert!(world.get_entity(name_label.unwrap()).is_err());
    assert_eq!(world.query::<&StageModel>().iter(&world).count(), 0);
    assert!(world.resource::<GameSession>().quit_requested);
}
