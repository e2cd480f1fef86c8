use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::carousel::StageCarousel;
use crate::components::dynamictext::DynamicText;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale3;
use crate::components::screenposition::ScreenPosition;
use crate::components::stagemodel::StageModel;
use crate::components::worldposition::WorldPosition;
use crate::resources::camera3d::Camera3DRes;
use crate::resources::debugmode::DebugMode;
use crate::resources::modelstore::ModelStore;

const BACKGROUND: Color = Color::new(24, 24, 40, 255);
/// Edge of the placeholder cube drawn for stages without a model.
const PLACEHOLDER_SIZE: f32 = 8.0;
const PLACEHOLDER_PALETTE: [Color; 6] = [
    Color::new(230, 41, 55, 255),
    Color::new(0, 121, 241, 255),
    Color::new(0, 228, 48, 255),
    Color::new(253, 249, 0, 255),
    Color::new(200, 122, 255, 255),
    Color::new(255, 161, 0, 255),
];

/// Color of the placeholder cube for a stage.
pub fn placeholder_color(stage_id: usize) -> Color {
    PLACEHOLDER_PALETTE[stage_id % PLACEHOLDER_PALETTE.len()]
}

/// Draws one frame: stage instances in 3D, then the labels, then the debug
/// overlay when [`DebugMode`] is present.
///
/// Stages whose model failed to load are drawn as colored cubes.
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    models: NonSend<ModelStore>,
    camera: Option<Res<Camera3DRes>>,
    debug: Option<Res<DebugMode>>,
    stages: Query<(&StageModel, &WorldPosition, &Scale3, &Rotation)>,
    labels: Query<(&DynamicText, &ScreenPosition)>,
    carousels: Query<&StageCarousel>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(BACKGROUND);

    if let Some(camera) = camera {
        let mut d3 = d.begin_mode3D(camera.0);
        for (stage, position, scale, rotation) in stages.iter() {
            match models.get(&stage.model_key) {
                Some(model) => d3.draw_model_ex(
                    model,
                    position.pos,
                    Vector3::new(0.0, 1.0, 0.0),
                    rotation.yaw_degrees,
                    scale.scale,
                    Color::WHITE,
                ),
                None => {
                    let (w, h, l) = (
                        PLACEHOLDER_SIZE * scale.scale.x,
                        PLACEHOLDER_SIZE * scale.scale.y,
                        PLACEHOLDER_SIZE * scale.scale.z,
                    );
                    d3.draw_cube(position.pos, w, h, l, placeholder_color(stage.stage_id));
                    d3.draw_cube_wires(position.pos, w, h, l, Color::BLACK);
                }
            }
        }

        if debug.as_ref().is_some_and(|dbg| dbg.show_slots) {
            for carousel in carousels.iter() {
                for (i, slot) in carousel.slots.iter().enumerate() {
                    let color = if i == 0 { Color::GOLD } else { Color::RED };
                    d3.draw_sphere(*slot, 1.0, color);
                }
            }
        }
    }

    for (text, position) in labels.iter() {
        let x = position.pos.x - text.size().x / 2.0;
        d.draw_text(
            &text.content,
            x as i32,
            position.pos.y as i32,
            text.font_size as i32,
            text.color,
        );
    }

    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG MODE (press F11 to toggle) | FPS: {}", fps),
            10,
            10,
            10,
            Color::RAYWHITE,
        );
        for carousel in carousels.iter() {
            let text = format!(
                "index: {}/{} shift: {:?} moving: {}",
                carousel.current_index,
                carousel.len(),
                carousel.shift,
                carousel.moving
            );
            d.draw_text(&text, 10, 30, 10, Color::RAYWHITE);
        }
    }
}
