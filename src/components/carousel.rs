//! Stage carousel component.
//!
//! A [`StageCarousel`] owns a circular array of stage instance entities and a
//! table of slot positions of the same length. Array position `i` always
//! targets slot `i`; slot 0 is the selected (emphasized) slot. A shift
//! rotates the array by one and the motion system eases every instance toward
//! its new slot.
//!
//! See [`crate::systems::carousel`] for the systems driving it.

use bevy_ecs::prelude::{Component, Entity};
use raylib::prelude::Vector3;

/// Default easing rate for positions and scales (per second).
pub const DEFAULT_SHIFT_SPEED: f32 = 5.0;
/// Scale of the instance in the selected slot.
pub const DEFAULT_SELECTED_SCALE: f32 = 3.0;
/// Scale of every other instance.
pub const DEFAULT_UNSELECTED_SCALE: f32 = 1.5;
/// A shift completes once every instance is closer than this to its slot.
pub const DEFAULT_SETTLE_DISTANCE: f32 = 0.5;
/// Turn rate of spinning stage models, in degrees per second.
pub const DEFAULT_SPIN_SPEED: f32 = 30.0;

/// Direction of the transition in progress.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    #[default]
    Stop,
    Right,
    Left,
}

impl ShiftDirection {
    /// Signed index step applied when the transition settles.
    pub fn step(self) -> isize {
        match self {
            ShiftDirection::Stop => 0,
            ShiftDirection::Right => 1,
            ShiftDirection::Left => -1,
        }
    }
}

/// World-space geometry of the carousel.
#[derive(Copy, Clone, Debug)]
pub struct CarouselLayout {
    /// Position of slot 0.
    pub selected: Vector3,
    /// Position of slot 1.
    pub rail_start: Vector3,
    /// Position of the last slot.
    pub rail_end: Vector3,
}

// raylib is right-handed: with the camera looking down +Z, screen right is -X.
impl Default for CarouselLayout {
    fn default() -> Self {
        Self {
            selected: Vector3::new(0.0, -30.0, 50.0),
            rail_start: Vector3::new(-75.0, -20.0, 75.0),
            rail_end: Vector3::new(75.0, -20.0, 75.0),
        }
    }
}

impl CarouselLayout {
    /// Build the slot table for `count` stages.
    ///
    /// Slot 0 is [`selected`](Self::selected); the remaining `count - 1`
    /// slots are spread evenly from `rail_start` to `rail_end`. A rail with a
    /// single slot puts it at `rail_start`.
    pub fn build_slots(&self, count: usize) -> Vec<Vector3> {
        let mut slots = Vec::with_capacity(count);
        if count == 0 {
            return slots;
        }
        slots.push(self.selected);

        let rail_slots = count - 1;
        let intervals = rail_slots.saturating_sub(1);
        let step = if intervals == 0 {
            Vector3::new(0.0, 0.0, 0.0)
        } else {
            let n = intervals as f32;
            Vector3::new(
                (self.rail_end.x - self.rail_start.x) / n,
                (self.rail_end.y - self.rail_start.y) / n,
                (self.rail_end.z - self.rail_start.z) / n,
            )
        };
        for k in 0..rail_slots {
            let k = k as f32;
            slots.push(Vector3::new(
                self.rail_start.x + step.x * k,
                self.rail_start.y + step.y * k,
                self.rail_start.z + step.z * k,
            ));
        }
        slots
    }
}

/// Rates and thresholds of the carousel animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CarouselTuning {
    pub shift_speed: f32,
    pub selected_scale: f32,
    pub default_scale: f32,
    pub settle_distance: f32,
}

impl Default for CarouselTuning {
    fn default() -> Self {
        Self {
            shift_speed: DEFAULT_SHIFT_SPEED,
            selected_scale: DEFAULT_SELECTED_SCALE,
            default_scale: DEFAULT_UNSELECTED_SCALE,
            settle_distance: DEFAULT_SETTLE_DISTANCE,
        }
    }
}

/// The stage selection carousel.
///
/// `items` is empty until the spawn system has instantiated the stages.
#[derive(Component, Clone, Debug)]
pub struct StageCarousel {
    pub layout: CarouselLayout,
    pub slots: Vec<Vector3>,
    pub items: Vec<Entity>,
    /// Logically selected stage entry. Only changes when a shift settles.
    pub current_index: usize,
    pub shift: ShiftDirection,
    pub moving: bool,
    pub tuning: CarouselTuning,
    /// Label showing the selected stage name.
    pub name_label: Option<Entity>,
    /// Label showing the selected stage clear time.
    pub clear_time_label: Option<Entity>,
    /// Sound effect id played on every accepted shift.
    pub cursor_sound: Option<String>,
}

impl StageCarousel {
    pub fn new(layout: CarouselLayout, tuning: CarouselTuning) -> Self {
        Self {
            layout,
            slots: Vec::new(),
            items: Vec::new(),
            current_index: 0,
            shift: ShiftDirection::Stop,
            moving: false,
            tuning,
            name_label: None,
            clear_time_label: None,
            cursor_sound: None,
        }
    }
    pub fn with_labels(mut self, name: Entity, clear_time: Entity) -> Self {
        self.name_label = Some(name);
        self.clear_time_label = Some(clear_time);
        self
    }
    pub fn with_cursor_sound(mut self, id: impl Into<String>) -> Self {
        self.cursor_sound = Some(id.into());
        self
    }

    /// Number of stages held by the carousel.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Entity currently in the selected slot.
    pub fn selected_item(&self) -> Option<Entity> {
        self.items.first().copied()
    }

    /// Rotate the instance array by one position and start a transition.
    ///
    /// Right moves every entity one slot toward the front
    /// (`new[i] = old[i + 1]`), Left one slot toward the back
    /// (`new[i] = old[i - 1]`). Stop only marks the carousel as moving.
    pub fn shift(&mut self, direction: ShiftDirection) {
        self.moving = true;
        self.shift = direction;
        if self.items.is_empty() {
            return;
        }
        match direction {
            ShiftDirection::Right => self.items.rotate_left(1),
            ShiftDirection::Left => self.items.rotate_right(1),
            ShiftDirection::Stop => {}
        }
    }

    /// Finish the transition: advance the current index and stop moving.
    pub fn settle(&mut self) {
        self.current_index = wrap_index(self.current_index, self.shift.step(), self.items.len());
        self.moving = false;
        self.shift = ShiftDirection::Stop;
    }

    /// Scale target for the entity at array position `i`.
    pub fn scale_target(&self, i: usize) -> f32 {
        if i == 0 {
            self.tuning.selected_scale
        } else {
            self.tuning.default_scale
        }
    }
}

/// `(index + step) mod len`, always in `[0, len)`; returns 0 for `len == 0`.
pub fn wrap_index(index: usize, step: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    ((index as isize + step).rem_euclid(len)) as usize
}
