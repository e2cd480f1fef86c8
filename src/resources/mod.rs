//! ECS resources made available to systems.
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread
//! - `camera3d` – shared 3D camera looking at the carousel
//! - `debugmode` – presence toggles the debug overlay
//! - `gameconfig` – window settings, carousel tuning and asset paths
//! - `gamestate` – authoritative and pending high-level game state
//! - `input` – per-frame keyboard and gamepad state
//! - `modelstore` – loaded stage models keyed by string IDs
//! - `savedata` – per-stage clear times
//! - `session` – selected and confirmed stage, quit request
//! - `stagedatabase` – ordered list of selectable stages
//! - `statehooks` – systems run on entering and leaving game states
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera3d;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod modelstore;
pub mod savedata;
pub mod session;
pub mod stagedatabase;
pub mod statehooks;
pub mod worldtime;
