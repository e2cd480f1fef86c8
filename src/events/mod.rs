//! Event types and observers.
//!
//! Submodules:
//! - [`audio`] – commands and replies exchanged with the audio thread
//! - [`gamestate`] – state transition notifications for the application flow
//! - [`input`] – confirm/back menu actions
//! - [`switchdebug`] – toggle the debug overlay on/off
pub mod audio;
pub mod gamestate;
pub mod input;
pub mod switchdebug;
