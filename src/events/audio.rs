use bevy_ecs::message::Message;

/// Commands sent *to* the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    LoadMusic { id: String, path: String },
    PlayMusic { id: String, looped: bool },
    StopMusic { id: String },
    UnloadAllMusic,
    LoadFx { id: String, path: String },
    PlayFx { id: String },
    UnloadAllFx,
    Shutdown,
}

/// Replies sent *back* from the audio thread.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    MusicLoaded { id: String },
    MusicLoadFailed { id: String, error: String },
    MusicPlayStarted { id: String },
    MusicStopped { id: String },
    MusicFinished { id: String },
    MusicUnloadedAll,
    FxLoaded { id: String },
    FxLoadFailed { id: String, error: String },
    FxUnloadedAll,
}
