//! Audio session lifecycle hook.
//!
//! Game sessions own an [`AudioSession`] and drive it on lifecycle
//! transitions: started on round start/reset, stopped on completion.
//! The embedding application supplies the implementation; synthesis and
//! playback are outside the core.

/// Explicitly owned audio lifecycle, injected by the embedding
/// application. Replaces module-level shared audio state.
pub trait AudioSession: Send {
    fn start(&mut self);
    fn stop(&mut self);
}

/// No-op implementation used when a game runs without sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSession for NullAudio {
    fn start(&mut self) {}

    fn stop(&mut self) {}
}
