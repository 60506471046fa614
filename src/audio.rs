//! Audio Cues
//!
//! Pencil sounds played when tasks are checked or unchecked. Playback is
//! best-effort: failures are logged and never block a state change.

use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlAudioElement;

use crate::config::AudioConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Check,
    Uncheck,
}

impl Cue {
    /// Cue for a task whose completion just became `completed`.
    pub fn for_completion(completed: bool) -> Self {
        if completed {
            Cue::Check
        } else {
            Cue::Uncheck
        }
    }

    fn name(self) -> &'static str {
        match self {
            Cue::Check => "check",
            Cue::Uncheck => "uncheck",
        }
    }
}

/// Owns the two audio elements for the lifetime of the app component.
pub struct CuePlayer {
    check: Option<HtmlAudioElement>,
    uncheck: Option<HtmlAudioElement>,
}

impl CuePlayer {
    pub fn new(config: &AudioConfig) -> Self {
        let check = load(&config.check_src);
        if let Some(audio) = &check {
            audio.set_volume(config.check_volume);
        }
        Self {
            check,
            uncheck: load(&config.uncheck_src),
        }
    }

    pub fn play(&self, cue: Cue) {
        let audio = match cue {
            Cue::Check => &self.check,
            Cue::Uncheck => &self.uncheck,
        };
        let Some(audio) = audio else {
            return;
        };
        match audio.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(err) = JsFuture::from(promise).await {
                    tracing::warn!(cue = cue.name(), error = ?err, "audio playback rejected");
                }
            }),
            Err(err) => tracing::warn!(cue = cue.name(), error = ?err, "audio playback failed"),
        }
    }

    /// Stop playback and release the media resources.
    pub fn dispose(&self) {
        for audio in [&self.check, &self.uncheck].into_iter().flatten() {
            if let Err(err) = audio.pause() {
                tracing::warn!(error = ?err, "failed to pause audio");
            }
            audio.set_src("");
        }
    }
}

fn load(src: &str) -> Option<HtmlAudioElement> {
    HtmlAudioElement::new_with_src(src)
        .map_err(|err| tracing::warn!(src, error = ?err, "failed to create audio element"))
        .ok()
}
