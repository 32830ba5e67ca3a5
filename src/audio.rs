//! Speech output for pickup announcements
//!
//! The simulation announces every collected pickup through a `Speaker`.
//! Speech is best effort: it never blocks a tick and every failure is
//! swallowed here, so gameplay cannot observe it.

use std::process::{Command, Stdio};

/// Capability to say a short piece of text
pub trait Speaker {
    /// Fire and forget; must return immediately
    fn speak(&self, text: &str);
}

/// Speaker that does nothing (default)
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&self, _text: &str) {}
}

/// Speaker backed by the platform's text-to-speech command
#[derive(Debug, Clone)]
pub struct SystemSpeaker {
    program: Option<&'static str>,
    muted: bool,
}

impl Default for SystemSpeaker {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemSpeaker {
    pub fn new() -> Self {
        let program = Self::platform_program();
        if program.is_none() {
            log::warn!("No speech command for this platform - speech disabled");
        }
        Self {
            program,
            muted: false,
        }
    }

    #[cfg(target_os = "macos")]
    fn platform_program() -> Option<&'static str> {
        Some("say")
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    fn platform_program() -> Option<&'static str> {
        Some("espeak")
    }

    #[cfg(not(unix))]
    fn platform_program() -> Option<&'static str> {
        None
    }

    /// Mute/unmute speech
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_available(&self) -> bool {
        self.program.is_some() && !self.muted
    }
}

impl Speaker for SystemSpeaker {
    fn speak(&self, text: &str) {
        let Some(program) = self.program else { return };
        if self.muted {
            return;
        }

        let text = text.to_owned();
        // The child is reaped off-thread so the caller never waits on it
        let spawned = std::thread::Builder::new()
            .name("speech".into())
            .spawn(move || {
                let child = Command::new(program)
                    .arg(&text)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn();
                match child {
                    Ok(mut child) => {
                        if let Err(e) = child.wait() {
                            log::debug!("Speech process failed: {e}");
                        }
                    }
                    Err(e) => log::debug!("Failed to start {program}: {e}"),
                }
            });
        if let Err(e) = spawned {
            log::debug!("Failed to spawn speech thread: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silent_speaker_is_noop() {
        SilentSpeaker.speak("Apple");
    }

    #[test]
    fn test_muted_speaker_unavailable() {
        let mut speaker = SystemSpeaker::new();
        speaker.set_muted(true);
        assert!(!speaker.is_available());
        // Must return without doing anything
        speaker.speak("Banana");
    }

    #[test]
    fn test_missing_program_is_swallowed() {
        let speaker = SystemSpeaker {
            program: Some("ledge-runner-no-such-tts"),
            muted: false,
        };
        speaker.speak("Cherry");
    }
}
