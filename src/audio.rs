//! Background music toggle.
//!
//! On the web the greeting loops one remote audio track through an
//! `HtmlAudioElement`. Autoplay is attempted once at startup; browsers are
//! free to reject it, and a rejection is an expected outcome that simply
//! leaves the music paused until the user toggles it. On native targets the
//! toggle is inert state so the rest of the app stays platform-agnostic.

#[cfg(target_arch = "wasm32")]
use std::{cell::Cell, rc::Rc};

/// Looping track served alongside the page.
pub const TRACK_URL: &str = "assets/greeting-loop.mp3";

pub struct Music {
    #[cfg(target_arch = "wasm32")]
    element: Option<web_sys::HtmlAudioElement>,
    #[cfg(target_arch = "wasm32")]
    playing: Rc<Cell<bool>>,
    #[cfg(not(target_arch = "wasm32"))]
    playing: bool,
}

impl Music {
    /// Set up the track and attempt autoplay.
    #[cfg(target_arch = "wasm32")]
    pub fn new(src: &str) -> Self {
        use wasm_bindgen_futures::JsFuture;

        let playing = Rc::new(Cell::new(false));
        let element = match web_sys::HtmlAudioElement::new_with_src(src) {
            Ok(element) => {
                element.set_loop(true);
                Some(element)
            }
            Err(_) => {
                log::warn!("could not create audio element, music disabled");
                None
            }
        };
        if let Some(element) = &element {
            if let Ok(promise) = element.play() {
                let playing = playing.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => playing.set(true),
                        // Autoplay blocked; stay paused until toggled.
                        Err(_) => log::info!("autoplay rejected, waiting for manual toggle"),
                    }
                });
            }
        }
        Self { element, playing }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new(_src: &str) -> Self {
        Self { playing: false }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn toggle(&mut self) {
        let Some(element) = &self.element else { return };
        if self.playing.get() {
            element.pause().ok();
            self.playing.set(false);
        } else {
            let playing = self.playing.clone();
            if let Ok(promise) = element.play() {
                wasm_bindgen_futures::spawn_local(async move {
                    if wasm_bindgen_futures::JsFuture::from(promise).await.is_ok() {
                        playing.set(true);
                    }
                });
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
        log::info!(
            "music toggled {} (no audio backend on native builds)",
            if self.playing { "on" } else { "off" }
        );
    }

    #[cfg(target_arch = "wasm32")]
    pub fn is_playing(&self) -> bool {
        self.playing.get()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn is_playing(&self) -> bool {
        self.playing
    }
}
