//! Global audio manager.
//!
//! One background track and on-demand one-shot effects, shared with every
//! component through a context handle. Starts muted; the toggle is the only
//! thing that flips it. A missing or unloadable sound degrades to silence,
//! never to a panic.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlAudioElement;
use yew::prelude::*;
use yew_hooks::use_effect_once;

pub const BGM_VOLUME: f64 = 0.3;

/// Control surface of one loaded sound.
pub trait Playback {
    fn play(&self);
    fn pause(&self);
    fn stop(&self);
    fn set_volume(&self, volume: f64);
    fn set_looping(&self, looping: bool);
}

/// Produces playback handles from asset paths. `None` means the runtime
/// could not give us a playable handle; callers treat that as silence.
pub trait SoundEngine {
    fn load(&self, src: &str) -> Option<Rc<dyn Playback>>;
}

struct WebPlayback {
    element: HtmlAudioElement,
}

impl Playback for WebPlayback {
    fn play(&self) {
        if let Ok(promise) = self.element.play() {
            spawn_local(async move {
                // Rejected until the user has interacted with the page;
                // the toggle is a click, so swallow the stragglers.
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    fn pause(&self) {
        let _ = self.element.pause();
    }

    fn stop(&self) {
        let _ = self.element.pause();
        self.element.set_current_time(0.0);
        self.element.set_src("");
    }

    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }
}

pub struct WebSoundEngine;

impl SoundEngine for WebSoundEngine {
    fn load(&self, src: &str) -> Option<Rc<dyn Playback>> {
        HtmlAudioElement::new_with_src(src)
            .ok()
            .map(|element| Rc::new(WebPlayback { element }) as Rc<dyn Playback>)
    }
}

/// Mute state plus the lone background handle.
pub struct AudioCore {
    engine: Rc<dyn SoundEngine>,
    muted: bool,
    bgm: Option<Rc<dyn Playback>>,
}

impl AudioCore {
    pub fn new(engine: Rc<dyn SoundEngine>) -> Self {
        Self {
            engine,
            muted: true,
            bgm: None,
        }
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Flip muted/unmuted, lazily creating the looping background handle on
    /// first use. Once a handle exists, later calls reuse it even when they
    /// carry a different `src` — the first track wins for the life of the
    /// app. Without a handle (load failed) the mute state stays put.
    pub fn toggle_background(&mut self, src: &str) {
        if self.bgm.is_none() {
            if let Some(handle) = self.engine.load(src) {
                handle.set_looping(true);
                handle.set_volume(BGM_VOLUME);
                self.bgm = Some(handle);
            }
        }

        if let Some(bgm) = &self.bgm {
            if self.muted {
                bgm.play();
                self.muted = false;
            } else {
                bgm.pause();
                self.muted = true;
            }
        }
    }

    /// Fire-and-forget effect, independent of the background handle.
    /// Silent while muted.
    pub fn play_one_shot(&self, src: &str, volume: f64) {
        if self.muted {
            return;
        }
        if let Some(sound) = self.engine.load(src) {
            sound.set_looping(false);
            sound.set_volume(volume);
            sound.play();
        }
    }

    /// Stop and release the background handle.
    pub fn shutdown(&mut self) {
        if let Some(bgm) = self.bgm.take() {
            bgm.stop();
        }
    }
}

/// What consumers get out of [`use_audio`].
#[derive(Clone, PartialEq)]
pub struct AudioHandle {
    muted: bool,
    toggle: Callback<String>,
    one_shot: Callback<(String, f64)>,
}

impl AudioHandle {
    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn toggle_background(&self, src: &str) {
        self.toggle.emit(src.to_string());
    }

    pub fn play_one_shot(&self, src: &str, volume: f64) {
        self.one_shot.emit((src.to_string(), volume));
    }

    /// Inert handle for components rendered outside the provider: always
    /// muted, controls do nothing.
    fn detached() -> Self {
        Self {
            muted: true,
            toggle: Callback::noop(),
            one_shot: Callback::noop(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AudioProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AudioProvider)]
pub fn audio_provider(props: &AudioProviderProps) -> Html {
    let muted = use_state(|| true);
    let core = use_mut_ref(|| AudioCore::new(Rc::new(WebSoundEngine)));

    {
        let core = core.clone();
        use_effect_once(move || move || core.borrow_mut().shutdown());
    }

    let toggle = {
        let core = core.clone();
        let muted = muted.clone();
        Callback::from(move |src: String| {
            let mut core = core.borrow_mut();
            core.toggle_background(&src);
            muted.set(core.muted());
        })
    };

    let one_shot = {
        let core = core.clone();
        Callback::from(move |(src, volume): (String, f64)| {
            core.borrow().play_one_shot(&src, volume);
        })
    };

    let handle = AudioHandle {
        muted: *muted,
        toggle,
        one_shot,
    };

    html! {
        <ContextProvider<AudioHandle> context={handle}>
            { for props.children.iter() }
        </ContextProvider<AudioHandle>>
    }
}

#[hook]
pub fn use_audio() -> AudioHandle {
    use_context::<AudioHandle>().unwrap_or_else(AudioHandle::detached)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeSound {
        plays: Cell<u32>,
        paused: Cell<bool>,
        stopped: Cell<bool>,
        looping: Cell<bool>,
        volume: Cell<f64>,
    }

    impl Playback for FakeSound {
        fn play(&self) {
            self.plays.set(self.plays.get() + 1);
            self.paused.set(false);
        }
        fn pause(&self) {
            self.paused.set(true);
        }
        fn stop(&self) {
            self.stopped.set(true);
        }
        fn set_volume(&self, volume: f64) {
            self.volume.set(volume);
        }
        fn set_looping(&self, looping: bool) {
            self.looping.set(looping);
        }
    }

    #[derive(Default)]
    struct FakeEngine {
        loads: RefCell<Vec<String>>,
        sounds: RefCell<Vec<Rc<FakeSound>>>,
    }

    impl SoundEngine for FakeEngine {
        fn load(&self, src: &str) -> Option<Rc<dyn Playback>> {
            self.loads.borrow_mut().push(src.to_string());
            let sound = Rc::new(FakeSound::default());
            self.sounds.borrow_mut().push(sound.clone());
            Some(sound)
        }
    }

    struct DeadEngine;

    impl SoundEngine for DeadEngine {
        fn load(&self, _src: &str) -> Option<Rc<dyn Playback>> {
            None
        }
    }

    fn core_with_fake() -> (AudioCore, Rc<FakeEngine>) {
        let engine = Rc::new(FakeEngine::default());
        (AudioCore::new(engine.clone()), engine)
    }

    #[test]
    fn toggle_twice_round_trips_mute_and_keeps_the_handle() {
        let (mut core, engine) = core_with_fake();
        assert!(core.muted());

        core.toggle_background("bgm.mp3");
        assert!(!core.muted());
        let first = core.bgm.clone().unwrap();

        core.toggle_background("bgm.mp3");
        assert!(core.muted());
        assert!(Rc::ptr_eq(&first, core.bgm.as_ref().unwrap()));
        assert_eq!(engine.loads.borrow().len(), 1);

        let sound = &engine.sounds.borrow()[0];
        assert!(sound.looping.get());
        assert_eq!(sound.volume.get(), BGM_VOLUME);
        assert!(sound.paused.get());
    }

    #[test]
    fn later_toggle_with_different_src_keeps_the_first_track() {
        let (mut core, engine) = core_with_fake();
        core.toggle_background("first.mp3");
        core.toggle_background("second.mp3");
        core.toggle_background("third.mp3");
        assert_eq!(*engine.loads.borrow(), vec!["first.mp3".to_string()]);
    }

    #[test]
    fn one_shot_while_muted_never_touches_the_engine() {
        let (core, engine) = core_with_fake();
        core.play_one_shot("blip.mp3", 0.5);
        assert!(engine.loads.borrow().is_empty());
    }

    #[test]
    fn one_shot_while_unmuted_plays_once_without_looping() {
        let (mut core, engine) = core_with_fake();
        core.toggle_background("bgm.mp3");
        core.play_one_shot("blip.mp3", 0.5);

        let sounds = engine.sounds.borrow();
        let blip = &sounds[1];
        assert_eq!(blip.plays.get(), 1);
        assert!(!blip.looping.get());
        assert_eq!(blip.volume.get(), 0.5);
    }

    #[test]
    fn failed_load_leaves_mute_state_untouched() {
        let mut core = AudioCore::new(Rc::new(DeadEngine));
        core.toggle_background("missing.mp3");
        assert!(core.muted());
        assert!(core.bgm.is_none());
    }

    #[test]
    fn shutdown_stops_and_releases_the_background_handle() {
        let (mut core, engine) = core_with_fake();
        core.toggle_background("bgm.mp3");
        core.shutdown();
        assert!(core.bgm.is_none());
        assert!(engine.sounds.borrow()[0].stopped.get());
    }
}
