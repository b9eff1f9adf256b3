use crate::constants::SEQUENCE_TICK_MS;
use crate::core::{Cue, Timeline, BURST_COUNT};
use crate::dom::{self, Interval};
use crate::frame::SharedDisplay;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Everything the reveal cues act on.
pub struct Stage {
    pub document: web::Document,
    pub webcam: web::HtmlVideoElement,
    pub main_video: web::HtmlVideoElement,
    pub canvas: web::HtmlCanvasElement,
    pub display: SharedDisplay,
}

impl Stage {
    fn apply(&self, cue: Cue) {
        log::info!("cue {:?}", cue);
        match cue {
            Cue::FlashOn => overlay::flash_on(&self.document),
            Cue::FlashOff => overlay::flash_off(&self.document),
            Cue::FadeOutCamera => dom::fade_to(&self.webcam, 0.0),
            Cue::StartFireworks => self.display.borrow_mut().start_display(BURST_COUNT),
            Cue::FadeOutFireworks => dom::fade_to(&self.canvas, 0.0),
            Cue::StopFireworks => self.display.borrow_mut().stop_display(),
            Cue::PlayVideo => self.play_video(),
        }
    }

    fn play_video(&self) {
        dom::fade_to(&self.main_video, 1.0);
        self.main_video.set_muted(true);
        match self.main_video.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    log::error!("Video play error: {:?}", e);
                }
            }),
            Err(e) => log::error!("Video play error: {:?}", e),
        }
    }
}

/// Run the reveal timeline against `stage`, measured from now.
///
/// A single interval timer feeds elapsed time into the timeline and is
/// dropped as soon as the last cue has fired.
pub fn run_reveal(stage: Stage) -> anyhow::Result<()> {
    let started = Instant::now();
    let mut timeline = Timeline::reveal();
    let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));

    let ticker_tick = ticker.clone();
    let interval = Interval::new(SEQUENCE_TICK_MS, move || {
        let due: Vec<Cue> = timeline.advance(started.elapsed()).collect();
        for cue in due {
            stage.apply(cue);
        }
        if timeline.is_finished() {
            log::info!("reveal finished after {:?}", started.elapsed());
            ticker_tick.borrow_mut().take();
        }
    })?;
    *ticker.borrow_mut() = Some(interval);
    Ok(())
}
