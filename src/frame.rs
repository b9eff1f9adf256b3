use crate::canvas::CanvasSurface;
use crate::core::{Display, FrameHandle, FrameScheduler};
use anyhow::anyhow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedDisplay = Rc<RefCell<Display<CanvasSurface, AnimationFrames>>>;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`FrameScheduler`] over `requestAnimationFrame`.
///
/// Every request re-arms the same tick closure, which is installed by
/// [`create_display`] once the display exists.
pub struct AnimationFrames {
    window: web::Window,
    tick: TickSlot,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let Some(cb) = tick.as_ref() else {
            log::error!("frame requested before tick closure was installed");
            return None;
        };
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("requestAnimationFrame error: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Build a display drawing on `surface` and driven by animation frames.
///
/// The tick closure only holds a weak reference, so dropping the last
/// `SharedDisplay` ends the loop instead of leaking it.
pub fn create_display(surface: CanvasSurface) -> anyhow::Result<SharedDisplay> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let frames = AnimationFrames {
        window,
        tick: tick.clone(),
    };
    let display: SharedDisplay = Rc::new(RefCell::new(Display::new(surface, frames)));

    let weak = Rc::downgrade(&display);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(display) = weak.upgrade() {
            display.borrow_mut().frame();
        }
    }) as Box<dyn FnMut()>));

    Ok(display)
}
