use crate::geometry::describe;
use crate::options::WebTapOptions;
use crate::platform_error;
use std::time::Duration;
use tapwire_core::{TapError, TouchNotification, TouchPhase, TouchPoint, TouchSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, TouchEvent, TouchList, Window};

const PHASES: [TouchPhase; 4] = [
    TouchPhase::Start,
    TouchPhase::Move,
    TouchPhase::End,
    TouchPhase::Cancel,
];

type TouchListener = Closure<dyn FnMut(TouchEvent)>;

struct Ticker {
    window: Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

/// Feeds DOM touch events into a [`TouchSource`] keyed by [`Element`].
///
/// The listeners stay installed for as long as this value lives.
pub struct WebTouchSource {
    source: TouchSource<Element>,
    host: EventTarget,
    listeners: Vec<(TouchPhase, TouchListener)>,
    ticker: Option<Ticker>,
}

impl WebTouchSource {
    /// Listens for touch events bubbling up to `host`.
    pub fn attach(host: &EventTarget, options: &WebTapOptions) -> Result<Self, TapError> {
        let source = TouchSource::new();
        let mut listeners = Vec::with_capacity(PHASES.len());

        for phase in PHASES {
            let source = source.clone();
            let page_coordinates = options.page_coordinates;
            let closure = Closure::wrap(Box::new(move |event: TouchEvent| {
                let Some(target) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                else {
                    log::trace!("{} without an element target", phase.event_name());
                    return;
                };
                let points = touch_points(&event.touches(), page_coordinates);
                if matches!(phase, TouchPhase::Start | TouchPhase::Move) && points.is_empty() {
                    log::trace!(
                        "{} on {} carried no contacts",
                        phase.event_name(),
                        describe(&target)
                    );
                    return;
                }
                source.dispatch(&TouchNotification::new(phase, target, points));
            }) as Box<dyn FnMut(_)>);

            host.add_event_listener_with_callback(
                phase.event_name(),
                closure.as_ref().unchecked_ref(),
            )
            .map_err(|err| platform_error(phase.event_name(), err))?;
            listeners.push((phase, closure));
        }

        log::debug!("touch listeners attached");
        Ok(Self {
            source,
            host: host.clone(),
            listeners,
            ticker: None,
        })
    }

    /// Listens on `document.body`.
    pub fn attach_to_body(options: &WebTapOptions) -> Result<Self, TapError> {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .ok_or_else(|| TapError::Platform {
                reason: "document has no body".to_string(),
            })?;
        Self::attach(&body, options)
    }

    pub fn source(&self) -> &TouchSource<Element> {
        &self.source
    }

    /// Emits the current time on the tick stream every `every`, so attempt
    /// timeouts can fire. Replaces any earlier ticker.
    pub fn drive_ticks(&mut self, every: Duration) -> Result<(), TapError> {
        self.ticker = None;
        let window = web_sys::window().ok_or_else(|| TapError::Platform {
            reason: "no global window exists".to_string(),
        })?;
        let source = self.source.clone();
        let callback = Closure::wrap(Box::new(move || {
            source.tick(web_time::Instant::now());
        }) as Box<dyn FnMut()>);
        let millis = i32::try_from(every.as_millis()).unwrap_or(i32::MAX);
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            )
            .map_err(|err| platform_error("setInterval", err))?;
        self.ticker = Some(Ticker {
            window,
            handle,
            _callback: callback,
        });
        Ok(())
    }
}

impl Drop for WebTouchSource {
    fn drop(&mut self) {
        for (phase, listener) in self.listeners.drain(..) {
            let _ = self.host.remove_event_listener_with_callback(
                phase.event_name(),
                listener.as_ref().unchecked_ref(),
            );
        }
        log::debug!("touch listeners detached");
    }
}

fn touch_points(touches: &TouchList, page_coordinates: bool) -> Vec<TouchPoint> {
    (0..touches.length())
        .filter_map(|index| touches.item(index))
        .map(|touch| {
            if page_coordinates {
                TouchPoint::new(touch.page_x() as f32, touch.page_y() as f32)
            } else {
                TouchPoint::new(touch.client_x() as f32, touch.client_y() as f32)
            }
        })
        .collect()
}
