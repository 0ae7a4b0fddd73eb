use crate::{
    config::UiConfig,
    logging::{log_event, LogLevel},
    reveal::{parse_progress, skill_bar_schedule, skill_timer_key, RevealTracker, SKILL_GROUP_CLASS},
    scroll::{anchor_scroll_top, anchor_target, classify_sections, sample_offset, scroll_chrome, SectionDescriptor},
    state::{UiAction, UiState},
    timers::KeyedSlots,
};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use js_sys::{Array, Reflect};
use serde_json::json;
use std::{
    cell::RefCell,
    collections::BTreeSet,
    rc::Rc,
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};
use yew::functional::UseReducerDispatcher;

const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const LAZY_KEY_ATTR: &str = "data-lazy-key";
const LOADER_TIMER_KEY: &str = "loader";
const CERT_CLEAR_TIMER_KEY: &str = "cert-clear";

#[derive(Default)]
pub struct TimerSet {
    timers: KeyedSlots<Timeout>,
}

impl TimerSet {
    pub fn schedule(&mut self, key: impl Into<String>, delay_ms: u32, callback: impl FnOnce() + 'static) {
        self.timers.replace(key, Timeout::new(delay_ms, callback));
    }

    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }
}

pub type SharedTimers = Rc<RefCell<TimerSet>>;

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn read_config() -> UiConfig {
    let root = document().and_then(|document| document.document_element());
    UiConfig::from_lookup(|name| root.as_ref().and_then(|root| root.get_attribute(name)))
}

fn document_is_complete(document: &Document) -> bool {
    Reflect::get(document.as_ref(), &JsValue::from_str("readyState"))
        .ok()
        .and_then(|value| value.as_string())
        .as_deref()
        == Some("complete")
}

fn read_sections(document: &Document) -> Vec<SectionDescriptor> {
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionDescriptor::new(section.id(), section.offset_top(), section.offset_height())
        })
        .collect()
}

fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

pub fn scroll_to_anchor(href: &str, config: &UiConfig) {
    let Some(id) = anchor_target(href) else {
        return;
    };

    let target = document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok());

    if let Some(target) = target {
        smooth_scroll_to(anchor_scroll_top(target.offset_top(), config));
    }
}

pub fn scroll_to_top() {
    smooth_scroll_to(0.0);
}

pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|document| document.body()) else {
        return;
    };

    let style = body.style();
    let _ = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
}

pub fn close_certificate(
    dispatcher: &UseReducerDispatcher<UiState>,
    timers: &SharedTimers,
    config: &UiConfig,
) {
    dispatcher.dispatch(UiAction::CertClosed);

    let clear = dispatcher.clone();
    timers
        .borrow_mut()
        .schedule(CERT_CLEAR_TIMER_KEY, config.cert_clear_delay_ms, move || {
            clear.dispatch(UiAction::CertSourceCleared)
        });
}

struct ScrollSampler {
    config: UiConfig,
    dispatcher: UseReducerDispatcher<UiState>,
    last_active: RefCell<BTreeSet<String>>,
}

impl ScrollSampler {
    fn sample(&self) {
        let Some(win) = window() else {
            return;
        };
        let Some(document) = win.document() else {
            return;
        };

        let offset = sample_offset(win.scroll_y().unwrap_or(0.0));
        let sections = read_sections(&document);
        let active = classify_sections(offset, &sections, self.config.nav_activation_margin);

        if *self.last_active.borrow() != active {
            log_event(
                self.config.log_level,
                LogLevel::Debug,
                "active_sections_changed",
                json!({ "offset": offset, "active": active.iter().collect::<Vec<_>>() }),
            );
            self.last_active.replace(active.clone());
        }

        self.dispatcher.dispatch(UiAction::ScrollSampled {
            chrome: scroll_chrome(offset, &self.config),
            active,
        });
    }
}

struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    fn new(
        options: &IntersectionObserverInit,
        mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(&entry, &observer);
                    }
                }
            },
        );
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    fn observe_all(&self, document: &Document, selector: &str) -> u32 {
        let Ok(nodes) = document.query_selector_all(selector) else {
            return 0;
        };

        let mut observed = 0;
        for element in (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
        {
            self.observer.observe(&element);
            observed += 1;
        }
        observed
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn schedule_skill_bars(
    group: &Element,
    group_key: &str,
    config: &UiConfig,
    dispatcher: &UseReducerDispatcher<UiState>,
    timers: &SharedTimers,
) {
    let Ok(bars) = group.query_selector_all(".skill-progress") else {
        return;
    };

    let progress: Vec<Option<u8>> = (0..bars.length())
        .filter_map(|index| bars.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|bar| parse_progress(bar.get_attribute("data-progress").as_deref()))
        .collect();
    let schedule = skill_bar_schedule(&progress, config.skill_stagger_ms);

    log_event(
        config.log_level,
        LogLevel::Debug,
        "skill_bars_scheduled",
        json!({ "group": group_key, "bars": schedule.len() }),
    );

    let mut timers = timers.borrow_mut();
    for fill in schedule {
        let dispatcher = dispatcher.clone();
        let group = group_key.to_string();
        timers.schedule(skill_timer_key(group_key, fill.index), fill.delay_ms, move || {
            dispatcher.dispatch(UiAction::BarFilled {
                group,
                index: fill.index,
                percent: fill.percent,
            })
        });
    }
}

fn reveal_watcher(
    document: &Document,
    config: &UiConfig,
    dispatcher: &UseReducerDispatcher<UiState>,
    timers: &SharedTimers,
) -> Result<VisibilityWatcher, JsValue> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin());

    let mut tracker = RevealTracker::default();
    let config_for_entries = config.clone();
    let dispatcher = dispatcher.clone();
    let timers = timers.clone();

    let watcher = VisibilityWatcher::new(&options, move |entry, observer| {
        let target = entry.target();
        let Some(key) = target.get_attribute(REVEAL_KEY_ATTR) else {
            return;
        };

        let is_skill_group = target.class_list().contains(SKILL_GROUP_CLASS);
        let outcome = tracker.observe(&key, entry.is_intersecting(), is_skill_group);

        if outcome.newly_revealed {
            observer.unobserve(&target);
            dispatcher.dispatch(UiAction::Revealed(key.clone()));
            log_event(
                config_for_entries.log_level,
                LogLevel::Debug,
                "element_revealed",
                json!({ "key": key }),
            );
        }

        if outcome.animate_skill_bars {
            schedule_skill_bars(&target, &key, &config_for_entries, &dispatcher, &timers);
        }
    })?;

    let observed = watcher.observe_all(document, ".scroll-reveal");
    log_event(
        config.log_level,
        LogLevel::Debug,
        "reveal_watcher_installed",
        json!({ "observed": observed }),
    );
    Ok(watcher)
}

fn lazy_image_watcher(
    document: &Document,
    dispatcher: &UseReducerDispatcher<UiState>,
) -> Result<VisibilityWatcher, JsValue> {
    let options = IntersectionObserverInit::new();
    let dispatcher = dispatcher.clone();

    let watcher = VisibilityWatcher::new(&options, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }

        let image = entry.target();
        if !image.has_attribute("data-src") {
            return;
        }

        if let Some(key) = image.get_attribute(LAZY_KEY_ATTR) {
            dispatcher.dispatch(UiAction::ImageVisible(key));
        }
        observer.unobserve(&image);
    })?;

    watcher.observe_all(document, "img[data-src]");
    Ok(watcher)
}

pub struct PageCoordinator {
    _scroll: EventListener,
    _resize: EventListener,
    _load: Option<EventListener>,
    _reveal: Option<VisibilityWatcher>,
    _images: Option<VisibilityWatcher>,
    timers: SharedTimers,
}

impl PageCoordinator {
    pub fn install(
        config: UiConfig,
        dispatcher: UseReducerDispatcher<UiState>,
        timers: SharedTimers,
    ) -> Option<Self> {
        let win = window()?;
        let document = win.document()?;

        let sampler = Rc::new(ScrollSampler {
            config: config.clone(),
            dispatcher: dispatcher.clone(),
            last_active: RefCell::new(BTreeSet::new()),
        });
        let scroll = {
            let sampler = sampler.clone();
            EventListener::new(&win, "scroll", move |_| sampler.sample())
        };
        let resize = {
            let sampler = sampler.clone();
            EventListener::new(&win, "resize", move |_| sampler.sample())
        };
        sampler.sample();

        let load = if document_is_complete(&document) {
            hide_loader_later(&config, &dispatcher, &timers);
            None
        } else {
            let config = config.clone();
            let dispatcher = dispatcher.clone();
            let timers = timers.clone();
            Some(EventListener::once(&win, "load", move |_| {
                hide_loader_later(&config, &dispatcher, &timers)
            }))
        };

        let reveal = match reveal_watcher(&document, &config, &dispatcher, &timers) {
            Ok(watcher) => Some(watcher),
            Err(_) => {
                log_event(
                    config.log_level,
                    LogLevel::Warn,
                    "observer_unavailable",
                    json!({ "watcher": "reveal" }),
                );
                None
            }
        };

        let images = match lazy_image_watcher(&document, &dispatcher) {
            Ok(watcher) => Some(watcher),
            Err(_) => {
                log_event(
                    config.log_level,
                    LogLevel::Warn,
                    "observer_unavailable",
                    json!({ "watcher": "lazy_images" }),
                );
                None
            }
        };

        Some(Self {
            _scroll: scroll,
            _resize: resize,
            _load: load,
            _reveal: reveal,
            _images: images,
            timers,
        })
    }
}

impl Drop for PageCoordinator {
    fn drop(&mut self) {
        self.timers.borrow_mut().cancel_all();
    }
}

fn hide_loader_later(config: &UiConfig, dispatcher: &UseReducerDispatcher<UiState>, timers: &SharedTimers) {
    let dispatcher = dispatcher.clone();
    timers
        .borrow_mut()
        .schedule(LOADER_TIMER_KEY, config.loader_delay_ms, move || {
            dispatcher.dispatch(UiAction::LoaderHidden)
        });
}
