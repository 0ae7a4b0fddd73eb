mod contact_form;
mod content;
mod watchers;

use crate::{
    config::UiConfig,
    logging::{log_event, LogLevel},
    reveal::{REVEAL_CLASS, SKILL_GROUP_CLASS},
    scroll::anchor_target,
    state::{UiAction, UiState},
};
use contact_form::ContactFormView;
use content::{
    Certificate, Project, SkillCategory, CERTIFICATES, IMAGE_PLACEHOLDER, NAV_ITEMS, PROJECTS,
    SITE_OWNER, SITE_ROLE, SKILL_CATEGORIES,
};
use gloo_events::EventListener;
use serde_json::json;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use watchers::{
    close_certificate, document, read_config, scroll_to_anchor, scroll_to_top,
    set_body_scroll_locked, PageCoordinator, TimerSet,
};
use web_sys::{KeyboardEvent, MouseEvent};
use yew::prelude::*;

impl Reducible for UiState {
    type Action = UiAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

fn anchor_click(on_anchor: &Callback<String>, href: impl Into<String>) -> Callback<MouseEvent> {
    let href = href.into();
    on_anchor.reform(move |event: MouseEvent| {
        if anchor_target(&href).is_some() {
            event.prevent_default();
        }
        href.clone()
    })
}

fn reveal_classes(state: &UiState, key: &str, extra: &'static str) -> Classes {
    classes!(
        extra,
        "scroll-reveal",
        state.is_revealed(key).then_some(REVEAL_CLASS)
    )
}

fn skill_category_view(state: &UiState, category: &SkillCategory) -> Html {
    html! {
        <div
            class={reveal_classes(state, category.key, SKILL_GROUP_CLASS)}
            data-reveal-key={category.key}
        >
            <h3>{category.title}</h3>
            { for category.skills.iter().enumerate().map(|(index, skill)| html! {
                <div class="skill-item">
                    <div class="skill-info">
                        <span class="skill-name">{skill.name}</span>
                        <span class="skill-percent">{format!("{}%", skill.progress)}</span>
                    </div>
                    <div class="skill-bar">
                        <div
                            class="skill-progress"
                            data-progress={skill.progress.to_string()}
                            style={format!("width: {}%;", state.bar_width(category.key, index))}
                        />
                    </div>
                </div>
            }) }
        </div>
    }
}

fn project_card_view(state: &UiState, project: &Project) -> Html {
    let loaded = state.is_image_loaded(project.key);
    let src = if loaded { project.image } else { IMAGE_PLACEHOLDER };

    html! {
        <article class={reveal_classes(state, project.key, "project-card")} data-reveal-key={project.key}>
            <img
                class="project-image"
                src={src}
                data-src={(!loaded).then_some(AttrValue::from(project.image))}
                data-lazy-key={project.key}
                alt={project.title}
            />
            <div class="project-body">
                <h3>{project.title}</h3>
                <p>{project.description}</p>
                <ul class="project-tags">
                    { for project.tags.iter().map(|tag| html! { <li>{*tag}</li> }) }
                </ul>
                <a class="project-link" href={project.link} target="_blank" rel="noopener noreferrer">
                    {"View code"}
                </a>
            </div>
        </article>
    }
}

fn certificate_card_view(
    state: &UiState,
    certificate: &Certificate,
    on_view: &Callback<String>,
) -> Html {
    let path = certificate.path;
    let onclick = on_view.reform(move |_: MouseEvent| path.to_string());

    html! {
        <article
            class={reveal_classes(state, certificate.key, "cert-card")}
            data-reveal-key={certificate.key}
        >
            <h3>{certificate.title}</h3>
            <p class="cert-issuer">{certificate.issuer}</p>
            <button type="button" class="btn view-cert-btn" data-cert={certificate.path} {onclick}>
                {"View Certificate"}
            </button>
        </article>
    }
}

#[function_component(App)]
fn app() -> Html {
    let config = use_memo((), |_| read_config());
    let state = use_reducer(UiState::default);
    let timers = use_mut_ref(TimerSet::default);

    {
        let config: UiConfig = (*config).clone();
        let dispatcher = state.dispatcher();
        let timers = timers.clone();
        use_effect_with((), move |_| {
            log_event(
                config.log_level,
                LogLevel::Info,
                "ui_ready",
                json!({
                    "greeting": "Hello there! Looking for something? Feel free to reach out!",
                    "sections": NAV_ITEMS.len(),
                }),
            );
            let coordinator = PageCoordinator::install(config, dispatcher, timers);
            move || drop(coordinator)
        });
    }

    {
        let cert_open = state.cert_viewer.is_open();
        use_effect_with(cert_open, |open| {
            set_body_scroll_locked(*open);
            || ()
        });
    }

    {
        let cert_open = state.cert_viewer.is_open();
        let dispatcher = state.dispatcher();
        let timers = timers.clone();
        let config: UiConfig = (*config).clone();
        use_effect_with(cert_open, move |open| {
            let listener = open.then(|| document()).flatten().map(|document| {
                EventListener::new(&document, "keydown", move |event| {
                    let is_escape = event
                        .dyn_ref::<KeyboardEvent>()
                        .map(|event| event.key() == "Escape")
                        .unwrap_or(false);
                    if is_escape {
                        close_certificate(&dispatcher, &timers, &config);
                    }
                })
            });
            move || drop(listener)
        });
    }

    let on_anchor = {
        let dispatcher = state.dispatcher();
        let config = config.clone();
        Callback::from(move |href: String| {
            scroll_to_anchor(&href, &config);
            dispatcher.dispatch(UiAction::NavClosed);
        })
    };

    let on_nav_toggle = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(UiAction::NavToggled))
    };

    let on_back_to_top = Callback::from(|_: MouseEvent| scroll_to_top());

    let on_view_certificate = {
        let dispatcher = state.dispatcher();
        let config = config.clone();
        Callback::from(move |path: String| {
            log_event(
                config.log_level,
                LogLevel::Debug,
                "certificate_opened",
                json!({ "path": path }),
            );
            dispatcher.dispatch(UiAction::CertOpened(path));
        })
    };

    let on_close_certificate = {
        let dispatcher = state.dispatcher();
        let timers = timers.clone();
        let config = config.clone();
        Callback::from(move |_: MouseEvent| close_certificate(&dispatcher, &timers, &config))
    };

    let cert_source = state
        .cert_viewer
        .source()
        .map(|source| AttrValue::from(source.to_string()));

    html! {
        <>
            <div id="pageLoader" class={classes!("page-loader", state.loader_hidden.then_some("hidden"))}>
                <div class="loader-spinner" />
            </div>

            <nav id="navbar" class={classes!("navbar", state.chrome.navbar_scrolled.then_some("scrolled"))}>
                <div class="nav-container">
                    <a class="nav-logo" href="#home" onclick={anchor_click(&on_anchor, "#home")}>{SITE_OWNER}</a>
                    <ul id="navMenu" class={classes!("nav-menu", state.nav_open.then_some("active"))}>
                        { for NAV_ITEMS.iter().map(|item| html! {
                            <li>
                                <a
                                    class={classes!("nav-link", state.is_active(item.id).then_some("active"))}
                                    href={format!("#{}", item.id)}
                                    onclick={anchor_click(&on_anchor, format!("#{}", item.id))}
                                >
                                    {item.label}
                                </a>
                            </li>
                        }) }
                    </ul>
                    <button
                        id="navToggle"
                        type="button"
                        class={classes!("nav-toggle", state.nav_open.then_some("active"))}
                        aria-label="Toggle navigation"
                        aria-controls="navMenu"
                        aria-expanded={state.nav_open.to_string()}
                        onclick={on_nav_toggle}
                    >
                        <span class="bar" />
                        <span class="bar" />
                        <span class="bar" />
                    </button>
                </div>
            </nav>

            <main>
                <section id="home" class="hero">
                    <div class="hero-content">
                        <p class="hero-greeting">{"Hi, I'm"}</p>
                        <h1 class="hero-title">{SITE_OWNER}</h1>
                        <p class="hero-subtitle">
                            <span class="text-gradient">{SITE_ROLE}</span>
                        </p>
                        <div class="hero-actions">
                            <a class="btn btn-primary" href="#projects" onclick={anchor_click(&on_anchor, "#projects")}>{"View Work"}</a>
                            <a class="btn btn-secondary" href="#contact" onclick={anchor_click(&on_anchor, "#contact")}>{"Get in Touch"}</a>
                        </div>
                    </div>
                </section>

                <section id="about" class="about">
                    <h2 class="section-title">{"About Me"}</h2>
                    <div class={reveal_classes(&state, "about", "about-content")} data-reveal-key="about">
                        <p>
                            {"I build fast, accessible web applications end to end, from database schema to the last pixel of the interface."}
                        </p>
                    </div>
                </section>

                <section id="skills" class="skills">
                    <h2 class="section-title">{"Skills"}</h2>
                    <div class="skills-grid">
                        { for SKILL_CATEGORIES.iter().map(|category| skill_category_view(&state, category)) }
                    </div>
                </section>

                <section id="projects" class="projects">
                    <h2 class="section-title">{"Projects"}</h2>
                    <div class="projects-grid">
                        { for PROJECTS.iter().map(|project| project_card_view(&state, project)) }
                    </div>
                </section>

                <section id="certificates" class="certificates">
                    <h2 class="section-title">{"Certificates"}</h2>
                    <div class="certificates-grid">
                        { for CERTIFICATES.iter().map(|certificate| {
                            certificate_card_view(&state, certificate, &on_view_certificate)
                        }) }
                    </div>
                </section>

                <section id="contact" class="contact">
                    <h2 class="section-title">{"Get in Touch"}</h2>
                    <div class={reveal_classes(&state, "contact", "contact-content")} data-reveal-key="contact">
                        <ContactFormView config={(*config).clone()} />
                    </div>
                </section>
            </main>

            <footer class="footer">
                <p>{format!("© {SITE_OWNER}")}</p>
            </footer>

            <button
                id="backToTop"
                type="button"
                class={classes!("back-to-top", state.chrome.back_to_top_visible.then_some("visible"))}
                aria-label="Back to top"
                onclick={on_back_to_top}
            >
                {"↑"}
            </button>

            <div
                id="certModal"
                class={classes!("cert-modal", state.cert_viewer.is_open().then_some("active"))}
                aria-hidden={(!state.cert_viewer.is_open()).to_string()}
            >
                <div id="certModalOverlay" class="cert-modal-overlay" onclick={on_close_certificate.clone()} />
                <div class="cert-modal-content" role="dialog" aria-modal="true">
                    <button
                        id="certModalClose"
                        type="button"
                        class="cert-modal-close"
                        aria-label="Close certificate"
                        onclick={on_close_certificate}
                    >
                        {"×"}
                    </button>
                    <iframe id="certViewer" class="cert-viewer" title="Certificate viewer" src={cert_source} />
                </div>
            </div>
        </>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();

    let Some(root) = document().and_then(|document| document.get_element_by_id("app")) else {
        log_event(
            LogLevel::Warn,
            LogLevel::Warn,
            "mount_point_missing",
            json!({ "id": "app" }),
        );
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::{Cell, RefCell};
    use wasm_bindgen_test::*;
    use crate::contact::STATUS_TIMER_KEY;
    use web_sys::{window, Element, HtmlElement, KeyboardEventInit};
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    struct Mounted {
        root: Element,
        handle: AppHandle<App>,
    }

    impl Mounted {
        async fn new() -> Self {
            let document = document().expect("document");
            let root = document.create_element("div").expect("root");
            document.body().expect("body").append_child(&root).expect("append root");
            let handle = yew::Renderer::<App>::with_root(root.clone()).render();
            settle(20).await;
            Self { root, handle }
        }

        fn find(&self, selector: &str) -> HtmlElement {
            self.root
                .query_selector(selector)
                .ok()
                .flatten()
                .and_then(|element| element.dyn_into::<HtmlElement>().ok())
                .unwrap_or_else(|| panic!("no element matches {selector}"))
        }

        fn all(&self, selector: &str) -> Vec<HtmlElement> {
            let nodes = self.root.query_selector_all(selector).expect("selector");
            (0..nodes.length())
                .filter_map(|index| nodes.item(index))
                .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
                .collect()
        }

        fn has_class(&self, selector: &str, class: &str) -> bool {
            self.find(selector).class_list().contains(class)
        }

        fn viewer_src(&self) -> Option<String> {
            self.find("#certViewer").get_attribute("src")
        }

        fn unmount(self) {
            self.handle.destroy();
            self.root.remove();
        }
    }

    async fn settle(ms: u32) {
        TimeoutFuture::new(ms).await;
    }

    fn body_overflow() -> String {
        document()
            .and_then(|document| document.body())
            .and_then(|body| body.style().get_property_value("overflow").ok())
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn certificate_button_opens_modal_with_its_document() {
        let page = Mounted::new().await;
        assert!(!page.has_class("#certModal", "active"));
        assert_eq!(page.viewer_src(), None);

        page.all(".view-cert-btn")[1].click();
        settle(20).await;

        assert!(page.has_class("#certModal", "active"));
        assert_eq!(page.viewer_src().as_deref(), Some(CERTIFICATES[1].path));
        assert_eq!(body_overflow(), "hidden");

        page.unmount();
    }

    #[wasm_bindgen_test]
    async fn closing_certificate_keeps_source_until_clear_delay() {
        let page = Mounted::new().await;
        page.find(".view-cert-btn").click();
        settle(20).await;

        page.find("#certModalClose").click();
        settle(20).await;
        assert!(!page.has_class("#certModal", "active"));
        assert_eq!(page.viewer_src().as_deref(), Some(CERTIFICATES[0].path));
        assert_eq!(body_overflow(), "");

        settle(UiConfig::default().cert_clear_delay_ms + 100).await;
        assert_eq!(page.viewer_src(), None);

        page.unmount();
    }

    #[wasm_bindgen_test]
    async fn escape_closes_certificate_modal() {
        let page = Mounted::new().await;
        page.find(".view-cert-btn").click();
        settle(20).await;
        assert!(page.has_class("#certModal", "active"));

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("event");
        document().expect("document").dispatch_event(&escape).expect("dispatch");
        settle(20).await;

        assert!(!page.has_class("#certModal", "active"));

        page.unmount();
    }

    #[wasm_bindgen_test]
    async fn nav_link_closes_menu_without_jumping() {
        let page = Mounted::new().await;
        let hash_before = window().and_then(|w| w.location().hash().ok()).unwrap_or_default();

        page.find("#navToggle").click();
        settle(20).await;
        assert!(page.has_class("#navMenu", "active"));

        page.find("a.nav-link[href=\"#about\"]").click();
        settle(20).await;

        assert!(!page.has_class("#navMenu", "active"));
        let hash_after = window().and_then(|w| w.location().hash().ok()).unwrap_or_default();
        assert_eq!(hash_after, hash_before);

        page.unmount();
    }

    #[wasm_bindgen_test]
    async fn rescheduled_timer_runs_only_latest_callback() {
        let fired = Rc::new(RefCell::new(Vec::new()));
        let mut timers = TimerSet::default();

        for label in ["first", "second"] {
            let fired = fired.clone();
            timers.schedule(STATUS_TIMER_KEY, 10, move || fired.borrow_mut().push(label));
        }
        settle(50).await;

        assert_eq!(*fired.borrow(), vec!["second"]);
    }

    #[wasm_bindgen_test]
    async fn cancelled_timers_never_fire() {
        let fired = Rc::new(Cell::new(false));
        let mut timers = TimerSet::default();
        {
            let fired = fired.clone();
            timers.schedule("loader", 10, move || fired.set(true));
        }

        timers.cancel_all();
        settle(50).await;

        assert!(!fired.get());
    }
}
