use crate::logging::LogLevel;

const DEFAULT_NAV_ACTIVATION_MARGIN: i32 = 100;
const DEFAULT_NAVBAR_SCROLLED_THRESHOLD: i32 = 100;
const DEFAULT_BACK_TO_TOP_THRESHOLD: i32 = 300;
const DEFAULT_ANCHOR_SCROLL_OFFSET: i32 = 80;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_BOTTOM_MARGIN: i32 = 50;
const DEFAULT_SKILL_STAGGER_MS: u32 = 100;
const DEFAULT_STATUS_CLEAR_MS: u32 = 5_000;
const DEFAULT_LOADER_DELAY_MS: u32 = 500;
const DEFAULT_CERT_CLEAR_DELAY_MS: u32 = 300;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_CONTACT_ACTION: &str = "/contact";

const NAV_ACTIVATION_MARGIN_BOUNDS: (i32, i32) = (0, 1_000);
const NAVBAR_SCROLLED_THRESHOLD_BOUNDS: (i32, i32) = (0, 2_000);
const BACK_TO_TOP_THRESHOLD_BOUNDS: (i32, i32) = (0, 10_000);
const ANCHOR_SCROLL_OFFSET_BOUNDS: (i32, i32) = (0, 1_000);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);
const REVEAL_BOTTOM_MARGIN_BOUNDS: (i32, i32) = (0, 1_000);
const SKILL_STAGGER_MS_BOUNDS: (u32, u32) = (0, 2_000);
const STATUS_CLEAR_MS_BOUNDS: (u32, u32) = (500, 60_000);
const LOADER_DELAY_MS_BOUNDS: (u32, u32) = (0, 10_000);
const CERT_CLEAR_DELAY_MS_BOUNDS: (u32, u32) = (0, 5_000);

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub nav_activation_margin: i32,
    pub navbar_scrolled_threshold: i32,
    pub back_to_top_threshold: i32,
    pub anchor_scroll_offset: i32,
    pub reveal_threshold: f64,
    pub reveal_bottom_margin: i32,
    pub skill_stagger_ms: u32,
    pub status_clear_ms: u32,
    pub loader_delay_ms: u32,
    pub cert_clear_delay_ms: u32,
    pub log_level: LogLevel,
    pub contact_action: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            nav_activation_margin: DEFAULT_NAV_ACTIVATION_MARGIN,
            navbar_scrolled_threshold: DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
            back_to_top_threshold: DEFAULT_BACK_TO_TOP_THRESHOLD,
            anchor_scroll_offset: DEFAULT_ANCHOR_SCROLL_OFFSET,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_bottom_margin: DEFAULT_REVEAL_BOTTOM_MARGIN,
            skill_stagger_ms: DEFAULT_SKILL_STAGGER_MS,
            status_clear_ms: DEFAULT_STATUS_CLEAR_MS,
            loader_delay_ms: DEFAULT_LOADER_DELAY_MS,
            cert_clear_delay_ms: DEFAULT_CERT_CLEAR_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
            contact_action: DEFAULT_CONTACT_ACTION.to_string(),
        }
    }
}

impl UiConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            nav_activation_margin: parse_i32_with_bounds(
                &lookup,
                "data-nav-activation-margin",
                DEFAULT_NAV_ACTIVATION_MARGIN,
                NAV_ACTIVATION_MARGIN_BOUNDS,
            ),
            navbar_scrolled_threshold: parse_i32_with_bounds(
                &lookup,
                "data-navbar-scrolled-threshold",
                DEFAULT_NAVBAR_SCROLLED_THRESHOLD,
                NAVBAR_SCROLLED_THRESHOLD_BOUNDS,
            ),
            back_to_top_threshold: parse_i32_with_bounds(
                &lookup,
                "data-back-to-top-threshold",
                DEFAULT_BACK_TO_TOP_THRESHOLD,
                BACK_TO_TOP_THRESHOLD_BOUNDS,
            ),
            anchor_scroll_offset: parse_i32_with_bounds(
                &lookup,
                "data-anchor-scroll-offset",
                DEFAULT_ANCHOR_SCROLL_OFFSET,
                ANCHOR_SCROLL_OFFSET_BOUNDS,
            ),
            reveal_threshold: parse_f64_with_bounds(
                &lookup,
                "data-reveal-threshold",
                DEFAULT_REVEAL_THRESHOLD,
                REVEAL_THRESHOLD_BOUNDS,
            ),
            reveal_bottom_margin: parse_i32_with_bounds(
                &lookup,
                "data-reveal-bottom-margin",
                DEFAULT_REVEAL_BOTTOM_MARGIN,
                REVEAL_BOTTOM_MARGIN_BOUNDS,
            ),
            skill_stagger_ms: parse_u32_with_bounds(
                &lookup,
                "data-skill-stagger-ms",
                DEFAULT_SKILL_STAGGER_MS,
                SKILL_STAGGER_MS_BOUNDS,
            ),
            status_clear_ms: parse_u32_with_bounds(
                &lookup,
                "data-status-clear-ms",
                DEFAULT_STATUS_CLEAR_MS,
                STATUS_CLEAR_MS_BOUNDS,
            ),
            loader_delay_ms: parse_u32_with_bounds(
                &lookup,
                "data-loader-delay-ms",
                DEFAULT_LOADER_DELAY_MS,
                LOADER_DELAY_MS_BOUNDS,
            ),
            cert_clear_delay_ms: parse_u32_with_bounds(
                &lookup,
                "data-cert-clear-delay-ms",
                DEFAULT_CERT_CLEAR_DELAY_MS,
                CERT_CLEAR_DELAY_MS_BOUNDS,
            ),
            log_level: parse_log_level(&lookup, "data-log-level", DEFAULT_LOG_LEVEL),
            contact_action: parse_non_empty(&lookup, "data-contact-action")
                .unwrap_or_else(|| DEFAULT_CONTACT_ACTION.to_string()),
        }
    }

    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }
}

fn parse_non_empty(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_i32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: i32,
    bounds: (i32, i32),
) -> i32 {
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<i32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_f64_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: f64,
    bounds: (f64, f64),
) -> f64 {
    parse_non_empty(lookup, name)
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite() && (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}
