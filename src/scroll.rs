use crate::config::UiConfig;
use std::collections::BTreeSet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionDescriptor {
    pub id: String,
    pub top_offset: i32,
    pub height: i32,
}

impl SectionDescriptor {
    pub fn new(id: impl Into<String>, top_offset: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            top_offset,
            height,
        }
    }

    // (start, end]
    pub fn activation_range(&self, margin: i32) -> (i32, i32) {
        let start = self.top_offset.saturating_sub(margin);
        (start, start.saturating_add(self.height))
    }

    pub fn is_active_at(&self, offset: i32, margin: i32) -> bool {
        let (start, end) = self.activation_range(margin);
        offset > start && offset <= end
    }
}

pub fn classify_sections(
    offset: i32,
    sections: &[SectionDescriptor],
    margin: i32,
) -> BTreeSet<String> {
    sections
        .iter()
        .filter(|section| section.is_active_at(offset, margin))
        .map(|section| section.id.clone())
        .collect()
}

pub fn sample_offset(raw: f64) -> i32 {
    if raw.is_finite() {
        raw.max(0.0) as i32
    } else {
        0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub back_to_top_visible: bool,
}

pub fn scroll_chrome(offset: i32, config: &UiConfig) -> ScrollChrome {
    ScrollChrome {
        navbar_scrolled: offset > config.navbar_scrolled_threshold,
        back_to_top_visible: offset > config.back_to_top_threshold,
    }
}

pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn anchor_scroll_top(section_top: i32, config: &UiConfig) -> f64 {
    f64::from(section_top.saturating_sub(config.anchor_scroll_offset))
}
