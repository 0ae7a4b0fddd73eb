use crate::{certificates::CertViewer, scroll::ScrollChrome};
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiAction {
    ScrollSampled {
        chrome: ScrollChrome,
        active: BTreeSet<String>,
    },
    Revealed(String),
    BarFilled {
        group: String,
        index: usize,
        percent: u8,
    },
    ImageVisible(String),
    NavToggled,
    NavClosed,
    LoaderHidden,
    CertOpened(String),
    CertClosed,
    CertSourceCleared,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_sections: BTreeSet<String>,
    pub chrome: ScrollChrome,
    pub nav_open: bool,
    pub loader_hidden: bool,
    pub revealed: BTreeSet<String>,
    pub bar_widths: BTreeMap<(String, usize), u8>,
    pub loaded_images: BTreeSet<String>,
    pub cert_viewer: CertViewer,
}

impl UiState {
    pub fn apply(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::ScrollSampled { chrome, active } => {
                let changed = self.chrome != chrome || self.active_sections != active;
                self.chrome = chrome;
                self.active_sections = active;
                changed
            }
            UiAction::Revealed(key) => self.revealed.insert(key),
            UiAction::BarFilled {
                group,
                index,
                percent,
            } => self.bar_widths.insert((group, index), percent) != Some(percent),
            UiAction::ImageVisible(key) => self.loaded_images.insert(key),
            UiAction::NavToggled => {
                self.nav_open = !self.nav_open;
                true
            }
            UiAction::NavClosed => std::mem::replace(&mut self.nav_open, false),
            UiAction::LoaderHidden => !std::mem::replace(&mut self.loader_hidden, true),
            UiAction::CertOpened(path) => self.cert_viewer.open(&path),
            UiAction::CertClosed => self.cert_viewer.close(),
            UiAction::CertSourceCleared => self.cert_viewer.clear_source(),
        }
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active_sections.contains(section_id)
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.revealed.contains(key)
    }

    pub fn bar_width(&self, group: &str, index: usize) -> u8 {
        self.bar_widths
            .get(&(group.to_string(), index))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_image_loaded(&self, key: &str) -> bool {
        self.loaded_images.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::UiConfig, reveal::skill_bar_schedule, scroll::scroll_chrome};

    fn sampled(offset: i32, active: &[&str]) -> UiAction {
        UiAction::ScrollSampled {
            chrome: scroll_chrome(offset, &UiConfig::default()),
            active: active.iter().map(|id| id.to_string()).collect(),
        }
    }

    #[test]
    fn identical_scroll_samples_do_not_change_state() {
        let mut state = UiState::default();

        assert!(state.apply(sampled(450, &["about"])));
        assert!(!state.apply(sampled(450, &["about"])));
        assert!(state.is_active("about"));
    }

    #[test]
    fn scroll_sample_replaces_active_set() {
        let mut state = UiState::default();
        state.apply(sampled(450, &["about"]));
        state.apply(sampled(900, &["skills"]));

        assert!(!state.is_active("about"));
        assert!(state.is_active("skills"));
        assert!(state.chrome.back_to_top_visible);
    }

    #[test]
    fn no_action_unreveals_an_element() {
        let mut state = UiState::default();
        state.apply(UiAction::Revealed("about".to_string()));

        let actions = vec![
            sampled(0, &[]),
            UiAction::Revealed("about".to_string()),
            UiAction::NavToggled,
            UiAction::NavClosed,
            UiAction::LoaderHidden,
            UiAction::ImageVisible("hero".to_string()),
            UiAction::CertOpened("/c.pdf".to_string()),
            UiAction::CertClosed,
            UiAction::CertSourceCleared,
        ];
        for action in actions {
            state.apply(action);
            assert!(state.is_revealed("about"));
        }
    }

    #[test]
    fn scheduled_fill_sets_the_bar_width() {
        let mut state = UiState::default();
        let schedule = skill_bar_schedule(&[Some(95), Some(80)], 100);
        let second = schedule[1];

        assert_eq!(second.delay_ms, 100);
        assert_eq!(state.bar_width("frontend", 1), 0);

        state.apply(UiAction::BarFilled {
            group: "frontend".to_string(),
            index: second.index,
            percent: second.percent,
        });
        assert_eq!(state.bar_width("frontend", 1), 80);
        assert_eq!(state.bar_width("frontend", 0), 0);
    }

    #[test]
    fn repeated_fill_is_not_a_change() {
        let mut state = UiState::default();
        let fill = UiAction::BarFilled {
            group: "tools".to_string(),
            index: 0,
            percent: 70,
        };

        assert!(state.apply(fill.clone()));
        assert!(!state.apply(fill));
    }

    #[test]
    fn nav_menu_toggles_and_closes() {
        let mut state = UiState::default();

        assert!(state.apply(UiAction::NavToggled));
        assert!(state.nav_open);
        assert!(state.apply(UiAction::NavClosed));
        assert!(!state.apply(UiAction::NavClosed));
    }

    #[test]
    fn loader_hides_once() {
        let mut state = UiState::default();

        assert!(state.apply(UiAction::LoaderHidden));
        assert!(!state.apply(UiAction::LoaderHidden));
        assert!(state.loader_hidden);
    }

    #[test]
    fn images_load_once() {
        let mut state = UiState::default();

        assert!(state.apply(UiAction::ImageVisible("project-1".to_string())));
        assert!(!state.apply(UiAction::ImageVisible("project-1".to_string())));
        assert!(state.is_image_loaded("project-1"));
    }
}
