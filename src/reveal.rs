use std::collections::BTreeSet;

pub const REVEAL_CLASS: &str = "revealed";
pub const SKILL_GROUP_CLASS: &str = "skills-category";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealOutcome {
    pub newly_revealed: bool,
    pub animate_skill_bars: bool,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: BTreeSet<String>,
    animated: BTreeSet<String>,
}

impl RevealTracker {
    pub fn observe(&mut self, key: &str, intersecting: bool, is_skill_group: bool) -> RevealOutcome {
        if !intersecting {
            return RevealOutcome::default();
        }

        let newly_revealed = self.revealed.insert(key.to_string());
        let animate_skill_bars = is_skill_group && self.animated.insert(key.to_string());

        RevealOutcome {
            newly_revealed,
            animate_skill_bars,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarFill {
    pub index: usize,
    pub delay_ms: u32,
    pub percent: u8,
}

pub fn parse_progress(raw: Option<&str>) -> Option<u8> {
    raw?.trim().parse::<u32>().ok().map(|value| value.min(100) as u8)
}

pub fn skill_bar_schedule(progress: &[Option<u8>], stagger_ms: u32) -> Vec<BarFill> {
    progress
        .iter()
        .enumerate()
        .filter_map(|(index, percent)| {
            let percent = (*percent)?;
            let delay_ms = u32::try_from(index)
                .unwrap_or(u32::MAX)
                .saturating_mul(stagger_ms);
            Some(BarFill {
                index,
                delay_ms,
                percent,
            })
        })
        .collect()
}

pub fn skill_timer_key(group: &str, index: usize) -> String {
    format!("skill:{group}:{index}")
}
