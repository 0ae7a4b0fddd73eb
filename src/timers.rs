use std::collections::HashMap;

// Handles cancel on drop, so replacing a key cancels the pending one.
pub struct KeyedSlots<H> {
    slots: HashMap<String, H>,
}

impl<H> Default for KeyedSlots<H> {
    fn default() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }
}

impl<H> KeyedSlots<H> {
    pub fn replace(&mut self, key: impl Into<String>, handle: H) {
        self.slots.insert(key.into(), handle);
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contact::STATUS_TIMER_KEY, reveal::skill_timer_key};
    use std::{cell::RefCell, rc::Rc};

    struct Handle {
        label: &'static str,
        cancelled: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.cancelled.borrow_mut().push(self.label);
        }
    }

    fn handle(label: &'static str, cancelled: &Rc<RefCell<Vec<&'static str>>>) -> Handle {
        Handle {
            label,
            cancelled: cancelled.clone(),
        }
    }

    #[test]
    fn rescheduling_status_timer_cancels_the_pending_one() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slots = KeyedSlots::default();

        slots.replace(STATUS_TIMER_KEY, handle("first", &cancelled));
        assert!(cancelled.borrow().is_empty());

        slots.replace(STATUS_TIMER_KEY, handle("second", &cancelled));
        assert_eq!(*cancelled.borrow(), vec!["first"]);

        slots.replace(STATUS_TIMER_KEY, handle("third", &cancelled));
        assert_eq!(*cancelled.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn distinct_keys_do_not_cancel_each_other() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slots = KeyedSlots::default();

        slots.replace(skill_timer_key("skills-frontend", 0), handle("bar-0", &cancelled));
        slots.replace(skill_timer_key("skills-frontend", 1), handle("bar-1", &cancelled));
        slots.replace(STATUS_TIMER_KEY, handle("status", &cancelled));

        assert!(cancelled.borrow().is_empty());
    }

    #[test]
    fn clear_and_drop_cancel_everything_pending() {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let mut slots = KeyedSlots::default();
        slots.replace("loader", handle("loader", &cancelled));
        slots.replace("cert-clear", handle("cert-clear", &cancelled));

        slots.clear();
        let mut seen = cancelled.borrow().clone();
        seen.sort_unstable();
        assert_eq!(seen, vec!["cert-clear", "loader"]);

        slots.replace("loader", handle("late-loader", &cancelled));
        drop(slots);
        assert_eq!(cancelled.borrow().last(), Some(&"late-loader"));
    }
}
