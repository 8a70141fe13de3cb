use super::Spring;
use crate::constants::REVEAL_THRESHOLD;

/// One revealable section: a document-space top offset, a monotonic
/// activation flag, and a spring easing the fade/slide-in.
#[derive(Debug)]
pub struct RevealSection {
    pub top: f32,
    pub active: bool,
    pub fade: Spring,
}

/// Tracks which sections have crossed the reveal threshold.
///
/// Activation is monotonic: once a section is active no scroll position can
/// deactivate it. Checking is idempotent and cheap, so it runs on every
/// scroll message and once at startup.
#[derive(Debug, Default)]
pub struct RevealTracker {
    sections: Vec<RevealSection>,
}

impl RevealTracker {
    /// Builds a tracker from the document-space top offsets of the sections.
    pub fn new(tops: Vec<f32>) -> Self {
        let sections = tops
            .into_iter()
            .map(|top| RevealSection {
                top,
                active: false,
                fade: Spring::default(),
            })
            .collect();
        Self { sections }
    }

    /// Marks every section whose top sits above 85% of the visible viewport.
    pub fn check(&mut self, scroll_offset: f32, viewport_height: f32) {
        let limit = scroll_offset + viewport_height * REVEAL_THRESHOLD;
        for section in &mut self.sections {
            if !section.active && section.top < limit {
                section.active = true;
                section.fade.set_target(1.0);
            }
        }
    }

    /// Advances the fade springs. Returns true while any is still moving.
    pub fn update(&mut self) -> bool {
        let mut animating = false;
        for section in &mut self.sections {
            if section.fade.update() {
                animating = true;
            }
        }
        animating
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.sections.get(index).map(|s| s.active).unwrap_or(false)
    }

    /// Fade progress in [0, 1] for the section, 0.0 for unknown indices.
    pub fn progress(&self, index: usize) -> f32 {
        self.sections
            .get(index)
            .map(|s| s.fade.position)
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_check_activates_visible_sections() {
        let mut tracker = RevealTracker::new(vec![0.0, 560.0, 2000.0]);
        tracker.check(0.0, 800.0);

        // limit = 680: first section only
        assert!(tracker.is_active(0));
        assert!(!tracker.is_active(1));
        assert!(!tracker.is_active(2));
    }

    #[test]
    fn section_exactly_at_threshold_stays_hidden() {
        let mut tracker = RevealTracker::new(vec![680.0]);
        tracker.check(0.0, 800.0);
        assert!(!tracker.is_active(0));

        tracker.check(0.1, 800.0);
        assert!(tracker.is_active(0));
    }

    #[test]
    fn activation_is_monotonic_across_scrolling() {
        let mut tracker = RevealTracker::new(vec![0.0, 560.0, 920.0]);
        tracker.check(600.0, 800.0);
        assert!(tracker.is_active(2));

        // Scrolling back to the top never reverts a mark
        tracker.check(0.0, 800.0);
        assert!(tracker.is_active(0));
        assert!(tracker.is_active(1));
        assert!(tracker.is_active(2));
    }

    #[test]
    fn rechecking_an_active_section_is_a_noop() {
        let mut tracker = RevealTracker::new(vec![0.0]);
        tracker.check(0.0, 800.0);

        // Drive the fade partway, then re-check: progress must not reset
        for _ in 0..10 {
            tracker.update();
        }
        let progress = tracker.progress(0);
        assert!(progress > 0.0);

        tracker.check(0.0, 800.0);
        assert_eq!(tracker.progress(0), progress);
    }

    #[test]
    fn fade_settles_at_full_opacity() {
        let mut tracker = RevealTracker::new(vec![0.0]);
        tracker.check(0.0, 800.0);
        for _ in 0..2000 {
            if !tracker.update() {
                break;
            }
        }
        assert_eq!(tracker.progress(0), 1.0);
    }
}
