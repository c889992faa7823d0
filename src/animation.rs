//! Reveal timelines keyed to page sections.
//!
//! Pages register a timeline per section while rendering and stamp the
//! resulting attributes into the markup. Playback belongs to `static/site.js`:
//! a section plays once when its top edge crosses `start` of the viewport,
//! and its observer is disconnected when the page goes away.

/// Fraction of the viewport height the section's top edge has to cross.
pub const DEFAULT_START: f32 = 0.85;

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub target: String,
    pub delay_ms: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub section: String,
    pub start: f32,
    pub steps: Vec<Step>,
}

impl Timeline {
    /// One step per target, each `stagger_ms` after the previous one.
    pub fn staggered<I, S>(section: &str, targets: I, stagger_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let steps = targets
            .into_iter()
            .enumerate()
            .map(|(i, target)| Step {
                target: target.into(),
                delay_ms: stagger_ms.saturating_mul(i as u32),
            })
            .collect();
        Self {
            section: section.to_string(),
            start: DEFAULT_START,
            steps,
        }
    }

    pub fn starting_at(mut self, start: f32) -> Self {
        self.start = start.clamp(0.0, 1.0);
        self
    }

    pub fn delay_for(&self, target: &str) -> Option<u32> {
        self.steps
            .iter()
            .find(|step| step.target == target)
            .map(|step| step.delay_ms)
    }
}

/// The timelines registered for one page render.
#[derive(Debug, Default)]
pub struct Sequencer {
    timelines: Vec<Timeline>,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, timeline: Timeline) {
        self.timelines.push(timeline);
    }

    /// Attributes for one element: `data-reveal="<section>" data-reveal-delay="<ms>"`.
    /// Empty when nothing is registered for it.
    pub fn reveal_attrs(&self, section: &str, target: &str) -> String {
        self.timelines
            .iter()
            .filter(|t| t.section == section)
            .find_map(|t| {
                t.delay_for(target).map(|delay| {
                    format!(
                        "data-reveal=\"{section}\" data-reveal-start=\"{:.2}\" data-reveal-delay=\"{delay}\"",
                        t.start
                    )
                })
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_offsets_are_fixed() {
        let t = Timeline::staggered("services", ["a", "b", "c"], 150);
        let delays: Vec<_> = t.steps.iter().map(|s| s.delay_ms).collect();
        assert_eq!(delays, [0, 150, 300]);
        assert_eq!(t.start, DEFAULT_START);
    }

    #[test]
    fn start_threshold_is_stamped() {
        let mut seq = Sequencer::new();
        seq.register(Timeline::staggered("hero", ["title"], 0).starting_at(0.8));
        seq.register(Timeline::staggered("cta", ["button"], 0).starting_at(1.7));
        assert!(seq.reveal_attrs("hero", "title").contains(r#"data-reveal-start="0.80""#));
        assert!(seq.reveal_attrs("cta", "button").contains(r#"data-reveal-start="1.00""#));
    }

    #[test]
    fn first_matching_section_wins() {
        let mut seq = Sequencer::new();
        seq.register(Timeline::staggered("faq", ["q1", "q2"], 100));
        seq.register(Timeline::staggered("faq", ["q2"], 0));
        assert!(seq.reveal_attrs("faq", "q2").ends_with(r#"data-reveal-delay="100""#));
        assert_eq!(seq.reveal_attrs("stats", "q1"), "");
    }

    #[test]
    fn reveal_attrs_carry_delay() {
        let mut seq = Sequencer::new();
        seq.register(Timeline::staggered("trust", ["0", "1"], 120));
        assert_eq!(
            seq.reveal_attrs("trust", "1"),
            r#"data-reveal="trust" data-reveal-start="0.85" data-reveal-delay="120""#
        );
        assert_eq!(seq.reveal_attrs("trust", "9"), "");
    }
}
