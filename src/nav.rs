//! Navigation State
//!
//! Which nav link is current is derived from section visibility; the
//! header flags are derived from the scroll offset.

/// Page sections in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Education,
    Skills,
    Experience,
    Projects,
    Achievements,
    Blog,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 9] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Education,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Achievements,
        SectionId::Blog,
        SectionId::Contact,
    ];

    /// DOM id of the section element
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Education => "education",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Achievements => "achievements",
            SectionId::Blog => "blog",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Education => "Education",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Achievements => "Achievements",
            SectionId::Blog => "Blog",
            SectionId::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Latest visibility ratio per observed section
#[derive(Debug, Clone, Default)]
pub struct NavTracker {
    ratios: [f64; SectionId::ALL.len()],
}

impl NavTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visibility change. Non-intersecting sections count as zero.
    pub fn update(&mut self, section: SectionId, intersecting: bool, ratio: f64) {
        let idx = section as usize;
        self.ratios[idx] = if intersecting { ratio.max(f64::MIN_POSITIVE) } else { 0.0 };
    }

    /// Most visible section; earlier sections win ties
    pub fn current(&self) -> Option<SectionId> {
        let mut best: Option<(SectionId, f64)> = None;
        for section in SectionId::ALL {
            let ratio = self.ratios[section as usize];
            if ratio <= 0.0 {
                continue;
            }
            match best {
                Some((_, r)) if r >= ratio => {}
                _ => best = Some((section, ratio)),
            }
        }
        best.map(|(s, _)| s)
    }
}

/// Header decorations driven by scroll position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderState {
    pub sticky: bool,
    pub back_to_top: bool,
}

impl HeaderState {
    pub fn from_scroll(scroll_y: f64, sticky_offset: f64, back_to_top_offset: f64) -> Self {
        Self {
            sticky: scroll_y > sticky_offset,
            back_to_top: scroll_y > back_to_top_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_id(section.id()), Some(section));
        }
        assert_eq!(SectionId::from_id("nope"), None);
        assert_eq!(SectionId::Blog.href(), "#blog");
    }

    #[test]
    fn test_nothing_visible_means_no_current() {
        let tracker = NavTracker::new();
        assert_eq!(tracker.current(), None);
    }

    #[test]
    fn test_most_visible_section_wins() {
        let mut tracker = NavTracker::new();
        tracker.update(SectionId::About, true, 0.2);
        tracker.update(SectionId::Skills, true, 0.6);
        assert_eq!(tracker.current(), Some(SectionId::Skills));

        tracker.update(SectionId::Skills, false, 0.0);
        assert_eq!(tracker.current(), Some(SectionId::About));
    }

    #[test]
    fn test_ties_go_to_document_order() {
        let mut tracker = NavTracker::new();
        tracker.update(SectionId::Blog, true, 0.5);
        tracker.update(SectionId::Projects, true, 0.5);
        assert_eq!(tracker.current(), Some(SectionId::Projects));
    }

    #[test]
    fn test_intersecting_with_zero_ratio_still_counts() {
        let mut tracker = NavTracker::new();
        tracker.update(SectionId::Contact, true, 0.0);
        assert_eq!(tracker.current(), Some(SectionId::Contact));
    }

    #[test]
    fn test_header_state_thresholds() {
        assert_eq!(HeaderState::from_scroll(0.0, 8.0, 600.0), HeaderState::default());
        assert_eq!(
            HeaderState::from_scroll(8.0, 8.0, 600.0),
            HeaderState { sticky: false, back_to_top: false }
        );
        assert_eq!(
            HeaderState::from_scroll(9.0, 8.0, 600.0),
            HeaderState { sticky: true, back_to_top: false }
        );
        assert_eq!(
            HeaderState::from_scroll(601.0, 8.0, 600.0),
            HeaderState { sticky: true, back_to_top: true }
        );
    }
}
