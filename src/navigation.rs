use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::config;

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Skills,
    Education,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Hero,
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    /// Sections that get an entry in the header; the hero is reached through the brand.
    pub const LINKED: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Education,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Education => "education",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> String {
        let id = self.id();
        let mut chars = id.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

/// Viewport-relative vertical extent of a section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn straddles(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section, in document order, that straddles the probe line.
pub fn locate_active<F>(mut measure: F) -> Option<Section>
where
    F: FnMut(Section) -> Option<SectionBounds>,
{
    Section::ALL.into_iter().find(|section| {
        measure(*section)
            .map(|bounds| bounds.straddles(config::ACTIVE_PROBE_PX))
            .unwrap_or(false)
    })
}

/// Highlighted navigation entry. Starts empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub active: Option<Section>,
}

impl NavigationState {
    /// A scan that found nothing keeps the previous section.
    pub fn observe(self, found: Option<Section>) -> Self {
        match found {
            Some(section) => NavigationState { active: Some(section) },
            None => self,
        }
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == Some(section)
    }
}

/// Document offset to scroll to so the section sits just below the header.
pub fn scroll_target(rect_top: f64, page_y_offset: f64) -> f64 {
    rect_top + page_y_offset - config::HEADER_OFFSET_PX
}

pub fn measure(section: Section) -> Option<SectionBounds> {
    let element = web_sys::window()?
        .document()?
        .get_element_by_id(section.id())?;
    let rect = element.get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top(),
        bottom: rect.bottom(),
    })
}

pub fn scroll_to_section(section: Section) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(element) = window
        .document()
        .and_then(|document| document.get_element_by_id(section.id()))
    else {
        warn!("No element with id {} to scroll to", section.id());
        return;
    };

    let page_y_offset = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_target(element.get_bounding_client_rect().top(), page_y_offset);
    debug!("Scrolling to {} at {}px", section.id(), top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(bounds: &[(Section, f64, f64)]) -> impl FnMut(Section) -> Option<SectionBounds> + '_ {
        move |section| {
            bounds
                .iter()
                .find(|(s, _, _)| *s == section)
                .map(|(_, top, bottom)| SectionBounds { top: *top, bottom: *bottom })
        }
    }

    #[test]
    fn skills_becomes_active_when_it_straddles_the_probe() {
        let bounds = [
            (Section::Hero, -1800.0, -900.0),
            (Section::About, -900.0, -200.0),
            (Section::Skills, -200.0, 400.0),
            (Section::Education, 400.0, 1000.0),
            (Section::Contact, 1000.0, 1600.0),
        ];
        let found = locate_active(layout(&bounds));
        assert_eq!(found, Some(Section::Skills));
        assert_eq!(NavigationState::default().observe(found).active, Some(Section::Skills));
    }

    #[test]
    fn earlier_section_wins_on_overlap() {
        let bounds = [
            (Section::About, 0.0, 100.0),
            (Section::Skills, 100.0, 700.0),
        ];
        assert_eq!(locate_active(layout(&bounds)), Some(Section::About));
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let previous = NavigationState { active: Some(Section::Education) };
        let bounds = [(Section::Contact, 300.0, 900.0)];
        let found = locate_active(layout(&bounds));
        assert_eq!(found, None);
        assert_eq!(previous.observe(found), previous);
        assert_eq!(NavigationState::default().observe(None).active, None);
    }

    #[test]
    fn missing_elements_never_match() {
        assert_eq!(locate_active(|_| None), None);
    }

    #[test]
    fn scroll_target_subtracts_header() {
        assert_eq!(scroll_target(250.0, 1200.0), 1370.0);
        assert_eq!(scroll_target(-40.0, 0.0), -120.0);
    }

    #[test]
    fn labels_are_capitalised_ids() {
        let labels: Vec<String> = Section::LINKED.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["About", "Skills", "Education", "Contact"]);
    }
}
