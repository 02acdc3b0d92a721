//! Static page content compiled into the bundle.

use crate::components::icon::Glyph;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activity {
    pub icon: Glyph,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EducationRecord {
    pub title: &'static str,
    pub institution: &'static str,
    pub year: &'static str,
    pub description: Option<&'static str>,
    pub activities: &'static [Activity],
}

pub static EDUCATION: &[EducationRecord] = &[
    EducationRecord {
        title: "Bachelor of Science in Computer Science",
        institution: "Princess Sumaya University for Technology",
        year: "2018 - 2023",
        description: None,
        activities: &[
            Activity {
                icon: Glyph::Users,
                text: "Use to be a member of the ACM for competitive programming",
            },
            Activity {
                icon: Glyph::Award,
                text: "Gained certification in mobile development",
            },
            Activity {
                icon: Glyph::GraduationCap,
                text: "Volunteered as a peer tutor for introductory programming courses",
            },
        ],
    },
    EducationRecord {
        title: "Mobile App Development Certification",
        institution: "Udemy",
        year: "2021",
        description: Some(
            "Completed an intensive program focusing on Flutter development and best practices.",
        ),
        activities: &[
            Activity {
                icon: Glyph::Code,
                text: "Developed 3 fully functional Flutter apps as part of the certification",
            },
            Activity {
                icon: Glyph::Code,
                text: "Learned Bloc & Cubit, Provider, as well as Riverpod for state management solutions",
            },
            Activity {
                icon: Glyph::Code,
                text: "Dived deep into caching with Hive",
            },
            Activity {
                icon: Glyph::Code,
                text: "Built Responsive & Adaptive mobile apps",
            },
        ],
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SkillIcon {
    Image(&'static str),
    Glyph(Glyph),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: SkillIcon,
}

pub static SKILLS: &[Skill] = &[
    Skill { name: "Flutter", icon: SkillIcon::Image("/assets/flutter.png") },
    Skill { name: "Dart", icon: SkillIcon::Image("/assets/dart.png") },
    Skill { name: "Node.js", icon: SkillIcon::Image("/assets/node.png") },
    Skill { name: "Express.js", icon: SkillIcon::Image("/assets/express.png") },
    Skill { name: "JavaScript", icon: SkillIcon::Image("/assets/js.png") },
    Skill { name: "Python", icon: SkillIcon::Image("/assets/python.png") },
    Skill { name: "React", icon: SkillIcon::Image("/assets/react.png") },
    Skill { name: "Git", icon: SkillIcon::Glyph(Glyph::GitBranch) },
    Skill { name: "Jira", icon: SkillIcon::Image("/assets/jira.png") },
];

/// Which education entry, if any, is showing its details.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Expansion(Option<usize>);

impl Expansion {
    /// Clicking the open entry closes it; clicking another one moves the expansion there.
    pub fn toggle(self, index: usize) -> Self {
        if self.0 == Some(index) {
            Expansion(None)
        } else {
            Expansion(Some(index))
        }
    }

    pub fn is_expanded(self, index: usize) -> bool {
        self.0 == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_most_one_entry_expanded() {
        let clicks = [0, 1, 1, 0, 0, 1, 0, 1, 1, 1];
        let mut expansion = Expansion::default();
        for index in clicks {
            expansion = expansion.toggle(index);
            let open = (0..EDUCATION.len()).filter(|i| expansion.is_expanded(*i)).count();
            assert!(open <= 1);
        }
        assert!(expansion.is_expanded(1));
    }

    #[test]
    fn clicking_open_entry_collapses_it() {
        let expansion = Expansion::default().toggle(0);
        assert!(expansion.is_expanded(0));
        assert_eq!(expansion.toggle(0), Expansion::default());
    }

    #[test]
    fn clicking_another_entry_moves_expansion() {
        let expansion = Expansion::default().toggle(0).toggle(1);
        assert!(!expansion.is_expanded(0));
        assert!(expansion.is_expanded(1));
    }
}
