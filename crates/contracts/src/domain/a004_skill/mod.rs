use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    /// Self-assessed proficiency, 0..=100.
    pub level: u8,
}

impl Skill {
    /// CSS width for the level bar, clamped to 100%.
    pub fn bar_width(&self) -> String {
        format!("{}%", self.level.min(100))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: String,
    pub skills: Vec<Skill>,
}

impl SkillCategory {
    fn new(name: &str, skills: &[(&str, u8)]) -> Self {
        Self {
            name: name.to_string(),
            skills: skills
                .iter()
                .map(|(name, level)| Skill {
                    name: name.to_string(),
                    level: *level,
                })
                .collect(),
        }
    }
}

static SKILL_CATEGORIES: Lazy<Vec<SkillCategory>> = Lazy::new(|| {
    vec![
        SkillCategory::new(
            "AI & ML",
            &[
                ("Generative AI", 90),
                ("Large Language Models", 85),
                ("Computer Vision", 85),
                ("Natural Language Processing", 80),
                ("Chatbots", 85),
                ("Deep Learning", 80),
            ],
        ),
        SkillCategory::new(
            "Programming",
            &[
                ("Python", 95),
                ("SQL", 70),
                ("JavaScript", 70),
                ("HTML/CSS", 75),
                ("React", 60),
            ],
        ),
        SkillCategory::new(
            "Frameworks & Tools",
            &[
                ("Flask", 85),
                ("FastAPI", 70),
                ("PyTorch", 80),
                ("Django", 70),
                ("OpenCV", 90),
                ("Streamlit", 80),
                ("LangChain", 75),
                ("MediaPipe", 80),
            ],
        ),
        SkillCategory::new(
            "Cloud & Deployment",
            &[
                ("AWS", 75),
                ("Firebase", 70),
                ("API Integration", 90),
                ("Real-Time Applications", 85),
            ],
        ),
    ]
});

pub fn skill_categories() -> &'static [SkillCategory] {
    SKILL_CATEGORIES.as_slice()
}

/// Selected tab in the skills section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillTabs {
    active: usize,
    len: usize,
}

impl SkillTabs {
    pub fn new(len: usize) -> Self {
        Self { active: 0, len }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Out-of-range indexes are ignored. Returns whether the tab changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_category<'a>(&self, categories: &'a [SkillCategory]) -> Option<&'a SkillCategory> {
        categories.get(self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_default_to_first_category() {
        let tabs = SkillTabs::new(skill_categories().len());
        assert_eq!(tabs.active(), 0);
        assert_eq!(
            tabs.active_category(skill_categories()).map(|c| c.name.as_str()),
            Some("AI & ML")
        );
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut tabs = SkillTabs::new(4);
        assert!(tabs.select(3));
        assert!(!tabs.select(4));
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 3);
    }

    #[test]
    fn test_bar_width() {
        let skill = Skill {
            name: "Python".to_string(),
            level: 95,
        };
        assert_eq!(skill.bar_width(), "95%");
        let over = Skill {
            name: "x".to_string(),
            level: 140,
        };
        assert_eq!(over.bar_width(), "100%");
    }

    #[test]
    fn test_levels_are_percentages() {
        assert!(skill_categories()
            .iter()
            .flat_map(|c| c.skills.iter())
            .all(|s| s.level <= 100));
    }
}
