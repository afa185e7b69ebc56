//! Work experience timeline.
//!
//! Bullet text carries inline emphasis as `{...}` markers which are parsed
//! into [`Fragment`]s, so the view never injects raw HTML.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Fragment {
    Plain(String),
    Highlight(String),
}

impl Fragment {
    /// Splits `"Built {this} thing"` into plain and highlighted runs.
    /// An unclosed `{` is kept as literal text.
    pub fn parse_marked(text: &str) -> Vec<Fragment> {
        let mut fragments = Vec::new();
        let mut rest = text;
        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open + 1..].find('}') else {
                break;
            };
            let close = open + 1 + close;
            if open > 0 {
                fragments.push(Fragment::Plain(rest[..open].to_string()));
            }
            if close > open + 1 {
                fragments.push(Fragment::Highlight(rest[open + 1..close].to_string()));
            }
            rest = &rest[close + 1..];
        }
        if !rest.is_empty() {
            fragments.push(Fragment::Plain(rest.to_string()));
        }
        fragments
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub period: String,
    pub highlights: Vec<Vec<Fragment>>,
}

impl Experience {
    fn new(company: &str, position: &str, period: &str, bullets: &[&str]) -> Self {
        Self {
            company: company.to_string(),
            position: position.to_string(),
            period: period.to_string(),
            highlights: bullets.iter().map(|b| Fragment::parse_marked(b)).collect(),
        }
    }
}

static EXPERIENCES: Lazy<Vec<Experience>> = Lazy::new(|| {
    vec![
        Experience::new(
            "Codenexo",
            "Jr. AI Engineer",
            "Jan 2025 - Present",
            &[
                "Developed an {AI-generated newsletter} using prompt engineering and the Claude API.",
                "Built a Flask-based application that generates blogs and podcasts from YouTube videos.",
                "Automated Asana tasks to improve workflow efficiency.",
                "Deployed {AI applications on AWS} for scalability and performance.",
            ],
        ),
        Experience::new(
            "The Disrupt Labs",
            "Computer Vision Intern",
            "Jun 2024 - Oct 2024",
            &[
                "Developed a 2D object distance measurement system using a single camera for warehouse monitoring.",
                "Implemented and tested {depth estimation models} to enhance spatial awareness in confined spaces.",
                "Applied computer vision techniques to optimize object placement and logistics in warehouses.",
                "Researched and integrated state-of-the-art computer vision methodologies for real-world industrial applications.",
            ],
        ),
        Experience::new(
            "Smart City Lab, NCAI",
            "AI Intern",
            "Dec 2023 - May 2024",
            &[
                "Developed an {NLP-based chatbot} in Arabic for medical applications using Python.",
                "Conducted comparative research on speech-to-text technologies (Google Speech, Whisper, Wav2Vec) to evaluate accuracy and performance.",
                "Gained hands-on experience in NLP, speech processing, and computer vision through interdisciplinary projects.",
            ],
        ),
    ]
});

pub fn experiences() -> &'static [Experience] {
    EXPERIENCES.as_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marked_splits_highlights() {
        assert_eq!(
            Fragment::parse_marked("Deployed {AI applications on AWS} for scale."),
            vec![
                Fragment::Plain("Deployed ".to_string()),
                Fragment::Highlight("AI applications on AWS".to_string()),
                Fragment::Plain(" for scale.".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_marked_edge_cases() {
        assert_eq!(
            Fragment::parse_marked("{lead}"),
            vec![Fragment::Highlight("lead".to_string())]
        );
        assert_eq!(
            Fragment::parse_marked("no markers"),
            vec![Fragment::Plain("no markers".to_string())]
        );
        assert_eq!(
            Fragment::parse_marked("open { brace"),
            vec![Fragment::Plain("open { brace".to_string())]
        );
        assert_eq!(Fragment::parse_marked("a{}b"), vec![
            Fragment::Plain("a".to_string()),
            Fragment::Plain("b".to_string()),
        ]);
        assert!(Fragment::parse_marked("").is_empty());
    }

    #[test]
    fn test_timeline_order() {
        let companies: Vec<_> = experiences().iter().map(|e| e.company.as_str()).collect();
        assert_eq!(
            companies,
            vec!["Codenexo", "The Disrupt Labs", "Smart City Lab, NCAI"]
        );
        assert_eq!(experiences()[2].highlights.len(), 3);
    }
}
