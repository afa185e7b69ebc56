//! Owner profile: hero text, about blurb, résumé and contact links.

use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Github,
    Linkedin,
    Mail,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

impl SocialLink {
    /// Mail links stay in the current tab; everything else opens a new one.
    pub fn opens_new_tab(&self) -> bool {
        self.kind != SocialKind::Mail
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub tagline: String,
    pub about: Vec<String>,
    pub image: String,
    pub resume_dir: String,
    pub resume_file: String,
    pub phone: String,
    pub socials: Vec<SocialLink>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> Option<&str> {
        self.socials
            .iter()
            .find(|s| s.kind == SocialKind::Mail)
            .and_then(|s| s.href.strip_prefix("mailto:"))
    }
}

static PROFILE: Lazy<Profile> = Lazy::new(|| Profile {
    first_name: "Amir".to_string(),
    last_name: "Aijaz".to_string(),
    title: "AI Engineer".to_string(),
    tagline: "Specializing in computer vision, NLP, LLM integrations, and generative AI solutions"
        .to_string(),
    about: vec![
        "I am an AI Engineer specializing in computer vision, NLP, LLM integrations, and generative AI solutions. With expertise in Python, React, Flask, Django, Streamlit, PyTorch, and LangChain, I build and deploy AI-powered applications on cloud platforms like AWS and Firebase.".to_string(),
        "My projects include a real-time face recognition attendance system, a gesture-based calculator, UK license plate recognition using OCR, a text-to-SQL system with LLaMA 3, Visual Question Answering with ViLT, a sign language translator, a YouTube-to-blog-and-podcast generator, an AI-generated newsletter with Claude, plaque segmentation for medical imaging, fog removal for autonomous vehicles, and an AI-driven Instagram agent for content automation.".to_string(),
    ],
    image: "/images/profile.jpeg".to_string(),
    resume_dir: "/resume".to_string(),
    resume_file: "Amir Aijaz - AI Engineer.pdf".to_string(),
    phone: "+923233232974".to_string(),
    socials: vec![
        SocialLink {
            kind: SocialKind::Github,
            href: "https://github.com/amiraijaz".to_string(),
        },
        SocialLink {
            kind: SocialKind::Linkedin,
            href: "https://www.linkedin.com/in/amir-aijaz-01a134233".to_string(),
        },
        SocialLink {
            kind: SocialKind::Mail,
            href: "mailto:amirejaz790@gmail.com".to_string(),
        },
    ],
});

pub fn profile() -> &'static Profile {
    &PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_and_email() {
        assert_eq!(profile().full_name(), "Amir Aijaz");
        assert_eq!(profile().email(), Some("amirejaz790@gmail.com"));
    }

    #[test]
    fn test_only_mail_link_stays_in_tab() {
        let new_tab: Vec<_> = profile()
            .socials
            .iter()
            .map(|s| (s.kind, s.opens_new_tab()))
            .collect();
        assert_eq!(
            new_tab,
            vec![
                (SocialKind::Github, true),
                (SocialKind::Linkedin, true),
                (SocialKind::Mail, false),
            ]
        );
    }
}
