use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
}

static EDUCATION: Lazy<Vec<Education>> = Lazy::new(|| {
    vec![
        Education {
            degree: "Bachelors in Computer Science".to_string(),
            institution: "University of Karachi".to_string(),
            period: "2021 - 2024".to_string(),
        },
        Education {
            degree: "Pre-Engineering".to_string(),
            institution: "Govt. Dehli College".to_string(),
            period: "2018 - 2020".to_string(),
        },
    ]
});

const CERTIFICATIONS: &[&str] = &[
    "AI for Everyone – DeepLearning.ai",
    "Python for Data Science, AI & Development – IBM",
    "Ask Questions to Make Data-Driven Decisions – Google",
    "Foundations of project management - Google",
    "What is Data Science? - IBM",
    "Certifcate of Participation - Procom'23",
];

pub fn education() -> &'static [Education] {
    EDUCATION.as_slice()
}

pub fn certifications() -> &'static [&'static str] {
    CERTIFICATIONS
}
