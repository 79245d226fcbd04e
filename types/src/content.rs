//! Static portfolio content: the data the page renders.
//!
//! All of this is configuration, not logic. The defaults ship the content
//! the page was written for; every table can be overridden from the config
//! file.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Completion state shown on a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
        }
    }
}

/// One project card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: ProjectStatus,
    pub link: String,
}

/// One tile in the tech-stack grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Accent color as `#rrggbb`; falls back to the theme accent when unset
    /// or unparseable.
    #[serde(default)]
    pub accent: Option<String>,
}

/// External link rendered at the foot of the contact section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// A contact-form submission. Field names match what the form relay
/// expects on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
#[error("required field `{0}` is empty")]
pub struct EmptyFieldError(pub &'static str);

impl ContactMessage {
    /// Browser-native `required` semantics: every field must be non-blank.
    /// No format validation beyond that.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, EmptyFieldError> {
        let msg = Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        };
        for (label, value) in [
            ("name", &msg.name),
            ("email", &msg.email),
            ("message", &msg.message),
        ] {
            if value.trim().is_empty() {
                return Err(EmptyFieldError(label));
            }
        }
        Ok(msg)
    }
}

/// Everything the page displays, in section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioContent {
    /// Name banner in the hero section.
    pub name: String,
    /// Phrase script for the typewriter line, cycled in order.
    pub phrases: Vec<String>,
    pub projects: Vec<Project>,
    pub technologies: Vec<Technology>,
    pub social: Vec<SocialLink>,
}

impl Default for PortfolioContent {
    fn default() -> Self {
        Self {
            name: "Vishesh Varshney".to_string(),
            phrases: default_phrases(),
            projects: default_projects(),
            technologies: default_technologies(),
            social: vec![
                SocialLink {
                    label: "GitHub".to_string(),
                    url: "https://github.com/visheshvarshney".to_string(),
                },
                SocialLink {
                    label: "Email".to_string(),
                    url: "mailto:varshneyvisheshin@gmail.com".to_string(),
                },
            ],
        }
    }
}

fn default_phrases() -> Vec<String> {
    [
        "Turning coffee into code",
        "Debugging is my cardio",
        "Making machines since 2018",
        "Connecting students, building communities",
        "Extracting vessels, enhancing vision",
        "From tumors to insights, one pixel at a time",
        "Exploring the tech-verse",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}

fn default_projects() -> Vec<Project> {
    vec![
        Project {
            title: "MUJ Connect".to_string(),
            description: "A comprehensive social media platform for college students, \
                          facilitating connections and information sharing."
                .to_string(),
            status: ProjectStatus::Completed,
            link: "https://mujconnect.in/".to_string(),
        },
        Project {
            title: "MRI Stroke Classification".to_string(),
            description: "Developed deep learning models to classify MRI scans for stroke \
                          detection, utilizing advanced neural networks for accurate medical \
                          diagnosis."
                .to_string(),
            status: ProjectStatus::Completed,
            link: "https://github.com/VisheshVarshney/mri-stroke-classification".to_string(),
        },
        Project {
            title: "Brain Tumor Detector".to_string(),
            description: "A machine learning project capable of detecting benign and malignant \
                          tumors, providing crucial assistance in early diagnosis and treatment \
                          planning."
                .to_string(),
            status: ProjectStatus::Completed,
            link: "https://github.com/VisheshVarshney/brain-tumor-detector".to_string(),
        },
        Project {
            title: "Retinal Vessel Segmentation".to_string(),
            description: "Implemented classical image processing techniques for retinal vessel \
                          extraction."
                .to_string(),
            status: ProjectStatus::Completed,
            link: "https://github.com/VisheshVarshney/retinal-vessel-segmentation".to_string(),
        },
    ]
}

fn default_technologies() -> Vec<Technology> {
    [
        ("Python", "#ffd343"),
        ("PostgreSQL", "#336791"),
        ("HTML", "#e34f26"),
        ("React", "#61dafb"),
        ("TensorFlow", "#ff6f00"),
        ("CNN", "#4dabcf"),
        ("Keras", "#d00000"),
        ("PyTorch", "#ee4c2c"),
    ]
    .into_iter()
    .map(|(name, accent)| Technology {
        name: name.to_string(),
        accent: Some(accent.to_string()),
    })
    .collect()
}
