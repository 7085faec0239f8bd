//! Font pairings and the type scale
//!
//! Each pairing names a heading, body and code face. Every role has its own
//! copy button, so copy keys carry the role.

use crate::error::{GalleryError, Result};
use serde::Serialize;

/// One face of a pairing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FaceSpec {
    pub font: &'static str,
    /// Weight or weight range, as written in CSS docs (`"600-800"`)
    pub weight: Option<&'static str>,
    pub sizes: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FontPairing {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub heading: FaceSpec,
    pub body: FaceSpec,
    pub code: FaceSpec,
    pub sample_heading: &'static str,
    pub sample_body: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PairingRole {
    Heading,
    Body,
    Code,
}

impl PairingRole {
    pub const ALL: &'static [PairingRole] =
        &[PairingRole::Heading, PairingRole::Body, PairingRole::Code];

    pub fn slug(&self) -> &'static str {
        match self {
            PairingRole::Heading => "heading",
            PairingRole::Body => "body",
            PairingRole::Code => "code",
        }
    }

    pub fn from_slug(slug: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.slug().eq_ignore_ascii_case(slug))
            .ok_or_else(|| GalleryError::UnknownSnippet(slug.to_string()))
    }

    fn generic_family(&self) -> &'static str {
        match self {
            PairingRole::Code => "monospace",
            _ => "sans-serif",
        }
    }
}

impl FontPairing {
    pub fn face(&self, role: PairingRole) -> &FaceSpec {
        match role {
            PairingRole::Heading => &self.heading,
            PairingRole::Body => &self.body,
            PairingRole::Code => &self.code,
        }
    }

    /// CSS declarations for one role
    pub fn css(&self, role: PairingRole) -> String {
        let face = self.face(role);
        let family = format!("font-family: '{}', {};", face.font, role.generic_family());
        match face.weight {
            Some(weight) => format!("{}\nfont-weight: {};", family, weight),
            None => family,
        }
    }

    /// The theme line shown under the live preview
    pub fn theme_snippet(&self) -> String {
        format!("const theme = \"{}\"", self.id)
    }

    pub fn copy_key(&self, role: PairingRole) -> String {
        format!("{}-{}", self.id, role.slug())
    }
}

pub static PAIRINGS: &[FontPairing] = &[
    FontPairing {
        id: "modern-tech",
        name: "Modern Tech",
        description: "Clean and professional, perfect for SaaS applications",
        heading: FaceSpec {
            font: "Inter",
            weight: Some("600-800"),
            sizes: &["48px", "36px", "24px", "18px"],
        },
        body: FaceSpec {
            font: "Inter",
            weight: Some("400-500"),
            sizes: &["18px", "16px", "14px", "12px"],
        },
        code: FaceSpec {
            font: "JetBrains Mono",
            weight: None,
            sizes: &[],
        },
        sample_heading: "Build faster with better tools",
        sample_body: "Typography is the voice of your interface. Choose fonts that reflect your brand personality while maintaining excellent readability across all devices and screen sizes.",
    },
    FontPairing {
        id: "editorial-bold",
        name: "Editorial Bold",
        description: "High contrast pairing for content-heavy sites",
        heading: FaceSpec {
            font: "Space Grotesk",
            weight: Some("500-700"),
            sizes: &["56px", "42px", "28px", "22px"],
        },
        body: FaceSpec {
            font: "Inter",
            weight: Some("400-500"),
            sizes: &["20px", "17px", "15px", "13px"],
        },
        code: FaceSpec {
            font: "JetBrains Mono",
            weight: None,
            sizes: &[],
        },
        sample_heading: "Design Systems That Scale",
        sample_body: "A well-crafted design system provides consistency, efficiency, and scalability. It serves as a single source of truth for your entire product team.",
    },
    FontPairing {
        id: "minimal-mono",
        name: "Minimal Mono",
        description: "Ultra-minimal aesthetic for developer tools",
        heading: FaceSpec {
            font: "Inter",
            weight: Some("500-700"),
            sizes: &["44px", "32px", "22px", "16px"],
        },
        body: FaceSpec {
            font: "Inter",
            weight: Some("400"),
            sizes: &["16px", "15px", "14px", "12px"],
        },
        code: FaceSpec {
            font: "JetBrains Mono",
            weight: None,
            sizes: &[],
        },
        sample_heading: "npm install ui-hub",
        sample_body: "Developer-focused interfaces prioritize clarity and function. Every element serves a purpose, removing distractions while maintaining visual appeal.",
    },
];

pub fn find_pairing(id: &str) -> Result<&'static FontPairing> {
    PAIRINGS
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| GalleryError::UnknownItem {
            catalog: "pairings",
            id: id.to_string(),
        })
}

/// One step of the reference type scale
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TypeStep {
    pub name: &'static str,
    pub rem: &'static str,
    pub px: u16,
    pub line_height: &'static str,
    pub weight: u16,
}

impl TypeStep {
    /// `3rem / 48px`
    pub fn size_label(&self) -> String {
        format!("{} / {}px", self.rem, self.px)
    }
}

pub const TYPE_SCALE: &[TypeStep] = &[
    TypeStep {
        name: "Display",
        rem: "3rem",
        px: 48,
        line_height: "1.1",
        weight: 700,
    },
    TypeStep {
        name: "H1",
        rem: "2.25rem",
        px: 36,
        line_height: "1.2",
        weight: 700,
    },
    TypeStep {
        name: "H2",
        rem: "1.5rem",
        px: 24,
        line_height: "1.3",
        weight: 600,
    },
    TypeStep {
        name: "H3",
        rem: "1.25rem",
        px: 20,
        line_height: "1.4",
        weight: 600,
    },
    TypeStep {
        name: "Body Large",
        rem: "1.125rem",
        px: 18,
        line_height: "1.6",
        weight: 400,
    },
    TypeStep {
        name: "Body",
        rem: "1rem",
        px: 16,
        line_height: "1.6",
        weight: 400,
    },
    TypeStep {
        name: "Small",
        rem: "0.875rem",
        px: 14,
        line_height: "1.5",
        weight: 400,
    },
    TypeStep {
        name: "Tiny",
        rem: "0.75rem",
        px: 12,
        line_height: "1.5",
        weight: 400,
    },
];
