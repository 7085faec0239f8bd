//! UI guideline cards and the copyable design prompt

use crate::error::{GalleryError, Result};
use serde::Serialize;

/// Copy key of the design prompt button
pub const PROMPT_COPY_KEY: &str = "design-prompt";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Guideline {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub items: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Guideline {
    /// Markdown rendering of the card
    pub fn to_markdown(&self) -> String {
        let mut out = format!("## {}\n\n{}\n\n### Guidelines\n", self.title, self.description);
        for item in self.items {
            out.push_str("- ");
            out.push_str(item);
            out.push('\n');
        }
        out.push_str("\n### Pro Tips\n");
        for tip in self.tips {
            out.push_str("- ");
            out.push_str(tip);
            out.push('\n');
        }
        out
    }
}

pub static GUIDELINES: &[Guideline] = &[
    Guideline {
        id: "color-hierarchy",
        title: "Color Hierarchy",
        description: "Establish clear visual hierarchy using color effectively",
        items: &[
            "Primary colors for CTAs and key actions",
            "Secondary colors for supporting elements",
            "Muted colors for backgrounds and disabled states",
            "Semantic colors (red/yellow/green) for status feedback",
        ],
        tips: &[
            "Use 60-30-10 rule: 60% neutral, 30% secondary, 10% accent",
            "Ensure 4.5:1 contrast ratio for text readability",
            "Maintain consistent color meaning across the interface",
        ],
    },
    Guideline {
        id: "spacing-layout",
        title: "Spacing & Layout",
        description: "Consistent spacing creates visual rhythm and hierarchy",
        items: &[
            "Base unit of 4px (0.25rem) for all spacing",
            "Use 8px increments for padding and margins",
            "Section spacing: 24px, 32px, 48px, 64px, 96px",
            "Component internal spacing: 8px, 12px, 16px, 24px",
        ],
        tips: &[
            "More spacing = more importance",
            "Group related elements with less spacing",
            "Use whitespace to create breathing room",
        ],
    },
    Guideline {
        id: "typography-scale",
        title: "Typography Scale",
        description: "Clear typographic hierarchy guides user attention",
        items: &[
            "Display: 48-64px for hero sections",
            "H1: 32-40px for page titles",
            "H2: 24-28px for section headers",
            "H3: 18-20px for subsections",
            "Body: 16px for main content",
            "Small/Caption: 12-14px for metadata",
        ],
        tips: &[
            "Limit to 2-3 font families maximum",
            "Use font weight to create hierarchy, not just size",
            "Line height: 1.5 for body, 1.2-1.3 for headings",
        ],
    },
    Guideline {
        id: "animation-principles",
        title: "Animation Principles",
        description: "Motion should enhance usability, not distract",
        items: &[
            "Keep animations under 300ms for responsiveness",
            "Use ease-out for elements entering the screen",
            "Use ease-in for elements leaving the screen",
            "Prefer opacity and transform for performance",
        ],
        tips: &[
            "Animate on user interaction (hover, click)",
            "Use stagger animations for lists (50-100ms delay)",
            "Respect prefers-reduced-motion setting",
            "Subtle > dramatic: aim for barely noticeable",
        ],
    },
    Guideline {
        id: "component-structure",
        title: "Component Structure",
        description: "Build reusable, composable components",
        items: &[
            "Single responsibility: one component, one job",
            "Props for customization, children for content",
            "Compose complex components from simple ones",
            "Use composition over configuration",
        ],
        tips: &[
            "Export component + subcomponents pattern",
            "Provide sensible defaults, allow override",
            "Document prop types and default values",
            "Test edge cases: long text, empty states",
        ],
    },
    Guideline {
        id: "accessibility-basics",
        title: "Accessibility Basics",
        description: "Inclusive design benefits all users",
        items: &[
            "Semantic HTML: use correct elements (button, nav, main)",
            "ARIA labels for icon-only buttons",
            "Focus indicators for keyboard navigation",
            "Alt text for all meaningful images",
        ],
        tips: &[
            "Test with keyboard only (Tab, Enter, Space, Escape)",
            "Use color + icon/shape, never color alone",
            "Minimum touch target: 44x44px on mobile",
            "Provide skip links for navigation",
        ],
    },
];

pub fn find_guideline(id: &str) -> Result<&'static Guideline> {
    GUIDELINES
        .iter()
        .find(|g| g.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| GalleryError::UnknownItem {
            catalog: "guidelines",
            id: id.to_string(),
        })
}

/// System prompt text behind the "Copy Prompt" button
pub const DESIGN_PROMPT: &str = r#"You are a UI/UX designer and frontend developer. When generating UI code, follow these principles:

DESIGN SYSTEM:
- Colors: Use the Linear/Vercel-inspired palette (Primary: #5E6AD2, Dark: #0F1115, Light: #FFFFFF)
- Typography: Inter for body/UI, Space Grotesk for headings, JetBrains Mono for code
- Spacing: Base 4px unit, use 8px increments
- Border radius: 0.75rem (12px) for cards, 0.5rem (8px) for buttons
- Dark mode first, ensure light mode works well too

COMPONENT GUIDELINES:
- Build reusable components with clear props interfaces
- Use Tailwind CSS for styling
- Include hover, focus, and active states
- Ensure accessible color contrast (WCAG AA minimum)
- Add subtle animations (200-300ms) for interactions

CODE QUALITY:
- Write TypeScript with proper types
- Use semantic HTML elements
- Include ARIA labels where needed
- Export components as default + named exports
- Add JSDoc comments for complex props

Always ask: "Is this accessible? Is it responsive? Is it consistent with the design system?""#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::{CopyFeedback, MemoryClipboard};
    use honeybee_animation::AnimationScheduler;

    #[test]
    fn test_cards_have_items_and_tips() {
        assert_eq!(GUIDELINES.len(), 6);
        assert!(GUIDELINES
            .iter()
            .all(|g| !g.items.is_empty() && !g.tips.is_empty()));

        let card = find_guideline("animation-principles").unwrap();
        let text = card.to_markdown();
        assert!(text.starts_with("## Animation Principles\n"));
        assert!(text.contains("- Keep animations under 300ms for responsiveness\n"));
        assert!(text.contains("### Pro Tips\n- Animate on user interaction (hover, click)\n"));
        assert!(find_guideline("kerning").is_err());
    }

    #[test]
    fn test_prompt_copies_with_feedback() {
        let scheduler = AnimationScheduler::new();
        let mut feedback = CopyFeedback::new(&scheduler.handle());
        let mut clipboard = MemoryClipboard::new();

        assert!(feedback.copy(&mut clipboard, PROMPT_COPY_KEY, DESIGN_PROMPT));
        let copied = clipboard.contents().unwrap();
        assert!(copied.starts_with("You are a UI/UX designer"));
        assert!(copied.contains("COMPONENT GUIDELINES:"));
        assert!(copied.ends_with("consistent with the design system?\""));

        scheduler.advance(2000.0);
        assert!(!feedback.is_copied(PROMPT_COPY_KEY));
    }
}
