//! Brand color palettes

use honeybee_core::{ColorSwatch, Palette};

pub static COLORS: &[ColorSwatch] = &[
    ColorSwatch {
        id: "linear-primary",
        name: "Primary",
        hex: "#5E6AD2",
        usage: "Primary actions, links",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-primary-light",
        name: "Primary Light",
        hex: "#7B82E1",
        usage: "Hover states",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-primary-dark",
        name: "Primary Dark",
        hex: "#4B55B8",
        usage: "Active states",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-background",
        name: "Background",
        hex: "#0F1115",
        usage: "Dark mode background",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-surface",
        name: "Surface",
        hex: "#1A1D23",
        usage: "Cards, elevated surfaces",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-border",
        name: "Border",
        hex: "#2A2E37",
        usage: "Borders, dividers",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-text-primary",
        name: "Text Primary",
        hex: "#F7F8F8",
        usage: "Primary text",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "linear-text-secondary",
        name: "Text Secondary",
        hex: "#8A8F98",
        usage: "Secondary text",
        palette: Palette::Linear,
    },
    ColorSwatch {
        id: "vercel-black",
        name: "Black",
        hex: "#000000",
        usage: "Primary text, backgrounds",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-white",
        name: "White",
        hex: "#FFFFFF",
        usage: "Light backgrounds, text",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-gray-100",
        name: "Gray 100",
        hex: "#111111",
        usage: "Dark surfaces",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-gray-200",
        name: "Gray 200",
        hex: "#333333",
        usage: "Borders on dark",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-gray-500",
        name: "Gray 500",
        hex: "#666666",
        usage: "Secondary text",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-gray-700",
        name: "Gray 700",
        hex: "#999999",
        usage: "Tertiary text",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-blue",
        name: "Blue",
        hex: "#0070F3",
        usage: "Links, accent",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "vercel-cyan",
        name: "Cyan",
        hex: "#50E3C2",
        usage: "Success, highlights",
        palette: Palette::Vercel,
    },
    ColorSwatch {
        id: "stripe-purple",
        name: "Purple",
        hex: "#635BFF",
        usage: "Primary brand color",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-purple-light",
        name: "Purple Light",
        hex: "#7A73FF",
        usage: "Hover states",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-navy",
        name: "Navy",
        hex: "#0A2540",
        usage: "Dark backgrounds",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-gray-50",
        name: "Gray 50",
        hex: "#F6F9FC",
        usage: "Light backgrounds",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-gray-100",
        name: "Gray 100",
        hex: "#E3E8EE",
        usage: "Borders",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-gray-500",
        name: "Gray 500",
        hex: "#697386",
        usage: "Secondary text",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-cyan",
        name: "Cyan",
        hex: "#00D4FF",
        usage: "Accent, highlights",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "stripe-pink",
        name: "Pink",
        hex: "#FF6B9D",
        usage: "CTA, important actions",
        palette: Palette::Stripe,
    },
    ColorSwatch {
        id: "framer-blue",
        name: "Blue",
        hex: "#0055FF",
        usage: "Primary brand color",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-blue-light",
        name: "Blue Light",
        hex: "#3380FF",
        usage: "Hover states",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-dark",
        name: "Dark",
        hex: "#111111",
        usage: "Dark backgrounds",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-light",
        name: "Light",
        hex: "#FAFAFA",
        usage: "Light backgrounds",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-purple",
        name: "Purple",
        hex: "#8B5CF6",
        usage: "Accent color",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-pink",
        name: "Pink",
        hex: "#EC4899",
        usage: "Highlights",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-orange",
        name: "Orange",
        hex: "#F97316",
        usage: "Warnings, CTAs",
        palette: Palette::Framer,
    },
    ColorSwatch {
        id: "framer-green",
        name: "Green",
        hex: "#22C55E",
        usage: "Success states",
        palette: Palette::Framer,
    },
];
