//! Google Fonts listings

use honeybee_core::{Font, FontCategory};

pub static FONTS: &[Font] = &[
    Font {
        id: "playfair-display",
        name: "Playfair Display",
        family: "Playfair Display",
        category: FontCategory::Serif,
        weights: &[400, 500, 600, 700, 800, 900],
        preview_text: "Elegant & Timeless",
        description: "High contrast transitional serif with classic elegance",
    },
    Font {
        id: "merriweather",
        name: "Merriweather",
        family: "Merriweather",
        category: FontCategory::Serif,
        weights: &[300, 400, 700, 900],
        preview_text: "Readable & Warm",
        description: "Designed for screen readability with warm character",
    },
    Font {
        id: "lora",
        name: "Lora",
        family: "Lora",
        category: FontCategory::Serif,
        weights: &[400, 500, 600, 700],
        preview_text: "Calligraphic Flow",
        description: "Modern serif with calligraphic roots and high readability",
    },
    Font {
        id: "libre-baskerville",
        name: "Libre Baskerville",
        family: "Libre Baskerville",
        category: FontCategory::Serif,
        weights: &[400, 700],
        preview_text: "Classic Beauty",
        description: "Optimized for body text with American Type Founders heritage",
    },
    Font {
        id: "cormorant-garamond",
        name: "Cormorant Garamond",
        family: "Cormorant Garamond",
        category: FontCategory::Serif,
        weights: &[300, 400, 500, 600, 700],
        preview_text: "Renaissance Grace",
        description: "Contemporary Garamond revival with delicate letterforms",
    },
    Font {
        id: "pt-serif",
        name: "PT Serif",
        family: "PT Serif",
        category: FontCategory::Serif,
        weights: &[400, 700],
        preview_text: "Universal Serif",
        description: "Transitional serif designed for multilingual publications",
    },
    Font {
        id: "source-serif-pro",
        name: "Source Serif Pro",
        family: "Source Serif Pro",
        category: FontCategory::Serif,
        weights: &[200, 300, 400, 600, 700, 900],
        preview_text: "Open Source",
        description: "Adobe's open-source serif companion to Source Sans",
    },
    Font {
        id: "crimson-text",
        name: "Crimson Text",
        family: "Crimson Text",
        category: FontCategory::Serif,
        weights: &[400, 600, 700],
        preview_text: "Book Typography",
        description: "Inspired by old-style book typefaces like Garamond",
    },
    Font {
        id: "eb-garamond",
        name: "EB Garamond",
        family: "EB Garamond",
        category: FontCategory::Serif,
        weights: &[400, 500, 600, 700, 800],
        preview_text: "Timeless Classic",
        description: "Revival of Claude Garamond's 16th-century typeface",
    },
    Font {
        id: "frank-ruhl-libre",
        name: "Frank Ruhl Libre",
        family: "Frank Ruhl Libre",
        category: FontCategory::Serif,
        weights: &[300, 400, 500, 700, 900],
        preview_text: "Hebrew Heritage",
        description: "Open-source version of classic Frank Ruhl Hebrew typeface",
    },
    Font {
        id: "inter",
        name: "Inter",
        family: "Inter",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Modern UI Font",
        description: "Designed specifically for computer screens and interfaces",
    },
    Font {
        id: "roboto",
        name: "Roboto",
        family: "Roboto",
        category: FontCategory::SansSerif,
        weights: &[100, 300, 400, 500, 700, 900],
        preview_text: "Google's Choice",
        description: "Material Design's signature geometric sans-serif",
    },
    Font {
        id: "open-sans",
        name: "Open Sans",
        family: "Open Sans",
        category: FontCategory::SansSerif,
        weights: &[300, 400, 500, 600, 700, 800],
        preview_text: "Humanist & Friendly",
        description: "Neutral and versatile with excellent legibility",
    },
    Font {
        id: "montserrat",
        name: "Montserrat",
        family: "Montserrat",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Urban Typography",
        description: "Inspired by Buenos Aires neighborhood signage",
    },
    Font {
        id: "poppins",
        name: "Poppins",
        family: "Poppins",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Geometric Round",
        description: "Geometric sans-serif with pure, rounded forms",
    },
    Font {
        id: "nunito",
        name: "Nunito",
        family: "Nunito",
        category: FontCategory::SansSerif,
        weights: &[200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Rounded Friendly",
        description: "Well-balanced rounded terminal sans-serif",
    },
    Font {
        id: "work-sans",
        name: "Work Sans",
        family: "Work Sans",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Optimised for UI",
        description: "Based on early Grotesques, optimized for screens",
    },
    Font {
        id: "dm-sans",
        name: "DM Sans",
        family: "DM Sans",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Contemporary",
        description: "Low-contrast geometric sans by Colophon Foundry",
    },
    Font {
        id: "source-sans-pro",
        name: "Source Sans Pro",
        family: "Source Sans Pro",
        category: FontCategory::SansSerif,
        weights: &[200, 300, 400, 600, 700, 900],
        preview_text: "Adobe Original",
        description: "Adobe's first open-source typeface family",
    },
    Font {
        id: "ibm-plex-sans",
        name: "IBM Plex Sans",
        family: "IBM Plex Sans",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700],
        preview_text: "Corporate Bold",
        description: "IBM's open-source typeface designed for brand identity",
    },
    Font {
        id: "karla",
        name: "Karla",
        family: "Karla",
        category: FontCategory::SansSerif,
        weights: &[200, 300, 400, 500, 600, 700, 800],
        preview_text: "Grotesque Warmth",
        description: "Warm and friendly grotesque sans-serif",
    },
    Font {
        id: "heebo",
        name: "Heebo",
        family: "Heebo",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Hebrew & Latin",
        description: "Designed for Hebrew and Latin scripts together",
    },
    Font {
        id: "barlow",
        name: "Barlow",
        family: "Barlow",
        category: FontCategory::SansSerif,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800, 900],
        preview_text: "Industrial Californian",
        description: "Inspired by California car license plates and signage",
    },
    Font {
        id: "rubik",
        name: "Rubik",
        family: "Rubik",
        category: FontCategory::SansSerif,
        weights: &[300, 400, 500, 600, 700, 800, 900],
        preview_text: "Slightly Rounded",
        description: "5-weight family with slightly rounded corners",
    },
    Font {
        id: "oxygen",
        name: "Oxygen",
        family: "Oxygen",
        category: FontCategory::SansSerif,
        weights: &[300, 400, 700],
        preview_text: "KDE Project",
        description: "Created for the KDE desktop environment",
    },
    Font {
        id: "bebas-neue",
        name: "Bebas Neue",
        family: "Bebas Neue",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "BOLD IMPACT",
        description: "All-caps display font perfect for headlines",
    },
    Font {
        id: "oswald",
        name: "Oswald",
        family: "Oswald",
        category: FontCategory::Display,
        weights: &[200, 300, 400, 500, 600, 700],
        preview_text: "Condensed Power",
        description: "Reimagined gothic alternate with condensed forms",
    },
    Font {
        id: "archivo-black",
        name: "Archivo Black",
        family: "Archivo Black",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "HEAVY WEIGHT",
        description: "Bold sans-serif from the Archivo family",
    },
    Font {
        id: "righteous",
        name: "Righteous",
        family: "Righteous",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "Geometric Display",
        description: "Condensed geometric sans-serif with high impact",
    },
    Font {
        id: "black-ops-one",
        name: "Black Ops One",
        family: "Black Ops One",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "MILITARY STYLE",
        description: "Stencil-style display font with military aesthetic",
    },
    Font {
        id: "bangers",
        name: "Bangers",
        family: "Bangers",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "COMIC ACTION!",
        description: "Comic book style display font with explosive energy",
    },
    Font {
        id: "fredericka-the-great",
        name: "Fredericka the Great",
        family: "Fredericka the Great",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "Sketch Style",
        description: "Outlined sketch style with vintage charm",
    },
    Font {
        id: "chewy",
        name: "Chewy",
        family: "Chewy",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "Playful Fun",
        description: "Bouncy, playful display font for fun designs",
    },
    Font {
        id: "luckiest-guy",
        name: "Luckiest Guy",
        family: "Luckiest Guy",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "CARTOON STYLE",
        description: "Heavy comic display font with 3D-like weight",
    },
    Font {
        id: "unica-one",
        name: "Unica One",
        family: "Unica One",
        category: FontCategory::Display,
        weights: &[400],
        preview_text: "MODERN CONDENSED",
        description: "Condensed uppercase display with clean lines",
    },
    Font {
        id: "fira-code",
        name: "Fira Code",
        family: "Fira Code",
        category: FontCategory::Monospace,
        weights: &[300, 400, 500, 600, 700],
        preview_text: "const code = true;",
        description: "Monospaced font with programming ligatures",
    },
    Font {
        id: "jetbrains-mono",
        name: "JetBrains Mono",
        family: "JetBrains Mono",
        category: FontCategory::Monospace,
        weights: &[100, 200, 300, 400, 500, 600, 700, 800],
        preview_text: "function dev() {}",
        description: "Typeface for developers with increased readability",
    },
    Font {
        id: "source-code-pro",
        name: "Source Code Pro",
        family: "Source Code Pro",
        category: FontCategory::Monospace,
        weights: &[200, 300, 400, 500, 600, 700, 900],
        preview_text: "git commit -m",
        description: "Adobe's open-source monospaced companion",
    },
    Font {
        id: "roboto-mono",
        name: "Roboto Mono",
        family: "Roboto Mono",
        category: FontCategory::Monospace,
        weights: &[100, 200, 300, 400, 500, 600, 700],
        preview_text: "npm install font",
        description: "Monospaced version of Google's Roboto family",
    },
    Font {
        id: "space-mono",
        name: "Space Mono",
        family: "Space Mono",
        category: FontCategory::Monospace,
        weights: &[400, 700],
        preview_text: "console.log(2024);",
        description: "Fixed-width family designed for display use",
    },
    Font {
        id: "dancing-script",
        name: "Dancing Script",
        family: "Dancing Script",
        category: FontCategory::Handwriting,
        weights: &[400, 500, 600, 700],
        preview_text: "Elegant Flow",
        description: "Lively casual script with bouncy baseline",
    },
    Font {
        id: "pacifico",
        name: "Pacifico",
        family: "Pacifico",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Surfer Style",
        description: "Brush script inspired by 1950s American surf culture",
    },
    Font {
        id: "satisfy",
        name: "Satisfy",
        family: "Satisfy",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Cursive Charm",
        description: "Casual cursive script with contemporary feel",
    },
    Font {
        id: "great-vibes",
        name: "Great Vibes",
        family: "Great Vibes",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Formal Script",
        description: "Beautiful flowing script with elaborate capital letters",
    },
    Font {
        id: "caveat",
        name: "Caveat",
        family: "Caveat",
        category: FontCategory::Handwriting,
        weights: &[400, 500, 600, 700],
        preview_text: "Handwritten Note",
        description: "Handwriting style perfect for annotations",
    },
    Font {
        id: "sacramento",
        name: "Sacramento",
        family: "Sacramento",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Monoline Script",
        description: "1950s-60s hand-lettered script style",
    },
    Font {
        id: "allura",
        name: "Allura",
        family: "Allura",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Calligraphic",
        description: "Clean and highly legible script typeface",
    },
    Font {
        id: "alex-brush",
        name: "Alex Brush",
        family: "Alex Brush",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "Brush Script",
        description: "Elegant brush script with thick and thin strokes",
    },
    Font {
        id: "parisienne",
        name: "Parisienne",
        family: "Parisienne",
        category: FontCategory::Handwriting,
        weights: &[400],
        preview_text: "French Chic",
        description: "Stylish French script with calligraphic flourishes",
    },
    Font {
        id: "tangerine",
        name: "Tangerine",
        family: "Tangerine",
        category: FontCategory::Handwriting,
        weights: &[400, 700],
        preview_text: "Thin & Elegant",
        description: "Delicate calligraphic style inspired by italic chancery hands",
    },
];
