//! Honeybee CLI
//!
//! Browse the showcase catalogs, copy snippets, and preview the text effects.

use anyhow::Result;
use clap::{Parser, Subcommand};
use honeybee_animation::AnimationScheduler;
use honeybee_core::{
    Catalog, CatalogEntry, CatalogItem, CatalogKind, Category, CategoryFilter, FilterState,
};
use honeybee_gallery::{
    copy_key, find_guideline, find_pairing, parse_kind, render_snippet, AgentAccess, Catalogs,
    CopyFeedback, FontPairing, FontStylesheets, GalleryController, Navigation, PairingRole,
    SnippetKind, DESIGN_PROMPT, ENDPOINTS, GUIDELINES, NAV_ITEMS, PAIRINGS, PROMPT_COPY_KEY,
    TYPE_SCALE,
};
use honeybee_interact::{RevealConfig, ScrambleConfig, DEFAULT_STAGGER_S};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod clipboard;
mod config;
mod preview;

use clipboard::SystemClipboard;
use config::HoneybeeConfig;

#[derive(Parser)]
#[command(name = "honeybee")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Honeybee UI showcase CLI", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (defaults to ./honeybee.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog entries (fonts, gradients, animations, colors, components)
    List {
        /// Catalog name
        catalog: String,

        /// Category slug, or "all"
        #[arg(short = 'k', long, default_value = "all")]
        category: String,

        /// Case-insensitive search over names and descriptions
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Show one entry with all of its snippets
    Show {
        catalog: String,
        id: String,

        /// Print the entry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a snippet of an entry to the system clipboard
    Copy {
        catalog: String,
        id: String,

        /// Snippet kind (import, link, css, code, hex)
        #[arg(short, long)]
        kind: Option<String>,
    },

    /// Render the JSON response of an agent API path
    Api {
        /// Request path, e.g. /api/v1/gradients
        path: String,
    },

    /// Agent access material
    Agent {
        #[command(subcommand)]
        command: AgentCommands,
    },

    /// Print every frame of a scramble reveal
    Scramble {
        text: String,

        /// Delay before the first tick, in seconds
        #[arg(short, long, default_value_t = 0.0)]
        delay: f64,

        /// RNG seed (overrides motion.scramble_seed)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the per-character schedule of a letter reveal
    Reveal {
        text: String,

        /// Delay before the reveal starts, in seconds
        #[arg(short, long, default_value_t = 0.0)]
        delay: f64,

        /// Stagger unit between characters, in seconds
        #[arg(short, long, default_value_t = DEFAULT_STAGGER_S)]
        stagger: f64,
    },

    /// Show the page sections and header behavior
    Nav {
        /// Report the header mode at this scroll offset (px)
        #[arg(long)]
        scroll: Option<f32>,

        /// Resolve an anchor such as #fonts
        #[arg(long)]
        goto: Option<String>,
    },

    /// Show font pairings and the type scale
    Pairings {
        /// Pairing id, e.g. modern-tech
        id: Option<String>,

        /// Copy the CSS of one role (heading, body, code)
        #[arg(long)]
        copy: Option<String>,
    },

    /// Show the UI guideline cards
    Guidelines {
        /// Guideline id, e.g. color-hierarchy
        id: Option<String>,

        /// Print the design prompt instead
        #[arg(long)]
        prompt: bool,

        /// Copy the design prompt to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Subcommand)]
enum AgentCommands {
    /// List the API endpoints
    Endpoints,
    /// System prompt text for an assistant
    Instructions,
    /// Agent manifest JSON
    Manifest,
    /// MCP client configuration JSON
    Mcp,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(cli.verbose, rust_log.as_deref());

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let cwd = std::env::current_dir()?;
    let config = HoneybeeConfig::load(cli.config.as_deref(), &cwd)?;

    match cli.command {
        Commands::List {
            catalog,
            category,
            query,
        } => cmd_list(&catalog, &category, &query),

        Commands::Show { catalog, id, json } => cmd_show(&config, &catalog, &id, json),

        Commands::Copy { catalog, id, kind } => cmd_copy(&config, &catalog, &id, kind.as_deref()),

        Commands::Api { path } => cmd_api(&config, &path),

        Commands::Agent { command } => cmd_agent(&config, command),

        Commands::Scramble { text, delay, seed } => cmd_scramble(&config, &text, delay, seed),

        Commands::Reveal {
            text,
            delay,
            stagger,
        } => cmd_reveal(&text, delay, stagger),

        Commands::Nav { scroll, goto } => cmd_nav(scroll, goto.as_deref()),

        Commands::Pairings { id, copy } => cmd_pairings(&config, id.as_deref(), copy.as_deref()),

        Commands::Guidelines { id, prompt, copy } => {
            cmd_guidelines(&config, id.as_deref(), prompt, copy)
        }

        Commands::Config => cmd_config(&config),
    }
}

/// `RUST_LOG` wins when it parses; otherwise `info`, or `debug` with `--verbose`
fn log_filter(verbose: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("ignoring invalid RUST_LOG '{}': {}", directives, err),
        }
    }
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

// =============================================================================
// Catalog commands
// =============================================================================

/// A filtered catalog, ready to print
#[derive(Debug, PartialEq)]
struct Listing {
    chips: Vec<String>,
    rows: Vec<(String, &'static str, String)>,
}

fn listing<T>(
    catalog: &Catalog<T>,
    all_label: &'static str,
    category: &str,
    query: &str,
) -> Result<Listing>
where
    T: CatalogEntry + Clone,
{
    let filter = FilterState::new(CategoryFilter::from_slug(category)?, query);
    let mut gallery = GalleryController::new(catalog.clone()).with_all_label(all_label);
    gallery.set_filter(filter);

    let chips = gallery
        .category_chips()
        .iter()
        .map(|chip| format!("{} ({})", chip.label, chip.count))
        .collect();
    let rows = gallery
        .visible()
        .map(|item| {
            (
                item.id().to_string(),
                item.category().label(),
                item.name().to_string(),
            )
        })
        .collect();
    Ok(Listing { chips, rows })
}

fn catalog_listing(
    catalogs: &Catalogs,
    kind: CatalogKind,
    category: &str,
    query: &str,
) -> Result<Listing> {
    match kind {
        CatalogKind::Fonts => listing(&catalogs.fonts, "All Fonts", category, query),
        CatalogKind::Gradients => listing(&catalogs.gradients, "All", category, query),
        CatalogKind::Animations => listing(&catalogs.animations, "All", category, query),
        CatalogKind::Colors => listing(&catalogs.colors, "All Palettes", category, query),
        CatalogKind::Components => listing(&catalogs.components, "All", category, query),
    }
}

fn cmd_list(catalog: &str, category: &str, query: &str) -> Result<()> {
    let catalogs = Catalogs::load()?;
    let kind = parse_kind(catalog)?;
    let listing = catalog_listing(&catalogs, kind, category, query)?;

    println!("{}", listing.chips.join("  "));
    println!();
    if listing.rows.is_empty() {
        warn!("No {} match '{}' in category '{}'", kind.slug(), query, category);
        return Ok(());
    }
    for (id, label, name) in &listing.rows {
        println!("  {:<28} {:<16} {}", id, label, name);
    }
    println!();
    println!("{} of {} {}", listing.rows.len(), catalogs.len(kind), kind.slug());
    Ok(())
}

fn cmd_show(config: &HoneybeeConfig, catalog: &str, id: &str, json: bool) -> Result<()> {
    let catalogs = Catalogs::load()?;
    let item = catalogs.require(parse_kind(catalog)?, id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&item)?);
        return Ok(());
    }

    println!("{} ({})", item.name(), item.id());
    println!("  category: {}", item.category().label());
    println!("  {}", item.description());

    match item {
        CatalogItem::Font(font) => {
            let stylesheets = FontStylesheets::with_base(config.fonts.stylesheet_base.as_str());
            println!("  family:     {}", font.family);
            println!("  weights:    {:?}", font.weights);
            println!("  preview:    {}", font.preview_text);
            println!("  stylesheet: {}", stylesheets.url(&font));
        }
        CatalogItem::Gradient(gradient) => println!("  usage: {}", gradient.usage),
        CatalogItem::Animation(demo) => {
            println!("  dependencies: {}", demo.dependencies.join(", "))
        }
        CatalogItem::Component(component) => {
            println!("  dependencies: {}", component.dependencies.join(", "))
        }
        CatalogItem::Color(swatch) => {
            let rgb = swatch.rgb()?;
            println!(
                "  rgb({}, {}, {}), {} background",
                rgb.r,
                rgb.g,
                rgb.b,
                if rgb.is_light() { "light" } else { "dark" }
            );
        }
    }

    for &kind in SnippetKind::ALL {
        if let Ok(text) = render_snippet(&item, kind) {
            println!();
            println!("[{}]", kind.slug());
            println!("{}", text);
        }
    }
    Ok(())
}

fn cmd_copy(config: &HoneybeeConfig, catalog: &str, id: &str, kind: Option<&str>) -> Result<()> {
    let catalogs = Catalogs::load()?;
    let catalog_kind = parse_kind(catalog)?;
    let item = catalogs.require(catalog_kind, id)?;
    let snippet = match kind {
        Some(slug) => SnippetKind::from_slug(slug)?,
        None => SnippetKind::default_for(catalog_kind),
    };
    let text = render_snippet(&item, snippet)?;

    let what = format!("{} snippet of {}", snippet.slug(), item.name());
    copy_or_print(config, &copy_key(&item, snippet), &text, &what);
    Ok(())
}

/// Copy `text` under `key`, falling back to stdout without a clipboard
fn copy_or_print(config: &HoneybeeConfig, key: &str, text: &str, what: &str) {
    let scheduler = AnimationScheduler::new();
    let mut feedback =
        CopyFeedback::with_duration(&scheduler.handle(), config.motion.copy_feedback_ms);

    if feedback.copy(&mut SystemClipboard, key, text) {
        info!("Copied {}", what);
    } else {
        // No clipboard: hand the snippet over on stdout instead
        println!("{}", text);
    }
}

// =============================================================================
// Typography and guidelines
// =============================================================================

fn print_pairing(pairing: &FontPairing) {
    println!("{} ({})", pairing.name, pairing.id);
    println!("  {}", pairing.description);
    for &role in PairingRole::ALL {
        let face = pairing.face(role);
        print!("  {:<8} {}", role.slug(), face.font);
        if let Some(weight) = face.weight {
            print!(", weight {}", weight);
        }
        if !face.sizes.is_empty() {
            print!(" [{}]", face.sizes.join(" "));
        }
        println!();
    }
    println!("  {}", pairing.theme_snippet());
}

fn cmd_pairings(config: &HoneybeeConfig, id: Option<&str>, copy: Option<&str>) -> Result<()> {
    let Some(id) = id else {
        if copy.is_some() {
            anyhow::bail!("--copy needs a pairing id");
        }
        for pairing in PAIRINGS {
            print_pairing(pairing);
            println!();
        }
        println!("Type scale");
        for step in TYPE_SCALE {
            println!(
                "  {:<12} {:<18} line-height {}  weight {}",
                step.name,
                step.size_label(),
                step.line_height,
                step.weight
            );
        }
        return Ok(());
    };

    let pairing = find_pairing(id)?;
    match copy {
        Some(role) => {
            let role = PairingRole::from_slug(role)?;
            let what = format!("{} {} CSS", pairing.name, role.slug());
            copy_or_print(config, &pairing.copy_key(role), &pairing.css(role), &what);
        }
        None => {
            print_pairing(pairing);
            for &role in PairingRole::ALL {
                println!();
                println!("[{}]", role.slug());
                println!("{}", pairing.css(role));
            }
        }
    }
    Ok(())
}

fn cmd_guidelines(
    config: &HoneybeeConfig,
    id: Option<&str>,
    prompt: bool,
    copy: bool,
) -> Result<()> {
    if copy {
        copy_or_print(config, PROMPT_COPY_KEY, DESIGN_PROMPT, "design prompt");
        return Ok(());
    }
    if prompt {
        println!("{}", DESIGN_PROMPT);
        return Ok(());
    }
    match id {
        Some(id) => print!("{}", find_guideline(id)?.to_markdown()),
        None => {
            for guideline in GUIDELINES {
                println!("{:<22} {}", guideline.id, guideline.title);
                println!("  {}", guideline.description);
            }
        }
    }
    Ok(())
}

// =============================================================================
// Agent commands
// =============================================================================

fn cmd_api(config: &HoneybeeConfig, path: &str) -> Result<()> {
    let catalogs = Catalogs::load()?;
    let agent = AgentAccess::with_base_url(&catalogs, config.site.api_base_url.as_str());
    println!("{}", agent.respond(path)?);
    Ok(())
}

fn cmd_agent(config: &HoneybeeConfig, command: AgentCommands) -> Result<()> {
    let catalogs = Catalogs::load()?;
    let agent = AgentAccess::with_base_url(&catalogs, config.site.api_base_url.as_str());

    match command {
        AgentCommands::Endpoints => {
            for endpoint in ENDPOINTS {
                println!(
                    "  {:<4} {:<48} {}",
                    endpoint.method,
                    agent.endpoint_url(endpoint),
                    endpoint.description
                );
            }
        }
        AgentCommands::Instructions => println!("{}", agent.instructions()),
        AgentCommands::Manifest => println!("{}", agent.agent_config()?),
        AgentCommands::Mcp => println!("{}", agent.mcp_config()?),
    }
    Ok(())
}

// =============================================================================
// Effect previews
// =============================================================================

fn cmd_scramble(config: &HoneybeeConfig, text: &str, delay: f64, seed: Option<u64>) -> Result<()> {
    if delay < 0.0 {
        anyhow::bail!("Delay must not be negative, got {}", delay);
    }
    let scramble = ScrambleConfig {
        delay_s: delay,
        tick_ms: config.motion.scramble_tick_ms,
    };
    let rng = match seed.or(config.motion.scramble_seed) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for frame in preview::scramble_frames(text, scramble, rng) {
        println!("{:>7.0}ms  {}", frame.at_ms, frame.text);
    }
    Ok(())
}

fn cmd_reveal(text: &str, delay: f64, stagger: f64) -> Result<()> {
    if delay < 0.0 || stagger < 0.0 {
        anyhow::bail!("Delay and stagger must not be negative");
    }
    let config = RevealConfig {
        delay_s: delay,
        stagger_s: stagger,
    };
    let (slots, total_ms) = preview::reveal_schedule(text, config);

    let mut word = None;
    for slot in &slots {
        if word != Some(slot.word) {
            println!("word {}", slot.word);
            word = Some(slot.word);
        }
        println!(
            "  '{}'  {:>8.1}ms -> {:>8.1}ms",
            slot.ch, slot.start_ms, slot.rest_ms
        );
    }
    println!("done after {:.1}ms", total_ms);
    Ok(())
}

// =============================================================================
// Site commands
// =============================================================================

fn cmd_nav(scroll: Option<f32>, goto: Option<&str>) -> Result<()> {
    let mut nav = Navigation::new();

    for item in NAV_ITEMS {
        println!(
            "  {:<12} {:<14} {}",
            item.href(),
            item.name,
            if item.primary { "header" } else { "anchor" }
        );
    }

    if let Some(offset) = scroll {
        println!();
        println!("header at {}px: {:?}", offset, nav.on_scroll(offset));
    }

    if let Some(anchor) = goto {
        match nav.navigate(anchor) {
            Some(item) => println!("{} -> {}", anchor, item.name),
            None => anyhow::bail!("Unknown section '{}'", anchor),
        }
    }
    Ok(())
}

fn cmd_config(config: &HoneybeeConfig) -> Result<()> {
    println!("# {}", config.site.name);
    print!("{}", config.to_toml()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rust_log_overrides_verbosity() {
        use tracing_subscriber::filter::LevelFilter;

        let level = |verbose, rust_log| log_filter(verbose, rust_log).max_level_hint();
        assert_eq!(level(false, None), Some(LevelFilter::INFO));
        assert_eq!(level(true, None), Some(LevelFilter::DEBUG));
        assert_eq!(level(true, Some("  ")), Some(LevelFilter::DEBUG));
        assert_eq!(
            level(false, Some("honeybee_gallery=trace")),
            Some(LevelFilter::TRACE)
        );

        // Unparseable directives fall back to the flag
        assert_eq!(
            level(true, Some("honeybee=loud")),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn test_parse_list_flags() {
        let cli = Cli::try_parse_from([
            "honeybee", "list", "fonts", "-k", "serif", "--query", "garamond", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::List {
                catalog,
                category,
                query,
            } => {
                assert_eq!(catalog, "fonts");
                assert_eq!(category, "serif");
                assert_eq!(query, "garamond");
            }
            _ => panic!("expected list"),
        }
    }

    #[test]
    fn test_listing_filters_and_counts() {
        let catalogs = Catalogs::load().unwrap();
        let listing =
            catalog_listing(&catalogs, CatalogKind::Fonts, "serif", "garamond").unwrap();
        assert_eq!(listing.chips[0], "All Fonts (50)");
        assert!(listing.chips.contains(&"Serif (10)".to_string()));
        let ids: Vec<&str> = listing.rows.iter().map(|(id, _, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["cormorant-garamond", "crimson-text", "eb-garamond"]);
        assert!(listing.rows.iter().all(|(_, label, _)| *label == "Serif"));
    }

    #[test]
    fn test_listing_rejects_unknown_category() {
        let catalogs = Catalogs::load().unwrap();
        let err = catalog_listing(&catalogs, CatalogKind::Gradients, "plaid", "").unwrap_err();
        assert!(err.to_string().contains("plaid"));

        let all = catalog_listing(&catalogs, CatalogKind::Gradients, "all", "").unwrap();
        assert_eq!(all.rows.len(), 12);
    }

    #[test]
    fn test_component_listing() {
        let catalogs = Catalogs::load().unwrap();
        let listing = catalog_listing(&catalogs, CatalogKind::Components, "feedback", "").unwrap();
        assert_eq!(listing.chips[0], "All (8)");
        assert!(listing.chips.contains(&"Feedback (2)".to_string()));
        let ids: Vec<&str> = listing.rows.iter().map(|(id, _, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["badges", "alert-toast"]);

        let search = catalog_listing(&catalogs, CatalogKind::Components, "all", "dialog").unwrap();
        assert_eq!(search.rows.len(), 1);
        assert_eq!(search.rows[0].2, "Modal/Dialog");
    }

    #[test]
    fn test_parse_section_commands() {
        let cli =
            Cli::try_parse_from(["honeybee", "pairings", "modern-tech", "--copy", "code"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Pairings { id: Some(ref id), copy: Some(ref role) }
                if id == "modern-tech" && role == "code"
        ));

        let cli = Cli::try_parse_from(["honeybee", "guidelines", "--prompt"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Guidelines {
                id: None,
                prompt: true,
                copy: false
            }
        ));
    }

    #[test]
    fn test_pairings_reject_unknown_input() {
        let config = HoneybeeConfig::default();
        assert!(cmd_pairings(&config, None, Some("body")).is_err());
        assert!(cmd_pairings(&config, Some("comic"), None).is_err());
        assert!(cmd_pairings(&config, Some("modern-tech"), Some("caption")).is_err());
        assert!(cmd_guidelines(&config, Some("kerning"), false, false).is_err());
    }
}
