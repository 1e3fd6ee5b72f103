#![deny(unsafe_code)]
//! CLI binary for the OLED color-scheme engine.
//!
//! Subcommands:
//! - `synth`: synthesize a scheme from hue, style, seed and tier (or a recipe file)
//! - `random`: synthesize a random scheme
//! - `optimize <palette>`: remap a registered source palette
//! - `analyze <scheme.json>`: score a scheme
//! - `simulate <hex> <vision>`: simulate a color-vision deficiency
//! - `access <fg> <bg>`: assess a color pair across vision types
//! - `preview <scheme.json>`: write a PNG swatch grid
//! - `list`: print generators, palettes, styles, tiers and vision types

mod error;

use chrono::Utc;
use clap::{Parser, Subcommand};
use error::CliError;
use oledscheme_analysis::{
    analyze, assess_accessibility, simulate, AnalysisResult, UsageContext, VisionType,
};
use oledscheme_core::color::Rgb8;
use oledscheme_core::harmony::HarmonyStyle;
use oledscheme_core::risk::RiskTier;
use oledscheme_core::{ColorScheme, SchemeGenerator, SchemeRecipe, SourcePalette};
use oledscheme_generators::GeneratorKind;
use oledscheme_optimize::{OptimizeOptions, Optimizer};
use oledscheme_synth::Synthesizer;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "oledscheme", about = "OLED-safe terminal color scheme engine")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Log debug events to stderr (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Synthesize a scheme from a base hue, harmony style, seed and risk tier.
    Synth {
        /// Base hue in degrees.
        #[arg(long, default_value_t = 180.0, allow_negative_numbers = true)]
        hue: f64,

        /// Harmony style (monochrome, complementary, triadic, analogous,
        /// split-complementary, tetradic, spectral).
        #[arg(short, long, default_value = "monochrome")]
        style: String,

        /// Seed string for reproducible jitter.
        #[arg(long, default_value = "oled")]
        seed: String,

        /// Scheme name.
        #[arg(short, long, default_value = "Untitled")]
        name: String,

        /// Risk tier (ultra-conservative, conservative, balanced, aggressive).
        #[arg(short, long, default_value = "balanced")]
        tier: String,

        /// Read every input from a recipe JSON file instead.
        #[arg(long, conflicts_with_all = ["hue", "style", "seed", "name", "tier"])]
        recipe: Option<PathBuf>,

        /// Write the scheme JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Synthesize a random scheme on the balanced tier.
    Random {
        /// Write the scheme JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Remap a registered source palette into an OLED-safe scheme.
    Optimize {
        /// Source palette id (see `list`).
        palette: String,

        /// Risk tier.
        #[arg(short, long, default_value = "balanced")]
        tier: String,

        /// Share of the tier's chroma ceiling colors may keep, in [0, 1].
        #[arg(long, default_value_t = oledscheme_optimize::DEFAULT_PRESERVE_SATURATION)]
        preserve_saturation: f64,

        /// How closely lightness follows the source, in [0, 1].
        #[arg(long, default_value_t = oledscheme_optimize::DEFAULT_PRESERVE_BRIGHTNESS)]
        preserve_brightness: f64,

        /// Pull toward each role's lightness cap, in [0, 1].
        #[arg(long, default_value_t = oledscheme_optimize::DEFAULT_CONTRAST_BOOST)]
        contrast_boost: f64,

        /// Write the scheme JSON to this file.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Score a scheme JSON file.
    Analyze {
        /// Path to a scheme JSON file.
        scheme: PathBuf,
    },
    /// Show how a color appears under a color-vision deficiency.
    Simulate {
        /// Hex color, e.g. "#ff5555".
        hex: String,

        /// Vision type (normal, protanopia, deuteranopia, tritanopia, achromatopsia).
        vision: String,
    },
    /// Assess a foreground/background pair across all vision types.
    Access {
        fg: String,
        bg: String,

        /// Usage context (text, interface, data).
        #[arg(short, long, default_value = "text")]
        context: String,
    },
    /// Write a PNG swatch grid of a scheme JSON file.
    Preview {
        /// Path to a scheme JSON file.
        scheme: PathBuf,

        /// Output file path.
        #[arg(short, long, default_value = "preview.png")]
        output: PathBuf,

        /// Swatch edge in pixels.
        #[arg(long, default_value_t = 32)]
        swatch: usize,
    },
    /// List generators, source palettes, styles, tiers and vision types.
    List,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn parse_tier(name: &str) -> Result<RiskTier, CliError> {
    name.parse().map_err(CliError::from)
}

fn parse_hex(hex: &str) -> Result<Rgb8, CliError> {
    Rgb8::from_hex(hex).map_err(CliError::from)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    tracing::debug!(path = %path.display(), "reading JSON");
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid JSON in {}: {e}", path.display())))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "writing JSON");
    fs::write(path, text).map_err(|e| CliError::Io(format!("{}: {e}", path.display())))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_scheme(scheme: &ColorScheme) {
    println!(
        "{} ({}, hue {}, {})",
        scheme.name, scheme.style, scheme.hue, scheme.risk_tier
    );
    for (slot, hex) in ColorScheme::slot_names().iter().zip(scheme.all_colors()) {
        println!("  {slot:<14} {hex}");
    }
}

fn print_analysis(result: &AnalysisResult) {
    println!("overall          {:6.1}", result.overall_score);
    println!("oled             {:6.1}  ({} burn-in risk)", result.oled_score, result.burn_in_risk);
    println!("contrast         {:6.1}", result.contrast_score);
    println!("harmony          {:6.1}", result.harmony_score);
    println!("distinctiveness  {:6.1}", result.distinctiveness);
    let wcag = result.wcag_compliance;
    println!(
        "wcag             fg {} / accent {} / bright {} / selection {}",
        wcag.foreground.as_str(),
        wcag.accent.as_str(),
        wcag.accent_bright.as_str(),
        wcag.selection.as_str()
    );
    let count = result.color_count;
    println!(
        "ansi             {} dark, {} bright, {} neutral",
        count.dark, count.bright, count.neutral
    );
    for insight in &result.insights {
        println!("  + {insight}");
    }
    for warning in &result.warnings {
        println!("  ! {warning}");
    }
}

/// Stamps, optionally saves, then prints a freshly generated scheme.
fn emit_scheme(scheme: ColorScheme, output: Option<&Path>, json: bool) -> Result<(), CliError> {
    let scheme = scheme.stamped(Utc::now());
    if let Some(path) = output {
        write_json(path, &scheme)?;
        eprintln!("wrote {} -> {}", scheme.name, path.display());
    }
    if json {
        print_json(&scheme)
    } else {
        print_scheme(&scheme);
        Ok(())
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let generators = GeneratorKind::list_generators();
            let palettes = SourcePalette::list_ids();
            let styles: Vec<&str> = HarmonyStyle::ALL.iter().map(|s| s.as_str()).collect();
            let tiers: Vec<&str> = RiskTier::ALL.iter().map(|t| t.as_str()).collect();
            let visions: Vec<&str> = VisionType::ALL.iter().map(|v| v.as_str()).collect();
            if cli.json {
                print_json(&serde_json::json!({
                    "generators": generators,
                    "palettes": palettes,
                    "styles": styles,
                    "tiers": tiers,
                    "visions": visions,
                }))?;
            } else {
                println!("Generators:");
                for name in generators {
                    println!("  {name}");
                }
                println!("Palettes:");
                for palette in SourcePalette::registry() {
                    println!("  {:<18} {}", palette.id, palette.description);
                }
                println!("Styles:  {}", styles.join(", "));
                println!("Tiers:   {}", tiers.join(", "));
                println!("Visions: {}", visions.join(", "));
            }
        }
        Command::Synth {
            hue,
            style,
            seed,
            name,
            tier,
            recipe,
            output,
        } => {
            let recipe = match recipe {
                Some(path) => read_json::<SchemeRecipe>(&path)?,
                None => {
                    let style: HarmonyStyle = style.parse()?;
                    SchemeRecipe::new(hue, style, &seed, &name).with_risk_tier(parse_tier(&tier)?)
                }
            };
            let scheme = Synthesizer::new(recipe).generate()?;
            emit_scheme(scheme, output.as_deref(), cli.json)?;
        }
        Command::Random { output } => {
            let scheme = oledscheme_synth::synthesize_random();
            emit_scheme(scheme, output.as_deref(), cli.json)?;
        }
        Command::Optimize {
            palette,
            tier,
            preserve_saturation,
            preserve_brightness,
            contrast_boost,
            output,
        } => {
            let options = OptimizeOptions::new(
                parse_tier(&tier)?,
                preserve_saturation,
                preserve_brightness,
                contrast_boost,
            );
            let scheme = Optimizer::new(&palette, options)?.generate()?;
            emit_scheme(scheme, output.as_deref(), cli.json)?;
        }
        Command::Analyze { scheme } => {
            let scheme: ColorScheme = read_json(&scheme)?;
            let result = analyze(&scheme);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", scheme.name);
                print_analysis(&result);
            }
        }
        Command::Simulate { hex, vision } => {
            let color = parse_hex(&hex)?;
            let vision: VisionType = vision.parse()?;
            let simulated = simulate(color, vision).to_hex();
            if cli.json {
                print_json(&serde_json::json!({
                    "input": color.to_hex(),
                    "vision": vision,
                    "output": simulated,
                }))?;
            } else {
                println!("{} under {vision}: {simulated}", color.to_hex());
            }
        }
        Command::Access { fg, bg, context } => {
            let fg = parse_hex(&fg)?.to_hex();
            let bg = parse_hex(&bg)?.to_hex();
            let context: UsageContext = context.parse()?;
            let score = assess_accessibility(&fg, &bg, context);
            if cli.json {
                print_json(&score)?;
            } else {
                println!(
                    "{fg} on {bg} ({context}): {}, score {:.1}, worst ratio {:.2}",
                    score.compliance.as_str(),
                    score.score,
                    score.worst_ratio
                );
                for r in &score.ratios {
                    println!("  {:<14} {:5.2}", r.vision.as_str(), r.ratio);
                }
            }
        }
        Command::Preview {
            scheme,
            output,
            swatch,
        } => {
            let scheme: ColorScheme = read_json(&scheme)?;
            tracing::debug!(swatch, output = %output.display(), "rendering preview");
            oledscheme_generators::snapshot::write_png(&scheme, swatch, &output)?;
            if cli.json {
                let (width, height) = oledscheme_generators::pixel::preview_size(swatch);
                print_json(&serde_json::json!({
                    "scheme": scheme.name,
                    "width": width,
                    "height": height,
                    "output": output.display().to_string(),
                }))?;
            } else {
                eprintln!("preview of {} -> {}", scheme.name, output.display());
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn synth_defaults() {
        let cli = parse(&["oledscheme", "synth"]);
        match cli.command {
            Command::Synth { hue, style, tier, recipe, .. } => {
                assert_eq!(hue, 180.0);
                assert_eq!(style, "monochrome");
                assert_eq!(tier, "balanced");
                assert!(recipe.is_none());
            }
            _ => panic!("expected synth"),
        }
    }

    #[test]
    fn global_flags_follow_subcommand() {
        let cli = parse(&["oledscheme", "list", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_palette_exits_with_not_found() {
        let cli = parse(&["oledscheme", "optimize", "unknown-id"]);
        let err = run(cli).unwrap_err();
        assert_eq!(err.exit_code(), 14);
    }

    #[test]
    fn unknown_style_is_an_input_error() {
        let cli = parse(&["oledscheme", "synth", "--style", "plaid"]);
        assert_eq!(run(cli).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn bad_hex_is_an_input_error() {
        let cli = parse(&["oledscheme", "simulate", "#zzzzzz", "protanopia"]);
        assert_eq!(run(cli).unwrap_err().exit_code(), 12);
    }

    #[test]
    fn missing_scheme_file_is_an_io_error() {
        let cli = parse(&["oledscheme", "analyze", "/nonexistent/scheme.json"]);
        assert_eq!(run(cli).unwrap_err().exit_code(), 11);
    }

    #[test]
    fn synth_output_round_trips_through_analyze_and_preview() {
        let dir = tempfile::tempdir().unwrap();
        let scheme_path = dir.path().join("scheme.json");
        let png_path = dir.path().join("preview.png");
        let scheme_arg = scheme_path.to_str().unwrap();
        let png_arg = png_path.to_str().unwrap();

        run(parse(&["oledscheme", "synth", "--json", "-o", scheme_arg])).unwrap();
        let scheme: ColorScheme = read_json(&scheme_path).unwrap();
        assert_eq!(scheme.core.background, "#000000");
        assert!(scheme.created_at.is_some());

        run(parse(&["oledscheme", "analyze", scheme_arg])).unwrap();
        run(parse(&["oledscheme", "preview", scheme_arg, "-o", png_arg, "--swatch", "4"])).unwrap();
        assert!(png_path.exists());
    }

    #[test]
    fn recipe_file_drives_synthesis() {
        let dir = tempfile::tempdir().unwrap();
        let recipe_path = dir.path().join("recipe.json");
        let out_path = dir.path().join("out.json");
        let recipe = SchemeRecipe::new(42.0, HarmonyStyle::Tetradic, "file", "From File")
            .with_risk_tier(RiskTier::Conservative);
        write_json(&recipe_path, &recipe).unwrap();

        run(parse(&[
            "oledscheme",
            "synth",
            "--recipe",
            recipe_path.to_str().unwrap(),
            "-o",
            out_path.to_str().unwrap(),
        ]))
        .unwrap();
        let scheme: ColorScheme = read_json(&out_path).unwrap();
        assert_eq!(scheme.name, "From File");
        assert_eq!(scheme.risk_tier, RiskTier::Conservative);
        assert_eq!(scheme.hue, 42);
    }
}
