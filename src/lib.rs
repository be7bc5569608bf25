// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::Write;
use std::path::Path;

use anyhow::{bail, Context, Result};
use application::{InteractionController, RestaurantSource, RestaurantStore, UiEvent, ViewRenderer};
use constants::{ALL_MOODS, GRID_ID, RANDOM_SLOT_ID, TABLE_BODY_ID};
use domain::MoodFilter;
use infrastructure::{Config, MemoryDocument, PageWriter};
use ports::{Clock, Document, Element, FixedClock, SystemClock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting dinedir with arguments");

    let config = Config::resolve(args.config.as_deref())?;
    let store = open_store(args.catalog.as_deref(), &config)?;
    let hours = config.hours.opening_hours()?;
    let seed = config.randomizer.seed;

    let mut stdout = std::io::stdout().lock();
    match args.hour {
        Some(hour) => {
            let clock = FixedClock::at_hour(hour).context("Hour must be between 0 and 23")?;
            execute(args.command, store, ViewRenderer::new(clock, hours), seed, &mut stdout)
        }
        None => execute(args.command, store, ViewRenderer::new(SystemClock, hours), seed, &mut stdout),
    }
}

/// `--catalog` wins over the config file; the built-in list is the fallback.
pub fn open_store(catalog: Option<&Path>, config: &Config) -> Result<RestaurantStore> {
    match catalog.or(config.catalog.path.as_deref()) {
        Some(path) => {
            info!(path = %path.display(), "Using catalog file");
            infrastructure::load_catalog(path)
        }
        None => Ok(infrastructure::builtin_store()?),
    }
}

/// Run one command against a fresh in-memory page and write the result to `out`.
pub fn execute<C: Clock, W: Write>(
    command: Command,
    store: RestaurantStore,
    renderer: ViewRenderer<C>,
    default_seed: Option<u64>,
    out: &mut W,
) -> Result<()> {
    match command {
        Command::Cards { mood, plain } => {
            let page = page_with_mood(&store, Some(mood.as_str()));
            let mut controller = InteractionController::new(page, store, renderer, rng(default_seed));
            controller.initialize();
            if mood != ALL_MOODS && !controller.click_mood(&mood) {
                bail!("No filter button for mood '{mood}'");
            }
            emit(out, container_html(controller.document(), GRID_ID), plain)
        }
        Command::Table { plain } => {
            let page = MemoryDocument::new().with_element(TABLE_BODY_ID, "tbody");
            let mut controller = InteractionController::new(page, store, renderer, rng(default_seed));
            controller.initialize();
            emit(out, container_html(controller.document(), TABLE_BODY_ID), plain)
        }
        Command::Random { seed, plain } => {
            let page = MemoryDocument::directory_page(&[]);
            let mut controller =
                InteractionController::new(page, store, renderer, rng(seed.or(default_seed)));
            controller.initialize();
            controller.dispatch(UiEvent::SpinClicked);
            emit(out, container_html(controller.document(), RANDOM_SLOT_ID), plain)
        }
        Command::Status => {
            writeln!(out, "{}", renderer.status().label())?;
            Ok(())
        }
        Command::List { mood, json } => {
            let filtered = store.filtered(&MoodFilter::from_attribute(&mood));
            if json {
                let rendered = serde_json::to_string_pretty(&filtered)
                    .context("Failed to serialize restaurants")?;
                writeln!(out, "{rendered}")?;
            } else {
                for restaurant in filtered {
                    writeln!(out, "{}", restaurant.name)?;
                }
            }
            Ok(())
        }
        Command::Page { mood, view, output, open } => {
            let page = page_with_mood(&store, mood.as_deref());
            let mut controller = InteractionController::new(page, store, renderer, rng(default_seed));
            controller.initialize();
            if let Some(mood) = &mood {
                if !controller.click_mood(mood) {
                    bail!("No filter button for mood '{mood}'");
                }
            }
            if let Some(view) = view {
                controller.dispatch(UiEvent::TabClicked(view));
            }

            let snapshot = controller.into_document().to_html();
            let mut writer = PageWriter::new();
            let path = match output {
                Some(path) => writer.write_to(&path, &snapshot)?,
                None => writer.create_temp_file(&snapshot)?,
            };
            writeln!(out, "{}", path.display())?;

            if open {
                writer.open_in_browser(&path)?;
            }
            Ok(())
        }
    }
}

/// Directory page with a button for every mood in the store, plus `mood` when
/// the store does not carry it.
fn page_with_mood(store: &RestaurantStore, mood: Option<&str>) -> MemoryDocument {
    let mut moods = store.moods();
    if let Some(mood) = mood {
        if mood != ALL_MOODS && !moods.contains(&mood) {
            moods.push(mood);
        }
    }
    MemoryDocument::directory_page(&moods)
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn container_html(document: &MemoryDocument, id: &str) -> String {
    document
        .element(id)
        .map(|e| e.inner_html().to_string())
        .unwrap_or_default()
}

fn emit<W: Write>(out: &mut W, html: String, plain: bool) -> Result<()> {
    if plain {
        writeln!(out, "{}", util::text::plain_text(&html))?;
    } else {
        writeln!(out, "{}", html.trim())?;
    }
    Ok(())
}
