use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{debug, info};

mod constants;
mod content;
mod deck;
mod errors;
mod input;
mod layout;
mod presentation;
mod render;
mod slide;
mod state;
mod text_surface;
mod window;

use crate::constants::*;
use crate::deck::Deck;
use crate::input::{click_command, key_command, REPEAT_KEYS};
use crate::layout::Layout;
use crate::presentation::Presentation;
use crate::window::{WindowSurface, BACKGROUND};

/// Slide deck viewer with keyboard and button navigation.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON deck to present instead of the built-in one
    #[arg(long)]
    deck: Option<PathBuf>,

    /// Slide to open on (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    start: u32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    height: i32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    fps: u32,

    /// Print every slide as text instead of opening a window
    #[arg(long, conflicts_with = "dump_deck")]
    outline: bool,

    /// Print the deck as JSON and exit
    #[arg(long)]
    dump_deck: bool,
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    // --- Load Deck ---
    let deck = match &args.deck {
        Some(path) => Deck::load(path).with_context(|| format!("Failed to load deck from {}", path.display()))?,
        None => Deck::builtin(),
    };
    info!(slides = deck.len(), name = deck.name().unwrap_or("untitled"), "Deck loaded");

    if args.dump_deck {
        println!("{}", deck.to_json()?);
        return Ok(());
    }

    let start_index = args.start as usize - 1;

    if args.outline {
        print!("{}", text_surface::outline(&deck, start_index)?);
        return Ok(());
    }

    let mut presentation = Presentation::starting_at(&deck, WindowSurface::new(), start_index)?;
    run_window(&mut presentation, &args)
}

fn run_window(presentation: &mut Presentation<'_, WindowSurface>, args: &Args) -> Result<()> {
    let title = presentation.deck().name().unwrap_or("Slides").to_string();

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&title)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    info!(width = args.width, height = args.height, "Window opened");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let layout = Layout::for_screen(rl.get_screen_width(), rl.get_screen_height());

        // --- Input ---
        while let Some(key) = rl.get_key_pressed() {
            if let Some(command) = key_command(key) {
                debug!(?key, ?command, "Key pressed");
                presentation.apply(command);
            }
        }

        // Held keys: the pressed-key queue only reports the initial press
        for key in REPEAT_KEYS {
            if rl.is_key_pressed_repeat(key) {
                if let Some(command) = key_command(key) {
                    presentation.apply(command);
                }
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            let point = rl.get_mouse_position();
            let command = presentation
                .renderer()
                .frame()
                .and_then(|frame| click_command(point, &layout, frame));
            if let Some(command) = command {
                debug!(?command, "Button clicked");
                presentation.apply(command);
            }
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(BACKGROUND);
        presentation.renderer().draw(&mut d, &layout);
    }

    info!(last_slide = presentation.current_index() + 1, "Window closed");
    Ok(())
}
