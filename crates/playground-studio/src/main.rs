use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;

use playground_engine::coords::{Vec2, Viewport};
use playground_engine::entity::{Entity, Style};
use playground_engine::input::{InputEvent, Key, KeyEvent, SimulationState, TouchContact};
use playground_engine::logging::{init_logging, LoggingConfig};
use playground_engine::paint::Color;
use playground_engine::physics::{random_bool_with, random_int_with};
use playground_engine::render::{draw_border, draw_buttons, ChromeStyle};
use playground_engine::scene::DrawCmd;
use playground_engine::surface::{RecordingSurface, Surface};
use playground_engine::text::FontSystem;

/// Optional path to the title font used for text measurement.
const FONT_ENV: &str = "PLAYGROUND_FONT";

/// Spawn area for new balls; kept fixed across resizes.
const SPAWN_AREA: (i32, i32) = (800, 600);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let fonts = load_fonts()?;
    let mut surface = RecordingSurface::with_fonts(800, 600, fonts);
    let mut state = SimulationState::new(Viewport::new(800, 600));

    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut factory = || random_ball(&mut rng, SPAWN_AREA);

    for (frame, event) in script().iter().enumerate() {
        state.apply_event(event, &mut surface, &mut factory);
        step(&mut state);
        render_frame(&state, &mut surface);
        log::info!(
            "frame {frame:>2}: {:<28} entities={:<3} touches={} debug={} cmds={}",
            describe(event),
            state.entities().len(),
            state.touches().len(),
            state.debug_level(),
            surface.draw_list().len(),
        );
    }

    summarize(&surface);
    Ok(())
}

fn load_fonts() -> Result<FontSystem> {
    let mut fonts = FontSystem::new();
    if let Ok(path) = std::env::var(FONT_ENV) {
        let bytes = std::fs::read(&path).with_context(|| format!("failed to read font {path}"))?;
        fonts
            .load_font(ChromeStyle::DEFAULT.font_family.clone(), &bytes)
            .with_context(|| format!("failed to parse font {path}"))?;
        log::info!("measuring text with {path}");
    }
    Ok(fonts)
}

fn random_ball(rng: &mut StdRng, (w, h): (i32, i32)) -> Entity {
    let size = random_int_with(rng, 5, 25) as f32;
    let position = Vec2::new(random_int_with(rng, 30, w - 30) as f32, random_int_with(rng, 30, h - 30) as f32);
    let velocity = Vec2::new(random_int_with(rng, -4, 4) as f32, random_int_with(rng, -4, 4) as f32);
    let fill = Color::rgb(
        random_int_with(rng, 0, 255) as u8,
        random_int_with(rng, 0, 255) as u8,
        random_int_with(rng, 0, 255) as u8,
    );
    let style = Style::new(fill, Color::BLACK);

    if random_bool_with(rng) {
        Entity::circle(position, velocity, size, style)
    } else {
        Entity::square(position, velocity, size, style)
    }
}

/// Scripted session covering every input path.
fn script() -> Vec<InputEvent> {
    let esc = InputEvent::Key(KeyEvent::new(Key::Escape));
    vec![
        InputEvent::PointerMoved(Vec2::new(120.0, 80.0)),
        InputEvent::PointerClicked(Vec2::new(700.0, 300.0)),
        InputEvent::PointerClicked(Vec2::new(700.0, 300.0)),
        InputEvent::PointerClicked(Vec2::new(100.0, 300.0)),
        InputEvent::PointerClicked(Vec2::new(400.0, 300.0)),
        esc.clone(),
        esc.clone(),
        InputEvent::Resized { width: 1024, height: 768 },
        InputEvent::TouchStarted(vec![TouchContact::new(1, 900.0, 100.0), TouchContact::new(2, 50.0, 100.0)]),
        InputEvent::TouchMoved(vec![TouchContact::new(1, 880.0, 140.0)]),
        InputEvent::TouchEnded(vec![TouchContact::new(1, 880.0, 140.0), TouchContact::new(2, 50.0, 100.0)]),
        esc.clone(),
        esc,
    ]
}

/// Moves every entity by its velocity, reflecting off the viewport edges.
fn step(state: &mut SimulationState) {
    let vp = *state.viewport();
    for e in state.entities_mut() {
        e.position = e.position + e.velocity;
        let r = e.size();
        if e.position.x < r || e.position.x > vp.w() - r {
            e.velocity.x = -e.velocity.x;
        }
        if e.position.y < r || e.position.y > vp.h() - r {
            e.velocity.y = -e.velocity.y;
        }
    }
}

fn render_frame(state: &SimulationState, surface: &mut RecordingSurface) {
    surface.clear();
    draw_border(surface, "BALLS", state.viewport(), Vec2::zero());
    draw_buttons(surface, state.viewport());
    state.draw_entities(surface);
}

fn describe(event: &InputEvent) -> String {
    match event {
        InputEvent::PointerMoved(p) => format!("move ({}, {})", p.x, p.y),
        InputEvent::PointerClicked(p) => format!("click ({}, {})", p.x, p.y),
        InputEvent::Key(k) => format!("key {}", k.key),
        InputEvent::TouchStarted(c) => format!("touch start x{}", c.len()),
        InputEvent::TouchMoved(c) => format!("touch move x{}", c.len()),
        InputEvent::TouchEnded(c) => format!("touch end x{}", c.len()),
        InputEvent::Resized { width, height } => format!("resize {width}x{height}"),
    }
}

fn summarize(surface: &RecordingSurface) {
    let (mut rects, mut fills, mut strokes, mut texts) = (0, 0, 0, 0);
    for cmd in surface.draw_list().items() {
        match cmd {
            DrawCmd::StrokeRect(_) => rects += 1,
            DrawCmd::FillPath(_) => fills += 1,
            DrawCmd::StrokePath(_) => strokes += 1,
            DrawCmd::Text(_) => texts += 1,
        }
    }
    let (w, h) = surface.size();
    log::info!("last frame {w}x{h}: {rects} frames, {fills} fills, {strokes} strokes, {texts} texts");
}
