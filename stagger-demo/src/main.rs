//! Stagger demo - headless staggered grid.
//!
//! Builds fifty cards with random heights and colors, with a wrapping text
//! caption every tenth slot and a spacer after each caption, lays them out
//! in a scrolling grid, replays a short drag and wheel gesture, and prints the
//! visible frame as JSON.
//!
//! Usage: `stagger-demo [config.json]`
//!
//! Logging is filtered by `STAGGER_LOG`, falling back to `RUST_LOG`, then
//! to `info`.

use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use stagger::{
    BoxElement, Color, Dp, GridConfig, LayoutChild, Padding, Point, PointerEvent, Rect,
    ScrollDelta, ScrollGrid, ScrollState, TextElement,
};

const ITEM_COUNT: usize = 50;
const VIEWPORT: (f32, f32) = (360.0, 640.0);
const CAPTION_EVERY: usize = 10;
const CAPTION_GAP: f32 = 12.0;

#[derive(Serialize)]
struct VisibleCard<'a> {
    label: &'a str,
    color: String,
    rect: Rect,
}

#[derive(Serialize)]
struct FrameReport<'a> {
    columns: usize,
    column_width: i32,
    content_height: i32,
    offset: i32,
    max_scroll: i32,
    visible: Vec<VisibleCard<'a>>,
}

fn main() -> anyhow::Result<()> {
    // Set up logging
    let filter = EnvFilter::try_from_env("STAGGER_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GridConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => GridConfig {
            padding: Padding::all(Dp(8.0)),
            ..GridConfig::default()
        },
    };
    tracing::info!(
        "Starting stagger demo: max column width {}dp, density {}",
        config.max_column_width.0,
        config.density.0
    );

    let cards = random_cards(&config);
    let bounds = Rect::new(
        0,
        0,
        Dp(VIEWPORT.0).round_to_px(config.density),
        Dp(VIEWPORT.1).round_to_px(config.density),
    );

    let mut state = config.scroll_state();
    let events = [
        PointerEvent::Pressed { position: Point::new(100, 500) },
        PointerEvent::Moved { position: Point::new(100, 350) },
        PointerEvent::Moved { position: Point::new(100, 200) },
        PointerEvent::Released { position: Point::new(100, 200) },
        PointerEvent::WheelScrolled {
            delta: ScrollDelta::Lines { y: -3.0 },
            position: Point::new(100, 300),
        },
    ];

    // One frame up front so the state knows its scroll range.
    frame(&state, &config, &cards, bounds)?;
    for event in &events {
        if let Some(action) = state.handle_pointer(event) {
            tracing::debug!(?event, ?action, "scroll input");
            state.apply(action);
            frame(&state, &config, &cards, bounds)?;
        }
    }

    let viewport = frame(&state, &config, &cards, bounds)?;
    let report = FrameReport {
        columns: viewport.content.column_count,
        column_width: viewport.content.column_width,
        content_height: viewport.content.size.height,
        offset: viewport.offset,
        max_scroll: viewport.max_scroll,
        visible: viewport
            .visible
            .iter()
            .filter_map(|placed| {
                let (label, color) = match &cards[placed.index] {
                    LayoutChild::Block(card) => {
                        (card.label.as_deref().unwrap_or_default(), card.background)
                    }
                    LayoutChild::Text(caption) => (caption.text.as_str(), caption.color),
                    LayoutChild::Spacer { .. } | LayoutChild::Custom(_) => return None,
                };
                Some(VisibleCard {
                    label,
                    color: format!("#{:08x}", color.pack()),
                    rect: placed.rect(),
                })
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Lay out one frame. Every call is a full pass over all cards.
fn frame(
    state: &ScrollState,
    config: &GridConfig,
    cards: &[LayoutChild],
    bounds: Rect,
) -> anyhow::Result<stagger::Viewport> {
    let viewport = ScrollGrid::from_state(state, config.grid())
        .extend(cards.iter())
        .layout(bounds)?;
    Ok(viewport)
}

/// Cards 100..300dp tall with an opaque random color. Every tenth item is
/// preceded by a caption whose height follows the column width.
fn random_cards(config: &GridConfig) -> Vec<LayoutChild> {
    let mut rng = rand::thread_rng();
    let mut cards = Vec::with_capacity(ITEM_COUNT + 2 * (ITEM_COUNT / CAPTION_EVERY));
    for i in 1..=ITEM_COUNT {
        if i % CAPTION_EVERY == 1 {
            let last = (i + CAPTION_EVERY - 1).min(ITEM_COUNT);
            cards.push(
                TextElement::new(format!("Items {i} to {last}, random heights"))
                    .density(config.density)
                    .into(),
            );
            cards.push(LayoutChild::Spacer {
                height: Dp(CAPTION_GAP).round_to_px(config.density),
            });
        }
        let height = rng.gen_range(100..300) as f32;
        let color = Color::rgb(rng.r#gen(), rng.r#gen(), rng.r#gen());
        cards.push(
            BoxElement::from_dp(Dp(height), config.density)
                .background(color)
                .corner_radius(12.0)
                .label(format!("Item {i}"))
                .into(),
        );
    }
    cards
}
