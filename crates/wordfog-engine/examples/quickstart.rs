//! Wordfog Quickstart — a complete placement session from scratch.
//!
//! Demonstrates:
//!   1. Building a SetupConfig and a PlacementEngine
//!   2. Subscribing to cell and placement events over channels
//!   3. The two-click flow: hover preview, anchor click, direction click
//!   4. Random placement for the remaining word slots
//!   5. Reading cells back, clearing one word, and resetting
//!
//! Run with:
//!   cargo run --example quickstart

use wordfog_core::{Cell, CellKind, CellOwner, CellState, GridPos, TablePos};
use wordfog_engine::{PlacementEngine, PlacementEvent, SetupConfig};
use wordfog_model::ModelEvent;

// ─── Session parameters ─────────────────────────────────────────

const GRID: u32 = 8;
const WORDS: [&str; 3] = ["HARBOR", "RIVER", "OAK"];

// ─── Main ───────────────────────────────────────────────────────

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Wordfog Quickstart ===\n");

    // 1. Configure the session and build the engine. The layout, the
    //    cell model, and the word list all come from this one config.
    let config = SetupConfig {
        grid_size: GRID,
        words: WORDS.iter().map(|word| (*word).to_string()).collect(),
        placing_owner: CellOwner::PlayerOne,
        seed: 42,
    };
    let mut engine = PlacementEngine::new(config)?;
    println!(
        "Table: {} rows x {} cols ({}x{} grid, {} word slots)",
        engine.model().layout().total_rows(),
        engine.model().layout().total_cols(),
        GRID,
        GRID,
        WORDS.len(),
    );

    // 2. Subscribe to both event streams. Events arrive synchronously,
    //    inside the mutating call, in mutation order.
    let (_cells_id, cell_events) = engine.cell_event_channel();
    let (_words_id, word_events) = engine.event_channel();

    // 3. Place the first word by hand. Hovering paints the preview;
    //    the anchor click fixes the first letter, the second click
    //    picks the direction.
    let anchor = GridPos::new(1, 1);
    engine.enter_placement_mode(0, WORDS[0])?;
    println!(
        "\nPlacing {:?} by hand: {} valid directions from {}",
        WORDS[0],
        engine.valid_directions(WORDS[0], anchor).len(),
        anchor,
    );

    engine.handle_grid_hover(anchor)?;
    println!(
        "  hover at {}: {} cells lit as valid second clicks",
        anchor,
        grid_cells_in_state(&engine, CellState::PlacementValid),
    );

    let first = engine.handle_grid_click(anchor)?;
    let second = engine.handle_grid_click(GridPos::new(2, 2))?;
    println!("  clicks: {first:?}, then {second:?}");

    // 4. Place the rest randomly. The generator is seeded from the
    //    config, so this run is reproducible.
    for (index, word) in WORDS.iter().enumerate().skip(1) {
        engine.place_word_randomly(index, word)?;
        let record = engine.view().placement(index).expect("grid has room");
        println!(
            "  random: {:?} at {} heading {}",
            word, record.start, record.direction,
        );
    }

    // 5. Replay the notifications the two streams collected.
    println!();
    for event in word_events.try_iter() {
        if let PlacementEvent::WordPlaced { word_index, word, positions } = event {
            println!(
                "WordPlaced: slot {} {:?} across {} cells",
                word_index,
                word,
                positions.len(),
            );
        }
    }
    println!("({} cell repaints along the way)", cell_events.try_iter().count());

    // 6. Read the table back through the model, the way a renderer
    //    would after draining the event stream.
    println!("\nBoard after placement:");
    render(&engine);

    // 7. Clear one word. Cells shared with another placed word keep
    //    their letter until the last claim is dropped.
    engine.clear_word(0)?;
    println!(
        "\nCleared {:?}: {} grid cells still occupied",
        WORDS[0],
        engine.view().occupied_positions().count(),
    );

    // 8. Reset for the next round: the grid refogs, the word slots
    //    restamp, and subscribers get a single Cleared event.
    engine.reset(123)?;
    let cleared = cell_events.try_iter().any(|event| event == ModelEvent::Cleared);
    println!(
        "Reset to seed 123: cleared_event={}, placed={}, version={}",
        cleared,
        engine.view().placed_count(),
        engine.model().version(),
    );

    println!("Done.");
    Ok(())
}

// ─── Rendering ──────────────────────────────────────────────────
//
// Reads every cell by value through the model and maps it to one
// character. A real renderer consumes the same surface, driven by the
// change events instead of a full sweep.

fn render(engine: &PlacementEngine) {
    let model = engine.model();
    let layout = model.layout();
    for row in 0..layout.total_rows() as i32 {
        let line: Vec<String> = (0..layout.total_cols() as i32)
            .map(|col| match model.cell(TablePos::new(row, col)) {
                Some(cell) => glyph(&cell).to_string(),
                None => " ".to_string(),
            })
            .collect();
        println!("  {}", line.join(" "));
    }
}

fn glyph(cell: &Cell) -> char {
    if let Some(ch) = cell.ch {
        return ch;
    }
    match cell.kind {
        CellKind::RowHeader => cell
            .value
            .and_then(|value| char::from_digit(value as u32 % 10, 10))
            .unwrap_or(' '),
        CellKind::Grid if cell.state == CellState::Fog => '.',
        _ => ' ',
    }
}

fn grid_cells_in_state(engine: &PlacementEngine, state: CellState) -> usize {
    let size = engine.grid_size() as i32;
    (0..size)
        .flat_map(|row| (0..size).map(move |col| GridPos::new(col, row)))
        .filter(|pos| {
            engine
                .model()
                .grid_cell(*pos)
                .is_some_and(|cell| cell.state == state)
        })
        .count()
}
