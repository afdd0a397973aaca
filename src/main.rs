//! Jetpack Horde entry point
//!
//! Native builds run a headless scripted session: a simple pilot holds a
//! heading, manages fuel, and fires ahead, and the final score lands on the
//! leaderboard. The web front end drives the same `tick` from its own frame
//! loop and owns rendering and real input.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use jetpack_horde::Leaderboard;
    use jetpack_horde::consts::*;
    use jetpack_horde::platform::InputState;
    use jetpack_horde::sim::{GamePhase, GameState, tick};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("Jetpack Horde (native) starting, seed {seed}");

    let mut state = GameState::new(seed);
    let mut input = InputState::new();

    // Scripted pilot: run right, thrust out of low altitude, fire ahead
    const MAX_TICKS: u64 = 20_000;
    input.key_down("ArrowRight");
    while state.phase != GamePhase::GameOver && state.time_ticks < MAX_TICKS {
        if state.player.pos.y > VIEW_HEIGHT - 200.0 && state.player.fuel > 20.0 {
            input.key_down("ArrowUp");
        } else {
            input.key_up("ArrowUp");
        }
        if state.time_ticks % 30 == 0 {
            input.pointer_moved(VIEW_WIDTH - 50.0, state.player.pos.y);
            input.pointer_clicked();
        }

        let tick_input = input.take_tick_input(state.camera_x);
        tick(&mut state, &tick_input);
    }

    println!(
        "run ended after {} ticks: score {}, health {}",
        state.time_ticks, state.score, state.player.health
    );

    let mut leaderboard = Leaderboard::load();
    let rank = leaderboard.submit("Pilot", state.score);
    leaderboard.save();
    println!("leaderboard rank {rank}");
    for (i, entry) in leaderboard.entries.iter().enumerate() {
        println!("  {}. {} - {}", i + 1, entry.name, entry.score);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The web build drives the simulation from the browser frame loop
}
