use macroquad::prelude::*;
use tracing_subscriber::EnvFilter;

use party::game::clock::FixedClock;
use party::game::input::InputState;
use party::game::params::Params;
use party::game::state::GameState;
use party::graphics::{self, SpriteBank, WindowSurface};
use party::ui::{self, OverlayState};

fn window_conf() -> Conf {
    Conf {
        window_title: "Party".to_owned(),
        window_width: 640,
        window_height: 480,
        window_resizable: true,
        ..Default::default()
    }
}

fn load_params() -> party::game::error::Result<Params> {
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(%path, "loading parameters");
            Params::load_from_file(&path)
        }
        None => {
            tracing::info!("using default parameters");
            let params = Params::default();
            params.validate()?;
            Ok(params)
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = match load_params() {
        Ok(params) => params,
        Err(e) => {
            tracing::error!(error = %e, "cannot start");
            return;
        }
    };

    tracing::info!(
        tick_rate = params.tick_rate,
        follow_distance = params.follow_distance,
        party = params.roster.len(),
        "starting"
    );

    let sprites = SpriteBank::load(&params).await;
    let mut state = GameState::new(&params);
    let mut input = InputState::default();
    let mut clock = FixedClock::new(params.tick_rate, params.max_catch_up_ticks);
    let mut overlay = OverlayState::new();

    loop {
        // key events since the last frame; unbound keys are ignored
        for code in get_keys_pressed() {
            input.set_keycode(code, true);
        }
        for code in get_keys_released() {
            input.set_keycode(code, false);
        }
        if is_key_pressed(KeyCode::F1) {
            overlay.toggle();
        }

        for _ in 0..clock.advance(get_frame_time()) {
            state.tick(&input, &params);
            overlay.record_tick(&state);
        }
        overlay.dropped_ticks = clock.dropped();

        graphics::begin_game_camera(&params);
        state.render(&mut WindowSurface::new(&sprites, &params), &params);
        graphics::end_game_camera();

        ui::draw_overlay(&overlay, &state, &input, &params);
        ui::process_egui();

        next_frame().await
    }
}
