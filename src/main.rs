//! Brick Breaker entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent};

    use brick_breaker::platform::{Clock, WallClock};
    use brick_breaker::render::{DrawCommand, frame};
    use brick_breaker::sim::{GameEvent, GameState, tick};
    use brick_breaker::{GameConfig, HeldKeys, Hud, HudUpdate};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        keys: HeldKeys,
        hud: Hud,
        clock: WallClock,
        ctx: CanvasRenderingContext2d,
        document: Document,
    }

    impl Game {
        fn new(state: GameState, ctx: CanvasRenderingContext2d, document: Document) -> Self {
            Self {
                state,
                keys: HeldKeys::default(),
                hud: Hud::new(),
                clock: WallClock::default(),
                ctx,
                document,
            }
        }

        /// Run one simulation tick; returns false once the game has ended
        fn update(&mut self) -> bool {
            let input = self.keys.snapshot();
            let now = self.clock.now_ms();
            let events = tick(&mut self.state, &input, now);

            for event in &events {
                match event {
                    GameEvent::LevelComplete { level } => log::info!("Level {}", level),
                    GameEvent::LifeLost { lives } => log::info!("Ball lost, {} lives left", lives),
                    _ => {}
                }
            }
            !self.state.is_over()
        }

        /// Render the current frame
        fn render(&self) {
            let ctx = &self.ctx;
            for command in frame(&self.state) {
                match command {
                    DrawCommand::Clear { size } => {
                        ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
                    }
                    DrawCommand::FillRect { pos, size, color } => {
                        ctx.begin_path();
                        ctx.rect(pos.x as f64, pos.y as f64, size.x as f64, size.y as f64);
                        ctx.set_fill_style_str(color);
                        ctx.fill();
                        ctx.close_path();
                    }
                    DrawCommand::FillCircle {
                        center,
                        radius,
                        color,
                    } => {
                        ctx.begin_path();
                        if let Err(e) = ctx.arc(
                            center.x as f64,
                            center.y as f64,
                            radius as f64,
                            0.0,
                            std::f64::consts::TAU,
                        ) {
                            log::warn!("Arc failed: {:?}", e);
                        }
                        ctx.set_fill_style_str(color);
                        ctx.fill();
                        ctx.close_path();
                    }
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&mut self) {
            for update in self.hud.refresh(&self.state) {
                let selector = match update {
                    HudUpdate::Score(_) => ".score",
                    HudUpdate::Lives(_) => ".lives",
                };
                match self.document.query_selector(selector) {
                    Ok(Some(el)) => el.set_text_content(Some(update.text())),
                    _ => log::warn!("HUD element {} missing", selector),
                }
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {e}").into());
        }

        log::info!("Brick Breaker starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("breakoutCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let mut config = GameConfig::default();
        config.arena_width = canvas.width() as f32;
        config.arena_height = canvas.height() as f32;

        let seed = js_sys::Date::now() as u64;
        let state = GameState::new(config.sanitized(), seed);
        let game = Rc::new(RefCell::new(Game::new(state, ctx, document)));
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone());
        request_animation_frame(game);
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_down(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.key_up(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let running = {
            let mut g = game.borrow_mut();
            let running = g.update();
            g.render();
            g.update_hud();
            running
        };

        if running {
            request_animation_frame(game);
        } else {
            game_over();
        }
    }

    /// Tell the player and start over from a fresh page
    fn game_over() {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message("GAME OVER") {
            log::warn!("Alert failed: {:?}", e);
        }
        if let Err(e) = window.location().reload() {
            log::error!("Reload failed: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use serde::Serialize;

    use brick_breaker::GameConfig;
    use brick_breaker::input::autopilot;
    use brick_breaker::platform::{Clock, FrameClock};
    use brick_breaker::sim::{GameEvent, GameState, tick};

    /// Environment variable naming a JSON config override
    const CONFIG_ENV: &str = "BRICK_BREAKER_CONFIG";
    /// Ten minutes of play at 60 Hz
    const MAX_TICKS: u64 = 60 * 60 * 10;

    #[derive(Debug, Serialize)]
    struct RunSummary {
        seed: u64,
        ticks: u64,
        score: u64,
        level: u32,
        lives: u8,
        powerups: u32,
        game_over: bool,
    }

    fn load_config() -> GameConfig {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return GameConfig::default();
        };
        let loaded = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()));
        match loaded {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path, e);
                GameConfig::default()
            }
        }
    }

    pub fn run() {
        let seed = std::env::args()
            .nth(1)
            .and_then(|arg| arg.parse().ok())
            .unwrap_or_else(rand::random::<u64>);

        let mut state = GameState::new(load_config(), seed);
        let mut clock = FrameClock::default();
        let mut powerups = 0;

        while !state.is_over() && state.time_ticks < MAX_TICKS {
            let input = autopilot(&state);
            for event in tick(&mut state, &input, clock.now_ms()) {
                match event {
                    GameEvent::PowerUpActivated { .. } => powerups += 1,
                    GameEvent::LifeLost { lives } => {
                        log::info!("Tick {}: ball lost, {} lives left", state.time_ticks, lives)
                    }
                    _ => {}
                }
            }
        }

        let summary = RunSummary {
            seed,
            ticks: state.time_ticks,
            score: state.progression.score,
            level: state.progression.level,
            lives: state.progression.lives,
            powerups,
            game_over: state.is_over(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to serialize summary: {}", e),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");
    log::info!("Native mode runs a headless autopilot game - build for wasm32 to play");

    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
