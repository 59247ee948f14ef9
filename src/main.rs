//! Astro Dodge entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use astro_dodge::assets::AssetStore;
    use astro_dodge::consts::FRAME_MS;
    use astro_dodge::highscores::BestScore;
    use astro_dodge::renderer::canvas::CanvasBackend;
    use astro_dodge::renderer::render_frame;
    use astro_dodge::sim::{GameEvent, GameState, TickInput, tick};
    use astro_dodge::tuning::Tuning;

    /// Game instance holding all state
    struct Game {
        state: GameState,
        backend: CanvasBackend,
        input: TickInput,
        best: BestScore,
        last_time: f64,
        raf_id: Option<i32>,
    }

    impl Game {
        fn new(state: GameState, backend: CanvasBackend, best: BestScore) -> Self {
            Self {
                state,
                backend,
                input: TickInput::default(),
                best,
                last_time: 0.0,
                raf_id: None,
            }
        }

        /// One frame: simulate, drain events, render, refresh the HUD
        fn frame(&mut self, time: f64) {
            let dt = if self.last_time > 0.0 {
                ((time - self.last_time) / FRAME_MS as f64) as f32
            } else {
                1.0
            };
            self.last_time = time;

            tick(&mut self.state, &self.input, dt);
            self.state.advance_backdrop(dt);
            self.handle_events();
            render_frame(&self.state, &self.input, &mut self.backend);
            self.update_hud();
        }

        fn handle_events(&mut self) {
            for event in &self.state.events {
                match *event {
                    GameEvent::NewBest { score } => {
                        self.best = BestScore(score);
                        self.best.save();
                    }
                    GameEvent::GameOver { score } => {
                        log::info!("Run over at {score} points");
                        show_game_over(score, self.best.0);
                    }
                    _ => {}
                }
            }
        }

        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            if let Some(el) = document.get_element_by_id("score-display") {
                el.set_text_content(Some(&format!(
                    "Score: {} | High Score: {}",
                    self.state.score, self.best.0
                )));
            }
        }
    }

    fn show_game_over(score: u32, best: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("final-score") {
            el.set_text_content(Some(&score.to_string()));
        }
        if let Some(el) = document.get_element_by_id("final-best") {
            el.set_text_content(Some(&best.to_string()));
        }
        if let Some(el) = document.get_element_by_id("game-over-screen") {
            let _ = el.set_attribute("class", "");
        }
    }

    fn hide_screens() {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        for id in ["start-screen", "game-over-screen"] {
            if let Some(el) = document.get_element_by_id(id) {
                let _ = el.set_attribute("class", "hidden");
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Astro Dodge starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .expect("2d context unavailable")
            .expect("2d context unavailable")
            .dyn_into()
            .expect("not a 2d context");

        let bounds = glam::Vec2::new(canvas.width() as f32, canvas.height() as f32);

        // Every sprite must decode before the start button unlocks; a run
        // never begins without its images.
        let assets = AssetStore::load().expect("image elements");
        assets.ready().await.expect("sprite decode failed");

        let seed = js_sys::Date::now() as u64;
        let tuning = Tuning::load();
        let best = BestScore::load();
        let mut state = GameState::new(seed, bounds, tuning);
        state.best_score = best.0;

        log::info!("Session initialized with seed: {seed}");

        let backend = CanvasBackend::new(ctx, assets);
        let game = Rc::new(RefCell::new(Game::new(state, backend, best)));

        setup_input_handlers(game.clone());
        setup_run_button(game.clone(), "start-btn");
        setup_run_button(game.clone(), "replay-btn");

        if let Some(btn) = document.get_element_by_id("start-btn") {
            let _ = btn.remove_attribute("disabled");
        }

        log::info!("Astro Dodge ready");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                set_key(&mut game.borrow_mut().input, &event.key(), true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                set_key(&mut game.borrow_mut().input, &event.key(), false);
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn set_key(input: &mut TickInput, key: &str, held: bool) {
        match key {
            "ArrowUp" | "w" => input.up = held,
            "ArrowDown" | "s" => input.down = held,
            "ArrowLeft" | "a" => input.left = held,
            "ArrowRight" | "d" => input.right = held,
            _ => {}
        }
    }

    /// Begin and restart share one handler: cancel any scheduled frame so
    /// two tick streams never interleave, reset the run, start the loop.
    fn setup_run_button(game: Rc<RefCell<Game>>, id: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        let Some(btn) = document.get_element_by_id(id) else {
            return;
        };

        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut g = game.borrow_mut();
                if let Some(raf) = g.raf_id.take() {
                    let _ = web_sys::window().unwrap().cancel_animation_frame(raf);
                }
                g.state.start_run();
                g.input = TickInput::default();
                g.last_time = 0.0;
            }
            hide_screens();
            log::info!("Run started");
            request_frame(game.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let g = game.clone();
        let closure = Closure::once(move |time: f64| {
            game_loop(g, time);
        });
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("request_animation_frame failed");
        game.borrow_mut().raf_id = Some(id);
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use astro_dodge::highscores::BestScore;
    use astro_dodge::sim::{GamePhase, GameState, TickInput, tick};
    use astro_dodge::tuning::Tuning;

    env_logger::init();
    log::info!("Astro Dodge (native) starting...");
    log::info!("Native mode is a headless smoke run - build for wasm32 for the browser version");

    let best = BestScore::load();
    let mut state = GameState::new(42, glam::Vec2::new(800.0, 600.0), Tuning::default());
    state.best_score = best.0;
    state.start_run();

    // Weave across the arena until something connects or the frame cap hits
    let mut input = TickInput::default();
    for frame in 0..6000u32 {
        input.left = (frame / 120) % 2 == 0;
        input.right = !input.left;
        input.up = (frame / 90) % 2 == 0;
        input.down = !input.up;
        tick(&mut state, &input, 1.0);
        state.advance_backdrop(1.0);
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Smoke run finished: {:?} after {} frames, {} meteors live",
        state.phase,
        state.frame_count,
        state.meteors.len()
    );
    println!("score: {} (best {})", state.score, state.best_score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
