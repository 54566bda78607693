//! Pixel Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use pixel_runner::driver::LoopDriver;
    use pixel_runner::highscores::HighScore;
    use pixel_runner::renderer::CanvasSurface;
    use pixel_runner::sim::{Session, SessionHooks};

    /// Game instance holding all state
    struct Game {
        session: Session,
        driver: LoopDriver,
        surface: CanvasSurface,
        high_score: HighScore,
        /// Pending requestAnimationFrame callback, if any
        raf_id: Option<i32>,
        /// Jump listeners, attached for the driver's Active period
        bindings: Option<InputBindings>,
    }

    impl Game {
        fn new(surface: CanvasSurface) -> Self {
            // Idle until the menu starts the first run
            let mut session = Session::new(0);
            let mut driver = LoopDriver::new();
            driver.teardown(&mut session);

            Self {
                session,
                driver,
                surface,
                high_score: HighScore::new(),
                raf_id: None,
                bindings: None,
            }
        }

        /// Run one frame against the shell's hooks
        fn frame(&mut self) -> bool {
            let Game {
                session,
                driver,
                surface,
                high_score,
                ..
            } = self;
            let mut hooks = ShellHooks { high_score };
            driver.frame(session, &mut hooks, surface)
        }

        /// Exactly-once cleanup of the current run: stop the driver, cancel
        /// any pending frame, drop the jump listeners. Idempotent.
        fn teardown(&mut self) {
            self.driver.teardown(&mut self.session);
            if let Some(id) = self.raf_id.take() {
                if let Some(window) = web_sys::window() {
                    let _ = window.cancel_animation_frame(id);
                }
            }
            if let Some(mut bindings) = self.bindings.take() {
                bindings.detach();
            }
        }
    }

    /// DOM-facing side of the two session callbacks
    struct ShellHooks<'a> {
        high_score: &'a mut HighScore,
    }

    impl SessionHooks for ShellHooks<'_> {
        fn on_score(&mut self, score: u32) {
            set_text("#hud-score .hud-value", &score.to_string());
        }

        fn on_game_over(&mut self, final_score: u32) {
            if self.high_score.observe(final_score) {
                log::info!("new best score: {final_score}");
            }
            set_text("#final-score", &final_score.to_string());
            set_text("#final-best", &self.high_score.best().to_string());
            set_hidden("hud", true);
            set_hidden("game-over", false);
        }
    }

    /// Jump listeners: a designated key on the window plus click on the
    /// canvas, both funneled into the same `request_jump`.
    struct InputBindings {
        key_down: Closure<dyn FnMut(KeyboardEvent)>,
        click: Closure<dyn FnMut(MouseEvent)>,
        canvas: HtmlCanvasElement,
        attached: bool,
    }

    impl InputBindings {
        fn attach(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) -> Self {
            let key_game = game.clone();
            let key_down = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                match event.code().as_str() {
                    "Space" | "ArrowUp" => {
                        // Keep the page from scrolling under the game
                        event.prevent_default();
                        let mut g = key_game.borrow_mut();
                        if g.driver.is_active() {
                            g.session.request_jump();
                        }
                    }
                    _ => {}
                }
            });

            let click_game = game;
            let click = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                let mut g = click_game.borrow_mut();
                if g.driver.is_active() {
                    g.session.request_jump();
                }
            });

            let window = web_sys::window().expect("no window");
            let _ = window
                .add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref());
            let _ =
                canvas.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());

            Self {
                key_down,
                click,
                canvas: canvas.clone(),
                attached: true,
            }
        }

        /// Remove both listeners; only the first call detaches
        fn detach(&mut self) {
            if !self.attached {
                return;
            }
            self.attached = false;
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "keydown",
                    self.key_down.as_ref().unchecked_ref(),
                );
            }
            let _ = self
                .canvas
                .remove_event_listener_with_callback("click", self.click.as_ref().unchecked_ref());
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("failed to init logger");

        log::info!("Pixel Runner starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fatal if the 2d context is unavailable: refuse to start the loop
        let surface = CanvasSurface::new(&canvas).expect("canvas 2d context unavailable");

        let game = Rc::new(RefCell::new(Game::new(surface)));

        setup_start_buttons(game.clone(), canvas);
        show_menu(&game.borrow());

        log::info!("Pixel Runner ready");
    }

    /// Begin a fresh play-through. Callable repeatedly; every call tears
    /// down the previous run first and builds an independent session.
    fn start_run(game: &Rc<RefCell<Game>>, canvas: &HtmlCanvasElement) {
        {
            let mut g = game.borrow_mut();
            g.teardown();

            let seed = js_sys::Date::now() as u64;
            g.session = Session::new(seed);
            g.driver = LoopDriver::new();
            g.bindings = Some(InputBindings::attach(canvas, game.clone()));
            log::info!("run started with seed {seed}");
        }

        set_text("#hud-score .hud-value", "0");
        set_hidden("menu", true);
        set_hidden("game-over", true);
        set_hidden("hud", false);

        schedule_frame(game.clone());
    }

    fn show_menu(game: &Game) {
        let best = game.high_score.best();
        set_text("#menu-highscore", &format!("High Score: {best}"));
        set_hidden("menu-highscore", best == 0);
        set_hidden("menu", false);
        set_hidden("hud", true);
        set_hidden("game-over", true);
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>, canvas: HtmlCanvasElement) {
        let document = document();
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let canvas = canvas.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                    start_run(&game, &canvas);
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }
    }

    fn schedule_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let cb_game = game.clone();
        let closure = Closure::once(move |_time: f64| game_loop(cb_game));
        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
        game.borrow_mut().raf_id = Some(id);
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_going = {
            let mut g = game.borrow_mut();
            g.raf_id = None;
            g.frame()
        };

        if keep_going {
            schedule_frame(game);
        } else {
            // Game over: release the frame callback and the jump listeners
            game.borrow_mut().teardown();
        }
    }

    fn document() -> Document {
        web_sys::window()
            .expect("no window")
            .document()
            .expect("no document")
    }

    fn set_text(selector: &str, value: &str) {
        if let Some(el) = document().query_selector(selector).ok().flatten() {
            el.set_text_content(Some(value));
        }
    }

    fn set_hidden(id: &str, hidden: bool) {
        if let Some(el) = document().get_element_by_id(id) {
            let _ = el.set_attribute("class", if hidden { "hidden" } else { "" });
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Pixel Runner (native) starting...");

    // No display clock on native; drive the loop manually as a headless
    // demo with a scripted jumper.
    let final_score = demo::run_headless(0x5eed, 10_000);
    println!("demo run finished with score {final_score}");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use pixel_runner::consts::*;
    use pixel_runner::driver::LoopDriver;
    use pixel_runner::renderer::NullSurface;
    use pixel_runner::sim::{Session, SessionHooks};

    struct LogHooks;

    impl SessionHooks for LogHooks {
        fn on_score(&mut self, score: u32) {
            log::debug!("score {score}");
        }

        fn on_game_over(&mut self, final_score: u32) {
            log::info!("game over at score {final_score}");
        }
    }

    /// Jump once an obstacle closes within a dozen ticks of travel
    fn should_jump(session: &Session) -> bool {
        session.obstacles.iter().any(|o| {
            o.x > PLAYER_X && o.x - (PLAYER_X + PLAYER_HITBOX_W) < session.speed * 12.0
        })
    }

    pub fn run_headless(seed: u64, max_ticks: u32) -> u32 {
        let mut session = Session::new(seed);
        log::info!("headless run with seed {}", session.seed);
        let mut driver = LoopDriver::new();
        let mut surface = NullSurface;
        let mut hooks = LogHooks;

        for _ in 0..max_ticks {
            if should_jump(&session) {
                session.request_jump();
            }
            if !driver.frame(&mut session, &mut hooks, &mut surface) {
                break;
            }
        }
        driver.teardown(&mut session);
        session.score
    }
}
