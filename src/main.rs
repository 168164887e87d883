//! Longbow entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, MouseEvent, Touch, TouchEvent};

    use longbow::consts::*;
    use longbow::renderer::{CanvasSurface, scene};
    use longbow::sim::{GameEvent, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
    }

    impl Game {
        /// One frame: advance the simulation, publish events, draw.
        fn frame(&mut self) {
            for event in tick(&mut self.state) {
                match event {
                    GameEvent::TargetHit {
                        points,
                        total,
                        distance,
                    } => {
                        log::info!("hit: {points} points at {distance:.1} from center");
                        update_score(total);
                    }
                    GameEvent::ArrowLost => log::debug!("arrow lost off-screen"),
                }
            }
            scene::draw(&self.state, &mut self.surface);
        }
    }

    /// Overwrite the score readout with the new cumulative total
    fn update_score(total: u32) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(el) = document.get_element_by_id("score") {
            el.set_text_content(Some(&total.to_string()));
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Longbow starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("element #canvas is not a canvas"))?;

        // Fixed logical surface, no resize handling
        canvas.set_width(SURFACE_WIDTH as u32);
        canvas.set_height(SURFACE_HEIGHT as u32);

        let surface = CanvasSurface::new(&canvas)?;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(),
            surface,
        }));

        setup_input_handlers(&canvas, game.clone());
        request_animation_frame(game);

        log::info!("Longbow running!");
        Ok(())
    }

    fn touch_point(canvas: &HtmlCanvasElement, touch: &Touch) -> Vec2 {
        let rect = canvas.get_bounding_client_rect();
        Vec2::new(
            touch.client_x() as f32 - rect.left() as f32,
            touch.client_y() as f32 - rect.top() as f32,
        )
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Mouse down - begin the draw
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().state.pointer_down(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse move - track the draw point
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                game.borrow_mut().state.pointer_move(point);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Mouse up - release and launch
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let point = Vec2::new(event.offset_x() as f32, event.offset_y() as f32);
                if game.borrow_mut().state.pointer_up(point) {
                    log::debug!("arrow launched toward ({}, {})", point.x, point.y);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().state.pointer_down(point);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch move
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().state.pointer_move(point);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch end - the lifted finger is the release point
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.changed_touches().get(0) {
                    let point = touch_point(&canvas_clone, &touch);
                    game.borrow_mut().state.pointer_up(point);
                }
            });
            let _ = canvas
                .add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Self-re-triggering frame loop: each callback does its work, then
    /// schedules the next. Late frames shift later, they never double-step.
    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use longbow::sim::{GameEvent, GameState, tick};

    env_logger::init();
    log::info!("Longbow (native) starting...");
    log::info!("The playable build targets the browser - run with `trunk serve`");

    // Headless demo flight: a hard horizontal draw toward the target
    let mut state = GameState::new();
    state.pointer_down(Vec2::new(350.0, 300.0));
    state.pointer_up(Vec2::new(350.0, 300.0));

    for _ in 0..600 {
        for event in tick(&mut state) {
            match event {
                GameEvent::TargetHit {
                    points,
                    total,
                    distance,
                } => log::info!(
                    "tick {}: hit for {points} points ({distance:.1} from center), total {total}",
                    state.ticks
                ),
                GameEvent::ArrowLost => log::info!("tick {}: arrow lost", state.ticks),
            }
        }
        if state.arrow.is_none() {
            break;
        }
    }
    log::info!("demo finished: score {}", state.score);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
