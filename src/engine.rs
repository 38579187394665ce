//=========================================================================
// Game Loop
//
// Fixed-phase frame cycle driving one game session end to end.
//
// Architecture:
// ```text
//     GameLoopBuilder  ──build()──>  GameLoop  ──run(backend)──>  [Session]
//         │                            │
//         ├─ with_fps()                ├─ register(component)
//         ├─ with_time_source()        └─ quit() / set_fps()
//         ├─ with_diagnostics()
//         └─ with_viewport()
// ```
//
// Session:
// ```text
//   connect ─> initialize* ─> load* ─> open_window
//     └─> while running:
//           drain events ─> sleep ─> timing ─> update* ─> clear ─> draw* ─> present ─> system input
//   unload* ─> close_window
// ```
// `*` = top-level game, then registered components in registration order.
// Unload reverses only the game's position: components first, game last.
// If `open_window` fails, no frame runs: unload* and the error is returned.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;
use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::config::GameConfig;
use crate::core::context::{GameContext, LoopControl, LoopState};
use crate::core::diagnostics::Diagnostics;
use crate::core::geometry::Rectangle;
use crate::core::input::InputState;
use crate::core::platform_bridge::{Backend, BackendError, EventDispatcher};
use crate::core::time::{FrameTiming, GameClock, TimeSource};
use crate::core::{Component, Game};

//=== GameError ===========================================================

/// Errors returned by [`GameLoop::run`].
#[derive(Debug, Error)]
pub enum GameError {
    /// The backend could not connect to a display (no lifecycle call ran)
    /// or could not open the window (no frame ran).
    #[error("backend failed to start: {0}")]
    Backend(#[from] BackendError),

    /// `run` was called on a loop that already ran.
    #[error("game loop already started (state: {state:?})")]
    AlreadyStarted { state: LoopState },
}

//=== GameLoopBuilder =====================================================

/// Builder for configuring and constructing a [`GameLoop`].
///
/// # Default Values
///
/// - **FPS**: 30
/// - **Time source**: [`GameClock`]
/// - **Diagnostics**: debug output disabled
/// - **Viewport**: 800x600 at the origin
///
/// # Examples
///
/// ```no_run
/// use ledge_engine::prelude::*;
/// use ledge_engine::platform::HeadlessBackend;
///
/// struct Pong;
///
/// impl Component<HeadlessBackend> for Pong {
///     fn update(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>, _timing: &FrameTiming) {
///         if ctx.input().is_key_down(KeyCode::Q) {
///             ctx.quit();
///         }
///     }
///
///     fn draw(&mut self, _ctx: &mut GameContext<'_, HeadlessBackend>, _timing: &FrameTiming) {}
/// }
///
/// impl Game<HeadlessBackend> for Pong {}
///
/// let mut backend = HeadlessBackend::new();
/// let mut game_loop = GameLoopBuilder::new(Pong)
///     .with_fps(60)
///     .build();
///
/// game_loop.run(&mut backend)?;
/// # Ok::<(), GameError>(())
/// ```
pub struct GameLoopBuilder<G> {
    game: G,
    fps: u32,
    clock: Option<Box<dyn TimeSource>>,
    diagnostics: Diagnostics,
    viewport: Rectangle,
}

impl<G> GameLoopBuilder<G> {
    /// Creates a new builder around the top-level game object.
    pub fn new(game: G) -> Self {
        let config = GameConfig::default();

        Self {
            game,
            fps: config.fps,
            clock: None,
            diagnostics: config.diagnostics(),
            viewport: config.viewport(),
        }
    }

    /// Sets the target frames per second.
    ///
    /// Default: 30
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Replaces the real-time clock, e.g. with a [`ManualClock`] for tests
    /// or replays.
    ///
    /// [`ManualClock`]: crate::core::time::ManualClock
    pub fn with_time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.clock = Some(Box::new(source));
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Sets the initial drawable region.
    pub fn with_viewport(mut self, viewport: Rectangle) -> Self {
        self.viewport = viewport;
        self
    }

    /// Applies fps, diagnostics and viewport from a parsed configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config.fps == 0`.
    pub fn with_config(self, config: &GameConfig) -> Self {
        self.with_fps(config.fps)
            .with_diagnostics(config.diagnostics())
            .with_viewport(config.viewport())
    }

    /// Builds the loop in [`LoopState::NotStarted`].
    pub fn build<'a, B>(self) -> GameLoop<'a, B, G>
    where
        B: Backend,
        G: Game<B>,
    {
        info!("Building game loop (FPS: {})", self.fps);

        GameLoop {
            game: self.game,
            components: Vec::new(),
            input: InputState::new(),
            viewport: self.viewport,
            control: LoopControl::new(self.fps),
            dispatcher: EventDispatcher::new(),
            clock: self.clock.unwrap_or_else(|| Box::new(GameClock::new())),
            diagnostics: self.diagnostics,
            frames: 0,
        }
    }
}

//=== GameLoop ============================================================

/// Order in which the top-level game is called relative to components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    GameFirst,
    GameLast,
}

/// One game session: a top-level game plus borrowed components.
///
/// Components are owned by the caller and must outlive the loop. They are
/// called in registration order, every phase, every frame.
pub struct GameLoop<'a, B: Backend, G: Game<B>> {
    game: G,
    components: Vec<&'a mut dyn Component<B>>,
    input: InputState,
    viewport: Rectangle,
    control: LoopControl,
    dispatcher: EventDispatcher,
    clock: Box<dyn TimeSource>,
    diagnostics: Diagnostics,
    frames: u64,
}

impl<'a, B: Backend, G: Game<B>> GameLoop<'a, B, G> {
    //--- Construction -----------------------------------------------------

    /// Creates a loop with default settings.
    pub fn new(game: G) -> Self {
        GameLoopBuilder::new(game).build()
    }

    /// Appends `component` to the registry.
    ///
    /// Has no immediate effect. Components registered after [`run`] started
    /// are never called.
    ///
    /// [`run`]: GameLoop::run
    pub fn register(&mut self, component: &'a mut dyn Component<B>) {
        self.components.push(component);
        self.diagnostics
            .debug_value("Registered component", self.components.len());
    }

    //--- Execution --------------------------------------------------------

    /// Runs the session to completion, blocking the calling thread.
    ///
    /// A [`quit`](GameLoop::quit) requested before `run` is honored: the
    /// lifecycle still runs, but no frame does.
    ///
    /// # Errors
    ///
    /// - [`GameError::AlreadyStarted`] if the loop already ran.
    /// - [`GameError::Backend`] if `backend.connect()` fails. No lifecycle
    ///   method is called in that case and the loop stays
    ///   [`LoopState::NotStarted`].
    /// - [`GameError::Backend`] if `backend.open_window()` fails. No frame
    ///   runs, every loaded component is unloaded and the loop ends
    ///   [`LoopState::Stopped`].
    pub fn run(&mut self, backend: &mut B) -> Result<(), GameError> {
        let state = self.control.state();
        if state != LoopState::NotStarted {
            return Err(GameError::AlreadyStarted { state });
        }

        if let Err(err) = backend.connect() {
            self.diagnostics
                .error(&format!("Cannot connect to display: {}", err));
            return Err(err.into());
        }

        self.control.start();
        let start = self.clock.now_millis();
        let mut previous = FrameTiming::start(start);
        self.diagnostics.debug_value("Session start", start);

        //--- Startup ------------------------------------------------------

        self.control.set_state(LoopState::Initializing);
        self.broadcast(backend, Order::GameFirst, |c, ctx| c.initialize(ctx));

        self.control.set_state(LoopState::Loading);
        self.broadcast(backend, Order::GameFirst, |c, ctx| c.load(ctx));

        if let Err(err) = backend.open_window() {
            self.diagnostics
                .error(&format!("Cannot open window: {}", err));
            self.control.quit();
            self.unload(backend);
            return Err(err.into());
        }

        self.control.set_state(LoopState::Running);
        info!(
            "Game loop running ({} fps, {} components)",
            self.control.fps(),
            self.components.len()
        );

        //--- Frames -------------------------------------------------------

        while self.control.is_running() {
            previous = self.frame(backend, &previous);
        }

        //--- Shutdown -----------------------------------------------------

        self.unload(backend);
        backend.close_window();
        info!("Game loop stopped after {} frames", self.frames);

        Ok(())
    }

    /// Stops the loop at the next loop-condition check.
    ///
    /// Before [`run`](GameLoop::run), this makes the session skip every
    /// frame.
    pub fn quit(&mut self) {
        self.control.quit();
    }

    //--- Frame Rate -------------------------------------------------------

    pub fn fps(&self) -> u32 {
        self.control.fps()
    }

    /// Changes the target rate. Zero is rejected with a warning.
    pub fn set_fps(&mut self, fps: u32) {
        self.control.set_fps(fps);
    }

    //--- Accessors --------------------------------------------------------

    pub fn state(&self) -> LoopState {
        self.control.state()
    }

    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn viewport(&self) -> &Rectangle {
        &self.viewport
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Number of completed frames.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    //--- Internal Helpers -------------------------------------------------

    /// Unloads components, then the game, and marks the loop stopped.
    fn unload(&mut self, backend: &mut B) {
        self.control.set_state(LoopState::Unloading);
        self.broadcast(backend, Order::GameLast, |c, ctx| c.unload(ctx));
        self.control.set_state(LoopState::Stopped);
    }

    /// Runs one frame and returns its timing.
    fn frame(&mut self, backend: &mut B, previous: &FrameTiming) -> FrameTiming {
        self.dispatcher
            .drain(backend, &mut self.input, &mut self.viewport);

        backend.sleep_microseconds(self.control.frame_interval_micros());

        let timing = previous.advance(self.clock.as_ref());

        self.broadcast(backend, Order::GameFirst, |c, ctx| c.update(ctx, &timing));

        backend.clear_surface();
        self.broadcast(backend, Order::GameFirst, |c, ctx| c.draw(ctx, &timing));
        backend.present_surface();

        {
            let Self {
                game,
                input,
                viewport,
                control,
                diagnostics,
                ..
            } = self;
            let mut ctx = GameContext::new(backend, input, viewport, control, diagnostics);
            game.handle_system_input(&mut ctx, &timing);
        }

        self.frames += 1;
        self.diagnostics.debug_value("Frame elapsed ms", timing.elapsed());

        timing
    }

    /// Calls `call` on the game and on every component with a shared
    /// context.
    fn broadcast<F>(&mut self, backend: &mut B, order: Order, mut call: F)
    where
        F: FnMut(&mut dyn Component<B>, &mut GameContext<'_, B>),
    {
        let Self {
            game,
            components,
            input,
            viewport,
            control,
            diagnostics,
            ..
        } = self;
        let game: &mut dyn Component<B> = game;
        let mut ctx = GameContext::new(backend, input, viewport, control, diagnostics);

        if order == Order::GameFirst {
            call(&mut *game, &mut ctx);
        }

        for component in components.iter_mut() {
            call(&mut **component, &mut ctx);
        }

        if order == Order::GameLast {
            call(&mut *game, &mut ctx);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::platform_bridge::BackendEvent;
    use crate::core::time::ManualClock;
    use crate::platform::HeadlessBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;
    type UpdateHook = Box<dyn FnMut(u32, &mut GameContext<'_, HeadlessBackend>)>;

    fn new_log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn entries(log: &Log) -> Vec<String> {
        log.borrow().clone()
    }

    //--- Recorder ---------------------------------------------------------

    /// Component that records every lifecycle call and the loop state it
    /// was made in.
    struct Recorder {
        name: &'static str,
        log: Log,
        timings: Vec<FrameTiming>,
        states: Vec<(&'static str, LoopState)>,
        quit_on_update: bool,
    }

    impl Recorder {
        fn new(name: &'static str, log: &Log) -> Self {
            Self {
                name,
                log: Rc::clone(log),
                timings: Vec::new(),
                states: Vec::new(),
                quit_on_update: false,
            }
        }

        fn record(&mut self, phase: &'static str, ctx: &GameContext<'_, HeadlessBackend>) {
            self.log.borrow_mut().push(format!("{}:{}", self.name, phase));
            self.states.push((phase, ctx.state()));
        }
    }

    impl Component<HeadlessBackend> for Recorder {
        fn initialize(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("initialize", ctx);
        }

        fn load(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("load", ctx);
        }

        fn update(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>, timing: &FrameTiming) {
            self.record("update", ctx);
            self.timings.push(*timing);
            if self.quit_on_update {
                ctx.quit();
            }
        }

        fn draw(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>, _timing: &FrameTiming) {
            self.record("draw", ctx);
        }

        fn unload(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("unload", ctx);
        }
    }

    //--- TestGame ---------------------------------------------------------

    /// Top-level game that quits after a fixed number of updates.
    struct TestGame {
        log: Log,
        quit_after: u32,
        updates: u32,
        timings: Vec<FrameTiming>,
        keys_seen: Vec<bool>,
        on_update: Option<UpdateHook>,
    }

    impl TestGame {
        fn new(log: &Log, quit_after: u32) -> Self {
            Self {
                log: Rc::clone(log),
                quit_after,
                updates: 0,
                timings: Vec::new(),
                keys_seen: Vec::new(),
                on_update: None,
            }
        }

        fn record(&self, phase: &str) {
            self.log.borrow_mut().push(format!("game:{}", phase));
        }
    }

    impl Component<HeadlessBackend> for TestGame {
        fn initialize(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("initialize");
            if self.quit_after == 0 {
                ctx.quit();
            }
        }

        fn load(&mut self, _ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("load");
        }

        fn update(&mut self, ctx: &mut GameContext<'_, HeadlessBackend>, timing: &FrameTiming) {
            self.record("update");
            self.updates += 1;
            self.timings.push(*timing);
            self.keys_seen.push(ctx.input().is_key_down(KeyCode::SPACE));

            if let Some(hook) = self.on_update.as_mut() {
                hook(self.updates, ctx);
            }

            if self.updates >= self.quit_after {
                ctx.quit();
            }
        }

        fn draw(&mut self, _ctx: &mut GameContext<'_, HeadlessBackend>, _timing: &FrameTiming) {
            self.record("draw");
        }

        fn unload(&mut self, _ctx: &mut GameContext<'_, HeadlessBackend>) {
            self.record("unload");
        }
    }

    impl Game<HeadlessBackend> for TestGame {
        fn handle_system_input(
            &mut self,
            ctx: &mut GameContext<'_, HeadlessBackend>,
            _timing: &FrameTiming,
        ) {
            self.record("system");
            if ctx.backend().close_requested() {
                ctx.quit();
            }
        }
    }

    fn test_loop<'a>(game: TestGame) -> GameLoop<'a, HeadlessBackend, TestGame> {
        GameLoopBuilder::new(game)
            .with_time_source(ManualClock::stepping(1_000, 10))
            .build()
    }

    //=====================================================================
    // Construction
    //=====================================================================

    #[test]
    fn new_loop_uses_defaults() {
        let log = new_log();
        let game_loop: GameLoop<'_, HeadlessBackend, TestGame> =
            GameLoop::new(TestGame::new(&log, 1));

        assert_eq!(game_loop.state(), LoopState::NotStarted);
        assert_eq!(game_loop.fps(), 30);
        assert_eq!(
            *game_loop.viewport(),
            Rectangle::new(0.0, 0.0, 800.0, 600.0)
        );
        assert_eq!(game_loop.component_count(), 0);
        assert!(!game_loop.is_running());
        assert!(!game_loop.diagnostics().is_debug_enabled());
    }

    #[test]
    #[should_panic(expected = "FPS must be positive")]
    fn builder_rejects_zero_fps() {
        let log = new_log();
        let _ = GameLoopBuilder::new(TestGame::new(&log, 1)).with_fps(0);
    }

    #[test]
    fn builder_applies_config() {
        let log = new_log();
        let config = GameConfig {
            fps: 60,
            debug: true,
            width: 320,
            height: 240,
            ..GameConfig::default()
        };

        let game_loop: GameLoop<'_, HeadlessBackend, TestGame> =
            GameLoopBuilder::new(TestGame::new(&log, 1))
                .with_config(&config)
                .build();

        assert_eq!(game_loop.fps(), 60);
        assert!(game_loop.diagnostics().is_debug_enabled());
        assert_eq!(game_loop.viewport().width, 320.0);
    }

    #[test]
    fn register_has_no_side_effect() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut game_loop = test_loop(TestGame::new(&log, 1));

        game_loop.register(&mut a);

        assert_eq!(game_loop.component_count(), 1);
        assert!(entries(&log).is_empty());
    }

    //=====================================================================
    // Lifecycle Order
    //=====================================================================

    #[test]
    fn phases_run_in_registration_order() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut b = Recorder::new("b", &log);
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 2));
        game_loop.register(&mut a);
        game_loop.register(&mut b);
        game_loop.run(&mut backend).unwrap();

        let frame = [
            "game:update",
            "a:update",
            "b:update",
            "game:draw",
            "a:draw",
            "b:draw",
            "game:system",
        ];
        let mut expected = vec![
            "game:initialize",
            "a:initialize",
            "b:initialize",
            "game:load",
            "a:load",
            "b:load",
        ];
        expected.extend_from_slice(&frame);
        expected.extend_from_slice(&frame);
        expected.extend_from_slice(&["a:unload", "b:unload", "game:unload"]);

        assert_eq!(entries(&log), expected);
        assert_eq!(game_loop.state(), LoopState::Stopped);
        assert_eq!(game_loop.frame_count(), 2);
    }

    #[test]
    fn each_phase_observes_its_loop_state() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.register(&mut a);
        game_loop.run(&mut backend).unwrap();
        drop(game_loop);

        assert_eq!(
            a.states,
            vec![
                ("initialize", LoopState::Initializing),
                ("load", LoopState::Loading),
                ("update", LoopState::Running),
                ("draw", LoopState::Running),
                ("unload", LoopState::Unloading),
            ]
        );
    }

    #[test]
    fn backend_surface_calls_follow_frames() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 3));
        game_loop.run(&mut backend).unwrap();

        assert!(backend.is_connected());
        assert_eq!(backend.windows_opened(), 1);
        assert!(!backend.is_window_open());
        assert_eq!(backend.clear_count(), 3);
        assert_eq!(backend.present_count(), 3);
        assert_eq!(backend.sleeps(), &[33_333, 33_333, 33_333]);
    }

    #[test]
    fn quit_during_update_still_presents_frame() {
        let log = new_log();
        let mut quitter = Recorder::new("q", &log);
        quitter.quit_on_update = true;
        let mut after = Recorder::new("after", &log);
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 100));
        game_loop.register(&mut quitter);
        game_loop.register(&mut after);
        game_loop.run(&mut backend).unwrap();

        let log = entries(&log);
        assert_eq!(log.iter().filter(|e| e.ends_with(":update")).count(), 3);
        assert!(log.contains(&"after:draw".to_string()));
        assert!(log.contains(&"game:system".to_string()));
        assert_eq!(backend.present_count(), 1);
    }

    #[test]
    fn quit_during_initialize_skips_frames() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 0));
        game_loop.run(&mut backend).unwrap();

        assert_eq!(
            entries(&log),
            vec!["game:initialize", "game:load", "game:unload"]
        );
        assert_eq!(backend.present_count(), 0);
        assert_eq!(game_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn quit_before_run_is_honored() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 100));
        game_loop.quit();
        game_loop.run(&mut backend).unwrap();

        assert_eq!(
            entries(&log),
            vec!["game:initialize", "game:load", "game:unload"]
        );
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(backend.present_count(), 0);
        assert_eq!(backend.windows_opened(), 1);
        assert_eq!(game_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn close_request_is_left_to_the_game() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();
        backend.injector().request_close();

        let mut game_loop = test_loop(TestGame::new(&log, 100));
        game_loop.run(&mut backend).unwrap();

        assert_eq!(game_loop.frame_count(), 1);
    }

    //=====================================================================
    // Errors
    //=====================================================================

    #[test]
    fn connect_failure_runs_no_lifecycle() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut backend = HeadlessBackend::failing("no display");

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.register(&mut a);
        let result = game_loop.run(&mut backend);

        assert!(matches!(
            result,
            Err(GameError::Backend(BackendError::Unavailable(_)))
        ));
        assert!(entries(&log).is_empty());
        assert_eq!(backend.windows_opened(), 0);
        assert_eq!(game_loop.state(), LoopState::NotStarted);
    }

    #[test]
    fn window_failure_runs_no_frame() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut backend = HeadlessBackend::failing_window("no surface");

        let mut game_loop = test_loop(TestGame::new(&log, 100));
        game_loop.register(&mut a);
        let result = game_loop.run(&mut backend);

        assert!(matches!(
            result,
            Err(GameError::Backend(BackendError::Unavailable(reason))) if reason == "no surface"
        ));
        assert_eq!(game_loop.game().updates, 0);
        assert_eq!(game_loop.frame_count(), 0);
        assert_eq!(backend.present_count(), 0);
        assert_eq!(backend.clear_count(), 0);
        assert!(backend.sleeps().is_empty());
        assert_eq!(
            entries(&log),
            vec![
                "game:initialize",
                "a:initialize",
                "game:load",
                "a:load",
                "a:unload",
                "game:unload",
            ]
        );
        assert_eq!(game_loop.state(), LoopState::Stopped);
        assert!(!game_loop.is_running());
    }

    #[test]
    fn second_run_is_rejected() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.run(&mut backend).unwrap();
        let second = game_loop.run(&mut backend);

        assert!(matches!(
            second,
            Err(GameError::AlreadyStarted {
                state: LoopState::Stopped
            })
        ));
        assert_eq!(game_loop.frame_count(), 1);
    }

    //=====================================================================
    // Timing
    //=====================================================================

    #[test]
    fn every_component_sees_the_same_timing() {
        let log = new_log();
        let mut a = Recorder::new("a", &log);
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(TestGame::new(&log, 2));
        game_loop.register(&mut a);
        game_loop.run(&mut backend).unwrap();

        let game_timings = game_loop.game().timings.clone();
        assert_eq!(
            game_timings,
            vec![
                FrameTiming::new(1_010, 1_000, 1_000),
                FrameTiming::new(1_020, 1_010, 1_000),
            ]
        );
        drop(game_loop);
        assert_eq!(a.timings, game_timings);
    }

    #[test]
    fn set_fps_changes_following_sleep() {
        let log = new_log();
        let mut game = TestGame::new(&log, 2);
        game.on_update = Some(Box::new(
            |update: u32, ctx: &mut GameContext<'_, HeadlessBackend>| {
                if update == 1 {
                    ctx.set_fps(50);
                }
            },
        ));
        let mut backend = HeadlessBackend::new();

        let mut game_loop = test_loop(game);
        game_loop.run(&mut backend).unwrap();

        assert_eq!(backend.sleeps(), &[33_333, 20_000]);
        assert_eq!(game_loop.fps(), 50);
    }

    #[test]
    fn set_fps_zero_is_ignored() {
        let log = new_log();
        let mut game_loop = test_loop(TestGame::new(&log, 1));

        game_loop.set_fps(0);

        assert_eq!(game_loop.fps(), 30);
    }

    //=====================================================================
    // Input
    //=====================================================================

    #[test]
    fn queued_events_reach_the_first_frame() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();
        backend.injector().key_press(KeyCode::SPACE);

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.run(&mut backend).unwrap();

        assert_eq!(game_loop.game().keys_seen, vec![true]);
        assert!(game_loop.input().is_key_down(KeyCode::SPACE));
    }

    #[test]
    fn events_sent_mid_frame_wait_for_next_drain() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();

        let mut game = TestGame::new(&log, 3);
        game.on_update = Some(Box::new(
            move |update: u32, _ctx: &mut GameContext<'_, HeadlessBackend>| match update {
                1 => injector.key_press(KeyCode::SPACE),
                2 => injector.key_release(KeyCode::SPACE),
                _ => {}
            },
        ));

        let mut game_loop = test_loop(game);
        game_loop.run(&mut backend).unwrap();

        assert_eq!(game_loop.game().keys_seen, vec![false, true, false]);
    }

    #[test]
    fn resize_grows_viewport_before_update() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();
        backend.injector().resize(1_000, 700);
        backend.injector().send(BackendEvent::Other);

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.run(&mut backend).unwrap();

        assert_eq!(
            *game_loop.viewport(),
            Rectangle::new(100.0, 50.0, 1_000.0, 700.0)
        );
    }

    #[test]
    fn pointer_position_tracks_only_inside() {
        let log = new_log();
        let mut backend = HeadlessBackend::new();
        let injector = backend.injector();
        injector.pointer_motion(1, 1);
        injector.pointer_enter();
        injector.pointer_motion(40, 30);
        injector.pointer_leave();
        injector.pointer_motion(900, 900);

        let mut game_loop = test_loop(TestGame::new(&log, 1));
        game_loop.run(&mut backend).unwrap();

        assert_eq!(game_loop.input().mouse_position(), (40, 30));
    }
}
