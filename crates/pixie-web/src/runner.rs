use pixie_engine::{
    DrawBuffer, DrawInstance, EngineConfig, EngineContext, Game, InputEvent, InputQueue,
    InputSnapshot, RenderContext,
};

/// Generic game runner that wires up the engine loop.
///
/// Each concrete game creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`export_game!`](crate::export_game)),
/// because wasm-bindgen cannot export generic structs directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    snapshot: InputSnapshot,
    draws: DrawBuffer,
    config: EngineConfig,
    initialized: bool,
    frame: u64,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        Self {
            ctx: EngineContext::new(&config),
            draws: DrawBuffer::with_capacity(config.max_draws),
            game,
            input: InputQueue::new(),
            snapshot: InputSnapshot::new(),
            config,
            initialized: false,
            frame: 0,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Load a sprite-sheet manifest into the animation registry.
    /// On failure the previous registry is kept and the error is logged.
    pub fn load_manifest(&mut self, json: &str) -> bool {
        match self.ctx.load_manifest(json) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("manifest rejected: {err}");
                false
            }
        }
    }

    /// Run one frame: input snapshot, game update, control schemes, camera
    /// follow, then the room render and the game's own draws.
    pub fn tick(&mut self) {
        if !self.initialized {
            return;
        }
        self.frame += 1;

        self.snapshot.advance(self.input.drain());

        self.game.update(&mut self.ctx, &self.snapshot);
        self.ctx.room.update(&self.snapshot);
        self.ctx.room.follow_cameras();

        self.draws.clear();
        let screen = self.ctx.screen;
        if !self.ctx.room.render(screen, &mut self.draws) && self.frame == 1 {
            log::warn!("room has no main camera; nothing rendered");
        }

        let mut render_ctx = RenderContext {
            draws: &mut self.draws,
            room: &self.ctx.room,
            screen,
        };
        self.game.render(&mut render_ctx);
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut EngineContext {
        &mut self.ctx
    }

    pub fn snapshot(&self) -> &InputSnapshot {
        &self.snapshot
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn draws_ptr(&self) -> *const f32 {
        self.draws.instances_ptr()
    }

    pub fn draw_count(&self) -> u32 {
        self.draws.instance_count()
    }

    pub fn draw_floats(&self) -> &[f32] {
        self.draws.as_floats()
    }

    pub fn draw_stride(&self) -> u32 {
        DrawInstance::FLOATS as u32
    }

    pub fn max_draws(&self) -> u32 {
        self.config.max_draws as u32
    }

    pub fn screen_width(&self) -> u32 {
        self.ctx.screen.width()
    }

    pub fn screen_height(&self) -> u32 {
        self.ctx.screen.height()
    }
}
