use artifact_engine::{
    ActionQueue, Controller, GameEvent, PlayerAction, ServiceCall, SessionConfig, Ticket,
    TransportError,
};

/// Session runner that wires the controller to the page.
///
/// The page pushes player actions between frames and calls `tick` once per
/// animation frame; `tick` hands back the HTTP calls the bridge must perform.
/// Replies land between frames, so their events are held until the next
/// frame is published.
pub struct SessionRunner {
    controller: Controller,
    actions: ActionQueue,
    /// Events emitted by `deliver` since the last frame.
    carried: Vec<GameEvent>,
    /// Events the page reads for the current frame.
    frame_events: Vec<GameEvent>,
}

impl SessionRunner {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            controller: Controller::new(config),
            actions: ActionQueue::new(),
            carried: Vec::new(),
            frame_events: Vec::new(),
        }
    }

    /// Start the session. Call once after construction.
    pub fn init(&mut self) {
        self.controller.start();
    }

    pub fn push_action(&mut self, action: PlayerAction) {
        self.actions.push(action);
    }

    /// Run one frame: apply queued actions, advance time, and return the
    /// service calls issued during the frame.
    pub fn tick(&mut self, dt: f32) -> Vec<ServiceCall> {
        self.controller.clear_frame_data();

        for action in self.actions.drain() {
            self.controller.apply(action);
        }
        self.controller.tick(dt);

        self.frame_events.clear();
        self.frame_events.append(&mut self.carried);
        self.frame_events.extend_from_slice(self.controller.events());

        self.controller.drain_calls()
    }

    /// Feed a finished HTTP call back into the session. Its events show up
    /// in the next frame.
    pub fn deliver(&mut self, ticket: Ticket, reply: Result<String, TransportError>) {
        let mark = self.controller.events().len();
        self.controller.deliver(ticket, reply);
        self.carried.extend_from_slice(&self.controller.events()[mark..]);
    }

    pub fn teardown(&mut self) {
        self.controller.teardown();
    }

    pub fn view_json(&self) -> String {
        match self.controller.view_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("view serialization failed: {}", e);
                "{}".to_string()
            }
        }
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn frame_events(&self) -> &[GameEvent] {
        &self.frame_events
    }

    // ---- Pointer accessors for the page's event reads ----

    /// Events are `#[repr(C)]` rows of four floats: kind, a, b, c.
    pub fn game_events_ptr(&self) -> *const f32 {
        self.frame_events.as_ptr() as *const f32
    }

    /// Number of events (not floats) in the buffer.
    pub fn game_events_len(&self) -> u32 {
        self.frame_events.len() as u32
    }
}
