use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// One second of game time
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum GameEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait EventSource: Send + 'static {
    /// Block until an event arrives. Errors once the source is closed.
    fn recv(&self) -> Result<GameEvent, mpsc::RecvError>;

    /// Block for up to `timeout` waiting for an event.
    /// Returns Ok(event) if an event arrives before the timeout, or Err(Timeout) if it expires.
    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<GameEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let event = match event::read() {
                Ok(CtEvent::Key(key)) => GameEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => GameEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::warn!(error = %err, "terminal event reader stopped");
                    break;
                }
            };
            if tx.send(event).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSource for CrosstermEventSource {
    fn recv(&self) -> Result<GameEvent, mpsc::RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(TICK_INTERVAL)
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<GameEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<GameEvent>) -> Self {
        Self { rx }
    }
}

impl EventSource for TestEventSource {
    fn recv(&self) -> Result<GameEvent, mpsc::RecvError> {
        self.rx.recv()
    }

    fn recv_timeout(&self, timeout: Duration) -> Result<GameEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time.
///
/// Ticks are only produced while a lease is held. A lease is the number of
/// the session entitled to ticks; see [`Runner::follow`].
pub struct Runner<E: EventSource, T: Ticker> {
    event_source: E,
    ticker: T,
    lease: Option<u64>,
    next_tick: Option<Instant>,
}

impl<E: EventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
            lease: None,
            next_tick: None,
        }
    }

    /// Track the session that should receive ticks.
    ///
    /// A new lease arms a fresh deadline one interval from now, a dropped
    /// lease disarms the timer. An unchanged lease keeps the current deadline.
    pub fn follow(&mut self, lease: Option<u64>) {
        if lease == self.lease {
            return;
        }
        self.next_tick = lease.map(|_| Instant::now() + self.ticker.interval());
        match lease {
            Some(session) => tracing::debug!(session, "tick timer armed"),
            None => tracing::debug!("tick timer released"),
        }
        self.lease = lease;
    }

    pub fn is_armed(&self) -> bool {
        self.next_tick.is_some()
    }

    /// Blocks until the next event. Returns Tick when the armed deadline
    /// passes first, or None once the event source has closed.
    pub fn step(&mut self) -> Option<GameEvent> {
        let Some(deadline) = self.next_tick else {
            return self.event_source.recv().ok();
        };

        let now = Instant::now();
        if now >= deadline {
            self.next_tick = Some(deadline + self.ticker.interval());
            return Some(GameEvent::Tick);
        }

        match self.event_source.recv_timeout(deadline - now) {
            Ok(ev) => Some(ev),
            Err(RecvTimeoutError::Timeout) => {
                self.next_tick = Some(deadline + self.ticker.interval());
                Some(GameEvent::Tick)
            }
            Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
