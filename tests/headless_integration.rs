use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use speedtyper::app::{App, Control};
use speedtyper::game::{Game, TickOutcome};
use speedtyper::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use speedtyper::Phase;

const REACT: usize = 2;

fn key(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

fn enter() -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
}

fn react_app(duration: u32) -> App {
    App::new(Game::new(duration, Box::new(|_len: usize| REACT)))
}

/// Drive the app the way the binary does: follow the lease, step, dispatch.
/// Stops early when a tick ends the session or input closes. Returns the
/// number of ticks the game accepted.
fn drive(
    app: &mut App,
    runner: &mut Runner<TestEventSource, FixedTicker>,
    steps: u32,
) -> u32 {
    let mut ticks = 0;
    for _ in 0..steps {
        runner.follow(app.tick_lease());
        match runner.step() {
            Some(GameEvent::Tick) => match app.on_tick() {
                TickOutcome::Ignored => {}
                TickOutcome::Running { .. } => ticks += 1,
                TickOutcome::Finished { .. } => {
                    ticks += 1;
                    break;
                }
            },
            Some(GameEvent::Resize) => {}
            Some(GameEvent::Key(k)) => {
                if app.on_key(k) == Control::Quit {
                    break;
                }
            }
            None => break,
        }
    }
    ticks
}

// Headless integration using the internal runtime + Game without a TTY
#[test]
fn headless_session_scores_and_finishes_by_time() {
    let mut app = react_app(3);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(20)),
    );

    tx.send(enter()).unwrap();
    for word in ["react", "react", "reacx"] {
        for c in word.chars() {
            tx.send(key(c)).unwrap();
        }
    }

    let ticks = drive(&mut app, &mut runner, 200);

    assert_eq!(app.game.phase(), Phase::Finished);
    assert_eq!(ticks, 3);
    assert_eq!(app.game.time_remaining(), 0);
    assert_eq!(app.game.correct_count(), 2);
    assert_eq!(app.game.mistake_count(), 1);
    assert_eq!(app.game.words_per_minute(), 40);
    assert_eq!(app.game.accuracy(), Some(67));
}

#[test]
fn headless_idle_app_receives_no_ticks() {
    let mut app = react_app(3);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(1)),
    );
    tx.send(key('x')).unwrap();
    drop(tx);

    // never started: the runner stays disarmed and ends when input closes
    let ticks = drive(&mut app, &mut runner, 50);
    assert_eq!(ticks, 0);
    assert!(!runner.is_armed());
    assert_eq!(app.game.phase(), Phase::Idle);
    assert_eq!(app.game.time_remaining(), 3);
}

#[test]
fn headless_timer_released_after_finish() {
    let mut app = react_app(1);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(5)),
    );
    tx.send(enter()).unwrap();

    while app.game.phase() != Phase::Finished {
        drive(&mut app, &mut runner, 1);
    }
    runner.follow(app.tick_lease());
    assert!(!runner.is_armed());

    // the finished session stays frozen however long we wait
    drop(tx);
    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(drive(&mut app, &mut runner, 10), 0);
    assert_eq!(app.game.time_remaining(), 0);
}

#[test]
fn headless_restart_gets_a_full_clock() {
    let mut app = react_app(30);

    let (tx, rx) = mpsc::channel();
    let mut runner = Runner::new(
        TestEventSource::new(rx),
        FixedTicker::new(Duration::from_millis(10)),
    );
    tx.send(enter()).unwrap();
    drive(&mut app, &mut runner, 1);
    assert_eq!(app.tick_lease(), Some(1));

    // let a couple of ticks land, then restart mid-session
    while app.game.time_remaining() > 28 {
        drive(&mut app, &mut runner, 1);
    }
    tx.send(GameEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)))
        .unwrap();
    // a tick may still be due ahead of the queued key
    while app.tick_lease() != Some(2) {
        drive(&mut app, &mut runner, 1);
    }

    assert_eq!(app.tick_lease(), Some(2));
    assert_eq!(app.game.time_remaining(), 30);
    assert_eq!(app.game.correct_count(), 0);
}
