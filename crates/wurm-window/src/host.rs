//! The process-wide winit event loop and game window.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::Key;
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Window, WindowBuilder};
use wurm_core::command::Command;
use wurm_core::error::{WurmError, WurmResult};

use crate::keymap;

thread_local! {
    static HOST: RefCell<Option<WindowHost>> = const { RefCell::new(None) };
}

/// Run a closure against the thread's window host, creating it on first use.
///
/// winit allows one event loop per process, so both graphical frontends go
/// through this accessor instead of owning a loop themselves.
pub fn with_host<R>(f: impl FnOnce(&mut WindowHost) -> WurmResult<R>) -> WurmResult<R> {
    HOST.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_none() {
            *slot = Some(WindowHost::new()?);
        }
        let Some(host) = slot.as_mut() else {
            return Err(WurmError::Frontend("window host is unavailable".into()));
        };
        f(host)
    })
}

/// Owns the event loop and the single game window.
///
/// The window outlives any one frontend: a swap from canvas to gpu drops the
/// old surface but keeps the window, so only its title changes on screen.
pub struct WindowHost {
    event_loop: EventLoop<()>,
    window: Option<Arc<Window>>,
    events: HostEvents,
}

impl WindowHost {
    fn new() -> WurmResult<Self> {
        let event_loop =
            EventLoop::new().map_err(|e| WurmError::Frontend(format!("event loop: {e}")))?;
        Ok(Self {
            event_loop,
            window: None,
            events: HostEvents::default(),
        })
    }

    /// Create the game window on first call; later calls retitle, resize,
    /// and reshow the one that already exists.
    pub fn open_window(
        &mut self,
        title: &str,
        width_px: u32,
        height_px: u32,
    ) -> WurmResult<Arc<Window>> {
        let size = LogicalSize::new(f64::from(width_px), f64::from(height_px));
        let window = match &self.window {
            Some(window) => window.clone(),
            None => {
                let window = WindowBuilder::new()
                    .with_title(title)
                    .with_inner_size(size)
                    .with_resizable(false)
                    .build(&self.event_loop)
                    .map_err(|e| WurmError::Frontend(format!("window: {e}")))?;
                let window = Arc::new(window);
                self.window = Some(window.clone());
                window
            }
        };
        window.set_title(title);
        let _ = window.request_inner_size(size);
        window.set_visible(true);
        self.events.reset();
        self.pump();
        Ok(window)
    }

    /// Hide the window and drop any queued input. The window itself is kept
    /// so a later swap back to a graphical frontend reuses it.
    pub fn close_window(&mut self) {
        if let Some(window) = &self.window {
            window.set_visible(false);
        }
        self.events.reset();
        self.pump();
    }

    /// Pump the event loop and return the most recent command. A close
    /// request outranks queued keys and surfaces as [`Command::Exit`].
    pub fn poll_command(&mut self) -> Command {
        self.pump();
        self.events.latest_command()
    }

    /// Pump until any key is pressed or the window is asked to close.
    pub fn wait_for_key(&mut self) {
        self.events.key_pressed = false;
        loop {
            self.pump();
            if self.events.key_pressed || self.events.close_requested {
                break;
            }
            thread::sleep(Duration::from_millis(10));
        }
        self.events.reset();
    }

    fn pump(&mut self) {
        let events = &mut self.events;
        let status = self
            .event_loop
            .pump_events(Some(Duration::ZERO), |event, _elwt| {
                if let Event::WindowEvent { event, .. } = event {
                    events.note(&event);
                }
            });
        if let PumpStatus::Exit(_) = status {
            events.close_requested = true;
        }
    }
}

impl fmt::Debug for WindowHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowHost")
            .field("window", &self.window.is_some())
            .field("pending", &self.events.pending.len())
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
struct HostEvents {
    pending: VecDeque<Command>,
    close_requested: bool,
    key_pressed: bool,
}

impl HostEvents {
    fn note(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close_requested = true,
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    self.key_pressed = true;
                    self.key(&event.logical_key);
                }
            }
            _ => {}
        }
    }

    fn key(&mut self, key: &Key) {
        if let Some(cmd) = keymap::map(key) {
            self.pending.push_back(cmd);
        }
    }

    fn latest_command(&mut self) -> Command {
        if self.close_requested {
            self.close_requested = false;
            self.pending.clear();
            return Command::Exit;
        }
        let mut latest = Command::None;
        while let Some(cmd) = self.pending.pop_front() {
            latest = cmd;
        }
        latest
    }

    fn reset(&mut self) {
        self.pending.clear();
        self.close_requested = false;
        self.key_pressed = false;
    }
}
