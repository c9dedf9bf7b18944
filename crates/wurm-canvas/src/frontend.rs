//! The softbuffer-backed frontend lifecycle.

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::{Context, Surface};
use winit::window::Window;
use wurm_core::command::Command;
use wurm_core::error::{WurmError, WurmResult};
use wurm_core::game::Game;
use wurm_session::frontend::Frontend;
use wurm_window::with_host;

use crate::framebuffer::Frame;
use crate::scene::{self, CELL_PX, DEFEAT_WASH, VICTORY_WASH};

/// CPU-rendered frontend: the scene is painted into a [`Frame`] and blitted
/// to the window through softbuffer.
pub struct CanvasFrontend {
    window: Option<Arc<Window>>,
    context: Option<Context<Arc<Window>>>,
    surface: Option<Surface<Arc<Window>, Arc<Window>>>,
    frame: Frame,
}

impl CanvasFrontend {
    /// Create a frontend with no window attached yet.
    pub fn new() -> Self {
        Self {
            window: None,
            context: None,
            surface: None,
            frame: Frame::new(0, 0),
        }
    }

    fn splash(&mut self, wash: u32) -> WurmResult<()> {
        let Some(surface) = self.surface.as_mut() else {
            return Err(not_initialized());
        };
        scene::paint_banner(&mut self.frame, wash);
        blit(surface, &self.frame)?;
        with_host(|host| {
            host.wait_for_key();
            Ok(())
        })
    }
}

impl Default for CanvasFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CanvasFrontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasFrontend")
            .field("window", &self.window.is_some())
            .field("frame", &(self.frame.width(), self.frame.height()))
            .finish_non_exhaustive()
    }
}

impl Frontend for CanvasFrontend {
    fn init(&mut self, width: i32, height: i32) -> WurmResult<()> {
        let px_w = width as u32 * CELL_PX;
        let px_h = height as u32 * CELL_PX;
        let window = with_host(|host| host.open_window("wurm [canvas]", px_w, px_h))?;
        // Keep the window handle before surface setup so a failed init
        // still hides the window on release.
        self.window = Some(window.clone());
        let context = Context::new(window.clone()).map_err(|e| soft_err(&e))?;
        let surface = Surface::new(&context, window).map_err(|e| soft_err(&e))?;
        self.frame = Frame::new(px_w, px_h);
        self.context = Some(context);
        self.surface = Some(surface);
        Ok(())
    }

    fn render(&mut self, game: &Game) -> WurmResult<()> {
        let Some(window) = &self.window else {
            return Err(not_initialized());
        };
        let Some(surface) = self.surface.as_mut() else {
            return Err(not_initialized());
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return Ok(());
        }
        self.frame.resize(size.width, size.height);
        scene::paint(&mut self.frame, game);
        blit(surface, &self.frame)
    }

    fn poll_input(&mut self) -> Command {
        with_host(|host| Ok(host.poll_command())).unwrap_or(Command::None)
    }

    fn show_victory(&mut self) -> WurmResult<()> {
        self.splash(VICTORY_WASH)
    }

    fn show_game_over(&mut self) -> WurmResult<()> {
        self.splash(DEFEAT_WASH)
    }

    fn release(&mut self) {
        self.surface = None;
        self.context = None;
        if self.window.take().is_some() {
            let _ = with_host(|host| {
                host.close_window();
                Ok(())
            });
        }
    }
}

fn blit(surface: &mut Surface<Arc<Window>, Arc<Window>>, frame: &Frame) -> WurmResult<()> {
    let (Some(w), Some(h)) = (
        NonZeroU32::new(frame.width()),
        NonZeroU32::new(frame.height()),
    ) else {
        return Ok(());
    };
    surface.resize(w, h).map_err(|e| soft_err(&e))?;
    let mut buffer = surface.buffer_mut().map_err(|e| soft_err(&e))?;
    buffer.copy_from_slice(frame.pixels());
    buffer.present().map_err(|e| soft_err(&e))?;
    Ok(())
}

fn soft_err(e: &softbuffer::SoftBufferError) -> WurmError {
    WurmError::Frontend(format!("softbuffer: {e}"))
}

fn not_initialized() -> WurmError {
    WurmError::Frontend("canvas frontend is not initialized".into())
}
