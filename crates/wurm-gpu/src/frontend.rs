//! The wgpu-backed frontend lifecycle.

use std::sync::Arc;

use winit::window::Window;
use wurm_core::command::Command;
use wurm_core::error::{WurmError, WurmResult};
use wurm_core::game::Game;
use wurm_session::frontend::Frontend;
use wurm_window::with_host;

use crate::renderer::GpuRenderer;
use crate::scene::{self, CELL_PX, DEFEAT_WASH, RectInstance, VICTORY_WASH};

/// GPU-rendered frontend: the scene is built as rectangle instances and
/// drawn in a single render pass.
pub struct GpuFrontend {
    window: Option<Arc<Window>>,
    renderer: Option<GpuRenderer>,
    last_scene: Vec<RectInstance>,
}

impl GpuFrontend {
    /// Create a frontend with no device attached yet.
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            last_scene: Vec::new(),
        }
    }

    fn splash(&mut self, wash: [f32; 4]) -> WurmResult<()> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Err(not_initialized());
        };
        let (w, h) = renderer.size();
        let mut rects = self.last_scene.clone();
        rects.extend(scene::banner(w as f32, h as f32, wash));
        renderer.render(&rects)?;
        with_host(|host| {
            host.wait_for_key();
            Ok(())
        })
    }
}

impl Default for GpuFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GpuFrontend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuFrontend")
            .field("window", &self.window.is_some())
            .field("renderer", &self.renderer.is_some())
            .finish_non_exhaustive()
    }
}

impl Frontend for GpuFrontend {
    fn init(&mut self, width: i32, height: i32) -> WurmResult<()> {
        let px_w = width as u32 * CELL_PX;
        let px_h = height as u32 * CELL_PX;
        let window = with_host(|host| host.open_window("wurm [gpu]", px_w, px_h))?;
        // Keep the window handle before device setup so a failed init still
        // hides the window on release.
        self.window = Some(window.clone());
        self.renderer = Some(GpuRenderer::new(window)?);
        self.last_scene.clear();
        Ok(())
    }

    fn render(&mut self, game: &Game) -> WurmResult<()> {
        let Some(window) = &self.window else {
            return Err(not_initialized());
        };
        let Some(renderer) = self.renderer.as_mut() else {
            return Err(not_initialized());
        };
        let size = window.inner_size();
        if (size.width, size.height) != renderer.size() {
            renderer.resize(size.width, size.height);
        }
        self.last_scene = scene::build(game);
        renderer.render(&self.last_scene)
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
        self.renderer = None;
        self.last_scene.clear();
        if self.window.take().is_some() {
            let _ = with_host(|host| {
                host.close_window();
                Ok(())
            });
        }
    }
}

fn not_initialized() -> WurmError {
    WurmError::Frontend("gpu frontend is not initialized".into())
}
