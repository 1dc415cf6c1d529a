//! Application event loop.
//!
//! [`run`] opens the window, prepares the lounge scene once and redraws it
//! whenever winit asks for a frame. The scene is static, so the per-frame work
//! is replaying the scene's draws and presenting.
//!
//! # Lifecycle
//!
//! 1. `resumed`: create window, GPU context, registries and renderer, then
//!    prepare the scene
//! 2. `RedrawRequested`: compose the frame's draws, encode and present
//! 3. `Resized`: reconfigure surface, depth buffer and projection
//! 4. `CloseRequested`: release textures and exit

use std::sync::Arc;

use instant::{Duration, Instant};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    composer::SceneComposer,
    config::SceneConfig,
    context::Context,
    data_structures::scene::Scene,
    pipelines::program::FrameProgram,
    render::SceneRenderer,
    resources::{
        decoder::ImageCrateDecoder,
        mesh::ShapeMeshes,
        texture::{TextureRegistry, WgpuTextureBackend},
    },
};

const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(5);

/// Everything that exists once the window does.
struct AppState {
    ctx: Context,
    composer: SceneComposer<WgpuTextureBackend, ShapeMeshes>,
    program: FrameProgram,
    renderer: SceneRenderer,
    is_surface_configured: bool,
}

impl AppState {
    async fn new(window: Arc<Window>, config: &SceneConfig) -> anyhow::Result<Self> {
        let ctx = Context::new(window, config).await?;

        let backend = WgpuTextureBackend::new(ctx.device.clone(), ctx.queue.clone());
        let textures = TextureRegistry::new(backend, config.texture_units);
        let meshes = ShapeMeshes::new(ctx.device.clone());
        let mut composer = SceneComposer::new(Scene::lounge(), textures, meshes);

        let mut program = FrameProgram::new();
        let decoder = ImageCrateDecoder::new(&config.asset_dir);
        composer.prepare(&decoder, &mut program)?;

        let renderer = SceneRenderer::new(&ctx, composer.textures().backend());

        Ok(Self {
            ctx,
            composer,
            program,
            renderer,
            is_surface_configured: false,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.is_surface_configured = self.ctx.resize(width, height);
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Rendering requires the surface to be configured
        if !self.is_surface_configured {
            return Ok(());
        }

        self.program.begin_frame();
        if let Err(e) = self.composer.render(&mut self.program) {
            log::error!("{}", e);
            return Ok(());
        }
        self.renderer
            .render(&self.ctx, self.composer.meshes(), &self.program)
    }
}

struct FrameCounter {
    last_report: Instant,
    frames: u32,
}

impl FrameCounter {
    fn new() -> Self {
        Self {
            last_report: Instant::now(),
            frames: 0,
        }
    }

    fn tick(&mut self) {
        self.frames += 1;
        let elapsed = self.last_report.elapsed();
        if elapsed >= FPS_REPORT_INTERVAL {
            log::debug!(
                "{:.1} frames per second",
                self.frames as f64 / elapsed.as_secs_f64()
            );
            self.frames = 0;
            self.last_report = Instant::now();
        }
    }
}

pub struct App {
    config: SceneConfig,
    state: Option<AppState>,
    frames: FrameCounter,
}

impl App {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            state: None,
            frames: FrameCounter::new(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let (width, height) = self.config.window_size;
        let window_attributes = Window::default_attributes()
            .with_title(self.config.window_title.clone())
            .with_inner_size(PhysicalSize::new(width, height));

        let window = match event_loop.create_window(window_attributes) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                log::error!("Could not create the window: {}", e);
                event_loop.exit();
                return;
            }
        };

        match futures::executor::block_on(AppState::new(window.clone(), &self.config)) {
            Ok(mut state) => {
                let size = window.inner_size();
                state.resize(size.width, size.height);
                window.request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("App initialization failed: {:#}", e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        let Some(state) = &mut self.state else {
            return;
        };

        match event {
            WindowEvent::CloseRequested => {
                state.composer.teardown();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                state.resize(size.width, size.height);
                state.ctx.window().request_redraw();
            }
            WindowEvent::RedrawRequested => match state.render() {
                Ok(()) => self.frames.tick(),
                // Reconfigure the surface if it's lost or outdated
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = state.ctx.window().inner_size();
                    state.resize(size.width, size.height);
                    state.ctx.window().request_redraw();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    event_loop.exit();
                }
                Err(e) => {
                    log::warn!("Unable to render {}", e);
                    state.ctx.window().request_redraw();
                }
            },
            _ => {}
        }
    }
}

/// Open the window and show the scene until it is closed.
pub fn run(config: SceneConfig) -> anyhow::Result<()> {
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };
    log::info!(
        "Assets from {}, {} texture units",
        config.asset_dir.display(),
        config.texture_units
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
