use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use ball_and_cube::cli::Cli;
use ball_and_cube::clock::{Clock, FpsMeter};
use ball_and_cube::display::SurfacePresenter;
use ball_and_cube::stage::Stage;

const DISPLAY_WIDTH: u32 = 400;
const DISPLAY_HEIGHT: u32 = 300;
const FPS_WINDOW_SECONDS: f32 = 1.0;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    presenter: Option<SurfacePresenter>,
    stage: Option<Stage>,
    clock: Clock,
    fps: FpsMeter,
}

impl App {
    fn new(cli: Cli) -> Self {
        Self {
            cli,
            window: None,
            presenter: None,
            stage: None,
            clock: Clock::new(),
            fps: FpsMeter::new(FPS_WINDOW_SECONDS),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("Ball and Cube")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        DISPLAY_WIDTH,
                        DISPLAY_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    error!("failed to create window: {e}");
                    event_loop.exit();
                    return;
                }
            };

            let presenter = match pollster::block_on(SurfacePresenter::new(
                window.clone(),
                DISPLAY_WIDTH,
                DISPLAY_HEIGHT,
            )) {
                Ok(p) => p,
                Err(e) => {
                    error!("failed to initialize presenter: {e}");
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(window);
            self.presenter = Some(presenter);
        }

        Stage::init_once(&mut self.stage, DISPLAY_WIDTH, DISPLAY_HEIGHT);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let delta = self.clock.tick();
                if let Some(fps) = self.fps.tick(delta) {
                    if !self.cli.quiet {
                        info!("fps: {fps:.1}");
                    }
                }

                if let (Some(stage), Some(presenter)) = (&mut self.stage, &self.presenter) {
                    let pixels = stage.frame();
                    if let Err(e) = presenter.present(pixels) {
                        error!("present failed: {e}");
                    }
                }
            }
            _ => {}
        }
    }

    // the self-perpetuating part of the loop: ask the host for the next
    // refresh as soon as this pass over the event queue drains
    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!("ball-and-cube {}x{}, Escape to quit", DISPLAY_WIDTH, DISPLAY_HEIGHT);

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
