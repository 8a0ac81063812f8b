#![allow(dead_code)]

mod animatronics;
mod app;
mod audio;
mod camera;
mod config;
mod constants;
mod events;
mod game;
mod input;
mod location;
mod power;
mod ui;

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use glutin::prelude::*;
use glutin::surface::WindowSurface;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::{Window, WindowId};

use egui_glow::EguiGlow;

use config::GameConfig;
use constants::*;
use game::GameState;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep the server alive for the whole run; connect with puffin_viewer
    let _profiler_server = start_profiler_server();

    let event_loop = EventLoop::new()?;
    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    Ok(())
}

/// Start the profiler server. A busy port just means no profiling.
fn start_profiler_server() -> Option<puffin_http::Server> {
    let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
    match puffin_http::Server::new(&addr) {
        Ok(server) => {
            puffin::set_scopes_on(true);
            Some(server)
        }
        Err(_) => None,
    }
}

struct App {
    state: Option<AppState>,
}

struct AppState {
    // Window and GL
    window: Window,
    gl_surface: glutin::surface::Surface<WindowSurface>,
    gl_context: glutin::context::PossiblyCurrentContext,
    gl: Arc<glow::Context>,
    egui_glow: EguiGlow,

    // Simulation and collaborators
    game: GameState,
    events: events::EventQueue,
    audio: audio::AudioManager,

    // Input state
    input: input::InputState,

    // Timing
    last_frame_time: Instant,
}

impl App {
    fn new() -> Self {
        Self { state: None }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        let app::WindowContext {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
        } = app::create_window(event_loop);

        let config = GameConfig::load_or_standard(Path::new("config.json"));
        let game = GameState::new(config);

        self.state = Some(AppState {
            window,
            gl_surface,
            gl_context,
            gl,
            egui_glow,
            game,
            events: events::EventQueue::new(),
            audio: audio::AudioManager::new(),
            input: input::InputState::new(),
            last_frame_time: Instant::now(),
        });
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let state = match &mut self.state {
            Some(s) => s,
            None => return,
        };

        // Let egui handle the event first
        let egui_consumed = state.egui_glow.on_window_event(&state.window, &event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                app::resize_surface(&state.gl_surface, &state.gl_context, size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if !egui_consumed.consumed {
                    if let PhysicalKey::Code(key) = event.physical_key {
                        state.input.apply_key(
                            key,
                            event.state == ElementState::Pressed,
                            event.repeat,
                        );
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                state.update_and_render();
                if state.game.should_quit {
                    event_loop.exit();
                    return;
                }
                state.window.request_redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.state {
            state.window.request_redraw();
        }
    }
}

impl AppState {
    fn update_and_render(&mut self) {
        puffin::GlobalProfiler::lock().new_frame();
        puffin::profile_function!();

        let current_time = Instant::now();
        let raw_dt = (current_time - self.last_frame_time).as_secs_f32();
        self.last_frame_time = current_time;

        // Cap dt so a long frame can't teleport an animatronic
        let dt = raw_dt.min(MAX_SIM_DT);

        // Keyboard actions first, then advance the simulation
        for action in input::process_keyboard(&mut self.input) {
            self.game.handle_action(action, &mut self.events);
        }
        self.game.update(dt, &mut self.events);
        self.process_events();

        // Run the UI and feed anything clicked back through the same path
        let size = self.window.inner_size();
        let (viewport_width, viewport_height) = (size.width as f32, size.height as f32);
        let game = &self.game;
        let mut ui_actions = ui::UiActions::default();
        self.egui_glow.run(&self.window, |ctx| {
            ui_actions = ui::draw(ctx, game, viewport_width, viewport_height);
        });
        for action in ui_actions.drain() {
            self.game.handle_action(action, &mut self.events);
        }
        self.process_events();

        // Render
        unsafe {
            use glow::HasContext;
            self.gl.clear_color(0.02, 0.02, 0.03, 1.0);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.egui_glow.paint(&self.window);
        self.gl_surface.swap_buffers(&self.gl_context).unwrap();
    }

    /// Fan pending events out to collaborators.
    fn process_events(&mut self) {
        for event in self.events.drain() {
            self.audio.handle_event(&event);
        }
    }
}
