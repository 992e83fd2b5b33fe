use std::rc::Rc;

use anyhow::Result;
use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::Window;

use crate::commands::Cmd;
use crate::messages::{AppMsg, Msg, OverlayMsg};
use crate::model::{AppModel, DetailMode};
use crate::update::update;
use crate::view::Renderer;

const WINDOW_TITLE: &str = "Pulseboard";
const DEFAULT_WIDTH: u32 = 900;
const DEFAULT_HEIGHT: u32 = 700;

pub struct App {
    model: AppModel,
    renderer: Option<Renderer>,
    window: Option<Rc<Window>>,
    context: Option<Context<Rc<Window>>>,
    mouse_position: Option<(f64, f64)>,
}

impl App {
    pub fn new(model: AppModel) -> Self {
        Self {
            model,
            renderer: None,
            window: None,
            context: None,
            mouse_position: None,
        }
    }

    fn init_renderer(&mut self, window: Rc<Window>, context: &Context<Rc<Window>>) -> Result<()> {
        let renderer = Renderer::new(window, context)?;
        let (width, height) = renderer.dimensions();
        self.model.window_size = (width, height);
        self.model.scale_factor = renderer.scale_factor();
        self.renderer = Some(renderer);
        Ok(())
    }

    /// Translate a keyboard press into a message
    fn key_to_msg(&self, key: &Key) -> Option<Msg> {
        match key {
            Key::Named(NamedKey::Space) => Some(Msg::Overlay(OverlayMsg::Toggle)),
            Key::Named(NamedKey::Escape) => Some(Msg::Overlay(OverlayMsg::Close)),
            Key::Character(c) => match c.as_str() {
                "o" => Some(Msg::Overlay(OverlayMsg::Toggle)),
                "1" => Some(Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Leads))),
                "2" => Some(Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Meetings))),
                "3" => Some(Msg::Overlay(OverlayMsg::ToggleDetail(DetailMode::Deals))),
                "q" => Some(Msg::App(AppMsg::Quit)),
                _ => None,
            },
            _ => None,
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) -> Option<Cmd> {
        match event {
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    if let Err(e) = renderer.resize(size.width, size.height) {
                        tracing::warn!("Failed to resize surface: {}", e);
                    }
                }
                update(
                    &mut self.model,
                    Msg::App(AppMsg::Resize(size.width, size.height)),
                )
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.set_scale_factor(*scale_factor);
                }
                update(
                    &mut self.model,
                    Msg::App(AppMsg::ScaleFactorChanged(*scale_factor)),
                )
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed && !event.repeat {
                    let msg = self.key_to_msg(&event.logical_key)?;
                    update(&mut self.model, msg)
                } else {
                    None
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Some((position.x, position.y));
                None
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                let (x, y) = self.mouse_position?;
                update(&mut self.model, Msg::click(x, y))
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    tracing::error!("Render error: {}", e);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&mut self) -> Result<()> {
        if let Some(renderer) = &mut self.renderer {
            renderer.render(&self.model)?;
        }
        Ok(())
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attributes = Window::default_attributes()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(DEFAULT_WIDTH, DEFAULT_HEIGHT));

            let window = Rc::new(event_loop.create_window(window_attributes).unwrap());
            let context = Context::new(Rc::clone(&window)).unwrap();

            self.init_renderer(Rc::clone(&window), &context).unwrap();
            window.request_redraw();
            self.window = Some(window);
            self.context = Some(context);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        let mut should_exit = matches!(event, WindowEvent::CloseRequested);
        let should_redraw = if let Some(window) = &self.window {
            if window_id == window.id() && !should_exit {
                match self.handle_event(&event) {
                    Some(Cmd::Quit) => {
                        should_exit = true;
                        false
                    }
                    Some(cmd) => cmd.needs_redraw(),
                    None => false,
                }
            } else {
                false
            }
        } else {
            false
        };

        if should_exit {
            event_loop.exit();
        } else if should_redraw {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::Wait);
    }
}
