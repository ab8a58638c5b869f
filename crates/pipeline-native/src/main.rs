use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, KeyCode, NamedKey, PhysicalKey},
    window::WindowBuilder,
};

use pipeline_core::{
    compute_frame, Command, FrameUniforms, KeyAction, StageSelector, Viewport, EXIT_KEY,
    WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH,
};

mod render;

use render::GpuState;

/// Stage keys are matched by position on the digit row, so they work on any
/// layout and with shift held. The numpad is not bound.
const DIGIT_KEYS: [(KeyCode, &str); 4] = [
    (KeyCode::Digit1, "1"),
    (KeyCode::Digit2, "2"),
    (KeyCode::Digit3, "3"),
    (KeyCode::Digit4, "4"),
];

#[inline]
fn key_name(logical: &Key, physical: PhysicalKey) -> Option<&'static str> {
    if let Key::Named(NamedKey::Escape) = logical {
        return Some(EXIT_KEY);
    }
    match physical {
        PhysicalKey::Code(KeyCode::Escape) => Some(EXIT_KEY),
        PhysicalKey::Code(code) => DIGIT_KEYS
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, name)| *name),
        PhysicalKey::Unidentified(_) => None,
    }
}

#[inline]
fn key_action(state: ElementState, repeat: bool) -> KeyAction {
    match (state, repeat) {
        (ElementState::Released, _) => KeyAction::Release,
        (ElementState::Pressed, true) => KeyAction::Repeat,
        (ElementState::Pressed, false) => KeyAction::Press,
    }
}

struct App<'w> {
    gpu: GpuState<'w>,
    selector: StageSelector,
    start: Instant,
    title: String,
}

impl<'w> App<'w> {
    fn frame(&mut self) -> Result<(), wgpu::SurfaceError> {
        let (width, height) = self.gpu.size();
        let Ok(viewport) = Viewport::new(width, height) else {
            return Ok(());
        };
        let elapsed = self.start.elapsed().as_secs_f32();
        let transforms = compute_frame(elapsed, viewport);
        let uniforms = FrameUniforms::new(&transforms, self.selector.active_space());
        self.gpu.render(&uniforms)
    }

    fn sync_title(&mut self, window: &winit::window::Window) {
        let title = self.selector.title();
        if title != self.title {
            window.set_title(&title);
            self.title = title;
        }
    }
}

fn run() -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut app = App {
        gpu,
        selector: StageSelector::new(),
        start: Instant::now(),
        title: String::new(),
    };
    log::info!("[app] started in {:?}", app.selector.active_space());

    let window = &window;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => app.gpu.resize(size),
            WindowEvent::KeyboardInput { event, .. } => {
                let Some(key) = key_name(&event.logical_key, event.physical_key) else {
                    return;
                };
                match app.selector.handle_key(key, key_action(event.state, event.repeat)) {
                    Some(Command::Select(space)) => log::info!("[input] showing {:?}", space),
                    Some(Command::Exit) => elwt.exit(),
                    None => {}
                }
            }
            WindowEvent::RedrawRequested => {
                match app.frame() {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        app.gpu.resize(window.inner_size())
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] frame skipped: {e}"),
                }
                app.sync_title(window);
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("fatal: {e:#}");
        std::process::exit(1);
    }
}
