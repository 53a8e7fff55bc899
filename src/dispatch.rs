use std::io::Write;

use log::{debug, trace, warn};

use crate::{
    backends::{
        traits::DisplayBackend,
        window_event::{ButtonEvent, KeyEvent, WindowEvent},
    },
    error::Result,
    scene::Scene,
};

/// Why [`EventDispatcher::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// a key was pressed
    Finished,
    ConnectionLost,
}

struct Painter<Gc> {
    gc: Gc,
    scene: Scene,
}

/// Reacts to events on a single window until a key is pressed.
///
/// Report lines (`Keycode: ..`, `Button pressed: ..`) go to `out`, which the
/// programs point at stdout.
pub struct EventDispatcher<B, W>
where
    B: DisplayBackend,
    W: Write,
{
    window: B::Window,
    out: W,
    finished: bool,
    painter: Option<Painter<B::Gcontext>>,
}

impl<B, W> EventDispatcher<B, W>
where
    B: DisplayBackend,
    W: Write,
{
    pub fn new(window: B::Window, out: W) -> Self {
        Self {
            window,
            out,
            finished: false,
            painter: None,
        }
    }

    /// redraw `scene` with `gc` on every expose event.
    pub fn with_painter(mut self, gc: B::Gcontext, scene: Scene) -> Self {
        self.painter = Some(Painter { gc, scene });
        self
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn run(&mut self, backend: &mut B) -> Result<LoopExit> {
        while !self.finished {
            let event = match backend.next_event() {
                Some(event) => event,
                None => return Ok(LoopExit::ConnectionLost),
            };

            self.handle(backend, event)?;
        }

        Ok(LoopExit::Finished)
    }

    pub fn handle(
        &mut self,
        backend: &mut B,
        event: WindowEvent<B::Window>,
    ) -> Result<()> {
        trace!("{}", event.as_ref());

        match event {
            WindowEvent::KeyEvent(event) => self.handle_key(event)?,
            WindowEvent::ButtonEvent(event) => self.handle_button(event)?,
            WindowEvent::ExposeEvent(event) => {
                if let Some(painter) = &self.painter {
                    debug!(
                        "expose on {:?} ({} more pending)",
                        event.window, event.count
                    );
                    painter.scene.draw(backend, self.window, painter.gc)?;
                }
            }
            WindowEvent::RequestError(err) => {
                warn!(
                    "request with major opcode {} failed with error code {}",
                    err.major_opcode, err.error_code
                );
            }
            WindowEvent::Unrecognized => {}
        }

        Ok(())
    }

    fn handle_key(&mut self, event: KeyEvent<B::Window>) -> Result<()> {
        writeln!(self.out, "Keycode: {}", event.keycode)?;
        self.out.flush()?;
        self.finished = true;

        Ok(())
    }

    // coordinates print signed; a press outside the window (only possible
    // during a grab) shows a negative offset rather than a wrapped u32.
    fn handle_button(&mut self, event: ButtonEvent<B::Window>) -> Result<()> {
        writeln!(self.out, "Button pressed: {}", event.button)?;
        writeln!(self.out, "X-coordinate: {}", event.position.x)?;
        writeln!(self.out, "Y-coordinate: {}", event.position.y)?;
        self.out.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        backends::{
            recording::{RecordingBackend, Request},
            window_event::{ExposeEvent, RequestError},
        },
        util::{Point, Size},
    };

    const WINDOW: u32 = 1;

    fn key(keycode: u8) -> WindowEvent<u32> {
        KeyEvent::new(WINDOW, keycode).into()
    }

    fn button(button: u8, x: i16, y: i16) -> WindowEvent<u32> {
        ButtonEvent::new(WINDOW, button, Point::new(x, y)).into()
    }

    fn expose() -> WindowEvent<u32> {
        ExposeEvent::new(WINDOW, Point::new(0, 0), Size::new(100, 100), 0)
            .into()
    }

    fn output(
        dispatcher: EventDispatcher<RecordingBackend, Vec<u8>>,
    ) -> String {
        String::from_utf8(dispatcher.into_inner()).unwrap()
    }

    #[test]
    fn key_press_finishes() {
        let mut backend = RecordingBackend::new()
            .with_events(vec![button(3, 1, 1), expose(), key(38), key(9)]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        assert!(!dispatcher.is_finished());
        assert_eq!(dispatcher.run(&mut backend).unwrap(), LoopExit::Finished);
        assert!(dispatcher.is_finished());
        assert_eq!(backend.dequeued(), 3);
        assert_eq!(backend.pending(), 1);

        let output = output(dispatcher);
        let keycodes = output
            .lines()
            .filter(|line| line.starts_with("Keycode"))
            .collect::<Vec<_>>();
        assert_eq!(keycodes, vec!["Keycode: 38"]);
    }

    #[test]
    fn button_press_reports_three_lines() {
        let mut backend = RecordingBackend::new()
            .with_events(vec![button(1, 10, 20), key(24)]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        dispatcher.run(&mut backend).unwrap();

        assert_eq!(
            output(dispatcher),
            "Button pressed: 1\n\
             X-coordinate: 10\n\
             Y-coordinate: 20\n\
             Keycode: 24\n"
        );
    }

    #[test]
    fn button_coordinates_keep_their_sign() {
        let mut backend = RecordingBackend::new()
            .with_events(vec![button(1, -3, 120), key(9)]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        dispatcher.run(&mut backend).unwrap();

        assert_eq!(
            output(dispatcher),
            "Button pressed: 1\n\
             X-coordinate: -3\n\
             Y-coordinate: 120\n\
             Keycode: 9\n"
        );
    }

    #[test]
    fn connection_lost_ends_loop() {
        let mut backend =
            RecordingBackend::new().with_events(vec![button(2, 5, 6)]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        assert_eq!(
            dispatcher.run(&mut backend).unwrap(),
            LoopExit::ConnectionLost
        );
        assert!(!dispatcher.is_finished());
        assert_eq!(backend.dequeued(), 1);
    }

    #[test]
    fn unrecognized_and_errors_are_ignored() {
        let mut backend = RecordingBackend::new().with_events(vec![
            WindowEvent::Unrecognized,
            WindowEvent::RequestError(RequestError {
                error_code: 3,
                major_opcode: 1,
            }),
            WindowEvent::Unrecognized,
            key(10),
        ]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        assert_eq!(dispatcher.run(&mut backend).unwrap(), LoopExit::Finished);
        assert_eq!(backend.dequeued(), 4);
        assert!(backend.requests().is_empty());
        assert_eq!(output(dispatcher), "Keycode: 10\n");
    }

    #[test]
    fn expose_without_painter_draws_nothing() {
        let mut backend =
            RecordingBackend::new().with_events(vec![expose(), key(10)]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new());

        dispatcher.run(&mut backend).unwrap();

        assert!(backend.requests().is_empty());
    }

    #[test]
    fn expose_with_painter_draws_scene() {
        let mut backend = RecordingBackend::new().with_events(vec![
            button(1, 1, 1),
            expose(),
            WindowEvent::Unrecognized,
            key(10),
        ]);
        let mut dispatcher = EventDispatcher::new(WINDOW, Vec::new())
            .with_painter(2, Scene::default());

        dispatcher.run(&mut backend).unwrap();

        let kinds = backend
            .requests()
            .iter()
            .map(|request| match request {
                Request::FillPolygon(_) => "fill_poly",
                Request::DrawSegments(_) => "poly_segment",
                Request::FillRectangles(_) => "poly_fill_rectangle",
                Request::DrawArcs(_) => "poly_arc",
                Request::Flush => "flush",
                _ => "other",
            })
            .collect::<Vec<_>>();

        assert_eq!(
            kinds,
            vec![
                "fill_poly",
                "poly_segment",
                "poly_fill_rectangle",
                "poly_arc",
                "flush"
            ]
        );
    }
}
