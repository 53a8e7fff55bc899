use std::{io::Write, thread, time::Duration};

use log::{error, info, warn};

use crate::{
    backends::traits::DisplayBackend,
    dispatch::{EventDispatcher, LoopExit},
    error::{Error, Result},
    scene::Scene,
    window::{open_window, EventInterest, WindowAttributes, WindowGeometry},
};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum Program {
    /// shows a window for a while, no event handling
    SimpleWindow,
    /// reports key and button presses, quits on the first key press
    EventWindow,
    /// like `EventWindow`, and redraws a few shapes on expose
    GraphicWindow,
}

impl Program {
    fn event_interest(&self) -> Option<EventInterest> {
        match self {
            Self::SimpleWindow => None,
            Self::EventWindow | Self::GraphicWindow => Some(
                EventInterest::EXPOSURE
                    | EventInterest::BUTTON_PRESS
                    | EventInterest::KEY_PRESS,
            ),
        }
    }
}

pub const DEFAULT_LINGER: Duration = Duration::from_secs(5);

pub struct Launcher<W>
where
    W: Write,
{
    program: Program,
    out: W,
    linger: Duration,
}

impl<W> Launcher<W>
where
    W: Write,
{
    pub fn new(program: Program, out: W) -> Self {
        Self {
            program,
            out,
            linger: DEFAULT_LINGER,
        }
    }

    /// how long `simple_window` keeps its window on screen.
    pub fn with_linger(mut self, linger: Duration) -> Self {
        self.linger = linger;
        self
    }

    /// Connects with `connect`, runs the program and returns the process
    /// exit status.
    pub fn run<B, F>(mut self, connect: F) -> i32
    where
        B: DisplayBackend,
        F: FnOnce() -> Result<B>,
    {
        let mut backend = match connect() {
            Ok(backend) => backend,
            Err(err) => {
                error!("{}", err);
                if let Err(err) = writeln!(self.out, "Error opening display.")
                    .and_then(|_| self.out.flush())
                {
                    warn!("failed to report connection failure: {}", err);
                }
                return 1;
            }
        };

        let program = self.program;
        let status = match self.execute(&mut backend) {
            Ok(LoopExit::Finished) => 0,
            // the loop ends gracefully, same as a key press
            Ok(LoopExit::ConnectionLost) => {
                error!("{}", Error::ConnectionLost);
                0
            }
            Err(err) => {
                error!("{} failed: {}", program, err);
                1
            }
        };

        // dropping the backend closes the connection
        drop(backend);
        info!("{} disconnected", program);

        status
    }

    fn execute<B>(self, backend: &mut B) -> Result<LoopExit>
    where
        B: DisplayBackend,
    {
        let gc = match self.program {
            Program::GraphicWindow => Some(backend.create_gc()?),
            _ => None,
        };

        let mut attributes =
            WindowAttributes::new().background_pixel(backend.white_pixel());
        if let Some(interest) = self.program.event_interest() {
            attributes = attributes.event_mask(interest);
        }

        let window =
            open_window(backend, &WindowGeometry::default(), &attributes)?;

        if self.program == Program::SimpleWindow {
            info!("keeping window open for {:?}", self.linger);
            thread::sleep(self.linger);
            return Ok(LoopExit::Finished);
        }

        let mut dispatcher = EventDispatcher::<B, W>::new(window, self.out);
        if let Some(gc) = gc {
            dispatcher = dispatcher.with_painter(gc, Scene::default());
        }

        dispatcher.run(backend)
    }
}
