use crate::util::{Point, Size};

/// A single inbound event, owned by whoever dequeued it.
#[derive(Debug, Clone, PartialEq, Eq, strum::AsRefStr)]
pub enum WindowEvent<Window> {
    KeyEvent(KeyEvent<Window>),
    ButtonEvent(ButtonEvent<Window>),
    ExposeEvent(ExposeEvent<Window>),
    /// a previously sent request was rejected by the server
    RequestError(RequestError),
    /// any event tag the programs do not react to
    Unrecognized,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent<Window> {
    pub window: Window,
    pub keycode: u8,
}

impl<Window> KeyEvent<Window> {
    pub fn new(window: Window, keycode: u8) -> Self {
        Self { window, keycode }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonEvent<Window> {
    pub window: Window,
    pub button: u8,
    /// pointer position relative to `window`
    pub position: Point<i16>,
}

impl<Window> ButtonEvent<Window> {
    pub fn new(window: Window, button: u8, position: Point<i16>) -> Self {
        Self {
            window,
            button,
            position,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposeEvent<Window> {
    pub window: Window,
    pub origin: Point<u16>,
    pub size: Size<u16>,
    /// number of expose events still following this one
    pub count: u16,
}

impl<Window> ExposeEvent<Window> {
    pub fn new(
        window: Window,
        origin: Point<u16>,
        size: Size<u16>,
        count: u16,
    ) -> Self {
        Self {
            window,
            origin,
            size,
            count,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestError {
    pub error_code: u8,
    pub major_opcode: u8,
}

impl<Window> From<KeyEvent<Window>> for WindowEvent<Window> {
    fn from(event: KeyEvent<Window>) -> Self {
        Self::KeyEvent(event)
    }
}

impl<Window> From<ButtonEvent<Window>> for WindowEvent<Window> {
    fn from(event: ButtonEvent<Window>) -> Self {
        Self::ButtonEvent(event)
    }
}

impl<Window> From<ExposeEvent<Window>> for WindowEvent<Window> {
    fn from(event: ExposeEvent<Window>) -> Self {
        Self::ExposeEvent(event)
    }
}
