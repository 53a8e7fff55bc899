use bitflags::bitflags;
use log::info;

use crate::{
    backends::traits::DisplayBackend,
    error::Result,
    util::{Point, Size},
};

bitflags! {
    /// Categories of events the server delivers for a window. Bit values
    /// follow the core protocol's event mask.
    pub struct EventInterest: u32 {
        const KEY_PRESS    = 1 << 0;
        const BUTTON_PRESS = 1 << 2;
        const EXPOSURE     = 1 << 15;
    }
}

bitflags! {
    /// Window attribute value mask, core protocol bit positions.
    pub struct AttributeMask: u32 {
        const BACK_PIXEL = 1 << 1;
        const EVENT_MASK = 1 << 11;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub position: Point<i16>,
    pub size: Size<u16>,
    pub border_width: u16,
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            position: Point::new(0, 0),
            size: Size::new(100, 100),
            border_width: 1,
        }
    }
}

/// Attributes sent along with a create-window request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowAttributes {
    pub background_pixel: Option<u32>,
    pub event_mask: Option<EventInterest>,
}

impl WindowAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background_pixel(mut self, pixel: u32) -> Self {
        self.background_pixel = Some(pixel);
        self
    }

    pub fn event_mask(mut self, mask: EventInterest) -> Self {
        self.event_mask = Some(mask);
        self
    }

    pub fn value_mask(&self) -> AttributeMask {
        let mut mask = AttributeMask::empty();
        mask.set(AttributeMask::BACK_PIXEL, self.background_pixel.is_some());
        mask.set(AttributeMask::EVENT_MASK, self.event_mask.is_some());
        mask
    }

    /// Values in ascending bit order of [`value_mask`](Self::value_mask),
    /// one per set bit.
    pub fn value_list(&self) -> Vec<u32> {
        self.background_pixel
            .into_iter()
            .chain(self.event_mask.map(|mask| mask.bits()))
            .collect()
    }
}

/// Creates the window, asks for it to be shown and pushes both requests out.
pub fn open_window<B>(
    backend: &mut B,
    geometry: &WindowGeometry,
    attributes: &WindowAttributes,
) -> Result<B::Window>
where
    B: DisplayBackend,
{
    let window = backend.create_window(geometry, attributes)?;
    backend.map_window(window)?;
    backend.flush()?;

    info!(
        "mapped window {:?} at {:?} size {:?}",
        window,
        geometry.position.as_tuple(),
        geometry.size.as_tuple()
    );

    Ok(window)
}
