//! Shapes drawn by `graphic_window` whenever its window is exposed.

use log::debug;

use crate::{
    backends::traits::DisplayBackend,
    error::Result,
    util::{Point, Size},
};

/// Arc angles are expressed in 64ths of a degree.
pub const fn degrees(value: i16) -> i16 {
    value << 6
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub from: Point<i16>,
    pub to: Point<i16>,
}

impl Segment {
    pub fn new(from: Point<i16>, to: Point<i16>) -> Self {
        Self { from, to }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub origin: Point<i16>,
    pub size: Size<u16>,
}

impl Rect {
    pub fn new(origin: Point<i16>, size: Size<u16>) -> Self {
        Self { origin, size }
    }
}

/// Part of the ellipse inscribed in `bounds`, starting at `start` and
/// sweeping `extent` counter-clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcShape {
    pub bounds: Rect,
    pub start: i16,
    pub extent: i16,
}

impl ArcShape {
    pub fn new(bounds: Rect, start: i16, extent: i16) -> Self {
        Self {
            bounds,
            start,
            extent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    pub polygon: [Point<i16>; 5],
    pub segments: [Segment; 2],
    pub rectangle: Rect,
    pub arc: ArcShape,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            polygon: [
                Point::new(11, 24),
                Point::new(30, 10),
                Point::new(49, 24),
                Point::new(42, 46),
                Point::new(18, 46),
            ],
            segments: [
                Segment::new(Point::new(60, 20), Point::new(90, 40)),
                Segment::new(Point::new(60, 40), Point::new(90, 20)),
            ],
            rectangle: Rect::new(Point::new(15, 65), Size::new(30, 20)),
            arc: ArcShape::new(
                Rect::new(Point::new(60, 70), Size::new(30, 20)),
                degrees(0),
                degrees(180),
            ),
        }
    }
}

impl Scene {
    /// Issues polygon, segments, rectangle and arc in that order, then
    /// flushes.
    pub fn draw<B>(
        &self,
        backend: &mut B,
        window: B::Window,
        gc: B::Gcontext,
    ) -> Result<()>
    where
        B: DisplayBackend,
    {
        debug!("drawing scene on {:?}", window);

        backend.fill_polygon(window, gc, &self.polygon)?;
        backend.draw_segments(window, gc, &self.segments)?;
        backend.fill_rectangles(
            window,
            gc,
            std::slice::from_ref(&self.rectangle),
        )?;
        backend.draw_arcs(window, gc, std::slice::from_ref(&self.arc))?;

        backend.flush()
    }
}
