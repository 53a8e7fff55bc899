use std::fmt::Debug;

use super::window_event::WindowEvent;
use crate::{
    error::Result,
    scene::{ArcShape, Rect, Segment},
    util::Point,
    window::{WindowAttributes, WindowGeometry},
};

/// Request/response surface of a display server connection.
///
/// Drawing and window requests are buffered by the backend; nothing is
/// guaranteed to reach the server before [`flush`](Self::flush) is called.
pub trait DisplayBackend {
    type Window: Copy + Debug + PartialEq;
    type Gcontext: Copy + Debug + PartialEq;

    fn white_pixel(&self) -> u32;
    fn black_pixel(&self) -> u32;

    /// creates a top-level window on the default screen, child of the root
    /// window and inheriting its depth and visual.
    fn create_window(
        &mut self,
        geometry: &WindowGeometry,
        attributes: &WindowAttributes,
    ) -> Result<Self::Window>;

    /// allocates a graphics context drawing black on white.
    fn create_gc(&mut self) -> Result<Self::Gcontext>;

    fn map_window(&mut self, window: Self::Window) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// blocks until the next event arrives. `None` means the connection is
    /// gone and no further events will ever be delivered.
    fn next_event(&mut self) -> Option<WindowEvent<Self::Window>>;

    fn fill_polygon(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        points: &[Point<i16>],
    ) -> Result<()>;
    fn draw_segments(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        segments: &[Segment],
    ) -> Result<()>;
    fn fill_rectangles(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        rectangles: &[Rect],
    ) -> Result<()>;
    fn draw_arcs(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        arcs: &[ArcShape],
    ) -> Result<()>;
}
