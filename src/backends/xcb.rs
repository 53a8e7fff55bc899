//x11 backend

use log::{error, trace};
use std::sync::Arc;

use x11rb::{
    connect,
    connection::Connection,
    protocol::{
        xproto::{
            self, ConnectionExt, CoordMode, CreateGCAux, CreateWindowAux,
            EventMask, PolyShape, Screen, WindowClass,
        },
        Event,
    },
};

use super::{
    traits::DisplayBackend,
    window_event::{
        ButtonEvent, ExposeEvent, KeyEvent, RequestError, WindowEvent,
    },
};
use crate::{
    error::Result,
    scene::{ArcShape, Rect, Segment},
    util::{Point, Size},
    window::{
        AttributeMask, EventInterest, WindowAttributes, WindowGeometry,
    },
};

pub struct X11Backend<C>
where
    C: Connection,
{
    connection: Arc<C>,
    screen: usize,
}

/// Connects to the display named by `$DISPLAY`.
pub fn create_backend() -> Result<X11Backend<impl Connection + Send + Sync>> {
    let (connection, screen) = connect(None)?;

    Ok(X11Backend::new(Arc::new(connection), screen))
}

impl<C> X11Backend<C>
where
    C: Connection,
{
    pub fn new(connection: Arc<C>, screen: usize) -> Self {
        Self { connection, screen }
    }

    fn screen(&self) -> &Screen {
        &self.connection.setup().roots[self.screen]
    }

    fn root(&self) -> u32 {
        self.screen().root
    }
}

fn translate_event(event: Event) -> WindowEvent<xproto::Window> {
    match event {
        Event::KeyPress(event) => {
            KeyEvent::new(event.event, event.detail).into()
        }
        Event::ButtonPress(event) => ButtonEvent::new(
            event.event,
            event.detail,
            Point::new(event.event_x, event.event_y),
        )
        .into(),
        Event::Expose(event) => ExposeEvent::new(
            event.window,
            Point::new(event.x, event.y),
            Size::new(event.width, event.height),
            event.count,
        )
        .into(),
        Event::Error(err) => WindowEvent::RequestError(RequestError {
            error_code: err.error_code,
            major_opcode: err.major_opcode,
        }),
        other => {
            trace!("ignoring {:?}", other);
            WindowEvent::Unrecognized
        }
    }
}

fn event_mask(interest: EventInterest) -> EventMask {
    let mut mask = EventMask::NO_EVENT;

    if interest.contains(EventInterest::KEY_PRESS) {
        mask = mask | EventMask::KEY_PRESS;
    }
    if interest.contains(EventInterest::BUTTON_PRESS) {
        mask = mask | EventMask::BUTTON_PRESS;
    }
    if interest.contains(EventInterest::EXPOSURE) {
        mask = mask | EventMask::EXPOSURE;
    }

    mask
}

/// Fills the request's value list slot by slot, in mask bit order.
fn window_aux(attributes: &WindowAttributes) -> CreateWindowAux {
    let mask = attributes.value_mask();
    let mut values = attributes.value_list().into_iter();
    let mut aux = CreateWindowAux::new();

    if mask.contains(AttributeMask::BACK_PIXEL) {
        if let Some(pixel) = values.next() {
            aux = aux.background_pixel(pixel);
        }
    }
    if mask.contains(AttributeMask::EVENT_MASK) {
        if let Some(bits) = values.next() {
            let interest = EventInterest::from_bits_truncate(bits);
            aux = aux.event_mask(event_mask(interest));
        }
    }

    aux
}

fn rectangle(rect: &Rect) -> xproto::Rectangle {
    xproto::Rectangle {
        x: rect.origin.x,
        y: rect.origin.y,
        width: rect.size.width,
        height: rect.size.height,
    }
}

impl<C> DisplayBackend for X11Backend<C>
where
    C: Connection,
{
    type Window = xproto::Window;
    type Gcontext = xproto::Gcontext;

    fn white_pixel(&self) -> u32 {
        self.screen().white_pixel
    }

    fn black_pixel(&self) -> u32 {
        self.screen().black_pixel
    }

    fn create_window(
        &mut self,
        geometry: &WindowGeometry,
        attributes: &WindowAttributes,
    ) -> Result<Self::Window> {
        let window = self.connection.generate_id()?;
        let screen = self.screen();

        self.connection.create_window(
            screen.root_depth,
            window,
            screen.root,
            geometry.position.x,
            geometry.position.y,
            geometry.size.width,
            geometry.size.height,
            geometry.border_width,
            WindowClass::INPUT_OUTPUT,
            screen.root_visual,
            &window_aux(attributes),
        )?;

        Ok(window)
    }

    fn create_gc(&mut self) -> Result<Self::Gcontext> {
        let gc = self.connection.generate_id()?;
        let aux = CreateGCAux::new()
            .foreground(self.black_pixel())
            .background(self.white_pixel())
            .graphics_exposures(0u32);

        self.connection.create_gc(gc, self.root(), &aux)?;

        Ok(gc)
    }

    fn map_window(&mut self, window: Self::Window) -> Result<()> {
        self.connection.map_window(window)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.connection.flush()?;
        Ok(())
    }

    fn next_event(&mut self) -> Option<WindowEvent<Self::Window>> {
        match self.connection.wait_for_event() {
            Ok(event) => Some(translate_event(event)),
            Err(err) => {
                error!("failed to read event: {}", err);
                None
            }
        }
    }

    fn fill_polygon(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        points: &[Point<i16>],
    ) -> Result<()> {
        let points = points
            .iter()
            .map(|point| xproto::Point {
                x: point.x,
                y: point.y,
            })
            .collect::<Vec<_>>();

        self.connection.fill_poly(
            window,
            gc,
            PolyShape::CONVEX,
            CoordMode::ORIGIN,
            &points,
        )?;
        Ok(())
    }

    fn draw_segments(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        segments: &[Segment],
    ) -> Result<()> {
        let segments = segments
            .iter()
            .map(|segment| xproto::Segment {
                x1: segment.from.x,
                y1: segment.from.y,
                x2: segment.to.x,
                y2: segment.to.y,
            })
            .collect::<Vec<_>>();

        self.connection.poly_segment(window, gc, &segments)?;
        Ok(())
    }

    fn fill_rectangles(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        rectangles: &[Rect],
    ) -> Result<()> {
        let rectangles = rectangles.iter().map(rectangle).collect::<Vec<_>>();

        self.connection.poly_fill_rectangle(window, gc, &rectangles)?;
        Ok(())
    }

    fn draw_arcs(
        &mut self,
        window: Self::Window,
        gc: Self::Gcontext,
        arcs: &[ArcShape],
    ) -> Result<()> {
        let arcs = arcs
            .iter()
            .map(|arc| {
                let bounds = rectangle(&arc.bounds);
                xproto::Arc {
                    x: bounds.x,
                    y: bounds.y,
                    width: bounds.width,
                    height: bounds.height,
                    angle1: arc.start,
                    angle2: arc.extent,
                }
            })
            .collect::<Vec<_>>();

        self.connection.poly_arc(window, gc, &arcs)?;
        Ok(())
    }
}
