//! In-memory backend that replays scripted events and records every request.

use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use super::{traits::DisplayBackend, window_event::WindowEvent};
use crate::{
    error::Result,
    scene::{ArcShape, Rect, Segment},
    util::Point,
    window::{WindowAttributes, WindowGeometry},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    CreateWindow {
        window: u32,
        geometry: WindowGeometry,
        attributes: WindowAttributes,
    },
    CreateGc(u32),
    MapWindow(u32),
    Flush,
    FillPolygon(Vec<Point<i16>>),
    DrawSegments(Vec<Segment>),
    FillRectangles(Vec<Rect>),
    DrawArcs(Vec<ArcShape>),
}

#[derive(Default)]
struct Journal {
    next_id: u32,
    events: VecDeque<WindowEvent<u32>>,
    requests: Vec<Request>,
    dequeued: usize,
}

/// Clones share the same journal, so a test can keep a handle while the
/// code under test owns (and drops) the backend.
#[derive(Clone)]
pub struct RecordingBackend(Rc<RefCell<Journal>>);

impl RecordingBackend {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Journal {
            next_id: 1,
            ..Default::default()
        })))
    }

    pub fn with_events<I>(self, events: I) -> Self
    where
        I: IntoIterator<Item = WindowEvent<u32>>,
    {
        self.0.borrow_mut().events.extend(events);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.0.borrow().requests.clone()
    }

    pub fn clear_requests(&mut self) {
        self.0.borrow_mut().requests.clear();
    }

    /// number of events handed out by `next_event`
    pub fn dequeued(&self) -> usize {
        self.0.borrow().dequeued
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().events.len()
    }

    fn record(&mut self, request: Request) {
        self.0.borrow_mut().requests.push(request);
    }

    fn generate_id(&mut self) -> u32 {
        let mut journal = self.0.borrow_mut();
        let id = journal.next_id;
        journal.next_id += 1;
        id
    }
}

impl DisplayBackend for RecordingBackend {
    type Window = u32;
    type Gcontext = u32;

    fn white_pixel(&self) -> u32 {
        0xffffff
    }

    fn black_pixel(&self) -> u32 {
        0
    }

    fn create_window(
        &mut self,
        geometry: &WindowGeometry,
        attributes: &WindowAttributes,
    ) -> Result<u32> {
        let window = self.generate_id();
        self.record(Request::CreateWindow {
            window,
            geometry: *geometry,
            attributes: *attributes,
        });
        Ok(window)
    }

    fn create_gc(&mut self) -> Result<u32> {
        let gc = self.generate_id();
        self.record(Request::CreateGc(gc));
        Ok(gc)
    }

    fn map_window(&mut self, window: u32) -> Result<()> {
        self.record(Request::MapWindow(window));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.record(Request::Flush);
        Ok(())
    }

    fn next_event(&mut self) -> Option<WindowEvent<u32>> {
        let mut journal = self.0.borrow_mut();
        let event = journal.events.pop_front()?;
        journal.dequeued += 1;
        Some(event)
    }

    fn fill_polygon(
        &mut self,
        _window: u32,
        _gc: u32,
        points: &[Point<i16>],
    ) -> Result<()> {
        self.record(Request::FillPolygon(points.to_vec()));
        Ok(())
    }

    fn draw_segments(
        &mut self,
        _window: u32,
        _gc: u32,
        segments: &[Segment],
    ) -> Result<()> {
        self.record(Request::DrawSegments(segments.to_vec()));
        Ok(())
    }

    fn fill_rectangles(
        &mut self,
        _window: u32,
        _gc: u32,
        rectangles: &[Rect],
    ) -> Result<()> {
        self.record(Request::FillRectangles(rectangles.to_vec()));
        Ok(())
    }

    fn draw_arcs(
        &mut self,
        _window: u32,
        _gc: u32,
        arcs: &[ArcShape],
    ) -> Result<()> {
        self.record(Request::DrawArcs(arcs.to_vec()));
        Ok(())
    }
}
