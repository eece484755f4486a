//! Dark-icon tint broadcast plumbing.

use std::cell::RefCell;
use std::sync::mpsc::{self, Receiver, Sender};

/// Packed ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    /// Default icon tint against a light-on-dark status bar.
    pub const WHITE: Color = Color(0xffff_ffff);
}

/// Screen-space rectangle, used for the darkened region and view bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        let (ax2, ay2) = (self.x + self.width as i32, self.y + self.height as i32);
        let (bx2, by2) = (other.x + other.width as i32, other.y + other.height as i32);
        self.x < bx2 && other.x < ax2 && self.y < by2 && other.y < ay2
    }
}

/// One dark-icon broadcast: the darkened region, how dark it is, and the
/// tint icons in that region should take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TintEvent {
    /// Darkened region; `None` means the whole bar.
    pub area: Option<Rect>,
    /// Darkness from 0.0 (light content behind) to 1.0 (dark content).
    pub intensity: f32,
    /// Tint for icons inside the darkened region.
    pub tint: Color,
}

/// Tint a view at `view_bounds` should use for `event`.
///
/// Views outside the darkened region keep the white default, as do views
/// over content that is not dark enough to need the swap.
pub fn resolve_tint(event: &TintEvent, view_bounds: Rect) -> Color {
    if let Some(area) = event.area {
        if !area.intersects(&view_bounds) {
            return Color::WHITE;
        }
    }
    if event.intensity < 0.5 {
        return Color::WHITE;
    }
    event.tint
}

/// Receiving end of a tint subscription.
#[derive(Debug)]
pub struct TintWatch {
    rx: Receiver<TintEvent>,
}

impl TintWatch {
    /// Next pending event, if any. Never blocks.
    pub fn try_next(&self) -> Option<TintEvent> {
        self.rx.try_recv().ok()
    }
}

/// Fan-out of tint events to subscribed views.
#[derive(Default)]
pub struct TintBroadcast {
    senders: RefCell<Vec<Sender<TintEvent>>>,
}

impl TintBroadcast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a receiver; drop the watch to unregister.
    pub fn subscribe(&self) -> TintWatch {
        let (tx, rx) = mpsc::channel();
        self.senders.borrow_mut().push(tx);
        TintWatch { rx }
    }

    /// Deliver an event to every live subscriber, pruning dead ones.
    pub fn send(&self, event: TintEvent) {
        self.senders
            .borrow_mut()
            .retain(|tx| tx.send(event).is_ok());
    }
}
