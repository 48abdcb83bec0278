use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::InteractiveSurface;

/// Shared handle a host keeps for an interactive chart surface.
pub type SharedSurface = Rc<RefCell<dyn InteractiveSurface>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectionState {
    Detached,
    Attached,
}

/// Change notifications delivered to controller listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ControllerEvent {
    Attached,
    Detached,
    ZoomChanged { zoom_level: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&ControllerEvent)>;

/// External handle that forwards commands to at most one attached surface.
///
/// The controller never owns the surface: it keeps a weak reference, so a
/// dropped surface reads as detached. Commands on a detached controller
/// return `false` instead of failing.
#[derive(Default)]
pub struct ChartController {
    surface: Option<Weak<RefCell<dyn InteractiveSurface>>>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl fmt::Debug for ChartController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartController")
            .field("connection_state", &self.connection_state())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ChartController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches to `surface`, replacing any previous attachment.
    ///
    /// Episodes on both the previous and the new surface are interrupted so
    /// no dismiss timer outlives the switch.
    pub fn attach(&mut self, surface: &SharedSurface) {
        if let Some(previous) = self.upgraded() {
            if !Rc::ptr_eq(&previous, surface) {
                interrupt(&previous);
            }
        }
        interrupt(surface);
        self.surface = Some(Rc::downgrade(surface));
        debug!("chart controller attached");
        self.notify(ControllerEvent::Attached);
    }

    /// Clears the attachment. Returns `false` when nothing was attached.
    pub fn detach(&mut self) -> bool {
        let Some(previous) = self.surface.take() else {
            return false;
        };
        if let Some(surface) = previous.upgrade() {
            interrupt(&surface);
        }
        debug!("chart controller detached");
        self.notify(ControllerEvent::Detached);
        true
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.upgraded().is_some()
    }

    #[must_use]
    pub fn connection_state(&self) -> ConnectionState {
        if self.is_attached() {
            ConnectionState::Attached
        } else {
            ConnectionState::Detached
        }
    }

    /// Zoom level of the attached surface; `1.0` when detached.
    #[must_use]
    pub fn zoom_level(&self) -> f64 {
        self.query(|surface| surface.zoom_level()).unwrap_or(1.0)
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.query(|surface| surface.is_zoomed()).unwrap_or(false)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.command("zoom_in", |surface| surface.zoom_in())
    }

    pub fn zoom_out(&mut self) -> bool {
        self.command("zoom_out", |surface| surface.zoom_out())
    }

    pub fn reset_zoom(&mut self) -> bool {
        self.command("reset_zoom", |surface| surface.reset_zoom())
    }

    /// Resets zoom, episode, probe and selection on the attached surface.
    pub fn reset(&mut self) -> bool {
        self.command("reset", |surface| {
            surface.reset();
            true
        })
    }

    /// Registers a listener. Listeners run synchronously in registration order.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ControllerEvent) + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        trace!(listener_id = id.0, "controller listener added");
        id
    }

    /// Removes a listener. Returns `true` when it was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let Some(position) = self
            .listeners
            .iter()
            .position(|(listener_id, _)| *listener_id == id)
        else {
            return false;
        };
        self.listeners.remove(position);
        true
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn upgraded(&self) -> Option<SharedSurface> {
        self.surface.as_ref().and_then(Weak::upgrade)
    }

    fn query<T>(&self, read: impl FnOnce(&dyn InteractiveSurface) -> T) -> Option<T> {
        let surface = self.upgraded()?;
        let borrowed = surface.try_borrow().ok()?;
        let value = read(&*borrowed);
        Some(value)
    }

    fn command<F>(&mut self, name: &'static str, apply: F) -> bool
    where
        F: FnOnce(&mut dyn InteractiveSurface) -> bool,
    {
        let Some(surface) = self.upgraded() else {
            debug!(command = name, "controller detached, command ignored");
            return false;
        };
        let (changed, zoom_change) = match surface.try_borrow_mut() {
            Ok(mut surface) => {
                let before = surface.zoom_level();
                let changed = apply(&mut *surface);
                let after = surface.zoom_level();
                (changed, (after != before).then_some(after))
            }
            Err(_) => {
                warn!(command = name, "surface is busy, command ignored");
                return false;
            }
        };
        if let Some(zoom_level) = zoom_change {
            self.notify(ControllerEvent::ZoomChanged { zoom_level });
        }
        changed
    }

    fn notify(&mut self, event: ControllerEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

fn interrupt(surface: &SharedSurface) {
    match surface.try_borrow_mut() {
        Ok(mut surface) => surface.interrupt_episode(),
        Err(_) => warn!("surface is busy, episode not interrupted"),
    }
}
