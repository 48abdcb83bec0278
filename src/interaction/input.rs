use serde::{Deserialize, Serialize};

pub type PointerId = u64;

/// Pointer and recognized-gesture events delivered by the host dispatch layer.
///
/// Positions are logical screen pixels. Raw pointer events and recognized
/// gestures arrive on the same stream: a tap is typically delivered as
/// `PointerDown`, `PointerUp`, then `Tap`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartInput {
    PointerDown { pointer: PointerId, x: f64, y: f64 },
    PointerMove { pointer: PointerId, x: f64, y: f64 },
    PointerUp { pointer: PointerId, x: f64, y: f64 },
    PointerCancel { pointer: PointerId },
    Hover { x: f64, y: f64 },
    Exit,
    /// Mouse wheel / trackpad scroll signal at a position.
    Wheel { x: f64, y: f64, delta_y: f64 },
    ScaleStart { focal_x: f64, focal_y: f64 },
    /// `scale` is cumulative since `ScaleStart`.
    ScaleUpdate { focal_x: f64, focal_y: f64, scale: f64 },
    ScaleEnd,
    Tap { x: f64, y: f64 },
    DoubleTap { x: f64, y: f64 },
    LongPress { x: f64, y: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureFamily {
    Tap,
    LongPress,
    DoubleTap,
    Pan,
    Scale,
    Hover,
}

/// Gesture recognizers the host must install for the enabled interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GestureSet {
    pub tap: bool,
    pub long_press: bool,
    pub double_tap: bool,
    pub pan: bool,
    pub scale: bool,
    pub hover: bool,
}

impl GestureSet {
    #[must_use]
    pub fn contains(self, family: GestureFamily) -> bool {
        match family {
            GestureFamily::Tap => self.tap,
            GestureFamily::LongPress => self.long_press,
            GestureFamily::DoubleTap => self.double_tap,
            GestureFamily::Pan => self.pan,
            GestureFamily::Scale => self.scale,
            GestureFamily::Hover => self.hover,
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}
