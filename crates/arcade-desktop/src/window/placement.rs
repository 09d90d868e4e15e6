//! Default window placement on desktop-class screens

use serde::{Deserialize, Serialize};

use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// Horizontal padding kept when a centered window is shrunk to fit
const CENTERED_FIT_PADDING: f32 = 20.0;
/// Vertical space kept free above and below a centered window
const CENTERED_VERTICAL_RESERVE: f32 = 120.0;
/// Centered windows sit slightly below the true center
const CENTERED_DROP: f32 = 30.0;

/// Where a window goes when the caller gives no position
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Placement {
    /// Always the same origin
    Fixed { origin: Vec2 },
    /// Diagonal cascade from `origin`, wrapping every `cycle` windows
    Cascade { origin: Vec2, step: f32, cycle: u32 },
    /// Centered in the area left of a side panel `reserved_right` wide,
    /// shrinking the window to fit
    Centered { reserved_right: f32 },
}

impl Default for Placement {
    fn default() -> Self {
        Placement::Fixed {
            origin: Vec2::new(50.0, 50.0),
        }
    }
}

impl Placement {
    /// Resolve origin and (possibly fitted) size for a new window
    ///
    /// `open_count` is the number of windows already open.
    pub fn place(&self, size: Size, open_count: usize, viewport: &Viewport) -> (Vec2, Size) {
        match *self {
            Placement::Fixed { origin } => (origin, size),
            Placement::Cascade {
                origin,
                step,
                cycle,
            } => {
                let index = (open_count as u32 % cycle.max(1)) as f32;
                (origin + Vec2::new(step, step) * index, size)
            }
            Placement::Centered { reserved_right } => {
                let screen = viewport.screen_size;
                let available_w = (screen.width - reserved_right).max(0.0);

                let mut fitted = size;
                if fitted.width > available_w {
                    fitted.width = (available_w - CENTERED_FIT_PADDING).max(0.0);
                }
                if fitted.height > screen.height - CENTERED_VERTICAL_RESERVE {
                    fitted.height = (screen.height - CENTERED_VERTICAL_RESERVE).max(0.0);
                }

                let x = (available_w - fitted.width) / 2.0;
                let y = (screen.height - fitted.height) / 2.0 + CENTERED_DROP;
                (Vec2::new(x, y), fitted)
            }
        }
    }
}
