//! Desktop icon layout

use serde::{Deserialize, Serialize};

use super::AppRegistry;
use crate::math::{Size, Vec2};
use crate::viewport::Viewport;

/// How desktop icons are arranged
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IconLayout {
    /// Column-major grid filling the work area top to bottom
    Grid {
        /// Offset from the work area's top-left corner
        origin: Vec2,
        cell: Size,
    },
    /// Apps sit at their pinned positions; unpinned apps use the default grid
    Free,
}

const DEFAULT_ORIGIN: Vec2 = Vec2::new(16.0, 16.0);
const DEFAULT_CELL: Size = Size::new(96.0, 96.0);

impl Default for IconLayout {
    fn default() -> Self {
        IconLayout::Grid {
            origin: DEFAULT_ORIGIN,
            cell: DEFAULT_CELL,
        }
    }
}

/// A positioned desktop icon
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DesktopIcon {
    pub app_id: String,
    pub name: String,
    pub icon: String,
    pub position: Vec2,
}

/// Position the icons of all listed apps
pub fn layout_icons(
    registry: &AppRegistry,
    layout: IconLayout,
    viewport: &Viewport,
) -> Vec<DesktopIcon> {
    let area = viewport.work_area();
    let grid_slot = |index: usize, origin: Vec2, cell: Size| {
        let usable = (area.height - origin.y).max(cell.height);
        let rows = ((usable / cell.height).floor() as usize).max(1);
        let (col, row) = (index / rows, index % rows);
        area.position() + origin + Vec2::new(col as f32 * cell.width, row as f32 * cell.height)
    };

    registry
        .listed()
        .enumerate()
        .map(|(index, app)| {
            let position = match layout {
                IconLayout::Grid { origin, cell } => grid_slot(index, origin, cell),
                IconLayout::Free => app
                    .pinned_position
                    .unwrap_or_else(|| grid_slot(index, DEFAULT_ORIGIN, DEFAULT_CELL)),
            };
            DesktopIcon {
                app_id: app.id.clone(),
                name: app.name.clone(),
                icon: app.icon.clone(),
                position,
            }
        })
        .collect()
}
