use crate::utils::viewport::Layout;

/// Multiplier applied to a normalised mouse position.
pub const MOUSE_SCALE: f64 = 20.0;
/// Touch tracking uses half the mouse intensity.
pub const TOUCH_SCALE: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    /// `(client / viewport - 0.5) * scale` on both axes. A degenerate
    /// viewport yields the centred offset.
    pub fn from_position(client_x: f64, client_y: f64, width: f64, height: f64, scale: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::default();
        }
        Self {
            x: (client_x / width - 0.5) * scale,
            y: (client_y / height - 0.5) * scale,
        }
    }
}

/// Capability flags handed to the embedded scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SceneControls {
    pub mouse: bool,
    pub touch: bool,
    pub wheel: bool,
    pub keyboard: bool,
}

impl SceneControls {
    pub fn for_layout(layout: Layout) -> Self {
        Self {
            mouse: true,
            touch: true,
            // wheel zoom fights with page scrolling on touch screens
            wheel: !layout.is_mobile(),
            keyboard: false,
        }
    }
}

pub fn scene_transform(layout: Layout, scroll_y: f64, offset: PointerOffset) -> String {
    match layout {
        Layout::Mobile => format!("scale({})", 1.1 + scroll_y * 0.0002),
        Layout::Desktop => format!(
            "scale({}) rotateX({}deg) rotateY({}deg)",
            1.2 + scroll_y * 0.0005,
            offset.y * 0.1,
            offset.x * 0.1
        ),
    }
}
