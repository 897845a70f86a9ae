use thiserror::Error;
use yew::NodeRef;

use crate::config::SCENE_TRANSITION;
use crate::utils::parallax::{scene_transform, PointerOffset, SceneControls};
use crate::utils::viewport::Layout;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SceneError {
    #[error("scene element is not mounted")]
    MissingElement,
    #[error("scene element rejected update: {0}")]
    Dom(String),
}

/// Whatever renders the decorative 3D scene.
pub trait Scene3DHost {
    fn set_transform(&self, transform: &str) -> Result<(), SceneError>;
    fn set_controls(&self, controls: SceneControls) -> Result<(), SceneError>;
}

/// Drives the `<spline-viewer>` custom element through its attributes.
pub struct ElementHost {
    element: web_sys::Element,
}

impl ElementHost {
    pub fn from_node_ref(node_ref: &NodeRef) -> Result<Self, SceneError> {
        node_ref
            .cast::<web_sys::Element>()
            .map(|element| Self { element })
            .ok_or(SceneError::MissingElement)
    }

    fn set(&self, name: &str, value: &str) -> Result<(), SceneError> {
        self.element
            .set_attribute(name, value)
            .map_err(|err| SceneError::Dom(format!("{}: {:?}", name, err)))
    }
}

impl Scene3DHost for ElementHost {
    fn set_transform(&self, transform: &str) -> Result<(), SceneError> {
        self.set(
            "style",
            &format!("transform: {}; transition: {};", transform, SCENE_TRANSITION),
        )
    }

    fn set_controls(&self, controls: SceneControls) -> Result<(), SceneError> {
        self.set("mouse-controls", bool_attr(controls.mouse))?;
        self.set("touch-controls", bool_attr(controls.touch))?;
        self.set("wheel-controls", bool_attr(controls.wheel))?;
        self.set("keyboard-controls", bool_attr(controls.keyboard))
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub fn apply_scene<H: Scene3DHost + ?Sized>(
    host: &H,
    layout: Layout,
    scroll_y: f64,
    offset: PointerOffset,
) -> Result<(), SceneError> {
    host.set_controls(SceneControls::for_layout(layout))?;
    host.set_transform(&scene_transform(layout, scroll_y, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct FakeHost {
        transforms: RefCell<Vec<String>>,
        controls: RefCell<Vec<SceneControls>>,
        broken: bool,
    }

    impl Scene3DHost for FakeHost {
        fn set_transform(&self, transform: &str) -> Result<(), SceneError> {
            self.transforms.borrow_mut().push(transform.to_string());
            Ok(())
        }

        fn set_controls(&self, controls: SceneControls) -> Result<(), SceneError> {
            if self.broken {
                return Err(SceneError::Dom("not upgraded".into()));
            }
            self.controls.borrow_mut().push(controls);
            Ok(())
        }
    }

    #[test]
    fn desktop_scene_gets_rotation_and_wheel() {
        let host = FakeHost::default();
        apply_scene(&host, Layout::Desktop, 0.0, PointerOffset { x: 10.0, y: 0.0 }).unwrap();
        assert_eq!(host.transforms.borrow().as_slice(), ["scale(1.2) rotateX(0deg) rotateY(1deg)"]);
        assert!(host.controls.borrow()[0].wheel);
    }

    #[test]
    fn mobile_scene_is_calmer() {
        let host = FakeHost::default();
        apply_scene(&host, Layout::Mobile, 0.0, PointerOffset { x: 3.0, y: 3.0 }).unwrap();
        assert_eq!(host.transforms.borrow().as_slice(), ["scale(1.1)"]);
        assert!(!host.controls.borrow()[0].wheel);
    }

    #[test]
    fn host_failure_surfaces_as_error() {
        let host = FakeHost {
            broken: true,
            ..FakeHost::default()
        };
        let err = apply_scene(&host, Layout::Desktop, 0.0, PointerOffset::default()).unwrap_err();
        assert!(matches!(err, SceneError::Dom(_)));
        assert!(host.transforms.borrow().is_empty());
    }
}
