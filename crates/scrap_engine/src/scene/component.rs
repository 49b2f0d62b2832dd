//! Component trait and per-frame update context
//!
//! Components are polymorphic capabilities attached to exactly one
//! [`GameObject`](super::GameObject). Once per frame each component receives
//! an update call with the elapsed time and a context that exposes the owning
//! object's transform, the input snapshot, and capability queries against the
//! object's other components.

use std::any::Any;

use crate::foundation::math::Transform;
use crate::input::InputState;

/// A behavior or data block attached to a game object
///
/// Implementors get a per-frame [`update`](Component::update) call and may
/// expose serialization to a structured document via
/// [`to_ron`](Component::to_ron).
pub trait Component: Any {
    /// Stable name for logging and diagnostics
    fn type_name(&self) -> &'static str;

    /// Per-frame update with elapsed time in seconds
    fn update(&mut self, _ctx: &mut UpdateContext<'_>, _delta_time: f32) {}

    /// Serialize this component to a RON document, if it supports it
    fn to_ron(&self) -> Option<String> {
        None
    }

    /// Downcast support for capability queries
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support for capability queries
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Context handed to a component during its update call
///
/// The updating component's own slot is vacated for the duration of the call,
/// so sibling queries see every component on the object except the one being
/// updated.
pub struct UpdateContext<'a> {
    /// The owning object's transform
    pub transform: &'a mut Transform,

    /// The input snapshot for this frame
    pub input: &'a InputState,

    siblings: &'a mut [Option<Box<dyn Component>>],
}

impl<'a> UpdateContext<'a> {
    pub(crate) fn new(
        transform: &'a mut Transform,
        input: &'a InputState,
        siblings: &'a mut [Option<Box<dyn Component>>],
    ) -> Self {
        Self {
            transform,
            input,
            siblings,
        }
    }

    /// Query for a sibling capability of type `T`
    pub fn sibling<T: Component>(&self) -> Option<&T> {
        self.siblings
            .iter()
            .filter_map(|slot| slot.as_deref())
            .find_map(|component| component.as_any().downcast_ref::<T>())
    }

    /// Query for a mutable sibling capability of type `T`
    pub fn sibling_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.siblings
            .iter_mut()
            .filter_map(|slot| slot.as_deref_mut())
            .find_map(|component| component.as_any_mut().downcast_mut::<T>())
    }

    /// Whether the owning object carries a capability of type `T`
    pub fn has_sibling<T: Component>(&self) -> bool {
        self.sibling::<T>().is_some()
    }
}
