//! Game object: identity, transform, and an open set of components

use crate::foundation::math::Transform;
use crate::input::InputState;

use super::component::{Component, UpdateContext};

slotmap::new_key_type! {
    /// Stable key for a game object in a [`Scene`](super::Scene)
    pub struct GameObjectKey;
}

/// A positioned entity in the scene graph that owns zero or more components
///
/// Objects form a hierarchy: the parent link is a non-owning back-reference,
/// child keys are owning (destroying an object destroys its children).
pub struct GameObject {
    name: String,

    /// Local transform relative to the parent
    pub transform: Transform,

    // Slots are only vacated while their own component is being updated.
    components: Vec<Option<Box<dyn Component>>>,

    pub(crate) parent: Option<GameObjectKey>,
    pub(crate) children: Vec<GameObjectKey>,
}

impl GameObject {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::identity(),
            components: Vec::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Object name as given at creation
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Key of the parent object, if any
    pub fn parent(&self) -> Option<GameObjectKey> {
        self.parent
    }

    /// Keys of the owned child objects
    pub fn children(&self) -> &[GameObjectKey] {
        &self.children
    }

    /// Attach a component and return a mutable reference for configuration
    pub fn add<T: Component>(&mut self, component: T) -> &mut T {
        log::trace!("{}: attaching {}", self.name, component.type_name());
        self.components.push(Some(Box::new(component)));
        let index = self.components.len() - 1;
        self.components[index]
            .as_deref_mut()
            .and_then(|boxed| boxed.as_any_mut().downcast_mut())
            .expect("freshly attached component slot")
    }

    /// Query for a capability of type `T`
    pub fn get<T: Component>(&self) -> Option<&T> {
        self.components
            .iter()
            .filter_map(|slot| slot.as_deref())
            .find_map(|component| component.as_any().downcast_ref::<T>())
    }

    /// Query for a mutable capability of type `T`
    pub fn get_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .iter_mut()
            .filter_map(|slot| slot.as_deref_mut())
            .find_map(|component| component.as_any_mut().downcast_mut::<T>())
    }

    /// Whether the object carries a capability of type `T`
    pub fn has<T: Component>(&self) -> bool {
        self.get::<T>().is_some()
    }

    /// Number of attached components
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Update every attached component once, in attach order
    pub(crate) fn update(&mut self, input: &InputState, delta_time: f32) {
        for index in 0..self.components.len() {
            let Some(mut component) = self.components[index].take() else {
                continue;
            };
            {
                let mut ctx =
                    UpdateContext::new(&mut self.transform, input, &mut self.components);
                component.update(&mut ctx, delta_time);
            }
            self.components[index] = Some(component);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use std::any::Any;

    struct Tag(u32);

    impl Component for Tag {
        fn type_name(&self) -> &'static str {
            "Tag"
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct Mover {
        step: Vec3,
        saw_tag: bool,
    }

    impl Component for Mover {
        fn type_name(&self) -> &'static str {
            "Mover"
        }
        fn update(&mut self, ctx: &mut UpdateContext<'_>, delta_time: f32) {
            self.saw_tag = ctx.has_sibling::<Tag>();
            ctx.transform.position += self.step * delta_time;
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    #[test]
    fn test_add_and_query() {
        let mut object = GameObject::new("thing");
        object.add(Tag(7));

        assert!(object.has::<Tag>());
        assert!(!object.has::<Mover>());
        assert_eq!(object.get::<Tag>().map(|t| t.0), Some(7));
    }

    #[test]
    fn test_add_returns_configurable_reference() {
        let mut object = GameObject::new("thing");
        let tag = object.add(Tag(0));
        tag.0 = 42;
        assert_eq!(object.get::<Tag>().map(|t| t.0), Some(42));
    }

    #[test]
    fn test_update_moves_transform() {
        let mut object = GameObject::new("mover");
        object.add(Mover {
            step: Vec3::new(2.0, 0.0, 0.0),
            saw_tag: false,
        });

        object.update(&InputState::new(), 0.5);
        assert_eq!(object.transform.position, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sibling_query_during_update() {
        let mut object = GameObject::new("mover");
        object.add(Tag(1));
        object.add(Mover {
            step: Vec3::zeros(),
            saw_tag: false,
        });

        object.update(&InputState::new(), 0.1);
        assert!(object.get::<Mover>().is_some_and(|m| m.saw_tag));
    }
}
