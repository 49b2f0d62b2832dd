//! Scene: owning arena of game objects with hierarchy and frame stepping

use slotmap::SlotMap;
use thiserror::Error;

use crate::assets::{ShaderHandle, TextureHandle};
use crate::components::Camera;
use crate::foundation::math::{Mat4, Transform};
use crate::input::InputState;

use super::game_object::{GameObject, GameObjectKey};

/// Scene-level errors
#[derive(Debug, Error)]
pub enum SceneError {
    /// A key did not resolve to a live game object
    #[error("game object not found")]
    ObjectNotFound,

    /// Re-parenting would create a cycle
    #[error("cannot parent an object to itself or one of its descendants")]
    CyclicHierarchy,
}

/// Skybox descriptor for the scene environment
#[derive(Debug, Clone)]
pub struct Skybox {
    /// Cubemap texture
    pub texture: TextureHandle,

    /// Shader used to draw the skybox
    pub shader: ShaderHandle,

    /// Orientation applied to the cubemap (e.g. Y-up to Z-up conversion)
    pub rotation: Mat4,
}

/// Container for all game objects of a level
///
/// Objects live in a slotmap arena; update order is creation order and is
/// single-threaded and synchronous.
pub struct Scene {
    objects: SlotMap<GameObjectKey, GameObject>,
    order: Vec<GameObjectKey>,
    main_camera: GameObjectKey,
    skybox: Option<Skybox>,
    color_lut: Option<TextureHandle>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with a main camera object
    pub fn new() -> Self {
        let mut objects = SlotMap::with_key();
        let mut camera_object = GameObject::new("Main Camera");
        camera_object.add(Camera::default());
        let main_camera = objects.insert(camera_object);

        Self {
            objects,
            order: vec![main_camera],
            main_camera,
            skybox: None,
            color_lut: None,
        }
    }

    /// Create a new empty game object and return its key
    pub fn create_game_object(&mut self, name: impl Into<String>) -> GameObjectKey {
        let name = name.into();
        log::debug!("creating game object '{}'", name);
        let key = self.objects.insert(GameObject::new(name));
        self.order.push(key);
        key
    }

    /// Destroy a game object and all of its children
    pub fn destroy_game_object(&mut self, key: GameObjectKey) {
        let Some(object) = self.objects.remove(key) else {
            return;
        };
        log::debug!("destroying game object '{}'", object.name());

        if let Some(parent) = object.parent.and_then(|p| self.objects.get_mut(p)) {
            parent.children.retain(|&child| child != key);
        }
        for child in object.children {
            // Children are owned: they go down with the parent.
            if let Some(child_object) = self.objects.get_mut(child) {
                child_object.parent = None;
            }
            self.destroy_game_object(child);
        }
        self.order.retain(|&k| k != key);
    }

    /// Borrow a game object
    pub fn object(&self, key: GameObjectKey) -> Option<&GameObject> {
        self.objects.get(key)
    }

    /// Mutably borrow a game object
    pub fn object_mut(&mut self, key: GameObjectKey) -> Option<&mut GameObject> {
        self.objects.get_mut(key)
    }

    /// Find the first object with the given name, in creation order
    pub fn find_by_name(&self, name: &str) -> Option<GameObjectKey> {
        self.order
            .iter()
            .copied()
            .find(|&key| self.objects.get(key).is_some_and(|o| o.name() == name))
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    pub fn add_child(
        &mut self,
        parent: GameObjectKey,
        child: GameObjectKey,
    ) -> Result<(), SceneError> {
        if !self.objects.contains_key(parent) || !self.objects.contains_key(child) {
            return Err(SceneError::ObjectNotFound);
        }
        if parent == child || self.is_ancestor(child, parent) {
            return Err(SceneError::CyclicHierarchy);
        }

        if let Some(old_parent) = self
            .objects
            .get(child)
            .and_then(|c| c.parent)
            .and_then(|p| self.objects.get_mut(p))
        {
            old_parent.children.retain(|&k| k != child);
        }
        if let Some(child_object) = self.objects.get_mut(child) {
            child_object.parent = Some(parent);
        }
        if let Some(parent_object) = self.objects.get_mut(parent) {
            parent_object.children.push(child);
        }
        Ok(())
    }

    /// Whether `ancestor` appears in the parent chain of `key`
    fn is_ancestor(&self, ancestor: GameObjectKey, key: GameObjectKey) -> bool {
        let mut current = self.objects.get(key).and_then(|o| o.parent);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.objects.get(parent).and_then(|o| o.parent);
        }
        false
    }

    /// Compute the world transform of an object by walking its parent chain
    pub fn world_transform(&self, key: GameObjectKey) -> Option<Transform> {
        let object = self.objects.get(key)?;
        let mut world = object.transform.clone();
        let mut current = object.parent;
        while let Some(parent_key) = current {
            let parent = self.objects.get(parent_key)?;
            world = parent.transform.combine(&world);
            current = parent.parent;
        }
        Some(world)
    }

    /// Key of the scene's main camera object
    pub fn main_camera(&self) -> GameObjectKey {
        self.main_camera
    }

    /// Set the skybox descriptor
    pub fn set_skybox(&mut self, skybox: Skybox) {
        self.skybox = Some(skybox);
    }

    /// Current skybox descriptor
    pub fn skybox(&self) -> Option<&Skybox> {
        self.skybox.as_ref()
    }

    /// Set the color-correction lookup table
    pub fn set_color_lut(&mut self, lut: TextureHandle) {
        self.color_lut = Some(lut);
    }

    /// Current color-correction lookup table
    pub fn color_lut(&self) -> Option<TextureHandle> {
        self.color_lut
    }

    /// Number of live game objects (including the main camera)
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over live objects in creation order
    pub fn iter(&self) -> impl Iterator<Item = (GameObjectKey, &GameObject)> {
        self.order
            .iter()
            .filter_map(|&key| self.objects.get(key).map(|object| (key, object)))
    }

    /// Step every object's components once, in creation order
    pub fn update(&mut self, input: &InputState, delta_time: f32) {
        for index in 0..self.order.len() {
            let key = self.order[index];
            if let Some(object) = self.objects.get_mut(key) {
                object.update(input, delta_time);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;

    #[test]
    fn test_new_scene_has_main_camera() {
        let scene = Scene::new();
        assert_eq!(scene.len(), 1);
        let camera = scene.object(scene.main_camera()).expect("camera object");
        assert_eq!(camera.name(), "Main Camera");
        assert!(camera.has::<Camera>());
    }

    #[test]
    fn test_find_by_name() {
        let mut scene = Scene::new();
        let platform = scene.create_game_object("platform1");
        assert_eq!(scene.find_by_name("platform1"), Some(platform));
        assert_eq!(scene.find_by_name("missing"), None);
    }

    #[test]
    fn test_hierarchy_links() {
        let mut scene = Scene::new();
        let parent = scene.create_game_object("Lights");
        let child = scene.create_game_object("Light");

        scene.add_child(parent, child).expect("add child");
        assert_eq!(scene.object(child).and_then(GameObject::parent), Some(parent));
        assert_eq!(scene.object(parent).map(|o| o.children().len()), Some(1));
    }

    #[test]
    fn test_add_child_rejects_cycles() {
        let mut scene = Scene::new();
        let a = scene.create_game_object("a");
        let b = scene.create_game_object("b");
        scene.add_child(a, b).expect("add child");

        assert!(matches!(
            scene.add_child(b, a),
            Err(SceneError::CyclicHierarchy)
        ));
        assert!(matches!(
            scene.add_child(a, a),
            Err(SceneError::CyclicHierarchy)
        ));
    }

    #[test]
    fn test_destroy_removes_children() {
        let mut scene = Scene::new();
        let parent = scene.create_game_object("parent");
        let child = scene.create_game_object("child");
        scene.add_child(parent, child).expect("add child");

        scene.destroy_game_object(parent);
        assert!(scene.object(parent).is_none());
        assert!(scene.object(child).is_none());
    }

    #[test]
    fn test_world_transform_composes_parents() {
        let mut scene = Scene::new();
        let parent = scene.create_game_object("parent");
        let child = scene.create_game_object("child");
        scene.add_child(parent, child).expect("add child");

        if let Some(object) = scene.object_mut(parent) {
            object.transform.position = Vec3::new(1.0, 0.0, 0.0);
        }
        if let Some(object) = scene.object_mut(child) {
            object.transform.position = Vec3::new(0.0, 2.0, 0.0);
        }

        let world = scene.world_transform(child).expect("world transform");
        assert_eq!(world.position, Vec3::new(1.0, 2.0, 0.0));
    }
}
