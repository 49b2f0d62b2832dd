//! One-shot construction of the level
//!
//! Builds the entire hard-coded scene in a single pass: camera placement, the
//! light rig, the platform and lava floor, the player character with its
//! physics and control components, props, overlay screens, particle effects,
//! and the environment (skybox and color grading).

use scrap_engine::components::{
    Camera, EmitterKind, Light, ParticleEmitter, ParticleSystem, RenderComponent, ShadowCamera,
};
use scrap_engine::foundation::math::{utils, Quat, Transform, Vec3, Vec4};
use scrap_engine::physics::{
    Collider, ColliderShape, CollisionLayers, RigidBody, RigidBodyType, TriggerVolume,
};
use scrap_engine::prelude::{GameObjectKey, Scene, SceneError, Skybox};

use crate::assets::LevelAssets;
use crate::components::{JumpBehaviour, PlayerControl};
use crate::config::GameConfig;

fn placed(position: Vec3, euler_degrees: Vec3, scale: Vec3) -> Transform {
    let mut transform = Transform::identity();
    transform.position = position;
    transform.set_rotation_degrees(euler_degrees);
    transform.scale = scale;
    transform
}

/// Build the level into `scene` and return the player object's key
pub fn build_scene(
    scene: &mut Scene,
    assets: &LevelAssets,
    config: &GameConfig,
) -> Result<GameObjectKey, SceneError> {
    log::info!("building level");

    // Camera looks down the -Y axis at the play field
    let camera = scene.main_camera();
    if let Some(object) = scene.object_mut(camera) {
        object.transform.position = Vec3::new(0.0, -4.75, 4.0);
        object.transform.set_rotation_degrees(Vec3::new(90.0, 0.0, 0.0));
    }

    build_light_rig(scene)?;

    let platform = scene.create_game_object("platform1");
    if let Some(object) = scene.object_mut(platform) {
        object.transform = placed(
            Vec3::zeros(),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(10.84, 1.92, 1.0),
        );
        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.platform_mesh);
        renderer.set_material(assets.platform_material);

        let body = object.add(RigidBody::new(RigidBodyType::Static));
        body.add_collider(
            Collider::box_shape(Vec3::new(10.84, 1.92, 1.0))
                .with_layers(CollisionLayers::ENVIRONMENT, CollisionLayers::all()),
        );
    }

    // Lava floor: touching it loses the game
    let lava = scene.create_game_object("lava");
    if let Some(object) = scene.object_mut(lava) {
        object.transform = placed(
            Vec3::new(0.0, 0.0, -3.0),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(50.0, 50.0, 1.0),
        );
        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.plane_mesh);
        renderer.set_material(assets.lava_material);

        let volume = object.add(TriggerVolume::new());
        volume.add_collider(
            Collider::new(ColliderShape::Plane { normal: Vec3::z() })
                .with_layers(CollisionLayers::TRIGGER, CollisionLayers::PLAYER),
        );
    }

    let player = build_player(scene, assets, config, camera)?;

    let ball = scene.create_game_object("ball");
    if let Some(object) = scene.object_mut(ball) {
        object.transform = placed(
            Vec3::new(1.76, -0.5, 2.5),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.sphere_mesh);
        renderer.set_material(assets.ball_material);

        let volume = object.add(TriggerVolume::new());
        volume.add_collider(
            Collider::sphere(1.0).with_layers(CollisionLayers::PICKUP, CollisionLayers::PLAYER),
        );
    }

    let toon_box = scene.create_game_object("toon box");
    if let Some(object) = scene.object_mut(toon_box) {
        object.transform = placed(
            Vec3::new(2.5, 0.5, 1.2),
            Vec3::new(90.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.box_mesh);
        renderer.set_material(assets.toon_material);

        let body = object.add(RigidBody::new(RigidBodyType::Static));
        body.add_collider(
            Collider::box_shape(Vec3::new(0.5, 0.5, 0.5))
                .with_layers(CollisionLayers::ENVIRONMENT, CollisionLayers::all()),
        );
    }

    let background = scene.create_game_object("background");
    if let Some(object) = scene.object_mut(background) {
        object.transform = placed(
            Vec3::new(0.33, 3.54, 0.0),
            Vec3::new(-180.0, 0.0, 0.0),
            Vec3::new(16.68, 15.33, 16.05),
        );
        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.plane_mesh);
        renderer.set_material(assets.background_material);
    }

    // Outcome overlays start below the camera frustum; gameplay code slides
    // the relevant one into view when the round ends.
    let overlay_transform = placed(
        Vec3::new(0.0, -2.73, -4.0),
        Vec3::new(-180.0, 0.0, 0.0),
        Vec3::new(4.49, 1.0, 3.44),
    );
    for (name, material) in [
        ("win screen", assets.win_material),
        ("lose screen", assets.lose_material),
    ] {
        let screen = scene.create_game_object(name);
        if let Some(object) = scene.object_mut(screen) {
            object.transform = overlay_transform.clone();
            let renderer = object.add(RenderComponent::new());
            renderer.set_mesh(assets.plane_mesh);
            renderer.set_material(material);
        }
    }

    let shadow_light = scene.create_game_object("Shadow Light");
    if let Some(object) = scene.object_mut(shadow_light) {
        object.transform = placed(
            Vec3::new(-35.4, -20.47, 13.02),
            Vec3::new(95.0, 55.0, -89.0),
            Vec3::new(1.0, 1.0, 1.0),
        );
        let shadow = object.add(ShadowCamera::new());
        shadow.set_projection(utils::perspective(utils::deg_to_rad(120.0), 1.0, 0.1, 100.0));
        object.add(Camera::new(utils::deg_to_rad(120.0), 0.1, 100.0));
    }

    let embers = scene.create_game_object("Particles");
    if let Some(object) = scene.object_mut(embers) {
        object.transform.position = Vec3::new(2.75, 3.31, 4.85);
        let system = object.add(ParticleSystem::new());
        system.atlas = Some(assets.particle_atlas);
        system.gravity = Vec3::new(-3.8, 0.0, -2.31);
        system.add_emitter(ParticleEmitter {
            kind: EmitterKind::Sphere {
                radius: 1.0,
                velocity: 1.0,
                spawn_interval: 0.05,
                life_range: [2.0, 4.0],
                size_range: [0.5, 1.0],
            },
            tex_id: 0,
            position: Vec3::zeros(),
            color: Vec4::new(1.0, 0.0, 0.0, 1.0),
            lifetime: 0.0,
        });
    }

    // Cubemap is authored Y-up; rotate into the scene's Z-up convention
    scene.set_skybox(Skybox {
        texture: assets.ocean_cubemap,
        shader: assets.skybox_shader,
        rotation: Quat::from_euler_angles(utils::deg_to_rad(90.0), 0.0, 0.0).to_homogeneous(),
    });
    scene.set_color_lut(assets.color_lut);

    log::info!("level built: {} objects", scene.len());
    Ok(player)
}

fn build_light_rig(scene: &mut Scene) -> Result<(), SceneError> {
    let rig = scene.create_game_object("Lights");

    let lights = [
        (Vec3::new(-5.5, -1.58, 4.1), Vec3::new(1.0, 1.0, 1.0), 5.0),
        (Vec3::new(0.14, -3.32, 3.26), Vec3::new(0.902, 0.02, 0.02), 10.0),
        (Vec3::new(5.93, -1.86, 4.76), Vec3::new(1.0, 1.0, 1.0), 5.0),
    ];
    for (index, (position, color, radius)) in lights.into_iter().enumerate() {
        let key = scene.create_game_object(format!("Light {}", index + 1));
        if let Some(object) = scene.object_mut(key) {
            object.transform.position = position;
            let light = object.add(Light::new());
            light.set_color(color);
            light.set_radius(radius);
        }
        scene.add_child(rig, key)?;
    }
    Ok(())
}

fn build_player(
    scene: &mut Scene,
    assets: &LevelAssets,
    config: &GameConfig,
    camera: GameObjectKey,
) -> Result<GameObjectKey, SceneError> {
    let player = scene.create_game_object("main char");
    if let Some(object) = scene.object_mut(player) {
        object.transform = placed(
            Vec3::new(-5.43, -0.23, 2.5),
            Vec3::new(90.0, 0.0, -90.0),
            Vec3::new(0.7, 0.7, 0.7),
        );

        let renderer = object.add(RenderComponent::new());
        renderer.set_mesh(assets.character_mesh);
        renderer.set_material(assets.character_material);

        // The body must update before the control components so impulses
        // applied this frame move the character on the next one.
        let body = object.add(RigidBody::new(RigidBodyType::Dynamic));
        body.add_collider(
            Collider::box_shape(Vec3::new(0.6, 0.99, 0.32))
                .with_position(Vec3::new(0.0, 0.95, 0.0))
                .with_layers(
                    CollisionLayers::PLAYER,
                    CollisionLayers::ENVIRONMENT | CollisionLayers::TRIGGER | CollisionLayers::PICKUP,
                ),
        );

        object.add(JumpBehaviour::from_config(config));
        let control = object.add(PlayerControl::from_config(config));
        control.set_camera(camera);

        object.add(TriggerVolume::new());
    }

    // Dust kicked up at the character's feet
    let dust = scene.create_game_object("Particles");
    if let Some(object) = scene.object_mut(dust) {
        let system = object.add(ParticleSystem::new());
        system.atlas = Some(assets.particle_atlas);
        system.add_emitter(ParticleEmitter {
            kind: EmitterKind::Sphere {
                radius: 0.5,
                velocity: 0.5,
                spawn_interval: 0.1,
                life_range: [1.0, 1.5],
                size_range: [0.25, 0.5],
            },
            tex_id: 2,
            position: Vec3::zeros(),
            color: Vec4::new(0.966, 0.878, 0.767, 1.0),
            lifetime: 0.02,
        });
    }
    scene.add_child(player, dust)?;

    Ok(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use scrap_engine::prelude::{GameObject, InputState, KeyCode, ResourceManager};

    fn built() -> (Scene, GameObjectKey) {
        let mut resources = ResourceManager::new();
        let assets = LevelAssets::load(&mut resources).expect("load assets");
        let mut scene = Scene::new();
        let player =
            build_scene(&mut scene, &assets, &GameConfig::default()).expect("build scene");
        (scene, player)
    }

    #[test]
    fn test_player_carries_control_stack() {
        let (scene, player) = built();
        let object = scene.object(player).expect("player");

        assert_eq!(object.name(), "main char");
        assert!(object.has::<RenderComponent>());
        assert!(object.has::<RigidBody>());
        assert!(object.has::<PlayerControl>());
        assert!(object.has::<JumpBehaviour>());
        assert!(object.has::<TriggerVolume>());

        let body = object.get::<RigidBody>().expect("rigid body");
        assert_eq!(body.body_type(), RigidBodyType::Dynamic);
        assert_eq!(body.colliders().len(), 1);
    }

    #[test]
    fn test_camera_is_placed_behind_play_field() {
        let (scene, _) = built();
        let camera = scene.object(scene.main_camera()).expect("camera");
        assert_eq!(camera.transform.position, Vec3::new(0.0, -4.75, 4.0));
    }

    #[test]
    fn test_light_rig_has_three_children() {
        let (scene, _) = built();
        let rig = scene.find_by_name("Lights").expect("light rig");
        let children = scene.object(rig).map(GameObject::children).expect("rig");
        assert_eq!(children.len(), 3);

        let lava_light = scene
            .object(children[1])
            .and_then(|o| o.get::<Light>())
            .expect("lava light");
        assert_relative_eq!(lava_light.radius(), 10.0);
        assert_relative_eq!(lava_light.color().x, 0.902);
    }

    #[test]
    fn test_dust_follows_the_player() {
        let (scene, player) = built();
        let dust = scene
            .object(player)
            .map(GameObject::children)
            .and_then(<[GameObjectKey]>::first)
            .copied()
            .expect("dust child");

        let world = scene.world_transform(dust).expect("world transform");
        assert_relative_eq!(world.position.x, -5.43);
    }

    #[test]
    fn test_environment_is_wired() {
        let (scene, _) = built();
        assert!(scene.skybox().is_some());
        assert!(scene.color_lut().is_some());
    }

    #[test]
    fn test_built_player_responds_to_input() {
        let (mut scene, player) = built();
        let mut input = InputState::new();
        input.handle_key(KeyCode::A, true);

        // Impulse this frame, displacement the next
        scene.update(&input, 0.1);
        scene.update(&input, 0.1);

        let object = scene.object(player).expect("player");
        assert!(object.transform.position.x > -5.43);
    }
}
