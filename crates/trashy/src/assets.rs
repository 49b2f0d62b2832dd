//! Level asset catalog
//!
//! Registers every shader, texture, mesh, and material the level is authored
//! against and keeps the handles in one place for the scene builder.

use scrap_engine::assets::{
    FilterMode, MaterialHandle, MeshBuilderParam, MeshHandle, MeshResource, ResourceError,
    ResourceManager, ShaderHandle, ShaderProgram, ShaderStage, Texture, TextureHandle,
    TextureKind, WrapMode,
};
use scrap_engine::prelude::Vec3;

/// Handles to everything the level references
pub struct LevelAssets {
    /// G-buffer generation shader
    pub deferred_shader: ShaderHandle,
    /// Cel shading with displacement mapping
    pub cel_shader: ShaderHandle,
    /// Skybox shader
    pub skybox_shader: ShaderHandle,

    /// Ocean environment cubemap
    pub ocean_cubemap: TextureHandle,
    /// Toon shading ramp
    pub toon_lut: TextureHandle,
    /// Color grading lookup table
    pub color_lut: TextureHandle,
    /// Particle sprite atlas (2x2 grid)
    pub particle_atlas: TextureHandle,

    /// Platform geometry
    pub platform_mesh: MeshHandle,
    /// Player character geometry
    pub character_mesh: MeshHandle,
    /// Unit quad
    pub plane_mesh: MeshHandle,
    /// Generated unit sphere
    pub sphere_mesh: MeshHandle,
    /// Generated unit box
    pub box_mesh: MeshHandle,

    /// Platform surface
    pub platform_material: MaterialHandle,
    /// Lava floor
    pub lava_material: MaterialHandle,
    /// Player character
    pub character_material: MaterialHandle,
    /// Level backdrop
    pub background_material: MaterialHandle,
    /// Win screen overlay
    pub win_material: MaterialHandle,
    /// Lose screen overlay
    pub lose_material: MaterialHandle,
    /// Bouncy ball
    pub ball_material: MaterialHandle,
    /// Neutral grey fallback
    pub grey_material: MaterialHandle,
    /// Toon-shaded box
    pub toon_material: MaterialHandle,
}

fn shader(
    resources: &mut ResourceManager,
    name: &str,
    vertex: &str,
    fragment: &str,
) -> ShaderHandle {
    let mut program = ShaderProgram::from_stages([
        (ShaderStage::Vertex, vertex),
        (ShaderStage::Fragment, fragment),
    ]);
    program.set_debug_name(name);
    resources.create_shader(program)
}

/// Standard albedo + normal map material over the deferred shader
fn surface_material(
    resources: &mut ResourceManager,
    shader: ShaderHandle,
    name: &str,
    albedo: TextureHandle,
    normal: TextureHandle,
) -> Result<MaterialHandle, ResourceError> {
    let handle = resources.create_material(shader)?;
    let material = resources.material_mut(handle)?;
    material.set_name(name);
    material.set("u_Material.AlbedoMap", albedo);
    material.set("u_Material.NormalMap", normal);
    material.set("u_Material.Shininess", 0.1f32);
    Ok(handle)
}

impl LevelAssets {
    /// Register every level asset with the resource manager
    pub fn load(resources: &mut ResourceManager) -> Result<Self, ResourceError> {
        log::info!("registering level assets");

        let deferred_shader = shader(
            resources,
            "Deferred - GBuffer Generation",
            "shaders/vertex_shaders/basic.glsl",
            "shaders/fragment_shaders/deferred_forward.glsl",
        );
        let cel_shader = shader(
            resources,
            "Cel Shader",
            "shaders/vertex_shaders/displacement_mapping.glsl",
            "shaders/fragment_shaders/cel_shader.glsl",
        );
        let skybox_shader = shader(
            resources,
            "Skybox Shader",
            "shaders/vertex_shaders/skybox_vert.glsl",
            "shaders/fragment_shaders/skybox_frag.glsl",
        );

        let platform_tex = resources.load_texture("textures/Platform.png");
        let lava_tex = resources.load_texture("textures/beans.png");
        let character_tex = resources.load_texture("textures/trashyTEX.png");
        let background_tex = resources.load_texture("textures/backgroundexam.png");
        let win_tex = resources.load_texture("textures/winscreen.png");
        let lose_tex = resources.load_texture("textures/losescreen.png");
        let ball_tex = resources.load_texture("textures/ball.jpg");
        let box_tex = resources.load_texture("textures/box-diffuse.png");
        let grey_tex = resources.create_texture(Texture::solid_color([0.5, 0.5, 0.5]));

        // Flat normal map shared by every surface material
        let normal_map = resources.create_texture(Texture::solid_color([0.5, 0.5, 1.0]));

        let ocean_cubemap = resources
            .create_texture(Texture::from_file("cubemaps/ocean/ocean.jpg").with_kind(TextureKind::Cube));
        let toon_lut = resources.create_texture(
            Texture::from_file("luts/toon-1D.png")
                .with_kind(TextureKind::Lut1D)
                .with_filters(FilterMode::Nearest, FilterMode::Nearest)
                .with_wrap(WrapMode::ClampToEdge),
        );
        let color_lut = resources
            .create_texture(Texture::from_file("luts/cool.CUBE").with_kind(TextureKind::Lut3D));
        let particle_atlas = resources.create_texture(
            Texture::from_file("textures/particlesRR.png")
                .with_kind(TextureKind::Array { rows: 2, cols: 2 }),
        );

        let platform_mesh = resources.load_mesh("platform2.obj");
        let character_mesh = resources.load_mesh("trashy.obj");
        let plane_mesh = resources.load_mesh("plane.obj");

        let mut sphere = MeshResource::generated();
        sphere.add_param(MeshBuilderParam::IcoSphere {
            center: Vec3::zeros(),
            radii: Vec3::new(1.0, 1.0, 1.0),
            tessellation: 5,
        });
        let sphere_mesh = resources.create_mesh(sphere);

        let mut cube = MeshResource::generated();
        cube.add_param(MeshBuilderParam::Cube {
            half_extents: Vec3::new(0.5, 0.5, 0.5),
        });
        let box_mesh = resources.create_mesh(cube);

        let platform_material =
            surface_material(resources, deferred_shader, "Platform", platform_tex, normal_map)?;
        let lava_material =
            surface_material(resources, deferred_shader, "Lava", lava_tex, normal_map)?;
        let character_material = surface_material(
            resources,
            deferred_shader,
            "Main Character",
            character_tex,
            normal_map,
        )?;
        let background_material = surface_material(
            resources,
            deferred_shader,
            "Background",
            background_tex,
            normal_map,
        )?;
        let win_material =
            surface_material(resources, deferred_shader, "Win Screen", win_tex, normal_map)?;
        let lose_material =
            surface_material(resources, deferred_shader, "Lose Screen", lose_tex, normal_map)?;
        let ball_material =
            surface_material(resources, deferred_shader, "Ball", ball_tex, normal_map)?;
        let grey_material =
            surface_material(resources, deferred_shader, "Grey", grey_tex, normal_map)?;

        let toon_material = {
            let handle = resources.create_material(cel_shader)?;
            let material = resources.material_mut(handle)?;
            material.set_name("Toon Box");
            material.set("u_Material.AlbedoMap", box_tex);
            material.set("u_Material.NormalMap", normal_map);
            material.set("u_Material.Shininess", 0.1f32);
            material.set("s_ToonTerm", toon_lut);
            material.set("u_Material.Steps", 8);
            handle
        };

        log::debug!(
            "registered {} shaders, {} textures, {} meshes, {} materials",
            resources.shader_count(),
            resources.texture_count(),
            resources.mesh_count(),
            resources.material_count()
        );

        Ok(Self {
            deferred_shader,
            cel_shader,
            skybox_shader,
            ocean_cubemap,
            toon_lut,
            color_lut,
            particle_atlas,
            platform_mesh,
            character_mesh,
            plane_mesh,
            sphere_mesh,
            box_mesh,
            platform_material,
            lava_material,
            character_material,
            background_material,
            win_material,
            lose_material,
            ball_material,
            grey_material,
            toon_material,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrap_engine::assets::{MaterialParam, TextureSource};

    #[test]
    fn test_load_registers_full_catalog() {
        let mut resources = ResourceManager::new();
        let assets = LevelAssets::load(&mut resources).expect("load assets");

        assert_eq!(resources.shader_count(), 3);
        assert_eq!(resources.mesh_count(), 5);
        assert_eq!(resources.material_count(), 9);

        let toon = resources.material(assets.toon_material).expect("toon");
        assert_eq!(toon.shader(), assets.cel_shader);
        assert_eq!(toon.get("u_Material.Steps"), Some(&MaterialParam::Int(8)));
        assert!(matches!(
            toon.get("s_ToonTerm"),
            Some(MaterialParam::Texture(_))
        ));
    }

    #[test]
    fn test_surface_materials_share_flat_normal_map() {
        let mut resources = ResourceManager::new();
        let assets = LevelAssets::load(&mut resources).expect("load assets");

        let platform = resources
            .material(assets.platform_material)
            .expect("platform");
        let Some(&MaterialParam::Texture(normal)) = platform.get("u_Material.NormalMap") else {
            panic!("expected normal map binding");
        };
        let texture = resources.texture(normal).expect("normal map");
        assert_eq!(
            texture.source,
            TextureSource::Pixels {
                width: 1,
                height: 1,
                data: vec![0.5, 0.5, 1.0],
            }
        );
    }

    #[test]
    fn test_particle_atlas_is_a_grid() {
        let mut resources = ResourceManager::new();
        let assets = LevelAssets::load(&mut resources).expect("load assets");
        let atlas = resources.texture(assets.particle_atlas).expect("atlas");
        assert_eq!(atlas.kind, TextureKind::Array { rows: 2, cols: 2 });
    }
}
