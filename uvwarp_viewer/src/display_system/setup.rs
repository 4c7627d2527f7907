use super::material::{NoiseWarpMaterial, NoiseWarpOptions};
use super::WarpQuad;
use bevy::{
    asset::RenderAssetUsages,
    prelude::*,
    render::render_resource::{Extent3d, TextureDimension, TextureFormat},
};

const QUAD_SIZE: f32 = 640.0;
const CHECKER_TEXTURE_SIZE: u32 = 512;
const CHECKER_CELLS: u32 = 8;

pub fn setup_display(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut images: ResMut<Assets<Image>>,
    mut warp_materials: ResMut<Assets<NoiseWarpMaterial>>,
) {
    spawn_warp_quad(&mut commands, &mut meshes, &mut images, &mut warp_materials);
    spawn_camera(&mut commands);
}

fn spawn_warp_quad(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    images: &mut ResMut<Assets<Image>>,
    warp_materials: &mut ResMut<Assets<NoiseWarpMaterial>>,
) {
    let map = images.add(checker_image(CHECKER_TEXTURE_SIZE, CHECKER_CELLS));
    let material = NoiseWarpMaterial::new(NoiseWarpOptions {
        map: Some(map),
        ..Default::default()
    });

    commands.spawn((
        WarpQuad,
        Mesh2d(meshes.add(Rectangle::new(QUAD_SIZE, QUAD_SIZE))),
        MeshMaterial2d(warp_materials.add(material)),
        Transform::from_xyz(0.0, 0.0, 0.0),
        Visibility::Visible,
    ));
}

fn spawn_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.05, 0.05, 0.07)),
            ..default()
        },
    ));
}

/// A plain checkerboard so the warp has visible structure to push around.
fn checker_image(size: u32, cells: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let on = (x * cells / size + y * cells / size) % 2 == 0;
            let v = if on { 230 } else { 25 };
            data.extend_from_slice(&[v, v, v, 255]);
        }
    }
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}
