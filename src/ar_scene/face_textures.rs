use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

use crate::ar_scene::types::DieFace;

pub const FACE_TEXTURE_SIZE: u32 = 64;

const FACE_BACKGROUND: [u8; 4] = [245, 240, 228, 255];
const PIP_COLOR: [u8; 4] = [30, 30, 30, 255];
const PIP_RADIUS: f32 = 0.09;

/// Pip centers in unit face coordinates for a pip count of 1..=6.
pub fn pip_layout(pips: u32) -> Vec<Vec2> {
    let (lo, mid, hi) = (0.25, 0.5, 0.75);
    match pips {
        1 => vec![Vec2::new(mid, mid)],
        2 => vec![Vec2::new(lo, lo), Vec2::new(hi, hi)],
        3 => vec![Vec2::new(lo, lo), Vec2::new(mid, mid), Vec2::new(hi, hi)],
        4 => vec![
            Vec2::new(lo, lo),
            Vec2::new(hi, lo),
            Vec2::new(lo, hi),
            Vec2::new(hi, hi),
        ],
        5 => vec![
            Vec2::new(lo, lo),
            Vec2::new(hi, lo),
            Vec2::new(mid, mid),
            Vec2::new(lo, hi),
            Vec2::new(hi, hi),
        ],
        6 => vec![
            Vec2::new(lo, lo),
            Vec2::new(hi, lo),
            Vec2::new(lo, mid),
            Vec2::new(hi, mid),
            Vec2::new(lo, hi),
            Vec2::new(hi, hi),
        ],
        _ => Vec::new(),
    }
}

/// RGBA8 pixels for a square face with `pips` dots.
pub fn face_pixels(pips: u32, size: u32) -> Vec<u8> {
    let centers = pip_layout(pips);
    let mut rgba = Vec::with_capacity((size * size * 4) as usize);

    for y in 0..size {
        for x in 0..size {
            let p = Vec2::new(
                (x as f32 + 0.5) / size as f32,
                (y as f32 + 0.5) / size as f32,
            );
            let on_pip = centers.iter().any(|c| c.distance(p) <= PIP_RADIUS);
            rgba.extend_from_slice(if on_pip { &PIP_COLOR } else { &FACE_BACKGROUND });
        }
    }

    rgba
}

pub fn generate_face_image(face: DieFace) -> Image {
    let size = Extent3d {
        width: FACE_TEXTURE_SIZE,
        height: FACE_TEXTURE_SIZE,
        depth_or_array_layers: 1,
    };

    Image::new(
        size,
        TextureDimension::D2,
        face_pixels(face.pips(), FACE_TEXTURE_SIZE),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}
