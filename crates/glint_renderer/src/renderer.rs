//! Frame driver: maps every pixel to a primary ray and fills a framebuffer.

use glint_core::{RenderSettings, Scene};
use glint_math::{Interval, Vec3};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::tracer::trace_ray;

/// Color type alias (RGB on a 0-255 scale until clamped for output)
pub type Color = Vec3;

/// Clamp a color to 8-bit RGB channels.
///
/// Each channel clamps independently into [0, 255]; lighting can push
/// channels well past 255 and blending can sum slightly below 0.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    [
        color.x.clamp(0.0, 255.0) as u8,
        color.y.clamp(0.0, 255.0) as u8,
        color.z.clamp(0.0, 255.0) as u8,
    ]
}

/// Render a single pixel at centered device coordinates `(x, y)`.
///
/// Primary rays start at `t_min = 1` (the viewport plane in ray
/// parametrization), so geometry between the camera and the viewport is
/// not rendered.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    settings: &RenderSettings,
    x: i32,
    y: i32,
) -> Color {
    let ray = camera.primary_ray(x as f32, y as f32, settings);
    trace_ray(
        scene,
        &ray,
        Interval::new(1.0, f32::INFINITY),
        settings.max_depth,
    )
}

/// Simple image buffer for storing render output.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Convert to clamped RGB bytes (for display or saving).
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity((self.width * self.height * 3) as usize);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the whole frame, scanlines in parallel.
///
/// Buffer row `r` covers device coordinates `y = height/2 - 1 - r` (top
/// row first, device y pointing up) and column `c` covers
/// `x = c - width/2`. Each rayon worker writes one disjoint row slice of
/// the buffer; the scene and camera are only read.
pub fn render(scene: &Scene, camera: &Camera, settings: &RenderSettings) -> ImageBuffer {
    let width = settings.canvas_width;
    let height = settings.canvas_height;
    let mut image = ImageBuffer::new(width, height);

    let half_width = width as i32 / 2;
    let half_height = height as i32 / 2;

    image
        .pixels
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(row, scanline)| {
            let y = half_height - 1 - row as i32;
            for (col, pixel) in scanline.iter_mut().enumerate() {
                let x = col as i32 - half_width;
                *pixel = render_pixel(scene, camera, settings, x, y);
            }
        });

    log::debug!("traced {}x{} frame", width, height);
    image
}
