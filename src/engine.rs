//! Core rendering engine.
//!
//! The [`Engine`] struct is the session object: it owns the mesh, the camera,
//! the mesh transform and the sun, and turns one frame of input into a sorted
//! list of screen-space triangles.

use log::info;

use crate::camera::{CameraController, CoordinateSystem};
use crate::colors::Color;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::input::InputState;
use crate::light::DayCycle;
use crate::math::vec3::Vec3;
use crate::mesh::Mesh;
use crate::pipeline::Pipeline;
use crate::projection::{Projection, Viewport};
use crate::render::{draw_triangles, FrameBuffer, Rasterizer, RenderMode};
use crate::transform::Transform;
use crate::triangle::Triangle;

pub struct Engine {
    mesh: Mesh,
    camera: CoordinateSystem,
    controller: CameraController,
    transform: Transform,
    light: DayCycle,
    pipeline: Pipeline,
    triangles_to_render: Vec<Triangle>,
}

impl Engine {
    /// Starts a session for `mesh` on a `width` x `height` viewport.
    ///
    /// Fails with [`Error::EmptyMesh`] when there is nothing to draw.
    pub fn new(config: &Config, mesh: Mesh, width: u32, height: u32) -> Result<Self> {
        if mesh.is_empty() {
            return Err(Error::EmptyMesh);
        }

        let viewport = Viewport::new(width, height);
        let cam = &config.camera;
        let projection = Projection::new(cam.fov_deg, viewport.aspect_ratio(), cam.near, cam.far);

        let camera = CoordinateSystem::look_at(cam.position.into(), cam.target.into(), cam.up.into());
        let mut transform = Transform::new();
        transform
            .set_translation(config.mesh.translation.into())
            .set_spin(config.mesh.spin.into());

        info!(
            "engine ready: {} triangles, {}x{} viewport, fov {}",
            mesh.len(),
            width,
            height,
            cam.fov_deg
        );

        Ok(Self {
            mesh,
            camera,
            controller: CameraController::new(cam.move_speed, cam.turn_speed),
            transform,
            light: config.lighting.day_cycle(),
            pipeline: Pipeline::new(projection, viewport, config.terrain.palette()),
            triangles_to_render: Vec::new(),
        })
    }

    /// Advances the session by `delta_time` seconds and rebuilds the frame.
    ///
    /// Returns the visible triangles in screen space, sorted back to front.
    pub fn update(&mut self, input: &InputState, delta_time: f32) -> &[Triangle] {
        if input.is_moving() || input.print_camera {
            self.controller.update(&mut self.camera, input, delta_time);
        }
        self.transform.advance(delta_time);
        self.light.advance(delta_time);

        self.triangles_to_render = self.pipeline.process(
            &self.mesh,
            &self.transform.to_matrix(),
            &self.camera,
            &self.light,
        );
        &self.triangles_to_render
    }

    /// Draws the last frame built by [`Engine::update`] over the sky color.
    pub fn render(&self, rasterizer: &impl Rasterizer, buffer: &mut FrameBuffer, mode: RenderMode) {
        buffer.clear(self.sky_color());
        draw_triangles(&self.triangles_to_render, rasterizer, buffer, mode);
    }

    /// Rebuilds the projection, viewport and screen clip planes.
    pub fn resize(&mut self, width: u32, height: u32) {
        info!("viewport resized to {width}x{height}");
        self.pipeline.resize(Viewport::new(width, height));
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles_to_render
    }

    pub fn sky_color(&self) -> Color {
        self.light.sky_color()
    }

    pub fn camera(&self) -> &CoordinateSystem {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CoordinateSystem {
        &mut self.camera
    }

    pub fn light_direction(&self) -> Vec3 {
        self.light.direction
    }

    pub fn viewport(&self) -> Viewport {
        self.pipeline.viewport()
    }
}
