//! Orbit camera, projection and view uniforms.
//!
//! The greeting scene is viewed through a single camera orbiting the scene
//! center. Right-drag rotates the orbit, the scroll wheel zooms within a
//! clamped radius range. The camera also casts picking rays from pointer
//! coordinates, used to detect clicks on the cat's head.

use cgmath::{Angle, EuclideanSpace, InnerSpace, Matrix4, Point3, Rad, SquareMatrix, Vector3};
use winit::dpi::PhysicalPosition;
use winit::event::{MouseScrollDelta, WindowEvent};

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: Matrix4<f32> = Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

#[derive(Debug)]
pub struct Camera {
    pub position: Point3<f32>,
    pub yaw: Rad<f32>,
    pub pitch: Rad<f32>,
}

impl Camera {
    pub fn new<P: Into<Point3<f32>>, Y: Into<Rad<f32>>, R: Into<Rad<f32>>>(
        position: P,
        yaw: Y,
        pitch: R,
    ) -> Self {
        Self {
            position: position.into(),
            yaw: yaw.into(),
            pitch: pitch.into(),
        }
    }

    pub fn forward(&self) -> Vector3<f32> {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw).normalize()
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_to_rh(self.position, self.forward(), Vector3::unit_y())
    }

    /// Cast a world-space ray from a window pixel through the camera.
    pub fn cast_ray_from_mouse(
        &self,
        coords: PhysicalPosition<f64>,
        width: f32,
        height: f32,
        projection: &Projection,
    ) -> Ray {
        let ndc_x = 2.0 * coords.x as f32 / width - 1.0;
        let ndc_y = 1.0 - 2.0 * coords.y as f32 / height;
        let inverse = (projection.calc_matrix() * self.calc_matrix())
            .invert()
            .unwrap_or_else(Matrix4::identity);
        // wgpu clip space runs z from 0 (near) to 1 (far).
        let near = inverse * cgmath::Vector4::new(ndc_x, ndc_y, 0.0, 1.0);
        let far = inverse * cgmath::Vector4::new(ndc_x, ndc_y, 1.0, 1.0);
        let near = near.truncate() / near.w;
        let far = far.truncate() / far.w;
        Ray {
            origin: Point3::new(near.x, near.y, near.z),
            direction: (far - near).normalize(),
        }
    }
}

/// A world-space ray used for pointer picking.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
}

impl Ray {
    /// Nearest positive hit distance against a sphere, if any.
    pub fn intersect_sphere(&self, center: Point3<f32>, radius: f32) -> Option<f32> {
        let to_center = self.origin - center;
        let b = to_center.dot(self.direction);
        let c = to_center.dot(to_center) - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrt = discriminant.sqrt();
        let t = if -b - sqrt > 0.0 {
            -b - sqrt
        } else {
            -b + sqrt
        };
        (t > 0.0).then_some(t)
    }
}

#[derive(Debug)]
pub struct Projection {
    aspect: f32,
    fovy: Rad<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new<F: Into<Rad<f32>>>(width: u32, height: u32, fovy: F, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy: fovy.into(),
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// Orbit state: yaw/pitch/radius around a fixed look-at target.
#[derive(Debug)]
pub struct OrbitController {
    target: Point3<f32>,
    yaw: Rad<f32>,
    pitch: Rad<f32>,
    radius: f32,
    sensitivity: f32,
    zoom_speed: f32,
}

impl OrbitController {
    pub fn new(target: Point3<f32>, radius: f32, sensitivity: f32, zoom_speed: f32) -> Self {
        Self {
            target,
            yaw: Rad(std::f32::consts::FRAC_PI_2),
            pitch: Rad(0.35),
            radius,
            sensitivity,
            zoom_speed,
        }
    }

    /// Rotate the orbit from a mouse drag delta.
    pub fn handle_mouse(&mut self, dx: f64, dy: f64) {
        self.yaw += Rad(dx as f32 * self.sensitivity);
        self.pitch += Rad(dy as f32 * self.sensitivity);
        // Keep the camera above the ground plane and short of the pole.
        self.pitch.0 = self.pitch.0.clamp(-0.1, 1.4);
    }

    pub fn handle_window_events(&mut self, event: &WindowEvent) {
        if let WindowEvent::MouseWheel { delta, .. } = event {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(_, y) => *y,
                MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 40.0,
            };
            self.radius = (self.radius - scroll * self.zoom_speed).clamp(4.0, 40.0);
        }
    }

    /// Place the camera on the orbit and aim it at the target.
    pub fn update(&self, camera: &mut Camera) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let offset =
            Vector3::new(cos_pitch * cos_yaw, sin_pitch, cos_pitch * sin_yaw) * self.radius;
        camera.position = self.target + offset;
        camera.yaw = Rad((-offset.z).atan2(-offset.x));
        camera.pitch = Rad((-offset.y / self.radius).asin());
    }
}

/// Camera uniform data as laid out in the shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        Self {
            view_position: [0.0; 4],
            view_proj: Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything the renderer needs for the camera in one place.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub controller: OrbitController,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}
