use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::config::CloudConfig;

/// Static description of one flat, square-ish cloud
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CloudDescriptor {
    pub x: f32,
    /// Altitude
    pub y: f32,
    /// Z at offset zero
    pub z_base: f32,
    pub width: f32,
    pub depth: f32,
}

impl CloudDescriptor {
    pub const fn new(x: f32, y: f32, z_base: f32, width: f32, depth: f32) -> Self {
        Self {
            x,
            y,
            z_base,
            width,
            depth,
        }
    }
}

/// Advance a wrapped offset by `speed * delta_time`, keeping it in `[0, period)`.
pub fn advance_cloud_offset(offset: f32, delta_time: f32, speed: f32, period: f32) -> f32 {
    let next = (offset + speed * delta_time).rem_euclid(period);
    // rem_euclid can round up to `period` for tiny negative inputs
    if next >= period {
        0.0
    } else {
        next
    }
}

/// World position of a cloud for the given offset.
///
/// Z wraps into `[0, period)` first and is then re-centred into
/// `(-period/2, period/2]`, so clouds leave one side and re-enter on the other.
pub fn cloud_world_position(cloud: &CloudDescriptor, offset: f32, period: f32) -> Vec3 {
    let mut z = (cloud.z_base + offset).rem_euclid(period);
    if z > period / 2.0 {
        z -= period;
    }
    Vec3::new(cloud.x, cloud.y, z)
}

/// Cloud descriptors plus the shared, time-driven offset
#[derive(Debug, Clone)]
pub struct CloudField {
    clouds: Vec<CloudDescriptor>,
    offset: f32,
    speed: f32,
    period: f32,
}

impl CloudField {
    pub fn new(config: &CloudConfig) -> Self {
        Self {
            clouds: config.clouds.clone(),
            offset: 0.0,
            speed: config.speed,
            period: config.period,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn clouds(&self) -> &[CloudDescriptor] {
        &self.clouds
    }

    pub fn advance(&mut self, delta_time: f32) -> f32 {
        self.offset = advance_cloud_offset(self.offset, delta_time, self.speed, self.period);
        self.offset
    }

    /// Each cloud with its current world position
    pub fn positions(&self) -> impl Iterator<Item = (&CloudDescriptor, Vec3)> + '_ {
        self.clouds
            .iter()
            .map(|cloud| (cloud, cloud_world_position(cloud, self.offset, self.period)))
    }
}
