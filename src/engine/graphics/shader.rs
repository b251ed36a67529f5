//! The fixed shader pair and checked compilation.

use std::borrow::Cow;

use anyhow::{bail, Result};
use log::{debug, error};

pub const VERTEX_SHADER_SOURCE: &str = include_str!("../shaders/triangle.vert.wgsl");
pub const FRAGMENT_SHADER_SOURCE: &str = include_str!("../shaders/triangle.frag.wgsl");

pub const VERTEX_ENTRY_POINT: &str = "vs_main";
pub const FRAGMENT_ENTRY_POINT: &str = "fs_main";

/// Runs `create` inside a validation error scope and turns a captured error
/// into an `Err`.
pub fn validated<T>(
    device: &wgpu::Device,
    what: &str,
    create: impl FnOnce(&wgpu::Device) -> T,
) -> Result<T> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let value = create(device);
    if let Some(e) = pollster::block_on(device.pop_error_scope()) {
        error!("{} failed: {}", what, e);
        bail!("{} failed: {}", what, e);
    }
    Ok(value)
}

/// Compiles a WGSL source into a shader module, failing on compile errors.
pub fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &'static str,
) -> Result<wgpu::ShaderModule> {
    let module = validated(device, &format!("compiling {}", label), |device| {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(label),
            source: wgpu::ShaderSource::Wgsl(Cow::Borrowed(source)),
        })
    })?;
    debug!("Compiled {}", label);
    Ok(module)
}
