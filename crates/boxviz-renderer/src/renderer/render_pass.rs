//! Render pass execution.

use crate::sub_renderers::{FaceRenderer, WireframeRenderer};

/// Main pass parameters.
pub struct MainPassParams<'a> {
    /// Face renderer.
    pub face_renderer: &'a FaceRenderer,
    /// Wireframe renderer.
    pub wireframe_renderer: &'a WireframeRenderer,
    /// Depth view.
    pub depth_view: &'a wgpu::TextureView,
    /// MSAA view (if MSAA is enabled).
    pub msaa_view: Option<&'a wgpu::TextureView>,
    /// Clear color.
    pub clear_color: wgpu::Color,
}

/// Execute the main render pass: faces first, then the wireframe on top.
pub fn render_main_pass(
    encoder: &mut wgpu::CommandEncoder,
    view: &wgpu::TextureView,
    params: &MainPassParams<'_>,
) {
    let ops = wgpu::Operations {
        load: wgpu::LoadOp::Clear(params.clear_color),
        store: wgpu::StoreOp::Store,
    };

    // With MSAA, render to the multisample texture and resolve to the output
    let color_attachment = match params.msaa_view {
        Some(msaa_view) => wgpu::RenderPassColorAttachment {
            view: msaa_view,
            resolve_target: Some(view),
            ops,
            depth_slice: None,
        },
        None => wgpu::RenderPassColorAttachment {
            view,
            resolve_target: None,
            ops,
            depth_slice: None,
        },
    };

    let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Main Render Pass"),
        color_attachments: &[Some(color_attachment)],
        depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
            view: params.depth_view,
            depth_ops: Some(wgpu::Operations {
                load: wgpu::LoadOp::Clear(1.0),
                store: wgpu::StoreOp::Store,
            }),
            stencil_ops: None,
        }),
        timestamp_writes: None,
        occlusion_query_set: None,
    });

    params.face_renderer.render(&mut render_pass);
    params.wireframe_renderer.render(&mut render_pass);
}
