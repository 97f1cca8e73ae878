/// GPU upload tests for the quad buffers.
///
/// These tests request a headless wgpu device and skip themselves when the machine has
/// no usable adapter.
///
/// Run with:   cargo test --test gpu_upload
use futures::executor::block_on;
use quadplane::{wgpu, Color, DrawList, GpuQuadBuffers, Plane, QuadVertex, Vec2};
use quadplane_test_scenes::build_main_scene;

async fn try_headless_device() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::LowPower,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .ok()?;

    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_defaults(),
            memory_hints: Default::default(),
            trace: Default::default(),
        })
        .await
        .ok()
}

fn vertex_bytes(draw_list: &DrawList) -> u64 {
    (draw_list.vertices().len() * std::mem::size_of::<QuadVertex>()) as u64
}

fn index_bytes(draw_list: &DrawList) -> u64 {
    (draw_list.indices().len() * std::mem::size_of::<u16>()) as u64
}

/// Uploading the main scene sizes both buffers to exactly fit it, and a smaller frame
/// afterwards is written into the same buffers.
#[test]
fn main_scene_upload_then_smaller_frame_reuses_buffers() {
    let Some((device, queue)) = block_on(try_headless_device()) else {
        eprintln!("no wgpu adapter available, skipping");
        return;
    };

    let mut scene = DrawList::new();
    build_main_scene(&mut scene);
    assert!(!scene.is_empty());

    let mut buffers = GpuQuadBuffers::new();
    buffers.upload(&device, &queue, &scene);

    assert_eq!(buffers.index_count(), scene.indices().len() as u32);
    assert_eq!(buffers.vertex_buffer_size(), Some(vertex_bytes(&scene)));
    assert_eq!(buffers.index_buffer_size(), Some(index_bytes(&scene)));
    assert_eq!(
        buffers.uploaded_batches(scene.batches()).len(),
        scene.batches().len()
    );

    let mut single = DrawList::new();
    Plane::with_geometry(Vec2::xy(10.0, 10.0), Vec2::xy(5.0, 5.0), Color::WHITE)
        .render(&mut single);
    assert!(vertex_bytes(&single) < vertex_bytes(&scene));

    buffers.upload(&device, &queue, &single);

    assert_eq!(buffers.index_count(), 6);
    assert_eq!(
        buffers.vertex_buffer_size(),
        Some(vertex_bytes(&scene)),
        "a smaller frame should reuse the vertex buffer",
    );
    assert_eq!(
        buffers.index_buffer_size(),
        Some(index_bytes(&scene)),
        "a smaller frame should reuse the index buffer",
    );
    // Even the scene's first batch spans more indices than the single quad uploaded.
    assert!(buffers.uploaded_batches(scene.batches()).is_empty());
}

/// A frame larger than the current buffers grows them.
#[test]
fn larger_frame_grows_buffers() {
    let Some((device, queue)) = block_on(try_headless_device()) else {
        eprintln!("no wgpu adapter available, skipping");
        return;
    };

    let mut small = DrawList::new();
    Plane::with_geometry(Vec2::xy(10.0, 10.0), Vec2::zero(), Color::WHITE).render(&mut small);

    let mut buffers = GpuQuadBuffers::new();
    buffers.upload(&device, &queue, &small);
    assert_eq!(buffers.vertex_buffer_size(), Some(vertex_bytes(&small)));

    let mut scene = DrawList::new();
    build_main_scene(&mut scene);
    buffers.upload(&device, &queue, &scene);

    assert_eq!(buffers.vertex_buffer_size(), Some(vertex_bytes(&scene)));
    assert_eq!(buffers.index_buffer_size(), Some(index_bytes(&scene)));
    assert_eq!(buffers.index_count(), scene.indices().len() as u32);
}

/// An empty frame uploads nothing and keeps the previous allocation.
#[test]
fn empty_frame_keeps_buffers() {
    let Some((device, queue)) = block_on(try_headless_device()) else {
        eprintln!("no wgpu adapter available, skipping");
        return;
    };

    let mut scene = DrawList::new();
    build_main_scene(&mut scene);

    let mut buffers = GpuQuadBuffers::new();
    buffers.upload(&device, &queue, &scene);
    buffers.upload(&device, &queue, &DrawList::new());

    assert_eq!(buffers.index_count(), 0);
    assert_eq!(buffers.vertex_buffer_size(), Some(vertex_bytes(&scene)));
    assert!(buffers.uploaded_batches(scene.batches()).is_empty());
}
