//! Uploading a [`DrawList`] into wgpu buffers and issuing its draw calls.

use tracing::{trace, warn};
use wgpu::util::DeviceExt;

use crate::render::{DrawBatch, DrawList};

/// Writes `bytes` into `buffer`, creating a new buffer only when there is none or the
/// existing one is too small. Empty uploads leave the buffer untouched.
fn upsert_gpu_buffer(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    buffer: &mut Option<wgpu::Buffer>,
    label: &'static str,
    bytes: &[u8],
    usage: wgpu::BufferUsages,
) {
    if bytes.is_empty() {
        return;
    }

    match buffer.as_ref() {
        Some(existing) if existing.size() >= bytes.len() as u64 => {
            queue.write_buffer(existing, 0, bytes);
        }
        _ => {
            trace!(label, size = bytes.len(), "allocating quad buffer");
            *buffer = Some(device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: bytes,
                usage,
            }));
        }
    }
}

/// GPU copies of a [`DrawList`]'s vertex and index arrays.
///
/// Buffers grow on demand and are reused across frames while they are large enough.
#[derive(Debug, Default)]
pub struct GpuQuadBuffers {
    vertex_buffer: Option<wgpu::Buffer>,
    index_buffer: Option<wgpu::Buffer>,
    index_count: u32,
}

impl GpuQuadBuffers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the draw list's vertices and indices to the GPU.
    pub fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, draw_list: &DrawList) {
        upsert_gpu_buffer(
            device,
            queue,
            &mut self.vertex_buffer,
            "quadplane vertex buffer",
            bytemuck::cast_slice(draw_list.vertices()),
            wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        );
        // Six u16 indices per quad keep the upload a multiple of COPY_BUFFER_ALIGNMENT.
        upsert_gpu_buffer(
            device,
            queue,
            &mut self.index_buffer,
            "quadplane index buffer",
            bytemuck::cast_slice(draw_list.indices()),
            wgpu::BufferUsages::INDEX | wgpu::BufferUsages::COPY_DST,
        );
        self.index_count = draw_list.indices().len() as u32;
    }

    /// Number of indices written by the last upload.
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Allocated size of the vertex buffer in bytes, `None` before the first non-empty upload.
    pub fn vertex_buffer_size(&self) -> Option<u64> {
        self.vertex_buffer.as_ref().map(wgpu::Buffer::size)
    }

    /// Allocated size of the index buffer in bytes, `None` before the first non-empty upload.
    pub fn index_buffer_size(&self) -> Option<u64> {
        self.index_buffer.as_ref().map(wgpu::Buffer::size)
    }

    /// The leading batches whose index ranges lie inside the last upload.
    ///
    /// Batches recorded after the upload are skipped with a warning.
    pub fn uploaded_batches<'b>(&self, batches: &'b [DrawBatch]) -> &'b [DrawBatch] {
        let fitting = batches
            .iter()
            .take_while(|batch| batch.first_index + batch.index_count <= self.index_count)
            .count();
        if fitting < batches.len() {
            warn!(
                skipped = batches.len() - fitting,
                uploaded_indices = self.index_count,
                "draw batches reach past the uploaded index buffer; upload the draw list again"
            );
        }
        &batches[..fitting]
    }

    /// Binds the buffers and draws every uploaded batch. `bind_batch` is called before each
    /// batch so the caller can set the pipeline and texture bind groups that batch needs.
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        batches: &[DrawBatch],
        mut bind_batch: impl FnMut(&mut wgpu::RenderPass<'_>, &DrawBatch),
    ) {
        let (Some(vertex_buffer), Some(index_buffer)) = (&self.vertex_buffer, &self.index_buffer)
        else {
            return;
        };
        if self.index_count == 0 {
            return;
        }

        pass.set_vertex_buffer(0, vertex_buffer.slice(..));
        pass.set_index_buffer(index_buffer.slice(..), wgpu::IndexFormat::Uint16);

        for batch in self.uploaded_batches(batches) {
            bind_batch(pass, batch);
            pass.draw_indexed(batch.first_index..batch.first_index + batch.index_count, 0, 0..1);
        }
    }
}
