use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use tracing::info;
use vkcap_core::chunk::*;
use vkcap_core::config::VkcapConfig;
use vkcap_core::{CaptureChunk, CaptureWriter, ResourceManager};
use vkcap_protocol::enums::*;
use vkcap_protocol::flags::{MemoryInputFlags, MemoryOutputFlags};
use vkcap_protocol::handle::*;
use vkcap_protocol::types::{ClearColorValue, ClearValue, Extent2D, Extent3D, Rect2D};
use vkcap_protocol::vulkan_structs::*;
use vkcap_protocol::{Blob, Interned, StreamContext};

const WIDTH: i32 = 320;
const HEIGHT: i32 = 240;

/// Hands out fake driver handles and registers them for capture.
struct SampleDevice {
    mgr: Arc<ResourceManager>,
    next_raw: u64,
}

impl SampleDevice {
    fn create<H: ResourceHandle>(&mut self) -> (H, ResourceId) {
        self.next_raw += 0x1000;
        let handle = H::from_raw(self.next_raw);
        (handle, self.mgr.register_handle(handle))
    }
}

pub fn run_sample(path: &str, config: &VkcapConfig) -> anyhow::Result<()> {
    let mgr = Arc::new(ResourceManager::new());
    let ctx = StreamContext::new(mgr.clone()).with_limits(config.stream.limits());
    let out = BufWriter::new(File::create(path)?);
    let mut writer = CaptureWriter::new(out, ctx, &config.capture)?;

    let mut dev = SampleDevice {
        mgr: mgr.clone(),
        next_raw: 0,
    };
    for chunk in sample_chunks(&mut dev) {
        writer.write_chunk(chunk)?;
    }

    let chunks = writer.chunks_written();
    writer.finish()?.flush()?;
    info!("wrote {} chunks, {} objects to {}", chunks, mgr.len(), path);
    println!("Wrote sample capture to {} ({} chunks)", path, chunks);
    Ok(())
}

/// A single frame: clear a colour target inside a render pass, after
/// uploading a staging buffer into it.
fn sample_chunks(dev: &mut SampleDevice) -> Vec<CaptureChunk> {
    let mut chunks: Vec<CaptureChunk> = Vec::new();
    let color_range = ImageSubresourceRange {
        aspect: ImageAspect::COLOR,
        mip_levels: 1,
        array_size: 1,
        ..Default::default()
    };

    let (_, device) = dev.create::<Device>();
    chunks.push(
        CreateDevice {
            device,
            info: DeviceCreateInfo {
                requested_queues: vec![DeviceQueueCreateInfo {
                    queue_family_index: 0,
                    queue_count: 1,
                }],
                enabled_extension_names: vec![Interned::new("VK_WSI_swapchain")],
                ..Default::default()
            },
        }
        .into(),
    );

    let size = (WIDTH * HEIGHT * 4) as u64;
    let (_, memory) = dev.create::<DeviceMemory>();
    chunks.push(
        AllocMemory {
            memory,
            info: MemoryAllocInfo {
                allocation_size: size * 2,
                memory_type_index: 0,
                ..Default::default()
            },
        }
        .into(),
    );

    let (staging, staging_id) = dev.create::<Buffer>();
    chunks.push(
        CreateBuffer {
            buffer: staging_id,
            info: BufferCreateInfo {
                size,
                usage: 0x1,
                ..Default::default()
            },
        }
        .into(),
    );

    let (image, image_id) = dev.create::<Image>();
    chunks.push(
        CreateImage {
            image: image_id,
            info: ImageCreateInfo {
                image_type: ImageType::TYPE_2D,
                format: Format::R8G8B8A8_UNORM,
                extent: Extent3D {
                    width: WIDTH,
                    height: HEIGHT,
                    depth: 1,
                },
                mip_levels: 1,
                array_size: 1,
                samples: 1,
                tiling: ImageTiling::OPTIMAL,
                usage: 0x12,
                ..Default::default()
            },
        }
        .into(),
    );

    let (view, view_id) = dev.create::<AttachmentView>();
    chunks.push(
        CreateAttachmentView {
            view: view_id,
            info: AttachmentViewCreateInfo {
                image,
                format: Format::R8G8B8A8_UNORM,
                array_size: 1,
                ..Default::default()
            },
        }
        .into(),
    );

    let (render_pass, render_pass_id) = dev.create::<RenderPass>();
    chunks.push(
        CreateRenderPass {
            render_pass: render_pass_id,
            info: RenderPassCreateInfo {
                attachments: vec![AttachmentDescription {
                    format: Format::R8G8B8A8_UNORM,
                    samples: 1,
                    load_op: AttachmentLoadOp::CLEAR,
                    store_op: AttachmentStoreOp::STORE,
                    stencil_load_op: AttachmentLoadOp::DONT_CARE,
                    stencil_store_op: AttachmentStoreOp::DONT_CARE,
                    initial_layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                    final_layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                    ..Default::default()
                }],
                subpasses: vec![SubpassDescription {
                    pipeline_bind_point: PipelineBindPoint::GRAPHICS,
                    color_attachments: vec![AttachmentReference {
                        attachment: 0,
                        layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                    }],
                    depth_stencil_attachment: AttachmentReference {
                        attachment: u32::MAX,
                        layout: ImageLayout::UNDEFINED,
                    },
                    ..Default::default()
                }],
                ..Default::default()
            },
        }
        .into(),
    );

    let (framebuffer, framebuffer_id) = dev.create::<Framebuffer>();
    chunks.push(
        CreateFramebuffer {
            framebuffer: framebuffer_id,
            info: FramebufferCreateInfo {
                render_pass,
                attachments: vec![AttachmentBindInfo {
                    view,
                    layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                }],
                width: WIDTH as u32,
                height: HEIGHT as u32,
                layers: 1,
                ..Default::default()
            },
        }
        .into(),
    );

    // SPIR-V magic followed by padding; enough to exercise compression.
    let mut code = 0x0723_0203u32.to_le_bytes().to_vec();
    code.resize(2048, 0);
    let (module, module_id) = dev.create::<ShaderModule>();
    chunks.push(
        CreateShaderModule {
            module: module_id,
            info: ShaderModuleCreateInfo {
                code: Blob::new(code),
                ..Default::default()
            },
        }
        .into(),
    );

    let mut stages = Vec::new();
    for (stage, name) in [(ShaderStage::VERTEX, "main_vs"), (ShaderStage::FRAGMENT, "main_fs")] {
        let (shader, shader_id) = dev.create::<Shader>();
        chunks.push(
            CreateShader {
                shader: shader_id,
                info: ShaderCreateInfo {
                    name: Interned::new(name),
                    module,
                    ..Default::default()
                },
            }
            .into(),
        );
        stages.push(PipelineShaderStageCreateInfo {
            stage,
            shader,
            ..Default::default()
        });
    }

    let (layout, layout_id) = dev.create::<PipelineLayout>();
    chunks.push(
        CreatePipelineLayout {
            layout: layout_id,
            info: PipelineLayoutCreateInfo::default(),
        }
        .into(),
    );

    let (_, pipeline_id) = dev.create::<Pipeline>();
    chunks.push(
        CreateGraphicsPipeline {
            cache: PipelineCache::null(),
            pipeline: pipeline_id,
            info: GraphicsPipelineCreateInfo {
                layout,
                render_pass,
                base_pipeline_index: -1,
                input_assembly_state: Some(Box::new(PipelineInputAssemblyStateCreateInfo {
                    topology: PrimitiveTopology::TRIANGLE_LIST,
                    ..Default::default()
                })),
                viewport_state: Some(Box::new(PipelineViewportStateCreateInfo {
                    viewport_count: 1,
                    ..Default::default()
                })),
                raster_state: Some(Box::new(PipelineRasterStateCreateInfo {
                    depth_clip_enable: true,
                    fill_mode: FillMode::SOLID,
                    cull_mode: CullMode::BACK,
                    front_face: FrontFace::CCW,
                    ..Default::default()
                })),
                stages,
                ..Default::default()
            },
        }
        .into(),
    );

    let (pool, pool_id) = dev.create::<CmdPool>();
    chunks.push(
        CreateCmdPool {
            cmd_pool: pool_id,
            queue_family_index: 0,
            flags: 0,
        }
        .into(),
    );

    let (cmd, cmd_id) = dev.create::<CmdBuffer>();
    chunks.push(
        CreateCommandBuffer {
            cmd_buffer: cmd_id,
            info: CmdBufferCreateInfo {
                cmd_pool: pool,
                level: CmdBufferLevel::PRIMARY,
                ..Default::default()
            },
        }
        .into(),
    );

    chunks.push(
        BeginCommandBuffer {
            cmd_buffer: cmd,
            info: CmdBufferBeginInfo::default(),
        }
        .into(),
    );

    chunks.push(
        CmdPipelineBarrier {
            cmd_buffer: cmd,
            src_stage_mask: 0x1,
            dest_stage_mask: 0x1000,
            image_barriers: vec![ImageMemoryBarrier {
                input_mask: MemoryInputFlags::TRANSFER,
                old_layout: ImageLayout::UNDEFINED,
                new_layout: ImageLayout::TRANSFER_DESTINATION_OPTIMAL,
                image,
                subresource_range: color_range,
                ..Default::default()
            }],
            ..Default::default()
        }
        .into(),
    );

    chunks.push(
        CmdCopyBufferToImage {
            cmd_buffer: cmd,
            src_buffer: staging,
            dest_image: image,
            dest_layout: ImageLayout::TRANSFER_DESTINATION_OPTIMAL,
            regions: vec![BufferImageCopy {
                image_subresource: ImageSubresource {
                    aspect: ImageAspect::COLOR,
                    ..Default::default()
                },
                image_extent: Extent3D {
                    width: WIDTH,
                    height: HEIGHT,
                    depth: 1,
                },
                ..Default::default()
            }],
        }
        .into(),
    );

    chunks.push(
        CmdClearColorImage {
            cmd_buffer: cmd,
            image,
            layout: ImageLayout::TRANSFER_DESTINATION_OPTIMAL,
            color: ClearColorValue::from_f32([0.0, 0.0, 0.0, 1.0]),
            ranges: vec![color_range],
        }
        .into(),
    );

    chunks.push(
        CmdPipelineBarrier {
            cmd_buffer: cmd,
            src_stage_mask: 0x1000,
            dest_stage_mask: 0x400,
            image_barriers: vec![ImageMemoryBarrier {
                output_mask: MemoryOutputFlags::TRANSFER,
                input_mask: MemoryInputFlags::COLOR_ATTACHMENT,
                old_layout: ImageLayout::TRANSFER_DESTINATION_OPTIMAL,
                new_layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                image,
                subresource_range: color_range,
                ..Default::default()
            }],
            ..Default::default()
        }
        .into(),
    );

    chunks.push(
        CmdBeginRenderPass {
            cmd_buffer: cmd,
            info: RenderPassBeginInfo {
                render_pass,
                framebuffer,
                render_area: Rect2D {
                    extent: Extent2D {
                        width: WIDTH,
                        height: HEIGHT,
                    },
                    ..Default::default()
                },
                attachment_clear_values: vec![ClearValue::color_f32([0.2, 0.4, 0.8, 1.0])],
                ..Default::default()
            },
            contents: RenderPassContents::INLINE,
        }
        .into(),
    );

    chunks
}
