//! Integration test: one frame captured and replayed
//!
//! This test walks a single render pass through the capture pipeline:
//! 1. Create a device, a command pool and a command buffer
//! 2. Create a colour target image and an attachment view of it
//! 3. Create a render pass and a framebuffer over the view
//! 4. Record a layout transition and the render pass begin
//! 5. Replay against a second resource manager with different handles
//! 6. Verify every reference resolves to the replay-side object
//!
//! Run with: cargo test --test frame_replay_test -- --nocapture

use std::io::Cursor;
use std::sync::Arc;

use vkcap_core::chunk::*;
use vkcap_core::config::CaptureConfig;
use vkcap_core::{CaptureChunk, CaptureReader, CaptureWriter, ResourceManager};
use vkcap_protocol::enums::*;
use vkcap_protocol::flags::{MemoryInputFlags, MemoryOutputFlags};
use vkcap_protocol::handle::*;
use vkcap_protocol::strings::Interned;
use vkcap_protocol::types::{ClearValue, Extent2D, Extent3D, Rect2D};
use vkcap_protocol::vulkan_structs::*;
use vkcap_protocol::{ResourceType, StreamContext, StructuredValue};

const WIDTH: i32 = 640;
const HEIGHT: i32 = 480;

struct Frame {
    bytes: Vec<u8>,
    render_pass: RenderPass,
    framebuffer: Framebuffer,
    image: Image,
    cmd: CmdBuffer,
}

fn color_range() -> ImageSubresourceRange {
    ImageSubresourceRange {
        aspect: ImageAspect::COLOR,
        base_mip_level: 0,
        mip_levels: 1,
        base_array_slice: 0,
        array_size: 1,
    }
}

fn record_frame(mgr: &Arc<ResourceManager>) -> Frame {
    let mut writer = CaptureWriter::new(Vec::new(), StreamContext::new(mgr.clone()), &CaptureConfig::default())
        .expect("open writer");

    let device = Device(0x100);
    writer
        .write_chunk(CreateDevice {
            device: mgr.register_handle(device),
            info: DeviceCreateInfo {
                requested_queues: vec![DeviceQueueCreateInfo {
                    queue_family_index: 0,
                    queue_count: 1,
                }],
                enabled_extension_names: vec![Interned::new("VK_WSI_swapchain")],
                ..Default::default()
            },
        })
        .expect("CreateDevice");

    let pool = CmdPool(0x200);
    writer
        .write_chunk(CreateCmdPool {
            cmd_pool: mgr.register_handle(pool),
            queue_family_index: 0,
            flags: 0,
        })
        .expect("CreateCmdPool");

    let cmd = CmdBuffer(0x300);
    writer
        .write_chunk(CreateCommandBuffer {
            cmd_buffer: mgr.register_handle(cmd),
            info: CmdBufferCreateInfo {
                cmd_pool: pool,
                level: CmdBufferLevel::PRIMARY,
                flags: 0,
                ..Default::default()
            },
        })
        .expect("CreateCommandBuffer");

    let image = Image(0x400);
    writer
        .write_chunk(CreateImage {
            image: mgr.register_handle(image),
            info: ImageCreateInfo {
                image_type: ImageType::TYPE_2D,
                format: Format::B8G8R8A8_UNORM,
                extent: Extent3D {
                    width: WIDTH,
                    height: HEIGHT,
                    depth: 1,
                },
                mip_levels: 1,
                array_size: 1,
                samples: 1,
                tiling: ImageTiling::OPTIMAL,
                ..Default::default()
            },
        })
        .expect("CreateImage");

    let view = AttachmentView(0x500);
    writer
        .write_chunk(CreateAttachmentView {
            view: mgr.register_handle(view),
            info: AttachmentViewCreateInfo {
                image,
                format: Format::B8G8R8A8_UNORM,
                array_size: 1,
                ..Default::default()
            },
        })
        .expect("CreateAttachmentView");

    let render_pass = RenderPass(0x600);
    writer
        .write_chunk(CreateRenderPass {
            render_pass: mgr.register_handle(render_pass),
            info: RenderPassCreateInfo {
                attachments: vec![AttachmentDescription {
                    format: Format::B8G8R8A8_UNORM,
                    samples: 1,
                    load_op: AttachmentLoadOp::CLEAR,
                    store_op: AttachmentStoreOp::STORE,
                    stencil_load_op: AttachmentLoadOp::DONT_CARE,
                    stencil_store_op: AttachmentStoreOp::DONT_CARE,
                    initial_layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                    final_layout: ImageLayout::PRESENT_SOURCE_WSI,
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
        })
        .expect("CreateRenderPass");

    let framebuffer = Framebuffer(0x700);
    writer
        .write_chunk(CreateFramebuffer {
            framebuffer: mgr.register_handle(framebuffer),
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
        })
        .expect("CreateFramebuffer");

    writer
        .write_chunk(BeginCommandBuffer {
            cmd_buffer: cmd,
            info: CmdBufferBeginInfo::default(),
        })
        .expect("BeginCommandBuffer");

    writer
        .write_chunk(CmdPipelineBarrier {
            cmd_buffer: cmd,
            src_stage_mask: 0x1,
            dest_stage_mask: 0x400,
            by_region: false,
            image_barriers: vec![ImageMemoryBarrier {
                output_mask: MemoryOutputFlags::TRANSFER,
                input_mask: MemoryInputFlags::COLOR_ATTACHMENT | MemoryInputFlags::SHADER_READ,
                old_layout: ImageLayout::UNDEFINED,
                new_layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                image,
                subresource_range: color_range(),
                ..Default::default()
            }],
            ..Default::default()
        })
        .expect("CmdPipelineBarrier");

    writer
        .write_chunk(CmdBeginRenderPass {
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
                attachment_clear_values: vec![ClearValue::color_f32([0.1, 0.2, 0.3, 1.0])],
                ..Default::default()
            },
            contents: RenderPassContents::INLINE,
        })
        .expect("CmdBeginRenderPass");

    let bytes = writer.finish().expect("finish");
    Frame {
        bytes,
        render_pass,
        framebuffer,
        image,
        cmd,
    }
}

/// Replay every chunk, binding each created id to a fresh handle.
fn replay(bytes: Vec<u8>, mgr: &Arc<ResourceManager>) -> Vec<CaptureChunk> {
    let mut reader = CaptureReader::open(Cursor::new(bytes), StreamContext::new(mgr.clone())).expect("open");
    let mut next_handle = 0xF000_0000u64;
    let mut chunks = Vec::new();
    while let Some(chunk) = reader.next_chunk().expect("replay") {
        if let Some((id, ty)) = chunk.created() {
            next_handle += 1;
            mgr.bind_live(id, ty, next_handle).expect("bind");
        }
        chunks.push(chunk);
    }
    chunks
}

#[test]
fn test_frame_replay() {
    vkcap_common::try_init_logging();

    let capture_mgr = Arc::new(ResourceManager::new());
    let frame = record_frame(&capture_mgr);
    println!("frame capture: {} bytes", frame.bytes.len());

    let replay_mgr = Arc::new(ResourceManager::new());
    let chunks = replay(frame.bytes, &replay_mgr);
    assert_eq!(chunks.len(), 10);

    let live = |ty: ResourceType, raw: u64| {
        let id = capture_mgr.get_id(ty, raw).expect("captured id");
        replay_mgr.get_live_resource(id).expect("replayed object").handle
    };
    let replay_pass = RenderPass(live(ResourceType::RenderPass, frame.render_pass.0));
    let replay_fb = Framebuffer(live(ResourceType::Framebuffer, frame.framebuffer.0));
    let replay_image = Image(live(ResourceType::Image, frame.image.0));
    let replay_cmd = CmdBuffer(live(ResourceType::CmdBuffer, frame.cmd.0));

    let mut seen_begin = false;
    for chunk in &chunks {
        match chunk {
            CaptureChunk::CreateDevice(c) => {
                assert_eq!(c.info.requested_queues.len(), 1);
                assert_eq!(c.info.enabled_extension_names[0].as_str(), "VK_WSI_swapchain");
            }
            CaptureChunk::CreateFramebuffer(c) => {
                assert_eq!(c.info.render_pass, replay_pass);
                assert_eq!(c.info.attachments.len(), 1);
                assert_eq!(c.info.width, WIDTH as u32);
            }
            CaptureChunk::CreateRenderPass(c) => {
                let subpass = &c.info.subpasses[0];
                assert_eq!(subpass.color_attachments.len(), 1);
                assert!(subpass.resolve_attachments.is_empty());
                assert_eq!(subpass.depth_stencil_attachment.attachment, u32::MAX);
                assert_eq!(c.info.attachments[0].final_layout, ImageLayout::PRESENT_SOURCE_WSI);
            }
            CaptureChunk::CmdPipelineBarrier(c) => {
                assert_eq!(c.cmd_buffer, replay_cmd);
                let barrier = &c.image_barriers[0];
                assert_eq!(barrier.image, replay_image);
                assert_eq!(
                    barrier.input_mask,
                    MemoryInputFlags::COLOR_ATTACHMENT | MemoryInputFlags::SHADER_READ
                );
                assert_eq!(barrier.subresource_range, color_range());
            }
            CaptureChunk::CmdBeginRenderPass(c) => {
                seen_begin = true;
                assert_eq!(c.cmd_buffer, replay_cmd);
                assert_eq!(c.info.render_pass, replay_pass);
                assert_eq!(c.info.framebuffer, replay_fb);
                assert_eq!(c.info.render_area.extent.height, HEIGHT);
                assert_eq!(c.info.attachment_clear_values[0].as_f32(), [0.1, 0.2, 0.3, 1.0]);
                assert_eq!(c.contents, RenderPassContents::INLINE);
            }
            _ => {}
        }
    }
    assert!(seen_begin, "render pass begin was not replayed");
}

#[test]
fn test_frame_inspection_labels() {
    let capture_mgr = Arc::new(ResourceManager::new());
    let frame = record_frame(&capture_mgr);

    let mut reader = CaptureReader::open(Cursor::new(frame.bytes), StreamContext::detached()).expect("open");
    let mut barrier_tree = None;
    let mut references = 0;
    while let Some(chunk) = reader.inspect_next().expect("inspect") {
        for root in &chunk.tree {
            root.visit(&mut |node| {
                if let StructuredValue::Resource(id) = node.value {
                    if !id.is_null() {
                        references += 1;
                    }
                }
            });
        }
        if chunk.chunk_type == vkcap_core::ChunkType::CmdPipelineBarrier {
            barrier_tree = chunk.tree.into_iter().next();
        }
    }
    // pool, image, cmd x3, render pass x2, view, framebuffer, barrier image
    assert_eq!(references, 10);

    let root = barrier_tree.expect("no barrier chunk");
    let barriers = root.child("imgBarriers").expect("no imgBarriers node");
    let first = &barriers.children()[0];
    match &first.child("inputMask").expect("no inputMask node").value {
        StructuredValue::Flags { labels, .. } => assert_eq!(
            labels,
            "VK_MEMORY_INPUT_SHADER_READ_BIT | VK_MEMORY_INPUT_COLOR_ATTACHMENT_BIT"
        ),
        other => panic!("expected Flags, got {:?}", other),
    }
    match &first.child("newLayout").expect("no newLayout node").value {
        StructuredValue::Enum { label, .. } => {
            assert_eq!(label, "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL")
        }
        other => panic!("expected Enum, got {:?}", other),
    }
}
