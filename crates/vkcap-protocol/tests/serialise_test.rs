//! Integration test: structure serialisation round trips
//!
//! Writes structures in one context and reads them back in another, with
//! handles translated through stable ids. Covers variable-length arrays,
//! optional sub-structures, interned strings, raw payloads, the structured
//! inspection tree and the fatal error paths.
//!
//! Run with: cargo test --test serialise_test -- --nocapture

mod common;

use common::{read, write, TableTracker};
use vkcap_protocol::enums::*;
use vkcap_protocol::handle::*;
use vkcap_protocol::types::{ClearValue, Extent2D, Offset2D, Rect2D, Viewport};
use vkcap_protocol::vulkan_structs::*;
use vkcap_protocol::{
    Blob, Interned, ResolveError, ResourceId, ResourceType, SerialiseError, Serialiser,
    StreamContext, StructuredValue,
};

#[test]
fn test_plain_structure_roundtrip() {
    let ctx = StreamContext::detached();
    let mut info = BufferCreateInfo {
        size: 65536,
        usage: 0x21,
        flags: 2,
        ..Default::default()
    };

    let bytes = write(&ctx, &mut info);
    let back: BufferCreateInfo = read(&ctx, bytes).expect("read failed");
    println!("roundtrip: {:?}", back);
    assert_eq!(back, info);
}

#[test]
fn test_handles_resolve_to_replay_objects() {
    let capture = TableTracker::new()
        .captured(ResourceType::Buffer, 0xAAAA_0000, 7)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::Buffer, 7, 0xBBBB_0000)
        .into_context();

    let mut info = BufferViewCreateInfo {
        buffer: Buffer(0xAAAA_0000),
        view_type: BufferViewType::RAW,
        format: Format::R32_SFLOAT,
        offset: 256,
        range: 1024,
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    let back: BufferViewCreateInfo = read(&replay, bytes).expect("read failed");

    assert_eq!(back.buffer, Buffer(0xBBBB_0000));
    assert_eq!(back.format, Format::R32_SFLOAT);
    assert_eq!(back.offset, 256);
    assert_eq!(back.range, 1024);
}

#[test]
fn test_null_handles_need_no_tracker_entry() {
    let capture = TableTracker::new().into_context();
    let mut info = CmdBufferBeginInfo {
        flags: 1,
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    let back: CmdBufferBeginInfo = read(&TableTracker::new().into_context(), bytes).expect("read failed");
    assert!(back.render_pass.is_null());
    assert!(back.framebuffer.is_null());
}

#[test]
fn test_framebuffer_with_three_attachments() {
    let capture = TableTracker::new()
        .captured(ResourceType::RenderPass, 0x10, 1)
        .captured(ResourceType::AttachmentView, 0x21, 2)
        .captured(ResourceType::AttachmentView, 0x22, 3)
        .captured(ResourceType::AttachmentView, 0x23, 4)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::RenderPass, 1, 0x910)
        .live(ResourceType::AttachmentView, 2, 0x921)
        .live(ResourceType::AttachmentView, 3, 0x922)
        .live(ResourceType::AttachmentView, 4, 0x923)
        .into_context();

    let mut info = FramebufferCreateInfo {
        render_pass: RenderPass(0x10),
        attachments: vec![
            AttachmentBindInfo {
                view: AttachmentView(0x21),
                layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
            },
            AttachmentBindInfo {
                view: AttachmentView(0x22),
                layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
            },
            AttachmentBindInfo {
                view: AttachmentView(0x23),
                layout: ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL,
            },
        ],
        width: 1920,
        height: 1080,
        layers: 1,
        ..Default::default()
    };

    let bytes = write(&capture, &mut info);
    let back: FramebufferCreateInfo = read(&replay, bytes).expect("read failed");

    assert_eq!(back.render_pass, RenderPass(0x910));
    assert_eq!(back.attachments.len(), 3);
    let views: Vec<_> = back.attachments.iter().map(|a| a.view).collect();
    assert_eq!(
        views,
        vec![AttachmentView(0x921), AttachmentView(0x922), AttachmentView(0x923)]
    );
    assert_eq!(
        back.attachments[2].layout,
        ImageLayout::DEPTH_STENCIL_ATTACHMENT_OPTIMAL
    );
    assert_eq!((back.width, back.height, back.layers), (1920, 1080, 1));
}

#[test]
fn test_zero_count_arrays_read_back_empty() {
    let ctx = StreamContext::detached();
    let mut info = RenderPassCreateInfo::default();
    let bytes = write(&ctx, &mut info);
    let back: RenderPassCreateInfo = read(&ctx, bytes).expect("read failed");

    assert!(back.attachments.is_empty());
    assert!(back.subpasses.is_empty());
    assert!(back.dependencies.is_empty());
    assert_eq!(back.attachments.capacity(), 0, "zero count must not allocate");
}

#[test]
fn test_render_pass_roundtrip() {
    let ctx = StreamContext::detached();
    let color = AttachmentReference {
        attachment: 0,
        layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
    };
    let mut info = RenderPassCreateInfo {
        attachments: vec![
            AttachmentDescription {
                format: Format::B8G8R8A8_UNORM,
                samples: 1,
                load_op: AttachmentLoadOp::CLEAR,
                store_op: AttachmentStoreOp::STORE,
                final_layout: ImageLayout::PRESENT_SOURCE_WSI,
                ..Default::default()
            },
            AttachmentDescription {
                format: Format::B8G8R8A8_UNORM,
                samples: 4,
                load_op: AttachmentLoadOp::DONT_CARE,
                store_op: AttachmentStoreOp::DONT_CARE,
                ..Default::default()
            },
        ],
        subpasses: vec![
            SubpassDescription {
                pipeline_bind_point: PipelineBindPoint::GRAPHICS,
                color_attachments: vec![color],
                resolve_attachments: vec![AttachmentReference {
                    attachment: 1,
                    layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
                }],
                depth_stencil_attachment: AttachmentReference {
                    attachment: u32::MAX,
                    layout: ImageLayout::UNDEFINED,
                },
                ..Default::default()
            },
            SubpassDescription {
                pipeline_bind_point: PipelineBindPoint::GRAPHICS,
                input_attachments: vec![color],
                color_attachments: vec![color, color],
                preserve_attachments: vec![color],
                ..Default::default()
            },
        ],
        dependencies: vec![SubpassDependency {
            src_subpass: 0,
            dest_subpass: 1,
            output_mask: vkcap_protocol::flags::MemoryOutputFlags::COLOR_ATTACHMENT,
            input_mask: vkcap_protocol::flags::MemoryInputFlags::INPUT_ATTACHMENT,
            by_region: true,
            ..Default::default()
        }],
        ..Default::default()
    };

    let bytes = write(&ctx, &mut info);
    let back: RenderPassCreateInfo = read(&ctx, bytes).expect("read failed");
    assert_eq!(back, info);
    assert_eq!(back.subpasses[0].resolve_attachments.len(), 1);
    assert!(back.subpasses[1].resolve_attachments.is_empty());
}

#[test]
fn test_dynamic_viewport_shares_count() {
    let ctx = StreamContext::detached();
    let mut info = DynamicViewportStateCreateInfo {
        viewports: vec![Viewport {
            width: 800.0,
            height: 600.0,
            max_depth: 1.0,
            ..Default::default()
        }],
        scissors: vec![Rect2D {
            offset: Offset2D { x: 0, y: 0 },
            extent: Extent2D { width: 800, height: 600 },
        }],
        ..Default::default()
    };
    let bytes = write(&ctx, &mut info);
    let back: DynamicViewportStateCreateInfo = read(&ctx, bytes).expect("read failed");
    assert_eq!(back, info);
}

#[test]
#[should_panic(expected = "array length disagrees with its count")]
fn test_mismatched_shared_count_panics() {
    let ctx = StreamContext::detached();
    let mut info = DynamicViewportStateCreateInfo {
        viewports: vec![Viewport::default(), Viewport::default()],
        scissors: vec![Rect2D::default()],
        ..Default::default()
    };
    write(&ctx, &mut info);
}

#[test]
fn test_optional_substructures() {
    let capture = TableTracker::new()
        .captured(ResourceType::PipelineLayout, 0x50, 10)
        .captured(ResourceType::RenderPass, 0x51, 11)
        .captured(ResourceType::Shader, 0x52, 12)
        .captured(ResourceType::Shader, 0x53, 13)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::PipelineLayout, 10, 0x150)
        .live(ResourceType::RenderPass, 11, 0x151)
        .live(ResourceType::Shader, 12, 0x152)
        .live(ResourceType::Shader, 13, 0x153)
        .into_context();

    let mut info = GraphicsPipelineCreateInfo {
        layout: PipelineLayout(0x50),
        render_pass: RenderPass(0x51),
        base_pipeline_index: -1,
        input_assembly_state: Some(Box::new(PipelineInputAssemblyStateCreateInfo {
            topology: PrimitiveTopology::TRIANGLE_LIST,
            ..Default::default()
        })),
        raster_state: Some(Box::new(PipelineRasterStateCreateInfo {
            depth_clip_enable: true,
            fill_mode: FillMode::SOLID,
            cull_mode: CullMode::BACK,
            front_face: FrontFace::CW,
            ..Default::default()
        })),
        color_blend_state: Some(Box::new(PipelineColorBlendStateCreateInfo {
            logic_op: LogicOp::COPY,
            attachments: vec![PipelineColorBlendAttachmentState {
                blend_enable: true,
                src_blend_color: Blend::SRC_ALPHA,
                dest_blend_color: Blend::ONE_MINUS_SRC_ALPHA,
                channel_write_mask: 0xf,
                ..Default::default()
            }],
            ..Default::default()
        })),
        stages: vec![
            PipelineShaderStageCreateInfo {
                stage: ShaderStage::VERTEX,
                shader: Shader(0x52),
                ..Default::default()
            },
            PipelineShaderStageCreateInfo {
                stage: ShaderStage::FRAGMENT,
                shader: Shader(0x53),
                specialization_info: Some(Box::new(SpecializationInfo {
                    map_entries: vec![SpecializationMapEntry {
                        constant_id: 0,
                        offset: 0,
                        size: 4,
                    }],
                    data: Blob::new(vec![1, 0, 0, 0]),
                })),
                ..Default::default()
            },
        ],
        ..Default::default()
    };

    let bytes = write(&capture, &mut info);
    let back: GraphicsPipelineCreateInfo = read(&replay, bytes).expect("read failed");

    assert!(back.vertex_input_state.is_none());
    assert!(back.tessellation_state.is_none());
    assert!(back.viewport_state.is_none());
    assert!(back.multisample_state.is_none());
    assert!(back.depth_stencil_state.is_none());
    assert_eq!(back.input_assembly_state, info.input_assembly_state);
    assert_eq!(back.raster_state, info.raster_state);
    assert_eq!(back.color_blend_state, info.color_blend_state);

    assert_eq!(back.layout, PipelineLayout(0x150));
    assert_eq!(back.render_pass, RenderPass(0x151));
    assert_eq!(back.base_pipeline_index, -1);
    assert_eq!(back.stages.len(), 2);
    assert_eq!(back.stages[0].shader, Shader(0x152));
    assert!(back.stages[0].specialization_info.is_none());
    let spec = match back.stages[1].specialization_info.as_deref() {
        Some(spec) => spec,
        other => panic!("expected SpecializationInfo, got {:?}", other),
    };
    assert_eq!(spec.map_entries.len(), 1);
    assert_eq!(spec.data.as_slice(), &[1, 0, 0, 0]);
}

#[test]
fn test_interned_strings_share_storage() {
    let ctx = StreamContext::detached();
    let name = "VK_WSI_swapchain";

    let mut first = DeviceCreateInfo {
        enabled_extension_names: vec![Interned::new(name), Interned::new("VK_EXT_debug_marker")],
        ..Default::default()
    };
    let mut second = DeviceCreateInfo {
        enabled_extension_names: vec![Interned::new(name)],
        ..Default::default()
    };
    assert!(!first.enabled_extension_names[0].ptr_eq(&second.enabled_extension_names[0]));

    let first_bytes = write(&ctx, &mut first);
    let second_bytes = write(&ctx, &mut second);
    let a: DeviceCreateInfo = read(&ctx, first_bytes).expect("read failed");
    let b: DeviceCreateInfo = read(&ctx, second_bytes).expect("read failed");

    assert_eq!(a.enabled_extension_names[0].as_str(), name);
    assert!(a.enabled_extension_names[0].ptr_eq(&b.enabled_extension_names[0]));
    let canonical = ctx.strings().find(name).expect("name was not interned");
    assert!(canonical.ptr_eq(&a.enabled_extension_names[0]));
    assert_eq!(ctx.strings().len(), 2);
}

#[test]
fn test_empty_string_roundtrip() {
    let capture = TableTracker::new()
        .captured(ResourceType::ShaderModule, 0x40, 3)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::ShaderModule, 3, 0x140)
        .into_context();

    let mut info = ShaderCreateInfo {
        module: ShaderModule(0x40),
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    let back: ShaderCreateInfo = read(&replay, bytes).expect("read failed");
    assert_eq!(back.name.as_str(), "");
    assert_eq!(back.module, ShaderModule(0x140));
}

#[test]
fn test_payloads_reference_stream_bytes() {
    let ctx = StreamContext::detached();
    let code: Vec<u8> = (0..=255u8).cycle().take(4096).collect();

    let mut info = ShaderModuleCreateInfo {
        code: Blob::new(code.clone()),
        ..Default::default()
    };
    let bytes = write(&ctx, &mut info);
    let back: ShaderModuleCreateInfo = read(&ctx, bytes).expect("read failed");
    assert_eq!(back.code.len(), 4096);
    assert_eq!(back.code.as_slice(), &code[..]);

    let mut ser = Serialiser::writer(ctx.clone());
    let mut a = SpecializationInfo {
        data: Blob::new(vec![9; 16]),
        ..Default::default()
    };
    let mut b = SpecializationInfo {
        data: Blob::new(vec![7; 8]),
        ..Default::default()
    };
    ser.serialise("a", &mut a).expect("write a");
    ser.serialise("b", &mut b).expect("write b");

    let mut reader = Serialiser::reader(ser.into_bytes(), ctx);
    let ra = reader.read::<SpecializationInfo>("a").expect("read a");
    let rb = reader.read::<SpecializationInfo>("b").expect("read b");
    assert_eq!(ra.data.as_slice(), &[9; 16]);
    assert_eq!(rb.data.as_slice(), &[7; 8]);
    assert!(ra.data.shares_storage(&rb.data));
}

#[test]
fn test_descriptor_set_layout_immutable_samplers() {
    let capture = TableTracker::new()
        .captured(ResourceType::Sampler, 0x60, 20)
        .captured(ResourceType::Sampler, 0x61, 21)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::Sampler, 20, 0x160)
        .live(ResourceType::Sampler, 21, 0x161)
        .into_context();

    let mut info = DescriptorSetLayoutCreateInfo {
        bindings: vec![
            DescriptorSetLayoutBinding {
                descriptor_type: DescriptorType::SAMPLER,
                array_size: 2,
                stage_flags: 0x10,
                immutable_samplers: vec![Sampler(0x60), Sampler(0x61)],
            },
            DescriptorSetLayoutBinding {
                descriptor_type: DescriptorType::UNIFORM_BUFFER,
                array_size: 1,
                stage_flags: 0x1,
                immutable_samplers: Vec::new(),
            },
        ],
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    let back: DescriptorSetLayoutCreateInfo = read(&replay, bytes).expect("read failed");

    assert_eq!(back.bindings.len(), 2);
    assert_eq!(
        back.bindings[0].immutable_samplers,
        vec![Sampler(0x160), Sampler(0x161)]
    );
    assert!(back.bindings[1].immutable_samplers.is_empty());
    assert_eq!(back.bindings[1].descriptor_type, DescriptorType::UNIFORM_BUFFER);
}

#[test]
fn test_render_pass_begin_clear_values() {
    let capture = TableTracker::new()
        .captured(ResourceType::RenderPass, 0x70, 30)
        .captured(ResourceType::Framebuffer, 0x71, 31)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::RenderPass, 30, 0x170)
        .live(ResourceType::Framebuffer, 31, 0x171)
        .into_context();

    let mut info = RenderPassBeginInfo {
        render_pass: RenderPass(0x70),
        framebuffer: Framebuffer(0x71),
        render_area: Rect2D {
            offset: Offset2D::default(),
            extent: Extent2D { width: 256, height: 256 },
        },
        attachment_clear_values: vec![
            ClearValue::color_f32([0.0, 0.0, 0.0, 1.0]),
            ClearValue::depth_stencil(1.0, 0),
        ],
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    let back: RenderPassBeginInfo = read(&replay, bytes).expect("read failed");
    assert_eq!(back.framebuffer, Framebuffer(0x171));
    assert_eq!(back.render_area, info.render_area);
    assert_eq!(back.attachment_clear_values, info.attachment_clear_values);
    assert_eq!(back.attachment_clear_values[0].as_f32(), [0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn test_unknown_id_on_read_is_fatal() {
    let capture = TableTracker::new()
        .captured(ResourceType::Image, 0x80, 40)
        .into_context();
    let replay = TableTracker::new().into_context();

    let mut info = ImageViewCreateInfo {
        image: Image(0x80),
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    match read::<ImageViewCreateInfo>(&replay, bytes) {
        Err(SerialiseError::Resolve {
            field: "image",
            source: ResolveError::UnknownId(id),
        }) => assert_eq!(id, ResourceId(40)),
        other => panic!("expected Resolve(UnknownId), got {:?}", other),
    }
}

#[test]
fn test_wrong_resource_type_on_read_is_fatal() {
    let capture = TableTracker::new()
        .captured(ResourceType::Image, 0x80, 40)
        .into_context();
    let replay = TableTracker::new()
        .live(ResourceType::Buffer, 40, 0x180)
        .into_context();

    let mut info = AttachmentViewCreateInfo {
        image: Image(0x80),
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);
    match read::<AttachmentViewCreateInfo>(&replay, bytes) {
        Err(SerialiseError::Resolve {
            source: ResolveError::TypeMismatch { expected, actual, .. },
            ..
        }) => {
            assert_eq!(expected, ResourceType::Image);
            assert_eq!(actual, ResourceType::Buffer);
        }
        other => panic!("expected Resolve(TypeMismatch), got {:?}", other),
    }
}

#[test]
fn test_unregistered_handle_on_write_fails() {
    let capture = TableTracker::new().into_context();
    let mut info = ImageViewCreateInfo {
        image: Image(0x99),
        ..Default::default()
    };
    let mut ser = Serialiser::writer(capture);
    match ser.serialise("info", &mut info) {
        Err(SerialiseError::Resolve {
            source: ResolveError::Unregistered { ty, raw },
            ..
        }) => {
            assert_eq!(ty, ResourceType::Image);
            assert_eq!(raw, 0x99);
        }
        other => panic!("expected Resolve(Unregistered), got {:?}", other),
    }
}

#[test]
fn test_handles_without_tracker_fail() {
    let mut info = ImageViewCreateInfo {
        image: Image(0x99),
        ..Default::default()
    };
    let mut ser = Serialiser::writer(StreamContext::detached());
    match ser.serialise("info", &mut info) {
        Err(SerialiseError::NoTracker { field: "image" }) => {}
        other => panic!("expected NoTracker, got {:?}", other),
    }
}

#[test]
#[should_panic(expected = "declares the wrong structure type")]
fn test_wrong_structure_type_on_write_panics() {
    let mut info = MemoryAllocInfo {
        s_type: StructureType::BUFFER_CREATE_INFO,
        allocation_size: 4096,
        ..Default::default()
    };
    write(&StreamContext::detached(), &mut info);
}

#[test]
fn test_truncated_stream_is_fatal() {
    let ctx = StreamContext::detached();
    let mut info = BufferCreateInfo {
        size: 1,
        ..Default::default()
    };
    let mut bytes = write(&ctx, &mut info);
    bytes.truncate(bytes.len() - 2);

    match read::<BufferCreateInfo>(&ctx, bytes) {
        Err(SerialiseError::UnexpectedEof { field: "flags", needed: 4, remaining: 2 }) => {}
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_scope_tag_mismatch_is_fatal() {
    let ctx = StreamContext::detached();
    let mut info = BufferCreateInfo::default();
    let bytes = write(&ctx, &mut info);

    match read::<MemoryAllocInfo>(&ctx, bytes) {
        Err(SerialiseError::TagMismatch { expected, .. }) => {
            assert_eq!(expected, "VkMemoryAllocInfo")
        }
        other => panic!("expected TagMismatch, got {:?}", other),
    }
}

#[test]
fn test_oversized_count_is_rejected_before_allocating() {
    let ctx = StreamContext::detached();
    let mut info = DescriptorPoolCreateInfo {
        type_counts: vec![DescriptorTypeCount {
            ty: DescriptorType::STORAGE_BUFFER,
            count: 8,
        }],
        ..Default::default()
    };
    let mut bytes = write(&ctx, &mut info);
    // scope tag (4) + hasNext (1), then the u32 element count
    bytes[5..9].copy_from_slice(&u32::MAX.to_le_bytes());

    match read::<DescriptorPoolCreateInfo>(&ctx, bytes) {
        Err(SerialiseError::CountTooLarge { field, count, .. }) => {
            assert_eq!(field, "pTypeCount");
            assert_eq!(count, u64::from(u32::MAX));
        }
        other => panic!("expected CountTooLarge, got {:?}", other),
    }
}

#[test]
fn test_invalid_bool_is_fatal() {
    let ctx = StreamContext::detached();
    let mut info = PipelineInputAssemblyStateCreateInfo::default();
    let mut bytes = write(&ctx, &mut info);
    let last = bytes.len() - 1;
    bytes[last] = 2;

    match read::<PipelineInputAssemblyStateCreateInfo>(&ctx, bytes) {
        Err(SerialiseError::InvalidBool { field, value: 2 }) => {
            assert_eq!(field, "primitiveRestartEnable")
        }
        other => panic!("expected InvalidBool, got {:?}", other),
    }
}

#[test]
fn test_inspection_tree_without_tracker() {
    let capture = TableTracker::new()
        .captured(ResourceType::Buffer, 0xAAAA, 5)
        .into_context();
    let mut info = BufferViewCreateInfo {
        buffer: Buffer(0xAAAA),
        format: Format::R8G8B8A8_UNORM,
        range: 64,
        ..Default::default()
    };
    let bytes = write(&capture, &mut info);

    let mut inspector = Serialiser::inspector(bytes, StreamContext::detached());
    let decoded = inspector
        .read::<BufferViewCreateInfo>("CreateInfo")
        .expect("inspect failed");
    assert!(decoded.buffer.is_null(), "inspection must not resolve handles");

    let tree = inspector.take_structured();
    assert_eq!(tree.len(), 1);
    let root = &tree[0];
    assert_eq!(root.name, "CreateInfo");
    assert_eq!(root.type_name, "VkBufferViewCreateInfo");

    match &root.child("buffer").expect("no buffer node").value {
        StructuredValue::Resource(id) => assert_eq!(*id, ResourceId(5)),
        other => panic!("expected Resource, got {:?}", other),
    }
    match &root.child("format").expect("no format node").value {
        StructuredValue::Enum { raw, label } => {
            assert_eq!(*raw, 30);
            assert_eq!(label, "VK_FORMAT_R8G8B8A8_UNORM");
        }
        other => panic!("expected Enum, got {:?}", other),
    }
    match &root.child("hasNext").expect("no hasNext node").value {
        StructuredValue::Bool(false) => {}
        other => panic!("expected Bool(false), got {:?}", other),
    }

    let mut names = Vec::new();
    root.visit(&mut |node| names.push(node.name.clone()));
    println!("nodes: {:?}", names);
    assert!(names.contains(&"range".to_string()));
}

#[test]
fn test_depth_limit_on_nested_structures() {
    let ctx = StreamContext::detached().with_limits(vkcap_protocol::StreamLimits {
        max_depth: 2,
        ..Default::default()
    });
    let mut info = ImageCreateInfo::default();
    let mut ser = Serialiser::writer(ctx);
    // image -> extent
    ser.serialise("image", &mut info).expect("depth 2 fits");

    // stage -> pSpecializationInfo -> pMap
    let mut stage = PipelineShaderStageCreateInfo {
        specialization_info: Some(Box::new(SpecializationInfo {
            map_entries: vec![SpecializationMapEntry::default()],
            ..Default::default()
        })),
        ..Default::default()
    };
    match ser.serialise("stage", &mut stage) {
        Err(SerialiseError::DepthExceeded { max: 2, .. }) => {}
        other => panic!("expected DepthExceeded, got {:?}", other),
    }
}

#[test]
fn test_structured_tree_serialises_to_json() {
    let ctx = StreamContext::detached();
    let mut info = SamplerCreateInfo {
        mag_filter: TexFilter::LINEAR,
        max_lod: 12.0,
        ..Default::default()
    };
    let bytes = write(&ctx, &mut info);
    let mut inspector = Serialiser::inspector(bytes, ctx);
    inspector.read::<SamplerCreateInfo>("CreateInfo").expect("inspect failed");
    let tree = inspector.take_structured();

    let json = serde_json::to_value(&tree).expect("tree to json");
    let root = &json[0];
    assert_eq!(root["name"], "CreateInfo");
    assert_eq!(root["type"], "VkSamplerCreateInfo");
    assert_eq!(root["value"]["kind"], "struct");

    let fields = root["value"]["data"].as_array().expect("struct children");
    let mag = fields
        .iter()
        .find(|f| f["name"] == "magFilter")
        .expect("no magFilter field");
    assert_eq!(mag["value"]["kind"], "enum");
    assert_eq!(mag["value"]["data"]["label"], "VK_TEX_FILTER_LINEAR");
}
