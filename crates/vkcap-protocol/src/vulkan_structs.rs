//! Owned Rust forms of the API structures carried in a capture.
//!
//! Pointer-and-count pairs become `Vec`s, optional pointers become
//! `Option<Box<_>>`, strings are interned, and opaque payloads are [`Blob`]s.
//! Structures with a type tag also carry their chained extension in `next`.

use crate::chain::{Extensible, NextStruct};
use crate::enums::*;
use crate::flags::{MemoryInputFlags, MemoryOutputFlags};
use crate::handle::*;
use crate::serialiser::Blob;
use crate::strings::Interned;
use crate::types::{ClearValue, Extent3D, Offset3D, Rect2D, Viewport};

macro_rules! extensible_struct {
    (
        $(#[$meta:meta])*
        $name:ident = $s_type:ident {
            $($(#[$fmeta:meta])* $field:ident: $ty:ty,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub s_type: StructureType,
            pub next: Option<Box<NextStruct>>,
            $($(#[$fmeta])* pub $field: $ty,)*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    s_type: StructureType::$s_type,
                    next: None,
                    $($field: Default::default(),)*
                }
            }
        }

        impl Extensible for $name {
            const STRUCTURE_TYPE: StructureType = StructureType::$s_type;

            fn structure_type(&self) -> StructureType {
                self.s_type
            }

            fn next_mut(&mut self) -> &mut Option<Box<NextStruct>> {
                &mut self.next
            }
        }
    };
}

// ── Devices and memory ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceQueueCreateInfo {
    pub queue_family_index: u32,
    pub queue_count: u32,
}

extensible_struct! {
    DeviceCreateInfo = DEVICE_CREATE_INFO {
        flags: u32,
        requested_queues: Vec<DeviceQueueCreateInfo>,
        enabled_extension_names: Vec<Interned>,
    }
}

extensible_struct! {
    MemoryAllocInfo = MEMORY_ALLOC_INFO {
        allocation_size: u64,
        memory_type_index: u32,
    }
}

// ── Buffers and images ──────────────────────────────────────────────────────

extensible_struct! {
    BufferCreateInfo = BUFFER_CREATE_INFO {
        size: u64,
        usage: u32,
        flags: u32,
    }
}

extensible_struct! {
    BufferViewCreateInfo = BUFFER_VIEW_CREATE_INFO {
        buffer: Buffer,
        view_type: BufferViewType,
        format: Format,
        offset: u64,
        range: u64,
    }
}

extensible_struct! {
    ImageCreateInfo = IMAGE_CREATE_INFO {
        image_type: ImageType,
        format: Format,
        extent: Extent3D,
        mip_levels: u32,
        array_size: u32,
        samples: u32,
        tiling: ImageTiling,
        usage: u32,
        flags: u32,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelMapping {
    pub r: ChannelSwizzle,
    pub g: ChannelSwizzle,
    pub b: ChannelSwizzle,
    pub a: ChannelSwizzle,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSubresourceRange {
    pub aspect: ImageAspect,
    pub base_mip_level: u32,
    pub mip_levels: u32,
    pub base_array_slice: u32,
    pub array_size: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageSubresource {
    pub aspect: ImageAspect,
    pub mip_level: u32,
    pub array_slice: u32,
}

extensible_struct! {
    ImageViewCreateInfo = IMAGE_VIEW_CREATE_INFO {
        image: Image,
        view_type: ImageViewType,
        format: Format,
        channels: ChannelMapping,
        subresource_range: ImageSubresourceRange,
    }
}

extensible_struct! {
    AttachmentViewCreateInfo = ATTACHMENT_VIEW_CREATE_INFO {
        image: Image,
        format: Format,
        mip_level: u32,
        base_array_slice: u32,
        array_size: u32,
    }
}

// ── Copy regions ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferCopy {
    pub src_offset: u64,
    pub dest_offset: u64,
    pub copy_size: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferImageCopy {
    pub buffer_offset: u64,
    pub image_subresource: ImageSubresource,
    pub image_offset: Offset3D,
    pub image_extent: Extent3D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageCopy {
    pub src_subresource: ImageSubresource,
    pub src_offset: Offset3D,
    pub dest_subresource: ImageSubresource,
    pub dest_offset: Offset3D,
    pub extent: Extent3D,
}

/// Same layout as [`ImageCopy`], kept distinct for its own scope label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageResolve {
    pub src_subresource: ImageSubresource,
    pub src_offset: Offset3D,
    pub dest_subresource: ImageSubresource,
    pub dest_offset: Offset3D,
    pub extent: Extent3D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageBlit {
    pub src_subresource: ImageSubresource,
    pub src_offset: Offset3D,
    pub src_extent: Extent3D,
    pub dest_subresource: ImageSubresource,
    pub dest_offset: Offset3D,
    pub dest_extent: Extent3D,
}

// ── Render passes and framebuffers ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentBindInfo {
    pub view: AttachmentView,
    pub layout: ImageLayout,
}

extensible_struct! {
    FramebufferCreateInfo = FRAMEBUFFER_CREATE_INFO {
        render_pass: RenderPass,
        attachments: Vec<AttachmentBindInfo>,
        width: u32,
        height: u32,
        layers: u32,
    }
}

extensible_struct! {
    AttachmentDescription = ATTACHMENT_DESCRIPTION {
        format: Format,
        samples: u32,
        load_op: AttachmentLoadOp,
        store_op: AttachmentStoreOp,
        stencil_load_op: AttachmentLoadOp,
        stencil_store_op: AttachmentStoreOp,
        initial_layout: ImageLayout,
        final_layout: ImageLayout,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttachmentReference {
    pub attachment: u32,
    pub layout: ImageLayout,
}

extensible_struct! {
    SubpassDescription = SUBPASS_DESCRIPTION {
        pipeline_bind_point: PipelineBindPoint,
        flags: u32,
        input_attachments: Vec<AttachmentReference>,
        color_attachments: Vec<AttachmentReference>,
        /// Empty, or one entry per colour attachment.
        resolve_attachments: Vec<AttachmentReference>,
        depth_stencil_attachment: AttachmentReference,
        preserve_attachments: Vec<AttachmentReference>,
    }
}

extensible_struct! {
    SubpassDependency = SUBPASS_DEPENDENCY {
        src_subpass: u32,
        dest_subpass: u32,
        src_stage_mask: u32,
        dest_stage_mask: u32,
        output_mask: MemoryOutputFlags,
        input_mask: MemoryInputFlags,
        by_region: bool,
    }
}

extensible_struct! {
    RenderPassCreateInfo = RENDER_PASS_CREATE_INFO {
        attachments: Vec<AttachmentDescription>,
        subpasses: Vec<SubpassDescription>,
        dependencies: Vec<SubpassDependency>,
    }
}

extensible_struct! {
    RenderPassBeginInfo = RENDER_PASS_BEGIN_INFO {
        render_pass: RenderPass,
        framebuffer: Framebuffer,
        render_area: Rect2D,
        attachment_clear_values: Vec<ClearValue>,
    }
}

// ── Dynamic state objects ───────────────────────────────────────────────────

extensible_struct! {
    /// `viewports` and `scissors` share one count on the wire.
    DynamicViewportStateCreateInfo = DYNAMIC_VIEWPORT_STATE_CREATE_INFO {
        viewports: Vec<Viewport>,
        scissors: Vec<Rect2D>,
    }
}

extensible_struct! {
    DynamicRasterStateCreateInfo = DYNAMIC_RASTER_STATE_CREATE_INFO {
        depth_bias: f32,
        depth_bias_clamp: f32,
        slope_scaled_depth_bias: f32,
        line_width: f32,
    }
}

extensible_struct! {
    DynamicColorBlendStateCreateInfo = DYNAMIC_COLOR_BLEND_STATE_CREATE_INFO {
        blend_const: [f32; 4],
    }
}

extensible_struct! {
    DynamicDepthStencilStateCreateInfo = DYNAMIC_DEPTH_STENCIL_STATE_CREATE_INFO {
        min_depth_bounds: f32,
        max_depth_bounds: f32,
        stencil_read_mask: u32,
        stencil_write_mask: u32,
        stencil_front_ref: u32,
        stencil_back_ref: u32,
    }
}

// ── Shaders ─────────────────────────────────────────────────────────────────

extensible_struct! {
    ShaderModuleCreateInfo = SHADER_MODULE_CREATE_INFO {
        code: Blob,
        flags: u32,
    }
}

extensible_struct! {
    ShaderCreateInfo = SHADER_CREATE_INFO {
        name: Interned,
        flags: u32,
        module: ShaderModule,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpecializationMapEntry {
    pub constant_id: u32,
    pub offset: u32,
    pub size: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecializationInfo {
    pub map_entries: Vec<SpecializationMapEntry>,
    pub data: Blob,
}

extensible_struct! {
    PipelineShaderStageCreateInfo = PIPELINE_SHADER_STAGE_CREATE_INFO {
        stage: ShaderStage,
        shader: Shader,
        specialization_info: Option<Box<SpecializationInfo>>,
    }
}

// ── Pipeline state ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexInputBindingDescription {
    pub binding: u32,
    pub stride_in_bytes: u32,
    pub step_rate: VertexInputStepRate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexInputAttributeDescription {
    pub location: u32,
    pub binding: u32,
    pub format: Format,
    pub offset_in_bytes: u32,
}

extensible_struct! {
    PipelineVertexInputStateCreateInfo = PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO {
        bindings: Vec<VertexInputBindingDescription>,
        attributes: Vec<VertexInputAttributeDescription>,
    }
}

extensible_struct! {
    PipelineInputAssemblyStateCreateInfo = PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO {
        topology: PrimitiveTopology,
        primitive_restart_enable: bool,
    }
}

extensible_struct! {
    PipelineTessellationStateCreateInfo = PIPELINE_TESSELLATION_STATE_CREATE_INFO {
        patch_control_points: u32,
    }
}

extensible_struct! {
    PipelineViewportStateCreateInfo = PIPELINE_VIEWPORT_STATE_CREATE_INFO {
        viewport_count: u32,
    }
}

extensible_struct! {
    PipelineRasterStateCreateInfo = PIPELINE_RASTER_STATE_CREATE_INFO {
        depth_clip_enable: bool,
        rasterizer_discard_enable: bool,
        fill_mode: FillMode,
        cull_mode: CullMode,
        front_face: FrontFace,
    }
}

extensible_struct! {
    PipelineMultisampleStateCreateInfo = PIPELINE_MULTISAMPLE_STATE_CREATE_INFO {
        raster_samples: u32,
        sample_shading_enable: bool,
        min_sample_shading: f32,
        sample_mask: u32,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineColorBlendAttachmentState {
    pub blend_enable: bool,
    pub src_blend_color: Blend,
    pub dest_blend_color: Blend,
    pub blend_op_color: BlendOp,
    pub src_blend_alpha: Blend,
    pub dest_blend_alpha: Blend,
    pub blend_op_alpha: BlendOp,
    pub channel_write_mask: u32,
}

extensible_struct! {
    PipelineColorBlendStateCreateInfo = PIPELINE_COLOR_BLEND_STATE_CREATE_INFO {
        alpha_to_coverage_enable: bool,
        logic_op_enable: bool,
        logic_op: LogicOp,
        attachments: Vec<PipelineColorBlendAttachmentState>,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StencilOpState {
    pub stencil_fail_op: StencilOp,
    pub stencil_pass_op: StencilOp,
    pub stencil_depth_fail_op: StencilOp,
    pub stencil_compare_op: CompareOp,
}

extensible_struct! {
    PipelineDepthStencilStateCreateInfo = PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO {
        depth_test_enable: bool,
        depth_write_enable: bool,
        depth_compare_op: CompareOp,
        depth_bounds_enable: bool,
        stencil_test_enable: bool,
        front: StencilOpState,
        back: StencilOpState,
    }
}

extensible_struct! {
    GraphicsPipelineCreateInfo = GRAPHICS_PIPELINE_CREATE_INFO {
        flags: u32,
        layout: PipelineLayout,
        render_pass: RenderPass,
        subpass: u32,
        base_pipeline_handle: Pipeline,
        base_pipeline_index: i32,
        vertex_input_state: Option<Box<PipelineVertexInputStateCreateInfo>>,
        input_assembly_state: Option<Box<PipelineInputAssemblyStateCreateInfo>>,
        tessellation_state: Option<Box<PipelineTessellationStateCreateInfo>>,
        viewport_state: Option<Box<PipelineViewportStateCreateInfo>>,
        raster_state: Option<Box<PipelineRasterStateCreateInfo>>,
        multisample_state: Option<Box<PipelineMultisampleStateCreateInfo>>,
        depth_stencil_state: Option<Box<PipelineDepthStencilStateCreateInfo>>,
        color_blend_state: Option<Box<PipelineColorBlendStateCreateInfo>>,
        stages: Vec<PipelineShaderStageCreateInfo>,
    }
}

extensible_struct! {
    ComputePipelineCreateInfo = COMPUTE_PIPELINE_CREATE_INFO {
        cs: PipelineShaderStageCreateInfo,
        flags: u32,
        layout: PipelineLayout,
        base_pipeline_handle: Pipeline,
        base_pipeline_index: i32,
    }
}

extensible_struct! {
    PipelineCacheCreateInfo = PIPELINE_CACHE_CREATE_INFO {
        initial_data: Blob,
        max_size: u64,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushConstantRange {
    pub stage_flags: u32,
    pub start: u32,
    pub length: u32,
}

extensible_struct! {
    PipelineLayoutCreateInfo = PIPELINE_LAYOUT_CREATE_INFO {
        set_layouts: Vec<DescriptorSetLayout>,
        push_constant_ranges: Vec<PushConstantRange>,
    }
}

// ── Samplers and descriptors ────────────────────────────────────────────────

extensible_struct! {
    SamplerCreateInfo = SAMPLER_CREATE_INFO {
        min_filter: TexFilter,
        mag_filter: TexFilter,
        mip_mode: TexMipmapMode,
        address_u: TexAddress,
        address_v: TexAddress,
        address_w: TexAddress,
        mip_lod_bias: f32,
        max_anisotropy: f32,
        compare_op: CompareOp,
        min_lod: f32,
        max_lod: f32,
        border_color: BorderColor,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorSetLayoutBinding {
    pub descriptor_type: DescriptorType,
    pub array_size: u32,
    pub stage_flags: u32,
    /// Empty, or exactly `array_size` samplers.
    pub immutable_samplers: Vec<Sampler>,
}

extensible_struct! {
    DescriptorSetLayoutCreateInfo = DESCRIPTOR_SET_LAYOUT_CREATE_INFO {
        bindings: Vec<DescriptorSetLayoutBinding>,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorTypeCount {
    pub ty: DescriptorType,
    pub count: u32,
}

extensible_struct! {
    DescriptorPoolCreateInfo = DESCRIPTOR_POOL_CREATE_INFO {
        type_counts: Vec<DescriptorTypeCount>,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptorInfo {
    pub buffer_view: BufferView,
    pub sampler: Sampler,
    pub image_view: ImageView,
    pub attachment_view: AttachmentView,
    pub image_layout: ImageLayout,
}

extensible_struct! {
    WriteDescriptorSet = WRITE_DESCRIPTOR_SET {
        dest_set: DescriptorSet,
        dest_binding: u32,
        dest_array_element: u32,
        descriptor_type: DescriptorType,
        descriptors: Vec<DescriptorInfo>,
    }
}

extensible_struct! {
    CopyDescriptorSet = COPY_DESCRIPTOR_SET {
        src_set: DescriptorSet,
        src_binding: u32,
        src_array_element: u32,
        dest_set: DescriptorSet,
        dest_binding: u32,
        dest_array_element: u32,
        count: u32,
    }
}

// ── Command buffers, barriers and swap chains ───────────────────────────────

extensible_struct! {
    CmdBufferCreateInfo = CMD_BUFFER_CREATE_INFO {
        cmd_pool: CmdPool,
        level: CmdBufferLevel,
        flags: u32,
    }
}

extensible_struct! {
    CmdBufferBeginInfo = CMD_BUFFER_BEGIN_INFO {
        flags: u32,
        render_pass: RenderPass,
        framebuffer: Framebuffer,
    }
}

extensible_struct! {
    MemoryBarrier = MEMORY_BARRIER {
        output_mask: MemoryOutputFlags,
        input_mask: MemoryInputFlags,
    }
}

extensible_struct! {
    BufferMemoryBarrier = BUFFER_MEMORY_BARRIER {
        output_mask: MemoryOutputFlags,
        input_mask: MemoryInputFlags,
        src_queue_family_index: u32,
        dest_queue_family_index: u32,
        buffer: Buffer,
        offset: u64,
        size: u64,
    }
}

extensible_struct! {
    ImageMemoryBarrier = IMAGE_MEMORY_BARRIER {
        output_mask: MemoryOutputFlags,
        input_mask: MemoryInputFlags,
        old_layout: ImageLayout,
        new_layout: ImageLayout,
        src_queue_family_index: u32,
        dest_queue_family_index: u32,
        image: Image,
        subresource_range: ImageSubresourceRange,
    }
}

extensible_struct! {
    SwapChainCreateInfoWSI = SWAP_CHAIN_CREATE_INFO_WSI {
        min_image_count: u32,
        image_format: Format,
        image_extent: crate::types::Extent2D,
        image_usage_flags: u32,
        pre_transform: SurfaceTransformWSI,
        image_array_size: u32,
        present_mode: PresentModeWSI,
        clipped: bool,
    }
}
