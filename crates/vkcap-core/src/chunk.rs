//! The chunk catalogue: one chunk per object creation or recorded command.
//!
//! A creation chunk carries the id of the object it creates, so replay can
//! bind the new live handle to that id before any later chunk refers to it.

use vkcap_protocol::enums::{ImageLayout, RenderPassContents, TexFilter};
use vkcap_protocol::handle::{Buffer, CmdBuffer, Image, PipelineCache};
use vkcap_protocol::serialiser::{Result, Serialise, Serialiser};
use vkcap_protocol::types::ClearColorValue;
use vkcap_protocol::vulkan_structs::*;
use vkcap_protocol::{ResourceId, ResourceType};

macro_rules! create_chunk {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal, $id:ident: $id_name:literal, $info:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            pub $id: ResourceId,
            pub info: $info,
        }

        impl Serialise for $name {
            const TYPE_NAME: &'static str = $label;

            fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
                ser.declare_resource($id_name, &mut self.$id)?;
                ser.serialise("CreateInfo", &mut self.info)
            }
        }
    };
}

create_chunk!(CreateDevice, "vkCreateDevice", device: "Device", DeviceCreateInfo);
create_chunk!(AllocMemory, "vkAllocMemory", memory: "Memory", MemoryAllocInfo);
create_chunk!(CreateBuffer, "vkCreateBuffer", buffer: "Buffer", BufferCreateInfo);
create_chunk!(CreateBufferView, "vkCreateBufferView", view: "View", BufferViewCreateInfo);
create_chunk!(CreateImage, "vkCreateImage", image: "Image", ImageCreateInfo);
create_chunk!(CreateImageView, "vkCreateImageView", view: "View", ImageViewCreateInfo);
create_chunk!(
    CreateAttachmentView,
    "vkCreateAttachmentView",
    view: "View",
    AttachmentViewCreateInfo
);
create_chunk!(
    CreateShaderModule,
    "vkCreateShaderModule",
    module: "Module",
    ShaderModuleCreateInfo
);
create_chunk!(CreateShader, "vkCreateShader", shader: "Shader", ShaderCreateInfo);
create_chunk!(
    CreatePipelineCache,
    "vkCreatePipelineCache",
    cache: "Cache",
    PipelineCacheCreateInfo
);
create_chunk!(
    CreatePipelineLayout,
    "vkCreatePipelineLayout",
    layout: "Layout",
    PipelineLayoutCreateInfo
);
create_chunk!(CreateSampler, "vkCreateSampler", sampler: "Sampler", SamplerCreateInfo);
create_chunk!(
    CreateDescriptorSetLayout,
    "vkCreateDescriptorSetLayout",
    layout: "Layout",
    DescriptorSetLayoutCreateInfo
);
create_chunk!(
    CreateDescriptorPool,
    "vkCreateDescriptorPool",
    pool: "Pool",
    DescriptorPoolCreateInfo
);
create_chunk!(
    CreateDynamicViewportState,
    "vkCreateDynamicViewportState",
    state: "State",
    DynamicViewportStateCreateInfo
);
create_chunk!(
    CreateDynamicRasterState,
    "vkCreateDynamicRasterState",
    state: "State",
    DynamicRasterStateCreateInfo
);
create_chunk!(
    CreateDynamicColorBlendState,
    "vkCreateDynamicColorBlendState",
    state: "State",
    DynamicColorBlendStateCreateInfo
);
create_chunk!(
    CreateDynamicDepthStencilState,
    "vkCreateDynamicDepthStencilState",
    state: "State",
    DynamicDepthStencilStateCreateInfo
);
create_chunk!(
    CreateRenderPass,
    "vkCreateRenderPass",
    render_pass: "RenderPass",
    RenderPassCreateInfo
);
create_chunk!(
    CreateFramebuffer,
    "vkCreateFramebuffer",
    framebuffer: "Framebuffer",
    FramebufferCreateInfo
);
create_chunk!(
    CreateCommandBuffer,
    "vkCreateCommandBuffer",
    cmd_buffer: "CmdBuffer",
    CmdBufferCreateInfo
);
create_chunk!(
    CreateSwapChain,
    "vkCreateSwapChainWSI",
    swap_chain: "SwapChain",
    SwapChainCreateInfoWSI
);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateGraphicsPipeline {
    pub cache: PipelineCache,
    pub pipeline: ResourceId,
    pub info: GraphicsPipelineCreateInfo,
}

impl Serialise for CreateGraphicsPipeline {
    const TYPE_NAME: &'static str = "vkCreateGraphicsPipeline";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("pipelineCache", &mut self.cache)?;
        ser.declare_resource("Pipeline", &mut self.pipeline)?;
        ser.serialise("CreateInfo", &mut self.info)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateComputePipeline {
    pub cache: PipelineCache,
    pub pipeline: ResourceId,
    pub info: ComputePipelineCreateInfo,
}

impl Serialise for CreateComputePipeline {
    const TYPE_NAME: &'static str = "vkCreateComputePipeline";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("pipelineCache", &mut self.cache)?;
        ser.declare_resource("Pipeline", &mut self.pipeline)?;
        ser.serialise("CreateInfo", &mut self.info)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreateCmdPool {
    pub cmd_pool: ResourceId,
    pub queue_family_index: u32,
    pub flags: u32,
}

impl Serialise for CreateCmdPool {
    const TYPE_NAME: &'static str = "vkCreateCommandPool";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.declare_resource("CmdPool", &mut self.cmd_pool)?;
        ser.value("queueFamilyIndex", &mut self.queue_family_index)?;
        ser.value("flags", &mut self.flags)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateDescriptorSets {
    pub writes: Vec<WriteDescriptorSet>,
    pub copies: Vec<CopyDescriptorSet>,
}

impl Serialise for UpdateDescriptorSets {
    const TYPE_NAME: &'static str = "vkUpdateDescriptorSets";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.array("writeCount", "pDescriptorWrites", &mut self.writes)?;
        ser.array("copyCount", "pDescriptorCopies", &mut self.copies)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeginCommandBuffer {
    pub cmd_buffer: CmdBuffer,
    pub info: CmdBufferBeginInfo,
}

impl Serialise for BeginCommandBuffer {
    const TYPE_NAME: &'static str = "vkBeginCommandBuffer";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.serialise("BeginInfo", &mut self.info)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdBeginRenderPass {
    pub cmd_buffer: CmdBuffer,
    pub info: RenderPassBeginInfo,
    pub contents: RenderPassContents,
}

impl Serialise for CmdBeginRenderPass {
    const TYPE_NAME: &'static str = "vkCmdBeginRenderPass";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.serialise("BeginInfo", &mut self.info)?;
        ser.value("contents", &mut self.contents)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdPipelineBarrier {
    pub cmd_buffer: CmdBuffer,
    pub src_stage_mask: u32,
    pub dest_stage_mask: u32,
    pub by_region: bool,
    pub memory_barriers: Vec<MemoryBarrier>,
    pub buffer_barriers: Vec<BufferMemoryBarrier>,
    pub image_barriers: Vec<ImageMemoryBarrier>,
}

impl Serialise for CmdPipelineBarrier {
    const TYPE_NAME: &'static str = "vkCmdPipelineBarrier";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.value("srcStageMask", &mut self.src_stage_mask)?;
        ser.value("destStageMask", &mut self.dest_stage_mask)?;
        ser.value("byRegion", &mut self.by_region)?;
        ser.array("memBarrierCount", "memBarriers", &mut self.memory_barriers)?;
        ser.array("bufBarrierCount", "bufBarriers", &mut self.buffer_barriers)?;
        ser.array("imgBarrierCount", "imgBarriers", &mut self.image_barriers)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdCopyBuffer {
    pub cmd_buffer: CmdBuffer,
    pub src_buffer: Buffer,
    pub dest_buffer: Buffer,
    pub regions: Vec<BufferCopy>,
}

impl Serialise for CmdCopyBuffer {
    const TYPE_NAME: &'static str = "vkCmdCopyBuffer";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("srcBuffer", &mut self.src_buffer)?;
        ser.handle("destBuffer", &mut self.dest_buffer)?;
        ser.array("regionCount", "pRegions", &mut self.regions)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdCopyImage {
    pub cmd_buffer: CmdBuffer,
    pub src_image: Image,
    pub src_layout: ImageLayout,
    pub dest_image: Image,
    pub dest_layout: ImageLayout,
    pub regions: Vec<ImageCopy>,
}

impl Serialise for CmdCopyImage {
    const TYPE_NAME: &'static str = "vkCmdCopyImage";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("srcImage", &mut self.src_image)?;
        ser.value("srcImageLayout", &mut self.src_layout)?;
        ser.handle("destImage", &mut self.dest_image)?;
        ser.value("destImageLayout", &mut self.dest_layout)?;
        ser.array("regionCount", "pRegions", &mut self.regions)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdBlitImage {
    pub cmd_buffer: CmdBuffer,
    pub src_image: Image,
    pub src_layout: ImageLayout,
    pub dest_image: Image,
    pub dest_layout: ImageLayout,
    pub regions: Vec<ImageBlit>,
    pub filter: TexFilter,
}

impl Serialise for CmdBlitImage {
    const TYPE_NAME: &'static str = "vkCmdBlitImage";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("srcImage", &mut self.src_image)?;
        ser.value("srcImageLayout", &mut self.src_layout)?;
        ser.handle("destImage", &mut self.dest_image)?;
        ser.value("destImageLayout", &mut self.dest_layout)?;
        ser.array("regionCount", "pRegions", &mut self.regions)?;
        ser.value("filter", &mut self.filter)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdResolveImage {
    pub cmd_buffer: CmdBuffer,
    pub src_image: Image,
    pub src_layout: ImageLayout,
    pub dest_image: Image,
    pub dest_layout: ImageLayout,
    pub regions: Vec<ImageResolve>,
}

impl Serialise for CmdResolveImage {
    const TYPE_NAME: &'static str = "vkCmdResolveImage";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("srcImage", &mut self.src_image)?;
        ser.value("srcImageLayout", &mut self.src_layout)?;
        ser.handle("destImage", &mut self.dest_image)?;
        ser.value("destImageLayout", &mut self.dest_layout)?;
        ser.array("regionCount", "pRegions", &mut self.regions)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdCopyBufferToImage {
    pub cmd_buffer: CmdBuffer,
    pub src_buffer: Buffer,
    pub dest_image: Image,
    pub dest_layout: ImageLayout,
    pub regions: Vec<BufferImageCopy>,
}

impl Serialise for CmdCopyBufferToImage {
    const TYPE_NAME: &'static str = "vkCmdCopyBufferToImage";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("srcBuffer", &mut self.src_buffer)?;
        ser.handle("destImage", &mut self.dest_image)?;
        ser.value("destImageLayout", &mut self.dest_layout)?;
        ser.array("regionCount", "pRegions", &mut self.regions)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CmdClearColorImage {
    pub cmd_buffer: CmdBuffer,
    pub image: Image,
    pub layout: ImageLayout,
    pub color: ClearColorValue,
    pub ranges: Vec<ImageSubresourceRange>,
}

impl Serialise for CmdClearColorImage {
    const TYPE_NAME: &'static str = "vkCmdClearColorImage";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("cmdBuffer", &mut self.cmd_buffer)?;
        ser.handle("image", &mut self.image)?;
        ser.value("imageLayout", &mut self.layout)?;
        ser.serialise("Color", &mut self.color)?;
        ser.array("rangeCount", "pRanges", &mut self.ranges)
    }
}

macro_rules! capture_chunks {
    (@created $c:ident) => { None };
    (@created $c:ident, $field:ident, $kind:ident) => {
        Some(($c.$field, ResourceType::$kind))
    };
    ($($code:literal => $name:ident $(creates $field:ident: $kind:ident)?,)*) => {
        /// Chunk type code as stored in the chunk frame header.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u32)]
        pub enum ChunkType {
            $($name = $code,)*
        }

        impl ChunkType {
            pub const ALL: &'static [ChunkType] = &[$(ChunkType::$name),*];

            pub fn code(self) -> u32 {
                self as u32
            }

            pub fn from_code(code: u32) -> Option<Self> {
                match code {
                    $($code => Some(ChunkType::$name),)*
                    _ => None,
                }
            }

            /// The API entry point the chunk records.
            pub fn name(self) -> &'static str {
                match self {
                    $(ChunkType::$name => <$name as Serialise>::TYPE_NAME,)*
                }
            }
        }

        #[derive(Debug, Clone, PartialEq)]
        pub enum CaptureChunk {
            $($name($name),)*
        }

        impl CaptureChunk {
            pub fn chunk_type(&self) -> ChunkType {
                match self {
                    $(CaptureChunk::$name(_) => ChunkType::$name,)*
                }
            }

            /// The id this chunk creates, with the type of its object.
            pub fn created(&self) -> Option<(ResourceId, ResourceType)> {
                match self {
                    $(CaptureChunk::$name(_c) => capture_chunks!(@created _c $(, $field, $kind)?),)*
                }
            }

            pub fn serialise_into(&mut self, ser: &mut Serialiser) -> Result<()> {
                match self {
                    $(CaptureChunk::$name(c) => ser.serialise("chunk", c),)*
                }
            }

            /// Decode one chunk of the given type. In inspecting mode the
            /// decoded value only carries unresolved handles.
            pub fn read_from(chunk_type: ChunkType, ser: &mut Serialiser) -> Result<Self> {
                match chunk_type {
                    $(ChunkType::$name => ser.read::<$name>("chunk").map(CaptureChunk::$name),)*
                }
            }
        }

        $(
            impl From<$name> for CaptureChunk {
                fn from(chunk: $name) -> Self {
                    CaptureChunk::$name(chunk)
                }
            }
        )*
    };
}

capture_chunks! {
    0x0001 => CreateDevice creates device: Device,
    0x0002 => AllocMemory creates memory: DeviceMemory,
    0x0003 => CreateBuffer creates buffer: Buffer,
    0x0004 => CreateBufferView creates view: BufferView,
    0x0005 => CreateImage creates image: Image,
    0x0006 => CreateImageView creates view: ImageView,
    0x0007 => CreateAttachmentView creates view: AttachmentView,
    0x0008 => CreateShaderModule creates module: ShaderModule,
    0x0009 => CreateShader creates shader: Shader,
    0x000a => CreatePipelineCache creates cache: PipelineCache,
    0x000b => CreatePipelineLayout creates layout: PipelineLayout,
    0x000c => CreateGraphicsPipeline creates pipeline: Pipeline,
    0x000d => CreateComputePipeline creates pipeline: Pipeline,
    0x000e => CreateSampler creates sampler: Sampler,
    0x000f => CreateDescriptorSetLayout creates layout: DescriptorSetLayout,
    0x0010 => CreateDescriptorPool creates pool: DescriptorPool,
    0x0011 => CreateDynamicViewportState creates state: DynamicViewportState,
    0x0012 => CreateDynamicRasterState creates state: DynamicRasterState,
    0x0013 => CreateDynamicColorBlendState creates state: DynamicColorBlendState,
    0x0014 => CreateDynamicDepthStencilState creates state: DynamicDepthStencilState,
    0x0015 => CreateRenderPass creates render_pass: RenderPass,
    0x0016 => CreateFramebuffer creates framebuffer: Framebuffer,
    0x0017 => CreateCmdPool creates cmd_pool: CmdPool,
    0x0018 => CreateCommandBuffer creates cmd_buffer: CmdBuffer,
    0x0019 => CreateSwapChain creates swap_chain: SwapChain,
    0x0100 => UpdateDescriptorSets,
    0x0101 => BeginCommandBuffer,
    0x0102 => CmdBeginRenderPass,
    0x0103 => CmdPipelineBarrier,
    0x0104 => CmdCopyBuffer,
    0x0105 => CmdCopyImage,
    0x0106 => CmdBlitImage,
    0x0107 => CmdResolveImage,
    0x0108 => CmdCopyBufferToImage,
    0x0109 => CmdClearColorImage,
}
