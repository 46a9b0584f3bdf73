//! API enumerations. Raw values match the header revision the capture
//! format was defined against; unknown values are preserved as-is.

use crate::stringify::vk_enum;

vk_enum! {
    PipelineBindPoint, fallback = "VkPipelineBindPoint" {
        COMPUTE = 0 => "VK_PIPELINE_BIND_POINT_COMPUTE",
        GRAPHICS = 1 => "VK_PIPELINE_BIND_POINT_GRAPHICS",
    }
}

vk_enum! {
    IndexType, fallback = "VkIndexType" {
        UINT16 = 0 => "VK_INDEX_TYPE_UINT16",
        UINT32 = 1 => "VK_INDEX_TYPE_UINT32",
    }
}

vk_enum! {
    TimestampType, fallback = "VkTimestampType" {
        TOP = 0 => "VK_TIMESTAMP_TYPE_TOP",
        BOTTOM = 1 => "VK_TIMESTAMP_TYPE_BOTTOM",
    }
}

vk_enum! {
    ImageType, fallback = "VkImageType" {
        TYPE_1D = 0 => "VK_IMAGE_TYPE_1D",
        TYPE_2D = 1 => "VK_IMAGE_TYPE_2D",
        TYPE_3D = 2 => "VK_IMAGE_TYPE_3D",
    }
}

vk_enum! {
    ImageTiling, fallback = "VkImageTiling" {
        LINEAR = 0 => "VK_IMAGE_TILING_LINEAR",
        OPTIMAL = 1 => "VK_IMAGE_TILING_OPTIMAL",
    }
}

vk_enum! {
    ImageViewType, fallback = "VkImageViewType" {
        TYPE_1D = 0 => "VK_IMAGE_VIEW_TYPE_1D",
        TYPE_2D = 1 => "VK_IMAGE_VIEW_TYPE_2D",
        TYPE_3D = 2 => "VK_IMAGE_VIEW_TYPE_3D",
        CUBE = 3 => "VK_IMAGE_VIEW_TYPE_CUBE",
    }
}

vk_enum! {
    VertexInputStepRate, fallback = "VkVertexInputStepRate" {
        VERTEX = 0 => "VK_VERTEX_INPUT_STEP_RATE_VERTEX",
        INSTANCE = 1 => "VK_VERTEX_INPUT_STEP_RATE_INSTANCE",
    }
}

vk_enum! {
    FillMode, fallback = "VkFillMode" {
        POINTS = 0 => "VK_FILL_MODE_POINTS",
        WIREFRAME = 1 => "VK_FILL_MODE_WIREFRAME",
        SOLID = 2 => "VK_FILL_MODE_SOLID",
    }
}

vk_enum! {
    CullMode, fallback = "VkCullMode" {
        NONE = 0 => "VK_CULL_MODE_NONE",
        FRONT = 1 => "VK_CULL_MODE_FRONT",
        BACK = 2 => "VK_CULL_MODE_BACK",
        FRONT_AND_BACK = 3 => "VK_CULL_MODE_FRONT_AND_BACK",
    }
}

vk_enum! {
    FrontFace, fallback = "VkFrontFace" {
        CCW = 0 => "VK_FRONT_FACE_CCW",
        CW = 1 => "VK_FRONT_FACE_CW",
    }
}

vk_enum! {
    /// Blend factor.
    Blend, fallback = "VkBlend" {
        ZERO = 0 => "VK_BLEND_ZERO",
        ONE = 1 => "VK_BLEND_ONE",
        SRC_COLOR = 2 => "VK_BLEND_SRC_COLOR",
        ONE_MINUS_SRC_COLOR = 3 => "VK_BLEND_ONE_MINUS_SRC_COLOR",
        DEST_COLOR = 4 => "VK_BLEND_DEST_COLOR",
        ONE_MINUS_DEST_COLOR = 5 => "VK_BLEND_ONE_MINUS_DEST_COLOR",
        SRC_ALPHA = 6 => "VK_BLEND_SRC_ALPHA",
        ONE_MINUS_SRC_ALPHA = 7 => "VK_BLEND_ONE_MINUS_SRC_ALPHA",
        DEST_ALPHA = 8 => "VK_BLEND_DEST_ALPHA",
        ONE_MINUS_DEST_ALPHA = 9 => "VK_BLEND_ONE_MINUS_DEST_ALPHA",
        CONSTANT_COLOR = 10 => "VK_BLEND_CONSTANT_COLOR",
        ONE_MINUS_CONSTANT_COLOR = 11 => "VK_BLEND_ONE_MINUS_CONSTANT_COLOR",
        CONSTANT_ALPHA = 12 => "VK_BLEND_CONSTANT_ALPHA",
        ONE_MINUS_CONSTANT_ALPHA = 13 => "VK_BLEND_ONE_MINUS_CONSTANT_ALPHA",
        SRC_ALPHA_SATURATE = 14 => "VK_BLEND_SRC_ALPHA_SATURATE",
        SRC1_COLOR = 15 => "VK_BLEND_SRC1_COLOR",
        ONE_MINUS_SRC1_COLOR = 16 => "VK_BLEND_ONE_MINUS_SRC1_COLOR",
        SRC1_ALPHA = 17 => "VK_BLEND_SRC1_ALPHA",
        ONE_MINUS_SRC1_ALPHA = 18 => "VK_BLEND_ONE_MINUS_SRC1_ALPHA",
    }
}

vk_enum! {
    BlendOp, fallback = "VkBlendOp" {
        ADD = 0 => "VK_BLEND_OP_ADD",
        SUBTRACT = 1 => "VK_BLEND_OP_SUBTRACT",
        REVERSE_SUBTRACT = 2 => "VK_BLEND_OP_REVERSE_SUBTRACT",
        MIN = 3 => "VK_BLEND_OP_MIN",
        MAX = 4 => "VK_BLEND_OP_MAX",
    }
}

vk_enum! {
    StencilOp, fallback = "VkStencilOp" {
        KEEP = 0 => "VK_STENCIL_OP_KEEP",
        ZERO = 1 => "VK_STENCIL_OP_ZERO",
        REPLACE = 2 => "VK_STENCIL_OP_REPLACE",
        INC_CLAMP = 3 => "VK_STENCIL_OP_INC_CLAMP",
        DEC_CLAMP = 4 => "VK_STENCIL_OP_DEC_CLAMP",
        INVERT = 5 => "VK_STENCIL_OP_INVERT",
        INC_WRAP = 6 => "VK_STENCIL_OP_INC_WRAP",
        DEC_WRAP = 7 => "VK_STENCIL_OP_DEC_WRAP",
    }
}

vk_enum! {
    LogicOp, fallback = "VkLogicOp" {
        COPY = 3 => "VK_LOGIC_OP_COPY",
        CLEAR = 0 => "VK_LOGIC_OP_CLEAR",
        AND = 1 => "VK_LOGIC_OP_AND",
        AND_REVERSE = 2 => "VK_LOGIC_OP_AND_REVERSE",
        AND_INVERTED = 4 => "VK_LOGIC_OP_AND_INVERTED",
        NOOP = 5 => "VK_LOGIC_OP_NOOP",
        XOR = 6 => "VK_LOGIC_OP_XOR",
        OR = 7 => "VK_LOGIC_OP_OR",
        NOR = 8 => "VK_LOGIC_OP_NOR",
        EQUIV = 9 => "VK_LOGIC_OP_EQUIV",
        INVERT = 10 => "VK_LOGIC_OP_INVERT",
        OR_REVERSE = 11 => "VK_LOGIC_OP_OR_REVERSE",
        COPY_INVERTED = 12 => "VK_LOGIC_OP_COPY_INVERTED",
        OR_INVERTED = 13 => "VK_LOGIC_OP_OR_INVERTED",
        NAND = 14 => "VK_LOGIC_OP_NAND",
        SET = 15 => "VK_LOGIC_OP_SET",
    }
}

vk_enum! {
    CompareOp, fallback = "VkCompareOp" {
        NEVER = 0 => "VK_COMPARE_OP_NEVER",
        LESS = 1 => "VK_COMPARE_OP_LESS",
        EQUAL = 2 => "VK_COMPARE_OP_EQUAL",
        LESS_EQUAL = 3 => "VK_COMPARE_OP_LESS_EQUAL",
        GREATER = 4 => "VK_COMPARE_OP_GREATER",
        NOT_EQUAL = 5 => "VK_COMPARE_OP_NOT_EQUAL",
        GREATER_EQUAL = 6 => "VK_COMPARE_OP_GREATER_EQUAL",
        ALWAYS = 7 => "VK_COMPARE_OP_ALWAYS",
    }
}

vk_enum! {
    TexFilter, fallback = "VkTexFilter" {
        NEAREST = 0 => "VK_TEX_FILTER_NEAREST",
        LINEAR = 1 => "VK_TEX_FILTER_LINEAR",
    }
}

vk_enum! {
    TexMipmapMode, fallback = "VkTexMipmapMode" {
        BASE = 0 => "VK_TEX_MIPMAP_MODE_BASE",
        NEAREST = 1 => "VK_TEX_MIPMAP_MODE_NEAREST",
        LINEAR = 2 => "VK_TEX_MIPMAP_MODE_LINEAR",
    }
}

vk_enum! {
    TexAddress, fallback = "VkTexAddress" {
        WRAP = 0 => "VK_TEX_ADDRESS_WRAP",
        MIRROR = 1 => "VK_TEX_ADDRESS_MIRROR",
        CLAMP = 2 => "VK_TEX_ADDRESS_CLAMP",
        MIRROR_ONCE = 3 => "VK_TEX_ADDRESS_MIRROR_ONCE",
        CLAMP_BORDER = 4 => "VK_TEX_ADDRESS_CLAMP_BORDER",
    }
}

vk_enum! {
    BorderColor, fallback = "VkBorderColor" {
        FLOAT_TRANSPARENT_BLACK = 0 => "VK_BORDER_COLOR_FLOAT_TRANSPARENT_BLACK",
        INT_TRANSPARENT_BLACK = 1 => "VK_BORDER_COLOR_INT_TRANSPARENT_BLACK",
        FLOAT_OPAQUE_BLACK = 2 => "VK_BORDER_COLOR_FLOAT_OPAQUE_BLACK",
        INT_OPAQUE_BLACK = 3 => "VK_BORDER_COLOR_INT_OPAQUE_BLACK",
        FLOAT_OPAQUE_WHITE = 4 => "VK_BORDER_COLOR_FLOAT_OPAQUE_WHITE",
        INT_OPAQUE_WHITE = 5 => "VK_BORDER_COLOR_INT_OPAQUE_WHITE",
    }
}

vk_enum! {
    ImageAspect, fallback = "VkImageAspect" {
        COLOR = 0 => "VK_IMAGE_ASPECT_COLOR",
        DEPTH = 1 => "VK_IMAGE_ASPECT_DEPTH",
        STENCIL = 2 => "VK_IMAGE_ASPECT_STENCIL",
    }
}

vk_enum! {
    PrimitiveTopology, fallback = "VkPrimitiveTopology" {
        POINT_LIST = 0 => "VK_PRIMITIVE_TOPOLOGY_POINT_LIST",
        LINE_LIST = 1 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST",
        LINE_STRIP = 2 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP",
        TRIANGLE_LIST = 3 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        TRIANGLE_STRIP = 4 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP",
        TRIANGLE_FAN = 5 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_FAN",
        LINE_LIST_ADJ = 6 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST_ADJ",
        LINE_STRIP_ADJ = 7 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP_ADJ",
        TRIANGLE_LIST_ADJ = 8 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST_ADJ",
        TRIANGLE_STRIP_ADJ = 9 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP_ADJ",
        PATCH = 10 => "VK_PRIMITIVE_TOPOLOGY_PATCH",
    }
}

vk_enum! {
    DescriptorType, fallback = "VkDescriptorType" {
        SAMPLER = 0 => "VK_DESCRIPTOR_TYPE_SAMPLER",
        COMBINED_IMAGE_SAMPLER = 1 => "VK_DESCRIPTOR_TYPE_COMBINED_IMAGE_SAMPLER",
        SAMPLED_IMAGE = 2 => "VK_DESCRIPTOR_TYPE_SAMPLED_IMAGE",
        STORAGE_IMAGE = 3 => "VK_DESCRIPTOR_TYPE_STORAGE_IMAGE",
        UNIFORM_TEXEL_BUFFER = 4 => "VK_DESCRIPTOR_TYPE_UNIFORM_TEXEL_BUFFER",
        STORAGE_TEXEL_BUFFER = 5 => "VK_DESCRIPTOR_TYPE_STORAGE_TEXEL_BUFFER",
        UNIFORM_BUFFER = 6 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER",
        STORAGE_BUFFER = 7 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER",
        UNIFORM_BUFFER_DYNAMIC = 8 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER_DYNAMIC",
        STORAGE_BUFFER_DYNAMIC = 9 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER_DYNAMIC",
        INPUT_ATTACHMENT = 10 => "VK_DESCRIPTOR_TYPE_INPUT_ATTACHMENT",
    }
}

vk_enum! {
    DescriptorPoolUsage, fallback = "VkDescriptorPoolUsage" {
        ONE_SHOT = 0 => "VK_DESCRIPTOR_POOL_USAGE_ONE_SHOT",
        DYNAMIC = 1 => "VK_DESCRIPTOR_POOL_USAGE_DYNAMIC",
    }
}

vk_enum! {
    DescriptorSetUsage, fallback = "VkDescriptorSetUsage" {
        ONE_SHOT = 0 => "VK_DESCRIPTOR_SET_USAGE_ONE_SHOT",
        STATIC = 1 => "VK_DESCRIPTOR_SET_USAGE_STATIC",
    }
}

vk_enum! {
    BufferViewType, fallback = "VkBufferViewType" {
        RAW = 0 => "VK_BUFFER_VIEW_TYPE_RAW",
        FORMATTED = 1 => "VK_BUFFER_VIEW_TYPE_FORMATTED",
    }
}

vk_enum! {
    CmdBufferLevel, fallback = "VkCmdBufferLevel" {
        PRIMARY = 0 => "VK_CMD_BUFFER_LEVEL_PRIMARY",
        SECONDARY = 1 => "VK_CMD_BUFFER_LEVEL_SECONDARY",
    }
}

vk_enum! {
    RenderPassContents, fallback = "VkRenderPassContents" {
        INLINE = 0 => "VK_RENDER_PASS_CONTENTS_INLINE",
        SECONDARY_CMD_BUFFERS = 1 => "VK_RENDER_PASS_CONTENTS_SECONDARY_CMD_BUFFERS",
    }
}

vk_enum! {
    ImageLayout, fallback = "VkImageLayout" {
        UNDEFINED = 0 => "VK_IMAGE_LAYOUT_UNDEFINED",
        GENERAL = 1 => "VK_IMAGE_LAYOUT_GENERAL",
        COLOR_ATTACHMENT_OPTIMAL = 2 => "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_ATTACHMENT_OPTIMAL = 3 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_READ_ONLY_OPTIMAL = 4 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_READ_ONLY_OPTIMAL",
        SHADER_READ_ONLY_OPTIMAL = 5 => "VK_IMAGE_LAYOUT_SHADER_READ_ONLY_OPTIMAL",
        TRANSFER_SOURCE_OPTIMAL = 6 => "VK_IMAGE_LAYOUT_TRANSFER_SOURCE_OPTIMAL",
        TRANSFER_DESTINATION_OPTIMAL = 7 => "VK_IMAGE_LAYOUT_TRANSFER_DESTINATION_OPTIMAL",
        PRESENT_SOURCE_WSI = 1000001002 => "VK_IMAGE_LAYOUT_PRESENT_SOURCE_WSI",
    }
}

vk_enum! {
    /// Type tag carried by every extensible structure.
    StructureType, fallback = "VkStructureType" {
        APPLICATION_INFO = 0 => "VK_STRUCTURE_TYPE_APPLICATION_INFO",
        DEVICE_CREATE_INFO = 1 => "VK_STRUCTURE_TYPE_DEVICE_CREATE_INFO",
        MEMORY_ALLOC_INFO = 2 => "VK_STRUCTURE_TYPE_MEMORY_ALLOC_INFO",
        IMAGE_VIEW_CREATE_INFO = 3 => "VK_STRUCTURE_TYPE_IMAGE_VIEW_CREATE_INFO",
        ATTACHMENT_VIEW_CREATE_INFO = 4 => "VK_STRUCTURE_TYPE_ATTACHMENT_VIEW_CREATE_INFO",
        SHADER_MODULE_CREATE_INFO = 5 => "VK_STRUCTURE_TYPE_SHADER_MODULE_CREATE_INFO",
        SHADER_CREATE_INFO = 6 => "VK_STRUCTURE_TYPE_SHADER_CREATE_INFO",
        COMPUTE_PIPELINE_CREATE_INFO = 7 => "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO",
        SAMPLER_CREATE_INFO = 8 => "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO",
        DESCRIPTOR_SET_LAYOUT_CREATE_INFO = 9 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
        DYNAMIC_VIEWPORT_STATE_CREATE_INFO = 10 => "VK_STRUCTURE_TYPE_DYNAMIC_VIEWPORT_STATE_CREATE_INFO",
        DYNAMIC_RASTER_STATE_CREATE_INFO = 11 => "VK_STRUCTURE_TYPE_DYNAMIC_RASTER_STATE_CREATE_INFO",
        DYNAMIC_COLOR_BLEND_STATE_CREATE_INFO = 12 => "VK_STRUCTURE_TYPE_DYNAMIC_COLOR_BLEND_STATE_CREATE_INFO",
        DYNAMIC_DEPTH_STENCIL_STATE_CREATE_INFO = 13 => "VK_STRUCTURE_TYPE_DYNAMIC_DEPTH_STENCIL_STATE_CREATE_INFO",
        CMD_BUFFER_CREATE_INFO = 14 => "VK_STRUCTURE_TYPE_CMD_BUFFER_CREATE_INFO",
        EVENT_CREATE_INFO = 15 => "VK_STRUCTURE_TYPE_EVENT_CREATE_INFO",
        FENCE_CREATE_INFO = 16 => "VK_STRUCTURE_TYPE_FENCE_CREATE_INFO",
        SEMAPHORE_CREATE_INFO = 17 => "VK_STRUCTURE_TYPE_SEMAPHORE_CREATE_INFO",
        QUERY_POOL_CREATE_INFO = 18 => "VK_STRUCTURE_TYPE_QUERY_POOL_CREATE_INFO",
        PIPELINE_SHADER_STAGE_CREATE_INFO = 19 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
        GRAPHICS_PIPELINE_CREATE_INFO = 20 => "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
        PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO = 21 => "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
        PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO = 22 => "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
        PIPELINE_TESSELLATION_STATE_CREATE_INFO = 23 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_STATE_CREATE_INFO",
        PIPELINE_VIEWPORT_STATE_CREATE_INFO = 24 => "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO",
        PIPELINE_RASTER_STATE_CREATE_INFO = 25 => "VK_STRUCTURE_TYPE_PIPELINE_RASTER_STATE_CREATE_INFO",
        PIPELINE_MULTISAMPLE_STATE_CREATE_INFO = 26 => "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
        PIPELINE_COLOR_BLEND_STATE_CREATE_INFO = 27 => "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
        PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO = 28 => "VK_STRUCTURE_TYPE_PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO",
        IMAGE_CREATE_INFO = 29 => "VK_STRUCTURE_TYPE_IMAGE_CREATE_INFO",
        BUFFER_CREATE_INFO = 30 => "VK_STRUCTURE_TYPE_BUFFER_CREATE_INFO",
        BUFFER_VIEW_CREATE_INFO = 31 => "VK_STRUCTURE_TYPE_BUFFER_VIEW_CREATE_INFO",
        FRAMEBUFFER_CREATE_INFO = 32 => "VK_STRUCTURE_TYPE_FRAMEBUFFER_CREATE_INFO",
        CMD_BUFFER_BEGIN_INFO = 33 => "VK_STRUCTURE_TYPE_CMD_BUFFER_BEGIN_INFO",
        RENDER_PASS_CREATE_INFO = 34 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO",
        MEMORY_BARRIER = 35 => "VK_STRUCTURE_TYPE_MEMORY_BARRIER",
        BUFFER_MEMORY_BARRIER = 36 => "VK_STRUCTURE_TYPE_BUFFER_MEMORY_BARRIER",
        IMAGE_MEMORY_BARRIER = 37 => "VK_STRUCTURE_TYPE_IMAGE_MEMORY_BARRIER",
        DESCRIPTOR_POOL_CREATE_INFO = 38 => "VK_STRUCTURE_TYPE_DESCRIPTOR_POOL_CREATE_INFO",
        WRITE_DESCRIPTOR_SET = 39 => "VK_STRUCTURE_TYPE_WRITE_DESCRIPTOR_SET",
        COPY_DESCRIPTOR_SET = 40 => "VK_STRUCTURE_TYPE_COPY_DESCRIPTOR_SET",
        INSTANCE_CREATE_INFO = 41 => "VK_STRUCTURE_TYPE_INSTANCE_CREATE_INFO",
        PIPELINE_LAYOUT_CREATE_INFO = 42 => "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
        MAPPED_MEMORY_RANGE = 43 => "VK_STRUCTURE_TYPE_MAPPED_MEMORY_RANGE",
        PIPELINE_CACHE_CREATE_INFO = 44 => "VK_STRUCTURE_TYPE_PIPELINE_CACHE_CREATE_INFO",
        ATTACHMENT_DESCRIPTION = 45 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION",
        SUBPASS_DESCRIPTION = 46 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION",
        SUBPASS_DEPENDENCY = 47 => "VK_STRUCTURE_TYPE_SUBPASS_DEPENDENCY",
        RENDER_PASS_BEGIN_INFO = 48 => "VK_STRUCTURE_TYPE_RENDER_PASS_BEGIN_INFO",
        CMD_POOL_CREATE_INFO = 49 => "VK_STRUCTURE_TYPE_CMD_POOL_CREATE_INFO",
        SWAP_CHAIN_CREATE_INFO_WSI = 1000001000 => "VK_STRUCTURE_TYPE_SWAP_CHAIN_CREATE_INFO_WSI",
    }
}

vk_enum! {
    ChannelSwizzle, fallback = "VkChannelSwizzle" {
        ZERO = 0 => "VK_CHANNEL_SWIZZLE_ZERO",
        ONE = 1 => "VK_CHANNEL_SWIZZLE_ONE",
        R = 2 => "VK_CHANNEL_SWIZZLE_R",
        G = 3 => "VK_CHANNEL_SWIZZLE_G",
        B = 4 => "VK_CHANNEL_SWIZZLE_B",
        A = 5 => "VK_CHANNEL_SWIZZLE_A",
    }
}

vk_enum! {
    ShaderStage, fallback = "VkShaderStage" {
        VERTEX = 0 => "VK_SHADER_STAGE_VERTEX",
        TESS_CONTROL = 1 => "VK_SHADER_STAGE_TESS_CONTROL",
        TESS_EVALUATION = 2 => "VK_SHADER_STAGE_TESS_EVALUATION",
        GEOMETRY = 3 => "VK_SHADER_STAGE_GEOMETRY",
        FRAGMENT = 4 => "VK_SHADER_STAGE_FRAGMENT",
        COMPUTE = 5 => "VK_SHADER_STAGE_COMPUTE",
    }
}

vk_enum! {
    /// Texel formats.
    Format, fallback = "VkFormat" {
        UNDEFINED = 0 => "VK_FORMAT_UNDEFINED",
        R4G4_UNORM = 1 => "VK_FORMAT_R4G4_UNORM",
        R4G4_USCALED = 2 => "VK_FORMAT_R4G4_USCALED",
        R4G4B4A4_UNORM = 3 => "VK_FORMAT_R4G4B4A4_UNORM",
        R4G4B4A4_USCALED = 4 => "VK_FORMAT_R4G4B4A4_USCALED",
        R5G6B5_UNORM = 5 => "VK_FORMAT_R5G6B5_UNORM",
        R5G6B5_USCALED = 6 => "VK_FORMAT_R5G6B5_USCALED",
        R5G5B5A1_UNORM = 7 => "VK_FORMAT_R5G5B5A1_UNORM",
        R5G5B5A1_USCALED = 8 => "VK_FORMAT_R5G5B5A1_USCALED",
        R8_UNORM = 9 => "VK_FORMAT_R8_UNORM",
        R8_SNORM = 10 => "VK_FORMAT_R8_SNORM",
        R8_USCALED = 11 => "VK_FORMAT_R8_USCALED",
        R8_SSCALED = 12 => "VK_FORMAT_R8_SSCALED",
        R8_UINT = 13 => "VK_FORMAT_R8_UINT",
        R8_SINT = 14 => "VK_FORMAT_R8_SINT",
        R8_SRGB = 15 => "VK_FORMAT_R8_SRGB",
        R8G8_UNORM = 16 => "VK_FORMAT_R8G8_UNORM",
        R8G8_SNORM = 17 => "VK_FORMAT_R8G8_SNORM",
        R8G8_USCALED = 18 => "VK_FORMAT_R8G8_USCALED",
        R8G8_SSCALED = 19 => "VK_FORMAT_R8G8_SSCALED",
        R8G8_UINT = 20 => "VK_FORMAT_R8G8_UINT",
        R8G8_SINT = 21 => "VK_FORMAT_R8G8_SINT",
        R8G8_SRGB = 22 => "VK_FORMAT_R8G8_SRGB",
        R8G8B8_UNORM = 23 => "VK_FORMAT_R8G8B8_UNORM",
        R8G8B8_SNORM = 24 => "VK_FORMAT_R8G8B8_SNORM",
        R8G8B8_USCALED = 25 => "VK_FORMAT_R8G8B8_USCALED",
        R8G8B8_SSCALED = 26 => "VK_FORMAT_R8G8B8_SSCALED",
        R8G8B8_UINT = 27 => "VK_FORMAT_R8G8B8_UINT",
        R8G8B8_SINT = 28 => "VK_FORMAT_R8G8B8_SINT",
        R8G8B8_SRGB = 29 => "VK_FORMAT_R8G8B8_SRGB",
        R8G8B8A8_UNORM = 30 => "VK_FORMAT_R8G8B8A8_UNORM",
        R8G8B8A8_SNORM = 31 => "VK_FORMAT_R8G8B8A8_SNORM",
        R8G8B8A8_USCALED = 32 => "VK_FORMAT_R8G8B8A8_USCALED",
        R8G8B8A8_SSCALED = 33 => "VK_FORMAT_R8G8B8A8_SSCALED",
        R8G8B8A8_UINT = 34 => "VK_FORMAT_R8G8B8A8_UINT",
        R8G8B8A8_SINT = 35 => "VK_FORMAT_R8G8B8A8_SINT",
        R8G8B8A8_SRGB = 36 => "VK_FORMAT_R8G8B8A8_SRGB",
        R10G10B10A2_UNORM = 37 => "VK_FORMAT_R10G10B10A2_UNORM",
        R10G10B10A2_SNORM = 38 => "VK_FORMAT_R10G10B10A2_SNORM",
        R10G10B10A2_USCALED = 39 => "VK_FORMAT_R10G10B10A2_USCALED",
        R10G10B10A2_SSCALED = 40 => "VK_FORMAT_R10G10B10A2_SSCALED",
        R10G10B10A2_UINT = 41 => "VK_FORMAT_R10G10B10A2_UINT",
        R10G10B10A2_SINT = 42 => "VK_FORMAT_R10G10B10A2_SINT",
        R16_UNORM = 43 => "VK_FORMAT_R16_UNORM",
        R16_SNORM = 44 => "VK_FORMAT_R16_SNORM",
        R16_USCALED = 45 => "VK_FORMAT_R16_USCALED",
        R16_SSCALED = 46 => "VK_FORMAT_R16_SSCALED",
        R16_UINT = 47 => "VK_FORMAT_R16_UINT",
        R16_SINT = 48 => "VK_FORMAT_R16_SINT",
        R16_SFLOAT = 49 => "VK_FORMAT_R16_SFLOAT",
        R16G16_UNORM = 50 => "VK_FORMAT_R16G16_UNORM",
        R16G16_SNORM = 51 => "VK_FORMAT_R16G16_SNORM",
        R16G16_USCALED = 52 => "VK_FORMAT_R16G16_USCALED",
        R16G16_SSCALED = 53 => "VK_FORMAT_R16G16_SSCALED",
        R16G16_UINT = 54 => "VK_FORMAT_R16G16_UINT",
        R16G16_SINT = 55 => "VK_FORMAT_R16G16_SINT",
        R16G16_SFLOAT = 56 => "VK_FORMAT_R16G16_SFLOAT",
        R16G16B16_UNORM = 57 => "VK_FORMAT_R16G16B16_UNORM",
        R16G16B16_SNORM = 58 => "VK_FORMAT_R16G16B16_SNORM",
        R16G16B16_USCALED = 59 => "VK_FORMAT_R16G16B16_USCALED",
        R16G16B16_SSCALED = 60 => "VK_FORMAT_R16G16B16_SSCALED",
        R16G16B16_UINT = 61 => "VK_FORMAT_R16G16B16_UINT",
        R16G16B16_SINT = 62 => "VK_FORMAT_R16G16B16_SINT",
        R16G16B16_SFLOAT = 63 => "VK_FORMAT_R16G16B16_SFLOAT",
        R16G16B16A16_UNORM = 64 => "VK_FORMAT_R16G16B16A16_UNORM",
        R16G16B16A16_SNORM = 65 => "VK_FORMAT_R16G16B16A16_SNORM",
        R16G16B16A16_USCALED = 66 => "VK_FORMAT_R16G16B16A16_USCALED",
        R16G16B16A16_SSCALED = 67 => "VK_FORMAT_R16G16B16A16_SSCALED",
        R16G16B16A16_UINT = 68 => "VK_FORMAT_R16G16B16A16_UINT",
        R16G16B16A16_SINT = 69 => "VK_FORMAT_R16G16B16A16_SINT",
        R16G16B16A16_SFLOAT = 70 => "VK_FORMAT_R16G16B16A16_SFLOAT",
        R32_UINT = 71 => "VK_FORMAT_R32_UINT",
        R32_SINT = 72 => "VK_FORMAT_R32_SINT",
        R32_SFLOAT = 73 => "VK_FORMAT_R32_SFLOAT",
        R32G32_UINT = 74 => "VK_FORMAT_R32G32_UINT",
        R32G32_SINT = 75 => "VK_FORMAT_R32G32_SINT",
        R32G32_SFLOAT = 76 => "VK_FORMAT_R32G32_SFLOAT",
        R32G32B32_UINT = 77 => "VK_FORMAT_R32G32B32_UINT",
        R32G32B32_SINT = 78 => "VK_FORMAT_R32G32B32_SINT",
        R32G32B32_SFLOAT = 79 => "VK_FORMAT_R32G32B32_SFLOAT",
        R32G32B32A32_UINT = 80 => "VK_FORMAT_R32G32B32A32_UINT",
        R32G32B32A32_SINT = 81 => "VK_FORMAT_R32G32B32A32_SINT",
        R32G32B32A32_SFLOAT = 82 => "VK_FORMAT_R32G32B32A32_SFLOAT",
        R64_SFLOAT = 83 => "VK_FORMAT_R64_SFLOAT",
        R64G64_SFLOAT = 84 => "VK_FORMAT_R64G64_SFLOAT",
        R64G64B64_SFLOAT = 85 => "VK_FORMAT_R64G64B64_SFLOAT",
        R64G64B64A64_SFLOAT = 86 => "VK_FORMAT_R64G64B64A64_SFLOAT",
        R11G11B10_UFLOAT = 87 => "VK_FORMAT_R11G11B10_UFLOAT",
        R9G9B9E5_UFLOAT = 88 => "VK_FORMAT_R9G9B9E5_UFLOAT",
        D16_UNORM = 89 => "VK_FORMAT_D16_UNORM",
        D24_UNORM = 90 => "VK_FORMAT_D24_UNORM",
        D32_SFLOAT = 91 => "VK_FORMAT_D32_SFLOAT",
        S8_UINT = 92 => "VK_FORMAT_S8_UINT",
        D16_UNORM_S8_UINT = 93 => "VK_FORMAT_D16_UNORM_S8_UINT",
        D24_UNORM_S8_UINT = 94 => "VK_FORMAT_D24_UNORM_S8_UINT",
        D32_SFLOAT_S8_UINT = 95 => "VK_FORMAT_D32_SFLOAT_S8_UINT",
        BC1_RGB_UNORM = 96 => "VK_FORMAT_BC1_RGB_UNORM",
        BC1_RGB_SRGB = 97 => "VK_FORMAT_BC1_RGB_SRGB",
        BC1_RGBA_UNORM = 98 => "VK_FORMAT_BC1_RGBA_UNORM",
        BC1_RGBA_SRGB = 99 => "VK_FORMAT_BC1_RGBA_SRGB",
        BC2_UNORM = 100 => "VK_FORMAT_BC2_UNORM",
        BC2_SRGB = 101 => "VK_FORMAT_BC2_SRGB",
        BC3_UNORM = 102 => "VK_FORMAT_BC3_UNORM",
        BC3_SRGB = 103 => "VK_FORMAT_BC3_SRGB",
        BC4_UNORM = 104 => "VK_FORMAT_BC4_UNORM",
        BC4_SNORM = 105 => "VK_FORMAT_BC4_SNORM",
        BC5_UNORM = 106 => "VK_FORMAT_BC5_UNORM",
        BC5_SNORM = 107 => "VK_FORMAT_BC5_SNORM",
        BC6H_UFLOAT = 108 => "VK_FORMAT_BC6H_UFLOAT",
        BC6H_SFLOAT = 109 => "VK_FORMAT_BC6H_SFLOAT",
        BC7_UNORM = 110 => "VK_FORMAT_BC7_UNORM",
        BC7_SRGB = 111 => "VK_FORMAT_BC7_SRGB",
        ETC2_R8G8B8_UNORM = 112 => "VK_FORMAT_ETC2_R8G8B8_UNORM",
        ETC2_R8G8B8_SRGB = 113 => "VK_FORMAT_ETC2_R8G8B8_SRGB",
        ETC2_R8G8B8A1_UNORM = 114 => "VK_FORMAT_ETC2_R8G8B8A1_UNORM",
        ETC2_R8G8B8A1_SRGB = 115 => "VK_FORMAT_ETC2_R8G8B8A1_SRGB",
        ETC2_R8G8B8A8_UNORM = 116 => "VK_FORMAT_ETC2_R8G8B8A8_UNORM",
        ETC2_R8G8B8A8_SRGB = 117 => "VK_FORMAT_ETC2_R8G8B8A8_SRGB",
        EAC_R11_UNORM = 118 => "VK_FORMAT_EAC_R11_UNORM",
        EAC_R11_SNORM = 119 => "VK_FORMAT_EAC_R11_SNORM",
        EAC_R11G11_UNORM = 120 => "VK_FORMAT_EAC_R11G11_UNORM",
        EAC_R11G11_SNORM = 121 => "VK_FORMAT_EAC_R11G11_SNORM",
        ASTC_4X4_UNORM = 122 => "VK_FORMAT_ASTC_4x4_UNORM",
        ASTC_4X4_SRGB = 123 => "VK_FORMAT_ASTC_4x4_SRGB",
        ASTC_5X4_UNORM = 124 => "VK_FORMAT_ASTC_5x4_UNORM",
        ASTC_5X4_SRGB = 125 => "VK_FORMAT_ASTC_5x4_SRGB",
        ASTC_5X5_UNORM = 126 => "VK_FORMAT_ASTC_5x5_UNORM",
        ASTC_5X5_SRGB = 127 => "VK_FORMAT_ASTC_5x5_SRGB",
        ASTC_6X5_UNORM = 128 => "VK_FORMAT_ASTC_6x5_UNORM",
        ASTC_6X5_SRGB = 129 => "VK_FORMAT_ASTC_6x5_SRGB",
        ASTC_6X6_UNORM = 130 => "VK_FORMAT_ASTC_6x6_UNORM",
        ASTC_6X6_SRGB = 131 => "VK_FORMAT_ASTC_6x6_SRGB",
        ASTC_8X5_UNORM = 132 => "VK_FORMAT_ASTC_8x5_UNORM",
        ASTC_8X5_SRGB = 133 => "VK_FORMAT_ASTC_8x5_SRGB",
        ASTC_8X6_UNORM = 134 => "VK_FORMAT_ASTC_8x6_UNORM",
        ASTC_8X6_SRGB = 135 => "VK_FORMAT_ASTC_8x6_SRGB",
        ASTC_8X8_UNORM = 136 => "VK_FORMAT_ASTC_8x8_UNORM",
        ASTC_8X8_SRGB = 137 => "VK_FORMAT_ASTC_8x8_SRGB",
        ASTC_10X5_UNORM = 138 => "VK_FORMAT_ASTC_10x5_UNORM",
        ASTC_10X5_SRGB = 139 => "VK_FORMAT_ASTC_10x5_SRGB",
        ASTC_10X6_UNORM = 140 => "VK_FORMAT_ASTC_10x6_UNORM",
        ASTC_10X6_SRGB = 141 => "VK_FORMAT_ASTC_10x6_SRGB",
        ASTC_10X8_UNORM = 142 => "VK_FORMAT_ASTC_10x8_UNORM",
        ASTC_10X8_SRGB = 143 => "VK_FORMAT_ASTC_10x8_SRGB",
        ASTC_10X10_UNORM = 144 => "VK_FORMAT_ASTC_10x10_UNORM",
        ASTC_10X10_SRGB = 145 => "VK_FORMAT_ASTC_10x10_SRGB",
        ASTC_12X10_UNORM = 146 => "VK_FORMAT_ASTC_12x10_UNORM",
        ASTC_12X10_SRGB = 147 => "VK_FORMAT_ASTC_12x10_SRGB",
        ASTC_12X12_UNORM = 148 => "VK_FORMAT_ASTC_12x12_UNORM",
        ASTC_12X12_SRGB = 149 => "VK_FORMAT_ASTC_12x12_SRGB",
        B4G4R4A4_UNORM = 150 => "VK_FORMAT_B4G4R4A4_UNORM",
        B5G5R5A1_UNORM = 151 => "VK_FORMAT_B5G5R5A1_UNORM",
        B5G6R5_UNORM = 152 => "VK_FORMAT_B5G6R5_UNORM",
        B5G6R5_USCALED = 153 => "VK_FORMAT_B5G6R5_USCALED",
        B8G8R8_UNORM = 154 => "VK_FORMAT_B8G8R8_UNORM",
        B8G8R8_SNORM = 155 => "VK_FORMAT_B8G8R8_SNORM",
        B8G8R8_USCALED = 156 => "VK_FORMAT_B8G8R8_USCALED",
        B8G8R8_SSCALED = 157 => "VK_FORMAT_B8G8R8_SSCALED",
        B8G8R8_UINT = 158 => "VK_FORMAT_B8G8R8_UINT",
        B8G8R8_SINT = 159 => "VK_FORMAT_B8G8R8_SINT",
        B8G8R8_SRGB = 160 => "VK_FORMAT_B8G8R8_SRGB",
        B8G8R8A8_UNORM = 161 => "VK_FORMAT_B8G8R8A8_UNORM",
        B8G8R8A8_SNORM = 162 => "VK_FORMAT_B8G8R8A8_SNORM",
        B8G8R8A8_USCALED = 163 => "VK_FORMAT_B8G8R8A8_USCALED",
        B8G8R8A8_SSCALED = 164 => "VK_FORMAT_B8G8R8A8_SSCALED",
        B8G8R8A8_UINT = 165 => "VK_FORMAT_B8G8R8A8_UINT",
        B8G8R8A8_SINT = 166 => "VK_FORMAT_B8G8R8A8_SINT",
        B8G8R8A8_SRGB = 167 => "VK_FORMAT_B8G8R8A8_SRGB",
        B10G10R10A2_UNORM = 168 => "VK_FORMAT_B10G10R10A2_UNORM",
        B10G10R10A2_SNORM = 169 => "VK_FORMAT_B10G10R10A2_SNORM",
        B10G10R10A2_USCALED = 170 => "VK_FORMAT_B10G10R10A2_USCALED",
        B10G10R10A2_SSCALED = 171 => "VK_FORMAT_B10G10R10A2_SSCALED",
        B10G10R10A2_UINT = 172 => "VK_FORMAT_B10G10R10A2_UINT",
        B10G10R10A2_SINT = 173 => "VK_FORMAT_B10G10R10A2_SINT",
    }
}

vk_enum! {
    SurfaceTransformWSI, fallback = "VkSurfaceTransformWSI" {
        NONE_WSI = 0 => "VK_SURFACE_TRANSFORM_NONE_WSI",
        ROT90_WSI = 1 => "VK_SURFACE_TRANSFORM_ROT90_WSI",
        ROT180_WSI = 2 => "VK_SURFACE_TRANSFORM_ROT180_WSI",
        ROT270_WSI = 3 => "VK_SURFACE_TRANSFORM_ROT270_WSI",
        HMIRROR_WSI = 4 => "VK_SURFACE_TRANSFORM_HMIRROR_WSI",
        HMIRROR_ROT90_WSI = 5 => "VK_SURFACE_TRANSFORM_HMIRROR_ROT90_WSI",
        HMIRROR_ROT180_WSI = 6 => "VK_SURFACE_TRANSFORM_HMIRROR_ROT180_WSI",
        HMIRROR_ROT270_WSI = 7 => "VK_SURFACE_TRANSFORM_HMIRROR_ROT270_WSI",
        INHERIT_WSI = 8 => "VK_SURFACE_TRANSFORM_INHERIT_WSI",
    }
}

vk_enum! {
    PresentModeWSI, fallback = "VkPresentModeWSI" {
        IMMEDIATE_WSI = 0 => "VK_PRESENT_MODE_IMMEDIATE_WSI",
        MAILBOX_WSI = 1 => "VK_PRESENT_MODE_MAILBOX_WSI",
        FIFO_WSI = 2 => "VK_PRESENT_MODE_FIFO_WSI",
    }
}

vk_enum! {
    AttachmentLoadOp, fallback = "VkAttachmentLoadOp" {
        LOAD = 0 => "VK_ATTACHMENT_LOAD_OP_LOAD",
        CLEAR = 1 => "VK_ATTACHMENT_LOAD_OP_CLEAR",
        DONT_CARE = 2 => "VK_ATTACHMENT_LOAD_OP_DONT_CARE",
    }
}

vk_enum! {
    AttachmentStoreOp, fallback = "VkAttachmentStoreOp" {
        STORE = 0 => "VK_ATTACHMENT_STORE_OP_STORE",
        DONT_CARE = 1 => "VK_ATTACHMENT_STORE_OP_DONT_CARE",
    }
}

/// What a descriptor set slot currently holds. Not an API enum, so its
/// labels are plain words and unknown values print as `"Unknown"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
#[repr(transparent)]
pub struct DescriptorSlotType(pub i32);

impl DescriptorSlotType {
    pub const NONE: Self = Self(0);
    pub const SAMPLER: Self = Self(1);
    pub const IMAGE: Self = Self(2);
    pub const MEMORY: Self = Self(3);
    pub const DESC_SET: Self = Self(4);

    pub fn to_str(self) -> &'static str {
        match self {
            Self::DESC_SET => "Nested Descriptor",
            Self::IMAGE => "Image View",
            Self::MEMORY => "Memory",
            Self::SAMPLER => "Sampler",
            Self::NONE => "None",
            _ => "Unknown",
        }
    }
}

impl std::fmt::Display for DescriptorSlotType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
