use crate::stringify::vk_flags;

vk_flags! {
    /// Capabilities of a queue family.
    QueueFlags {
        GRAPHICS = 0x0000_0001 => "VK_QUEUE_GRAPHICS_BIT",
        COMPUTE = 0x0000_0002 => "VK_QUEUE_COMPUTE_BIT",
        DMA = 0x0000_0004 => "VK_QUEUE_DMA_BIT",
        SPARSE_MEMMGR = 0x0000_0008 => "VK_QUEUE_SPARSE_MEMMGR_BIT",
        EXTENDED = 0x4000_0000 => "VK_QUEUE_EXTENDED_BIT",
    }
}

vk_flags! {
    /// Memory accesses a barrier makes visible to.
    MemoryInputFlags {
        HOST_READ = 0x0000_0001 => "VK_MEMORY_INPUT_HOST_READ_BIT",
        INDIRECT_COMMAND = 0x0000_0002 => "VK_MEMORY_INPUT_INDIRECT_COMMAND_BIT",
        INDEX_FETCH = 0x0000_0004 => "VK_MEMORY_INPUT_INDEX_FETCH_BIT",
        VERTEX_ATTRIBUTE_FETCH = 0x0000_0008 => "VK_MEMORY_INPUT_VERTEX_ATTRIBUTE_FETCH_BIT",
        UNIFORM_READ = 0x0000_0010 => "VK_MEMORY_INPUT_UNIFORM_READ_BIT",
        SHADER_READ = 0x0000_0020 => "VK_MEMORY_INPUT_SHADER_READ_BIT",
        COLOR_ATTACHMENT = 0x0000_0040 => "VK_MEMORY_INPUT_COLOR_ATTACHMENT_BIT",
        DEPTH_STENCIL_ATTACHMENT = 0x0000_0080 => "VK_MEMORY_INPUT_DEPTH_STENCIL_ATTACHMENT_BIT",
        INPUT_ATTACHMENT = 0x0000_0100 => "VK_MEMORY_INPUT_INPUT_ATTACHMENT_BIT",
        TRANSFER = 0x0000_0200 => "VK_MEMORY_INPUT_TRANSFER_BIT",
    }
}

vk_flags! {
    /// Memory writes a barrier makes available.
    MemoryOutputFlags {
        HOST_WRITE = 0x0000_0001 => "VK_MEMORY_OUTPUT_HOST_WRITE_BIT",
        SHADER_WRITE = 0x0000_0002 => "VK_MEMORY_OUTPUT_SHADER_WRITE_BIT",
        COLOR_ATTACHMENT = 0x0000_0004 => "VK_MEMORY_OUTPUT_COLOR_ATTACHMENT_BIT",
        DEPTH_STENCIL_ATTACHMENT = 0x0000_0008 => "VK_MEMORY_OUTPUT_DEPTH_STENCIL_ATTACHMENT_BIT",
        TRANSFER = 0x0000_0010 => "VK_MEMORY_OUTPUT_TRANSFER_BIT",
    }
}
