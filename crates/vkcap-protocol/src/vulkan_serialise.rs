//! Field-by-field serialise routines for every API structure.
//!
//! Each routine visits its fields in one fixed order for all modes; the
//! stream has no per-field tags, so reordering a line here breaks every
//! existing capture.

use crate::serialiser::{Result, Serialise, Serialiser};
use crate::vulkan_structs::*;

impl Serialise for DeviceQueueCreateInfo {
    const TYPE_NAME: &'static str = "VkDeviceQueueCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("queueFamilyIndex", &mut self.queue_family_index)?;
        ser.value("queueCount", &mut self.queue_count)
    }
}

impl Serialise for DeviceCreateInfo {
    const TYPE_NAME: &'static str = "VkDeviceCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("flags", &mut self.flags)?;
        ser.array("queueRecordCount", "RequestedQueues", &mut self.requested_queues)?;
        ser.strings("extensionCount", "ppEnabledExtensionNames", &mut self.enabled_extension_names)
    }
}

impl Serialise for MemoryAllocInfo {
    const TYPE_NAME: &'static str = "VkMemoryAllocInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("allocationSize", &mut self.allocation_size)?;
        ser.value("memoryTypeIndex", &mut self.memory_type_index)
    }
}

impl Serialise for BufferCreateInfo {
    const TYPE_NAME: &'static str = "VkBufferCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("size", &mut self.size)?;
        ser.value("usage", &mut self.usage)?;
        ser.value("flags", &mut self.flags)
    }
}

impl Serialise for BufferViewCreateInfo {
    const TYPE_NAME: &'static str = "VkBufferViewCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("buffer", &mut self.buffer)?;
        ser.value("viewType", &mut self.view_type)?;
        ser.value("format", &mut self.format)?;
        ser.value("offset", &mut self.offset)?;
        ser.value("range", &mut self.range)
    }
}

impl Serialise for ImageCreateInfo {
    const TYPE_NAME: &'static str = "VkImageCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("imageType", &mut self.image_type)?;
        ser.value("format", &mut self.format)?;
        ser.serialise("extent", &mut self.extent)?;
        ser.value("mipLevels", &mut self.mip_levels)?;
        ser.value("arraySize", &mut self.array_size)?;
        ser.value("samples", &mut self.samples)?;
        ser.value("tiling", &mut self.tiling)?;
        ser.value("usage", &mut self.usage)?;
        ser.value("flags", &mut self.flags)
    }
}

impl Serialise for ChannelMapping {
    const TYPE_NAME: &'static str = "VkChannelMapping";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("r", &mut self.r)?;
        ser.value("g", &mut self.g)?;
        ser.value("b", &mut self.b)?;
        ser.value("a", &mut self.a)
    }
}

impl Serialise for ImageSubresourceRange {
    const TYPE_NAME: &'static str = "VkImageSubresourceRange";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("aspect", &mut self.aspect)?;
        ser.value("baseMipLevel", &mut self.base_mip_level)?;
        ser.value("mipLevels", &mut self.mip_levels)?;
        ser.value("baseArraySlice", &mut self.base_array_slice)?;
        ser.value("arraySize", &mut self.array_size)
    }
}

impl Serialise for ImageSubresource {
    const TYPE_NAME: &'static str = "VkImageSubresource";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("aspect", &mut self.aspect)?;
        ser.value("mipLevel", &mut self.mip_level)?;
        ser.value("arraySlice", &mut self.array_slice)
    }
}

impl Serialise for ImageViewCreateInfo {
    const TYPE_NAME: &'static str = "VkImageViewCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("image", &mut self.image)?;
        ser.value("viewType", &mut self.view_type)?;
        ser.value("format", &mut self.format)?;
        ser.serialise("channels", &mut self.channels)?;
        ser.serialise("subresourceRange", &mut self.subresource_range)
    }
}

impl Serialise for AttachmentViewCreateInfo {
    const TYPE_NAME: &'static str = "VkAttachmentViewCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("image", &mut self.image)?;
        ser.value("format", &mut self.format)?;
        ser.value("mipLevel", &mut self.mip_level)?;
        ser.value("baseArraySlice", &mut self.base_array_slice)?;
        ser.value("arraySize", &mut self.array_size)
    }
}

// ── Copy regions ────────────────────────────────────────────────────────────

impl Serialise for BufferCopy {
    const TYPE_NAME: &'static str = "VkBufferCopy";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("srcOffset", &mut self.src_offset)?;
        ser.value("destOffset", &mut self.dest_offset)?;
        ser.value("copySize", &mut self.copy_size)
    }
}

impl Serialise for BufferImageCopy {
    const TYPE_NAME: &'static str = "VkBufferImageCopy";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("memOffset", &mut self.buffer_offset)?;
        ser.serialise("imageSubresource", &mut self.image_subresource)?;
        ser.serialise("imageOffset", &mut self.image_offset)?;
        ser.serialise("imageExtent", &mut self.image_extent)
    }
}

impl Serialise for ImageCopy {
    const TYPE_NAME: &'static str = "VkImageCopy";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.serialise("srcSubresource", &mut self.src_subresource)?;
        ser.serialise("srcOffset", &mut self.src_offset)?;
        ser.serialise("destSubresource", &mut self.dest_subresource)?;
        ser.serialise("destOffset", &mut self.dest_offset)?;
        ser.serialise("extent", &mut self.extent)
    }
}

impl Serialise for ImageResolve {
    const TYPE_NAME: &'static str = "VkImageResolve";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.serialise("srcSubresource", &mut self.src_subresource)?;
        ser.serialise("srcOffset", &mut self.src_offset)?;
        ser.serialise("destSubresource", &mut self.dest_subresource)?;
        ser.serialise("destOffset", &mut self.dest_offset)?;
        ser.serialise("extent", &mut self.extent)
    }
}

impl Serialise for ImageBlit {
    const TYPE_NAME: &'static str = "VkImageBlit";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.serialise("srcSubresource", &mut self.src_subresource)?;
        ser.serialise("srcOffset", &mut self.src_offset)?;
        ser.serialise("srcExtent", &mut self.src_extent)?;
        ser.serialise("destSubresource", &mut self.dest_subresource)?;
        ser.serialise("destOffset", &mut self.dest_offset)?;
        ser.serialise("destExtent", &mut self.dest_extent)
    }
}

// ── Render passes and framebuffers ──────────────────────────────────────────

impl Serialise for AttachmentBindInfo {
    const TYPE_NAME: &'static str = "VkAttachmentBindInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("view", &mut self.view)?;
        ser.value("layout", &mut self.layout)
    }
}

impl Serialise for FramebufferCreateInfo {
    const TYPE_NAME: &'static str = "VkFramebufferCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("renderPass", &mut self.render_pass)?;
        ser.array("attachmentCount", "pAttachments", &mut self.attachments)?;
        ser.value("width", &mut self.width)?;
        ser.value("height", &mut self.height)?;
        ser.value("layers", &mut self.layers)
    }
}

impl Serialise for AttachmentDescription {
    const TYPE_NAME: &'static str = "VkAttachmentDescription";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("format", &mut self.format)?;
        ser.value("samples", &mut self.samples)?;
        ser.value("loadOp", &mut self.load_op)?;
        ser.value("storeOp", &mut self.store_op)?;
        ser.value("stencilLoadOp", &mut self.stencil_load_op)?;
        ser.value("stencilStoreOp", &mut self.stencil_store_op)?;
        ser.value("initialLayout", &mut self.initial_layout)?;
        ser.value("finalLayout", &mut self.final_layout)
    }
}

impl Serialise for AttachmentReference {
    const TYPE_NAME: &'static str = "VkAttachmentReference";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("attachment", &mut self.attachment)?;
        ser.value("layout", &mut self.layout)
    }
}

impl Serialise for SubpassDescription {
    const TYPE_NAME: &'static str = "VkSubpassDescription";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("pipelineBindPoint", &mut self.pipeline_bind_point)?;
        ser.value("flags", &mut self.flags)?;
        ser.array("inputCount", "inputAttachments", &mut self.input_attachments)?;
        let color_count = ser.count("colorCount", self.color_attachments.len())?;
        ser.elements("colorAttachments", &mut self.color_attachments, color_count)?;

        // Resolves are either absent or paired one-to-one with colour attachments.
        let mut has_resolves = !self.resolve_attachments.is_empty();
        ser.value("hasResolves", &mut has_resolves)?;
        if has_resolves {
            ser.elements("resolveAttachments", &mut self.resolve_attachments, color_count)?;
        } else if ser.is_reading() {
            self.resolve_attachments.clear();
        }

        ser.serialise("depthStencilAttachment", &mut self.depth_stencil_attachment)?;
        ser.array("preserveCount", "preserveAttachments", &mut self.preserve_attachments)
    }
}

impl Serialise for SubpassDependency {
    const TYPE_NAME: &'static str = "VkSubpassDependency";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("srcSubpass", &mut self.src_subpass)?;
        ser.value("destSubpass", &mut self.dest_subpass)?;
        ser.value("srcStageMask", &mut self.src_stage_mask)?;
        ser.value("destStageMask", &mut self.dest_stage_mask)?;
        ser.value("outputMask", &mut self.output_mask)?;
        ser.value("inputMask", &mut self.input_mask)?;
        ser.value("byRegion", &mut self.by_region)
    }
}

impl Serialise for RenderPassCreateInfo {
    const TYPE_NAME: &'static str = "VkRenderPassCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.array("attachmentCount", "pAttachments", &mut self.attachments)?;
        ser.array("subpassCount", "pSubpasses", &mut self.subpasses)?;
        ser.array("dependencyCount", "pDependencies", &mut self.dependencies)
    }
}

impl Serialise for RenderPassBeginInfo {
    const TYPE_NAME: &'static str = "VkRenderPassBeginInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("renderPass", &mut self.render_pass)?;
        ser.handle("framebuffer", &mut self.framebuffer)?;
        ser.serialise("renderArea", &mut self.render_area)?;
        ser.array("attachmentCount", "pAttachmentClearValues", &mut self.attachment_clear_values)
    }
}

// ── Dynamic state objects ───────────────────────────────────────────────────

impl Serialise for DynamicViewportStateCreateInfo {
    const TYPE_NAME: &'static str = "VkDynamicVpStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        let count = ser.count("viewportCount", self.viewports.len())?;
        ser.elements("viewports", &mut self.viewports, count)?;
        ser.elements("scissors", &mut self.scissors, count)
    }
}

impl Serialise for DynamicRasterStateCreateInfo {
    const TYPE_NAME: &'static str = "VkDynamicRsStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("depthBias", &mut self.depth_bias)?;
        ser.value("depthBiasClamp", &mut self.depth_bias_clamp)?;
        ser.value("slopeScaledDepthBias", &mut self.slope_scaled_depth_bias)?;
        ser.value("lineWidth", &mut self.line_width)
    }
}

impl Serialise for DynamicColorBlendStateCreateInfo {
    const TYPE_NAME: &'static str = "VkDynamicCbStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.fixed("blendConst", &mut self.blend_const)
    }
}

impl Serialise for DynamicDepthStencilStateCreateInfo {
    const TYPE_NAME: &'static str = "VkDynamicDsStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("minDepthBounds", &mut self.min_depth_bounds)?;
        ser.value("maxDepthBounds", &mut self.max_depth_bounds)?;
        ser.value("stencilReadMask", &mut self.stencil_read_mask)?;
        ser.value("stencilWriteMask", &mut self.stencil_write_mask)?;
        ser.value("stencilFrontRef", &mut self.stencil_front_ref)?;
        ser.value("stencilBackRef", &mut self.stencil_back_ref)
    }
}

// ── Shaders ─────────────────────────────────────────────────────────────────

impl Serialise for ShaderModuleCreateInfo {
    const TYPE_NAME: &'static str = "VkShaderModuleCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.buffer("codeSize", "pCode", &mut self.code)?;
        ser.value("flags", &mut self.flags)
    }
}

impl Serialise for ShaderCreateInfo {
    const TYPE_NAME: &'static str = "VkShaderCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.string("pName", &mut self.name)?;
        ser.value("flags", &mut self.flags)?;
        ser.handle("module", &mut self.module)
    }
}

impl Serialise for SpecializationMapEntry {
    const TYPE_NAME: &'static str = "VkSpecializationMapEntry";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("constantId", &mut self.constant_id)?;
        ser.value("offset", &mut self.offset)?;
        ser.value("size", &mut self.size)
    }
}

impl Serialise for SpecializationInfo {
    const TYPE_NAME: &'static str = "VkSpecializationInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.array("mapEntryCount", "pMap", &mut self.map_entries)?;
        ser.buffer("dataSize", "pData", &mut self.data)
    }
}

impl Serialise for PipelineShaderStageCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineShaderStageCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("stage", &mut self.stage)?;
        ser.handle("shader", &mut self.shader)?;
        ser.optional("pSpecializationInfo", &mut self.specialization_info)
    }
}

// ── Pipeline state ──────────────────────────────────────────────────────────

impl Serialise for VertexInputBindingDescription {
    const TYPE_NAME: &'static str = "VkVertexInputBindingDescription";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("binding", &mut self.binding)?;
        ser.value("strideInBytes", &mut self.stride_in_bytes)?;
        ser.value("stepRate", &mut self.step_rate)
    }
}

impl Serialise for VertexInputAttributeDescription {
    const TYPE_NAME: &'static str = "VkVertexInputAttributeDescription";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("location", &mut self.location)?;
        ser.value("binding", &mut self.binding)?;
        ser.value("format", &mut self.format)?;
        ser.value("offsetInBytes", &mut self.offset_in_bytes)
    }
}

impl Serialise for PipelineVertexInputStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineVertexInputStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.array("bindingCount", "bindings", &mut self.bindings)?;
        ser.array("attributeCount", "attributes", &mut self.attributes)
    }
}

impl Serialise for PipelineInputAssemblyStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineInputAssemblyStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("topology", &mut self.topology)?;
        ser.value("primitiveRestartEnable", &mut self.primitive_restart_enable)
    }
}

impl Serialise for PipelineTessellationStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineTessStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("patchControlPoints", &mut self.patch_control_points)
    }
}

impl Serialise for PipelineViewportStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineViewportStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("viewportCount", &mut self.viewport_count)
    }
}

impl Serialise for PipelineRasterStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineRasterStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("depthClipEnable", &mut self.depth_clip_enable)?;
        ser.value("rasterizerDiscardEnable", &mut self.rasterizer_discard_enable)?;
        ser.value("fillMode", &mut self.fill_mode)?;
        ser.value("cullMode", &mut self.cull_mode)?;
        ser.value("frontFace", &mut self.front_face)
    }
}

impl Serialise for PipelineMultisampleStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineMultisampleStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("rasterSamples", &mut self.raster_samples)?;
        ser.value("sampleShadingEnable", &mut self.sample_shading_enable)?;
        ser.value("minSampleShading", &mut self.min_sample_shading)?;
        ser.value("sampleMask", &mut self.sample_mask)
    }
}

impl Serialise for PipelineColorBlendAttachmentState {
    const TYPE_NAME: &'static str = "VkPipelineColorBlendAttachmentState";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("blendEnable", &mut self.blend_enable)?;
        ser.value("srcBlendColor", &mut self.src_blend_color)?;
        ser.value("destBlendColor", &mut self.dest_blend_color)?;
        ser.value("blendOpColor", &mut self.blend_op_color)?;
        ser.value("srcBlendAlpha", &mut self.src_blend_alpha)?;
        ser.value("destBlendAlpha", &mut self.dest_blend_alpha)?;
        ser.value("blendOpAlpha", &mut self.blend_op_alpha)?;
        ser.value("channelWriteMask", &mut self.channel_write_mask)
    }
}

impl Serialise for PipelineColorBlendStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineColorBlendStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("alphaToCoverageEnable", &mut self.alpha_to_coverage_enable)?;
        ser.value("logicOpEnable", &mut self.logic_op_enable)?;
        ser.value("logicOp", &mut self.logic_op)?;
        ser.array("attachmentCount", "attachments", &mut self.attachments)
    }
}

impl Serialise for StencilOpState {
    const TYPE_NAME: &'static str = "VkStencilOpState";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("stencilFailOp", &mut self.stencil_fail_op)?;
        ser.value("stencilPassOp", &mut self.stencil_pass_op)?;
        ser.value("stencilDepthFailOp", &mut self.stencil_depth_fail_op)?;
        ser.value("stencilCompareOp", &mut self.stencil_compare_op)
    }
}

impl Serialise for PipelineDepthStencilStateCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineDepthStencilStateCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("depthTestEnable", &mut self.depth_test_enable)?;
        ser.value("depthWriteEnable", &mut self.depth_write_enable)?;
        ser.value("depthCompareOp", &mut self.depth_compare_op)?;
        ser.value("depthBoundsEnable", &mut self.depth_bounds_enable)?;
        ser.value("stencilEnable", &mut self.stencil_test_enable)?;
        ser.serialise("front", &mut self.front)?;
        ser.serialise("back", &mut self.back)
    }
}

impl Serialise for GraphicsPipelineCreateInfo {
    const TYPE_NAME: &'static str = "VkGraphicsPipelineCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("flags", &mut self.flags)?;
        ser.handle("layout", &mut self.layout)?;
        ser.handle("renderPass", &mut self.render_pass)?;
        ser.value("subpass", &mut self.subpass)?;
        ser.handle("basePipelineHandle", &mut self.base_pipeline_handle)?;
        ser.value("basePipelineIndex", &mut self.base_pipeline_index)?;
        ser.optional("pVertexInputState", &mut self.vertex_input_state)?;
        ser.optional("pInputAssemblyState", &mut self.input_assembly_state)?;
        ser.optional("pTessellationState", &mut self.tessellation_state)?;
        ser.optional("pViewportState", &mut self.viewport_state)?;
        ser.optional("pRasterState", &mut self.raster_state)?;
        ser.optional("pMultisampleState", &mut self.multisample_state)?;
        ser.optional("pDepthStencilState", &mut self.depth_stencil_state)?;
        ser.optional("pColorBlendState", &mut self.color_blend_state)?;
        ser.array("stageCount", "stage", &mut self.stages)
    }
}

impl Serialise for ComputePipelineCreateInfo {
    const TYPE_NAME: &'static str = "VkComputePipelineCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.serialise("cs", &mut self.cs)?;
        ser.value("flags", &mut self.flags)?;
        ser.handle("layout", &mut self.layout)?;
        ser.handle("basePipelineHandle", &mut self.base_pipeline_handle)?;
        ser.value("basePipelineIndex", &mut self.base_pipeline_index)
    }
}

impl Serialise for PipelineCacheCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineCacheCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.buffer("codeSize", "initialData", &mut self.initial_data)?;
        ser.value("maxSize", &mut self.max_size)
    }
}

impl Serialise for PushConstantRange {
    const TYPE_NAME: &'static str = "VkPushConstantRange";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("stageFlags", &mut self.stage_flags)?;
        ser.value("start", &mut self.start)?;
        ser.value("length", &mut self.length)
    }
}

impl Serialise for PipelineLayoutCreateInfo {
    const TYPE_NAME: &'static str = "VkPipelineLayoutCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        let count = ser.count("descriptorSetCount", self.set_layouts.len())?;
        ser.handles("layout", &mut self.set_layouts, count)?;
        ser.array("pushConstantRangeCount", "pushConstantRanges", &mut self.push_constant_ranges)
    }
}

// ── Samplers and descriptors ────────────────────────────────────────────────

impl Serialise for SamplerCreateInfo {
    const TYPE_NAME: &'static str = "VkSamplerCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("minFilter", &mut self.min_filter)?;
        ser.value("magFilter", &mut self.mag_filter)?;
        ser.value("mipMode", &mut self.mip_mode)?;
        ser.value("addressU", &mut self.address_u)?;
        ser.value("addressV", &mut self.address_v)?;
        ser.value("addressW", &mut self.address_w)?;
        ser.value("mipLodBias", &mut self.mip_lod_bias)?;
        ser.value("maxAnisotropy", &mut self.max_anisotropy)?;
        ser.value("compareOp", &mut self.compare_op)?;
        ser.value("minLod", &mut self.min_lod)?;
        ser.value("maxLod", &mut self.max_lod)?;
        ser.value("borderColor", &mut self.border_color)
    }
}

impl Serialise for DescriptorSetLayoutBinding {
    const TYPE_NAME: &'static str = "VkDescriptorSetLayoutBinding";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("descriptorType", &mut self.descriptor_type)?;
        ser.value("arraySize", &mut self.array_size)?;
        ser.value("stageFlags", &mut self.stage_flags)?;

        let mut has_samplers = !self.immutable_samplers.is_empty();
        ser.value("hasSamplers", &mut has_samplers)?;
        if has_samplers {
            ser.handles("pImmutableSampler", &mut self.immutable_samplers, self.array_size as usize)?;
        } else if ser.is_reading() {
            self.immutable_samplers.clear();
        }
        Ok(())
    }
}

impl Serialise for DescriptorSetLayoutCreateInfo {
    const TYPE_NAME: &'static str = "VkDescriptorSetLayoutCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.array("count", "pBinding", &mut self.bindings)
    }
}

impl Serialise for DescriptorTypeCount {
    const TYPE_NAME: &'static str = "VkDescriptorTypeCount";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("type", &mut self.ty)?;
        ser.value("count", &mut self.count)
    }
}

impl Serialise for DescriptorPoolCreateInfo {
    const TYPE_NAME: &'static str = "VkDescriptorPoolCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.array("count", "pTypeCount", &mut self.type_counts)
    }
}

impl Serialise for DescriptorInfo {
    const TYPE_NAME: &'static str = "VkDescriptorInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.handle("bufferView", &mut self.buffer_view)?;
        ser.handle("sampler", &mut self.sampler)?;
        ser.handle("imageView", &mut self.image_view)?;
        ser.handle("attachmentView", &mut self.attachment_view)?;
        ser.value("imageLayout", &mut self.image_layout)
    }
}

impl Serialise for WriteDescriptorSet {
    const TYPE_NAME: &'static str = "VkWriteDescriptorSet";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("destSet", &mut self.dest_set)?;
        ser.value("destBinding", &mut self.dest_binding)?;
        ser.value("destArrayElement", &mut self.dest_array_element)?;
        ser.value("descriptorType", &mut self.descriptor_type)?;
        ser.array("count", "pDescriptors", &mut self.descriptors)
    }
}

impl Serialise for CopyDescriptorSet {
    const TYPE_NAME: &'static str = "VkCopyDescriptorSet";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("srcSet", &mut self.src_set)?;
        ser.value("srcBinding", &mut self.src_binding)?;
        ser.value("srcArrayElement", &mut self.src_array_element)?;
        ser.handle("destSet", &mut self.dest_set)?;
        ser.value("destBinding", &mut self.dest_binding)?;
        ser.value("destArrayElement", &mut self.dest_array_element)?;
        ser.value("count", &mut self.count)
    }
}

// ── Command buffers, barriers and swap chains ───────────────────────────────

impl Serialise for CmdBufferCreateInfo {
    const TYPE_NAME: &'static str = "VkCmdBufferCreateInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.handle("cmdPool", &mut self.cmd_pool)?;
        ser.value("level", &mut self.level)?;
        ser.value("flags", &mut self.flags)
    }
}

impl Serialise for CmdBufferBeginInfo {
    const TYPE_NAME: &'static str = "VkCmdBufferBeginInfo";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("flags", &mut self.flags)?;
        ser.handle("renderPass", &mut self.render_pass)?;
        ser.handle("framebuffer", &mut self.framebuffer)
    }
}

impl Serialise for MemoryBarrier {
    const TYPE_NAME: &'static str = "VkMemoryBarrier";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("outputMask", &mut self.output_mask)?;
        ser.value("inputMask", &mut self.input_mask)
    }
}

impl Serialise for BufferMemoryBarrier {
    const TYPE_NAME: &'static str = "VkBufferMemoryBarrier";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("outputMask", &mut self.output_mask)?;
        ser.value("inputMask", &mut self.input_mask)?;
        ser.value("srcQueueFamilyIndex", &mut self.src_queue_family_index)?;
        ser.value("destQueueFamilyIndex", &mut self.dest_queue_family_index)?;
        ser.handle("buffer", &mut self.buffer)?;
        ser.value("offset", &mut self.offset)?;
        ser.value("size", &mut self.size)
    }
}

impl Serialise for ImageMemoryBarrier {
    const TYPE_NAME: &'static str = "VkImageMemoryBarrier";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("outputMask", &mut self.output_mask)?;
        ser.value("inputMask", &mut self.input_mask)?;
        ser.value("oldLayout", &mut self.old_layout)?;
        ser.value("newLayout", &mut self.new_layout)?;
        ser.value("srcQueueFamilyIndex", &mut self.src_queue_family_index)?;
        ser.value("destQueueFamilyIndex", &mut self.dest_queue_family_index)?;
        ser.handle("image", &mut self.image)?;
        ser.serialise("subresourceRange", &mut self.subresource_range)
    }
}

impl Serialise for SwapChainCreateInfoWSI {
    const TYPE_NAME: &'static str = "VkSwapChainCreateInfoWSI";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.extension_header(self)?;
        ser.value("minImageCount", &mut self.min_image_count)?;
        ser.value("imageFormat", &mut self.image_format)?;
        ser.serialise("imageExtent", &mut self.image_extent)?;
        ser.value("imageUsageFlags", &mut self.image_usage_flags)?;
        ser.value("preTransform", &mut self.pre_transform)?;
        ser.value("imageArraySize", &mut self.image_array_size)?;
        ser.value("presentMode", &mut self.present_mode)?;
        ser.value("clipped", &mut self.clipped)
    }
}
