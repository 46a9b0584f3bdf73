use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ResolveError;

/// A capture-stable name for one logical resource.
/// Issued by the resource manager at capture time and resolved back to a
/// live handle at replay time. Zero is reserved for the null handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u64);

impl ResourceId {
    pub const NULL: ResourceId = ResourceId(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResID_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    None,
    Device,
    DeviceMemory,
    Buffer,
    BufferView,
    Image,
    ImageView,
    AttachmentView,
    Sampler,
    ShaderModule,
    Shader,
    Pipeline,
    PipelineLayout,
    PipelineCache,
    DescriptorSetLayout,
    DescriptorPool,
    DescriptorSet,
    RenderPass,
    Framebuffer,
    CmdPool,
    CmdBuffer,
    DynamicViewportState,
    DynamicRasterState,
    DynamicColorBlendState,
    DynamicDepthStencilState,
    SwapChain,
}

impl ResourceType {
    /// API-level type name, used in structured dumps.
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::None => "None",
            ResourceType::Device => "VkDevice",
            ResourceType::DeviceMemory => "VkDeviceMemory",
            ResourceType::Buffer => "VkBuffer",
            ResourceType::BufferView => "VkBufferView",
            ResourceType::Image => "VkImage",
            ResourceType::ImageView => "VkImageView",
            ResourceType::AttachmentView => "VkAttachmentView",
            ResourceType::Sampler => "VkSampler",
            ResourceType::ShaderModule => "VkShaderModule",
            ResourceType::Shader => "VkShader",
            ResourceType::Pipeline => "VkPipeline",
            ResourceType::PipelineLayout => "VkPipelineLayout",
            ResourceType::PipelineCache => "VkPipelineCache",
            ResourceType::DescriptorSetLayout => "VkDescriptorSetLayout",
            ResourceType::DescriptorPool => "VkDescriptorPool",
            ResourceType::DescriptorSet => "VkDescriptorSet",
            ResourceType::RenderPass => "VkRenderPass",
            ResourceType::Framebuffer => "VkFramebuffer",
            ResourceType::CmdPool => "VkCmdPool",
            ResourceType::CmdBuffer => "VkCmdBuffer",
            ResourceType::DynamicViewportState => "VkDynamicViewportState",
            ResourceType::DynamicRasterState => "VkDynamicRasterState",
            ResourceType::DynamicColorBlendState => "VkDynamicColorBlendState",
            ResourceType::DynamicDepthStencilState => "VkDynamicDepthStencilState",
            ResourceType::SwapChain => "VkSwapChainWSI",
        }
    }
}

/// A context-local driver object handle. Raw value 0 is the null handle.
pub trait ResourceHandle: Copy + Default + Eq + fmt::Debug + 'static {
    const TYPE: ResourceType;

    fn from_raw(raw: u64) -> Self;
    fn as_raw(self) -> u64;

    fn null() -> Self {
        Self::from_raw(0)
    }

    fn is_null(self) -> bool {
        self.as_raw() == 0
    }
}

/// Translates handles to stable ids (write path) and ids back to live
/// handles (read path). One tracker is the single id authority for a
/// capture or replay session; it is injected into every serialiser.
pub trait ResourceTracker {
    fn stable_id(&self, ty: ResourceType, raw: u64) -> Result<ResourceId, ResolveError>;
    fn live_handle(&self, ty: ResourceType, id: ResourceId) -> Result<u64, ResolveError>;
}

macro_rules! define_handles {
    ($($(#[$meta:meta])* $name:ident => $kind:ident $(, $ash:ty)?;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            #[repr(transparent)]
            pub struct $name(pub u64);

            impl ResourceHandle for $name {
                const TYPE: ResourceType = ResourceType::$kind;

                fn from_raw(raw: u64) -> Self {
                    Self(raw)
                }

                fn as_raw(self) -> u64 {
                    self.0
                }
            }

            $(
                impl From<$ash> for $name {
                    fn from(handle: $ash) -> Self {
                        Self(ash::vk::Handle::as_raw(handle))
                    }
                }

                impl From<$name> for $ash {
                    fn from(handle: $name) -> Self {
                        <$ash as ash::vk::Handle>::from_raw(handle.0)
                    }
                }
            )?
        )*
    };
}

define_handles! {
    Device => Device, ash::vk::Device;
    DeviceMemory => DeviceMemory, ash::vk::DeviceMemory;
    Buffer => Buffer, ash::vk::Buffer;
    BufferView => BufferView, ash::vk::BufferView;
    Image => Image, ash::vk::Image;
    ImageView => ImageView, ash::vk::ImageView;
    /// Render target view; folded into image views by later API revisions.
    AttachmentView => AttachmentView;
    Sampler => Sampler, ash::vk::Sampler;
    ShaderModule => ShaderModule, ash::vk::ShaderModule;
    /// Entry point bound to a shader module.
    Shader => Shader;
    Pipeline => Pipeline, ash::vk::Pipeline;
    PipelineLayout => PipelineLayout, ash::vk::PipelineLayout;
    PipelineCache => PipelineCache, ash::vk::PipelineCache;
    DescriptorSetLayout => DescriptorSetLayout, ash::vk::DescriptorSetLayout;
    DescriptorPool => DescriptorPool, ash::vk::DescriptorPool;
    DescriptorSet => DescriptorSet, ash::vk::DescriptorSet;
    RenderPass => RenderPass, ash::vk::RenderPass;
    Framebuffer => Framebuffer, ash::vk::Framebuffer;
    CmdPool => CmdPool, ash::vk::CommandPool;
    CmdBuffer => CmdBuffer, ash::vk::CommandBuffer;
    DynamicViewportState => DynamicViewportState;
    DynamicRasterState => DynamicRasterState;
    DynamicColorBlendState => DynamicColorBlendState;
    DynamicDepthStencilState => DynamicDepthStencilState;
    SwapChain => SwapChain, ash::vk::SwapchainKHR;
}
