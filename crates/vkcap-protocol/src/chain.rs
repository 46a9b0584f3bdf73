use tracing::warn;

use crate::enums::StructureType;
use crate::error::SerialiseError;
use crate::serialiser::{ExtensionPolicy, Result, Serialise, Serialiser};
use crate::structured::StructuredValue;
use crate::vulkan_structs as structs;

/// A structure that declares its own type tag and may carry a chained
/// extension.
pub trait Extensible: Serialise {
    const STRUCTURE_TYPE: StructureType;

    fn structure_type(&self) -> StructureType;

    fn next_mut(&mut self) -> &mut Option<Box<NextStruct>>;
}

macro_rules! next_structs {
    ($($variant:ident,)*) => {
        /// A chained extension structure, dispatched on its structure type.
        #[derive(Debug, Clone, PartialEq)]
        pub enum NextStruct {
            $($variant(structs::$variant),)*
        }

        impl NextStruct {
            pub fn structure_type(&self) -> StructureType {
                match self {
                    $(NextStruct::$variant(v) => v.structure_type(),)*
                }
            }

            /// A default instance of the structure registered for `s_type`.
            pub fn empty_for(s_type: StructureType) -> Option<Self> {
                $(
                    if s_type == <structs::$variant as Extensible>::STRUCTURE_TYPE {
                        return Some(NextStruct::$variant(Default::default()));
                    }
                )*
                None
            }

            fn serialise_payload(&mut self, ser: &mut Serialiser) -> Result<()> {
                match self {
                    $(NextStruct::$variant(v) => ser.serialise("pNext", v),)*
                }
            }
        }

        $(
            impl From<structs::$variant> for NextStruct {
                fn from(v: structs::$variant) -> Self {
                    NextStruct::$variant(v)
                }
            }
        )*
    };
}

next_structs! {
    DeviceCreateInfo,
    MemoryAllocInfo,
    BufferCreateInfo,
    BufferViewCreateInfo,
    ImageCreateInfo,
    ImageViewCreateInfo,
    AttachmentViewCreateInfo,
    ShaderModuleCreateInfo,
    ShaderCreateInfo,
    PipelineShaderStageCreateInfo,
    PipelineVertexInputStateCreateInfo,
    PipelineInputAssemblyStateCreateInfo,
    PipelineTessellationStateCreateInfo,
    PipelineViewportStateCreateInfo,
    PipelineRasterStateCreateInfo,
    PipelineMultisampleStateCreateInfo,
    PipelineColorBlendStateCreateInfo,
    PipelineDepthStencilStateCreateInfo,
    GraphicsPipelineCreateInfo,
    ComputePipelineCreateInfo,
    PipelineCacheCreateInfo,
    PipelineLayoutCreateInfo,
    SamplerCreateInfo,
    DescriptorSetLayoutCreateInfo,
    DescriptorPoolCreateInfo,
    WriteDescriptorSet,
    CopyDescriptorSet,
    DynamicViewportStateCreateInfo,
    DynamicRasterStateCreateInfo,
    DynamicColorBlendStateCreateInfo,
    DynamicDepthStencilStateCreateInfo,
    AttachmentDescription,
    SubpassDescription,
    SubpassDependency,
    RenderPassCreateInfo,
    RenderPassBeginInfo,
    FramebufferCreateInfo,
    CmdBufferCreateInfo,
    CmdBufferBeginInfo,
    MemoryBarrier,
    BufferMemoryBarrier,
    ImageMemoryBarrier,
    SwapChainCreateInfoWSI,
}

/// Chain layout: `hasNext`, then `sType`, a u32 payload length and the
/// payload of the matching structure.
pub(crate) fn serialise_next(ser: &mut Serialiser, next: &mut Option<Box<NextStruct>>) -> Result<()> {
    let mut has_next = next.is_some();
    ser.value("hasNext", &mut has_next)?;

    if !has_next {
        if ser.is_reading() {
            *next = None;
        }
        return Ok(());
    }

    if ser.is_writing() {
        let Some(inner) = next.as_deref_mut() else {
            return Ok(());
        };
        let mut s_type = inner.structure_type();
        ser.value("sType", &mut s_type)?;
        let slot = ser.reserve_u32();
        let start = ser.position();
        inner.serialise_payload(ser)?;
        let len = ser.position() - start;
        let len = u32::try_from(len)
            .map_err(|_| SerialiseError::TooManyElements { field: "pNext", len })?;
        ser.patch_u32(slot, len);
        return Ok(());
    }

    let mut s_type = StructureType::default();
    ser.value("sType", &mut s_type)?;
    let mut declared = 0u32;
    ser.raw("pNext", &mut declared)?;

    let remaining = ser.remaining();
    if declared as usize > remaining {
        return Err(SerialiseError::UnexpectedEof {
            field: "pNext",
            needed: declared as usize,
            remaining,
        });
    }

    let start = ser.position();
    match NextStruct::empty_for(s_type) {
        Some(mut inner) => {
            inner.serialise_payload(ser)?;
            let consumed = ser.position() - start;
            if consumed != declared as usize {
                return Err(SerialiseError::ChainLengthMismatch {
                    s_type,
                    declared,
                    consumed,
                });
            }
            *next = Some(Box::new(inner));
        }
        None => match ser.context().limits().unknown_extensions {
            ExtensionPolicy::Skip => {
                warn!("skipping unknown chained extension {} ({} bytes)", s_type, declared);
                ser.advance("pNext", declared as usize)?;
                ser.record("pNext", "VkUnknownExtension", || StructuredValue::Buffer {
                    size: u64::from(declared),
                });
                *next = None;
            }
            ExtensionPolicy::Fail => {
                return Err(SerialiseError::UnknownExtension {
                    field: "pNext",
                    s_type,
                });
            }
        },
    }
    Ok(())
}
