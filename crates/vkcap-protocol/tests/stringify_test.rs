//! Integration test: enum and bitmask display strings
//!
//! Known values print their exact label, unknown values print the type's
//! fallback with the raw value, and bitmasks join labels in declaration
//! order. Also covers the display forms of extents, offsets and viewports.
//!
//! Run with: cargo test --test stringify_test -- --nocapture

use vkcap_protocol::enums::*;
use vkcap_protocol::flags::{MemoryInputFlags, MemoryOutputFlags, QueueFlags};
use vkcap_protocol::types::{ClearValue, Extent2D, Extent3D, Offset2D, Offset3D, Viewport};

#[test]
fn test_known_enum_values() {
    assert_eq!(Format::R8G8B8A8_UNORM.to_str(), "VK_FORMAT_R8G8B8A8_UNORM");
    assert_eq!(Format::ASTC_4X4_SRGB.to_str(), "VK_FORMAT_ASTC_4x4_SRGB");
    assert_eq!(ImageLayout::PRESENT_SOURCE_WSI.to_str(), "VK_IMAGE_LAYOUT_PRESENT_SOURCE_WSI");
    assert_eq!(
        StructureType::SWAP_CHAIN_CREATE_INFO_WSI.to_str(),
        "VK_STRUCTURE_TYPE_SWAP_CHAIN_CREATE_INFO_WSI"
    );
    assert_eq!(LogicOp::COPY.to_str(), "VK_LOGIC_OP_COPY");
    assert_eq!(Blend::ONE_MINUS_SRC1_ALPHA.to_string(), "VK_BLEND_ONE_MINUS_SRC1_ALPHA");
    assert_eq!(format!("{:?}", CullMode::BACK), "VK_CULL_MODE_BACK");
}

#[test]
fn test_unknown_enum_values_use_fallback() {
    assert_eq!(Format(1234).to_str(), "VkFormat<1234>");
    assert_eq!(ImageLayout(-1).to_str(), "VkImageLayout<-1>");
    assert_eq!(PresentModeWSI(99).to_string(), "VkPresentModeWSI<99>");
    assert_eq!(Blend(77).to_str(), "VkBlend<77>");
    assert!(!CompareOp(42).is_known());
    assert!(CompareOp::ALWAYS.is_known());
}

#[test]
fn test_every_known_value_has_a_label() {
    for format in Format::KNOWN {
        let label = format.to_str();
        assert!(label.starts_with("VK_FORMAT_"), "bad label {}", label);
    }
    for s_type in StructureType::KNOWN {
        assert!(s_type.label().is_some());
    }
    assert_eq!(ShaderStage::KNOWN.len(), 6);
}

#[test]
fn test_empty_flags_print_empty() {
    assert_eq!(QueueFlags::empty().to_str(), "");
    assert_eq!(MemoryInputFlags::default().to_string(), "");
}

#[test]
fn test_single_flag_has_no_separator() {
    assert_eq!(QueueFlags::COMPUTE.to_str(), "VK_QUEUE_COMPUTE_BIT");
    assert_eq!(
        MemoryOutputFlags::TRANSFER.to_str(),
        "VK_MEMORY_OUTPUT_TRANSFER_BIT"
    );
}

#[test]
fn test_flags_join_in_declaration_order() {
    let a = QueueFlags::DMA | QueueFlags::GRAPHICS;
    let b = QueueFlags::GRAPHICS | QueueFlags::DMA;
    assert_eq!(a.to_str(), "VK_QUEUE_GRAPHICS_BIT | VK_QUEUE_DMA_BIT");
    assert_eq!(a.to_str(), b.to_str());

    let input = MemoryInputFlags::TRANSFER | MemoryInputFlags::HOST_READ | MemoryInputFlags::SHADER_READ;
    assert_eq!(
        input.to_str(),
        "VK_MEMORY_INPUT_HOST_READ_BIT | VK_MEMORY_INPUT_SHADER_READ_BIT | VK_MEMORY_INPUT_TRANSFER_BIT"
    );
}

#[test]
fn test_unlabelled_bits_are_ignored() {
    let flags = QueueFlags::from_bits_retain(0x0000_0100) | QueueFlags::EXTENDED;
    assert_eq!(flags.to_str(), "VK_QUEUE_EXTENDED_BIT");
}

#[test]
fn test_geometry_display() {
    assert_eq!(Extent2D { width: 640, height: 480 }.to_string(), "VkExtent<640,480>");
    assert_eq!(
        Extent3D { width: 4, height: 2, depth: 1 }.to_string(),
        "VkExtent<4,2,1>"
    );
    assert_eq!(Offset2D { x: -3, y: 7 }.to_string(), "VkOffset<-3,7>");
    assert_eq!(Offset3D { x: 1, y: 2, z: 3 }.to_string(), "VkOffset<1,2,3>");

    let vp = Viewport {
        origin_x: 0.0,
        origin_y: 0.5,
        width: 1280.0,
        height: 720.0,
        min_depth: 0.0,
        max_depth: 1.0,
    };
    assert_eq!(
        vp.to_string(),
        "VkViewport<0.000000,0.500000, 1280.000000x720.000000, 0.000000-1.000000>"
    );
}

#[test]
fn test_clear_value_views() {
    let color = ClearValue::color_f32([0.25, 0.5, 0.75, 1.0]);
    assert_eq!(color.as_f32(), [0.25, 0.5, 0.75, 1.0]);

    let ints = ClearValue::color_u32([1, 2, 3, u32::MAX]);
    assert_eq!(ints.as_u32(), [1, 2, 3, u32::MAX]);
    assert_eq!(ints.data[..4], 1u32.to_ne_bytes());
}

#[test]
fn test_descriptor_slot_labels() {
    assert_eq!(DescriptorSlotType::DESC_SET.to_str(), "Nested Descriptor");
    assert_eq!(DescriptorSlotType::IMAGE.to_str(), "Image View");
    assert_eq!(DescriptorSlotType::MEMORY.to_str(), "Memory");
    assert_eq!(DescriptorSlotType::SAMPLER.to_string(), "Sampler");
    assert_eq!(DescriptorSlotType::NONE.to_str(), "None");
    assert_eq!(DescriptorSlotType(77).to_str(), "Unknown");
}
