//! Integration test: chained extension structures
//!
//! Verifies type-directed dispatch of `pNext` payloads, the skip and fail
//! policies for unknown type tags, recorded-length validation and the
//! nesting depth bound.
//!
//! Run with: cargo test --test chain_test -- --nocapture

mod common;

use common::{read, write};
use vkcap_protocol::enums::StructureType;
use vkcap_protocol::vulkan_structs::*;
use vkcap_protocol::{
    ExtensionPolicy, NextStruct, SerialiseError, Serialiser, StreamContext, StreamLimits,
    StructuredValue,
};

/// Offsets into a written `BufferCreateInfo` carrying a chain.
const S_TYPE_AT: usize = 5;
const LENGTH_AT: usize = 9;
const PAYLOAD_AT: usize = 13;

fn chained_buffer_info() -> BufferCreateInfo {
    BufferCreateInfo {
        size: 4096,
        usage: 0x80,
        flags: 1,
        next: Some(Box::new(NextStruct::from(MemoryAllocInfo {
            allocation_size: 1 << 20,
            memory_type_index: 3,
            ..Default::default()
        }))),
        ..Default::default()
    }
}

fn with_policy(policy: ExtensionPolicy) -> StreamContext {
    StreamContext::detached().with_limits(StreamLimits {
        unknown_extensions: policy,
        ..Default::default()
    })
}

fn patch_s_type(bytes: &mut [u8], s_type: i32) {
    bytes[S_TYPE_AT..LENGTH_AT].copy_from_slice(&s_type.to_le_bytes());
}

#[test]
fn test_chain_roundtrip() {
    let ctx = StreamContext::detached();
    let mut info = chained_buffer_info();
    let bytes = write(&ctx, &mut info);

    let declared = u32::from_le_bytes([
        bytes[LENGTH_AT],
        bytes[LENGTH_AT + 1],
        bytes[LENGTH_AT + 2],
        bytes[LENGTH_AT + 3],
    ]);
    // tag + hasNext + allocationSize + memoryTypeIndex
    assert_eq!(declared, 4 + 1 + 8 + 4);
    assert_eq!(bytes.len(), PAYLOAD_AT + declared as usize + 8 + 4 + 4);

    let back: BufferCreateInfo = read(&ctx, bytes).expect("read failed");
    assert_eq!(back, info);
    match back.next.as_deref() {
        Some(NextStruct::MemoryAllocInfo(alloc)) => {
            assert_eq!(alloc.allocation_size, 1 << 20);
            assert_eq!(alloc.memory_type_index, 3);
        }
        other => panic!("expected MemoryAllocInfo, got {:?}", other),
    }
}

#[test]
fn test_nested_chain_roundtrip() {
    let ctx = StreamContext::detached();
    let inner = SamplerCreateInfo {
        max_anisotropy: 16.0,
        ..Default::default()
    };
    let middle = PipelineTessellationStateCreateInfo {
        patch_control_points: 3,
        next: Some(Box::new(inner.into())),
        ..Default::default()
    };
    let mut info = ImageCreateInfo {
        mip_levels: 10,
        next: Some(Box::new(middle.into())),
        ..Default::default()
    };

    let bytes = write(&ctx, &mut info);
    let back: ImageCreateInfo = read(&ctx, bytes).expect("read failed");
    assert_eq!(back, info);

    let middle = match back.next.as_deref() {
        Some(NextStruct::PipelineTessellationStateCreateInfo(m)) => m,
        other => panic!("expected PipelineTessellationStateCreateInfo, got {:?}", other),
    };
    match middle.next.as_deref() {
        Some(next) => assert_eq!(next.structure_type(), StructureType::SAMPLER_CREATE_INFO),
        None => panic!("inner chain link missing"),
    }
}

#[test]
fn test_unknown_extension_is_skipped() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    patch_s_type(&mut bytes, 9999);

    let back: BufferCreateInfo =
        read(&with_policy(ExtensionPolicy::Skip), bytes).expect("skip policy must not fail");
    assert!(back.next.is_none());
    assert_eq!(back.size, 4096);
    assert_eq!(back.usage, 0x80);
    assert_eq!(back.flags, 1);
}

#[test]
fn test_unregistered_known_type_is_skipped() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    patch_s_type(&mut bytes, StructureType::FENCE_CREATE_INFO.0);

    assert!(NextStruct::empty_for(StructureType::FENCE_CREATE_INFO).is_none());
    let back: BufferCreateInfo = read(&StreamContext::detached(), bytes).expect("read failed");
    assert!(back.next.is_none());
    assert_eq!(back.size, 4096);
}

#[test]
fn test_unknown_extension_fails_under_fail_policy() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    patch_s_type(&mut bytes, 9999);

    match read::<BufferCreateInfo>(&with_policy(ExtensionPolicy::Fail), bytes) {
        Err(SerialiseError::UnknownExtension { s_type, .. }) => {
            assert_eq!(s_type, StructureType(9999));
            assert_eq!(s_type.to_str(), "VkStructureType<9999>");
        }
        other => panic!("expected UnknownExtension, got {:?}", other),
    }
}

#[test]
fn test_skipped_extension_in_structured_tree() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    patch_s_type(&mut bytes, 9999);

    let mut inspector = Serialiser::inspector(bytes, StreamContext::detached());
    inspector
        .read::<BufferCreateInfo>("CreateInfo")
        .expect("inspect failed");
    let tree = inspector.take_structured();
    let root = &tree[0];
    match &root.child("sType").expect("no sType node").value {
        StructuredValue::Enum { raw: 9999, label } => assert_eq!(label, "VkStructureType<9999>"),
        other => panic!("expected Enum, got {:?}", other),
    }
    match &root.child("pNext").expect("no pNext node").value {
        StructuredValue::Buffer { size: 17 } => {}
        other => panic!("expected Buffer, got {:?}", other),
    }
}

#[test]
fn test_chain_length_mismatch_is_fatal() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    bytes[LENGTH_AT..PAYLOAD_AT].copy_from_slice(&18u32.to_le_bytes());

    match read::<BufferCreateInfo>(&StreamContext::detached(), bytes) {
        Err(SerialiseError::ChainLengthMismatch {
            s_type,
            declared,
            consumed,
        }) => {
            assert_eq!(s_type, StructureType::MEMORY_ALLOC_INFO);
            assert_eq!(declared, 18);
            assert_eq!(consumed, 17);
        }
        other => panic!("expected ChainLengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_chain_length_past_end_is_fatal() {
    let mut info = chained_buffer_info();
    let mut bytes = write(&StreamContext::detached(), &mut info);
    bytes[LENGTH_AT..PAYLOAD_AT].copy_from_slice(&10_000u32.to_le_bytes());
    patch_s_type(&mut bytes, 9999);

    match read::<BufferCreateInfo>(&StreamContext::detached(), bytes) {
        Err(SerialiseError::UnexpectedEof { field: "pNext", needed: 10_000, .. }) => {}
        other => panic!("expected UnexpectedEof, got {:?}", other),
    }
}

#[test]
fn test_deep_chain_exceeds_depth_limit() {
    let mut next: Option<Box<NextStruct>> = None;
    for level in 0..6 {
        let link = PipelineViewportStateCreateInfo {
            viewport_count: level,
            next: next.take(),
            ..Default::default()
        };
        next = Some(Box::new(link.into()));
    }
    let mut info = BufferCreateInfo {
        next,
        ..Default::default()
    };

    let bytes = write(&StreamContext::detached(), &mut info);
    let back: BufferCreateInfo = read(&StreamContext::detached(), bytes.clone()).expect("read failed");
    assert_eq!(back, info);

    let shallow = StreamContext::detached().with_limits(StreamLimits {
        max_depth: 4,
        ..Default::default()
    });
    match read::<BufferCreateInfo>(&shallow, bytes) {
        Err(SerialiseError::DepthExceeded { max: 4, .. }) => {}
        other => panic!("expected DepthExceeded, got {:?}", other),
    }
}

#[test]
fn test_dispatch_covers_registered_types() {
    for s_type in [
        StructureType::DEVICE_CREATE_INFO,
        StructureType::GRAPHICS_PIPELINE_CREATE_INFO,
        StructureType::RENDER_PASS_BEGIN_INFO,
        StructureType::IMAGE_MEMORY_BARRIER,
        StructureType::SWAP_CHAIN_CREATE_INFO_WSI,
    ] {
        match NextStruct::empty_for(s_type) {
            Some(next) => assert_eq!(next.structure_type(), s_type),
            None => panic!("no chain entry for {}", s_type),
        }
    }
    assert!(NextStruct::empty_for(StructureType(-5)).is_none());
}
