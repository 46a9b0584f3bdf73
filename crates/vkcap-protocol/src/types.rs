use std::fmt;

use bytemuck::{Pod, Zeroable};

use crate::serialiser::{Result, Serialise, Serialiser};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extent2D {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Extent3D {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Offset2D {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Offset3D {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub origin_x: f32,
    pub origin_y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect2D {
    pub offset: Offset2D,
    pub extent: Extent2D,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect3D {
    pub offset: Offset3D,
    pub extent: Extent3D,
}

/// Raw image of the clear value union: four floats, four ints, or
/// depth and stencil. Which one applies depends on the attachment format.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ClearValue {
    pub data: [u8; 16],
}

impl ClearValue {
    pub fn color_f32(rgba: [f32; 4]) -> Self {
        Self { data: bytemuck::cast(rgba) }
    }

    pub fn color_u32(rgba: [u32; 4]) -> Self {
        Self { data: bytemuck::cast(rgba) }
    }

    pub fn depth_stencil(depth: f32, stencil: u32) -> Self {
        let mut words = [0u32; 4];
        words[0] = depth.to_bits();
        words[1] = stencil;
        Self { data: bytemuck::cast(words) }
    }

    pub fn as_f32(&self) -> [f32; 4] {
        bytemuck::cast(self.data)
    }

    pub fn as_u32(&self) -> [u32; 4] {
        bytemuck::cast(self.data)
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct ClearColorValue {
    pub uint32: [u32; 4],
}

impl ClearColorValue {
    pub fn from_f32(rgba: [f32; 4]) -> Self {
        Self { uint32: bytemuck::cast(rgba) }
    }

    pub fn as_f32(&self) -> [f32; 4] {
        bytemuck::cast(self.uint32)
    }
}

impl fmt::Display for Extent2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VkExtent<{},{}>", self.width, self.height)
    }
}

impl fmt::Display for Extent3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VkExtent<{},{},{}>", self.width, self.height, self.depth)
    }
}

impl fmt::Display for Offset2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VkOffset<{},{}>", self.x, self.y)
    }
}

impl fmt::Display for Offset3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VkOffset<{},{},{}>", self.x, self.y, self.z)
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VkViewport<{:.6},{:.6}, {:.6}x{:.6}, {:.6}-{:.6}>",
            self.origin_x, self.origin_y, self.width, self.height, self.min_depth, self.max_depth
        )
    }
}

impl Serialise for Extent2D {
    const TYPE_NAME: &'static str = "VkExtent2D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("width", &mut self.width)?;
        ser.value("height", &mut self.height)
    }
}

impl Serialise for Extent3D {
    const TYPE_NAME: &'static str = "VkExtent3D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("width", &mut self.width)?;
        ser.value("height", &mut self.height)?;
        ser.value("depth", &mut self.depth)
    }
}

impl Serialise for Offset2D {
    const TYPE_NAME: &'static str = "VkOffset2D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("x", &mut self.x)?;
        ser.value("y", &mut self.y)
    }
}

impl Serialise for Offset3D {
    const TYPE_NAME: &'static str = "VkOffset3D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("x", &mut self.x)?;
        ser.value("y", &mut self.y)?;
        ser.value("z", &mut self.z)
    }
}

impl Serialise for Viewport {
    const TYPE_NAME: &'static str = "VkViewport";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.value("originX", &mut self.origin_x)?;
        ser.value("originY", &mut self.origin_y)?;
        ser.value("width", &mut self.width)?;
        ser.value("height", &mut self.height)?;
        ser.value("minDepth", &mut self.min_depth)?;
        ser.value("maxDepth", &mut self.max_depth)
    }
}

impl Serialise for Rect2D {
    const TYPE_NAME: &'static str = "VkRect2D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.serialise("offset", &mut self.offset)?;
        ser.serialise("extent", &mut self.extent)
    }
}

impl Serialise for Rect3D {
    const TYPE_NAME: &'static str = "VkRect3D";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.serialise("offset", &mut self.offset)?;
        ser.serialise("extent", &mut self.extent)
    }
}

impl Serialise for ClearValue {
    const TYPE_NAME: &'static str = "VkClearValue";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.fixed("data", &mut self.data)
    }
}

impl Serialise for ClearColorValue {
    const TYPE_NAME: &'static str = "VkClearColorValue";

    fn serialise_body(&mut self, ser: &mut Serialiser) -> Result<()> {
        ser.fixed("u32", &mut self.uint32)
    }
}
