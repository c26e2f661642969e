use bytemuck::{Pod, Zeroable};

/// Size in bytes of the uniform buffer shared with the fragment stage.
pub(crate) const TIME_UNIFORM_SIZE: u64 = std::mem::size_of::<TimeUniform>() as u64;

/// CPU mirror of the `Globals` uniform block: one f32 of elapsed seconds.
///
/// The layout must stay a single 32-bit float at offset 0: the buffer is
/// exactly 4 bytes and the fragment stage reads it as `globals.time`.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub(crate) struct TimeUniform {
    seconds: f32,
}

impl TimeUniform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_seconds(&mut self, seconds: f32) {
        self.seconds = seconds;
    }

    pub fn seconds(&self) -> f32 {
        self.seconds
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_exactly_four_bytes() {
        assert_eq!(TIME_UNIFORM_SIZE, 4);
        assert_eq!(std::mem::align_of::<TimeUniform>(), 4);
    }

    #[test]
    fn uniform_serializes_as_little_endian_f32() {
        let mut uniform = TimeUniform::new();
        uniform.set_seconds(1.5);
        assert_eq!(uniform.as_bytes(), 1.5f32.to_le_bytes());
        assert_eq!(uniform.seconds(), 1.5);
    }

    #[test]
    fn fresh_uniform_starts_at_zero() {
        assert_eq!(TimeUniform::new().seconds(), 0.0);
    }
}
