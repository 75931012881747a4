//! Matrix-valued material property as seen by shader generation.
//!
//! Matrix properties never appear in a material's exposed property block;
//! they are declared as plain uniforms, using the `$precision` token that
//! shader generation later replaces with `float` or `half`.

use glam::{Mat4, Vec4};

/// Delimiter ending a uniform declaration.
pub const DEFAULT_DELIMITER: &str = ";";

/// A 4x4 matrix shader property.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixShaderProperty {
    reference_name: String,
    /// Current matrix value.
    pub value: Mat4,
}

#[allow(clippy::unused_self)]
impl MatrixShaderProperty {
    /// New property bound to `reference_name`, initialised to identity.
    #[must_use]
    pub fn new(reference_name: impl Into<String>) -> Self {
        Self {
            reference_name: reference_name.into(),
            value: Mat4::IDENTITY,
        }
    }

    /// Name used for the uniform in generated code.
    #[must_use]
    pub fn reference_name(&self) -> &str {
        &self.reference_name
    }

    /// Entry for the material's property block. Always empty.
    #[must_use]
    pub fn property_block_string(&self) -> String {
        String::new()
    }

    /// Placeholder default used by material inspectors.
    #[must_use]
    pub const fn default_value(&self) -> Vec4 {
        Vec4::ZERO
    }

    /// Matrices can live in a per-material constant buffer.
    #[must_use]
    pub const fn is_batchable(&self) -> bool {
        true
    }

    /// Matrices cannot be exposed on the material inspector.
    #[must_use]
    pub const fn is_exposable(&self) -> bool {
        false
    }

    /// Uniform declaration, terminated by `delimiter`.
    #[must_use]
    pub fn declaration_string(&self, delimiter: &str) -> String {
        format!("$precision4x4 {}{delimiter}", self.reference_name)
    }
}
