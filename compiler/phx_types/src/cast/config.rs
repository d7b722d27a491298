//! Cast strictness configuration.

/// Options that loosen the configured cast mode.
///
/// The `*_without_config` entry points of [`Caster`](crate::Caster) ignore
/// these and always apply the strict rules.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CastConfig {
    /// Let null (and nullable types) flow into non-nullable positions.
    pub null_casts_as_any_type: bool,
    /// Let any scalar flow into any other scalar position (`int` to `string`, ...).
    pub scalar_implicit_cast: bool,
}

impl CastConfig {
    /// Strict rules: nothing is loosened.
    pub const STRICT: Self = Self {
        null_casts_as_any_type: false,
        scalar_implicit_cast: false,
    };

    /// Every loosening option enabled.
    pub const fn permissive() -> Self {
        Self {
            null_casts_as_any_type: true,
            scalar_implicit_cast: true,
        }
    }

    #[must_use]
    pub const fn with_null_casts_as_any_type(mut self, enabled: bool) -> Self {
        self.null_casts_as_any_type = enabled;
        self
    }

    #[must_use]
    pub const fn with_scalar_implicit_cast(mut self, enabled: bool) -> Self {
        self.scalar_implicit_cast = enabled;
        self
    }
}
