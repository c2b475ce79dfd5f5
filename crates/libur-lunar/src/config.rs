use libur_types::LiburError;
use serde::{Deserialize, Serialize};

/// Resolver configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Hijri day offset for local moon sighting (positive = Hijri ahead).
    /// Clamped to [-30, 30].
    pub adjustment: i64,
}

impl ResolverConfig {
    pub fn new() -> Self { Self::default() }

    pub fn adjustment(mut self, adjustment: i64) -> Self {
        self.adjustment = adjustment.clamp(-30, 30);
        self
    }
}

/// Builder with validation for `ResolverConfig`.
#[derive(Debug, Default)]
pub struct ResolverConfigBuilder {
    adjustment: Option<i64>,
    strict_adjustment: bool,
}

impl ResolverConfigBuilder {
    pub fn new() -> Self { Self::default() }

    pub fn adjustment(mut self, adjustment: i64) -> Self { self.adjustment = Some(adjustment); self }

    /// Enables strict adjustment bounds [-2, 2].
    pub fn strict_adjustment(mut self, strict: bool) -> Self { self.strict_adjustment = strict; self }

    /// Builds and validates.
    pub fn build(self) -> Result<ResolverConfig, LiburError> {
        let adjustment = self.adjustment.unwrap_or(0);

        if self.strict_adjustment && !(-2..=2).contains(&adjustment) {
            return Err(LiburError::invalid_config(format!(
                "Adjustment {} outside strict bounds [-2, 2]", adjustment
            )));
        }

        Ok(ResolverConfig::new().adjustment(adjustment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjustment_is_clamped() {
        assert_eq!(ResolverConfig::new().adjustment(90).adjustment, 30);
        assert_eq!(ResolverConfig::new().adjustment(-90).adjustment, -30);
    }

    #[test]
    fn test_strict_builder_rejects_large_offsets() {
        let res = ResolverConfigBuilder::new().adjustment(3).strict_adjustment(true).build();
        assert!(matches!(res, Err(LiburError::InvalidConfiguration { .. })));

        let ok = ResolverConfigBuilder::new().adjustment(-1).strict_adjustment(true).build().unwrap();
        assert_eq!(ok.adjustment, -1);
    }

    #[test]
    fn test_lenient_builder_clamps() {
        let cfg = ResolverConfigBuilder::new().adjustment(45).build().unwrap();
        assert_eq!(cfg.adjustment, 30);
    }
}
