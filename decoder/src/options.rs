use serde::{Deserialize, Serialize};

/// Tuning knobs for [`crate::DecoderTree::build_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Accept declarations that carve a more specific encoding out of a
    /// broader one (hints, canonical nops). The most specific declaration
    /// wins. Overlaps where neither declaration specializes the other are
    /// always rejected.
    pub allow_specializations: bool,

    /// Widest contiguous bit group a single branch may switch on.
    pub max_switch_width: u8,
}

impl BuildOptions {
    pub const DEFAULT_MAX_SWITCH_WIDTH: u8 = 8;

    #[must_use]
    pub const fn strict() -> Self {
        Self {
            allow_specializations: false,
            max_switch_width: Self::DEFAULT_MAX_SWITCH_WIDTH,
        }
    }

    #[must_use]
    pub const fn with_specializations() -> Self {
        Self {
            allow_specializations: true,
            ..Self::strict()
        }
    }

    /// Clamps the switch width into `1..=32`.
    pub(crate) fn switch_width(&self) -> u8 {
        self.max_switch_width.clamp(1, 32)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::strict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = BuildOptions::default();
        assert!(!options.allow_specializations);
        assert_eq!(options.switch_width(), 8);
    }

    #[test]
    fn clamp_switch_width() {
        let options = BuildOptions {
            max_switch_width: 0,
            ..BuildOptions::default()
        };
        assert_eq!(options.switch_width(), 1);

        let options = BuildOptions {
            max_switch_width: 200,
            ..BuildOptions::default()
        };
        assert_eq!(options.switch_width(), 32);
    }

    #[test]
    fn deserialize_partial() {
        let options: BuildOptions =
            serde_json::from_str(r#"{ "allow_specializations": true }"#).unwrap();
        assert_eq!(options, BuildOptions::with_specializations());
    }
}
