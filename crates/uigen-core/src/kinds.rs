//! Closed vocabularies shared across the pipeline.
//!
//! Every enum serializes to its wire name (`"pricing-table"`,
//! `"styled-components"`, ...) and parses back from it case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UiGenError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $field:literal {
            $($variant:ident => $wire:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UiGenError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| UiGenError::unknown($field, s))
            }
        }
    };
}

wire_enum! {
    /// UI element categories the parser can recognize
    ComponentKind as "component kind" {
        Button => "button",
        Input => "input",
        Card => "card",
        Modal => "modal",
        Alert => "alert",
        PricingTable => "pricing-table",
        ContactForm => "contact-form",
        Navigation => "navigation",
        Hero => "hero",
        DataTable => "data-table",
    }
}

wire_enum! {
    /// Target UI library
    Framework as "framework" {
        React => "react",
        Vue => "vue",
        Svelte => "svelte",
    }
}

wire_enum! {
    StylingSystem as "styling system" {
        Tailwind => "tailwind",
        Css => "css",
        StyledComponents => "styled-components",
        Emotion => "emotion",
    }
}

wire_enum! {
    Category as "category" {
        Core => "core",
        Composite => "composite",
        Layout => "layout",
    }
}

wire_enum! {
    Complexity as "complexity" {
        Simple => "simple",
        Medium => "medium",
        Complex => "complex",
    }
}

wire_enum! {
    /// Coarse hint about how elaborate the requested variant should be
    VariantHint as "variant hint" {
        Basic => "basic",
        Advanced => "advanced",
        Minimal => "minimal",
        Complete => "complete",
    }
}

impl Default for Framework {
    fn default() -> Self {
        Framework::React
    }
}

impl Default for StylingSystem {
    fn default() -> Self {
        StylingSystem::Tailwind
    }
}

impl Framework {
    /// Human-facing name used in instructions ("React", "Vue", "Svelte")
    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
        }
    }

    /// Packages a project needs for this framework
    pub fn base_packages(&self) -> &'static [&'static str] {
        match self {
            Framework::React => &["react", "@types/react"],
            Framework::Vue => &["vue", "@types/vue"],
            Framework::Svelte => &["svelte", "@types/svelte"],
        }
    }

    /// Language tag for fenced code blocks
    pub fn code_fence(&self) -> &'static str {
        match self {
            Framework::React => "typescript",
            Framework::Vue => "vue",
            Framework::Svelte => "svelte",
        }
    }
}
