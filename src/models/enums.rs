use serde::{Deserialize, Serialize};

use crate::pipeline::PlanError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire values are kebab-case, matching the intake form's JSON.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = PlanError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(PlanError::Validation {
                        field: stringify!($name).to_lowercase(),
                        reason: format!("'{s}' is not a valid value"),
                    }),
                }
            }
        }
    };
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
});

/// Neck / trunk control level reported on the intake form.
str_enum!(Support {
    Yes => "yes",
    Partially => "partially",
    No => "no",
});

/// Standing / walking ability reported on the intake form.
str_enum!(Mobility {
    Yes => "yes",
    WithAssistance => "with-assistance",
    No => "no",
});
