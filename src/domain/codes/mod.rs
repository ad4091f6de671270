//! Coded enumeration registry.
//!
//! Every coded domain of the ESPI/CIM schema is a closed set of variants,
//! each carrying the stable external code defined by the schema (an integer
//! or a token string, never arbitrary). `resolve` is the only way in from a
//! code and fails hard on anything outside the set; `code` is total and
//! injective, so `resolve(code(v)) == v` for every variant and
//! `code(resolve(c)) == c` for every valid code.

pub mod commerce;
pub mod metering;

pub use commerce::{
    Currency, CustomerKind, EnrollmentStatus, NotificationMethodKind, ServiceKind, SupplierKind,
};
pub use metering::{
    AccumulationKind, CommodityKind, DataQualifierKind, FlowDirectionKind, MeasurementKind,
    PhaseCode, QualityOfReading, TimeAttributeKind, UnitMultiplier, UnitSymbol,
    UsagePointConnectedKind,
};

/// Define an integer-coded domain.
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident($domain:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const DOMAIN: &'static str = $domain;

            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Stable external schema code for this variant.
            pub fn code(self) -> i32 {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Look up the variant carrying `code`. Unknown codes are a
            /// hard error; no default is ever substituted.
            pub fn resolve(code: i32) -> $crate::domain::DomainResult<Self> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err($crate::domain::DomainError::invalid_code($domain, other)),
                }
            }
        }
    };
}

/// Define a string-coded domain (external codes are schema token strings).
macro_rules! string_coded_enum {
    (
        $(#[$meta:meta])*
        $name:ident($domain:literal) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            pub const DOMAIN: &'static str = $domain;

            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Stable external schema token for this variant.
            pub fn code(self) -> &'static str {
                match self {
                    $( $name::$variant => $code, )+
                }
            }

            /// Look up the variant carrying `code`. Unknown tokens are a
            /// hard error; no default is ever substituted.
            pub fn resolve(code: &str) -> $crate::domain::DomainResult<Self> {
                match code {
                    $( $code => Ok($name::$variant), )+
                    other => Err($crate::domain::DomainError::invalid_code($domain, other)),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

pub(crate) use coded_enum;
pub(crate) use string_coded_enum;
