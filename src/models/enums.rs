use crate::db::DatabaseError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Wire form (serde) is the same string as the database form.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
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

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

str_enum!(AppointmentStatus {
    Confirmed => "confirmed",
    Pending => "pending",
    Canceled => "canceled",
    Failed => "failed",
});

str_enum!(AppointmentType {
    Consultation => "Consultation",
    CheckUp => "Check-up",
    FollowUp => "Follow-up",
    Emergency => "Emergency",
    Procedure => "Procedure",
});

str_enum!(StatusTab {
    Upcoming => "upcoming",
    All => "all",
    Canceled => "canceled",
});

str_enum!(InsuranceScheme {
    Cnss => "CNSS",
    Ramed => "RAMED",
    Private => "Private",
});

str_enum!(PrescriptionStatus {
    Active => "active",
    PendingRenewal => "pending_renewal",
    Completed => "completed",
});

impl Default for AppointmentType {
    fn default() -> Self {
        Self::Consultation
    }
}

impl Default for StatusTab {
    fn default() -> Self {
        Self::All
    }
}
