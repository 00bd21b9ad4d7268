//! Subscriber registration record.
//!
//! The gateway expects all 23 fields on every registration. Absent values are
//! sent as the literal placeholder `"string"`, never omitted.

use serde::{Deserialize, Serialize};

/// Placeholder the gateway accepts for an unknown registration field.
pub const PLACEHOLDER: &str = "string";

/// Defines the caller-facing optional record and the always-complete wire
/// record from a single field list, so the two can never drift apart.
macro_rules! define_subscriber_fields {
    ($($field:ident),* $(,)?) => {
        /// Registration details supplied by the caller. Every field is optional.
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct SubscriberDetails {
            $(
                #[serde(default, skip_serializing_if = "Option::is_none")]
                pub $field: Option<String>,
            )*
        }

        /// The `extended-data` object sent on registration.
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub struct SubscriberExtendedData {
            $(pub $field: String,)*
        }

        impl SubscriberDetails {
            /// Wire names of every registration field, in wire order.
            pub const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            /// Sets a field by its wire name.
            pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), String> {
                match key {
                    $(stringify!($field) => self.$field = Some(value.into()),)*
                    _ => return Err(format!("Unknown subscriber field: {}", key)),
                }
                Ok(())
            }

            /// Fills every absent field with the placeholder.
            pub fn to_extended_data(&self) -> SubscriberExtendedData {
                SubscriberExtendedData {
                    $(
                        $field: self
                            .$field
                            .clone()
                            .unwrap_or_else(|| PLACEHOLDER.to_string()),
                    )*
                }
            }
        }
    };
}

define_subscriber_fields! {
    nickname,
    msisdn,
    lastname,
    firstname,
    secondname,
    idnumber,
    iddescription,
    idexpirydate,
    tinnumber,
    gender,
    nationality,
    dateofbirth,
    placeofbirth,
    company,
    profession,
    businessname,
    city,
    streetname,
    region,
    country,
    emailaddress,
    alternatenumber,
    accounttype,
}
