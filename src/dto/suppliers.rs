use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{Payload, Presence, email_address, not_blank, trimmed};
use crate::entity::suppliers::ActiveModel;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct SupplierPayload {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(value_type = Option<String>, example = "Acme Components")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(custom(function = "email_address"))]
    #[schema(value_type = Option<String>, example = "sales@acme.example")]
    pub contact_email: Option<Option<String>>,
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 15, message = "Ensure this field has no more than 15 characters.")
    )]
    #[schema(value_type = Option<String>, example = "+1-555-0100")]
    pub contact_phone: Option<Option<String>>,
}

impl Payload for SupplierPayload {
    fn required_fields(&self) -> Vec<(&'static str, Presence)> {
        vec![
            ("name", Presence::of(&self.name)),
            ("contact_email", Presence::of(&self.contact_email)),
            ("contact_phone", Presence::of(&self.contact_phone)),
        ]
    }
}

impl SupplierPayload {
    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(Some(name)) = self.name {
            active.name = Set(name);
        }
        if let Some(Some(email)) = self.contact_email {
            active.contact_email = Set(email);
        }
        if let Some(Some(phone)) = self.contact_phone {
            active.contact_phone = Set(phone);
        }
    }
}
