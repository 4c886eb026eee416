use sea_orm::Set;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use super::{Payload, Presence, not_blank, nullable, trimmed};
use crate::entity::categories::ActiveModel;

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CategoryPayload {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(
        custom(function = "not_blank"),
        length(max = 100, message = "Ensure this field has no more than 100 characters.")
    )]
    #[schema(value_type = Option<String>, example = "Electronics")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, example = "Electronic items")]
    pub description: Option<Option<String>>,
}

impl Payload for CategoryPayload {
    fn required_fields(&self) -> Vec<(&'static str, Presence)> {
        vec![("name", Presence::of(&self.name))]
    }
}

impl CategoryPayload {
    pub fn apply(self, active: &mut ActiveModel) {
        if let Some(Some(name)) = self.name {
            active.name = Set(name);
        }
        if let Some(description) = self.description {
            active.description = Set(description);
        }
    }
}
