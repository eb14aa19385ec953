use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// City and region of a freshly created business.
pub const DEFAULT_LOCATION: &str = "Unspecified";
/// Logo file of a freshly created business.
pub const DEFAULT_LOGO: &str = "default.jpg";

/// A user's business profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Business {
    pub id: Uuid,
    pub business_name: String,
    pub city: String,
    pub region: String,
    pub business_description: Option<String>,
    pub logo: String,
    /// Owning user; at most one business per owner
    pub owner_id: Uuid,
}

/// Input for creating a business
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBusiness {
    pub business_name: String,
    pub owner_id: Uuid,
    pub city: String,
    pub region: String,
    pub business_description: Option<String>,
    pub logo: String,
}

impl CreateBusiness {
    /// The business every new user gets: named after the user, all other
    /// fields defaulted.
    pub fn for_owner(owner_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            business_name: username.into(),
            owner_id,
            city: DEFAULT_LOCATION.to_string(),
            region: DEFAULT_LOCATION.to_string(),
            business_description: None,
            logo: DEFAULT_LOGO.to_string(),
        }
    }
}

impl Business {
    pub fn new(input: CreateBusiness) -> Self {
        Self {
            id: Uuid::now_v7(),
            business_name: input.business_name,
            city: input.city,
            region: input.region,
            business_description: input.business_description,
            logo: input.logo,
            owner_id: input.owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_owner_defaults() {
        let owner_id = Uuid::now_v7();
        let business = Business::new(CreateBusiness::for_owner(owner_id, "alice"));

        assert_eq!(business.business_name, "alice");
        assert_eq!(business.owner_id, owner_id);
        assert_eq!(business.city, "Unspecified");
        assert_eq!(business.region, "Unspecified");
        assert_eq!(business.logo, "default.jpg");
        assert!(business.business_description.is_none());
    }
}
