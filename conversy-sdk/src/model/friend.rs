use serde::{Deserialize, Serialize};
use yew::AttrValue;

use super::user::User;

/// lifecycle of a friend request on the server
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Accepted,
}

/// the server populates the interesting side of a request with the full
/// profile and leaves the other side as a bare identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RequestParty {
    Id(AttrValue),
    Profile(Box<User>),
}

impl Default for RequestParty {
    fn default() -> Self {
        Self::Id(AttrValue::default())
    }
}

impl RequestParty {
    pub fn id(&self) -> &AttrValue {
        match self {
            Self::Id(id) => id,
            Self::Profile(user) => &user.id,
        }
    }

    pub fn profile(&self) -> Option<&User> {
        match self {
            Self::Id(_) => None,
            Self::Profile(user) => Some(user),
        }
    }
}

/// directed friend request; outgoing reads populate the recipient,
/// incoming reads populate the sender
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FriendRequest {
    #[serde(rename = "_id")]
    pub id: AttrValue,
    pub sender: RequestParty,
    pub recipient: RequestParty,
    #[serde(default)]
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<AttrValue>,
}

/// derived per-user relation, recomputed from the snapshots and never stored
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RelationshipStatus {
    #[default]
    None,
    RequestSent,
    Friends,
}
