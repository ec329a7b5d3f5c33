use linked_hash_set::LinkedHashSet;
use serde::{Deserialize, Serialize};
use serenity::model::id::UserId;
use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
};

/// Insertion-ordered collection of players, so pools and join queues keep
/// the order in which people signed up.
pub type Participants = LinkedHashSet<Participant>;

/// A player known to the lobby: a Discord user id plus the display name the
/// presentation layer should use. Identity is the id alone.
#[derive(Clone, Debug, Eq, Deserialize, Serialize)]
pub struct Participant {
    user_id: UserId,
    name: String,
}

impl PartialEq for Participant {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id
    }
}

impl PartialEq<UserId> for Participant {
    fn eq(&self, other: &UserId) -> bool {
        self.user_id == *other
    }
}

impl Hash for Participant {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.user_id.hash(state);
    }
}

impl Borrow<UserId> for Participant {
    /// Facilitates identifying instances of [`Participant`] within
    /// collections, so get, insertion, removal, can be done by providing a
    /// [`UserId`] (borrowed) as argument.
    fn borrow(&self) -> &UserId {
        &self.user_id
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Participant {
    pub fn new(user_id: UserId, name: impl Into<String>) -> Self {
        Participant {
            user_id,
            name: name.into(),
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
