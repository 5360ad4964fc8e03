use serde::{Deserialize, Serialize};

use crate::types::AccountId;

/// A host account. Only the id and display name are relevant here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String
}

impl Account {
    pub fn new(id: impl Into<AccountId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into()
        }
    }
}
