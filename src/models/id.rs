use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// Store-assigned identifiers. Both serialize as plain JSON strings.
macro_rules! document_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn generate() -> Self {
                Self(Uuid::new_v4().simple().to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

document_id!(UserId);
document_id!(JobId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = UserId::generate();
        let json = serde_json::to_value(&id).unwrap();
        assert_eq!(json, serde_json::Value::String(id.to_string()));
        assert_eq!(id.to_string().len(), 32);
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(JobId::generate(), JobId::generate());
    }
}
