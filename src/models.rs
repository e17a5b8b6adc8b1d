//! Entry Models
//!
//! Wire DTO for the `/todos` API plus the in-progress form draft.

use serde::{Deserialize, Serialize};

/// One to-do entry as exchanged with the backend.
///
/// `to_do_id` is assigned by the server; an empty string marks an entry
/// that has not been created yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToDo {
    pub to_do_id: String,
    pub title: String,
    pub description: String,
}

/// The entry currently being composed in the creation form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    /// True when either field is empty after trimming whitespace.
    pub fn is_blank(&self) -> bool {
        self.title.trim().is_empty() || self.description.trim().is_empty()
    }

    /// POST body for creating this entry. The id stays empty, the server
    /// assigns it.
    pub fn to_create_payload(&self) -> ToDo {
        ToDo {
            to_do_id: String::new(),
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_draft_is_blank() {
        assert!(Draft::default().is_blank());
    }

    #[test]
    fn whitespace_only_field_is_blank() {
        let draft = Draft {
            title: "   ".to_string(),
            description: "2%".to_string(),
        };
        assert!(draft.is_blank());

        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "\t".to_string(),
        };
        assert!(draft.is_blank());
    }

    #[test]
    fn filled_draft_is_not_blank() {
        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        };
        assert!(!draft.is_blank());
    }

    #[test]
    fn create_payload_keeps_fields_and_empty_id() {
        let draft = Draft {
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        };
        let payload = draft.to_create_payload();
        assert_eq!(payload.to_do_id, "");
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.description, "2%");
    }

    #[test]
    fn todo_serializes_with_camel_case_id() {
        let entry = ToDo {
            to_do_id: "1".to_string(),
            title: "Buy milk".to_string(),
            description: "2%".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "toDoId": "1",
                "title": "Buy milk",
                "description": "2%",
            })
        );
    }

    #[test]
    fn todo_list_deserializes_in_server_order() {
        let body = r#"[
            {"toDoId":"2","title":"Buy milk","description":"2%"},
            {"toDoId":"1","title":"Walk dog","description":"evening"}
        ]"#;
        let entries: Vec<ToDo> = serde_json::from_str(body).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].to_do_id, "2");
        assert_eq!(entries[1].to_do_id, "1");
    }
}
