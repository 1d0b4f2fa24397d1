//! Core Entity Trait
//!
//! Every persisted record carries a server-assigned id. Records built by a
//! form have no id until the server answers.

/// Core trait for all API entities
pub trait Entity: Clone {
    /// Server-assigned identifier, `None` before creation
    fn id(&self) -> Option<u32>;
}

/// First entity in `items` with the given id
pub fn find_by_id<T: Entity>(items: &[T], id: u32) -> Option<&T> {
    items.iter().find(|item| item.id() == Some(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Course;

    #[test]
    fn test_find_by_id_skips_unsaved() {
        let courses = vec![
            Course::new("DRAFT", "Unsaved", 3),
            Course { id: Some(7), ..Course::new("CS101", "Intro", 4) },
        ];
        assert_eq!(find_by_id(&courses, 7).map(|c| c.code.as_str()), Some("CS101"));
        assert!(find_by_id(&courses, 8).is_none());
    }
}
