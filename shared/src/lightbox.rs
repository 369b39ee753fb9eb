/// Shown when neither the thumbnail nor its enclosing project card carries a
/// description.
pub const FALLBACK_DESCRIPTION: &str = "No description available.";

/// Overlay content derived from a clicked thumbnail. Nothing is retained
/// between openings; every open derives fresh from the source element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxContent {
    pub image_src: String,
    pub description: String,
}

/// Resolve the overlay content for a thumbnail: its own description attribute
/// wins, then the enclosing card's, then the fixed placeholder. Empty
/// attributes count as absent.
pub fn derive_content(
    image_src: &str,
    own_desc: Option<&str>,
    card_desc: Option<&str>,
) -> LightboxContent {
    let description = non_empty(own_desc)
        .or_else(|| non_empty(card_desc))
        .unwrap_or(FALLBACK_DESCRIPTION);
    LightboxContent {
        image_src: image_src.to_string(),
        description: description.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{FALLBACK_DESCRIPTION, derive_content};

    #[test]
    fn own_description_wins() {
        let content = derive_content("a.jpg", Some("robot close-up"), Some("card blurb"));
        assert_eq!(content.description, "robot close-up");
        assert_eq!(content.image_src, "a.jpg");
    }

    #[test]
    fn falls_back_to_enclosing_card() {
        let content = derive_content("a.jpg", None, Some("card blurb"));
        assert_eq!(content.description, "card blurb");
    }

    #[test]
    fn placeholder_when_nothing_is_set() {
        let content = derive_content("a.jpg", None, None);
        assert_eq!(content.description, FALLBACK_DESCRIPTION);
    }

    #[test]
    fn empty_attributes_count_as_absent() {
        let content = derive_content("a.jpg", Some(""), Some(""));
        assert_eq!(content.description, FALLBACK_DESCRIPTION);

        let content = derive_content("a.jpg", Some(""), Some("card blurb"));
        assert_eq!(content.description, "card blurb");
    }
}
