use serde::{Deserialize, Serialize};

/// One unit of content: a heading, a paragraph and an ordered bullet list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

impl Slide {
    pub fn new(title: &str, description: &str, bullets: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullets_default_to_empty() {
        let slide: Slide = serde_json::from_str(r#"{"title":"T","description":"D"}"#).unwrap();
        assert_eq!(slide.title, "T");
        assert!(slide.bullets.is_empty());
    }

    #[test]
    fn test_bullet_order_preserved() {
        let slide = Slide::new("T", "D", &["one", "two", "three"]);
        assert_eq!(slide.bullets, vec!["one", "two", "three"]);
    }
}
