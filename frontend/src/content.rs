use serde::Deserialize;

const SITE_JSON: &str = include_str!("../content/site.json");

/// All copy shown on the landing page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub menu_label: String,
    pub hero: HeroContent,
    pub about: TextSection,
    pub features: FeatureSection,
    pub stats: StatsSection,
    pub join: JoinSection,
    pub footer: FooterContent,
    pub download_notice: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Id of the section the link scrolls to.
    pub target: String,
}

impl NavLink {
    pub fn href(&self) -> String {
        format!("#{}", self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HeroContent {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

impl HeroContent {
    /// One entry per rendered letter of the title. Spaces become
    /// non-breaking so every letter keeps its own animated span.
    pub fn title_letters(&self) -> Vec<String> {
        self.title
            .chars()
            .map(|c| if c == ' ' { '\u{a0}' } else { c })
            .map(String::from)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextSection {
    pub id: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureSection {
    pub id: String,
    pub title: String,
    pub cards: Vec<FeatureCardContent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeatureCardContent {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatsSection {
    pub id: String,
    pub title: String,
    pub items: Vec<StatContent>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatContent {
    pub value: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JoinSection {
    pub id: String,
    pub title: String,
    pub text: String,
    pub cta: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterContent {
    pub rights: String,
    pub disclaimer: String,
}

impl SiteContent {
    /// Parses the copy compiled into the binary.
    pub fn embedded() -> Result<Self, serde_json::Error> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn section_ids(&self) -> [&str; 5] {
        [
            self.hero.id.as_str(),
            self.about.id.as_str(),
            self.features.id.as_str(),
            self.stats.id.as_str(),
            self.join.id.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.brand, "Primer MC");
        assert_eq!(content.features.cards.len(), 6);
    }

    #[test]
    fn stat_targets_match_page() {
        let content = SiteContent::embedded().unwrap();
        let values: Vec<u32> = content.stats.items.iter().map(|s| s.value).collect();
        assert_eq!(values, vec![500, 15_000, 350, 50]);
    }

    #[test]
    fn nav_links_point_at_sections() {
        let content = SiteContent::embedded().unwrap();
        let ids = content.section_ids();
        for link in &content.nav {
            assert!(ids.contains(&link.target.as_str()), "dangling link {}", link.target);
        }
        assert_eq!(content.nav[0].href(), "#about");
    }

    #[test]
    fn title_letters_keep_spaces_as_nbsp() {
        let content = SiteContent::embedded().unwrap();
        let letters = content.hero.title_letters();
        assert_eq!(letters.len(), 9);
        assert_eq!(letters[0], "P");
        assert_eq!(letters[6], "\u{a0}");
        assert_eq!(letters.concat(), "PRIMER\u{a0}MC");
    }

    #[test]
    fn missing_field_is_an_error() {
        let err = SiteContent::from_json(r#"{"brand": "Primer MC"}"#).unwrap_err();
        assert!(err.is_data());
    }
}
