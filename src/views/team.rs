// src/views/team.rs
use crate::api::{Present, Team};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    /// Always has a scheme; the API often stores bare `www.` hosts.
    pub url: String,
}

/// Add `https://` when the API gave a bare host.
pub fn link_url(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        s!(raw)
    } else {
        join!("https://", raw)
    }
}

/// Website, Facebook, Twitter, Instagram, YouTube in that order; absent ones skipped.
pub fn social_links(team: &Team) -> Vec<SocialLink> {
    [
        ("Website", &team.str_website),
        ("Facebook", &team.str_facebook),
        ("Twitter", &team.str_twitter),
        ("Instagram", &team.str_instagram),
        ("YouTube", &team.str_youtube),
    ]
    .into_iter()
    .filter_map(|(name, url)| url.present().map(|u| SocialLink { name, url: link_url(u) }))
    .collect()
}

/// Avatar text when there is no badge: first two characters, upper-cased.
pub fn initials(name: &str) -> String {
    name.trim().chars().take(2).collect::<String>().to_uppercase()
}

/// "60704" → "60,704". Non-numeric input is None.
pub fn format_capacity(raw: Option<&str>) -> Option<String> {
    let n: u64 = raw?.trim().parse().ok()?;
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_skip_blank_and_get_a_scheme() {
        let team = Team {
            str_website: Some(s!("www.arsenal.com")),
            str_facebook: Some(s!("")),
            str_twitter: Some(s!("https://twitter.com/arsenal")),
            ..Team::default()
        };
        let links = social_links(&team);
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], SocialLink { name: "Website", url: s!("https://www.arsenal.com") });
        assert_eq!(links[1].name, "Twitter");
        assert_eq!(links[1].url, "https://twitter.com/arsenal");
    }

    #[test]
    fn initials_are_two_upper_chars() {
        assert_eq!(initials("arsenal"), "AR");
        assert_eq!(initials("Ö"), "Ö");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn capacity_gets_thousands_separators() {
        assert_eq!(format_capacity(Some("60704")).as_deref(), Some("60,704"));
        assert_eq!(format_capacity(Some("999")).as_deref(), Some("999"));
        assert_eq!(format_capacity(Some("1000000")).as_deref(), Some("1,000,000"));
        assert_eq!(format_capacity(Some("")), None);
        assert_eq!(format_capacity(None), None);
    }
}
