//! Showcase content consumed by the desktop frontend.
//!
//! Components receive their content as inputs instead of reaching into
//! globals, so the frontend stays testable with synthetic content.

/// Scroll anchor targets for navigation links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    About,
    Projects,
    Contact,
}

/// A navigation entry pointing at a section anchor.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub label: String,
    pub anchor: Anchor,
}

/// A titled prose section.
#[derive(Debug, Clone)]
pub struct Section {
    pub title: String,
    pub body: String,
}

/// A project entry rendered as a tilt card.
#[derive(Debug, Clone)]
pub struct ProjectCard {
    pub title: String,
    pub summary: String,
}

/// Everything the showcase displays.
#[derive(Debug, Clone)]
pub struct SiteContent {
    /// Name revealed by the typewriter.
    pub name: String,
    pub tagline: String,
    pub nav_links: Vec<NavLink>,
    pub about: Section,
    pub projects_title: String,
    pub projects: Vec<ProjectCard>,
    pub contact_title: String,
    pub contact_blurb: String,
    /// Feedback line shown after a (stub) form submission.
    pub acknowledgement: String,
}

impl SiteContent {
    /// The built-in showcase content.
    pub fn default_site() -> Self {
        Self {
            name: "Alex Carter".to_string(),
            tagline: "Systems programmer & creative coder".to_string(),
            nav_links: vec![
                NavLink {
                    label: "About".to_string(),
                    anchor: Anchor::About,
                },
                NavLink {
                    label: "Projects".to_string(),
                    anchor: Anchor::Projects,
                },
                NavLink {
                    label: "Contact".to_string(),
                    anchor: Anchor::Contact,
                },
            ],
            about: Section {
                title: "About".to_string(),
                body: "I build fast, reliable software and the occasional \
                       generative-art experiment. Most of my time goes into \
                       native tooling, rendering pipelines, and making \
                       interfaces feel alive."
                    .to_string(),
            },
            projects_title: "Projects".to_string(),
            projects: vec![
                ProjectCard {
                    title: "Driftfield".to_string(),
                    summary: "GPU particle playground with audio-reactive \
                              emitters."
                        .to_string(),
                },
                ProjectCard {
                    title: "Inkwell".to_string(),
                    summary: "A distraction-free markdown editor with live \
                              typography."
                        .to_string(),
                },
                ProjectCard {
                    title: "Relay".to_string(),
                    summary: "Tiny self-hosted pastebin with end-to-end \
                              encryption."
                        .to_string(),
                },
            ],
            contact_title: "Contact".to_string(),
            contact_blurb: "Have a project in mind? Drop a line below."
                .to_string(),
            acknowledgement: "Message sent (demo). I'll get back to you soon!"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_site_has_one_link_per_anchor() {
        let content = SiteContent::default_site();
        for anchor in [Anchor::About, Anchor::Projects, Anchor::Contact] {
            assert_eq!(
                content
                    .nav_links
                    .iter()
                    .filter(|l| l.anchor == anchor)
                    .count(),
                1
            );
        }
    }

    #[test]
    fn default_site_name_is_nonempty() {
        assert!(!SiteContent::default_site().name.is_empty());
    }
}
