use tracing::warn;

/// Looks up the elements a same-document link can scroll to.
pub trait AnchorTargets {
    fn has_target(&self, id: &str) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    pub text: String,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub target: String,
    pub behavior: ScrollBehavior,
}

/// The navigation links of the page.
///
/// At most one link is active at a time.
#[derive(Debug, Default)]
pub struct NavBar {
    links: Vec<NavLink>,
}

impl NavBar {
    pub fn new() -> NavBar {
        Self { links: Vec::new() }
    }

    /// Adds a link to the element with the given id.
    pub fn link(mut self, target_id: &str, text: &str) -> NavBar {
        self.links.push(NavLink {
            href: format!("#{target_id}"),
            text: text.to_owned(),
            active: false,
        });
        self
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active(&self) -> Option<&NavLink> {
        self.links.iter().find(|link| link.active)
    }

    /// Follows the link with the given `href`.
    ///
    /// When the fragment names an existing element the clicked link becomes
    /// the only active one and a smooth scroll to the element is requested.
    /// Otherwise nothing changes.
    pub fn click<T>(&mut self, href: &str, targets: &T) -> Option<ScrollRequest>
    where
        T: AnchorTargets + ?Sized,
    {
        let Some(clicked) = self.links.iter().position(|link| link.href == href) else {
            warn!(href, "no navigation link with this target");
            return None;
        };

        let Some(target) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
            warn!(href, "navigation link is not a same-document fragment");
            return None;
        };

        if !targets.has_target(target) {
            warn!(href, "navigation target not found");
            return None;
        }

        for (idx, link) in self.links.iter_mut().enumerate() {
            link.active = idx == clicked;
        }

        Some(ScrollRequest {
            target: target.to_owned(),
            behavior: ScrollBehavior::Smooth,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Ids(HashSet<&'static str>);

    impl AnchorTargets for Ids {
        fn has_target(&self, id: &str) -> bool {
            self.0.contains(id)
        }
    }

    fn nav() -> NavBar {
        NavBar::new()
            .link("reviews", "Reviews")
            .link("ratings", "Ratings")
            .link("gems", "Hidden Gems")
    }

    #[test]
    fn click_existing_target_activates_only_that_link() {
        let mut nav = nav();
        let targets = Ids(HashSet::from(["reviews", "ratings", "gems"]));

        nav.click("#reviews", &targets);
        let request = nav.click("#ratings", &targets);

        assert_eq!(
            request,
            Some(ScrollRequest {
                target: String::from("ratings"),
                behavior: ScrollBehavior::Smooth,
            })
        );
        assert_eq!(nav.links().iter().filter(|link| link.active).count(), 1);
        assert_eq!(nav.active().unwrap().href, "#ratings");
    }

    #[test]
    fn click_missing_target_changes_nothing() {
        let mut nav = nav();
        let targets = Ids(HashSet::from(["reviews"]));
        nav.click("#reviews", &targets);

        let request = nav.click("#gems", &targets);

        assert_eq!(request, None);
        assert_eq!(nav.active().unwrap().href, "#reviews");
    }

    #[test]
    fn click_unknown_link_changes_nothing() {
        let mut nav = nav();
        let targets = Ids(HashSet::from(["about"]));

        assert_eq!(nav.click("#about", &targets), None);
        assert_eq!(nav.active(), None);
    }
}
