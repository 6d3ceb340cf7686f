/// A navigation rail destination.
///
/// The destination is canonical data: rendering it icon-only is a projection
/// done by [`crate::RenderTree`], never a mutation of the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    icon: String,
    selected_icon: String,
    label: String,
    route: Option<String>,
}

impl Destination {
    /// Create a destination whose route is derived from its label.
    pub fn new(
        icon: impl Into<String>,
        selected_icon: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            selected_icon: selected_icon.into(),
            label: label.into(),
            route: None,
        }
    }

    /// Override the route segment instead of slugifying the label.
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn selected_icon(&self) -> &str {
        &self.selected_icon
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the absolute path bound to this destination.
    pub fn path(&self) -> String {
        match self.route.as_deref() {
            Some(route) if !route.is_empty() => {
                format!("/{}", route.trim_start_matches('/'))
            },
            _ => format!("/{}", slugify(&self.label)),
        }
    }
}

/// Make a label URL friendly: `"Developer Team"` becomes `"developer-team"`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.trim().chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(ch.to_lowercase());
        } else if ch == '-' || ch.is_whitespace() {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::{Destination, slugify};

    #[test]
    fn given_plain_label_when_slugified_then_lowercased() {
        assert_eq!(slugify("Input"), "input");
    }

    #[test]
    fn given_label_with_spaces_and_punctuation_when_slugified_then_dashed() {
        assert_eq!(slugify("  Read Me!  "), "read-me");
        assert_eq!(slugify("Fixed -- Point   Iteration"), "fixed-point-iteration");
        assert_eq!(slugify("snake_case"), "snake_case");
    }

    #[test]
    fn given_label_without_route_when_path_requested_then_slug_is_used() {
        let destination = Destination::new("i", "I", "Developer Team");
        assert_eq!(destination.path(), "/developer-team");
    }

    #[test]
    fn given_explicit_route_when_path_requested_then_route_wins() {
        let destination =
            Destination::new("i", "I", "Developer Team").with_route("team");
        assert_eq!(destination.path(), "/team");

        let rooted =
            Destination::new("i", "I", "Developer Team").with_route("/crew");
        assert_eq!(rooted.path(), "/crew");
    }
}
