use fpi_ui_layout::Destination;

use crate::shared::ui::icons;

/// Pages reachable from the navigation rail, in rail order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageKind {
    Input,
    Animation,
    Output,
    Team,
    Info,
}

/// Static text shown on a page card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageContent {
    pub(crate) title: &'static str,
    pub(crate) body: &'static [&'static str],
}

impl PageKind {
    pub(crate) const ALL: [PageKind; 5] = [
        PageKind::Input,
        PageKind::Animation,
        PageKind::Output,
        PageKind::Team,
        PageKind::Info,
    ];

    /// Rail label; the route is derived from it.
    pub(crate) fn label(self) -> &'static str {
        match self {
            PageKind::Input => "Input",
            PageKind::Animation => "Animation",
            PageKind::Output => "Output",
            PageKind::Team => "Team",
            PageKind::Info => "Info",
        }
    }

    /// `(icon, selected_icon)` glyph pair.
    pub(crate) fn icons(self) -> (&'static str, &'static str) {
        match self {
            PageKind::Input => (icons::INPUT, icons::INPUT_SELECTED),
            PageKind::Animation => {
                (icons::ANIMATION, icons::ANIMATION_SELECTED)
            },
            PageKind::Output => (icons::OUTPUT, icons::OUTPUT_SELECTED),
            PageKind::Team => (icons::TEAM, icons::TEAM_SELECTED),
            PageKind::Info => (icons::INFO, icons::INFO_SELECTED),
        }
    }

    pub(crate) fn content(self) -> PageContent {
        match self {
            PageKind::Input => PageContent {
                title: "Input",
                body: &["Upload JSON file"],
            },
            PageKind::Animation => PageContent {
                title: "Animation",
                body: &[],
            },
            PageKind::Output => PageContent {
                title: "Output",
                body: &["Export JSON file"],
            },
            PageKind::Team => PageContent {
                title: "Developer Team",
                body: &["Çağrı KARTAL", "Eren ATASUN", "Eren AYDOĞDU"],
            },
            PageKind::Info => PageContent {
                title: "Read Me",
                body: &[
                    "Inputs:",
                    "- f(x): The function to find its root",
                    "- x_0: The initial guess for iterative process",
                    "- tol: A value, which is very close to zero, to stop \
                     the iterations",
                    "- max_iter: The maximum number of iterations",
                    "",
                    "Outputs:",
                ],
            },
        }
    }
}

/// Destinations and pages in rail order.
pub(crate) fn registry() -> Vec<(Destination, PageKind)> {
    PageKind::ALL
        .into_iter()
        .map(|page| {
            let (icon, selected_icon) = page.icons();
            (Destination::new(icon, selected_icon, page.label()), page)
        })
        .collect()
}
