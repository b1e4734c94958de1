use std::borrow::Cow;

// structs and types

// a card in the "My Expertise" section of the home page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectEntry {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],

    // empty means "use the numbered placeholder", see image_src()
    pub image: &'static str,
    pub demo_url: &'static str,
    pub github_url: &'static str,
}

// what a card shows of a project's technology list: the first few tags and,
// if anything was cut, how many
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagSummary {
    pub shown: &'static [&'static str],
    pub overflow: Option<usize>,
}

impl ProjectEntry {
    pub fn tag_summary(&self, max: usize) -> TagSummary {
        let technologies: &'static [&'static str] = self.technologies;
        let shown = &technologies[..technologies.len().min(max)];
        let hidden = technologies.len() - shown.len();

        TagSummary {
            shown,
            overflow: (hidden > 0).then_some(hidden),
        }
    }

    // position is the 0-based slot on the projects page; placeholders are numbered from 1
    pub fn image_src(&self, position: usize) -> Cow<'static, str> {
        if self.image.is_empty() {
            Cow::Owned(format!("/project-placeholder-{}.jpg", position + 1))
        } else {
            Cow::Borrowed(self.image)
        }
    }
}

// grid cards only have room for this many tags
pub const GRID_TAG_LIMIT: usize = 3;

pub const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        title: "Frontend Development",
        description: "Building responsive and interactive UIs with React, Next.js, and Tailwind CSS.",
        icon: "💻",
    },
    Highlight {
        title: "Backend Development",
        description: "Creating robust server-side applications with Java, Spring, and RESTful APIs.",
        icon: "⚙️",
    },
    Highlight {
        title: "Web Design",
        description: "Designing modern, user-friendly interfaces with a focus on accessibility and user experience.",
        icon: "🎨",
    },
];

pub const PROJECTS: &[ProjectEntry] = &[
    ProjectEntry {
        id: 1,
        title: "E-commerce Platform",
        description: "A full-featured e-commerce platform with product listings, cart functionality, payment processing, and user authentication.",
        technologies: &["React", "Node.js", "MongoDB", "Express", "Stripe"],
        image: "/ecommerce.png",
        demo_url: "https://example.com/demo1",
        github_url: "https://github.com/username/project1",
    },
    ProjectEntry {
        id: 2,
        title: "Task Management App",
        description: "A collaborative task management application with real-time updates, team assignment, and progress tracking.",
        technologies: &["React", "Firebase", "Tailwind CSS", "Redux"],
        image: "/task management app image.png",
        demo_url: "https://example.com/demo2",
        github_url: "https://github.com/username/project2",
    },
    ProjectEntry {
        id: 3,
        title: "Weather Dashboard",
        description: "A responsive weather dashboard that displays current conditions and forecasts for multiple locations using weather API data.",
        technologies: &["JavaScript", "HTML/CSS", "OpenWeather API"],
        image: "/weather app image.png",
        demo_url: "https://example.com/demo3",
        github_url: "https://github.com/username/project3",
    },
    ProjectEntry {
        id: 4,
        title: "Expense Tracker System",
        description: "A web-based expense tracker application that helps users manage their income, expenses, and budgets effectively, with features like user registration, transaction logging, and financial reports",
        technologies: &["HTML", "CSS", "JavaScript", "PHP", "MySQL"],
        image: "/expensetracker.png",
        demo_url: "https://financetracking.page.gd/",
        github_url: "https://github.com/devderrckshema/Expense-Tracker-System",
    },
];

// the first project gets the large card at the top of the page, the rest go in the grid
pub fn featured_project() -> Option<&'static ProjectEntry> {
    PROJECTS.first()
}

pub fn grid_projects() -> &'static [ProjectEntry] {
    PROJECTS.get(1..).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(technologies: &'static [&'static str], image: &'static str) -> ProjectEntry {
        ProjectEntry {
            id: 99,
            title: "t",
            description: "d",
            technologies,
            image,
            demo_url: "",
            github_url: "",
        }
    }

    #[test]
    fn long_tag_lists_are_cut_with_count() {
        let summary = entry(&["a", "b", "c", "d", "e"], "").tag_summary(GRID_TAG_LIMIT);

        assert_eq!(summary.shown, &["a", "b", "c"]);
        assert_eq!(summary.overflow, Some(2));
    }

    #[test]
    fn short_tag_lists_have_no_overflow() {
        let exact = entry(&["a", "b", "c"], "");
        assert_eq!(exact.tag_summary(GRID_TAG_LIMIT).shown.len(), 3);
        assert_eq!(exact.tag_summary(GRID_TAG_LIMIT).overflow, None);

        let empty = entry(&[], "");
        assert!(empty.tag_summary(GRID_TAG_LIMIT).shown.is_empty());
        assert_eq!(empty.tag_summary(GRID_TAG_LIMIT).overflow, None);
    }

    #[test]
    fn missing_image_uses_numbered_placeholder() {
        assert_eq!(entry(&[], "").image_src(0), "/project-placeholder-1.jpg");
        assert_eq!(entry(&[], "").image_src(2), "/project-placeholder-3.jpg");
        assert_eq!(entry(&[], "/shot.png").image_src(2), "/shot.png");
    }

    #[test]
    fn featured_is_first_and_grid_is_the_rest() {
        assert_eq!(featured_project().map(|p| p.id), Some(1));
        assert_eq!(
            grid_projects().iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn project_ids_are_unique() {
        let mut ids: Vec<_> = PROJECTS.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), PROJECTS.len());
    }
}
