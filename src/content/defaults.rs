use super::repo_types::{ContactInfo, PhotoSet, Project, NO_LINK};

pub const DEFAULT_ADMIN_PASSWORD: &str = "Tema36Tar";

pub const DEFAULT_PROFILE_PHOTO: &str = "images/photo.jpg";
pub const DEFAULT_ABOUT_PHOTO: &str = "images/photo-about.jpg";

pub const DEFAULT_EMAIL: &str = "hello@portfolio.com";
pub const DEFAULT_PHONE: &str = "8 925 987-15-81";

pub fn photos() -> PhotoSet {
    PhotoSet {
        profile: DEFAULT_PROFILE_PHOTO.into(),
        about: DEFAULT_ABOUT_PHOTO.into(),
    }
}

pub fn contacts() -> ContactInfo {
    ContactInfo {
        email: DEFAULT_EMAIL.into(),
        phone: DEFAULT_PHONE.into(),
    }
}

fn seed(id: i64, title: &str, description: &str, category: &str, image: u32, tech: &[&str]) -> Project {
    Project {
        id,
        title: title.into(),
        description: description.into(),
        category: category.into(),
        image: format!("https://picsum.photos/400/300?random={image}"),
        technologies: tech.iter().map(|t| t.to_string()).collect(),
        live_url: NO_LINK.into(),
        github_url: NO_LINK.into(),
    }
}

fn shared_seed() -> Vec<Project> {
    vec![
        seed(
            1,
            "Online Store",
            "A modern e-commerce solution with a seamless shopping experience and secure payment integration.",
            "web",
            3,
            &["React", "Node.js", "MongoDB"],
        ),
        seed(
            2,
            "Mobile Banking App",
            "A secure, intuitive mobile banking app with advanced personal finance features.",
            "mobile",
            4,
            &["React Native", "Firebase", "Stripe"],
        ),
        seed(
            3,
            "Portfolio Website",
            "An elegant portfolio site for showcasing creative work with smooth animations.",
            "design",
            5,
            &["HTML", "CSS", "JavaScript"],
        ),
    ]
}

/// Seed written back by the admin panel the first time it finds no projects.
pub fn admin_projects() -> Vec<Project> {
    shared_seed()
}

/// Seed shown by the public site when it finds no usable projects.
pub fn public_projects() -> Vec<Project> {
    let mut all = shared_seed();
    all.extend([
        seed(
            4,
            "Task Management Tool",
            "A collaborative task management platform with real-time updates and team features.",
            "web",
            6,
            &["Vue.js", "Express", "PostgreSQL"],
        ),
        seed(
            5,
            "Weather Dashboard",
            "An interactive weather dashboard with rich data visualisation and location-based forecasts.",
            "web",
            7,
            &["JavaScript", "Chart.js", "API Integration"],
        ),
        seed(
            6,
            "Social Platform",
            "A social platform with real-time messaging and content sharing.",
            "web",
            8,
            &["React", "Socket.io", "MongoDB"],
        ),
        seed(
            7,
            "Fitness App",
            "A mobile app for tracking workouts and nutrition with personalised recommendations.",
            "mobile",
            9,
            &["Flutter", "Firebase", "Health API"],
        ),
        seed(
            8,
            "SaaS Landing Page",
            "A high-conversion landing page for a SaaS product with a responsive layout.",
            "design",
            10,
            &["HTML", "Tailwind CSS", "JavaScript"],
        ),
    ]);
    all
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_are_valid_with_unique_ids() {
        for list in [admin_projects(), public_projects()] {
            assert!(list.iter().all(Project::is_valid));
            let mut ids: Vec<_> = list.iter().map(|p| p.id).collect();
            ids.dedup();
            assert_eq!(ids.len(), list.len());
        }
        assert_eq!(admin_projects().len(), 3);
        assert_eq!(public_projects().len(), 8);
    }
}
