//! Portfolio content (pure data).
//!
//! The built-in `Default` is the page copy the site ships with; a TOML
//! content file with the same shape replaces it wholesale.

use serde::Deserialize;

/// Everything the page displays, grouped by section.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portfolio {
    /// Hero section copy.
    pub profile: Profile,
    /// Work experience, most recent first.
    #[serde(default)]
    pub experience: Vec<Job>,
    /// Featured projects.
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Academic background, most recent first.
    #[serde(default)]
    pub education: Vec<Education>,
    /// Skill groups.
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    /// Footer contact details.
    pub contact: Contact,
}

/// Hero section copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Line revealed by the typewriter effect.
    pub headline: String,
    /// Paragraph under the headline.
    pub summary: String,
    /// Path of a downloadable resume, shown next to the call to action.
    #[serde(default)]
    pub resume: Option<String>,
}

/// A work experience card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    /// Role held.
    pub title: String,
    /// Employer.
    pub company: String,
    /// Free-form date range, e.g. "2022 - Present".
    pub period: String,
    /// What the role involved.
    pub description: String,
}

/// A featured project card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    /// Project name.
    pub title: String,
    /// One-paragraph summary.
    pub description: String,
    /// Technologies used, shown as a dotted list.
    #[serde(default)]
    pub tech: Vec<String>,
    /// External link, if the project is public.
    #[serde(default)]
    pub link: Option<String>,
}

/// An education card.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Education {
    /// School or university.
    pub institution: String,
    /// Free-form date range.
    pub period: String,
    /// Degree or diploma earned.
    pub degree: String,
    /// Focus areas and achievements.
    pub description: String,
    /// Only shown when present.
    #[serde(default)]
    pub gpa: Option<String>,
}

/// A skill category column.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SkillGroup {
    /// Group heading.
    pub category: String,
    /// Glyph drawn before the heading; empty for none.
    #[serde(default)]
    pub icon: String,
    /// Skills in display order.
    pub skills: Vec<String>,
}

/// Footer contact details.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// Contact address, shown in two footer columns.
    pub email: String,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// City or region.
    #[serde(default)]
    pub location: Option<String>,
    /// Copyright line at the very bottom.
    pub copyright: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            profile: Profile {
                name: "Lei Ieong Tam".to_string(),
                headline: "Frontend Web Developer".to_string(),
                summary: "Bachelor of Economics with Computer Programming diploma. \
                          Passionate about creating modern web applications using \
                          cutting-edge technologies and delivering exceptional user \
                          experiences."
                    .to_string(),
                resume: Some("/resume.pdf".to_string()),
            },
            experience: vec![
                Job {
                    title: "Frontend Developer".to_string(),
                    company: "未來巢科技 Futurenest".to_string(),
                    period: "12/2024 - Present".to_string(),
                    description: "Build frontend websites using Next.js and TailwindCSS \
                                  based on UI/UX designs from Figma. Integrate APIs using \
                                  Django Rest Framework and research suitable frameworks \
                                  for company needs."
                        .to_string(),
                },
                Job {
                    title: "Customer Service Officer".to_string(),
                    company: "Macau Light Rapid Transit (MLRT)".to_string(),
                    period: "2021 - 2023".to_string(),
                    description: "Optimized daily earnings by tracking and reconciling \
                                  revenue and expenses in Excel. Provided precise financial \
                                  performance and operation reports."
                        .to_string(),
                },
            ],
            projects: vec![
                Project {
                    title: "Peter Shop".to_string(),
                    description: "Full-stack e-commerce project with Next.js frontend, \
                                  Django backend, PostgreSQL database, and Cloudinary storage."
                        .to_string(),
                    tech: strings(&["Next.js", "Django", "PostgreSQL", "Vercel", "Google Cloud"]),
                    link: Some("https://www.petershop.shop/".to_string()),
                },
                Project {
                    title: "Plan Travel".to_string(),
                    description: "Travel planning app with drag-and-drop functionality, \
                                  Google Maps integration, and Auth.js authentication."
                        .to_string(),
                    tech: strings(&["Next.js", "PostgreSQL", "Prisma", "Google Maps API"]),
                    link: Some("https://www.theplantravel.com/".to_string()),
                },
            ],
            education: vec![
                Education {
                    institution: "Humber Polytechnic".to_string(),
                    period: "09/2023 – 08/2025 (expected)".to_string(),
                    degree: "Computer Programming".to_string(),
                    description: "Learning fundamental web application development \
                                  technologies. Studying object-oriented programming with \
                                  Java, database design, operating systems, and software \
                                  development principles."
                        .to_string(),
                    gpa: Some("91.5".to_string()),
                },
                Education {
                    institution: "Soochow University".to_string(),
                    period: "09/2015 – 01/2020".to_string(),
                    degree: "Bachelor of Economics".to_string(),
                    description: "Gained a deep understanding of economic principles, \
                                  including supply and demand, and statistics. Applied \
                                  Python for data analysis and interpretation."
                        .to_string(),
                    gpa: None,
                },
            ],
            skills: vec![
                SkillGroup {
                    category: "Frontend".to_string(),
                    icon: "🎨".to_string(),
                    skills: strings(&["HTML", "CSS", "React", "Next.js", "TailwindCSS", "TypeScript"]),
                },
                SkillGroup {
                    category: "Backend".to_string(),
                    icon: "🔧".to_string(),
                    skills: strings(&["Django", "Flask", "Node.js", "RESTful APIs"]),
                },
                SkillGroup {
                    category: "Database".to_string(),
                    icon: "🗄".to_string(),
                    skills: strings(&["PostgreSQL", "MySQL", "MongoDB", "Prisma ORM"]),
                },
                SkillGroup {
                    category: "Tools".to_string(),
                    icon: "🛠".to_string(),
                    skills: strings(&["Git", "Docker", "Ubuntu", "Linux"]),
                },
            ],
            contact: Contact {
                email: "leeli.petertam@gmail.com".to_string(),
                linkedin: Some("https://www.linkedin.com/in/leeli-peter/".to_string()),
                phone: Some("+1 (437) 855-9651".to_string()),
                location: Some("Toronto, ON".to_string()),
                copyright: "© 2024 Lei Ieong Tam. All rights reserved.".to_string(),
            },
        }
    }
}
