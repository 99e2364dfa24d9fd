//! Built-in skill catalogue and tag suggestions

/// Skill tags offered as suggestions while tagging a week
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python", "SQL", "R", "JavaScript", "TypeScript", "React", "Node.js", "API Design",
    "Data Analysis", "Statistics", "Machine Learning", "Testing", "Automation", "Cloud", "AWS",
    "GCP", "Azure", "CI/CD", "Git", "FEM", "CAD", "MedTech", "Design Controls", "Risk Analysis",
    "Validation", "Packaging", "Sterilization",
    "Leadership", "Strategy", "Project Management", "Program Management",
    "Stakeholder Management", "Cross-functional Collaboration", "Mentoring", "Facilitation",
    "Roadmapping", "Prioritization",
    "Communication", "Presentation", "Problem Solving", "Adaptability", "Teamwork",
    "Time Management", "Conflict Resolution", "Ownership", "Attention to Detail",
];

/// Maximum number of suggestions returned for a draft
pub const MAX_SUGGESTIONS: usize = 6;

/// Catalogue tags containing `draft` (case-insensitive) that are not already
/// tagged, in catalogue order. A blank draft suggests nothing.
pub fn suggest<'a>(draft: &str, catalogue: &[&'a str], existing: &[String]) -> Vec<&'a str> {
    let needle = draft.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    catalogue
        .iter()
        .copied()
        .filter(|s| s.to_lowercase().contains(&needle))
        .filter(|s| !existing.iter().any(|e| e == s))
        .take(MAX_SUGGESTIONS)
        .collect()
}
