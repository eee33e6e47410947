//! Role profiles — the required degrees and skills configured per job role.
//!
//! The catalog is an immutable value built once at startup and handed to the
//! ranker on every call. Lookups for unknown roles never fail; they see empty
//! requirement lists.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Required degree and skill keywords for one job role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleProfile {
    pub name: String,
    pub degrees: Vec<String>,
    pub skills: Vec<String>,
}

impl RoleProfile {
    pub fn new(name: &str, degrees: &[&str], skills: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            degrees: degrees.iter().map(|d| d.to_string()).collect(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered, read-only table of role profiles keyed by role name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleCatalog {
    profiles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn new(profiles: Vec<RoleProfile>) -> Self {
        Self { profiles }
    }

    /// The built-in role table, in declaration order.
    pub fn builtin() -> Self {
        Self::new(vec![
            RoleProfile::new(
                "Graphic Designer",
                &["bachelor", "diploma"],
                &["photoshop", "illustrator", "typography"],
            ),
            RoleProfile::new(
                "UI/UX Designer",
                &["bachelor", "diploma"],
                &["figma", "adobe xd", "wireframing"],
            ),
            RoleProfile::new(
                "Interior Designer",
                &["bachelor", "diploma"],
                &["autocad", "3ds max", "rendering"],
            ),
            RoleProfile::new(
                "Fashion Designer",
                &["bachelor", "diploma"],
                &["textile", "pattern making", "fashion illustration"],
            ),
            RoleProfile::new(
                "Business Analyst",
                &["bachelor", "mba"],
                &["sql", "excel", "data visualization"],
            ),
            RoleProfile::new(
                "Marketing Manager",
                &["bachelor", "mba"],
                &["seo", "social media", "branding"],
            ),
            RoleProfile::new(
                "Software Engineer",
                &["bachelor", "master"],
                &["python", "java", "c++"],
            ),
            RoleProfile::new(
                "Data Scientist",
                &["bachelor", "master", "phd"],
                &["machine learning", "deep learning", "nlp"],
            ),
            RoleProfile::new(
                "AI Engineer",
                &["bachelor", "master"],
                &["tensorflow", "pytorch", "computer vision"],
            ),
            RoleProfile::new(
                "Cloud Engineer",
                &["bachelor", "master"],
                &["aws", "azure", "gcp"],
            ),
            RoleProfile::new(
                "Musician",
                &["diploma", "bachelor"],
                &["composition", "instrument", "music production"],
            ),
            RoleProfile::new(
                "Film Director",
                &["bachelor", "master"],
                &["screenwriting", "cinematography", "storytelling"],
            ),
            RoleProfile::new(
                "Football Coach",
                &["diploma", "bachelor"],
                &["strategy", "fitness training", "team management"],
            ),
            RoleProfile::new(
                "Mathematics Teacher",
                &["bachelor", "master"],
                &["calculus", "algebra", "geometry"],
            ),
        ])
    }

    /// Parses a JSON array of `{"name", "degrees", "skills"}` objects.
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<RoleProfile> =
            serde_json::from_str(json).context("Role profile table is not valid JSON")?;
        Ok(Self::new(profiles))
    }

    /// Loads a role table from a JSON file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read role profiles from {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn get(&self, role: &str) -> Option<&RoleProfile> {
        self.profiles.iter().find(|p| p.name == role)
    }

    /// Known role names, in declaration order.
    pub fn role_names(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.name.as_str()).collect()
    }

    /// Required degrees for `role`; empty for unknown roles.
    pub fn degrees_for(&self, role: &str) -> &[String] {
        self.get(role).map(|p| p.degrees.as_slice()).unwrap_or(&[])
    }

    /// Required skills for `role`; empty for unknown roles.
    pub fn skills_for(&self, role: &str) -> &[String] {
        self.get(role).map(|p| p.skills.as_slice()).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_software_engineer_profile() {
        let catalog = RoleCatalog::builtin();
        let profile = catalog.get("Software Engineer").unwrap();
        assert_eq!(profile.degrees, vec!["bachelor", "master"]);
        assert_eq!(profile.skills, vec!["python", "java", "c++"]);
    }

    #[test]
    fn test_role_names_keep_declaration_order() {
        let catalog = RoleCatalog::builtin();
        let names = catalog.role_names();
        assert_eq!(names.len(), 14);
        assert_eq!(names[0], "Graphic Designer");
        assert_eq!(names[13], "Mathematics Teacher");
    }

    #[test]
    fn test_unknown_role_yields_empty_requirements() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.get("Astronaut").is_none());
        assert!(catalog.degrees_for("Astronaut").is_empty());
        assert!(catalog.skills_for("Astronaut").is_empty());
    }

    #[test]
    fn test_role_lookup_is_exact() {
        let catalog = RoleCatalog::builtin();
        assert!(catalog.get("software engineer").is_none());
    }

    #[test]
    fn test_from_json_parses_profiles() {
        let json = r#"[
            {"name": "Chef", "degrees": ["culinary diploma"], "skills": ["baking", "plating"]}
        ]"#;
        let catalog = RoleCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.skills_for("Chef"), ["baking", "plating"]);
    }

    #[test]
    fn test_from_json_rejects_malformed_input() {
        assert!(RoleCatalog::from_json("{not json").is_err());
        assert!(RoleCatalog::from_json(r#"[{"name": "Chef"}]"#).is_err());
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Pilot", "degrees": ["bachelor"], "skills": ["navigation"]}}]"#
        )
        .unwrap();

        let catalog = RoleCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.role_names(), vec!["Pilot"]);
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let err = RoleCatalog::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read role profiles"));
    }
}
