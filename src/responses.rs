//! JSON:API envelope types returned by the Snyk REST API.

use serde::Deserialize;

/// Top-level document: a page of resources plus navigation links.
#[derive(Deserialize, Debug)]
pub struct Document<A> {
    pub data: Vec<Resource<A>>,
    #[serde(default)]
    pub links: Option<Links>,
}

/// A single resource object; `attributes` carries the payload.
#[derive(Deserialize, Debug)]
pub struct Resource<A> {
    #[allow(dead_code)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    #[allow(dead_code)]
    pub kind: Option<String>,
    pub attributes: A,
}

/// Pagination links. Only `next` is inspected.
#[derive(Deserialize, Debug, Default)]
pub struct Links {
    pub next: Option<String>,
}

impl<A> Document<A> {
    pub fn has_next_page(&self) -> bool {
        self.links
            .as_ref()
            .and_then(|links| links.next.as_deref())
            .is_some_and(|next| !next.is_empty())
    }

    pub fn into_attributes(self) -> Vec<A> {
        self.data.into_iter().map(|r| r.attributes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Project;

    #[test]
    fn test_parse_projects_document() {
        let body = r#"{
            "jsonapi": { "version": "1.0" },
            "data": [
                { "id": "a1", "type": "project", "attributes": { "name": "org/api", "type": "npm" } },
                { "id": "b2", "type": "project", "attributes": { "name": "org/web" } }
            ],
            "links": { "self": "/orgs/x/projects" }
        }"#;

        let doc: Document<Project> = serde_json::from_str(body).unwrap();
        assert!(!doc.has_next_page());
        assert_eq!(doc.data[0].id.as_deref(), Some("a1"));

        let names: Vec<String> = doc.into_attributes().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["org/api", "org/web"]);
    }

    #[test]
    fn test_next_link_detected() {
        let body = r#"{
            "data": [],
            "links": { "next": "/orgs/x/projects?starting_after=abc" }
        }"#;

        let doc: Document<Project> = serde_json::from_str(body).unwrap();
        assert!(doc.has_next_page());
    }

    #[test]
    fn test_bare_array_rejected() {
        let result = serde_json::from_str::<Document<Project>>(r#"[{"name": "org/api"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_name_rejected() {
        let body = r#"{ "data": [ { "id": "a1", "attributes": { "type": "npm" } } ] }"#;
        assert!(serde_json::from_str::<Document<Project>>(body).is_err());
    }
}
