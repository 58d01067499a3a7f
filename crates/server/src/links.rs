//! Presentational hypermedia decoration for single-record responses.
//!
//! A static set of relative link descriptors is appended next to the
//! record's own fields; list responses stay undecorated.

use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
}

/// The record itself, its delete target, and the collection it lives in.
pub fn resource_links(base: &str, id: Uuid) -> Vec<Link> {
    vec![
        Link { rel: "self", href: format!("/{base}/{id}") },
        Link { rel: "delete", href: format!("/{base}/{id}") },
        Link { rel: "contents", href: format!("/{base}") },
    ]
}

/// Wrapper flattening the record next to its `links` array.
#[derive(Debug, Clone, Serialize)]
pub struct Linked<T: Serialize> {
    #[serde(flatten)]
    pub record: T,
    pub links: Vec<Link>,
}

impl<T: Serialize> Linked<T> {
    pub fn new(base: &str, id: Uuid, record: T) -> Self {
        Self { links: resource_links(base, id), record }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Record {
        name: &'static str,
    }

    #[test]
    fn links_sit_next_to_flattened_record_fields() {
        let id = Uuid::nil();
        let json =
            serde_json::to_value(Linked::new("company", id, Record { name: "Acme" })).unwrap();

        assert_eq!(json["name"], "Acme");
        let rels: Vec<&str> =
            json["links"].as_array().unwrap().iter().map(|l| l["rel"].as_str().unwrap()).collect();
        assert_eq!(rels, vec!["self", "delete", "contents"]);
        assert_eq!(json["links"][0]["href"], format!("/company/{id}"));
        assert_eq!(json["links"][2]["href"], "/company");
    }
}
