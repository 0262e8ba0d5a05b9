//! Seed command - registers every built-in template with the components API.

use crate::domain::{AppError, ComponentTemplate};
use crate::ports::ComponentsClient;

/// Aggregate result of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Number of templates the service accepted.
    pub succeeded: usize,
    /// Number of templates attempted.
    pub total: usize,
}

impl SeedReport {
    /// Whether every template was accepted.
    pub fn is_complete(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Execute the seed command.
///
/// Templates are sent strictly in list order, one blocking request each.
/// A failed item is reported and skipped; the batch always runs to the
/// end, and per-item failures only show up in the report counts.
pub fn execute<C: ComponentsClient>(client: &C, templates: &[ComponentTemplate]) -> SeedReport {
    println!("🚀 Seeding landing page component templates...");
    println!("🔗 API endpoint: {}", client.endpoint());

    let mut succeeded = 0;
    let total = templates.len();

    for template in templates {
        println!();
        println!("📦 Adding: {} (type: {})", template.name, template.kind);

        match client.create_component(template) {
            Ok(created) => {
                println!("✅ Added: {} (id: {})", template.name, created.id);
                succeeded += 1;
            }
            Err(AppError::Api { status, body }) => {
                println!("❌ Failed to add: {} - status {}", template.name, status);
                println!("   Response: {}", body);
            }
            Err(err) => {
                println!("❌ Error adding {}: {}", template.name, err);
            }
        }
    }

    println!();
    println!("🎉 Done! Added {}/{} components", succeeded, total);

    if succeeded < total {
        println!("⚠️  Some components failed to add. Review the errors above.");
    }

    SeedReport { succeeded, total }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use serde_json::json;

    use super::*;
    use crate::domain::{ComponentsApiConfig, builtin_templates};
    use crate::ports::CreatedComponent;

    /// Client double that replays a fixed sequence of outcomes and records
    /// which templates were attempted.
    struct ScriptedClient {
        outcomes: RefCell<Vec<Result<CreatedComponent, AppError>>>,
        attempted: RefCell<Vec<String>>,
    }

    impl ScriptedClient {
        fn new(outcomes: Vec<Result<CreatedComponent, AppError>>) -> Self {
            Self { outcomes: RefCell::new(outcomes), attempted: RefCell::new(Vec::new()) }
        }

        fn attempted(&self) -> Vec<String> {
            self.attempted.borrow().clone()
        }
    }

    impl ComponentsClient for ScriptedClient {
        fn create_component(
            &self,
            template: &ComponentTemplate,
        ) -> Result<CreatedComponent, AppError> {
            self.attempted.borrow_mut().push(template.kind.clone());
            self.outcomes.borrow_mut().remove(0)
        }

        fn endpoint(&self) -> String {
            "http://localhost:9003/api/landing-pages/components".to_string()
        }
    }

    fn template(kind: &str) -> ComponentTemplate {
        ComponentTemplate {
            name: format!("{kind} template"),
            kind: kind.to_string(),
            config: json!({ "title": kind }),
            preview_image: None,
            is_system: true,
        }
    }

    fn ok(id: &str) -> Result<CreatedComponent, AppError> {
        Ok(CreatedComponent { id: id.to_string() })
    }

    #[test]
    fn all_successes_produce_a_complete_report() {
        let client = ScriptedClient::new(vec![ok("1"), ok("2"), ok("3")]);
        let templates = vec![template("footer"), template("promo"), template("copyright")];

        let report = execute(&client, &templates);

        assert_eq!(report, SeedReport { succeeded: 3, total: 3 });
        assert!(report.is_complete());
    }

    #[test]
    fn failures_are_counted_but_not_fatal() {
        let client = ScriptedClient::new(vec![
            ok("1"),
            Err(AppError::Api { status: 500, body: "boom".to_string() }),
            Err(AppError::Transport("connection refused".to_string())),
            ok("4"),
        ]);
        let templates = vec![
            template("footer"),
            template("promo"),
            template("copyright"),
            template("facilities"),
        ];

        let report = execute(&client, &templates);

        assert_eq!(report, SeedReport { succeeded: 2, total: 4 });
        assert!(!report.is_complete());
    }

    #[test]
    fn every_template_is_attempted_in_order_despite_failures() {
        let client = ScriptedClient::new(vec![
            Err(AppError::Transport("dns failure".to_string())),
            Err(AppError::Api { status: 400, body: "bad".to_string() }),
            ok("3"),
        ]);
        let templates = vec![template("footer"), template("promo"), template("copyright")];

        execute(&client, &templates);

        assert_eq!(client.attempted(), vec!["footer", "promo", "copyright"]);
    }

    #[test]
    fn seeds_every_builtin_template_against_a_mock_service() {
        let templates = builtin_templates();
        let mut server = mockito::Server::new();

        // One mock per template, each matching only that template's exact
        // serialized body. All of them asserting proves one request per
        // catalog entry with an unaltered payload.
        let mocks: Vec<_> = templates
            .iter()
            .enumerate()
            .map(|(i, t)| {
                server
                    .mock("POST", "/api/landing-pages/components")
                    .match_body(mockito::Matcher::Exact(serde_json::to_string(t).unwrap()))
                    .with_status(200)
                    .with_body(format!(r#"{{"id": "comp-{}", "success": true}}"#, i + 1))
                    .expect(1)
                    .create()
            })
            .collect();

        let config = ComponentsApiConfig { base_url: server.url(), timeout_secs: 5 };
        let report = crate::seed_with_config(&config).unwrap();

        assert_eq!(report, SeedReport { succeeded: 11, total: 11 });
        for mock in mocks {
            mock.assert();
        }
    }
}
