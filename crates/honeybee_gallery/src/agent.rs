//! Programmatic access descriptors
//!
//! The showcase advertises a read-only JSON API over its catalogs. Nothing is
//! served from here: this module describes the endpoints and renders the
//! response each would return from the live catalogs, along with the
//! configuration snippets agents copy to connect.

use crate::catalogs::Catalogs;
use crate::error::{GalleryError, Result};
use honeybee_core::{AnimationCategory, GradientCategory};
use serde::Serialize;
use serde_json::json;

pub const DEFAULT_API_BASE: &str = "https://ui-hub.dev";

const API_PREFIX: &str = "/api/v1";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

pub const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method: "GET",
        path: "/api/v1/animations",
        description: "Get all animation effects",
    },
    Endpoint {
        method: "GET",
        path: "/api/v1/gradients",
        description: "Get all gradient styles",
    },
    Endpoint {
        method: "GET",
        path: "/api/v1/components/{id}",
        description: "Get specific component by ID",
    },
];

#[derive(Serialize)]
struct AnimationSummary {
    id: &'static str,
    name: &'static str,
    category: AnimationCategory,
    code: &'static str,
}

#[derive(Serialize)]
struct GradientSummary {
    id: &'static str,
    name: &'static str,
    css: &'static str,
    category: GradientCategory,
}

#[derive(Serialize)]
struct Component {
    id: &'static str,
    name: &'static str,
    code: &'static str,
    dependencies: &'static [&'static str],
}

/// Which endpoint a request path resolves to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route<'a> {
    Animations,
    Gradients,
    Component(&'a str),
}

impl<'a> Route<'a> {
    /// Match `/api/v1/...`, ignoring any query string and trailing slash
    pub fn parse(path: &'a str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        let rest = path.trim_end_matches('/').strip_prefix(API_PREFIX)?;
        match rest {
            "/animations" => Some(Route::Animations),
            "/gradients" => Some(Route::Gradients),
            _ => rest
                .strip_prefix("/components/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(Route::Component),
        }
    }
}

/// Agent-facing view of the catalogs
#[derive(Debug, Clone)]
pub struct AgentAccess<'a> {
    catalogs: &'a Catalogs,
    base_url: String,
}

impl<'a> AgentAccess<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self::with_base_url(catalogs, DEFAULT_API_BASE)
    }

    pub fn with_base_url(catalogs: &'a Catalogs, base_url: impl Into<String>) -> Self {
        Self {
            catalogs,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint_url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    /// The response body a GET on `path` returns, pretty-printed
    pub fn respond(&self, path: &str) -> Result<String> {
        let route =
            Route::parse(path).ok_or_else(|| GalleryError::UnknownEndpoint(path.to_string()))?;
        tracing::debug!(?route, "rendering agent response");

        let body = match route {
            Route::Animations => {
                let animations: Vec<AnimationSummary> = self
                    .catalogs
                    .animations
                    .items()
                    .iter()
                    .map(|demo| AnimationSummary {
                        id: demo.id,
                        name: demo.name,
                        category: demo.category,
                        code: demo.code,
                    })
                    .collect();
                json!({ "animations": animations })
            }
            Route::Gradients => {
                let gradients: Vec<GradientSummary> = self
                    .catalogs
                    .gradients
                    .items()
                    .iter()
                    .map(|gradient| GradientSummary {
                        id: gradient.id,
                        name: gradient.name,
                        css: gradient.css,
                        category: gradient.category,
                    })
                    .collect();
                json!({ "gradients": gradients })
            }
            Route::Component(id) => {
                let component =
                    self.catalogs
                        .components
                        .get(id)
                        .ok_or_else(|| GalleryError::UnknownItem {
                            catalog: "components",
                            id: id.to_string(),
                        })?;
                serde_json::to_value(Component {
                    id: component.id,
                    name: component.name,
                    code: component.code,
                    dependencies: component.dependencies,
                })?
            }
        };
        Ok(serde_json::to_string_pretty(&body)?)
    }

    /// System prompt text describing the available resources
    pub fn instructions(&self) -> String {
        format!(
            "You have access to honeybee's design resources.

AVAILABLE RESOURCES:
1. Animation Effects - {animations} copy-paste ready animations
2. Gradient Gallery - {gradients} gradient styles
3. Component Library - {components} copy-paste components

HOW TO USE:
- When the user asks for animations, provide the exact code from {base}/api/v1/animations
- When the user asks for gradients, provide the CSS from {base}/api/v1/gradients
- When the user asks for a component, fetch it from {base}/api/v1/components/{{id}}
- All code is production-ready with TypeScript support
- Components use Framer Motion for animations

BEST PRACTICES:
- Always include proper imports
- Maintain accessibility standards
- Use the design tokens provided
- Ask if the user needs customization help",
            animations = self.catalogs.animations.len(),
            gradients = self.catalogs.gradients.len(),
            components = self.catalogs.components.len(),
            base = self.base_url,
        )
    }

    /// Agent manifest pointing at the endpoints
    pub fn agent_config(&self) -> Result<String> {
        let config = json!({
            "name": "ui-hub-assistant",
            "description": "UI Hub Design Assistant - Provides animations and gradients",
            "version": env!("CARGO_PKG_VERSION"),
            "endpoints": {
                "animations": format!("{}/api/v1/animations", self.base_url),
                "gradients": format!("{}/api/v1/gradients", self.base_url),
                "components": format!("{}/api/v1/components", self.base_url),
            },
            "capabilities": ["animation-effects", "gradient-styles", "component-library"],
            "auth": { "type": "bearer", "header": "X-API-Key" },
        });
        Ok(serde_json::to_string_pretty(&config)?)
    }

    /// MCP client configuration for the catalog server
    pub fn mcp_config(&self) -> Result<String> {
        let config = json!({
            "mcpServers": {
                "ui-hub": {
                    "command": "npx",
                    "args": ["-y", "@ui-hub/mcp-server"],
                    "env": { "UI_HUB_API_KEY": "your-api-key" },
                }
            }
        });
        Ok(serde_json::to_string_pretty(&config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::parse("/api/v1/animations"), Some(Route::Animations));
        assert_eq!(Route::parse("/api/v1/gradients/?page=2"), Some(Route::Gradients));
        assert_eq!(
            Route::parse("/api/v1/components/navigation-tabs"),
            Some(Route::Component("navigation-tabs"))
        );
        assert_eq!(Route::parse("/api/v1/components/"), None);
        assert_eq!(Route::parse("/api/v1/components/a/b"), None);
        assert_eq!(Route::parse("/api/v2/animations"), None);
    }

    #[test]
    fn test_list_responses_mirror_catalogs() {
        let catalogs = Catalogs::load().unwrap();
        let agent = AgentAccess::new(&catalogs);

        let body: Value =
            serde_json::from_str(&agent.respond("/api/v1/animations").unwrap()).unwrap();
        let animations = body["animations"].as_array().unwrap();
        assert_eq!(animations.len(), catalogs.animations.len());
        assert_eq!(animations[0]["id"], "apple-button");
        assert_eq!(animations[0]["category"], "Hover");

        let body: Value =
            serde_json::from_str(&agent.respond("/api/v1/gradients").unwrap()).unwrap();
        let gradients = body["gradients"].as_array().unwrap();
        assert_eq!(gradients.len(), catalogs.gradients.len());
        assert!(gradients.iter().all(|g| g["css"].is_string()));
    }

    #[test]
    fn test_component_response() {
        let catalogs = Catalogs::load().unwrap();
        let agent = AgentAccess::new(&catalogs);

        let body: Value =
            serde_json::from_str(&agent.respond("/api/v1/components/alert-toast").unwrap())
                .unwrap();
        assert_eq!(body["id"], "alert-toast");
        assert_eq!(body["name"], "Alert/Toast");
        assert_eq!(body["dependencies"], json!(["tailwindcss"]));
        assert!(body["code"].as_str().unwrap().contains("bg-green-500/10"));

        // Animation demos are not components
        assert!(matches!(
            agent.respond("/api/v1/components/stripe-magnetic"),
            Err(GalleryError::UnknownItem { catalog: "components", .. })
        ));
        assert!(matches!(
            agent.respond("/api/v1/components/nope"),
            Err(GalleryError::UnknownItem { .. })
        ));
        assert!(matches!(
            agent.respond("/health"),
            Err(GalleryError::UnknownEndpoint(_))
        ));
    }

    #[test]
    fn test_configs_use_base_url() {
        let catalogs = Catalogs::load().unwrap();
        let agent = AgentAccess::with_base_url(&catalogs, "http://localhost:4000/");
        assert_eq!(agent.base_url(), "http://localhost:4000");
        assert_eq!(
            agent.endpoint_url(&ENDPOINTS[0]),
            "http://localhost:4000/api/v1/animations"
        );

        let config: Value = serde_json::from_str(&agent.agent_config().unwrap()).unwrap();
        assert_eq!(
            config["endpoints"]["gradients"],
            "http://localhost:4000/api/v1/gradients"
        );

        let mcp: Value = serde_json::from_str(&agent.mcp_config().unwrap()).unwrap();
        assert_eq!(mcp["mcpServers"]["ui-hub"]["args"][1], "@ui-hub/mcp-server");

        let text = agent.instructions();
        assert!(text.contains("12 copy-paste ready animations"));
        assert!(text.contains("8 copy-paste components"));
        assert!(text.contains("http://localhost:4000/api/v1/components/{id}"));
        assert!(text.contains("http://localhost:4000/api/v1/gradients"));
    }
}
