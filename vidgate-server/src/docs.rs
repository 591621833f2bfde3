//! API docs page with pinned swagger-ui assets
//!
//! The default swagger CDN is unreachable from mainland China, so the page is
//! rendered with both assets pinned to a mirror.

use axum::response::Html;

pub const SWAGGER_JS_URL: &str =
    "https://cdn.staticfile.org/swagger-ui/5.6.2/swagger-ui-bundle.min.js";
pub const SWAGGER_CSS_URL: &str = "https://cdn.staticfile.org/swagger-ui/5.6.2/swagger-ui.min.css";

/// Serve the swagger-ui page
pub async fn swagger_ui() -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head>
<link type="text/css" rel="stylesheet" href="{SWAGGER_CSS_URL}">
<title>vidgate - Swagger UI</title>
</head>
<body>
<div id="swagger-ui"></div>
<script src="{SWAGGER_JS_URL}"></script>
<script>
const ui = SwaggerUIBundle({{
    url: '/openapi.json',
    dom_id: '#swagger-ui',
    presets: [SwaggerUIBundle.presets.apis, SwaggerUIBundle.SwaggerUIStandalonePreset],
    layout: 'BaseLayout',
    deepLinking: true
}})
</script>
</body>
</html>"#
    ))
}
