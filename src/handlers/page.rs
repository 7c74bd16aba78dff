use axum::response::Html;

/// Minimal shell; the dashboard assets live under `/static`.
const INDEX_HTML: &str = r#"<!doctype html>
<html lang="id">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>SahamView - Info Saham Indonesia</title>
    <link rel="stylesheet" href="/static/css/style.css" />
  </head>
  <body>
    <div id="app">
      <h1>SahamView</h1>
      <p>Dashboard informasi pasar saham Indonesia.</p>
    </div>
    <script src="/static/js/app.js"></script>
  </body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
