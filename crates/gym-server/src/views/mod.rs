//! Server-rendered HTML pages

pub mod errors;
pub mod members;
pub mod pages;

use crate::extractors::FlashMessage;
use std::fmt::Write;

/// Escape text for interpolation into HTML content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body with the shared navigation and any pending flashes
pub fn layout(title: &str, flashes: &[FlashMessage], body: &str) -> String {
    let mut notices = String::new();
    for flash in flashes {
        let _ = write!(
            notices,
            r#"<div class="flash flash-{}">{}</div>"#,
            flash.level.as_str(),
            escape(&flash.text)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="/static/styles.css">
</head>
<body>
<nav>
<a href="/">Inicio</a>
<a href="/info">Info</a>
<a href="/servicios">Servicios</a>
<a href="/inscripcion">Inscripción</a>
<a href="/usuarios">Usuarios</a>
<a href="/nuevo_usuario">Nuevo usuario</a>
</nav>
{notices}
<main>
{body}
</main>
</body>
</html>
"#,
        title = escape(title),
        notices = notices,
        body = body,
    )
}
