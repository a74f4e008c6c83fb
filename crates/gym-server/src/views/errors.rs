use super::{escape, layout};

pub fn not_found(detail: &str) -> String {
    layout(
        "No encontrado",
        &[],
        &format!(
            r#"<h1>No encontrado</h1>
<p>{}</p>
<p><a href="/usuarios">Volver al listado</a></p>"#,
            escape(detail)
        ),
    )
}

pub fn internal() -> String {
    layout(
        "Error",
        &[],
        r#"<h1>Error interno</h1>
<p>Ocurrió un error inesperado. Por favor, inténtelo nuevamente.</p>"#,
    )
}
