//! Member listing and forms

use super::{escape, layout};
use crate::extractors::FlashMessage;
use gym_types::Member;
use std::fmt::Write;

pub fn list(members: &[Member], flashes: &[FlashMessage]) -> String {
    let mut rows = String::new();
    for m in members {
        let _ = write!(
            rows,
            r#"<tr data-dni="{id}">
<td>{id}</td><td>{name}</td><td>{email}</td><td>{phone}</td><td>{age}</td>
<td>{gender}</td><td>{plan}</td><td>{notes}</td><td class="status">{status}</td>
<td><a href="/editar_usuario/{id}">Editar</a> <a href="/eliminar_usuario/{id}">Eliminar</a></td>
</tr>
"#,
            id = m.id,
            name = escape(&m.name),
            email = escape(m.email.as_deref().unwrap_or("")),
            phone = m.phone,
            age = m.age,
            gender = escape(&m.gender),
            plan = escape(&m.plan),
            notes = escape(m.notes.as_deref().unwrap_or("")),
            status = escape(&m.status),
        );
    }

    let body = if members.is_empty() {
        r#"<h1>Usuarios</h1>
<p>No hay usuarios registrados.</p>"#
            .to_string()
    } else {
        format!(
            r#"<h1>Usuarios</h1>
<table>
<thead><tr><th>DNI</th><th>Nombre</th><th>Correo</th><th>Teléfono</th><th>Edad</th><th>Género</th><th>Plan</th><th>Detalles</th><th>Estado</th><th></th></tr></thead>
<tbody>
{rows}</tbody>
</table>"#
        )
    };

    layout("Usuarios", flashes, &body)
}

/// Blank registration form posting to `action`
pub fn create_form(title: &str, action: &str, flashes: &[FlashMessage]) -> String {
    let body = format!(
        r#"<h1>{title}</h1>
<form method="post" action="{action}">
<label>DNI <input type="number" name="dni" required></label>
<label>Nombre <input type="text" name="nombre" maxlength="100" required></label>
<label>Correo <input type="email" name="correo" maxlength="100"></label>
<label>Teléfono <input type="number" name="telefono" required></label>
<label>Edad <input type="number" name="edad" required></label>
<label>Género <input type="text" name="genero" maxlength="10" required></label>
<label>Plan <input type="text" name="plan" maxlength="20" required></label>
<label>Detalles <textarea name="detalles" maxlength="200"></textarea></label>
<button type="submit">Guardar</button>
</form>"#,
        title = escape(title),
        action = escape(action),
    );

    layout(title, flashes, &body)
}

/// Edit form pre-filled with the stored record
pub fn edit_form(member: &Member, flashes: &[FlashMessage]) -> String {
    let body = format!(
        r#"<h1>Editar usuario</h1>
<form method="post" action="/editar_usuario/{id}">
<label>DNI <input type="number" name="dni" value="{id}" readonly></label>
<label>Nombre <input type="text" name="nombre" value="{name}" maxlength="100" required></label>
<label>Correo <input type="email" name="correo" value="{email}" maxlength="100"></label>
<label>Teléfono <input type="number" name="telefono" value="{phone}" required></label>
<label>Edad <input type="number" name="edad" value="{age}" required></label>
<label>Género <input type="text" name="genero" value="{gender}" maxlength="10" required></label>
<label>Plan <input type="text" name="plan" value="{plan}" maxlength="20" required></label>
<label>Detalles <textarea name="detalles" maxlength="200">{notes}</textarea></label>
<label>Estado <input type="text" name="usuario_activo" value="{status}" maxlength="10" required></label>
<button type="submit">Guardar cambios</button>
</form>"#,
        id = member.id,
        name = escape(&member.name),
        email = escape(member.email.as_deref().unwrap_or("")),
        phone = member.phone,
        age = member.age,
        gender = escape(&member.gender),
        plan = escape(&member.plan),
        notes = escape(member.notes.as_deref().unwrap_or("")),
        status = escape(&member.status),
    );

    layout("Editar usuario", flashes, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> Member {
        Member {
            id: 12345678,
            name: "Ana <García>".to_string(),
            email: Some("ana@example.com".to_string()),
            phone: 5551234,
            age: 30,
            gender: "F".to_string(),
            plan: "mensual".to_string(),
            notes: None,
            status: "active".to_string(),
        }
    }

    #[test]
    fn test_list_escapes_and_links() {
        let html = list(&[member()], &[]);
        assert!(html.contains("Ana &lt;García&gt;"));
        assert!(!html.contains("Ana <García>"));
        assert!(html.contains(r#"href="/editar_usuario/12345678""#));
        assert!(html.contains(r#"href="/eliminar_usuario/12345678""#));
        assert_eq!(html.matches(r#"data-dni="12345678""#).count(), 1);
    }

    #[test]
    fn test_empty_list() {
        let html = list(&[], &[]);
        assert!(html.contains("No hay usuarios registrados."));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let html = edit_form(&member(), &[]);
        assert!(html.contains(r#"action="/editar_usuario/12345678""#));
        assert!(html.contains(r#"name="usuario_activo" value="active""#));
        assert!(html.contains(r#"name="correo" value="ana@example.com""#));
    }

    #[test]
    fn test_create_form_posts_to_action() {
        let html = create_form("Inscripción", "/inscripcion", &[]);
        assert!(html.contains(r#"action="/inscripcion""#));
        assert!(html.contains(r#"name="detalles""#));
    }
}
