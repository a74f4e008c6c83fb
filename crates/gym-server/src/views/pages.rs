//! Static pages

use super::layout;
use crate::extractors::FlashMessage;

pub fn index(flashes: &[FlashMessage]) -> String {
    layout(
        "Gimnasio",
        flashes,
        r#"<h1>Bienvenido al gimnasio</h1>
<p>Entrena con nosotros: sala de musculación, clases grupales y planes a tu medida.</p>
<p><a href="/inscripcion">Inscríbete hoy</a></p>"#,
    )
}

pub fn info(flashes: &[FlashMessage]) -> String {
    layout(
        "Información",
        flashes,
        r#"<h1>Información</h1>
<p>Abrimos de lunes a sábado. Para inscribirte necesitas tu DNI y un teléfono de contacto.</p>"#,
    )
}

pub fn services(flashes: &[FlashMessage]) -> String {
    layout(
        "Servicios",
        flashes,
        r#"<h1>Servicios</h1>
<ul>
<li>Sala de musculación</li>
<li>Clases grupales</li>
<li>Entrenamiento personalizado</li>
</ul>
<p>Planes disponibles: mensual, trimestral y anual.</p>"#,
    )
}
