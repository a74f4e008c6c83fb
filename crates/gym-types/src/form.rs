//! HTML form payloads
//!
//! Field names follow the public form contract (`dni`, `nombre`, ...). Every
//! value arrives as text and is converted into the typed member records here.

use crate::member::{MemberChanges, NewMember};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors converting a submitted form into a member record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Field '{field}' is not a valid integer: {value:?}")]
    InvalidInteger { field: &'static str, value: String },
}

/// Registration form, shared by `/inscripcion` and `/nuevo_usuario`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemberForm {
    pub dni: String,
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    pub telefono: String,
    pub edad: String,
    pub genero: String,
    pub plan: String,
    #[serde(default)]
    pub detalles: String,
}

/// Edit form. A `dni` field, if submitted, is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditMemberForm {
    pub nombre: String,
    #[serde(default)]
    pub correo: String,
    pub telefono: String,
    pub edad: String,
    pub genero: String,
    pub plan: String,
    #[serde(default)]
    pub detalles: String,
    pub usuario_activo: String,
}

impl TryFrom<MemberForm> for NewMember {
    type Error = FormError;

    fn try_from(form: MemberForm) -> Result<Self, Self::Error> {
        Ok(NewMember {
            id: parse_integer("dni", &form.dni)?,
            name: form.nombre,
            email: non_blank(form.correo),
            phone: parse_integer("telefono", &form.telefono)?,
            age: parse_integer("edad", &form.edad)?,
            gender: form.genero,
            plan: form.plan,
            notes: non_blank(form.detalles),
        })
    }
}

impl TryFrom<EditMemberForm> for MemberChanges {
    type Error = FormError;

    fn try_from(form: EditMemberForm) -> Result<Self, Self::Error> {
        Ok(MemberChanges {
            name: form.nombre,
            email: non_blank(form.correo),
            phone: parse_integer("telefono", &form.telefono)?,
            age: parse_integer("edad", &form.edad)?,
            gender: form.genero,
            plan: form.plan,
            notes: non_blank(form.detalles),
            status: form.usuario_activo,
        })
    }
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, FormError> {
    value
        .trim()
        .parse()
        .map_err(|_| FormError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
