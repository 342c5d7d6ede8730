//! Declarative description of the login form's inputs

/// Identifies an input on the login form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display)]
pub enum FieldId {
    #[default]
    Username,
    Password,
}

/// How an input's value is displayed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    Text,
    Password,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub input_type: InputType,
    pub label: &'static str,
}

/// The login form's inputs, in display and focus order.
pub const LOGIN_FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        id: FieldId::Username,
        input_type: InputType::Text,
        label: "Username",
    },
    FieldDescriptor {
        id: FieldId::Password,
        input_type: InputType::Password,
        label: "Password",
    },
];

fn position(id: FieldId) -> usize {
    LOGIN_FIELDS
        .iter()
        .position(|field| field.id == id)
        .unwrap_or(0)
}

/// Field after `id`, wrapping around.
pub fn next_field(id: FieldId) -> FieldId {
    LOGIN_FIELDS[(position(id) + 1) % LOGIN_FIELDS.len()].id
}

/// Field before `id`, wrapping around.
pub fn previous_field(id: FieldId) -> FieldId {
    let len = LOGIN_FIELDS.len();
    LOGIN_FIELDS[(position(id) + len - 1) % len].id
}
