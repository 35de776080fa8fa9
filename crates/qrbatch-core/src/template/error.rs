//! Invalid template definitions (built-in or from the config file).

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template name must not be empty")]
    EmptyName,
    #[error("template \"{0}\" declares no fields")]
    NoFields(String),
    #[error("template \"{template}\" declares field \"{field}\" more than once")]
    DuplicateField { template: String, field: String },
    #[error("template \"{template}\": {role} \"{field}\" is not one of the declared fields")]
    UndeclaredField {
        template: String,
        role: &'static str,
        field: String,
    },
}
