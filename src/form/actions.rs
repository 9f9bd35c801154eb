/// User-level events the controller reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    SelectCompany(String),
    SetValue { label: String, value: String },
    Submit,
}
